use chrono::{Datelike, NaiveDate};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Weekday names indexed by days from Sunday
pub const WEEKDAYS: [&str; 7] = [
    "星期日", "星期一", "星期二", "星期三", "星期四", "星期五", "星期六",
];

/// Shown in place of the lunar date when the provider can't be used
pub const LUNAR_UNAVAILABLE: &str = "农历数据加载失败";

/// Normalized description of a single day
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CalendarResult {
    pub date: String,
    pub weekday: String,
    pub lunar: String,
    pub jieqi: String,
    pub constellation: String,
}

impl CalendarResult {
    /// Everything that can be derived from the date alone.
    pub fn fallback(date: NaiveDate) -> Self {
        Self {
            date: display_date(date),
            weekday: weekday_name(date).to_string(),
            lunar: LUNAR_UNAVAILABLE.to_string(),
            jieqi: String::new(),
            constellation: String::new(),
        }
    }
}

/// The calendar endpoint's response body. `success` is false when
/// `data` was computed locally instead of coming from the provider.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CalendarEnvelope {
    pub success: bool,
    pub data: CalendarResult,
}

impl CalendarEnvelope {
    pub fn success(data: CalendarResult) -> Self {
        Self {
            success: true,
            data,
        }
    }

    pub fn fallback(date: NaiveDate) -> Self {
        Self {
            success: false,
            data: CalendarResult::fallback(date),
        }
    }
}

/// `2024年1月1日`, month and day are not padded
pub fn display_date(date: NaiveDate) -> String {
    format!("{}年{}月{}日", date.year(), date.month(), date.day())
}

pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_sunday() as usize]
}

// Provider payload. Every group and field is optional because the
// provider doesn't promise any of them. A group or field of the wrong
// JSON type reads as missing instead of failing the whole payload.

#[derive(Deserialize, Debug, Default)]
pub struct ProviderPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub yangli: Option<SolarDate>,
    #[serde(default, deserialize_with = "lenient")]
    pub nongli: Option<LunarDate>,
    #[serde(default, deserialize_with = "lenient")]
    pub jieqi: Option<SolarTerm>,
    #[serde(default, deserialize_with = "lenient")]
    pub xingzuo: Option<ZodiacSign>,
}

#[derive(Deserialize, Debug, Default)]
pub struct SolarDate {
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub xingqi: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct LunarDate {
    #[serde(default, deserialize_with = "lenient")]
    pub yueri: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct SolarTerm {
    #[serde(default, deserialize_with = "lenient")]
    pub jieqi: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ZodiacSign {
    #[serde(default, deserialize_with = "lenient")]
    pub xingzuo: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

impl ProviderPayload {
    /// Maps the payload onto a result for `date`. Missing or empty
    /// fields become empty strings, except the date which is derived
    /// locally.
    pub fn into_result(self, date: NaiveDate) -> CalendarResult {
        let (solar_date, weekday) = match self.yangli {
            Some(SolarDate { date: solar, xingqi }) => (solar, xingqi),
            None => (None, None),
        };

        CalendarResult {
            date: non_empty(solar_date).unwrap_or_else(|| display_date(date)),
            weekday: non_empty(weekday).unwrap_or_default(),
            lunar: non_empty(self.nongli.and_then(|n| n.yueri)).unwrap_or_default(),
            jieqi: non_empty(self.jieqi.and_then(|j| j.jieqi)).unwrap_or_default(),
            constellation: non_empty(self.xingzuo.and_then(|x| x.xingzuo)).unwrap_or_default(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
