use std::path::Path;

use anyhow::{Result, bail};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::validate::{CONTENT_JSON_FILES, validate_json_files};

pub fn run(root: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("开始验证 JSON 文件...\n");

    let reports = validate_json_files(Path::new(root), &CONTENT_JSON_FILES);
    for report in &reports {
        for line in report.console_lines() {
            if report.is_valid() {
                println!("{}", line);
            } else {
                eprintln!("{}", line);
            }
        }
    }

    if reports.iter().any(|r| !r.is_valid()) {
        bail!("验证失败！请修复上述错误。");
    }

    println!("\n所有 JSON 文件格式正确！");
    Ok(())
}
