use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Friend {
    pub name: String,
    pub desc: String,
    pub avatar: String,
    pub url: String,
    pub pin: bool,
}

fn friend(name: &str, desc: &str, avatar: &str, url: &str) -> Friend {
    Friend {
        name: name.to_string(),
        desc: desc.to_string(),
        avatar: avatar.to_string(),
        url: url.to_string(),
        pin: false,
    }
}

/// Friend links in the order they were added
pub fn friends() -> Vec<Friend> {
    vec![
        Friend {
            pin: true,
            ..friend(
                "SiiWay Team Home",
                "SiiWay 团队官方主页",
                "https://icons.siiway.org/siiway/icon.svg",
                "https://siiway.org",
            )
        },
        friend(
            "wyf9",
            "什么都有的个人 blog?",
            "https://wyf9.top/favicon.png",
            "https://wyf9.top",
        ),
        friend(
            "Shattered217のBlog",
            "一个有趣的白日梦想家",
            "https://nvcc-v.com/wp-content/uploads/2025/12/1766747848-250x250nobk.png",
            "https://nvcc-v.com/",
        ),
        friend(
            "小源151 的博客",
            "欢迎来到小源151官方博客！",
            "https://www.gravatar.com/avatar/418e1da2b29ef51b1f86d6b2e041981d703c748aa0bd29831bac02fa9747faa7",
            "https://blog.xiaoyuan151.com",
        ),
        friend(
            "MIFENG BLOG",
            "一个菜鸟的博客",
            "https://cdn.mfawa.top/image/logo.svg",
            "https://blog.imbee.top/",
        ),
        friend(
            "fishcpy的小破站",
            "非淡泊无以明志，非宁静无以致远",
            "https://www.fis.ink/img/logo.png",
            "https://blog.fis.ink",
        ),
        friend(
            "AcoFork Blog",
            "Protect What You Love.",
            "https://q2.qlogo.cn/headimg_dl?dst_uin=2726730791&spec=0",
            "https://blog.2b2x.cn",
        ),
        friend(
            "Ad_closeNN 的小站",
            "永远相信美好的事情即将发生",
            "https://adclosenn.top/assets/avatar.jpg",
            "https://adclosenn.top",
        ),
        friend(
            "mxd's Blog",
            "Empowered by technology, inspired by life.",
            "https://res.mxdyeah.com/favicon.webp",
            "https://blog.mxdyeah.com/",
        ),
        friend(
            "LiyaoUniversity",
            "一座普通，或者不普通的大学",
            "https://q2.qlogo.cn/headimg_dl?dst_uin=3168940165&spec=0",
            "https://liyao.edu.kg/",
        ),
        friend(
            "洛初 的 档案馆",
            "记录折腾过的各种东西",
            "https://weavatar.com/avatar/4857f63b6e75c96621f24af9b451144731f670b55996cc8f28ac130e1a32332d?s=160&d=mm&r=g",
            "https://blog.luochu.cc/",
        ),
        friend(
            "Nicrozoft",
            "Nicrozoft 官方网站",
            "https://nicrozoft.github.io/img/NZ.ico",
            "https://nicrozoft.github.io/",
        ),
        friend(
            "Murasame",
            "我已经下了决心，要与深爱的少女一起在这片土地生活下去。我对此无比自豪。",
            "https://blog.shirayukinoa.top/_astro/Murasame.0zIy958b_ZajvDy.webp",
            "https://blog.shirayukinoa.top/",
        ),
    ]
}

/// Pinned friends first, otherwise keeps the authored order
pub fn pinned_first(mut friends: Vec<Friend>) -> Vec<Friend> {
    friends.sort_by_key(|f| !f.pin);
    friends
}
