use spotter_types::{NavigatorInfo, NetworkInfo, RequestHeaders, SessionLog, Tier, WebGlInfo};

/// A fixed fingerprint shape that rounds are stamped out from
#[derive(Debug, Clone, Copy)]
pub struct LogTemplate {
    pub is_bot: bool,
    pub difficulty: Tier,
    pub pattern: &'static str,
    pub user_agent: &'static str,
    pub sec_ch_ua: Option<&'static str>,
    pub sec_ch_ua_platform: Option<&'static str>,
    pub accept_language: &'static str,
    pub navigator_user_agent: &'static str,
    pub platform: &'static str,
    pub language: &'static str,
    pub webgl_vendor: &'static str,
    pub webgl_renderer: &'static str,
    pub ip: &'static str,
    pub asn: &'static str,
    pub location: &'static str,
    pub timezone: &'static str,
}

impl LogTemplate {
    pub fn instantiate(&self, id: String) -> SessionLog {
        SessionLog {
            id,
            is_bot: self.is_bot,
            difficulty: self.difficulty,
            pattern: self.pattern.to_string(),
            request_headers: RequestHeaders {
                user_agent: self.user_agent.to_string(),
                sec_ch_ua: self.sec_ch_ua.map(str::to_string),
                sec_ch_ua_platform: self.sec_ch_ua_platform.map(str::to_string),
                accept_language: self.accept_language.to_string(),
            },
            navigator: NavigatorInfo {
                user_agent: self.navigator_user_agent.to_string(),
                platform: self.platform.to_string(),
                language: self.language.to_string(),
            },
            webgl: WebGlInfo {
                vendor: self.webgl_vendor.to_string(),
                renderer: self.webgl_renderer.to_string(),
            },
            network: NetworkInfo {
                ip: self.ip.to_string(),
                asn: self.asn.to_string(),
                location: self.location.to_string(),
                timezone: self.timezone.to_string(),
            },
        }
    }
}

const CHROME_119_WIN: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36";
const CHROME_119_MAC: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36";
const CHROME_91_WIN: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const FIREFOX_119_WIN: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:119.0) Gecko/20100101 Firefox/119.0";
const SAFARI_IPHONE_17_0: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
const SAFARI_IPHONE_17_1: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Mobile/15E148 Safari/604.1";
const SAFARI_MAC_17_1: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15";
const SEC_CH_UA_119: &str = r#""Google Chrome";v="119", "Chromium";v="119", "Not?A_Brand";v="24""#;
const SEC_CH_UA_118: &str = r#""Google Chrome";v="118", "Chromium";v="118", "Not?A_Brand";v="24""#;
const RTX_3070_ANGLE: &str =
    "ANGLE (NVIDIA, NVIDIA GeForce RTX 3070 Direct3D11 vs_5_0 ps_5_0, D3D11)";
const COMCAST: &str = "AS7922 Comcast Cable Communications";

pub const EASY_BOTS: &[LogTemplate] = &[
    LogTemplate {
        is_bot: true,
        difficulty: Tier::Easy,
        pattern: "iphone-desktop-gpu",
        user_agent: SAFARI_IPHONE_17_0,
        sec_ch_ua: None,
        sec_ch_ua_platform: None,
        accept_language: "en-US,en;q=0.9",
        navigator_user_agent: CHROME_119_WIN,
        platform: "Win32",
        language: "en-US",
        webgl_vendor: "NVIDIA Corporation",
        webgl_renderer: "NVIDIA GeForce RTX 4090/PCIe/SSE2",
        ip: "203.0.113.45",
        asn: COMCAST,
        location: "San Francisco, CA, US",
        timezone: "America/Los_Angeles",
    },
    LogTemplate {
        is_bot: true,
        difficulty: Tier::Easy,
        pattern: "firefox-chrome-headers",
        user_agent: FIREFOX_119_WIN,
        sec_ch_ua: Some(SEC_CH_UA_119),
        sec_ch_ua_platform: Some(r#""Windows""#),
        accept_language: "en-US,en;q=0.5",
        navigator_user_agent: FIREFOX_119_WIN,
        platform: "Win32",
        language: "en-US",
        webgl_vendor: "Google Inc. (Intel)",
        webgl_renderer: "ANGLE (Intel, Intel(R) UHD Graphics 630 Direct3D11 vs_5_0 ps_5_0, D3D11)",
        ip: "198.51.100.23",
        asn: COMCAST,
        location: "Chicago, IL, US",
        timezone: "America/Chicago",
    },
    LogTemplate {
        is_bot: true,
        difficulty: Tier::Easy,
        pattern: "cloud-infrastructure",
        user_agent: CHROME_119_MAC,
        sec_ch_ua: None,
        sec_ch_ua_platform: None,
        accept_language: "en-US,en;q=0.9",
        navigator_user_agent: CHROME_119_MAC,
        platform: "MacIntel",
        language: "en-US",
        webgl_vendor: "Google Inc. (Apple)",
        webgl_renderer: "ANGLE (Apple, Apple M2 Pro, OpenGL 4.1)",
        ip: "54.239.28.85",
        asn: "AS16509 Amazon.com, Inc.",
        location: "Ashburn, VA, US",
        timezone: "UTC",
    },
];

pub const MEDIUM_BOTS: &[LogTemplate] = &[
    LogTemplate {
        is_bot: true,
        difficulty: Tier::Medium,
        pattern: "version-mismatch",
        user_agent: CHROME_91_WIN,
        sec_ch_ua: Some(SEC_CH_UA_119),
        sec_ch_ua_platform: Some(r#""Windows""#),
        accept_language: "en-US,en;q=0.9",
        navigator_user_agent: CHROME_91_WIN,
        platform: "Win32",
        language: "en-US",
        webgl_vendor: "Google Inc. (NVIDIA)",
        webgl_renderer: "ANGLE (NVIDIA, NVIDIA GeForce GTX 1660 Ti Direct3D11 vs_5_0 ps_5_0, D3D11)",
        ip: "198.51.100.89",
        asn: COMCAST,
        location: "Denver, CO, US",
        timezone: "America/Denver",
    },
    LogTemplate {
        is_bot: true,
        difficulty: Tier::Medium,
        pattern: "missing-headers",
        user_agent: CHROME_119_WIN,
        sec_ch_ua: None,
        sec_ch_ua_platform: None,
        accept_language: "en-US,en;q=0.9",
        navigator_user_agent: CHROME_119_WIN,
        platform: "Win32",
        language: "en-US",
        webgl_vendor: "Google Inc. (NVIDIA)",
        webgl_renderer: RTX_3070_ANGLE,
        ip: "203.0.113.67",
        asn: COMCAST,
        location: "Portland, OR, US",
        timezone: "America/Los_Angeles",
    },
];

pub const HARD_BOTS: &[LogTemplate] = &[LogTemplate {
    is_bot: true,
    difficulty: Tier::Hard,
    pattern: "minor-version-diff",
    user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Safari/537.36",
    sec_ch_ua: Some(SEC_CH_UA_118),
    sec_ch_ua_platform: Some(r#""Windows""#),
    accept_language: "en-US,en;q=0.9",
    navigator_user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.1.0 Safari/537.36",
    platform: "Win32",
    language: "en-US",
    webgl_vendor: "Google Inc. (NVIDIA)",
    webgl_renderer: RTX_3070_ANGLE,
    ip: "203.0.113.67",
    asn: COMCAST,
    location: "Portland, OR, US",
    timezone: "America/Los_Angeles",
}];

pub const HUMANS: &[LogTemplate] = &[
    LogTemplate {
        is_bot: false,
        difficulty: Tier::Easy,
        pattern: "consistent-human",
        user_agent: CHROME_119_WIN,
        sec_ch_ua: Some(SEC_CH_UA_119),
        sec_ch_ua_platform: Some(r#""Windows""#),
        accept_language: "en-US,en;q=0.9",
        navigator_user_agent: CHROME_119_WIN,
        platform: "Win32",
        language: "en-US",
        webgl_vendor: "Google Inc. (NVIDIA)",
        webgl_renderer: RTX_3070_ANGLE,
        ip: "203.0.113.12",
        asn: COMCAST,
        location: "Seattle, WA, US",
        timezone: "America/Los_Angeles",
    },
    LogTemplate {
        is_bot: false,
        difficulty: Tier::Medium,
        pattern: "consistent-human",
        user_agent: SAFARI_MAC_17_1,
        sec_ch_ua: None,
        sec_ch_ua_platform: None,
        accept_language: "en-US,en;q=0.9",
        navigator_user_agent: SAFARI_MAC_17_1,
        platform: "MacIntel",
        language: "en-US",
        webgl_vendor: "Apple Inc.",
        webgl_renderer: "Apple M2 Pro",
        ip: "198.51.100.34",
        asn: "AS701 Verizon Business",
        location: "New York, NY, US",
        timezone: "America/New_York",
    },
    LogTemplate {
        is_bot: false,
        difficulty: Tier::Hard,
        pattern: "consistent-human",
        user_agent: SAFARI_IPHONE_17_1,
        sec_ch_ua: None,
        sec_ch_ua_platform: None,
        accept_language: "en-US,en;q=0.9",
        navigator_user_agent: SAFARI_IPHONE_17_1,
        platform: "iPhone",
        language: "en-US",
        webgl_vendor: "Apple Inc.",
        webgl_renderer: "Apple A17 Pro GPU",
        ip: "203.0.113.56",
        asn: "AS20001 T-Mobile USA",
        location: "Los Angeles, CA, US",
        timezone: "America/Los_Angeles",
    },
];

/// Explanation of the giveaway in a bot pattern, for the results screen
pub fn pattern_hint(pattern: &str) -> &'static str {
    match pattern {
        "iphone-desktop-gpu" => "iPhone User-Agent but Windows Navigator + Desktop GPU",
        "firefox-chrome-headers" => "Firefox User-Agent but includes Chrome-only Sec-CH-UA headers",
        "cloud-infrastructure" => "Consumer device but AWS cloud infrastructure (AS16509)",
        "version-mismatch" => "Chrome 91 User-Agent but Chrome 119 Sec-CH-UA headers",
        "missing-headers" => "Chrome User-Agent but missing expected Sec-CH-UA headers",
        "minor-version-diff" => "Minor version difference between User-Agent and Navigator",
        _ => "Technical inconsistency detected",
    }
}
