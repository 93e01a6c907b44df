use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{SkillLevel, Tier};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RequestHeaders {
    #[serde(rename = "User-Agent")]
    pub user_agent: String,
    #[serde(rename = "Sec-CH-UA", skip_serializing_if = "Option::is_none", default)]
    pub sec_ch_ua: Option<String>,
    #[serde(
        rename = "Sec-CH-UA-Platform",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub sec_ch_ua_platform: Option<String>,
    #[serde(rename = "Accept-Language")]
    pub accept_language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NavigatorInfo {
    pub user_agent: String,
    pub platform: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WebGlInfo {
    pub vendor: String,
    pub renderer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NetworkInfo {
    pub ip: String,
    pub asn: String,
    pub location: String,
    pub timezone: String,
}

/// A simulated browser/network fingerprint the player classifies as bot or human
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionLog {
    pub id: String,
    pub is_bot: bool,
    pub difficulty: Tier,
    pub pattern: String,
    pub request_headers: RequestHeaders,
    pub navigator: NavigatorInfo,
    pub webgl: WebGlInfo,
    pub network: NetworkInfo,
}

/// A finished round frozen so a friend can replay the exact same logs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Challenge {
    pub id: String,
    pub challenger_score: u32,
    pub challenger_weighted_score: u32,
    pub challenger_skill_level: SkillLevel,
    pub logs: Vec<SessionLog>,
    pub created_at: String, // ISO 8601 string
}
