use super::{fetch_json, FetchError};
use serde::Deserialize;

/// Default ip-ranges feeds: all Google services, and Cloud specifically.
pub const GOOG_RANGES_URL: &str = "https://www.gstatic.com/ipranges/goog.json";
pub const CLOUD_RANGES_URL: &str = "https://www.gstatic.com/ipranges/cloud.json";

/// An ip-ranges feed. Google publishes no domain lists, so a feed yields
/// CIDR rules only.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct IpRanges {
    #[serde(default)]
    pub prefixes: Vec<Prefix>,
}

/// A single advertised range. Each entry carries either an IPv4 or an IPv6
/// prefix.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prefix {
    #[serde(default)]
    pub ipv4_prefix: Option<String>,

    #[serde(default)]
    pub ipv6_prefix: Option<String>,
}

/// Fetches an ip-ranges feed from `url`.
pub async fn fetch(client: &reqwest::Client, url: &str) -> Result<IpRanges, FetchError> {
    fetch_json(client, url).await
}

// === impl IpRanges ===

impl IpRanges {
    /// Flattens the prefix entries of both address families into a plain
    /// list of CIDR strings.
    pub fn cidrs(&self) -> Vec<String> {
        self.prefixes
            .iter()
            .flat_map(|p| p.ipv4_prefix.iter().chain(p.ipv6_prefix.iter()))
            .cloned()
            .collect()
    }
}
