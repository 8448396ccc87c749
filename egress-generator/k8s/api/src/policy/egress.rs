/// A single egress rule fragment: destinations plus the ports allowed to
/// reach them.
#[derive(
    Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize, schemars::JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct EgressRule {
    #[serde(default, rename = "toCIDR", skip_serializing_if = "Vec::is_empty")]
    pub to_cidr: Vec<Cidr>,

    #[serde(default, rename = "toFQDNs", skip_serializing_if = "Vec::is_empty")]
    pub to_fqdns: Vec<FqdnSelector>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to_ports: Vec<PortRule>,
}

/// A CIDR in the textual form the Cilium API accepts, e.g. `192.0.2.0/24`.
///
/// Carried verbatim: the metadata feeds are trusted to publish well-formed
/// ranges, and the API server validates on admission.
#[derive(
    Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize, schemars::JsonSchema,
)]
#[serde(transparent)]
pub struct Cidr(pub String);

/// Matches destination DNS names, either exactly or against a `*.` pattern.
/// Exactly one of the two fields is set.
#[derive(
    Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize, schemars::JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct FqdnSelector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_pattern: Option<String>,
}

#[derive(
    Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize, schemars::JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct PortRule {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<PortProtocol>,
}

#[derive(
    Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize, schemars::JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct PortProtocol {
    pub port: String,
    pub protocol: String,
}

// === impl Cidr ===

impl From<String> for Cidr {
    fn from(cidr: String) -> Self {
        Self(cidr)
    }
}

impl From<&str> for Cidr {
    fn from(cidr: &str) -> Self {
        Self(cidr.to_string())
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// === impl FqdnSelector ===

impl FqdnSelector {
    /// Matches the given name exactly.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            match_name: Some(name.into()),
            match_pattern: None,
        }
    }

    /// Matches names against the given `*.` pattern.
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self {
            match_pattern: Some(pattern.into()),
            match_name: None,
        }
    }
}
