pub mod egress;

pub use self::egress::{Cidr, EgressRule, FqdnSelector, PortProtocol, PortRule};

use std::collections::BTreeMap;

/// The `cilium.io/v2` CiliumNetworkPolicy resource, restricted to the egress
/// fields this tool emits.
#[derive(
    Clone,
    Debug,
    Default,
    kube::CustomResource,
    serde::Deserialize,
    serde::Serialize,
    schemars::JsonSchema,
)]
#[kube(
    group = "cilium.io",
    version = "v2",
    kind = "CiliumNetworkPolicy",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct CiliumNetworkPolicySpec {
    /// Selects the endpoints the policy applies to. An empty selector matches
    /// every endpoint in the policy's namespace.
    pub endpoint_selector: EndpointSelector,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub egress: Vec<EgressRule>,
}

#[derive(
    Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize, schemars::JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct EndpointSelector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_labels: Option<BTreeMap<String, String>>,
}
