//! Converts merged address and domain lists into Cilium egress rules.

use crate::set::StringSet;
use egress_generator_k8s_api::policy::{EgressRule, FqdnSelector, PortProtocol, PortRule};

/// Destination ports allowed by every generated rule: SSH, HTTP, HTTPS.
pub const ALLOWED_PORTS: [u16; 3] = [22, 80, 443];

/// Builds the egress rule pair for a provider that publishes both IP ranges
/// and domains: one CIDR-based fragment and one FQDN-based fragment, both
/// carrying the same port allow-list.
pub fn egress<'a>(
    address_lists: impl IntoIterator<Item = &'a [String]>,
    domain_lists: impl IntoIterator<Item = &'a [String]>,
    ports: &[u16],
) -> Vec<EgressRule> {
    vec![cidr_rule(address_lists, ports), fqdn_rule(domain_lists, ports)]
}

/// Unions the given address lists into a single deduplicated CIDR rule.
///
/// Empty input produces an empty `toCIDR` fragment, preserved as emitted.
pub fn cidr_rule<'a>(lists: impl IntoIterator<Item = &'a [String]>, ports: &[u16]) -> EgressRule {
    let to_cidr = StringSet::default()
        .add_lists(lists)
        .into_list()
        .into_iter()
        .map(Into::into)
        .collect();

    EgressRule {
        to_cidr,
        to_ports: port_rules(ports),
        ..EgressRule::default()
    }
}

/// Unions the given domain lists into a single deduplicated FQDN rule.
///
/// A domain beginning with the literal prefix `*.` becomes a pattern
/// selector carrying the full string; anything else matches by exact name.
pub fn fqdn_rule<'a>(lists: impl IntoIterator<Item = &'a [String]>, ports: &[u16]) -> EgressRule {
    let to_fqdns = StringSet::default()
        .add_lists(lists)
        .into_list()
        .into_iter()
        .map(|domain| {
            if domain.starts_with("*.") {
                FqdnSelector::pattern(domain)
            } else {
                FqdnSelector::name(domain)
            }
        })
        .collect();

    EgressRule {
        to_fqdns,
        to_ports: port_rules(ports),
        ..EgressRule::default()
    }
}

fn port_rules(ports: &[u16]) -> Vec<PortRule> {
    let ports = ports
        .iter()
        .map(|port| PortProtocol {
            port: port.to_string(),
            protocol: "TCP".to_string(),
        })
        .collect();
    vec![PortRule { ports }]
}
