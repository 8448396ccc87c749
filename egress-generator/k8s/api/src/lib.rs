#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod policy;

pub use self::policy::{CiliumNetworkPolicy, CiliumNetworkPolicySpec, EndpointSelector};
pub use kube::api::{ObjectMeta, ResourceExt};
