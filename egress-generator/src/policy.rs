//! Assembles the policy document, writes it to disk, and creates it in the
//! cluster.

use egress_generator_k8s_api::{
    policy::EgressRule, CiliumNetworkPolicy, CiliumNetworkPolicySpec, EndpointSelector, ObjectMeta,
    ResourceExt,
};
use kube::api::{Api, PostParams};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("failed to serialize policy")]
    Serialize(#[from] serde_yaml::Error),

    #[error("failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    #[error("cluster credentials are unavailable or invalid")]
    AuthFailure(#[source] kube::Error),

    #[error("api server rejected the policy")]
    Rejected(#[source] kube::Error),

    #[error("api server is unreachable")]
    Unreachable(#[source] kube::Error),
}

/// Wraps the egress rules into a named, namespaced policy document selecting
/// every endpoint in the namespace.
pub fn assemble(name: &str, namespace: &str, egress: Vec<EgressRule>) -> CiliumNetworkPolicy {
    CiliumNetworkPolicy {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        spec: CiliumNetworkPolicySpec {
            endpoint_selector: EndpointSelector::default(),
            egress,
        },
    }
}

/// Serializes the policy as YAML and writes it to `path`, replacing any
/// existing file.
pub fn write(policy: &CiliumNetworkPolicy, path: &Path) -> Result<(), WriteError> {
    let yaml = serde_yaml::to_string(policy)?;
    std::fs::write(path, yaml).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Creates the policy in its namespace. Create-only: a pre-existing object
/// with the same name is a rejection, not an update.
pub async fn apply(client: kube::Client, policy: &CiliumNetworkPolicy) -> Result<(), ApplyError> {
    let namespace = policy.namespace().unwrap_or_else(|| "default".to_string());
    let api = Api::<CiliumNetworkPolicy>::namespaced(client, &namespace);
    api.create(&PostParams::default(), policy)
        .await
        .map(drop)
        .map_err(classify)
}

fn classify(err: kube::Error) -> ApplyError {
    match &err {
        kube::Error::Api(status) if status.code == 401 || status.code == 403 => {
            ApplyError::AuthFailure(err)
        }
        kube::Error::Api(_) => ApplyError::Rejected(err),
        kube::Error::Auth(_) => ApplyError::AuthFailure(err),
        _ => ApplyError::Unreachable(err),
    }
}
