use super::{fetch_json, FetchError};
use serde::Deserialize;

/// Default location of the meta API.
pub const META_URL: &str = "https://api.github.com/meta";

/// The subset of the GitHub meta API response used to build egress rules.
///
/// The API also advertises SSH host keys and feature flags; those fields are
/// ignored. Every list is optional in the response, so each defaults to
/// empty.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub hooks: Vec<String>,

    #[serde(default)]
    pub web: Vec<String>,

    #[serde(default)]
    pub api: Vec<String>,

    #[serde(default)]
    pub git: Vec<String>,

    #[serde(default)]
    pub github_enterprise_importer: Vec<String>,

    #[serde(default)]
    pub packages: Vec<String>,

    #[serde(default)]
    pub pages: Vec<String>,

    #[serde(default)]
    pub importer: Vec<String>,

    #[serde(default)]
    pub actions: Vec<String>,

    #[serde(default)]
    pub dependabot: Vec<String>,

    #[serde(default)]
    pub domains: Domains,
}

/// Domain lists nested under `domains` in the meta response.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Domains {
    #[serde(default)]
    pub website: Vec<String>,

    #[serde(default)]
    pub codespaces: Vec<String>,

    #[serde(default)]
    pub copilot: Vec<String>,

    #[serde(default)]
    pub packages: Vec<String>,
}

/// Fetches the meta API response from `url`.
pub async fn fetch(client: &reqwest::Client, url: &str) -> Result<Meta, FetchError> {
    fetch_json(client, url).await
}

// === impl Meta ===

impl Meta {
    /// All advertised IP range lists, one slice per service.
    pub fn address_lists(&self) -> [&[String]; 10] {
        [
            &self.hooks,
            &self.web,
            &self.api,
            &self.git,
            &self.github_enterprise_importer,
            &self.packages,
            &self.pages,
            &self.importer,
            &self.actions,
            &self.dependabot,
        ]
        .map(Vec::as_slice)
    }

    /// All advertised domain lists.
    pub fn domain_lists(&self) -> [&[String]; 4] {
        [
            &self.domains.website,
            &self.domains.codespaces,
            &self.domains.copilot,
            &self.domains.packages,
        ]
        .map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::Meta;

    #[test]
    fn decodes_response_ignoring_unlisted_fields() {
        let meta: Meta = serde_json::from_str(
            r#"{
                "verifiable_password_authentication": false,
                "ssh_key_fingerprints": {"SHA256_RSA": "abc"},
                "ssh_keys": ["ssh-ed25519 AAAA"],
                "hooks": ["192.0.2.0/24"],
                "web": ["192.0.2.0/24", "198.51.100.0/24"],
                "api": ["198.51.100.0/24"],
                "domains": {
                    "website": ["github.com", "*.github.com"],
                    "copilot": ["*.githubcopilot.com"]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(meta.hooks, vec!["192.0.2.0/24"]);
        assert_eq!(meta.web.len(), 2);
        assert_eq!(meta.domains.website.len(), 2);
        assert_eq!(meta.domains.copilot, vec!["*.githubcopilot.com"]);
        // Lists absent from the response decode as empty.
        assert!(meta.actions.is_empty());
        assert!(meta.domains.codespaces.is_empty());
    }

    #[test]
    fn accessors_cover_every_advertised_list() {
        let meta: Meta = serde_json::from_str(
            r#"{
                "hooks": ["1"], "web": ["2"], "api": ["3"], "git": ["4"],
                "github_enterprise_importer": ["5"], "packages": ["6"],
                "pages": ["7"], "importer": ["8"], "actions": ["9"],
                "dependabot": ["10"],
                "domains": {
                    "website": ["a"], "codespaces": ["b"],
                    "copilot": ["c"], "packages": ["d"]
                }
            }"#,
        )
        .unwrap();

        let addrs: Vec<_> = meta.address_lists().concat();
        assert_eq!(addrs.len(), 10);
        let domains: Vec<_> = meta.domain_lists().concat();
        assert_eq!(domains.len(), 4);
    }
}
