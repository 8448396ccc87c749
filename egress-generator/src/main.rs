#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use egress_generator::{meta, policy, rules};
use tracing::info;

/// Generate a Cilium egress policy from provider metadata
///
/// Fetches the address metadata a provider publishes (the GitHub meta API, or
/// Google's ip-ranges feeds), merges the advertised addresses and domains
/// into a CiliumNetworkPolicy allowing egress to them on ports 22, 80 and
/// 443, writes the manifest to disk, and creates the policy in the cluster.
#[derive(Parser)]
#[clap(version, about)]
struct Args {
    #[clap(long, env = "EGRESS_GENERATOR_LOG_LEVEL", default_value = "info")]
    log_level: kubert::LogFilter,

    #[clap(long, env = "EGRESS_GENERATOR_LOG_FORMAT", default_value = "plain")]
    log_format: kubert::LogFormat,

    /// Metadata source to generate rules from
    #[clap(long, value_enum, default_value_t = Source::Github)]
    source: Source,

    /// URL of the GitHub meta API
    #[clap(long, default_value = meta::github::META_URL)]
    github_meta_url: String,

    /// URLs of the Google ip-ranges feeds (may be repeated)
    #[clap(
        long = "ip-ranges-url",
        default_values_t = [
            meta::gcp::GOOG_RANGES_URL.to_string(),
            meta::gcp::CLOUD_RANGES_URL.to_string(),
        ],
    )]
    ip_ranges_urls: Vec<String>,

    /// Name of the created policy; defaults to "<source>-egress"
    #[clap(long)]
    name: Option<String>,

    /// Namespace the policy is created in
    #[clap(long, short = 'n', default_value = "default")]
    namespace: String,

    /// Path the manifest is written to before the policy is created
    #[clap(long, short = 'o', default_value = "egress-policy.yaml")]
    output: std::path::PathBuf,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum Source {
    Github,
    Gcp,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let Args {
        log_level,
        log_format,
        source,
        github_meta_url,
        ip_ranges_urls,
        name,
        namespace,
        output,
    } = Args::parse();

    log_format
        .try_init(log_level)
        .expect("must configure logging");

    let http = reqwest::Client::builder()
        .user_agent(concat!("egress-generator/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let egress = match source {
        Source::Github => {
            let meta = meta::github::fetch(&http, &github_meta_url).await?;
            info!(url = %github_meta_url, "fetched provider metadata");
            rules::egress(
                meta.address_lists(),
                meta.domain_lists(),
                &rules::ALLOWED_PORTS,
            )
        }
        Source::Gcp => {
            let mut lists = Vec::with_capacity(ip_ranges_urls.len());
            for url in &ip_ranges_urls {
                let ranges = meta::gcp::fetch(&http, url).await?;
                info!(url = %url, prefixes = ranges.prefixes.len(), "fetched ip ranges");
                lists.push(ranges.cidrs());
            }
            vec![rules::cidr_rule(
                lists.iter().map(Vec::as_slice),
                &rules::ALLOWED_PORTS,
            )]
        }
    };

    let name = name.unwrap_or_else(|| format!("{source}-egress"));
    let policy = policy::assemble(&name, &namespace, egress);

    policy::write(&policy, &output)?;
    info!(path = %output.display(), "wrote policy manifest");

    let client = kube::Client::try_default()
        .await
        .map_err(policy::ApplyError::AuthFailure)?;
    policy::apply(client, &policy).await?;
    info!(%name, %namespace, "created policy");

    Ok(())
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Github => "github",
            Self::Gcp => "gcp",
        })
    }
}
