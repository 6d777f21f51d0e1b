use std::path::PathBuf;
use std::sync::Arc;

use clap::{ArgAction, Parser};
use next_build_version::config::ResolverConfig;
use next_build_version::version::error::ResolveError;
use next_build_version::version::registries::GitHubTagRegistry;
use next_build_version::version::resolver::VersionResolver;

#[derive(Parser)]
#[command(name = "next-build-version")]
#[command(version, about = "Prints the next build version based on the latest repository tag")]
struct Cli {
    /// Whether this is an unstable build, as a JSON boolean (`true` or `false`)
    #[arg(value_parser = parse_unstable, action = ArgAction::Set)]
    unstable: bool,

    /// The version being built, e.g. 1.2.3
    target_version: String,

    /// Repository to read tags from, in owner/name form
    #[arg(long)]
    repository: Option<String>,

    /// Base URL of the GitHub API
    #[arg(long)]
    base_url: Option<String>,

    /// Timeout for the tag request in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_ms: Option<u64>,

    /// Prefix stripped from tag names before comparing versions, e.g. "v"
    #[arg(long)]
    tag_prefix: Option<String>,

    /// Path to a JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_unstable(value: &str) -> Result<bool, ResolveError> {
    serde_json::from_str::<bool>(value.trim()).map_err(|_| {
        ResolveError::Input(format!(
            "expected a JSON boolean (true or false), got '{}'",
            value
        ))
    })
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    let mut config = ResolverConfig::load(cli.config.as_deref())?;
    if let Some(repository) = cli.repository {
        config.repository = repository;
    }
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.timeout_ms = timeout_ms;
    }
    if cli.tag_prefix.is_some() {
        config.tag_prefix = cli.tag_prefix;
    }
    config.validate()?;
    tracing::debug!("Using config: {:?}", config);

    let registry = GitHubTagRegistry::new(&config.base_url, config.timeout())?;
    let resolver = VersionResolver::new(Arc::new(registry), config.repository, config.tag_prefix);

    Ok(resolver.resolve(cli.unstable, &cli.target_version).await?)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = next_build_version::logging::init(cli.log_file.as_deref())?;

    let version = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))?;

    println!("{}", version);
    Ok(())
}
