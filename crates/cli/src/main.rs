use clap::Parser;
use dns_edges_domain::CliOverrides;
use std::path::PathBuf;
use tracing::{error, info};

mod bootstrap;
mod di;
mod output;

use output::OutputFormat;

#[derive(Parser)]
#[command(name = "dns-edges")]
#[command(version)]
#[command(about = "Infer service communication edges from Kubernetes DNS logs")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Namespace to include in the inventory (repeatable, `*` for all)
    #[arg(short = 'n', long = "namespace", value_name = "NAMESPACE")]
    namespaces: Vec<String>,

    /// Include kube-* system namespaces
    #[arg(long)]
    include_kube_namespaces: bool,

    /// Kubeconfig context
    #[arg(long)]
    context: Option<String>,

    /// Read logs and inventory from a snapshot directory instead of the cluster
    #[arg(long, value_name = "DIR")]
    snapshot: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        namespaces: (!cli.namespaces.is_empty()).then(|| cli.namespaces.clone()),
        include_kube_namespaces: cli.include_kube_namespaces,
        context: cli.context.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting DNS Edges v{}", env!("CARGO_PKG_VERSION"));

    let cluster_client = di::build_cluster_client(&config.cluster, cli.snapshot).await?;
    let use_cases = di::UseCases::new(&config, cluster_client);

    let communications = use_cases.aggregate_dns.execute().await.map_err(|e| {
        error!(error = %e, "DNS aggregation failed");
        anyhow::anyhow!(e)
    })?;

    let stdout = std::io::stdout();
    output::render(&mut stdout.lock(), communications, cli.format)?;

    Ok(())
}
