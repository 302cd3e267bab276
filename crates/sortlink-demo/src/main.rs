mod app;
mod staff;

use clap::Parser;
use std::path::PathBuf;

use sortlink_core::config::{IconSet, SortConfig};

#[derive(Parser)]
#[command(
    name = "sortlink-demo",
    about = "Sortable, paginated staff table rendered with sortlink",
    version
)]
struct Cli {
    /// Port to listen on
    #[arg(long, default_value = "3141", env = "SORTLINK_DEMO_PORT")]
    port: u16,

    /// Link configuration file (YAML); defaults to a built-in demo config
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();

    let config = match &cli.config {
        Some(path) => SortConfig::load(path)?,
        None => demo_config(),
    };
    for warning in config.validate() {
        tracing::warn!("config: {}", warning.message);
    }

    app::serve(config, cli.port).await
}

fn demo_config() -> SortConfig {
    let mut config = SortConfig {
        anchor_class: Some("sortable".to_string()),
        active_anchor_class: Some("active".to_string()),
        plain_span_class: Some("plain".to_string()),
        icon_text_separator: " ".to_string(),
        ..SortConfig::default()
    };
    config.icon_sets.insert(
        "alpha".to_string(),
        IconSet {
            class: "fa fa-sort-alpha".to_string(),
            columns: vec!["name".to_string()],
        },
    );
    config.icon_sets.insert(
        "numeric".to_string(),
        IconSet {
            class: "fa fa-sort-numeric".to_string(),
            columns: vec!["age".to_string()],
        },
    );
    config
}
