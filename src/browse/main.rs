use anyhow::Context;
use clap::Parser;

use portfolio_gateway::config::Config;
use portfolio_gateway::controller::{
    category_label, view::EMPTY_MESSAGE, view::SHOW_LESS_LABEL, view_all_label, HttpProjectsApi,
    FilterState, LoadState, ProjectListController,
};
use portfolio_gateway::telemetry::init_tracing;

/// Browse the portfolio projects through the gateway
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Category to show: `featured`, `all` or a catalog tag
    #[arg(short, long, default_value = "featured")]
    category: String,

    /// Include projects that are not featured
    #[arg(short = 'a', long)]
    show_all: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let api = HttpProjectsApi::new(&config).context("Failed to build HTTP client")?;

    let filter = FilterState::new(args.category, args.show_all);
    let mut controller = ProjectListController::with_filter(api, filter);
    controller.mount().await;

    let labels: Vec<String> = controller
        .categories()
        .iter()
        .map(|c| {
            let label = category_label(c);
            if c.as_str() == controller.filter().category.as_str() {
                format!("[{label}]")
            } else {
                label
            }
        })
        .collect();
    println!("{}\n", labels.join("  "));

    if let LoadState::Error(message) = controller.state() {
        anyhow::bail!("Erreur: {message} (relancez la commande pour réessayer)");
    }

    if controller.filter().show_all {
        println!("{SHOW_LESS_LABEL}\n");
    } else {
        println!("{}\n", view_all_label(controller.projects().len()));
    }

    let cards = controller.cards();
    if cards.is_empty() {
        println!("{EMPTY_MESSAGE}");
    }
    for card in cards {
        println!("{card}\n");
    }

    Ok(())
}
