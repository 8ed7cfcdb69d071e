mod cli;
mod render;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use dealvault_core::models::config::VaultConfig;
use dealvault_core::models::filter::DealFilter;
use dealvault_core::DealVault;

fn load_config(cli: &Cli) -> anyhow::Result<VaultConfig> {
    let mut config = match &cli.config {
        Some(path) => VaultConfig::load_from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => VaultConfig::default(),
    };
    if cli.instant {
        let instant = VaultConfig::instant();
        config.deal_latency = instant.deal_latency;
        config.category_latency = instant.category_latency;
        config.platform_latency = instant.platform_latency;
    }
    Ok(config)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let vault = DealVault::new(config).context("building vault")?;

    match cli.command {
        Commands::Summary => {
            let view = vault.dashboard().await?;
            print!("{}", render::dashboard(&view));
        }
        Commands::List {
            query,
            category,
            platform,
            status,
        } => {
            let filter = DealFilter {
                query,
                category,
                platform,
                status,
            };
            info!(?filter, "listing deals");
            let deals = vault.filtered_deals(&filter).await?;
            print!("{}", render::deal_list(&deals));
        }
        Commands::Search { query } => {
            let deals = vault.search_deals(&query).await?;
            print!("{}", render::deal_list(&deals));
        }
        Commands::Categories => {
            let stats = vault.category_overview().await?;
            print!("{}", render::categories(&stats));
        }
        Commands::Platforms => {
            let stats = vault.platform_overview().await?;
            print!("{}", render::platforms(&stats));
        }
        Commands::Calendar { date: Some(date) } => {
            let deals = vault.deals_on(date).await?;
            print!("{}", render::deal_list(&deals));
        }
        Commands::Calendar { date: None } => {
            let dates = vault.purchase_dates().await?;
            print!("{}", render::dates(&dates));
        }
        Commands::Export => {
            println!("{}", vault.export_deals_to_json().await?);
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    run(cli).await
}
