use clap::{Parser, Subcommand};

mod render;

#[derive(Debug, Parser)]
#[command(name = "catview")]
#[command(about = "Searchable read-only view over the product catalog services")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch every collection and print the product list.
    List {
        /// Case-insensitive substring filter on product names.
        #[arg(long)]
        search: Option<String>,
    },
    /// Fetch every collection and print per-collection record counts.
    Summary,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = catview_core::load_app_config()?;
    let filter = tracing_subscriber::EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let client = catview_client::CatalogClient::new(&config)?;
    let mut catalog = catview_core::Catalog::new();
    let report = catview_client::load_all(&client, &mut catalog).await;
    if !report.all_ok() {
        tracing::warn!(
            failed = ?report.failed_collections(),
            "some collections did not refresh; showing last known data"
        );
    }

    match cli.command {
        Commands::List { search } => {
            if let Some(term) = search {
                catalog.set_search_term(term);
            }
            print!("{}", render::product_list(&catalog));
        }
        Commands::Summary => {
            print!("{}", render::summary(&catalog));
        }
    }

    Ok(())
}
