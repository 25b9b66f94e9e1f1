use assortment_client::SpreadshirtClient;
use assortment_core::{AppConfig, AppManifest, FieldType};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "assortment")]
#[command(about = "Spreadgroup assortment SKU picker backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print one page of the shop's product types as picker JSON
    Browse {
        #[arg(long, default_value_t = 0)]
        offset: u64,
    },
    /// Resolve previously selected skus into previews, flagging missing ones
    Preview {
        #[arg(required = true)]
        skus: Vec<String>,
    },
    /// Print the app manifest with its installation parameters
    Manifest,
    /// Print the call-to-action label for a field type
    Cta {
        #[arg(long, value_enum, default_value_t = FieldKind::Symbol)]
        field_type: FieldKind,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FieldKind {
    Symbol,
    Array,
}

impl From<FieldKind> for FieldType {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Symbol => FieldType::Symbol,
            FieldKind::Array => FieldType::Array,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Browse { offset } => {
            let config = load_config()?;
            let client = SpreadshirtClient::from_config(&config)?;
            let page = client
                .fetch_product_types_page(config.page_size, offset)
                .await?;
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        Commands::Preview { skus } => {
            let config = load_config()?;
            let client = SpreadshirtClient::from_config(&config)?;
            let previews = client.fetch_product_previews(&skus).await?;
            println!("{}", serde_json::to_string_pretty(&previews)?);
        }
        Commands::Manifest => println!("{}", manifest_json()?),
        Commands::Cta { field_type } => println!("{}", cta_label(field_type)),
    }

    Ok(())
}

/// Loads configuration and installs the tracing subscriber. Only commands
/// that talk to the API need either.
fn load_config() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();
    let config = assortment_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn manifest_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&AppManifest::default())
}

fn cta_label(field_type: FieldKind) -> &'static str {
    FieldType::from(field_type).make_cta()
}
