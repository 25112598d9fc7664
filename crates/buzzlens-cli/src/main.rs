mod analyze;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use analyze::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "buzzlens")]
#[command(about = "Keyword sentiment across Google News and Reddit")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect mentions of a keyword and classify their sentiment
    Analyze {
        /// Brand, person or topic to search for
        keyword: String,

        /// Entity type hint: brand, person or topic (anything else is treated as topic)
        #[arg(long, default_value = "topic")]
        entity_type: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Number of mention rows to print in table output
        #[arg(long, default_value_t = 20)]
        rows: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("buzzlens ready; run `buzzlens analyze <KEYWORD>` or `buzzlens --help`");
        return Ok(());
    };

    let config = buzzlens_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match command {
        Commands::Analyze {
            keyword,
            entity_type,
            format,
            rows,
        } => analyze::run_analyze(&config, &keyword, &entity_type, format, rows).await,
    }
}
