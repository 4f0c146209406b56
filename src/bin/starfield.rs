//! starfield - stream the HYG star catalog and render it as a PNG star map.
//!
//! Run: `starfield --max-records 20000 --output stars.png`

use std::path::PathBuf;

use clap::Parser;
use starfield_viz::app;
use starfield_viz::config::{Config, DEFAULT_CONFIG_FILE};

/// Stream a star catalog over HTTP and render it as a star map
#[derive(Parser, Debug)]
#[command(name = "starfield")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Stream a star catalog over HTTP and render it as a star map", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Catalog URL
    #[arg(long)]
    url: Option<String>,

    /// Stop after this many records (0 reads everything)
    #[arg(short = 'n', long)]
    max_records: Option<usize>,

    /// Output PNG path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(url) = self.url {
            config.source.url = url;
        }
        if let Some(max_records) = self.max_records {
            config.source.max_records = Some(max_records);
        }
        if let Some(output) = self.output {
            config.output.path = output;
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match Config::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    cli.apply(&mut config);

    match app::run(&config).await {
        Ok(summary) => {
            if let Some(e) = summary.stream_error {
                tracing::warn!(error = %e, "catalog was truncated");
            }
            println!(
                "{} stars drawn in {} batches -> {}",
                summary.render.drawn,
                summary.render.batches,
                summary.output.display()
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
