use anyhow::Context;
use clap::{ArgGroup, Args, Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, info};

use travaux_scraper::config::Config;
use travaux_scraper::infra::http_client::ReqwestHttp;
use travaux_scraper::pipeline::processing::display::DisplayFields;
use travaux_scraper::pipeline::processing::normalize::arrondissement_from_postal_code;
use travaux_scraper::{
    logging, normalize_construction, normalize_service, EnrichedRecord, Pipeline, PipelineResult,
};

#[derive(Parser)]
#[command(name = "travaux_scraper")]
#[command(about = "Paris public-works open data fetcher and normalizer")]
#[command(version = "0.1.0")]
struct Cli {
    /// TOML configuration file (defaults to ./travaux.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every record and print the enriched records as JSON
    Fetch {
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
        /// Record field holding the sector, used to attach a marker color
        #[arg(long)]
        sector_field: Option<String>,
    },
    /// Fetch every record and print counts per district, category and service
    Summary,
    /// Run a single normalizer on the given text, without any network access
    Classify(ClassifyArgs),
}

#[derive(Args)]
#[command(group(ArgGroup::new("input").required(true).args(["construction", "service", "postal"])))]
struct ClassifyArgs {
    /// Free-text construction type
    #[arg(long)]
    construction: Option<String>,
    /// Service abbreviation
    #[arg(long)]
    service: Option<String>,
    /// Postal code
    #[arg(long)]
    postal: Option<String>,
}

/// One output line of `fetch`: the enriched record plus display-only fields
#[derive(Serialize)]
struct RecordView<'a> {
    #[serde(flatten)]
    record: &'a EnrichedRecord,
    #[serde(flatten)]
    display: DisplayFields,
}

async fn run_pipeline(config: &Config) -> anyhow::Result<PipelineResult> {
    let http = ReqwestHttp::with_timeout(config.api.timeout()).context("building HTTP client")?;
    info!(base_url = %config.api.base_url, "Starting pipeline");
    match Pipeline::run(&http, &config.api).await {
        Ok(result) => Ok(result),
        Err(e) => {
            error!("Pipeline failed: {}", e);
            Err(e).with_context(|| format!("fetching records from {}", config.api.base_url))
        }
    }
}

fn print_records(result: &PipelineResult, pretty: bool, sector_field: Option<&str>) -> anyhow::Result<()> {
    let views: Vec<RecordView<'_>> = result
        .records
        .iter()
        .map(|record| RecordView {
            record,
            display: DisplayFields::for_record(&record.raw, sector_field),
        })
        .collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, &views)?;
    } else {
        serde_json::to_writer(&mut out, &views)?;
    }
    writeln!(out)?;
    Ok(())
}

fn print_summary(result: &PipelineResult) {
    let summary = result.summary();
    println!("📊 {} records ({} pages)", summary.total, result.pages_fetched);
    if let Some(total) = result.total_count {
        println!("   Reported total: {}", total);
    }
    for (title, counts) in [
        ("Arrondissements", &summary.by_arrondissement),
        ("Construction groups", &summary.by_construction_group),
        ("Services", &summary.by_service),
    ] {
        println!("\n{}:", title);
        for (key, count) in counts {
            println!("   {:<32} {}", key, count);
        }
    }
}

fn classify(args: &ClassifyArgs) {
    if let Some(text) = args.construction.as_deref() {
        let group = normalize_construction(Some(text));
        println!("{}", group.map(|g| g.label()).unwrap_or("null"));
    }
    if let Some(text) = args.service.as_deref() {
        println!("{}", normalize_service(Some(text)).unwrap_or_else(|| "null".to_string()));
    }
    if let Some(code) = args.postal.as_deref() {
        println!(
            "{}",
            arrondissement_from_postal_code(Some(code)).unwrap_or_else(|| "null".to_string())
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    let _log_guard = logging::init_logging(&config.logging);

    match cli.command {
        Commands::Fetch { pretty, sector_field } => {
            let result = run_pipeline(&config).await?;
            print_records(&result, pretty, sector_field.as_deref())?;
        }
        Commands::Summary => {
            let result = run_pipeline(&config).await?;
            print_summary(&result);
        }
        Commands::Classify(args) => classify(&args),
    }
    Ok(())
}
