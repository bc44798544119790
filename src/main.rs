use clap::Parser;
use php_job_links::{Harvest, RunStatus, ScrapeEvent, ScrapeRecord};
use std::process::ExitCode;

mod args;
use args::{Args, OutputFormat};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let format = args.format;

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    eprintln!("{}", RunStatus::Idle);
    ::log::info!("Scanning {} sites for '{}'", config.sites.len(), config.keyword);

    let mut rx = match Harvest::from_config(config).generate().await {
        Ok(rx) => rx,
        Err(e) => {
            ::log::error!("Failed to start scraping: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let start_time = std::time::Instant::now();
    while let Some(event) = rx.recv().await {
        if let Some(status) = event.status() {
            eprintln!("{}", status);
        }
        match &event {
            ScrapeEvent::Result(record) => print_record(record, format),
            ScrapeEvent::SiteFailed { site, error } => {
                eprintln!("Could not scan {}: {}", site, error);
            }
            _ => {}
        }
    }

    ::log::info!(
        "Scraping finished in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );
    ExitCode::SUCCESS
}

fn print_record(record: &ScrapeRecord, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{}\t{}\t{}", record.title, record.source_site, record.url)
        }
        OutputFormat::Json => match serde_json::to_string(record) {
            Ok(line) => println!("{}", line),
            Err(e) => ::log::error!("Failed to serialize {}: {}", record.url, e),
        },
    }
}
