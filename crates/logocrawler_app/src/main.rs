mod input;

use std::io;

use anyhow::Result;
use crawl_logging::LogDestination;
use logocrawler_engine::{LogoPipeline, PipelineSettings};

#[tokio::main]
async fn main() -> Result<()> {
    // Log to file; stdout carries the CSV result lines.
    crawl_logging::initialize(LogDestination::File);

    println!("Enter a list of websites to scrape (separated by newline):");
    let websites = input::collect_websites(io::stdin().lock())?;
    log::info!("collected {} website(s)", websites.len());

    let pipeline = LogoPipeline::new(PipelineSettings::default());

    println!("Starting scraping...\n");
    println!("website,path");
    for domain in &websites {
        // Strictly sequential: one domain resolves to completion before the
        // next begins. A failed domain prints an empty result field.
        match pipeline.resolve(domain).await {
            Some(location) => println!("{domain},{location}"),
            None => println!("{domain},"),
        }
    }

    Ok(())
}
