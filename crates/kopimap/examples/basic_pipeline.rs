//! Run the full pipeline against the built-in sample data.
//!
//! ```bash
//! cargo run --example basic_pipeline
//! ```

use kopimap::{MapSearchPipeline, StaticProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    kopimap::init_logging(tracing::Level::INFO)?;

    let pipeline = MapSearchPipeline::new(StaticProvider::lau_pa_sat_sample());
    let outcome = pipeline.refresh().await;

    println!("Displayed annotations: {}", pipeline.board().len());
    for poi in outcome.points() {
        println!(
            "  [{}] {} ({:.6}, {:.6})",
            poi.id, poi.name, poi.coordinate.latitude, poi.coordinate.longitude
        );
    }

    Ok(())
}
