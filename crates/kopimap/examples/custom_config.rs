//! Build a pipeline with a custom query, viewport, and result cap.
//!
//! ```bash
//! cargo run --example custom_config
//! ```

use kopimap::{MapSearchConfig, MapSearchPipeline, StaticProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    kopimap::init_logging(tracing::Level::INFO)?;

    // A wider viewport over the same center, different query, small cap.
    let config = MapSearchConfig::builder()
        .query("chicken rice")
        .center(1.280716, 103.850442)
        .span(0.02, 0.02)
        .limit(3)
        .build();

    let pipeline = MapSearchPipeline::builder(StaticProvider::lau_pa_sat_sample())
        .config(config)
        .build()?;

    let outcome = pipeline.refresh().await;
    println!(
        "Query '{}' produced {} annotations (cap {})",
        pipeline.config().query,
        outcome.points().len(),
        pipeline.config().limit
    );

    for poi in pipeline.board().current() {
        println!("  {poi:?}");
    }

    Ok(())
}
