//! Search kopitiams around Lau Pa Sat against the real Nominatim API.
//!
//! Makes one network request; please respect the public Nominatim usage
//! policy if you run this repeatedly.
//!
//! ```bash
//! cargo run --example live_search
//! ```

use kopimap::{MapSearchPipeline, NominatimProvider};

#[tokio::main]
async fn main() -> kopimap::error::Result<()> {
    kopimap::init_logging(tracing::Level::INFO)?;

    let provider = NominatimProvider::new()?;
    let pipeline = MapSearchPipeline::new(provider);

    let outcome = pipeline.refresh().await;
    if outcome.is_unavailable() {
        println!("Search unavailable; showing the empty board.");
    }

    println!("Found {} places:", pipeline.board().len());
    for poi in pipeline.board().current() {
        println!(
            "  {} ({:.6}, {:.6})",
            poi.name, poi.coordinate.latitude, poi.coordinate.longitude
        );
    }

    Ok(())
}
