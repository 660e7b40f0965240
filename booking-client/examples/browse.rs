// booking-client/examples/browse.rs
//
// Load the restaurant list from a running backend and print the matches of
// a search term.
//
// Usage: cargo run -p booking-client --example browse -- [term]

use std::time::Duration;

use booking_client::logger::init_logger;
use booking_client::{AppContext, ClientConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger("info", false)?;

    let term = std::env::args().nth(1).unwrap_or_default();
    let config = ClientConfig::default();
    let debounce = config.search_debounce;
    let ctx = AppContext::new(config)?;

    let view = ctx.restaurant_list();
    let mut loading = view.list().select_loading();
    while let Some(true) = loading.next().await {}

    if let Some(error) = view.list().error() {
        tracing::error!(error = %error, "Could not load restaurants");
        return Ok(());
    }

    view.list().on_search(term.as_str());
    tokio::time::sleep(debounce + Duration::from_millis(50)).await;

    let visible = view.list().visible();
    tracing::info!(term = %term, count = visible.len(), "Matching restaurants");
    for restaurant in &visible {
        println!(
            "#{:<4} {:<30} {:<30} {}",
            restaurant.id,
            restaurant.name,
            restaurant.address,
            restaurant.phone_number.as_deref().unwrap_or("-")
        );
    }

    view.destroy();
    Ok(())
}
