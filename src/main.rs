mod domain;
mod error;
mod clients;
mod console;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod product_actor;

use tokio::io::BufReader;
use tracing::info;
use crate::app_system::{setup_tracing, InventorySystem};
use crate::console::Console;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting stockroom");

    let system = InventorySystem::new();

    let console = Console::new(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        system.product_client.clone(),
        system.order_client.clone(),
    );
    let session = console.run().await;

    system.shutdown().await?;
    session?;

    info!("Stockroom closed");
    Ok(())
}
