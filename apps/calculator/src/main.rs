//! # Parcego Calculator Entry Point
//!
//! The actual setup is in lib.rs for better testability.

#[tokio::main]
async fn main() {
    if let Err(e) = parcego_calculator::run().await {
        eprintln!("parcego-calculator: {}", e);
        std::process::exit(1);
    }
}
