//! Basic logger usage example
//!
//! Demonstrates console logging, tags, the "always" tag and level changes.
//!
//! Run with: cargo run --example basic_usage

use serde_json::json;
use tagged_logger::info;
use tagged_logger::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Tagged Logger - Basic Usage Example ===\n");

    // stdout receives everything, stderr also receives WARN and ERROR
    let factory = LoggerFactory::new(LoggerOptions::new().level(LogLevel::Debug))?;
    let logger = factory.logger("example");

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message", &[]).await?;
    logger.info("This is an info message", &[]).await?;
    logger.warn("This is a warning message", &[]).await?;
    logger.error("This is an error message", &[]).await?;

    println!("\n2. Templates and tags:");
    logger
        .info_with_tags("http", "GET %s -> %d", &[json!("/health"), json!(200)])
        .await?;
    info!(logger, "payload %j", json!({"user": "alice", "roles": ["admin"]})).await?;

    let pool = logger.child(["db", "pool"]);
    pool.debug("connections: %d", &[json!(4)]).await?;

    println!("\n3. Minimum level set to ERROR:");
    logger.set_level(LogLevel::Error);
    logger.info("Info message (hidden)", &[]).await?;
    logger
        .info_with_tags(ALWAYS_TAG, "Info message with the always tag (visible)", &[])
        .await?;

    println!("\n4. Logging an error value:");
    if let Err(err) = "forty-two".parse::<u32>() {
        logger.error(ErrorValue::from_error(&err), &[]).await?;
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
