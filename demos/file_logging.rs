//! File logging example
//!
//! Demonstrates JSON lines written to two files, configured from JSON, plus a
//! custom log function registered by name.
//!
//! Run with: cargo run --example file_logging

use futures::FutureExt;
use serde_json::json;
use tagged_logger::log_fn;
use tagged_logger::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Tagged Logger - File Logging Example ===\n");

    let config: LoggerConfig = serde_json::from_str(
        r#"{
            "level": "info",
            "destinations": ["application.log", "problems.log"],
            "logFunctions": ["defaultJson", "console"]
        }"#,
    )?;

    // Mirrors every written message to stdout in a compact form
    let mut registry = LogFunctionRegistry::new();
    registry.register(
        "console",
        log_fn("console", |message, should_log, _destinations| {
            async move {
                if should_log {
                    println!("   [{}] {}", message.level, message.text);
                }
                Ok::<(), LoggerError>(())
            }
            .boxed()
        }),
    );

    let factory = LoggerFactory::from_config(config, &registry)?;
    let app = factory.logger("app");

    println!("1. Logging to both files:");
    app.info("Application started", &[]).await?;
    app.debug("Loading configuration... (below INFO, skipped)", &[]).await?;
    app.warn("Using default settings for %d options", &[json!(2)]).await?;
    app.error("Failed to load optional plugin %s", &[json!("metrics")])
        .await?;

    println!("\n2. Performing some operations:");
    let worker = factory.logger(["app", "worker"]);
    for i in 1..=5 {
        worker.info("Processing item %d/5", &[json!(i)]).await?;
        if i == 3 {
            worker.warn("Item 3 took longer than expected", &[]).await?;
        }
    }

    let metrics = factory.metrics();
    println!(
        "\nDispatched {} messages, {} filtered, {} failed",
        metrics.dispatched_count(),
        metrics.suppressed_count(),
        metrics.failed_count()
    );

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' and 'problems.log' for the JSON lines");

    Ok(())
}
