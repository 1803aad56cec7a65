//! Integration tests for the tagged logger
//!
//! These tests verify:
//! - Level filtering and the "always" override
//! - Dual-destination fan-out for files and interactive terminals
//! - JSON lines: one physical line per message, stable fields, round trip
//! - File destinations and configuration-driven construction
//! - Custom log functions and write failure propagation

use futures::FutureExt;
use serde_json::{json, Value};
use std::fs;
use std::sync::Arc;
use tagged_logger::prelude::*;
use tagged_logger::{log_fn, LogFunctionSpec};
use tempfile::TempDir;

fn json_logger(level: LogLevel, tags: &[&str]) -> (Logger, Arc<MemorySink>, Arc<MemorySink>) {
    let primary = Arc::new(MemorySink::new("primary"));
    let secondary = Arc::new(MemorySink::new("secondary"));
    let logger = Logger::new(
        LoggerOptions::new()
            .level(level)
            .sink(primary.clone())
            .sink(secondary.clone())
            .log_function(DEFAULT_JSON),
        tags,
    )
    .expect("Failed to build logger");
    (logger, primary, secondary)
}

fn parse_lines(sink: &MemorySink) -> Vec<Value> {
    sink.lines()
        .iter()
        .map(|line| serde_json::from_str(line).expect("Each line should be valid JSON"))
        .collect()
}

#[derive(Debug)]
struct Boom;

impl std::fmt::Display for Boom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "boom")
    }
}

impl std::error::Error for Boom {}

#[tokio::test]
async fn test_end_to_end_scenario() {
    let (logger, primary, secondary) = json_logger(LogLevel::Info, &[]);

    logger
        .error(ErrorValue::from_error(&Boom), &[])
        .await
        .expect("error call");
    logger
        .info("hello %s", &[json!("world")])
        .await
        .expect("info call");
    logger.debug("skip", &[]).await.expect("debug call");

    let primary_lines = parse_lines(&primary);
    let secondary_lines = parse_lines(&secondary);
    assert_eq!(primary_lines.len(), 2);
    assert_eq!(secondary_lines.len(), 1);

    for error_line in [&primary_lines[0], &secondary_lines[0]] {
        assert_eq!(error_line["level"], "ERROR");
        assert!(error_line["stack"].as_str().unwrap().starts_with("Boom"));
    }

    let info_line = &primary_lines[1];
    assert_eq!(info_line["level"], "INFO");
    assert_eq!(info_line["text"], "hello world");
    assert!(info_line.get("stack").is_none());
}

#[tokio::test]
async fn test_filtered_messages_produce_no_writes() {
    let (logger, primary, secondary) = json_logger(LogLevel::Error, &["worker"]);

    logger.warn("w", &[]).await.unwrap();
    logger.info("i", &[]).await.unwrap();
    logger.debug_with_tags("noisy", "d", &[]).await.unwrap();

    assert!(primary.contents().is_empty());
    assert!(secondary.contents().is_empty());
    assert_eq!(logger.metrics().suppressed_count(), 3);
}

#[tokio::test]
async fn test_always_tag_at_every_logger_level() {
    for level in LogLevel::ALL {
        let (logger, primary, _) = json_logger(level, &[]);
        logger
            .debug_with_tags(vec!["cron", "always"], "heartbeat", &[])
            .await
            .unwrap();
        assert_eq!(primary.lines().len(), 1, "always-tagged debug at logger level {level}");
    }
}

#[tokio::test]
async fn test_fan_out_to_non_interactive_sinks() {
    let (logger, primary, secondary) = json_logger(LogLevel::Debug, &[]);

    logger.error("e", &[]).await.unwrap();
    logger.warn("w", &[]).await.unwrap();
    logger.info("i", &[]).await.unwrap();
    logger.debug("d", &[]).await.unwrap();

    let texts = |sink: &MemorySink| -> Vec<String> {
        parse_lines(sink)
            .iter()
            .map(|v| v["text"].as_str().unwrap().to_string())
            .collect()
    };
    assert_eq!(texts(&primary), vec!["e", "w", "i", "d"]);
    assert_eq!(texts(&secondary), vec!["e", "w"]);
}

#[tokio::test]
async fn test_interactive_pair_is_not_duplicated() {
    let console_out = Arc::new(MemorySink::interactive("tty-out"));
    let console_err = Arc::new(MemorySink::interactive("tty-err"));
    let logger = Logger::new(
        LoggerOptions::new()
            .sink(console_out.clone())
            .sink(console_err.clone()),
        "app",
    )
    .unwrap();

    logger.error("only once", &[]).await.unwrap();
    logger.info("regular", &[]).await.unwrap();

    assert_eq!(console_err.lines().len(), 1);
    assert!(console_err.contents().contains("ERROR [app] - only once"));
    assert_eq!(console_out.lines().len(), 1);
    assert!(console_out.contents().contains(" INFO [app] - regular"));
}

#[tokio::test]
async fn test_json_single_line_with_embedded_newlines() {
    let (logger, primary, _) = json_logger(LogLevel::Debug, &[]);

    logger.info("line1\nline2", &[]).await.unwrap();
    logger
        .info("%s", &[json!("a\r\nb\nc")])
        .await
        .unwrap();

    let contents = primary.contents();
    assert_eq!(contents.lines().count(), 2, "Each message must be one physical line");
    assert!(contents.contains(r#""text":"line1\nline2""#));
}

#[tokio::test]
async fn test_json_round_trip_of_level_and_tags() {
    let (root, primary, _) = json_logger(LogLevel::Debug, &["svc", "svc"]);
    let logger = root.child("db");

    logger
        .warn_with_tags(vec!["slow", "svc"], "query took %dms", &[json!(950)])
        .await
        .unwrap();

    let line = primary.lines().pop().unwrap();
    let message: Message = serde_json::from_str(&line).expect("Line should parse as Message");
    assert_eq!(message.level, LogLevel::Warn);
    assert_eq!(message.tags, vec!["svc", "svc", "db", "slow", "svc"]);
    assert_eq!(message.text, "query took 950ms");
    assert!(message.stack.is_none());
}

#[tokio::test]
async fn test_text_output_to_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out_file = temp_dir.path().join("app.log");
    let err_file = temp_dir.path().join("errors.log");

    let logger = Logger::new(
        LoggerOptions::new()
            .level(LogLevel::Info)
            .destination(out_file.display().to_string())
            .destination(err_file.display().to_string()),
        "files",
    )
    .expect("Failed to build logger");

    logger.info("started on port %d", &[json!(8080)]).await.unwrap();
    logger.warn("disk at %d%%", &[json!(91)]).await.unwrap();

    let out = fs::read_to_string(&out_file).expect("Failed to read log file");
    let err = fs::read_to_string(&err_file).expect("Failed to read log file");

    let out_lines: Vec<&str> = out.lines().collect();
    assert_eq!(out_lines.len(), 2);
    assert!(out_lines[0].ends_with(" INFO [files] - started on port 8080"));
    assert!(out_lines[1].ends_with(" WARN [files] - disk at 91%"));
    assert_eq!(err.lines().count(), 1);
}

#[tokio::test]
async fn test_file_destination_is_appended() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("append.log");
    let path = log_file.display().to_string();

    for run in 0..2 {
        let logger = Logger::new(
            LoggerOptions::new()
                .destination(path.as_str())
                .log_function(DEFAULT_JSON),
            Tags::new(),
        )
        .unwrap();
        logger.info("run %d", &[json!(run)]).await.unwrap();
    }

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn test_unopenable_file_fails_construction() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = LoggerFactory::new(
        LoggerOptions::new().destination(temp_dir.path().display().to_string()),
    )
    .unwrap_err();
    assert!(matches!(err, LoggerError::IoOperation { .. }));
}

#[tokio::test]
async fn test_factory_from_loaded_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("configured.log");

    let raw = json!({
        "level": "warn",
        "destinations": [log_file.display().to_string()],
        "logFunction": "defaultJson",
    });
    let config: LoggerConfig = serde_json::from_value(raw).unwrap();
    let factory = LoggerFactory::from_config(config, &LogFunctionRegistry::new()).unwrap();

    let api = factory.logger("api");
    let jobs = factory.logger("jobs");
    api.info("hidden", &[]).await.unwrap();
    api.warn("api warning", &[]).await.unwrap();
    jobs.error("job failed", &[]).await.unwrap();

    let content = fs::read_to_string(&log_file).unwrap();
    let lines: Vec<Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["tags"], json!(["api"]));
    assert_eq!(lines[1]["tags"], json!(["jobs"]));
    assert_eq!(factory.metrics().dispatched_count(), 3);
}

#[test]
fn test_config_errors_fail_fast() {
    let registry = LogFunctionRegistry::new();

    let config: LoggerConfig = serde_json::from_str(r#"{"level": "loud"}"#).unwrap();
    assert!(LoggerFactory::from_config(config, &registry)
        .unwrap_err()
        .is_config_error());

    let config: LoggerConfig =
        serde_json::from_str(r#"{"destinations": [{"path": "x.log"}]}"#).unwrap();
    assert!(LoggerFactory::from_config(config, &registry)
        .unwrap_err()
        .is_config_error());

    let config: LoggerConfig =
        serde_json::from_str(r#"{"logFunctions": ["$baseDir/log/custom:write"]}"#).unwrap();
    assert!(LoggerFactory::from_config(config, &registry)
        .unwrap_err()
        .is_config_error());
}

#[tokio::test]
async fn test_registered_custom_log_function() {
    let collected = Arc::new(parking_lot::Mutex::new(Vec::<String>::new()));
    let collected_clone = Arc::clone(&collected);

    let mut registry = LogFunctionRegistry::new();
    registry.register(
        "upper",
        log_fn("upper", move |message, should_log, destinations| {
            let collected = Arc::clone(&collected_clone);
            async move {
                if !should_log {
                    return Ok(());
                }
                let line = format!("{}\n", message.text.to_uppercase());
                collected.lock().push(line.clone());
                destinations[0].write(line.as_bytes()).await
            }
            .boxed()
        }),
    );

    let sink = Arc::new(MemorySink::new("custom"));
    let factory = LoggerFactory::with_registry(
        LoggerOptions::new()
            .level(LogLevel::Info)
            .sink(sink.clone())
            .log_function("upper")
            .log_function(DEFAULT_JSON),
        &registry,
    )
    .unwrap();

    let logger = factory.root();
    logger.info("shout %s", &[json!("this")]).await.unwrap();
    logger.debug("whisper", &[]).await.unwrap();

    assert_eq!(collected.lock().as_slice(), ["SHOUT THIS\n"]);
    // Both log functions wrote to the same sink
    assert_eq!(sink.lines().len(), 2);
}

#[tokio::test]
async fn test_inline_log_function() {
    let sink = Arc::new(MemorySink::new("inline"));
    let inline = log_fn("tagsOnly", |message, should_log, destinations| {
        async move {
            if should_log {
                let line = format!("{}\n", message.tags.join("|"));
                destinations[0].write(line.as_bytes()).await?;
            }
            Ok::<(), LoggerError>(())
        }
        .boxed()
    });

    let logger = Logger::new(
        LoggerOptions::new()
            .sink(sink.clone())
            .log_function(LogFunctionSpec::Inline(inline)),
        ["a", "b"],
    )
    .unwrap();
    logger.info_with_tags("c", "ignored", &[]).await.unwrap();

    assert_eq!(sink.lines(), vec!["a|b|c"]);
}

#[tokio::test]
async fn test_write_failure_does_not_stop_other_destination() {
    let (logger, primary, secondary) = json_logger(LogLevel::Debug, &[]);
    secondary.set_failing(true);

    let err = logger.error("partial", &[]).await.unwrap_err();
    assert!(matches!(err, LoggerError::WriteFailure { ref sink, .. } if sink == "secondary"));
    assert_eq!(primary.lines().len(), 1);

    // INFO only touches the healthy primary
    logger.info("fine", &[]).await.unwrap();
    assert_eq!(primary.lines().len(), 2);
}

#[tokio::test]
async fn test_invalid_level_token_at_call() {
    let (logger, primary, _) = json_logger(LogLevel::Debug, &[]);
    let err = logger.log_with_tags("verbose", "x", "nope", &[]).await.unwrap_err();
    assert!(err.is_config_error());
    assert!(primary.contents().is_empty());
}
