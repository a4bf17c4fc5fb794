extern crate chrono;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[cfg_attr(test, macro_use)]
extern crate serde_json;

use chrono::{DateTime, SecondsFormat, Utc};
use env_logger::{Builder, Env};
use std::io::Write;

/// One log line, serialized as a single JSON object so that log shippers can
/// ingest it without a parsing stage. Metadata keys are flattened into the
/// top level object.
#[derive(Serialize, Debug)]
struct LogEntry {
    level: String,
    #[serde(serialize_with = "rfc3339_serializer")]
    time: DateTime<Utc>,
    target: String,
    message: String,
    #[serde(flatten)]
    meta: Option<serde_json::Value>,
}

fn rfc3339_serializer<S>(x: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_str(&x.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Writes a structured log message with optional JSON metadata.
///
/// `jlog!(Info, "Event cancelled")` produces
/// `{"level": "INFO", "target": "my_module", "message": "Event cancelled"}`;
/// metadata can be attached with
/// `jlog!(Warn, "Stale tombstone payload", {"key": key})` and an explicit
/// target with `jlog!(Debug, "vamos::checkout", "Order created", {"order_id": id})`.
#[macro_export]
macro_rules! jlog {
    ($level:path, $msg:expr) => {{
        $crate::log_structured($level, None, $msg, None)
    }};
    ($level:path, $msg:expr, $json:tt) => {{
        let meta = json!($json);
        $crate::log_structured($level, None, $msg, Some(meta))
    }};
    ($level:path, $target:expr, $msg:expr, $json:tt) => {{
        let meta = json!($json);
        $crate::log_structured($level, Some($target), $msg, Some(meta))
    }};
}

pub fn log_structured(level: log::Level, target: Option<&str>, msg: &str, meta: Option<serde_json::Value>) {
    let entry = LogEntry {
        level: level.to_string(),
        time: Utc::now(),
        target: target.unwrap_or("none").to_string(),
        message: msg.trim().to_string(),
        meta,
    };
    let line = match serde_json::to_string(&entry) {
        Ok(line) => line,
        Err(err) => format!("{{\"level\": \"ERROR\", \"message\": \"Unserializable log entry: {}\"}}", err),
    };
    match target {
        Some(t) => log!(target: t, level, "{}", line),
        None => log!(level, "{}", line),
    }
}

fn is_json(msg: &str) -> bool {
    msg.starts_with('{') && msg.ends_with('}')
}

/// Installs an env_logger that emits one JSON object per line. Messages that
/// are already JSON (everything routed through [jlog!]) pass through
/// untouched; plain messages from third party crates are wrapped.
pub fn setup_logger() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let msg = format!("{}", record.args());
            if is_json(&msg) {
                writeln!(buf, "{}", msg)
            } else {
                let entry = LogEntry {
                    level: record.level().to_string(),
                    time: Utc::now(),
                    target: record.target().to_string(),
                    message: msg.trim().to_string(),
                    meta: None,
                };
                match serde_json::to_string(&entry) {
                    Ok(line) => writeln!(buf, "{}", line),
                    Err(err) => writeln!(buf, "Failed to serialize log entry: Error: {:?}, Entry: {:?}", err, entry),
                }
            }
        })
        .init();
}

#[cfg(test)]
mod tests {
    use log::Level::*;

    #[test]
    fn jlog_forms() {
        jlog!(Warn, "message");
        jlog!(Warn, "message with metadata", {"a": 1});
        jlog!(Error, "metadata shapes", {"a": 1, "b": "two", "c": [3, 2, 1]});
        jlog!(Debug, "vamos::lifecycle", "targeted entry", {});
    }

    #[test]
    fn json_detection() {
        assert!(super::is_json(r#"{"level": "INFO"}"#));
        assert!(!super::is_json("plain message"));
    }
}
