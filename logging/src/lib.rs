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
    s.serialize_str(&x.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Writes a log record as a single JSON object so log aggregators can ingest
/// it without parsing rules.
///
/// `jlog!(Info, "Server started")` produces
/// `{"level": "INFO", "target": "none", "message": "Server started"}`.
/// Metadata merges into the same object:
/// ```text
/// jlog!(Warn, "encore_api::server", "Listen failed", {"port": port})
/// ```
#[macro_export]
macro_rules! jlog {
    ($t:path, $msg:expr) => {{
        use $crate::emit;
        emit($t, None, $msg, None)
    }};
    ($t:path, $msg:expr, $json:tt) => {{
        use $crate::emit;
        emit($t, None, $msg, Some(json!($json)))
    }};
    ($t:path, $target: expr, $msg:expr, $json:tt) => {{
        use $crate::emit;
        emit($t, Some($target), $msg, Some(json!($json)))
    }};
}

pub fn emit(level: log::Level, target: Option<&str>, msg: &str, meta: Option<serde_json::Value>) {
    let entry = LogEntry {
        level: level.to_string(),
        time: Utc::now(),
        target: target.unwrap_or("none").to_string(),
        message: msg.trim().to_string(),
        meta,
    };
    let line = serde_json::to_string(&entry).unwrap_or_else(|_| entry.message.clone());
    match target {
        Some(t) => log!(target: t, level, "{}", line),
        None => log!(level, "{}", line),
    }
}

/// Installs an env_logger that leaves pre-rendered JSON lines alone and wraps
/// everything else (actix access logs, third party crates) in the same entry
/// shape.
pub fn setup_logger() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let msg = format!("{}", record.args());
            if msg.starts_with('{') && msg.ends_with('}') {
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
                    Ok(s) => writeln!(buf, "{}", s),
                    Err(err) => writeln!(buf, "could not serialize log entry: {:?}, {:?}", err, entry),
                }
            }
        })
        .init();
}
