use super::level::Level;
use super::sink::{Logger, LoggerConfig, Record, Sink, Threshold};
use chrono::SecondsFormat;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::io::{self, Write};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// One JSON object per line, keys in a fixed order:
/// `time`, `level`, `msg`, then the record fields as given.
pub struct JsonSink {
    writer: BoxMakeWriter,
    threshold: Threshold,
    with_time: bool,
}

struct JsonRecord<'r, 'a> {
    record: &'r Record<'a>,
    with_time: bool,
}

impl Serialize for JsonRecord<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let record = self.record;
        let mut map = serializer.serialize_map(None)?;
        if self.with_time {
            let time = record.time.to_rfc3339_opts(SecondsFormat::Nanos, false);
            map.serialize_entry("time", &time)?;
        }
        map.serialize_entry("level", record.level.as_str())?;
        map.serialize_entry("msg", record.message)?;
        for (key, value) in &record.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl JsonSink {
    pub fn new<W>(writer: W, config: LoggerConfig) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        Self {
            writer: BoxMakeWriter::new(writer),
            threshold: config.threshold(),
            with_time: config.with_time,
        }
    }

    fn format(&self, record: &Record<'_>) -> io::Result<Vec<u8>> {
        let mut line = serde_json::to_vec(&JsonRecord {
            record,
            with_time: self.with_time,
        })?;
        line.push(b'\n');
        Ok(line)
    }
}

impl Sink for JsonSink {
    fn enabled(&self, level: Level) -> bool {
        self.threshold.allows(level)
    }

    fn emit(&self, record: &Record<'_>) -> io::Result<()> {
        let line = self.format(record)?;
        self.writer.make_writer().write_all(&line)
    }
}

/// Builds a structured (JSON lines) logger. Threshold rules match
/// [`new_text_logger`](super::new_text_logger).
pub fn new_structured_logger<W>(writer: W, config: Option<LoggerConfig>) -> Logger
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    Logger::new(JsonSink::new(writer, config.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::value::pairs;
    use serde_json::Value as Json;

    #[test]
    fn test_field_order_and_types() {
        let sink = JsonSink::new(io::sink, LoggerConfig::default().without_time());
        let kv = crate::kv![
            "component",
            "endpoint",
            "addr",
            0x81u8,
            "halted",
            true,
            "ratio",
            0.5
        ];
        let record = Record::new(Level::Warn, "clear halt", pairs(&kv));
        let line = sink.format(&record).unwrap();
        let text = String::from_utf8(line).unwrap();
        assert_eq!(
            text,
            concat!(
                r#"{"level":"WARN","msg":"clear halt","component":"endpoint","#,
                r#""addr":129,"halted":true,"ratio":0.5}"#,
                "\n",
            )
        );
    }

    #[test]
    fn test_time_is_rfc3339() {
        let sink = JsonSink::new(io::sink, LoggerConfig::default());
        let record = Record::new(Level::Info, "x", Vec::new());
        let line = sink.format(&record).unwrap();
        let parsed: Json = serde_json::from_slice(&line).unwrap();
        let time = parsed["time"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(time).is_ok());
    }
}
