use super::level::Level;
use super::sink::{Logger, LoggerConfig, Record, Sink, Threshold};
use super::value::Value;
use chrono::SecondsFormat;
use std::fmt::Write as _;
use std::io::{self, Write};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Line-oriented `key=value` sink.
///
/// `time=... level=INFO msg="bulk out done" component=transfer len=64`
pub struct TextSink {
    writer: BoxMakeWriter,
    threshold: Threshold,
    with_time: bool,
}

impl TextSink {
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

    fn format(&self, record: &Record<'_>) -> String {
        let mut line = String::with_capacity(96);
        if self.with_time {
            let time = record.time.to_rfc3339_opts(SecondsFormat::Millis, false);
            push_field(&mut line, "time", &time);
        }
        push_field(&mut line, "level", record.level.as_str());
        push_field(&mut line, "msg", record.message);
        push_fields(&mut line, &record.fields);
        line.push('\n');
        line
    }
}

impl Sink for TextSink {
    fn enabled(&self, level: Level) -> bool {
        self.threshold.allows(level)
    }

    fn emit(&self, record: &Record<'_>) -> io::Result<()> {
        let line = self.format(record);
        // One write per record keeps lines whole on writers that lock per call.
        self.writer.make_writer().write_all(line.as_bytes())
    }
}

/// Builds a text logger over any `MakeWriter`: stderr, `Mutex<File>`,
/// [`MemoryWriter`](super::MemoryWriter) and so on.
pub fn new_text_logger<W>(writer: W, config: Option<LoggerConfig>) -> Logger
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    Logger::new(TextSink::new(writer, config.unwrap_or_default()))
}

fn needs_quoting(s: &str) -> bool {
    let special = |c: char| c.is_whitespace() || c.is_control() || c == '=' || c == '"';
    s.is_empty() || s.chars().any(special)
}

fn push_str(buf: &mut String, s: &str) {
    if needs_quoting(s) {
        let _ = write!(buf, "{s:?}");
    } else {
        buf.push_str(s);
    }
}

fn push_field(buf: &mut String, key: &str, value: &str) {
    if !buf.is_empty() {
        buf.push(' ');
    }
    push_str(buf, key);
    buf.push('=');
    push_str(buf, value);
}

/// Appends `key=value` tokens, space separated.
pub(crate) fn push_fields(buf: &mut String, fields: &[(&str, &Value)]) {
    for (key, value) in fields {
        match value {
            Value::Str(s) => push_field(buf, key, s),
            other => push_field(buf, key, &other.to_string()),
        }
    }
}
