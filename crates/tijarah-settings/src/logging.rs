//! Log severity levels and the message template.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing::level_filters::LevelFilter;

use crate::defaults::LOG_FORMAT;
use crate::error::ParseError;

/// Minimum severity a log event needs to be emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LogLevel {
    /// Diagnostic detail.
    Debug,
    /// Normal operation.
    #[default]
    Info,
    /// Something unexpected that was recovered from.
    Warning,
    /// An operation failed.
    Error,
    /// The application cannot continue.
    Critical,
}

impl LogLevel {
    /// Uppercase name, e.g. `WARNING`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Equivalent `tracing` filter. `tracing` has no level above `ERROR`,
    /// so `Critical` filters the same as `Error`.
    #[must_use]
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Debug => LevelFilter::DEBUG,
            Self::Info => LevelFilter::INFO,
            Self::Warning => LevelFilter::WARN,
            Self::Error | Self::Critical => LevelFilter::ERROR,
        }
    }

    /// Label printed for an event emitted at `level`.
    #[must_use]
    pub fn label(level: &Level) -> &'static str {
        if *level == Level::WARN {
            "WARNING"
        } else {
            level.as_str()
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" | "WARN" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err(ParseError::UnknownLogLevel(String::from(s))),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, ParseError> {
        value.parse()
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        Self::from(level.as_str())
    }
}

/// Field a log template placeholder refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Timestamp,
    Target,
    Level,
    Message,
}

impl Field {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "timestamp" => Some(Self::Timestamp),
            "target" | "name" => Some(Self::Target),
            "level" => Some(Self::Level),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// Values substituted into a [`LogFormat`].
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    /// Formatted event time.
    pub timestamp: &'a str,
    /// Logger name (the event target).
    pub target: &'a str,
    /// Severity label.
    pub level: &'a str,
    /// Rendered message.
    pub message: &'a str,
}

/// Log message template with `{timestamp}`, `{target}`, `{level}` and
/// `{message}` placeholders. `{name}` is accepted as an alias of
/// `{target}`; `{{` and `}}` produce literal braces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogFormat {
    template: String,
    segments: Vec<Segment>,
}

impl LogFormat {
    /// Parses a template.
    ///
    /// # Errors
    ///
    /// Returns an error if a placeholder is unknown or unclosed, if a `}`
    /// is neither doubled nor closing a placeholder, or if the template has
    /// no `{message}`.
    pub fn parse(template: &str) -> Result<Self, ParseError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(ParseError::UnmatchedBrace),
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(ch) => name.push(ch),
                            None => return Err(ParseError::UnclosedPlaceholder),
                        }
                    }
                    let field =
                        Field::from_name(&name).ok_or(ParseError::UnknownPlaceholder(name))?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(field));
                }
                other => literal.push(other),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        if !segments.contains(&Segment::Field(Field::Message)) {
            return Err(ParseError::MissingMessage);
        }

        Ok(Self {
            template: String::from(template),
            segments,
        })
    }

    /// The template as written.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Writes `record` through the template into `out`.
    ///
    /// # Errors
    ///
    /// Propagates errors from `out`.
    pub fn write_to(&self, out: &mut impl std::fmt::Write, record: &LogRecord<'_>) -> std::fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.write_str(text)?,
                Segment::Field(Field::Timestamp) => out.write_str(record.timestamp)?,
                Segment::Field(Field::Target) => out.write_str(record.target)?,
                Segment::Field(Field::Level) => out.write_str(record.level)?,
                Segment::Field(Field::Message) => out.write_str(record.message)?,
            }
        }
        Ok(())
    }

    /// Renders `record` into a new string.
    #[must_use]
    pub fn render(&self, record: &LogRecord<'_>) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut out, record);
        out
    }
}

impl Default for LogFormat {
    fn default() -> Self {
        Self {
            template: String::from(LOG_FORMAT),
            segments: vec![
                Segment::Field(Field::Timestamp),
                Segment::Literal(String::from(" - ")),
                Segment::Field(Field::Target),
                Segment::Literal(String::from(" - ")),
                Segment::Field(Field::Level),
                Segment::Literal(String::from(" - ")),
                Segment::Field(Field::Message),
            ],
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.template)
    }
}

impl FromStr for LogFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LogFormat {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LogFormat> for String {
    fn from(format: LogFormat) -> Self {
        format.template
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn record() -> LogRecord<'static> {
        LogRecord {
            timestamp: "2024-01-01 00:00:00,000",
            target: "tijarah",
            level: "INFO",
            message: "ready",
        }
    }

    #[test]
    fn test_default_format_matches_parsed_template() {
        // Arrange & Act
        let parsed = LogFormat::parse(LOG_FORMAT).unwrap();

        // Assert
        assert_eq!(parsed, LogFormat::default());
    }

    #[test]
    fn test_render_default() {
        // Arrange
        let format = LogFormat::default();

        // Act
        let line = format.render(&record());

        // Assert
        assert_eq!(line, "2024-01-01 00:00:00,000 - tijarah - INFO - ready");
    }

    #[test]
    fn test_render_custom_with_escaped_braces() {
        // Arrange
        let format = LogFormat::parse("{{{level}}} {name}: {message}").unwrap();

        // Act
        let line = format.render(&record());

        // Assert
        assert_eq!(line, "{INFO} tijarah: ready");
    }

    #[test]
    fn test_message_text_is_not_reinterpreted() {
        // Arrange
        let format = LogFormat::default();
        let rec = LogRecord {
            message: "{level}",
            ..record()
        };

        // Act
        let line = format.render(&rec);

        // Assert
        assert!(line.ends_with("INFO - {level}"));
    }

    #[test]
    fn test_parse_errors() {
        // Arrange & Act & Assert
        assert_eq!(
            LogFormat::parse("{when} {message}"),
            Err(ParseError::UnknownPlaceholder(String::from("when")))
        );
        assert_eq!(
            LogFormat::parse("{message"),
            Err(ParseError::UnclosedPlaceholder)
        );
        assert_eq!(
            LogFormat::parse("{timestamp} {level}"),
            Err(ParseError::MissingMessage)
        );
    }

    #[test]
    fn test_parse_rejects_lone_closing_brace() {
        // Arrange & Act & Assert
        assert_eq!(
            LogFormat::parse("{level}} {message}"),
            Err(ParseError::UnmatchedBrace)
        );
        assert_eq!(
            LogFormat::parse("} {message}"),
            Err(ParseError::UnmatchedBrace)
        );
        assert!(LogFormat::parse("}} {message}").is_ok());
    }

    #[test]
    fn test_level_parse_and_display() {
        // Arrange & Act & Assert
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("critical".parse::<LogLevel>().unwrap(), LogLevel::Critical);
        assert!("verbose".parse::<LogLevel>().is_err());
        assert_eq!(LogLevel::default().to_string(), "INFO");
    }

    #[test]
    fn test_level_filter_mapping() {
        // Arrange & Act & Assert
        assert_eq!(LogLevel::Info.level_filter(), LevelFilter::INFO);
        assert_eq!(LogLevel::Critical.level_filter(), LevelFilter::ERROR);
        assert_eq!(LogLevel::label(&Level::WARN), "WARNING");
    }

    #[test]
    fn test_level_serde_uses_uppercase_names() {
        // Arrange & Act
        let json = serde_json::to_string(&LogLevel::Debug).unwrap();
        let parsed: LogLevel = serde_json::from_str("\"error\"").unwrap();

        // Assert
        assert_eq!(json, "\"DEBUG\"");
        assert_eq!(parsed, LogLevel::Error);
    }
}
