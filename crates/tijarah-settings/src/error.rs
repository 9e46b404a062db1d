/// Error returned when a settings value cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Not one of the seven business entities.
    UnknownEntity(String),
    /// Not a supported language code.
    UnknownLanguage(String),
    /// Not a recognized log level name.
    UnknownLogLevel(String),
    /// A `{...}` placeholder in a log template names no known field.
    UnknownPlaceholder(String),
    /// A `{` in a log template is never closed.
    UnclosedPlaceholder,
    /// A `}` in a log template is neither doubled nor closing a placeholder.
    UnmatchedBrace,
    /// The log template never prints the message.
    MissingMessage,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownEntity(name) => write!(f, "unknown entity: {name}"),
            Self::UnknownLanguage(code) => write!(f, "unsupported language: {code}"),
            Self::UnknownLogLevel(level) => write!(f, "unknown log level: {level}"),
            Self::UnknownPlaceholder(name) => {
                write!(f, "unknown placeholder in log format: {{{name}}}")
            }
            Self::UnclosedPlaceholder => write!(f, "unclosed '{{' in log format"),
            Self::UnmatchedBrace => write!(f, "unmatched '}}' in log format (use '}}}}')"),
            Self::MissingMessage => write!(f, "log format must contain {{message}}"),
        }
    }
}

impl std::error::Error for ParseError {}
