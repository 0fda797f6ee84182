pub type RadianceResult<T> = Result<T, RadianceError>;

/// Errors raised while configuring, validating, or running a Radiance command.
///
/// Type/range/value/protection errors are raised eagerly at assignment time
/// and never mutate the option they were aimed at. Missing/conflicting errors
/// are raised at validation time, once the full field set can be judged.
#[derive(thiserror::Error, Debug)]
pub enum RadianceError {
    #[error("wrong type for '{subject}': expected {expected}, got '{got}'")]
    Type {
        subject: String,
        expected: &'static str,
        got: String,
    },

    #[error("value {value} for option '{flag}' is out of range: {bounds}")]
    Range {
        flag: String,
        value: f64,
        bounds: String,
    },

    #[error("invalid value '{value}' for '{subject}': expected one of [{valid}]")]
    InvalidValue {
        subject: String,
        value: String,
        valid: String,
    },

    #[error("option '-{flag}' is computed internally by the command and cannot be set directly")]
    ProtectedOption { flag: String },

    #[error("{command}: missing required argument '{argument}'")]
    MissingArgument { command: String, argument: String },

    #[error("{command}: conflicting arguments: {message}")]
    ConflictingArguments { command: String, message: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RadianceError {
    pub fn type_error(
        subject: impl Into<String>,
        expected: &'static str,
        got: impl Into<String>,
    ) -> Self {
        Self::Type {
            subject: subject.into(),
            expected,
            got: got.into(),
        }
    }

    pub fn range(flag: impl Into<String>, value: f64, bounds: impl Into<String>) -> Self {
        Self::Range {
            flag: flag.into(),
            value,
            bounds: bounds.into(),
        }
    }

    pub fn invalid_value(
        subject: impl Into<String>,
        value: impl Into<String>,
        valid: &[&str],
    ) -> Self {
        Self::InvalidValue {
            subject: subject.into(),
            value: value.into(),
            valid: valid.join(", "),
        }
    }

    pub fn protected(flag: impl Into<String>) -> Self {
        Self::ProtectedOption { flag: flag.into() }
    }

    pub fn missing_argument(command: impl Into<String>, argument: impl Into<String>) -> Self {
        Self::MissingArgument {
            command: command.into(),
            argument: argument.into(),
        }
    }

    pub fn conflicting(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConflictingArguments {
            command: command.into(),
            message: message.into(),
        }
    }
}
