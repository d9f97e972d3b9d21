use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Baseline header has no fields")]
    EmptyBaseline,

    #[error("Unable to tokenize {field}: {message}")]
    Tokenize { field: String, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Stable machine-readable name of the error class, used in API responses.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::MissingField(_) => "missing_field",
            Error::EmptyBaseline => "empty_baseline",
            Error::Tokenize { .. } => "tokenize_failure",
            Error::InvalidConfig(_) => "invalid_config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::MissingField("baseline".into()).kind(), "missing_field");
        assert_eq!(Error::EmptyBaseline.kind(), "empty_baseline");
        assert_eq!(
            Error::Tokenize { field: "compare[0]".into(), message: "bad".into() }.kind(),
            "tokenize_failure"
        );
        assert_eq!(Error::InvalidConfig("separator".into()).kind(), "invalid_config");
    }

    #[test]
    fn test_error_messages() {
        let err = Error::Tokenize {
            field: "compare[2]".to_string(),
            message: "record 2 has 3 fields".to_string(),
        };
        assert_eq!(err.to_string(), "Unable to tokenize compare[2]: record 2 has 3 fields");
        assert_eq!(Error::MissingField("compare".into()).to_string(), "Missing field: compare");
    }
}
