//! Header inputs as they arrive at the service boundary
//!
//! A header is either raw delimited text that still has to go through the
//! [`HeaderTokenizer`](crate::HeaderTokenizer), or a list of field names the
//! caller already split.

use crate::tokenizer::HeaderTokenizer;
use crate::Result;
use serde::{Deserialize, Serialize};

/// One header row, owned. Field names are compared byte for byte.
pub type TokenList = Vec<String>;

/// A baseline or candidate header in either raw or tokenized form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeaderInput {
    /// Delimited text, e.g. `"Date,Time,ZIP"`
    Raw(String),
    /// Already split field names, e.g. `["Date", "Time", "ZIP"]`
    Tokens(TokenList),
}

impl HeaderInput {
    /// Resolve the input into a token list.
    ///
    /// `field` names the input in error messages (`baseline`, `compare[3]`).
    /// Tokenized inputs are passed through untouched.
    pub fn tokens(&self, tokenizer: &HeaderTokenizer, field: &str) -> Result<TokenList> {
        match self {
            HeaderInput::Raw(text) => tokenizer.tokenize(text, field),
            HeaderInput::Tokens(tokens) => Ok(tokens.clone()),
        }
    }
}

impl From<&str> for HeaderInput {
    fn from(text: &str) -> Self {
        HeaderInput::Raw(text.to_string())
    }
}

impl From<String> for HeaderInput {
    fn from(text: String) -> Self {
        HeaderInput::Raw(text)
    }
}

impl From<Vec<String>> for HeaderInput {
    fn from(tokens: Vec<String>) -> Self {
        HeaderInput::Tokens(tokens)
    }
}

impl From<Vec<&str>> for HeaderInput {
    fn from(tokens: Vec<&str>) -> Self {
        HeaderInput::Tokens(tokens.into_iter().map(str::to_string).collect())
    }
}
