//! CSV header tokenizer
//!
//! Turns raw delimited text into the ordered field names of its first record.
//! Parsing follows RFC 4180 quoting via the `csv` crate; the separator and an
//! optional comment prefix are configurable per request.

use crate::header::TokenList;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SEPARATOR: char = ',';

/// Separator and comment settings for splitting a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenizerConfig {
    #[serde(default = "default_separator")]
    pub separator: char,
    #[serde(default)]
    pub comment_prefix: Option<char>,
}

fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            comment_prefix: None,
        }
    }
}

impl TokenizerConfig {
    /// Build a config from the loosely typed strings a client sends.
    ///
    /// `None` or an empty string keeps the default. Anything longer than one
    /// character is rejected.
    pub fn from_parts(separator: Option<&str>, comment_prefix: Option<&str>) -> Result<Self> {
        let separator = match single_char("separator", separator)? {
            Some(c) => c,
            None => DEFAULT_SEPARATOR,
        };
        let comment_prefix = single_char("comment prefix", comment_prefix)?;
        Ok(Self { separator, comment_prefix })
    }
}

fn single_char(name: &str, value: Option<&str>) -> Result<Option<char>> {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return Ok(None),
    };
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Some(c)),
        _ => Err(Error::InvalidConfig(format!(
            "{} must be a single character, got {:?}",
            name, value
        ))),
    }
}

/// A validated tokenizer, cheap to copy and safe to share across threads
#[derive(Debug, Clone, Copy)]
pub struct HeaderTokenizer {
    separator: u8,
    comment: Option<u8>,
}

impl HeaderTokenizer {
    pub fn new(config: TokenizerConfig) -> Result<Self> {
        let separator = control_byte("separator", config.separator)?;
        let comment = config
            .comment_prefix
            .map(|c| control_byte("comment prefix", c))
            .transpose()?;

        if comment == Some(separator) {
            return Err(Error::InvalidConfig(
                "comment prefix must differ from the separator".to_string(),
            ));
        }

        Ok(Self { separator, comment })
    }

    pub fn separator(&self) -> char {
        self.separator as char
    }

    pub fn comment_prefix(&self) -> Option<char> {
        self.comment.map(|c| c as char)
    }

    /// Split `text` and return the fields of its first record.
    ///
    /// Blank and comment lines are skipped. Every record must have as many
    /// fields as the first one, and quoting must be well formed. Input
    /// without any record yields an empty list.
    pub fn tokenize(&self, text: &str, field: &str) -> Result<TokenList> {
        self.check_quoting(text).map_err(|message| Error::Tokenize {
            field: field.to_string(),
            message,
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(self.separator)
            .comment(self.comment)
            .from_reader(text.as_bytes());

        let mut header: Option<TokenList> = None;
        for record in reader.records() {
            let record = record.map_err(|e| Error::Tokenize {
                field: field.to_string(),
                message: e.to_string(),
            })?;
            if header.is_none() {
                header = Some(record.iter().map(str::to_string).collect());
            }
        }

        Ok(header.unwrap_or_default())
    }

    /// Reject quoting the `csv` reader would silently repair: a `"` inside an
    /// unquoted field, anything but a separator or line end after a closing
    /// quote, and a quoted field still open at the end of input.
    fn check_quoting(&self, text: &str) -> std::result::Result<(), String> {
        #[derive(Clone, Copy, PartialEq, Eq)]
        enum State {
            RecordStart,
            FieldStart,
            Unquoted,
            Quoted,
            QuoteInQuoted,
            Comment,
        }

        let mut state = State::RecordStart;
        let mut line = 1;

        for (offset, b) in text.bytes().enumerate() {
            state = match (state, b) {
                (State::Comment, b'\n') => State::RecordStart,
                (State::Comment, _) => State::Comment,
                (State::RecordStart, c) if Some(c) == self.comment => State::Comment,
                (State::Quoted, b'"') => State::QuoteInQuoted,
                (State::Quoted, _) => State::Quoted,
                (State::QuoteInQuoted, b'"') => State::Quoted,
                (State::RecordStart | State::FieldStart, b'"') => State::Quoted,
                (State::Unquoted, b'"') => {
                    return Err(format!("line {}, byte {}: bare \" in non-quoted field", line, offset));
                }
                (_, b'\n') | (_, b'\r') => State::RecordStart,
                (_, c) if c == self.separator => State::FieldStart,
                (State::QuoteInQuoted, _) => {
                    return Err(format!(
                        "line {}, byte {}: unexpected character after closing quote",
                        line, offset
                    ));
                }
                _ => State::Unquoted,
            };
            if b == b'\n' {
                line += 1;
            }
        }

        if state == State::Quoted {
            return Err(format!("line {}: quoted field is never closed", line));
        }
        Ok(())
    }
}

fn control_byte(name: &str, c: char) -> Result<u8> {
    if !c.is_ascii() || matches!(c, '"' | '\r' | '\n' | '\0') {
        return Err(Error::InvalidConfig(format!(
            "{} {:?} is not usable, expected a printable ASCII character other than '\"'",
            name, c
        )));
    }
    Ok(c as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_tokenizer() -> HeaderTokenizer {
        HeaderTokenizer::new(TokenizerConfig::default()).unwrap()
    }

    #[test]
    fn test_simple_header() {
        let tokens = default_tokenizer()
            .tokenize("Date,Time,ZIP,Address,Reason", "baseline")
            .unwrap();
        assert_eq!(tokens, vec!["Date", "Time", "ZIP", "Address", "Reason"]);
    }

    #[test]
    fn test_quoted_fields() {
        let tokens = default_tokenizer()
            .tokenize("\"Zip, Code\",\"Say \"\"hi\"\"\",Date", "baseline")
            .unwrap();
        assert_eq!(tokens, vec!["Zip, Code", "Say \"hi\"", "Date"]);
    }

    #[test]
    fn test_only_first_record_is_used() {
        let tokens = default_tokenizer()
            .tokenize("Date,Time\n2016-01-01,12:00\n", "baseline")
            .unwrap();
        assert_eq!(tokens, vec!["Date", "Time"]);
    }

    #[test]
    fn test_custom_separator_and_comment() {
        let config = TokenizerConfig::from_parts(Some(";"), Some("#")).unwrap();
        let tokenizer = HeaderTokenizer::new(config).unwrap();
        let tokens = tokenizer
            .tokenize("# exported by tool\nDatum;Zeit;Temperatur\n", "baseline")
            .unwrap();
        assert_eq!(tokens, vec!["Datum", "Zeit", "Temperatur"]);
        assert_eq!(tokenizer.separator(), ';');
        assert_eq!(tokenizer.comment_prefix(), Some('#'));
    }

    #[test]
    fn test_empty_input_is_empty_list() {
        let tokenizer = default_tokenizer();
        assert!(tokenizer.tokenize("", "compare[0]").unwrap().is_empty());

        let config = TokenizerConfig::from_parts(None, Some("#")).unwrap();
        let tokenizer = HeaderTokenizer::new(config).unwrap();
        assert!(tokenizer.tokenize("# only a comment\n", "compare[0]").unwrap().is_empty());
    }

    #[test]
    fn test_ragged_records_fail() {
        let err = default_tokenizer()
            .tokenize("Date,Time\n1,2,3\n", "compare[1]")
            .unwrap_err();
        match err {
            Error::Tokenize { field, .. } => assert_eq!(field, "compare[1]"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_quoting_fails() {
        let tokenizer = default_tokenizer();
        for bad in ["\"abc,d", "a\"b,c", "\"a\"x,b", "Date,Time\n\"open,1\n"] {
            match tokenizer.tokenize(bad, "baseline") {
                Err(Error::Tokenize { field, .. }) => assert_eq!(field, "baseline"),
                other => panic!("{:?} tokenized as {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_well_formed_quoting_passes() {
        let tokenizer = default_tokenizer();
        assert_eq!(
            tokenizer.tokenize("\"multi\nline\",b\r\n\"x\",\"\"\r\n", "baseline").unwrap(),
            vec!["multi\nline", "b"]
        );

        // Quotes inside comment lines are not parsed
        let config = TokenizerConfig::from_parts(None, Some("#")).unwrap();
        let tokenizer = HeaderTokenizer::new(config).unwrap();
        assert_eq!(
            tokenizer.tokenize("# say \"hi\nDate,Time", "baseline").unwrap(),
            vec!["Date", "Time"]
        );
    }

    #[test]
    fn test_from_parts_defaults() {
        let config = TokenizerConfig::from_parts(Some(""), Some("")).unwrap();
        assert_eq!(config, TokenizerConfig::default());
        assert_eq!(TokenizerConfig::from_parts(None, None).unwrap(), TokenizerConfig::default());
    }

    #[test]
    fn test_from_parts_rejects_long_values() {
        let err = TokenizerConfig::from_parts(Some(";;"), None).unwrap_err();
        assert_eq!(err.kind(), "invalid_config");
    }

    #[test]
    fn test_invalid_control_characters() {
        for bad in ['"', '\n', '\r', '\0', 'ä'] {
            let config = TokenizerConfig { separator: bad, comment_prefix: None };
            assert!(HeaderTokenizer::new(config).is_err(), "separator {:?} accepted", bad);
        }

        let clash = TokenizerConfig { separator: ';', comment_prefix: Some(';') };
        assert!(matches!(HeaderTokenizer::new(clash), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_config_deserialize() {
        let config: TokenizerConfig = serde_json::from_str(r##"{"commentPrefix":"#"}"##).unwrap();
        assert_eq!(config.separator, ',');
        assert_eq!(config.comment_prefix, Some('#'));
    }
}
