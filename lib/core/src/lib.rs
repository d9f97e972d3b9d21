//! # colsim Core
//!
//! Core types for the colsim header comparison service.
//!
//! - [`HeaderInput`] - a header as raw delimited text or as split field names
//! - [`HeaderTokenizer`] - CSV-aware splitting with configurable separator and comment prefix
//! - [`Error`] - client-input error classes shared by every crate
//!
//! ## Example
//!
//! ```rust
//! use colsim_core::{HeaderInput, HeaderTokenizer, TokenizerConfig};
//!
//! let tokenizer = HeaderTokenizer::new(TokenizerConfig::default()).unwrap();
//! let header = HeaderInput::from("Date,Time,ZIP");
//! let tokens = header.tokens(&tokenizer, "baseline").unwrap();
//! assert_eq!(tokens, vec!["Date", "Time", "ZIP"]);
//! ```

pub mod error;
pub mod header;
pub mod tokenizer;

pub use error::{Error, Result};
pub use header::{HeaderInput, TokenList};
pub use tokenizer::{HeaderTokenizer, TokenizerConfig, DEFAULT_SEPARATOR};
