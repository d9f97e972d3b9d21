//! # colsim
//!
//! Structural distance between CSV header rows.
//!
//! colsim scores how much a candidate header row differs from a baseline row.
//! Reordered columns, renamed columns, and added or dropped columns all raise
//! the score; identical rows score 0.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! PORT=5000 colsim
//! curl -X PUT localhost:5000/compare \
//!   -H 'content-type: application/json' \
//!   -d '{"baseline": "Date,Time,ZIP", "compare": ["Time,Date,ZIP"]}'
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use colsim::prelude::*;
//!
//! let request = ComparisonRequest::new(
//!     "Date,Time,ZIP,Address,Reason",
//!     vec!["Time,Date,ZIP,Address,Reason".into()],
//! );
//! let outcome = request.execute().unwrap();
//! assert_eq!(outcome.scores, vec![12]);
//! ```
//!
//! ## Crate Structure
//!
//! - `colsim-core` - header inputs, CSV tokenizer, error model
//! - `colsim-similarity` - displacement, edit distance, aggregation, comparison service
//! - `colsim-api` - REST API

// Re-export core types
pub use colsim_core::{
    Error, Result,
    HeaderInput, TokenList,
    HeaderTokenizer, TokenizerConfig,
};

// Re-export the distance engine
pub use colsim_similarity::{
    aggregate_distance, explain_distance, DistanceBreakdown,
    content_divergence, positional_displacement,
    compare, compare_explained, ComparisonOutcome, ComparisonRequest,
};

// Re-export API
pub use colsim_api::{RestApi, RestConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Error, Result,
        HeaderInput, TokenList,
        HeaderTokenizer, TokenizerConfig,
        aggregate_distance, explain_distance, DistanceBreakdown,
        compare, ComparisonOutcome, ComparisonRequest,
        RestApi, RestConfig,
    };
}
