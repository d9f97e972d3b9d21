//! # colsim Similarity
//!
//! Structural distance between CSV header rows.
//!
//! The score of two rows combines how far shared field names moved
//! (an extended Spearman footrule) with how much the names at each position
//! differ (Levenshtein distance):
//!
//! ```text
//! score(a, b) = displacement(a, b) * Σ divergence(a[i], b[i])
//! ```
//!
//! ## Example
//!
//! ```rust
//! use colsim_similarity::{aggregate_distance, compare};
//!
//! let baseline = ["Date", "Time", "ZIP", "Address", "Reason"];
//! let swapped = ["Time", "Date", "ZIP", "Address", "Reason"];
//! assert_eq!(aggregate_distance(&baseline, &swapped), 12);
//!
//! let renamed = vec!["Date1", "Time", "ZIP", "Address", "Reason"];
//! let scores = compare(&baseline, &[swapped.to_vec(), renamed]).unwrap();
//! assert_eq!(scores, vec![12, 5]);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Request    │────>│  Tokenizer  │────>│  Compare    │
//! │ (raw/list)  │     │ (csv rows)  │     │ (per cand.) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                         ┌─────────────┐
//!                                         │  Aggregate  │
//!                                         └─────────────┘
//!                                           │         │
//!                              ┌─────────────┐       ┌─────────────┐
//!                              │ Displacement│       │ Divergence  │
//!                              │ (footrule)  │       │(levenshtein)│
//!                              └─────────────┘       └─────────────┘
//! ```

pub mod distance;
pub mod aggregate;
pub mod compare;

pub use distance::{content_divergence, positional_displacement, token_len};
pub use aggregate::{aggregate_distance, explain_distance, DistanceBreakdown};
pub use compare::{compare, compare_explained, ComparisonOutcome, ComparisonRequest};
