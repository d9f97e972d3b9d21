//! # colsim API
//!
//! REST surface of the header comparison service.
//!
//! | Method | Path | Purpose |
//! |--------|------|---------|
//! | `PUT`/`POST` | `/compare` | Score candidate headers against a baseline |
//! | `GET` | `/health` | Liveness and version |

pub mod rest;

pub use rest::{configure, configure_with_limit, RestApi, RestConfig, DEFAULT_MAX_PAYLOAD_BYTES};
