//! # apphelper
//!
//! Small, self-contained backend helpers shared by our web services.
//!
//! ## Features
//!
//! - **SQL explicit**: the query builder accumulates raw clause fragments and
//!   renders a plain SELECT statement (use [`QueryBuilder`])
//! - **Uniform API errors**: every client-facing failure becomes a 422 JSON
//!   payload (use [`respond::error_response`])
//! - **One-call logging setup**: console plus a daily-rotating error/debug
//!   file (use [`logging::LogConfig`])
//! - **Rule-based validation**: pipe-delimited rule strings checked against a
//!   JSON model (use [`validate::validate`], feature `validate`)
//!
//! ## Query builder
//!
//! ```
//! use apphelper::QueryBuilder;
//!
//! let mut qb = QueryBuilder::new(false);
//! let sql = qb
//!     .select("id")
//!     .from("users")
//!     .and_where("age > 18")
//!     .order_by("id")
//!     .paged(2, 5)
//!     .render();
//! assert_eq!(sql, "SELECT id\nFROM users\nWHERE (age > 18)\nORDER BY id\nLIMIT 5\nOFFSET 5");
//! ```
//!
//! The builder performs no validation and no escaping: fragments are inserted
//! verbatim, and the caller is responsible for sanitizing anything derived
//! from user input.

pub mod address;
pub mod builder;
pub mod error;
pub mod logging;
pub mod respond;

#[cfg(feature = "validate")]
pub mod validate;

pub use address::btc_address;
pub use builder::QueryBuilder;
pub use error::{HelperError, HelperResult};
pub use logging::LogConfig;
pub use respond::{ErrorResponse, error_response, error_text};

#[cfg(feature = "validate")]
pub use validate::validate;
