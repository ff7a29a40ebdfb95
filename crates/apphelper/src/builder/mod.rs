//! Fluent SQL string builder.
//!
//! This module builds plain SELECT statements from raw clause fragments.
//!
//! ## Design
//!
//! - SQL is explicit (strings): fragments pass through verbatim, unvalidated.
//! - One builder per query; mutate through chained calls, then `render()`.
//! - Rendering is a pure read and may be repeated.

pub mod select;

pub use select::QueryBuilder;

#[cfg(test)]
mod tests;
