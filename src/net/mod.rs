//! HTTP boundary: request helpers, response types, and header parsing.
//!
//! Real network calls live in [`api`] behind the `hydrate` feature; the
//! response types and the `Content-Disposition` parser are plain Rust and
//! tested natively.

pub mod api;
pub mod disposition;
pub mod error;
pub mod types;
