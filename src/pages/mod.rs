//! Route views, one per upload tool.

pub mod converter;
pub mod extractor;
pub mod verifier;
