//! Small shared helpers.

pub mod download;
pub mod file_size;
