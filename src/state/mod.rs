//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`upload`, `status`) so individual components
//! depend on small focused models. Both modules are plain Rust with no
//! browser types, wrapped in `RwSignal`s by the components that own them,
//! and tested natively.

pub mod status;
pub mod upload;
