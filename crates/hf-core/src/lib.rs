//! hf-core: shared foundation for hyperflow.
//!
//! Contains:
//! - units (uom angle types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HfError, HfResult};
pub use numeric::*;
pub use units::*;
