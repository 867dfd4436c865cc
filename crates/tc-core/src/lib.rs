//! tc-core: shared foundation for the thermocouple reference crates.
//!
//! Contains:
//! - units (temperature scales, affine conversion table, voltage units, uom helpers)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TcError, TcResult};
pub use numeric::*;
pub use units::*;
