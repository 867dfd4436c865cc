//! tc-curve: piecewise reference functions for thermocouple EMF.
//!
//! A reference function is a sorted, contiguous list of temperature segments.
//! Each segment holds a polynomial (coefficients highest power first) and an
//! optional Gaussian term `a * exp(b * (t - c)^2)`.
//!
//! Provides:
//! - Forward evaluation of the value and derivatives up to order 3
//! - Out-of-range policies (raise, NaN, extrapolate)
//! - Parallel batch evaluation
//! - Inverse lookup (local Halley iteration, then Brent bracketing)
//! - Turning-point analysis to flag ambiguous inverse lookups
//!
//! # Example
//!
//! ```no_run
//! use tc_core::{TemperatureUnit, VoltageUnit};
//! use tc_curve::{InverseOptions, PiecewiseFunction, Segment};
//!
//! let f = PiecewiseFunction::new(
//!     vec![Segment::new(0.0, 100.0, vec![0.04, 0.0], None).unwrap()],
//!     TemperatureUnit::Celsius,
//!     VoltageUnit::Millivolt,
//!     "example",
//!     "ITS-90",
//! )
//! .unwrap();
//!
//! let emf = f.value(25.0).unwrap();
//! let t = f.inverse(emf, InverseOptions::default()).unwrap();
//! println!("{emf} mV at {t} °C");
//! ```

pub mod error;
pub mod function;
pub mod inverse;
pub mod monotonic;
pub mod policy;
pub mod polynomial;
pub mod roots;
pub mod segment;

pub use error::{CurveError, CurveResult};
pub use function::{PiecewiseFunction, Selection};
pub use inverse::InverseOptions;
pub use policy::{EvalOptions, OutOfRange};
pub use segment::{Gaussian, MAX_DERIVATIVE, Segment};
