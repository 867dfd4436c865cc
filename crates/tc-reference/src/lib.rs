//! tc-reference: thermocouple reference tables and conversions.
//!
//! Provides:
//! - `Thermocouple`: forward (temperature to EMF) and inverse conversions in
//!   °C, °F, K or °R with cold-junction compensation
//! - The bundled NIST, ASTM and OMEGA coefficient tables
//! - A process-wide registry keyed by type id
//!
//! # Example
//!
//! ```no_run
//! use tc_reference::{EmfOptions, InverseEmfOptions, get_thermocouple};
//! use tc_core::TemperatureUnit;
//!
//! let k = get_thermocouple("K").unwrap();
//! let emf = k.emf(100.0, EmfOptions::default()).unwrap();
//! println!("{emf:.3} mV"); // 4.096 mV
//!
//! // Measured 3.0 mV with the reference junction at 70 °F.
//! let opts = InverseEmfOptions::in_unit(TemperatureUnit::Fahrenheit).with_reference(70.0);
//! let t = k.temperature(3.0, opts).unwrap();
//! println!("{t:.1} °F");
//! ```

pub mod error;
pub mod registry;
pub mod tables;
pub mod thermocouple;

pub use error::{ThermocoupleError, ThermocoupleResult};
pub use registry::{Registry, get_thermocouple, thermocouples};
pub use tables::{SegmentDef, TableDef};
pub use thermocouple::{EmfOptions, InverseEmfOptions, Thermocouple};
