//! Published coefficient tables.
//!
//! Temperatures are in °C and coefficients are ordered highest power first.
//! Tables are plain `const` data; [`TableDef::function`] turns one into a
//! validated [`PiecewiseFunction`] in millivolts.

pub mod astm;
pub mod nist;
pub mod omega;

use tc_core::{TemperatureUnit, VoltageUnit};
use tc_curve::{CurveResult, Gaussian, PiecewiseFunction, Segment};

pub(crate) const ITS_90: &str = "ITS-90";
pub(crate) const IPTS_68: &str = "IPTS-68";

/// One published range of a reference function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentDef {
    pub min_temp: f64,
    pub max_temp: f64,
    pub coefficients: &'static [f64],
    pub gaussian: Option<Gaussian>,
}

/// A complete published table for one thermocouple type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableDef {
    /// Registry key, e.g. "K" or "PtRh 40-20".
    pub id: &'static str,
    /// Display type, e.g. "Type K".
    pub kind: &'static str,
    /// Leg alloys, positive leg first.
    pub composition: &'static str,
    pub source: &'static str,
    pub calibration: &'static str,
    /// Unit the coefficients were published in.
    pub voltage_unit: VoltageUnit,
    pub segments: &'static [SegmentDef],
}

impl TableDef {
    /// Build the reference function, rescaled to millivolts if needed.
    pub fn function(&self) -> CurveResult<PiecewiseFunction> {
        let segments = self
            .segments
            .iter()
            .map(|s| Segment::new(s.min_temp, s.max_temp, s.coefficients, s.gaussian))
            .collect::<CurveResult<Vec<_>>>()?;

        let function = PiecewiseFunction::new(
            segments,
            TemperatureUnit::Celsius,
            self.voltage_unit,
            self.source,
            self.calibration,
        )?;

        if self.voltage_unit == VoltageUnit::Millivolt {
            Ok(function)
        } else {
            function.with_voltage_unit(VoltageUnit::Millivolt)
        }
    }
}

/// Every table source with its tables, lowest precedence first. When two
/// sources publish the same id, the later one wins.
pub const SOURCES: [(&str, &[TableDef]); 3] = [
    ("OMEGA", omega::TABLES),
    ("NIST", nist::TABLES),
    ("ASTM", astm::TABLES),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_ids_are_unique_per_source() {
        for (name, tables) in SOURCES {
            let mut ids: Vec<_> = tables.iter().map(|t| t.id).collect();
            ids.sort_unstable();
            let before = ids.len();
            ids.dedup();
            assert_eq!(ids.len(), before, "duplicate id in {name}");
        }
    }

    #[test]
    fn every_table_builds_in_millivolts() {
        for (_, tables) in SOURCES {
            for table in tables {
                let f = table
                    .function()
                    .unwrap_or_else(|e| panic!("{} failed to build: {e}", table.id));
                assert_eq!(f.voltage_unit(), VoltageUnit::Millivolt);
                assert_eq!(f.temperature_unit(), TemperatureUnit::Celsius);
                assert_eq!(f.segments().len(), table.segments.len());
            }
        }
    }

    #[test]
    fn microvolt_tables_are_rescaled() {
        let au_pt = astm::TABLES
            .iter()
            .find(|t| t.id == "Au-Pt")
            .unwrap();
        assert_eq!(au_pt.voltage_unit, VoltageUnit::Microvolt);
        let f = au_pt.function().unwrap();
        // Roughly 6 µV/K near 0 °C.
        let slope = f
            .evaluate(0.0, tc_curve::EvalOptions::default().with_derivative(1))
            .unwrap();
        assert!((slope - 6.036e-3).abs() < 1e-5, "slope {slope}");
    }

    #[test]
    fn source_counts() {
        assert_eq!(nist::TABLES.len(), 8);
        assert_eq!(astm::TABLES.len(), 9);
        assert_eq!(omega::TABLES.len(), 3);
    }
}
