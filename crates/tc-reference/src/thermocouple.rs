//! Thermocouple facade: forward and inverse conversions in any of the four
//! temperature units, with cold-junction compensation.
//!
//! The wrapped reference function is always in °C and mV. Callers pick a unit
//! per call; temperatures are mapped into Celsius on the way in and back out
//! on the way out. The reference junction defaults to the ice point of the
//! chosen unit.

use core::fmt;

use tc_core::{Temperature, TemperatureUnit, VoltageUnit, conversion};
use tc_curve::{EvalOptions, InverseOptions, OutOfRange, PiecewiseFunction};

use crate::error::{ThermocoupleError, ThermocoupleResult};
use crate::tables::TableDef;

/// Options for [`Thermocouple::emf`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmfOptions {
    pub unit: TemperatureUnit,
    /// Reference-junction temperature in `unit`; the ice point when `None`.
    pub reference: Option<f64>,
    /// Derivative order; derivatives ignore the reference junction.
    pub derivative: usize,
    pub out_of_range: OutOfRange,
}

impl Default for EmfOptions {
    fn default() -> Self {
        Self {
            unit: TemperatureUnit::Celsius,
            reference: None,
            derivative: 0,
            out_of_range: OutOfRange::Raise,
        }
    }
}

impl EmfOptions {
    pub fn in_unit(unit: TemperatureUnit) -> Self {
        Self {
            unit,
            ..Self::default()
        }
    }

    pub fn with_reference(mut self, reference: f64) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn with_derivative(mut self, derivative: usize) -> Self {
        self.derivative = derivative;
        self
    }

    pub fn with_out_of_range(mut self, out_of_range: OutOfRange) -> Self {
        self.out_of_range = out_of_range;
        self
    }

    fn eval(&self) -> EvalOptions {
        EvalOptions::default()
            .with_derivative(self.derivative)
            .with_out_of_range(self.out_of_range)
    }
}

/// Options for [`Thermocouple::temperature`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InverseEmfOptions {
    pub unit: TemperatureUnit,
    /// Reference-junction temperature in `unit`; the ice point when `None`.
    pub reference: Option<f64>,
    /// Start of the local search, in `unit`.
    pub start_guess: Option<f64>,
    /// Allowed EMF error in mV.
    pub tolerance: f64,
}

impl Default for InverseEmfOptions {
    fn default() -> Self {
        let curve = InverseOptions::default();
        Self {
            unit: TemperatureUnit::Celsius,
            reference: None,
            start_guess: curve.start_guess,
            tolerance: curve.tolerance,
        }
    }
}

impl InverseEmfOptions {
    pub fn in_unit(unit: TemperatureUnit) -> Self {
        Self {
            unit,
            ..Self::default()
        }
    }

    pub fn with_reference(mut self, reference: f64) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn with_start_guess(mut self, start_guess: f64) -> Self {
        self.start_guess = Some(start_guess);
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// A thermocouple type: display name, leg composition and its reference
/// function in °C and mV.
#[derive(Debug, Clone, PartialEq)]
pub struct Thermocouple {
    kind: String,
    composition: String,
    function: PiecewiseFunction,
}

impl Thermocouple {
    pub fn new(
        function: PiecewiseFunction,
        kind: impl Into<String>,
        composition: impl Into<String>,
    ) -> ThermocoupleResult<Self> {
        let temperature = function.temperature_unit();
        let voltage = function.voltage_unit();
        if temperature != TemperatureUnit::Celsius || voltage != VoltageUnit::Millivolt {
            return Err(ThermocoupleError::UnsupportedUnits {
                temperature,
                voltage,
            });
        }
        Ok(Self {
            kind: kind.into(),
            composition: composition.into(),
            function,
        })
    }

    pub fn from_table(table: &TableDef) -> ThermocoupleResult<Self> {
        Self::new(table.function()?, table.kind, table.composition)
    }

    /// Display type, e.g. "Type K".
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Nominal leg alloys, positive leg first.
    pub fn composition(&self) -> &str {
        &self.composition
    }

    pub fn function(&self) -> &PiecewiseFunction {
        &self.function
    }

    pub fn min_temp_celsius(&self) -> f64 {
        self.function.min_temp()
    }

    pub fn max_temp_celsius(&self) -> f64 {
        self.function.max_temp()
    }

    pub fn min_temp(&self, unit: TemperatureUnit) -> f64 {
        conversion(TemperatureUnit::Celsius, unit).apply(self.min_temp_celsius())
    }

    pub fn max_temp(&self, unit: TemperatureUnit) -> f64 {
        conversion(TemperatureUnit::Celsius, unit).apply(self.max_temp_celsius())
    }

    /// EMF in mV at `t`, relative to the reference junction.
    ///
    /// With a derivative order above zero, returns that derivative with
    /// respect to temperature in `options.unit` (mV per unit^order); the
    /// reference junction then plays no part.
    pub fn emf(&self, t: f64, options: EmfOptions) -> ThermocoupleResult<f64> {
        let to_celsius = conversion(options.unit, TemperatureUnit::Celsius);
        let value = self.function.evaluate(to_celsius.apply(t), options.eval())?;

        if options.derivative > 0 {
            return Ok(value * to_celsius.derivative_scale(options.derivative));
        }

        let reference = options.reference.unwrap_or(options.unit.ice_point());
        let reference_emf = self
            .function
            .evaluate(to_celsius.apply(reference), options.eval())?;
        Ok(value - reference_emf)
    }

    /// [`emf`](Self::emf) over a slice, evaluated in parallel.
    pub fn emf_many(&self, temps: &[f64], options: EmfOptions) -> ThermocoupleResult<Vec<f64>> {
        let to_celsius = conversion(options.unit, TemperatureUnit::Celsius);
        let celsius: Vec<f64> = temps.iter().map(|&t| to_celsius.apply(t)).collect();
        let mut values = self.function.evaluate_many(&celsius, options.eval())?;

        if options.derivative > 0 {
            let scale = to_celsius.derivative_scale(options.derivative);
            values.iter_mut().for_each(|v| *v *= scale);
            return Ok(values);
        }

        let reference = options.reference.unwrap_or(options.unit.ice_point());
        let reference_emf = self
            .function
            .evaluate(to_celsius.apply(reference), options.eval())?;
        values.iter_mut().for_each(|v| *v -= reference_emf);
        Ok(values)
    }

    /// Temperature in `options.unit` that produces `emf` (mV) against the
    /// reference junction.
    pub fn temperature(&self, emf: f64, options: InverseEmfOptions) -> ThermocoupleResult<f64> {
        let to_celsius = conversion(options.unit, TemperatureUnit::Celsius);
        let reference = options.reference.unwrap_or(options.unit.ice_point());
        let reference_emf = self.function.value(to_celsius.apply(reference))?;

        let inverse = InverseOptions {
            start_guess: options.start_guess.map(|t| to_celsius.apply(t)),
            tolerance: options.tolerance,
        };
        let celsius = self.function.inverse(emf + reference_emf, inverse)?;
        Ok(conversion(TemperatureUnit::Celsius, options.unit).apply(celsius))
    }

    /// EMF in mV between typed measurement and reference temperatures.
    pub fn emf_at(&self, t: Temperature, reference: Temperature) -> ThermocoupleResult<f64> {
        let unit = TemperatureUnit::Celsius;
        self.emf(
            unit.value_of(t),
            EmfOptions::in_unit(unit).with_reference(unit.value_of(reference)),
        )
    }

    /// Typed temperature for a measured EMF (mV).
    pub fn temperature_for(
        &self,
        emf: f64,
        reference: Temperature,
    ) -> ThermocoupleResult<Temperature> {
        let unit = TemperatureUnit::Celsius;
        let celsius = self.temperature(
            emf,
            InverseEmfOptions::in_unit(unit).with_reference(unit.value_of(reference)),
        )?;
        Ok(unit.temperature(celsius))
    }

    pub(crate) fn matches_query(&self, query: &str) -> bool {
        self.kind.to_ascii_lowercase().contains(query)
            || self.composition.to_ascii_lowercase().contains(query)
    }
}

impl fmt::Display for Thermocouple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{} thermocouple reference ({:?} to {:?} {})>",
            self.kind,
            self.min_temp_celsius(),
            self.max_temp_celsius(),
            TemperatureUnit::Celsius
        )
    }
}
