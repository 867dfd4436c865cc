//! Piecewise polynomial-plus-Gaussian reference function.

use core::fmt;

use rayon::prelude::*;
use tc_core::{TemperatureUnit, VoltageUnit};

use crate::error::{CurveError, CurveResult};
use crate::policy::{EvalOptions, OutOfRange};
use crate::segment::{MAX_DERIVATIVE, Segment};

/// Where a temperature falls relative to the segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Below the first segment's minimum.
    Under,
    /// Inside the segment with this index.
    Inside(usize),
    /// Above the last segment's maximum.
    Over,
}

/// Immutable piecewise reference function mapping temperature to EMF.
///
/// Segments are sorted and contiguous: each segment starts exactly where the
/// previous one ends. There is always at least one segment.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseFunction {
    segments: Vec<Segment>,
    temperature_unit: TemperatureUnit,
    voltage_unit: VoltageUnit,
    source: String,
    calibration: String,
    turning_points: Vec<f64>,
}

impl PiecewiseFunction {
    /// Build a function from its segments, checking order and contiguity.
    pub fn new(
        segments: Vec<Segment>,
        temperature_unit: TemperatureUnit,
        voltage_unit: VoltageUnit,
        source: impl Into<String>,
        calibration: impl Into<String>,
    ) -> CurveResult<Self> {
        let Some(first) = segments.first() else {
            return Err(CurveError::InvalidTable {
                what: "a reference function needs at least one segment".to_string(),
            });
        };

        let mut last_max = first.min_temp();
        for (i, seg) in segments.iter().enumerate() {
            if seg.min_temp() != last_max {
                return Err(CurveError::InvalidTable {
                    what: format!(
                        "pieces' limits must be contiguous: segment {i} starts at {} but the previous one ends at {last_max}",
                        seg.min_temp()
                    ),
                });
            }
            last_max = seg.max_temp();
        }

        let mut function = Self {
            segments,
            temperature_unit,
            voltage_unit,
            source: source.into(),
            calibration: calibration.into(),
            turning_points: Vec::new(),
        };
        function.turning_points = function.find_turning_points()?;
        Ok(function)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn temperature_unit(&self) -> TemperatureUnit {
        self.temperature_unit
    }

    pub fn voltage_unit(&self) -> VoltageUnit {
        self.voltage_unit
    }

    /// Where the coefficients come from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Temperature scale convention, e.g. "ITS-90".
    pub fn calibration(&self) -> &str {
        &self.calibration
    }

    pub fn min_temp(&self) -> f64 {
        // Non-empty by construction.
        self.segments[0].min_temp()
    }

    pub fn max_temp(&self) -> f64 {
        self.segments[self.segments.len() - 1].max_temp()
    }

    pub fn midpoint(&self) -> f64 {
        0.5 * (self.min_temp() + self.max_temp())
    }

    /// Segment selector: 0 when under range, `i` when inside the i-th segment
    /// (1-based), `N + 1` when over range.
    ///
    /// Counts how many segment upper bounds `t` exceeds, so a temperature on
    /// a shared boundary belongs to the lower segment. NaN selects 0.
    pub fn selector(&self, t: f64) -> usize {
        usize::from(t >= self.min_temp())
            + self.segments.iter().filter(|s| t > s.max_temp()).count()
    }

    pub fn select(&self, t: f64) -> Selection {
        match self.selector(t) {
            0 => Selection::Under,
            s if s > self.segments.len() => Selection::Over,
            s => Selection::Inside(s - 1),
        }
    }

    /// Value or derivative at one temperature.
    pub fn evaluate(&self, t: f64, options: EvalOptions) -> CurveResult<f64> {
        check_derivative(options.derivative)?;

        let index = match (self.select(t), options.out_of_range) {
            (Selection::Inside(i), _) => i,
            (_, OutOfRange::Nan) => return Ok(f64::NAN),
            (Selection::Under, OutOfRange::Extrapolate) => 0,
            (Selection::Over, OutOfRange::Extrapolate) => self.segments.len() - 1,
            (Selection::Under, OutOfRange::Raise) => {
                return Err(self.out_of_range(vec![t], Vec::new()));
            }
            (Selection::Over, OutOfRange::Raise) => {
                return Err(self.out_of_range(Vec::new(), vec![t]));
            }
        };

        self.segments[index].value(t, options.derivative)
    }

    /// Function value with the default "raise" policy.
    pub fn value(&self, t: f64) -> CurveResult<f64> {
        self.evaluate(t, EvalOptions::default())
    }

    /// Evaluate a batch in parallel.
    ///
    /// Each element goes through the same selection as [`evaluate`]; under
    /// "raise" the error carries every offending input of the batch.
    ///
    /// [`evaluate`]: PiecewiseFunction::evaluate
    pub fn evaluate_many(&self, temps: &[f64], options: EvalOptions) -> CurveResult<Vec<f64>> {
        check_derivative(options.derivative)?;

        if options.out_of_range == OutOfRange::Raise {
            let mut under = Vec::new();
            let mut over = Vec::new();
            for &t in temps {
                match self.select(t) {
                    Selection::Under => under.push(t),
                    Selection::Over => over.push(t),
                    Selection::Inside(_) => {}
                }
            }
            if !under.is_empty() || !over.is_empty() {
                return Err(self.out_of_range(under, over));
            }
        }

        temps
            .par_iter()
            .map(|&t| self.evaluate(t, options))
            .collect()
    }

    /// Copy of this function with its output expressed in `unit`.
    pub fn with_voltage_unit(&self, unit: VoltageUnit) -> CurveResult<Self> {
        let factor = self.voltage_unit.factor_to(unit);
        let segments = self
            .segments
            .iter()
            .map(|s| s.scaled(factor))
            .collect::<CurveResult<Vec<_>>>()?;
        Self::new(
            segments,
            self.temperature_unit,
            unit,
            self.source.clone(),
            self.calibration.clone(),
        )
    }

    pub(crate) fn cached_turning_points(&self) -> &[f64] {
        &self.turning_points
    }

    fn out_of_range(&self, under: Vec<f64>, over: Vec<f64>) -> CurveError {
        CurveError::OutOfRange {
            under,
            over,
            unit: self.temperature_unit,
        }
    }
}

pub(crate) fn check_derivative(order: usize) -> CurveResult<()> {
    if order > MAX_DERIVATIVE {
        Err(CurveError::UnsupportedDerivative { order })
    } else {
        Ok(())
    }
}

impl fmt::Display for PiecewiseFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<piecewise polynomial+gaussian, domain {} to {} in {}, output in {}; {} calibrated, from {}>",
            self.min_temp(),
            self.max_temp(),
            self.temperature_unit,
            self.voltage_unit,
            self.calibration,
            self.source
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Gaussian;

    /// Continuous two-piece curve: `t` on [0, 10], `2t - 10` on [10, 20].
    fn two_piece() -> PiecewiseFunction {
        PiecewiseFunction::new(
            vec![
                Segment::new(0.0, 10.0, vec![1.0, 0.0], None).unwrap(),
                Segment::new(10.0, 20.0, vec![2.0, -10.0], None).unwrap(),
            ],
            TemperatureUnit::Celsius,
            VoltageUnit::Millivolt,
            "test",
            "ITS-90",
        )
        .unwrap()
    }

    #[test]
    fn rejects_empty_table() {
        let err = PiecewiseFunction::new(
            Vec::new(),
            TemperatureUnit::Celsius,
            VoltageUnit::Millivolt,
            "",
            "",
        )
        .unwrap_err();
        assert!(matches!(err, CurveError::InvalidTable { .. }));
    }

    #[test]
    fn rejects_gap_between_segments() {
        let err = PiecewiseFunction::new(
            vec![
                Segment::new(0.0, 10.0, vec![1.0], None).unwrap(),
                Segment::new(11.0, 20.0, vec![1.0], None).unwrap(),
            ],
            TemperatureUnit::Celsius,
            VoltageUnit::Millivolt,
            "",
            "",
        )
        .unwrap_err();
        assert!(err.to_string().contains("contiguous"));
    }

    #[test]
    fn rejects_overlap_and_descending_order() {
        let overlap = PiecewiseFunction::new(
            vec![
                Segment::new(0.0, 10.0, vec![1.0], None).unwrap(),
                Segment::new(5.0, 20.0, vec![1.0], None).unwrap(),
            ],
            TemperatureUnit::Celsius,
            VoltageUnit::Millivolt,
            "",
            "",
        );
        assert!(overlap.is_err());

        let descending = PiecewiseFunction::new(
            vec![
                Segment::new(10.0, 20.0, vec![1.0], None).unwrap(),
                Segment::new(0.0, 10.0, vec![1.0], None).unwrap(),
            ],
            TemperatureUnit::Celsius,
            VoltageUnit::Millivolt,
            "",
            "",
        );
        assert!(descending.is_err());
    }

    #[test]
    fn selector_counts_exceeded_upper_bounds() {
        let f = two_piece();
        assert_eq!(f.selector(-1.0), 0);
        assert_eq!(f.selector(0.0), 1);
        assert_eq!(f.selector(10.0), 1);
        assert_eq!(f.selector(10.5), 2);
        assert_eq!(f.selector(20.0), 2);
        assert_eq!(f.selector(20.5), 3);
        assert_eq!(f.selector(f64::NAN), 0);
        assert_eq!(f.select(15.0), Selection::Inside(1));
        assert_eq!(f.select(25.0), Selection::Over);
    }

    #[test]
    fn evaluates_selected_segment() {
        let f = two_piece();
        assert_eq!(f.value(5.0).unwrap(), 5.0);
        assert_eq!(f.value(15.0).unwrap(), 20.0);
        let slope = f
            .evaluate(15.0, EvalOptions::default().with_derivative(1))
            .unwrap();
        assert_eq!(slope, 2.0);
    }

    #[test]
    fn out_of_range_policies() {
        let f = two_piece();

        let err = f.value(21.0).unwrap_err();
        match err {
            CurveError::OutOfRange { under, over, .. } => {
                assert!(under.is_empty());
                assert_eq!(over, vec![21.0]);
            }
            other => panic!("unexpected error {other:?}"),
        }

        let nan = f
            .evaluate(-1.0, EvalOptions::default().with_out_of_range(OutOfRange::Nan))
            .unwrap();
        assert!(nan.is_nan());

        let extrapolated = f
            .evaluate(
                21.0,
                EvalOptions::default().with_out_of_range(OutOfRange::Extrapolate),
            )
            .unwrap();
        assert_eq!(extrapolated, 32.0);

        let below = f
            .evaluate(
                -2.0,
                EvalOptions::default().with_out_of_range(OutOfRange::Extrapolate),
            )
            .unwrap();
        assert_eq!(below, -2.0);
    }

    #[test]
    fn derivative_above_three_is_rejected() {
        let f = two_piece();
        for policy in [OutOfRange::Raise, OutOfRange::Nan, OutOfRange::Extrapolate] {
            let err = f
                .evaluate(
                    5.0,
                    EvalOptions::default()
                        .with_derivative(4)
                        .with_out_of_range(policy),
                )
                .unwrap_err();
            assert_eq!(err, CurveError::UnsupportedDerivative { order: 4 });
        }
        assert!(f
            .evaluate_many(&[1.0], EvalOptions::default().with_derivative(4))
            .is_err());
    }

    #[test]
    fn batch_matches_single_evaluation() {
        let f = two_piece();
        let temps: Vec<f64> = (0..=40).map(|i| i as f64 * 0.5).collect();
        let batch = f.evaluate_many(&temps, EvalOptions::default()).unwrap();
        for (t, v) in temps.iter().zip(&batch) {
            assert_eq!(*v, f.value(*t).unwrap());
        }
    }

    #[test]
    fn batch_raise_reports_all_offenders() {
        let f = two_piece();
        let err = f
            .evaluate_many(&[-3.0, 1.0, 25.0, -1.0, 30.0], EvalOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            CurveError::OutOfRange {
                under: vec![-3.0, -1.0],
                over: vec![25.0, 30.0],
                unit: TemperatureUnit::Celsius,
            }
        );

        let nan = f
            .evaluate_many(
                &[-3.0, 1.0],
                EvalOptions::default().with_out_of_range(OutOfRange::Nan),
            )
            .unwrap();
        assert!(nan[0].is_nan());
        assert_eq!(nan[1], 1.0);
    }

    #[test]
    fn voltage_rescale() {
        let f = PiecewiseFunction::new(
            vec![
                Segment::new(0.0, 100.0, vec![6.0, 0.0], Some(Gaussian::new(1.0, -0.01, 50.0)))
                    .unwrap(),
            ],
            TemperatureUnit::Celsius,
            VoltageUnit::Microvolt,
            "test",
            "ITS-90",
        )
        .unwrap();
        let mv = f.with_voltage_unit(VoltageUnit::Millivolt).unwrap();
        assert_eq!(mv.voltage_unit(), VoltageUnit::Millivolt);
        let t = 42.0;
        assert!((mv.value(t).unwrap() - f.value(t).unwrap() * 1e-3).abs() < 1e-12);
        assert_eq!(mv.source(), "test");
    }

    #[test]
    fn display_describes_domain_and_provenance() {
        let text = two_piece().to_string();
        assert!(text.contains("domain 0 to 20 in °C"));
        assert!(text.contains("output in mV"));
        assert!(text.contains("ITS-90 calibrated, from test"));
    }
}
