// tc-core/src/units.rs

use core::fmt;
use core::str::FromStr;

use uom::si::f64::ThermodynamicTemperature as UomThermodynamicTemperature;
use uom::si::thermodynamic_temperature::{degree_celsius, degree_fahrenheit, degree_rankine, kelvin};

use crate::TcError;

/// Typed absolute temperature (SI, f64).
pub type Temperature = UomThermodynamicTemperature;

/// The four temperature scales callers may work in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 4] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
        TemperatureUnit::Rankine,
    ];

    const fn index(self) -> usize {
        match self {
            Self::Celsius => 0,
            Self::Fahrenheit => 1,
            Self::Kelvin => 2,
            Self::Rankine => 3,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
            Self::Rankine => "°R",
        }
    }

    pub fn long_name(self) -> &'static str {
        match self {
            Self::Celsius => "degrees Celsius",
            Self::Fahrenheit => "degrees Fahrenheit",
            Self::Kelvin => "kelvin",
            Self::Rankine => "degrees Rankine",
        }
    }

    /// Freezing point of water on this scale; the default reference-junction
    /// temperature.
    pub fn ice_point(self) -> f64 {
        match self {
            Self::Celsius => 0.0,
            Self::Fahrenheit => 32.0,
            Self::Kelvin => 273.15,
            Self::Rankine => 491.67,
        }
    }

    /// Map from this unit into Celsius.
    pub const fn to_celsius(self) -> AffineMap {
        match self {
            Self::Celsius => AffineMap::IDENTITY,
            Self::Fahrenheit => AffineMap::new(5.0 / 9.0, -32.0 * 5.0 / 9.0),
            Self::Kelvin => AffineMap::new(1.0, -273.15),
            Self::Rankine => AffineMap::new(5.0 / 9.0, -273.15),
        }
    }

    /// Map from Celsius into this unit.
    pub const fn from_celsius(self) -> AffineMap {
        match self {
            Self::Celsius => AffineMap::IDENTITY,
            Self::Fahrenheit => AffineMap::new(9.0 / 5.0, 32.0),
            Self::Kelvin => AffineMap::new(1.0, 273.15),
            Self::Rankine => AffineMap::new(9.0 / 5.0, 491.67),
        }
    }

    /// Read a typed temperature as a plain number on this scale.
    pub fn value_of(self, t: Temperature) -> f64 {
        match self {
            Self::Celsius => t.get::<degree_celsius>(),
            Self::Fahrenheit => t.get::<degree_fahrenheit>(),
            Self::Kelvin => t.get::<kelvin>(),
            Self::Rankine => t.get::<degree_rankine>(),
        }
    }

    /// Build a typed temperature from a plain number on this scale.
    pub fn temperature(self, v: f64) -> Temperature {
        match self {
            Self::Celsius => Temperature::new::<degree_celsius>(v),
            Self::Fahrenheit => Temperature::new::<degree_fahrenheit>(v),
            Self::Kelvin => Temperature::new::<kelvin>(v),
            Self::Rankine => Temperature::new::<degree_rankine>(v),
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TemperatureUnit {
    type Err = TcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "°c" | "degc" | "celsius" => Ok(Self::Celsius),
            "f" | "°f" | "degf" | "fahrenheit" => Ok(Self::Fahrenheit),
            "k" | "kelvin" => Ok(Self::Kelvin),
            "r" | "°r" | "degr" | "rankine" => Ok(Self::Rankine),
            _ => Err(TcError::UnknownUnit { text: s.to_string() }),
        }
    }
}

/// `value * mul + add`.
///
/// Only `mul` survives differentiation, so derivative rescaling uses
/// [`AffineMap::derivative_scale`] rather than `apply`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineMap {
    pub mul: f64,
    pub add: f64,
}

impl AffineMap {
    pub const IDENTITY: AffineMap = AffineMap { mul: 1.0, add: 0.0 };

    pub const fn new(mul: f64, add: f64) -> Self {
        Self { mul, add }
    }

    #[inline]
    pub fn apply(self, v: f64) -> f64 {
        v * self.mul + self.add
    }

    /// Compose: first `self`, then `next`.
    pub const fn then(self, next: AffineMap) -> AffineMap {
        AffineMap {
            mul: self.mul * next.mul,
            add: self.add * next.mul + next.add,
        }
    }

    /// Chain-rule factor for the `order`-th derivative taken with respect to
    /// the input of this map.
    pub fn derivative_scale(self, order: usize) -> f64 {
        (0..order).fold(1.0, |acc, _| acc * self.mul)
    }
}

const fn build_conversions() -> [[AffineMap; 4]; 4] {
    let mut table = [[AffineMap::IDENTITY; 4]; 4];
    let mut i = 0;
    while i < 4 {
        let mut j = 0;
        while j < 4 {
            let from = TemperatureUnit::ALL[i];
            let to = TemperatureUnit::ALL[j];
            // Same-unit and Celsius legs stay exact; everything else goes via Celsius.
            table[i][j] = if i == j {
                AffineMap::IDENTITY
            } else if from.index() == TemperatureUnit::Celsius.index() {
                to.from_celsius()
            } else if to.index() == TemperatureUnit::Celsius.index() {
                from.to_celsius()
            } else {
                from.to_celsius().then(to.from_celsius())
            };
            j += 1;
        }
        i += 1;
    }
    table
}

static CONVERSIONS: [[AffineMap; 4]; 4] = build_conversions();

/// Affine map taking values in `from` to values in `to`.
#[inline]
pub fn conversion(from: TemperatureUnit, to: TemperatureUnit) -> AffineMap {
    CONVERSIONS[from.index()][to.index()]
}

/// Convert a temperature value between scales.
#[inline]
pub fn convert(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    conversion(from, to).apply(value)
}

/// Electrical units a reference function may be tabulated in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VoltageUnit {
    Volt,
    Millivolt,
    Microvolt,
}

impl VoltageUnit {
    fn decimal_exponent(self) -> i32 {
        match self {
            Self::Volt => 0,
            Self::Millivolt => -3,
            Self::Microvolt => -6,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Volt => "V",
            Self::Millivolt => "mV",
            Self::Microvolt => "µV",
        }
    }

    pub fn long_name(self) -> &'static str {
        match self {
            Self::Volt => "volts",
            Self::Millivolt => "millivolts",
            Self::Microvolt => "microvolts",
        }
    }

    /// Multiplier turning a value in `self` into a value in `to`.
    pub fn factor_to(self, to: VoltageUnit) -> f64 {
        10f64.powi(self.decimal_exponent() - to.decimal_exponent())
    }
}

impl fmt::Display for VoltageUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[inline]
pub fn k(v: f64) -> Temperature {
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn degc(v: f64) -> Temperature {
    Temperature::new::<degree_celsius>(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    const TOL: Tolerances = Tolerances::TEMPERATURE;

    #[test]
    fn boiling_point_on_every_scale() {
        use TemperatureUnit::*;
        assert!(nearly_equal(convert(100.0, Celsius, Fahrenheit), 212.0, TOL));
        assert!(nearly_equal(convert(100.0, Celsius, Kelvin), 373.15, TOL));
        assert!(nearly_equal(convert(100.0, Celsius, Rankine), 671.67, TOL));
        assert!(nearly_equal(convert(212.0, Fahrenheit, Kelvin), 373.15, TOL));
        assert!(nearly_equal(convert(671.67, Rankine, Fahrenheit), 212.0, TOL));
    }

    #[test]
    fn ice_points_agree() {
        for from in TemperatureUnit::ALL {
            for to in TemperatureUnit::ALL {
                let v = convert(from.ice_point(), from, to);
                assert!(nearly_equal(v, to.ice_point(), TOL), "{from} -> {to}: {v}");
            }
        }
    }

    #[test]
    fn same_unit_is_exact_identity() {
        for u in TemperatureUnit::ALL {
            assert_eq!(conversion(u, u), AffineMap::IDENTITY);
        }
    }

    #[test]
    fn derivative_scale_ignores_offset() {
        let map = TemperatureUnit::Fahrenheit.to_celsius();
        assert_eq!(map.derivative_scale(0), 1.0);
        assert!(nearly_equal(map.derivative_scale(1), 5.0 / 9.0, TOL));
        assert!(nearly_equal(map.derivative_scale(3), (5.0_f64 / 9.0).powi(3), TOL));
    }

    #[test]
    fn parse_units() {
        assert_eq!("C".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Celsius);
        assert_eq!("°F".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Fahrenheit);
        assert_eq!(" kelvin ".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Kelvin);
        assert_eq!("R".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Rankine);
        assert!("X".parse::<TemperatureUnit>().is_err());
    }

    #[test]
    fn uom_round_trip() {
        for u in TemperatureUnit::ALL {
            let t = u.temperature(u.ice_point());
            assert!(nearly_equal(t.get::<kelvin>(), 273.15, TOL));
            assert!(nearly_equal(u.value_of(t), u.ice_point(), TOL));
        }
        assert!(nearly_equal(degc(25.0).get::<kelvin>(), k(298.15).get::<kelvin>(), TOL));
    }

    #[test]
    fn voltage_factors() {
        assert_eq!(VoltageUnit::Microvolt.factor_to(VoltageUnit::Millivolt), 1e-3);
        assert_eq!(VoltageUnit::Volt.factor_to(VoltageUnit::Millivolt), 1e3);
        assert_eq!(VoltageUnit::Millivolt.factor_to(VoltageUnit::Millivolt), 1.0);
    }

    #[test]
    fn labels() {
        assert_eq!(TemperatureUnit::Celsius.to_string(), "°C");
        assert_eq!(TemperatureUnit::Rankine.long_name(), "degrees Rankine");
        assert_eq!(VoltageUnit::Microvolt.long_name(), "microvolts");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_string(&TemperatureUnit::Kelvin).unwrap();
        let back: TemperatureUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TemperatureUnit::Kelvin);
    }
}
