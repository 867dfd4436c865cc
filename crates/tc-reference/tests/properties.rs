//! Property tests over the bundled tables.

use proptest::prelude::*;
use tc_core::TemperatureUnit;
use tc_reference::{EmfOptions, InverseEmfOptions, Thermocouple, get_thermocouple, thermocouples};

/// Temperature at `frac` of the way through the monotonic part of the range.
fn interior(tc: &Thermocouple, frac: f64) -> f64 {
    // Type B is single-valued only above about 42 °C.
    let lo = match tc.function().turning_points().last() {
        Some(_) => 50.0,
        None => tc.min_temp_celsius(),
    };
    let hi = tc.max_temp_celsius();
    lo + (hi - lo) * frac
}

proptest! {
    #[test]
    fn inverse_recovers_temperature(frac in 0.05_f64..0.95) {
        for (id, tc) in thermocouples().unwrap().iter() {
            let t = interior(tc, frac);
            let emf = tc.emf(t, EmfOptions::default()).unwrap();
            let back = tc
                .temperature(emf, InverseEmfOptions::default().with_tolerance(1e-9))
                .unwrap();
            prop_assert!((back - t).abs() < 1e-4, "{}: {} -> {} -> {}", id, t, emf, back);
        }
    }

    #[test]
    fn cold_junction_is_a_difference(t in -200.0_f64..1300.0, reference in -200.0_f64..1300.0) {
        let k = get_thermocouple("K").unwrap();
        let compensated = k
            .emf(t, EmfOptions::default().with_reference(reference))
            .unwrap();
        let hot = k.emf(t, EmfOptions::default()).unwrap();
        let cold = k.emf(reference, EmfOptions::default()).unwrap();
        prop_assert!((compensated - (hot - cold)).abs() < 1e-12);
    }

    #[test]
    fn inverse_honors_reference_junction(t in 0.0_f64..1000.0, reference in -50.0_f64..50.0) {
        let n = get_thermocouple("N").unwrap();
        let emf = n
            .emf(t, EmfOptions::default().with_reference(reference))
            .unwrap();
        let back = n
            .temperature(
                emf,
                InverseEmfOptions::default()
                    .with_reference(reference)
                    .with_tolerance(1e-9),
            )
            .unwrap();
        prop_assert!((back - t).abs() < 1e-4);
    }

    #[test]
    fn every_unit_gives_the_same_emf(t in -250.0_f64..1350.0) {
        let k = get_thermocouple("K").unwrap();
        let celsius = k.emf(t, EmfOptions::default()).unwrap();
        for unit in TemperatureUnit::ALL {
            let local = tc_core::convert(t, TemperatureUnit::Celsius, unit);
            let emf = k.emf(local, EmfOptions::in_unit(unit)).unwrap();
            prop_assert!((emf - celsius).abs() < 1e-9, "{}: {} vs {}", unit, emf, celsius);
        }
    }
}
