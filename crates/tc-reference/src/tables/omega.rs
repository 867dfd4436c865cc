//! Tungsten-rhenium reference functions from OMEGA's "Tungsten-Rhenium
//! Thermocouples Calibration Equivalents" (z202.pdf), types C, D, G.
//!
//! These are IPTS-68 calibrations. Types C and G were published as
//! Fahrenheit polynomials (7 significant figures); they are stored here
//! already mapped onto Celsius with the constant term set so that the EMF is
//! zero at 0 °C. The extra digits come from the conversion, not the source.
//! Type D steps by about 0.04 µV at 783 °C.

use tc_core::VoltageUnit;

use super::{IPTS_68, SegmentDef, TableDef};

pub const TABLES: &[TableDef] = &[
    TableDef {
        id: "G",
        kind: "Type G",
        composition: "W - 74W,26Re",
        source: "OMEGA Inc. z202.pdf, type G",
        calibration: IPTS_68,
        voltage_unit: VoltageUnit::Millivolt,
        segments: G_SEGMENTS,
    },
    TableDef {
        id: "C",
        kind: "Type C",
        composition: "95W,5Re - 74W,26Re",
        source: "OMEGA Inc. z202.pdf, type C",
        calibration: IPTS_68,
        voltage_unit: VoltageUnit::Millivolt,
        segments: C_SEGMENTS,
    },
    TableDef {
        id: "D",
        kind: "Type D",
        composition: "97W,3Re - 75W,25Re",
        source: "OMEGA Inc. z202.pdf, type D",
        calibration: IPTS_68,
        voltage_unit: VoltageUnit::Millivolt,
        segments: D_SEGMENTS,
    },
];

const G_SEGMENTS: &[SegmentDef] = &[SegmentDef {
    min_temp: 0.0,
    max_temp: 2315.0,
    coefficients: &[
        -2.2222283359680003e-16,
        2.21127029443584e-12,
        -1.0316119658501839e-08,
        2.1425207201941232e-05,
        0.0012905824431600024,
        0.0,
    ],
    gaussian: None,
}];

const C_SEGMENTS: &[SegmentDef] = &[SegmentDef {
    min_temp: 0.0,
    max_temp: 2315.0,
    coefficients: &[
        -4.944606425856e-16,
        3.60065824864128e-12,
        -1.0489145155399069e-08,
        1.2252598548103214e-05,
        0.013387722982319094,
        0.0,
    ],
    gaussian: None,
}];

const D_SEGMENTS: &[SegmentDef] = &[
    SegmentDef {
        min_temp: 0.0,
        max_temp: 783.0,
        coefficients: &[
            -1.4240735e-15,
            7.9498033e-12,
            -1.8464573e-8,
            2.0592621e-5,
            9.5685256e-3,
            0.0,
        ],
        gaussian: None,
    },
    SegmentDef {
        min_temp: 783.0,
        max_temp: 2320.0,
        coefficients: &[
            -7.9026726e-16,
            5.3743821e-12,
            -1.4935266e-8,
            1.8666488e-5,
            9.9109462e-3,
            0.0,
        ],
        gaussian: None,
    },
];
