//! ASTM E 1751-00 reference functions (ITS-90).
//!
//! None of these carry an official letter; G, P and M are the common
//! informal ones. Au-Pt and Pt-Pd are published in microvolts.

use tc_core::VoltageUnit;

use super::{ITS_90, SegmentDef, TableDef};

pub const TABLES: &[TableDef] = &[
    TableDef {
        id: "G",
        kind: "Type G",
        composition: "W - 74W,26Re",
        source: "ASTM E 1751-00, Table 1",
        calibration: ITS_90,
        voltage_unit: VoltageUnit::Millivolt,
        segments: G_SEGMENTS,
    },
    TableDef {
        id: "P",
        kind: "Type P (II)",
        composition: "55Pd,31Pt,14Au - 65Au,35Pd",
        source: "ASTM E 1751-00, Table 3",
        calibration: ITS_90,
        voltage_unit: VoltageUnit::Millivolt,
        segments: P_SEGMENTS,
    },
    TableDef {
        id: "AuFe 0.07",
        kind: "Chromel-AuFe0.07",
        composition: "90Ni,10Cr - Au,0.07(atom%)Fe",
        source: "ASTM E 1751-00, Table 5",
        calibration: ITS_90,
        voltage_unit: VoltageUnit::Millivolt,
        segments: AUFE_0_07_SEGMENTS,
    },
    TableDef {
        id: "PtMo 5-0.1",
        kind: "PtMo 5-0.1",
        composition: "95Pt,5Mo - 99.9Pt,0.1Mo",
        source: "ASTM E 1751-00, Table 7",
        calibration: ITS_90,
        voltage_unit: VoltageUnit::Millivolt,
        segments: PTMO_5_0_1_SEGMENTS,
    },
    TableDef {
        id: "PtRh 40-20",
        kind: "PtRh 40-20",
        composition: "60Pt,40Rh - 80Pt,20Rh",
        source: "ASTM E 1751-00, Table 9",
        calibration: ITS_90,
        voltage_unit: VoltageUnit::Millivolt,
        segments: PTRH_40_20_SEGMENTS,
    },
    TableDef {
        id: "M",
        kind: "Type M",
        composition: "82Ni,18Mo - 99.2Ni,0.8Co",
        source: "ASTM E 1751-00, Table 11",
        calibration: ITS_90,
        voltage_unit: VoltageUnit::Millivolt,
        segments: M_SEGMENTS,
    },
    TableDef {
        id: "IrRh 40-0",
        kind: "IrRh 40-0",
        composition: "60Ir,40Rh - Ir",
        source: "ASTM E 1751-00, Table 13",
        calibration: ITS_90,
        voltage_unit: VoltageUnit::Millivolt,
        segments: IRRH_40_0_SEGMENTS,
    },
    TableDef {
        id: "Au-Pt",
        kind: "Au-Pt",
        composition: "Au - Pt",
        source: "ASTM E 1751-00, Table 15",
        calibration: ITS_90,
        voltage_unit: VoltageUnit::Microvolt,
        segments: AU_PT_SEGMENTS,
    },
    TableDef {
        id: "Pt-Pd",
        kind: "Pt-Pd",
        composition: "Pt - Pd",
        source: "ASTM E 1751-00, Table 17",
        calibration: ITS_90,
        voltage_unit: VoltageUnit::Microvolt,
        segments: PT_PD_SEGMENTS,
    },
];

const G_SEGMENTS: &[SegmentDef] = &[
    SegmentDef {
        min_temp: 0.0,
        max_temp: 630.615,
        coefficients: &[
            -1.7089202e-15,
            4.3850022e-12,
            -1.1393234e-08,
            2.1634754e-05,
            1.2792201e-03,
            0.0000000e+00,
        ],
        gaussian: None,
    },
    SegmentDef {
        min_temp: 630.615,
        max_temp: 2315.0,
        coefficients: &[
            -1.5534591e-25,
            1.8120237e-21,
            -8.9888053e-18,
            2.4455012e-14,
            -3.8615222e-11,
            3.1141330e-08,
            -3.6467516e-06,
            9.4962455e-03,
            -1.1064412e+00,
        ],
        gaussian: None,
    },
];

const P_SEGMENTS: &[SegmentDef] = &[
    SegmentDef {
        min_temp: 0.0,
        max_temp: 746.6,
        coefficients: &[
            -3.6375467e-15,
            1.4851327e-11,
            -3.4878428e-08,
            3.5175152e-05,
            2.9819716e-02,
            0.0000000e+00,
        ],
        gaussian: None,
    },
    SegmentDef {
        min_temp: 746.6,
        max_temp: 1395.0,
        coefficients: &[
            -9.3211269e-18,
            5.4438760e-14,
            -1.2855115e-10,
            1.5424937e-07,
            -1.0570233e-04,
            8.5377200e-02,
            -8.9621838e+00,
        ],
        gaussian: None,
    },
];

const AUFE_0_07_SEGMENTS: &[SegmentDef] = &[
    SegmentDef {
        min_temp: -273.0,
        max_temp: 7.0,
        coefficients: &[
            6.8263661580e-31,
            1.1010930596e-27,
            7.8225430483e-25,
            3.2146639387e-22,
            8.4287909747e-20,
            1.4636450149e-17,
            1.6829773697e-15,
            1.2272348484e-13,
            4.9063035769e-12,
            4.0432555769e-11,
            -4.5260169888e-09,
            -1.5967928202e-07,
            3.6406179664e-06,
            2.2272367466e-02,
            0.0000000000e+00,
        ],
        gaussian: None,
    },
];

const PTMO_5_0_1_SEGMENTS: &[SegmentDef] = &[
    SegmentDef {
        min_temp: 0.0,
        max_temp: 491.0,
        coefficients: &[
            -2.0186476e-19,
            3.3574252e-16,
            -2.3848950e-13,
            1.0585770e-10,
            -4.3368594e-08,
            2.8410937e-05,
            1.0501456e-02,
            0.0000000e+00,
        ],
        gaussian: None,
    },
    SegmentDef {
        min_temp: 491.0,
        max_temp: 1600.0,
        coefficients: &[
            9.4670862e-24,
            -7.6717268e-20,
            2.6865173e-16,
            -5.3071212e-13,
            6.4615219e-10,
            -4.9920472e-07,
            2.4913353e-04,
            -4.8776479e-02,
            6.8354086e+00,
        ],
        gaussian: None,
    },
];

const PTRH_40_20_SEGMENTS: &[SegmentDef] = &[
    SegmentDef {
        min_temp: 0.0,
        max_temp: 951.7,
        coefficients: &[
            -2.8497160e-22,
            1.0033974e-18,
            -1.5406939e-15,
            1.0382985e-12,
            4.2594137e-10,
            3.9360320e-07,
            3.6246289e-04,
            0.0000000e+00,
        ],
        gaussian: None,
    },
    SegmentDef {
        min_temp: 951.7,
        max_temp: 1888.0,
        coefficients: &[
            -1.2619640e-20,
            1.1516280e-16,
            -1.0824710e-12,
            3.6728697e-09,
            -3.9077442e-06,
            3.5246931e-03,
            -9.1201877e-01,
        ],
        gaussian: None,
    },
];

const M_SEGMENTS: &[SegmentDef] = &[
    SegmentDef {
        min_temp: -50.0,
        max_temp: 370.8,
        coefficients: &[
            -3.394387900e-19,
            -9.738054601e-17,
            1.846977453e-13,
            -1.025216130e-10,
            -3.142898226e-08,
            4.408522682e-05,
            3.690092195e-02,
            0.000000000e+00,
        ],
        gaussian: None,
    },
    SegmentDef {
        min_temp: 370.8,
        max_temp: 1410.0,
        coefficients: &[
            1.027600874e-25,
            -7.864442961e-22,
            2.627522669e-18,
            -5.041679909e-15,
            6.145877457e-12,
            -4.958763813e-09,
            2.650568429e-06,
            -8.846963426e-04,
            2.059913943e-01,
            -1.145582129e+01,
        ],
        gaussian: None,
    },
];

const IRRH_40_0_SEGMENTS: &[SegmentDef] = &[
    SegmentDef {
        min_temp: 0.0,
        max_temp: 630.615,
        coefficients: &[
            -7.9634082e-23,
            1.5270867e-19,
            -1.0418040e-16,
            2.6762413e-14,
            2.7700591e-12,
            -7.8890504e-09,
            6.9649773e-06,
            3.0870016e-03,
            0.0000000e+00,
        ],
        gaussian: None,
    },
    SegmentDef {
        min_temp: 630.615,
        max_temp: 2110.0,
        coefficients: &[
            3.0821886e-20,
            -5.1797037e-16,
            2.7235393e-12,
            -6.0547943e-09,
            5.7455189e-06,
            3.6588615e-03,
            -9.6839082e-02,
        ],
        gaussian: None,
    },
];

const AU_PT_SEGMENTS: &[SegmentDef] = &[
    SegmentDef {
        min_temp: 0.0,
        max_temp: 1000.0,
        coefficients: &[
            -2.51672787e-24,
            1.42981590e-20,
            -3.39430259e-17,
            4.56927038e-14,
            -4.24206193e-11,
            3.28711859e-08,
            -2.22998614e-05,
            1.93672974e-02,
            6.03619861e+00,
            0.00000000e+00,
        ],
        gaussian: None,
    },
];

const PT_PD_SEGMENTS: &[SegmentDef] = &[
    SegmentDef {
        min_temp: 0.0,
        max_temp: 660.323,
        coefficients: &[
            -8.510068e-21,
            2.257823e-17,
            -1.268514e-14,
            -2.012523e-11,
            2.992243e-08,
            -9.602271e-06,
            4.610494e-03,
            5.296958e+00,
            0.000000e+00,
        ],
        gaussian: None,
    },
    SegmentDef {
        min_temp: 660.323,
        max_temp: 1500.0,
        coefficients: &[
            -1.3570737e-15,
            9.5627366e-12,
            -2.6901509e-08,
            3.6361700e-05,
            -1.5793515e-02,
            1.0182545e+01,
            -4.9771370e+02,
        ],
        gaussian: None,
    },
];
