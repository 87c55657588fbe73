//! Precomputed CORDIC angle tables and gain constants.
//!
//! Circular tables hold atan(2^-i) for i = 0..M-1, one entry per iteration.
//! Hyperbolic tables hold (2^-i, atanh(2^-i)) rows for i = 1..=M with the
//! convergence repeats baked in as duplicate rows; single-pass hyperbolic
//! CORDIC does not converge without re-running the steps at 2^-4, 2^-13 and
//! (for the 53-iteration schedule) 2^-40. The repeat indices follow the
//! classical 3k+1 sequence and are fixed, never re-derived.

/// atan(2^-i), i = 0..52.
pub(crate) const ATAN_F64: [f64; 53] = [
    0.7853981633974483,
    0.4636476090008061,
    0.24497866312686414,
    0.12435499454676144,
    0.06241880999595735,
    0.031239833430268277,
    0.015623728620476831,
    0.007812341060101111,
    0.0039062301319669718,
    0.0019531225164788188,
    0.0009765621895593195,
    0.0004882812111948983,
    0.00024414062014936177,
    0.00012207031189367021,
    6.103515617420877e-5,
    3.0517578115526096e-5,
    1.5258789061315762e-5,
    7.62939453110197e-6,
    3.814697265606496e-6,
    1.907348632810187e-6,
    9.536743164059608e-7,
    4.7683715820308884e-7,
    2.3841857910155797e-7,
    1.1920928955078068e-7,
    5.960464477539055e-8,
    2.9802322387695303e-8,
    1.4901161193847655e-8,
    7.450580596923828e-9,
    3.725290298461914e-9,
    1.862645149230957e-9,
    9.313225746154785e-10,
    4.656612873077393e-10,
    2.3283064365386963e-10,
    1.1641532182693481e-10,
    5.820766091346741e-11,
    2.9103830456733704e-11,
    1.4551915228366852e-11,
    7.275957614183426e-12,
    3.637978807091713e-12,
    1.8189894035458565e-12,
    9.094947017729282e-13,
    4.547473508864641e-13,
    2.2737367544323206e-13,
    1.1368683772161603e-13,
    5.684341886080802e-14,
    2.842170943040401e-14,
    1.4210854715202004e-14,
    7.105427357601002e-15,
    3.552713678800501e-15,
    1.7763568394002505e-15,
    8.881784197001252e-16,
    4.440892098500626e-16,
    2.220446049250313e-16,
];

/// atan(2^-i), i = 0..23.
pub(crate) const ATAN_F32: [f32; 24] = [
    0.7853981852531433,
    0.46364760398864746,
    0.244978666305542,
    0.12435499578714371,
    0.06241881102323532,
    0.031239833682775497,
    0.01562372874468565,
    0.007812341209501028,
    0.0039062302093952894,
    0.0019531225552782416,
    0.0009765622089616954,
    0.00048828122089616954,
    0.000244140625,
    0.0001220703125,
    6.103515625e-5,
    3.0517578125e-5,
    1.52587890625e-5,
    7.62939453125e-6,
    3.814697265625e-6,
    1.9073486328125e-6,
    9.5367431640625e-7,
    4.76837158203125e-7,
    2.384185791015625e-7,
    1.1920928955078125e-7,
];

/// Reciprocal of the circular gain, prod(sqrt(1 + 2^-2i)) over 53 iterations.
pub(crate) const INV_GAIN_F64: f64 = 0.6072529350088813;

/// Reciprocal of the circular gain over 24 iterations.
pub(crate) const INV_GAIN_F32: f32 = 0.6072529554367065;

/// (2^-i, atanh(2^-i)) rows, i = 1..=53, repeats at i = 4, 13, 40.
pub(crate) const ATANH_F64: [(f64, f64); 56] = [
    (0.5, 0.5493061443340548),
    (0.25, 0.25541281188299536),
    (0.125, 0.12565721414045303),
    (0.0625, 0.06258157147700301),
    (0.0625, 0.06258157147700301),
    (0.03125, 0.03126017849066699),
    (0.015625, 0.01562627175205221),
    (0.0078125, 0.007812658951540421),
    (0.00390625, 0.003906269868396826),
    (0.001953125, 0.0019531274835325498),
    (0.0009765625, 0.000976562810441036),
    (0.00048828125, 0.0004882812888051128),
    (0.000244140625, 0.0002441406298506386),
    (0.0001220703125, 0.00012207031310632982),
    (0.0001220703125, 0.00012207031310632982),
    (6.103515625e-5, 6.103515632579122e-5),
    (3.0517578125e-5, 3.05175781344739e-5),
    (1.52587890625e-5, 1.5258789063684237e-5),
    (7.62939453125e-6, 7.62939453139803e-6),
    (3.814697265625e-6, 3.8146972656435034e-6),
    (1.9073486328125e-6, 1.907348632814813e-6),
    (9.5367431640625e-7, 9.53674316406539e-7),
    (4.76837158203125e-7, 4.768371582031611e-7),
    (2.384185791015625e-7, 2.38418579101567e-7),
    (1.1920928955078125e-7, 1.192092895507818e-7),
    (5.960464477539063e-8, 5.960464477539069e-8),
    (2.9802322387695312e-8, 2.980232238769532e-8),
    (1.4901161193847656e-8, 1.4901161193847656e-8),
    (7.450580596923828e-9, 7.450580596923828e-9),
    (3.725290298461914e-9, 3.725290298461914e-9),
    (1.862645149230957e-9, 1.862645149230957e-9),
    (9.313225746154785e-10, 9.313225746154785e-10),
    (4.656612873077393e-10, 4.656612873077393e-10),
    (2.3283064365386963e-10, 2.3283064365386963e-10),
    (1.1641532182693481e-10, 1.1641532182693481e-10),
    (5.820766091346741e-11, 5.820766091346741e-11),
    (2.9103830456733704e-11, 2.9103830456733704e-11),
    (1.4551915228366852e-11, 1.4551915228366852e-11),
    (7.275957614183426e-12, 7.275957614183426e-12),
    (3.637978807091713e-12, 3.637978807091713e-12),
    (1.8189894035458565e-12, 1.8189894035458565e-12),
    (9.094947017729282e-13, 9.094947017729282e-13),
    (9.094947017729282e-13, 9.094947017729282e-13),
    (4.547473508864641e-13, 4.547473508864641e-13),
    (2.2737367544323206e-13, 2.2737367544323206e-13),
    (1.1368683772161603e-13, 1.1368683772161603e-13),
    (5.684341886080802e-14, 5.684341886080802e-14),
    (2.842170943040401e-14, 2.842170943040401e-14),
    (1.4210854715202004e-14, 1.4210854715202004e-14),
    (7.105427357601002e-15, 7.105427357601002e-15),
    (3.552713678800501e-15, 3.552713678800501e-15),
    (1.7763568394002505e-15, 1.7763568394002505e-15),
    (8.881784197001252e-16, 8.881784197001252e-16),
    (4.440892098500626e-16, 4.440892098500626e-16),
    (2.220446049250313e-16, 2.220446049250313e-16),
    (1.1102230246251565e-16, 1.1102230246251565e-16),
];

/// (2^-i, atanh(2^-i)) rows, i = 1..=24, repeats at i = 4, 13.
pub(crate) const ATANH_F32: [(f32, f32); 26] = [
    (0.5, 0.5493061542510986),
    (0.25, 0.2554128170013428),
    (0.125, 0.12565721571445465),
    (0.0625, 0.06258156895637512),
    (0.0625, 0.06258156895637512),
    (0.03125, 0.0312601774930954),
    (0.015625, 0.015626272186636925),
    (0.0078125, 0.00781265925616026),
    (0.00390625, 0.003906270023435354),
    (0.001953125, 0.00195312756113708),
    (0.0009765625, 0.0009765628492459655),
    (0.00048828125, 0.0004882813082076609),
    (0.000244140625, 0.000244140625),
    (0.0001220703125, 0.0001220703125),
    (0.0001220703125, 0.0001220703125),
    (6.103515625e-5, 6.103515625e-5),
    (3.0517578125e-5, 3.0517578125e-5),
    (1.52587890625e-5, 1.52587890625e-5),
    (7.62939453125e-6, 7.62939453125e-6),
    (3.814697265625e-6, 3.814697265625e-6),
    (1.9073486328125e-6, 1.9073486328125e-6),
    (9.5367431640625e-7, 9.5367431640625e-7),
    (4.76837158203125e-7, 4.76837158203125e-7),
    (2.384185791015625e-7, 2.384185791015625e-7),
    (1.1920928955078125e-7, 1.1920928955078125e-7),
    (5.960464477539063e-8, 5.960464477539063e-8),
];
