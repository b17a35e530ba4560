//! Rolled-steel unit weights (kg/m) keyed by nominal size (mm).
//!
//! Each table is sorted by size so lookups can binary search. The size sets
//! are the union of every revision of the shop's weight sheets; where two
//! revisions disagreed the sheet values were kept as-is (see `NPU`).

/// NPU (UPN) channels.
///
/// NPU 280 is listed at 47.80 kg/m, heavier than NPU 300 at 46.20 kg/m. The
/// shop sheets carry it that way in every revision that lists both sizes, so
/// it is reproduced unchanged rather than "corrected".
pub static NPU: &[(u32, f64)] = &[
    (60, 5.07),
    (65, 7.09),
    (80, 8.64),
    (100, 10.60),
    (120, 13.40),
    (140, 16.00),
    (160, 18.80),
    (180, 22.00),
    (200, 25.30),
    (220, 29.40),
    (240, 33.20),
    (260, 37.90),
    (280, 47.80),
    (300, 46.20),
    (320, 59.50),
    (350, 60.60),
    (400, 71.80),
];

/// HEA wide-flange beams
pub static HEA: &[(u32, f64)] = &[
    (100, 16.70),
    (120, 19.90),
    (140, 24.70),
    (160, 30.40),
    (180, 35.50),
    (200, 42.30),
    (220, 50.50),
    (240, 60.30),
    (260, 68.20),
    (280, 76.40),
    (300, 88.30),
    (320, 97.60),
    (340, 105.00),
    (360, 112.00),
    (400, 125.00),
    (450, 140.00),
    (500, 155.00),
    (550, 166.00),
    (600, 178.00),
];

/// HEB wide-flange beams
pub static HEB: &[(u32, f64)] = &[
    (100, 20.40),
    (120, 26.70),
    (140, 33.70),
    (160, 42.60),
    (180, 51.20),
    (200, 61.30),
    (220, 71.50),
    (240, 83.20),
    (260, 93.00),
    (280, 103.00),
    (300, 117.00),
    (320, 127.00),
    (340, 134.00),
    (360, 142.00),
    (400, 155.00),
    (450, 171.00),
    (500, 187.00),
    (550, 199.00),
    (600, 212.00),
];

/// NPI (IPN) I-beams
pub static NPI: &[(u32, f64)] = &[
    (80, 5.94),
    (100, 8.34),
    (120, 11.10),
    (140, 14.30),
    (160, 17.90),
    (180, 21.90),
    (200, 26.20),
    (220, 31.10),
    (240, 36.20),
    (260, 41.90),
    (280, 47.90),
    (300, 54.20),
    (320, 61.00),
    (340, 68.00),
    (360, 76.10),
    (380, 84.00),
    (400, 92.40),
    (425, 104.00),
    (450, 115.00),
    (475, 128.00),
    (500, 141.00),
    (550, 166.00),
    (600, 199.00),
];
