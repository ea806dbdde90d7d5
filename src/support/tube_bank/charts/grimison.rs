//! Grimison's tabulated `C1` and `m` coefficients.

/// Pitch ratios of the aligned tables, used for both axes.
pub(super) const ALIGNED_PITCH_RATIOS: [f64; 4] = [1.25, 1.5, 2.0, 3.0];

/// Aligned `C1`; rows follow the longitudinal ratio, columns the transverse ratio.
pub(super) const ALIGNED_C1: [[f64; 4]; 4] = [
    [0.348, 0.275, 0.1, 0.0633],
    [0.367, 0.25, 0.101, 0.0678],
    [0.418, 0.299, 0.229, 0.198],
    [0.29, 0.357, 0.374, 0.286],
];

/// Aligned `m`, laid out like [`ALIGNED_C1`].
pub(super) const ALIGNED_M: [[f64; 4]; 4] = [
    [0.592, 0.608, 0.704, 0.752],
    [0.586, 0.62, 0.702, 0.744],
    [0.57, 0.602, 0.632, 0.648],
    [0.601, 0.584, 0.581, 0.608],
];

/// Staggered table as columns keyed by its first axis.
///
/// Lookups read the longitudinal ratio on the first axis and the transverse
/// ratio down each column, matching the aligned tables. Each column lists
/// `(second-axis ratio, C1, m)` in increasing order. The published table is
/// ragged, so columns differ in length.
pub(super) const STAGGERED_COLUMNS: [(f64, &[(f64, f64, f64)]); 4] = [
    (
        1.25,
        &[
            (1.25, 0.518, 0.556),
            (1.5, 0.451, 0.568),
            (2.0, 0.404, 0.572),
            (3.0, 0.31, 0.592),
        ],
    ),
    (
        1.5,
        &[
            (1.0, 0.497, 0.558),
            (1.25, 0.505, 0.554),
            (1.5, 0.46, 0.562),
            (2.0, 0.416, 0.568),
            (3.0, 0.356, 0.58),
        ],
    ),
    (
        2.0,
        &[
            (0.9, 0.446, 0.571),
            (1.125, 0.478, 0.565),
            (1.25, 0.519, 0.556),
            (1.5, 0.452, 0.568),
            (2.0, 0.482, 0.556),
            (3.0, 0.44, 0.562),
        ],
    ),
    (
        3.0,
        &[
            (0.6, 0.213, 0.636),
            (0.9, 0.401, 0.581),
            (1.125, 0.518, 0.56),
            (1.25, 0.522, 0.562),
            (1.5, 0.488, 0.568),
            (2.0, 0.449, 0.57),
            (3.0, 0.428, 0.574),
        ],
    ),
];
