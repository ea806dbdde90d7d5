//! Digitized Kern shell-side friction chart.

/// Shell-side Reynolds numbers along the chart abscissa.
pub(super) const REYNOLDS: [f64; 127] = [
    9.9524, 11.0349, 12.0786, 13.0504, 14.0121, 15.0431, 16.1511, 17.1176, 17.9105, 18.9822,
    19.9879, 21.0484, 22.0217, 23.1893, 24.8973, 26.0495, 27.7862, 29.835, 31.8252, 33.9506,
    35.9822, 38.3852, 41.481, 43.9664, 47.2083, 50.6891, 54.0782, 58.0635, 63.5667, 68.2537,
    74.247, 78.6957, 83.9573, 90.1511, 95.5596, 102.613, 110.191, 116.806, 128.724, 137.345,
    150.384, 161.484, 171.185, 185.031, 196.139, 210.639, 230.653, 250.933, 281.996, 300.884,
    329.472, 353.842, 384.968, 408.108, 444.008, 505.513, 560.821, 638.506, 690.227, 741.254,
    827.682, 918.205, 1018.63, 1122.76, 1213.62, 1320.38, 1417.94, 1522.93, 1667.69, 1838.11,
    2012.76, 2247.44, 2592.21, 2932.18, 3381.87, 3875.42, 4440.83, 5056.16, 5608.95, 6344.58,
    7038.48, 8224.34, 9123.83, 10121.7, 11598.0, 12701.4, 14090.0, 15938.5, 17452.9, 19112.6,
    20929.3, 24614.0, 29324.6, 34044.8, 37282.2, 42999.9, 50570.2, 55737.9, 59860.6, 65553.0,
    70399.2, 78101.5, 84965.7, 96735.3, 110139.0, 122977.0, 136431.0, 152339.0, 165740.0,
    180319.0, 194904.0, 207981.0, 223357.0, 241440.0, 257621.0, 283946.0, 317042.0, 353996.0,
    408315.0, 452956.0, 519041.0, 590939.0, 668466.0, 751216.0, 827981.0, 894985.0, 1012440.0,
];

/// Friction factors as printed, in ft²/in².
///
/// Multiplied by [`FRICTION_SCALE`] before fitting.
pub(super) const FRICTION_FACTORS: [f64; 127] = [
    0.0429177, 0.0382731, 0.0347901, 0.0316208, 0.0298653, 0.0276702, 0.0259671, 0.024523,
    0.0237582, 0.0224369, 0.0211881, 0.0202668, 0.0193847, 0.0184234, 0.0172894, 0.0166432,
    0.0155182, 0.0147509, 0.0138423, 0.0131572, 0.0124255, 0.0118105, 0.0110842, 0.0106028,
    0.0100785, 0.00958019, 0.0092235, 0.00871144, 0.00817649, 0.0077722, 0.00743616, 0.0071132,
    0.00684836, 0.00655159, 0.00634789, 0.00611185, 0.00592242, 0.00577517, 0.00552603,
    0.00542355, 0.00522267, 0.00502847, 0.00493497, 0.00481301, 0.00469334, 0.00460654,
    0.00449314, 0.00438231, 0.00424799, 0.00416922, 0.00406658, 0.00401703, 0.00394314, 0.0038947,
    0.00382305, 0.00373007, 0.00368555, 0.00359592, 0.00357512, 0.003509, 0.00344515, 0.00338229,
    0.00332057, 0.00328077, 0.00322026, 0.00316102, 0.00308274, 0.00308446, 0.00302787,
    0.00297247, 0.0028993, 0.00284654, 0.00277759, 0.0027099, 0.00262738, 0.00256361, 0.00248541,
    0.00244055, 0.00238072, 0.0023227, 0.00228032, 0.00222531, 0.00218471, 0.00214484, 0.00206613,
    0.00205439, 0.00200402, 0.00196775, 0.00191932, 0.00189622, 0.00186143, 0.00180501, 0.0017393,
    0.00170817, 0.00168761, 0.00163622, 0.00158663, 0.0015576, 0.00153862, 0.0015201, 0.00149199,
    0.00147418, 0.00142864, 0.00139389, 0.00136874, 0.00133524, 0.00131931, 0.0012953, 0.00127147,
    0.00124808, 0.00121724, 0.00121785, 0.00119533, 0.00118082, 0.00116638, 0.00114504,
    0.00111702, 0.00108969, 0.00107013, 0.00104389, 0.00101205, 0.000987437, 0.000969567,
    0.000939849, 0.000922653, 0.000905634, 0.000894962,
];

/// Converts the printed friction factor to a dimensionless one.
pub(super) const FRICTION_SCALE: f64 = 144.0;
