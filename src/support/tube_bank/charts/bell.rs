//! Digitized Bell-Delaware correction charts.

/// Fraction of tubes in pure crossflow.
pub(super) const BAFFLE_CUT_FRACTIONS: [f64; 67] = [
    0.0, 0.0138889, 0.0277778, 0.0416667, 0.0538194, 0.0659722, 0.100694, 0.114583, 0.126736,
    0.140625, 0.152778, 0.166667, 0.178819, 0.192708, 0.215278, 0.227431, 0.241319, 0.255208,
    0.267361, 0.28125, 0.295139, 0.340278, 0.354167, 0.366319, 0.380208, 0.394097, 0.402778,
    0.416667, 0.430556, 0.444444, 0.475694, 0.489583, 0.503472, 0.517361, 0.53125, 0.545139,
    0.560764, 0.574653, 0.588542, 0.625, 0.638889, 0.652778, 0.668403, 0.682292, 0.697917,
    0.701389, 0.713542, 0.729167, 0.743056, 0.758681, 0.802083, 0.817708, 0.833333, 0.848958,
    0.866319, 0.881944, 0.901042, 0.918403, 0.934028, 0.947917, 0.960069, 0.970486, 0.977431,
    0.984375, 0.991319, 0.994792, 1.0,
];

/// Baffle-cut correction `Jc` at each entry of [`BAFFLE_CUT_FRACTIONS`].
pub(super) const BAFFLE_CUT_FACTORS: [f64; 67] = [
    0.534317, 0.544632, 0.556665, 0.566983, 0.579014, 0.591045, 0.620271, 0.630589, 0.640904,
    0.652937, 0.663252, 0.675286, 0.685601, 0.697635, 0.71483, 0.725145, 0.737179, 0.747497,
    0.757812, 0.76813, 0.780163, 0.81627, 0.826588, 0.836903, 0.847221, 0.857539, 0.867848,
    0.874734, 0.885052, 0.89537, 0.916012, 0.92633, 0.936648, 0.946966, 0.955568, 0.965886,
    0.974492, 0.984809, 0.993412, 1.01578, 1.0261, 1.0347, 1.0433, 1.05362, 1.06223, 1.06052,
    1.07083, 1.07944, 1.08804, 1.09664, 1.11731, 1.1242, 1.13109, 1.13798, 1.14487, 1.15004,
    1.15522, 1.15354, 1.1467, 1.13815, 1.12787, 1.11588, 1.10388, 1.09017, 1.07474, 1.05759,
    1.03015,
];

/// Total leakage area over crossflow area, `(Ssb + Stb) / Sm`.
pub(super) const LEAKAGE_AREA_RATIOS: [f64; 122] = [
    0.0, 1e-5, 0.0001, 0.001, 0.0037779, 0.00885994, 0.012644, 0.0189629, 0.0213694, 0.0241428,
    0.0289313, 0.0339093, 0.0376628, 0.0425124, 0.0487152, 0.0523402, 0.0552542, 0.0614631,
    0.0676658, 0.0719956, 0.0770838, 0.081302, 0.0885214, 0.0956308, 0.101638, 0.102145, 0.111508,
    0.119266, 0.12261, 0.129155, 0.136778, 0.144818, 0.148914, 0.15592, 0.164774, 0.16868,
    0.177552, 0.181501, 0.189224, 0.196087, 0.200557, 0.209209, 0.220317, 0.230683, 0.236096,
    0.242525, 0.247198, 0.255653, 0.2591, 0.266228, 0.274193, 0.281732, 0.285993, 0.295601,
    0.302042, 0.311269, 0.312575, 0.322107, 0.33016, 0.332909, 0.341261, 0.347109, 0.353899,
    0.360408, 0.369312, 0.374301, 0.380413, 0.388831, 0.392836, 0.401746, 0.403961, 0.413723,
    0.422502, 0.424825, 0.432931, 0.442274, 0.450602, 0.454815, 0.463804, 0.46923, 0.475645,
    0.483563, 0.491432, 0.501277, 0.501713, 0.510247, 0.513193, 0.523506, 0.530019, 0.534607,
    0.544912, 0.550679, 0.557212, 0.563826, 0.569142, 0.576997, 0.583585, 0.588979, 0.595518,
    0.601215, 0.601702, 0.611585, 0.613221, 0.623417, 0.629753, 0.634211, 0.640009, 0.646851,
    0.653971, 0.665084, 0.672758, 0.683136, 0.689056, 0.698932, 0.702129, 0.711523, 0.712532,
    0.722415, 0.724566, 0.732996, 0.738886, 0.743614,
];

/// Shell-to-baffle share of the leakage area, `Ssb / (Ssb + Stb)`.
pub(super) const LEAKAGE_SPLITS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Leakage correction `Jl`, one curve per entry of [`LEAKAGE_SPLITS`].
pub(super) const LEAKAGE_FACTORS: [[f64; 122]; 5] = [
    [
        1.0, 0.99999, 0.9999, 0.999, 0.982615, 0.962505, 0.952607, 0.939987, 0.935206, 0.930216,
        0.922288, 0.91564, 0.910813, 0.904659, 0.896788, 0.892188, 0.889224, 0.883885, 0.879147,
        0.875888, 0.872059, 0.868884, 0.86345, 0.858585, 0.854816, 0.854561, 0.849863, 0.846402,
        0.844911, 0.841261, 0.837352, 0.833765, 0.831938, 0.828814, 0.824864, 0.823122, 0.819164,
        0.817403, 0.813958, 0.810877, 0.80887, 0.804985, 0.799998, 0.795344, 0.792913, 0.790046,
        0.787961, 0.78419, 0.782652, 0.779473, 0.776134, 0.773108, 0.771208, 0.766569, 0.762947,
        0.758832, 0.758249, 0.753997, 0.750695, 0.749592, 0.746005, 0.743396, 0.740368, 0.737464,
        0.733493, 0.731267, 0.728541, 0.723847, 0.721761, 0.717786, 0.716798, 0.712444, 0.708528,
        0.707492, 0.703876, 0.699709, 0.695994, 0.694115, 0.690105, 0.687685, 0.684824, 0.681292,
        0.677782, 0.672841, 0.672691, 0.669838, 0.668675, 0.662925, 0.66002, 0.657973, 0.653377,
        0.651026, 0.648404, 0.645491, 0.64312, 0.639616, 0.636677, 0.634271, 0.633926, 0.628263,
        0.628045, 0.623637, 0.622907, 0.618359, 0.615533, 0.613545, 0.611204, 0.608458, 0.605055,
        0.599743, 0.596076, 0.591447, 0.588806, 0.584179, 0.582574, 0.578371, 0.577921, 0.573513,
        0.572554, 0.568793, 0.566166, 0.564057,
    ],
    [
        1.0, 0.99999, 0.9999, 0.999, 0.969362, 0.950324, 0.942087, 0.92833, 0.923091, 0.917463,
        0.908263, 0.8987, 0.89149, 0.884407, 0.874926, 0.868404, 0.865482, 0.859179, 0.851926,
        0.847458, 0.842356, 0.838126, 0.831234, 0.824993, 0.820171, 0.819781, 0.812734, 0.807844,
        0.805761, 0.801747, 0.797071, 0.792124, 0.789555, 0.785317, 0.78038, 0.778202, 0.773138,
        0.77066, 0.766058, 0.76223, 0.761802, 0.754362, 0.748168, 0.742388, 0.73989, 0.737023,
        0.734092, 0.729014, 0.727092, 0.723117, 0.718675, 0.713975, 0.711407, 0.706049, 0.702306,
        0.696944, 0.696185, 0.690717, 0.686227, 0.685001, 0.681275, 0.677607, 0.67354, 0.66991,
        0.664945, 0.662097, 0.658262, 0.653372, 0.651139, 0.645344, 0.644356, 0.639733, 0.633126,
        0.63202, 0.628405, 0.623295, 0.618256, 0.615613, 0.610601, 0.607588, 0.604035, 0.59965,
        0.595292, 0.58984, 0.589599, 0.58484, 0.583239, 0.578639, 0.573864, 0.570568, 0.564821,
        0.562249, 0.559118, 0.554969, 0.55186, 0.54748, 0.543806, 0.540727, 0.536551, 0.532912,
        0.532604, 0.528196, 0.527417, 0.521732, 0.51779, 0.515024, 0.511791, 0.507996, 0.504098,
        0.498013, 0.493805, 0.488017, 0.484304, 0.479275, 0.477805, 0.471912, 0.47135, 0.465839,
        0.464639, 0.459938, 0.456295, 0.453329,
    ],
    [
        1.0, 0.99999, 0.9999, 0.999, 0.963548, 0.945291, 0.931697, 0.915513, 0.90935, 0.903126,
        0.892379, 0.882357, 0.875546, 0.864662, 0.854734, 0.849292, 0.844917, 0.836477, 0.828194,
        0.822412, 0.815618, 0.810932, 0.803692, 0.796563, 0.790539, 0.79003, 0.780769, 0.774098,
        0.771163, 0.765418, 0.759681, 0.754353, 0.751784, 0.746512, 0.739848, 0.736908, 0.73023,
        0.727831, 0.723525, 0.722361, 0.716403, 0.709498, 0.702106, 0.695343, 0.69183, 0.687797,
        0.684784, 0.679126, 0.676934, 0.672463, 0.666468, 0.660794, 0.657587, 0.652229, 0.647674,
        0.641886, 0.641039, 0.634661, 0.629571, 0.627846, 0.62156, 0.618, 0.614214, 0.609549,
        0.603166, 0.599589, 0.595259, 0.589978, 0.587232, 0.580972, 0.579691, 0.574139, 0.567532,
        0.566006, 0.560921, 0.553889, 0.548597, 0.545865, 0.539851, 0.536447, 0.532176, 0.526217,
        0.52128, 0.514403, 0.514091, 0.509272, 0.507629, 0.500514, 0.49602, 0.49275, 0.485255,
        0.481637, 0.477351, 0.472925, 0.46959, 0.46425, 0.459291, 0.456283, 0.452506, 0.448422,
        0.448072, 0.440693, 0.439462, 0.433776, 0.429185, 0.42583, 0.422193, 0.417554, 0.412196,
        0.404759, 0.399625, 0.392681, 0.38872, 0.382111, 0.379972, 0.374079, 0.373424, 0.366812,
        0.365433, 0.360144, 0.355712, 0.352153,
    ],
    [
        1.0, 0.99999, 0.9999, 0.999, 0.952164, 0.932054, 0.918775, 0.898166, 0.89158, 0.884084,
        0.873337, 0.862164, 0.849748, 0.841023, 0.827707, 0.821818, 0.817167, 0.80764, 0.798123,
        0.79148, 0.784355, 0.778722, 0.769082, 0.759588, 0.752322, 0.751711, 0.742222, 0.733336,
        0.730403, 0.724627, 0.716983, 0.709925, 0.706578, 0.701202, 0.694408, 0.691425, 0.684748,
        0.681776, 0.675771, 0.66987, 0.665387, 0.658756, 0.650396, 0.642594, 0.63852, 0.633681,
        0.630164, 0.623243, 0.620278, 0.614914, 0.608773, 0.60289, 0.599564, 0.592066, 0.587039,
        0.580086, 0.579103, 0.571929, 0.565004, 0.562871, 0.556585, 0.552183, 0.547073, 0.542175,
        0.535473, 0.531288, 0.526005, 0.518616, 0.51564, 0.509016, 0.507369, 0.500113, 0.493584,
        0.491836, 0.485642, 0.477775, 0.471507, 0.468336, 0.461571, 0.457487, 0.452093, 0.445202,
        0.43798, 0.428108, 0.42792, 0.424141, 0.421924, 0.414162, 0.409255, 0.405735, 0.397827,
        0.393402, 0.387784, 0.382579, 0.378578, 0.372665, 0.367707, 0.363647, 0.359545, 0.35391,
        0.353453, 0.346015, 0.344783, 0.336861, 0.331413, 0.328057, 0.323694, 0.318544, 0.312629,
        0.303584, 0.297808, 0.289997, 0.285542, 0.279346, 0.275077, 0.267704, 0.266945, 0.259507,
        0.257888, 0.251468, 0.246404, 0.242337,
    ],
    [
        1.0, 0.99999, 0.9999, 0.999, 0.934094, 0.899408, 0.88689, 0.864752, 0.855175, 0.846,
        0.832233, 0.820088, 0.811664, 0.80142, 0.78835, 0.781726, 0.776483, 0.765313, 0.755385,
        0.749603, 0.742282, 0.73553, 0.725889, 0.716396, 0.709586, 0.709021, 0.698593, 0.690044,
        0.686691, 0.680127, 0.67261, 0.665553, 0.662016, 0.655963, 0.648118, 0.644201, 0.635976,
        0.63258, 0.626768, 0.621075, 0.617208, 0.609726, 0.60012, 0.591542, 0.587468, 0.582048,
        0.578005, 0.570583, 0.567619, 0.561455, 0.554463, 0.548789, 0.545376, 0.537063, 0.531409,
        0.523465, 0.522319, 0.51407, 0.508009, 0.50576, 0.49867, 0.493705, 0.487867, 0.482187,
        0.474436, 0.470146, 0.465546, 0.458712, 0.455268, 0.43738, 0.445348, 0.436779, 0.429227,
        0.42748, 0.42131, 0.413109, 0.406841, 0.403448, 0.395933, 0.391023, 0.38459, 0.37863,
        0.372074, 0.361413, 0.360967, 0.356072, 0.353486, 0.344855, 0.339953, 0.336008, 0.327035,
        0.322011, 0.316393, 0.310588, 0.306074, 0.299769, 0.294481, 0.290318, 0.285397, 0.279684,
        0.279195, 0.271757, 0.27035, 0.261526, 0.255964, 0.252562, 0.248199, 0.241338, 0.234956,
        0.226232, 0.219861, 0.210806, 0.205706, 0.197321, 0.194638, 0.187568, 0.186719, 0.178183,
        0.176295, 0.168945, 0.16388, 0.160321,
    ],
];

/// Bypass area over crossflow area.
pub(super) const BYPASS_AREA_FRACTIONS: [f64; 144] = [
    0.0, 1e-5, 0.0001, 0.001, 0.0388568, 0.0474941, 0.0572083, 0.0807999, 0.0915735, 0.0959337,
    0.118724, 0.128469, 0.134716, 0.142211, 0.146821, 0.156504, 0.162821, 0.169488, 0.178126,
    0.185301, 0.194997, 0.200798, 0.210512, 0.212373, 0.221063, 0.222122, 0.228864, 0.232856,
    0.238578, 0.242605, 0.250104, 0.257958, 0.262866, 0.268403, 0.273639, 0.280289, 0.284999,
    0.291067, 0.295186, 0.30005, 0.309764, 0.312548, 0.31468, 0.320144, 0.323405, 0.328111,
    0.33213, 0.333111, 0.33857, 0.341836, 0.343889, 0.349352, 0.351401, 0.35359, 0.359058,
    0.361102, 0.366408, 0.370597, 0.375601, 0.379541, 0.382811, 0.386913, 0.392363, 0.39766,
    0.401106, 0.401841, 0.410811, 0.412615, 0.419939, 0.421633, 0.42633, 0.431067, 0.434967,
    0.440908, 0.444682, 0.450614, 0.45373, 0.457036, 0.462565, 0.464508, 0.47016, 0.47227,
    0.477519, 0.480474, 0.482794, 0.486874, 0.490639, 0.492758, 0.499075, 0.501281, 0.506824,
    0.5116, 0.51494, 0.52159, 0.52187, 0.530498, 0.532368, 0.537013, 0.541276, 0.542244, 0.546385,
    0.551805, 0.553801, 0.5575, 0.562325, 0.56668, 0.568283, 0.572153, 0.576377, 0.580676,
    0.582252, 0.5886, 0.591953, 0.599019, 0.601715, 0.602385, 0.610103, 0.612441, 0.613194,
    0.62061, 0.622146, 0.622934, 0.630324, 0.631852, 0.633669, 0.637109, 0.64136, 0.644447,
    0.647887, 0.649879, 0.652335, 0.656363, 0.657593, 0.661839, 0.665333, 0.667924, 0.672258,
    0.674841, 0.678694, 0.681955, 0.685396, 0.688789, 0.69198, 0.69532,
];

/// Sealing strips per crossflow tube row.
pub(super) const SEAL_STRIP_RATIOS: [f64; 6] = [0.0, 0.05, 0.1, 1.0 / 6.0, 0.3, 0.5];

/// Bypass correction `Jb` for turbulent flow, one curve per entry of [`SEAL_STRIP_RATIOS`].
pub(super) const BYPASS_TURBULENT: [[f64; 144]; 6] = [
    [
        1.0, 0.99999, 0.9999, 0.999, 0.952236, 0.940656, 0.929217, 0.902172, 0.890997, 0.886514,
        0.863444, 0.851755, 0.845079, 0.837139, 0.832293, 0.822203, 0.816984, 0.810801, 0.80192,
        0.794615, 0.78485, 0.779066, 0.769592, 0.767791, 0.759517, 0.758605, 0.752824, 0.749047,
        0.743669, 0.739906, 0.73295, 0.725735, 0.722154, 0.717987, 0.713174, 0.707108, 0.702842,
        0.697384, 0.693703, 0.689382, 0.680999, 0.678318, 0.676273, 0.671537, 0.669333, 0.666165,
        0.662801, 0.661983, 0.657447, 0.654748, 0.653057, 0.648578, 0.646907, 0.645126, 0.640517,
        0.638664, 0.634016, 0.631344, 0.628167, 0.625058, 0.622488, 0.619125, 0.614363, 0.610288,
        0.607796, 0.607265, 0.60083, 0.599544, 0.59421, 0.592943, 0.589445, 0.585503, 0.582277,
        0.577936, 0.575196, 0.571767, 0.569973, 0.567464, 0.563036, 0.561619, 0.557635, 0.556155,
        0.55249, 0.550438, 0.548878, 0.546625, 0.544554, 0.543231, 0.538071, 0.536281, 0.532469,
        0.529276, 0.527497, 0.523935, 0.52375, 0.518089, 0.516762, 0.513373, 0.51047, 0.509884,
        0.507382, 0.504126, 0.502932, 0.500727, 0.497867, 0.495143, 0.494144, 0.491733, 0.488799,
        0.485831, 0.484868, 0.481006, 0.479285, 0.476413, 0.473514, 0.472869, 0.469205, 0.468011,
        0.467512, 0.462626, 0.461732, 0.461273, 0.457, 0.456012, 0.45484, 0.452628, 0.450352,
        0.448953, 0.447398, 0.446281, 0.444731, 0.442201, 0.44145, 0.439096, 0.437168, 0.435842,
        0.433942, 0.432813, 0.430923, 0.429157, 0.427301, 0.425479, 0.423772, 0.421993,
    ],
    [
        1.0, 0.99999, 0.9999, 0.999, 0.972281, 0.967922, 0.961369, 0.943692, 0.935729, 0.932525,
        0.915956, 0.908961, 0.906104, 0.904563, 0.901473, 0.895196, 0.891354, 0.885977, 0.87906,
        0.874187, 0.86913, 0.86655, 0.862245, 0.861423, 0.857594, 0.857129, 0.852769, 0.850462,
        0.848255, 0.846705, 0.842424, 0.837963, 0.835187, 0.832066, 0.829126, 0.825407, 0.822783,
        0.819415, 0.817095, 0.814308, 0.808771, 0.80719, 0.805982, 0.802895, 0.801058, 0.798414,
        0.796163, 0.795615, 0.79257, 0.79081, 0.789705, 0.786773, 0.785555, 0.784255, 0.781018,
        0.780293, 0.778416, 0.776757, 0.773823, 0.77152, 0.769804, 0.767657, 0.764814, 0.76206,
        0.760275, 0.759852, 0.754714, 0.753788, 0.750038, 0.749171, 0.746514, 0.743844, 0.742476,
        0.740476, 0.738142, 0.733741, 0.732227, 0.731129, 0.729296, 0.728224, 0.725118, 0.723961,
        0.721379, 0.719929, 0.718793, 0.716592, 0.714554, 0.71341, 0.709585, 0.708255, 0.706445,
        0.704915, 0.703256, 0.699727, 0.699579, 0.694462, 0.693873, 0.692411, 0.691072, 0.690566,
        0.688406, 0.685632, 0.684701, 0.682979, 0.68071, 0.678471, 0.677649, 0.675704, 0.673763,
        0.671794, 0.671073, 0.668927, 0.667797, 0.664237, 0.662887, 0.662584, 0.659112, 0.658063,
        0.657689, 0.65401, 0.65325, 0.652861, 0.649222, 0.648472, 0.647937, 0.646926, 0.645678,
        0.64442, 0.642745, 0.641777, 0.640586, 0.638832, 0.638297, 0.636454, 0.634836, 0.633593,
        0.631519, 0.630382, 0.628731, 0.627336, 0.626066, 0.624995, 0.62399, 0.622939,
    ],
    [
        1.0, 0.99999, 0.9999, 0.999, 0.978035, 0.974378, 0.970282, 0.960405, 0.955928, 0.953958,
        0.941171, 0.935756, 0.932301, 0.928172, 0.925642, 0.92035, 0.916913, 0.9133, 0.908641,
        0.904789, 0.899741, 0.89745, 0.893627, 0.892897, 0.889494, 0.88908, 0.886716, 0.885913,
        0.884594, 0.881903, 0.877493, 0.874369, 0.87224, 0.869806, 0.867741, 0.865076, 0.863023,
        0.86048, 0.858872, 0.856977, 0.853205, 0.851584, 0.850211, 0.846705, 0.845452, 0.843647,
        0.842058, 0.841641, 0.839327, 0.837996, 0.837215, 0.835141, 0.834364, 0.833443, 0.831147,
        0.830291, 0.828293, 0.826718, 0.824687, 0.82305, 0.821515, 0.819223, 0.816189, 0.814075,
        0.812703, 0.81241, 0.808849, 0.808135, 0.805242, 0.804574, 0.802726, 0.800866, 0.799338,
        0.797016, 0.795545, 0.793199, 0.791952, 0.790633, 0.78865, 0.787955, 0.785378, 0.784125,
        0.781018, 0.779971, 0.779149, 0.777707, 0.776379, 0.775632, 0.77341, 0.77338, 0.770144,
        0.767521, 0.766358, 0.764048, 0.763944, 0.760626, 0.759946, 0.758344, 0.756878, 0.756543,
        0.754964, 0.752903, 0.752217, 0.750955, 0.749311, 0.74768, 0.747075, 0.745618, 0.743505,
        0.741332, 0.740537, 0.738255, 0.737132, 0.731632, 0.729296, 0.729296, 0.729296, 0.728522,
        0.728273, 0.725825, 0.725318, 0.725059, 0.72263, 0.722122, 0.72146, 0.720209, 0.718666,
        0.71766, 0.716539, 0.715891, 0.715086, 0.713635, 0.713192, 0.711666, 0.708853, 0.706773,
        0.705828, 0.705414, 0.704797, 0.703715, 0.702494, 0.701293, 0.700165, 0.698986,
    ],
    [
        1.0, 0.99999, 0.9999, 0.999, 0.98326, 0.97947, 0.974498, 0.962528, 0.957986, 0.956693,
        0.949964, 0.947102, 0.945271, 0.94206, 0.94009, 0.935965, 0.93353, 0.932117, 0.928823,
        0.925995, 0.923086, 0.921351, 0.918452, 0.917897, 0.915313, 0.914999, 0.913, 0.911818,
        0.910127, 0.90895, 0.907403, 0.905106, 0.903391, 0.90146, 0.899637, 0.897328, 0.895696,
        0.893598, 0.892176, 0.8905, 0.886812, 0.885691, 0.884834, 0.882399, 0.880948, 0.879769,
        0.878966, 0.87877, 0.87685, 0.875407, 0.874501, 0.873182, 0.872775, 0.872342, 0.870581,
        0.869774, 0.86768, 0.865848, 0.863665, 0.862771, 0.862131, 0.861322, 0.859193, 0.857129,
        0.859086, 0.858609, 0.852897, 0.852509, 0.850934, 0.85034, 0.848528, 0.846705, 0.845041,
        0.842545, 0.841823, 0.840689, 0.839677, 0.838418, 0.836305, 0.835485, 0.833106, 0.832278,
        0.831286, 0.830728, 0.830291, 0.828583, 0.827011, 0.826114, 0.823157, 0.822169, 0.82102,
        0.820047, 0.819426, 0.818189, 0.818085, 0.814886, 0.814194, 0.812289, 0.810543, 0.810058,
        0.806263, 0.806263, 0.806263, 0.806137, 0.804373, 0.802783, 0.802256, 0.801473, 0.800619,
        0.799812, 0.799526, 0.798328, 0.796926, 0.793982, 0.792861, 0.792583, 0.789808, 0.78897,
        0.788701, 0.787226, 0.786921, 0.786757, 0.784122, 0.783578, 0.782932, 0.781709, 0.780202,
        0.779109, 0.778433, 0.778042, 0.77756, 0.776422, 0.775988, 0.774494, 0.77333, 0.772824,
        0.77198, 0.771442, 0.770094, 0.768954, 0.767753, 0.766571, 0.765461, 0.764301,
    ],
    [
        1.0, 0.99999, 0.9999, 0.999, 0.990537, 0.988984, 0.98724, 0.983016, 0.980614, 0.979535,
        0.974346, 0.972054, 0.970522, 0.968688, 0.967675, 0.965549, 0.964164, 0.963959, 0.963171,
        0.961603, 0.959253, 0.959162, 0.957048, 0.956644, 0.954757, 0.954523, 0.9529, 0.95197,
        0.950734, 0.949953, 0.951574, 0.949936, 0.947587, 0.946396, 0.945271, 0.943845, 0.942835,
        0.941537, 0.940656, 0.940788, 0.942546, 0.940563, 0.939047, 0.935797, 0.935104, 0.934105,
        0.933252, 0.933045, 0.931888, 0.931164, 0.930682, 0.9294, 0.929485, 0.929948, 0.931104,
        0.931397, 0.928907, 0.926946, 0.925893, 0.925065, 0.924344, 0.923388, 0.922149, 0.92104,
        0.92032, 0.920166, 0.918293, 0.917917, 0.917341, 0.917207, 0.916838, 0.916466, 0.916159,
        0.915693, 0.915397, 0.914931, 0.914687, 0.914428, 0.913994, 0.913842, 0.91334, 0.912902,
        0.911815, 0.911203, 0.91078, 0.910038, 0.909353, 0.908968, 0.907821, 0.907421, 0.906416,
        0.905551, 0.904947, 0.903745, 0.903694, 0.902137, 0.9018, 0.900963, 0.900195, 0.900021,
        0.899276, 0.898303, 0.897944, 0.897281, 0.896416, 0.895636, 0.895349, 0.894656, 0.893901,
        0.893133, 0.892852, 0.89172, 0.891122, 0.889865, 0.889385, 0.889266, 0.887895, 0.88748,
        0.887347, 0.887002, 0.887002, 0.887002, 0.886113, 0.885805, 0.88544, 0.884748, 0.883894,
        0.883275, 0.882575, 0.882132, 0.881585, 0.880689, 0.880426, 0.879577, 0.878879, 0.878362,
        0.878362, 0.878362, 0.878362, 0.877712, 0.877026, 0.87635, 0.875715, 0.875051,
    ],
    [1.0; 144],
];

/// Bypass correction `Jb` for laminar flow, one curve per entry of [`SEAL_STRIP_RATIOS`].
pub(super) const BYPASS_LAMINAR: [[f64; 144]; 6] = [
    [
        1.0, 0.99999, 0.9999, 0.999, 0.952236, 0.940656, 0.929217, 0.90002, 0.886521, 0.880701,
        0.850893, 0.838458, 0.831886, 0.823549, 0.818189, 0.807989, 0.801404, 0.794512, 0.78485,
        0.776988, 0.766488, 0.760275, 0.751029, 0.749052, 0.740111, 0.739124, 0.732874, 0.729198,
        0.723961, 0.720158, 0.713129, 0.705842, 0.701326, 0.696132, 0.690988, 0.684186, 0.679334,
        0.67352, 0.66971, 0.665448, 0.657018, 0.654621, 0.652811, 0.648334, 0.645676, 0.641432,
        0.637791, 0.636967, 0.632602, 0.630005, 0.628212, 0.623369, 0.621616, 0.619905, 0.61565,
        0.61403, 0.609576, 0.606083, 0.601936, 0.598691, 0.596011, 0.592666, 0.588251, 0.583992,
        0.581238, 0.580668, 0.574145, 0.572724, 0.566812, 0.565183, 0.56069, 0.556978, 0.55452,
        0.550223, 0.547289, 0.543116, 0.540988, 0.538616, 0.534414, 0.532944, 0.528694, 0.527116,
        0.523265, 0.521112, 0.519429, 0.516481, 0.514038, 0.512668, 0.508511, 0.507017, 0.503284,
        0.500089, 0.497867, 0.493714, 0.49354, 0.487757, 0.486467, 0.482972, 0.479717, 0.478981,
        0.476477, 0.473881, 0.472928, 0.470456, 0.467252, 0.464687, 0.46375, 0.461495, 0.458195,
        0.45486, 0.453935, 0.45032, 0.448303, 0.443758, 0.442035, 0.441609, 0.437337, 0.436027,
        0.435562, 0.431011, 0.430169, 0.429742, 0.425761, 0.424942, 0.423971, 0.422137, 0.42001,
        0.418705, 0.417255, 0.416416, 0.414108, 0.41035, 0.409842, 0.408091, 0.406656, 0.405331,
        0.402949, 0.401536, 0.399438, 0.39767, 0.395938, 0.394249, 0.392668, 0.391019,
    ],
    [
        1.0, 0.99999, 0.9999, 0.999, 0.97132, 0.966107, 0.959971, 0.942755, 0.934996, 0.931875,
        0.915726, 0.908906, 0.906104, 0.904563, 0.901473, 0.895196, 0.891354, 0.885977, 0.87906,
        0.874187, 0.867386, 0.86321, 0.856262, 0.854938, 0.84878, 0.848124, 0.843964, 0.841509,
        0.838004, 0.835546, 0.830988, 0.826241, 0.823289, 0.81997, 0.816844, 0.812892, 0.810104,
        0.806526, 0.804106, 0.801259, 0.795601, 0.793967, 0.792688, 0.789419, 0.787596, 0.785077,
        0.782932, 0.782351, 0.779127, 0.777205, 0.776119, 0.773238, 0.77216, 0.770953, 0.767771,
        0.766585, 0.763514, 0.761099, 0.758428, 0.756396, 0.754714, 0.752376, 0.749281, 0.745922,
        0.743739, 0.743322, 0.738296, 0.737388, 0.73372, 0.732874, 0.730275, 0.727663, 0.725519,
        0.722266, 0.720207, 0.716983, 0.715295, 0.713509, 0.710531, 0.709487, 0.70646, 0.705709,
        0.703842, 0.702816, 0.702076, 0.700776, 0.699579, 0.698012, 0.693361, 0.691743, 0.687698,
        0.686208, 0.685168, 0.682279, 0.682134, 0.677697, 0.676739, 0.674366, 0.671761, 0.671172,
        0.668654, 0.666449, 0.665778, 0.664536, 0.662357, 0.660396, 0.659676, 0.657624, 0.655391,
        0.653126, 0.652298, 0.648972, 0.647223, 0.643551, 0.642155, 0.64196, 0.639714, 0.639035,
        0.638682, 0.635109, 0.634371, 0.633993, 0.63046, 0.629731, 0.628867, 0.627232, 0.625218,
        0.62376, 0.622139, 0.621202, 0.62005, 0.618248, 0.617731, 0.615947, 0.614484, 0.61328,
        0.611273, 0.61008, 0.608305, 0.606806, 0.605229, 0.603678, 0.602222, 0.600702,
    ],
    [
        1.0, 0.99999, 0.9999, 0.999, 0.978947, 0.974857, 0.970278, 0.959247, 0.954251, 0.952236,
        0.938267, 0.932356, 0.928587, 0.924085, 0.921326, 0.915559, 0.911816, 0.907882, 0.902811,
        0.89862, 0.892988, 0.889635, 0.885582, 0.884834, 0.879037, 0.878345, 0.87566, 0.874074,
        0.87124, 0.869251, 0.86556, 0.862478, 0.860473, 0.858072, 0.85515, 0.850859, 0.849041,
        0.846705, 0.844334, 0.841542, 0.835995, 0.834411, 0.833976, 0.832942, 0.832325, 0.829367,
        0.82685, 0.826237, 0.824191, 0.82297, 0.822203, 0.81994, 0.819093, 0.818189, 0.815149,
        0.814015, 0.81124, 0.809258, 0.806898, 0.805045, 0.80351, 0.801588, 0.799042, 0.796575,
        0.794975, 0.794634, 0.791377, 0.790729, 0.787823, 0.78715, 0.784863, 0.782599, 0.781214,
        0.779109, 0.776888, 0.77341, 0.772317, 0.771158, 0.769179, 0.768425, 0.766237, 0.765263,
        0.762533, 0.761, 0.759834, 0.757882, 0.756085, 0.755076, 0.752075, 0.751029, 0.749142,
        0.747519, 0.746277, 0.743778, 0.743677, 0.740769, 0.74014, 0.737582, 0.735207, 0.73467,
        0.733289, 0.731487, 0.730713, 0.728963, 0.726686, 0.724636, 0.723901, 0.722489, 0.720951,
        0.719026, 0.718255, 0.715157, 0.713949, 0.711376, 0.710288, 0.710018, 0.706915, 0.705978,
        0.705676, 0.702713, 0.7021, 0.701786, 0.698849, 0.698244, 0.697524, 0.696164, 0.694821,
        0.693848, 0.692765, 0.691722, 0.690438, 0.688338, 0.687698, 0.686042, 0.684684, 0.683677,
        0.681998, 0.680999, 0.680403, 0.679899, 0.679368, 0.677706, 0.676072, 0.674366,
    ],
    [
        1.0, 0.99999, 0.9999, 0.999, 0.980974, 0.977905, 0.97446, 0.966143, 0.962368, 0.960686,
        0.951112, 0.947048, 0.944452, 0.941346, 0.939441, 0.935452, 0.93269, 0.92946, 0.925293,
        0.921845, 0.917207, 0.914443, 0.909833, 0.908959, 0.905975, 0.905612, 0.903304, 0.90194,
        0.899989, 0.898618, 0.896071, 0.893412, 0.891754, 0.889887, 0.887916, 0.885239, 0.883183,
        0.880493, 0.879259, 0.877803, 0.874903, 0.874074, 0.873134, 0.870731, 0.869578, 0.868649,
        0.867856, 0.867642, 0.865256, 0.863831, 0.862988, 0.860849, 0.860049, 0.859186, 0.856524,
        0.855531, 0.852959, 0.852139, 0.851171, 0.84986, 0.848459, 0.846705, 0.844612, 0.842583,
        0.841212, 0.840919, 0.837359, 0.836645, 0.833751, 0.833084, 0.831743, 0.830749, 0.829968,
        0.828849, 0.827989, 0.825515, 0.824217, 0.822981, 0.820918, 0.820193, 0.817941, 0.817102,
        0.815018, 0.813871, 0.813014, 0.811509, 0.810137, 0.809474, 0.8075, 0.806811, 0.805085,
        0.8036, 0.802563, 0.800503, 0.800417, 0.797752, 0.797175, 0.795746, 0.794422, 0.794073,
        0.792581, 0.790633, 0.789837, 0.788364, 0.786627, 0.785849, 0.785563, 0.784873, 0.783229,
        0.781532, 0.780917, 0.778551, 0.777304, 0.774683, 0.773686, 0.773438, 0.772069, 0.771659,
        0.771527, 0.768654, 0.768059, 0.767753, 0.765181, 0.764651, 0.76402, 0.76335, 0.762532,
        0.76154, 0.75956, 0.758417, 0.757994, 0.757301, 0.757089, 0.75611, 0.754779, 0.753793,
        0.752544, 0.752102, 0.751445, 0.750747, 0.749575, 0.748421, 0.747337, 0.746205,
    ],
    [
        1.0, 0.99999, 0.9999, 0.999, 0.991796, 0.989982, 0.987945, 0.983016, 0.980614, 0.979535,
        0.974346, 0.972054, 0.970522, 0.968688, 0.967675, 0.965549, 0.964164, 0.963959, 0.963171,
        0.961603, 0.959253, 0.959162, 0.957048, 0.956644, 0.954757, 0.954523, 0.9529, 0.95197,
        0.950734, 0.949953, 0.951574, 0.949936, 0.947587, 0.946396, 0.945271, 0.943845, 0.942835,
        0.941537, 0.940656, 0.940788, 0.942546, 0.940563, 0.939047, 0.935797, 0.935104, 0.934105,
        0.933252, 0.933045, 0.931888, 0.931164, 0.930682, 0.9294, 0.929485, 0.929948, 0.931104,
        0.931397, 0.928907, 0.926946, 0.925893, 0.925065, 0.924344, 0.923388, 0.922112, 0.920852,
        0.920034, 0.919859, 0.917732, 0.917305, 0.915572, 0.915172, 0.914063, 0.912946, 0.912028,
        0.910631, 0.909744, 0.908352, 0.907622, 0.906848, 0.905555, 0.905101, 0.903781, 0.903289,
        0.902066, 0.901379, 0.900839, 0.899919, 0.899149, 0.898717, 0.897483, 0.897083, 0.89608,
        0.895216, 0.894613, 0.893412, 0.893362, 0.891807, 0.89147, 0.890635, 0.889868, 0.889694,
        0.888923, 0.887829, 0.887427, 0.886681, 0.88571, 0.884834, 0.884477, 0.883613, 0.882672,
        0.881954, 0.881691, 0.880632, 0.880073, 0.878897, 0.878448, 0.878332, 0.876793, 0.876328,
        0.876178, 0.874703, 0.874398, 0.874242, 0.872631, 0.872295, 0.871914, 0.871488, 0.870962,
        0.87058, 0.870155, 0.869909, 0.869486, 0.868691, 0.868448, 0.867611, 0.866922, 0.866412,
        0.86556, 0.864996, 0.864155, 0.863444, 0.86277, 0.862105, 0.86148, 0.860827,
    ],
    [1.0; 144],
];
