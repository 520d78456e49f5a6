//! Normal vector lookup tables
//!
//! Voxels store an index into one of two fixed tables, picked per limb by the
//! tailer's normal type.

use glam::Vec3;

/// Tiberian Sun normals, normal type 2
#[rustfmt::skip]
pub const TS_NORMALS: [Vec3; 36] = [
    Vec3::new(0.671214, 0.198492, -0.714194),
    Vec3::new(0.269643, 0.584394, -0.76536),
    Vec3::new(-0.040546, 0.096988, -0.994459),
    Vec3::new(-0.572428, -0.091914, -0.814787),
    Vec3::new(-0.171401, -0.57271, -0.801639),
    Vec3::new(0.362557, -0.302999, -0.881331),
    Vec3::new(0.810347, -0.348972, -0.470698),
    Vec3::new(0.103962, 0.938672, -0.328767),
    Vec3::new(-0.324047, 0.587669, -0.741376),
    Vec3::new(-0.800865, 0.340461, -0.492647),
    Vec3::new(-0.665498, -0.590147, -0.456989),
    Vec3::new(0.314767, -0.803002, -0.506073),
    Vec3::new(0.972629, 0.151076, -0.17655),
    Vec3::new(0.680291, 0.684236, -0.262727),
    Vec3::new(-0.520079, 0.827777, -0.210483),
    Vec3::new(-0.961644, -0.179001, -0.207847),
    Vec3::new(-0.262714, -0.937451, -0.228401),
    Vec3::new(0.219707, -0.971301, 0.091125),
    Vec3::new(0.923808, -0.229975, 0.306087),
    Vec3::new(-0.082489, 0.97066, 0.225866),
    Vec3::new(-0.591798, 0.69679, 0.405289),
    Vec3::new(-0.925296, 0.366601, 0.097111),
    Vec3::new(-0.705051, -0.687775, 0.172828),
    Vec3::new(0.7324, -0.680367, -0.026305),
    Vec3::new(0.855162, 0.374582, 0.358311),
    Vec3::new(0.473006, 0.83648, 0.276705),
    Vec3::new(-0.097617, 0.654112, 0.750072),
    Vec3::new(-0.904124, -0.153725, 0.398658),
    Vec3::new(-0.211916, -0.85809, 0.467732),
    Vec3::new(0.500227, -0.674408, 0.543091),
    Vec3::new(0.584539, -0.110249, 0.803841),
    Vec3::new(0.437373, 0.454644, 0.775889),
    Vec3::new(-0.042441, 0.083318, 0.995619),
    Vec3::new(-0.596251, 0.220132, 0.772028),
    Vec3::new(-0.506455, -0.396977, 0.765449),
    Vec3::new(0.070569, -0.478474, 0.875262),
];

/// Red Alert 2 normals, normal type 4
#[rustfmt::skip]
pub const RA2_NORMALS: [Vec3; 244] = [
    Vec3::new(0.526578, -0.359621, -0.770317),
    Vec3::new(0.150482, 0.435984, 0.887284),
    Vec3::new(0.414195, 0.738255, -0.532374),
    Vec3::new(0.075152, 0.916249, -0.393498),
    Vec3::new(-0.316149, 0.930736, -0.183793),
    Vec3::new(-0.773819, 0.623334, -0.11251),
    Vec3::new(-0.900842, 0.428537, -0.069568),
    Vec3::new(-0.998942, -0.010971, 0.044665),
    Vec3::new(-0.979761, -0.15767, -0.123324),
    Vec3::new(-0.911274, -0.362371, -0.19562),
    Vec3::new(-0.624069, -0.720941, -0.301301),
    Vec3::new(-0.310173, -0.809345, -0.498752),
    Vec3::new(0.146613, -0.815819, -0.559414),
    Vec3::new(-0.716516, -0.694356, -0.066888),
    Vec3::new(0.503972, -0.114202, -0.856137),
    Vec3::new(0.455491, 0.872627, -0.176211),
    Vec3::new(-0.00501, -0.114373, -0.993425),
    Vec3::new(-0.104675, -0.327701, -0.938965),
    Vec3::new(0.560412, 0.752589, -0.345756),
    Vec3::new(-0.060576, 0.821628, -0.566796),
    Vec3::new(-0.302341, 0.797007, -0.522847),
    Vec3::new(-0.671543, 0.67074, -0.314863),
    Vec3::new(-0.778401, -0.128357, 0.614505),
    Vec3::new(-0.92405, 0.278382, -0.261985),
    Vec3::new(-0.699773, -0.550491, -0.455278),
    Vec3::new(-0.568248, -0.517189, -0.640008),
    Vec3::new(0.054098, -0.932864, -0.356143),
    Vec3::new(0.758382, 0.572893, -0.310888),
    Vec3::new(0.00362, 0.305026, -0.952337),
    Vec3::new(-0.06085, -0.986886, -0.149511),
    Vec3::new(0.63523, 0.045478, -0.770983),
    Vec3::new(0.521705, 0.241309, -0.818287),
    Vec3::new(0.269404, 0.635425, -0.723641),
    Vec3::new(0.045676, 0.672754, -0.738455),
    Vec3::new(-0.180511, 0.674657, -0.715719),
    Vec3::new(-0.397131, 0.63664, -0.661042),
    Vec3::new(-0.552004, 0.472515, -0.687038),
    Vec3::new(-0.77217, 0.08309, -0.62996),
    Vec3::new(-0.669819, -0.119533, -0.73284),
    Vec3::new(-0.540455, -0.318444, -0.778782),
    Vec3::new(-0.386135, -0.522789, -0.759994),
    Vec3::new(-0.261466, -0.688567, -0.676395),
    Vec3::new(-0.019412, -0.696103, -0.71768),
    Vec3::new(0.303569, -0.481844, -0.821993),
    Vec3::new(0.681939, -0.195129, -0.7049),
    Vec3::new(-0.244889, -0.116562, -0.962519),
    Vec3::new(0.800759, -0.022979, -0.598546),
    Vec3::new(-0.370275, 0.095584, -0.923991),
    Vec3::new(-0.330671, -0.326578, -0.88544),
    Vec3::new(-0.16322, -0.527579, -0.833679),
    Vec3::new(0.12639, -0.313146, -0.941257),
    Vec3::new(0.349548, -0.272226, -0.896498),
    Vec3::new(0.239918, -0.085825, -0.966992),
    Vec3::new(0.390845, 0.081537, -0.916838),
    Vec3::new(0.255267, 0.268697, -0.928785),
    Vec3::new(0.146245, 0.480438, -0.864749),
    Vec3::new(-0.326016, 0.478456, -0.815349),
    Vec3::new(-0.469682, -0.112519, -0.875636),
    Vec3::new(0.81844, -0.25852, -0.513151),
    Vec3::new(-0.474318, 0.292238, -0.830433),
    Vec3::new(0.778943, 0.395842, -0.486371),
    Vec3::new(0.624094, 0.393773, -0.67487),
    Vec3::new(0.740886, 0.203834, -0.639953),
    Vec3::new(0.480217, 0.565768, -0.670297),
    Vec3::new(0.38093, 0.424535, -0.821378),
    Vec3::new(-0.093422, 0.501124, -0.860318),
    Vec3::new(-0.236485, 0.296198, -0.925387),
    Vec3::new(-0.131531, 0.093959, -0.986849),
    Vec3::new(-0.823562, 0.295777, -0.484006),
    Vec3::new(0.611066, -0.624304, -0.486664),
    Vec3::new(0.069496, -0.52033, -0.851133),
    Vec3::new(0.226522, -0.664879, -0.711775),
    Vec3::new(0.471308, -0.568904, -0.673957),
    Vec3::new(0.388425, -0.742624, -0.54556),
    Vec3::new(0.783675, -0.480729, -0.393385),
    Vec3::new(0.962394, 0.135676, -0.235349),
    Vec3::new(0.876607, 0.172034, -0.449406),
    Vec3::new(0.633405, 0.589793, -0.500941),
    Vec3::new(0.182276, 0.800658, -0.570721),
    Vec3::new(0.177003, 0.764134, 0.620297),
    Vec3::new(-0.544016, 0.675515, -0.497721),
    Vec3::new(-0.679297, 0.286467, -0.675642),
    Vec3::new(-0.590391, 0.091369, -0.801929),
    Vec3::new(-0.82436, -0.133124, -0.550189),
    Vec3::new(-0.715794, -0.334542, -0.612961),
    Vec3::new(0.174286, -0.892484, 0.416049),
    Vec3::new(-0.082528, -0.837123, -0.540753),
    Vec3::new(0.283331, -0.880874, -0.379189),
    Vec3::new(0.675134, -0.426627, -0.601817),
    Vec3::new(0.84372, -0.512335, -0.160156),
    Vec3::new(0.977304, -0.098556, -0.18752),
    Vec3::new(0.846295, 0.522672, -0.102947),
    Vec3::new(0.677141, 0.721325, -0.145501),
    Vec3::new(0.320965, 0.870892, -0.372194),
    Vec3::new(-0.178978, 0.911533, -0.370236),
    Vec3::new(-0.447169, 0.826701, -0.341474),
    Vec3::new(-0.703203, 0.496328, -0.509081),
    Vec3::new(-0.977181, 0.063563, -0.202674),
    Vec3::new(-0.87817, -0.412938, 0.241455),
    Vec3::new(-0.835831, -0.35855, -0.415728),
    Vec3::new(-0.499174, -0.693433, -0.519592),
    Vec3::new(-0.188789, -0.923753, -0.333225),
    Vec3::new(0.192254, -0.969361, -0.152896),
    Vec3::new(0.51594, -0.783907, -0.345392),
    Vec3::new(0.905925, -0.300952, -0.297871),
    Vec3::new(0.991112, -0.127746, 0.037107),
    Vec3::new(0.995135, 0.098424, -0.004383),
    Vec3::new(0.760123, 0.646277, 0.067367),
    Vec3::new(0.205221, 0.95958, -0.192591),
    Vec3::new(-0.04275, 0.979513, -0.196791),
    Vec3::new(-0.438017, 0.898927, 0.008492),
    Vec3::new(-0.821994, 0.480785, -0.305239),
    Vec3::new(-0.899917, 0.08171, -0.428337),
    Vec3::new(-0.926612, -0.144618, -0.347096),
    Vec3::new(-0.79366, -0.557792, -0.242839),
    Vec3::new(-0.43135, -0.847779, -0.308558),
    Vec3::new(-0.005492, -0.965, 0.262193),
    Vec3::new(0.587905, -0.804026, -0.08894),
    Vec3::new(0.699493, -0.667686, -0.254765),
    Vec3::new(0.889303, 0.359795, -0.282291),
    Vec3::new(0.780972, 0.197037, 0.592672),
    Vec3::new(0.520121, 0.506696, 0.687557),
    Vec3::new(0.403895, 0.693961, 0.59606),
    Vec3::new(-0.154983, 0.899236, 0.40909),
    Vec3::new(-0.657338, 0.537168, 0.528543),
    Vec3::new(-0.746195, 0.334091, 0.575827),
    Vec3::new(-0.624952, -0.049144, 0.779115),
    Vec3::new(0.318141, -0.254715, 0.913185),
    Vec3::new(-0.555897, 0.405294, 0.725752),
    Vec3::new(-0.794434, 0.099406, 0.59916),
    Vec3::new(-0.640361, -0.689463, 0.338495),
    Vec3::new(-0.126713, -0.734095, 0.66712),
    Vec3::new(0.105457, -0.780817, 0.615795),
    Vec3::new(0.407993, -0.480916, 0.776055),
    Vec3::new(0.695136, -0.54512, 0.468647),
    Vec3::new(0.973191, -0.006489, 0.229908),
    Vec3::new(0.946894, 0.317509, -0.050799),
    Vec3::new(0.563583, 0.825612, 0.027183),
    Vec3::new(0.325773, 0.945423, 0.006949),
    Vec3::new(-0.171821, 0.985097, -0.007815),
    Vec3::new(-0.670441, 0.739939, 0.054769),
    Vec3::new(-0.822981, 0.554962, 0.121322),
    Vec3::new(-0.966193, 0.117857, 0.229307),
    Vec3::new(-0.953769, -0.294704, 0.058945),
    Vec3::new(-0.864387, -0.502728, -0.010015),
    Vec3::new(-0.530609, -0.842006, -0.097366),
    Vec3::new(-0.162618, -0.984075, 0.071772),
    Vec3::new(0.081447, -0.996011, 0.036439),
    Vec3::new(0.745984, -0.665963, 0.000762),
    Vec3::new(0.942057, -0.329269, -0.064106),
    Vec3::new(0.939702, -0.28109, 0.194803),
    Vec3::new(0.771214, 0.55067, 0.319363),
    Vec3::new(0.641348, 0.73069, 0.234021),
    Vec3::new(0.080682, 0.996691, 0.009879),
    Vec3::new(-0.046725, 0.976643, 0.209725),
    Vec3::new(-0.531076, 0.821001, 0.209562),
    Vec3::new(-0.695815, 0.65599, 0.292435),
    Vec3::new(-0.976122, 0.216709, -0.014913),
    Vec3::new(-0.961661, -0.144129, 0.233314),
    Vec3::new(-0.772084, -0.613647, 0.165299),
    Vec3::new(-0.4496, -0.83606, 0.314426),
    Vec3::new(-0.3927, -0.914616, 0.096247),
    Vec3::new(0.390589, -0.91947, 0.04489),
    Vec3::new(0.582529, -0.799198, 0.148127),
    Vec3::new(0.866431, -0.489812, 0.096864),
    Vec3::new(0.904587, 0.111498, 0.41145),
    Vec3::new(0.953537, 0.23233, 0.191806),
    Vec3::new(0.497311, 0.770803, 0.398177),
    Vec3::new(0.194066, 0.95632, 0.218611),
    Vec3::new(0.422876, 0.882276, 0.206797),
    Vec3::new(-0.373797, 0.849566, 0.372174),
    Vec3::new(-0.534497, 0.714023, 0.4522),
    Vec3::new(-0.881827, 0.23716, 0.407598),
    Vec3::new(-0.904948, -0.014069, 0.425289),
    Vec3::new(-0.751827, -0.512817, 0.414458),
    Vec3::new(-0.501015, -0.697917, 0.511758),
    Vec3::new(-0.23519, -0.925923, 0.295555),
    Vec3::new(0.228983, -0.95394, 0.193819),
    Vec3::new(0.734025, -0.634898, 0.241062),
    Vec3::new(0.913753, -0.063253, -0.401316),
    Vec3::new(0.905735, -0.161487, 0.391875),
    Vec3::new(0.85893, 0.342446, 0.380749),
    Vec3::new(0.624486, 0.607581, 0.490777),
    Vec3::new(0.289264, 0.857479, 0.425508),
    Vec3::new(0.069968, 0.902169, 0.425671),
    Vec3::new(-0.28618, 0.9407, 0.182165),
    Vec3::new(-0.574013, 0.805119, -0.149309),
    Vec3::new(0.111258, 0.099718, -0.988776),
    Vec3::new(-0.305393, -0.944228, -0.12316),
    Vec3::new(-0.601166, -0.789576, 0.123163),
    Vec3::new(-0.290645, -0.81214, 0.505919),
    Vec3::new(-0.06492, -0.877163, 0.475785),
    Vec3::new(0.408301, -0.862216, 0.299789),
    Vec3::new(0.566097, -0.725566, 0.391264),
    Vec3::new(0.839364, -0.427387, 0.335869),
    Vec3::new(0.8189, -0.041305, 0.572448),
    Vec3::new(0.719784, 0.414997, 0.556497),
    Vec3::new(0.881744, 0.45027, 0.140659),
    Vec3::new(0.401823, -0.89822, -0.178152),
    Vec3::new(-0.05402, 0.791344, 0.60898),
    Vec3::new(-0.293774, 0.763994, 0.574465),
    Vec3::new(-0.450798, 0.610347, 0.651351),
    Vec3::new(-0.638221, 0.186694, 0.746873),
    Vec3::new(-0.87287, -0.257127, 0.414708),
    Vec3::new(-0.587257, -0.52171, 0.618828),
    Vec3::new(-0.353658, -0.641974, 0.680291),
    Vec3::new(0.041649, -0.611273, 0.790323),
    Vec3::new(0.348342, -0.779183, 0.521087),
    Vec3::new(0.499167, -0.622441, 0.602826),
    Vec3::new(0.790019, -0.303831, 0.5325),
    Vec3::new(0.660118, 0.060733, 0.748702),
    Vec3::new(0.604921, 0.294161, 0.73996),
    Vec3::new(0.385697, 0.379346, 0.841032),
    Vec3::new(0.239693, 0.207876, 0.948332),
    Vec3::new(0.012623, 0.258532, 0.96592),
    Vec3::new(-0.100557, 0.457147, 0.883688),
    Vec3::new(0.046967, 0.628588, 0.776319),
    Vec3::new(-0.430391, -0.445405, 0.785097),
    Vec3::new(-0.434291, -0.196228, 0.879139),
    Vec3::new(-0.256637, -0.336867, 0.905902),
    Vec3::new(-0.131372, -0.15891, 0.978514),
    Vec3::new(0.102379, -0.208767, 0.972592),
    Vec3::new(0.195687, -0.450129, 0.871258),
    Vec3::new(0.627319, -0.423148, 0.653771),
    Vec3::new(0.687439, -0.171583, 0.705682),
    Vec3::new(0.27592, -0.021255, 0.960946),
    Vec3::new(0.459367, 0.157466, 0.874178),
    Vec3::new(0.285395, 0.583184, 0.760556),
    Vec3::new(-0.812174, 0.460303, 0.358461),
    Vec3::new(-0.189068, 0.641223, 0.743698),
    Vec3::new(-0.338875, 0.47648, 0.811252),
    Vec3::new(-0.920994, 0.347186, 0.176727),
    Vec3::new(0.040639, 0.024465, 0.998874),
    Vec3::new(-0.739132, -0.353747, 0.57319),
    Vec3::new(-0.603512, -0.286615, 0.74406),
    Vec3::new(-0.188676, -0.547059, 0.815554),
    Vec3::new(-0.026045, -0.39782, 0.917094),
    Vec3::new(0.267897, -0.649041, 0.712023),
    Vec3::new(0.518246, -0.284891, 0.806386),
    Vec3::new(0.493451, -0.066533, 0.867225),
    Vec3::new(-0.328188, 0.140251, 0.934143),
    Vec3::new(-0.328188, 0.140251, 0.934143),
    Vec3::new(-0.328188, 0.140251, 0.934143),
    Vec3::new(-0.328188, 0.140251, 0.934143),
];
/// Which normal table a limb's voxels index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalType {
    TiberianSun,
    RedAlert2,
}

impl NormalType {
    pub fn id(self) -> u8 {
        match self {
            NormalType::TiberianSun => 2,
            NormalType::RedAlert2 => 4,
        }
    }

    pub fn table(self) -> &'static [Vec3] {
        match self {
            NormalType::TiberianSun => &TS_NORMALS,
            NormalType::RedAlert2 => &RA2_NORMALS,
        }
    }

    /// Look up a voxel's normal; indices past the table use its last entry.
    pub fn normal(self, index: u8) -> Vec3 {
        let table = self.table();
        table[(index as usize).min(table.len() - 1)]
    }
}

impl TryFrom<u8> for NormalType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            2 => Ok(NormalType::TiberianSun),
            4 => Ok(NormalType::RedAlert2),
            other => Err(other),
        }
    }
}
