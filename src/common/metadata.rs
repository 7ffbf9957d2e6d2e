use std::fmt::{Display, Error, Formatter};
use std::ops::{Deref, Not};

use super::codec::Mode;
use super::error::{QRError, QRResult};
use super::mask::MaskPattern;

// Metadata
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    ver: Option<Version>,
    ecl: Option<ECLevel>,
    mask: Option<MaskPattern>,
}

impl Metadata {
    pub fn new(ver: Option<Version>, ecl: Option<ECLevel>, mask: Option<MaskPattern>) -> Self {
        Self { ver, ecl, mask }
    }

    pub fn version(&self) -> Option<Version> {
        self.ver
    }

    pub fn ec_level(&self) -> Option<ECLevel> {
        self.ecl
    }

    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }
}

impl Display for Metadata {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let ver = self.ver.map_or("None".to_string(), |v| v.to_string());
        let ecl = self.ecl.map_or("None".to_string(), |e| format!("{e:?}"));
        let mask = self.mask.map_or("None".to_string(), |m| m.to_string());
        write!(f, "{{ Version: {ver}, Ec level: {ecl}, Mask: {mask} }}")
    }
}

// Version
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct Version(usize);

impl Deref for Version {
    type Target = usize;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}", self.0)
    }
}

impl Version {
    pub const MIN: Version = Version(1);
    pub const MAX: Version = Version(40);

    pub fn new(ver: usize) -> QRResult<Self> {
        match ver {
            1..=40 => Ok(Self(ver)),
            _ => Err(QRError::InvalidVersion),
        }
    }

    pub const fn width(self) -> usize {
        self.0 * 4 + 17
    }

    pub fn alignment_pattern(self) -> &'static [i16] {
        ALIGNMENT_PATTERN_POSITIONS[self.0 - 1]
    }

    // 18 bit BCH protected version number, only drawn for version 7 and above
    pub fn info(self) -> u32 {
        debug_assert!(self.0 >= 7, "Version info requested for version {}", self.0);
        VERSION_INFOS[self.0 - 7]
    }

    pub fn char_cnt_bits(self, mode: Mode) -> usize {
        let band = match self.0 {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        let bits = match mode {
            Mode::Numeric => [10, 12, 14],
            Mode::Alphanumeric => [9, 11, 13],
            Mode::Byte => [8, 16, 16],
            Mode::Kanji => [8, 10, 12],
        };
        bits[band]
    }

    pub fn char_capacity(self, ecl: ECLevel, mode: Mode) -> usize {
        CHAR_CAPACITIES[ecl as usize][mode.index()][self.0 - 1]
    }

    pub fn ec_layout(self, ecl: ECLevel) -> ECBlockLayout {
        let (total, ec_per_block, g1_blocks, g1_size, g2_blocks, g2_size) =
            EC_BLOCK_LAYOUTS[self.0 - 1][ecl as usize];
        ECBlockLayout { total, ec_per_block, g1_blocks, g1_size, g2_blocks, g2_size }
    }

    pub fn data_codewords(self, ecl: ECLevel) -> usize {
        self.ec_layout(ecl).total
    }

    pub fn total_codewords(self) -> usize {
        // Total codeword count doesn't depend on the ec level
        let layout = self.ec_layout(ECLevel::L);
        layout.total + layout.ec_per_block * layout.block_count()
    }

    pub fn remainder_bits(self) -> usize {
        REMAINDER_BITS[self.0 - 1]
    }
}


// Error correction block layout
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct ECBlockLayout {
    // Total data codewords
    pub total: usize,
    pub ec_per_block: usize,
    pub g1_blocks: usize,
    pub g1_size: usize,
    pub g2_blocks: usize,
    pub g2_size: usize,
}

impl ECBlockLayout {
    pub fn block_count(&self) -> usize {
        self.g1_blocks + self.g2_blocks
    }
}

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    H = 3,
}

impl ECLevel {
    // Nominal share of recoverable codewords in percent
    pub fn recovery_percent(self) -> usize {
        match self {
            Self::L => 7,
            Self::M => 15,
            Self::Q => 25,
            Self::H => 30,
        }
    }
}

// Format info
//------------------------------------------------------------------------------

pub fn format_info(ecl: ECLevel, mask: MaskPattern) -> u32 {
    // Format bits for L, M, Q, H are 01, 00, 11, 10 respectively
    let format_data = ((ecl as usize) ^ 1) << 3 | (*mask as usize);
    FORMAT_INFOS[format_data]
}

#[cfg(test)]
mod format_info_tests {
    use super::{format_info, ECLevel, FORMAT_INFOS, VERSION_INFOS};
    use crate::MaskPattern;

    fn bch_remainder(data: u32, gen: u32, gen_deg: u32, data_bits: u32) -> u32 {
        let mut rem = data << gen_deg;
        for i in (gen_deg..gen_deg + data_bits).rev() {
            if rem >> i & 1 == 1 {
                rem ^= gen << (i - gen_deg);
            }
        }
        rem
    }

    #[test]
    fn test_format_infos_match_bch() {
        for (d, &info) in FORMAT_INFOS.iter().enumerate() {
            let d = d as u32;
            let exp = ((d << 10) | bch_remainder(d, 0x537, 10, 5)) ^ 0x5412;
            assert_eq!(info, exp, "Format data {d:05b}");
        }
    }

    #[test]
    fn test_version_infos_match_bch() {
        for (i, &info) in VERSION_INFOS.iter().enumerate() {
            let v = i as u32 + 7;
            let exp = (v << 12) | bch_remainder(v, 0x1F25, 12, 6);
            assert_eq!(info, exp, "Version {v}");
        }
    }

    #[test]
    fn test_format_info() {
        assert_eq!(format_info(ECLevel::L, MaskPattern::new(0).unwrap()), 0b111011111000100);
        assert_eq!(format_info(ECLevel::M, MaskPattern::new(0).unwrap()), 0b101010000010010);
        assert_eq!(format_info(ECLevel::Q, MaskPattern::new(7).unwrap()), 0b010101111101101);
        assert_eq!(format_info(ECLevel::H, MaskPattern::new(4).unwrap()), 0b000011101100010);
    }
}

// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn select<T>(&self, dark: T, light: T) -> T {
        match self {
            Self::Dark => dark,
            Self::Light => light,
        }
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl From<bool> for Color {
    fn from(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

// Global constants
//------------------------------------------------------------------------------

pub(crate) static FORMAT_INFO_BIT_LEN: usize = 15;

pub(crate) static VERSION_INFO_BIT_LEN: usize = 18;

pub(crate) static FORMAT_INFOS: [u32; 32] = [
    0x5412, 0x5125, 0x5E7C, 0x5B4B, 0x45F9, 0x40CE, 0x4F97, 0x4AA0,
    0x77C4, 0x72F3, 0x7DAA, 0x789D, 0x662F, 0x6318, 0x6C41, 0x6976,
    0x1689, 0x13BE, 0x1CE7, 0x19D0, 0x0762, 0x0255, 0x0D0C, 0x083B,
    0x355F, 0x3068, 0x3F31, 0x3A06, 0x24B4, 0x2183, 0x2EDA, 0x2BED,
];

pub(crate) static VERSION_INFOS: [u32; 34] = [
    0x07C94, 0x085BC, 0x09A99, 0x0A4D3, 0x0BBF6, 0x0C762,
    0x0D847, 0x0E60D, 0x0F928, 0x10B78, 0x1145D, 0x12A17,
    0x13532, 0x149A6, 0x15683, 0x168C9, 0x177EC, 0x18EC4,
    0x191E1, 0x1AFAB, 0x1B08E, 0x1CC1A, 0x1D33F, 0x1ED75,
    0x1F250, 0x209D5, 0x216F0, 0x228BA, 0x2379F, 0x24B0B,
    0x2542E, 0x26A64, 0x27541, 0x28C69,
];

pub(crate) static ALIGNMENT_PATTERN_POSITIONS: [&[i16]; 40] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

// (total data codewords, ec codewords per block, group 1 blocks, group 1 block size, group 2 blocks, group 2 block size)
pub(crate) static EC_BLOCK_LAYOUTS: [[(usize, usize, usize, usize, usize, usize); 4]; 40] = [
    [
        (19, 7, 1, 19, 0, 0),
        (16, 10, 1, 16, 0, 0),
        (13, 13, 1, 13, 0, 0),
        (9, 17, 1, 9, 0, 0),
    ],
    [
        (34, 10, 1, 34, 0, 0),
        (28, 16, 1, 28, 0, 0),
        (22, 22, 1, 22, 0, 0),
        (16, 28, 1, 16, 0, 0),
    ],
    [
        (55, 15, 1, 55, 0, 0),
        (44, 26, 1, 44, 0, 0),
        (34, 18, 2, 17, 0, 0),
        (26, 22, 2, 13, 0, 0),
    ],
    [
        (80, 20, 1, 80, 0, 0),
        (64, 18, 2, 32, 0, 0),
        (48, 26, 2, 24, 0, 0),
        (36, 16, 4, 9, 0, 0),
    ],
    [
        (108, 26, 1, 108, 0, 0),
        (86, 24, 2, 43, 0, 0),
        (62, 18, 2, 15, 2, 16),
        (46, 22, 2, 11, 2, 12),
    ],
    [
        (136, 18, 2, 68, 0, 0),
        (108, 16, 4, 27, 0, 0),
        (76, 24, 4, 19, 0, 0),
        (60, 28, 4, 15, 0, 0),
    ],
    [
        (156, 20, 2, 78, 0, 0),
        (124, 18, 4, 31, 0, 0),
        (88, 18, 2, 14, 4, 15),
        (66, 26, 4, 13, 1, 14),
    ],
    [
        (194, 24, 2, 97, 0, 0),
        (154, 22, 2, 38, 2, 39),
        (110, 22, 4, 18, 2, 19),
        (86, 26, 4, 14, 2, 15),
    ],
    [
        (232, 30, 2, 116, 0, 0),
        (182, 22, 3, 36, 2, 37),
        (132, 20, 4, 16, 4, 17),
        (100, 24, 4, 12, 4, 13),
    ],
    [
        (274, 18, 2, 68, 2, 69),
        (216, 26, 4, 43, 1, 44),
        (154, 24, 6, 19, 2, 20),
        (122, 28, 6, 15, 2, 16),
    ],
    [
        (324, 20, 4, 81, 0, 0),
        (254, 30, 1, 50, 4, 51),
        (180, 28, 4, 22, 4, 23),
        (140, 24, 3, 12, 8, 13),
    ],
    [
        (370, 24, 2, 92, 2, 93),
        (290, 22, 6, 36, 2, 37),
        (206, 26, 4, 20, 6, 21),
        (158, 28, 7, 14, 4, 15),
    ],
    [
        (428, 26, 4, 107, 0, 0),
        (334, 22, 8, 37, 1, 38),
        (244, 24, 8, 20, 4, 21),
        (180, 22, 12, 11, 4, 12),
    ],
    [
        (461, 30, 3, 115, 1, 116),
        (365, 24, 4, 40, 5, 41),
        (261, 20, 11, 16, 5, 17),
        (197, 24, 11, 12, 5, 13),
    ],
    [
        (523, 22, 5, 87, 1, 88),
        (415, 24, 5, 41, 5, 42),
        (295, 30, 5, 24, 7, 25),
        (223, 24, 11, 12, 7, 13),
    ],
    [
        (589, 24, 5, 98, 1, 99),
        (453, 28, 7, 45, 3, 46),
        (325, 24, 15, 19, 2, 20),
        (253, 30, 3, 15, 13, 16),
    ],
    [
        (647, 28, 1, 107, 5, 108),
        (507, 28, 10, 46, 1, 47),
        (367, 28, 1, 22, 15, 23),
        (283, 28, 2, 14, 17, 15),
    ],
    [
        (721, 30, 5, 120, 1, 121),
        (563, 26, 9, 43, 4, 44),
        (397, 28, 17, 22, 1, 23),
        (313, 28, 2, 14, 19, 15),
    ],
    [
        (795, 28, 3, 113, 4, 114),
        (627, 26, 3, 44, 11, 45),
        (445, 26, 17, 21, 4, 22),
        (341, 26, 9, 13, 16, 14),
    ],
    [
        (861, 28, 3, 107, 5, 108),
        (669, 26, 3, 41, 13, 42),
        (485, 30, 15, 24, 5, 25),
        (385, 28, 15, 15, 10, 16),
    ],
    [
        (932, 28, 4, 116, 4, 117),
        (714, 26, 17, 42, 0, 0),
        (512, 28, 17, 22, 6, 23),
        (406, 30, 19, 16, 6, 17),
    ],
    [
        (1006, 28, 2, 111, 7, 112),
        (782, 28, 17, 46, 0, 0),
        (568, 30, 7, 24, 16, 25),
        (442, 24, 34, 13, 0, 0),
    ],
    [
        (1094, 30, 4, 121, 5, 122),
        (860, 28, 4, 47, 14, 48),
        (614, 30, 11, 24, 14, 25),
        (464, 30, 16, 15, 14, 16),
    ],
    [
        (1174, 30, 6, 117, 4, 118),
        (914, 28, 6, 45, 14, 46),
        (664, 30, 11, 24, 16, 25),
        (514, 30, 30, 16, 2, 17),
    ],
    [
        (1276, 26, 8, 106, 4, 107),
        (1000, 28, 8, 47, 13, 48),
        (718, 30, 7, 24, 22, 25),
        (538, 30, 22, 15, 13, 16),
    ],
    [
        (1370, 28, 10, 114, 2, 115),
        (1062, 28, 19, 46, 4, 47),
        (754, 28, 28, 22, 6, 23),
        (596, 30, 33, 16, 4, 17),
    ],
    [
        (1468, 30, 8, 122, 4, 123),
        (1128, 28, 22, 45, 3, 46),
        (808, 30, 8, 23, 26, 24),
        (628, 30, 12, 15, 28, 16),
    ],
    [
        (1531, 30, 3, 117, 10, 118),
        (1193, 28, 3, 45, 23, 46),
        (871, 30, 4, 24, 31, 25),
        (661, 30, 11, 15, 31, 16),
    ],
    [
        (1631, 30, 7, 116, 7, 117),
        (1267, 28, 21, 45, 7, 46),
        (911, 30, 1, 23, 37, 24),
        (701, 30, 19, 15, 26, 16),
    ],
    [
        (1735, 30, 5, 115, 10, 116),
        (1373, 28, 19, 47, 10, 48),
        (985, 30, 15, 24, 25, 25),
        (745, 30, 23, 15, 25, 16),
    ],
    [
        (1843, 30, 13, 115, 3, 116),
        (1455, 28, 2, 46, 29, 47),
        (1033, 30, 42, 24, 1, 25),
        (793, 30, 23, 15, 28, 16),
    ],
    [
        (1955, 30, 17, 115, 0, 0),
        (1541, 28, 10, 46, 23, 47),
        (1115, 30, 10, 24, 35, 25),
        (845, 30, 19, 15, 35, 16),
    ],
    [
        (2071, 30, 17, 115, 1, 116),
        (1631, 28, 14, 46, 21, 47),
        (1171, 30, 29, 24, 19, 25),
        (901, 30, 11, 15, 46, 16),
    ],
    [
        (2191, 30, 13, 115, 6, 116),
        (1725, 28, 14, 46, 23, 47),
        (1231, 30, 44, 24, 7, 25),
        (961, 30, 59, 16, 1, 17),
    ],
    [
        (2306, 30, 12, 121, 7, 122),
        (1812, 28, 12, 47, 26, 48),
        (1286, 30, 39, 24, 14, 25),
        (986, 30, 22, 15, 41, 16),
    ],
    [
        (2434, 30, 6, 121, 14, 122),
        (1914, 28, 6, 47, 34, 48),
        (1354, 30, 46, 24, 10, 25),
        (1054, 30, 2, 15, 64, 16),
    ],
    [
        (2566, 30, 17, 122, 4, 123),
        (1992, 28, 29, 46, 14, 47),
        (1426, 30, 49, 24, 10, 25),
        (1096, 30, 24, 15, 46, 16),
    ],
    [
        (2702, 30, 4, 122, 18, 123),
        (2102, 28, 13, 46, 32, 47),
        (1502, 30, 48, 24, 14, 25),
        (1142, 30, 42, 15, 32, 16),
    ],
    [
        (2812, 30, 20, 117, 4, 118),
        (2216, 28, 40, 47, 7, 48),
        (1582, 30, 43, 24, 22, 25),
        (1222, 30, 10, 15, 67, 16),
    ],
    [
        (2956, 30, 19, 118, 6, 119),
        (2334, 28, 18, 47, 31, 48),
        (1666, 30, 34, 24, 34, 25),
        (1276, 30, 20, 15, 61, 16),
    ],
];

pub(crate) static CHAR_CAPACITIES: [[[usize; 40]; 4]; 4] = [
    // L
    [
        [
            41, 77, 127, 187, 255, 322, 370, 461, 552, 652,
            772, 883, 1022, 1101, 1250, 1408, 1548, 1725, 1903, 2061,
            2232, 2409, 2620, 2812, 3057, 3283, 3517, 3669, 3909, 4158,
            4417, 4686, 4965, 5253, 5529, 5836, 6153, 6479, 6743, 7089,
        ],
        [
            25, 47, 77, 114, 154, 195, 224, 279, 335, 395,
            468, 535, 619, 667, 758, 854, 938, 1046, 1153, 1249,
            1352, 1460, 1588, 1704, 1853, 1990, 2132, 2223, 2369, 2520,
            2677, 2840, 3009, 3183, 3351, 3537, 3729, 3927, 4087, 4296,
        ],
        [
            17, 32, 53, 78, 106, 134, 154, 192, 230, 271,
            321, 367, 425, 458, 520, 586, 644, 718, 792, 858,
            929, 1003, 1091, 1171, 1273, 1367, 1465, 1528, 1628, 1732,
            1840, 1952, 2068, 2188, 2303, 2431, 2563, 2699, 2809, 2953,
        ],
        [
            10, 20, 32, 48, 65, 82, 95, 118, 141, 167,
            198, 226, 262, 282, 320, 361, 397, 442, 488, 528,
            572, 618, 672, 721, 784, 842, 902, 940, 1002, 1066,
            1132, 1201, 1273, 1347, 1417, 1496, 1577, 1661, 1729, 1817,
        ],
    ],
    // M
    [
        [
            34, 63, 101, 149, 202, 255, 293, 365, 432, 513,
            604, 691, 796, 871, 991, 1082, 1212, 1346, 1500, 1600,
            1708, 1872, 2059, 2188, 2395, 2544, 2701, 2857, 3035, 3289,
            3486, 3693, 3909, 4134, 4343, 4588, 4775, 5039, 5313, 5596,
        ],
        [
            20, 38, 61, 90, 122, 154, 178, 221, 262, 311,
            366, 419, 483, 528, 600, 656, 734, 816, 909, 970,
            1035, 1134, 1248, 1326, 1451, 1542, 1637, 1732, 1839, 1994,
            2113, 2238, 2369, 2506, 2632, 2780, 2894, 3054, 3220, 3391,
        ],
        [
            14, 26, 42, 62, 84, 106, 122, 152, 180, 213,
            251, 287, 331, 362, 412, 450, 504, 560, 624, 666,
            711, 779, 857, 911, 997, 1059, 1125, 1190, 1264, 1370,
            1452, 1538, 1628, 1722, 1809, 1911, 1989, 2099, 2213, 2331,
        ],
        [
            8, 16, 26, 38, 52, 65, 75, 93, 111, 131,
            155, 177, 204, 223, 254, 277, 310, 345, 384, 410,
            438, 480, 528, 561, 614, 652, 692, 732, 778, 843,
            894, 947, 1002, 1060, 1113, 1176, 1224, 1292, 1362, 1435,
        ],
    ],
    // Q
    [
        [
            27, 48, 77, 111, 144, 178, 207, 259, 312, 364,
            427, 489, 580, 621, 703, 775, 876, 948, 1063, 1159,
            1224, 1358, 1468, 1588, 1718, 1804, 1933, 2085, 2181, 2358,
            2473, 2670, 2805, 2949, 3081, 3244, 3417, 3599, 3791, 3993,
        ],
        [
            16, 29, 47, 67, 87, 108, 125, 157, 189, 221,
            259, 296, 352, 376, 426, 470, 531, 574, 644, 702,
            742, 823, 890, 963, 1041, 1094, 1172, 1263, 1322, 1429,
            1499, 1618, 1700, 1787, 1867, 1966, 2071, 2181, 2298, 2420,
        ],
        [
            11, 20, 32, 46, 60, 74, 86, 108, 130, 151,
            177, 203, 241, 258, 292, 322, 364, 394, 442, 482,
            509, 565, 611, 661, 715, 751, 805, 868, 908, 982,
            1030, 1112, 1168, 1228, 1283, 1351, 1423, 1499, 1579, 1663,
        ],
        [
            7, 12, 20, 28, 37, 45, 53, 66, 80, 93,
            109, 125, 149, 159, 180, 198, 224, 243, 272, 297,
            314, 348, 376, 407, 440, 462, 496, 534, 559, 604,
            634, 684, 719, 756, 790, 832, 876, 923, 972, 1024,
        ],
    ],
    // H
    [
        [
            17, 34, 58, 82, 106, 139, 154, 202, 235, 288,
            331, 374, 427, 468, 530, 602, 674, 746, 813, 919,
            969, 1056, 1108, 1228, 1286, 1425, 1501, 1581, 1677, 1782,
            1897, 2022, 2157, 2301, 2361, 2524, 2625, 2735, 2927, 3057,
        ],
        [
            10, 20, 35, 50, 64, 84, 93, 122, 143, 174,
            200, 227, 259, 283, 321, 365, 408, 452, 493, 557,
            587, 640, 672, 744, 779, 864, 910, 958, 1016, 1080,
            1150, 1226, 1307, 1394, 1431, 1530, 1591, 1658, 1774, 1852,
        ],
        [
            7, 14, 24, 34, 44, 58, 64, 84, 98, 119,
            137, 155, 177, 194, 220, 250, 280, 310, 338, 382,
            403, 439, 461, 511, 535, 593, 625, 658, 698, 742,
            790, 842, 898, 958, 983, 1051, 1093, 1139, 1219, 1273,
        ],
        [
            4, 8, 15, 21, 27, 36, 39, 52, 60, 74,
            85, 96, 109, 120, 136, 154, 173, 191, 208, 235,
            248, 270, 284, 315, 330, 365, 385, 405, 430, 457,
            486, 518, 553, 590, 605, 647, 673, 701, 750, 784,
        ],
    ],
];
pub(crate) static REMAINDER_BITS: [usize; 40] = [
    0, 7, 7, 7, 7, 7, 0, 0, 0, 0,
    0, 0, 0, 3, 3, 3, 3, 3, 3, 3,
    4, 4, 4, 4, 4, 4, 4, 3, 3, 3,
    3, 3, 3, 3, 0, 0, 0, 0, 0, 0,
];

pub(crate) static FORMAT_INFO_COORDS_MAIN: [(i16, i16); 15] = [
    (8, 0), (8, 1), (8, 2), (8, 3), (8, 4),
    (8, 5), (8, 7), (8, 8), (7, 8), (5, 8),
    (4, 8), (3, 8), (2, 8), (1, 8), (0, 8),
];

pub(crate) static FORMAT_INFO_COORDS_SIDE: [(i16, i16); 15] = [
    (-1, 8), (-2, 8), (-3, 8), (-4, 8), (-5, 8),
    (-6, 8), (-7, 8), (8, -8), (8, -7), (8, -6),
    (8, -5), (8, -4), (8, -3), (8, -2), (8, -1),
];

pub(crate) static VERSION_INFO_COORDS_BL: [(i16, i16); 18] = [
    (-9, 5), (-10, 5), (-11, 5), (-9, 4), (-10, 4),
    (-11, 4), (-9, 3), (-10, 3), (-11, 3), (-9, 2),
    (-10, 2), (-11, 2), (-9, 1), (-10, 1), (-11, 1),
    (-9, 0), (-10, 0), (-11, 0),
];

pub(crate) static VERSION_INFO_COORDS_TR: [(i16, i16); 18] = [
    (5, -9), (5, -10), (5, -11), (4, -9), (4, -10),
    (4, -11), (3, -9), (3, -10), (3, -11), (2, -9),
    (2, -10), (2, -11), (1, -9), (1, -10), (1, -11),
    (0, -9), (0, -10), (0, -11),
];
