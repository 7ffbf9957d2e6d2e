use std::cmp::Ordering;

use encoding_rs::SHIFT_JIS;

// Mode
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Mode {
    Numeric = 0b0001,
    Alphanumeric = 0b0010,
    Byte = 0b0100,
    Kanji = 0b1000,
}

impl PartialOrd for Mode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Ordered by the set of characters each mode can carry
impl Ord for Mode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl Mode {
    fn rank(self) -> u8 {
        match self {
            Self::Numeric => 0,
            Self::Alphanumeric => 1,
            Self::Kanji => 2,
            Self::Byte => 3,
        }
    }

    // Column of the mode in capacity tables
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Numeric => 0,
            Self::Alphanumeric => 1,
            Self::Byte => 2,
            Self::Kanji => 3,
        }
    }

    // Most compact mode able to carry every char of the text. Empty text is numeric.
    pub fn analyze(text: &str) -> Self {
        let mut chars = text.chars();
        let Some(first) = chars.next() else {
            return Self::Numeric;
        };

        let mut mode = Self::of(first);
        for c in chars {
            if mode == Self::Byte {
                break;
            }
            mode = mode.escalate(Self::of(c));
        }
        mode
    }

    // Smallest mode carrying chars of both modes. Kanji can't carry ascii, so any mix
    // with kanji falls back to byte.
    pub fn escalate(self, other: Self) -> Self {
        match (self, other) {
            (a, b) if a == b => a,
            (Self::Kanji, _) | (_, Self::Kanji) => Self::Byte,
            (a, b) => a.max(b),
        }
    }

    fn of(c: char) -> Self {
        if Self::Numeric.contains(c) {
            Self::Numeric
        } else if Self::Alphanumeric.contains(c) {
            Self::Alphanumeric
        } else if Self::Kanji.contains(c) {
            Self::Kanji
        } else {
            Self::Byte
        }
    }

    pub fn contains(&self, c: char) -> bool {
        match self {
            Self::Numeric => c.is_ascii_digit(),
            Self::Alphanumeric => {
                matches!(c, '0'..='9' | 'A'..='Z' | ' ' | '$' | '%' | '*' | '+' | '-' | '.' | '/' | ':')
            }
            Self::Byte => true,
            Self::Kanji => Self::kanji_value(c).is_some(),
        }
    }

    // Length as measured by the char count indicator
    pub fn char_count(&self, text: &str) -> usize {
        match self {
            Self::Byte => text.len(),
            _ => text.chars().count(),
        }
    }

    // Shift JIS double byte value of the char if it lies in the kanji ranges
    pub fn kanji_value(c: char) -> Option<u16> {
        let mut buf = [0; 4];
        let (bytes, _, had_errors) = SHIFT_JIS.encode(c.encode_utf8(&mut buf));
        if had_errors || bytes.len() != 2 {
            return None;
        }
        let sjis = u16::from_be_bytes([bytes[0], bytes[1]]);
        matches!(sjis, 0x8140..=0x9FFC | 0xE040..=0xEBBF).then_some(sjis)
    }

    #[inline]
    fn numeric_digit(char: u8) -> u16 {
        debug_assert!(char.is_ascii_digit(), "Invalid numeric data: {char}");
        (char - b'0') as u16
    }

    #[inline]
    fn alphanumeric_digit(char: u8) -> u16 {
        match char {
            b'0'..=b'9' => (char - b'0') as u16,
            b'A'..=b'Z' => (char - b'A' + 10) as u16,
            b' ' => 36,
            b'$' => 37,
            b'%' => 38,
            b'*' => 39,
            b'+' => 40,
            b'-' => 41,
            b'.' => 42,
            b'/' => 43,
            b':' => 44,
            _ => unreachable!("Invalid alphanumeric {char}"),
        }
    }

    // Packs 1-3 digits, 1-2 alphanumeric chars or a single byte
    pub fn encode_chunk(&self, data: &[u8]) -> u16 {
        let len = data.len();
        match self {
            Self::Numeric => {
                debug_assert!(len <= 3, "Data is too long for numeric conversion: {len}");
                data.iter().fold(0_u16, |n, b| n * 10 + Self::numeric_digit(*b))
            }
            Self::Alphanumeric => {
                debug_assert!(len <= 2, "Data is too long for alphanumeric conversion: {len}");
                data.iter().fold(0_u16, |n, b| n * 45 + Self::alphanumeric_digit(*b))
            }
            Self::Byte => {
                debug_assert!(len == 1, "Data is too long for byte conversion: {len}");
                data[0] as u16
            }
            Self::Kanji => {
                debug_assert!(len == 2, "Kanji chunk must be a double byte: {len}");
                Self::encode_kanji(u16::from_be_bytes([data[0], data[1]]))
            }
        }
    }

    fn encode_kanji(sjis: u16) -> u16 {
        let offset = if sjis <= 0x9FFC { sjis - 0x8140 } else { sjis - 0xC140 };
        (offset >> 8) * 0xC0 + (offset & 0xFF)
    }

    pub fn encoded_len(&self, len: usize) -> usize {
        match *self {
            Self::Numeric => (len * 10).div_ceil(3),
            Self::Alphanumeric => (len * 11).div_ceil(2),
            Self::Byte => len * 8,
            Self::Kanji => len * 13,
        }
    }
}
