use tracing::debug;

use super::{Mode, PADDING_CODEWORDS};
use crate::common::bit_utils::BitStream;
use crate::common::error::{QRError, QRResult};
use crate::common::metadata::{ECLevel, Version};

// Version selection
//------------------------------------------------------------------------------

// Smallest version whose char capacity for the mode and ec level covers `len`
pub fn select_version(len: usize, ecl: ECLevel, mode: Mode) -> QRResult<Version> {
    (1..=40)
        .filter_map(|v| Version::new(v).ok())
        .find(|ver| ver.char_capacity(ecl, mode) >= len)
        .ok_or(QRError::DataTooLong(len))
}


// Encoder
//------------------------------------------------------------------------------

// Packs the text into exactly `ver.data_codewords(ecl)` codewords
pub fn encode(text: &str, mode: Mode, ver: Version, ecl: ECLevel) -> QRResult<BitStream> {
    assert!(
        text.chars().all(|c| mode.contains(c)),
        "Text contains characters that can't be encoded in {mode:?} mode"
    );

    let char_cnt = mode.char_count(text);
    if char_cnt > ver.char_capacity(ecl, mode) {
        return Err(QRError::DataTooLong(char_cnt));
    }

    let total = ver.data_codewords(ecl);
    let mut bs = BitStream::new(total << 3);
    push_header(mode, char_cnt, ver, &mut bs);
    push_data(text, mode, &mut bs);
    let payload_bits = bs.len();
    push_terminator(&mut bs);
    pad_remaining_capacity(&mut bs);

    assert_eq!(
        bs.data().len(),
        total,
        "Padded data doesn't fill the symbol: Version {ver}, Ec level {ecl:?}"
    );
    debug!(payload_bits, data_codewords = total, "Encoded bit stream");

    Ok(bs)
}

#[cfg(test)]
mod encode_tests {
    use super::encode;
    use crate::common::codec::Mode;
    use crate::common::error::QRError;
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_encode_alphanumeric() {
        let bs = encode("HELLO WORLD", Mode::Alphanumeric, Version::MIN, ECLevel::M).unwrap();
        let exp = [
            0x20, 0x5B, 0x0B, 0x78, 0xD1, 0x72, 0xDC, 0x4D, 0x43, 0x40, 0xEC, 0x11, 0xEC, 0x11,
            0xEC, 0x11,
        ];
        assert_eq!(bs.data(), exp);
    }

    #[test]
    fn test_encode_numeric() {
        let bs = encode("01234567", Mode::Numeric, Version::MIN, ECLevel::M).unwrap();
        let exp = [
            0x10, 0x20, 0x0C, 0x56, 0x61, 0x80, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11,
            0xEC, 0x11,
        ];
        assert_eq!(bs.data(), exp);
    }

    #[test]
    fn test_encode_empty() {
        let bs = encode("", Mode::Numeric, Version::MIN, ECLevel::L).unwrap();
        let mut exp = vec![0x10, 0x00, 0x00];
        exp.extend([0xEC, 0x11].iter().cycle().take(16));
        assert_eq!(bs.data(), exp);
    }

    #[test]
    fn test_encode_fills_every_layout() {
        for v in 1..=40 {
            let ver = Version::new(v).unwrap();
            for ecl in [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H] {
                let bs = encode("A", Mode::Byte, ver, ecl).unwrap();
                assert_eq!(bs.data().len(), ver.data_codewords(ecl));
            }
        }
    }

    #[test]
    fn test_encode_full_capacity() {
        let ver = Version::MAX;
        let text = "a".repeat(ver.char_capacity(ECLevel::L, Mode::Byte));
        let bs = encode(&text, Mode::Byte, ver, ECLevel::L).unwrap();
        assert_eq!(bs.remaining(), 0);
    }

    #[test]
    fn test_encode_too_long() {
        let text = "1".repeat(42);
        let res = encode(&text, Mode::Numeric, Version::MIN, ECLevel::L);
        assert_eq!(res.unwrap_err(), QRError::DataTooLong(42));
    }

    #[test]
    #[should_panic]
    fn test_encode_mismatched_mode() {
        let _ = encode("abc", Mode::Numeric, Version::MIN, ECLevel::L);
    }
}

// Writer for encoded data
//------------------------------------------------------------------------------

fn push_header(mode: Mode, char_cnt: usize, ver: Version, out: &mut BitStream) {
    out.push_bits(mode as u8, MODE_INDICATOR_BITS);
    let len_bits = ver.char_cnt_bits(mode);
    debug_assert!(
        char_cnt < (1 << len_bits),
        "Char count exceeds bit length: Char count {char_cnt}, Char count bits {len_bits}"
    );
    out.push_bits(char_cnt as u16, len_bits);
}

fn push_data(text: &str, mode: Mode, out: &mut BitStream) {
    match mode {
        Mode::Numeric => push_numeric_data(text.as_bytes(), out),
        Mode::Alphanumeric => push_alphanumeric_data(text.as_bytes(), out),
        Mode::Byte => push_byte_data(text.as_bytes(), out),
        Mode::Kanji => push_kanji_data(text, out),
    }
}

fn push_numeric_data(data: &[u8], out: &mut BitStream) {
    for chunk in data.chunks(3) {
        let len = Mode::Numeric.encoded_len(chunk.len());
        out.push_bits(Mode::Numeric.encode_chunk(chunk), len);
    }
}

fn push_alphanumeric_data(data: &[u8], out: &mut BitStream) {
    for chunk in data.chunks(2) {
        let len = Mode::Alphanumeric.encoded_len(chunk.len());
        out.push_bits(Mode::Alphanumeric.encode_chunk(chunk), len);
    }
}

fn push_byte_data(data: &[u8], out: &mut BitStream) {
    for &b in data {
        out.push_bits(b, 8);
    }
}

fn push_kanji_data(text: &str, out: &mut BitStream) {
    for sjis in text.chars().filter_map(Mode::kanji_value) {
        out.push_bits(Mode::Kanji.encode_chunk(&sjis.to_be_bytes()), 13);
    }
}

fn push_terminator(out: &mut BitStream) {
    let term_len = out.remaining().min(4);
    out.push_bits(0u8, term_len);
}

fn pad_remaining_capacity(out: &mut BitStream) {
    push_padding_bits(out);
    push_padding_codewords(out);
}

fn push_padding_bits(out: &mut BitStream) {
    let offset = out.bit_offset();
    if offset > 0 {
        out.push_bits(0u8, 8 - offset);
    }
}

fn push_padding_codewords(out: &mut BitStream) {
    debug_assert!(out.bit_offset() == 0, "Padding codewords must start on a byte boundary");

    let remain_byte_capacity = out.remaining() >> 3;
    PADDING_CODEWORDS.iter().copied().cycle().take(remain_byte_capacity).for_each(|pc| {
        out.push_bits(pc, 8);
    });
}


// Global constants
//------------------------------------------------------------------------------

pub(crate) static MODE_INDICATOR_BITS: usize = 4;
