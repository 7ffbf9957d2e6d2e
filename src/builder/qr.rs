use std::ops::Deref;

use crate::common::codec::Mode;
use crate::common::iter::ZigZagIter;
use crate::common::mask::MaskPattern;
use crate::common::metadata::*;

// Module
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Empty,
    Func(Color),
    Version(Color),
    Format(Color),
    Data(Color),
}

impl Deref for Module {
    type Target = Color;
    fn deref(&self) -> &Self::Target {
        match self {
            Module::Empty => &Color::Light,
            Module::Func(c) => c,
            Module::Version(c) => c,
            Module::Format(c) => c,
            Module::Data(c) => c,
        }
    }
}

// QR symbol
//------------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct QR {
    // Row major modules
    grid: Vec<Module>,
    w: usize,
    ver: Version,
    ecl: ECLevel,
    mode: Mode,
    mask: Option<MaskPattern>,
}

impl QR {
    pub(crate) fn new(ver: Version, ecl: ECLevel, mode: Mode) -> Self {
        let w = ver.width();
        Self { grid: vec![Module::Empty; w * w], w, ver, ecl, mode, mask: None }
    }

    pub fn grid(&self) -> &[Module] {
        &self.grid
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }

    pub fn metadata(&self) -> Metadata {
        Metadata::new(Some(self.ver), Some(self.ecl), self.mask)
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&m| matches!(**m, Color::Dark)).count()
    }

    pub fn is_dark(&self, r: i16, c: i16) -> bool {
        *self.get(r, c) == Color::Dark
    }

    // Rows of modules, true for dark
    pub fn to_bools(&self) -> Vec<Vec<bool>> {
        self.grid.chunks(self.w).map(|row| row.iter().map(|m| **m == Color::Dark).collect()).collect()
    }

    pub(crate) fn colors(&self) -> Vec<Color> {
        self.grid.iter().map(|m| **m).collect()
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = self.w as i16;
        let mut res = String::with_capacity((w * (w + 1)) as usize);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                let c = match self.get(i, j) {
                    Module::Empty => '.',
                    Module::Func(Color::Dark) => 'f',
                    Module::Func(Color::Light) => 'F',
                    Module::Version(Color::Dark) => 'v',
                    Module::Version(Color::Light) => 'V',
                    Module::Format(Color::Dark) => 'm',
                    Module::Format(Color::Light) => 'M',
                    Module::Data(Color::Dark) => 'd',
                    Module::Data(Color::Light) => 'D',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
    }

    // Negative coordinates count back from the far edge
    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.w as i16;
        assert!(-w <= r && r < w, "Row out of bounds: {r}");
        assert!(-w <= c && c < w, "Column out of bounds: {c}");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r as usize) * self.w + c as usize
    }

    pub fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    pub(crate) fn set(&mut self, r: i16, c: i16, module: Module) {
        let index = self.coord_to_index(r, c);
        self.grid[index] = module;
    }
}


// Finder pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_finder_patterns(&mut self) {
        self.draw_finder_pattern_at(3, 3);
        self.draw_finder_pattern_at(3, -4);
        self.draw_finder_pattern_at(-4, 3);
    }

    // Draws the 7x7 pattern centered at (r, c) with its light separator on the inner sides
    fn draw_finder_pattern_at(&mut self, r: i16, c: i16) {
        let (dr_top, dr_bottom) = if r > 0 { (-3, 4) } else { (-4, 3) };
        let (dc_left, dc_right) = if c > 0 { (-3, 4) } else { (-4, 3) };
        for i in dr_top..=dr_bottom {
            for j in dc_left..=dc_right {
                let clr = match std::cmp::max(i16::abs(i), i16::abs(j)) {
                    4 | 2 => Color::Light,
                    _ => Color::Dark,
                };
                self.set(r + i, c + j, Module::Func(clr));
            }
        }
    }
}


// Timing pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_timing_pattern(&mut self) {
        let last = self.w as i16 - 9;
        self.draw_line(6, 8, 6, last);
        self.draw_line(8, 6, last, 6);
    }

    // Alternating line starting dark on even coordinates
    fn draw_line(&mut self, r1: i16, c1: i16, r2: i16, c2: i16) {
        debug_assert!(r1 == r2 || c1 == c2, "Line is neither vertical nor horizontal");

        if r1 == r2 {
            for j in c1..=c2 {
                self.set(r1, j, Module::Func(Color::from(j & 1 == 0)));
            }
        } else {
            for i in r1..=r2 {
                self.set(i, c1, Module::Func(Color::from(i & 1 == 0)));
            }
        }
    }
}

#[cfg(test)]
mod timing_pattern_tests {
    use crate::builder::QR;
    use crate::common::codec::Mode;
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_timing_pattern_1() {
        let mut qr = QR::new(Version::MIN, ECLevel::L, Mode::Byte);
        qr.draw_timing_pattern();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             ........fFfFf........\n\
             .....................\n\
             ......f..............\n\
             ......F..............\n\
             ......f..............\n\
             ......F..............\n\
             ......f..............\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n"
        );
    }
}

// Alignment pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_alignment_patterns(&mut self) {
        let poses = self.ver.alignment_pattern();
        for &r in poses {
            for &c in poses {
                self.draw_alignment_pattern_at(r, c)
            }
        }
    }

    fn draw_alignment_pattern_at(&mut self, r: i16, c: i16) {
        let w = self.w as i16;
        // Positions overlapping finder patterns are skipped
        if (r == 6 && (c == 6 || c - w == -7)) || (r - w == -7 && c == 6) {
            return;
        }
        for i in -2..=2 {
            for j in -2..=2 {
                let dark = i16::abs(i) == 2 || i16::abs(j) == 2 || (i, j) == (0, 0);
                self.set(r + i, c + j, Module::Func(Color::from(dark)));
            }
        }
    }
}


// All function patterns
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn draw_all_function_patterns(&mut self) {
        self.draw_finder_patterns();
        self.draw_timing_pattern();
        self.draw_alignment_patterns();
        self.draw_dark_module();
    }

    // Fixed dark module beside the bottom left finder
    fn draw_dark_module(&mut self) {
        self.set(-8, 8, Module::Func(Color::Dark));
    }
}

// Format & version info
//------------------------------------------------------------------------------

impl QR {
    fn reserve_format_area(&mut self) {
        self.draw_format_info((1 << FORMAT_INFO_BIT_LEN) - 1);
    }

    fn draw_format_info(&mut self, format_info: u32) {
        let (off, on) = (Module::Format(Color::Light), Module::Format(Color::Dark));
        self.draw_number(format_info, FORMAT_INFO_BIT_LEN, off, on, &FORMAT_INFO_COORDS_MAIN);
        self.draw_number(format_info, FORMAT_INFO_BIT_LEN, off, on, &FORMAT_INFO_COORDS_SIDE);
    }

    fn draw_version_info(&mut self) {
        if *self.ver < 7 {
            return;
        }
        let ver_info = self.ver.info();
        let (off, on) = (Module::Version(Color::Light), Module::Version(Color::Dark));
        self.draw_number(ver_info, VERSION_INFO_BIT_LEN, off, on, &VERSION_INFO_COORDS_BL);
        self.draw_number(ver_info, VERSION_INFO_BIT_LEN, off, on, &VERSION_INFO_COORDS_TR);
    }

    // Draws the bits of number most significant first over the coords
    fn draw_number(
        &mut self,
        number: u32,
        bit_len: usize,
        off_clr: Module,
        on_clr: Module,
        coords: &[(i16, i16)],
    ) {
        let mut mask = 1 << (bit_len - 1);
        for &(r, c) in coords {
            self.set(r, c, if number & mask == 0 { off_clr } else { on_clr });
            mask >>= 1;
        }
    }
}

#[cfg(test)]
mod qr_information_tests {
    use crate::builder::{Module, QR};
    use crate::common::codec::Mode;
    use crate::common::mask::MaskPattern;
    use crate::common::metadata::{format_info, Color, ECLevel, Version};

    #[test]
    fn test_version_info_1() {
        let mut qr = QR::new(Version::MIN, ECLevel::L, Mode::Byte);
        qr.draw_version_info();
        assert!(qr.grid().iter().all(|m| *m == Module::Empty));
    }

    #[test]
    fn test_version_info_7() {
        let mut qr = QR::new(Version::new(7).unwrap(), ECLevel::L, Mode::Byte);
        qr.draw_version_info();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             ..................................VVv........\n\
             ..................................VvV........\n\
             ..................................VvV........\n\
             ..................................Vvv........\n\
             ..................................vvv........\n\
             ..................................VVV........\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             VVVVvV.......................................\n\
             VvvvvV.......................................\n\
             vVVvvV.......................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n"
        );
    }

    #[test]
    fn test_reserve_format_info_qr() {
        let mut qr = QR::new(Version::MIN, ECLevel::L, Mode::Byte);
        qr.reserve_format_area();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             ........m............\n\
             ........m............\n\
             ........m............\n\
             ........m............\n\
             ........m............\n\
             ........m............\n\
             .....................\n\
             ........m............\n\
             mmmmmm.mm....mmmmmmmm\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             ........m............\n\
             ........m............\n\
             ........m............\n\
             ........m............\n\
             ........m............\n\
             ........m............\n\
             ........m............\n"
        );
    }

    #[test]
    fn test_format_info_copies_match() {
        let mut qr = QR::new(Version::MIN, ECLevel::Q, Mode::Byte);
        let info = format_info(ECLevel::Q, MaskPattern::new(5).unwrap());
        qr.draw_format_info(info);
        let read = |coords: &[(i16, i16)]| {
            coords.iter().fold(0, |acc, &(r, c)| acc << 1 | qr.is_dark(r, c) as u32)
        };
        assert_eq!(read(&super::FORMAT_INFO_COORDS_MAIN), info);
        assert_eq!(read(&super::FORMAT_INFO_COORDS_SIDE), info);
        assert_eq!(qr.get(8, 0), Module::Format(Color::from(info >> 14 == 1)));
    }

    #[test]
    fn test_all_function_patterns_and_qr_info_1() {
        let mut qr = QR::new(Version::MIN, ECLevel::L, Mode::Byte);
        qr.draw_all_function_patterns();
        qr.reserve_format_area();
        qr.draw_version_info();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffFm....Ffffffff\n\
             fFFFFFfFm....FfFFFFFf\n\
             fFfffFfFm....FfFfffFf\n\
             fFfffFfFm....FfFfffFf\n\
             fFfffFfFm....FfFfffFf\n\
             fFFFFFfFm....FfFFFFFf\n\
             fffffffFfFfFfFfffffff\n\
             FFFFFFFFm....FFFFFFFF\n\
             mmmmmmfmm....mmmmmmmm\n\
             ......F..............\n\
             ......f..............\n\
             ......F..............\n\
             ......f..............\n\
             FFFFFFFFf............\n\
             fffffffFm............\n\
             fFFFFFfFm............\n\
             fFfffFfFm............\n\
             fFfffFfFm............\n\
             fFfffFfFm............\n\
             fFFFFFfFm............\n\
             fffffffFm............\n"
        );
    }

    #[test]
    fn test_all_function_patterns_and_qr_info_7() {
        let mut qr = QR::new(Version::new(7).unwrap(), ECLevel::L, Mode::Byte);
        qr.draw_all_function_patterns();
        qr.draw_version_info();
        qr.reserve_format_area();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffFm.........................VVvFfffffff\n\
             fFFFFFfFm.........................VvVFfFFFFFf\n\
             fFfffFfFm.........................VvVFfFfffFf\n\
             fFfffFfFm.........................VvvFfFfffFf\n\
             fFfffFfFm...........fffff.........vvvFfFfffFf\n\
             fFFFFFfFm...........fFFFf.........VVVFfFFFFFf\n\
             fffffffFfFfFfFfFfFfFfFfFfFfFfFfFfFfFfFfffffff\n\
             FFFFFFFFm...........fFFFf............FFFFFFFF\n\
             mmmmmmfmm...........fffff............mmmmmmmm\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             ....fffff...........fffff...........fffff....\n\
             ....fFFFf...........fFFFf...........fFFFf....\n\
             ....fFfFf...........fFfFf...........fFfFf....\n\
             ....fFFFf...........fFFFf...........fFFFf....\n\
             ....fffff...........fffff...........fffff....\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             VVVVvVf......................................\n\
             VvvvvVF......................................\n\
             vVVvvVf.............fffff...........fffff....\n\
             FFFFFFFFf...........fFFFf...........fFFFf....\n\
             fffffffFm...........fFfFf...........fFfFf....\n\
             fFFFFFfFm...........fFFFf...........fFFFf....\n\
             fFfffFfFm...........fffff...........fffff....\n\
             fFfffFfFm....................................\n\
             fFfffFfFm....................................\n\
             fFFFFFfFm....................................\n\
             fffffffFm....................................\n"
        );
    }
}

// Encoding region
//------------------------------------------------------------------------------

impl QR {
    // Threads the interleaved codewords through the free modules along the zigzag path
    pub(crate) fn draw_encoding_region(&mut self, codewords: &[u8]) {
        self.reserve_format_area();
        self.draw_version_info();

        let bits = codewords.iter().flat_map(|&cw| (0..8).rev().map(move |i| (cw >> i) & 1 == 1));
        let mut coords = ZigZagIter::new(self.ver);
        for bit in bits {
            let next = coords.by_ref().find(|&(r, c)| self.get(r, c) == Module::Empty);
            let Some((r, c)) = next else {
                panic!("Ran out of data modules: Version {}, Codewords {}", self.ver, codewords.len());
            };
            self.set(r, c, Module::Data(Color::from(bit)));
        }
        self.fill_remainder_bits(coords);

        debug_assert!(!self.grid.contains(&Module::Empty), "Empty module left after placement");
    }

    fn fill_remainder_bits(&mut self, coords: impl Iterator<Item = (i16, i16)>) {
        let mut n = 0;
        for (r, c) in coords {
            if self.get(r, c) == Module::Empty {
                self.set(r, c, Module::Data(Color::Light));
                n += 1;
            }
        }
        assert_eq!(
            n,
            self.ver.remainder_bits(),
            "Leftover modules don't match remainder bits: Version {}",
            self.ver
        );
    }

    pub(crate) fn apply_mask(&mut self, pattern: MaskPattern) {
        self.mask = Some(pattern);
        let mask_fn = pattern.mask_function();
        let w = self.w as i16;
        for r in 0..w {
            for c in 0..w {
                if let Module::Data(clr) = self.get(r, c) {
                    if mask_fn(r as i32, c as i32) {
                        self.set(r, c, Module::Data(!clr))
                    }
                }
            }
        }
        self.draw_format_info(format_info(self.ecl, pattern));
    }
}

#[cfg(test)]
mod encoding_region_tests {
    use super::{Module, QR};
    use crate::common::codec::Mode;
    use crate::common::mask::MaskPattern;
    use crate::common::metadata::{Color, ECLevel, Version};

    fn placed(v: usize, fill: u8) -> QR {
        let ver = Version::new(v).unwrap();
        let mut qr = QR::new(ver, ECLevel::L, Mode::Byte);
        qr.draw_all_function_patterns();
        qr.draw_encoding_region(&vec![fill; ver.total_codewords()]);
        qr
    }

    #[test]
    fn test_encoding_region_fills_data_area() {
        for v in [1, 2, 6, 7, 14, 21, 35, 40] {
            let ver = Version::new(v).unwrap();
            let qr = placed(v, 0xFF);
            let data = qr.grid().iter().filter(|m| matches!(m, Module::Data(_))).count();
            assert_eq!(data, ver.total_codewords() * 8 + ver.remainder_bits());
            let dark_data = qr.grid().iter().filter(|m| **m == Module::Data(Color::Dark)).count();
            assert_eq!(dark_data, ver.total_codewords() * 8);
        }
    }

    #[test]
    fn test_first_codeword_placement() {
        let ver = Version::MIN;
        let mut qr = QR::new(ver, ECLevel::L, Mode::Byte);
        qr.draw_all_function_patterns();
        let mut codewords = vec![0; ver.total_codewords()];
        codewords[0] = 0b1010_0000;
        qr.draw_encoding_region(&codewords);
        assert_eq!(qr.get(20, 20), Module::Data(Color::Dark));
        assert_eq!(qr.get(20, 19), Module::Data(Color::Light));
        assert_eq!(qr.get(19, 20), Module::Data(Color::Dark));
        assert_eq!(qr.get(19, 19), Module::Data(Color::Light));
    }

    #[test]
    fn test_remainder_bits_are_light() {
        // Version 2 leaves 7 modules next to the bottom left finder separator
        let qr = placed(2, 0xFF);
        let light_data = qr.grid().iter().filter(|m| **m == Module::Data(Color::Light)).count();
        assert_eq!(light_data, 7);
    }

    #[test]
    #[should_panic]
    fn test_too_many_codewords() {
        let ver = Version::MIN;
        let mut qr = QR::new(ver, ECLevel::L, Mode::Byte);
        qr.draw_all_function_patterns();
        qr.draw_encoding_region(&vec![0; ver.total_codewords() + 1]);
    }

    #[test]
    #[should_panic]
    fn test_too_few_codewords() {
        let ver = Version::MIN;
        let mut qr = QR::new(ver, ECLevel::L, Mode::Byte);
        qr.draw_all_function_patterns();
        qr.draw_encoding_region(&vec![0; ver.total_codewords() - 1]);
    }

    #[test]
    fn test_apply_mask_leaves_function_patterns() {
        let unmasked = placed(7, 0x00);
        let mut masked = unmasked.clone();
        masked.apply_mask(MaskPattern::new(0).unwrap());
        assert_eq!(masked.mask(), MaskPattern::new(0).ok());
        for (a, b) in unmasked.grid().iter().zip(masked.grid()) {
            match (a, b) {
                (Module::Data(x), Module::Data(y)) => assert!(x == y || *x == !*y),
                (Module::Format(_), Module::Format(_)) => (),
                _ => assert_eq!(a, b),
            }
        }
        assert_eq!(masked.get(0, 0), Module::Func(Color::Dark));
        assert_eq!(masked.get(-8, 8), Module::Func(Color::Dark));
    }
}
