mod qr;
mod render;

pub use qr::{Module, QR};

use tracing::debug;

use crate::common::{
    codec::{encode, select_version, Mode},
    ec::add_ecc,
    error::QRResult,
    mask::{apply_best_mask, MaskPattern},
    metadata::{ECLevel, Version},
};

// Builder
//------------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct QRBuilder<'a> {
    text: &'a str,
    version: Option<Version>,
    ec_level: ECLevel,
    mask: Option<MaskPattern>,
}

impl<'a> QRBuilder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, version: None, ec_level: ECLevel::M, mask: None }
    }

    pub fn text(&mut self, text: &'a str) -> &mut Self {
        self.text = text;
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn unset_version(&mut self) -> &mut Self {
        self.version = None;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn mask(&mut self, mask: MaskPattern) -> &mut Self {
        self.mask = Some(mask);
        self
    }

    pub fn unset_mask(&mut self) -> &mut Self {
        self.mask = None;
        self
    }

    pub fn metadata(&self) -> String {
        let ver = self.version.map_or("None".to_string(), |v| v.to_string());
        let mask = self.mask.map_or("Auto".to_string(), |m| m.to_string());
        format!("{{ Version: {ver}, Ec level: {:?}, Mask: {mask} }}", self.ec_level)
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<QR> {
        debug!(metadata = %self.metadata(), "Generating QR");

        let mode = Mode::analyze(self.text);
        let char_cnt = mode.char_count(self.text);
        let version = match self.version {
            Some(v) => v,
            None => select_version(char_cnt, self.ec_level, mode)?,
        };
        debug!(?mode, char_cnt, version = *version, "Selected mode & version");

        let encoded = encode(self.text, mode, version, self.ec_level)?;
        let codewords = add_ecc(encoded.data(), version, self.ec_level);

        let mut qr = QR::new(version, self.ec_level, mode);
        qr.draw_all_function_patterns();
        qr.draw_encoding_region(&codewords);

        let mask = match self.mask {
            Some(m) => {
                qr.apply_mask(m);
                m
            }
            None => apply_best_mask(&mut qr),
        };

        debug!(
            mask = *mask,
            dark_modules = qr.count_dark_modules(),
            total_modules = qr.width() * qr.width(),
            "QR generated"
        );

        Ok(qr)
    }
}
