use std::fmt;

use encoding_rs::Encoding;

use crate::label;

/// A numeric code page identifier such as 1252 or 65001.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePageId(pub u16);

impl CodePageId {
    pub const fn new(id: u16) -> Self {
        CodePageId(id)
    }

    pub const fn get(self) -> u16 {
        self.0
    }

    /// The canonical label of this code page, if the label table knows it.
    pub fn name(self) -> Option<&'static str> {
        label::aliases()
            .find(|&(_, code_page)| code_page == self)
            .map(|(name, _)| name)
    }

    /// The decoder for text in this code page.
    ///
    /// ISO-8859-1 and ISO-8859-9 decode as windows-1252 and windows-1254, as
    /// the WHATWG Encoding Standard has it. There is no decoder for 1259.
    pub fn encoding(self) -> Option<&'static Encoding> {
        match self.0 {
            65001 => Some(encoding_rs::UTF_8),
            28591 => Some(encoding_rs::WINDOWS_1252),
            28592 => Some(encoding_rs::ISO_8859_2),
            28593 => Some(encoding_rs::ISO_8859_3),
            28594 => Some(encoding_rs::ISO_8859_4),
            28595 => Some(encoding_rs::ISO_8859_5),
            28596 => Some(encoding_rs::ISO_8859_6),
            28597 => Some(encoding_rs::ISO_8859_7),
            28598 => Some(encoding_rs::ISO_8859_8),
            28599 => Some(encoding_rs::WINDOWS_1254),
            28603 => Some(encoding_rs::ISO_8859_13),
            28605 => Some(encoding_rs::ISO_8859_15),
            1250 => Some(encoding_rs::WINDOWS_1250),
            1251 => Some(encoding_rs::WINDOWS_1251),
            1252 => Some(encoding_rs::WINDOWS_1252),
            1253 => Some(encoding_rs::WINDOWS_1253),
            1254 => Some(encoding_rs::WINDOWS_1254),
            1255 => Some(encoding_rs::WINDOWS_1255),
            1256 => Some(encoding_rs::WINDOWS_1256),
            1257 => Some(encoding_rs::WINDOWS_1257),
            1258 => Some(encoding_rs::WINDOWS_1258),
            20866 => Some(encoding_rs::KOI8_R),
            _ => None,
        }
    }

    pub fn encoding_or_default(self) -> &'static Encoding {
        self.encoding().unwrap_or(encoding_rs::WINDOWS_1252)
    }
}

impl fmt::Display for CodePageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for CodePageId {
    fn from(id: u16) -> Self {
        CodePageId(id)
    }
}

impl From<CodePageId> for u16 {
    fn from(code_page: CodePageId) -> Self {
        code_page.0
    }
}

impl From<CodePageId> for u32 {
    fn from(code_page: CodePageId) -> Self {
        code_page.0.into()
    }
}
