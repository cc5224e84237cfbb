use std::borrow::Cow;

use encoding_rs::Encoding;

use crate::codepage::CodePageId;
use crate::label;

/// Text decoded by [`decode`].
#[derive(Debug)]
pub struct Decoded<'a> {
    pub text: Cow<'a, str>,
    /// The code page the label resolved to.
    pub code_page: CodePageId,
    /// The decoder that was run. Differs from the code page's own only for
    /// code pages without a decoder, which fall back to windows-1252.
    pub encoding: &'static Encoding,
    /// Whether malformed input was replaced with U+FFFD.
    pub had_errors: bool,
}

/// Decodes `bytes` in the encoding named by `label`.
///
/// Unknown labels decode as windows-1252. The label always wins over a byte
/// order mark; a BOM is only stripped when it belongs to the labelled
/// encoding, so UTF-8 input loses a leading EF BB BF while windows-1251
/// input starting with FF FE keeps "яю".
pub fn decode<'a>(bytes: &'a [u8], label: &str) -> Decoded<'a> {
    let code_page = label::resolve(label);
    let encoding = code_page.encoding_or_default();
    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    Decoded {
        text,
        code_page,
        encoding,
        had_errors,
    }
}
