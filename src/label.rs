//! Encoding label to code page resolution.
//!
//! Labels are compared ASCII case-insensitively and must otherwise match
//! exactly: no whitespace trimming and no punctuation folding. Anything
//! that is not a known label resolves to [`DEFAULT_CODE_PAGE`], so
//! [`resolve`] never fails.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::codepage::CodePageId;

/// Windows-1252 (Western European), returned for every unrecognized label.
pub const DEFAULT_CODE_PAGE: CodePageId = CodePageId(1252);

// Lower case only. The first label listed for an id is its canonical name.
static ALIASES: &[(&str, CodePageId)] = &[
    ("utf-8", CodePageId(65001)),
    ("utf8", CodePageId(65001)),
    ("iso-8859-1", CodePageId(28591)),
    ("iso8859-1", CodePageId(28591)),
    ("iso-8859-2", CodePageId(28592)),
    ("iso8859-2", CodePageId(28592)),
    ("iso-8859-3", CodePageId(28593)),
    ("iso8859-3", CodePageId(28593)),
    ("iso-8859-4", CodePageId(28594)),
    ("iso8859-4", CodePageId(28594)),
    ("iso-8859-5", CodePageId(28595)),
    ("iso8859-5", CodePageId(28595)),
    ("iso-8859-6", CodePageId(28596)),
    ("iso8859-6", CodePageId(28596)),
    ("iso-8859-7", CodePageId(28597)),
    ("iso8859-7", CodePageId(28597)),
    ("iso-8859-8", CodePageId(28598)),
    ("iso8859-8", CodePageId(28598)),
    ("iso-8859-9", CodePageId(28599)),
    ("iso8859-9", CodePageId(28599)),
    ("iso-8859-13", CodePageId(28603)),
    ("iso8859-13", CodePageId(28603)),
    ("iso-8859-15", CodePageId(28605)),
    ("iso8859-15", CodePageId(28605)),
    ("windows-1250", CodePageId(1250)),
    ("microsoft-cp1250", CodePageId(1250)),
    ("windows-1251", CodePageId(1251)),
    ("microsoft-cp1251", CodePageId(1251)),
    ("windows-1252", CodePageId(1252)),
    ("microsoft-cp1252", CodePageId(1252)),
    ("windows-1253", CodePageId(1253)),
    ("microsoft-cp1253", CodePageId(1253)),
    ("windows-1254", CodePageId(1254)),
    ("microsoft-cp1254", CodePageId(1254)),
    ("windows-1255", CodePageId(1255)),
    ("microsoft-cp1255", CodePageId(1255)),
    ("windows-1256", CodePageId(1256)),
    ("microsoft-cp1256", CodePageId(1256)),
    ("windows-1257", CodePageId(1257)),
    ("microsoft-cp1257", CodePageId(1257)),
    ("windows-1258", CodePageId(1258)),
    ("microsoft-cp1258", CodePageId(1258)),
    ("windows-1259", CodePageId(1259)),
    ("microsoft-cp1259", CodePageId(1259)),
    ("koi8-r", CodePageId(20866)),
    ("koi8-u", CodePageId(20866)),
];

static LABEL_TABLE: OnceLock<HashMap<&'static [u8], CodePageId>> = OnceLock::new();

fn init_label_table() -> HashMap<&'static [u8], CodePageId> {
    let mut m = HashMap::with_capacity(ALIASES.len());
    for &(label, code_page) in ALIASES {
        m.insert(label.as_bytes(), code_page);
    }
    m
}

fn longest_label() -> usize {
    static LONGEST: OnceLock<usize> = OnceLock::new();
    *LONGEST.get_or_init(|| ALIASES.iter().map(|(label, _)| label.len()).max().unwrap_or(0))
}

/// Looks up `label` without falling back to the default.
pub fn lookup(label: &str) -> Option<CodePageId> {
    lookup_bytes(label.as_bytes())
}

/// Byte-level [`lookup`]; the input does not have to be UTF-8.
pub fn lookup_bytes(label: &[u8]) -> Option<CodePageId> {
    if label.is_empty() || label.len() > longest_label() {
        return None;
    }
    let folded = label.to_ascii_lowercase();
    LABEL_TABLE
        .get_or_init(init_label_table)
        .get(folded.as_slice())
        .copied()
}

/// Resolves an encoding label to its code page.
///
/// ```
/// use cplabel::{resolve, CodePageId};
///
/// assert_eq!(resolve("UTF-8"), CodePageId(65001));
/// assert_eq!(resolve("MICROSOFT-CP1251"), CodePageId(1251));
/// assert_eq!(resolve("no-such-encoding"), CodePageId(1252));
/// ```
pub fn resolve(label: &str) -> CodePageId {
    lookup(label).unwrap_or(DEFAULT_CODE_PAGE)
}

pub fn resolve_bytes(label: &[u8]) -> CodePageId {
    lookup_bytes(label).unwrap_or(DEFAULT_CODE_PAGE)
}

/// Every known label with its code page, in table order.
pub fn aliases() -> impl Iterator<Item = (&'static str, CodePageId)> {
    ALIASES.iter().copied()
}
