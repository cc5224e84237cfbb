use std::thread;

use cplabel::{lookup, resolve, resolve_bytes, CodePageId, DEFAULT_CODE_PAGE};

const TABLE: &[(&str, &str, u16)] = &[
    ("utf8", "utf-8", 65001),
    ("iso-8859-1", "iso8859-1", 28591),
    ("iso-8859-2", "iso8859-2", 28592),
    ("iso-8859-3", "iso8859-3", 28593),
    ("iso-8859-4", "iso8859-4", 28594),
    ("iso-8859-5", "iso8859-5", 28595),
    ("iso-8859-6", "iso8859-6", 28596),
    ("iso-8859-7", "iso8859-7", 28597),
    ("iso-8859-8", "iso8859-8", 28598),
    ("iso-8859-9", "iso8859-9", 28599),
    ("iso-8859-13", "iso8859-13", 28603),
    ("iso-8859-15", "iso8859-15", 28605),
    ("windows-1250", "microsoft-cp1250", 1250),
    ("windows-1251", "microsoft-cp1251", 1251),
    ("windows-1252", "microsoft-cp1252", 1252),
    ("windows-1253", "microsoft-cp1253", 1253),
    ("windows-1254", "microsoft-cp1254", 1254),
    ("windows-1255", "microsoft-cp1255", 1255),
    ("windows-1256", "microsoft-cp1256", 1256),
    ("windows-1257", "microsoft-cp1257", 1257),
    ("windows-1258", "microsoft-cp1258", 1258),
    ("windows-1259", "microsoft-cp1259", 1259),
    ("koi8-r", "koi8-u", 20866),
];

#[test]
fn documented_aliases() {
    for &(first, second, id) in TABLE {
        for label in [first, second] {
            assert_eq!(resolve(label), CodePageId(id), "{}", label);
            assert_eq!(resolve(&label.to_uppercase()), CodePageId(id), "{}", label);
            assert_eq!(lookup(label), Some(CodePageId(id)), "{}", label);
        }
    }
    assert_eq!(cplabel::label::aliases().count(), TABLE.len() * 2);
}

#[test]
fn examples() {
    assert_eq!(resolve(""), CodePageId(1252));
    assert_eq!(resolve("nonsense-encoding-xyz"), CodePageId(1252));
    assert_eq!(resolve("UTF-8"), CodePageId(65001));
    assert_eq!(resolve("utf8"), CodePageId(65001));
    assert_eq!(resolve("Windows-1251"), CodePageId(1251));
    assert_eq!(resolve("MICROSOFT-CP1251"), CodePageId(1251));
    assert_eq!(resolve("koi8-r"), CodePageId(20866));
    assert_eq!(resolve("koi8-u"), CodePageId(20866));
}

#[test]
fn total_over_odd_input() {
    for label in ["\0", "utf-8\0", "\0utf-8", "ütf-8", "日本語", "windows-1252 "] {
        assert_eq!(resolve(label), DEFAULT_CODE_PAGE, "{:?}", label);
    }
    let long = "x".repeat(1 << 16);
    assert_eq!(resolve(&long), DEFAULT_CODE_PAGE);

    let inputs: [&[u8]; 4] = [b"\xff", b"\x80\x80\x80", b"utf-8\xff", b""];
    for bytes in inputs {
        assert_eq!(resolve_bytes(bytes), DEFAULT_CODE_PAGE);
    }
}

#[test]
fn concurrent_callers_agree() {
    let threads: Vec<_> = (0..8)
        .map(|n| {
            thread::spawn(move || {
                for &(first, second, id) in TABLE.iter().cycle().skip(n).take(500) {
                    assert_eq!(resolve(first), CodePageId(id));
                    assert_eq!(resolve(second), CodePageId(id));
                    assert_eq!(resolve("bogus"), DEFAULT_CODE_PAGE);
                }
            })
        })
        .collect();
    for thread in threads {
        thread.join().unwrap();
    }
}
