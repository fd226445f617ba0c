//! WinAnsi encoding utilities for the built-in PDF fonts
//!
//! The standard 14 fonts only cover the WinAnsi (Windows-1252) repertoire.
//! This module provides utilities for:
//! - Converting UTF-8 text to WinAnsi bytes, replacing anything unmappable
//! - Escaping bytes for a PDF literal string

/// Convert text to WinAnsi bytes
///
/// ASCII passes through unchanged. Characters outside Windows-1252 become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    let mut result = Vec::with_capacity(s.len());
    let mut buf = [0u8; 4];

    for c in s.chars() {
        if c.is_ascii() {
            result.push(c as u8);
            continue;
        }

        let (bytes, _, had_errors) = encoding_rs::WINDOWS_1252.encode(c.encode_utf8(&mut buf));
        if had_errors || bytes.len() != 1 {
            result.push(b'?');
        } else {
            result.push(bytes[0]);
        }
    }
    result
}

/// Escape bytes for use inside a PDF literal string `( ... )`
pub fn escape_string(bytes: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(bytes.len() + 8);
    for &b in bytes {
        match b {
            b'\\' | b'(' | b')' => {
                result.push(b'\\');
                result.push(b);
            }
            b'\r' => result.extend_from_slice(b"\\r"),
            b'\n' => result.extend_from_slice(b"\\n"),
            _ => result.push(b),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(to_win_ansi("Rs. 120"), b"Rs. 120".to_vec());
    }

    #[test]
    fn test_latin1_and_cp1252() {
        // é is 0xE9, € is 0x80 in Windows-1252
        assert_eq!(to_win_ansi("café €"), vec![b'c', b'a', b'f', 0xE9, b' ', 0x80]);
    }

    #[test]
    fn test_unmappable_replaced() {
        assert_eq!(to_win_ansi("咖啡 ok"), b"?? ok".to_vec());
        assert_eq!(to_win_ansi("🍴"), b"?".to_vec());
    }

    #[test]
    fn test_escape_string() {
        assert_eq!(escape_string(b"a(b)c\\"), b"a\\(b\\)c\\\\".to_vec());
    }
}
