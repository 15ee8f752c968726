/*
 * Copyright (C) 2022 taylor.fish <contact@taylor.fish>
 *
 * This file is part of hackercodecs.
 *
 * hackercodecs is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * hackercodecs is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with hackercodecs. If not, see <https://www.gnu.org/licenses/>.
 */

//! URL percent-encoding.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use percent_encoding::{percent_decode_str, percent_encode};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Bytes left as-is by [`encode`]: ASCII letters, digits, and `_ . - /`.
const UNESCAPED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'/');

/// Percent-encodes every byte outside the unescaped set as `%XX`.
pub fn encode(bytes: &[u8]) -> (String, usize) {
    (percent_encode(bytes, UNESCAPED).to_string(), bytes.len())
}

/// Replaces every `%XX` escape with the byte it names. Malformed escapes
/// are kept verbatim.
pub fn decode(text: &str) -> (Vec<u8>, usize) {
    (percent_decode_str(text).collect(), text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_reserved() {
        assert_eq!(
            encode(b"/path to?a=b&c~d").0,
            "/path%20to%3Fa%3Db%26c%7Ed",
        );
    }

    #[test]
    fn encode_non_ascii() {
        assert_eq!(encode("é".as_bytes()), ("%C3%A9".into(), 2));
    }

    #[test]
    fn decode_escapes() {
        assert_eq!(decode("a%20b%2fc"), (b"a b/c".to_vec(), 9));
    }

    #[test]
    fn decode_keeps_malformed_escapes() {
        assert_eq!(decode("100%").0, b"100%");
        assert_eq!(decode("%zz%4").0, b"%zz%4");
    }
}
