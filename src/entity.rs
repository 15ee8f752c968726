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

//! XML entity escaping.

use alloc::string::String;
use quick_xml::escape::{partial_escape, resolve_predefined_entity};

/// Length of the longest predefined entity name (`apos`, `quot`).
const MAX_ENTITY_LEN: usize = 4;

/// Escapes `&`, `<`, and `>`.
pub fn encode(text: &str) -> (String, usize) {
    (partial_escape(text).into_owned(), text.len())
}

/// Replaces predefined XML entity references (`&lt;`, `&gt;`, `&amp;`,
/// `&quot;`, `&apos;`) with the characters they stand for.
///
/// Anything that is not a well-formed reference to one of those entities,
/// such as a lone `&`, is copied through unchanged.
pub fn decode(text: &str) -> (String, usize) {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('&') {
        output.push_str(&rest[..start]);
        rest = &rest[start..];
        let reference = rest[1..]
            .bytes()
            .take(MAX_ENTITY_LEN + 1)
            .position(|b| b == b';')
            .and_then(|end| {
                resolve_predefined_entity(&rest[1..=end])
                    .map(|r| (r, end + 2))
            });
        match reference {
            Some((replacement, len)) => {
                output.push_str(replacement);
                rest = &rest[len..];
            }
            None => {
                output.push('&');
                rest = &rest[1..];
            }
        }
    }
    output.push_str(rest);
    (output, text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_markup() {
        assert_eq!(
            encode("<a href=\"x\">AT&T</a>").0,
            "&lt;a href=\"x\"&gt;AT&amp;T&lt;/a&gt;",
        );
    }

    #[test]
    fn decode_markup() {
        assert_eq!(
            decode("&lt;b&gt;&quot;x&apos; &amp;amp;"),
            ("<b>\"x' &amp;".into(), 32),
        );
    }

    #[test]
    fn decode_leaves_unknown_references() {
        assert_eq!(decode("AT&T &nbsp; &").0, "AT&T &nbsp; &");
        assert_eq!(decode("&&lt;").0, "&<");
        assert_eq!(decode("&lt&gt;").0, "&lt>");
    }

    #[test]
    fn decode_long_ampersand_run() {
        let text = "&".repeat(100_000) + ";";
        assert_eq!(decode(&text), (text.clone(), text.len()));
        let text = "&".repeat(100_000) + "amp;";
        assert_eq!(decode(&text).0, "&".repeat(100_000));
    }
}
