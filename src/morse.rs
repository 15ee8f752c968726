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

//! International Morse code.
//!
//! Letters are separated by a single space and words by `/`. Decoding also
//! accepts two consecutive spaces as a word separator.

use super::error::{CodecError, Result};

use alloc::string::{String, ToString};
use alloc::vec::Vec;

const WORD_SEPARATOR: &str = "/";

/// Every encodable character and its pattern. Patterns are unique.
pub static MORSE: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    (' ', WORD_SEPARATOR),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
];

fn pattern_for(c: char) -> Option<&'static str> {
    MORSE.iter().find(|(k, _)| *k == c).map(|(_, p)| *p)
}

fn char_for(pattern: &str) -> Option<char> {
    MORSE.iter().find(|(_, p)| *p == pattern).map(|(c, _)| *c)
}

/// Encodes `text` as Morse code. Lowercase ASCII letters are upper-cased
/// first.
///
/// Returns the patterns joined by single spaces and the number of input
/// bytes consumed.
pub fn encode(text: &str) -> Result<(String, usize)> {
    let patterns = text
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .map(|c| pattern_for(c).ok_or(CodecError::UnencodableCharacter(c)))
        .collect::<Result<Vec<_>>>()?;
    Ok((patterns.join(" "), text.len()))
}

/// Decodes space-separated Morse patterns. Word separators (`/` or two
/// spaces) decode to a single space.
pub fn decode(patterns: &str) -> Result<(String, usize)> {
    let normalized = patterns
        .replace("  ", WORD_SEPARATOR)
        .replace(WORD_SEPARATOR, " / ");
    let output = normalized
        .split_whitespace()
        .map(|token| {
            char_for(token).ok_or_else(|| {
                CodecError::UndecodablePattern(token.to_string())
            })
        })
        .collect::<Result<String>>()?;
    Ok((output, patterns.len()))
}
