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

//! Functions for decoding Ascii85 data.

use super::Digit;
use super::{BYTES_PER_BLOCK, DIGITS_PER_BLOCK, RADIX};
use super::{SPACE_EXPANSION, SPACE_SHORTHAND, ZERO_EXPANSION, ZERO_SHORTHAND};
use crate::blocks::blocks;
use crate::error::{CodecError, Result};

use alloc::string::String;
use alloc::vec::Vec;
use log::trace;

/// Ensures that every run of text that ends in a shorthand character
/// consists of whole 5-character groups, so that no shorthand appears in
/// the middle of a group.
fn check_runs(text: &[u8]) -> Result<()> {
    let mut start = 0;
    for (i, &b) in text.iter().enumerate() {
        if b == ZERO_SHORTHAND || b == SPACE_SHORTHAND {
            let run = &text[start..i];
            if run.len() % DIGITS_PER_BLOCK != 0 {
                let run = String::from_utf8_lossy(run).into_owned();
                return Err(CodecError::MalformedBlock(run));
            }
            start = i + 1;
        }
    }
    Ok(())
}

fn expansion(b: u8) -> &'static [u8] {
    match b {
        ZERO_SHORTHAND => ZERO_EXPANSION,
        SPACE_SHORTHAND => SPACE_EXPANSION,
        _ => &[],
    }
}

/// Expands shorthand and discards every byte outside the Ascii85 alphabet.
fn to_digits(text: &[u8]) -> Vec<Digit> {
    let mut digits = Vec::with_capacity(text.len());
    let mut dropped = 0_usize;
    text.iter().copied().for_each(|b| match b {
        ZERO_SHORTHAND | SPACE_SHORTHAND => {
            let expanded = expansion(b).iter().copied();
            digits.extend(expanded.filter_map(Digit::from_ascii));
        }
        b => match Digit::from_ascii(b) {
            Some(d) => digits.push(d),
            None => dropped += 1,
        },
    });
    if dropped > 0 {
        trace!("ascii85: ignored {} bytes outside the alphabet", dropped);
    }
    digits
}

fn group_text(group: &[Digit]) -> String {
    group.iter().map(|d| char::from(d.to_ascii())).collect()
}

fn decode_group(group: &[Digit]) -> Result<[u8; BYTES_PER_BLOCK]> {
    let value = group.iter().copied().map(u8::from).fold(0_u64, |sum, d| {
        sum * u64::from(RADIX) + u64::from(d)
    });
    u32::try_from(value)
        .map(u32::to_be_bytes)
        .map_err(|_| CodecError::InvalidBlock(group_text(group)))
}

/// Decodes Ascii85 text, given as a `str` or raw bytes. Both `z` (four zero
/// bytes) and `y` (four spaces) shorthand are accepted.
///
/// Characters outside `!` through `u` are ignored. Returns the decoded
/// bytes and the length of the input after shorthand expansion, filtering,
/// and padding.
///
/// # Errors
///
/// * [`CodecError::MalformedBlock`] if a shorthand character appears in the
///   middle of a group.
/// * [`CodecError::InvalidBlock`] if a group's value exceeds 32 bits.
pub fn decode<T>(text: &T) -> Result<(Vec<u8>, usize)>
where
    T: AsRef<[u8]> + ?Sized,
{
    let text = text.as_ref();
    check_runs(text)?;
    let mut digits = to_digits(text);
    let padding = (DIGITS_PER_BLOCK - digits.len() % DIGITS_PER_BLOCK)
        % DIGITS_PER_BLOCK;
    digits.resize(digits.len() + padding, Digit::MAX);

    let mut output = Vec::with_capacity(
        digits.len() / DIGITS_PER_BLOCK * BYTES_PER_BLOCK,
    );
    for group in blocks(&digits, DIGITS_PER_BLOCK)? {
        output.extend_from_slice(&decode_group(group)?);
    }
    output.truncate(output.len() - padding);
    Ok((output, digits.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn decode_whole_blocks() {
        assert_eq!(decode("9jqo^").unwrap(), (b"Man ".to_vec(), 5));
        assert_eq!(decode("s8W-!").unwrap().0, [0xff; 4]);
    }

    #[test]
    fn decode_padded() {
        assert_eq!(decode("5l").unwrap(), (b"A".to_vec(), 5));
        assert_eq!(decode("9jqo^=9").unwrap().0, b"Man X");
        assert_eq!(decode("!!").unwrap().0, [0]);
    }

    #[test]
    fn decode_shorthand() {
        assert_eq!(decode("z").unwrap(), (vec![0; 4], 5));
        assert_eq!(decode("y").unwrap().0, b"    ");
        assert_eq!(decode("9jqo^zy5l").unwrap().0, b"Man \0\0\0\0    A");
    }

    #[test]
    fn decode_ignores_foreign_bytes() {
        assert_eq!(decode("9jq\no^\t").unwrap().0, b"Man ");
        assert_eq!(decode("~~").unwrap(), (Vec::new(), 0));
        assert_eq!(decode(b"9jqo^\xff").unwrap().0, b"Man ");
    }

    #[test]
    fn decode_empty() {
        assert_eq!(decode("").unwrap(), (Vec::new(), 0));
    }

    #[test]
    fn shorthand_inside_group_is_malformed() {
        match decode("z!!!z") {
            Err(CodecError::MalformedBlock(run)) => assert_eq!(run, "!!!"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            decode("9jqy"),
            Err(CodecError::MalformedBlock(_))
        ));
    }

    #[test]
    fn trailing_partial_run_is_allowed() {
        assert_eq!(decode("z5l").unwrap().0, b"\0\0\0\0A");
    }

    #[test]
    fn overflowing_group_is_invalid() {
        match decode("s8W-#") {
            Err(CodecError::InvalidBlock(group)) => assert_eq!(group, "s8W-#"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(decode("uu"), Err(CodecError::InvalidBlock(_))));
    }
}
