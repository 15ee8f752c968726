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

//! Functions and types for encoding Ascii85 data.

use super::Digit;
use super::{BYTES_PER_BLOCK, DIGITS_PER_BLOCK, RADIX, ZERO_SHORTHAND};

use alloc::string::String;
use core::array;
use core::iter::{Flatten, Fuse, FusedIterator, Take};

struct BytesToUnflatChars<I>(I);

type BytesToUnflatCharsItem = Take<array::IntoIter<char, DIGITS_PER_BLOCK>>;

impl<I> Iterator for BytesToUnflatChars<I>
where
    I: FusedIterator<Item = u8>,
{
    type Item = BytesToUnflatCharsItem;

    fn next(&mut self) -> Option<Self::Item> {
        let mut num_bytes = 0;
        let mut word = 0_u32;
        self.0
            .by_ref()
            .map(u32::from)
            .enumerate()
            .take(BYTES_PER_BLOCK)
            .for_each(|(i, n)| {
                num_bytes += 1;
                word |= n << (8 * (BYTES_PER_BLOCK - 1 - i));
            });

        if num_bytes == 0 {
            return None;
        }

        let mut chars = [char::from(ZERO_SHORTHAND); DIGITS_PER_BLOCK];
        // Only a complete block may use the shorthand; a short final block
        // of zeros still needs its leading digits.
        if word == 0 && num_bytes == BYTES_PER_BLOCK {
            return Some(IntoIterator::into_iter(chars).take(1));
        }
        chars.iter_mut().rev().for_each(|c| {
            *c = char::from(Digit::from_remainder(word).to_ascii());
            word /= RADIX;
        });
        // `n` bytes of a padded block need only the first `n + 1` digits.
        Some(IntoIterator::into_iter(chars).take(num_bytes + 1))
    }
}

impl<I: FusedIterator<Item = u8>> FusedIterator for BytesToUnflatChars<I> {}

/// Iterator returned by [`encode_to_chars`].
pub struct CharEncoder<I>(Flatten<BytesToUnflatChars<Fuse<I>>>)
where
    I: Iterator<Item = u8>;

impl<I: Iterator<Item = u8>> Iterator for CharEncoder<I> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.0.fold(init, f)
    }
}

impl<I: Iterator<Item = u8>> FusedIterator for CharEncoder<I> {}

/// Lazily encodes a sequence of bytes as Ascii85 chars.
pub fn encode_to_chars<I>(bytes: I) -> CharEncoder<I::IntoIter>
where
    I: IntoIterator<Item = u8>,
{
    CharEncoder(BytesToUnflatChars(bytes.into_iter().fuse()).flatten())
}

/// Encodes `bytes` as Ascii85.
///
/// Returns the encoded text and the length of the input after padding it
/// to a whole number of four-byte blocks.
pub fn encode(bytes: &[u8]) -> (String, usize) {
    let padding = (BYTES_PER_BLOCK - bytes.len() % BYTES_PER_BLOCK)
        % BYTES_PER_BLOCK;
    let output = encode_to_chars(bytes.iter().copied()).collect();
    (output, bytes.len() + padding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_whole_blocks() {
        assert_eq!(encode(b"Man "), ("9jqo^".into(), 4));
        assert_eq!(encode(&[0xff; 4]).0, "s8W-!");
        assert_eq!(encode(b"    ").0, "+<VdL");
    }

    #[test]
    fn encode_trims_padding() {
        assert_eq!(encode(b"A"), ("5l".into(), 4));
        assert_eq!(encode(b"M").0, "9`");
        assert_eq!(encode(b"Man X"), ("9jqo^=9".into(), 8));
        assert_eq!(encode(b"hello").0, "BOu!rDZ");
    }

    #[test]
    fn encode_zero_shorthand() {
        assert_eq!(encode(&[0; 4]), ("z".into(), 4));
        assert_eq!(encode(&[0; 12]).0, "zzz");
        assert_eq!(encode(b"\0\0\0\0Man ").0, "z9jqo^");
    }

    #[test]
    fn short_zero_tail_is_not_shorthand() {
        assert_eq!(encode(&[0]).0, "!!");
        assert_eq!(encode(&[0; 7]).0, "z!!!!");
    }

    #[test]
    fn encode_empty() {
        assert_eq!(encode(b""), (String::new(), 0));
    }

    #[test]
    fn lazy_encoder_matches() {
        let chars = encode_to_chars(b"Man X".iter().copied());
        assert_eq!(chars.collect::<String>(), "9jqo^=9");
    }
}
