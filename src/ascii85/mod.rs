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

//! Ascii85: four bytes as five base-85 digits drawn from `!` through `u`.
//!
//! The encoder follows Adobe's variant, where a block of four zero bytes is
//! written as `z`. The decoder additionally accepts btoa's `y` shorthand for
//! four spaces. Input whose length is not a multiple of four is padded with
//! zero bytes, and the digits corresponding to the padding are dropped from
//! the output; the decoder reverses this by padding with `u`.

pub mod decode;
pub mod encode;

pub use decode::decode;
pub use encode::{encode, encode_to_chars};

const BYTES_PER_BLOCK: usize = 4;
const DIGITS_PER_BLOCK: usize = 5;
const RADIX: u32 = 85;

const FIRST_CHAR: u8 = b'!';

const ZERO_SHORTHAND: u8 = b'z';
const ZERO_EXPANSION: &[u8; DIGITS_PER_BLOCK] = b"!!!!!";

const SPACE_SHORTHAND: u8 = b'y';
const SPACE_EXPANSION: &[u8; DIGITS_PER_BLOCK] = b"+<VdL";

mod digit {
    use super::{FIRST_CHAR, RADIX};

    /// A base-85 digit. Always less than 85.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Digit(u8);

    impl Digit {
        /// The digit written as `u`, used to pad the final group.
        pub const MAX: Self = Self(RADIX as u8 - 1);

        pub fn new(x: u8) -> Option<Self> {
            (u32::from(x) < RADIX).then(|| Self(x))
        }

        pub fn from_remainder(n: u32) -> Self {
            Self((n % RADIX) as u8)
        }

        pub fn from_ascii(c: u8) -> Option<Self> {
            c.checked_sub(FIRST_CHAR).and_then(Self::new)
        }

        pub fn to_ascii(self) -> u8 {
            self.0 + FIRST_CHAR
        }
    }

    impl From<Digit> for u8 {
        fn from(d: Digit) -> u8 {
            d.0
        }
    }
}

use digit::Digit;

#[cfg(test)]
mod tests {
    use super::Digit;

    #[test]
    fn digit_alphabet_bounds() {
        assert_eq!(Digit::from_ascii(b'!').map(u8::from), Some(0));
        assert_eq!(Digit::from_ascii(b'u'), Some(Digit::MAX));
        assert_eq!(Digit::from_ascii(b'v'), None);
        assert_eq!(Digit::from_ascii(b' '), None);
        assert_eq!(Digit::MAX.to_ascii(), b'u');
        assert_eq!(Digit::from_remainder(85 + 3).to_ascii(), b'$');
    }
}
