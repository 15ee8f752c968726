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

//! The error type shared by every transcoder.

use alloc::string::String;
use core::str::Utf8Error;

/// An error encountered while encoding, decoding, or resolving a codec.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// A character has no Morse representation.
    #[error("unencodable character {0:?}")]
    UnencodableCharacter(char),
    /// A token is not a known Morse pattern.
    #[error("could not decode {0:?} as morse")]
    UndecodablePattern(String),
    /// The input cannot be divided into blocks of `size`.
    #[error("cannot divide {len} units into blocks of size {size}")]
    SizeMismatch {
        /// The required block size.
        size: usize,
        /// The length of the input.
        len: usize,
    },
    /// An 8-character group contained something other than `0` or `1`.
    #[error("invalid binary digits in {0:?}")]
    InvalidBinaryDigit(String),
    /// A run of Ascii85 characters before a `y` or `z` shorthand was not a
    /// whole number of 5-character groups.
    #[error("shorthand found within a block: {0:?}")]
    MalformedBlock(String),
    /// An Ascii85 group decoded to a value that does not fit in 32 bits.
    #[error("invalid block {0:?}")]
    InvalidBlock(String),
    /// No codec is registered under this name.
    #[error("unknown codec: {0:?}")]
    UnknownCodec(String),
    /// A text-based codec was handed bytes that are not UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}

/// Alias of <code>[Result]\<T, [CodecError]></code>.
pub type Result<T> = core::result::Result<T, CodecError>;
