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

//! Bytes as strings of `0` and `1`, eight digits per byte.

use super::blocks::blocks;
use super::error::{CodecError, Result};

use alloc::string::String;
use alloc::vec::Vec;

const BITS_PER_BYTE: usize = 8;

/// Writes each byte as eight binary digits, most significant bit first.
pub fn encode(bytes: &[u8]) -> (String, usize) {
    let mut output = String::with_capacity(bytes.len() * BITS_PER_BYTE);
    bytes.iter().for_each(|b| {
        output.extend((0..BITS_PER_BYTE).rev().map(|i| {
            if (b >> i) & 1 == 1 {
                '1'
            } else {
                '0'
            }
        }));
    });
    (output, bytes.len())
}

fn parse_group(group: &[u8]) -> Option<u8> {
    group.iter().try_fold(0_u8, |n, d| match d {
        b'0' => Some(n << 1),
        b'1' => Some((n << 1) | 1),
        _ => None,
    })
}

/// Parses groups of eight binary digits back into bytes.
///
/// The input length must be a multiple of 8.
pub fn decode(bits: &str) -> Result<(Vec<u8>, usize)> {
    let output = blocks(bits.as_bytes(), BITS_PER_BYTE)?
        .map(|group| {
            parse_group(group).ok_or_else(|| {
                CodecError::InvalidBinaryDigit(
                    String::from_utf8_lossy(group).into_owned(),
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((output, bits.len()))
}
