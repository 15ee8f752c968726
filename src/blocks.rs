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

//! Splitting buffers into fixed-size blocks.

use super::error::{CodecError, Result};

use core::iter::FusedIterator;
use core::slice::ChunksExact;

/// Iterator returned by [`blocks`].
///
/// Cloning a `Blocks` restarts iteration from the clone's position.
#[derive(Clone, Debug)]
pub struct Blocks<'a, T>(ChunksExact<'a, T>);

impl<'a, T> Iterator for Blocks<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.0.fold(init, f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Blocks<'_, T> {}

impl<T> FusedIterator for Blocks<'_, T> {}

/// Splits `data` into consecutive blocks of exactly `size` elements.
///
/// The length check happens up front: if `data.len()` is not a multiple of
/// `size` (or `size` is zero), [`CodecError::SizeMismatch`] is returned and
/// no blocks are produced.
pub fn blocks<T>(data: &[T], size: usize) -> Result<Blocks<'_, T>> {
    if size == 0 || data.len() % size != 0 {
        return Err(CodecError::SizeMismatch {
            size,
            len: data.len(),
        });
    }
    Ok(Blocks(data.chunks_exact(size)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn splits_in_order() {
        let chunks: Vec<_> = blocks(b"abcdef", 2).unwrap().collect();
        assert_eq!(chunks, [&b"ab"[..], &b"cd"[..], &b"ef"[..]]);
    }

    #[test]
    fn empty_input_has_no_blocks() {
        assert_eq!(blocks::<u8>(&[], 4).unwrap().count(), 0);
    }

    #[test]
    fn misaligned_length_fails_before_iterating() {
        match blocks(b"abcde", 2) {
            Err(CodecError::SizeMismatch { size: 2, len: 5 }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(
            blocks(b"ab", 0),
            Err(CodecError::SizeMismatch { size: 0, .. })
        ));
    }

    #[test]
    fn clone_restarts() {
        let mut iter = blocks(b"aabbcc", 2).unwrap();
        iter.next();
        let rest = iter.clone();
        assert_eq!(iter.len(), 2);
        assert_eq!(rest.collect::<Vec<_>>(), iter.collect::<Vec<_>>());
    }
}
