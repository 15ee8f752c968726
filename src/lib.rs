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

//! Reversible transcoders for Morse code, binary digits, URL
//! percent-encoding, XML entities, and Ascii85, each reachable by name
//! through [`resolve`].
//!
//! ```
//! use hackercodecs::resolve;
//!
//! let codec = resolve("ascii85").unwrap();
//! let (encoded, _) = codec.encode(b"Man ").unwrap();
//! assert_eq!(encoded, b"9jqo^");
//! assert_eq!(codec.decode(&encoded).unwrap().0, b"Man ");
//! ```
//!
//! Every transform returns its output together with the length of the
//! input it consumed. The individual modules expose the same transforms
//! with text or byte types as appropriate.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

pub mod ascii85;
pub mod binary;
pub mod blocks;
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
pub mod entity;
pub mod error;
pub mod morse;
pub mod registry;
pub mod url;

pub use blocks::blocks;
pub use error::{CodecError, Result};
pub use registry::{resolve, Codec, ErrorMode};
