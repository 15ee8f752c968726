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

//! Looking up codecs by name.
//!
//! Every codec is reachable through [`resolve`], which maps one of the names
//! `morse`, `bin`, `url`, `entity`, or `ascii85` to a [`Codec`]. A codec
//! transforms whole byte buffers; codecs that operate on text require their
//! input to be UTF-8.

use super::error::{CodecError, Result};
use super::{ascii85, binary, morse, url};

#[cfg(feature = "std")]
use super::entity;

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter};
use core::str::{self, FromStr};
use log::{debug, trace};

/// How a codec reacts to invalid input.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorMode {
    /// Fail on the first invalid unit without producing any output.
    #[default]
    Strict,
}

/// One of the available transcoders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Codec {
    /// Morse code; see [`morse`].
    Morse,
    /// Eight binary digits per byte; see [`binary`].
    Bin,
    /// Percent-encoding; see [`url`].
    Url,
    /// XML entity escaping; see [`entity`].
    #[cfg(feature = "std")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
    Entity,
    /// Ascii85; see [`ascii85`].
    Ascii85,
}

fn into_bytes<T>((output, len): (T, usize)) -> (Vec<u8>, usize)
where
    T: Into<Vec<u8>>,
{
    (output.into(), len)
}

impl Codec {
    /// Every registered codec.
    #[cfg(feature = "std")]
    pub const ALL: &'static [Self] = &[
        Self::Morse,
        Self::Bin,
        Self::Url,
        Self::Entity,
        Self::Ascii85,
    ];

    /// Every registered codec.
    #[cfg(not(feature = "std"))]
    pub const ALL: &'static [Self] =
        &[Self::Morse, Self::Bin, Self::Url, Self::Ascii85];

    /// The name this codec is registered under.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Morse => "morse",
            Self::Bin => "bin",
            Self::Url => "url",
            #[cfg(feature = "std")]
            Self::Entity => "entity",
            Self::Ascii85 => "ascii85",
        }
    }

    /// Encodes `input`, returning the output and the amount of input
    /// consumed.
    pub fn encode(self, input: &[u8]) -> Result<(Vec<u8>, usize)> {
        self.encode_with(input, ErrorMode::default())
    }

    /// Decodes `input`, returning the output and the amount of input
    /// consumed.
    pub fn decode(self, input: &[u8]) -> Result<(Vec<u8>, usize)> {
        self.decode_with(input, ErrorMode::default())
    }

    /// Like [`Self::encode`], but with an explicit [`ErrorMode`].
    pub fn encode_with(
        self,
        input: &[u8],
        mode: ErrorMode,
    ) -> Result<(Vec<u8>, usize)> {
        let ErrorMode::Strict = mode;
        trace!("{}: encoding {} bytes", self, input.len());
        Ok(match self {
            Self::Morse => {
                into_bytes(morse::encode(str::from_utf8(input)?)?)
            }
            Self::Bin => into_bytes(binary::encode(input)),
            Self::Url => into_bytes(url::encode(input)),
            #[cfg(feature = "std")]
            Self::Entity => {
                into_bytes(entity::encode(str::from_utf8(input)?))
            }
            Self::Ascii85 => into_bytes(ascii85::encode(input)),
        })
    }

    /// Like [`Self::decode`], but with an explicit [`ErrorMode`].
    pub fn decode_with(
        self,
        input: &[u8],
        mode: ErrorMode,
    ) -> Result<(Vec<u8>, usize)> {
        let ErrorMode::Strict = mode;
        trace!("{}: decoding {} bytes", self, input.len());
        Ok(match self {
            Self::Morse => {
                into_bytes(morse::decode(str::from_utf8(input)?)?)
            }
            Self::Bin => binary::decode(str::from_utf8(input)?)?,
            Self::Url => url::decode(str::from_utf8(input)?),
            #[cfg(feature = "std")]
            Self::Entity => {
                into_bytes(entity::decode(str::from_utf8(input)?))
            }
            Self::Ascii85 => ascii85::decode(input)?,
        })
    }
}

impl Display for Codec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Codec {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        resolve(s)
    }
}

/// Finds the codec registered under `name`. Names are case-sensitive.
pub fn resolve(name: &str) -> Result<Codec> {
    Codec::ALL
        .iter()
        .copied()
        .find(|codec| codec.name() == name)
        .ok_or_else(|| {
            debug!("no codec registered as {:?}", name);
            CodecError::UnknownCodec(name.to_string())
        })
}
