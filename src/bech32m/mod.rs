// Rust Bech32m Codec Library
// Written in 2026 by
//   The Elements developers
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//

//! # Bech32m
//!
//! The checksummed base32 format of [BIP-350].
//!
//! A bech32m string is at most [`MAX_LENGTH`] characters long and consists of:
//!
//! - The human-readable part, 1 or more US-ASCII characters in the range
//!   `[33, 126]`.
//! - The separator, which is always "1". The *last* "1" of the string is the
//!   separator, so the human-readable part may itself contain ones.
//! - The data part, made of characters from [`CHARSET`], whose last
//!   [`CHECKSUM_LENGTH`] characters are the checksum.
//!
//! The whole string is either lower case or upper case, never both.
//! Decoding always returns a lower case human-readable part.
//!
//! [BIP-350]: <https://github.com/bitcoin/bips/blob/master/bip-0350.mediawiki>

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use bech32::Fe32;

mod checksum;
mod decode;
mod encode;
pub mod validate;

pub use self::checksum::{create_checksum, hrp_expand, polymod, verify_checksum};
pub use self::decode::{decode, decode_with_limit};
pub use self::encode::{encode, encode_to_fmt, encode_with_limit};

/// Human-readable part and data part separator.
pub const SEP: char = '1';

/// Default maximum length of an encoded string, in characters.
pub const MAX_LENGTH: usize = 90;

/// Number of checksum characters at the end of every encoded string.
pub const CHECKSUM_LENGTH: usize = 6;

/// Residue of a valid bech32m checksum.
pub const BECH32M_CONST: u32 = 0x2bc8_30a3;

/// Generator coefficients
pub const GEN: [u32; 5] = [
    0x3b6a_57b2,
    0x2650_8e6d,
    0x1ea1_19fa,
    0x3d42_33dd,
    0x2a14_62b3,
];

/// Encoding character set. Maps data value -> char
pub const CHARSET: [char; 32] = [
    'q', 'p', 'z', 'r', 'y', '9', 'x', '8', 'g', 'f', '2', 't', 'v', 'd', 'w', '0', 's', '3', 'j',
    'n', '5', '4', 'k', 'h', 'c', 'e', '6', 'm', 'u', 'a', '7', 'l',
];

// Reverse character set. Maps ASCII byte -> CHARSET index on [0,31]
const CHARSET_REV: [i8; 128] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    15, -1, 10, 17, 21, 20, 26, 30, 7, 5, -1, -1, -1, -1, -1, -1, -1, 29, -1, 24, 13, 25, 9, 8, 23,
    -1, 18, 22, 31, 27, 19, -1, 1, 0, 3, 16, 11, 28, 12, 14, 6, 4, 2, -1, -1, -1, -1, -1, -1, 29,
    -1, 24, 13, 25, 9, 8, 23, -1, 18, 22, 31, 27, 19, -1, 1, 0, 3, 16, 11, 28, 12, 14, 6, 4, 2, -1,
    -1, -1, -1, -1,
];

/// Looks up the value of a data character, `None` if it is not in [`CHARSET`].
///
/// Upper case letters map to the same value as their lower case form.
pub fn char_to_fe(c: char) -> Option<Fe32> {
    if !c.is_ascii() {
        return None;
    }
    // c < 128 since it is ASCII, CHARSET_REV.len() == 128
    let num_value = CHARSET_REV[c as usize];
    if num_value < 0 {
        return None;
    }
    Fe32::try_from(num_value as u8).ok()
}

/// Looks up the character of a data value, `None` if it has no character.
pub fn fe_to_char(fe: Fe32) -> Option<char> {
    CHARSET.get(usize::from(fe.to_u8())).copied()
}

/// The bech32m checksum algorithm.
///
/// Carries the same constants as this module so they can be plugged into
/// the [`bech32`] crate's generic checksum engine.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bech32m {}

impl bech32::Checksum for Bech32m {
    type MidstateRepr = u32;
    const CHECKSUM_LENGTH: usize = CHECKSUM_LENGTH;
    const GENERATOR_SH: [u32; 5] = GEN;
    const TARGET_RESIDUE: u32 = BECH32M_CONST;

    const CODE_LENGTH: usize = 1023;
}

/// A human-readable part together with its (unchecksummed) payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksummedValue {
    /// The human-readable part.
    pub hrp: String,
    /// The payload, one 5-bit symbol per data character.
    pub data: Vec<Fe32>,
}

impl ChecksummedValue {
    /// Creates a value from a human-readable part and a payload.
    pub fn new<S: Into<String>>(hrp: S, data: Vec<Fe32>) -> ChecksummedValue {
        ChecksummedValue { hrp: hrp.into(), data }
    }

    /// Creates a value from raw symbol values, each of which must be below 32.
    pub fn from_values<S: Into<String>>(hrp: S, values: &[u8]) -> Result<ChecksummedValue, Error> {
        let data = values
            .iter()
            .map(|&v| Fe32::try_from(v).map_err(|_| Error::OutOfBoundChars(None)))
            .collect::<Result<Vec<Fe32>, Error>>()?;
        Ok(ChecksummedValue::new(hrp, data))
    }

    /// The payload as raw symbol values on `[0, 31]`.
    pub fn values(&self) -> Vec<u8> {
        self.data.iter().map(|fe| fe.to_u8()).collect()
    }
}

/// Types which convert to and from a bech32m string.
pub trait StringCodec: Sized {
    /// Error returned by both directions.
    type Error;

    /// Encodes `self`, failing if the result would exceed `max_len` characters.
    fn encode_with_limit(&self, max_len: usize) -> Result<String, Self::Error>;

    /// Decodes a string of at most `max_len` characters.
    fn decode_with_limit(s: &str, max_len: usize) -> Result<Self, Self::Error>;

    /// Encodes `self` with the default [`MAX_LENGTH`].
    fn encode(&self) -> Result<String, Self::Error> { self.encode_with_limit(MAX_LENGTH) }

    /// Decodes a string with the default [`MAX_LENGTH`].
    fn decode(s: &str) -> Result<Self, Self::Error> { Self::decode_with_limit(s, MAX_LENGTH) }
}

impl StringCodec for ChecksummedValue {
    type Error = Error;

    fn encode_with_limit(&self, max_len: usize) -> Result<String, Error> {
        encode_with_limit(self, max_len)
    }

    fn decode_with_limit(s: &str, max_len: usize) -> Result<ChecksummedValue, Error> {
        decode_with_limit(s, max_len)
    }
}

impl FromStr for ChecksummedValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<ChecksummedValue, Error> { decode(s) }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ChecksummedValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match encode(self) {
            Ok(s) => serializer.serialize_str(&s),
            Err(e) => Err(serde::ser::Error::custom(e)),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ChecksummedValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        decode(&s).map_err(serde::de::Error::custom)
    }
}

/// Errors encoding or decoding a bech32m string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The (resulting) string is longer than allowed.
    TooLong(usize),
    /// The human-readable part is empty.
    TooShortHrp,
    /// The human-readable part contains characters outside `[33, 126]`.
    OutOfRangeHrpCharacters(String),
    /// The string mixes upper and lower case.
    MixedCase(String),
    /// The string does not contain the separator character.
    InvalidSeparator,
    /// Fewer than [`CHECKSUM_LENGTH`] characters follow the separator.
    TooShortChecksum,
    /// A data character is not in [`CHARSET`]; `None` for a symbol without
    /// a character.
    OutOfBoundChars(Option<char>),
    /// The checksum does not match the rest of the data.
    InvalidChecksum,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::TooLong(len) => write!(f, "string is too long ({} characters)", len),
            Error::TooShortHrp => write!(f, "the human-readable part is empty"),
            Error::OutOfRangeHrpCharacters(ref hrp) => {
                write!(f, "out-of-range characters in human-readable part \"{}\"", hrp)
            }
            Error::MixedCase(ref s) => write!(f, "mixed-case strings not allowed: \"{}\"", s),
            Error::InvalidSeparator => write!(f, "missing human-readable separator, \"{}\"", SEP),
            Error::TooShortChecksum => write!(f, "the checksum is shorter than {} characters", CHECKSUM_LENGTH),
            Error::OutOfBoundChars(Some(c)) => write!(f, "out-of-bounds character {:?}", c),
            Error::OutOfBoundChars(None) => write!(f, "out-of-bounds character"),
            Error::InvalidChecksum => write!(f, "invalid checksum"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::TooLong(_)
            | Error::TooShortHrp
            | Error::OutOfRangeHrpCharacters(_)
            | Error::MixedCase(_)
            | Error::InvalidSeparator
            | Error::TooShortChecksum
            | Error::OutOfBoundChars(_)
            | Error::InvalidChecksum => None,
        }
    }
}
