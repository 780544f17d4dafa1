// Rust Bech32m Codec Library
// Written in 2023 by
//   Andrew Poelstra <apoelstra@blockstream.com>
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

//! Hex Encoding and Decoding
//!
//! Programs are handed to script builders as lower case hex, two digits
//! per byte with no prefix and no separators.

use std::fmt;

use hex_conservative::{DisplayHex, HexToBytesError};

/// Trait for objects that can be serialized as hex strings.
pub trait ToHex {
    /// Converts to a hexadecimal representation of the object.
    fn to_hex(&self) -> String;
}

/// Trait for objects that can be deserialized from hex strings.
pub trait FromHex: Sized {
    /// Error returned by [`FromHex::from_hex`].
    type Err;

    /// Produces an object from a hex string.
    fn from_hex(s: &str) -> Result<Self, Self::Err>;
}

/// Outputs hex into a [`fmt::Formatter`], honoring width and precision.
pub fn format_hex(data: &[u8], f: &mut fmt::Formatter) -> fmt::Result {
    let prec = f.precision().unwrap_or(2 * data.len());
    let width = f.width().unwrap_or(2 * data.len());
    for _ in (2 * data.len())..width {
        f.write_str("0")?;
    }
    for ch in data.iter().take(prec / 2) {
        write!(f, "{:02x}", *ch)?;
    }
    if prec < 2 * data.len() && prec % 2 == 1 {
        write!(f, "{:x}", data[prec / 2] / 16)?;
    }
    Ok(())
}

impl ToHex for [u8] {
    fn to_hex(&self) -> String {
        self.to_lower_hex_string()
    }
}

impl FromHex for Vec<u8> {
    type Err = HexToBytesError;

    fn from_hex(s: &str) -> Result<Self, Self::Err> {
        <Vec<u8> as hex_conservative::FromHex>::from_hex(s)
    }
}
