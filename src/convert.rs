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

//! # Bit Regrouping
//!
//! Conversion between sequences of `from_bits`-wide and `to_bits`-wide
//! groups, most significant bit first. Addresses use it to move between
//! program bytes and 5-bit bech32m symbols.
//!

use std::fmt;

/// Regroups `data`, whose values are `from_bits` wide, into `to_bits`-wide values.
///
/// With `pad`, a final incomplete group is padded with zero bits and emitted.
/// Without it, a final incomplete group is dropped as is: it is not checked
/// to be shorter than `from_bits` nor to be all zeros. Use [`check_padding`]
/// for that.
///
/// Both widths must be between 1 and 8.
pub fn convert_bits(
    data: &[u8],
    from_bits: u32,
    to_bits: u32,
    pad: bool,
) -> Result<Vec<u8>, ConvertBitsError> {
    convert_bits_iter(data.iter().copied(), from_bits, to_bits, pad)
}

/// Same as [`convert_bits`], reading the input values from an iterator.
///
/// Lets callers holding [`bech32::Fe32`] symbols regroup them without
/// collecting them into a byte vector first.
pub fn convert_bits_iter<I>(
    data: I,
    from_bits: u32,
    to_bits: u32,
    pad: bool,
) -> Result<Vec<u8>, ConvertBitsError>
where
    I: IntoIterator<Item = u8>,
{
    if from_bits == 0 || from_bits > 8 || to_bits == 0 || to_bits > 8 {
        return Err(ConvertBitsError::InvalidBitWidth);
    }

    let data = data.into_iter();
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let maxv: u32 = (1 << to_bits) - 1;
    // Only the bits not yet emitted need to be kept around.
    let max_acc: u32 = (1 << (from_bits + to_bits - 1)) - 1;
    let mut ret = Vec::with_capacity(
        (data.size_hint().0 * from_bits as usize + to_bits as usize - 1) / to_bits as usize,
    );
    for value in data {
        let v = u32::from(value);
        if (v >> from_bits) != 0 {
            return Err(ConvertBitsError::InvalidValue(value));
        }
        acc = ((acc << from_bits) | v) & max_acc;
        bits += from_bits;
        while bits >= to_bits {
            bits -= to_bits;
            ret.push(((acc >> bits) & maxv) as u8);
        }
    }
    if pad && bits > 0 {
        ret.push(((acc << (to_bits - bits)) & maxv) as u8);
    }
    Ok(ret)
}

/// Checks the leftover bits [`convert_bits`] drops when regrouping `data`
/// without padding.
///
/// From BIP-173:
/// > Re-arrange those bits into groups of 8 bits. Any incomplete group at the
/// > end MUST be 4 bits or less, MUST be all zeroes, and is discarded.
///
/// Generalized, the incomplete group must be shorter than `from_bits` and all
/// zero. Widths outside 1 to 8 are rejected by [`convert_bits`] and are not
/// looked at here.
pub fn check_padding(data: &[u8], from_bits: u32, to_bits: u32) -> Result<(), PaddingError> {
    match data.last() {
        None => Ok(()), // Empty data implies correct padding.
        Some(&last) => check_final_group(data.len(), last, from_bits, to_bits),
    }
}

/// The padding rule of [`check_padding`] for `len` values ending in `last`.
pub(crate) fn check_final_group(
    len: usize,
    last: u8,
    from_bits: u32,
    to_bits: u32,
) -> Result<(), PaddingError> {
    if from_bits == 0 || from_bits > 8 || to_bits == 0 || to_bits > 8 {
        return Ok(());
    }

    let padding_len = (len as u64 * u64::from(from_bits) % u64::from(to_bits)) as u32;
    if padding_len >= from_bits {
        return Err(PaddingError::TooMuch);
    }

    if u32::from(last) & ((1 << padding_len) - 1) != 0 {
        Err(PaddingError::NonZero)
    } else {
        Ok(())
    }
}

/// Errors regrouping bits.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConvertBitsError {
    /// An input value does not fit in the source bit width.
    InvalidValue(u8),
    /// A bit width is not between 1 and 8.
    InvalidBitWidth,
}

impl fmt::Display for ConvertBitsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ConvertBitsError::InvalidValue(v) => write!(f, "value {} does not fit the source bit width", v),
            ConvertBitsError::InvalidBitWidth => write!(f, "bit widths must be between 1 and 8"),
        }
    }
}

impl std::error::Error for ConvertBitsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            ConvertBitsError::InvalidValue(_) | ConvertBitsError::InvalidBitWidth => None,
        }
    }
}

/// Error validating the padding bits left over by an unpadded conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PaddingError {
    /// The data payload has too many bits of padding.
    TooMuch,
    /// The data payload is padded with non-zero bits.
    NonZero,
}

impl fmt::Display for PaddingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PaddingError::TooMuch => write!(f, "the data payload has too many bits of padding"),
            PaddingError::NonZero => write!(f, "the data payload is padded with non-zero bits"),
        }
    }
}

impl std::error::Error for PaddingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            PaddingError::TooMuch | PaddingError::NonZero => None,
        }
    }
}
