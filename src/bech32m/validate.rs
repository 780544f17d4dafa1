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

//! Validation rules for bech32m strings.
//!
//! Each rule is a standalone check. [`super::decode`] and [`super::encode`]
//! apply them in a fixed order, so a string breaking several rules always
//! reports the same error.

use super::{Error, CHECKSUM_LENGTH, SEP};

/// Lowest code point allowed in the human-readable part.
pub const HRP_CHAR_MIN: u32 = 33;

/// Highest code point allowed in the human-readable part.
pub const HRP_CHAR_MAX: u32 = 126;

/// Fails with [`Error::TooLong`] if `len` exceeds `max_len`.
pub fn check_length(len: usize, max_len: usize) -> Result<(), Error> {
    if len > max_len {
        Err(Error::TooLong(len))
    } else {
        Ok(())
    }
}

/// Whether `s` differs from both its lower case and its upper case form.
pub fn is_mixed_case(s: &str) -> bool {
    s.to_lowercase() != s && s.to_uppercase() != s
}

/// Fails with [`Error::MixedCase`] if `s` is not single-case.
pub fn check_case(s: &str) -> Result<(), Error> {
    if is_mixed_case(s) {
        Err(Error::MixedCase(s.to_owned()))
    } else {
        Ok(())
    }
}

/// Returns the byte index of the last separator in `s`.
pub fn find_separator(s: &str) -> Result<usize, Error> {
    s.rfind(SEP).ok_or(Error::InvalidSeparator)
}

/// Fails with [`Error::TooShortChecksum`] if `data` cannot hold a checksum.
pub fn check_checksum_length(data: &str) -> Result<(), Error> {
    if data.chars().count() < CHECKSUM_LENGTH {
        Err(Error::TooShortChecksum)
    } else {
        Ok(())
    }
}

/// Fails with [`Error::TooShortHrp`] if the human-readable part is empty.
pub fn check_hrp_length(hrp: &str) -> Result<(), Error> {
    if hrp.is_empty() {
        Err(Error::TooShortHrp)
    } else {
        Ok(())
    }
}

/// Whether `c` may appear in a human-readable part.
pub fn is_hrp_char(c: char) -> bool {
    let c = u32::from(c);
    c >= HRP_CHAR_MIN && c <= HRP_CHAR_MAX
}

/// Fails with [`Error::OutOfRangeHrpCharacters`] unless every character of
/// the human-readable part passes [`is_hrp_char`].
pub fn check_hrp_chars(hrp: &str) -> Result<(), Error> {
    if hrp.chars().all(is_hrp_char) {
        Ok(())
    } else {
        Err(Error::OutOfRangeHrpCharacters(hrp.to_owned()))
    }
}
