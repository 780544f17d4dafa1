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

//! Encoding of bech32m strings.

use std::fmt;

use bech32::Fe32;

use super::validate;
use super::{create_checksum, fe_to_char, ChecksummedValue, Error, CHECKSUM_LENGTH, MAX_LENGTH, SEP};

/// Encodes a value into a bech32m string of at most [`MAX_LENGTH`] characters.
pub fn encode(value: &ChecksummedValue) -> Result<String, Error> {
    encode_with_limit(value, MAX_LENGTH)
}

/// Encodes a value into a bech32m string of at most `max_len` characters.
///
/// The human-readable part may be given in either case, the output is
/// always lower case.
pub fn encode_with_limit(value: &ChecksummedValue, max_len: usize) -> Result<String, Error> {
    let hrp_len = value.hrp.chars().count();
    let len = hrp_len + value.data.len() + 1 + CHECKSUM_LENGTH;
    validate::check_length(len, max_len)?;
    validate::check_hrp_length(&value.hrp)?;
    validate::check_hrp_chars(&value.hrp)?;
    validate::check_case(&value.hrp)?;

    let hrp = value.hrp.to_ascii_lowercase();
    let checksum = create_checksum(hrp.as_bytes(), &value.data);

    let mut ret = String::with_capacity(len);
    ret.push_str(&hrp);
    ret.push(SEP);
    for fe in value.data.iter().chain(checksum.iter()) {
        ret.push(fe_to_char(*fe).ok_or(Error::OutOfBoundChars(None))?);
    }
    Ok(ret)
}

/// Encodes a bech32m payload to an [fmt::Formatter].
///
/// No validation is done: `hrp` must already be a valid, lower case
/// human-readable part and the result must fit the length limit.
pub fn encode_to_fmt(fmt: &mut fmt::Formatter, hrp: &str, data: &[Fe32]) -> fmt::Result {
    let checksum = create_checksum(hrp.as_bytes(), data);

    fmt.write_str(hrp)?;
    write!(fmt, "{}", SEP)?;
    for fe in data.iter().chain(checksum.iter()) {
        write!(fmt, "{}", fe_to_char(*fe).ok_or(fmt::Error)?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bech32m::decode;

    use std::convert::TryFrom;

    fn value(hrp: &str, values: &[u8]) -> ChecksummedValue {
        ChecksummedValue::from_values(hrp, values).unwrap()
    }

    #[test]
    fn empty_payload() {
        let s = encode(&value("bc", &[])).unwrap();
        assert_eq!(s.len(), 2 + 1 + CHECKSUM_LENGTH);
        assert!(s.starts_with("bc1"));
        assert_eq!(decode(&s).unwrap(), value("bc", &[]));

        assert_eq!(encode(&value("a", &[])).unwrap(), "a1lqfn3a");
        assert_eq!(encode(&value("A", &[])).unwrap(), "a1lqfn3a");
        assert_eq!(encode(&value("?", &[])).unwrap(), "?1v759aa");
    }

    #[test]
    fn longest_string() {
        let hrp = "an83characterlonghumanreadablepartthatcontainsthetheexcludedcharactersbioandnumber1";
        let s = encode(&value(hrp, &[])).unwrap();
        assert_eq!(
            s,
            "an83characterlonghumanreadablepartthatcontainsthetheexcludedcharactersbioandnumber11sg7hg6"
        );
        assert_eq!(s.len(), MAX_LENGTH);

        let data = vec![31; 82];
        let s = encode(&value("1", &data)).unwrap();
        assert_eq!(
            s,
            "11llllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllludsr8"
        );
    }

    #[test]
    fn validation_order() {
        // Length is checked first, even when the hrp is empty.
        assert_eq!(encode(&value("", &[0; 84])), Err(Error::TooLong(91)));
        assert_eq!(encode(&value("", &[])), Err(Error::TooShortHrp));
        // Range is checked before case.
        assert_eq!(
            encode(&value("Ab c", &[])),
            Err(Error::OutOfRangeHrpCharacters("Ab c".to_owned())),
        );
        assert_eq!(encode(&value("Ab", &[])), Err(Error::MixedCase("Ab".to_owned())));
        assert_eq!(
            encode(&value("\u{80}", &[])),
            Err(Error::OutOfRangeHrpCharacters("\u{80}".to_owned())),
        );
    }

    #[test]
    fn custom_limit() {
        let v = value("bc", &[1, 2, 3]);
        assert_eq!(encode_with_limit(&v, 12), Ok(encode(&v).unwrap()));
        assert_eq!(encode_with_limit(&v, 11), Err(Error::TooLong(12)));

        let long = ChecksummedValue::new("bc", vec![Fe32::try_from(5u8).unwrap(); 100]);
        assert_eq!(encode(&long), Err(Error::TooLong(109)));
        assert!(encode_with_limit(&long, 200).is_ok());
    }

    #[test]
    fn to_formatter() {
        struct Wrapper(ChecksummedValue);
        impl fmt::Display for Wrapper {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                encode_to_fmt(f, &self.0.hrp, &self.0.data)
            }
        }

        let v = value("tb", &[0, 14, 20, 15, 7, 13, 26, 0, 25, 18, 6, 11, 13, 8, 21]);
        assert_eq!(Wrapper(v.clone()).to_string(), encode(&v).unwrap());
    }
}
