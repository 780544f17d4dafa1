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

//! Decoding of bech32m strings.

use super::validate;
use super::{char_to_fe, verify_checksum, ChecksummedValue, Error, CHECKSUM_LENGTH, MAX_LENGTH};

/// Decodes a bech32m string of at most [`MAX_LENGTH`] characters.
pub fn decode(s: &str) -> Result<ChecksummedValue, Error> {
    decode_with_limit(s, MAX_LENGTH)
}

/// Decodes a bech32m string of at most `max_len` characters into its lower
/// case human-readable part and its payload, with the checksum removed.
pub fn decode_with_limit(s: &str, max_len: usize) -> Result<ChecksummedValue, Error> {
    validate::check_length(s.chars().count(), max_len)?;
    validate::check_case(s)?;

    let lower = s.to_ascii_lowercase();
    let sep_pos = validate::find_separator(&lower)?;
    let (hrp, data) = lower.split_at(sep_pos);
    let data = &data[1..]; // Skip the separator.

    validate::check_checksum_length(data)?;
    validate::check_hrp_length(hrp)?;
    validate::check_hrp_chars(hrp)?;

    let mut values = data
        .chars()
        .map(|c| char_to_fe(c).ok_or(Error::OutOfBoundChars(Some(c))))
        .collect::<Result<Vec<_>, Error>>()?;

    if !verify_checksum(hrp.as_bytes(), &values) {
        return Err(Error::InvalidChecksum);
    }

    // Remove checksum from data payload
    values.truncate(values.len() - CHECKSUM_LENGTH);

    Ok(ChecksummedValue { hrp: hrp.to_owned(), data: values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bech32m::encode;

    #[test]
    fn bip_350_valid_strings() {
        let valid = [
            "A1LQFN3A",
            "a1lqfn3a",
            "an83characterlonghumanreadablepartthatcontainsthetheexcludedcharactersbioandnumber11sg7hg6",
            "abcdef1l7aum6echk45nj3s0wdvt2fg8x9yrzpqzd3ryx",
            "11llllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllludsr8",
            "split1checkupstagehandshakeupstreamerranterredcaperredlc445v",
            "?1v759aa",
        ];
        for s in valid.iter() {
            let value = decode(s).unwrap_or_else(|e| panic!("{} did not decode: {}", s, e));
            assert_eq!(encode(&value).unwrap(), s.to_lowercase());
        }
    }

    #[test]
    fn decoded_parts() {
        let value = decode("abcdef1l7aum6echk45nj3s0wdvt2fg8x9yrzpqzd3ryx").unwrap();
        assert_eq!(value.hrp, "abcdef");
        assert_eq!(value.values(), (0..32).rev().collect::<Vec<u8>>());

        let value = decode("11llllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllllludsr8").unwrap();
        assert_eq!(value.hrp, "1");
        assert_eq!(value.values(), vec![31; 82]);
    }

    #[test]
    fn upper_case_decodes_to_lower_hrp() {
        let lower = decode("abcdef1l7aum6echk45nj3s0wdvt2fg8x9yrzpqzd3ryx").unwrap();
        let upper = decode("ABCDEF1L7AUM6ECHK45NJ3S0WDVT2FG8X9YRZPQZD3RYX").unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn custom_limit() {
        let s = "abcdef1l7aum6echk45nj3s0wdvt2fg8x9yrzpqzd3ryx";
        assert_eq!(decode_with_limit(s, s.len() - 1), Err(Error::TooLong(s.len())));
        assert!(decode_with_limit(s, s.len()).is_ok());
    }

    macro_rules! check_invalid_strings {
        ($($test_name:ident, $string:expr, $err:expr);* $(;)?) => {
            $(
                #[test]
                fn $test_name() {
                    assert_eq!(decode($string), Err($err), "input {:?}", $string);
                }
            )*
        }
    }
    check_invalid_strings! {
        invalid_hrp_space, "\u{20}1xj0phk", Error::OutOfRangeHrpCharacters(" ".to_owned());
        invalid_hrp_del, "\u{7F}1g6xzxy", Error::OutOfRangeHrpCharacters("\u{7F}".to_owned());
        invalid_hrp_non_ascii, "\u{80}1vctc34", Error::OutOfRangeHrpCharacters("\u{80}".to_owned());
        invalid_too_long,
            "an84characterslonghumanreadablepartthatcontainsthetheexcludedcharactersbioandnumber11d6pts4",
            Error::TooLong(91);
        invalid_no_separator, "qyrz8wqd2c9m", Error::InvalidSeparator;
        invalid_empty_hrp, "1qyrz8wqd2c9m", Error::TooShortHrp;
        invalid_data_char_b, "y1b0jsk6g", Error::OutOfBoundChars(Some('b'));
        invalid_data_char_i, "lt1igcx5c0", Error::OutOfBoundChars(Some('i'));
        invalid_short_checksum, "in1muywd", Error::TooShortChecksum;
        invalid_checksum_char_i, "mm1crxm3i", Error::OutOfBoundChars(Some('i'));
        invalid_checksum_char_o, "au1s5cgom", Error::OutOfBoundChars(Some('o'));
        invalid_checksum, "M1VUXWEZ", Error::InvalidChecksum;
        invalid_empty_hrp_checksum_only, "16plkw9", Error::TooShortHrp;
        invalid_empty_hrp_short_data, "1p2gdwpf", Error::TooShortHrp;
        invalid_upper_case_data_char, "ABC1DEFGOH", Error::OutOfBoundChars(Some('o'));
        invalid_arrow_char, "abc1\u{2192}axkwrx", Error::OutOfBoundChars(Some('\u{2192}'));
        invalid_latin_char, "de1lg7wt\u{ff}", Error::OutOfBoundChars(Some('\u{ff}'));
        invalid_two_chars_after_separator, "bc1p2", Error::TooShortChecksum;
        invalid_mixed_case, "A1lqfn3a", Error::MixedCase("A1lqfn3a".to_owned());
        invalid_only_separator, "1", Error::TooShortChecksum;
        invalid_empty, "", Error::InvalidSeparator;
        // The first failing rule wins.
        invalid_mixed_case_non_ascii, "\u{c9}a1qqqqqq", Error::MixedCase("\u{c9}a1qqqqqq".to_owned());
        invalid_mixed_case_before_separator, "Aqyrz8wqd2c9m", Error::MixedCase("Aqyrz8wqd2c9m".to_owned());
        invalid_checksum_length_before_hrp, "1qqq", Error::TooShortChecksum;
        invalid_hrp_before_data_chars, " 1bbbbbb", Error::OutOfRangeHrpCharacters(" ".to_owned());
    }

    #[test]
    fn every_substitution_breaks_the_checksum() {
        let s = "abcdef1l7aum6echk45nj3s0wdvt2fg8x9yrzpqzd3ryx";
        let sep = s.rfind('1').unwrap();
        for i in sep + 1..s.len() {
            for &c in crate::bech32m::CHARSET.iter() {
                if s[i..].starts_with(c) {
                    continue;
                }
                let mut mutated = s.to_owned();
                mutated.replace_range(i..i + 1, &c.to_string());
                assert_eq!(decode(&mutated), Err(Error::InvalidChecksum), "{}", mutated);
            }
        }
    }
}
