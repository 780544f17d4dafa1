// Rust Bech32m Codec Library
// Written by
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

// This file is an adaptation of the bech32 crate with the following
// license notice:
//
// Copyright (c) 2017 Clark Moody
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The BCH checksum over GF(32) used by bech32m.

use std::convert::TryFrom;

use bech32::Fe32;

use super::{BECH32M_CONST, CHECKSUM_LENGTH, GEN};

/// Computes the checksum residue of a sequence of 5-bit values.
///
/// The accumulator is masked to 25 bits before every shift, so no
/// intermediate value exceeds 30 bits.
pub fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    let mut b: u32;
    for v in values {
        b = chk >> 25;
        chk = (chk & 0x1ff_ffff) << 5 ^ u32::from(*v);
        for (i, gen) in GEN.iter().enumerate() {
            if (b >> i) & 1 == 1 {
                chk ^= gen;
            }
        }
    }
    chk
}

/// Expands the human-readable part into the values fed to [`polymod`]:
/// the high 3 bits of every byte, a zero, then the low 5 bits of every byte.
pub fn hrp_expand(hrp: &[u8]) -> Vec<u8> {
    let mut v = Vec::with_capacity(hrp.len() * 2 + 1);
    for b in hrp {
        v.push(*b >> 5);
    }
    v.push(0);
    for b in hrp {
        v.push(*b & 0x1f);
    }
    v
}

/// Computes the checksum of `data` under the (lower case) human-readable part.
pub fn create_checksum(hrp: &[u8], data: &[Fe32]) -> [Fe32; CHECKSUM_LENGTH] {
    let mut values = hrp_expand(hrp);
    values.extend(data.iter().map(|fe| fe.to_u8()));
    // Pad with 6 zeros
    values.extend_from_slice(&[0; CHECKSUM_LENGTH]);
    let plm = polymod(&values) ^ BECH32M_CONST;

    let mut checksum = [Fe32::Q; CHECKSUM_LENGTH];
    for (p, fe) in checksum.iter_mut().enumerate() {
        let value = (plm >> (5 * (CHECKSUM_LENGTH - 1 - p))) & 0x1f;
        *fe = Fe32::try_from(value as u8).expect("masked to 5 bits");
    }
    checksum
}

/// Checks `data`, which ends with its checksum, against the human-readable part.
pub fn verify_checksum(hrp: &[u8], data: &[Fe32]) -> bool {
    let mut exp = hrp_expand(hrp);
    exp.extend(data.iter().map(|fe| fe.to_u8()));
    polymod(&exp) == BECH32M_CONST
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bech32m::{char_to_fe, fe_to_char, Bech32m};

    use bech32::primitives::checksum::Engine;
    use bech32::Hrp;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn fes(s: &str) -> Vec<Fe32> {
        s.chars().map(|c| char_to_fe(c).expect("valid char")).collect()
    }

    fn chars(fes: &[Fe32]) -> String {
        fes.iter().map(|fe| fe_to_char(*fe).unwrap()).collect()
    }

    #[test]
    fn hrp_expansion() {
        assert_eq!(hrp_expand(b"bc"), vec![3, 3, 0, 2, 3]);
        assert_eq!(hrp_expand(b""), vec![0]);
        assert_eq!(hrp_expand(b"?"), vec![1, 0, 31]);
    }

    #[test]
    fn empty_payload_checksums() {
        assert_eq!(chars(&create_checksum(b"a", &[])), "lqfn3a");
        assert_eq!(chars(&create_checksum(b"?", &[])), "v759aa");
    }

    #[test]
    fn known_strings_verify() {
        let vectors = [
            ("a", "lqfn3a"),
            ("abcdef", "l7aum6echk45nj3s0wdvt2fg8x9yrzpqzd3ryx"),
            ("split", "checkupstagehandshakeupstreamerranterredcaperredlc445v"),
            ("?", "v759aa"),
        ];
        for &(hrp, data) in &vectors {
            assert!(verify_checksum(hrp.as_bytes(), &fes(data)), "vector {}1{}", hrp, data);

            let payload = fes(data);
            let payload = &payload[..payload.len() - CHECKSUM_LENGTH];
            assert_eq!(
                chars(&create_checksum(hrp.as_bytes(), payload)),
                &data[data.len() - CHECKSUM_LENGTH..],
            );
        }
    }

    #[test]
    fn created_checksum_verifies() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x0b3c_4d32);
        for _ in 0..100 {
            let len = rng.gen_range(0..60);
            let mut data: Vec<Fe32> =
                (0..len).map(|_| Fe32::try_from(rng.gen_range(0..32u8)).unwrap()).collect();
            let checksum = create_checksum(b"bc", &data);
            data.extend_from_slice(&checksum);
            assert!(verify_checksum(b"bc", &data));
            assert!(!verify_checksum(b"tb", &data));

            let i = rng.gen_range(0..data.len());
            let flipped = data[i].to_u8() ^ rng.gen_range(1..32u8);
            data[i] = Fe32::try_from(flipped).unwrap();
            assert!(!verify_checksum(b"bc", &data));
        }
    }

    #[test]
    fn polymod_matches_bech32_engine() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let hrp = Hrp::parse("bcrt").unwrap();
        for _ in 0..50 {
            let len = rng.gen_range(0..80);
            let data: Vec<Fe32> =
                (0..len).map(|_| Fe32::try_from(rng.gen_range(0..32u8)).unwrap()).collect();

            let mut engine = Engine::<Bech32m>::new();
            engine.input_hrp(hrp);
            for fe in &data {
                engine.input_fe(*fe);
            }

            let mut values = hrp_expand(b"bcrt");
            values.extend(data.iter().map(|fe| fe.to_u8()));
            assert_eq!(*engine.residue(), polymod(&values));
        }
    }
}
