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

//! # Rust Bech32m Codec Library
//!
//! Encoding and decoding of bech32m checksummed strings, and of
//! segwit-style addresses which carry an arbitrary program of 2 to 40
//! bytes under a human-readable prefix.
//!
//! The checksum codec lives in [`bech32m`], the 8-bit/5-bit regrouping
//! in [`convert`] and the address layer on top of both in [`address`].
//!

// Coding conventions
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(missing_docs)]

pub extern crate bech32;
extern crate hex_conservative;
#[cfg(feature = "serde")] extern crate actual_serde as serde;

#[cfg(test)] extern crate rand;
#[cfg(test)] extern crate rand_chacha;
#[cfg(all(test, feature = "serde"))] extern crate serde_json;
#[cfg(all(test, feature = "serde"))] extern crate serde_test;

mod error;
pub mod address;
pub mod bech32m;
pub mod convert;
pub mod hex;

// export everything at the top level so it can be used as `bech32m_codec::Address` etc.
pub use crate::address::{Address, AddressError, AddressParams, Program, ProgramLengthError};
pub use crate::bech32m::{ChecksummedValue, Error, StringCodec, MAX_LENGTH};
pub use crate::convert::{convert_bits, convert_bits_iter, ConvertBitsError, PaddingError};
pub use bech32::Fe32;
