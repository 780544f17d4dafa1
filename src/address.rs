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
//

//! # Addresses
//!
//! An address is a program of 2 to 40 bytes under a human-readable part.
//! The program bytes are regrouped into 5-bit symbols (zero padded) and
//! carried as the payload of a bech32m string.
//!

use std::error;
use std::fmt;
use std::str::FromStr;

use hex_conservative::HexToBytesError;
#[cfg(feature = "serde")]
use serde;

use crate::bech32m::{self, ChecksummedValue, StringCodec, MAX_LENGTH};
use crate::convert::{self, ConvertBitsError, PaddingError};
use crate::error::write_err;
use crate::hex::{format_hex, FromHex, ToHex};

/// Smallest allowed program, in bytes.
pub const MIN_PROGRAM_LENGTH: usize = 2;

/// Largest allowed program, in bytes.
pub const MAX_PROGRAM_LENGTH: usize = 40;

/// Address encoding and decoding error
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AddressError {
    /// Bech32m encoding error
    Bech32m(bech32m::Error),
    /// The program is empty, or not between 2 and 40 bytes in length.
    InvalidProgramLength(ProgramLengthError),
    /// Regrouping between bytes and 5-bit symbols failed.
    ConvertBits(ConvertBitsError),
    /// Strict decoding found invalid padding bits.
    Padding(PaddingError),
    /// Program hex could not be parsed.
    Hex(HexToBytesError),
    /// The human-readable part is not the one of the expected network.
    UnexpectedHrp {
        /// The human-readable part of the network.
        expected: &'static str,
        /// The human-readable part found in the address.
        found: String,
    },
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AddressError::Bech32m(ref e) => write!(f, "bech32m error: {}", e),
            AddressError::InvalidProgramLength(ref e) => write!(f, "invalid program length: {}", e),
            AddressError::ConvertBits(ref e) => write_err!(f, "regrouping program bits failed"; e),
            AddressError::Padding(ref e) => write!(f, "invalid padding: {}", e),
            AddressError::Hex(ref e) => write_err!(f, "invalid program hex"; e),
            AddressError::UnexpectedHrp { expected, ref found } => {
                write!(f, "expected human-readable part \"{}\", found \"{}\"", expected, found)
            }
        }
    }
}

impl error::Error for AddressError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            AddressError::Bech32m(ref e) => Some(e),
            AddressError::InvalidProgramLength(ref e) => Some(e),
            AddressError::ConvertBits(ref e) => Some(e),
            AddressError::Padding(ref e) => Some(e),
            AddressError::Hex(ref e) => Some(e),
            AddressError::UnexpectedHrp { .. } => None,
        }
    }
}

#[doc(hidden)]
impl From<bech32m::Error> for AddressError {
    fn from(e: bech32m::Error) -> AddressError {
        AddressError::Bech32m(e)
    }
}

#[doc(hidden)]
impl From<ProgramLengthError> for AddressError {
    fn from(e: ProgramLengthError) -> AddressError {
        AddressError::InvalidProgramLength(e)
    }
}

#[doc(hidden)]
impl From<ConvertBitsError> for AddressError {
    fn from(e: ConvertBitsError) -> AddressError {
        AddressError::ConvertBits(e)
    }
}

#[doc(hidden)]
impl From<PaddingError> for AddressError {
    fn from(e: PaddingError) -> AddressError {
        AddressError::Padding(e)
    }
}

#[doc(hidden)]
impl From<HexToBytesError> for AddressError {
    fn from(e: HexToBytesError) -> AddressError {
        AddressError::Hex(e)
    }
}

/// Why a program length was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgramLengthError {
    /// The decoded payload has no symbols at all.
    Empty,
    /// Fewer than [`MIN_PROGRAM_LENGTH`] bytes.
    TooShort(usize),
    /// More than [`MAX_PROGRAM_LENGTH`] bytes.
    TooLong(usize),
}

impl fmt::Display for ProgramLengthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ProgramLengthError::Empty => write!(f, "empty"),
            ProgramLengthError::TooShort(len) => {
                write!(f, "too short, {} bytes where at least {} are required", len, MIN_PROGRAM_LENGTH)
            }
            ProgramLengthError::TooLong(len) => {
                write!(f, "too long, {} bytes where at most {} are allowed", len, MAX_PROGRAM_LENGTH)
            }
        }
    }
}

impl error::Error for ProgramLengthError {}

fn check_program_length(len: usize) -> Result<(), ProgramLengthError> {
    if len < MIN_PROGRAM_LENGTH {
        Err(ProgramLengthError::TooShort(len))
    } else if len > MAX_PROGRAM_LENGTH {
        Err(ProgramLengthError::TooLong(len))
    } else {
        Ok(())
    }
}

/// The program carried by an address, 2 to 40 bytes.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Program(Vec<u8>);

impl Program {
    /// Wraps program bytes, checking their length.
    pub fn new(bytes: Vec<u8>) -> Result<Program, ProgramLengthError> {
        check_program_length(bytes.len())?;
        Ok(Program(bytes))
    }

    /// Copies program bytes, checking their length.
    pub fn from_slice(bytes: &[u8]) -> Result<Program, ProgramLengthError> {
        Program::new(bytes.to_vec())
    }

    /// The program bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Unwraps the program bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for Program {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::LowerHex for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_hex(&self.0, f)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Program({:x})", self)
    }
}

impl FromHex for Program {
    type Err = AddressError;

    fn from_hex(s: &str) -> Result<Program, AddressError> {
        let bytes = Vec::<u8>::from_hex(s)?;
        Ok(Program::new(bytes)?)
    }
}

/// The parameters of a network's addresses.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AddressParams {
    /// The human-readable part, lower case.
    pub hrp: &'static str,
}

impl AddressParams {
    /// The Bitcoin mainnet address parameters.
    pub const BITCOIN: AddressParams = AddressParams { hrp: "bc" };

    /// The Bitcoin testnet and signet address parameters.
    pub const TESTNET: AddressParams = AddressParams { hrp: "tb" };

    /// The Bitcoin regtest address parameters.
    pub const REGTEST: AddressParams = AddressParams { hrp: "bcrt" };

    /// Finds the built-in parameters using `hrp`, regardless of case.
    pub fn from_hrp(hrp: &str) -> Option<&'static AddressParams> {
        let known: [&'static AddressParams; 3] =
            [&AddressParams::BITCOIN, &AddressParams::TESTNET, &AddressParams::REGTEST];
        known.iter().copied().find(|params| params.hrp.eq_ignore_ascii_case(hrp))
    }
}

/// Builds the bech32m payload of a program, checking its length first.
fn to_checksummed(hrp: &str, program: &[u8]) -> Result<ChecksummedValue, AddressError> {
    check_program_length(program.len())?;
    let values = convert::convert_bits(program, 8, 5, true)?;
    Ok(ChecksummedValue::from_values(hrp, &values)?)
}

/// Encodes a program under `hrp` into an address string.
pub fn encode(hrp: &str, program: &[u8]) -> Result<String, AddressError> {
    encode_with_limit(hrp, program, MAX_LENGTH)
}

/// Encodes a program under `hrp`, failing if the string would exceed `max_len` characters.
pub fn encode_with_limit(hrp: &str, program: &[u8], max_len: usize) -> Result<String, AddressError> {
    let value = to_checksummed(hrp, program)?;
    Ok(bech32m::encode_with_limit(&value, max_len)?)
}

/// Decodes an address string.
pub fn decode(s: &str) -> Result<Address, AddressError> {
    decode_with_limit(s, MAX_LENGTH)
}

/// Decodes an address string of at most `max_len` characters.
///
/// Leftover bits of the last symbol are dropped without being looked at,
/// see [`Address::decode_strict`] for a decoder which checks them.
pub fn decode_with_limit(s: &str, max_len: usize) -> Result<Address, AddressError> {
    from_checksummed(bech32m::decode_with_limit(s, max_len)?, false)
}

/// Regroups a decoded payload into a program, checking the padding bits
/// first when `strict`.
fn from_checksummed(value: ChecksummedValue, strict: bool) -> Result<Address, AddressError> {
    let last = match value.data.last() {
        Some(last) => last.to_u8(),
        None => return Err(ProgramLengthError::Empty.into()),
    };
    if strict {
        convert::check_final_group(value.data.len(), last, 5, 8)?;
    }

    let program = convert::convert_bits_iter(value.data.iter().map(|fe| fe.to_u8()), 5, 8, false)?;
    Ok(Address { hrp: value.hrp, program: Program::new(program)? })
}

/// A bech32m encoded program address.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    /// The human-readable part, always lower case.
    hrp: String,
    /// The program.
    program: Program,
}

impl Address {
    /// Creates an address, checking that it can be encoded.
    pub fn new(hrp: &str, program: Program) -> Result<Address, AddressError> {
        bech32m::encode(&to_checksummed(hrp, program.as_bytes())?)?;
        Ok(Address { hrp: hrp.to_ascii_lowercase(), program })
    }

    /// Creates an address for the given network.
    pub fn with_params(params: &AddressParams, program: Program) -> Result<Address, AddressError> {
        Address::new(params.hrp, program)
    }

    /// Creates an address from a program given as hex, as produced by
    /// [`Address::script_pubkey`].
    pub fn from_script_pubkey_hex(hrp: &str, hex: &str) -> Result<Address, AddressError> {
        Address::new(hrp, Program::from_hex(hex)?)
    }

    /// Decodes an address, additionally requiring that the bits dropped when
    /// regrouping the payload into bytes are fewer than 5 and all zero.
    pub fn decode_strict(s: &str) -> Result<Address, AddressError> {
        Address::decode_strict_with_limit(s, MAX_LENGTH)
    }

    /// Same as [`Address::decode_strict`], for strings of at most `max_len` characters.
    pub fn decode_strict_with_limit(s: &str, max_len: usize) -> Result<Address, AddressError> {
        from_checksummed(bech32m::decode_with_limit(s, max_len)?, true)
    }

    /// Parses the address, requiring the human-readable part of `params`.
    /// When the network does not matter, you can use [FromStr].
    pub fn parse_with_params(s: &str, params: &AddressParams) -> Result<Address, AddressError> {
        let address = decode(s)?;
        if address.hrp != params.hrp {
            return Err(AddressError::UnexpectedHrp { expected: params.hrp, found: address.hrp });
        }
        Ok(address)
    }

    /// The lower case human-readable part.
    pub fn hrp(&self) -> &str {
        &self.hrp
    }

    /// The program.
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// The built-in network parameters matching the human-readable part, if any.
    pub fn params(&self) -> Option<&'static AddressParams> {
        AddressParams::from_hrp(&self.hrp)
    }

    /// The program as lower case hex, two digits per byte, for script construction.
    pub fn script_pubkey(&self) -> String {
        self.program.as_bytes().to_hex()
    }
}

impl StringCodec for Address {
    type Error = AddressError;

    fn encode_with_limit(&self, max_len: usize) -> Result<String, AddressError> {
        encode_with_limit(&self.hrp, self.program.as_bytes(), max_len)
    }

    fn decode_with_limit(s: &str, max_len: usize) -> Result<Address, AddressError> {
        decode_with_limit(s, max_len)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let value = to_checksummed(&self.hrp, self.program.as_bytes()).map_err(|_| fmt::Error)?;
        bech32m::encode_to_fmt(fmt, &value.hrp, &value.data)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, fmt)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Address, AddressError> {
        decode(s)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use std::fmt::Formatter;

        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = Address;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("a bech32m address")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Address::from_str(v).map_err(E::custom)
            }

            fn visit_borrowed_str<E>(self, v: &'de str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                self.visit_str(v)
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                self.visit_str(&v)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
