// SPDX-License-Identifier: Apache-2.0

use amplify_derive::Display;
use simdutf8::compat::from_utf8;
use thiserror::Error;

/// A text encoding used by chunk construction and decoding helpers.
///
/// Both encodings are strict: text that cannot be represented losslessly
/// fails to encode, and byte sequences outside the encoding fail to decode.
/// This keeps the round-trip law exact, encode then decode always returns
/// the original text.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Display)]
pub enum Encoding {
	/// UTF-8, the default.
	#[default]
	#[display("UTF-8")]
	Utf8,
	/// Strict seven-bit ASCII.
	#[display("US-ASCII")]
	Ascii,
}

/// A text encode error.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("character {value:?} at index {at} is not representable in {encoding}")]
pub struct EncodeError {
	/// The target encoding.
	pub encoding: Encoding,
	/// The unrepresentable character.
	pub value: char,
	/// Its byte index in the input text.
	pub at: usize,
}

/// A text decode error.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid {encoding} byte sequence from index {valid_up_to}")]
pub struct DecodeError {
	/// The expected encoding.
	pub encoding: Encoding,
	/// The length of the valid prefix before the error.
	pub valid_up_to: usize,
}

impl Encoding {
	/// Encodes `text` into bytes.
	pub fn encode(self, text: &str) -> Result<Vec<u8>, EncodeError> {
		match self {
			Self::Utf8 => Ok(text.as_bytes().to_vec()),
			Self::Ascii =>
				match text.char_indices().find(|(_, value)| !value.is_ascii()) {
					Some((at, value)) => Err(EncodeError { encoding: self, value, at }),
					None => Ok(text.as_bytes().to_vec())
				}
		}
	}

	/// Decodes `bytes` into a string.
	pub fn decode(self, bytes: &[u8]) -> Result<String, DecodeError> {
		match self {
			Self::Utf8 =>
				from_utf8(bytes)
					.map(str::to_owned)
					.map_err(|error| DecodeError {
						encoding: self,
						valid_up_to: error.valid_up_to()
					}),
			Self::Ascii =>
				match bytes.iter().position(|byte| !byte.is_ascii()) {
					Some(at) => Err(DecodeError { encoding: self, valid_up_to: at }),
					// ASCII is a UTF-8 subset.
					None => Ok(bytes.iter().map(|&byte| byte as char).collect())
				}
		}
	}
}
