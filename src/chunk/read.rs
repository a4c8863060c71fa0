// SPDX-License-Identifier: Apache-2.0

use std::cmp::min;
use std::sync::Arc;
use base64::Engine;
use base64::prelude::{BASE64_STANDARD_NO_PAD, BASE64_URL_SAFE_NO_PAD};
use super::Chunk;
use crate::{Encoding, Error, Result};

impl Chunk {
	/// Returns the byte at `offset` without bounds adjustment, mirroring raw
	/// indexed access. The payload lock is held only long enough to clone
	/// the payload handle; a dispose racing with the index itself is the
	/// caller's responsibility to exclude.
	///
	/// # Panics
	///
	/// Panics if `offset` is past the end of the payload. Use
	/// [`try_byte_at`][Self::try_byte_at] for a checked read.
	pub fn byte_at(&self, offset: usize) -> Result<u8> {
		Ok(self.payload()?[offset])
	}

	/// Returns the byte at `offset`, or `None` if the chunk is disposed or
	/// `offset` is out of bounds. Never panics.
	pub fn try_byte_at(&self, offset: usize) -> Option<u8> {
		self.lock().as_ref()?.get(offset).copied()
	}

	/// Returns a copy of up to `count` bytes starting at `offset`. The copy
	/// is truncated to the bytes remaining past `offset`, never padded; an
	/// out-of-range offset or a zero count yield an empty vec.
	pub fn read_range(&self, offset: usize, count: usize) -> Result<Vec<u8>> {
		let guard = self.lock();
		let payload = guard.as_ref().ok_or(Error::Disposed)?;
		let start = min(offset, payload.len());
		let end = min(offset.saturating_add(count), payload.len());
		Ok(payload[start..end].to_vec())
	}

	/// Copies up to `count` bytes from the payload at `src_offset` into
	/// `dest` starting at `dest_offset`, returning the number of bytes
	/// copied: `min(count, payload remainder, destination remainder)`.
	/// An out-of-bounds offset on either side or a zero count is a no-op
	/// returning zero, not an error.
	pub fn read_into(
		&self,
		src_offset: usize,
		dest: &mut [u8],
		dest_offset: usize,
		count: usize
	) -> Result<usize> {
		let guard = self.lock();
		let payload = guard.as_ref().ok_or(Error::Disposed)?;
		if src_offset >= payload.len() || dest_offset >= dest.len() || count == 0 {
			return Ok(0)
		}

		let len = min(count, min(payload.len() - src_offset, dest.len() - dest_offset));
		dest[dest_offset..dest_offset + len]
			.copy_from_slice(&payload[src_offset..src_offset + len]);
		Ok(len)
	}

	/// Copies as much of the payload as fits into `dest`, front to front.
	/// Shorthand for `read_into(0, dest, 0, dest.len())`.
	pub fn copy_to(&self, dest: &mut [u8]) -> Result<usize> {
		let count = dest.len();
		self.read_into(0, dest, 0, count)
	}

	/// Returns an independent copy of the full payload.
	pub fn to_vec(&self) -> Result<Vec<u8>> {
		Ok(self.payload()?.to_vec())
	}

	/// Returns a zero-copy shared view of the payload. The view is
	/// immutable, so handing it out cannot break the read-only payload
	/// contract; it outlives a concurrent dispose.
	pub(crate) fn payload(&self) -> Result<Arc<[u8]>> {
		self.lock().clone().ok_or(Error::Disposed)
	}

	/// Decodes the full payload as text with `encoding`.
	pub fn decode_text(&self, encoding: Encoding) -> Result<String> {
		Ok(encoding.decode(&self.payload()?)?)
	}

	/// Decodes the full payload as UTF-8.
	pub fn decode_utf8(&self) -> Result<String> {
		self.decode_text(Encoding::Utf8)
	}

	/// Decodes the full payload as ASCII.
	pub fn decode_ascii(&self) -> Result<String> {
		self.decode_text(Encoding::Ascii)
	}

	/// Returns the payload encoded into lowercase hex.
	pub fn hex_lower_string(&self) -> Result<String> {
		Ok(base16ct::lower::encode_string(&self.payload()?))
	}

	/// Returns the payload encoded into uppercase hex.
	pub fn hex_upper_string(&self) -> Result<String> {
		Ok(base16ct::upper::encode_string(&self.payload()?))
	}

	/// Returns the payload encoded into base64.
	pub fn base64_string(&self) -> Result<String> {
		Ok(BASE64_STANDARD_NO_PAD.encode(self.payload()?))
	}

	/// Returns the payload encoded into URL-safe base64.
	pub fn base64_url_string(&self) -> Result<String> {
		Ok(BASE64_URL_SAFE_NO_PAD.encode(self.payload()?))
	}
}
