// SPDX-License-Identifier: Apache-2.0

use std::io::{Cursor, Read};

/// A readable source of bytes, consumed by [`Chunk::from_source`].
///
/// Sources are cursors over some region of bytes: they know how many bytes
/// remain and hand them out in order. A closed or otherwise unreadable
/// source reports `is_readable() == false`; chunk construction treats that
/// as an error rather than an empty read.
///
/// [`Chunk::from_source`]: crate::Chunk::from_source
pub trait Source {
	/// Returns `true` if the source can currently be read from.
	fn is_readable(&self) -> bool;

	/// Returns the number of bytes remaining.
	fn remaining(&self) -> usize;

	/// Reads up to `dest.len()` bytes into the front of `dest`, returning
	/// the number of bytes read. A return of zero means the source is
	/// exhausted.
	fn read(&mut self, dest: &mut [u8]) -> usize;
}

/// A [`Source`] reading from a borrowed byte slice.
pub struct SliceSource<'d> {
	data: Option<&'d [u8]>,
}

impl<'d> SliceSource<'d> {
	/// Creates a source over `data`.
	pub fn new(data: &'d [u8]) -> Self {
		Self { data: Some(data) }
	}

	/// Closes the source by releasing the borrowed slice; subsequent reads
	/// fail the readability check. Closing is idempotent, [`close`] may be
	/// called more than once with no effect.
	///
	/// [`close`]: Self::close
	pub fn close(&mut self) {
		self.data.take();
	}
}

impl<'d> From<&'d [u8]> for SliceSource<'d> {
	fn from(data: &'d [u8]) -> Self {
		Self::new(data)
	}
}

impl Source for SliceSource<'_> {
	fn is_readable(&self) -> bool {
		self.data.is_some()
	}

	fn remaining(&self) -> usize {
		self.data.map_or(0, <[u8]>::len)
	}

	fn read(&mut self, dest: &mut [u8]) -> usize {
		let Some(data) = self.data.as_mut() else { return 0 };
		let len = dest.len().min(data.len());
		let (head, tail) = data.split_at(len);
		dest[..len].copy_from_slice(head);
		*data = tail;
		len
	}
}

impl<T: AsRef<[u8]>> Source for Cursor<T> {
	fn is_readable(&self) -> bool {
		true
	}

	fn remaining(&self) -> usize {
		let len = self.get_ref().as_ref().len() as u64;
		len.saturating_sub(self.position()) as usize
	}

	fn read(&mut self, dest: &mut [u8]) -> usize {
		// Cursor reads are infallible.
		Read::read(self, dest).unwrap_or(0)
	}
}
