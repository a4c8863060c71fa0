// SPDX-License-Identifier: Apache-2.0

mod chain;
mod read;

pub use chain::Walk;

use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use crate::{Encoding, Error, Result};
use crate::streams::Source;

/// A disposable, chainable byte buffer.
///
/// A chunk wraps a fixed payload of bytes, read-only after construction, and
/// carries an optional forward link to another chunk so logically contiguous
/// data can be split over separately-allocated segments. `Chunk` is a cheap
/// handle; clones refer to the same underlying chunk.
///
/// The payload is released deterministically with [`dispose`][Self::dispose]
/// rather than on drop of the last handle. Disposal is terminal: afterwards
/// every payload-dependent operation fails with [`Error::Disposed`], and
/// [`len`][Self::len] reports `None`. A zero-length payload is live and
/// distinct from disposed.
///
/// Links are orthogonal to the payload lifecycle. They are non-owning, may
/// be reassigned at any time, may form cycles, and survive disposal of
/// either endpoint.
#[derive(Clone)]
pub struct Chunk {
	inner: Arc<Inner>,
}

struct Inner {
	/// `None` once disposed. The mutex guards the live-to-disposed
	/// transition and the checked read paths, so a read either completes
	/// against a live payload or observes the disposed state cleanly.
	payload: Mutex<Option<Arc<[u8]>>>,
	/// Non-owning forward link. Weak, so circular chains reclaim normally.
	next: Mutex<Option<Weak<Inner>>>,
}

impl Chunk {
	fn with_payload(payload: Arc<[u8]>) -> Self {
		Self {
			inner: Arc::new(Inner {
				payload: Mutex::new(Some(payload)),
				next: Mutex::new(None),
			})
		}
	}

	/// Creates a chunk with a copy of `bytes` as its payload.
	pub fn from_slice(bytes: &[u8]) -> Self {
		Self::with_payload(bytes.into())
	}

	/// Creates a chunk adopting `bytes` as its payload.
	pub fn from_vec(bytes: Vec<u8>) -> Self {
		Self::with_payload(bytes.into())
	}

	/// Creates a chunk holding `text` encoded as UTF-8.
	pub fn from_utf8(text: &str) -> Self {
		Self::from_slice(text.as_bytes())
	}

	/// Creates a chunk holding `text` encoded with `encoding`.
	pub fn from_text(text: &str, encoding: Encoding) -> Result<Self> {
		Ok(Self::from_vec(encoding.encode(text)?))
	}

	/// Creates a chunk by reading the full remaining length of `source`.
	pub fn from_source(source: &mut impl Source) -> Result<Self> {
		let count = source.remaining();
		Self::from_source_count(source, count)
	}

	/// Creates a chunk by reading up to `count` bytes from `source`, failing
	/// with [`Error::InvalidSource`] if the source is not readable. A source
	/// yielding fewer bytes than requested is not an error; the payload
	/// holds what was actually read.
	pub fn from_source_count(source: &mut impl Source, count: usize) -> Result<Self> {
		if !source.is_readable() {
			return Err(Error::InvalidSource)
		}

		let mut bytes = vec![0; count];
		let mut filled = 0;
		while filled < count {
			let read = source.read(&mut bytes[filled..]);
			if read == 0 { break }
			filled += read;
		}

		bytes.truncate(filled);
		Ok(Self::from_vec(bytes))
	}

	/// Returns the payload length in bytes, or `None` once disposed.
	pub fn len(&self) -> Option<usize> {
		self.lock().as_ref().map(|payload| payload.len())
	}

	/// Returns `true` if the chunk is live with a zero-length payload.
	pub fn is_empty(&self) -> bool {
		self.len() == Some(0)
	}

	/// Returns `true` once the chunk has been disposed.
	pub fn is_disposed(&self) -> bool {
		self.lock().is_none()
	}

	/// Releases the payload, invalidating all payload-dependent operations.
	/// Disposal is idempotent and safe to call from multiple threads;
	/// disposing an already-disposed chunk does nothing. Linked chunks are
	/// untouched: chains are never disposed transitively.
	pub fn dispose(&self) {
		self.lock().take();
	}

	/// Returns `true` if `a` and `b` are handles to the same chunk.
	pub fn ptr_eq(a: &Self, b: &Self) -> bool {
		Arc::ptr_eq(&a.inner, &b.inner)
	}

	/// Locks the payload. A poisoned lock can only come from a panic on the
	/// unchecked read path, which never leaves the payload torn, so the
	/// guard is recovered rather than propagated.
	fn lock(&self) -> MutexGuard<'_, Option<Arc<[u8]>>> {
		self.inner.payload.lock().unwrap_or_else(|guard| guard.into_inner())
	}
}

impl Default for Chunk {
	/// An empty live chunk.
	fn default() -> Self {
		Self::from_vec(Vec::new())
	}
}

impl From<&[u8]> for Chunk {
	fn from(bytes: &[u8]) -> Self {
		Self::from_slice(bytes)
	}
}

impl From<Vec<u8>> for Chunk {
	fn from(bytes: Vec<u8>) -> Self {
		Self::from_vec(bytes)
	}
}

impl FromIterator<u8> for Chunk {
	/// Materializes any byte collection into a chunk payload.
	fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
		Self::from_vec(iter.into_iter().collect())
	}
}

impl Debug for Chunk {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let mut debug = f.debug_struct("Chunk");
		match &*self.lock() {
			Some(payload) => debug.field("len", &payload.len()),
			None => debug.field("disposed", &true)
		}.finish_non_exhaustive()
	}
}
