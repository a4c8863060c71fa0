// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;
use std::sync::Arc;
use itertools::Itertools;
use super::Chunk;
use crate::{Error, Result};

impl Chunk {
	/// Returns the chunk this one links to: `None` when the link is unset or
	/// the linked chunk has been dropped.
	pub fn next(&self) -> Option<Chunk> {
		let guard = self.inner.next.lock().unwrap_or_else(|guard| guard.into_inner());
		guard.as_ref()?.upgrade().map(|inner| Chunk { inner })
	}

	/// Sets or clears the forward link. Links are non-owning, a chunk does
	/// not keep the chunk it links to alive, and cycles are permitted.
	/// Linking works in either lifecycle state; a disposed chunk may be
	/// linked, its payload is simply unreadable.
	pub fn set_next(&self, next: Option<&Chunk>) {
		let link = next.map(|chunk| Arc::downgrade(&chunk.inner));
		*self.inner.next.lock().unwrap_or_else(|guard| guard.into_inner()) = link;
	}

	/// Declares that this chunk follows `other` in sequence, setting
	/// `other`'s link to this chunk. Fails with [`Error::NullLink`] when
	/// there is no chunk to follow.
	pub fn follows(&self, other: Option<&Chunk>) -> Result {
		other.ok_or(Error::NullLink)?.set_next(Some(self));
		Ok(())
	}

	/// Links the present chunks of `links` into a linear chain, in order,
	/// skipping absent entries. Returns the head of the chain, or `None`
	/// when no chunk is present. The tail's link is left untouched; a lone
	/// survivor is returned without any link mutation.
	pub fn chain(links: impl IntoIterator<Item = Option<Chunk>>) -> Option<Chunk> {
		let chunks = link_adjacent(links);
		chunks.into_iter().next()
	}

	/// As [`chain`][Self::chain], but additionally links the tail back to
	/// the head, forming a cycle. A lone survivor is linked to itself.
	pub fn chain_circular(links: impl IntoIterator<Item = Option<Chunk>>) -> Option<Chunk> {
		let chunks = link_adjacent(links);
		if let (Some(head), Some(tail)) = (chunks.first(), chunks.last()) {
			tail.set_next(Some(head));
		}

		chunks.into_iter().next()
	}

	/// Returns an iterator walking the chain from this chunk along its
	/// links. The walk ends at an unset or dropped link, or when a chunk
	/// already yielded would be revisited, so it is finite even over
	/// circular chains.
	pub fn walk(&self) -> Walk {
		Walk {
			cursor: Some(self.clone()),
			visited: HashSet::new(),
		}
	}
}

fn link_adjacent(links: impl IntoIterator<Item = Option<Chunk>>) -> Vec<Chunk> {
	let chunks: Vec<_> = links.into_iter().flatten().collect();
	for (chunk, next) in chunks.iter().tuple_windows() {
		chunk.set_next(Some(next));
	}

	chunks
}

/// A cycle-safe iterator over a chain of chunks, created by [`Chunk::walk`].
/// Yields chunks in traversal order starting from the walk's origin.
pub struct Walk {
	cursor: Option<Chunk>,
	/// Chunk identities already yielded, for cycle closure detection.
	visited: HashSet<usize>,
}

impl Iterator for Walk {
	type Item = Chunk;

	fn next(&mut self) -> Option<Chunk> {
		let chunk = self.cursor.take()?;
		if !self.visited.insert(Arc::as_ptr(&chunk.inner) as usize) {
			return None
		}

		self.cursor = chunk.next();
		Some(chunk)
	}
}
