// SPDX-License-Identifier: Apache-2.0

//! Disposable, chainable byte buffers.
//!
//! Data lives in [`Chunk`]s: fixed-payload byte containers, read-only after
//! construction, each carrying an optional forward link to another chunk.
//! Linking lets logically contiguous data be represented as several
//! separately-allocated segments; [`Chunk::chain`] and
//! [`Chunk::chain_circular`] wire whole sequences at once, and
//! [`Chunk::walk`] traverses them, stopping cleanly at cycles.
//!
//! Chunks release their payload deterministically via
//! [`dispose`](Chunk::dispose) rather than waiting for the handle to drop.
//! Disposal is terminal and idempotent; afterwards every payload-dependent
//! read fails with [`Error::Disposed`]. Checked reads are permissive about
//! bounds, degrading to empty or truncated results instead of failing, so
//! only contract violations surface as errors.
//!
//! Chunks are built from slices, byte collections, text in a chosen
//! [`Encoding`], or a bounded read from any [`Source`] of bytes.

mod chunk;
mod encoding;
mod error;
mod streams;

pub use chunk::{Chunk, Walk};
pub use encoding::{DecodeError, EncodeError, Encoding};
pub use error::{Error, Result};
pub use streams::{SliceSource, Source};
