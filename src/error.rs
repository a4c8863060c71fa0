// SPDX-License-Identifier: Apache-2.0

use std::result;
use crate::encoding::{DecodeError, EncodeError};

pub type Result<T = ()> = result::Result<T, Error>;

/// An error raised by a chunk operation.
///
/// Out-of-bounds reads through the checked APIs are *not* errors; they
/// degrade to empty, truncated or zero-count results. The variants here are
/// contract violations which always propagate to the caller.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
	/// A payload-dependent operation was invoked after disposal.
	#[error("chunk is disposed")]
	Disposed,
	/// Chunk construction was attempted from an unreadable source.
	#[error("source is not readable")]
	InvalidSource,
	/// A follows-relation was declared against an absent chunk.
	#[error("no chunk to follow")]
	NullLink,
	/// The payload could not be decoded as text.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// Text could not be encoded into a payload.
	#[error(transparent)]
	Encode(#[from] EncodeError),
}
