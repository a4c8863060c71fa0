// SPDX-License-Identifier: Apache-2.0

use pretty_assertions::assert_eq;
use quickcheck_macros::quickcheck;
use chainbuf::{Chunk, Encoding};

#[quickcheck]
fn round_trip(data: Vec<u8>) {
	let chunk = Chunk::from_slice(&data);
	assert_eq!(chunk.to_vec().unwrap(), data);
	assert_eq!(chunk.len(), Some(data.len()));
}

#[quickcheck]
fn collect_round_trip(data: Vec<u8>) {
	let chunk: Chunk = data.iter().copied().collect();
	assert_eq!(chunk.to_vec().unwrap(), data);
}

#[quickcheck]
fn utf8_round_trip(text: String) {
	let chunk = Chunk::from_text(&text, Encoding::Utf8).unwrap();
	assert_eq!(chunk.decode_text(Encoding::Utf8).unwrap(), text);
}

#[quickcheck]
fn ascii_round_trip(text: String) {
	let text: String = text.chars().filter(char::is_ascii).collect();
	let chunk = Chunk::from_text(&text, Encoding::Ascii).unwrap();
	assert_eq!(chunk.decode_ascii().unwrap(), text);
}

#[quickcheck]
fn try_byte_at_never_panics(data: Vec<u8>, offset: usize) {
	let chunk = Chunk::from_slice(&data);
	assert_eq!(chunk.try_byte_at(offset), data.get(offset).copied());
}

#[quickcheck]
fn read_range_truncates(data: Vec<u8>, offset: usize, count: usize) {
	let chunk = Chunk::from_slice(&data);
	let start = offset.min(data.len());
	let end = offset.saturating_add(count).min(data.len());
	assert_eq!(chunk.read_range(offset, count).unwrap(), &data[start..end]);
}

mod read {
	use pretty_assertions::assert_eq;
	use chainbuf::Chunk;

	#[test]
	fn range_past_end_is_truncated() {
		let chunk = Chunk::from_slice(&[1, 2, 3, 4, 5]);
		assert_eq!(chunk.read_range(3, 10).unwrap(), [4, 5]);
	}

	#[test]
	fn range_with_zero_count_is_empty() {
		let chunk = Chunk::from_slice(&[1, 2, 3]);
		assert_eq!(chunk.read_range(1, 0).unwrap(), Vec::<u8>::new());
	}

	#[test]
	fn range_offset_out_of_bounds_is_empty() {
		let chunk = Chunk::from_slice(&[1, 2, 3]);
		assert_eq!(chunk.read_range(7, 2).unwrap(), Vec::<u8>::new());
	}

	#[test]
	fn empty_chunk_has_no_bytes() {
		let chunk = Chunk::from_slice(&[]);
		assert_eq!(chunk.try_byte_at(0), None);
		assert!(chunk.is_empty());
		assert!(!chunk.is_disposed());
	}

	#[test]
	fn byte_at_reads_in_range() {
		let chunk = Chunk::from_slice(&[10, 20, 30]);
		assert_eq!(chunk.byte_at(2).unwrap(), 30);
	}

	#[test]
	#[should_panic]
	fn byte_at_out_of_range_panics() {
		let _ = Chunk::from_slice(&[1]).byte_at(1);
	}

	#[test]
	fn into_copies_least_of_count_source_and_dest() {
		let chunk = Chunk::from_slice(&[1, 2, 3, 4, 5]);
		let mut dest = [0; 4];
		assert_eq!(chunk.read_into(2, &mut dest, 1, 10).unwrap(), 3);
		assert_eq!(dest, [0, 3, 4, 5]);
	}

	#[test]
	fn into_is_limited_by_count() {
		let chunk = Chunk::from_slice(&[1, 2, 3, 4, 5]);
		let mut dest = [0; 8];
		assert_eq!(chunk.read_into(0, &mut dest, 0, 2).unwrap(), 2);
		assert_eq!(dest, [1, 2, 0, 0, 0, 0, 0, 0]);
	}

	#[test]
	fn into_degrades_to_zero() {
		let chunk = Chunk::from_slice(&[1, 2, 3]);
		let mut dest = [0; 4];
		// zero count
		assert_eq!(chunk.read_into(0, &mut dest, 0, 0).unwrap(), 0);
		// source offset out of bounds
		assert_eq!(chunk.read_into(3, &mut dest, 0, 1).unwrap(), 0);
		// destination offset out of bounds
		assert_eq!(chunk.read_into(0, &mut dest, 4, 1).unwrap(), 0);
		// empty destination
		assert_eq!(chunk.read_into(0, &mut [], 0, 1).unwrap(), 0);
		assert_eq!(dest, [0; 4]);
	}

	#[test]
	fn copy_to_fills_front_to_front() {
		let chunk = Chunk::from_slice(&[1, 2, 3, 4, 5]);
		let mut dest = [0; 3];
		assert_eq!(chunk.copy_to(&mut dest).unwrap(), 3);
		assert_eq!(dest, [1, 2, 3]);
	}
}

mod dispose {
	use std::thread;
	use pretty_assertions::assert_eq;
	use chainbuf::{Chunk, Encoding, Error};

	#[test]
	fn invalidates_every_read() {
		let chunk = Chunk::from_utf8("hello");
		chunk.dispose();

		assert!(chunk.is_disposed());
		assert_eq!(chunk.len(), None);
		assert_eq!(chunk.byte_at(0), Err(Error::Disposed));
		assert_eq!(chunk.try_byte_at(0), None);
		assert_eq!(chunk.read_range(0, 1), Err(Error::Disposed));
		assert_eq!(chunk.read_into(0, &mut [0; 4], 0, 4), Err(Error::Disposed));
		assert_eq!(chunk.to_vec(), Err(Error::Disposed));
		assert_eq!(chunk.decode_text(Encoding::Utf8), Err(Error::Disposed));
		assert_eq!(chunk.hex_lower_string(), Err(Error::Disposed));
		assert_eq!(chunk.base64_string(), Err(Error::Disposed));
	}

	#[test]
	fn is_idempotent() {
		let chunk = Chunk::from_slice(&[1, 2, 3]);
		chunk.dispose();
		chunk.dispose();
		assert!(chunk.is_disposed());
	}

	#[test]
	fn is_terminal_across_handles() {
		let chunk = Chunk::from_slice(&[1]);
		let other = chunk.clone();
		other.dispose();
		assert!(chunk.is_disposed());
	}

	#[test]
	fn races_cleanly_with_checked_reads() {
		let chunk = Chunk::from_vec(vec![7; 4096]);
		let readers: Vec<_> = (0..4).map(|_| {
			let chunk = chunk.clone();
			thread::spawn(move || {
				let mut dest = [0; 64];
				loop {
					match chunk.read_into(0, &mut dest, 0, 64) {
						Ok(count) => assert!(count <= 64),
						Err(Error::Disposed) => break,
						Err(error) => panic!("unexpected error: {error}"),
					}
				}
			})
		}).collect();

		chunk.dispose();
		for reader in readers {
			reader.join().unwrap();
		}
	}
}

mod source {
	use std::io::Cursor;
	use pretty_assertions::assert_eq;
	use chainbuf::{Chunk, Error, SliceSource, Source};

	#[test]
	fn reads_full_remaining_length() {
		let mut source = SliceSource::new(&[1, 2, 3, 4]);
		let chunk = Chunk::from_source(&mut source).unwrap();
		assert_eq!(chunk.to_vec().unwrap(), [1, 2, 3, 4]);
		assert_eq!(source.remaining(), 0);
	}

	#[test]
	fn count_bounds_the_read() {
		let mut source = SliceSource::new(&[1, 2, 3, 4]);
		let chunk = Chunk::from_source_count(&mut source, 3).unwrap();
		assert_eq!(chunk.to_vec().unwrap(), [1, 2, 3]);
		assert_eq!(source.remaining(), 1);
	}

	#[test]
	fn short_source_is_accepted() {
		let mut source = SliceSource::new(&[1, 2]);
		let chunk = Chunk::from_source_count(&mut source, 10).unwrap();
		assert_eq!(chunk.len(), Some(2));
	}

	#[test]
	fn closed_source_is_invalid() {
		let mut source = SliceSource::new(&[1, 2]);
		source.close();
		source.close();
		assert_eq!(Chunk::from_source(&mut source).err(), Some(Error::InvalidSource));
	}

	#[test]
	fn cursor_reads_from_position() {
		let mut cursor = Cursor::new(vec![1, 2, 3, 4]);
		cursor.set_position(1);
		assert_eq!(cursor.remaining(), 3);
		let chunk = Chunk::from_source(&mut cursor).unwrap();
		assert_eq!(chunk.to_vec().unwrap(), [2, 3, 4]);
	}
}

mod text {
	use pretty_assertions::assert_eq;
	use chainbuf::{Chunk, Encoding, Error};

	#[test]
	fn utf8_default_construction() {
		let chunk = Chunk::from_utf8("héllo");
		assert_eq!(chunk.decode_utf8().unwrap(), "héllo");
	}

	#[test]
	fn ascii_encode_rejects_wide_chars() {
		assert!(matches!(
			Chunk::from_text("héllo", Encoding::Ascii),
			Err(Error::Encode(error)) if error.at == 1
		));
	}

	#[test]
	fn ascii_decode_rejects_high_bytes() {
		let chunk = Chunk::from_slice(b"ok\x80");
		assert!(matches!(
			chunk.decode_ascii(),
			Err(Error::Decode(error)) if error.valid_up_to == 2
		));
	}

	#[test]
	fn utf8_decode_rejects_invalid_sequences() {
		let chunk = Chunk::from_slice(b"ab\xff");
		assert!(matches!(
			chunk.decode_utf8(),
			Err(Error::Decode(error)) if error.valid_up_to == 2
		));
	}

	#[test]
	fn hex_strings() {
		let chunk = Chunk::from_slice(&[0x00, 0xab, 0xff]);
		assert_eq!(chunk.hex_lower_string().unwrap(), "00abff");
		assert_eq!(chunk.hex_upper_string().unwrap(), "00ABFF");
	}

	#[test]
	fn base64_strings() {
		let chunk = Chunk::from_slice(b"hello");
		assert_eq!(chunk.base64_string().unwrap(), "aGVsbG8");
		assert_eq!(chunk.base64_url_string().unwrap(), "aGVsbG8");
	}
}
