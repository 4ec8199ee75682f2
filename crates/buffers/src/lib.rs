//! Binary buffer utilities for nbt-pack.
//!
//! This crate provides the low-level buffer plumbing for the NBT codec:
//!
//! - [`Reader`] - Reads big-endian binary data from a byte slice with
//!   cursor tracking
//! - [`Writer`] - Writes big-endian binary data to an auto-growing buffer
//!
//! Neither type performs bounds validation beyond what slice indexing
//! gives for free; callers that need recoverable errors must check
//! [`Reader::size`] before reading.
//!
//! # Example
//!
//! ```
//! use nbt_buffers::{Reader, Writer};
//!
//! // Write some data
//! let mut writer = Writer::new();
//! writer.u8(0x0a);
//! writer.i32(-1);
//! let data = writer.flush();
//!
//! // Read it back
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8(), 0x0a);
//! assert_eq!(reader.i32(), -1);
//! ```

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;
