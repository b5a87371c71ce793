// Chunk: docs/chunks/element_buffer - Element-typed byte buffer with dirty tracking
// Chunk: docs/chunks/text_codec - Binary to decimal-text codec

//! taghex-buffer: the element-typed byte buffer model behind the taghex editor.
//!
//! This crate provides the in-memory model for editing a raw byte payload
//! interpreted as a sequence of fixed-width signed integers. It has no
//! platform dependencies so the editing shell can be tested against it in
//! isolation.
//!
//! # Overview
//!
//! The main types are:
//! - [`ByteBuffer`] - owns the bytes being edited and tracks a dirty flag
//!   as a side effect of every mutation
//! - [`ElementWidth`] - the 1/2/4/8-byte interpretation of the buffer,
//!   fixed per editing session
//! - [`encode_to_text`] / [`decode_from_text`] - the codec between the
//!   buffer and its whitespace-delimited decimal rendering
//!
//! # Example
//!
//! ```
//! use taghex_buffer::{decode_from_text, encode_to_text, ByteBuffer, ElementWidth};
//!
//! let mut buffer = ByteBuffer::new(&[0xFF, 0xFF, 0x00, 0x01]);
//! assert!(!buffer.is_dirty());
//!
//! // Two i16 elements, little-endian: -1 and 256.
//! let text = encode_to_text(buffer.bytes(), ElementWidth::Short);
//! assert_eq!(text, "-1\n256\n");
//!
//! // Re-encoding text replaces the buffer wholesale and marks it dirty.
//! buffer.replace(decode_from_text("7 8", ElementWidth::Short));
//! assert_eq!(buffer.bytes(), &[7, 0, 8, 0]);
//! assert!(buffer.is_dirty());
//! ```
//!
//! # Dirty Tracking
//!
//! The dirty flag answers "was a write issued", not "did the content
//! change": overwriting a byte with its existing value still marks the
//! buffer dirty. See [`ByteBuffer`] for the full policy.

mod byte_buffer;
mod codec;
mod element;
mod types;

pub use byte_buffer::ByteBuffer;
pub use codec::{decode_from_text, encode_to_text};
pub use element::ElementWidth;
pub use types::EditError;
