// Chunk: docs/chunks/edit_session - Edit session + apply/cancel read-out

//! An editing session over one binary tag payload.
//!
//! [`EditSession`] is the object the dialog shell constructs when the user
//! opens a payload for byte-level editing. It owns a private copy of the
//! payload (the caller's original data is never touched), routes all edits
//! through the buffer so dirty tracking is a side effect of the mutation
//! API, and hands the final bytes back through [`apply`](EditSession::apply).
//!
//! Cancellation is simply dropping the session: nothing propagates unless
//! the shell calls `apply` and writes the result back itself.

use std::fmt;

use tracing::debug;

use taghex_buffer::{decode_from_text, encode_to_text, ByteBuffer, EditError, ElementWidth};

/// The terminal read-out of a session, returned by [`EditSession::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// The final buffer content.
    pub bytes: Vec<u8>,
    /// True if any mutating operation was issued during the session.
    pub modified: bool,
}

/// Status-bar style presentation of a byte offset.
///
/// Produced by [`EditSession::position_display`] for the shell's position
/// labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionDisplay {
    /// The byte offset formatted as hex, e.g. `0x004A`.
    pub hex_offset: String,
    /// The element containing the offset, e.g. `Element 18` in a 4-byte
    /// session. Defined for any offset, including past the end.
    pub element_index: usize,
}

impl fmt::Display for PositionDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  Element {}", self.hex_offset, self.element_index)
    }
}

/// A single byte-level editing session.
///
/// One session owns its buffer exclusively for its entire lifetime; all
/// operations are synchronous direct calls. Embedders that need concurrent
/// access serialize it externally (one session per logical payload).
#[derive(Debug, Clone)]
pub struct EditSession {
    label: String,
    buffer: ByteBuffer,
    width: ElementWidth,
}

impl EditSession {
    /// Opens a session over a deep copy of `initial`.
    pub fn new(label: impl Into<String>, initial: &[u8], width: ElementWidth) -> Self {
        Self {
            label: label.into(),
            buffer: ByteBuffer::new(initial),
            width,
        }
    }

    /// Opens a session whose buffer rejects length-changing edits.
    ///
    /// Used for payloads whose length is fixed by the enclosing format.
    /// Imports still replace the buffer wholesale; see
    /// [`ByteBuffer::fixed`].
    pub fn fixed_size(label: impl Into<String>, initial: &[u8], width: ElementWidth) -> Self {
        Self {
            label: label.into(),
            buffer: ByteBuffer::fixed(initial),
            width,
        }
    }

    // ==================== Accessors ====================

    /// The display label the session was opened with.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The window title for the shell, e.g. `Editing: byteArrayTest`.
    pub fn title(&self) -> String {
        format!("Editing: {}", self.label)
    }

    /// The element width the session was opened with.
    pub fn width(&self) -> ElementWidth {
        self.width
    }

    /// Current buffer length in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the byte at `offset`, or `None` past the end.
    pub fn byte(&self, offset: usize) -> Option<u8> {
        self.buffer.byte(offset)
    }

    /// Returns true if any mutating operation was issued this session.
    pub fn is_modified(&self) -> bool {
        self.buffer.is_dirty()
    }

    /// Formats `byte_offset` for the shell's position labels.
    pub fn position_display(&self, byte_offset: usize) -> PositionDisplay {
        PositionDisplay {
            hex_offset: format!("0x{:04X}", byte_offset),
            element_index: self.width.element_index(byte_offset),
        }
    }

    // ==================== Edits ====================

    /// Overwrites one byte. See [`ByteBuffer::set_byte`] for the dirty and
    /// range policy.
    pub fn set_byte(&mut self, offset: usize, value: u8) -> Result<(), EditError> {
        self.buffer.set_byte(offset, value)
    }

    /// Inserts bytes at `offset`. Rejected on fixed-size sessions.
    pub fn insert_bytes(&mut self, offset: usize, bytes: &[u8]) -> Result<(), EditError> {
        self.buffer.insert_bytes(offset, bytes)
    }

    /// Removes bytes starting at `offset`. Rejected on fixed-size sessions.
    pub fn remove_bytes(&mut self, offset: usize, count: usize) -> Result<(), EditError> {
        self.buffer.remove_bytes(offset, count)
    }

    /// Replaces the buffer with raw bytes already read by a collaborator.
    pub fn replace_bytes(&mut self, bytes: Vec<u8>) {
        debug!(len = bytes.len(), "replacing session buffer");
        self.buffer.replace(bytes);
    }

    /// Replaces the buffer by decoding decimal text at the session width.
    ///
    /// Malformed elements decode to zero bytes; see
    /// [`decode_from_text`].
    pub fn replace_from_text(&mut self, text: &str) {
        let bytes = decode_from_text(text, self.width);
        self.replace_bytes(bytes);
    }

    // ==================== Read-outs ====================

    /// Returns a copy of the current buffer for external persistence.
    pub fn export_bytes(&self) -> Vec<u8> {
        self.buffer.snapshot()
    }

    /// Returns the decimal-text rendering of the current buffer.
    ///
    /// A trailing partial element is omitted from the text; see
    /// [`encode_to_text`].
    pub fn export_text(&self) -> String {
        encode_to_text(self.buffer.bytes(), self.width)
    }

    /// Consumes the session and returns the final bytes plus the modified
    /// flag. This is the "OK" path; cancellation is dropping the session.
    pub fn apply(self) -> Applied {
        Applied {
            modified: self.buffer.is_dirty(),
            bytes: self.buffer.snapshot(),
        }
    }
}
