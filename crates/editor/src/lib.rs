// Chunk: docs/chunks/edit_session - Edit session + apply/cancel read-out
// Chunk: docs/chunks/import_export - File import/export with extension dispatch

//! taghex: the byte-level editor core for binary tag payloads.
//!
//! This crate is the logic behind the hex-editing dialog of a tag payload
//! inspector. The dialog shell itself (window, hex grid widget, menus and
//! file pickers) lives elsewhere and calls into this crate with three
//! operations: open a session over some bytes, issue edits or file
//! imports/exports against it, and read the final bytes and modified flag
//! back out.
//!
//! # Overview
//!
//! - [`EditSession`] - one editing session over one payload, constructed
//!   with a display label, the initial bytes, and an [`ElementWidth`]
//! - [`import_path`] / [`export_path`] - file I/O with format selection by
//!   extension (`.txt` is decimal text, everything else raw bytes)
//! - [`Applied`] - the terminal read-out of the "OK" path
//!
//! The underlying buffer model and codec come from the `taghex-buffer`
//! crate and are re-exported here for convenience.
//!
//! # Example
//!
//! ```
//! use taghex::{EditSession, ElementWidth};
//!
//! let payload = [0xFF, 0xFF, 0x00, 0x01];
//! let mut session = EditSession::new("shortArrayTest", &payload, ElementWidth::Short);
//! assert_eq!(session.export_text(), "-1\n256\n");
//!
//! session.set_byte(0, 0x00).unwrap();
//! let applied = session.apply();
//! assert!(applied.modified);
//! assert_eq!(applied.bytes, vec![0x00, 0xFF, 0x00, 0x01]);
//! ```

pub mod import_export;
pub mod session;

pub use import_export::{export_path, import_path, ImportExportError};
pub use session::{Applied, EditSession, PositionDisplay};

// Re-export the buffer model so shells depend on one crate.
pub use taghex_buffer::{decode_from_text, encode_to_text, ByteBuffer, EditError, ElementWidth};
