// Chunk: docs/chunks/import_export - File import/export with extension dispatch

//! File import and export for an editing session.
//!
//! The shell's Import/Export actions hand a path to this module; the format
//! is selected by extension (`.txt` means decimal text, anything else is
//! raw bytes), mirroring the file filters the shell presents. Neither
//! format is self-describing: the element width always comes from the
//! session, never from the file.
//!
//! Imports are atomic from the caller's perspective. The file is read and
//! decoded in full before the session buffer is touched, so a failed import
//! never leaves a partially replaced buffer behind.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::session::EditSession;

/// Error from a file import or export.
///
/// Both variants are recoverable at the dialog boundary: the shell reports
/// the path and cause to the user and the session continues with its buffer
/// unchanged.
#[derive(Debug)]
pub enum ImportExportError {
    /// The source file could not be opened or read.
    Read {
        /// The path the import was asked to load.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// The destination file could not be created or written.
    Write {
        /// The path the export was asked to write.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
}

impl fmt::Display for ImportExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportExportError::Read { path, source } => {
                write!(f, "failed to import data from \"{}\": {}", path.display(), source)
            }
            ImportExportError::Write { path, source } => {
                write!(f, "failed to export data to \"{}\": {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ImportExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportExportError::Read { source, .. } => Some(source),
            ImportExportError::Write { source, .. } => Some(source),
        }
    }
}

/// Returns true if `path` selects the decimal text format.
fn is_text_path(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("txt")
}

/// Replaces the session buffer with the contents of `path`.
///
/// A `.txt` file is decoded from decimal text at the session width (with
/// the codec's element-by-element leniency); any other file replaces the
/// buffer verbatim. Either way the session is marked modified.
///
/// On failure the buffer is left exactly as it was.
pub fn import_path(session: &mut EditSession, path: &Path) -> Result<(), ImportExportError> {
    let raw = fs::read(path).map_err(|source| {
        warn!(path = %path.display(), error = %source, "import failed");
        ImportExportError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;

    if is_text_path(path) {
        // Invalid UTF-8 degrades to replacement characters, which then fall
        // under the codec's per-element leniency.
        let text = String::from_utf8_lossy(&raw);
        session.replace_from_text(&text);
    } else {
        session.replace_bytes(raw);
    }

    debug!(path = %path.display(), len = session.len(), "import complete");
    Ok(())
}

/// Writes the session buffer to `path`.
///
/// A `.txt` destination receives the decimal text rendering (whole elements
/// only); any other destination receives the raw bytes verbatim, including
/// a trailing partial element.
pub fn export_path(session: &EditSession, path: &Path) -> Result<(), ImportExportError> {
    let result = if is_text_path(path) {
        fs::write(path, session.export_text())
    } else {
        fs::write(path, session.export_bytes())
    };

    result.map_err(|source| {
        warn!(path = %path.display(), error = %source, "export failed");
        ImportExportError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!(path = %path.display(), len = session.len(), "export complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use taghex_buffer::ElementWidth;

    fn session_with(bytes: &[u8], width: ElementWidth) -> EditSession {
        EditSession::new("test", bytes, width)
    }

    #[test]
    fn test_import_raw_replaces_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.bin");
        fs::write(&path, [9, 8, 7]).unwrap();

        let mut session = session_with(&[1, 2, 3], ElementWidth::Byte);
        import_path(&mut session, &path).unwrap();
        assert_eq!(session.export_bytes(), vec![9, 8, 7]);
        assert!(session.is_modified());
    }

    #[test]
    fn test_import_raw_identical_content_still_modifies() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.bin");
        fs::write(&path, [1, 2, 3]).unwrap();

        let mut session = session_with(&[1, 2, 3], ElementWidth::Byte);
        import_path(&mut session, &path).unwrap();
        assert!(session.is_modified());
    }

    #[test]
    fn test_import_text_decodes_at_session_width() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.txt");
        fs::write(&path, "-1\n256\n").unwrap();

        let mut session = session_with(&[], ElementWidth::Short);
        import_path(&mut session, &path).unwrap();
        assert_eq!(session.export_bytes(), vec![0xFF, 0xFF, 0x00, 0x01]);
    }

    #[test]
    fn test_import_text_tolerates_malformed_elements() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.txt");
        fs::write(&path, "5 abc 7").unwrap();

        let mut session = session_with(&[], ElementWidth::Byte);
        import_path(&mut session, &path).unwrap();
        assert_eq!(session.export_bytes(), vec![5, 0, 7]);
    }

    #[test]
    fn test_import_dispatch_is_by_extension_not_content() {
        // Decimal digits in a non-.txt file are still imported verbatim.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.dat");
        fs::write(&path, "12").unwrap();

        let mut session = session_with(&[], ElementWidth::Byte);
        import_path(&mut session, &path).unwrap();
        assert_eq!(session.export_bytes(), b"12".to_vec());
    }

    #[test]
    fn test_failed_import_leaves_buffer_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.bin");

        let mut session = session_with(&[1, 2, 3], ElementWidth::Byte);
        let err = import_path(&mut session, &path).unwrap_err();
        assert!(matches!(err, ImportExportError::Read { .. }));
        assert!(err.to_string().contains("missing.bin"));
        assert_eq!(session.export_bytes(), vec![1, 2, 3]);
        assert!(!session.is_modified());
    }

    #[test]
    fn test_export_raw_preserves_partial_tail() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.bin");

        let session = session_with(&[1, 0, 0, 0, 9, 9], ElementWidth::Int);
        export_path(&session, &path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), vec![1, 0, 0, 0, 9, 9]);
    }

    #[test]
    fn test_export_text_writes_whole_elements() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.txt");

        let session = session_with(&[1, 0, 0, 0, 9, 9], ElementWidth::Int);
        export_path(&session, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1\n");
    }

    #[test]
    fn test_export_does_not_consume_or_modify_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.bin");

        let session = session_with(&[1, 2], ElementWidth::Byte);
        export_path(&session, &path).unwrap();
        assert!(!session.is_modified());
    }

    #[test]
    fn test_export_to_unwritable_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        // A directory component that does not exist.
        let path = dir.path().join("no_such_dir").join("payload.bin");

        let session = session_with(&[1, 2], ElementWidth::Byte);
        let err = export_path(&session, &path).unwrap_err();
        assert!(matches!(err, ImportExportError::Write { .. }));
        assert!(err.to_string().contains("payload.bin"));
    }

    #[test]
    fn test_import_then_export_binary_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("in.bin");
        let dst = dir.path().join("out.bin");
        // Length deliberately not a multiple of the width.
        let payload = vec![0xDE, 0xAD, 0xBE, 0xEF, 0x01];
        fs::write(&src, &payload).unwrap();

        let mut session = session_with(&[], ElementWidth::Int);
        import_path(&mut session, &src).unwrap();
        export_path(&session, &dst).unwrap();
        assert_eq!(fs::read(&dst).unwrap(), payload);
    }
}
