// crates/alert-json-sink/src/sink/stream.rs
// ============================================================================
// Module: Alert Output Streams
// Description: Ownership-tagged binding of a destination to a writable stream.
// Purpose: Separate shared process streams from exclusively owned files.
// Dependencies: alert-json-config, std
// ============================================================================

//! ## Overview
//! A [`StreamBinding`] is either a borrowed process stream, which is written
//! and flushed but never closed, or an owned file, which is released when the
//! binding is dropped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::io::Write;

use alert_json_config::Destination;

// ============================================================================
// SECTION: Stream Binding
// ============================================================================

/// Process-wide stream shared with other components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharedStream {
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
}

/// Stream bound to an open sink.
#[derive(Debug)]
pub enum StreamBinding {
    /// Borrowed process stream; never closed by the sink.
    Shared(SharedStream),
    /// File created for this sink; closed on release.
    Owned(BufWriter<File>),
}

impl StreamBinding {
    /// Binds a destination, creating or truncating file destinations.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the file cannot be created.
    pub fn bind(destination: &Destination) -> io::Result<Self> {
        match destination {
            Destination::Stdout => Ok(Self::Shared(SharedStream::Stdout)),
            Destination::Stderr => Ok(Self::Shared(SharedStream::Stderr)),
            Destination::File(path) => Ok(Self::Owned(BufWriter::new(File::create(path)?))),
        }
    }

    /// Returns true when the stream is a shared process stream.
    #[must_use]
    pub const fn is_shared(&self) -> bool {
        matches!(self, Self::Shared(_))
    }

    /// Writes the bytes in full and flushes the stream.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when writing or flushing fails.
    pub fn write_flushed(&mut self, bytes: &[u8]) -> io::Result<()> {
        match self {
            Self::Shared(SharedStream::Stdout) => write_all_flushed(io::stdout().lock(), bytes),
            Self::Shared(SharedStream::Stderr) => write_all_flushed(io::stderr().lock(), bytes),
            Self::Owned(file) => write_all_flushed(file, bytes),
        }
    }

    /// Releases the binding. Owned files are flushed and closed; shared
    /// streams are left open.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the final flush of an owned file fails.
    pub fn release(self) -> io::Result<()> {
        match self {
            Self::Shared(_) => Ok(()),
            Self::Owned(file) => {
                let file = file.into_inner().map_err(io::IntoInnerError::into_error)?;
                drop(file);
                Ok(())
            }
        }
    }
}

/// Writes all bytes and flushes the writer.
fn write_all_flushed<W: Write>(mut writer: W, bytes: &[u8]) -> io::Result<()> {
    writer.write_all(bytes)?;
    writer.flush()
}
