//! LineSource - one readable input stream
//!
//! Either the process's stdin (selected by a stdio sentinel) or a named
//! file. Lines are raw bytes; the terminator (`\n` or `\r\n`) is stripped
//! on read.

use bytes::Bytes;
use contracts::{StreamId, TeeError};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};
use tracing::debug;

#[derive(Debug)]
enum Reader {
    Stdin(BufReader<Stdin>),
    File(BufReader<File>),
}

/// One open input source
#[derive(Debug)]
pub struct LineSource {
    name: String,
    reader: Reader,
}

impl LineSource {
    /// Open the source named by `id`
    ///
    /// # Errors
    /// `TeeError::SourceOpen` when a named file cannot be opened; fatal to
    /// the whole pipeline.
    pub async fn open(id: &StreamId) -> Result<Self, TeeError> {
        if id.is_stdio() {
            debug!("reading from stdin");
            return Ok(Self {
                name: "stdin".to_string(),
                reader: Reader::Stdin(BufReader::new(tokio::io::stdin())),
            });
        }

        let file = File::open(id.as_str())
            .await
            .map_err(|e| TeeError::source_open(id.as_str(), e))?;
        debug!(path = %id, "opened input file");

        Ok(Self {
            name: id.to_string(),
            reader: Reader::File(BufReader::new(file)),
        })
    }

    /// Source name (used for logging/metrics)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the next line, or None at end of stream
    ///
    /// The trailing `\n` is stripped, along with a `\r` preceding it. A
    /// final line without a terminator is still returned.
    pub async fn next_line(&mut self) -> Result<Option<Bytes>, TeeError> {
        let mut buf = Vec::new();
        let read = match &mut self.reader {
            Reader::Stdin(r) => r.read_until(b'\n', &mut buf).await,
            Reader::File(r) => r.read_until(b'\n', &mut buf).await,
        }
        .map_err(|e| TeeError::source_read(&self.name, e))?;

        if read == 0 {
            return Ok(None);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        Ok(Some(Bytes::from(buf)))
    }
}
