//! LineStore - the buffered line set shared between pipeline stages
//!
//! Append-only during ingest, transformed in place afterwards. The driver
//! owns it exclusively and hands it to each stage in turn; no two stages
//! ever hold it at the same time.

use bytes::Bytes;

/// Ordered, mutable sequence of text lines (terminator excluded)
#[derive(Debug, Clone, Default)]
pub struct LineStore {
    lines: Vec<Bytes>,
}

impl LineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line, preserving arrival order
    #[inline]
    pub fn push(&mut self, line: Bytes) {
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[Bytes] {
        &self.lines
    }

    /// Mutable access for the transform stage
    pub fn lines_mut(&mut self) -> &mut Vec<Bytes> {
        &mut self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bytes> {
        self.lines.iter()
    }

    pub fn into_lines(self) -> Vec<Bytes> {
        self.lines
    }
}

impl FromIterator<Bytes> for LineStore {
    fn from_iter<I: IntoIterator<Item = Bytes>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}
