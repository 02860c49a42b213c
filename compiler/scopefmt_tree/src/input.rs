//! Ranged access to source text.
//!
//! Offsets are byte offsets. A source is either one contiguous string or a
//! sequence of chunks, as produced by an incremental reader; both answer the
//! same two questions through [`Input`]: "what text is in `from..to`" and
//! "which byte is at `offset`".

use std::borrow::Cow;
use std::io::{self, BufRead};

use crate::error::InputError;

/// Read-only source text with ranged access.
pub trait Input {
    /// Total length in bytes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Text in the half-open byte range `from..to`.
    ///
    /// Borrows when the range lies in one contiguous piece of storage.
    fn read(&self, from: usize, to: usize) -> Result<Cow<'_, str>, InputError>;

    /// The byte at `offset`, or `None` past the end.
    fn byte_at(&self, offset: usize) -> Option<u8>;
}

fn check_range(from: usize, to: usize, len: usize) -> Result<(), InputError> {
    if from > to {
        return Err(InputError::Reversed { from, to });
    }
    if to > len {
        return Err(InputError::OutOfRange { from, to, len });
    }
    Ok(())
}

impl Input for str {
    #[inline]
    fn len(&self) -> usize {
        str::len(self)
    }

    fn read(&self, from: usize, to: usize) -> Result<Cow<'_, str>, InputError> {
        check_range(from, to, str::len(self))?;
        self.get(from..to)
            .map(Cow::Borrowed)
            .ok_or(InputError::NotCharBoundary { from, to })
    }

    #[inline]
    fn byte_at(&self, offset: usize) -> Option<u8> {
        self.as_bytes().get(offset).copied()
    }
}

impl Input for String {
    #[inline]
    fn len(&self) -> usize {
        self.as_str().len()
    }

    fn read(&self, from: usize, to: usize) -> Result<Cow<'_, str>, InputError> {
        self.as_str().read(from, to)
    }

    #[inline]
    fn byte_at(&self, offset: usize) -> Option<u8> {
        self.as_str().byte_at(offset)
    }
}

/// Source text stored as a sequence of chunks.
///
/// Reads that stay within one chunk borrow; reads crossing chunk boundaries
/// allocate. Empty chunks are dropped on construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChunkedInput {
    chunks: Vec<String>,
    /// Start offset of each chunk, strictly increasing.
    starts: Vec<usize>,
    len: usize,
}

impl ChunkedInput {
    pub fn new<I, S>(chunks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut input = ChunkedInput::default();
        for chunk in chunks {
            input.push(chunk.into());
        }
        input
    }

    /// Read a whole stream, one line per chunk.
    pub fn from_reader<R: BufRead>(mut reader: R) -> io::Result<Self> {
        let mut input = ChunkedInput::default();
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                return Ok(input);
            }
            input.push(line);
        }
    }

    /// Append a chunk at the end of the source.
    pub fn push(&mut self, chunk: String) {
        if chunk.is_empty() {
            return;
        }
        self.starts.push(self.len);
        self.len += chunk.len();
        self.chunks.push(chunk);
    }

    pub fn chunks(&self) -> impl Iterator<Item = &str> {
        self.chunks.iter().map(String::as_str)
    }

    /// Index of the chunk containing `offset`. Requires `offset < len`.
    fn chunk_index(&self, offset: usize) -> usize {
        self.starts.partition_point(|&start| start <= offset) - 1
    }
}

impl Input for ChunkedInput {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn read(&self, from: usize, to: usize) -> Result<Cow<'_, str>, InputError> {
        check_range(from, to, self.len)?;
        if from == to {
            return Ok(Cow::Borrowed(""));
        }

        let first = self.chunk_index(from);
        let last = self.chunk_index(to - 1);
        let boundary = InputError::NotCharBoundary { from, to };

        if first == last {
            let start = self.starts[first];
            return self.chunks[first]
                .get(from - start..to - start)
                .map(Cow::Borrowed)
                .ok_or(boundary);
        }

        let mut text = String::with_capacity(to - from);
        for i in first..=last {
            let start = self.starts[i];
            let chunk = &self.chunks[i];
            let lo = from.saturating_sub(start);
            let hi = (to - start).min(chunk.len());
            text.push_str(chunk.get(lo..hi).ok_or_else(|| boundary.clone())?);
        }
        Ok(Cow::Owned(text))
    }

    fn byte_at(&self, offset: usize) -> Option<u8> {
        if offset >= self.len {
            return None;
        }
        let i = self.chunk_index(offset);
        self.chunks[i].as_bytes().get(offset - self.starts[i]).copied()
    }
}

/// Source bound to a printer: either kind of [`Input`], owned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Text(String),
    Chunked(ChunkedInput),
}

impl Default for Source {
    fn default() -> Self {
        Source::Text(String::new())
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Source::Text(text.to_owned())
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Source::Text(text)
    }
}

impl From<ChunkedInput> for Source {
    fn from(input: ChunkedInput) -> Self {
        Source::Chunked(input)
    }
}

impl Input for Source {
    fn len(&self) -> usize {
        match self {
            Source::Text(text) => text.len(),
            Source::Chunked(chunks) => chunks.len(),
        }
    }

    fn read(&self, from: usize, to: usize) -> Result<Cow<'_, str>, InputError> {
        match self {
            Source::Text(text) => text.read(from, to),
            Source::Chunked(chunks) => chunks.read(from, to),
        }
    }

    fn byte_at(&self, offset: usize) -> Option<u8> {
        match self {
            Source::Text(text) => text.byte_at(offset),
            Source::Chunked(chunks) => chunks.byte_at(offset),
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
