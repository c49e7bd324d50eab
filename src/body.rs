//! Bounded request-body accumulation.
//!
//! Callback bodies arrive as a stream of data frames: zero, one, or many, in
//! arrival order. [`BodyBuffer`] carries the accumulate-then-finalize
//! contract: frames append until the stream signals end, the buffer is
//! finalized exactly once (`finish` consumes it), and parsing only ever sees
//! the finalized bytes. A byte limit bounds accumulation so a client cannot
//! grow the buffer without bound.

use axum::body::Body;
use http_body_util::BodyExt;

/// Errors that can occur while accumulating a request body.
#[derive(Debug)]
pub enum BodyError {
    /// The body grew past the configured maximum size.
    TooLarge {
        /// The limit that was exceeded, in bytes.
        limit: usize,
    },
    /// The underlying stream failed before the body completed
    /// (client reset, transport error).
    Read(String),
}

impl std::fmt::Display for BodyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodyError::TooLarge { limit } => write!(f, "Request body exceeds {limit} bytes"),
            BodyError::Read(e) => write!(f, "Failed to read request body: {e}"),
        }
    }
}

/// Accumulates body frames in arrival order, bounded by a byte limit.
pub struct BodyBuffer {
    buf: Vec<u8>,
    limit: usize,
}

impl BodyBuffer {
    /// Create an empty buffer that accepts at most `limit` bytes.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            buf: Vec::new(),
            limit,
        }
    }

    /// Append one frame. Fails when the accumulated size would pass the limit;
    /// a body of exactly `limit` bytes is still accepted.
    pub fn append(&mut self, chunk: &[u8]) -> Result<(), BodyError> {
        if self.buf.len() + chunk.len() > self.limit {
            return Err(BodyError::TooLarge { limit: self.limit });
        }
        self.buf.extend_from_slice(chunk);
        Ok(())
    }

    /// Finalize the buffer, yielding the complete body. Consumes the buffer,
    /// so nothing can append after finalization.
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

/// Read an entire request body through a [`BodyBuffer`].
///
/// Resolves once the stream signals end-of-body. Trailer frames are skipped;
/// only data frames accumulate. Chunk boundaries are invisible to the caller.
pub async fn collect(mut body: Body, limit: usize) -> Result<Vec<u8>, BodyError> {
    let mut buffer = BodyBuffer::with_limit(limit);
    while let Some(frame) = body.frame().await {
        let frame = frame.map_err(|e| BodyError::Read(e.to_string()))?;
        if let Ok(data) = frame.into_data() {
            buffer.append(&data)?;
        }
    }
    Ok(buffer.finish())
}
