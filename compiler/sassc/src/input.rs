//! Stream input accumulation.
//!
//! Standard input has no length known in advance, so it is drained in
//! fixed-size chunks into one owned buffer. Growth is checked with
//! `try_reserve_exact`; an allocation failure is reported instead of aborting.

use std::collections::TryReserveError;
use std::io::{self, ErrorKind, Read};

use tracing::{debug, trace};

/// Bytes requested from the stream per read.
pub const CHUNK_SIZE: usize = 512;

/// Failure while draining a stream. Both variants are fatal to the invocation.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Allocation failed: {0}")]
    OutOfMemory(#[from] TryReserveError),
    #[error("Error reading standard input: {0}")]
    Read(#[source] io::Error),
}

/// Read `reader` to end of stream and return every byte, in order.
///
/// An empty stream is a valid (empty) stylesheet. Interrupted reads are
/// retried. On error the partial buffer is dropped.
pub fn accumulate<R: Read>(mut reader: R) -> Result<Vec<u8>, InputError> {
    let mut buffer: Vec<u8> = Vec::new();
    let mut chunk = [0u8; CHUNK_SIZE];

    loop {
        let read = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(read) => read,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(InputError::Read(err)),
        };
        buffer.try_reserve_exact(read)?;
        buffer.extend_from_slice(&chunk[..read]);
        trace!(read, total = buffer.len(), "input chunk");
    }

    debug!(bytes = buffer.len(), "input accumulated");
    Ok(buffer)
}
