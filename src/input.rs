//! Reading the heartbeat batch from standard input.

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::Result;

/// Read the full payload until end-of-stream.
///
/// The bytes are opaque: the batch is forwarded verbatim and never parsed as
/// JSON here. An empty buffer means the host had nothing to send and is a
/// normal outcome, not an error.
pub async fn read_payload<R>(mut reader: R) -> Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut payload = Vec::new();
    reader.read_to_end(&mut payload).await?;
    Ok(payload)
}
