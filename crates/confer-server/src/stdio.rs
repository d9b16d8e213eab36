//! Line-delimited JSON-RPC loop over a reader/writer pair.

use crate::service::Service;
use confer_protocol::{PARSE_ERROR, RpcRequest, RpcResponse};
use log::{debug, warn};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Serve requests line by line until the reader reaches end of input.
///
/// Each response is written as a single line and flushed immediately. The
/// writer is the wire; diagnostics go through the log facade on stderr.
pub async fn serve<R, W>(mut reader: R, mut writer: W, service: &Service) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            debug!("input stream closed");
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<RpcRequest>(&line) {
            Ok(request) => {
                debug!("request received (method={})", request.method);
                service.handle(request).await
            }
            Err(err) => {
                warn!("malformed request line: {err}");
                Some(RpcResponse::error(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {err}"),
                ))
            }
        };

        if let Some(response) = response {
            let encoded = serde_json::to_string(&response)?;
            writer.write_all(encoded.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
    }
}
