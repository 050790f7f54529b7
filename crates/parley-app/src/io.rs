use kanal::{AsyncReceiver, AsyncSender};
use parley_types::{ErrorCode, HostRequest, HostResponse};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Read JSON lines from the host until it closes the stream
pub async fn read_requests<R>(
    reader: R,
    requests_tx: AsyncSender<HostRequest>,
    responses_tx: AsyncSender<HostResponse>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<HostRequest>(&line) {
            Ok(request) => requests_tx.send(request).await?,
            Err(e) => {
                tracing::warn!("bad json: {e}; line={line}");
                let response = HostResponse::error(
                    request_id(&line),
                    ErrorCode::InvalidRequest,
                    e.to_string(),
                );
                responses_tx.send(response).await?;
            }
        }
    }

    tracing::info!("Host closed stdin");
    Ok(())
}

/// Write responses as JSON lines, flushing after each so the host sees
/// them immediately
pub async fn write_responses<W>(
    mut writer: W,
    responses_rx: AsyncReceiver<HostResponse>,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Ok(response) = responses_rx.recv().await {
        let mut json = serde_json::to_string(&response)?;
        json.push('\n');
        writer.write_all(json.as_bytes()).await?;
        writer.flush().await?;
    }

    Ok(())
}

/// Best effort id of a line that failed to parse as a request
fn request_id(line: &str) -> String {
    serde_json::from_str::<serde_json::Value>(line)
        .ok()
        .and_then(|v| v.get("id").and_then(|id| id.as_str()).map(str::to_string))
        .unwrap_or_default()
}
