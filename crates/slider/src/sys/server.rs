use crate::events::AppEvent;
use async_channel::Sender;
use carousel::ipc::{ControlCommand, SOCKET_PATH};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;

pub async fn run_server(tx: Sender<AppEvent>) {
    // Cleanup old socket if it exists
    if std::fs::metadata(SOCKET_PATH).is_ok() {
        let _ = std::fs::remove_file(SOCKET_PATH);
    }

    let listener = match UnixListener::bind(SOCKET_PATH) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket: {}", e);
            return;
        }
    };

    loop {
        match listener.accept().await {
            Ok((stream, _)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    forward_commands(BufReader::new(stream), tx).await;
                });
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}

/// Turns each line of a control connection into an [`AppEvent`]. Stops when
/// the peer hangs up or the app side of the channel is gone.
pub async fn forward_commands<R>(reader: R, tx: Sender<AppEvent>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    while let Ok(Some(line)) = lines.next_line().await {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<ControlCommand>() {
            Ok(ControlCommand::Goto(index)) => {
                if tx.send(AppEvent::Goto(index)).await.is_err() {
                    break;
                }
            }
            Err(e) => log::warn!("Rejected control command '{}': {}", line.trim(), e),
        }
    }
}
