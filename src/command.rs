use std::process::{ExitStatus, Stdio};

use log::{debug, warn};
use tokio::{
    io::{AsyncRead, AsyncReadExt},
    process::Command,
    sync::mpsc,
};

use crate::{
    channel::ConsoleLog,
    config::ConsoleConfig,
    error::{ConsoleError, Result},
    session::{ConsoleSession, Source},
};

#[derive(Debug, Clone)]
pub struct OutputChunk {
    pub source: Source,
    pub bytes: Vec<u8>,
}

/// Forwards whatever `reader` yields, read by read, until EOF.
pub async fn pump_reader<R: AsyncRead + Unpin>(
    mut reader: R,
    source: Source,
    read_buffer: usize,
    sender: mpsc::Sender<OutputChunk>,
) -> Result<()> {
    let mut buf = vec![0u8; read_buffer.max(1)];
    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        sender
            .send(OutputChunk {
                source,
                bytes: buf[..n].to_vec(),
            })
            .await
            .map_err(|_| ConsoleError::ChannelClosed)?;
    }
    Ok(())
}

fn spawn_pump<R: AsyncRead + Unpin + Send + 'static>(
    reader: R,
    source: Source,
    read_buffer: usize,
    sender: mpsc::Sender<OutputChunk>,
) {
    tokio::spawn(async move {
        if let Err(err) = pump_reader(reader, source, read_buffer, sender).await {
            warn!("{:?} pump stopped: {:?}", source, err);
        }
    });
}

/// Runs `command`, styling its stdout and stderr through `session` in the
/// order chunks arrive and appending every frame to `log`. Dropping the
/// returned future kills the child.
pub async fn run_command(
    mut command: Command,
    session: &mut ConsoleSession,
    log: &ConsoleLog,
    config: &ConsoleConfig,
) -> Result<ExitStatus> {
    let mut child = command
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;

    let (tx, mut rx) = mpsc::channel(config.channel_capacity.max(1));
    if let Some(stdout) = child.stdout.take() {
        spawn_pump(stdout, Source::Stdout, config.read_buffer, tx.clone());
    }
    if let Some(stderr) = child.stderr.take() {
        spawn_pump(stderr, Source::Stderr, config.read_buffer, tx.clone());
    }
    // the loop below ends once both pumps have dropped their senders
    drop(tx);
    while let Some(chunk) = rx.recv().await {
        log.push(session.feed_bytes(chunk.source, &chunk.bytes));
    }

    let status = child.wait().await?;
    debug!("session {:?} command exited: {}", session.id(), status);
    Ok(status)
}
