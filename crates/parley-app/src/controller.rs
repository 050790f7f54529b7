use std::future::Future;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use parley_types::{HostRequest, HostResponse};
use tokio::io::{AsyncBufRead, AsyncWrite};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::{read_requests, write_responses};
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub host_to_app: (AsyncSender<HostRequest>, AsyncReceiver<HostRequest>),
    pub app_to_host: (AsyncSender<HostResponse>, AsyncReceiver<HostResponse>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            host_to_app: kanal::bounded_async(capacity),
            app_to_host: kanal::bounded_async(capacity),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Spawn reader, event loop and writer. Each task owns its channel ends,
    /// so closing the reader drains the pipeline from left to right.
    pub fn spawn_tasks<R, W>(&self, reader: R, writer: W, capacity: usize) -> JoinSet<anyhow::Result<()>>
    where
        R: AsyncBufRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let ChannelSet {
            host_to_app: (requests_tx, requests_rx),
            app_to_host: (responses_tx, responses_rx),
        } = ChannelSet::new(capacity);

        let mut tasks = JoinSet::new();

        tasks.spawn(read_requests(reader, requests_tx, responses_tx.clone()));
        tasks.spawn(event_loop(self.state.clone(), requests_rx, responses_tx));
        tasks.spawn(write_responses(writer, responses_rx));

        tasks
    }

    /// Run until the host closes its stream or `shutdown` resolves
    pub async fn run<R, W>(
        &self,
        reader: R,
        writer: W,
        shutdown: impl Future<Output = ()>,
    ) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let capacity = self.state.config.read().await.channel_capacity.max(1);
        let mut tasks = self.spawn_tasks(reader, writer, capacity);
        let cancel = self.cancel_token.clone();

        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Shutdown requested");
                    self.shutdown();
                    tasks.abort_all();
                    break;
                }
                _ = cancel.cancelled() => {
                    tasks.abort_all();
                    break;
                }
                joined = tasks.join_next() => match joined {
                    Some(Ok(Ok(()))) => {}
                    Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                    Some(Err(e)) if e.is_cancelled() => {}
                    Some(Err(e)) => tracing::error!("task panicked: {e}"),
                    None => break,
                },
            }
        }

        Ok(())
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
