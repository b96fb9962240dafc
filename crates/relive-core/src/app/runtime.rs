//! Runtime - controller を駆動する単一のイベントループ
//!
//! # フロー
//! 1. `Runtime::new()` で command channel と `RuntimeHandle` を作る
//! 2. `run()` が command と tick を `select!` で待つ（command 優先）
//! 3. Shutdown か全 handle の drop で unload して controller を返す
//!
//! controller に触るのはこのループだけなので lock は不要。

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use super::controller::Controller;
use super::status::StatusView;
use crate::domain::Tick;
use crate::error::ReliveError;
use crate::ports::{Scheduler, Surface, TickReceiver};

const COMMAND_BUFFER: usize = 16;

type Reply<T> = oneshot::Sender<T>;

/// Runtime への要求
#[derive(Debug)]
enum Command {
    Load(Reply<Result<(), ReliveError>>),
    Unload(Reply<Result<(), ReliveError>>),
    Status(Reply<StatusView>),
    Shutdown(Reply<()>),
}

/// RuntimeHandle は Runtime へのクライアント
#[derive(Debug, Clone)]
pub struct RuntimeHandle {
    commands: mpsc::Sender<Command>,
}

impl RuntimeHandle {
    async fn request<T>(&self, make: impl FnOnce(Reply<T>) -> Command) -> Result<T, ReliveError> {
        let (tx, rx) = oneshot::channel();
        self.commands
            .send(make(tx))
            .await
            .map_err(|_| ReliveError::RuntimeStopped)?;
        rx.await.map_err(|_| ReliveError::RuntimeStopped)
    }

    pub async fn load(&self) -> Result<(), ReliveError> {
        self.request(Command::Load).await?
    }

    pub async fn unload(&self) -> Result<(), ReliveError> {
        self.request(Command::Unload).await?
    }

    pub async fn status(&self) -> Result<StatusView, ReliveError> {
        self.request(Command::Status).await
    }

    /// unload してループを止める。完了まで待つ。
    pub async fn shutdown(&self) -> Result<(), ReliveError> {
        self.request(Command::Shutdown).await
    }
}

pub struct Runtime<S, T> {
    controller: Controller<S, T>,
    ticks: TickReceiver,
    commands: mpsc::Receiver<Command>,
}

impl<S: Surface, T: Scheduler> Runtime<S, T> {
    pub fn new(controller: Controller<S, T>, ticks: TickReceiver) -> (Self, RuntimeHandle) {
        let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
        let runtime = Self {
            controller,
            ticks,
            commands: rx,
        };
        (runtime, RuntimeHandle { commands: tx })
    }

    /// ループを回す。終了時には unload 済みの controller を返す。
    pub async fn run(mut self) -> Controller<S, T> {
        info!("runtime started");
        let mut shutdown_reply = None;

        loop {
            tokio::select! {
                biased;

                command = self.commands.recv() => match command {
                    Some(Command::Shutdown(reply)) => {
                        shutdown_reply = Some(reply);
                        break;
                    }
                    Some(Command::Load(reply)) => {
                        let _ = reply.send(self.controller.load());
                    }
                    Some(Command::Unload(reply)) => {
                        let _ = reply.send(self.controller.unload());
                    }
                    Some(Command::Status(reply)) => {
                        let _ = reply.send(self.controller.status());
                    }
                    // 全 handle が drop された
                    None => break,
                },
                Some(timer) = self.ticks.recv() => {
                    match self.controller.on_interval(timer) {
                        Ok(Tick::Rendered { .. }) => {}
                        Ok(Tick::Ignored { reason }) => debug!(%timer, ?reason, "tick skipped"),
                        Err(e) => warn!(%timer, error = %e, "tick failed"),
                    }
                }
            }
        }

        if let Err(e) = self.controller.unload() {
            warn!(error = %e, "unload on shutdown failed");
        }
        info!("runtime stopped");
        if let Some(reply) = shutdown_reply {
            // 送り手が待っていなくても問題ない
            let _ = reply.send(());
        }
        self.controller
    }
}
