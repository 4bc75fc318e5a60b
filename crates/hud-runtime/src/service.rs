//! HUD service - runs a `Hud` on its own task
//!
//! The task is the only writer. Hosts send events through a bounded queue,
//! receive signals on an unbounded channel, and read the latest frame
//! from a shared snapshot.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use hud_core::{HudError, HudResult};
use hud_time::TimeSource;

use crate::{Hud, HudEvent, HudFrame, HudSignal};

enum Command {
    Event(HudEvent),
    Shutdown,
}

/// Cloneable sending side of a running service
#[derive(Clone)]
pub struct HudSender {
    commands: mpsc::Sender<Command>,
    frame: Arc<RwLock<HudFrame>>,
}

impl HudSender {
    pub async fn send(&self, event: HudEvent) -> HudResult<()> {
        self.commands
            .send(Command::Event(event))
            .await
            .map_err(|_| HudError::ServiceStopped)
    }

    /// Queue without waiting
    ///
    /// `QueueFull` is transient; only `ServiceStopped` means the loop is gone.
    pub fn try_send(&self, event: HudEvent) -> HudResult<()> {
        self.commands
            .try_send(Command::Event(event))
            .map_err(|err| match err {
                TrySendError::Full(_) => HudError::QueueFull,
                TrySendError::Closed(_) => HudError::ServiceStopped,
            })
    }

    /// For host threads outside the runtime
    pub fn blocking_send(&self, event: HudEvent) -> HudResult<()> {
        self.commands
            .blocking_send(Command::Event(event))
            .map_err(|_| HudError::ServiceStopped)
    }

    /// Has the service loop ended?
    pub fn is_closed(&self) -> bool {
        self.commands.is_closed()
    }

    /// Latest published frame
    pub fn frame(&self) -> HudFrame {
        self.frame.read().clone()
    }
}

/// Owner handle of a running service
pub struct HudHandle {
    sender: HudSender,
    task: JoinHandle<Hud>,
}

impl HudHandle {
    pub fn sender(&self) -> HudSender {
        self.sender.clone()
    }

    pub fn frame(&self) -> HudFrame {
        self.sender.frame()
    }

    pub async fn send(&self, event: HudEvent) -> HudResult<()> {
        self.sender.send(event).await
    }

    /// Stop the loop and take the runtime back
    pub async fn shutdown(self) -> HudResult<Hud> {
        // A closed queue means the loop already ended; still join it
        let _ = self.sender.commands.send(Command::Shutdown).await;
        self.task.await.map_err(|_| HudError::ServiceStopped)
    }
}

pub struct HudService;

impl HudService {
    /// Spawn the service loop on the current tokio runtime
    pub fn spawn<S>(hud: Hud, source: S) -> (HudHandle, mpsc::UnboundedReceiver<HudSignal>)
    where
        S: TimeSource + 'static,
    {
        let (command_tx, command_rx) = mpsc::channel(hud.config().event_buffer.max(1));
        let (signal_tx, signal_rx) = mpsc::unbounded_channel();
        let frame = Arc::new(RwLock::new(hud.frame()));

        let task = tokio::spawn(run(hud, source, command_rx, signal_tx, frame.clone()));

        let handle = HudHandle {
            sender: HudSender {
                commands: command_tx,
                frame,
            },
            task,
        };
        (handle, signal_rx)
    }
}

async fn run<S: TimeSource>(
    mut hud: Hud,
    source: S,
    mut commands: mpsc::Receiver<Command>,
    signals: mpsc::UnboundedSender<HudSignal>,
    frame: Arc<RwLock<HudFrame>>,
) -> Hud {
    let mut ticker = interval(hud.config().tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    info!(interval_ms = hud.config().tick_interval.as_millis() as u64, "hud service started");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let next = hud.tick(source.now());
                *frame.write() = next;
            }
            command = commands.recv() => match command {
                Some(Command::Event(event)) => {
                    for signal in hud.handle(event, source.now()) {
                        if signals.send(signal).is_err() {
                            debug!("signal receiver dropped");
                        }
                    }
                    *frame.write() = hud.frame();
                }
                Some(Command::Shutdown) | None => break,
            },
        }
    }

    info!(ticks = hud.stats().ticks, events = hud.stats().events, "hud service stopped");
    hud
}
