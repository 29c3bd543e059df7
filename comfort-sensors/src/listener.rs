//! Async feed listener
//!
//! Drives one [`ComfortDevice`] from two tokio channels, one per input feed,
//! and hands every sensor snapshot to an [`AsyncPublisher`] after each
//! recompute. Updates are processed one at a time in arrival order, so a
//! device never sees two recomputes interleaved.
//!
//! ```no_run
//! use comfort_sensors::{ComfortDevice, DeviceListener, FeedState, SensorSnapshot};
//! use tokio::sync::mpsc;
//!
//! # async fn example(device: ComfortDevice) {
//! let (temp_tx, temp_rx) = mpsc::channel(16);
//! let (hum_tx, hum_rx) = mpsc::channel(16);
//! let (out_tx, mut out_rx) = mpsc::channel::<SensorSnapshot>(64);
//!
//! let listener = tokio::spawn(async move {
//!     let mut out_tx = out_tx;
//!     DeviceListener::new(device).run(temp_rx, hum_rx, &mut out_tx).await
//! });
//!
//! temp_tx.send(FeedState::celsius(22.5)).await.ok();
//! hum_tx.send(FeedState::value(48.0)).await.ok();
//! drop((temp_tx, hum_tx));
//!
//! while let Some(snapshot) = out_rx.recv().await {
//!     println!("{} = {:?}", snapshot.entity_id, snapshot.state);
//! }
//! # let _ = listener.await;
//! # }
//! ```

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::device::{ComfortDevice, UpdateOutcome};
use crate::feed::FeedState;
use crate::sensor::SensorSnapshot;

/// Sink for sensor snapshots
#[async_trait]
pub trait AsyncPublisher: Send {
    type Error: std::fmt::Display + Send;

    /// Publish one sensor's current state
    async fn publish(&mut self, snapshot: &SensorSnapshot) -> Result<(), Self::Error>;
}

#[async_trait]
impl AsyncPublisher for mpsc::Sender<SensorSnapshot> {
    type Error = mpsc::error::SendError<SensorSnapshot>;

    async fn publish(&mut self, snapshot: &SensorSnapshot) -> Result<(), Self::Error> {
        self.send(snapshot.clone()).await
    }
}

/// Counters kept by a listener
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListenerStats {
    /// Feed updates received on either channel
    pub updates_received: u64,
    /// Updates that were placeholders and changed nothing
    pub updates_ignored: u64,
    /// Snapshots published successfully
    pub snapshots_published: u64,
    /// Snapshots the publisher rejected
    pub publish_failures: u64,
    /// Last publisher error message
    pub last_error: Option<String>,
}

/// Runs a device until both of its feeds close
#[derive(Debug)]
pub struct DeviceListener {
    device: ComfortDevice,
    stats: ListenerStats,
}

impl DeviceListener {
    pub fn new(device: ComfortDevice) -> Self {
        Self {
            device,
            stats: ListenerStats::default(),
        }
    }

    pub fn device(&self) -> &ComfortDevice {
        &self.device
    }

    pub fn stats(&self) -> &ListenerStats {
        &self.stats
    }

    /// Consume both feeds until their senders are dropped
    ///
    /// Publisher failures are logged and counted; they never stop the
    /// listener. Returns the listener so the final device state can be
    /// inspected.
    pub async fn run<P: AsyncPublisher>(
        mut self,
        mut temperature: mpsc::Receiver<FeedState>,
        mut humidity: mpsc::Receiver<FeedState>,
        publisher: &mut P,
    ) -> Self {
        let mut temperature_open = true;
        let mut humidity_open = true;

        log::info!("{}: listening for feed updates", self.device.slug());

        while temperature_open || humidity_open {
            let outcome = tokio::select! {
                update = temperature.recv(), if temperature_open => match update {
                    Some(state) => self.device.on_temperature(state),
                    None => {
                        log::debug!("{}: temperature feed closed", self.device.slug());
                        temperature_open = false;
                        continue;
                    }
                },
                update = humidity.recv(), if humidity_open => match update {
                    Some(state) => self.device.on_humidity(state),
                    None => {
                        log::debug!("{}: humidity feed closed", self.device.slug());
                        humidity_open = false;
                        continue;
                    }
                },
            };

            self.stats.updates_received += 1;
            match outcome {
                UpdateOutcome::Ignored => self.stats.updates_ignored += 1,
                UpdateOutcome::Recomputed { .. } => self.publish_all(publisher).await,
            }
        }

        log::info!(
            "{}: feeds closed after {} updates",
            self.device.slug(),
            self.stats.updates_received
        );
        self
    }

    async fn publish_all<P: AsyncPublisher>(&mut self, publisher: &mut P) {
        for snapshot in self.device.snapshots() {
            match publisher.publish(&snapshot).await {
                Ok(()) => self.stats.snapshots_published += 1,
                Err(err) => {
                    log::error!("Failed to publish {}: {}", snapshot.entity_id, err);
                    self.stats.publish_failures += 1;
                    self.stats.last_error = Some(err.to_string());
                }
            }
        }
    }
}
