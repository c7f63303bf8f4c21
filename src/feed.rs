//! Simulated live feed.
//!
//! Stands in for the transaction notification socket: reports `connecting`,
//! then `open`, then posts one [`FeedEvent`] per interval. The task stops as
//! soon as the app's channel is closed.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::app::AppMessage;
use crate::config::FeedConfig;
use crate::models::{ConnectionStatus, FeedEvent};

pub fn spawn_simulated_feed(
    tx: mpsc::UnboundedSender<AppMessage>,
    config: FeedConfig,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!(interval_ms = config.interval_ms, "simulated feed starting");
        if run(&tx, &config).await.is_err() {
            tracing::debug!("app channel closed, simulated feed stopping");
        }
    })
}

async fn run(
    tx: &mpsc::UnboundedSender<AppMessage>,
    config: &FeedConfig,
) -> Result<(), mpsc::error::SendError<AppMessage>> {
    tx.send(AppMessage::ConnectionStatus(ConnectionStatus::Connecting))?;

    let mut ticker = interval(Duration::from_millis(config.interval_ms.max(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately
    ticker.tick().await;
    tx.send(AppMessage::ConnectionStatus(ConnectionStatus::Open))?;

    let mut sequence: u64 = 0;
    loop {
        ticker.tick().await;
        sequence += 1;
        tx.send(AppMessage::Event(FeedEvent::new(is_flagged(
            sequence,
            config.flag_every,
        ))))?;
    }
}

/// Every `flag_every`-th event is flagged; zero disables flagging.
fn is_flagged(sequence: u64, flag_every: u64) -> bool {
    flag_every != 0 && sequence % flag_every == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_flagged() {
        let flagged: Vec<u64> = (1..=15).filter(|n| is_flagged(*n, 7)).collect();
        assert_eq!(flagged, vec![7, 14]);
        assert!(!(1..=20).any(|n| is_flagged(n, 0)));
    }

    #[tokio::test]
    async fn test_feed_connects_then_emits_events() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = spawn_simulated_feed(
            tx,
            FeedConfig {
                enabled: true,
                interval_ms: 5,
                flag_every: 2,
            },
        );

        assert_eq!(
            rx.recv().await,
            Some(AppMessage::ConnectionStatus(ConnectionStatus::Connecting))
        );
        assert_eq!(
            rx.recv().await,
            Some(AppMessage::ConnectionStatus(ConnectionStatus::Open))
        );

        let mut flags = Vec::new();
        for _ in 0..4 {
            match rx.recv().await {
                Some(AppMessage::Event(event)) => flags.push(event.flagged),
                other => panic!("expected event, got {:?}", other),
            }
        }
        assert_eq!(flags, vec![false, true, false, true]);

        drop(rx);
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("feed should stop once the receiver is gone")
            .unwrap();
    }
}
