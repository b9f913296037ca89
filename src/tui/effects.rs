use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace};

use super::action::{Action, StopwatchAction};
use super::types::Ticker;
use crate::config::Config;
use crate::time_source::TimeSource;

/// Cancellable repeating timers
///
/// Each ticker is a tokio task that wakes on a fixed period, reads the
/// time source and sends an action back to the runtime. Tickers never
/// touch application state. Stopping a ticker aborts its task; dropping
/// the set aborts every task.
pub struct Tickers {
    handles: HashMap<Ticker, JoinHandle<()>>,
    action_tx: mpsc::UnboundedSender<Action>,
    time_source: Arc<dyn TimeSource>,
    clock_period: Duration,
    stopwatch_period: Duration,
}

impl Tickers {
    pub fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        time_source: Arc<dyn TimeSource>,
        config: &Config,
    ) -> Self {
        Self {
            handles: HashMap::new(),
            action_tx,
            time_source,
            clock_period: config.clock_refresh_interval(),
            stopwatch_period: config.stopwatch_tick_interval(),
        }
    }

    fn period(&self, ticker: Ticker) -> Duration {
        match ticker {
            Ticker::Clock => self.clock_period,
            Ticker::Stopwatch => self.stopwatch_period,
        }
    }

    /// Arm a ticker, replacing any running instance
    ///
    /// The first wake happens immediately. Must be called from within a
    /// tokio runtime.
    pub fn start(&mut self, ticker: Ticker) {
        if let Some(previous) = self.handles.remove(&ticker) {
            previous.abort();
        }

        let period = self.period(ticker);
        debug!("TICKER: starting {:?} every {:?}", ticker, period);
        let handle = tokio::spawn(run_ticker(
            ticker,
            period,
            self.action_tx.clone(),
            Arc::clone(&self.time_source),
        ));
        self.handles.insert(ticker, handle);
    }

    pub fn stop(&mut self, ticker: Ticker) {
        if let Some(handle) = self.handles.remove(&ticker) {
            debug!("TICKER: stopping {:?}", ticker);
            handle.abort();
        }
    }

    pub fn stop_all(&mut self) {
        for (ticker, handle) in self.handles.drain() {
            debug!("TICKER: stopping {:?}", ticker);
            handle.abort();
        }
    }

    pub fn is_active(&self, ticker: Ticker) -> bool {
        self.handles
            .get(&ticker)
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for Tickers {
    fn drop(&mut self) {
        self.stop_all();
    }
}

async fn run_ticker(
    ticker: Ticker,
    period: Duration,
    action_tx: mpsc::UnboundedSender<Action>,
    time_source: Arc<dyn TimeSource>,
) {
    let mut interval = tokio::time::interval(period);
    // Skipped wakes lose nothing; the next tick reads the wall clock
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        interval.tick().await;
        let action = match ticker {
            Ticker::Clock => Action::ClockTick(time_source.now_local()),
            Ticker::Stopwatch => Action::Stopwatch(StopwatchAction::Tick {
                at: time_source.now_millis(),
            }),
        };
        if action_tx.send(action).is_err() {
            trace!("TICKER: {:?} receiver gone, exiting", ticker);
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_source::ManualTimeSource;

    fn tickers_with(
        source: Arc<ManualTimeSource>,
    ) -> (Tickers, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let config = Config {
            clock_refresh_ms: 50,
            stopwatch_tick_ms: 10,
            ..Config::default()
        };
        (Tickers::new(tx, source, &config), rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_stopwatch_ticker_emits_stamped_ticks() {
        let source = Arc::new(ManualTimeSource::new(1_000));
        let (mut tickers, mut rx) = tickers_with(Arc::clone(&source));

        tickers.start(Ticker::Stopwatch);
        assert!(tickers.is_active(Ticker::Stopwatch));

        let first = rx.recv().await.expect("ticker should send");
        assert_eq!(first, Action::Stopwatch(StopwatchAction::Tick { at: 1_000 }));

        source.advance(10);
        let second = rx.recv().await.expect("ticker should send");
        assert_eq!(second, Action::Stopwatch(StopwatchAction::Tick { at: 1_010 }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_clock_ticker_emits_clock_ticks() {
        let source = Arc::new(ManualTimeSource::new(1_700_000_000_000));
        let (mut tickers, mut rx) = tickers_with(source);

        tickers.start(Ticker::Clock);

        match rx.recv().await {
            Some(Action::ClockTick(now)) => assert_eq!(now.timestamp_millis(), 1_700_000_000_000),
            other => panic!("Expected ClockTick, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_ticker() {
        let source = Arc::new(ManualTimeSource::new(0));
        let (mut tickers, mut rx) = tickers_with(source);

        tickers.start(Ticker::Stopwatch);
        rx.recv().await.expect("ticker should send");

        tickers.stop(Ticker::Stopwatch);
        assert!(!tickers.is_active(Ticker::Stopwatch));

        tokio::time::sleep(Duration::from_millis(100)).await;
        // Anything still buffered was sent before the abort
        while rx.try_recv().is_ok() {}
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_replaces_running_ticker() {
        let source = Arc::new(ManualTimeSource::new(0));
        let (mut tickers, mut rx) = tickers_with(source);

        tickers.start(Ticker::Clock);
        tickers.start(Ticker::Clock);
        assert_eq!(tickers.handles.len(), 1);

        rx.recv().await.expect("ticker should send");
        tokio::time::sleep(Duration::from_millis(40)).await;
        // Only one clock task is alive, so only its immediate tick arrived
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_all_tickers() {
        let source = Arc::new(ManualTimeSource::new(0));
        let (mut tickers, mut rx) = tickers_with(source);

        tickers.start(Ticker::Clock);
        tickers.start(Ticker::Stopwatch);
        drop(tickers);

        tokio::time::sleep(Duration::from_millis(200)).await;
        while rx.try_recv().is_ok() {}
        // Every sender was owned by an aborted task or the dropped set
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_stop_unknown_ticker_is_a_no_op() {
        let source = Arc::new(ManualTimeSource::new(0));
        let (mut tickers, _rx) = tickers_with(source);

        tickers.stop(Ticker::Clock);
        assert!(!tickers.is_active(Ticker::Clock));
    }
}
