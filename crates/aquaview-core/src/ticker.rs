// ── Repeating-fetch lifecycle ──
//
// A ticker invokes an async producer once immediately on spawn and then on
// a fixed period, forwarding each produced value over a channel. The value
// type is opaque to the ticker: the poller produces fetch results, the
// clock produces timestamps, and failures are just values — one bad tick
// never stops the next.
//
// Every spawn returns an owned `TickerHandle`; dropping or stopping it
// cancels the task deterministically. Nothing is delivered after
// cancellation, even from a request already in flight.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Owned handle to a running ticker task.
///
/// The task stops when `stop` is called or the handle is dropped, so a
/// view cannot leak a running timer past its own teardown.
#[derive(Debug)]
pub struct TickerHandle {
    cancel: CancellationToken,
}

impl TickerHandle {
    /// Cancel the task. No value will be delivered after this returns.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Spawn a repeating ticker: one invocation immediately, then one per
/// `period`. A slow producer delays the next tick rather than overlapping
/// it, so at most one invocation is ever in flight.
pub fn spawn<F, Fut, T>(
    period: Duration,
    mut produce: F,
    tx: mpsc::UnboundedSender<T>,
) -> TickerHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let cancel = CancellationToken::new();
    let task_cancel = cancel.clone();

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // Don't burst ticks if we fall behind
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;
                () = task_cancel.cancelled() => break,
                _ = interval.tick() => {}
            }

            // The producer is cancel-aware too: an in-flight invocation is
            // abandoned on stop() rather than delivered late.
            let value = tokio::select! {
                biased;
                () = task_cancel.cancelled() => break,
                value = produce() => value,
            };

            // Receiver gone means the owning view is gone.
            if tx.send(value).is_err() {
                break;
            }
        }

        debug!("ticker stopped");
    });

    TickerHandle { cancel }
}

/// Spawn a single-shot producer with the same cancellation contract.
/// Used by the historical view, which fetches once per activation.
pub fn spawn_once<Fut, T>(fut: Fut, tx: mpsc::UnboundedSender<T>) -> TickerHandle
where
    Fut: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let cancel = CancellationToken::new();
    let task_cancel = cancel.clone();

    tokio::spawn(async move {
        let value = tokio::select! {
            biased;
            () = task_cancel.cancelled() => return,
            value = fut => value,
        };
        if !task_cancel.is_cancelled() {
            let _ = tx.send(value);
        }
    });

    TickerHandle { cancel }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Let spawned tasks run until they are all parked on timers.
    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    fn counting_producer(counter: &Arc<AtomicUsize>) -> impl FnMut() -> std::future::Ready<usize> + Send + 'static {
        let counter = Arc::clone(counter);
        move || std::future::ready(counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    #[tokio::test(start_paused = true)]
    async fn fires_exactly_once_before_the_period_elapses() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let counter = Arc::new(AtomicUsize::new(0));
        let _handle = spawn(Duration::from_secs(10), counting_producer(&counter), tx);

        settle().await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert_eq!(rx.try_recv().unwrap(), 1);
        assert!(rx.try_recv().is_err());

        // Just shy of a full period: still exactly one invocation.
        tokio::time::advance(Duration::from_millis(9_999)).await;
        settle().await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn fires_once_per_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let counter = Arc::new(AtomicUsize::new(0));
        let _handle = spawn(Duration::from_secs(10), counting_producer(&counter), tx);

        settle().await;
        for expected in 2..=4 {
            tokio::time::advance(Duration::from_secs(10)).await;
            settle().await;
            assert_eq!(counter.load(Ordering::SeqCst), expected);
        }

        let mut received = Vec::new();
        while let Ok(v) = rx.try_recv() {
            received.push(v);
        }
        assert_eq!(received, vec![1, 2, 3, 4]);
    }

    #[tokio::test(start_paused = true)]
    async fn no_tick_fires_after_stop() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let counter = Arc::new(AtomicUsize::new(0));
        let handle = spawn(Duration::from_secs(10), counting_producer(&counter), tx);

        settle().await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        handle.stop();
        assert!(handle.is_stopped());

        // The period keeps elapsing; nothing further may fire.
        tokio::time::advance(Duration::from_secs(100)).await;
        settle().await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        rx.try_recv().unwrap(); // the initial value
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_cancels() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let counter = Arc::new(AtomicUsize::new(0));
        let handle = spawn(Duration::from_secs(10), counting_producer(&counter), tx);

        settle().await;
        drop(handle);

        tokio::time::advance(Duration::from_secs(100)).await;
        settle().await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn a_failing_tick_does_not_stop_the_next() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let counter = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&counter);
        // Every other invocation "fails"; the ticker forwards both.
        let produce = move || {
            let n = c.fetch_add(1, Ordering::SeqCst) + 1;
            std::future::ready(if n % 2 == 0 { Err(n) } else { Ok(n) })
        };
        let _handle = spawn(Duration::from_secs(10), produce, tx);

        settle().await;
        tokio::time::advance(Duration::from_secs(10)).await;
        settle().await;
        tokio::time::advance(Duration::from_secs(10)).await;
        settle().await;

        assert_eq!(rx.try_recv().unwrap(), Ok(1));
        assert_eq!(rx.try_recv().unwrap(), Err(2));
        assert_eq!(rx.try_recv().unwrap(), Ok(3));
    }

    #[tokio::test(start_paused = true)]
    async fn in_flight_value_is_not_delivered_after_stop() {
        let (tx, mut rx) = mpsc::unbounded_channel::<u32>();
        let produce = || async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            42
        };
        let handle = spawn(Duration::from_secs(10), produce, tx);

        // First invocation is now sleeping in flight.
        settle().await;
        handle.stop();

        tokio::time::advance(Duration::from_secs(60)).await;
        settle().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn spawn_once_fires_exactly_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _handle = spawn_once(std::future::ready(7u32), tx);

        settle().await;
        assert_eq!(rx.try_recv().unwrap(), 7);

        tokio::time::advance(Duration::from_secs(100)).await;
        settle().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn spawn_once_stopped_delivers_nothing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let fut = async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            7u32
        };
        let handle = spawn_once(fut, tx);

        settle().await;
        handle.stop();
        tokio::time::advance(Duration::from_secs(60)).await;
        settle().await;

        assert!(rx.try_recv().is_err());
    }
}
