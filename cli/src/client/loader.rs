use std::future::Future;
use std::io::Write;
use std::time::Duration;
use tokio::sync::oneshot;

/// How long a call may run before the spinner appears.
pub const LOADER_DELAY: Duration = Duration::from_millis(500);
const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// Progress feedback drawn while a slow call is in flight.
pub trait Indicator: Send + 'static {
    fn tick(&mut self);
    fn finish(&mut self);
}

/// Braille dot spinner written to stderr.
#[derive(Debug, Default)]
pub struct TerminalSpinner {
    frame: usize,
}

impl TerminalSpinner {
    const FRAMES: [&'static str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
}

impl Indicator for TerminalSpinner {
    fn tick(&mut self) {
        let frame = Self::FRAMES[self.frame % Self::FRAMES.len()];
        self.frame += 1;
        let mut stderr = std::io::stderr();
        let _ = write!(stderr, "\r\x1b[35m{frame}\x1b[0m Waiting for response...");
        let _ = stderr.flush();
    }

    fn finish(&mut self) {
        let mut stderr = std::io::stderr();
        let _ = write!(stderr, "\r\x1b[2K");
        let _ = stderr.flush();
    }
}

/// Runs `call` while a timer races it. If the timer wins, `indicator` ticks
/// until the call completes and is finished before this returns. If the call
/// wins, the timer is cancelled and the indicator is never touched.
pub async fn run_with_loader<T, F, I>(delay: Duration, mut indicator: I, call: F) -> T
where
    F: Future<Output = T>,
    I: Indicator,
{
    let (done_tx, mut done_rx) = oneshot::channel::<()>();

    let watcher = tokio::spawn(async move {
        tokio::select! {
            _ = &mut done_rx => return,
            _ = tokio::time::sleep(delay) => {}
        }

        let mut ticker = tokio::time::interval(FRAME_INTERVAL);
        loop {
            tokio::select! {
                _ = &mut done_rx => break,
                _ = ticker.tick() => indicator.tick(),
            }
        }
        indicator.finish();
    });

    let output = call.await;
    let _ = done_tx.send(());
    let _ = watcher.await;
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Counting {
        ticks: Arc<AtomicUsize>,
        finishes: Arc<AtomicUsize>,
    }

    impl Indicator for Counting {
        fn tick(&mut self) {
            self.ticks.fetch_add(1, Ordering::SeqCst);
        }

        fn finish(&mut self) {
            self.finishes.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_fast_call_never_starts_indicator() {
        let counting = Counting::default();
        let out = run_with_loader(Duration::from_millis(200), counting.clone(), async { 7 }).await;

        assert_eq!(out, 7);
        assert_eq!(counting.ticks.load(Ordering::SeqCst), 0);
        assert_eq!(counting.finishes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_slow_call_starts_and_stops_indicator_once() {
        let counting = Counting::default();
        let out = run_with_loader(Duration::from_millis(10), counting.clone(), async {
            tokio::time::sleep(Duration::from_millis(250)).await;
            "done"
        })
        .await;

        assert_eq!(out, "done");
        assert!(counting.ticks.load(Ordering::SeqCst) > 0);
        assert_eq!(counting.finishes.load(Ordering::SeqCst), 1);

        let ticks = counting.ticks.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(counting.ticks.load(Ordering::SeqCst), ticks);
    }
}
