use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// Cycles through loading phrases while a request is in flight
///
/// Replaces a free-standing interval handle: the task is owned by this
/// value, and dropping it cancels the task.
#[derive(Debug)]
pub struct PhraseCycler {
    current: watch::Receiver<String>,
    cancel: CancellationToken,
}

impl PhraseCycler {
    /// Spawn the cycling task
    ///
    /// Phrases repeat from the start once exhausted. An empty phrase
    /// list falls back to a single generic phrase.
    pub fn start(mut phrases: Vec<String>, period: Duration) -> Self {
        if phrases.is_empty() {
            phrases.push("Generating...".to_string());
        }

        let (tx, current) = watch::channel(phrases[0].clone());
        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // the first tick completes immediately and would skip phrase 0
            interval.tick().await;

            let mut index = 0;
            loop {
                tokio::select! {
                    () = task_cancel.cancelled() => break,
                    _ = interval.tick() => {
                        index = (index + 1) % phrases.len();
                        if tx.send(phrases[index].clone()).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Self { current, cancel }
    }

    /// Phrase to display right now
    pub fn current(&self) -> String {
        self.current.borrow().clone()
    }

    /// Watch for phrase changes
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.current.clone()
    }
}

impl Drop for PhraseCycler {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
