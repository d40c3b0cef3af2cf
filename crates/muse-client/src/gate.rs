use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore, TryAcquireError};

use crate::error::{ClientError, Result};

/// One-request-at-a-time gate for a single UI control
///
/// Not a queue: a second request while one is in flight is refused
/// outright, the way a disabled submit button refuses a second click.
#[derive(Debug, Clone)]
pub struct Gate {
    permit: Arc<Semaphore>,
}

impl Gate {
    pub fn new() -> Self {
        Self {
            permit: Arc::new(Semaphore::new(1)),
        }
    }

    /// Claim the gate, or fail with [`ClientError::Busy`]
    ///
    /// The returned guard releases the gate on drop.
    pub fn try_begin(&self) -> Result<InFlight> {
        match Arc::clone(&self.permit).try_acquire_owned() {
            Ok(permit) => Ok(InFlight { _permit: permit }),
            Err(TryAcquireError::NoPermits | TryAcquireError::Closed) => Err(ClientError::Busy),
        }
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard held for the duration of one request
#[derive(Debug)]
pub struct InFlight {
    _permit: OwnedSemaphorePermit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_request_is_refused_while_first_is_in_flight() {
        let gate = Gate::new();
        let guard = gate.try_begin().expect("gate starts open");
        assert!(matches!(gate.try_begin(), Err(ClientError::Busy)));
        drop(guard);
        assert!(gate.try_begin().is_ok());
    }

    #[test]
    fn clones_share_the_same_gate() {
        let gate = Gate::new();
        let clone = gate.clone();
        let _guard = gate.try_begin().expect("gate starts open");
        assert!(matches!(clone.try_begin(), Err(ClientError::Busy)));
    }
}
