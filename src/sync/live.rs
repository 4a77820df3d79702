use std::time::Duration;
use chrono::{DateTime, Local};
use crate::error::KioskError;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(3000);

/// Outcome of feeding a fetch result into a [`LiveCollection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    Replaced,
    Failed(KioskError),
    /// The response belongs to a view that was torn down or remounted.
    Discarded,
}

/// In-memory snapshot of one remote collection.
///
/// Each mount opens a new epoch; responses carry the epoch they were
/// requested under and are dropped once it is over. Within one epoch
/// responses are not sequenced, so the last one to arrive wins.
#[derive(Debug, Clone)]
pub struct LiveCollection<T> {
    items: Vec<T>,
    epoch: u64,
    attached: bool,
    loaded: bool,
    last_synced: Option<DateTime<Local>>,
    last_error: Option<KioskError>,
}

impl<T> Default for LiveCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            epoch: 0,
            attached: false,
            loaded: false,
            last_synced: None,
            last_error: None,
        }
    }
}

impl<T> LiveCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the view and returns the ticket for the first fetch.
    pub fn mount(&mut self) -> u64 {
        self.epoch += 1;
        self.attached = true;
        self.epoch
    }

    /// Ticket for a follow-up fetch (poll tick or post-write refresh).
    pub fn ticket(&self) -> Option<u64> {
        self.is_attached().then_some(self.epoch)
    }

    pub fn detach(&mut self) {
        if self.attached {
            self.epoch += 1;
            self.attached = false;
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn apply(&mut self, ticket: u64, result: Result<Vec<T>, KioskError>) -> Applied {
        if !self.is_attached() || ticket != self.epoch {
            tracing::debug!("Discarding response for epoch {} (current {})", ticket, self.epoch);
            return Applied::Discarded;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.loaded = true;
                self.last_synced = Some(Local::now());
                self.last_error = None;
                Applied::Replaced
            }
            Err(err) => {
                // Last good snapshot stays on screen.
                self.last_error = Some(err.clone());
                Applied::Failed(err)
            }
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn last_synced(&self) -> Option<DateTime<Local>> {
        self.last_synced
    }

    pub fn last_error(&self) -> Option<&KioskError> {
        self.last_error.as_ref()
    }
}

/// Fixed cadence of the dashboard poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSchedule {
    pub interval: Duration,
}

impl Default for PollSchedule {
    fn default() -> Self {
        Self { interval: DEFAULT_POLL_INTERVAL }
    }
}

impl PollSchedule {
    pub fn from_millis(millis: u64) -> Self {
        // A zero interval would spin the subscription.
        Self { interval: Duration::from_millis(millis.max(250)) }
    }
}
