//! Debounced autosave and recovery for one instrument's draft.
//!
//! Every edit replaces the pending write; only the newest snapshot reaches
//! the store. Writes from the timer and from `flush` are serialized by a
//! lock and tagged with a generation so a superseded write never runs.

use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use jiff::Timestamp;
use scat_core::{Assessment, keys};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use crate::envelope::{self, StoredDraft};
use crate::error::StorageError;
use crate::store::DraftStore;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(3000);
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// How to treat a stored draft that has no timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyDrafts {
    /// Treat it as infinitely old and discard it.
    #[default]
    Expire,
    /// Offer it for resumption without a capture time.
    Offer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftSettings {
    pub debounce: Duration,
    pub max_age: Duration,
    pub legacy: LegacyDrafts,
}

impl Default for DraftSettings {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            max_age: DEFAULT_MAX_AGE,
            legacy: LegacyDrafts::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftState {
    /// Nothing unsaved.
    Clean,
    /// An edit is waiting for its debounce timer.
    Dirty,
    /// A write is in progress.
    Persisting,
}

/// A draft found at recovery time, awaiting the user's choice.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDraft<R> {
    pub record: R,
    /// `None` for legacy drafts offered without a timestamp.
    pub captured_at: Option<Timestamp>,
}

impl<R> PendingDraft<R> {
    pub fn resume(self) -> R {
        self.record
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Recovery<R> {
    /// No usable draft; anything unreadable was cleared.
    None,
    /// A draft existed but was too old and has been cleared.
    Expired,
    Available(PendingDraft<R>),
}

#[derive(Debug)]
struct Tracker {
    state: DraftState,
    generation: u64,
}

#[derive(Debug)]
struct Shared {
    tracker: Mutex<Tracker>,
    write_lock: tokio::sync::Mutex<()>,
}

impl Shared {
    fn tracker(&self) -> MutexGuard<'_, Tracker> {
        self.tracker.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a new generation in `state`, superseding any pending write.
    fn advance(&self, state: DraftState) -> u64 {
        let mut tracker = self.tracker();
        tracker.generation += 1;
        tracker.state = state;
        tracker.generation
    }

    /// Move to `state` only if no newer edit arrived since `generation`.
    fn settle(&self, generation: u64, state: DraftState) -> bool {
        let mut tracker = self.tracker();
        if tracker.generation != generation {
            return false;
        }
        tracker.state = state;
        true
    }
}

pub struct DraftManager<R> {
    key: String,
    store: Arc<dyn DraftStore>,
    settings: DraftSettings,
    shared: Arc<Shared>,
    pending: Mutex<Option<JoinHandle<()>>>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Assessment> DraftManager<R> {
    pub fn new(store: Arc<dyn DraftStore>, settings: DraftSettings) -> Self {
        Self {
            key: keys::draft(R::KIND),
            store,
            settings,
            shared: Arc::new(Shared {
                tracker: Mutex::new(Tracker {
                    state: DraftState::Clean,
                    generation: 0,
                }),
                write_lock: tokio::sync::Mutex::new(()),
            }),
            pending: Mutex::new(None),
            _record: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn settings(&self) -> &DraftSettings {
        &self.settings
    }

    pub fn state(&self) -> DraftState {
        self.shared.tracker().state
    }

    fn pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn abort_pending(&self) {
        if let Some(handle) = self.pending().take() {
            handle.abort();
        }
    }

    /// Snapshot `record` and schedule it to be written after the debounce
    /// interval, replacing any write still waiting.
    pub fn record_changed(&self, record: &R) -> Result<(), StorageError> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| StorageError::NoRuntime)?;
        let bytes = envelope::encode(record, Timestamp::now())?;

        self.abort_pending();
        let generation = self.shared.advance(DraftState::Dirty);

        let shared = Arc::clone(&self.shared);
        let store = Arc::clone(&self.store);
        let key = self.key.clone();
        let debounce = self.settings.debounce;

        let handle = runtime.spawn(async move {
            tokio::time::sleep(debounce).await;
            let _guard = shared.write_lock.lock().await;
            if !shared.settle(generation, DraftState::Persisting) {
                return;
            }
            match store.write(&key, &bytes) {
                Ok(()) => {
                    shared.settle(generation, DraftState::Clean);
                    tracing::debug!(key = %key, "draft autosaved");
                }
                Err(e) => {
                    shared.settle(generation, DraftState::Dirty);
                    tracing::warn!(key = %key, error = %e, "draft autosave failed");
                }
            }
        });
        *self.pending() = Some(handle);
        Ok(())
    }

    /// Write `record` now, cancelling any pending autosave.
    pub async fn flush(&self, record: &R) -> Result<(), StorageError> {
        let bytes = envelope::encode(record, Timestamp::now())?;
        self.abort_pending();
        let generation = self.shared.advance(DraftState::Persisting);

        let _guard = self.shared.write_lock.lock().await;
        match self.store.write(&self.key, &bytes) {
            Ok(()) => {
                self.shared.settle(generation, DraftState::Clean);
                tracing::debug!(key = %self.key, "draft flushed");
                Ok(())
            }
            Err(e) => {
                self.shared.settle(generation, DraftState::Dirty);
                Err(e)
            }
        }
    }

    /// Drop any pending autosave without writing it. The edit it carried
    /// stays unsaved, so a Dirty manager remains Dirty.
    pub fn cancel(&self) {
        self.abort_pending();
        let state = match self.state() {
            DraftState::Clean => DraftState::Clean,
            DraftState::Dirty | DraftState::Persisting => DraftState::Dirty,
        };
        self.shared.advance(state);
    }

    /// Look for a stored draft, clearing it if it is unreadable or stale.
    pub fn recover(&self) -> Recovery<R> {
        self.recover_at(Timestamp::now())
    }

    pub fn recover_at(&self, now: Timestamp) -> Recovery<R> {
        let bytes = match self.store.read(&self.key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Recovery::None,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "draft unreadable, clearing");
                self.clear_quietly();
                return Recovery::None;
            }
        };

        let StoredDraft {
            record,
            captured_at,
        } = match envelope::decode::<R>(&self.key, &bytes) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "draft corrupt, clearing");
                self.clear_quietly();
                return Recovery::None;
            }
        };

        let fresh = match captured_at {
            Some(ts) => !self.is_stale(ts, now),
            None => self.settings.legacy == LegacyDrafts::Offer,
        };
        if !fresh {
            tracing::info!(key = %self.key, "draft expired, clearing");
            self.clear_quietly();
            return Recovery::Expired;
        }

        tracing::info!(
            key = %self.key,
            captured_at = ?captured_at,
            "draft available for resumption"
        );
        Recovery::Available(PendingDraft {
            record,
            captured_at,
        })
    }

    /// Age strictly greater than the maximum is stale; a capture time in
    /// the future is not.
    fn is_stale(&self, captured_at: Timestamp, now: Timestamp) -> bool {
        let age_ms = now.as_millisecond().saturating_sub(captured_at.as_millisecond());
        let max_ms = i64::try_from(self.settings.max_age.as_millis()).unwrap_or(i64::MAX);
        age_ms > max_ms
    }

    fn clear_quietly(&self) {
        if let Err(e) = self.store.remove(&self.key) {
            tracing::warn!(key = %self.key, error = %e, "failed to clear draft");
        }
    }

    /// The user chose to start fresh instead of resuming.
    pub fn discard(&self) -> Result<(), StorageError> {
        self.store.remove(&self.key)?;
        tracing::info!(key = %self.key, "draft discarded");
        Ok(())
    }

    /// Start a new assessment: drop pending work and the stored draft.
    pub fn reset(&self) -> Result<(), StorageError> {
        self.abort_pending();
        self.shared.advance(DraftState::Clean);
        self.discard()
    }
}
