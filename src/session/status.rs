//! Save state machine for an editing session.
//!
//! `idle → dirty` on any field mutation, `→ saving` on submit,
//! `→ saved | error`, and back to `idle` three seconds after a
//! successful save or immediately on the next mutation. A submit while
//! a save is already in flight is rejected.

use std::time::{Duration, Instant};

use thiserror::Error;

/// How long the `Saved` status lingers before decaying to `Idle`.
pub const SAVED_LINGER: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Dirty,
    Saving,
    Saved,
    Error,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A second submit was attempted before the first save finished.
    #[error("a save is already in flight")]
    SaveInFlight,
}

/// Tracks save status, unsaved-change flag and the user-facing message.
#[derive(Debug, Clone)]
pub struct SaveTracker {
    status: SessionStatus,
    message: Option<String>,
    saved_at: Option<Instant>,
    unsaved_changes: bool,
}

impl SaveTracker {
    pub fn new() -> Self {
        Self {
            status: SessionStatus::Idle,
            message: None,
            saved_at: None,
            unsaved_changes: false,
        }
    }

    /// Record a field mutation
    pub fn mark_dirty(&mut self) {
        self.unsaved_changes = true;
        self.status = SessionStatus::Dirty;
        self.saved_at = None;
    }

    /// Enter the `Saving` state. Fails if a save is already in flight.
    pub fn begin_save(&mut self) -> Result<(), SessionError> {
        if self.status == SessionStatus::Saving {
            return Err(SessionError::SaveInFlight);
        }
        self.status = SessionStatus::Saving;
        Ok(())
    }

    /// Record a successful save; clears the unsaved-change flag.
    pub fn complete_save(&mut self, now: Instant) {
        self.status = SessionStatus::Saved;
        self.message = Some("Changes saved successfully".to_string());
        self.saved_at = Some(now);
        self.unsaved_changes = false;
    }

    /// Record a failed save. The draft keeps its unsaved changes and the
    /// user must retry manually.
    pub fn fail_save(&mut self, message: impl Into<String>) {
        self.status = SessionStatus::Error;
        self.message = Some(format!("Error: {}", message.into()));
    }

    /// Current status, with `Saved` decaying to `Idle` after [`SAVED_LINGER`].
    pub fn status_at(&self, now: Instant) -> SessionStatus {
        match (self.status, self.saved_at) {
            (SessionStatus::Saved, Some(at)) if now.duration_since(at) >= SAVED_LINGER => {
                SessionStatus::Idle
            }
            (status, _) => status,
        }
    }

    /// Navigation guard: true while there are unsaved changes.
    pub fn blocks_navigation(&self) -> bool {
        self.unsaved_changes
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Default for SaveTracker {
    fn default() -> Self {
        Self::new()
    }
}
