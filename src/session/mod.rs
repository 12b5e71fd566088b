//! Client-side editing sessions for the admin forms.
//!
//! A session wraps one loaded entity in a mutable draft, tracks the
//! save lifecycle (dirty flag, in-flight guard, transient "saved"
//! status) and produces the merge-patch payload a save submits.

mod blog;
mod list;
mod status;
mod trip;

pub use blog::BlogSession;
pub use list::{Entry, EntryId, SectionList};
pub use status::{SaveTracker, SessionError, SessionStatus, SAVED_LINGER};
pub use trip::{DayDraft, TripSession};
