//! Editor observer trait for operator feedback.

use dv_core::GeoPoint;

use crate::{EditorError, StateKind};

/// Callbacks invoked by [`Editor::dispatch`][crate::Editor::dispatch].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — status line
///
/// ```rust,ignore
/// struct StatusLine;
///
/// impl EditorObserver for StatusLine {
///     fn on_transition(&mut self, _from: StateKind, to: StateKind) {
///         println!("{}", to.prompt());
///     }
///     fn on_warning(&mut self, error: &EditorError) {
///         eprintln!("warning: {error}");
///     }
/// }
/// ```
pub trait EditorObserver {
    /// Called after an event moved the editor to a different state.
    fn on_transition(&mut self, _from: StateKind, _to: StateKind) {}

    /// Called when an event was rejected.  The editor is unchanged.
    fn on_warning(&mut self, _error: &EditorError) {}

    /// Called for a map click while idle.  The editor does nothing else with
    /// it.
    fn on_idle_click(&mut self, _pos: GeoPoint) {}
}

/// An [`EditorObserver`] that does nothing.
pub struct NoopObserver;

impl EditorObserver for NoopObserver {}
