//! `dv-editor` — the interactive delivery-request editor.
//!
//! A map click means different things depending on what the operator asked
//! for last.  [`Editor`] owns the loaded documents, the staging area for
//! unconfirmed pairs, and the bulk-collect buffer, and routes every
//! [`EditorEvent`] through one explicit state machine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`editor`]   | `Editor`: dispatch, document loads, edits, export         |
//! | [`state`]    | `InteractionState`, `StateKind`                           |
//! | [`event`]    | `EditorEvent`                                             |
//! | [`staging`]  | `StagedStop`, `StagedPair`, `StopType`, `DurationFields`  |
//! | [`collect`]  | `CollectedNodes`, `CollectedPlan`                         |
//! | [`observer`] | `EditorObserver` trait, `NoopObserver`                    |
//! | [`error`]    | `EditorError`, `EditorResult<T>`                          |
//!
//! # State machine (summary)
//!
//! ```text
//! Idle ──locate──▶ AwaitingUserLocationClick ──click──▶ Idle
//! Idle ──warehouse─▶ AwaitingWarehouseClick ──click──▶ Idle
//! Idle ──add──▶ AwaitingPickupClick ──click──▶ AwaitingDeliveryClick
//!              ──click──▶ ReviewingNewDelivery ──confirm──▶ Idle
//! Idle ──collect──▶ CollectingNodes ⟲ click ──stop──▶ Idle
//! any non-idle ──cancel──▶ Idle
//! ```

pub mod collect;
pub mod editor;
pub mod error;
pub mod event;
pub mod observer;
pub mod staging;
pub mod state;


pub use collect::{CollectedNodes, CollectedPlan};
pub use editor::Editor;
pub use error::{EditorError, EditorResult};
pub use event::EditorEvent;
pub use observer::{EditorObserver, NoopObserver};
pub use staging::{DurationFields, StagedPair, StagedStop, StopType};
pub use state::{InteractionState, StateKind};
