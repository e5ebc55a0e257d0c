//! # GridBorder Designer
//!
//! This crate is the interaction and geometry core of GridBorder: diagrams
//! are drawn on the *borders* of a grid of cells, never inside cells.
//!
//! ## Core Components
//!
//! ### Geometry
//! - **Viewport**: Screen/grid coordinate mapping, pan and zoom
//! - **Hit Testing**: Classifies a screen point as a border, a row/column
//!   label, a label tail or nothing
//!
//! ### Document
//! - **Line Set**: Sparse set of drawn border segments keyed by position
//!   and orientation
//! - **Highlights**: Row/column colors with last-write-wins resolution
//! - **Operations**: Flood fill, directional extension, row/column bulk
//!   edits and resizing
//! - **Snapshots**: Equality-comparable copies for external undo/redo
//!
//! ### Interaction
//! - **Gestures**: Pointer and touch state machine driven by input events
//!   with cancelable timers
//! - **Frame Scheduling**: Coalesces redraw requests
//!
//! ### Persistence
//! - **Serialization**: Validated JSON import/export
//! - **Store**: Pluggable document storage
//!
//! ## Architecture
//!
//! ```text
//! Input events
//!   └── GestureMachine
//!         ├── Hit tester + Viewport
//!         └── Document (the only mutation surface)
//!               ├── LineSet
//!               ├── HighlightList
//!               └── ops (flood fill, extension, bulk, resize)
//!
//! Renderer (external) <── FrameScheduler
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gridborder_designer::{Document, GestureContext, GestureMachine, InputEvent, Viewport};
//!
//! let mut document = Document::new(20, 20)?;
//! let mut viewport = Viewport::new(800.0, 600.0);
//! let mut gestures = GestureMachine::default();
//!
//! let effects = gestures.handle(event, &mut GestureContext::new(&mut document, &mut viewport));
//! ```

pub mod document;
pub mod gesture;
pub mod model;
pub mod ops;
pub mod renderer;
pub mod serialization;
pub mod store;
pub mod viewport;

// Re-export all public types from submodules
pub use document::{Document, DocumentSnapshot};
pub use gesture::{
    GestureConfig, GestureContext, GestureEffect, GestureMachine, GestureState, InputEvent,
    Modifiers, PointerButton, TimerId, TimerKind, Tool, TouchId,
};
pub use hit_test::{cell_at, hit_test, hit_test_biased, HitTarget};
pub use model::{
    Cell, Highlight, HighlightKind, HighlightList, Line, LineBounds, LineKey, LineSet,
    LineStatistics, Orientation,
};
pub use ops::{FillRegion, SideDeltas};
pub use renderer::{FrameHandle, FrameHost, FrameScheduler};
pub use serialization::{export_json, import_json, DocumentFile};
pub use store::{DocumentStore, JsonFileStore, MemoryStore};
pub use viewport::{GridPoint, ScreenPoint, Viewport};
