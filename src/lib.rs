//! # trellis-tui
//!
//! A retained-tree terminal UI toolkit. A tree of components is arranged by
//! pluggable layout strategies, painted onto an abstract character-grid
//! surface, and kept consistent with keyboard focus state and scrollable
//! viewports.
//!
//! ## Core Systems
//!
//! - **[`geometry`]** — Point, Size, Rect, Thickness cell-grid primitives
//! - **[`component`]** — the capability trait every tree node implements
//! - **[`tree`]** — slotmap-backed component arena with geometry bookkeeping
//! - **[`layout`]** — measure/arrange strategies: linear, grid, aligned, compass, inset
//! - **[`surface`]** — render surfaces, glyphs/attributes, capability-aware clipping
//! - **[`render`]** — compositor passes with damage tracking; crossterm driver
//! - **[`focus`]** — single-holder focus with atomic transfer and wraparound traversal
//! - **[`scroll`]** — viewports, resize strategies, scroll panes
//! - **[`frame`]** — border/title/scrollbar decorators with highlight state
//! - **[`event`]** — decoupled input types, key bindings, bubble routing
//! - **[`widgets`]** — minimal leaves (Fill, Label)
//! - **[`screen`]** / **[`app`]** — per-screen state owner and the runtime loop
//! - **[`testing`]** — string-snapshot helpers

// Foundation
pub mod geometry;

// Core systems
pub mod component;
pub mod layout;
pub mod surface;
pub mod tree;

// State machines
pub mod focus;
pub mod scroll;

// Decorators and leaves
pub mod frame;
pub mod widgets;

// Events and rendering
pub mod event;
pub mod render;

// Application
pub mod app;
pub mod error;
pub mod screen;

// Test support
pub mod testing;

pub use error::{Error, Result};
