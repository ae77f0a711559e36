//! Grid coordination.
//!
//! [`GridView`] owns the shared geometry, the four pane viewports, and
//! the cell provider, and exposes the public surface of the engine:
//! layout, scrolling, invalidation, and materialization into a
//! [`GridFrame`] the host can draw.

mod coordinator;
mod frame;

// Re-export for convenience.
pub use coordinator::{GridView, ScrollCommand, ScrollTarget};
pub use frame::{GridFrame, PaneFrame};
