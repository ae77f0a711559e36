//! The windowing/layout engine: memoized geometry and range resolution.

pub mod axis_geometry;
pub mod geometry_cache;
pub mod resolver;

// Re-export for convenience
pub use axis_geometry::{AxisGeometry, SizingSource};
pub use geometry_cache::{Axis, GeometryCache};
pub use resolver::{anchor_index, expand_range, resolve_range, ResolveParams};
