//! Topological references consumed by the history graph.
//!
//! This module provides a small, self-contained model of BREP references:
//! - [`Shape`]: shared definition plus placement and orientation overlays
//! - [`Location`] and [`Orientation`]: the overlays
//! - [`Identified`] and [`ShapeKey`]: the partner-level identity used as map key
//!
//! Geometry lives in the modelling kernel and is not represented here.

pub mod identity;
pub mod location;
pub mod orientation;
pub mod shape;

pub use identity::{Identified, ShapeKey};
pub use location::Location;
pub use orientation::Orientation;
pub use shape::{Shape, ShapeKind, TShape};
