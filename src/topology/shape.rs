//! `Shape`: a value-typed topological reference.
//!
//! A `Shape` pairs a shared, immutable definition ([`TShape`], held behind an
//! `Arc`) with two overlays: a [`Location`] and an [`Orientation`]. Cloning a
//! `Shape` or changing its overlays never copies the definition, so the same
//! face picked up under different placements stays recognisable as one entity.
//!
//! Equality on `Shape` itself is deliberately not derived. Use
//! [`Shape::is_partner`], [`Shape::is_same`] or [`Shape::is_equal`] to say which
//! notion of "same" is meant; the history graph only ever uses partnership,
//! through [`ShapeKey`](super::identity::ShapeKey).

use std::fmt;
use std::sync::Arc;

use super::location::Location;
use super::orientation::Orientation;

/// Topological type of a shape definition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum ShapeKind {
    Compound,
    CompSolid,
    Solid,
    Shell,
    Face,
    Wire,
    Edge,
    Vertex,
}

impl ShapeKind {
    /// Short lowercase name used in dumps.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Compound => "compound",
            ShapeKind::CompSolid => "compsolid",
            ShapeKind::Solid => "solid",
            ShapeKind::Shell => "shell",
            ShapeKind::Face => "face",
            ShapeKind::Wire => "wire",
            ShapeKind::Edge => "edge",
            ShapeKind::Vertex => "vertex",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared definition of a topological entity.
///
/// Geometry is owned by the modelling kernel; here the definition only carries
/// what the history layer needs to describe it.
#[derive(Debug)]
pub struct TShape {
    kind: ShapeKind,
    tag: Option<String>,
}

impl TShape {
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
}

/// A located, oriented reference to a shared [`TShape`].
#[derive(Clone, Debug)]
pub struct Shape {
    tshape: Arc<TShape>,
    location: Location,
    orientation: Orientation,
}

impl Shape {
    /// Mint a fresh definition of `kind` with identity placement and forward orientation.
    pub fn new(kind: ShapeKind) -> Self {
        Self::from_tshape(Arc::new(TShape { kind, tag: None }))
    }

    /// Like [`Shape::new`], with a human-readable tag carried into dumps.
    pub fn tagged(kind: ShapeKind, tag: impl Into<String>) -> Self {
        Self::from_tshape(Arc::new(TShape {
            kind,
            tag: Some(tag.into()),
        }))
    }

    /// Wrap an existing shared definition.
    pub fn from_tshape(tshape: Arc<TShape>) -> Self {
        Self {
            tshape,
            location: Location::identity(),
            orientation: Orientation::Forward,
        }
    }

    #[inline]
    pub fn tshape(&self) -> &Arc<TShape> {
        &self.tshape
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.tshape.kind
    }

    #[inline]
    pub fn tag(&self) -> Option<&str> {
        self.tshape.tag()
    }

    #[inline]
    pub fn location(&self) -> &Location {
        &self.location
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Same definition, placement replaced by `location`.
    pub fn located(&self, location: Location) -> Shape {
        Shape {
            tshape: Arc::clone(&self.tshape),
            location,
            orientation: self.orientation,
        }
    }

    /// Same definition, placement composed with `by` (applied after the current one).
    pub fn moved(&self, by: &Location) -> Shape {
        self.located(by.multiplied(&self.location))
    }

    /// Same definition and placement, orientation replaced.
    pub fn oriented(&self, orientation: Orientation) -> Shape {
        Shape {
            tshape: Arc::clone(&self.tshape),
            location: self.location,
            orientation,
        }
    }

    /// Same definition and placement, orientation reversed.
    pub fn reversed(&self) -> Shape {
        self.oriented(self.orientation.reversed())
    }

    /// Same underlying definition, overlays ignored.
    #[inline]
    pub fn is_partner(&self, other: &Shape) -> bool {
        Arc::ptr_eq(&self.tshape, &other.tshape)
    }

    /// Partner with the same placement.
    pub fn is_same(&self, other: &Shape) -> bool {
        self.is_partner(other) && self.location == other.location
    }

    /// Same definition, placement and orientation.
    pub fn is_equal(&self, other: &Shape) -> bool {
        self.is_same(other) && self.orientation == other.orientation
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tag() {
            Some(tag) => write!(f, "{} {}", self.kind(), tag),
            None => write!(f, "{} @{:p}", self.kind(), Arc::as_ptr(&self.tshape)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlays_do_not_break_partnership() {
        let f = Shape::tagged(ShapeKind::Face, "F1");
        let moved = f.moved(&Location::translation(0.0, 0.0, 5.0));
        let rev = f.reversed();

        assert!(f.is_partner(&moved));
        assert!(f.is_partner(&rev));
        assert!(!f.is_same(&moved));
        assert!(f.is_same(&rev));
        assert!(!f.is_equal(&rev));
        assert!(f.is_equal(&f.clone()));
    }

    #[test]
    fn fresh_definitions_are_distinct() {
        let a = Shape::new(ShapeKind::Edge);
        let b = Shape::new(ShapeKind::Edge);
        assert!(!a.is_partner(&b));
    }

    #[test]
    fn display_prefers_tag() {
        let v = Shape::tagged(ShapeKind::Vertex, "V7");
        assert_eq!(v.to_string(), "vertex V7");
        assert_eq!(v.reversed().orientation(), Orientation::Reversed);
    }
}
