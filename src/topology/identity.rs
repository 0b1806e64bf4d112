//! Identity keys: the partner-level projection of a topological reference.
//!
//! The history graph files nodes under an [`Identified::Key`] rather than under
//! the reference itself, so references that differ only by placement or
//! orientation resolve to one node.

use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::shape::{Shape, TShape};

/// A reference type whose logical identity can be projected to a hashable key.
///
/// Two values are partners iff their keys compare equal.
pub trait Identified {
    type Key: Eq + Hash + Clone + Debug;

    fn identity_key(&self) -> Self::Key;
}

/// Map key for [`Shape`]: the shared definition, compared by address.
///
/// Holding the `Arc` keeps the definition alive for as long as the key is
/// filed, so the address can never be recycled under a live entry.
#[derive(Clone)]
pub struct ShapeKey(Arc<TShape>);

impl ShapeKey {
    pub fn of(shape: &Shape) -> Self {
        ShapeKey(Arc::clone(shape.tshape()))
    }

    #[inline]
    fn addr(&self) -> *const TShape {
        Arc::as_ptr(&self.0)
    }
}

impl PartialEq for ShapeKey {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ShapeKey {}

impl Hash for ShapeKey {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl Debug for ShapeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ShapeKey")
            .field(&self.0.kind())
            .field(&self.addr())
            .finish()
    }
}

impl Identified for Shape {
    type Key = ShapeKey;

    #[inline]
    fn identity_key(&self) -> ShapeKey {
        ShapeKey::of(self)
    }
}
