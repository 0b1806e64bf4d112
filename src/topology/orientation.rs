//! Boundary orientation overlay carried by a [`Shape`](super::shape::Shape).

use std::fmt;

/// Orientation of a sub-shape relative to the boundary it belongs to.
///
/// `Forward`/`Reversed` flip under reversal; `Internal`/`External` are fixed
/// points of the reversal and absorb composition.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Orientation {
    /// Aligned with the parent boundary.
    #[default]
    Forward,
    /// Opposite to the parent boundary.
    Reversed,
    /// Lies inside the material on both sides.
    Internal,
    /// Lies outside the material on both sides.
    External,
}

impl Orientation {
    /// The orientation seen from the other side of the boundary.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Forward => Orientation::Reversed,
            Orientation::Reversed => Orientation::Forward,
            other => other,
        }
    }

    /// Orientation of a sub-shape oriented `self` placed inside a parent
    /// oriented `outer`.
    #[inline]
    pub fn compose(self, outer: Orientation) -> Self {
        match (outer, self) {
            (Orientation::Forward, o) => o,
            (Orientation::Reversed, o) => o.reversed(),
            (Orientation::Internal, _) => Orientation::Internal,
            (Orientation::External, _) => Orientation::External,
        }
    }

    /// Whether this is one of the two flippable boundary orientations.
    #[inline]
    pub fn is_boundary(self) -> bool {
        matches!(self, Orientation::Forward | Orientation::Reversed)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Orientation::Forward => "+",
            Orientation::Reversed => "-",
            Orientation::Internal => "i",
            Orientation::External => "e",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversal_is_an_involution() {
        for o in [
            Orientation::Forward,
            Orientation::Reversed,
            Orientation::Internal,
            Orientation::External,
        ] {
            assert_eq!(o.reversed().reversed(), o);
        }
        assert_eq!(Orientation::Internal.reversed(), Orientation::Internal);
    }

    #[test]
    fn compose_follows_parent() {
        use Orientation::*;
        assert_eq!(Forward.compose(Forward), Forward);
        assert_eq!(Forward.compose(Reversed), Reversed);
        assert_eq!(Reversed.compose(Reversed), Forward);
        assert_eq!(Reversed.compose(Internal), Internal);
        assert_eq!(Forward.compose(External), External);
    }
}
