//! Placement overlay: a rigid transform attached to a shape reference.
//!
//! Two references that differ only by `Location` still denote the same logical
//! entity; the history graph never looks at this type when resolving nodes.

use std::fmt;

const IDENTITY_ROTATION: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Rigid placement `x -> R x + t`.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Location {
    /// Row-major rotation matrix.
    pub rotation: [[f64; 3]; 3],
    /// Translation applied after the rotation.
    pub translation: [f64; 3],
}

impl Default for Location {
    fn default() -> Self {
        Self::identity()
    }
}

impl Location {
    /// The identity placement.
    #[inline]
    pub const fn identity() -> Self {
        Self {
            rotation: IDENTITY_ROTATION,
            translation: [0.0; 3],
        }
    }

    /// Pure translation by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        Self {
            rotation: IDENTITY_ROTATION,
            translation: [dx, dy, dz],
        }
    }

    /// Rotation by `angle` radians about the global Z axis.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            rotation: [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]],
            translation: [0.0; 3],
        }
    }

    /// Whether this placement leaves every point in place.
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Apply the placement to a point.
    pub fn transform_point(&self, p: [f64; 3]) -> [f64; 3] {
        let r = &self.rotation;
        let t = &self.translation;
        [
            r[0][0] * p[0] + r[0][1] * p[1] + r[0][2] * p[2] + t[0],
            r[1][0] * p[0] + r[1][1] * p[1] + r[1][2] * p[2] + t[1],
            r[2][0] * p[0] + r[2][1] * p[1] + r[2][2] * p[2] + t[2],
        ]
    }

    /// `self ∘ other`: apply `other` first, then `self`.
    pub fn multiplied(&self, other: &Location) -> Location {
        let a = &self.rotation;
        let b = &other.rotation;
        let mut rotation = [[0.0; 3]; 3];
        for (i, row) in rotation.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| a[i][k] * b[k][j]).sum();
            }
        }
        let moved = self.transform_point(other.translation);
        Location {
            rotation,
            translation: moved,
        }
    }

    /// The inverse placement (rotations are orthonormal, so `R^-1 = R^T`).
    pub fn inverted(&self) -> Location {
        let r = &self.rotation;
        let mut rotation = [[0.0; 3]; 3];
        for (i, row) in rotation.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = r[j][i];
            }
        }
        let t = &self.translation;
        let translation = [
            -(rotation[0][0] * t[0] + rotation[0][1] * t[1] + rotation[0][2] * t[2]),
            -(rotation[1][0] * t[0] + rotation[1][1] * t[1] + rotation[1][2] * t[2]),
            -(rotation[2][0] * t[0] + rotation[2][1] * t[1] + rotation[2][2] * t[2]),
        ];
        Location {
            rotation,
            translation,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return f.write_str("id");
        }
        let t = &self.translation;
        write!(f, "T({}, {}, {})", t[0], t[1], t[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f64; 3], b: [f64; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-12)
    }

    #[test]
    fn translation_moves_points() {
        let loc = Location::translation(1.0, 2.0, 3.0);
        assert_eq!(loc.transform_point([0.0, 0.0, 0.0]), [1.0, 2.0, 3.0]);
        assert!(!loc.is_identity());
        assert!(Location::default().is_identity());
    }

    #[test]
    fn inverse_cancels() {
        let loc = Location::rotation_z(0.7).multiplied(&Location::translation(4.0, -1.0, 2.0));
        let back = loc.inverted().multiplied(&loc);
        assert!(close(back.transform_point([3.0, 5.0, 7.0]), [3.0, 5.0, 7.0]));
    }

    #[test]
    fn composition_applies_right_first() {
        let rot = Location::rotation_z(std::f64::consts::FRAC_PI_2);
        let shift = Location::translation(1.0, 0.0, 0.0);
        // shift, then rotate: (0,0,0) -> (1,0,0) -> (0,1,0)
        let p = rot.multiplied(&shift).transform_point([0.0, 0.0, 0.0]);
        assert!(close(p, [0.0, 1.0, 0.0]));
    }
}
