use crate::Vec3;

/// Axis-aligned bounding box over a set of points.
///
/// The box is stored as componentwise `min`/`max` corners. A box that has
/// not absorbed any point yet is the `EMPTY` sentinel (min at +infinity,
/// max at -infinity); folding points or other boxes into it behaves as an
/// identity fold since min/max are associative and commutative.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// The empty sentinel: contains nothing, identity for `union`/`grow`.
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    /// Create a new AABB from explicit corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create a degenerate AABB containing exactly one point (min == max).
    pub fn from_point(p: Vec3) -> Self {
        Self { min: p, max: p }
    }

    /// Returns true if this box is the empty sentinel (no points absorbed).
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    /// Fold one point into the box, componentwise.
    pub fn grow(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Componentwise union of two boxes.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// The (minX, minY, minZ, maxX, maxY, maxZ) 6-tuple.
    pub fn to_array(&self) -> [f32; 6] {
        [
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z,
        ]
    }

    /// Returns the center point of the bounding box.
    pub fn centroid(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the diagonal length of the bounding box.
    pub fn size(&self) -> f32 {
        (self.max - self.min).length()
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_identity() {
        let mut aabb = Aabb::EMPTY;
        assert!(aabb.is_empty());

        aabb.grow(Vec3::new(1.0, 2.0, 3.0));
        assert!(!aabb.is_empty());
        assert_eq!(aabb.min, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_grow_folds_min_and_max() {
        let mut aabb = Aabb::from_point(Vec3::new(0.0, 0.0, 0.0));
        aabb.grow(Vec3::new(10.0, -5.0, 2.0));
        aabb.grow(Vec3::new(-1.0, 3.0, 1.0));

        assert_eq!(aabb.min, Vec3::new(-1.0, -5.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(10.0, 3.0, 2.0));
    }

    #[test]
    fn test_union() {
        let box1 = Aabb::new(Vec3::ZERO, Vec3::new(5.0, 5.0, 5.0));
        let box2 = Aabb::new(Vec3::new(3.0, 3.0, 3.0), Vec3::new(10.0, 10.0, 10.0));
        let surrounding = box1.union(&box2);

        assert_eq!(surrounding.min, Vec3::ZERO);
        assert_eq!(surrounding.max, Vec3::new(10.0, 10.0, 10.0));
    }

    #[test]
    fn test_union_with_empty() {
        let aabb = Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(aabb.union(&Aabb::EMPTY), aabb);
        assert_eq!(Aabb::EMPTY.union(&aabb), aabb);
    }

    #[test]
    fn test_to_array_order() {
        let aabb = Aabb::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(aabb.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_centroid() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::new(10.0, 10.0, 10.0));
        assert_eq!(aabb.centroid(), Vec3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn test_single_point_box() {
        let p = Vec3::new(2.5, -1.0, 0.5);
        let aabb = Aabb::from_point(p);
        assert_eq!(aabb.min, p);
        assert_eq!(aabb.max, p);
        assert_eq!(aabb.size(), 0.0);
    }
}
