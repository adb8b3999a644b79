/// Axis-aligned box stored by centre and size, y growing upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center_x: f32,
    pub center_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(center_x: f32, center_y: f32, width: f32, height: f32) -> Self {
        Self { center_x, center_y, width, height }
    }

    pub fn left(&self) -> f32 { self.center_x - self.width / 2.0 }
    pub fn right(&self) -> f32 { self.center_x + self.width / 2.0 }
    pub fn bottom(&self) -> f32 { self.center_y - self.height / 2.0 }
    pub fn top(&self) -> f32 { self.center_y + self.height / 2.0 }

    /// Strict overlap: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let dx = (self.center_x - other.center_x).abs();
        let dy = (self.center_y - other.center_y).abs();
        dx < (self.width + other.width) / 2.0 && dy < (self.height + other.height) / 2.0
    }

    /// Overlap depth on each axis, if the boxes overlap by more than `epsilon`
    /// on both. Float drift after snapping one box onto another stays below it.
    pub fn penetration(&self, other: &Aabb, epsilon: f32) -> Option<(f32, f32)> {
        let pen_x = (self.width + other.width) / 2.0 - (self.center_x - other.center_x).abs();
        let pen_y = (self.height + other.height) / 2.0 - (self.center_y - other.center_y).abs();
        (pen_x > epsilon && pen_y > epsilon).then_some((pen_x, pen_y))
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Aabb {
        Aabb { center_x: self.center_x + dx, center_y: self.center_y + dy, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_follow_center_and_size() {
        let b = Aabb::new(10.0, 20.0, 4.0, 8.0);
        assert_eq!(b.left(), 8.0);
        assert_eq!(b.right(), 12.0);
        assert_eq!(b.bottom(), 16.0);
        assert_eq!(b.top(), 24.0);
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 2.0, 2.0);
        let b = Aabb::new(2.0, 0.0, 2.0, 2.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&b.translated(-0.5, 0.5)));
        assert!(!a.overlaps(&b.translated(0.0, 2.0)));
    }

    #[test]
    fn penetration_ignores_contact_within_epsilon() {
        let a = Aabb::new(0.0, 0.0, 2.0, 2.0);
        assert_eq!(a.penetration(&Aabb::new(0.0, 1.5, 2.0, 2.0), 0.01), Some((2.0, 0.5)));
        assert_eq!(a.penetration(&Aabb::new(0.0, 1.999, 2.0, 2.0), 0.01), None);
    }
}
