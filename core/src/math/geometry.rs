use crate::pose_interface::Landmark;

pub struct GeometryHelper;

impl GeometryHelper {
    /// Interior angle at `b` given the three landmarks `a`-`b`-`c`, in
    /// degrees normalized to [0, 180].
    pub fn joint_angle_deg(a: &Landmark, b: &Landmark, c: &Landmark) -> f32 {
        let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
        let angle = radians.to_degrees().abs();
        if angle > 180.0 {
            360.0 - angle
        } else {
            angle
        }
    }

    /// Mean vertical position of a landmark pair.
    pub fn mean_height(a: &Landmark, b: &Landmark) -> f32 {
        (a.y + b.y) / 2.0
    }

    /// Horizontal distance between a landmark pair.
    pub fn horizontal_gap(a: &Landmark, b: &Landmark) -> f32 {
        (a.x - b.x).abs()
    }
}
