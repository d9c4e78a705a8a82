use crate::material::Material;

pub struct Intersection<'a> {
    pub t: f32,
    pub position: glam::Vec3A,
    pub normal: glam::Vec3A,
    pub material: Option<&'a Material>,
}

impl<'a> Default for Intersection<'a> {
    fn default() -> Self {
        Self {
            t: f32::MAX,
            position: glam::Vec3A::ZERO,
            normal: glam::Vec3A::Z,
            material: None,
        }
    }
}
