use std::sync::Arc;

use crate::{
    core::{intersection::Intersection, ray::Ray},
    material::Material,
};

use super::{Primitive, PrimitiveT};

/// A shape bound to its material.
#[derive(Debug)]
pub struct Object {
    primitive: Primitive,
    material: Arc<Material>,
}

impl Object {
    pub fn new(primitive: Primitive, material: Arc<Material>) -> Self {
        Self {
            primitive,
            material,
        }
    }
}

/// Linear aggregate over all scene objects. The scenes this renderer targets
/// are a handful of analytic shapes, so no acceleration structure is used.
#[derive(Debug)]
pub struct Group {
    objects: Vec<Object>,
}

impl Group {
    pub fn new(objects: Vec<Object>) -> Self {
        Self { objects }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn intersect<'a>(&'a self, ray: &Ray, inter: &mut Intersection<'a>) -> bool {
        let mut hit = false;
        for object in &self.objects {
            if object.primitive.intersect(ray, inter) {
                inter.material = Some(object.material.as_ref());
                hit = true;
            }
        }
        hit
    }

    pub fn intersect_test(&self, ray: &Ray, t_max: f32) -> bool {
        self.objects
            .iter()
            .any(|object| object.primitive.intersect_test(ray, t_max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::color::Color, material::Lambert, primitive::Sphere};
    use approx::assert_relative_eq;

    fn group_of_two_spheres() -> Group {
        let near = Arc::new(Material::from(Lambert::new(
            Color::new(1.0, 0.0, 0.0),
            Color::BLACK,
        )));
        let far = Arc::new(Material::from(Lambert::new(
            Color::new(0.0, 1.0, 0.0),
            Color::BLACK,
        )));
        Group::new(vec![
            Object::new(
                Sphere::new(glam::Vec3A::new(0.0, 0.0, -10.0), 1.0).into(),
                far,
            ),
            Object::new(
                Sphere::new(glam::Vec3A::new(0.0, 0.0, -5.0), 1.0).into(),
                near,
            ),
        ])
    }

    #[test]
    fn closest_hit_wins() {
        let group = group_of_two_spheres();
        let ray = Ray::new(glam::Vec3A::ZERO, glam::Vec3A::new(0.0, 0.0, -1.0));
        let mut inter = Intersection::default();
        assert!(group.intersect(&ray, &mut inter));
        assert_relative_eq!(inter.t, 4.0, epsilon = 1e-5);
        assert!(inter.material.is_some());
    }

    #[test]
    fn occlusion_test_sees_any_object() {
        let group = group_of_two_spheres();
        let ray = Ray::new(glam::Vec3A::ZERO, glam::Vec3A::new(0.0, 0.0, -1.0));
        assert!(group.intersect_test(&ray, 100.0));
        assert!(!group.intersect_test(&ray, 2.0));
    }
}
