use crate::core::{intersection::Intersection, loader::InputParams, ray::Ray};

use super::PrimitiveT;

#[derive(Debug)]
pub struct Sphere {
    center: glam::Vec3A,
    radius: f32,
}

impl Sphere {
    pub fn new(center: glam::Vec3A, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn load(params: &mut InputParams) -> anyhow::Result<Self> {
        let center = params.get_float3_or("center", [0.0, 0.0, 0.0]);
        let radius = params.get_float("radius")?;
        Ok(Sphere::new(center.into(), radius))
    }

    fn intersect_ray(&self, ray: &Ray) -> Option<(f32, f32)> {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let b = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;
        let delta = b * b - a * c;
        if delta >= 0.0 {
            let delta = delta.sqrt();
            let min = (-b - delta) / a;
            let max = (-b + delta) / a;
            Some((min, max))
        } else {
            None
        }
    }
}

impl PrimitiveT for Sphere {
    fn intersect(&self, ray: &Ray, inter: &mut Intersection<'_>) -> bool {
        if let Some((min, max)) = self.intersect_ray(ray) {
            let t = if min >= ray.t_min { min } else { max };
            if t >= ray.t_min && t < inter.t {
                let position = ray.point_at(t);
                inter.t = t;
                inter.position = position;
                inter.normal = (position - self.center) / self.radius;
                return true;
            }
        }
        false
    }

    fn intersect_test(&self, ray: &Ray, t_max: f32) -> bool {
        if let Some((min, max)) = self.intersect_ray(ray) {
            let t = if min >= ray.t_min { min } else { max };
            t >= ray.t_min && t < t_max
        } else {
            false
        }
    }
}
