use crate::core::{intersection::Intersection, loader::InputParams, ray::Ray};

use super::PrimitiveT;

/// A planar parallelogram spanned by two edge vectors from a corner point.
#[derive(Debug)]
pub struct Quad {
    corner: glam::Vec3A,
    edge_u: glam::Vec3A,
    edge_v: glam::Vec3A,
    normal: glam::Vec3A,
    edge_u_len_sqr_inv: f32,
    edge_v_len_sqr_inv: f32,
}

impl Quad {
    pub fn new(corner: glam::Vec3A, edge_u: glam::Vec3A, edge_v: glam::Vec3A) -> Self {
        let normal = edge_u.cross(edge_v).normalize();
        Self {
            corner,
            edge_u,
            edge_v,
            normal,
            edge_u_len_sqr_inv: 1.0 / edge_u.length_squared(),
            edge_v_len_sqr_inv: 1.0 / edge_v.length_squared(),
        }
    }

    pub fn load(params: &mut InputParams) -> anyhow::Result<Self> {
        let corner = params.get_float3("corner")?;
        let edge_u = params.get_float3("edge_u")?;
        let edge_v = params.get_float3("edge_v")?;
        Ok(Quad::new(corner.into(), edge_u.into(), edge_v.into()))
    }

    fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() < 1e-8 {
            return None;
        }
        let t = (self.corner - ray.origin).dot(self.normal) / denom;
        if t < ray.t_min {
            return None;
        }
        let d = ray.point_at(t) - self.corner;
        let u = d.dot(self.edge_u) * self.edge_u_len_sqr_inv;
        let v = d.dot(self.edge_v) * self.edge_v_len_sqr_inv;
        if (0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v) {
            Some(t)
        } else {
            None
        }
    }
}

impl PrimitiveT for Quad {
    fn intersect(&self, ray: &Ray, inter: &mut Intersection<'_>) -> bool {
        if let Some(t) = self.intersect_ray(ray) {
            if t < inter.t {
                inter.t = t;
                inter.position = ray.point_at(t);
                inter.normal = self.normal;
                return true;
            }
        }
        false
    }

    fn intersect_test(&self, ray: &Ray, t_max: f32) -> bool {
        matches!(self.intersect_ray(ray), Some(t) if t < t_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_quad_at_z(z: f32) -> Quad {
        Quad::new(
            glam::Vec3A::new(-0.5, -0.5, z),
            glam::Vec3A::new(1.0, 0.0, 0.0),
            glam::Vec3A::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn hit_inside_bounds() {
        let quad = unit_quad_at_z(-2.0);
        let ray = Ray::new(glam::Vec3A::ZERO, glam::Vec3A::new(0.0, 0.0, -1.0));
        let mut inter = Intersection::default();
        assert!(quad.intersect(&ray, &mut inter));
        assert_relative_eq!(inter.t, 2.0, epsilon = 1e-5);
        assert!((inter.normal - glam::Vec3A::Z).length() < 1e-5);
    }

    #[test]
    fn miss_outside_bounds() {
        let quad = unit_quad_at_z(-2.0);
        let ray = Ray::new(
            glam::Vec3A::new(2.0, 0.0, 0.0),
            glam::Vec3A::new(0.0, 0.0, -1.0),
        );
        let mut inter = Intersection::default();
        assert!(!quad.intersect(&ray, &mut inter));
    }

    #[test]
    fn parallel_ray_misses() {
        let quad = unit_quad_at_z(-2.0);
        let ray = Ray::new(glam::Vec3A::ZERO, glam::Vec3A::X);
        assert!(!quad.intersect_test(&ray, f32::MAX));
    }
}
