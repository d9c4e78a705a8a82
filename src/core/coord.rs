/// Orthonormal basis with the z axis aligned to a surface normal.
#[derive(Debug, Copy, Clone)]
pub struct Coordinate {
    x: glam::Vec3A,
    y: glam::Vec3A,
    z: glam::Vec3A,
}

impl Coordinate {
    pub fn from_normal(normal: glam::Vec3A) -> Self {
        let z = normal.normalize();
        let helper = if z.x.abs() > 0.9 {
            glam::Vec3A::Y
        } else {
            glam::Vec3A::X
        };
        let y = z.cross(helper).normalize();
        let x = y.cross(z);
        Self { x, y, z }
    }

    pub fn to_world(&self, v: glam::Vec3A) -> glam::Vec3A {
        self.x * v.x + self.y * v.y + self.z * v.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basis_is_orthonormal() {
        for normal in [
            glam::Vec3A::new(0.0, 0.0, 1.0),
            glam::Vec3A::new(1.0, 0.0, 0.0),
            glam::Vec3A::new(1.0, 2.0, -3.0),
        ] {
            let coord = Coordinate::from_normal(normal);
            assert!(coord.x.dot(coord.y).abs() < 1e-5);
            assert!(coord.y.dot(coord.z).abs() < 1e-5);
            assert!(coord.z.dot(coord.x).abs() < 1e-5);
            assert!((coord.x.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn local_z_maps_to_normal() {
        let normal = glam::Vec3A::new(0.0, 1.0, 0.0);
        let coord = Coordinate::from_normal(normal);
        let world = coord.to_world(glam::Vec3A::Z);
        assert!((world - normal).length() < 1e-5);
    }
}
