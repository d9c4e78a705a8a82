use crate::core::{color::Color, coord::Coordinate, loader::InputParams, rng::Rng};

use super::MaterialT;

#[derive(Debug)]
pub struct Lambert {
    albedo: Color,
    emission: Color,
}

impl Lambert {
    pub fn new(albedo: Color, emission: Color) -> Self {
        Self { albedo, emission }
    }

    pub fn load(params: &mut InputParams) -> anyhow::Result<Self> {
        let albedo = params.get_float3("albedo")?.into();
        let emission = params.get_float3_or("emission", [0.0, 0.0, 0.0]).into();
        Ok(Self::new(albedo, emission))
    }
}

impl MaterialT for Lambert {
    fn emission(&self) -> Color {
        self.emission
    }

    fn bxdf(&self, normal: glam::Vec3A, wo: glam::Vec3A, wi: glam::Vec3A) -> Color {
        if wo.dot(normal) > 0.0 && wi.dot(normal) > 0.0 {
            self.albedo * std::f32::consts::FRAC_1_PI
        } else {
            Color::BLACK
        }
    }

    fn sample_wi(
        &self,
        normal: glam::Vec3A,
        _wo: glam::Vec3A,
        rng: &mut Rng,
    ) -> (glam::Vec3A, f32, Color) {
        let local = rng.cosine_weighted_on_hemisphere();
        let wi = Coordinate::from_normal(normal).to_world(local);
        let pdf = local.z * std::f32::consts::FRAC_1_PI;
        (wi, pdf, self.albedo * std::f32::consts::FRAC_1_PI)
    }
}
