use crate::core::{color::Color, loader::InputParams, rng::Rng};

use super::LightT;

#[derive(Debug)]
pub struct PointLight {
    position: glam::Vec3A,
    strength: Color,
}

impl PointLight {
    pub fn new(position: glam::Vec3A, strength: Color) -> Self {
        Self { position, strength }
    }

    pub fn load(params: &mut InputParams) -> anyhow::Result<Self> {
        let position = params.get_float3("position")?;
        let strength = params.get_float3("strength")?;
        Ok(Self::new(position.into(), strength.into()))
    }
}

impl LightT for PointLight {
    fn sample(
        &self,
        position: glam::Vec3A,
        _rng: &mut Rng,
    ) -> (glam::Vec3A, f32, Color, f32) {
        let sample = self.position - position;
        let dist_sqr = sample.length_squared();
        let dist = dist_sqr.sqrt();
        let sample = sample / dist;
        (sample, 1.0, self.strength / dist_sqr, dist)
    }

    fn is_delta(&self) -> bool {
        true
    }
}
