use crate::core::{color::Color, loader::InputParams, rng::Rng};

use super::LightT;

/// Parallel light; `direction` is the direction the light travels.
#[derive(Debug)]
pub struct DirectionalLight {
    towards_light: glam::Vec3A,
    strength: Color,
}

impl DirectionalLight {
    pub fn new(direction: glam::Vec3A, strength: Color) -> Self {
        Self {
            towards_light: -direction.normalize(),
            strength,
        }
    }

    pub fn load(params: &mut InputParams) -> anyhow::Result<Self> {
        let direction = params.get_float3("direction")?;
        let strength = params.get_float3("strength")?;
        Ok(Self::new(direction.into(), strength.into()))
    }
}

impl LightT for DirectionalLight {
    fn sample(
        &self,
        _position: glam::Vec3A,
        _rng: &mut Rng,
    ) -> (glam::Vec3A, f32, Color, f32) {
        (self.towards_light, 1.0, self.strength, f32::MAX)
    }

    fn is_delta(&self) -> bool {
        true
    }
}
