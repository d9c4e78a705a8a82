mod directional;
mod point;

pub use directional::*;
pub use point::*;

use crate::core::{color::Color, loader::InputParams, rng::Rng};

#[enum_dispatch::enum_dispatch(Light)]
pub trait LightT: Send + Sync {
    /// Samples a direction towards the light from a shading position;
    /// returns (direction, pdf, incident strength, distance).
    fn sample(
        &self,
        position: glam::Vec3A,
        rng: &mut Rng,
    ) -> (glam::Vec3A, f32, Color, f32);

    fn is_delta(&self) -> bool;
}

#[enum_dispatch::enum_dispatch]
#[derive(Debug)]
pub enum Light {
    PointLight,
    DirectionalLight,
}

pub fn create_light_from_params(params: &mut InputParams) -> anyhow::Result<Light> {
    params.set_name("light".into());
    let ty = params.get_str("type")?;
    params.set_name(format!("light-{}", ty).into());

    let res = match ty.as_str() {
        "point" => PointLight::load(params)?.into(),
        "directional" => DirectionalLight::load(params)?.into(),
        _ => anyhow::bail!(format!("{}: unknown type '{}'", params.name(), ty)),
    };

    params.check_unused_keys();

    Ok(res)
}
