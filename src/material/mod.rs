mod lambert;

pub use lambert::*;

use crate::core::{color::Color, loader::InputParams, rng::Rng};

#[enum_dispatch::enum_dispatch(Material)]
pub trait MaterialT: Send + Sync {
    fn emission(&self) -> Color;

    /// BRDF value for world-space directions around the shading normal.
    fn bxdf(&self, normal: glam::Vec3A, wo: glam::Vec3A, wi: glam::Vec3A) -> Color;

    /// Samples an outgoing direction; returns (wi, pdf, bxdf value).
    fn sample_wi(
        &self,
        normal: glam::Vec3A,
        wo: glam::Vec3A,
        rng: &mut Rng,
    ) -> (glam::Vec3A, f32, Color);
}

#[enum_dispatch::enum_dispatch]
#[derive(Debug)]
pub enum Material {
    Lambert,
}

pub fn create_material_from_params(
    params: &mut InputParams,
) -> anyhow::Result<(String, Material)> {
    params.set_name("material".into());
    let ty = params.get_str("type")?;
    let name = params.get_str("name")?;
    params.set_name(format!("material-{}-{}", ty, name).into());

    let res = match ty.as_str() {
        "lambert" => Lambert::load(params)?.into(),
        _ => anyhow::bail!(format!("{}: unknown type '{}'", params.name(), ty)),
    };

    params.check_unused_keys();

    Ok((name, res))
}
