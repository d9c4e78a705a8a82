mod group;
mod quad;
mod sphere;

pub use group::*;
pub use quad::*;
pub use sphere::*;

use crate::core::{intersection::Intersection, loader::InputParams, ray::Ray};

#[enum_dispatch::enum_dispatch(Primitive)]
pub trait PrimitiveT: Send + Sync {
    /// Updates `inter` and returns true if the ray hits closer than the
    /// current `inter.t` (and past `ray.t_min`).
    fn intersect(&self, ray: &Ray, inter: &mut Intersection<'_>) -> bool;

    fn intersect_test(&self, ray: &Ray, t_max: f32) -> bool;
}

#[enum_dispatch::enum_dispatch]
#[derive(Debug)]
pub enum Primitive {
    Sphere,
    Quad,
}

pub fn create_primitive_from_params(params: &mut InputParams) -> anyhow::Result<Primitive> {
    let ty = params.get_str("type")?;
    params.set_name(format!("object-{}", ty).into());

    let res = match ty.as_str() {
        "sphere" => Sphere::load(params)?.into(),
        "quad" => Quad::load(params)?.into(),
        _ => anyhow::bail!(format!("{}: unknown type '{}'", params.name(), ty)),
    };

    params.check_unused_keys();

    Ok(res)
}
