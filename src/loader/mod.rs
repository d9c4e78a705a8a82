use std::{collections::HashMap, convert::TryInto, path::Path, sync::Arc};

use anyhow::Context;

use crate::{
    camera,
    core::{loader::InputParams, scene::Scene},
    light::{self, Light},
    material::{self, Material},
    pixel_sampler::{self, RandomSampler},
    primitive::{self, Group, Object},
    renderer::PathTracer,
};

const DEFAULT_WIDTH: u32 = 512;
const DEFAULT_HEIGHT: u32 = 512;
const DEFAULT_MAX_DEPTH: u32 = 8;
const DEFAULT_SPP: u32 = 16;

/// Loads a scene file and builds the scene plus its renderer. Render
/// parameters come from the file or these library defaults; nothing is
/// overridable from the command line.
pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<(Scene, PathTracer)> {
    let path = path.as_ref();
    let json_file =
        std::fs::File::open(path).context(format!("scene - can't open '{}'", path.display()))?;
    let json_reader = std::io::BufReader::new(json_file);
    let json_value: serde_json::Value = serde_json::from_reader(json_reader)
        .context(format!("scene - '{}' is not valid json", path.display()))?;

    let (width, height, max_depth) = if let Some(settings_value) = json_value.get("settings") {
        let mut params: InputParams = settings_value.try_into()?;
        params.set_name("settings".into());
        let width = params.get_u32_or("width", DEFAULT_WIDTH)?;
        let height = params.get_u32_or("height", DEFAULT_HEIGHT)?;
        let max_depth = params.get_u32_or("max_depth", DEFAULT_MAX_DEPTH)?;
        params.check_unused_keys();
        (width, height, max_depth)
    } else {
        (DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_MAX_DEPTH)
    };
    if width == 0 || height == 0 {
        anyhow::bail!("settings - resolution must be non-zero");
    }

    let sampler = if let Some(sampler_value) = json_value.get("sampler") {
        let mut params: InputParams = sampler_value.try_into()?;
        pixel_sampler::create_sampler_from_params(&mut params)?
    } else {
        RandomSampler::new(DEFAULT_SPP).into()
    };

    let camera_value = json_value
        .get("camera")
        .context("scene - there is no 'camera' section")?;
    let mut camera_params: InputParams = camera_value.try_into()?;
    let camera = camera::create_camera_from_params(&mut camera_params)?;

    let materials_value = json_value
        .get("materials")
        .context("scene - there is no 'materials' section")?;
    let materials_arr = materials_value
        .as_array()
        .context("scene - 'materials' should be an array")?;
    let mut materials = HashMap::<String, Arc<Material>>::new();
    for value in materials_arr {
        let mut params: InputParams = value.try_into()?;
        let (name, mat) = material::create_material_from_params(&mut params)?;
        if materials.insert(name.clone(), Arc::new(mat)).is_some() {
            anyhow::bail!(format!("material '{}': name is duplicated", name));
        }
    }

    let objects_value = json_value
        .get("objects")
        .context("scene - there is no 'objects' section")?;
    let objects_arr = objects_value
        .as_array()
        .context("scene - 'objects' should be an array")?;
    let mut objects = Vec::with_capacity(objects_arr.len());
    for value in objects_arr {
        let mut params: InputParams = value.try_into()?;
        params.set_name("object".into());
        let material_name = params.get_str("material")?;
        let mat = materials
            .get(&material_name)
            .cloned()
            .context(format!("object - material '{}' not found", material_name))?;
        let prim = primitive::create_primitive_from_params(&mut params)?;
        objects.push(Object::new(prim, mat));
    }

    let mut lights = Vec::<Light>::new();
    if let Some(lights_value) = json_value.get("lights") {
        let lights_arr = lights_value
            .as_array()
            .context("scene - 'lights' should be an array")?;
        for value in lights_arr {
            let mut params: InputParams = value.try_into()?;
            lights.push(light::create_light_from_params(&mut params)?);
        }
    }

    log::info!(
        "scene loaded: {} objects, {} lights, {}x{}",
        objects.len(),
        lights.len(),
        width,
        height
    );

    let scene = Scene::new(camera, Group::new(objects), lights, width, height);
    let renderer = PathTracer::new(max_depth, sampler);
    Ok((scene, renderer))
}
