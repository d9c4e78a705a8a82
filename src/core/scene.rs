use crate::{camera::Camera, light::Light, primitive::Group};

/// A fully built scene: camera, object aggregate, lights and the declared
/// output resolution. Opaque to the orchestrator once loaded.
#[derive(Debug)]
pub struct Scene {
    camera: Camera,
    aggregate: Group,
    lights: Vec<Light>,
    width: u32,
    height: u32,
}

impl Scene {
    pub fn new(
        camera: Camera,
        aggregate: Group,
        lights: Vec<Light>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            camera,
            aggregate,
            lights,
            width,
            height,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn aggregate(&self) -> &Group {
        &self.aggregate
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
