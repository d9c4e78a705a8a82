use std::sync::{Arc, Mutex};

use crate::{
    camera::CameraT,
    core::{color::Color, film::Film, intersection::Intersection, ray::Ray, rng::Rng, scene::Scene},
    light::LightT,
    material::MaterialT,
    pixel_sampler::{PixelSampler, PixelSamplerT},
    variant::Variant,
};

use super::util;

#[derive(Debug)]
pub struct PathTracer {
    max_depth: u32,
    pixel_sampler: PixelSampler,
}

impl PathTracer {
    const CUTOFF_LUMINANCE: f32 = 0.001;

    pub fn new(max_depth: u32, pixel_sampler: PixelSampler) -> Self {
        Self {
            max_depth,
            pixel_sampler,
        }
    }

    /// Renders the scene at its declared resolution, blocking until every
    /// worker of the selected variant has finished its row range.
    pub fn render(&self, scene: &Scene, variant: Variant) -> Film {
        let (width, height) = scene.resolution();
        let film = Arc::new(Mutex::new(Film::new(width, height)));
        let aspect = width as f32 / height as f32;

        let num_threads = variant.num_threads().min(height.max(1));
        let ranges = util::create_image_ranges(num_threads, height);
        let progress_bar = util::render_progress_bar(width, height);

        crossbeam::scope(|scope| {
            for range in &ranges {
                let width_inv = 1.0 / width as f32;
                let height_inv = 1.0 / height as f32;
                let film = film.clone();
                let progress_bar = progress_bar.clone();
                let path_tracer = &self;

                scope.spawn(move |_| {
                    let mut rng = Rng::new();
                    let mut sampler = path_tracer.pixel_sampler;
                    for j in range.from..range.to {
                        for i in 0..width {
                            sampler.start_pixel();
                            let mut pixel_samples = Vec::with_capacity(sampler.spp() as usize);
                            while let Some((offset_x, offset_y)) = sampler.next_sample(&mut rng) {
                                let x = ((i as f32 + offset_x) * width_inv - 0.5) * aspect;
                                let y = ((height - j - 1) as f32 + offset_y) * height_inv - 0.5;
                                let ray = scene.camera().generate_ray((x, y));
                                pixel_samples.push(path_tracer.trace_ray(scene, ray, &mut rng));
                            }
                            let mut film = film.lock().unwrap();
                            for color in pixel_samples {
                                film.add_sample(i, j, color);
                            }
                            drop(film);
                            progress_bar.inc(1);
                        }
                    }
                });
            }
        })
        .unwrap();
        progress_bar.finish_and_clear();

        let film = Arc::try_unwrap(film).unwrap_or_else(|_| unreachable!());
        film.into_inner().unwrap()
    }

    fn trace_ray(&self, scene: &Scene, mut ray: Ray, rng: &mut Rng) -> Color {
        let mut final_color = Color::BLACK;
        let mut throughput = Color::WHITE;
        let mut curr_depth = 0;

        while curr_depth < self.max_depth {
            let mut inter = Intersection::default();
            if !scene.aggregate().intersect(&ray, &mut inter) {
                break;
            }
            let material = match inter.material {
                Some(material) => material,
                None => break,
            };

            // Emissive surfaces are not in the light list, so counting
            // emission at every bounce stays unbiased.
            final_color += throughput * material.emission();

            let wo = -ray.direction;
            let normal = if inter.normal.dot(wo) < 0.0 {
                -inter.normal
            } else {
                inter.normal
            };

            let mut li = Color::BLACK;
            for light in scene.lights() {
                let (light_dir, pdf, light_strength, dist) = light.sample(inter.position, rng);
                if pdf == 0.0 || !pdf.is_finite() {
                    continue;
                }
                let cos = light_dir.dot(normal);
                if cos <= 0.0 {
                    continue;
                }
                let bxdf = material.bxdf(normal, wo, light_dir);
                let mut shadow_ray = Ray::new(inter.position, light_dir);
                shadow_ray.t_min = Ray::T_MIN_EPS / cos.max(0.00001);
                if !scene.aggregate().intersect_test(&shadow_ray, dist - 0.001) {
                    li += light_strength * bxdf * cos / pdf;
                }
            }
            final_color += throughput * li;

            let (wi, pdf, bxdf) = material.sample_wi(normal, wo, rng);
            if pdf == 0.0 || !pdf.is_finite() {
                break;
            }
            let cos = wi.dot(normal).abs();
            throughput *= bxdf * cos / pdf.max(0.00001);
            if !throughput.is_finite() || throughput.luminance() < Self::CUTOFF_LUMINANCE {
                break;
            }
            ray = Ray::new(inter.position, wi);
            ray.t_min = Ray::T_MIN_EPS / cos.max(0.00001);

            let rr_rand = rng.uniform_1d();
            let rr_prop = throughput
                .luminance()
                .clamp(Self::CUTOFF_LUMINANCE, 1.0);
            if rr_rand > rr_prop {
                break;
            }
            throughput /= rr_prop;

            curr_depth += 1;
        }

        final_color
    }
}
