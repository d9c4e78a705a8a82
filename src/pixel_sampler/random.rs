use crate::core::{loader::InputParams, rng::Rng};

use super::PixelSamplerT;

#[derive(Clone, Copy, Debug)]
pub struct RandomSampler {
    spp: u32,
    curr: u32,
}

impl RandomSampler {
    pub fn new(spp: u32) -> Self {
        Self { spp, curr: 0 }
    }

    pub fn load(params: &mut InputParams) -> anyhow::Result<Self> {
        let spp = params.get_u32_or("spp", 16)?;
        Ok(Self::new(spp))
    }
}

impl PixelSamplerT for RandomSampler {
    fn spp(&self) -> u32 {
        self.spp
    }

    fn start_pixel(&mut self) {
        self.curr = 0;
    }

    fn next_sample(&mut self, rng: &mut Rng) -> Option<(f32, f32)> {
        if self.curr == self.spp {
            None
        } else {
            self.curr += 1;
            Some(rng.uniform_2d())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_exactly_spp_samples_per_pixel() {
        let mut sampler = RandomSampler::new(8);
        let mut rng = Rng::new();
        for _ in 0..3 {
            sampler.start_pixel();
            let mut n = 0;
            while let Some((x, y)) = sampler.next_sample(&mut rng) {
                assert!((0.0..1.0).contains(&x) && (0.0..1.0).contains(&y));
                n += 1;
            }
            assert_eq!(n, sampler.spp());
        }
    }
}
