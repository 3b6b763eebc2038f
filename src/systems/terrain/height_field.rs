use super::noise::NoiseSource;

/// Height field: `noise(x * frequency) * amplitude`
pub struct Terrain {
    noise: Box<dyn NoiseSource>,
    pub frequency: f64,
    pub amplitude: f64,
}

impl Terrain {
    pub fn new(noise: Box<dyn NoiseSource>, frequency: f64, amplitude: f64) -> Self {
        Self {
            noise,
            frequency,
            amplitude,
        }
    }

    /// Floor height under world column `x`
    #[inline]
    pub fn height_at(&self, x: f64) -> f64 {
        self.noise.sample(x * self.frequency) * self.amplitude
    }

    /// Fill `out` with heights for each integer column in `[from, to]`,
    /// offset by `offset_x`. Returns the number of samples written.
    ///
    /// Samples are narrowed to `f32` for the renderer's transfer buffer.
    pub fn sample_profile(&self, offset_x: f64, from: i64, to: i64, out: &mut Vec<f32>) -> usize {
        out.clear();
        let Some(count) = to.checked_sub(from).and_then(|span| usize::try_from(span).ok()) else {
            return 0;
        };
        out.reserve(count.saturating_add(1));
        for sx in from..=to {
            out.push(self.height_at(offset_x + sx as f64) as f32);
        }
        out.len()
    }
}
