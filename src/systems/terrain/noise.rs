//! 1D noise sources
//!
//! Convention for every source in this crate: output in `[0, 1]`. The terrain
//! multiplies by its amplitude, so a flat 0.5 sits at half the amplitude.

/// Deterministic, continuous, stateless 1D function
pub trait NoiseSource {
    fn sample(&self, x: f64) -> f64;
}

impl<F> NoiseSource for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn sample(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Flat terrain
#[derive(Clone, Copy, Debug)]
pub struct ConstantNoise(pub f64);

impl NoiseSource for ConstantNoise {
    #[inline]
    fn sample(&self, _x: f64) -> f64 {
        self.0
    }
}

/// Seeded 1D gradient (Perlin) noise remapped to [0, 1]
#[derive(Clone)]
pub struct PerlinNoise {
    perm: [u8; 512],
    seed: u32,
}

impl PerlinNoise {
    /// Seed 0 is treated as 1 (xorshift32 would stay at zero forever)
    pub fn new(seed: u32) -> Self {
        let seed = if seed == 0 { 1 } else { seed };
        let mut state = seed;

        let mut base = [0u8; 256];
        for (i, v) in base.iter_mut().enumerate() {
            *v = i as u8;
        }
        // Fisher-Yates
        for i in (1..256usize).rev() {
            let j = (xorshift32(&mut state) % (i as u32 + 1)) as usize;
            base.swap(i, j);
        }

        let mut perm = [0u8; 512];
        for i in 0..512 {
            perm[i] = base[i & 255];
        }

        Self { perm, seed }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Raw gradient noise in [-0.5, 0.5]
    #[inline]
    fn raw(&self, x: f64) -> f64 {
        let xf = x.floor();
        let i = ((xf as i64) & 255) as usize;
        let t = x - xf;

        let g0 = gradient(self.perm[i]) * t;
        let g1 = gradient(self.perm[i + 1]) * (t - 1.0);

        let u = fade(t);
        g0 + (g1 - g0) * u
    }
}

impl NoiseSource for PerlinNoise {
    #[inline]
    fn sample(&self, x: f64) -> f64 {
        self.raw(x) + 0.5
    }
}

/// Random number generator (xorshift32)
#[inline]
fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Lattice gradient in [-1, 1]
#[inline(always)]
fn gradient(hash: u8) -> f64 {
    (hash as f64 / 255.0) * 2.0 - 1.0
}

/// 6t^5 - 15t^4 + 10t^3
#[inline(always)]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}
