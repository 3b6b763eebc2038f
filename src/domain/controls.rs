//! Player controls, sampled once per frame before the update pipeline.

/// Four digital inputs. Opposite inputs cancel by subtraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl ControlInput {
    pub fn new(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self { up, down, left, right }
    }

    /// `up - down`
    #[inline]
    pub fn throttle(&self) -> f64 {
        self.up as u8 as f64 - self.down as u8 as f64
    }

    /// `right - left`
    #[inline]
    pub fn steer(&self) -> f64 {
        self.right as u8 as f64 - self.left as u8 as f64
    }

    /// Apply a browser `KeyboardEvent.key`. Returns false for unmapped keys.
    pub fn set_key(&mut self, key: &str, pressed: bool) -> bool {
        let slot = match key {
            "ArrowUp" => &mut self.up,
            "ArrowDown" => &mut self.down,
            "ArrowLeft" => &mut self.left,
            "ArrowRight" => &mut self.right,
            _ => return false,
        };
        *slot = pressed;
        true
    }

    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}
