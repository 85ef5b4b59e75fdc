#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Rgba { r, g, b, a: 255.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba { r, g, b, a }
    }

    pub const fn gray(level: f32) -> Self {
        Rgba::rgb(level, level, level)
    }

    /// Channel-wise linear interpolation, alpha included.
    pub fn lerp(&self, target: Rgba, amount: f32) -> Rgba {
        Rgba {
            r: lerp(self.r, target.r, amount),
            g: lerp(self.g, target.g, amount),
            b: lerp(self.b, target.b, amount),
            a: lerp(self.a, target.a, amount),
        }
    }

    pub fn to_u8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a].map(|channel| channel.round().clamp(0.0, 255.0) as u8)
    }
}

pub fn lerp(start: f32, stop: f32, amount: f32) -> f32 {
    start + (stop - start) * amount
}

/// Re-maps `value` from `[start1, stop1]` onto `[start2, stop2]`.
pub fn map_range(value: f32, start1: f32, stop1: f32, start2: f32, stop2: f32) -> f32 {
    start2 + (stop2 - start2) * ((value - start1) / (stop1 - start1))
}
