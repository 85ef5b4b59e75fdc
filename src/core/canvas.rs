use crate::core::Rgba;

/// Drawing surface the scene is painted onto. Coordinates are logical pixels
/// with the origin at the top-left corner and y growing downwards.
pub trait Canvas {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba);
    /// `w` and `h` are the full diameters, centered on `(cx, cy)`.
    fn fill_ellipse(&mut self, cx: f32, cy: f32, w: f32, h: f32, color: Rgba);
    fn fill_triangle(&mut self, a: (f32, f32), b: (f32, f32), c: (f32, f32), color: Rgba);
    fn line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: Rgba);
    /// `(x, y)` is the top-left corner of the text box.
    fn text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Rgba);
}

/// Offsets every call by `(dx, dy)` before forwarding it, so sprites can
/// draw in their own local coordinates.
pub struct Translated<'a, C: Canvas + ?Sized> {
    inner: &'a mut C,
    dx: f32,
    dy: f32,
}

impl<'a, C: Canvas + ?Sized> Translated<'a, C> {
    pub fn new(inner: &'a mut C, dx: f32, dy: f32) -> Self {
        Self { inner, dx, dy }
    }

    fn shift(&self, (x, y): (f32, f32)) -> (f32, f32) {
        (x + self.dx, y + self.dy)
    }
}

impl<C: Canvas + ?Sized> Canvas for Translated<'_, C> {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        self.inner.fill_rect(x + self.dx, y + self.dy, w, h, color);
    }

    fn fill_ellipse(&mut self, cx: f32, cy: f32, w: f32, h: f32, color: Rgba) {
        self.inner.fill_ellipse(cx + self.dx, cy + self.dy, w, h, color);
    }

    fn fill_triangle(&mut self, a: (f32, f32), b: (f32, f32), c: (f32, f32), color: Rgba) {
        let (a, b, c) = (self.shift(a), self.shift(b), self.shift(c));
        self.inner.fill_triangle(a, b, c, color);
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: Rgba) {
        let (from, to) = (self.shift(from), self.shift(to));
        self.inner.line(from, to, thickness, color);
    }

    fn text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Rgba) {
        self.inner.text(text, x + self.dx, y + self.dy, size, color);
    }
}
