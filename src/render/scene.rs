use crate::core::{Canvas, Rgba};

const SKY_TOP: Rgba = Rgba::rgb(135.0, 206.0, 235.0);
const SKY_BOTTOM: Rgba = Rgba::rgb(70.0, 130.0, 180.0);
const GROUND_DEPTH: f32 = 100.0;

/// Static backdrop: sky, field and city ground, the road between them and the sun.
pub fn draw_scene(canvas: &mut dyn Canvas, width: f32, height: f32) {
    let rows = height.max(0.0) as u32;
    for row in 0..rows {
        let y = row as f32;
        let color = SKY_TOP.lerp(SKY_BOTTOM, y / height);
        canvas.line((0.0, y), (width, y), 1.0, color);
    }

    let ground_top = height - GROUND_DEPTH;
    let mid = width / 2.0;

    // field
    canvas.fill_rect(0.0, ground_top, mid + 50.0, GROUND_DEPTH, Rgba::rgb(100.0, 150.0, 70.0));
    let hills = Rgba::rgb(120.0, 160.0, 80.0);
    canvas.fill_ellipse(width / 4.0, ground_top, 300.0, 100.0, hills);
    canvas.fill_ellipse(width / 8.0, height - 80.0, 200.0, 80.0, hills);

    // city
    canvas.fill_rect(mid - 50.0, ground_top, mid + 50.0, GROUND_DEPTH, Rgba::rgb(80.0, 80.0, 90.0));

    canvas.fill_rect(mid - 20.0, height - 80.0, 40.0, 80.0, Rgba::gray(60.0));
    let lane = Rgba::rgb(255.0, 200.0, 0.0);
    for offset in [75.0, 55.0, 35.0] {
        canvas.fill_rect(mid - 2.0, height - offset, 4.0, 15.0, lane);
    }

    canvas.fill_ellipse(width - 80.0, 80.0, 60.0, 60.0, Rgba::rgb(255.0, 255.0, 0.0));
}
