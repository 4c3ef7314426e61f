use vellum::style::{BlendMode, IntersectionRule, StrokeCapStyle};
use vellum::types::{gray8, rgb8};
use vellum::{ClippingPath, DrawingContext, GraphicsContext, PaintedPath, Transform};

/// A stroked triangle.
pub fn triangle() -> PaintedPath {
    let mut path = PaintedPath::new(10.0, 10.0);
    path.line_to(60.0, 10.0).line_to(35.0, 50.0).close();
    path.style_mut()
        .set_stroke_color(rgb8(0, 0, 0, None))
        .set_stroke_width(1.5)
        .expect("valid width");
    path
}

/// A filled card with rounded corners and a translucent fill.
pub fn rounded_card() -> PaintedPath {
    let mut path = PaintedPath::new(0.0, 0.0);
    path.rectangle(20.0, 20.0, 160.0, 90.0, 8.0, 8.0);
    path.style_mut()
        .set_fill_color(rgb8(0x33, 0x66, 0x99, Some(0xcc)))
        .set_blend_mode(BlendMode::Multiply)
        .expect("concrete blend mode");
    path
}

/// Dashed horizontal rules inside a shifted group.
pub fn dashed_rules() -> GraphicsContext {
    let mut rules = PaintedPath::new(0.0, 0.0);
    for row in 0..4 {
        let y = 10.0 + f64::from(row) * 12.0;
        rules.move_to(0.0, y).horizontal_line_relative(120.0);
    }
    rules.set_auto_close(false).expect("concrete flag");

    let mut group = GraphicsContext::new();
    group
        .set_transform(Some(Transform::translation(30.0, 150.0)))
        .style_mut()
        .set_stroke_color(gray8(80, None))
        .set_stroke_dash_pattern(vec![4.0, 2.0])
        .expect("non-negative lengths")
        .set_stroke_cap_style(StrokeCapStyle::Round)
        .expect("concrete cap style");
    group.add_item(rules);
    group
}

/// A circle clipped to a square, filled with the even-odd rule.
pub fn clipped_disc() -> PaintedPath {
    let mut clip = ClippingPath::new(0.0, 0.0);
    clip.rectangle(200.0, 200.0, 50.0, 50.0, 0.0, 0.0);

    let mut disc = PaintedPath::new(0.0, 0.0);
    disc.circle(225.0, 225.0, 30.0)
        .set_clipping_path(Some(clip))
        .style_mut()
        .set_fill_color(rgb8(255, 200, 0, None))
        .set_intersection_rule(IntersectionRule::EvenOdd)
        .expect("concrete rule");
    disc
}

/// All of the above in one drawing.
pub fn sample_drawing() -> DrawingContext {
    let mut drawing = DrawingContext::new();
    drawing
        .add_item(triangle())
        .add_item(rounded_card())
        .add_item(dashed_rules())
        .add_item(clipped_disc());
    drawing
}
