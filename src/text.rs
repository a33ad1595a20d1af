use super::state::*;

use flo_sketch_canvas::*;

impl HorizontalAlign {
    ///
    /// The fraction of the width of a run of text that lies to the left of the anchor point
    ///
    pub fn anchor_fraction(&self) -> f64 {
        match self {
            HorizontalAlign::Left   => 0.0,
            HorizontalAlign::Center => 0.5,
            HorizontalAlign::Right  => 1.0
        }
    }
}

impl VerticalAlign {
    ///
    /// How far the baseline is below the anchor point for text with the specified metrics
    ///
    pub fn baseline_offset(&self, metrics: &TextMetrics) -> f64 {
        let ascent  = metrics.ascent as f64;
        let descent = metrics.descent as f64;

        match self {
            VerticalAlign::Top      => ascent,
            VerticalAlign::Center   => (ascent - descent) / 2.0,
            VerticalAlign::Bottom   => -descent,
            VerticalAlign::Baseline => 0.0
        }
    }
}

impl TextAlign {
    ///
    /// Works out where the baseline of a run of text starts so that its anchor point ends up at (x, y)
    ///
    pub fn baseline_point(&self, x: f64, y: f64, metrics: &TextMetrics) -> (f64, f64) {
        let x = x - (metrics.width as f64) * self.horizontal.anchor_fraction();
        let y = y + self.vertical.baseline_offset(metrics);

        (x, y)
    }
}

///
/// Generates the drawing instructions for a run of text at (x, y), aligned by `values.text_align`
///
/// Text is always drawn in the fill colour (even if `no_fill` is set, as in Processing).
///
pub fn text_drawing<Gc: GraphicsContext+?Sized>(gc: &mut Gc, text: &str, x: f64, y: f64, values: &GameValues) -> Vec<Draw> {
    let size        = values.text_size as f32;
    let metrics     = gc.text_metrics(values.text_font, size, text);
    let (x, y)      = values.text_align.baseline_point(x, y, &metrics);

    vec![
        Draw::FillColor(values.fill_color),
        Draw::DrawText(values.text_font, size, text.to_string(), TextPlacement::Baseline(x as f32, y as f32))
    ]
}

///
/// Generates the drawing instructions for a run of text laid out in a box (the alignment is ignored)
///
pub fn text_in_rect_drawing(text: &str, x: f64, y: f64, width: f64, height: f64, values: &GameValues) -> Vec<Draw> {
    vec![
        Draw::FillColor(values.fill_color),
        Draw::DrawText(values.text_font, values.text_size as f32, text.to_string(), TextPlacement::InRect(x as f32, y as f32, width as f32, height as f32))
    ]
}
