use super::gc::*;
use super::draw::*;
use super::color::*;
use super::transform2d::*;

use std::collections::{HashMap};

/// Width of a glyph as a fraction of the font size, used when estimating text metrics
const GLYPH_ADVANCE: f32    = 0.6;

/// Ascent as a fraction of the font size
const FONT_ASCENT: f32      = 0.8;

/// Descent as a fraction of the font size
const FONT_DESCENT: f32     = 0.2;

///
/// How a recorded path was painted
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum PaintOperation {
    /// Filled with a colour
    Fill(Color),

    /// Stroked with a colour and line width
    Stroke(Color, f32)
}

///
/// A path that was filled or stroked on a recording surface
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PaintedPath {
    /// The path elements that were painted
    pub path: Vec<Draw>,

    /// The transformation that was active when the path was painted
    pub transform: Transform2D,

    /// Whether the path was filled or stroked
    pub operation: PaintOperation
}

///
/// A graphics context that records the instructions sent to it
///
/// Images have to be registered with `with_image` before they're considered to exist. Text metrics
/// are estimated from the font size, so layouts that depend on them are reproducible.
///
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    /// The instructions sent to this surface so far
    drawing: Vec<Draw>,

    /// The images that this surface can 'load' and their natural sizes
    images: HashMap<String, (f32, f32)>
}

impl RecordingSurface {
    ///
    /// Creates a new, empty, recording surface
    ///
    pub fn new() -> RecordingSurface {
        RecordingSurface {
            drawing:    vec![],
            images:     HashMap::new()
        }
    }

    ///
    /// Registers an image that this surface can draw
    ///
    pub fn with_image(mut self, name: &str, width: f32, height: f32) -> RecordingSurface {
        self.images.insert(name.to_string(), (width, height));
        self
    }

    ///
    /// Retrieves the instructions recorded so far
    ///
    pub fn drawing(&self) -> &[Draw] {
        &self.drawing
    }

    ///
    /// Removes the recorded instructions from this surface
    ///
    pub fn take_drawing(&mut self) -> Vec<Draw> {
        std::mem::take(&mut self.drawing)
    }

    ///
    /// Replays the recorded instructions to work out which paths were painted and how
    ///
    pub fn painted_paths(&self) -> Vec<PaintedPath> {
        let mut painted         = vec![];
        let mut current_path    = vec![];
        let mut fill_color      = Color::Rgba(0.0, 0.0, 0.0, 1.0);
        let mut stroke_color    = Color::Rgba(0.0, 0.0, 0.0, 1.0);
        let mut line_width      = 1.0;
        let mut transform       = Transform2D::identity();

        for draw in self.drawing.iter() {
            match draw {
                Draw::NewPath                   => { current_path = vec![]; }
                Draw::FillColor(col)            => { fill_color = *col; }
                Draw::StrokeColor(col)          => { stroke_color = *col; }
                Draw::LineWidth(width)          => { line_width = *width; }
                Draw::SetTransform(new)         => { transform = *new; }

                Draw::Fill                      => painted.push(PaintedPath {
                    path:       current_path.clone(),
                    transform:  transform,
                    operation:  PaintOperation::Fill(fill_color)
                }),

                Draw::Stroke                    => painted.push(PaintedPath {
                    path:       current_path.clone(),
                    transform:  transform,
                    operation:  PaintOperation::Stroke(stroke_color, line_width)
                }),

                path_element if path_element.is_path_element() => { current_path.push(path_element.clone()); }

                _                               => { }
            }
        }

        painted
    }

    ///
    /// Retrieves the text runs that were drawn on this surface
    ///
    pub fn text_runs(&self) -> Vec<(String, TextPlacement)> {
        self.drawing.iter()
            .filter_map(|draw| match draw {
                Draw::DrawText(_, _, text, placement)   => Some((text.clone(), *placement)),
                _                                       => None
            })
            .collect()
    }

    ///
    /// Retrieves the images that were drawn on this surface
    ///
    pub fn images_drawn(&self) -> Vec<(ImageRef, ImagePlacement)> {
        self.drawing.iter()
            .filter_map(|draw| match draw {
                Draw::DrawImage(image, placement)   => Some((image.clone(), *placement)),
                _                                   => None
            })
            .collect()
    }
}

impl GraphicsContext for RecordingSurface {
    #[inline] fn new_path(&mut self)                                                    { self.drawing.push(Draw::NewPath); }
    #[inline] fn move_to(&mut self, x: f32, y: f32)                                     { self.drawing.push(Draw::Move(x, y)); }
    #[inline] fn line_to(&mut self, x: f32, y: f32)                                     { self.drawing.push(Draw::Line(x, y)); }
    #[inline] fn bezier_curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) { self.drawing.push(Draw::BezierCurve((x1, y1), (x2, y2), (x3, y3))); }
    #[inline] fn close_path(&mut self)                                                  { self.drawing.push(Draw::ClosePath); }
    #[inline] fn fill(&mut self)                                                        { self.drawing.push(Draw::Fill); }
    #[inline] fn stroke(&mut self)                                                      { self.drawing.push(Draw::Stroke); }
    #[inline] fn line_width(&mut self, width: f32)                                      { self.drawing.push(Draw::LineWidth(width)); }
    #[inline] fn line_join(&mut self, join: LineJoin)                                   { self.drawing.push(Draw::LineJoin(join)); }
    #[inline] fn line_cap(&mut self, cap: LineCap)                                      { self.drawing.push(Draw::LineCap(cap)); }
    #[inline] fn fill_color(&mut self, col: Color)                                      { self.drawing.push(Draw::FillColor(col)); }
    #[inline] fn stroke_color(&mut self, col: Color)                                    { self.drawing.push(Draw::StrokeColor(col)); }
    #[inline] fn set_transform(&mut self, transform: Transform2D)                       { self.drawing.push(Draw::SetTransform(transform)); }
    #[inline] fn draw_image(&mut self, image: ImageRef, placement: ImagePlacement)      { self.drawing.push(Draw::DrawImage(image, placement)); }
    #[inline] fn draw_text(&mut self, font: FontDesign, size: f32, text: String, placement: TextPlacement) { self.drawing.push(Draw::DrawText(font, size, text, placement)); }

    fn image_size(&mut self, image: &ImageRef) -> Option<(f32, f32)> {
        self.images.get(image.name()).cloned()
    }

    fn text_metrics(&mut self, _font: FontDesign, size: f32, text: &str) -> TextMetrics {
        TextMetrics {
            width:      (text.chars().count() as f32) * size * GLYPH_ADVANCE,
            ascent:     size * FONT_ASCENT,
            descent:    size * FONT_DESCENT
        }
    }

    #[inline]
    fn draw(&mut self, d: Draw) {
        self.drawing.push(d);
    }
}
