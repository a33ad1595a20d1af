use super::draw::*;
use super::color::*;
use super::transform2d::*;

///
/// A graphics context is the surface that a sketch paints on
///
/// Paths are built up with `new_path`, `move_to`, `line_to`, `bezier_curve_to` and `close_path` and
/// painted with `fill` or `stroke` using the colours and line settings that were most recently set.
/// Surfaces also report back the sizes of images and text, which sketches need to lay things out.
///
pub trait GraphicsContext {
    fn new_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn bezier_curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn line_width(&mut self, width: f32);
    fn line_join(&mut self, join: LineJoin);
    fn line_cap(&mut self, cap: LineCap);
    fn fill_color(&mut self, col: Color);
    fn stroke_color(&mut self, col: Color);
    fn set_transform(&mut self, transform: Transform2D);
    fn draw_image(&mut self, image: ImageRef, placement: ImagePlacement);
    fn draw_text(&mut self, font: FontDesign, size: f32, text: String, placement: TextPlacement);

    ///
    /// Retrieves the natural size of an image, or None if the image can't be loaded
    ///
    fn image_size(&mut self, image: &ImageRef) -> Option<(f32, f32)>;

    ///
    /// Measures a run of text in the specified font
    ///
    fn text_metrics(&mut self, font: FontDesign, size: f32, text: &str) -> TextMetrics;

    fn draw(&mut self, d: Draw) {
        use self::Draw::*;

        match d {
            NewPath                                     => self.new_path(),
            Move(x, y)                                  => self.move_to(x, y),
            Line(x, y)                                  => self.line_to(x, y),
            BezierCurve((x1, y1), (x2, y2), (x3, y3))   => self.bezier_curve_to(x1, y1, x2, y2, x3, y3),
            ClosePath                                   => self.close_path(),
            Fill                                        => self.fill(),
            Stroke                                      => self.stroke(),
            LineWidth(width)                            => self.line_width(width),
            LineJoin(join)                              => self.line_join(join),
            LineCap(cap)                                => self.line_cap(cap),
            FillColor(col)                              => self.fill_color(col),
            StrokeColor(col)                            => self.stroke_color(col),
            SetTransform(transform)                     => self.set_transform(transform),
            DrawImage(image, placement)                 => self.draw_image(image, placement),
            DrawText(font, size, text, placement)       => self.draw_text(font, size, text, placement)
        }
    }

    fn draw_list<'a>(&'a mut self, drawing: Box<dyn 'a+Iterator<Item=Draw>>) {
        for d in drawing {
            self.draw(d);
        }
    }
}

///
/// GraphicsPrimitives adds operations for painting whole paths built by the functions in the `path` module
///
pub trait GraphicsPrimitives : GraphicsContext {
    ///
    /// Starts a new path made up of the specified path elements
    ///
    fn path(&mut self, path: &[Draw]) {
        self.new_path();

        for element in path.iter().filter(|element| element.is_path_element()) {
            self.draw(element.clone());
        }
    }

    ///
    /// Fills a path with a solid colour
    ///
    fn fill_path(&mut self, path: &[Draw], color: Color) {
        self.path(path);
        self.fill_color(color);
        self.fill();
    }

    ///
    /// Strokes a path with a solid colour and the specified line settings
    ///
    fn stroke_path(&mut self, path: &[Draw], color: Color, width: f32, cap: LineCap, join: LineJoin) {
        self.path(path);
        self.stroke_color(color);
        self.line_width(width);
        self.line_cap(cap);
        self.line_join(join);
        self.stroke();
    }
}

impl<Gc: GraphicsContext+?Sized> GraphicsPrimitives for Gc { }
