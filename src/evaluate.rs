//!
//! Evaluating the content of a frame against a graphics context
//!
//! The instructions are walked in order. Actions update the `GameValues`, and draw operations resolve
//! their coordinates against the size of the surface and send the resulting paths to the context. If
//! an instruction fails, the rest of the frame is abandoned: whatever was already drawn stays on the
//! surface.
//!

use super::state::*;
use super::value::*;
use super::text::*;
use super::error::*;
use super::shapes::*;
use super::instruction::*;
use super::complex_shapes::*;

use flo_sketch_canvas::*;

use std::fmt;
use std::error::Error;
use std::collections::{HashMap};

///
/// The results of evaluating a frame, other than what was drawn
///
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct FrameOutput {
    /// The values measured by `observe` instructions, by name
    pub observed: HashMap<String, f64>,

    /// Problems that meant part of the frame was not drawn
    pub warnings: Vec<ResourceWarning>
}

///
/// Describes the instruction that stopped a frame from being evaluated
///
#[derive(Clone, PartialEq, Debug)]
pub struct FrameError {
    /// The index of the instruction in the content
    pub instruction_index: usize,

    /// The instruction that failed
    pub instruction: Instruction,

    /// What went wrong
    pub error: SketchError
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "instruction {} ({:?}) failed: {}", self.instruction_index, self.instruction, self.error)
    }
}

impl Error for FrameError {
    fn source(&self) -> Option<&(dyn Error+'static)> {
        Some(&self.error)
    }
}

///
/// Evaluates the content of a frame, drawing it to a graphics context
///
/// `values` should be fresh for each frame. On success, returns the values measured by any `observe`
/// instructions along with any warnings about missing resources.
///
pub fn evaluate_frame<Gc: GraphicsContext+?Sized>(content: &Content, values: &mut GameValues, gc: &mut Gc, size: SurfaceSize) -> Result<FrameOutput, FrameError> {
    let mut frame = FrameEvaluator {
        gc:             gc,
        size:           size,
        output:         FrameOutput::default(),
        last_transform: None
    };

    for (index, instruction) in content.iter().enumerate() {
        trace!("Instruction {}: {:?}", index, instruction);

        if let Err(error) = frame.evaluate(instruction, values) {
            let shape_mode = values.shape.as_ref().map(|shape| (shape.begin_mode, shape.shape_type));
            error!("Frame abandoned at instruction {} ({:?}): {} (shape: {:?})", index, instruction, error, shape_mode);

            return Err(FrameError {
                instruction_index:  index,
                instruction:        instruction.clone(),
                error:              error
            });
        }
    }

    Ok(frame.output)
}

///
/// Tracks the state of the graphics context while a frame is being evaluated
///
struct FrameEvaluator<'a, Gc: GraphicsContext+?Sized> {
    gc: &'a mut Gc,
    size: SurfaceSize,
    output: FrameOutput,

    /// The transform most recently sent to the graphics context, or `None` before the first one
    last_transform: Option<Transform2D>
}

impl<'a, Gc: GraphicsContext+?Sized> FrameEvaluator<'a, Gc> {
    fn evaluate(&mut self, instruction: &Instruction, values: &mut GameValues) -> Result<(), SketchError> {
        match instruction {
            Instruction::Action(action)             => action.apply(values, self.size),
            Instruction::Draw(draw)                 => self.draw(draw, values),
            Instruction::Observe(name, observable)  => {
                if let Some(value) = self.observe(observable, values) {
                    self.output.observed.insert(name.clone(), value);
                }
                Ok(())
            }
        }
    }

    ///
    /// Sends the current transform to the graphics context if it has changed
    ///
    /// The context may still hold the transform from an earlier frame, so the first drawing operation
    /// always sends one.
    ///
    fn sync_transform(&mut self, values: &GameValues) {
        if Some(values.transform) != self.last_transform {
            self.gc.set_transform(values.transform);
            self.last_transform = Some(values.transform);
        }
    }

    ///
    /// Fills and then strokes a path, according to the current settings
    ///
    fn paint(&mut self, path: &[Draw], values: &GameValues) {
        if path.is_empty() {
            return;
        }

        if !values.no_fill {
            self.gc.fill_path(path, values.fill_color);
        }

        if !values.no_stroke {
            self.gc.stroke_path(path, values.stroke_color, values.stroke_weight as f32, values.stroke_cap.line_cap(), values.stroke_join);
        }
    }

    ///
    /// Draws a point marker (which is always filled with the stroke colour)
    ///
    fn paint_point(&mut self, x: f64, y: f64, values: &GameValues) {
        let marker = point_marker_path(x, y, values.stroke_weight);
        self.gc.fill_path(&marker, values.stroke_color);
    }

    fn draw(&mut self, draw: &DrawOp, values: &mut GameValues) -> Result<(), SketchError> {
        use self::DrawOp::*;

        self.sync_transform(values);

        let size    = self.size;
        let point   = |p: &CanvasPoint| p.resolve(size);

        match draw {
            Background(color)                           => {
                let background = draw_rect(0.0, 0.0, size.width as f32, size.height as f32);
                self.gc.fill_path(&background, color.resolve(values.color_mode));
            }

            Rect { bounds, layout, corner_radius }      => {
                let layout = layout.unwrap_or_else(|| values.rect_mode.layout());
                self.paint(&rect_path(&layout.resolve(bounds, size), *corner_radius), values);
            }

            Ellipse { bounds, layout }                  => {
                let layout = layout.unwrap_or_else(|| values.ellipse_mode.layout());
                self.paint(&ellipse_path(&layout.resolve(bounds, size)), values);
            }

            Arc { bounds, layout, start, stop }         => {
                let layout = layout.unwrap_or_else(|| values.ellipse_mode.layout());

                if let Some((fill, stroke)) = arc_paths(&layout.resolve(bounds, size), *start, *stop) {
                    if !values.no_fill {
                        self.gc.fill_path(&fill, values.fill_color);
                    }
                    if !values.no_stroke {
                        self.gc.stroke_path(&stroke, values.stroke_color, values.stroke_weight as f32, values.stroke_cap.line_cap(), values.stroke_join);
                    }
                }
            }

            Triangle(p1, p2, p3)                        => self.paint(&polygon_path(&[point(p1), point(p2), point(p3)], true), values),
            Quad(p1, p2, p3, p4)                        => self.paint(&polygon_path(&[point(p1), point(p2), point(p3), point(p4)], true), values),
            Line(p1, p2)                                => self.paint(&polygon_path(&[point(p1), point(p2)], false), values),

            Point(p)                                    => {
                let (x, y) = point(p);
                self.paint_point(x, y, values);
            }

            Bezier { start, control1, control2, end }   => self.paint(&bezier_path(point(start), point(control1), point(control2), point(end)), values),
            Curve(points)                               => {
                let points = points.iter().map(point).collect::<Vec<_>>();
                self.paint(&curve_path(&points, values.curve_tightness), values);
            }

            Image { image, position, width, height, layout } => {
                let layout = layout.unwrap_or_else(|| values.image_mode.layout());
                self.draw_image(image, position, *width, *height, layout);
            }

            Text { text, position }                     => {
                let (x, y)  = point(position);
                let drawing = text_drawing(&mut *self.gc, text, x, y, values);
                self.gc.draw_list(Box::new(drawing.into_iter()));
            }

            TextInRect { text, position, size: text_size } => {
                let (x, y)          = point(position);
                let (width, height) = text_size.resolve(size);
                let drawing         = text_in_rect_drawing(text, x, y, width, height, values);
                self.gc.draw_list(Box::new(drawing.into_iter()));
            }

            EndShape(end_mode)                          => {
                let shape       = values.shape.as_ref().ok_or(ShapeAssemblyError::NoShapeInProgress)?;
                let geometry    = resolve_shape(shape, *end_mode, values.curve_tightness, size)?;

                match geometry {
                    ShapeGeometry::Points(points)   => {
                        for (x, y) in points {
                            self.paint_point(x, y, values);
                        }
                    }

                    ShapeGeometry::Path(path)       => self.paint(&path, values)
                }

                values.shape = None;
            }
        }

        Ok(())
    }

    ///
    /// Retrieves the natural size of an image, adding a warning if it can't be found
    ///
    fn image_size(&mut self, image: &ImageRef) -> Option<(f64, f64)> {
        match self.gc.image_size(image) {
            Some((width, height))   => Some((width as f64, height as f64)),
            None                    => {
                warn!("Image '{}' could not be found", image.name());
                self.output.warnings.push(ResourceWarning::ImageNotFound(image.name().to_string()));
                None
            }
        }
    }

    ///
    /// Draws an image, using its natural size for any dimensions that aren't supplied
    ///
    fn draw_image(&mut self, image: &ImageRef, position: &CanvasPoint, width: Option<CanvasValue>, height: Option<CanvasValue>, layout: BoxLayout) {
        let (natural_width, natural_height) = match self.image_size(image) {
            Some(natural_size)  => natural_size,
            None                => { return; }
        };

        let (x, y) = position.resolve(self.size);

        let placement = if width.is_none() && height.is_none() {
            // Natural size, anchored according to the layout
            match layout {
                BoxLayout::Corner | BoxLayout::Corners  => ImagePlacement::At(x as f32, y as f32),
                BoxLayout::Center | BoxLayout::Radius   => ImagePlacement::At((x - natural_width/2.0) as f32, (y - natural_height/2.0) as f32)
            }
        } else {
            // Any missing dimension comes from the natural size of the image
            let (natural_c, natural_d) = match layout {
                BoxLayout::Corner | BoxLayout::Center   => (natural_width, natural_height),
                BoxLayout::Corners                      => (x + natural_width, y + natural_height),
                BoxLayout::Radius                       => (natural_width/2.0, natural_height/2.0)
            };

            let args    = BoxArgs(
                CanvasValue::absolute(x),
                CanvasValue::absolute(y),
                width.unwrap_or_else(|| CanvasValue::absolute(natural_c)),
                height.unwrap_or_else(|| CanvasValue::absolute(natural_d)));
            let bounds  = layout.resolve(&args, self.size);

            ImagePlacement::InRect(bounds.x as f32, bounds.y as f32, bounds.width as f32, bounds.height as f32)
        };

        self.gc.draw_image(image.clone(), placement);
    }

    ///
    /// Measures an observable value
    ///
    fn observe(&mut self, observable: &Observable, values: &GameValues) -> Option<f64> {
        use self::Observable::*;

        match observable {
            CanvasWidth         => Some(self.size.width),
            CanvasHeight        => Some(self.size.height),
            ImageWidth(image)   => self.image_size(image).map(|(width, _)| width),
            ImageHeight(image)  => self.image_size(image).map(|(_, height)| height),
            TextWidth(text)     => Some(self.gc.text_metrics(values.text_font, values.text_size as f32, text).width as f64),
            TextAscent          => Some(self.gc.text_metrics(values.text_font, values.text_size as f32, "").ascent as f64),
            TextDescent         => Some(self.gc.text_metrics(values.text_font, values.text_size as f32, "").descent as f64)
        }
    }
}
