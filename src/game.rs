//!
//! Running a sketch: the `Game` trait describes a sketch and `Sketch` drives it from a host
//!
//! The host sends input to `Sketch::handle_event` as it arrives and calls `Sketch::render_frame` whenever
//! it wants a new frame, at the rate returned by `Sketch::frame_rate`.
//!

use super::state::*;
use super::value::*;
use super::config::*;
use super::evaluate::*;
use super::instruction::*;

use flo_sketch_canvas::*;

///
/// The mouse buttons that a sketch can tell apart
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Center
}

///
/// What a sketch knows about the canvas and the input devices when it's asked to draw or respond to input
///
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct CanvasValues {
    /// Time in seconds since the previous frame (0 for the first frame)
    pub frame_time: f64,

    pub mouse_x: f64,
    pub mouse_y: f64,

    /// Where the mouse was when the previous frame was drawn
    pub pmouse_x: f64,
    pub pmouse_y: f64,

    pub width: f64,
    pub height: f64,

    pub mouse_is_pressed: bool,
    pub mouse_button: Option<MouseButton>,

    /// The code of the last key that was pressed
    pub key: Option<u16>,

    /// The text generated by the last key that was pressed
    pub key_text: Option<String>,
    pub key_is_pressed: bool
}

///
/// Input events that a host passes on to a sketch
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum InputEvent {
    MouseMoved { x: f64, y: f64 },
    MouseDown { x: f64, y: f64, button: MouseButton },
    MouseUp { x: f64, y: f64, button: MouseButton },
    MouseDragged { x: f64, y: f64 },

    /// The mouse moved over the canvas
    MouseEntered,

    /// The mouse left the canvas
    MouseExited,

    KeyDown { key: u16, text: String },
    KeyUp { key: u16 }
}

///
/// A sketch that can be run by `Sketch`
///
/// Only `draw` has to be implemented. The input callbacks are called with the canvas values as they are
/// after the event has been taken into account, except that the mouse button is only recorded after
/// `mouse_pressed` and is only cleared after `mouse_released`.
///
pub trait Game {
    ///
    /// Called once, before the first frame is drawn
    ///
    fn setup(&mut self) { }

    ///
    /// Describes the content of a frame
    ///
    fn draw(&self, values: &CanvasValues) -> Content;

    fn mouse_clicked(&mut self, _values: &CanvasValues) { }
    fn mouse_pressed(&mut self, _values: &CanvasValues) { }
    fn mouse_released(&mut self, _values: &CanvasValues) { }
    fn mouse_moved(&mut self, _values: &CanvasValues) { }
    fn mouse_dragged(&mut self, _values: &CanvasValues) { }
    fn mouse_over(&mut self, _values: &CanvasValues) { }
    fn mouse_out(&mut self, _values: &CanvasValues) { }

    fn key_pressed(&mut self, _values: &CanvasValues) { }
    fn key_released(&mut self, _values: &CanvasValues) { }
}

///
/// Drives a `Game` on behalf of a host
///
pub struct Sketch<G: Game> {
    /// The game being run
    game: G,

    /// The configuration the sketch was started with
    config: SketchConfig,

    /// The frame rate requested by the sketch
    frame_rate: FrameRateTarget,

    /// The canvas values as of the last event or frame
    canvas_values: CanvasValues,

    /// The time passed to the previous call to `render_frame`
    last_frame_time: Option<f64>,

    /// True once `setup` has been called
    is_set_up: bool
}

impl<G: Game> Sketch<G> {
    ///
    /// Prepares to run a game
    ///
    pub fn new(game: G, config: SketchConfig) -> Sketch<G> {
        let canvas_values = CanvasValues {
            width:  config.width,
            height: config.height,
            ..CanvasValues::default()
        };

        Sketch {
            game:               game,
            frame_rate:         FrameRateTarget::new(config.frame_rate),
            config:             config,
            canvas_values:      canvas_values,
            last_frame_time:    None,
            is_set_up:          false
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn canvas_values(&self) -> &CanvasValues {
        &self.canvas_values
    }

    ///
    /// The frame rate that the sketch would like to be drawn at (0 if it has stopped looping)
    ///
    pub fn frame_rate(&self) -> f64 {
        self.frame_rate.get()
    }

    fn set_up(&mut self) {
        if !self.is_set_up {
            debug!("Setting up sketch");

            self.is_set_up = true;
            self.game.setup();
        }
    }

    fn move_mouse(&mut self, x: f64, y: f64) {
        self.canvas_values.mouse_x = x;
        self.canvas_values.mouse_y = y;
    }

    ///
    /// Updates the canvas values for an input event and calls the game's callbacks
    ///
    pub fn handle_event(&mut self, event: InputEvent) {
        self.set_up();

        match event {
            InputEvent::MouseMoved { x, y }             => {
                self.move_mouse(x, y);
                self.game.mouse_moved(&self.canvas_values);
            }

            InputEvent::MouseDragged { x, y }           => {
                self.move_mouse(x, y);
                self.game.mouse_dragged(&self.canvas_values);
            }

            InputEvent::MouseDown { x, y, button }      => {
                self.move_mouse(x, y);
                self.game.mouse_pressed(&self.canvas_values);

                self.canvas_values.mouse_is_pressed = true;
                self.canvas_values.mouse_button     = Some(button);
            }

            InputEvent::MouseUp { x, y, button: _ }     => {
                self.move_mouse(x, y);
                self.game.mouse_clicked(&self.canvas_values);
                self.game.mouse_released(&self.canvas_values);

                self.canvas_values.mouse_is_pressed = false;
                self.canvas_values.mouse_button     = None;
            }

            InputEvent::MouseEntered                    => self.game.mouse_over(&self.canvas_values),
            InputEvent::MouseExited                     => self.game.mouse_out(&self.canvas_values),

            InputEvent::KeyDown { key, text }           => {
                self.canvas_values.key              = Some(key);
                self.canvas_values.key_text         = Some(text);
                self.canvas_values.key_is_pressed   = true;

                self.game.key_pressed(&self.canvas_values);
            }

            InputEvent::KeyUp { key: _ }                => {
                self.canvas_values.key_is_pressed   = false;

                self.game.key_released(&self.canvas_values);
            }
        }
    }

    ///
    /// Draws a frame of the sketch
    ///
    /// `time` is a timestamp in seconds, which is used to work out the frame time. Each frame is evaluated
    /// against a fresh set of `GameValues`.
    ///
    pub fn render_frame<Gc: GraphicsContext+?Sized>(&mut self, gc: &mut Gc, size: SurfaceSize, time: f64) -> Result<FrameOutput, FrameError> {
        self.set_up();

        self.canvas_values.frame_time   = self.last_frame_time.map(|last_time| time - last_time).unwrap_or(0.0);
        self.canvas_values.width        = size.width;
        self.canvas_values.height       = size.height;
        self.last_frame_time            = Some(time);

        let content     = self.game.draw(&self.canvas_values);
        let mut values  = GameValues::with_config(&self.config, self.frame_rate.clone());
        let result      = evaluate_frame(&content, &mut values, gc, size);

        // The previous mouse position is the position as of this frame, whether or not it succeeded
        self.canvas_values.pmouse_x = self.canvas_values.mouse_x;
        self.canvas_values.pmouse_y = self.canvas_values.mouse_y;

        result
    }
}
