//!
//! # flo_sketch
//!
//! Processing-style sketches for the `flo_sketch_canvas` drawing surface.
//!
//! A sketch describes each frame as `Content`: an ordered list of `Instruction`s built by calling
//! the functions in this crate (`fill`, `rect`, `begin_shape`, `vertex`, ...). Nothing is drawn while
//! the content is being built. `evaluate_frame` walks the instructions in order against a fresh
//! `GameValues`, which holds the fill and stroke colours, the modes, the transform stack and any
//! shape that's being assembled, and sends the resolved geometry to a `GraphicsContext`.
//!
//! Coordinates are `CanvasValue`s, which combine an absolute part in pixels with a part that's
//! relative to the size of the surface, so the same content can be evaluated against surfaces of
//! any size.
//!
//! ```
//! # #[macro_use] extern crate flo_sketch;
//! # use flo_sketch::*;
//! let content = content![
//!     fill(color(255.0, 0.0, 0.0)),
//!     rect_mode(RectMode::Center),
//!     rect(CanvasValue::relative(0.5), CanvasValue::relative(0.5), CanvasValue::from(20.0), CanvasValue::from(20.0))
//! ];
//!
//! let mut surface = RecordingSurface::new();
//! let mut values  = GameValues::default();
//! evaluate_frame(&content, &mut values, &mut surface, SurfaceSize::new(400.0, 400.0)).unwrap();
//! ```
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;

extern crate serde;
extern crate serde_json;
extern crate desync;
extern crate flo_sketch_canvas;

mod value;
mod error;
mod color;
mod blend;
mod state;
mod instruction;
mod shapes;
mod complex_shapes;
mod curve_math;
mod text;
mod vocabulary;
mod evaluate;
mod config;
mod game;

pub use self::value::*;
pub use self::error::*;
pub use self::color::*;
pub use self::blend::*;
pub use self::state::*;
pub use self::instruction::*;
pub use self::shapes::*;
pub use self::complex_shapes::*;
pub use self::curve_math::*;
pub use self::text::*;
pub use self::vocabulary::*;
pub use self::evaluate::*;
pub use self::config::*;
pub use self::game::*;

pub use flo_sketch_canvas::*;
