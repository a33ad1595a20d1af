//!
//! An abstract representation of the drawing surface that sketches are painted on
//!
//! Sketches never talk to a renderer directly: they resolve their geometry into `Draw` instructions
//! and send them to a `GraphicsContext`. `RecordingSurface` is a context that just remembers what
//! it was asked to draw, which is what hosts use to snapshot a frame (and what the tests use).
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

extern crate flo_curves as curves;

mod gc;
mod draw;
mod path;
mod color;
mod recording;
mod transform2d;

pub use self::gc::*;
pub use self::draw::*;
pub use self::path::*;
pub use self::color::*;
pub use self::recording::*;
pub use self::transform2d::*;
