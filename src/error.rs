use super::state::*;

use std::fmt;
use std::error::Error;

///
/// Errors that can occur while a shape built with `begin_shape`/`vertex`/`end_shape` is resolved
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum ShapeAssemblyError {
    /// A vertex was added or a shape was ended without a `begin_shape` instruction first
    NoShapeInProgress,

    /// `end_shape` was called on a shape with no vertices
    EmptyShape { shape_type: ShapeType },

    /// The shape has too few vertices to be resolved
    NotEnoughVertices { shape_type: ShapeType, required: usize, found: usize }
}

///
/// Errors that stop an instruction from running
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum SketchError {
    /// A shape could not be assembled
    ShapeAssembly(ShapeAssemblyError),

    /// The operation is not available on this surface (the name of the operation is supplied)
    UnsupportedOperation(String),

    /// The configuration could not be read
    Config(String)
}

///
/// Problems that don't stop a frame from being drawn, but which mean that part of it is missing
///
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ResourceWarning {
    /// The surface could not load the image with the specified name
    ImageNotFound(String)
}

impl From<ShapeAssemblyError> for SketchError {
    fn from(err: ShapeAssemblyError) -> SketchError {
        SketchError::ShapeAssembly(err)
    }
}

impl fmt::Display for ShapeAssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::ShapeAssemblyError::*;

        match self {
            NoShapeInProgress                                   => write!(f, "no shape is in progress (begin_shape was not called)"),
            EmptyShape { shape_type }                           => write!(f, "cannot end a {:?} shape with no vertices", shape_type),
            NotEnoughVertices { shape_type, required, found }   => write!(f, "a {:?} shape needs at least {} vertices but has {}", shape_type, required, found)
        }
    }
}

impl fmt::Display for SketchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SketchError::ShapeAssembly(err)         => write!(f, "{}", err),
            SketchError::UnsupportedOperation(op)   => write!(f, "{} is not supported", op),
            SketchError::Config(msg)                => write!(f, "invalid configuration: {}", msg)
        }
    }
}

impl fmt::Display for ResourceWarning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ResourceWarning::ImageNotFound(name)    => write!(f, "image '{}' could not be found", name)
        }
    }
}

impl Error for ShapeAssemblyError { }

impl Error for SketchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SketchError::ShapeAssembly(err) => Some(err),
            _                               => None
        }
    }
}
