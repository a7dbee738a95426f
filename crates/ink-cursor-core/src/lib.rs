//! Ink cursor trail simulation.
//!
//! A chain of markers follows the pointer, drifts on its own once the pointer
//! goes quiet, and morphs into a blob outlining hovered elements. Nothing here
//! touches a platform API; hosts inject input and frame timing and read back a
//! [`Frame`] of transforms.

pub mod config;
pub mod constants;
pub mod hover;
pub mod idle;
pub mod marker;
pub mod trail;
pub mod tween;

pub use config::*;
pub use hover::{BlobPlacement, BlobShape, Bounds, HoverTarget};
pub use idle::IdleTimer;
pub use marker::{Marker, MarkerTransform};
pub use trail::{CursorTrail, Frame};
