pub mod hover;
pub mod pointer;

pub use hover::{wire_hover_targets, HoverWiring};
pub use pointer::wire_pointer_input;
