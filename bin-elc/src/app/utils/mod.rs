mod format;
mod helper;
mod input;

pub use format::*;
pub use helper::*;
pub use input::*;
