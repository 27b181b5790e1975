//! The line-oriented operator dialogue: menu, token input, dispatch.

mod menu;
mod session;
mod tokens;

pub use menu::*;
pub use session::*;
pub use tokens::*;
