pub mod click;
pub mod keyboard;

pub use click::{resolve_triggers, wire_triggers};
pub use keyboard::wire_escape_dismiss;
