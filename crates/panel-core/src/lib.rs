pub mod config;
pub mod constants;
pub mod controller;
pub mod machine;
pub mod sim;
pub mod state;

pub use config::*;
pub use controller::*;
pub use machine::*;
pub use state::*;
