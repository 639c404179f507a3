pub mod config;
pub mod constants;
pub mod cooldown;
pub mod easing;
pub mod encoder;
pub mod manager;
pub mod movement;
pub mod point;
pub mod pool;
pub mod timer;
pub mod trigger;

pub use config::*;
pub use constants::*;
pub use cooldown::*;
pub use easing::*;
pub use encoder::*;
pub use manager::*;
pub use movement::*;
pub use point::*;
pub use pool::*;
pub use timer::*;
pub use trigger::*;
