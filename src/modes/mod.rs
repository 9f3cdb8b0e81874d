pub mod autoplay;
pub mod human;

pub use autoplay::{AutoplayConfig, AutoplayMode, AutoplayReport};
pub use human::HumanMode;
