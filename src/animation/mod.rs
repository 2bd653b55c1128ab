pub mod css;
pub mod types;

pub use css::{install_motion_css, motion_css};
pub use types::{EntranceAnimation, LoopAnimation, Trigger, Weight};
