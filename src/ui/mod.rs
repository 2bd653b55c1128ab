pub mod class_names;
pub mod motion_icon;
pub mod style;

pub use class_names::{class_names, BASE_CLASS, HOVER_SCALE_CLASS, INTERACTIVE_CLASS};
pub use motion_icon::{MotionIcon, MotionIconConfig};
pub use style::{StyleTokens, MOTION_TOKENS};
