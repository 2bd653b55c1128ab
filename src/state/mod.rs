pub mod event;
pub mod machine;
pub mod model;

pub use event::{IconEvent, TransitionRecord};
pub use machine::{Applied, TriggerMachine};
pub use model::{InteractionState, Phase};
