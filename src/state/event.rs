use super::model::Phase;

/// Inputs routed into the trigger machine by the widget wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconEvent {
    PointerEnter,
    PointerLeave,
    /// Primary-button press on the container.
    Press,
    /// Elapsed click auto-revert timer.
    RevertElapsed,
    /// Focus entered the container. `visible` is true only for
    /// keyboard-originated focus (focus ring shown), never for pointer
    /// focus.
    FocusIn { visible: bool },
    FocusOut,
    /// Entrance animation completion signal.
    EntranceFinished,
}

/// One applied phase transition, recorded for observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRecord {
    pub from: Phase,
    pub event: IconEvent,
    pub to: Phase,
}

impl TransitionRecord {
    pub fn new(from: Phase, event: IconEvent, to: Phase) -> Self {
        Self { from, event, to }
    }
}
