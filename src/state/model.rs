use crate::animation::{EntranceAnimation, LoopAnimation, Trigger};

use super::event::IconEvent;
use super::machine::{Applied, TriggerMachine};

/// Loop-animation phase of one icon instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Animating,
}

/// Per-instance interaction state: the trigger machine plus the two
/// flags that live outside it. Owned by exactly one widget instance and
/// reset only on rebuild.
#[derive(Debug)]
pub struct InteractionState {
    machine: TriggerMachine,
    hovered: bool,
    entered: bool,
}

impl InteractionState {
    /// `entered` starts true iff no entrance animation is configured.
    pub fn new(trigger: Trigger, entrance: Option<EntranceAnimation>) -> Self {
        Self {
            machine: TriggerMachine::new(trigger),
            hovered: false,
            entered: entrance.is_none(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn entered(&self) -> bool {
        self.entered
    }

    /// Route one event through the machine and the side flags.
    /// `interactive` gates the hover affordance only; the machine sees the
    /// event regardless.
    pub fn handle(&mut self, event: IconEvent, interactive: bool) -> Applied {
        match event {
            IconEvent::PointerEnter if interactive => self.hovered = true,
            IconEvent::PointerLeave if interactive => self.hovered = false,
            IconEvent::EntranceFinished => {
                // Monotonic: never reverts within the instance's lifetime.
                self.entered = true;
            }
            _ => {}
        }
        self.machine.apply(event)
    }

    /// The loop class is rendered only while Animating and a loop style is
    /// configured.
    pub fn loop_class_active(&self, animation: LoopAnimation) -> bool {
        self.phase() == Phase::Animating && animation != LoopAnimation::None
    }

    /// The entrance class is rendered from build time until the completion
    /// signal arrives.
    pub fn entrance_class_active(&self, entrance: Option<EntranceAnimation>) -> bool {
        entrance.is_some() && !self.entered
    }

    pub fn hover_scale_active(&self, interactive: bool) -> bool {
        interactive && self.hovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entered_starts_true_without_entrance() {
        let state = InteractionState::new(Trigger::Always, None);
        assert!(state.entered());
        assert!(!state.entrance_class_active(None));
    }

    #[test]
    fn entered_starts_false_with_entrance_and_is_monotonic() {
        let mut state = InteractionState::new(Trigger::Always, Some(EntranceAnimation::FadeIn));
        assert!(!state.entered());
        assert!(state.entrance_class_active(Some(EntranceAnimation::FadeIn)));

        state.handle(IconEvent::EntranceFinished, false);
        assert!(state.entered());
        assert!(!state.entrance_class_active(Some(EntranceAnimation::FadeIn)));

        // No event may revert the flag.
        state.handle(IconEvent::PointerEnter, true);
        state.handle(IconEvent::PointerLeave, true);
        state.handle(IconEvent::Press, true);
        assert!(state.entered());
    }

    #[test]
    fn hover_flag_only_toggles_when_interactive() {
        let mut state = InteractionState::new(Trigger::Hover, None);
        state.handle(IconEvent::PointerEnter, false);
        assert!(!state.hovered());
        assert!(!state.hover_scale_active(false));

        state.handle(IconEvent::PointerEnter, true);
        assert!(state.hovered());
        assert!(state.hover_scale_active(true));

        state.handle(IconEvent::PointerLeave, true);
        assert!(!state.hovered());
    }

    #[test]
    fn loop_class_requires_animating_phase_and_configured_style() {
        let mut state = InteractionState::new(Trigger::Hover, None);
        assert!(!state.loop_class_active(LoopAnimation::Pulse));

        state.handle(IconEvent::PointerEnter, false);
        assert!(state.loop_class_active(LoopAnimation::Pulse));
        assert!(!state.loop_class_active(LoopAnimation::None));
    }
}
