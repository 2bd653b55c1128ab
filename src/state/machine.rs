use crate::animation::Trigger;

use super::event::{IconEvent, TransitionRecord};
use super::model::Phase;

/// Outcome of routing one event through the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    /// Whether the phase changed (the class list must be re-synced).
    pub changed: bool,
    /// Whether the wiring must arm a click auto-revert timer.
    pub arm_revert: bool,
}

impl Applied {
    const IGNORED: Applied = Applied {
        changed: false,
        arm_revert: false,
    };
}

/// Two-phase machine governing the loop-animation class, keyed by the
/// configured trigger mode. Events with no entry for the current mode are
/// ignored rather than rejected; an icon receives plenty of input that is
/// simply not its concern.
#[derive(Debug)]
pub struct TriggerMachine {
    trigger: Trigger,
    phase: Phase,
    transition_history: Vec<TransitionRecord>,
}

impl TriggerMachine {
    /// With `Trigger::Always` the machine starts (and stays) Animating.
    pub fn new(trigger: Trigger) -> Self {
        let phase = match trigger {
            Trigger::Always => Phase::Animating,
            _ => Phase::Idle,
        };
        Self {
            trigger,
            phase,
            transition_history: Vec::new(),
        }
    }

    pub fn trigger(&self) -> Trigger {
        self.trigger
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn next_phase(&self, event: IconEvent) -> Option<Phase> {
        use IconEvent::*;
        match (self.trigger, event) {
            // Always: permanently Animating, no transitions at all.
            (Trigger::Always, _) => None,
            (Trigger::Hover, PointerEnter) => Some(Phase::Animating),
            (Trigger::Hover, PointerLeave) => Some(Phase::Idle),
            (Trigger::Click, Press) => Some(Phase::Animating),
            (Trigger::Click, RevertElapsed) => Some(Phase::Idle),
            // Keyboard-visible focus only; pointer focus reports visible=false.
            (Trigger::Focus, FocusIn { visible: true }) => Some(Phase::Animating),
            (Trigger::Focus, FocusOut) => Some(Phase::Idle),
            _ => None,
        }
    }

    pub fn apply(&mut self, event: IconEvent) -> Applied {
        let Some(next) = self.next_phase(event) else {
            return Applied::IGNORED;
        };

        tracing::trace!(from = ?self.phase, event = ?event, to = ?next, "icon phase transition");
        let record = TransitionRecord::new(self.phase, event, next);
        let changed = next != self.phase;
        self.phase = next;
        self.transition_history.push(record);

        Applied {
            changed,
            arm_revert: self.trigger == Trigger::Click && event == IconEvent::Press,
        }
    }
}

#[cfg(test)]
impl TriggerMachine {
    fn history(&self) -> &[TransitionRecord] {
        &self.transition_history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_trigger_starts_animating_and_ignores_everything() {
        let mut machine = TriggerMachine::new(Trigger::Always);
        assert_eq!(machine.phase(), Phase::Animating);

        for event in [
            IconEvent::PointerEnter,
            IconEvent::PointerLeave,
            IconEvent::Press,
            IconEvent::RevertElapsed,
            IconEvent::FocusIn { visible: true },
            IconEvent::FocusOut,
            IconEvent::EntranceFinished,
        ] {
            let applied = machine.apply(event);
            assert_eq!(applied, Applied::IGNORED, "event {event:?} must be ignored");
            assert_eq!(machine.phase(), Phase::Animating);
        }
        assert!(machine.history().is_empty());
    }

    #[test]
    fn hover_trigger_follows_pointer_enter_and_leave() {
        let mut machine = TriggerMachine::new(Trigger::Hover);
        assert_eq!(machine.phase(), Phase::Idle);

        let applied = machine.apply(IconEvent::PointerEnter);
        assert!(applied.changed);
        assert!(!applied.arm_revert);
        assert_eq!(machine.phase(), Phase::Animating);

        let applied = machine.apply(IconEvent::PointerLeave);
        assert!(applied.changed);
        assert_eq!(machine.phase(), Phase::Idle);

        // Clicks mean nothing in hover mode.
        assert_eq!(machine.apply(IconEvent::Press), Applied::IGNORED);
    }

    #[test]
    fn click_trigger_arms_revert_and_reverts_on_elapsed() {
        let mut machine = TriggerMachine::new(Trigger::Click);
        assert_eq!(machine.phase(), Phase::Idle);

        let applied = machine.apply(IconEvent::Press);
        assert!(applied.changed);
        assert!(applied.arm_revert);
        assert_eq!(machine.phase(), Phase::Animating);

        // A press while already animating arms another revert; the earlier
        // one stays armed too (fire-and-forget).
        let applied = machine.apply(IconEvent::Press);
        assert!(!applied.changed);
        assert!(applied.arm_revert);

        let applied = machine.apply(IconEvent::RevertElapsed);
        assert!(applied.changed);
        assert_eq!(machine.phase(), Phase::Idle);
    }

    #[test]
    fn focus_trigger_only_accepts_keyboard_visible_focus() {
        let mut machine = TriggerMachine::new(Trigger::Focus);

        assert_eq!(
            machine.apply(IconEvent::FocusIn { visible: false }),
            Applied::IGNORED
        );
        assert_eq!(machine.phase(), Phase::Idle);

        let applied = machine.apply(IconEvent::FocusIn { visible: true });
        assert!(applied.changed);
        assert_eq!(machine.phase(), Phase::Animating);

        let applied = machine.apply(IconEvent::FocusOut);
        assert!(applied.changed);
        assert_eq!(machine.phase(), Phase::Idle);
    }

    #[test]
    fn applied_transitions_record_ordered_history() {
        let mut machine = TriggerMachine::new(Trigger::Hover);
        machine.apply(IconEvent::PointerEnter);
        machine.apply(IconEvent::Press);
        machine.apply(IconEvent::PointerLeave);

        assert_eq!(machine.history().len(), 2);
        assert_eq!(
            machine.history()[0],
            TransitionRecord::new(Phase::Idle, IconEvent::PointerEnter, Phase::Animating)
        );
        assert_eq!(
            machine.history()[1],
            TransitionRecord::new(Phase::Animating, IconEvent::PointerLeave, Phase::Idle)
        );
    }
}
