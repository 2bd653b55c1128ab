use crate::state::InteractionState;

use super::motion_icon::MotionIconConfig;

/// Base layout class, always present.
pub const BASE_CLASS: &str = "glint-icon";
/// Pointer affordance class, present only on interactive icons.
pub const INTERACTIVE_CLASS: &str = "glint-interactive";
/// Scale affordance while an interactive icon is hovered.
pub const HOVER_SCALE_CLASS: &str = "glint-hover-scale";

/// Project config and state into the ordered class list for the container.
///
/// Order matters: caller-supplied classes come last so they can override
/// anything the component sets. `instance_class` is the per-instance
/// timing class (`glint-i{n}`).
pub fn class_names(
    config: &MotionIconConfig,
    state: &InteractionState,
    instance_class: &str,
) -> Vec<String> {
    let mut classes = vec![BASE_CLASS.to_owned(), instance_class.to_owned()];

    if config.interactive {
        classes.push(INTERACTIVE_CLASS.to_owned());
    }
    if state.loop_class_active(config.animation) {
        classes.push(config.animation.css_class().to_owned());
    }
    if state.entrance_class_active(config.entrance) {
        if let Some(entrance) = config.entrance {
            classes.push(entrance.css_class().to_owned());
        }
    }
    if state.hover_scale_active(config.interactive) {
        classes.push(HOVER_SCALE_CLASS.to_owned());
    }
    classes.extend(config.extra_classes.iter().cloned());
    classes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{EntranceAnimation, LoopAnimation, Trigger};
    use crate::state::IconEvent;

    fn config() -> MotionIconConfig {
        MotionIconConfig::new("Heart")
    }

    fn state_for(config: &MotionIconConfig) -> InteractionState {
        InteractionState::new(config.trigger, config.entrance)
    }

    #[test]
    fn base_and_instance_classes_always_lead() {
        let config = config();
        let state = state_for(&config);
        let classes = class_names(&config, &state, "glint-i7");
        assert_eq!(classes[0], BASE_CLASS);
        assert_eq!(classes[1], "glint-i7");
    }

    #[test]
    fn always_trigger_shows_loop_class_immediately() {
        let mut config = config();
        config.animation = LoopAnimation::Pulse;
        let state = state_for(&config);
        let classes = class_names(&config, &state, "glint-i0");
        assert!(classes.contains(&"motion-pulse".to_owned()));
    }

    #[test]
    fn hover_trigger_toggles_loop_class_with_pointer() {
        let mut config = config();
        config.animation = LoopAnimation::Spin;
        config.trigger = Trigger::Hover;
        let mut state = state_for(&config);

        let spin = "motion-spin".to_owned();
        assert!(!class_names(&config, &state, "glint-i0").contains(&spin));

        state.handle(IconEvent::PointerEnter, config.interactive);
        assert!(class_names(&config, &state, "glint-i0").contains(&spin));

        state.handle(IconEvent::PointerLeave, config.interactive);
        assert!(!class_names(&config, &state, "glint-i0").contains(&spin));
    }

    #[test]
    fn entrance_class_present_until_finished() {
        let mut config = config();
        config.entrance = Some(EntranceAnimation::FadeInUp);
        let mut state = state_for(&config);

        let entrance = "motion-fade-in-up".to_owned();
        assert!(class_names(&config, &state, "glint-i0").contains(&entrance));

        state.handle(IconEvent::EntranceFinished, config.interactive);
        assert!(!class_names(&config, &state, "glint-i0").contains(&entrance));
    }

    #[test]
    fn no_entrance_configured_never_renders_entrance_class() {
        let config = config();
        let state = state_for(&config);
        let classes = class_names(&config, &state, "glint-i0");
        assert!(classes.iter().all(|class| !class.starts_with("motion-fade")));
    }

    #[test]
    fn interactive_hover_appends_scale_class() {
        let mut config = config();
        config.interactive = true;
        let mut state = state_for(&config);

        state.handle(IconEvent::PointerEnter, config.interactive);
        let classes = class_names(&config, &state, "glint-i0");
        assert!(classes.contains(&INTERACTIVE_CLASS.to_owned()));
        assert!(classes.contains(&HOVER_SCALE_CLASS.to_owned()));
    }

    #[test]
    fn caller_classes_always_trail_the_list() {
        let mut config = config();
        config.extra_classes = vec!["brand-accent".to_owned(), "lg".to_owned()];
        let state = state_for(&config);
        let classes = class_names(&config, &state, "glint-i0");
        assert_eq!(classes[classes.len() - 2], "brand-accent");
        assert_eq!(classes[classes.len() - 1], "lg");
    }
}
