use std::sync::Once;

use gtk4::CssProvider;

use crate::ui::style::{StyleTokens, MOTION_TOKENS};

/// Render the motion stylesheet: base layout class, hover affordance, and
/// the keyframes behind every loop and entrance class.
///
/// When motion is disabled every animation duration collapses to 0ms so the
/// classes stay inert without changing any call site.
pub fn motion_css(tokens: StyleTokens, motion_enabled: bool) -> String {
    let loop_ms = if motion_enabled { tokens.duration_ms } else { 0 };
    let hover_ms = if motion_enabled {
        tokens.hover_transition_ms
    } else {
        0
    };
    format!(
        "
.glint-icon {{
  padding: 0;
  background: transparent;
}}
.glint-interactive {{
  transition: transform {hover_ms}ms cubic-bezier(0.4, 0, 0.2, 1);
}}
.glint-hover-scale {{
  transform: scale({hover_scale});
}}
/* loop animations */
.motion-pulse {{
  animation: motion-pulse {loop_ms}ms cubic-bezier(0.4, 0, 0.6, 1) infinite;
}}
.motion-spin {{
  animation: motion-spin {loop_ms}ms linear infinite;
}}
.motion-bounce {{
  animation: motion-bounce {loop_ms}ms ease-in-out infinite;
}}
.motion-ping {{
  animation: motion-ping {loop_ms}ms cubic-bezier(0, 0, 0.2, 1) infinite;
}}
.motion-wiggle {{
  animation: motion-wiggle {loop_ms}ms ease-in-out infinite;
}}
.motion-flip {{
  animation: motion-flip {loop_ms}ms ease-in-out infinite;
}}
.motion-heartbeat {{
  animation: motion-heartbeat {loop_ms}ms ease-in-out infinite;
}}
.motion-shake {{
  animation: motion-shake {loop_ms}ms ease-in-out infinite;
}}
.motion-swing {{
  animation: motion-swing {loop_ms}ms ease-in-out infinite;
}}
.motion-tada {{
  animation: motion-tada {loop_ms}ms ease-in-out infinite;
}}
.motion-rubber {{
  animation: motion-rubber {loop_ms}ms ease-in-out infinite;
}}
@keyframes motion-pulse {{
  0% {{ opacity: 1; }}
  50% {{ opacity: 0.5; }}
  100% {{ opacity: 1; }}
}}
@keyframes motion-spin {{
  from {{ transform: rotate(0deg); }}
  to {{ transform: rotate(360deg); }}
}}
@keyframes motion-bounce {{
  0% {{ transform: translateY(0); }}
  50% {{ transform: translateY(-25%); }}
  100% {{ transform: translateY(0); }}
}}
@keyframes motion-ping {{
  0% {{ transform: scale(1); opacity: 1; }}
  75% {{ transform: scale(1.8); opacity: 0; }}
  100% {{ transform: scale(1.8); opacity: 0; }}
}}
@keyframes motion-wiggle {{
  0% {{ transform: rotate(-3deg); }}
  50% {{ transform: rotate(3deg); }}
  100% {{ transform: rotate(-3deg); }}
}}
@keyframes motion-flip {{
  0% {{ transform: scaleX(1); }}
  50% {{ transform: scaleX(-1); }}
  100% {{ transform: scaleX(1); }}
}}
@keyframes motion-heartbeat {{
  0% {{ transform: scale(1); }}
  14% {{ transform: scale(1.3); }}
  28% {{ transform: scale(1); }}
  42% {{ transform: scale(1.3); }}
  70% {{ transform: scale(1); }}
  100% {{ transform: scale(1); }}
}}
@keyframes motion-shake {{
  0% {{ transform: translateX(0); }}
  25% {{ transform: translateX(-4px); }}
  50% {{ transform: translateX(4px); }}
  75% {{ transform: translateX(-4px); }}
  100% {{ transform: translateX(0); }}
}}
@keyframes motion-swing {{
  0% {{ transform: rotate(0deg); }}
  20% {{ transform: rotate(15deg); }}
  40% {{ transform: rotate(-10deg); }}
  60% {{ transform: rotate(5deg); }}
  80% {{ transform: rotate(-5deg); }}
  100% {{ transform: rotate(0deg); }}
}}
@keyframes motion-tada {{
  0% {{ transform: scale(1) rotate(0deg); }}
  10% {{ transform: scale(0.9) rotate(-3deg); }}
  30% {{ transform: scale(1.1) rotate(3deg); }}
  50% {{ transform: scale(1.1) rotate(-3deg); }}
  70% {{ transform: scale(1.1) rotate(3deg); }}
  90% {{ transform: scale(1.1) rotate(-3deg); }}
  100% {{ transform: scale(1) rotate(0deg); }}
}}
@keyframes motion-rubber {{
  0% {{ transform: scale(1, 1); }}
  30% {{ transform: scale(1.25, 0.75); }}
  40% {{ transform: scale(0.75, 1.25); }}
  50% {{ transform: scale(1.15, 0.85); }}
  65% {{ transform: scale(0.95, 1.05); }}
  75% {{ transform: scale(1.05, 0.95); }}
  100% {{ transform: scale(1, 1); }}
}}
/* entrance animations, one-shot */
.motion-fade-in {{
  animation: motion-fade-in {loop_ms}ms ease-out;
}}
.motion-fade-in-up {{
  animation: motion-fade-in-up {loop_ms}ms ease-out;
}}
.motion-fade-in-down {{
  animation: motion-fade-in-down {loop_ms}ms ease-out;
}}
.motion-fade-in-left {{
  animation: motion-fade-in-left {loop_ms}ms ease-out;
}}
.motion-fade-in-right {{
  animation: motion-fade-in-right {loop_ms}ms ease-out;
}}
.motion-scale-in {{
  animation: motion-scale-in {loop_ms}ms ease-out;
}}
.motion-slide-in-up {{
  animation: motion-slide-in-up {loop_ms}ms ease-out;
}}
.motion-slide-in-down {{
  animation: motion-slide-in-down {loop_ms}ms ease-out;
}}
.motion-rotate-in {{
  animation: motion-rotate-in {loop_ms}ms ease-out;
}}
.motion-zoom-in {{
  animation: motion-zoom-in {loop_ms}ms ease-out;
}}
@keyframes motion-fade-in {{
  from {{ opacity: 0; }}
  to {{ opacity: 1; }}
}}
@keyframes motion-fade-in-up {{
  from {{ opacity: 0; transform: translateY(10px); }}
  to {{ opacity: 1; transform: translateY(0); }}
}}
@keyframes motion-fade-in-down {{
  from {{ opacity: 0; transform: translateY(-10px); }}
  to {{ opacity: 1; transform: translateY(0); }}
}}
@keyframes motion-fade-in-left {{
  from {{ opacity: 0; transform: translateX(-10px); }}
  to {{ opacity: 1; transform: translateX(0); }}
}}
@keyframes motion-fade-in-right {{
  from {{ opacity: 0; transform: translateX(10px); }}
  to {{ opacity: 1; transform: translateX(0); }}
}}
@keyframes motion-scale-in {{
  from {{ opacity: 0; transform: scale(0.8); }}
  to {{ opacity: 1; transform: scale(1); }}
}}
@keyframes motion-slide-in-up {{
  from {{ transform: translateY(100%); }}
  to {{ transform: translateY(0); }}
}}
@keyframes motion-slide-in-down {{
  from {{ transform: translateY(-100%); }}
  to {{ transform: translateY(0); }}
}}
@keyframes motion-rotate-in {{
  from {{ opacity: 0; transform: rotate(-180deg) scale(0.8); }}
  to {{ opacity: 1; transform: rotate(0deg) scale(1); }}
}}
@keyframes motion-zoom-in {{
  from {{ opacity: 0; transform: scale(0.5); }}
  to {{ opacity: 1; transform: scale(1); }}
}}
",
        hover_ms = hover_ms,
        hover_scale = tokens.hover_scale,
        loop_ms = loop_ms,
    )
}

/// Install the motion stylesheet on the default display, once per process.
pub fn install_motion_css(motion_enabled: bool) {
    static MOTION_CSS_SETUP: Once = Once::new();

    MOTION_CSS_SETUP.call_once(|| {
        let Some(display) = gtk4::gdk::Display::default() else {
            tracing::warn!("failed to install motion stylesheet; no display available");
            return;
        };

        let provider = CssProvider::new();
        provider.load_from_data(&motion_css(MOTION_TOKENS, motion_enabled));
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
        tracing::debug!(motion_enabled, "installed motion stylesheet");
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::types::{EntranceAnimation, LoopAnimation};

    #[test]
    fn stylesheet_covers_every_loop_and_entrance_class() {
        let css = motion_css(MOTION_TOKENS, true);
        for animation in LoopAnimation::ALL {
            let class = animation.css_class();
            assert!(css.contains(&format!(".{class} {{")), "missing rule for {class}");
            assert!(
                css.contains(&format!("@keyframes {class} {{")),
                "missing keyframes for {class}"
            );
        }
        for entrance in EntranceAnimation::ALL {
            let class = entrance.css_class();
            assert!(css.contains(&format!(".{class} {{")), "missing rule for {class}");
            assert!(
                css.contains(&format!("@keyframes {class} {{")),
                "missing keyframes for {class}"
            );
        }
    }

    #[test]
    fn disabled_motion_zeroes_every_duration() {
        let css = motion_css(MOTION_TOKENS, false);
        assert!(!css.contains(&format!("{}ms", MOTION_TOKENS.duration_ms)));
        assert!(css.contains(" 0ms"));
    }

    #[test]
    fn enabled_motion_uses_token_durations() {
        let css = motion_css(MOTION_TOKENS, true);
        assert!(css.contains(&format!("{}ms", MOTION_TOKENS.duration_ms)));
        assert!(css.contains(&format!("{}ms", MOTION_TOKENS.hover_transition_ms)));
    }
}
