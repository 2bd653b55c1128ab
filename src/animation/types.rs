use serde::{Deserialize, Deserializer};

/// Looping animation styles. `None` renders no loop class at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopAnimation {
    Pulse,
    Spin,
    Bounce,
    Ping,
    Wiggle,
    Flip,
    Heartbeat,
    Shake,
    Swing,
    Tada,
    Rubber,
    #[default]
    None,
}

impl LoopAnimation {
    /// Parse the serialized camelCase name; anything unrecognized is `None`.
    pub fn parse(name: &str) -> Self {
        match name {
            "pulse" => LoopAnimation::Pulse,
            "spin" => LoopAnimation::Spin,
            "bounce" => LoopAnimation::Bounce,
            "ping" => LoopAnimation::Ping,
            "wiggle" => LoopAnimation::Wiggle,
            "flip" => LoopAnimation::Flip,
            "heartbeat" => LoopAnimation::Heartbeat,
            "shake" => LoopAnimation::Shake,
            "swing" => LoopAnimation::Swing,
            "tada" => LoopAnimation::Tada,
            "rubber" => LoopAnimation::Rubber,
            _ => LoopAnimation::None,
        }
    }

    /// CSS class carrying the keyframes for this style; empty for `None`.
    pub fn css_class(self) -> &'static str {
        match self {
            LoopAnimation::Pulse => "motion-pulse",
            LoopAnimation::Spin => "motion-spin",
            LoopAnimation::Bounce => "motion-bounce",
            LoopAnimation::Ping => "motion-ping",
            LoopAnimation::Wiggle => "motion-wiggle",
            LoopAnimation::Flip => "motion-flip",
            LoopAnimation::Heartbeat => "motion-heartbeat",
            LoopAnimation::Shake => "motion-shake",
            LoopAnimation::Swing => "motion-swing",
            LoopAnimation::Tada => "motion-tada",
            LoopAnimation::Rubber => "motion-rubber",
            LoopAnimation::None => "",
        }
    }

    pub const ALL: [LoopAnimation; 11] = [
        LoopAnimation::Pulse,
        LoopAnimation::Spin,
        LoopAnimation::Bounce,
        LoopAnimation::Ping,
        LoopAnimation::Wiggle,
        LoopAnimation::Flip,
        LoopAnimation::Heartbeat,
        LoopAnimation::Shake,
        LoopAnimation::Swing,
        LoopAnimation::Tada,
        LoopAnimation::Rubber,
    ];
}

impl<'de> Deserialize<'de> for LoopAnimation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(LoopAnimation::parse(&name))
    }
}

/// One-shot entrance animation styles, applied once per build until the
/// completion signal arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntranceAnimation {
    FadeIn,
    FadeInUp,
    FadeInDown,
    FadeInLeft,
    FadeInRight,
    ScaleIn,
    SlideInUp,
    SlideInDown,
    RotateIn,
    ZoomIn,
}

impl EntranceAnimation {
    /// Parse the serialized camelCase name; unrecognized names mean "no
    /// entrance" rather than an error.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "fadeIn" => Some(EntranceAnimation::FadeIn),
            "fadeInUp" => Some(EntranceAnimation::FadeInUp),
            "fadeInDown" => Some(EntranceAnimation::FadeInDown),
            "fadeInLeft" => Some(EntranceAnimation::FadeInLeft),
            "fadeInRight" => Some(EntranceAnimation::FadeInRight),
            "scaleIn" => Some(EntranceAnimation::ScaleIn),
            "slideInUp" => Some(EntranceAnimation::SlideInUp),
            "slideInDown" => Some(EntranceAnimation::SlideInDown),
            "rotateIn" => Some(EntranceAnimation::RotateIn),
            "zoomIn" => Some(EntranceAnimation::ZoomIn),
            _ => None,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            EntranceAnimation::FadeIn => "motion-fade-in",
            EntranceAnimation::FadeInUp => "motion-fade-in-up",
            EntranceAnimation::FadeInDown => "motion-fade-in-down",
            EntranceAnimation::FadeInLeft => "motion-fade-in-left",
            EntranceAnimation::FadeInRight => "motion-fade-in-right",
            EntranceAnimation::ScaleIn => "motion-scale-in",
            EntranceAnimation::SlideInUp => "motion-slide-in-up",
            EntranceAnimation::SlideInDown => "motion-slide-in-down",
            EntranceAnimation::RotateIn => "motion-rotate-in",
            EntranceAnimation::ZoomIn => "motion-zoom-in",
        }
    }

    pub const ALL: [EntranceAnimation; 10] = [
        EntranceAnimation::FadeIn,
        EntranceAnimation::FadeInUp,
        EntranceAnimation::FadeInDown,
        EntranceAnimation::FadeInLeft,
        EntranceAnimation::FadeInRight,
        EntranceAnimation::ScaleIn,
        EntranceAnimation::SlideInUp,
        EntranceAnimation::SlideInDown,
        EntranceAnimation::RotateIn,
        EntranceAnimation::ZoomIn,
    ];
}

/// Input condition governing when the loop animation is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trigger {
    #[default]
    Always,
    Hover,
    Click,
    Focus,
}

impl Trigger {
    /// Parse the serialized name; anything unrecognized is `Always`.
    pub fn parse(name: &str) -> Self {
        match name {
            "hover" => Trigger::Hover,
            "click" => Trigger::Click,
            "focus" => Trigger::Focus,
            _ => Trigger::Always,
        }
    }
}

impl<'de> Deserialize<'de> for Trigger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Trigger::parse(&name))
    }
}

/// Visual stroke thickness category for the icon glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weight {
    Light,
    #[default]
    Regular,
    Bold,
}

impl Weight {
    /// Parse the serialized name; anything unrecognized is `Regular`.
    pub fn parse(name: &str) -> Self {
        match name {
            "light" => Weight::Light,
            "bold" => Weight::Bold,
            _ => Weight::Regular,
        }
    }

    /// Stroke width in SVG user units on the 24x24 Lucide grid.
    pub fn stroke_width(self) -> f64 {
        match self {
            Weight::Light => 1.5,
            Weight::Regular => 2.0,
            Weight::Bold => 2.5,
        }
    }
}

impl<'de> Deserialize<'de> for Weight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Weight::parse(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_maps_to_expected_stroke_widths() {
        assert_eq!(Weight::Light.stroke_width(), 1.5);
        assert_eq!(Weight::Regular.stroke_width(), 2.0);
        assert_eq!(Weight::Bold.stroke_width(), 2.5);
    }

    #[test]
    fn unrecognized_weight_falls_back_to_regular() {
        let weight: Weight = serde_json::from_str("\"extrabold\"").expect("fallback should parse");
        assert_eq!(weight, Weight::Regular);
        assert_eq!(weight.stroke_width(), 2.0);
    }

    #[test]
    fn loop_animation_classes_are_unique_and_prefixed() {
        let mut seen = std::collections::HashSet::new();
        for animation in LoopAnimation::ALL {
            let class = animation.css_class();
            assert!(class.starts_with("motion-"), "unexpected class {class}");
            assert!(seen.insert(class), "duplicate class {class}");
        }
        assert_eq!(LoopAnimation::None.css_class(), "");
    }

    #[test]
    fn entrance_animation_classes_are_unique_and_prefixed() {
        let mut seen = std::collections::HashSet::new();
        for entrance in EntranceAnimation::ALL {
            let class = entrance.css_class();
            assert!(class.starts_with("motion-"), "unexpected class {class}");
            assert!(seen.insert(class), "duplicate class {class}");
        }
    }

    #[test]
    fn camel_case_names_deserialize_to_variants() {
        let animation: LoopAnimation =
            serde_json::from_str("\"heartbeat\"").expect("heartbeat should parse");
        assert_eq!(animation, LoopAnimation::Heartbeat);

        let trigger: Trigger = serde_json::from_str("\"hover\"").expect("hover should parse");
        assert_eq!(trigger, Trigger::Hover);

        assert_eq!(
            EntranceAnimation::parse("fadeInUp"),
            Some(EntranceAnimation::FadeInUp)
        );
    }

    #[test]
    fn unrecognized_loop_animation_falls_back_to_none() {
        let animation: LoopAnimation =
            serde_json::from_str("\"sparkle\"").expect("fallback should parse");
        assert_eq!(animation, LoopAnimation::None);
        assert_eq!(EntranceAnimation::parse("sparkleIn"), None);
        assert_eq!(Trigger::parse("sometimes"), Trigger::Always);
    }
}
