/// Compile-time motion tokens, not user-overridable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleTokens {
    pub icon_size: i32,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub hover_scale: f32,
    pub hover_transition_ms: u32,
}

pub const MOTION_TOKENS: StyleTokens = StyleTokens {
    icon_size: 24,
    duration_ms: 1_000,
    delay_ms: 0,
    hover_scale: 1.1,
    hover_transition_ms: 200,
};
