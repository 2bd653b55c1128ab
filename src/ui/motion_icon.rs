//! The MotionIcon widget: a named Lucide icon inside a container that
//! carries the animation classes.
//!
//! The container is a plain `gtk4::Box` wired with event controllers that
//! feed the trigger machine; every state change re-projects the class
//! list onto the widget. Per-instance timing (animation-duration,
//! animation-delay, color) rides on a dedicated CSS provider keyed by a
//! `glint-i{n}` class, installed at build and removed on unrealize.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use gtk4::glib::SourceId;
use gtk4::prelude::*;
use serde::{Deserialize, Deserializer};

use crate::animation::{self, EntranceAnimation, LoopAnimation, Trigger, Weight};
use crate::config;
use crate::icon::{self, BuiltinRegistry, IconRegistry};
use crate::state::{IconEvent, InteractionState};

use super::class_names::class_names;
use super::style::MOTION_TOKENS;

static INSTANCE_SEQUENCE: AtomicU32 = AtomicU32::new(0);

/// Recognized configuration for one icon. Serialized form uses the
/// camelCase keys of the option table (`animationDuration`, `className`,
/// `ariaLabel`); unrecognized enum values fall back to neutral defaults
/// instead of failing the parse.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionIconConfig {
    pub name: String,
    #[serde(default = "default_size")]
    pub size: i32,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub weight: Weight,
    #[serde(default)]
    pub animation: LoopAnimation,
    #[serde(default, deserialize_with = "lenient_entrance")]
    pub entrance: Option<EntranceAnimation>,
    #[serde(rename = "animationDuration", default = "default_duration")]
    pub duration_ms: u32,
    #[serde(rename = "animationDelay", default)]
    pub delay_ms: u32,
    #[serde(default)]
    pub trigger: Trigger,
    #[serde(default)]
    pub interactive: bool,
    #[serde(rename = "className", default, deserialize_with = "class_token_list")]
    pub extra_classes: Vec<String>,
    #[serde(rename = "ariaLabel", default)]
    pub label: Option<String>,
}

fn default_size() -> i32 {
    MOTION_TOKENS.icon_size
}

fn default_color() -> String {
    "currentColor".to_owned()
}

fn default_duration() -> u32 {
    MOTION_TOKENS.duration_ms
}

fn lenient_entrance<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<EntranceAnimation>, D::Error> {
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(name.as_deref().and_then(EntranceAnimation::parse))
}

fn class_token_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|tokens| tokens.split_whitespace().map(str::to_owned).collect())
        .unwrap_or_default())
}

impl MotionIconConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: default_size(),
            color: default_color(),
            weight: Weight::default(),
            animation: LoopAnimation::default(),
            entrance: None,
            duration_ms: default_duration(),
            delay_ms: MOTION_TOKENS.delay_ms,
            trigger: Trigger::default(),
            interactive: false,
            extra_classes: Vec::new(),
            label: None,
        }
    }

    /// Read a config from its JSON description.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

type IconCallback = Rc<dyn Fn(&gtk4::Box)>;

/// Fluent builder for the MotionIcon widget.
///
/// `build()` yields `None` when the icon name does not resolve; nothing
/// is rendered in that case, not even an empty container.
pub struct MotionIcon {
    config: MotionIconConfig,
    registry: Rc<dyn IconRegistry>,
    on_click: Option<IconCallback>,
    on_pointer_enter: Option<IconCallback>,
    on_pointer_leave: Option<IconCallback>,
    on_animation_end: Option<IconCallback>,
}

impl MotionIcon {
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_config(MotionIconConfig::new(name))
    }

    pub fn from_config(config: MotionIconConfig) -> Self {
        Self {
            config,
            registry: Rc::new(BuiltinRegistry),
            on_click: None,
            on_pointer_enter: None,
            on_pointer_leave: None,
            on_animation_end: None,
        }
    }

    pub fn size(mut self, size: i32) -> Self {
        self.config.size = size;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.config.color = color.into();
        self
    }

    pub fn weight(mut self, weight: Weight) -> Self {
        self.config.weight = weight;
        self
    }

    pub fn animation(mut self, animation: LoopAnimation) -> Self {
        self.config.animation = animation;
        self
    }

    pub fn entrance(mut self, entrance: EntranceAnimation) -> Self {
        self.config.entrance = Some(entrance);
        self
    }

    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.config.duration_ms = duration_ms;
        self
    }

    pub fn delay_ms(mut self, delay_ms: u32) -> Self {
        self.config.delay_ms = delay_ms;
        self
    }

    pub fn trigger(mut self, trigger: Trigger) -> Self {
        self.config.trigger = trigger;
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.config.interactive = interactive;
        self
    }

    /// Append an extra class. Caller classes always land last in the
    /// class list so they can override component styling.
    pub fn css_class(mut self, class: impl Into<String>) -> Self {
        self.config.extra_classes.push(class.into());
        self
    }

    /// Accessible label; falls back to the icon name when unset.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = Some(label.into());
        self
    }

    pub fn registry(mut self, registry: Rc<dyn IconRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Forwarded after internal handling, only on interactive icons.
    pub fn on_click(mut self, callback: impl Fn(&gtk4::Box) + 'static) -> Self {
        self.on_click = Some(Rc::new(callback));
        self
    }

    pub fn on_pointer_enter(mut self, callback: impl Fn(&gtk4::Box) + 'static) -> Self {
        self.on_pointer_enter = Some(Rc::new(callback));
        self
    }

    pub fn on_pointer_leave(mut self, callback: impl Fn(&gtk4::Box) + 'static) -> Self {
        self.on_pointer_leave = Some(Rc::new(callback));
        self
    }

    /// Invoked when the entrance animation completes.
    pub fn on_animation_end(mut self, callback: impl Fn(&gtk4::Box) + 'static) -> Self {
        self.on_animation_end = Some(Rc::new(callback));
        self
    }

    /// Build the widget, or `None` (with one warning logged) when the icon
    /// name resolves to nothing.
    pub fn build(self) -> Option<gtk4::Box> {
        let body = icon::resolve(self.registry.as_ref(), &self.config.name)?;
        Some(self.assemble(body))
    }

    /// `Result` flavor of [`build`](Self::build) for callers that treat a
    /// missing icon as a hard error.
    pub fn try_build(self) -> crate::error::Result<gtk4::Box> {
        let body = icon::resolve_strict(self.registry.as_ref(), &self.config.name)?;
        Ok(self.assemble(body))
    }

    fn assemble(self, body: &'static str) -> gtk4::Box {
        let motion_enabled = config::motion_enabled(&config::load_motion_prefs());
        animation::install_motion_css(motion_enabled);

        let config = Rc::new(self.config.clone());
        let sequence = INSTANCE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let instance_class = format!("glint-i{sequence}");

        let svg = icon::to_svg(body, config.size, config.weight.stroke_width(), &config.color);
        let gicon = gtk4::gio::BytesIcon::new(&gtk4::glib::Bytes::from_owned(svg.into_bytes()));
        let image = gtk4::Image::from_gicon(&gicon);
        image.set_pixel_size(config.size);

        let role = if config.interactive {
            gtk4::AccessibleRole::Button
        } else {
            gtk4::AccessibleRole::Img
        };
        let container = gtk4::Box::builder()
            .orientation(gtk4::Orientation::Horizontal)
            .halign(gtk4::Align::Center)
            .valign(gtk4::Align::Center)
            .accessible_role(role)
            .build();
        container.append(&image);

        let label = config.label.clone().unwrap_or_else(|| config.name.clone());
        container.update_property(&[gtk4::accessible::Property::Label(&label)]);
        container.set_focusable(config.interactive || config.trigger == Trigger::Focus);
        if config.interactive {
            container.set_cursor_from_name(Some("pointer"));
        }

        let provider = gtk4::CssProvider::new();
        provider.load_from_data(&instance_css(&instance_class, &config, motion_enabled));
        if let Some(display) = gtk4::gdk::Display::default() {
            gtk4::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            );
        }

        let state = Rc::new(RefCell::new(InteractionState::new(
            config.trigger,
            config.entrance,
        )));

        let sync: Rc<dyn Fn()> = {
            let container = container.clone();
            let config = config.clone();
            let state = state.clone();
            let instance_class = instance_class.clone();
            Rc::new(move || {
                let state = state.borrow();
                let classes = class_names(&config, &state, &instance_class);
                let class_refs: Vec<&str> = classes.iter().map(String::as_str).collect();
                container.set_css_classes(&class_refs);
            })
        };
        sync();

        self.connect_pointer(&container, &config, &state, &sync);
        self.connect_click(&container, &config, &state, &sync);
        self.connect_focus(&container, &config, &state, &sync);
        let (delay_source, done_source) = self.arm_entrance(&container, &config, &state, &sync);
        connect_teardown(&container, provider, delay_source, done_source);

        container
    }

    fn connect_pointer(
        &self,
        container: &gtk4::Box,
        config: &Rc<MotionIconConfig>,
        state: &Rc<RefCell<InteractionState>>,
        sync: &Rc<dyn Fn()>,
    ) {
        let wanted = config.interactive
            || config.trigger == Trigger::Hover
            || self.on_pointer_enter.is_some()
            || self.on_pointer_leave.is_some();
        if !wanted {
            return;
        }

        let pointer = gtk4::EventControllerMotion::new();
        {
            let config = config.clone();
            let state = state.clone();
            let sync = sync.clone();
            let container = container.clone();
            let on_enter = self.on_pointer_enter.clone();
            pointer.connect_enter(move |_, _, _| {
                state
                    .borrow_mut()
                    .handle(IconEvent::PointerEnter, config.interactive);
                sync();
                if let Some(callback) = &on_enter {
                    callback(&container);
                }
            });
        }
        {
            let config = config.clone();
            let state = state.clone();
            let sync = sync.clone();
            let container = container.clone();
            let on_leave = self.on_pointer_leave.clone();
            pointer.connect_leave(move |_| {
                state
                    .borrow_mut()
                    .handle(IconEvent::PointerLeave, config.interactive);
                sync();
                if let Some(callback) = &on_leave {
                    callback(&container);
                }
            });
        }
        container.add_controller(pointer);
    }

    fn connect_click(
        &self,
        container: &gtk4::Box,
        config: &Rc<MotionIconConfig>,
        state: &Rc<RefCell<InteractionState>>,
        sync: &Rc<dyn Fn()>,
    ) {
        if !(config.interactive || config.trigger == Trigger::Click) {
            return;
        }

        let click = gtk4::GestureClick::new();
        click.set_button(gtk4::gdk::BUTTON_PRIMARY);

        let config = config.clone();
        let state = state.clone();
        let sync = sync.clone();
        let container_weak = container.downgrade();
        let container_for_callback = container.clone();
        let on_click = self.on_click.clone();
        click.connect_released(move |_, _, _, _| {
            let applied = state
                .borrow_mut()
                .handle(IconEvent::Press, config.interactive);
            if applied.changed {
                sync();
            }
            if applied.arm_revert {
                // Fire-and-forget: a later press never cancels an armed
                // revert, it only arms another one.
                let state = state.clone();
                let sync = sync.clone();
                let weak = container_weak.clone();
                gtk4::glib::timeout_add_local_once(
                    Duration::from_millis(u64::from(config.duration_ms)),
                    move || {
                        if weak.upgrade().is_none() {
                            return;
                        }
                        let applied = state.borrow_mut().handle(IconEvent::RevertElapsed, false);
                        if applied.changed {
                            sync();
                        }
                    },
                );
            }
            if config.interactive {
                if let Some(callback) = &on_click {
                    callback(&container_for_callback);
                }
            }
        });
        container.add_controller(click);
    }

    fn connect_focus(
        &self,
        container: &gtk4::Box,
        config: &Rc<MotionIconConfig>,
        state: &Rc<RefCell<InteractionState>>,
        sync: &Rc<dyn Fn()>,
    ) {
        if config.trigger != Trigger::Focus {
            return;
        }

        let focus = gtk4::EventControllerFocus::new();
        {
            let config = config.clone();
            let state = state.clone();
            let sync = sync.clone();
            let container = container.clone();
            focus.connect_enter(move |_| {
                let visible = keyboard_focus_visible(&container);
                let applied = state
                    .borrow_mut()
                    .handle(IconEvent::FocusIn { visible }, config.interactive);
                if applied.changed {
                    sync();
                }
            });
        }
        {
            let config = config.clone();
            let state = state.clone();
            let sync = sync.clone();
            focus.connect_leave(move |_| {
                let applied = state
                    .borrow_mut()
                    .handle(IconEvent::FocusOut, config.interactive);
                if applied.changed {
                    sync();
                }
            });
        }
        container.add_controller(focus);
    }

    /// Arm the entrance timers and return their cancellation slots.
    ///
    /// The delay timer is best-effort only; completion is driven by the
    /// finish timer standing in for the animation-end signal.
    fn arm_entrance(
        &self,
        container: &gtk4::Box,
        config: &Rc<MotionIconConfig>,
        state: &Rc<RefCell<InteractionState>>,
        sync: &Rc<dyn Fn()>,
    ) -> (SourceSlot, SourceSlot) {
        let delay_source: SourceSlot = Rc::new(RefCell::new(None));
        let done_source: SourceSlot = Rc::new(RefCell::new(None));

        if config.entrance.is_none() {
            return (delay_source, done_source);
        }

        {
            let slot = delay_source.clone();
            let name = config.name.clone();
            let id = gtk4::glib::timeout_add_local_once(
                Duration::from_millis(u64::from(config.delay_ms)),
                move || {
                    let _ = slot.borrow_mut().take();
                    tracing::debug!(name = name.as_str(), "entrance delay elapsed");
                },
            );
            *delay_source.borrow_mut() = Some(id);
        }
        {
            let slot = done_source.clone();
            let config = config.clone();
            let state = state.clone();
            let sync = sync.clone();
            let weak = container.downgrade();
            let on_end = self.on_animation_end.clone();
            let finish_ms = u64::from(config.delay_ms) + u64::from(config.duration_ms);
            let id = gtk4::glib::timeout_add_local_once(
                Duration::from_millis(finish_ms),
                move || {
                    let _ = slot.borrow_mut().take();
                    let Some(container) = weak.upgrade() else {
                        return;
                    };
                    state
                        .borrow_mut()
                        .handle(IconEvent::EntranceFinished, config.interactive);
                    sync();
                    if let Some(callback) = &on_end {
                        callback(&container);
                    }
                },
            );
            *done_source.borrow_mut() = Some(id);
        }

        (delay_source, done_source)
    }
}

type SourceSlot = Rc<RefCell<Option<SourceId>>>;

/// Cancel pending timers and drop the per-instance provider when the
/// widget leaves the scene. Each timer callback empties its own slot
/// before running, so teardown never removes a fired source.
fn connect_teardown(
    container: &gtk4::Box,
    provider: gtk4::CssProvider,
    delay_source: SourceSlot,
    done_source: SourceSlot,
) {
    container.connect_unrealize(move |_| {
        if let Some(id) = delay_source.borrow_mut().take() {
            id.remove();
        }
        if let Some(id) = done_source.borrow_mut().take() {
            id.remove();
        }
        if let Some(display) = gtk4::gdk::Display::default() {
            gtk4::style_context_remove_provider_for_display(&display, &provider);
        }
        tracing::trace!("motion icon unrealized; pending timers cancelled");
    });
}

/// Keyboard focus shows a focus ring; pointer focus does not. GTK tracks
/// this per window, not per widget.
fn keyboard_focus_visible(widget: &impl IsA<gtk4::Widget>) -> bool {
    widget
        .root()
        .and_then(|root| root.downcast::<gtk4::Window>().ok())
        .map(|window| window.gets_focus_visible())
        .unwrap_or(false)
}

/// Per-instance timing and color rules. Scoped to `.glint-icon.glint-i{n}`
/// so they outrank the base sheet; durations collapse to 0ms when motion
/// is disabled, matching the base sheet.
fn instance_css(instance_class: &str, config: &MotionIconConfig, motion_enabled: bool) -> String {
    let duration_ms = if motion_enabled { config.duration_ms } else { 0 };
    let delay_ms = if motion_enabled { config.delay_ms } else { 0 };
    let color_rule = if config.color == "currentColor" {
        String::new()
    } else {
        format!("  color: {};\n", config.color)
    };
    format!(
        ".glint-icon.{instance_class} {{\n  animation-duration: {duration_ms}ms;\n  animation-delay: {delay_ms}ms;\n{color_rule}}}\n"
    )
}
