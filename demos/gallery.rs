//! Gallery of MotionIcon configurations across triggers and styles.
//!
//! Run with `cargo run --example gallery`.

use glint::{EntranceAnimation, LoopAnimation, MotionIcon, MotionIconConfig, Trigger, Weight};
use gtk4::prelude::*;

fn main() -> anyhow::Result<()> {
    glint::logging::init();

    // Fail fast if a gallery icon is missing from the bundled set.
    for name in ["Heart", "LoaderCircle", "Bell", "Circle", "User"] {
        glint::icon::resolve_strict(&glint::BuiltinRegistry, name)?;
    }

    let app = gtk4::Application::builder()
        .application_id("com.github.bityoungjae.glint.Gallery")
        .build();
    app.connect_activate(build_gallery);
    let _ = app.run();
    Ok(())
}

fn build_gallery(app: &gtk4::Application) {
    let rows = gtk4::Box::new(gtk4::Orientation::Vertical, 16);
    rows.set_margin_top(24);
    rows.set_margin_bottom(24);
    rows.set_margin_start(24);
    rows.set_margin_end(24);

    rows.append(&sample_row(
        "always",
        [
            MotionIcon::new("Heart").animation(LoopAnimation::Heartbeat),
            MotionIcon::new("LoaderCircle").animation(LoopAnimation::Spin),
            MotionIcon::new("Bell").animation(LoopAnimation::Wiggle),
            MotionIcon::new("Circle").animation(LoopAnimation::Ping),
        ],
    ));
    rows.append(&sample_row(
        "hover",
        [
            MotionIcon::new("Star")
                .animation(LoopAnimation::Tada)
                .trigger(Trigger::Hover)
                .interactive(true),
            MotionIcon::new("Sun")
                .animation(LoopAnimation::Spin)
                .trigger(Trigger::Hover)
                .interactive(true),
            MotionIcon::new("Mail")
                .animation(LoopAnimation::Swing)
                .trigger(Trigger::Hover)
                .interactive(true),
            MotionIcon::new("Zap")
                .animation(LoopAnimation::Shake)
                .weight(Weight::Bold)
                .trigger(Trigger::Hover)
                .interactive(true),
        ],
    ));
    rows.append(&sample_row(
        "click",
        [
            MotionIcon::new("Download")
                .animation(LoopAnimation::Bounce)
                .trigger(Trigger::Click)
                .interactive(true)
                .on_click(|_| tracing::info!("download clicked")),
            MotionIcon::new("RefreshCw")
                .animation(LoopAnimation::Spin)
                .trigger(Trigger::Click)
                .interactive(true),
            MotionIcon::new("Trash2")
                .animation(LoopAnimation::Shake)
                .color("#d0342c")
                .trigger(Trigger::Click)
                .interactive(true),
            MotionIcon::new("Camera")
                .animation(LoopAnimation::Rubber)
                .trigger(Trigger::Click)
                .interactive(true),
        ],
    ));
    rows.append(&sample_row(
        "focus + entrance",
        [
            MotionIcon::new("Search")
                .animation(LoopAnimation::Pulse)
                .trigger(Trigger::Focus),
            MotionIcon::new("Settings")
                .animation(LoopAnimation::Spin)
                .trigger(Trigger::Focus),
            MotionIcon::new("Check")
                .entrance(EntranceAnimation::ScaleIn)
                .color("#2da44e")
                .weight(Weight::Bold)
                .on_animation_end(|_| tracing::info!("entrance finished")),
            MotionIcon::new("TriangleAlert")
                .entrance(EntranceAnimation::FadeInDown)
                .color("#bf8700"),
        ],
    ));

    // Icons can come from data as well.
    let from_data = MotionIconConfig::from_json(
        r#"{
            "name": "User",
            "animation": "pulse",
            "trigger": "hover",
            "interactive": true,
            "ariaLabel": "Account"
        }"#,
    )
    .expect("gallery config should parse");
    rows.append(&sample_row("from json", [MotionIcon::from_config(from_data)]));

    let window = gtk4::ApplicationWindow::builder()
        .application(app)
        .title("glint gallery")
        .default_width(520)
        .default_height(420)
        .child(&rows)
        .build();
    window.present();
}

fn sample_row<const N: usize>(caption: &str, icons: [MotionIcon; N]) -> gtk4::Box {
    let row = gtk4::Box::new(gtk4::Orientation::Horizontal, 20);
    let label = gtk4::Label::new(Some(caption));
    label.set_width_chars(16);
    label.set_xalign(0.0);
    row.append(&label);
    for icon in icons {
        if let Some(widget) = icon.size(28).build() {
            row.append(&widget);
        }
    }
    row
}
