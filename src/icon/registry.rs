//! Bundled Lucide icon source.
//!
//! Icons are stored as the inner markup of their 24x24 Lucide SVG, keyed by
//! the PascalCase export name. The table is sorted so lookup is a binary
//! search; custom sources implement [`IconRegistry`].

/// Name to icon-body source. Implementations decide the key convention;
/// the bundled table uses PascalCase Lucide names without the `Icon`
/// suffix.
pub trait IconRegistry {
    fn lookup(&self, name: &str) -> Option<&'static str>;
}

/// The curated Lucide subset shipped with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRegistry;

impl IconRegistry for BuiltinRegistry {
    fn lookup(&self, name: &str) -> Option<&'static str> {
        LUCIDE_TABLE
            .binary_search_by(|(key, _)| (*key).cmp(name))
            .ok()
            .map(|index| LUCIDE_TABLE[index].1)
    }
}

/// Assemble a complete SVG document from icon body markup.
///
/// Lucide icons are stroke drawings on a 24x24 grid; `stroke_width` is in
/// grid units (see `Weight::stroke_width`).
pub fn to_svg(body: &str, size: i32, stroke_width: f64, color: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="{color}" stroke-width="{stroke_width}" stroke-linecap="round" stroke-linejoin="round">{body}</svg>"#
    )
}

// Sorted by key. Body markup is taken verbatim from the Lucide sources.
#[rustfmt::skip]
static LUCIDE_TABLE: &[(&str, &str)] = &[
    ("ArrowDown", r#"<path d="M12 5v14"/><path d="m19 12-7 7-7-7"/>"#),
    ("ArrowLeft", r#"<path d="m12 19-7-7 7-7"/><path d="M19 12H5"/>"#),
    ("ArrowRight", r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#),
    ("ArrowUp", r#"<path d="m5 12 7-7 7 7"/><path d="M12 19V5"/>"#),
    ("Bell", r#"<path d="M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9"/><path d="M10.3 21a1.94 1.94 0 0 0 3.4 0"/>"#),
    ("Camera", r#"<path d="M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z"/><circle cx="12" cy="13" r="3"/>"#),
    ("Check", r#"<path d="M20 6 9 17l-5-5"/>"#),
    ("ChevronDown", r#"<path d="m6 9 6 6 6-6"/>"#),
    ("ChevronLeft", r#"<path d="m15 18-6-6 6-6"/>"#),
    ("ChevronRight", r#"<path d="m9 18 6-6-6-6"/>"#),
    ("ChevronUp", r#"<path d="m18 15-6-6-6 6"/>"#),
    ("Circle", r#"<circle cx="12" cy="12" r="10"/>"#),
    ("Copy", r#"<rect width="14" height="14" x="8" y="8" rx="2" ry="2"/><path d="M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2"/>"#),
    ("Download", r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="7 10 12 15 17 10"/><line x1="12" x2="12" y1="15" y2="3"/>"#),
    ("Heart", r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>"#),
    ("House", r#"<path d="M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8"/><path d="M3 10a2 2 0 0 1 .709-1.528l7-5.999a2 2 0 0 1 2.582 0l7 5.999A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/>"#),
    ("Info", r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#),
    ("Loader", r#"<path d="M12 2v4"/><path d="m16.2 7.8 2.9-2.9"/><path d="M18 12h4"/><path d="m16.2 16.2 2.9 2.9"/><path d="M12 18v4"/><path d="m4.9 19.1 2.9-2.9"/><path d="M2 12h4"/><path d="m4.9 4.9 2.9 2.9"/>"#),
    ("LoaderCircle", r#"<path d="M21 12a9 9 0 1 1-6.219-8.56"/>"#),
    ("Mail", r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#),
    ("Minus", r#"<path d="M5 12h14"/>"#),
    ("Moon", r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#),
    ("Pause", r#"<rect x="14" y="4" width="4" height="16" rx="1"/><rect x="6" y="4" width="4" height="16" rx="1"/>"#),
    ("Play", r#"<polygon points="6 3 20 12 6 21 6 3"/>"#),
    ("Plus", r#"<path d="M5 12h14"/><path d="M12 5v14"/>"#),
    ("RefreshCw", r#"<path d="M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8"/><path d="M21 3v5h-5"/><path d="M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16"/><path d="M8 16H3v5"/>"#),
    ("Search", r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#),
    ("Settings", r#"<path d="M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z"/><circle cx="12" cy="12" r="3"/>"#),
    ("Star", r#"<path d="M11.525 2.295a.53.53 0 0 1 .95 0l2.31 4.679a2.123 2.123 0 0 0 1.595 1.16l5.166.756a.53.53 0 0 1 .294.904l-3.736 3.638a2.123 2.123 0 0 0-.611 1.878l.882 5.14a.53.53 0 0 1-.771.56l-4.618-2.428a2.122 2.122 0 0 0-1.973 0L6.396 21.01a.53.53 0 0 1-.77-.56l.881-5.139a2.122 2.122 0 0 0-.611-1.879L2.16 9.795a.53.53 0 0 1 .294-.906l5.165-.755a2.122 2.122 0 0 0 1.597-1.16z"/>"#),
    ("Sun", r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#),
    ("Trash2", r#"<path d="M3 6h18"/><path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6"/><path d="M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"/><line x1="10" x2="10" y1="11" y2="17"/><line x1="14" x2="14" y1="11" y2="17"/>"#),
    ("TriangleAlert", r#"<path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 20h16a2 2 0 0 0 1.73-2Z"/><path d="M12 9v4"/><path d="M12 17h.01"/>"#),
    ("Upload", r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="17 8 12 3 7 8"/><line x1="12" x2="12" y1="3" y2="15"/>"#),
    ("User", r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#),
    ("X", r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#),
    ("Zap", r#"<path d="M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z"/>"#),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_for_binary_search() {
        let mut previous = "";
        for (key, _) in LUCIDE_TABLE {
            assert!(previous < *key, "{key} out of order after {previous}");
            previous = *key;
        }
    }

    #[test]
    fn builtin_registry_finds_known_icons() {
        let registry = BuiltinRegistry;
        assert!(registry.lookup("Heart").is_some());
        assert!(registry.lookup("ChevronRight").is_some());
        assert!(registry.lookup("Zap").is_some());
        assert!(registry.lookup("NotAnIcon").is_none());
    }

    #[test]
    fn to_svg_carries_size_stroke_and_color() {
        let registry = BuiltinRegistry;
        let body = registry.lookup("Check").expect("Check is bundled");
        let svg = to_svg(body, 32, 2.5, "#ff0066");
        assert!(svg.contains(r#"viewBox="0 0 24 24""#));
        assert!(svg.contains(r#"width="32""#));
        assert!(svg.contains(r#"stroke-width="2.5""#));
        assert!(svg.contains(r##"stroke="#ff0066""##));
        assert!(svg.contains("M20 6 9 17l-5-5"));
    }
}
