use thiserror::Error;

use super::registry::IconRegistry;

pub type IconResult<T> = std::result::Result<T, IconError>;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("icon \"{name}\" not found in registry")]
    NotFound { name: String },
}

/// Resolve a name against a registry by trying, in order: the exact name,
/// the name with `Icon` appended, and the name with a trailing `Icon`
/// stripped. Mirrors the aliasing convention of the Lucide exports, where
/// `Heart` and `HeartIcon` are the same glyph.
///
/// Emits one diagnostic and returns `None` when nothing matches. This is
/// the component's only failure path and it never panics.
pub fn resolve(registry: &dyn IconRegistry, name: &str) -> Option<&'static str> {
    for candidate in candidates(name) {
        if let Some(body) = registry.lookup(&candidate) {
            return Some(body);
        }
    }
    tracing::warn!(name, "icon not found in registry");
    None
}

/// `Result` flavor of [`resolve`] for callers that want a hard failure,
/// e.g. validating a data-driven icon set up front.
pub fn resolve_strict(registry: &dyn IconRegistry, name: &str) -> IconResult<&'static str> {
    resolve(registry, name).ok_or_else(|| IconError::NotFound {
        name: name.to_owned(),
    })
}

fn candidates(name: &str) -> impl Iterator<Item = String> + '_ {
    [
        name.to_owned(),
        format!("{name}Icon"),
        name.strip_suffix("Icon").unwrap_or(name).to_owned(),
    ]
    .into_iter()
}
