//! Theme store.
//!
//! A theme is a [`StyleMap`] with a few conventional keys:
//!
//! ```text
//! backgroundColor, color, primary, ...   scalar leaves (base layer)
//! components.<type>                      per component type
//! variants.<name>                        per variant
//! variants.<name>.components.<type>      per variant and component type
//! hovered / active                       interaction overlays
//! ```
//!
//! Anything else is an extension key and is carried along untouched.

use crate::color::Color;
use crate::value::{StyleMap, StyleValue};
use std::sync::Arc;
use tracing::debug;

/// Key of the per-component-type overrides.
pub const COMPONENTS: &str = "components";
/// Key of the named variants.
pub const VARIANTS: &str = "variants";
/// Key of the hover overlay.
pub const HOVERED: &str = "hovered";
/// Key of the pressed overlay.
pub const ACTIVE: &str = "active";
/// Variant name reserved for "no particular variant". The default theme
/// does not register it.
pub const DEFAULT_VARIANT: &str = "default";

/// Default primary accent.
pub const DEFAULT_PRIMARY: Color = Color::rgb(0.0, 123.0 / 255.0, 1.0);
/// Default secondary accent.
pub const DEFAULT_SECONDARY: Color = Color::rgb(1.0, 123.0 / 255.0, 0.0);
/// Default border accent.
pub const DEFAULT_BORDER_PRIMARY: Color = Color::rgb(0.0, 86.0 / 255.0, 179.0 / 255.0);
/// Default corner radius.
pub const DEFAULT_BORDER_RADIUS: f32 = 5.0;

/// Looks up `components.<key>` on any layer.
#[must_use]
pub fn component_layer<'a>(layer: &'a StyleMap, key: &str) -> Option<&'a StyleMap> {
    layer.map(COMPONENTS)?.map(key)
}

/// Looks up `variants.<name>` on any layer.
#[must_use]
pub fn variant_layer<'a>(layer: &'a StyleMap, name: &str) -> Option<&'a StyleMap> {
    layer.map(VARIANTS)?.map(name)
}

/// The theme visible to a subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    style: StyleMap,
}

impl Theme {
    /// Wraps an arbitrary style map as a theme. No validation.
    #[must_use]
    pub fn from_style(style: StyleMap) -> Self {
        Self { style }
    }

    /// The whole theme as a style map (the resolver's base layer).
    #[must_use]
    pub fn style(&self) -> &StyleMap {
        &self.style
    }

    /// Unwraps the style map.
    #[must_use]
    pub fn into_style(self) -> StyleMap {
        self.style
    }

    /// Overrides registered for a component type.
    #[must_use]
    pub fn component(&self, key: &str) -> Option<&StyleMap> {
        component_layer(&self.style, key)
    }

    /// A registered variant.
    #[must_use]
    pub fn variant(&self, name: &str) -> Option<&StyleMap> {
        variant_layer(&self.style, name)
    }

    /// Overrides for a component type inside a variant.
    #[must_use]
    pub fn variant_component(&self, name: &str, key: &str) -> Option<&StyleMap> {
        component_layer(self.variant(name)?, key)
    }

    /// Shallow merge: every top-level key of `partial` replaces ours.
    ///
    /// Nested maps such as `components` are replaced wholesale, not merged.
    #[must_use]
    pub fn merged_with(&self, partial: &StyleMap) -> Self {
        let mut style = self.style.clone();
        style.overlay(partial);
        Self { style }
    }
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

impl AsRef<StyleMap> for Theme {
    fn as_ref(&self) -> &StyleMap {
        &self.style
    }
}

/// Builds the built-in theme.
///
/// The interaction overlays reference the accent colors, so they are
/// computed first and the finished theme is assembled in one step.
#[must_use]
pub fn default_theme() -> Theme {
    let primary = DEFAULT_PRIMARY;
    let border_primary = DEFAULT_BORDER_PRIMARY;

    let hovered = StyleMap::new()
        .with("backgroundColor", primary)
        .with("borderSize", 1)
        .with("borderColor", border_primary);
    let active = StyleMap::new()
        .with("backgroundColor", primary)
        .with("borderSize", 0)
        .with("borderColor", border_primary);

    Theme::from_style(
        StyleMap::new()
            .with("backgroundColor", Color::WHITE)
            .with("color", Color::WHITE)
            .with("primary", primary)
            .with("secondary", DEFAULT_SECONDARY)
            .with("borderPrimary", border_primary)
            .with("borderRadius", DEFAULT_BORDER_RADIUS)
            .with("textMaterial", StyleValue::Null)
            .with(COMPONENTS, StyleMap::new())
            .with(VARIANTS, StyleMap::new())
            .with(HOVERED, hovered)
            .with(ACTIVE, active),
    )
}

/// Provides the theme of one scope.
///
/// The merged theme (`default` + partial) is recomputed only when the
/// caller hands in a different partial theme *allocation*; handing in the
/// same `Arc` again returns the cached value even if it was built from an
/// equal map elsewhere.
#[derive(Debug, Default)]
pub struct ThemeProvider {
    cached: Option<(Option<Arc<StyleMap>>, Arc<Theme>)>,
}

impl ThemeProvider {
    /// Creates a provider with nothing cached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the theme for this scope, `default` merged with `partial`.
    pub fn provide(&mut self, partial: Option<&Arc<StyleMap>>) -> Arc<Theme> {
        if let Some((source, theme)) = &self.cached {
            if same_source(source.as_ref(), partial) {
                return Arc::clone(theme);
            }
        }

        let theme = Arc::new(match partial {
            Some(partial) => default_theme().merged_with(partial),
            None => default_theme(),
        });
        debug!(
            overrides = partial.map_or(0, |p| p.len()),
            "recomputed scoped theme"
        );
        self.cached = Some((partial.cloned(), Arc::clone(&theme)));
        theme
    }

    /// The last provided theme, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Arc<Theme>> {
        self.cached.as_ref().map(|(_, theme)| theme)
    }
}

fn same_source(cached: Option<&Arc<StyleMap>>, incoming: Option<&Arc<StyleMap>>) -> bool {
    match (cached, incoming) {
        (None, None) => true,
        (Some(cached), Some(incoming)) => Arc::ptr_eq(cached, incoming),
        _ => false,
    }
}
