//! Style resolution.
//!
//! Flattens the theme cascade for one element into a single [`StyleMap`].
//! Layers are applied in a fixed order, each one a shallow overwrite of
//! only the keys it carries:
//!
//! 1. the theme's own top-level keys
//! 2. `components.<specialize_key>`
//! 3. `variants.<variant>`
//! 4. `variants.<variant>.components.<specialize_key>`
//! 5. the element's props
//! 6. `hovered` of the merged result, when hovered
//! 7. `active` of the merged result, when active
//!
//! Missing layers are skipped. Nothing here fails or mutates its inputs.

use crate::theme::{component_layer, variant_layer, ACTIVE, HOVERED};
use crate::value::{StyleMap, StyleValue};
use std::sync::Arc;
use tracing::trace;

/// Interaction flags of one element, set by the host's input handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InteractionState {
    /// Pointer is over the element.
    pub hovered: bool,
    /// Element is pressed.
    pub active: bool,
}

impl InteractionState {
    /// Neither hovered nor pressed.
    pub const IDLE: Self = Self {
        hovered: false,
        active: false,
    };

    /// Hovered only.
    pub const HOVERED: Self = Self {
        hovered: true,
        active: false,
    };

    /// Pressed (and therefore hovered).
    pub const PRESSED: Self = Self {
        hovered: true,
        active: true,
    };
}

/// Resolves the style of one element.
///
/// `theme` may be a full theme or any partial map. `props` always beats
/// every theme layer; `active` beats `hovered` when both are set.
#[must_use]
pub fn resolve_style(
    theme: &StyleMap,
    props: &StyleMap,
    variant: Option<&str>,
    state: InteractionState,
    specialize_key: Option<&str>,
) -> StyleMap {
    let mut merged = theme.clone();

    if let Some(key) = specialize_key {
        match component_layer(theme, key) {
            Some(layer) => merged.overlay(layer),
            None => trace!(component = key, "no component overrides in theme"),
        }
    }

    if let Some(name) = variant {
        match variant_layer(theme, name) {
            Some(variant_style) => {
                merged.overlay(variant_style);
                if let Some(layer) = specialize_key.and_then(|key| component_layer(variant_style, key)) {
                    merged.overlay(layer);
                }
            }
            None => trace!(variant = name, "variant not registered in theme"),
        }
    }

    merged.overlay(props);

    if state.hovered {
        overlay_state(&mut merged, HOVERED);
    }
    if state.active {
        overlay_state(&mut merged, ACTIVE);
    }

    merged
}

/// Applies the merged map's own `key` sub-map on top of it.
fn overlay_state(merged: &mut StyleMap, key: &str) {
    if let Some(StyleValue::Map(layer)) = merged.get(key) {
        let layer = Arc::clone(layer);
        merged.overlay(&layer);
    }
}

/// Builder form of [`resolve_style`].
///
/// ```
/// use trellis_style::{default_theme, style, InteractionState, ResolveRequest};
///
/// let theme = default_theme();
/// let props = style! { "fontSize" => 16 };
/// let resolved = ResolveRequest::new(theme.style(), &props)
///     .specialize("text")
///     .state(InteractionState::HOVERED)
///     .resolve();
/// assert_eq!(resolved.number("fontSize"), Some(16.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ResolveRequest<'a> {
    theme: &'a StyleMap,
    props: &'a StyleMap,
    variant: Option<&'a str>,
    state: InteractionState,
    specialize_key: Option<&'a str>,
}

impl<'a> ResolveRequest<'a> {
    /// Starts a request with no variant, no interaction and no component key.
    #[must_use]
    pub fn new(theme: &'a StyleMap, props: &'a StyleMap) -> Self {
        Self {
            theme,
            props,
            variant: None,
            state: InteractionState::IDLE,
            specialize_key: None,
        }
    }

    /// Selects a variant.
    #[must_use]
    pub fn variant(mut self, variant: Option<&'a str>) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the interaction flags.
    #[must_use]
    pub fn state(mut self, state: InteractionState) -> Self {
        self.state = state;
        self
    }

    /// Sets the component type key.
    #[must_use]
    pub fn specialize(mut self, key: &'a str) -> Self {
        self.specialize_key = Some(key);
        self
    }

    /// Runs the cascade.
    #[must_use]
    pub fn resolve(self) -> StyleMap {
        resolve_style(
            self.theme,
            self.props,
            self.variant,
            self.state,
            self.specialize_key,
        )
    }
}
