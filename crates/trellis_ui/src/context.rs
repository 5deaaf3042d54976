//! What a component can see of its ancestors.

use crate::material::MaterialBindings;
use trellis_style::theme::DEFAULT_VARIANT;
use trellis_style::{resolve_style, InteractionState, StyleMap, Theme};

/// Key in props that selects a variant for an element and its subtree.
pub const VARIANT: &str = "variant";

/// Theme, base materials and inherited variant for one subtree.
///
/// Passed explicitly to every render call. A child context differs from
/// its parent only when the parent's props name a variant.
#[derive(Debug)]
pub struct RenderContext<'a, M> {
    theme: &'a Theme,
    materials: &'a MaterialBindings<M>,
    variant: Option<&'a str>,
}

impl<M> Clone for RenderContext<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for RenderContext<'_, M> {}

impl<'a, M> RenderContext<'a, M> {
    /// Root context: no variant.
    #[must_use]
    pub fn new(theme: &'a Theme, materials: &'a MaterialBindings<M>) -> Self {
        Self {
            theme,
            materials,
            variant: None,
        }
    }

    /// The theme in effect.
    #[must_use]
    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    /// Base materials components clone from.
    #[must_use]
    pub fn materials(&self) -> &'a MaterialBindings<M> {
        self.materials
    }

    /// Variant inherited from the nearest ancestor that set one.
    #[must_use]
    pub fn variant(&self) -> Option<&'a str> {
        self.variant
    }

    /// Same context with `variant` selected. `None` keeps the inherited one.
    #[must_use]
    pub fn with_variant(&self, variant: Option<&'a str>) -> Self {
        Self {
            variant: variant.or(self.variant),
            ..*self
        }
    }

    /// Context for the children of an element rendered with `props`.
    #[must_use]
    pub fn child_context<'b>(&self, props: &'b StyleMap) -> RenderContext<'b, M>
    where
        'a: 'b,
    {
        RenderContext {
            theme: self.theme,
            materials: self.materials,
            variant: props.str(VARIANT).or(self.variant),
        }
    }

    /// Variant an element rendered with `props` resolves under: its own,
    /// else the inherited one, else [`DEFAULT_VARIANT`].
    #[must_use]
    pub fn effective_variant<'p>(&self, props: &'p StyleMap) -> &'p str
    where
        'a: 'p,
    {
        props.str(VARIANT).or(self.variant).unwrap_or(DEFAULT_VARIANT)
    }

    /// Resolves an element's style. A `variant` in `props` beats the
    /// inherited one.
    #[must_use]
    pub fn resolve(&self, props: &StyleMap, key: &str, state: InteractionState) -> StyleMap {
        let variant = self.effective_variant(props);
        resolve_style(self.theme.style(), props, Some(variant), state, Some(key))
    }
}
