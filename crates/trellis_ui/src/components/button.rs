//! Interactive buttons.

use crate::components::panel::Panel;
use crate::components::panel_9slice::Panel9Slice;
use crate::context::RenderContext;
use crate::element::Element;
use crate::host::Material;
use trellis_style::{InteractionState, StyleMap};
use tracing::trace;

/// Component key of buttons in `components`.
pub const BUTTON_KEY: &str = "button";

/// A panel that reacts to hover and press.
///
/// Resolves with the host's interaction flags, so the theme's `hovered`
/// and `active` overlays apply. The resolved `nineSlice` flag picks a
/// 9-slice panel over a flat one.
#[derive(Debug)]
pub struct Button<M> {
    flat: Panel<M>,
    sliced: Panel9Slice<M>,
}

impl<M> Default for Button<M> {
    fn default() -> Self {
        Self {
            flat: Panel::default(),
            sliced: Panel9Slice::default(),
        }
    }
}

impl<M: Material> Button<M> {
    /// Creates an instance with no materials bound yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the button in `state`.
    pub fn render(
        &mut self,
        ctx: &RenderContext<'_, M>,
        props: &StyleMap,
        state: InteractionState,
        children: Vec<Element<M>>,
    ) -> Element<M> {
        let style = ctx.resolve(props, BUTTON_KEY, state);
        trace!(hovered = state.hovered, active = state.active, "rendering button");
        if style.flag("nineSlice").unwrap_or(false) {
            self.sliced.build(ctx, style, children)
        } else {
            self.flat.build(ctx, style, children)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ElementKind;
    use crate::material::MaterialBindings;
    use crate::test_support::MockMaterial;
    use trellis_style::theme::{COMPONENTS, DEFAULT_PRIMARY, HOVERED};
    use trellis_style::{style, Color, TextureId, Theme};

    fn bindings() -> MaterialBindings<MockMaterial> {
        MaterialBindings {
            panel: Some(MockMaterial::new("panel")),
            panel_textured: Some(MockMaterial::new("textured")),
            text: None,
        }
    }

    #[test]
    fn test_hover_recolors_flat_button() {
        let theme = Theme::default();
        let materials = bindings();
        let ctx = RenderContext::new(&theme, &materials);
        let mut button = Button::new();

        let idle = button.render(&ctx, &StyleMap::new(), InteractionState::IDLE, Vec::new());
        assert_eq!(idle.kind, ElementKind::Panel);
        assert_eq!(idle.material.instance().unwrap().rgba(), Some(Color::WHITE.to_array()));

        let hovered = button.render(&ctx, &StyleMap::new(), InteractionState::HOVERED, Vec::new());
        assert_eq!(
            hovered.material.instance().unwrap().rgba(),
            Some(DEFAULT_PRIMARY.to_array())
        );
        assert_eq!(hovered.style.number("borderSize"), Some(1.0));
        assert_eq!(materials.panel.as_ref().unwrap().clone_count(), 2);
    }

    #[test]
    fn test_nine_slice_hover_texture() {
        let theme = Theme::default().merged_with(&style! {
            COMPONENTS => style! {
                BUTTON_KEY => style! {
                    "nineSlice" => true,
                    "texture" => TextureId(1),
                    HOVERED => style! { "texture" => TextureId(2) },
                },
            },
        });
        let materials = bindings();
        let ctx = RenderContext::new(&theme, &materials);
        let mut button = Button::new();

        let idle = button.render(&ctx, &StyleMap::new(), InteractionState::IDLE, Vec::new());
        assert_eq!(idle.kind, ElementKind::NineSlice);
        assert_eq!(idle.material.instance().unwrap().texture(), Some(TextureId(1)));

        let hovered = button.render(&ctx, &StyleMap::new(), InteractionState::HOVERED, Vec::new());
        assert_eq!(hovered.material.instance().unwrap().texture(), Some(TextureId(2)));
    }
}
