//! Image quads.

use crate::components::panel::tint;
use crate::context::RenderContext;
use crate::element::{Element, MaterialSource};
use crate::host::{ElementKind, Material};
use crate::material::MaterialSlot;
use trellis_style::{InteractionState, StyleMap};

/// Component key of images in `components`.
pub const IMAGE_KEY: &str = "image";

/// A textured quad. `src` is forwarded for the host to load; a resolved
/// `texture` is assigned directly and `color` tints the quad.
#[derive(Debug)]
pub struct Image<M> {
    material: MaterialSlot<M>,
}

impl<M> Default for Image<M> {
    fn default() -> Self {
        Self {
            material: MaterialSlot::default(),
        }
    }
}

impl<M: Material> Image<M> {
    /// Creates an instance with no material bound yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the image.
    pub fn render(&mut self, ctx: &RenderContext<'_, M>, props: &StyleMap) -> Element<M> {
        let style = ctx.resolve(props, IMAGE_KEY, InteractionState::IDLE);

        let material = match style.material("material") {
            Some(id) => MaterialSource::Shared(id),
            None => {
                let mut instance = self.material.get_or_clone(ctx.materials().panel_textured.as_ref());
                if let (Some(material), Some(texture)) =
                    (instance.as_deref_mut(), style.texture("texture"))
                {
                    material.set_texture(texture);
                }
                // Only props tint; the theme `color` is meant for text.
                if props.contains_key("color") {
                    tint(instance, &style, "color")
                } else {
                    MaterialSource::from_instance(instance)
                }
            }
        };

        Element::new(ElementKind::Image, style).with_material(material)
    }
}
