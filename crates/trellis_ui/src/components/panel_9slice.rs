//! 9-slice textured panels.

use crate::context::RenderContext;
use crate::element::{Element, MaterialSource};
use crate::host::{ElementKind, Material};
use crate::material::MaterialSlot;
use trellis_style::{InteractionState, StyleMap};

/// Component key of 9-slice panels in `components`.
pub const PANEL_9SLICE_KEY: &str = "panel9Slice";

/// Share of the texture used for the border slices when nothing sets it.
pub const DEFAULT_BORDER_TEXTURE_SIZE: f32 = 0.5;

/// A panel whose texture is split into corners, edges and a stretched center.
#[derive(Debug)]
pub struct Panel9Slice<M> {
    material: MaterialSlot<M>,
}

impl<M> Default for Panel9Slice<M> {
    fn default() -> Self {
        Self {
            material: MaterialSlot::default(),
        }
    }
}

impl<M: Material> Panel9Slice<M> {
    /// Creates an instance with no material bound yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the panel.
    pub fn render(
        &mut self,
        ctx: &RenderContext<'_, M>,
        props: &StyleMap,
        children: Vec<Element<M>>,
    ) -> Element<M> {
        let resolved = ctx.resolve(props, PANEL_9SLICE_KEY, InteractionState::IDLE);
        self.build(ctx, resolved, children)
    }

    pub(crate) fn build(
        &mut self,
        ctx: &RenderContext<'_, M>,
        mut style: StyleMap,
        children: Vec<Element<M>>,
    ) -> Element<M> {
        style.set_default("borderTextureSize", DEFAULT_BORDER_TEXTURE_SIZE);

        // Bound on first render even if an explicit material wins.
        let mut instance = self.material.get_or_clone(ctx.materials().panel_textured.as_ref());
        let texture = style
            .texture("texture")
            .or_else(|| ctx.theme().style().texture("texture"));

        let material = match style.material("material") {
            Some(id) => MaterialSource::Shared(id),
            None => {
                if let (Some(material), Some(texture)) = (instance.as_deref_mut(), texture) {
                    material.set_texture(texture);
                }
                MaterialSource::from_instance(instance)
            }
        };

        Element::new(ElementKind::NineSlice, style)
            .with_material(material)
            .with_children(children)
    }
}
