//! Rounded rectangle panels.

use crate::context::RenderContext;
use crate::element::{Element, MaterialSource};
use crate::host::{ElementKind, Material};
use crate::material::MaterialSlot;
use trellis_style::{InteractionState, StyleMap};

/// Component key of panels in `components`.
pub const PANEL_KEY: &str = "panel";

/// A flat-colored rounded rectangle.
///
/// `backgroundColor` tints the instance's clone of the panel material.
/// With `borderSize > 0` and a `borderColor`, a second clone draws the
/// border. `rounding` falls back to the theme's `borderRadius`.
#[derive(Debug)]
pub struct Panel<M> {
    fill: MaterialSlot<M>,
    border: MaterialSlot<M>,
}

impl<M> Default for Panel<M> {
    fn default() -> Self {
        Self {
            fill: MaterialSlot::default(),
            border: MaterialSlot::default(),
        }
    }
}

impl<M: Material> Panel<M> {
    /// Creates an instance with no materials bound yet.
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
        let resolved = ctx.resolve(props, PANEL_KEY, InteractionState::IDLE);
        self.build(ctx, resolved, children)
    }

    /// Builds the element from an already resolved style.
    pub(crate) fn build(
        &mut self,
        ctx: &RenderContext<'_, M>,
        mut style: StyleMap,
        children: Vec<Element<M>>,
    ) -> Element<M> {
        if let Some(radius) = style.number("borderRadius") {
            style.set_default("rounding", radius);
        }

        let material = match style.material("material") {
            Some(id) => MaterialSource::Shared(id),
            None => {
                let fill = self.fill.get_or_clone(ctx.materials().panel.as_ref());
                tint(fill, &style, "backgroundColor")
            }
        };
        let border = self.bind_border(ctx, &style);

        Element::new(ElementKind::Panel, style)
            .with_material(material)
            .with_border_material(border)
            .with_children(children)
    }

    fn bind_border(&mut self, ctx: &RenderContext<'_, M>, style: &StyleMap) -> MaterialSource<M> {
        if style.number("borderSize").unwrap_or(0.0) <= 0.0 || style.color("borderColor").is_none() {
            return MaterialSource::None;
        }
        if let Some(id) = style.material("borderMaterial") {
            return MaterialSource::Shared(id);
        }
        let border = self.border.get_or_clone(ctx.materials().panel.as_ref());
        tint(border, style, "borderColor")
    }
}

/// Colors an instance material from `key`, leaving it as is when unset.
pub(crate) fn tint<M: Material>(
    material: Option<&mut M>,
    style: &StyleMap,
    key: &str,
) -> MaterialSource<M> {
    let Some(material) = material else {
        return MaterialSource::None;
    };
    if let Some(color) = style.color(key) {
        material.set_color(color.to_array());
    }
    MaterialSource::from_instance(Some(material))
}
