//! 3D text.

use crate::context::RenderContext;
use crate::element::{Element, MaterialSource};
use crate::host::{ElementKind, Material};
use crate::material::MaterialSlot;
use trellis_style::{InteractionState, StyleMap};

/// Component key of text in `components`.
pub const TEXT_KEY: &str = "text";

/// Font size when neither theme nor props set one.
pub const DEFAULT_FONT_SIZE: f32 = 32.0;

/// A run of 3D text.
///
/// Material precedence: the `material` prop, then the theme's
/// `textMaterial`, then this instance's clone of the base text material
/// colored with the resolved `color`.
#[derive(Debug)]
pub struct Text<M> {
    material: MaterialSlot<M>,
}

impl<M> Default for Text<M> {
    fn default() -> Self {
        Self {
            material: MaterialSlot::default(),
        }
    }
}

impl<M: Material> Text<M> {
    /// Creates an instance with no material bound yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the text. `content` (the element's string child) beats the
    /// `text` prop.
    pub fn render(
        &mut self,
        ctx: &RenderContext<'_, M>,
        props: &StyleMap,
        content: Option<&str>,
    ) -> Element<M> {
        let mut style = ctx.resolve(props, TEXT_KEY, InteractionState::IDLE);
        style.set_default("fontSize", DEFAULT_FONT_SIZE);

        let material = if let Some(id) = props.material("material") {
            MaterialSource::Shared(id)
        } else if let Some(id) = ctx.theme().style().material("textMaterial") {
            MaterialSource::Shared(id)
        } else {
            let template = ctx.materials().text.as_ref();
            let color = style.color("color").or_else(|| template.and_then(Material::color));
            let instance = self.material.get_or_clone(template);
            match (instance, color) {
                (Some(material), Some(color)) => {
                    material.set_color(color.to_array());
                    MaterialSource::from_instance(Some(material))
                }
                (instance, _) => MaterialSource::from_instance(instance),
            }
        };

        let text = content
            .or_else(|| style.str("text"))
            .map(str::to_owned);

        Element::new(ElementKind::Text, style)
            .with_material(material)
            .with_text(text)
    }
}
