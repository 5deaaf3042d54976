//! Progress bars.
//!
//! A bar is a small component tree: a background panel holding an
//! absolutely positioned overlay for the caller's children (labels) and a
//! foreground panel whose width tracks the value.
//!
//! ```text
//! background (Panel | Panel9Slice, row)
//! ├── overlay (Container, absolute, children)
//! └── foreground (Panel | Panel9Slice, width = value %)
//! ```

use crate::components::container::Container;
use crate::components::panel::Panel;
use crate::components::panel_9slice::Panel9Slice;
use crate::context::RenderContext;
use crate::element::Element;
use crate::host::Material;
use trellis_style::{
    Align, Dimension, FlexDirection, InteractionState, PositionType, StyleMap,
};

/// Component key of progress bars in `components`, camelCase like the other
/// component keys.
pub const PROGRESS_BAR_KEY: &str = "progressBar";

/// Corner rounding when nothing sets one.
pub const DEFAULT_ROUNDING: f32 = 30.0;

/// Left offset of the overlay when nothing sets one.
pub const DEFAULT_BAR_LEFT_MARGIN: f32 = 12.0;

/// Clamps a progress value into `[0, 1]`. `NaN` shows as empty.
#[must_use]
pub fn display_value(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Foreground extent for a bar `available` units wide.
///
/// Mirrors what the layout engine computes from the foreground's `width`
/// and `minWidth`: never below `2 * rounding`.
#[must_use]
pub fn foreground_extent(available: f32, value: f32, rounding: f32) -> f32 {
    (available * display_value(value)).max(2.0 * rounding)
}

/// A horizontal bar showing a value between 0 and 1.
#[derive(Debug)]
pub struct ProgressBar<M> {
    background: Panel<M>,
    foreground: Panel<M>,
    background_sliced: Panel9Slice<M>,
    foreground_sliced: Panel9Slice<M>,
    overlay: Container,
}

impl<M> Default for ProgressBar<M> {
    fn default() -> Self {
        Self {
            background: Panel::default(),
            foreground: Panel::default(),
            background_sliced: Panel9Slice::default(),
            foreground_sliced: Panel9Slice::default(),
            overlay: Container,
        }
    }
}

impl<M: Material> ProgressBar<M> {
    /// Creates an instance with no materials bound yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the bar. The value is read from the `value` prop; values
    /// outside `[0, 1]` are clamped.
    pub fn render(
        &mut self,
        ctx: &RenderContext<'_, M>,
        props: &StyleMap,
        children: Vec<Element<M>>,
    ) -> Element<M> {
        let style = ctx.resolve(props, PROGRESS_BAR_KEY, InteractionState::IDLE);
        let value = display_value(style.number("value").unwrap_or(0.0));
        let rounding = style.number("rounding").unwrap_or(DEFAULT_ROUNDING);

        if style.flag("nineSlice").unwrap_or(false) {
            self.render_sliced(ctx, &style, value, rounding, children)
        } else {
            self.render_solid(ctx, &style, value, rounding, children)
        }
    }

    fn render_solid(
        &mut self,
        ctx: &RenderContext<'_, M>,
        style: &StyleMap,
        value: f32,
        rounding: f32,
        children: Vec<Element<M>>,
    ) -> Element<M> {
        let mut background = style.clone();
        copy_present(&mut background, "material", style, "bgMaterial");
        copy_present(&mut background, "backgroundColor", style, "bgColor");
        background.set("flexDirection", FlexDirection::Row);
        background.set_default("padding", 6);
        background.set_default("paddingLeft", 8);
        background.set_default("paddingRight", 8);
        background.set("resolution", 6);
        background.set("rounding", rounding * 1.5);

        let mut overlay = overlay_props(style);
        overlay.set("alignItems", Align::FlexStart);
        overlay.set("width", Dimension::Percent(100.0));
        let overlay = self.overlay.render(ctx, &overlay, children);

        let mut foreground = StyleMap::new()
            .with("width", Dimension::Percent(100.0 * value))
            .with("minWidth", rounding * 2.0)
            .with("height", Dimension::Percent(100.0))
            .with("alignItems", Align::Center)
            .with("rounding", rounding);
        foreground.set_opt("material", style.get("fgMaterial").cloned());
        foreground.set_opt(
            "backgroundColor",
            style.get("fgColor").or_else(|| style.get("primary")).cloned(),
        );
        let foreground = self.foreground.render(ctx, &foreground, Vec::new());

        self.background.render(ctx, &background, vec![overlay, foreground])
    }

    fn render_sliced(
        &mut self,
        ctx: &RenderContext<'_, M>,
        style: &StyleMap,
        value: f32,
        rounding: f32,
        children: Vec<Element<M>>,
    ) -> Element<M> {
        let mut background = style.clone();
        copy_present(&mut background, "texture", style, "bgTexture");
        copy_present(&mut background, "material", style, "bgMaterial");
        background.set("flexDirection", FlexDirection::Row);
        background.set_default("padding", 8);
        background.set_default("paddingLeft", 6);
        background.set_default("paddingRight", 6);

        let mut overlay = overlay_props(style);
        overlay.set("marginTop", 8);
        overlay.set("alignItems", Align::Center);
        overlay.set("width", Dimension::Percent(100.0 * value));
        let overlay = self.overlay.render(ctx, &overlay, children);

        let border_size = nonzero(style.number("fgBorderSize"))
            .or_else(|| nonzero(style.number("borderSize")))
            .unwrap_or(0.0);
        let mut foreground = StyleMap::new()
            .with("borderSize", border_size)
            .with("width", Dimension::Percent(100.0 * value))
            .with("minWidth", rounding * 2.0)
            .with("top", -1)
            .with("height", Dimension::Percent(100.0))
            .with("alignItems", Align::Center)
            .with("rounding", rounding);
        foreground.set_opt(
            "borderTextureSize",
            nonzero(style.number("fgBorderTextureSize"))
                .or_else(|| nonzero(style.number("borderTextureSize"))),
        );
        foreground.set_opt("texture", style.get("fgTexture").cloned());
        foreground.set_opt("material", style.get("fgMaterial").cloned());
        foreground.set_opt("backgroundColor", style.get("fgColor").cloned());
        let foreground = self.foreground_sliced.render(ctx, &foreground, Vec::new());

        self.background_sliced
            .render(ctx, &background, vec![overlay, foreground])
    }
}

/// Overlay container shared by both modes.
fn overlay_props(style: &StyleMap) -> StyleMap {
    StyleMap::new()
        .with("position", PositionType::Absolute)
        .with("height", Dimension::Percent(100.0))
        .with(
            "left",
            style.number("barLeftMargin").unwrap_or(DEFAULT_BAR_LEFT_MARGIN),
        )
}

/// Copies `from` to `to` when `from` holds a non-null value.
fn copy_present(target: &mut StyleMap, to: &str, source: &StyleMap, from: &str) {
    if let Some(value) = source.get(from).filter(|v| !v.is_null()) {
        target.set(to, value.clone());
    }
}

#[allow(clippy::float_cmp)]
fn nonzero(value: Option<f32>) -> Option<f32> {
    value.filter(|v| *v != 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ElementKind;
    use crate::material::MaterialBindings;
    use crate::test_support::MockMaterial;
    use trellis_style::{style, Theme};

    fn render(props: &StyleMap) -> Element<MockMaterial> {
        let theme = Theme::default();
        let materials = MaterialBindings::default();
        let ctx = RenderContext::new(&theme, &materials);
        ProgressBar::new().render(&ctx, props, Vec::new())
    }

    #[test]
    fn test_display_value() {
        assert!((display_value(1.5) - 1.0).abs() < f32::EPSILON);
        assert!(display_value(-0.2).abs() < f32::EPSILON);
        assert!((display_value(0.25) - 0.25).abs() < f32::EPSILON);
        assert!(display_value(f32::NAN).abs() < f32::EPSILON);
    }

    #[test]
    fn test_foreground_extent_floor() {
        assert!((foreground_extent(200.0, 0.0, 30.0) - 60.0).abs() < f32::EPSILON);
        assert!((foreground_extent(200.0, 0.5, 30.0) - 100.0).abs() < f32::EPSILON);
        assert!((foreground_extent(200.0, 2.0, 30.0) - 200.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_solid_tree() {
        let bar = render(&style! { "value" => 0.5, "bgColor" => "#222222" });

        assert_eq!(bar.kind, ElementKind::Panel);
        assert_eq!(bar.style.number("rounding"), Some(45.0));
        assert_eq!(bar.style.number("resolution"), Some(6.0));
        assert_eq!(bar.style.number("paddingLeft"), Some(8.0));
        assert_eq!(bar.style.str("backgroundColor"), Some("#222222"));
        assert_eq!(bar.children.len(), 2);

        let overlay = &bar.children[0];
        assert_eq!(overlay.kind, ElementKind::Container);
        assert_eq!(overlay.style.number("left"), Some(DEFAULT_BAR_LEFT_MARGIN));

        let fill = &bar.children[1];
        assert_eq!(fill.kind, ElementKind::Panel);
        assert_eq!(fill.layout_style().width, Some(Dimension::Percent(50.0)));
        assert_eq!(fill.layout_style().min_width, Some(Dimension::Points(60.0)));
    }

    #[test]
    fn test_sliced_tree() {
        let bar = render(&style! {
            "value" => 0.3,
            "nineSlice" => true,
            "borderSize" => 10,
            "fgBorderSize" => 0,
        });

        assert_eq!(bar.kind, ElementKind::NineSlice);
        assert_eq!(bar.style.number("padding"), Some(8.0));
        assert_eq!(bar.style.number("paddingLeft"), Some(6.0));

        let overlay = &bar.children[0];
        assert_eq!(overlay.style.number("marginTop"), Some(8.0));

        let fill = &bar.children[1];
        assert_eq!(fill.kind, ElementKind::NineSlice);
        assert_eq!(fill.style.number("borderSize"), Some(10.0));
        assert_eq!(fill.style.number("top"), Some(-1.0));
    }
}
