//! Layout schema shared with the external flexbox engine.
//!
//! The set of layout keys is closed: a property is either one of
//! [`LayoutKey::ALL`] and belongs to the layout engine, or it is a
//! visual/behavioral property consumed by the component that owns it.
//! This list must track the layout engine's property schema exactly.

use crate::value::{StyleMap, StyleValue};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A keyword that does not name a variant of the expected enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown keyword: {0}")]
pub struct UnknownKeyword(pub String);

macro_rules! layout_keys {
    ($($variant:ident => $name:literal,)+) => {
        /// Property names understood by the layout engine.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum LayoutKey {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )+
        }

        impl LayoutKey {
            /// Every layout key, in schema order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Property name as it appears in style maps.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl FromStr for LayoutKey {
            type Err = UnknownKeyword;

            fn from_str(text: &str) -> Result<Self, Self::Err> {
                match text {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(UnknownKeyword(text.to_owned())),
                }
            }
        }
    };
}

layout_keys! {
    Width => "width",
    Height => "height",
    MinWidth => "minWidth",
    MinHeight => "minHeight",
    MaxWidth => "maxWidth",
    MaxHeight => "maxHeight",
    AspectRatio => "aspectRatio",
    Margin => "margin",
    MarginTop => "marginTop",
    MarginBottom => "marginBottom",
    MarginLeft => "marginLeft",
    MarginRight => "marginRight",
    Padding => "padding",
    PaddingTop => "paddingTop",
    PaddingBottom => "paddingBottom",
    PaddingLeft => "paddingLeft",
    PaddingRight => "paddingRight",
    Border => "border",
    BorderTop => "borderTop",
    BorderBottom => "borderBottom",
    BorderLeft => "borderLeft",
    BorderRight => "borderRight",
    Gap => "gap",
    RowGap => "rowGap",
    ColumnGap => "columnGap",
    Flex => "flex",
    FlexDirection => "flexDirection",
    FlexGrow => "flexGrow",
    FlexShrink => "flexShrink",
    FlexBasis => "flexBasis",
    FlexWrap => "flexWrap",
    AlignContent => "alignContent",
    AlignItems => "alignItems",
    AlignSelf => "alignSelf",
    JustifyContent => "justifyContent",
    Position => "position",
    Top => "top",
    Left => "left",
    Right => "right",
    Bottom => "bottom",
    Display => "display",
    Overflow => "overflow",
    Z => "z",
    IsReferenceBaseline => "isReferenceBaseline",
}

/// Returns true if `key` belongs to the layout engine.
#[must_use]
pub fn is_layout_key(key: &str) -> bool {
    key.parse::<LayoutKey>().is_ok()
}

/// Shallow copy of `style` without any layout key.
///
/// Used before handing a resolved style to logic that only understands
/// visual properties, so that e.g. a flex `gap` is never drawn.
#[must_use]
pub fn strip_layout_props(style: Option<&StyleMap>) -> Option<StyleMap> {
    let mut visual = style?.clone();
    visual.retain(|key, _| !is_layout_key(key));
    Some(visual)
}

/// Shallow copy of `style` holding only layout keys.
#[must_use]
pub fn layout_props(style: &StyleMap) -> StyleMap {
    let mut layout = style.clone();
    layout.retain(|key, _| is_layout_key(key));
    layout
}

/// A length as the layout engine understands it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// World units.
    Points(f32),
    /// Percentage of the parent, `100.0` is the full parent.
    Percent(f32),
    /// Let the layout engine decide.
    Auto,
}

/// Points serialize as numbers, everything else in its string form.
impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Points(points) => serializer.serialize_f32(*points),
            Self::Percent(_) | Self::Auto => serializer.collect_str(self),
        }
    }
}

impl FromStr for Dimension {
    type Err = UnknownKeyword;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        if text == "auto" {
            return Ok(Self::Auto);
        }
        let invalid = || UnknownKeyword(text.to_owned());
        match text.strip_suffix('%') {
            Some(percent) => percent.trim().parse().map(Self::Percent).map_err(|_| invalid()),
            None => text.parse().map(Self::Points).map_err(|_| invalid()),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Points(points) => write!(f, "{points}"),
            Self::Percent(percent) => write!(f, "{percent}%"),
            Self::Auto => f.write_str("auto"),
        }
    }
}

macro_rules! keyword_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $(
                #[doc = concat!("`", $text, "`")]
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Keyword as written in style maps and theme files.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownKeyword;

            fn from_str(text: &str) -> Result<Self, Self::Err> {
                match text {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(UnknownKeyword(text.to_owned())),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for StyleValue {
            fn from(value: $name) -> Self {
                StyleValue::Str(value.as_str().to_owned())
            }
        }
    };
}

keyword_enum! {
    /// Cross-axis alignment (`alignItems`, `alignSelf`, `alignContent`).
    Align {
        Auto => "auto",
        FlexStart => "flex-start",
        Center => "center",
        FlexEnd => "flex-end",
        Stretch => "stretch",
        Baseline => "baseline",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        SpaceEvenly => "space-evenly",
    }
}

keyword_enum! {
    /// Main-axis distribution (`justifyContent`).
    Justify {
        FlexStart => "flex-start",
        Center => "center",
        FlexEnd => "flex-end",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        SpaceEvenly => "space-evenly",
    }
}

keyword_enum! {
    /// Main axis of a container.
    FlexDirection {
        Column => "column",
        ColumnReverse => "column-reverse",
        Row => "row",
        RowReverse => "row-reverse",
    }
}

keyword_enum! {
    /// Positioning scheme.
    PositionType {
        Static => "static",
        Relative => "relative",
        Absolute => "absolute",
    }
}

keyword_enum! {
    /// Line wrapping along the main axis.
    Wrap {
        NoWrap => "no-wrap",
        Wrap => "wrap",
        WrapReverse => "wrap-reverse",
    }
}

keyword_enum! {
    /// Which layout model applies to a node.
    Display {
        Flex => "flex",
        None => "none",
        Contents => "contents",
    }
}

keyword_enum! {
    /// Child overflow handling.
    Overflow {
        Visible => "visible",
        Hidden => "hidden",
        Scroll => "scroll",
    }
}

/// A shorthand with per-edge overrides (`margin`, `marginTop`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edges<T> {
    /// Shorthand applied to every edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all: Option<T>,
    /// Top edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<T>,
    /// Bottom edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<T>,
    /// Left edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<T>,
    /// Right edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<T>,
}

// Manual so that `T` needs no `Default` of its own.
impl<T> Default for Edges<T> {
    fn default() -> Self {
        Self {
            all: None,
            top: None,
            bottom: None,
            left: None,
            right: None,
        }
    }
}

impl<T> Edges<T> {
    /// Returns true if no edge is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_none()
            && self.top.is_none()
            && self.bottom.is_none()
            && self.left.is_none()
            && self.right.is_none()
    }
}

impl<T: Copy> Edges<T> {
    /// Top edge, falling back to the shorthand.
    #[must_use]
    pub fn resolved_top(&self) -> Option<T> {
        self.top.or(self.all)
    }

    /// Bottom edge, falling back to the shorthand.
    #[must_use]
    pub fn resolved_bottom(&self) -> Option<T> {
        self.bottom.or(self.all)
    }

    /// Left edge, falling back to the shorthand.
    #[must_use]
    pub fn resolved_left(&self) -> Option<T> {
        self.left.or(self.all)
    }

    /// Right edge, falling back to the shorthand.
    #[must_use]
    pub fn resolved_right(&self) -> Option<T> {
        self.right.or(self.all)
    }
}

/// Typed view of the layout keys of a resolved style.
///
/// Values of the wrong type are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutStyle {
    /// `width`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    /// `height`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    /// `minWidth`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<Dimension>,
    /// `minHeight`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<Dimension>,
    /// `maxWidth`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<Dimension>,
    /// `maxHeight`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<Dimension>,
    /// `aspectRatio`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f32>,
    /// `margin*`.
    #[serde(skip_serializing_if = "Edges::is_empty")]
    pub margin: Edges<Dimension>,
    /// `padding*`.
    #[serde(skip_serializing_if = "Edges::is_empty")]
    pub padding: Edges<Dimension>,
    /// `border*` widths.
    #[serde(skip_serializing_if = "Edges::is_empty")]
    pub border: Edges<f32>,
    /// `top`/`left`/`right`/`bottom` offsets. `all` is never set.
    #[serde(skip_serializing_if = "Edges::is_empty")]
    pub inset: Edges<Dimension>,
    /// `gap`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    /// `rowGap`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_gap: Option<f32>,
    /// `columnGap`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_gap: Option<f32>,
    /// `flex`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    /// `flexDirection`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    /// `flexGrow`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_grow: Option<f32>,
    /// `flexShrink`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_shrink: Option<f32>,
    /// `flexBasis`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_basis: Option<Dimension>,
    /// `flexWrap`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_wrap: Option<Wrap>,
    /// `alignContent`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_content: Option<Align>,
    /// `alignItems`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Align>,
    /// `alignSelf`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_self: Option<Align>,
    /// `justifyContent`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<Justify>,
    /// `position`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionType>,
    /// `display`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
    /// `overflow`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<Overflow>,
    /// `z`, added to the usual depth increment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
    /// `isReferenceBaseline`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_reference_baseline: Option<bool>,
}

impl LayoutStyle {
    /// Extracts the layout keys of `style`.
    #[must_use]
    pub fn from_style(style: &StyleMap) -> Self {
        let edges = |all: &str, top: &str, bottom: &str, left: &str, right: &str| Edges {
            all: style.dimension(all),
            top: style.dimension(top),
            bottom: style.dimension(bottom),
            left: style.dimension(left),
            right: style.dimension(right),
        };

        Self {
            width: style.dimension("width"),
            height: style.dimension("height"),
            min_width: style.dimension("minWidth"),
            min_height: style.dimension("minHeight"),
            max_width: style.dimension("maxWidth"),
            max_height: style.dimension("maxHeight"),
            aspect_ratio: style.number("aspectRatio"),
            margin: edges("margin", "marginTop", "marginBottom", "marginLeft", "marginRight"),
            padding: edges(
                "padding",
                "paddingTop",
                "paddingBottom",
                "paddingLeft",
                "paddingRight",
            ),
            border: Edges {
                all: style.number("border"),
                top: style.number("borderTop"),
                bottom: style.number("borderBottom"),
                left: style.number("borderLeft"),
                right: style.number("borderRight"),
            },
            inset: Edges {
                all: None,
                top: style.dimension("top"),
                bottom: style.dimension("bottom"),
                left: style.dimension("left"),
                right: style.dimension("right"),
            },
            gap: style.number("gap"),
            row_gap: style.number("rowGap"),
            column_gap: style.number("columnGap"),
            flex: style.number("flex"),
            flex_direction: style.parse("flexDirection"),
            flex_grow: style.number("flexGrow"),
            flex_shrink: style.number("flexShrink"),
            flex_basis: style.dimension("flexBasis"),
            flex_wrap: style.parse("flexWrap"),
            align_content: style.parse("alignContent"),
            align_items: style.parse("alignItems"),
            align_self: style.parse("alignSelf"),
            justify_content: style.parse("justifyContent"),
            position: style.parse("position"),
            display: style.parse("display"),
            overflow: style.parse("overflow"),
            z: style.number("z"),
            is_reference_baseline: style.flag("isReferenceBaseline"),
        }
    }
}

impl From<&StyleMap> for LayoutStyle {
    fn from(style: &StyleMap) -> Self {
        Self::from_style(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style;

    #[test]
    fn test_strip_layout_props() {
        let stripped = strip_layout_props(Some(&style! { "width" => 10, "color" => "#fff" }));
        assert_eq!(stripped, Some(style! { "color" => "#fff" }));
    }

    #[test]
    fn test_strip_layout_props_passes_none_through() {
        assert_eq!(strip_layout_props(None), None);
    }

    #[test]
    fn test_layout_props_is_the_complement() {
        let style = style! { "gap" => 4, "borderSize" => 16, "border" => 2, "texture" => "x" };
        let layout = layout_props(&style);
        let visual = strip_layout_props(Some(&style)).unwrap();

        assert_eq!(layout.keys().collect::<Vec<_>>(), vec!["border", "gap"]);
        assert_eq!(visual.keys().collect::<Vec<_>>(), vec!["borderSize", "texture"]);
    }

    #[test]
    fn test_every_layout_key_round_trips_its_name() {
        for key in LayoutKey::ALL {
            assert_eq!(key.as_str().parse::<LayoutKey>(), Ok(*key));
        }
        assert_eq!(LayoutKey::ALL.len(), 44);
    }

    #[test]
    fn test_visual_border_keys_are_not_layout_keys() {
        for key in ["borderSize", "borderColor", "borderRadius", "borderTextureSize", "color"] {
            assert!(!is_layout_key(key), "{key}");
        }
    }

    #[test]
    fn test_dimension_parsing() {
        assert_eq!("auto".parse(), Ok(Dimension::Auto));
        assert_eq!("50%".parse(), Ok(Dimension::Percent(50.0)));
        assert_eq!("12.5".parse(), Ok(Dimension::Points(12.5)));
        assert!("wide".parse::<Dimension>().is_err());
        assert_eq!(Dimension::Percent(37.5).to_string(), "37.5%");
    }

    #[test]
    fn test_layout_style_extraction() {
        let layout = LayoutStyle::from_style(&style! {
            "width" => "100%",
            "height" => 64,
            "padding" => 16,
            "paddingLeft" => 4,
            "flexDirection" => FlexDirection::Row,
            "alignItems" => Align::Center,
            "justifyContent" => "space-between",
            "position" => PositionType::Absolute,
            "left" => 12,
            "color" => "#ffffff",
        });

        assert_eq!(layout.width, Some(Dimension::Percent(100.0)));
        assert_eq!(layout.height, Some(Dimension::Points(64.0)));
        assert_eq!(layout.padding.resolved_left(), Some(Dimension::Points(4.0)));
        assert_eq!(layout.padding.resolved_top(), Some(Dimension::Points(16.0)));
        assert_eq!(layout.flex_direction, Some(FlexDirection::Row));
        assert_eq!(layout.align_items, Some(Align::Center));
        assert_eq!(layout.justify_content, Some(Justify::SpaceBetween));
        assert_eq!(layout.position, Some(PositionType::Absolute));
        assert_eq!(layout.inset.resolved_left(), Some(Dimension::Points(12.0)));
        assert_eq!(layout.inset.resolved_top(), None);
    }

    #[test]
    fn test_edges_default_is_unset() {
        let edges = Edges::<Dimension>::default();
        assert!(edges.is_empty());
        assert_eq!(edges.resolved_top(), None);
        assert!(LayoutStyle::default().padding.is_empty());
    }

    #[test]
    fn test_layout_style_serializes_set_keys_only() {
        let layout = LayoutStyle::from_style(&style! {
            "width" => "50%",
            "height" => 40,
            "paddingLeft" => 6,
            "flexDirection" => FlexDirection::Row,
            "color" => "#ffffff",
        });

        let text = toml::to_string(&layout).unwrap();
        let table: toml::Table = toml::from_str(&text).unwrap();

        assert_eq!(table.get("width").and_then(toml::Value::as_str), Some("50%"));
        assert_eq!(table.get("height").and_then(toml::Value::as_float), Some(40.0));
        assert_eq!(table.get("flexDirection").and_then(toml::Value::as_str), Some("row"));
        assert_eq!(
            table["padding"].get("left").and_then(toml::Value::as_float),
            Some(6.0)
        );
        assert!(!table.contains_key("margin"));
        assert!(!table.contains_key("gap"));
    }

    #[test]
    fn test_wrongly_typed_layout_values_are_unset() {
        let layout = LayoutStyle::from_style(&style! { "flexDirection" => "sideways", "gap" => "wide" });
        assert_eq!(layout, LayoutStyle::default());
    }
}
