//! Sparse style maps.
//!
//! Every cascade layer (theme, component override, variant, props, state
//! overlay) is a [`StyleMap`]. A key that is absent means "not specified" and
//! never erases an earlier layer. [`StyleValue::Null`] is a real value: it
//! overwrites, and the typed accessors report it as absent.

use crate::color::Color;
use crate::layout::Dimension;
use std::collections::btree_map::{self, BTreeMap};
use std::str::FromStr;
use std::sync::Arc;

/// Opaque handle to a host texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

/// Opaque handle to a host material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub u32);

/// A single style property value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Explicitly cleared.
    Null,
    /// Boolean flag (`nineSlice`, `roundTopLeft`, ...).
    Bool(bool),
    /// Plain number, world units for lengths.
    Number(f32),
    /// Percentage of the parent, `50.0` means 50%.
    Percent(f32),
    /// Layout `auto`.
    Auto,
    /// Free-form string: keywords, text, image sources, unparsed colors.
    Str(String),
    /// Parsed color.
    Color(Color),
    /// Host texture.
    Texture(TextureId),
    /// Host material.
    Material(MaterialId),
    /// Nested override object (`components`, `variants`, `hovered`, ...).
    Map(Arc<StyleMap>),
}

impl StyleValue {
    /// Short name of the variant, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::Percent(_) => "percent",
            Self::Auto => "auto",
            Self::Str(_) => "string",
            Self::Color(_) => "color",
            Self::Texture(_) => "texture",
            Self::Material(_) => "material",
            Self::Map(_) => "map",
        }
    }

    /// Returns true for [`StyleValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the nested map, if this is one.
    #[must_use]
    pub fn as_map(&self) -> Option<&StyleMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<f64> for StyleValue {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: f64) -> Self {
        Self::Number(value as f32)
    }
}

impl From<i32> for StyleValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i32) -> Self {
        Self::Number(value as f32)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Color> for StyleValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<TextureId> for StyleValue {
    fn from(value: TextureId) -> Self {
        Self::Texture(value)
    }
}

impl From<MaterialId> for StyleValue {
    fn from(value: MaterialId) -> Self {
        Self::Material(value)
    }
}

impl From<StyleMap> for StyleValue {
    fn from(value: StyleMap) -> Self {
        Self::Map(Arc::new(value))
    }
}

impl From<Arc<StyleMap>> for StyleValue {
    fn from(value: Arc<StyleMap>) -> Self {
        Self::Map(value)
    }
}

impl From<Dimension> for StyleValue {
    fn from(value: Dimension) -> Self {
        match value {
            Dimension::Points(points) => Self::Number(points),
            Dimension::Percent(percent) => Self::Percent(percent),
            Dimension::Auto => Self::Auto,
        }
    }
}

/// Ordered mapping from property name to [`StyleValue`].
///
/// Iteration order is the key order, so two maps built from the same
/// layers always print and compare the same way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    entries: BTreeMap<String, StyleValue>,
}

impl StyleMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`StyleMap::set`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets a property, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Sets a property only when `value` is `Some`. `None` leaves the map
    /// untouched, it does not clear.
    pub fn set_opt<V: Into<StyleValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    /// Sets a property unless it already holds a non-null value.
    pub fn set_default(&mut self, key: &str, value: impl Into<StyleValue>) {
        if self.present(key).is_none() {
            self.set(key, value);
        }
    }

    /// Returns the raw value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    /// Returns true if `key` is present (even when `Null`).
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        self.entries.remove(key)
    }

    /// Keeps only the entries for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &StyleValue) -> bool) {
        self.entries.retain(|key, value| keep(key, value));
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, StyleValue> {
        self.entries.iter()
    }

    /// Iterates keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Copies every entry of `layer` over this map. Keys missing from
    /// `layer` are left alone.
    pub fn overlay(&mut self, layer: &StyleMap) {
        for (key, value) in &layer.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Like [`StyleMap::overlay`], but nested maps on both sides are merged
    /// recursively instead of replaced.
    pub fn overlay_deep(&mut self, layer: &StyleMap) {
        for (key, value) in &layer.entries {
            if let (Some(StyleValue::Map(existing)), StyleValue::Map(incoming)) =
                (self.entries.get_mut(key), value)
            {
                Arc::make_mut(existing).overlay_deep(incoming);
                continue;
            }
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Non-null value for `key`.
    fn present(&self, key: &str) -> Option<&StyleValue> {
        self.get(key).filter(|value| !value.is_null())
    }

    /// Numeric property.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f32> {
        match self.present(key)? {
            StyleValue::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Boolean property.
    #[must_use]
    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.present(key)? {
            StyleValue::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// String property.
    #[must_use]
    pub fn str(&self, key: &str) -> Option<&str> {
        match self.present(key)? {
            StyleValue::Str(text) => Some(text),
            _ => None,
        }
    }

    /// Color property. Hex strings are parsed on the fly.
    #[must_use]
    pub fn color(&self, key: &str) -> Option<Color> {
        match self.present(key)? {
            StyleValue::Color(color) => Some(*color),
            StyleValue::Str(text) => Color::parse_hex(text),
            _ => None,
        }
    }

    /// Texture property.
    #[must_use]
    pub fn texture(&self, key: &str) -> Option<TextureId> {
        match self.present(key)? {
            StyleValue::Texture(texture) => Some(*texture),
            _ => None,
        }
    }

    /// Material property.
    #[must_use]
    pub fn material(&self, key: &str) -> Option<MaterialId> {
        match self.present(key)? {
            StyleValue::Material(material) => Some(*material),
            _ => None,
        }
    }

    /// Nested map property.
    #[must_use]
    pub fn map(&self, key: &str) -> Option<&StyleMap> {
        self.present(key)?.as_map()
    }

    /// Layout dimension property (`10`, `"50%"`, `"auto"`).
    #[must_use]
    pub fn dimension(&self, key: &str) -> Option<Dimension> {
        match self.present(key)? {
            StyleValue::Number(points) => Some(Dimension::Points(*points)),
            StyleValue::Percent(percent) => Some(Dimension::Percent(*percent)),
            StyleValue::Auto => Some(Dimension::Auto),
            StyleValue::Str(text) => text.parse().ok(),
            _ => None,
        }
    }

    /// Keyword property parsed into a typed enum.
    #[must_use]
    pub fn parse<T: FromStr>(&self, key: &str) -> Option<T> {
        self.str(key)?.parse().ok()
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.set(key, value);
        }
        map
    }
}

impl<'a> IntoIterator for &'a StyleMap {
    type Item = (&'a String, &'a StyleValue);
    type IntoIter = btree_map::Iter<'a, String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Builds a [`StyleMap`] from `key => value` pairs.
///
/// ```
/// use trellis_style::style;
///
/// let props = style! { "width" => 10, "color" => "#fff" };
/// assert_eq!(props.number("width"), Some(10.0));
/// ```
#[macro_export]
macro_rules! style {
    () => {
        $crate::StyleMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::StyleMap::new();
        $(map.set($key, $value);)+
        map
    }};
}
