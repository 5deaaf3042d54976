//! TOML theme files.
//!
//! A theme file is a partial theme written as TOML:
//!
//! ```toml
//! color = "#1b9ed9"
//! fontSize = 24
//!
//! [components.button]
//! height = 40
//! nineSlice = true
//! texture = "@buttonBlue"
//!
//! [components.button.hovered]
//! texture = "@buttonBlueHover"
//!
//! [variants.header.components.text]
//! color = "#ffffff"
//! ```
//!
//! Strings are interpreted on load: `"auto"`, `"50%"`, `"#rrggbb"` and
//! `"@asset"` become typed values, everything else stays a string.
//! A leading backslash keeps the rest literal, so `'\#1 Player'` is the
//! string `#1 Player` rather than a malformed color.
//! Textures and materials are named by the host through the loader.
//!
//! [`ThemeLoader::export`] escapes strings that would otherwise reload as
//! typed values. Texture and material handles the loader has no name for
//! are written as `"texture#N"` / `"material#N"` and do not reload as
//! handles.

use crate::color::Color;
use crate::error::{ThemeError, ThemeResult};
use crate::value::{MaterialId, StyleMap, StyleValue, TextureId};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Prefix that marks a string as literal.
pub const LITERAL_ESCAPE: char = '\\';

/// Loads theme files, resolving `@name` asset references.
#[derive(Debug, Clone, Default)]
pub struct ThemeLoader {
    textures: BTreeMap<String, TextureId>,
    materials: BTreeMap<String, MaterialId>,
}

impl ThemeLoader {
    /// Creates a loader with no named assets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Names a texture for `@name` references.
    #[must_use]
    pub fn texture(mut self, name: impl Into<String>, texture: TextureId) -> Self {
        self.textures.insert(name.into(), texture);
        self
    }

    /// Names a material for `@name` references. Textures win on clashes.
    #[must_use]
    pub fn material(mut self, name: impl Into<String>, material: MaterialId) -> Self {
        self.materials.insert(name.into(), material);
        self
    }

    /// Names a texture from a `name=id` binding, as written on a command line.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidAssetBinding`] if `binding` is not
    /// `name=id` with a numeric id.
    pub fn texture_binding(self, binding: &str) -> ThemeResult<Self> {
        let (name, id) = parse_binding(binding)?;
        Ok(self.texture(name, TextureId(id)))
    }

    /// Names a material from a `name=id` binding.
    ///
    /// # Errors
    ///
    /// Same as [`ThemeLoader::texture_binding`].
    pub fn material_binding(self, binding: &str) -> ThemeResult<Self> {
        let (name, id) = parse_binding(binding)?;
        Ok(self.material(name, MaterialId(id)))
    }

    /// Parses a theme from TOML source.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is not TOML, uses an unknown asset,
    /// holds an invalid color or a value with no style equivalent.
    pub fn load_str(&self, source: &str) -> ThemeResult<StyleMap> {
        let table: toml::Table = toml::from_str(source)?;
        self.convert_table(&table, "")
    }

    /// Reads and parses a theme file.
    ///
    /// # Errors
    ///
    /// Same as [`ThemeLoader::load_str`], plus I/O failures.
    pub fn load_file(&self, path: impl AsRef<Path>) -> ThemeResult<StyleMap> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let theme = self.load_str(&source)?;
        info!(path = %path.display(), keys = theme.len(), "loaded theme file");
        Ok(theme)
    }

    /// Loads several files and deep-merges them in order, later files
    /// overriding earlier ones key by key at every nesting level.
    ///
    /// # Errors
    ///
    /// Fails on the first file that fails to load.
    pub fn load_layered<P: AsRef<Path>>(
        &self,
        paths: impl IntoIterator<Item = P>,
    ) -> ThemeResult<StyleMap> {
        let mut merged = StyleMap::new();
        for path in paths {
            merged.overlay_deep(&self.load_file(path)?);
        }
        Ok(merged)
    }

    /// Converts a style map back to TOML, naming assets where possible.
    /// `Null` entries have no TOML form and are left out.
    #[must_use]
    pub fn export(&self, style: &StyleMap) -> toml::Table {
        let mut table = toml::Table::new();
        for (key, value) in style {
            if let Some(value) = self.export_value(value) {
                table.insert(key.clone(), value);
            }
        }
        table
    }

    fn convert_table(&self, table: &toml::Table, prefix: &str) -> ThemeResult<StyleMap> {
        let mut style = StyleMap::new();
        for (key, value) in table {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            style.set(key.clone(), self.convert_value(&path, value)?);
        }
        Ok(style)
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn convert_value(&self, path: &str, value: &toml::Value) -> ThemeResult<StyleValue> {
        match value {
            toml::Value::Boolean(flag) => Ok(StyleValue::Bool(*flag)),
            toml::Value::Integer(number) => Ok(StyleValue::Number(*number as f32)),
            toml::Value::Float(number) => Ok(StyleValue::Number(*number as f32)),
            toml::Value::String(text) => self.convert_string(path, text),
            toml::Value::Table(table) => Ok(StyleValue::from(self.convert_table(table, path)?)),
            toml::Value::Array(_) => Err(ThemeError::UnsupportedValue {
                key: path.to_owned(),
                kind: "array",
            }),
            toml::Value::Datetime(_) => Err(ThemeError::UnsupportedValue {
                key: path.to_owned(),
                kind: "datetime",
            }),
        }
    }

    fn convert_string(&self, path: &str, text: &str) -> ThemeResult<StyleValue> {
        if let Some(literal) = text.strip_prefix(LITERAL_ESCAPE) {
            return Ok(StyleValue::Str(literal.to_owned()));
        }
        if text == "auto" {
            return Ok(StyleValue::Auto);
        }
        if let Some(percent) = parse_percent(text) {
            return Ok(StyleValue::Percent(percent));
        }
        if text.starts_with('#') {
            return Color::parse_hex(text)
                .map(StyleValue::Color)
                .ok_or_else(|| ThemeError::InvalidColor {
                    key: path.to_owned(),
                    value: text.to_owned(),
                });
        }
        if let Some(name) = text.strip_prefix('@') {
            if let Some(texture) = self.textures.get(name) {
                return Ok(StyleValue::Texture(*texture));
            }
            if let Some(material) = self.materials.get(name) {
                return Ok(StyleValue::Material(*material));
            }
            debug!(key = path, asset = name, "asset reference not registered");
            return Err(ThemeError::UnknownAsset(name.to_owned()));
        }
        Ok(StyleValue::Str(text.to_owned()))
    }

    fn export_value(&self, value: &StyleValue) -> Option<toml::Value> {
        let exported = match value {
            StyleValue::Null => return None,
            StyleValue::Bool(flag) => toml::Value::Boolean(*flag),
            StyleValue::Number(number) => export_number(*number),
            StyleValue::Percent(percent) => toml::Value::String(format!("{percent}%")),
            StyleValue::Auto => toml::Value::String("auto".to_owned()),
            StyleValue::Str(text) if is_ambiguous(text) => {
                toml::Value::String(format!("{LITERAL_ESCAPE}{text}"))
            }
            StyleValue::Str(text) => toml::Value::String(text.clone()),
            StyleValue::Color(color) => toml::Value::try_from(*color).ok()?,
            StyleValue::Texture(texture) => toml::Value::String(
                asset_name(&self.textures, texture)
                    .unwrap_or_else(|| format!("texture#{}", texture.0)),
            ),
            StyleValue::Material(material) => toml::Value::String(
                asset_name(&self.materials, material)
                    .unwrap_or_else(|| format!("material#{}", material.0)),
            ),
            StyleValue::Map(map) => toml::Value::Table(self.export(map)),
        };
        Some(exported)
    }
}

fn parse_binding(binding: &str) -> ThemeResult<(&str, u32)> {
    binding
        .split_once('=')
        .map(|(name, id)| (name.trim().trim_start_matches('@'), id.trim()))
        .filter(|(name, _)| !name.is_empty())
        .and_then(|(name, id)| Some((name, id.parse().ok()?)))
        .ok_or_else(|| ThemeError::InvalidAssetBinding(binding.to_owned()))
}

fn parse_percent(text: &str) -> Option<f32> {
    text.strip_suffix('%').and_then(|p| p.trim().parse().ok())
}

/// Strings that would load back as something other than a string.
fn is_ambiguous(text: &str) -> bool {
    text == "auto"
        || text.starts_with(['#', '@', LITERAL_ESCAPE])
        || parse_percent(text).is_some()
}

fn asset_name<T: PartialEq>(assets: &BTreeMap<String, T>, wanted: &T) -> Option<String> {
    assets
        .iter()
        .find(|(_, asset)| *asset == wanted)
        .map(|(name, _)| format!("@{name}"))
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn export_number(number: f32) -> toml::Value {
    let wide = f64::from(number);
    if wide.is_finite() && wide.fract() == 0.0 && wide.abs() < 1e15 {
        toml::Value::Integer(wide as i64)
    } else {
        toml::Value::Float(wide)
    }
}
