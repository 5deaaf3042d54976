//! Host engine boundary.
//!
//! The engine owns meshes, materials and textures. This layer only ever
//! clones a material, recolors it or assigns it a texture, and tells the
//! host which primitive to build for each element.

use std::fmt;
use trellis_style::{Color, TextureId};

/// A host material handle.
///
/// `Clone` copies the *handle*; both copies refer to the same engine
/// material. [`Material::clone_material`] creates a new engine material.
pub trait Material: Clone + fmt::Debug {
    /// Creates an independent engine-side copy of this material.
    #[must_use]
    fn clone_material(&self) -> Self;

    /// Sets the material's flat color.
    fn set_color(&mut self, rgba: [f32; 4]);

    /// Sets the material's flat texture.
    fn set_texture(&mut self, texture: TextureId);

    /// Current flat color, if the material has one.
    fn color(&self) -> Option<Color>;
}

/// Host primitive an element maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Layout-only node.
    Container,
    /// Rounded rectangle mesh.
    Panel,
    /// 9-slice mesh.
    NineSlice,
    /// 3D text.
    Text,
    /// Image quad.
    Image,
}

impl ElementKind {
    /// Primitive name the host registers constructors under.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::Panel => "panel",
            Self::NineSlice => "nineSlice",
            Self::Text => "text3d",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
