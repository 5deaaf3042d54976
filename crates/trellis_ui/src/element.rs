//! Render output of a component.
//!
//! An [`Element`] is what the host turns into one primitive: its kind, the
//! resolved style (layout and visual keys together), the material it
//! draws with and its children.

use crate::host::{ElementKind, Material};
use trellis_style::{strip_layout_props, LayoutStyle, MaterialId, StyleMap};

/// Material an element draws with.
#[derive(Debug, Clone, Default)]
pub enum MaterialSource<M> {
    /// No material; the host primitive's default.
    #[default]
    None,
    /// A material given explicitly by theme or props. Never mutated here.
    Shared(MaterialId),
    /// The component instance's own clone, already styled.
    Instance(M),
}

impl<M> MaterialSource<M> {
    /// Returns the instance material, if any.
    #[must_use]
    pub fn instance(&self) -> Option<&M> {
        match self {
            Self::Instance(material) => Some(material),
            _ => None,
        }
    }

    /// Returns the explicit material id, if any.
    #[must_use]
    pub fn shared(&self) -> Option<MaterialId> {
        match self {
            Self::Shared(id) => Some(*id),
            _ => None,
        }
    }

    /// Returns true for [`MaterialSource::None`].
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl<M: Material> MaterialSource<M> {
    /// Snapshot of an instance material's handle.
    pub(crate) fn from_instance(material: Option<&mut M>) -> Self {
        material.map_or(Self::None, |m| Self::Instance(m.clone()))
    }
}

/// One node of a rendered component tree.
#[derive(Debug, Clone)]
pub struct Element<M> {
    /// Host primitive.
    pub kind: ElementKind,
    /// Resolved style.
    pub style: StyleMap,
    /// Fill material.
    pub material: MaterialSource<M>,
    /// Border material, for panels with a visible border.
    pub border_material: MaterialSource<M>,
    /// Text content, for text elements.
    pub text: Option<String>,
    /// Child elements, in layout order.
    pub children: Vec<Element<M>>,
}

impl<M> Element<M> {
    /// Creates a childless element with no material.
    #[must_use]
    pub fn new(kind: ElementKind, style: StyleMap) -> Self {
        Self {
            kind,
            style,
            material: MaterialSource::None,
            border_material: MaterialSource::None,
            text: None,
            children: Vec::new(),
        }
    }

    /// Sets the fill material.
    #[must_use]
    pub fn with_material(mut self, material: MaterialSource<M>) -> Self {
        self.material = material;
        self
    }

    /// Sets the border material.
    #[must_use]
    pub fn with_border_material(mut self, material: MaterialSource<M>) -> Self {
        self.border_material = material;
        self
    }

    /// Sets the text content.
    #[must_use]
    pub fn with_text(mut self, text: Option<String>) -> Self {
        self.text = text;
        self
    }

    /// Sets the children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Element<M>>) -> Self {
        self.children = children;
        self
    }

    /// Typed layout properties for the layout engine.
    #[must_use]
    pub fn layout_style(&self) -> LayoutStyle {
        LayoutStyle::from_style(&self.style)
    }

    /// Everything the layout engine does not own.
    #[must_use]
    pub fn visual_style(&self) -> StyleMap {
        strip_layout_props(Some(&self.style)).unwrap_or_default()
    }

    /// Number of elements in this subtree, itself included.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Element::count).sum::<usize>()
    }

    /// Depth-first search for the first element matching `predicate`.
    pub fn find(&self, predicate: &impl Fn(&Element<M>) -> bool) -> Option<&Element<M>> {
        if predicate(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(predicate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockMaterial;
    use trellis_style::{style, Dimension};

    #[test]
    fn test_layout_and_visual_split() {
        let element = Element::<MockMaterial>::new(
            ElementKind::Panel,
            style! { "width" => 120, "padding" => 8, "backgroundColor" => "#ffffff" },
        );

        let layout = element.layout_style();
        assert_eq!(layout.width, Some(Dimension::Points(120.0)));
        assert_eq!(layout.padding.all, Some(Dimension::Points(8.0)));

        let visual = element.visual_style();
        assert_eq!(visual.len(), 1);
        assert!(visual.contains_key("backgroundColor"));
    }

    #[test]
    fn test_count_and_find() {
        let leaf = Element::<MockMaterial>::new(ElementKind::Text, StyleMap::new())
            .with_text(Some("hi".to_owned()));
        let tree = Element::new(ElementKind::Container, StyleMap::new()).with_children(vec![
            Element::new(ElementKind::Panel, StyleMap::new()).with_children(vec![leaf]),
        ]);

        assert_eq!(tree.count(), 3);
        let text = tree.find(&|e| e.kind == ElementKind::Text).unwrap();
        assert_eq!(text.text.as_deref(), Some("hi"));
    }
}
