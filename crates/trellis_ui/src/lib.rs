//! # Trellis UI
//!
//! Themed components for interfaces that live inside a 3D scene.
//!
//! A host engine owns the scene graph, the meshes and the materials. This
//! crate sits between the host's element tree and its primitives:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ host tree node ──▶ component.render(ctx, props, children)    │
//! │                        │                                     │
//! │                        ├─ ctx.resolve()   (theme cascade)    │
//! │                        ├─ MaterialSlot    (clone once)       │
//! │                        ▼                                     │
//! │                     Element ──▶ PrimitiveBatch ──▶ host      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Components never lay anything out: layout keys pass through to the
//! host's layout engine untouched.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod components;
pub mod context;
pub mod element;
pub mod host;
pub mod material;
pub mod render;

pub use components::{Button, Column, Container, Image, Panel, Panel9Slice, ProgressBar, Row, Text};
pub use context::{RenderContext, VARIANT};
pub use element::{Element, MaterialSource};
pub use host::{ElementKind, Material};
pub use material::{MaterialBindings, MaterialSlot};
pub use render::{PrimitiveBatch, PrimitiveCommand, PrimitiveHost};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::host::Material;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use trellis_style::{Color, TextureId};

    #[derive(Debug, Default, Clone, Copy)]
    struct GpuState {
        color: Option<[f32; 4]>,
        texture: Option<TextureId>,
    }

    /// Material that records what was done to it.
    #[derive(Debug, Clone)]
    pub(crate) struct MockMaterial {
        name: &'static str,
        state: Rc<RefCell<GpuState>>,
        clones: Rc<Cell<u32>>,
    }

    impl MockMaterial {
        pub(crate) fn new(name: &'static str) -> Self {
            Self {
                name,
                state: Rc::default(),
                clones: Rc::default(),
            }
        }

        pub(crate) fn colored(mut self, color: Color) -> Self {
            self.set_color(color.to_array());
            self
        }

        /// Clones made from this template (shared by all its copies).
        pub(crate) fn clone_count(&self) -> u32 {
            self.clones.get()
        }

        pub(crate) fn rgba(&self) -> Option<[f32; 4]> {
            self.state.borrow().color
        }

        pub(crate) fn texture(&self) -> Option<TextureId> {
            self.state.borrow().texture
        }
    }

    impl Material for MockMaterial {
        fn clone_material(&self) -> Self {
            self.clones.set(self.clones.get() + 1);
            Self {
                name: self.name,
                state: Rc::new(RefCell::new(*self.state.borrow())),
                clones: Rc::clone(&self.clones),
            }
        }

        fn set_color(&mut self, rgba: [f32; 4]) {
            self.state.borrow_mut().color = Some(rgba);
        }

        fn set_texture(&mut self, texture: TextureId) {
            self.state.borrow_mut().texture = Some(texture);
        }

        fn color(&self) -> Option<Color> {
            self.rgba().map(Color::from)
        }
    }
}
