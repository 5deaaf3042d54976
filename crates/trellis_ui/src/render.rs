//! Primitive submission.
//!
//! Flattens an element tree into a depth-first list of commands the host
//! turns into meshes, one primitive per element, parents before children.

use crate::element::Element;
use crate::host::ElementKind;

/// One primitive to create or update.
#[derive(Debug)]
pub struct PrimitiveCommand<'a, M> {
    /// Position in the batch.
    pub index: usize,
    /// Index of the parent command, `None` for the root.
    pub parent: Option<usize>,
    /// Nesting depth, the root is 0.
    pub depth: u32,
    /// Depth plus the element's own `z` offset.
    pub z: f32,
    /// Element to draw.
    pub element: &'a Element<M>,
}

/// Host-side primitive constructor.
pub trait PrimitiveHost<M> {
    /// Creates or updates the primitive for `command`.
    fn apply(&mut self, command: &PrimitiveCommand<'_, M>);
}

/// Depth-first commands for one element tree.
#[derive(Debug)]
pub struct PrimitiveBatch<'a, M> {
    commands: Vec<PrimitiveCommand<'a, M>>,
}

impl<'a, M> PrimitiveBatch<'a, M> {
    /// Flattens `root`.
    #[must_use]
    pub fn build(root: &'a Element<M>) -> Self {
        let mut commands = Vec::with_capacity(root.count());
        let mut stack = vec![(root, None, 0_u32)];

        while let Some((element, parent, depth)) = stack.pop() {
            let index = commands.len();
            #[allow(clippy::cast_precision_loss)]
            let z = depth as f32 + element.style.number("z").unwrap_or(0.0);
            commands.push(PrimitiveCommand {
                index,
                parent,
                depth,
                z,
                element,
            });
            // Reversed so the first child is emitted first.
            for child in element.children.iter().rev() {
                stack.push((child, Some(index), depth + 1));
            }
        }

        Self { commands }
    }

    /// All commands, parents before children.
    #[must_use]
    pub fn commands(&self) -> &[PrimitiveCommand<'a, M>] {
        &self.commands
    }

    /// Returns the command count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if the batch is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of commands of one primitive kind.
    #[must_use]
    pub fn count_of(&self, kind: ElementKind) -> usize {
        self.commands
            .iter()
            .filter(|c| c.element.kind == kind)
            .count()
    }

    /// Hands every command to the host in order.
    pub fn submit(&self, host: &mut impl PrimitiveHost<M>) {
        for command in &self.commands {
            host.apply(command);
        }
    }
}
