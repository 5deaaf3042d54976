//! Per-instance material binding.
//!
//! Base materials are templates owned upstream and never touched. Each
//! component instance clones the template the first time it renders and
//! keeps mutating its own copy afterwards, so one element's style can never
//! leak into another's.

use crate::host::Material;
use tracing::debug;

/// Base materials components clone from.
#[derive(Debug, Clone)]
pub struct MaterialBindings<M> {
    /// Flat-colored panels and borders.
    pub panel: Option<M>,
    /// Textured panels (9-slice, images).
    pub panel_textured: Option<M>,
    /// Text.
    pub text: Option<M>,
}

impl<M> Default for MaterialBindings<M> {
    fn default() -> Self {
        Self {
            panel: None,
            panel_textured: None,
            text: None,
        }
    }
}

/// A component instance's private material, created lazily.
#[derive(Debug)]
pub struct MaterialSlot<M> {
    instance: Option<M>,
}

impl<M> Default for MaterialSlot<M> {
    fn default() -> Self {
        Self { instance: None }
    }
}

impl<M: Material> MaterialSlot<M> {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { instance: None }
    }

    /// Returns the instance material, cloning `template` on first use.
    ///
    /// Returns `None` while no template is available; a later call with a
    /// template still binds.
    pub fn get_or_clone(&mut self, template: Option<&M>) -> Option<&mut M> {
        if self.instance.is_none() {
            let template = template?;
            debug!(template = ?template, "cloning base material for component instance");
            self.instance = Some(template.clone_material());
        }
        self.instance.as_mut()
    }

    /// The instance material, if already cloned.
    #[must_use]
    pub fn get(&self) -> Option<&M> {
        self.instance.as_ref()
    }

    /// Returns true once the template has been cloned.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.instance.is_some()
    }
}
