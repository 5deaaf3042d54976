//! Layout-only containers.

use crate::context::RenderContext;
use crate::element::Element;
use crate::host::ElementKind;
use trellis_style::{layout_props, FlexDirection, InteractionState, StyleMap};

/// Component key of containers in `components`.
pub const CONTAINER_KEY: &str = "container";

/// A layout node with no visuals of its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct Container;

impl Container {
    /// Renders the container. Only layout keys reach the element.
    #[must_use]
    pub fn render<M>(
        &mut self,
        ctx: &RenderContext<'_, M>,
        props: &StyleMap,
        children: Vec<Element<M>>,
    ) -> Element<M> {
        let resolved = ctx.resolve(props, CONTAINER_KEY, InteractionState::IDLE);
        Element::new(ElementKind::Container, layout_props(&resolved)).with_children(children)
    }
}

/// A container laid out left to right.
#[derive(Debug, Default, Clone, Copy)]
pub struct Row;

impl Row {
    /// Renders the row. `flexDirection` is always `row`.
    #[must_use]
    pub fn render<M>(
        &mut self,
        ctx: &RenderContext<'_, M>,
        props: &StyleMap,
        children: Vec<Element<M>>,
    ) -> Element<M> {
        directed(ctx, props, children, FlexDirection::Row)
    }
}

/// A container laid out top to bottom.
#[derive(Debug, Default, Clone, Copy)]
pub struct Column;

impl Column {
    /// Renders the column. `flexDirection` is always `column`.
    #[must_use]
    pub fn render<M>(
        &mut self,
        ctx: &RenderContext<'_, M>,
        props: &StyleMap,
        children: Vec<Element<M>>,
    ) -> Element<M> {
        directed(ctx, props, children, FlexDirection::Column)
    }
}

fn directed<M>(
    ctx: &RenderContext<'_, M>,
    props: &StyleMap,
    children: Vec<Element<M>>,
    direction: FlexDirection,
) -> Element<M> {
    let mut element = Container.render(ctx, props, children);
    element.style.set("flexDirection", direction);
    element
}
