//! End-to-end component tests: theme in, primitives out.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use trellis_style::theme::{COMPONENTS, VARIANTS};
use trellis_style::{style, Color, Dimension, StyleMap, TextureId, ThemeLoader, ThemeProvider};
use trellis_ui::components::progress_bar::display_value;
use trellis_ui::{
    Button, Column, ElementKind, Material, MaterialBindings, PrimitiveBatch, PrimitiveCommand,
    PrimitiveHost, ProgressBar, RenderContext, Text, VARIANT,
};

#[derive(Debug, Clone)]
struct FlatMaterial {
    color: Rc<Cell<Option<[f32; 4]>>>,
    texture: Rc<Cell<Option<TextureId>>>,
    clones: Rc<Cell<u32>>,
}

impl FlatMaterial {
    fn new() -> Self {
        Self {
            color: Rc::default(),
            texture: Rc::default(),
            clones: Rc::default(),
        }
    }
}

impl Material for FlatMaterial {
    fn clone_material(&self) -> Self {
        self.clones.set(self.clones.get() + 1);
        Self {
            color: Rc::new(Cell::new(self.color.get())),
            texture: Rc::new(Cell::new(self.texture.get())),
            clones: Rc::clone(&self.clones),
        }
    }

    fn set_color(&mut self, rgba: [f32; 4]) {
        self.color.set(Some(rgba));
    }

    fn set_texture(&mut self, texture: TextureId) {
        self.texture.set(Some(texture));
    }

    fn color(&self) -> Option<Color> {
        self.color.get().map(Color::from)
    }
}

fn bindings() -> MaterialBindings<FlatMaterial> {
    MaterialBindings {
        panel: Some(FlatMaterial::new()),
        panel_textured: Some(FlatMaterial::new()),
        text: Some(FlatMaterial::new()),
    }
}

#[derive(Default)]
struct SceneHost {
    created: Vec<(ElementKind, u32)>,
}

impl PrimitiveHost<FlatMaterial> for SceneHost {
    fn apply(&mut self, command: &PrimitiveCommand<'_, FlatMaterial>) {
        self.created.push((command.element.kind, command.depth));
    }
}

#[test]
fn test_progress_value_is_clamped() {
    let theme = ThemeProvider::new().provide(None);
    let materials = bindings();
    let ctx = RenderContext::new(&theme, &materials);
    let mut bar = ProgressBar::new();

    for (value, expected) in [(1.5, 100.0), (-0.2, 0.0), (0.4, 40.0)] {
        let element = bar.render(&ctx, &style! { "value" => value, "rounding" => 10 }, Vec::new());
        let fill = &element.children[1];
        let width = match fill.layout_style().width {
            Some(Dimension::Percent(percent)) => percent,
            other => panic!("unexpected width {other:?}"),
        };
        assert!((width - expected).abs() < 1e-4, "value {value} gave {width}%");
        assert_eq!(fill.layout_style().min_width, Some(Dimension::Points(20.0)));
    }

    assert!((display_value(1.5) - 1.0).abs() < f32::EPSILON);
}

#[test]
fn test_materials_cloned_once_per_instance() {
    let theme = ThemeProvider::new().provide(None);
    let materials = bindings();
    let ctx = RenderContext::new(&theme, &materials);
    let mut label = Text::new();

    for color in ["#ff0000", "#00ff00", "#0000ff"] {
        label.render(&ctx, &style! { "color" => color }, Some("HP"));
    }

    let template = materials.text.as_ref().unwrap();
    assert_eq!(template.clones.get(), 1);
    assert_eq!(template.color.get(), None);
}

#[test]
fn test_variant_reaches_descendants() {
    let partial = Arc::new(style! {
        VARIANTS => style! {
            "header" => style! {
                COMPONENTS => style! { "text" => style! { "fontSize" => 48, "color" => "#ffcc00" } },
            },
        },
    });
    let theme = ThemeProvider::new().provide(Some(&partial));
    let materials = bindings();
    let root = RenderContext::new(&theme, &materials);

    let column_props = style! { VARIANT => "header", "gap" => 4 };
    let inner = root.child_context(&column_props);

    let title = Text::new().render(&inner, &StyleMap::new(), Some("Inventory"));
    let outside = Text::new().render(&root, &StyleMap::new(), Some("Gold"));

    assert_eq!(title.style.number("fontSize"), Some(48.0));
    assert_eq!(
        title.material.instance().unwrap().color.get(),
        Color::parse_hex("#ffcc00").map(Color::to_array)
    );
    assert_eq!(outside.style.number("fontSize"), Some(32.0));
}

#[test]
fn test_theme_file_drives_a_hud() {
    let loader = ThemeLoader::new()
        .texture("button", TextureId(10))
        .texture("buttonHover", TextureId(11));
    let partial = loader
        .load_str(
            r##"
            [components.button]
            nineSlice = true
            texture = "@button"
            height = 40

            [components.button.hovered]
            texture = "@buttonHover"

            [components.progressBar]
            rounding = 8
            fgColor = "#33cc33"
            "##,
        )
        .unwrap();
    let theme = ThemeProvider::new().provide(Some(&Arc::new(partial)));
    let materials = bindings();
    let ctx = RenderContext::new(&theme, &materials);

    let label = Text::new().render(&ctx, &StyleMap::new(), Some("Play"));
    let button = Button::new().render(
        &ctx,
        &style! { "width" => 120 },
        trellis_style::InteractionState::HOVERED,
        vec![label],
    );
    let bar = ProgressBar::new().render(&ctx, &style! { "value" => 0.75 }, Vec::new());
    let hud = Column.render(&ctx, &style! { "width" => "100%" }, vec![button, bar]);

    let button = &hud.children[0];
    assert_eq!(button.kind, ElementKind::NineSlice);
    assert_eq!(button.material.instance().unwrap().texture.get(), Some(TextureId(11)));
    assert_eq!(button.layout_style().height, Some(Dimension::Points(40.0)));

    let bar = &hud.children[1];
    assert_eq!(bar.style.number("rounding"), Some(12.0));
    let fill = &bar.children[1];
    assert_eq!(
        fill.material.instance().unwrap().color.get(),
        Color::parse_hex("#33cc33").map(Color::to_array)
    );

    let batch = PrimitiveBatch::build(&hud);
    assert_eq!(batch.len(), hud.count());
    assert_eq!(batch.count_of(ElementKind::Text), 1);

    let mut host = SceneHost::default();
    batch.submit(&mut host);
    let created = host.created;
    assert_eq!(created[0], (ElementKind::Container, 0));
    assert_eq!(created[1], (ElementKind::NineSlice, 1));
    assert_eq!(created[2], (ElementKind::Text, 2));
}

#[test]
fn test_registered_default_variant_styles_plain_text() {
    let partial = ThemeLoader::new()
        .load_str(
            r##"
            [variants.default]
            fontSize = 20

            [variants.default.components.text]
            color = "#00ff00"
            "##,
        )
        .unwrap();
    let theme = ThemeProvider::new().provide(Some(&Arc::new(partial)));
    let materials = bindings();
    let ctx = RenderContext::new(&theme, &materials);

    let label = Text::new().render(&ctx, &StyleMap::new(), Some("Score"));

    assert_eq!(label.style.number("fontSize"), Some(20.0));
    assert_eq!(
        label.material.instance().unwrap().color.get(),
        Color::parse_hex("#00ff00").map(Color::to_array)
    );
}

#[test]
fn test_nine_slice_bar_keeps_minimum_fill() {
    let theme = ThemeProvider::new().provide(None);
    let materials = bindings();
    let ctx = RenderContext::new(&theme, &materials);
    let mut bar = ProgressBar::new();

    for value in [0.0, 0.02, 1.5] {
        let element = bar.render(
            &ctx,
            &style! { "value" => value, "nineSlice" => true, "rounding" => 12 },
            Vec::new(),
        );
        assert_eq!(element.kind, ElementKind::NineSlice);

        let fill = &element.children[1];
        assert_eq!(fill.kind, ElementKind::NineSlice);
        assert_eq!(fill.layout_style().min_width, Some(Dimension::Points(24.0)));
        let overlay_width = element.children[0].layout_style().width;
        assert_eq!(overlay_width, fill.layout_style().width);
    }
}
