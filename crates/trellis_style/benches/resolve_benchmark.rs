//! Benchmark for style resolution.
//!
//! Every visual element resolves its style once per render pass.
//!
//! Run with: cargo bench --package trellis_style --bench resolve_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use trellis_style::{
    default_theme, resolve_style, strip_layout_props, style, InteractionState, StyleMap, Theme,
};

fn create_test_theme() -> Theme {
    default_theme().merged_with(&style! {
        "fontSize" => 24,
        "components" => style! {
            "panel9Slice" => style! { "borderSize" => 16, "borderTextureSize" => 0.25, "padding" => 16 },
            "button" => style! {
                "height" => 40,
                "padding" => 8,
                "nineSlice" => true,
                "hovered" => style! { "backgroundColor" => "#1b9ed9" },
                "text" => style! { "fontSize" => 16 },
            },
        },
        "variants" => style! {
            "header" => style! {
                "components" => style! { "text" => style! { "color" => "#ffffff" } },
            },
            "secondary" => style! {
                "components" => style! { "button" => style! { "backgroundColor" => "#ff7b00" } },
            },
        },
    })
}

fn benchmark_single_resolve(c: &mut Criterion) {
    let theme = create_test_theme();
    let props = style! { "width" => "100%", "height" => 64 };

    c.bench_function("resolve_button_pressed_variant", |b| {
        b.iter(|| {
            black_box(resolve_style(
                black_box(theme.style()),
                black_box(&props),
                Some("secondary"),
                InteractionState::PRESSED,
                Some("button"),
            ))
        });
    });
}

fn benchmark_render_pass(c: &mut Criterion) {
    let theme = create_test_theme();
    let props: Vec<StyleMap> = (0..1_000)
        .map(|i| style! { "width" => i, "color" => "#ff0000" })
        .collect();

    let mut group = c.benchmark_group("render_pass");
    group.throughput(Throughput::Elements(props.len() as u64));
    group.bench_function("resolve_and_strip_1000_elements", |b| {
        b.iter(|| {
            for element in &props {
                let resolved = resolve_style(
                    theme.style(),
                    element,
                    Some("header"),
                    InteractionState::IDLE,
                    Some("text"),
                );
                black_box(strip_layout_props(Some(&resolved)));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, benchmark_single_resolve, benchmark_render_pass);
criterion_main!(benches);
