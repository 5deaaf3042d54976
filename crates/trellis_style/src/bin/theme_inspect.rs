//! # Theme Inspector
//!
//! Command-line tool that loads a theme file, merges it over the default
//! theme and prints the style one element would resolve to.

use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use trellis_style::theme::DEFAULT_VARIANT;
use trellis_style::{
    resolve_style, strip_layout_props, InteractionState, LayoutStyle, StyleMap, ThemeLoader,
    ThemeProvider, ThemeResult,
};

fn usage() {
    println!("Usage: theme_inspect <theme.toml> [options]");
    println!();
    println!("Options:");
    println!("  --component <key>      Component type key (text, button, panel9Slice, ...)");
    println!("  --variant <name>       Variant to select (default: {DEFAULT_VARIANT})");
    println!("  --hovered              Apply the hovered overlay");
    println!("  --active               Apply the active overlay");
    println!("  --visual-only          Drop layout properties from the output");
    println!("  --layout               Print the typed layout properties instead");
    println!("  --texture <name=id>    Name a texture for @name references (repeatable)");
    println!("  --material <name=id>   Name a material for @name references (repeatable)");
}

fn option_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    option_values(args, flag).first().copied()
}

fn option_values<'a>(args: &'a [String], flag: &str) -> Vec<&'a str> {
    args.windows(2)
        .filter(|pair| pair[0] == flag)
        .map(|pair| pair[1].as_str())
        .collect()
}

fn asset_loader(args: &[String]) -> ThemeResult<ThemeLoader> {
    let mut loader = ThemeLoader::new();
    for binding in option_values(args, "--texture") {
        loader = loader.texture_binding(binding)?;
    }
    for binding in option_values(args, "--material") {
        loader = loader.material_binding(binding)?;
    }
    Ok(loader)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(theme_path) = args.get(1).filter(|a| !a.starts_with("--")) else {
        usage();
        return ExitCode::FAILURE;
    };

    let component = option_value(&args, "--component");
    let variant = option_value(&args, "--variant").unwrap_or(DEFAULT_VARIANT);
    let has_flag = |flag: &str| args.iter().any(|a| a == flag);
    let state = InteractionState {
        hovered: has_flag("--hovered"),
        active: has_flag("--active"),
    };

    let loaded = asset_loader(&args)
        .and_then(|loader| Ok((loader.load_file(theme_path)?, loader)));
    let (partial, loader) = match loaded {
        Ok((partial, loader)) => (std::sync::Arc::new(partial), loader),
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let theme = ThemeProvider::new().provide(Some(&partial));
    let mut resolved = resolve_style(theme.style(), &StyleMap::new(), Some(variant), state, component);
    if has_flag("--visual-only") {
        resolved = strip_layout_props(Some(&resolved)).unwrap_or_default();
    }

    let printed = if has_flag("--layout") {
        toml::to_string(&LayoutStyle::from_style(&resolved))
    } else {
        toml::to_string(&loader.export(&resolved))
    };
    match printed {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: could not print resolved style: {e}");
            ExitCode::FAILURE
        }
    }
}
