//! # Trellis Style
//!
//! Theme cascade for in-world 3D interfaces. Every element's appearance is
//! the result of flattening a stack of partial style maps:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       STYLE CASCADE                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  theme → components.<type> → variants.<v>                    │
//! │        → variants.<v>.components.<type> → props              │
//! │        → hovered → active                                    │
//! │                          ↓                                   │
//! │        flat StyleMap → layout keys  │  visual keys           │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use trellis_style::{resolve_style, style, Theme, InteractionState};
//!
//! let theme = Theme::default().merged_with(&style! {
//!     "components" => style! { "text" => style! { "fontSize" => 24 } },
//! });
//! let resolved = resolve_style(
//!     theme.style(),
//!     &style! { "color" => "#ff0000" },
//!     None,
//!     InteractionState::IDLE,
//!     Some("text"),
//! );
//! assert_eq!(resolved.number("fontSize"), Some(24.0));
//! assert_eq!(resolved.str("color"), Some("#ff0000"));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod color;
pub mod error;
pub mod layout;
pub mod loader;
pub mod resolve;
pub mod theme;
pub mod value;

pub use color::Color;
pub use error::{ThemeError, ThemeResult};
pub use layout::{
    is_layout_key, layout_props, strip_layout_props, Align, Dimension, Display, Edges,
    FlexDirection, Justify, LayoutKey, LayoutStyle, Overflow, PositionType, UnknownKeyword, Wrap,
};
pub use loader::ThemeLoader;
pub use resolve::{resolve_style, InteractionState, ResolveRequest};
pub use theme::{default_theme, Theme, ThemeProvider};
pub use value::{MaterialId, StyleMap, StyleValue, TextureId};
