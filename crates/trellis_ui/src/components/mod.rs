//! Visual components.
//!
//! Each component is a persistent instance struct owned by the host's
//! element tree. `render` resolves the instance's style once and returns
//! the element to draw; instance structs keep per-instance materials alive
//! across renders.

pub mod button;
pub mod container;
pub mod image;
pub mod panel;
pub mod panel_9slice;
pub mod progress_bar;
pub mod text;

pub use button::Button;
pub use container::{Column, Container, Row};
pub use image::Image;
pub use panel::Panel;
pub use panel_9slice::Panel9Slice;
pub use progress_bar::ProgressBar;
pub use text::Text;
