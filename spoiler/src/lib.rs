//! Content clamped to a maximum height, with a "show more / show less"
//! toggle that only appears when the content is taller than the clamp.
//!
//! The crate owns the measurement-and-state logic. Laying out, styling and
//! painting the resulting [`SpoilerView`] is left to the host.

pub mod config;
pub mod control;
pub mod error;
pub mod event;
pub mod layout;
pub mod measure;
pub mod policy;
mod spoiler;
pub mod state;
pub mod text;
pub mod view;

pub use config::{InlineStyle, SpoilerConfig, StyleOverrides, StyleSlot};
pub use control::ControlRef;
pub use error::ConfigError;
pub use event::{Event, Key, SpoilerEvent};
pub use layout::{LayoutResult, Rect};
pub use measure::{ContentKey, HeightMeasurer, LayoutProbe, MeasureTarget};
pub use policy::{RenderInstructions, RenderPolicy, SpoilerPhase};
pub use spoiler::Spoiler;
pub use state::ToggleState;
pub use text::TextProbe;
pub use view::SpoilerView;
