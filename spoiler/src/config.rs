//! Spoiler configuration.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Collapsed height used when none is configured.
pub const DEFAULT_MAX_HEIGHT: f32 = 100.0;

/// Reveal transition used when none is configured.
pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(200);

/// Semantic style slots handed to the styling layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleSlot {
    /// Outer container.
    Root,
    /// Height-clamped wrapper around the content.
    Content,
    /// The show/hide toggle.
    Control,
}

/// Inline style declarations, property name to value.
pub type InlineStyle = BTreeMap<String, String>;

/// Per-slot style overrides. Carried to the view untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
    pub class_names: BTreeMap<StyleSlot, String>,
    pub styles: BTreeMap<StyleSlot, InlineStyle>,
    pub unstyled: bool,
}

impl StyleOverrides {
    pub fn class_name(&self, slot: StyleSlot) -> Option<&str> {
        self.class_names.get(&slot).map(String::as_str)
    }

    /// Inline declarations for `slot`, empty when none are set.
    pub fn inline_style(&self, slot: StyleSlot) -> InlineStyle {
        self.styles.get(&slot).cloned().unwrap_or_default()
    }
}

/// Configuration for a [`Spoiler`](crate::Spoiler).
///
/// `L` is whatever the host renders as a label. Both labels are required;
/// everything else has a default.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use spoiler::SpoilerConfig;
///
/// let config = SpoilerConfig::new("Show more", "Hide")
///     .max_height(12.0)
///     .transition_duration(Duration::ZERO);
///
/// assert_eq!(config.show_label, "Show more");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpoilerConfig<L = String> {
    /// Collapsed height, and the threshold above which the toggle appears.
    #[serde(default = "default_max_height")]
    pub max_height: f32,

    /// Toggle label while expanded.
    pub hide_label: L,

    /// Toggle label while collapsed.
    pub show_label: L,

    /// Whether the content starts expanded.
    #[serde(default)]
    pub initial_state: bool,

    /// Advisory reveal duration. Zero turns the animation off.
    /// Serialized as whole milliseconds.
    #[serde(default = "default_transition_duration", with = "duration_ms")]
    pub transition_duration: Duration,

    /// Extra class for the root container.
    #[serde(default)]
    pub class_name: Option<String>,

    #[serde(default)]
    pub styles: StyleOverrides,

    /// Attributes forwarded to the root container as-is.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

fn default_max_height() -> f32 {
    DEFAULT_MAX_HEIGHT
}

fn default_transition_duration() -> Duration {
    DEFAULT_TRANSITION_DURATION
}

impl<L> SpoilerConfig<L> {
    /// Create a config with the given labels and default settings.
    pub fn new(show_label: L, hide_label: L) -> Self {
        Self {
            max_height: DEFAULT_MAX_HEIGHT,
            hide_label,
            show_label,
            initial_state: false,
            transition_duration: DEFAULT_TRANSITION_DURATION,
            class_name: None,
            styles: StyleOverrides::default(),
            attrs: BTreeMap::new(),
        }
    }

    pub fn max_height(mut self, max_height: f32) -> Self {
        self.max_height = max_height;
        self
    }

    /// Start expanded.
    pub fn initial_state(mut self, expanded: bool) -> Self {
        self.initial_state = expanded;
        self
    }

    pub fn transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration = duration;
        self
    }

    /// Disable the reveal animation.
    pub fn no_transition(self) -> Self {
        self.transition_duration(Duration::ZERO)
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set the class for a single style slot.
    pub fn slot_class(mut self, slot: StyleSlot, class_name: impl Into<String>) -> Self {
        self.styles.class_names.insert(slot, class_name.into());
        self
    }

    /// Add an inline style declaration to a single style slot.
    pub fn slot_style(
        mut self,
        slot: StyleSlot,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.styles
            .styles
            .entry(slot)
            .or_default()
            .insert(property.into(), value.into());
        self
    }

    pub fn unstyled(mut self) -> Self {
        self.styles.unstyled = true;
        self
    }

    /// Forward an attribute to the root container.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Check for configuration misuse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_height > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::NonPositiveMaxHeight(self.max_height))
        }
    }
}

impl<L: Default> Default for SpoilerConfig<L> {
    fn default() -> Self {
        Self::new(L::default(), L::default())
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
