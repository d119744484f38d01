//! View tree handed to the host renderer.
//!
//! ```text
//! root                  pass-through attrs, root class
//! ├─ content            clamped at `max_height`, clips its child
//! │  └─ inner           measurement target, never clamped
//! └─ control            toggle, only while overflowing
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

use crate::config::{InlineStyle, SpoilerConfig, StyleSlot};

#[derive(Debug, Clone, PartialEq)]
pub struct SpoilerView<L> {
    pub root: RootNode,
    pub content: ContentNode,
    pub inner: InnerNode,
    pub control: Option<ControlNode<L>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootNode {
    pub id: String,
    pub class_names: Vec<String>,
    pub style: InlineStyle,
    pub attrs: BTreeMap<String, String>,
    /// Styling layer should skip its default styles.
    pub unstyled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentNode {
    pub id: String,
    pub class_names: Vec<String>,
    pub style: InlineStyle,
    /// `None` means unbounded.
    pub max_height: Option<f32>,
    /// Zero means no animation.
    pub transition_duration: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InnerNode {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControlNode<L> {
    pub id: String,
    pub class_names: Vec<String>,
    pub style: InlineStyle,
    pub label: L,
    pub focusable: bool,
    pub clickable: bool,
}

/// Classes for `slot`: the slot override first, then `extra`.
pub(crate) fn slot_classes<L>(
    config: &SpoilerConfig<L>,
    slot: StyleSlot,
    extra: Option<&str>,
) -> Vec<String> {
    config
        .styles
        .class_name(slot)
        .into_iter()
        .chain(extra)
        .map(str::to_string)
        .collect()
}

impl<L> SpoilerView<L> {
    pub fn has_control(&self) -> bool {
        self.control.is_some()
    }

    /// Find a node's class list by slot.
    pub fn class_names(&self, slot: StyleSlot) -> &[String] {
        match slot {
            StyleSlot::Root => &self.root.class_names,
            StyleSlot::Content => &self.content.class_names,
            StyleSlot::Control => self
                .control
                .as_ref()
                .map(|control| control.class_names.as_slice())
                .unwrap_or(&[]),
        }
    }
}
