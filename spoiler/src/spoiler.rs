use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::{SpoilerConfig, StyleSlot};
use crate::control::ControlRef;
use crate::event::{Event, SpoilerEvent};
use crate::measure::{ContentKey, HeightMeasurer, LayoutProbe, MeasureTarget};
use crate::policy::{RenderPolicy, SpoilerPhase};
use crate::state::ToggleState;
use crate::view::{slot_classes, ContentNode, ControlNode, InnerNode, RootNode, SpoilerView};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Content clamped to a maximum height, with a show/hide toggle that only
/// appears when the content is actually taller than the clamp.
///
/// The host drives it in three steps per frame:
///
/// 1. [`render`](Self::render) the view tree and lay it out, giving the inner
///    node (the [`measure_target`](Self::measure_target)) unconstrained height.
/// 2. Call [`commit`](Self::commit) with the content's identity and the
///    committed layout, before painting.
/// 3. Route input through [`handle_event`](Self::handle_event).
///
/// # Example
///
/// ```
/// use spoiler::{ContentKey, LayoutResult, Rect, Spoiler, SpoilerConfig};
///
/// let mut spoiler = Spoiler::with_id("intro", SpoilerConfig::new("Show more", "Hide"));
///
/// let mut layout = LayoutResult::new();
/// layout.insert("intro-inner".into(), Rect::from_size(80.0, 300.0));
/// spoiler.commit(ContentKey(1), &layout);
///
/// let view = spoiler.render();
/// assert_eq!(view.content.max_height, Some(100.0));
/// assert_eq!(view.control.map(|c| c.label), Some("Show more"));
/// ```
#[derive(Debug)]
pub struct Spoiler<L = String> {
    id: String,
    config: SpoilerConfig<L>,
    measurer: HeightMeasurer,
    state: ToggleState,
    control_ref: Option<ControlRef>,
}

impl<L> Spoiler<L> {
    pub fn new(config: SpoilerConfig<L>) -> Self {
        Self::with_id(generate_id("spoiler"), config)
    }

    /// Create a spoiler with an explicit root element id. Child ids are
    /// derived from it (`{id}-content`, `{id}-inner`, `{id}-control`).
    pub fn with_id(id: impl Into<String>, config: SpoilerConfig<L>) -> Self {
        let id = id.into();
        warn_on_misuse(&id, &config);

        let measurer = HeightMeasurer::new(MeasureTarget::new(format!("{id}-inner")));
        let state = ToggleState::new(config.initial_state);

        Self {
            id,
            config,
            measurer,
            state,
            control_ref: None,
        }
    }

    /// Expose the toggle control through `control_ref`.
    pub fn control_ref(mut self, control_ref: ControlRef) -> Self {
        self.control_ref = Some(control_ref);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &SpoilerConfig<L> {
        &self.config
    }

    /// Replace the configuration on re-render.
    ///
    /// The expanded flag survives; `initial_state` only matters at
    /// construction. A changed `max_height` is picked up by the next
    /// [`commit`](Self::commit).
    pub fn set_config(&mut self, config: SpoilerConfig<L>) {
        warn_on_misuse(&self.id, &config);
        self.config = config;
    }

    /// Set only the threshold.
    pub fn set_max_height(&mut self, max_height: f32) {
        self.config.max_height = max_height;
        warn_on_misuse(&self.id, &self.config);
    }

    /// Handle naming the unclamped wrapper the host must measure.
    pub fn measure_target(&self) -> &MeasureTarget {
        self.measurer.target()
    }

    pub fn content_id(&self) -> String {
        format!("{}-content", self.id)
    }

    pub fn control_id(&self) -> String {
        format!("{}-control", self.id)
    }

    /// Content-or-threshold-changed hook.
    ///
    /// Call after every layout commit and before painting. Remeasures only
    /// when `key` or `max_height` differ from the last successful reading.
    /// Returns true when the toggle's visibility changed.
    pub fn commit<P: LayoutProbe + ?Sized>(&mut self, key: ContentKey, probe: &P) -> bool {
        let max_height = self.config.max_height;
        match self.measurer.remeasure(key, max_height, probe) {
            Some(reading) => self.state.on_measurement(reading, max_height),
            None => false,
        }
    }

    /// Flip between collapsed and expanded.
    pub fn toggle(&mut self) -> SpoilerEvent {
        let event = self.state.toggle();
        log::debug!("[spoiler] {} {:?}", self.id, event);
        event
    }

    /// Toggle on a click on the control, or an activating key while the
    /// control has focus. Ignored while the control is not shown.
    pub fn handle_event(&mut self, event: &Event) -> Option<SpoilerEvent> {
        if !self.state.is_overflowing() {
            return None;
        }

        let control_id = self.control_id();
        let hit = match event {
            Event::Click { target } => target.as_deref() == Some(control_id.as_str()),
            Event::Key { target, key } => {
                key.activates() && target.as_deref() == Some(control_id.as_str())
            }
        };

        if hit {
            Some(self.toggle())
        } else {
            None
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    pub fn is_overflowing(&self) -> bool {
        self.state.is_overflowing()
    }

    /// Whether a real measurement has arrived. Hosts that prefer not to
    /// show the seeded initial state can hold off painting until then.
    pub fn is_measured(&self) -> bool {
        self.state.is_measured()
    }

    /// Last valid natural height of the content.
    pub fn measured_height(&self) -> Option<f32> {
        self.measurer.height()
    }

    pub fn phase(&self) -> SpoilerPhase {
        SpoilerPhase::from_state(&self.state)
    }

    pub fn policy(&self) -> RenderPolicy<'_, L> {
        RenderPolicy::new(&self.config, &self.state, self.measurer.height())
    }
}

impl<L: Clone> Spoiler<L> {
    /// Build the view tree for the current state and update the control ref.
    pub fn render(&self) -> SpoilerView<L> {
        let policy = self.policy();
        let instructions = policy.instructions();

        let control = if instructions.show_toggle {
            Some(ControlNode {
                id: self.control_id(),
                class_names: slot_classes(&self.config, StyleSlot::Control, None),
                style: self.config.styles.inline_style(StyleSlot::Control),
                label: instructions.toggle_label.clone(),
                focusable: true,
                clickable: true,
            })
        } else {
            None
        };

        if let Some(control_ref) = &self.control_ref {
            match &control {
                Some(node) => control_ref.attach(&node.id),
                None => control_ref.detach(),
            }
        }

        SpoilerView {
            root: RootNode {
                id: self.id.clone(),
                class_names: slot_classes(
                    &self.config,
                    StyleSlot::Root,
                    self.config.class_name.as_deref(),
                ),
                style: self.config.styles.inline_style(StyleSlot::Root),
                attrs: self.config.attrs.clone(),
                unstyled: self.config.styles.unstyled,
            },
            content: ContentNode {
                id: self.content_id(),
                class_names: slot_classes(&self.config, StyleSlot::Content, None),
                style: self.config.styles.inline_style(StyleSlot::Content),
                max_height: instructions.applied_max_height,
                transition_duration: instructions.transition_duration,
            },
            inner: InnerNode {
                id: self.measurer.target().id().to_string(),
            },
            control,
        }
    }
}

fn warn_on_misuse<L>(id: &str, config: &SpoilerConfig<L>) {
    if let Err(err) = config.validate() {
        log::warn!("[spoiler] {}: {}; all content will count as overflowing", id, err);
    }
}
