use glam::Vec2;

/// Releases within this distance of the press position count as clicks;
/// anything farther is a camera drag and produces no click action.
pub const CLICK_DRAG_THRESHOLD_PX: f32 = 5.0;

/// What a completed pointer gesture resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickAction {
    /// Show the info panel for the marker at this index.
    ShowInfo(usize),
    /// Clicked empty space: dismiss the info panel.
    HideInfo,
    /// Drag, release over the panel, or release without a press: do nothing.
    None,
}

/// Tracks one pointer-down/pointer-up cycle. The press position lives only
/// until the matching release classifies the gesture.
#[derive(Default, Clone, Copy, Debug)]
pub struct GestureTracker {
    press: Option<Vec2>,
}

impl GestureTracker {
    /// Record the gesture start in screen pixels.
    pub fn pointer_down(&mut self, pos: Vec2) {
        self.press = Some(pos);
    }

    /// Classify the release and discard the gesture. `hovered` is the hover
    /// state computed by the last pointer move; it is deliberately not
    /// re-tested here, so it can be one frame stale relative to a camera
    /// still settling under its damping.
    pub fn pointer_up(
        &mut self,
        pos: Vec2,
        over_panel: bool,
        hovered: Option<usize>,
    ) -> ClickAction {
        match self.press.take() {
            Some(start) => classify_release(start, pos, over_panel, hovered),
            None => ClickAction::None,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }
}

pub fn classify_release(
    start: Vec2,
    end: Vec2,
    over_panel: bool,
    hovered: Option<usize>,
) -> ClickAction {
    if start.distance(end) > CLICK_DRAG_THRESHOLD_PX {
        return ClickAction::None;
    }
    if over_panel {
        // The panel handles its own dismissal via its close control.
        return ClickAction::None;
    }
    match hovered {
        Some(index) => ClickAction::ShowInfo(index),
        None => ClickAction::HideInfo,
    }
}
