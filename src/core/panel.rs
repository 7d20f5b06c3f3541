/// Visibility of the info panel. `FadingOut` covers the exit transition
/// window between `hide()` and the deferred removal from layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelPhase {
    Hidden,
    Visible,
    FadingOut,
}

/// Panel visibility state machine with a generation counter. Every
/// transition bumps the generation; the deferred hide captures the
/// generation at schedule time and only completes if it still matches when
/// the timer fires, so a `show` during the fade window invalidates it.
#[derive(Clone, Copy, Debug)]
pub struct PanelVisibility {
    phase: PanelPhase,
    generation: u64,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelVisibility {
    pub fn new() -> Self {
        Self {
            phase: PanelPhase::Hidden,
            generation: 0,
        }
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// Enter the visible state, invalidating any pending hide timer.
    pub fn show(&mut self) {
        self.generation += 1;
        self.phase = PanelPhase::Visible;
    }

    /// Start fading out. Returns the token the deferred completion must
    /// present, or `None` if the panel is not currently visible (hidden, or
    /// a fade is already pending).
    pub fn begin_hide(&mut self) -> Option<u64> {
        if self.phase != PanelPhase::Visible {
            return None;
        }
        self.generation += 1;
        self.phase = PanelPhase::FadingOut;
        Some(self.generation)
    }

    /// Complete a fade started by `begin_hide`. Returns `true` only if the
    /// token is still current and the panel is still fading; otherwise the
    /// timer lost a race with a newer `show` and must not hide the panel.
    pub fn finish_hide(&mut self, token: u64) -> bool {
        if self.phase == PanelPhase::FadingOut && self.generation == token {
            self.phase = PanelPhase::Hidden;
            true
        } else {
            false
        }
    }
}
