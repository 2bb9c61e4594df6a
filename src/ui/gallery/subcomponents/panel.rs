// SPDX-License-Identifier: MPL-2.0
//! Reveal panel sub-component: continuous drag offset with two snap anchors.

use crate::app::config::{
    PANEL_MAX_HEIGHT_RATIO, PANEL_OPEN_HEIGHT_RATIO, PANEL_REVEAL_THRESHOLD_PX,
    PANEL_SNAP_THRESHOLD_PX,
};
use crate::ui::state::DragSession;

/// Committed rest position of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    Closed,
    Open,
}

impl Anchor {
    /// Anchor a released drag settles into.
    #[must_use]
    pub fn snap(offset: f32) -> Self {
        if offset < PANEL_SNAP_THRESHOLD_PX {
            Anchor::Closed
        } else {
            Anchor::Open
        }
    }

    /// Resting offset of this anchor for the given viewport height.
    #[must_use]
    pub fn offset(self, viewport_height: f32) -> f32 {
        match self {
            Anchor::Closed => 0.0,
            Anchor::Open => open_offset(viewport_height),
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Anchor::Closed => Anchor::Open,
            Anchor::Open => Anchor::Closed,
        }
    }
}

/// Largest offset a drag may reach. Recomputed on every call.
#[must_use]
pub fn max_offset(viewport_height: f32) -> f32 {
    (PANEL_MAX_HEIGHT_RATIO * viewport_height).max(0.0)
}

/// Offset of the open anchor.
#[must_use]
pub fn open_offset(viewport_height: f32) -> f32 {
    (PANEL_OPEN_HEIGHT_RATIO * viewport_height).max(0.0)
}

/// Panel sub-component state.
///
/// `offset` is the single source of truth for position. The discrete mode is a
/// projection: the anchor chosen by the last release or toggle, overridden to
/// open while a drag has latched the reveal.
#[derive(Debug, Default)]
pub struct State {
    offset: f32,
    settled: Anchor,
    session: Option<DragSession>,
}

/// Messages for the panel sub-component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    BeginDrag { pointer_y: f32 },
    UpdateDrag { pointer_y: f32 },
    EndDrag,
    Toggle,
}

/// Effects produced by panel operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// State changed without settling (drag started or moved).
    None,
    /// The message did not apply in the current state.
    Ignored,
    /// The panel came to rest on an anchor.
    Settled(Anchor),
}

impl State {
    /// Handle a panel message against the current viewport height.
    pub fn handle(&mut self, msg: Message, viewport_height: f32) -> Effect {
        match msg {
            Message::BeginDrag { pointer_y } => {
                if self.begin_drag(pointer_y) {
                    Effect::None
                } else {
                    Effect::Ignored
                }
            }
            Message::UpdateDrag { pointer_y } => {
                if self.update_drag(pointer_y, viewport_height) {
                    Effect::None
                } else {
                    Effect::Ignored
                }
            }
            Message::EndDrag => self
                .end_drag(viewport_height)
                .map_or(Effect::Ignored, Effect::Settled),
            Message::Toggle => self
                .toggle(viewport_height)
                .map_or(Effect::Ignored, Effect::Settled),
        }
    }

    /// Starts a drag from the current offset. An existing session wins.
    pub fn begin_drag(&mut self, pointer_y: f32) -> bool {
        if self.session.is_some() {
            tracing::debug!(pointer_y, "drag already in progress, ignoring start");
            return false;
        }
        if !pointer_y.is_finite() {
            return false;
        }

        self.session = Some(DragSession::begin(pointer_y, self.offset));
        true
    }

    /// Moves the panel with the pointer. No-op without an active session.
    pub fn update_drag(&mut self, pointer_y: f32, viewport_height: f32) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let candidate = session.candidate_offset(pointer_y);
        if !candidate.is_finite() {
            return false;
        }

        self.offset = candidate.clamp(0.0, max_offset(viewport_height));

        if self.settled == Anchor::Closed
            && !session.is_revealed()
            && self.offset > PANEL_REVEAL_THRESHOLD_PX
        {
            session.reveal();
        }
        true
    }

    /// Ends the drag and snaps to an anchor.
    ///
    /// The session, and with it the pointer listeners, is destroyed before the
    /// snap is committed.
    pub fn end_drag(&mut self, viewport_height: f32) -> Option<Anchor> {
        let session = self.session.take()?;
        drop(session);

        let anchor = Anchor::snap(self.offset);
        self.settle(anchor, viewport_height);
        Some(anchor)
    }

    /// Flips between anchors. Ignored while a drag is in progress.
    pub fn toggle(&mut self, viewport_height: f32) -> Option<Anchor> {
        if self.session.is_some() {
            tracing::debug!("toggle during drag ignored");
            return None;
        }

        let anchor = self.settled.toggled();
        self.settle(anchor, viewport_height);
        Some(anchor)
    }

    /// Drops any drag and returns to the closed anchor.
    pub fn reset(&mut self) {
        self.session = None;
        self.offset = 0.0;
        self.settled = Anchor::Closed;
    }

    fn settle(&mut self, anchor: Anchor, viewport_height: f32) {
        self.settled = anchor;
        self.offset = anchor.offset(viewport_height);
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Discrete open/closed projection of the panel position.
    #[must_use]
    pub fn mode(&self) -> Anchor {
        match &self.session {
            Some(session) if session.is_revealed() => Anchor::Open,
            _ => self.settled,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.mode() == Anchor::Open
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Fraction of the maximum height currently revealed, in `[0, 1]`.
    #[must_use]
    pub fn reveal_ratio(&self, viewport_height: f32) -> f32 {
        let max = max_offset(viewport_height);
        if max <= 0.0 {
            0.0
        } else {
            (self.offset / max).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f32 = 800.0;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    fn dragged_to(offset: f32) -> State {
        let mut state = State::default();
        state.begin_drag(0.0);
        state.update_drag(offset, VIEWPORT);
        state
    }

    #[test]
    fn default_panel_is_closed_and_idle() {
        let state = State::default();
        assert_eq!(state.offset(), 0.0);
        assert_eq!(state.mode(), Anchor::Closed);
        assert!(!state.is_dragging());
    }

    #[test]
    fn drag_below_reveal_threshold_stays_closed() {
        let mut state = State::default();
        state.begin_drag(500.0);
        state.update_drag(560.0, VIEWPORT);

        assert_eq!(state.offset(), 60.0);
        assert_eq!(state.mode(), Anchor::Closed);
    }

    #[test]
    fn drag_past_reveal_threshold_opens_before_release() {
        let mut state = State::default();
        state.begin_drag(500.0);
        state.update_drag(560.0, VIEWPORT);
        state.update_drag(620.0, VIEWPORT);

        assert_eq!(state.offset(), 120.0);
        assert_eq!(state.mode(), Anchor::Open);
        assert!(state.is_dragging());

        assert_eq!(state.end_drag(VIEWPORT), Some(Anchor::Closed));
        assert_eq!(state.offset(), 0.0);
        assert_eq!(state.mode(), Anchor::Closed);
    }

    #[test]
    fn reveal_exactly_at_threshold_does_not_open() {
        let state = dragged_to(100.0);
        assert_eq!(state.mode(), Anchor::Closed);
    }

    #[test]
    fn release_at_149_snaps_closed() {
        let mut state = dragged_to(149.0);
        assert_eq!(state.end_drag(VIEWPORT), Some(Anchor::Closed));
        assert_eq!(state.offset(), 0.0);
        assert_eq!(state.mode(), Anchor::Closed);
    }

    #[test]
    fn release_at_150_snaps_open() {
        let mut state = dragged_to(150.0);
        assert_eq!(state.end_drag(VIEWPORT), Some(Anchor::Open));
        assert!(approx_eq(state.offset(), 0.7 * VIEWPORT));
        assert_eq!(state.mode(), Anchor::Open);
    }

    #[test]
    fn offset_is_clamped_to_max_height() {
        let state = dragged_to(10_000.0);
        assert!(approx_eq(state.offset(), 0.85 * VIEWPORT));

        let mut state = State::default();
        state.begin_drag(500.0);
        state.update_drag(-10_000.0, VIEWPORT);
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn max_height_follows_viewport_on_every_update() {
        let mut state = State::default();
        state.begin_drag(0.0);
        state.update_drag(1_000.0, VIEWPORT);
        assert!(approx_eq(state.offset(), 680.0));

        // Window shrank mid-drag
        state.update_drag(1_000.0, 400.0);
        assert!(approx_eq(state.offset(), 340.0));
    }

    #[test]
    fn clamp_holds_for_arbitrary_delta_sequences() {
        let deltas = [
            350.0, -9_000.0, 12.5, 4_000.0, -0.5, 700.0, -701.0, 1e7, -1e7, 3.0,
        ];
        let mut state = State::default();
        state.begin_drag(300.0);
        let mut pointer = 300.0;
        for delta in deltas {
            pointer += delta;
            state.update_drag(pointer, VIEWPORT);
            assert!(state.offset() >= 0.0);
            assert!(state.offset() <= max_offset(VIEWPORT));
        }
    }

    #[test]
    fn non_finite_pointer_is_ignored() {
        let mut state = dragged_to(50.0);
        assert!(!state.update_drag(f32::NAN, VIEWPORT));
        assert_eq!(state.offset(), 50.0);
    }

    #[test]
    fn second_begin_keeps_existing_session() {
        let mut state = State::default();
        assert!(state.begin_drag(100.0));
        assert!(!state.begin_drag(400.0));

        // Delta still measured from the first start position
        state.update_drag(160.0, VIEWPORT);
        assert_eq!(state.offset(), 60.0);
    }

    #[test]
    fn update_after_end_is_a_no_op() {
        let mut state = dragged_to(120.0);
        state.end_drag(VIEWPORT);

        assert!(!state.update_drag(700.0, VIEWPORT));
        assert_eq!(state.offset(), 0.0);
        assert_eq!(state.mode(), Anchor::Closed);
        assert!(!state.is_dragging());
    }

    #[test]
    fn end_without_session_is_ignored() {
        let mut state = State::default();
        assert_eq!(state.end_drag(VIEWPORT), None);
        assert_eq!(state.handle(Message::EndDrag, VIEWPORT), Effect::Ignored);
    }

    #[test]
    fn toggle_twice_restores_mode() {
        let mut state = State::default();
        assert_eq!(state.toggle(VIEWPORT), Some(Anchor::Open));
        assert!(approx_eq(state.offset(), 560.0));
        assert_eq!(state.toggle(VIEWPORT), Some(Anchor::Closed));
        assert_eq!(state.offset(), 0.0);
        assert_eq!(state.mode(), Anchor::Closed);
    }

    #[test]
    fn toggle_during_drag_is_ignored() {
        let mut state = dragged_to(60.0);
        assert_eq!(state.toggle(VIEWPORT), None);
        assert!(state.is_dragging());
        assert_eq!(state.offset(), 60.0);
    }

    #[test]
    fn drag_from_open_starts_at_open_offset() {
        let mut state = State::default();
        state.toggle(VIEWPORT);
        state.begin_drag(300.0);

        // Pull back up by 500 px: 560 - 500 = 60, below the snap threshold
        state.update_drag(-200.0, VIEWPORT);
        assert!(approx_eq(state.offset(), 60.0));
        assert_eq!(state.mode(), Anchor::Open);

        assert_eq!(state.end_drag(VIEWPORT), Some(Anchor::Closed));
        assert_eq!(state.mode(), Anchor::Closed);
    }

    #[test]
    fn reset_drops_session_and_closes() {
        let mut state = dragged_to(300.0);
        state.reset();
        assert!(!state.is_dragging());
        assert_eq!(state.offset(), 0.0);
        assert_eq!(state.mode(), Anchor::Closed);
    }

    #[test]
    fn handle_reports_settled_anchor() {
        let mut state = State::default();
        assert_eq!(
            state.handle(Message::BeginDrag { pointer_y: 10.0 }, VIEWPORT),
            Effect::None
        );
        assert_eq!(
            state.handle(Message::UpdateDrag { pointer_y: 400.0 }, VIEWPORT),
            Effect::None
        );
        assert_eq!(
            state.handle(Message::EndDrag, VIEWPORT),
            Effect::Settled(Anchor::Open)
        );
        assert_eq!(
            state.handle(Message::Toggle, VIEWPORT),
            Effect::Settled(Anchor::Closed)
        );
    }

    #[test]
    fn reveal_ratio_tracks_offset() {
        let state = dragged_to(340.0);
        assert!(approx_eq(state.reveal_ratio(VIEWPORT), 0.5));
        assert_eq!(State::default().reveal_ratio(0.0), 0.0);
    }
}
