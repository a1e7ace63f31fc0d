//! Digitizing session: routes pointer events and commands through the
//! resolver and keeps the point history in step.
//!
//! The session never talks to a canvas. Each pointer event returns the
//! constrained point and whether the host should treat it as the user's
//! real input.

use crate::align::align_to_segment;
use crate::capabilities::ConstraintCapabilities;
use crate::config::SessionConfig;
use crate::constraints::{AlignMode, ConstraintState};
use crate::history::PointHistory;
use crate::input::{Command, MouseButton, PointerEvent};
use crate::resolver::Resolver;
use crate::snap::{SnapResult, SnapSource};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// What the session produced for one pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionOutput {
    /// The constrained point.
    pub point: Point,
    /// Deliver `point` to the host's input pipeline in place of the raw
    /// event. False in construction mode and while choosing a segment for
    /// parallel/perpendicular alignment.
    pub forward: bool,
    /// The point was committed as a vertex.
    pub committed: bool,
    /// Capabilities changed, so a UI should refresh its controls.
    pub capabilities_changed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Move,
    Press,
    Release,
}

/// State of one digitizing interaction, from tool activation until the
/// geometry is finished or cancelled.
#[derive(Debug, Clone, Default)]
pub struct DigitizingSession {
    history: PointHistory,
    constraints: ConstraintState,
    capabilities: ConstraintCapabilities,
    resolver: Resolver,
    config: SessionConfig,
}

impl DigitizingSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            history: PointHistory::new(),
            constraints: ConstraintState::new(),
            capabilities: ConstraintCapabilities::default(),
            resolver: Resolver::new(config.angle_epsilon_deg),
            config,
        }
    }

    pub fn history(&self) -> &PointHistory {
        &self.history
    }

    pub fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }

    /// Mutable access for a UI syncing its fields into the session.
    pub fn constraints_mut(&mut self) -> &mut ConstraintState {
        &mut self.constraints
    }

    pub fn capabilities(&self) -> ConstraintCapabilities {
        self.capabilities
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Handle a pointer event with the snap the host found at its position.
    ///
    /// Returns `None` for events the session does not consume (middle
    /// button, right press). A right release cancels the session.
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        snap: Option<SnapResult>,
    ) -> Option<SessionOutput> {
        match event {
            PointerEvent::Move { position } => Some(self.track(Phase::Move, position, snap)),
            PointerEvent::Down { position, button: MouseButton::Left } => {
                Some(self.track(Phase::Press, position, snap))
            }
            PointerEvent::Up { position, button: MouseButton::Left } => {
                Some(self.track(Phase::Release, position, snap))
            }
            PointerEvent::Up { button: MouseButton::Right, .. } => {
                self.cancel();
                None
            }
            _ => None,
        }
    }

    /// Like [`handle_pointer`](Self::handle_pointer), querying `source` for the snap.
    pub fn handle_pointer_with<S: SnapSource + ?Sized>(
        &mut self,
        event: PointerEvent,
        source: &S,
    ) -> Option<SessionOutput> {
        let snap = source.snap(event.position());
        self.handle_pointer(event, snap)
    }

    fn track(&mut self, phase: Phase, position: Point, snap: Option<SnapResult>) -> SessionOutput {
        self.history.set_snap(snap);
        let start = snap.map(|s| s.point()).unwrap_or(position);
        let segment = self.history.snap_segment().copied();

        let point = self
            .resolver
            .resolve(start, &self.history, &mut self.constraints, segment.as_ref());
        self.history.update_current(point);
        let mut capabilities_changed = self.sync_capabilities();

        if self.constraints.align.is_active() {
            match phase {
                Phase::Press => {
                    align_to_segment(&self.history, &mut self.constraints, segment.as_ref());
                }
                Phase::Release if segment.is_some() => self.constraints.set_align(AlignMode::None),
                _ => {}
            }
            return SessionOutput {
                point,
                forward: false,
                committed: false,
                capabilities_changed,
            };
        }

        let forward = !self.constraints.construction;
        let committed = phase == Phase::Release;
        if committed {
            if self.config.unlock_after_commit {
                self.constraints.unlock_all();
            }
            self.history.commit();
            capabilities_changed |= self.sync_capabilities();
            log::debug!("Committed vertex {:?} ({} points)", point, self.history.len());
        }

        SessionOutput {
            point,
            forward,
            committed,
            capabilities_changed,
        }
    }

    /// Run a keyboard command. Returns `false` for commands the host UI
    /// must handle itself.
    pub fn execute(&mut self, command: Command) -> bool {
        match command {
            Command::ToggleLock(axis) => self.constraints.toggle_lock(axis),
            Command::ToggleRelative(axis) => self.constraints.toggle_relative(axis),
            Command::FocusField(_) => return false,
            Command::ToggleConstruction => {
                self.constraints.construction = !self.constraints.construction;
                log::debug!("Construction mode: {}", self.constraints.construction);
            }
            Command::CycleAlign => self.constraints.cycle_align(),
            Command::UnlockAll => self.constraints.unlock_all(),
            Command::RemoveLastPoint => self.remove_last_point(),
            Command::Cancel => self.cancel(),
        }
        true
    }

    /// Drop the last committed vertex.
    pub fn remove_last_point(&mut self) {
        if self.history.remove_last_point() {
            self.sync_capabilities();
            log::debug!("Removed last vertex ({} points left)", self.history.len());
        }
    }

    /// Abandon the geometry being digitized.
    pub fn cancel(&mut self) {
        self.history.clear();
        self.constraints.unlock_all();
        self.sync_capabilities();
        log::debug!("Digitizing cancelled");
    }

    fn sync_capabilities(&mut self) -> bool {
        let changed = self.capabilities.update(self.history.len());
        if changed {
            log::debug!("Capabilities now {:?}", self.capabilities);
        }
        changed
    }
}
