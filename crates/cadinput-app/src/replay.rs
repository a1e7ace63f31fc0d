//! Drive a [`DigitizingSession`] from a script and collect what a host
//! application would have received.

use crate::script::{Script, ScriptEvent};
use cadinput_core::{
    Axis, Command, ConstraintCapabilities, ConstraintState, DigitizingSession, SessionConfig,
    SnapSource,
};
use kurbo::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub axis: Axis,
    pub text: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayReport {
    /// Vertices committed and forwarded to the host, grouped by geometry.
    /// A cancel closes the current group.
    pub geometries: Vec<Vec<Point>>,
    pub field_errors: Vec<FieldError>,
    pub constraints: ConstraintState,
    pub capabilities: ConstraintCapabilities,
}

/// Committed vertices of the geometry being digitized, in history order.
/// Construction vertices are kept so removals line up with the session.
#[derive(Debug, Default)]
struct OpenGeometry {
    vertices: Vec<(Point, bool)>,
}

impl OpenGeometry {
    fn commit(&mut self, point: Point, forwarded: bool) {
        self.vertices.push((point, forwarded));
    }

    fn remove_last(&mut self) {
        self.vertices.pop();
    }

    fn close_into(&mut self, geometries: &mut Vec<Vec<Point>>) {
        let forwarded: Vec<Point> = self
            .vertices
            .drain(..)
            .filter_map(|(point, forwarded)| forwarded.then_some(point))
            .collect();
        if !forwarded.is_empty() {
            geometries.push(forwarded);
        }
    }
}

pub fn replay(script: &Script, config: &SessionConfig) -> ReplayReport {
    let snapper = script.snapper(config.snap_tolerance);
    let mut session = DigitizingSession::new(*config);
    let mut geometries = Vec::new();
    let mut open = OpenGeometry::default();
    let mut field_errors = Vec::new();

    for event in &script.events {
        match event {
            ScriptEvent::Pointer { event, snap } => {
                let snap = (*snap).or_else(|| snapper.snap(event.position()));
                if let Some(output) = session.handle_pointer(*event, snap) {
                    if output.committed {
                        open.commit(output.point, output.forward);
                    }
                } else if session.history().is_empty() {
                    open.close_into(&mut geometries);
                }
            }
            ScriptEvent::Key { key, modifiers } => match Command::from_key(key, *modifiers) {
                Some(command) => {
                    let before = session.history().len();
                    if !session.execute(command) {
                        log::debug!("Key {:?} left to the host: {:?}", key, command);
                    }
                    match command {
                        Command::Cancel => open.close_into(&mut geometries),
                        Command::RemoveLastPoint if session.history().len() < before => {
                            open.remove_last();
                        }
                        _ => {}
                    }
                }
                None => log::warn!("Unbound key {:?}", key),
            },
            ScriptEvent::Field { axis, text } => {
                if let Err(err) = session.constraints_mut().validate_field(*axis, text) {
                    log::warn!("Invalid {:?} field {:?}: {}", axis, text, err);
                    field_errors.push(FieldError {
                        axis: *axis,
                        text: text.clone(),
                        message: err.to_string(),
                    });
                }
            }
            ScriptEvent::Cancel => {
                session.cancel();
                open.close_into(&mut geometries);
            }
        }
    }
    open.close_into(&mut geometries);

    ReplayReport {
        geometries,
        field_errors,
        constraints: session.constraints().clone(),
        capabilities: session.capabilities(),
    }
}
