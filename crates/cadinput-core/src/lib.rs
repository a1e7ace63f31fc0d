//! CadInput Core Library
//!
//! Coordinate constraints for interactive digitizing: lock X, Y, distance or
//! angle while placing vertices, and resolve each cursor position against
//! those locks and whatever geometry the cursor snapped to.

pub mod align;
pub mod capabilities;
pub mod config;
pub mod constraints;
pub mod expr;
pub mod history;
pub mod input;
pub mod intersection;
pub mod resolver;
pub mod session;
pub mod snap;

pub use align::align_to_segment;
pub use capabilities::ConstraintCapabilities;
pub use config::SessionConfig;
pub use constraints::{AlignMode, Axis, AxisConstraint, ConstraintState};
pub use expr::{ExprError, ExprResult, evaluate};
pub use history::PointHistory;
pub use input::{Command, Modifiers, MouseButton, PointerEvent};
pub use resolver::{Resolver, resolve};
pub use session::{DigitizingSession, SessionOutput};
pub use snap::{GeometrySnapper, SnapResult, SnapSegment, SnapSource};
