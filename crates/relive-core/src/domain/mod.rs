//! Domain model (ids, time values, display elements, app state).

pub mod display;
pub mod ids;
pub mod moment;
pub mod state;

pub use self::display::{DEFAULT_HEADING, Element, ElementKind, status_line};
pub use self::ids::{NodeId, TimerId};
pub use self::moment::Moment;
pub use self::state::{AppState, IgnoreReason, Resources, Tick};
