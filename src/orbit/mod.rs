//! Orbit layout / animation engine.
//!
//! A ring of nodes rotates around a center. Selecting a node parks it,
//! clears a reserved arc around it, and spreads the other nodes over the
//! rest of the circle. Angle and scale are eased toward their targets once
//! per frame.

pub mod config;
pub mod frame;
pub mod input;
pub mod instance;
pub mod scheduler;
pub mod selection;
pub mod smoothing;
pub mod solver;

pub use config::{ConfigError, OrbitConfig, OrbitConfigBuilder};
pub use frame::{Connector, ConnectorTone, NodeSprite, OrbitFrame, PanelView, Point};
pub use input::PointerTracker;
pub use instance::{OrbitInstance, OrbitNode};
pub use scheduler::{FrameScheduler, InstanceId};
pub use selection::{OrbitEvent, SelectionState};
