//! # Swarm
//!
//! The swarm is the fixed-size population of fireflies a run mutates in place,
//! together with the rule that moves a dimmer firefly toward a brighter one.
pub mod firefly;
pub mod movement;
pub mod population;

pub use firefly::Firefly;
pub use movement::update_position;
pub use population::Population;
