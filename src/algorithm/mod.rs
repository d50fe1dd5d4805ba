pub mod builder;
pub mod launcher;
pub mod options;

pub use builder::FireflyAlgorithmBuilder;
pub use launcher::{is_monotone, FireflyAlgorithm, FireflyResult};
pub use options::{FireflyOptions, FireflyOptionsBuilder, Goal, LogLevel};
