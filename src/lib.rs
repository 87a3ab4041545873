// Library surface for the binary and integration tests.
pub mod config;
pub mod corpus;
pub mod error;
pub mod frequency;
pub mod letters;
pub mod pipeline;
pub mod plural;
pub mod ranking;
pub mod scoring;

pub use config::{ConfigStore, FileConfigStore, RankConfig};
pub use error::{RankError, RankResult};
pub use pipeline::{run, RunSummary};
pub use scoring::{Weights, WordScore};
