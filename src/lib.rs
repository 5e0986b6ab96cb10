pub mod catalog;
pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod matching;
pub mod output;
pub mod profile;
pub mod registry;

pub use detect::{DetectionResult, Detector};
pub use error::{Error, Result};
pub use profile::{Profile, build_default_registry};
pub use registry::Registry;
