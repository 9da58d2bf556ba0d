mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from timeline_placeholders for tests
#[allow(unused_imports)]
pub use timeline_placeholders::{
    Face, GeneratedImage, Generator, GeneratorConfig, StepSpec, default_steps,
};
