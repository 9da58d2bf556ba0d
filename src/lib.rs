pub mod config;
pub mod encode;
pub mod models;
pub mod pipeline;
pub mod render;

pub use config::{GeneratorConfig, OUTPUT_SUBDIR};
pub use models::{GeneratedImage, StepSpec, TIMELINE_STEPS, default_steps};
pub use pipeline::{DebugConfig, Generator};
pub use render::{Face, RenderContext, RenderStage};
