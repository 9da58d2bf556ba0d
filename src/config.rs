use anyhow::Result;
use image::Rgb;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::models::{StepSpec, default_steps};

/// Output location relative to the project root
pub const OUTPUT_SUBDIR: &str = "public/images/timeline";

/// Every fixed parameter of a generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub width: u32,
    pub height: u32,

    /// Gradient color at the top row
    pub gradient_start: Rgb<u8>,
    /// Gradient color the bottom row approaches
    pub gradient_end: Rgb<u8>,

    pub accent: Rgb<u8>,
    pub shadow: Rgb<u8>,
    pub title_color: Rgb<u8>,

    /// Center of the numeral
    pub numeral_anchor: (i32, i32),
    pub numeral_size: f32,
    pub shadow_offset: (i32, i32),

    /// Center of the whole title block
    pub title_anchor: (i32, i32),
    pub title_size: f32,
    /// Gap in pixels between stacked title lines
    pub line_spacing: i32,

    pub quality: u8,
    pub output_dir: PathBuf,
    pub steps: Vec<StepSpec>,
}

impl GeneratorConfig {
    /// Defaults for a project rooted at `project_root`
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            width: 400,
            height: 300,
            gradient_start: Rgb([15, 23, 42]),
            gradient_end: Rgb([30, 58, 138]),
            accent: Rgb([202, 158, 91]),
            shadow: Rgb([8, 12, 24]),
            title_color: Rgb([255, 255, 255]),
            numeral_anchor: (200, 100),
            numeral_size: 72.0,
            shadow_offset: (2, 2),
            title_anchor: (200, 200),
            title_size: 24.0,
            line_spacing: 6,
            quality: 85,
            output_dir: project_root.as_ref().join(OUTPUT_SUBDIR),
            steps: default_steps(),
        }
    }

    /// Same parameters, different output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Same parameters, different step list
    pub fn with_steps(mut self, steps: Vec<StepSpec>) -> Self {
        self.steps = steps;
        self
    }

    /// Check the invariants the generator relies on
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            anyhow::bail!("Canvas must be non-empty, got {}x{}", self.width, self.height);
        }
        // JPEG frame dimensions are 16-bit
        if self.width > u16::MAX as u32 || self.height > u16::MAX as u32 {
            anyhow::bail!("Canvas {}x{} exceeds JPEG limits", self.width, self.height);
        }
        if !(1..=100).contains(&self.quality) {
            anyhow::bail!("JPEG quality must be in 1..=100, got {}", self.quality);
        }

        let mut seen = HashSet::new();
        for step in &self.steps {
            if step.number.is_empty() {
                anyhow::bail!("Step '{}' has an empty number", step.filename);
            }
            if step.title.is_empty() {
                anyhow::bail!("Step {} has an empty title", step.number);
            }
            if step.filename.is_empty() {
                anyhow::bail!("Step {} has an empty filename", step.number);
            }
            if !seen.insert(step.filename.as_str()) {
                anyhow::bail!("Duplicate output filename: {}", step.filename);
            }
        }

        Ok(())
    }
}
