use anyhow::Result;
use image::RgbImage;
use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::encode::{encode_progressive_jpeg, write_atomically};
use crate::models::{GeneratedImage, StepSpec};
use crate::render::{Face, RenderContext, RenderStage, default_stages};

/// Debug configuration for a generation run
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Root directory for per-stage snapshots
    pub output_dir: PathBuf,
}

/// Batch generator: renders and writes one placeholder per configured step
pub struct Generator {
    config: GeneratorConfig,
    face: Face,
    stages: Vec<Box<dyn RenderStage>>,
    verbose: bool,
    debug: Option<DebugConfig>,
}

impl Generator {
    /// Create a generator with the standard render stages
    pub fn new(config: GeneratorConfig, face: Face) -> Self {
        let stages = default_stages(&config);
        Self {
            config,
            face,
            stages,
            verbose: false,
            debug: None,
        }
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Enable debug mode with output directory
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, output_dir: PathBuf) -> Result<Self> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(anyhow::anyhow!(
                    "Debug directory is not empty: {}",
                    output_dir.display()
                ));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        self.debug = Some(DebugConfig { output_dir });

        Ok(self)
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Render one step through every stage, in memory
    pub fn render(&self, step: &StepSpec) -> Result<RgbImage> {
        let context = RenderContext {
            face: &self.face,
            verbose: self.verbose,
        };
        let mut canvas = RgbImage::new(self.config.width, self.config.height);

        for (stage_idx, stage) in self.stages.iter().enumerate() {
            if self.verbose {
                println!("  Running stage: {}", stage.name());
            }
            stage.apply(&mut canvas, step, &context)?;
            self.save_debug_output(&canvas, step, stage_idx, stage.name())?;
        }

        Ok(canvas)
    }

    /// Save a stage snapshot if debug mode is enabled
    fn save_debug_output(
        &self,
        canvas: &RgbImage,
        step: &StepSpec,
        stage_idx: usize,
        stage_name: &str,
    ) -> Result<()> {
        if let Some(debug_config) = &self.debug {
            let step_dir = debug_config.output_dir.join(step.stem());
            std::fs::create_dir_all(&step_dir)?;

            let filename = format!(
                "{:02}_{}.png",
                stage_idx + 1,
                stage_name.to_lowercase().replace(' ', "_")
            );
            let output_path = step_dir.join(&filename);
            canvas
                .save(&output_path)
                .map_err(|e| anyhow::anyhow!("Failed to save debug image: {}", e))?;

            if self.verbose {
                println!("  Debug: saved {}/{}", step.stem(), filename);
            }
        }

        Ok(())
    }

    /// Render, encode and write a single step
    pub fn generate_step(&self, step: &StepSpec) -> Result<GeneratedImage> {
        let canvas = self.render(step)?;
        let bytes = encode_progressive_jpeg(&canvas, self.config.quality)?;
        let path = self.config.output_dir.join(&step.filename);
        write_atomically(&path, &bytes)?;

        if self.verbose {
            println!("  Encoded {} bytes (quality {})", bytes.len(), self.config.quality);
        }

        Ok(GeneratedImage {
            path,
            width: canvas.width(),
            height: canvas.height(),
            bytes: bytes.len(),
        })
    }

    /// Generate every configured step in order, stopping at the first failure
    pub fn run(&self) -> Result<Vec<GeneratedImage>> {
        self.config.validate()?;

        let output_dir = &self.config.output_dir;
        std::fs::create_dir_all(output_dir).map_err(|e| {
            anyhow::anyhow!("Failed to create output directory {}: {}", output_dir.display(), e)
        })?;

        if self.verbose {
            println!(
                "Canvas {}x{}, font: {}\n",
                self.config.width,
                self.config.height,
                self.face.describe()
            );
        }

        let mut results = Vec::with_capacity(self.config.steps.len());
        for step in &self.config.steps {
            println!("Generating {}...", step.filename);
            let image = self
                .generate_step(step)
                .map_err(|e| e.context(format!("Failed to generate {}", step.filename)))?;
            println!("  ✓ Created {}", image.path.display());
            results.push(image);
        }

        Ok(results)
    }
}
