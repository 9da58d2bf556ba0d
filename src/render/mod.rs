pub mod font;
pub mod gradient;
pub mod text;

use anyhow::Result;
use image::{Rgb, RgbImage};

use crate::config::GeneratorConfig;
use crate::models::StepSpec;
pub use font::Face;

/// Context shared by every stage while rendering one step
pub struct RenderContext<'a> {
    pub face: &'a Face,
    pub verbose: bool,
}

/// One layer of a placeholder image
pub trait RenderStage: Send + Sync {
    /// Paint this layer onto the canvas
    fn apply(&self, canvas: &mut RgbImage, step: &StepSpec, context: &RenderContext) -> Result<()>;

    /// Human-readable name (used in verbose and debug output)
    fn name(&self) -> &str;
}

/// Vertical background gradient
pub struct GradientStage {
    pub start: Rgb<u8>,
    pub end: Rgb<u8>,
}

impl RenderStage for GradientStage {
    fn apply(&self, canvas: &mut RgbImage, _step: &StepSpec, _context: &RenderContext) -> Result<()> {
        gradient::fill_gradient(canvas, self.start, self.end);
        Ok(())
    }

    fn name(&self) -> &str {
        "Gradient"
    }
}

/// Large step numeral with a drop shadow
pub struct NumeralStage {
    pub anchor: (i32, i32),
    pub size: f32,
    pub color: Rgb<u8>,
    pub shadow: Rgb<u8>,
    pub shadow_offset: (i32, i32),
}

impl RenderStage for NumeralStage {
    fn apply(&self, canvas: &mut RgbImage, step: &StepSpec, context: &RenderContext) -> Result<()> {
        text::draw_shadowed(
            canvas,
            context.face,
            self.color,
            self.shadow,
            self.shadow_offset,
            self.anchor,
            self.size,
            &step.number,
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "Numeral"
    }
}

/// Centered, possibly multi-line title
pub struct TitleStage {
    pub anchor: (i32, i32),
    pub size: f32,
    pub color: Rgb<u8>,
    pub line_spacing: i32,
}

impl RenderStage for TitleStage {
    fn apply(&self, canvas: &mut RgbImage, step: &StepSpec, context: &RenderContext) -> Result<()> {
        if context.verbose {
            println!("  Title: {} line(s)", step.title_lines().len());
        }
        text::draw_multiline_centered(
            canvas,
            context.face,
            self.color,
            self.anchor,
            self.size,
            self.line_spacing,
            &step.title,
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "Title"
    }
}

/// The standard gradient → numeral → title stack for a configuration
pub fn default_stages(config: &GeneratorConfig) -> Vec<Box<dyn RenderStage>> {
    vec![
        Box::new(GradientStage {
            start: config.gradient_start,
            end: config.gradient_end,
        }),
        Box::new(NumeralStage {
            anchor: config.numeral_anchor,
            size: config.numeral_size,
            color: config.accent,
            shadow: config.shadow,
            shadow_offset: config.shadow_offset,
        }),
        Box::new(TitleStage {
            anchor: config.title_anchor,
            size: config.title_size,
            color: config.title_color,
            line_spacing: config.line_spacing,
        }),
    ]
}

