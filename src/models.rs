/// One entry of the timeline: what to draw and where to write it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSpec {
    /// Short display numeral, e.g. "1"
    pub number: String,
    /// Display title; `\n` splits it into stacked lines
    pub title: String,
    /// Output file name inside the output directory
    pub filename: String,
}

impl StepSpec {
    pub fn new(
        number: impl Into<String>,
        title: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            filename: filename.into(),
        }
    }

    /// Title split into the lines that get rendered
    pub fn title_lines(&self) -> Vec<&str> {
        self.title.lines().collect()
    }

    /// File name without extension (used for debug directories)
    pub fn stem(&self) -> &str {
        self.filename
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&self.filename)
    }
}

/// Numbers and titles of the five timeline steps, in display order.
pub const TIMELINE_STEPS: [(&str, &str); 5] = [
    ("1", "Initial\nConsultation"),
    ("2", "Tutor\nMatching"),
    ("3", "Trial\nLesson"),
    ("4", "Regular\nSessions"),
    ("5", "Progress\nReviews"),
];

/// Build the default step list with `timeline-step-N.jpg` file names
pub fn default_steps() -> Vec<StepSpec> {
    TIMELINE_STEPS
        .iter()
        .map(|(number, title)| {
            StepSpec::new(*number, *title, format!("timeline-step-{}.jpg", number))
        })
        .collect()
}

/// Summary of one written placeholder image
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub path: std::path::PathBuf,
    pub width: u32,
    pub height: u32,
    pub bytes: usize,
}
