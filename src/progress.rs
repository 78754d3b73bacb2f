//! Progress bar display while planning

use indicatif::{ProgressBar, ProgressStyle};

/// Progress over the scanned files
pub struct PlanProgress {
    file_pb: ProgressBar,
}

impl PlanProgress {
    /// Create a progress bar; `hidden` suppresses all drawing
    pub fn new(total_files: u64, hidden: bool) -> Self {
        if hidden {
            return Self {
                file_pb: ProgressBar::hidden(),
            };
        }

        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} files {msg}")
            .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("#>-"));

        let file_pb = ProgressBar::new(total_files);
        file_pb.set_style(style);
        Self { file_pb }
    }

    /// Advance past one resolved file
    pub fn inc(&self) {
        self.file_pb.inc(1);
    }

    pub fn finish(&self) {
        self.file_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.file_pb.abandon();
    }
}
