// file: src/pipeline/progress.rs
// description: progress reporting and statistics for multi-file imports
// reference: uses indicatif for progress bars

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct ImportStats {
    pub files_processed: usize,
    pub files_failed: usize,
    pub exercises_created: usize,
    pub duration_secs: f64,
}

impl ImportStats {
    pub fn exercises_per_file(&self) -> f64 {
        if self.files_processed == 0 {
            return 0.0;
        }
        self.exercises_created as f64 / self.files_processed as f64
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.files_processed + self.files_failed;
        if total == 0 {
            return 0.0;
        }
        (self.files_processed as f64 / total as f64) * 100.0
    }
}

pub struct ImportProgress {
    bar: ProgressBar,
    stats: ImportStats,
    start_time: Instant,
}

impl ImportProgress {
    pub fn new(total_files: usize, colored: bool) -> Self {
        let bar = ProgressBar::new(total_files as u64);
        let template = if colored {
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}"
        } else {
            "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}"
        };
        bar.set_style(
            ProgressStyle::default_bar()
                .template(template)
                .expect("Failed to create progress bar template")
                .progress_chars("█▓▒░"),
        );

        Self {
            bar,
            stats: ImportStats::default(),
            start_time: Instant::now(),
        }
    }

    pub fn file_done(&mut self, file_name: &str, exercises: usize) {
        self.stats.files_processed += 1;
        self.stats.exercises_created += exercises;
        self.bar.set_message(format!("{file_name}: {exercises} exercises"));
        self.bar.inc(1);
    }

    pub fn file_failed(&mut self, file_name: &str) {
        self.stats.files_failed += 1;
        self.bar.set_message(format!("{file_name}: failed"));
        self.bar.inc(1);
    }

    pub fn finish(mut self) -> ImportStats {
        self.bar.finish_and_clear();
        self.stats.duration_secs = self.start_time.elapsed().as_secs_f64();
        self.stats
    }
}
