//! Progress reporting for long-running table builds.
//!
//! [`ProgressReporter`] is what the quantizer talks to: a thread-safe counter
//! with an optional callback, owned by the caller. [`ProgressBar`] is one
//! such callback target that draws a single self-overwriting line on stderr.

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Characters used for the partially filled slot of the bar.
const SPINNER: [char; 8] = ['|', '/', '-', '\\', '|', '/', '-', '\\'];

type ProgressCallback = Box<dyn Fn(usize, usize) + Send + Sync>;

/// Progress reporter for parallel work.
///
/// Thread-safe progress tracking using atomic operations.
pub struct ProgressReporter {
    /// Completed work items
    completed: AtomicUsize,
    /// Total work items, set by [`ProgressReporter::start`]
    total: AtomicUsize,
    /// Optional callback for progress updates
    callback: Option<ProgressCallback>,
}

impl ProgressReporter {
    /// Create a reporter that only counts.
    pub fn silent() -> Self {
        Self {
            completed: AtomicUsize::new(0),
            total: AtomicUsize::new(0),
            callback: None,
        }
    }

    /// Create a progress reporter with a callback.
    ///
    /// The callback receives `(completed, total)` and may be invoked from
    /// several worker threads at once.
    pub fn with_callback<F>(callback: F) -> Self
    where
        F: Fn(usize, usize) + Send + Sync + 'static,
    {
        Self {
            completed: AtomicUsize::new(0),
            total: AtomicUsize::new(0),
            callback: Some(Box::new(callback)),
        }
    }

    /// Reset the counter and announce the amount of work.
    pub fn start(&self, total: usize) {
        self.completed.store(0, Ordering::SeqCst);
        self.total.store(total, Ordering::SeqCst);
        if let Some(ref callback) = self.callback {
            callback(0, total);
        }
    }

    /// Report that one more work item has been completed.
    ///
    /// Returns the new count of completed items.
    pub fn report_progress(&self) -> usize {
        let completed = self.completed.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(ref callback) = self.callback {
            callback(completed, self.total.load(Ordering::SeqCst));
        }

        completed
    }

    /// Get current progress (completed, total).
    pub fn get_progress(&self) -> (usize, usize) {
        (
            self.completed.load(Ordering::SeqCst),
            self.total.load(Ordering::SeqCst),
        )
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::silent()
    }
}

/// A one-line text progress bar written to stderr.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    /// Number of slots between the brackets
    width: usize,
    /// Whether to show output (can be disabled for quiet mode)
    show_output: bool,
}

impl ProgressBar {
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            show_output: true,
        }
    }

    /// A bar that never writes anything.
    pub fn quiet() -> Self {
        Self {
            width: 1,
            show_output: false,
        }
    }

    /// Redraw the bar for `completed` out of `total`.
    pub fn draw(&self, completed: usize, total: usize) {
        if !self.show_output || total == 0 {
            return;
        }
        let fraction = completed as f64 / total as f64;
        eprint!("\r{} {}/{}", render_bar(fraction, self.width), completed, total);
        let _ = io::stderr().flush();
    }

    /// Terminate the progress line.
    pub fn finish(&self) {
        if self.show_output {
            eprintln!();
        }
    }
}

/// Render `[XXX/    ]` for a fraction in `0.0..=1.0`.
///
/// Whole slots are `X`; a partially filled slot shows a spinner character
/// proportional to its fill; the rest is padded with spaces.
pub fn render_bar(fraction: f64, width: usize) -> String {
    let filled = fraction.clamp(0.0, 1.0) * width as f64;
    let whole = filled as usize;
    let rest = filled - whole as f64;

    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    bar.extend(std::iter::repeat('X').take(whole));
    if rest > 1e-6 {
        bar.push(SPINNER[(rest * SPINNER.len() as f64) as usize]);
    }
    bar.extend(std::iter::repeat(' ').take((width as f64 - filled) as usize));
    bar.push(']');
    bar
}
