//! Session statistics for `--stats` output.

use std::time::{Duration, Instant};

/// Counters and phase timings for one applet session.
///
/// Created when `--stats` is passed, threaded as `Option<&mut Stats>`.
/// Zero cost when `None`: no timing calls, no counter increments.
pub struct Stats {
    total_start: Instant,
    pub edits_applied: u32,
    pub edits_rejected: u32,
    pub recomputes: u32,
    pub renders: u32,
    pub saves: u32,
    pub recompute_time: Duration,
    pub render_time: Duration,
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

impl Stats {
    pub fn new() -> Self {
        Self {
            total_start: Instant::now(),
            edits_applied: 0,
            edits_rejected: 0,
            recomputes: 0,
            renders: 0,
            saves: 0,
            recompute_time: Duration::ZERO,
            render_time: Duration::ZERO,
        }
    }

    /// Print the stats table to stderr.
    pub fn display(&self, applet: &str) {
        let total = self.total_start.elapsed();
        eprintln!();
        eprintln!("=== ohmlab session stats ({}) ===", applet);
        eprintln!("  Edits applied:          {}", self.edits_applied);
        eprintln!("  Edits rejected:         {}", self.edits_rejected);
        eprintln!(
            "  Recomputes:             {}  ({:>8.6}s)",
            self.recomputes,
            self.recompute_time.as_secs_f64()
        );
        eprintln!(
            "  Renders:                {}  ({:>8.6}s)",
            self.renders,
            self.render_time.as_secs_f64()
        );
        eprintln!("  Saves:                  {}", self.saves);
        eprintln!("  ─────────────────────────────────");
        eprintln!("  Total:                  {:>8.3}s", total.as_secs_f64());
    }
}
