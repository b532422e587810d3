//! # Frame Statistics
//!
//! The render loop brackets every frame with [`FrameStats::begin`] and
//! [`FrameStats::end`]. [`PerformanceMonitor`] turns those brackets into a
//! rolling frame-time window, and [`render_overlay`] draws it as a small
//! imgui panel in the corner of the window.
//!
//! ## Usage
//!
//! ```rust
//! use floating_shapes::performance::{FrameStats, PerformanceMonitor};
//!
//! let mut monitor = PerformanceMonitor::new();
//!
//! // In your main loop
//! monitor.begin();
//! // ... render frame ...
//! monitor.end();
//!
//! assert_eq!(monitor.frames_recorded(), 1);
//! ```

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Frame bracket consumed by the render loop. Nothing is read back.
pub trait FrameStats {
    fn begin(&mut self);
    fn end(&mut self);

    /// Draw calls of the frame just finished.
    fn record_draw_calls(&mut self, _draw_calls: u32) {}
}

/// Performance metrics over the current sample window
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceMetrics {
    /// Current frames per second
    pub fps: f32,
    /// Average frame time in milliseconds
    pub frame_time_ms: f32,
    /// Minimum frame time in the current window
    pub min_frame_time_ms: f32,
    /// Maximum frame time in the current window
    pub max_frame_time_ms: f32,
    /// Number of draw calls in the last frame
    pub draw_calls: u32,
}

impl Default for PerformanceMetrics {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time_ms: 0.0,
            min_frame_time_ms: f32::MAX,
            max_frame_time_ms: 0.0,
            draw_calls: 0,
        }
    }
}

/// Rolling frame-time monitor
#[derive(Debug)]
pub struct PerformanceMonitor {
    /// Ring buffer of recent frame times for averaging
    frame_times: VecDeque<Duration>,
    max_samples: usize,
    frame_start: Option<Instant>,
    current_metrics: PerformanceMetrics,
    last_update: Instant,
    /// Metrics are recomputed at most this often
    update_interval: Duration,
    frames_recorded: u64,
}

impl PerformanceMonitor {
    /// Keeps ~2 seconds of samples at 60 fps and refreshes 10 times a second.
    pub fn new() -> Self {
        Self::with_config(120, Duration::from_millis(100))
    }

    pub fn with_config(max_samples: usize, update_interval: Duration) -> Self {
        let max_samples = max_samples.max(1);
        Self {
            frame_times: VecDeque::with_capacity(max_samples),
            max_samples,
            frame_start: None,
            current_metrics: PerformanceMetrics::default(),
            last_update: Instant::now(),
            update_interval,
            frames_recorded: 0,
        }
    }

    /// Adds a frame time sample directly.
    pub fn record_frame(&mut self, frame_time: Duration) {
        if self.frame_times.len() >= self.max_samples {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(frame_time);
        self.frames_recorded += 1;

        if self.last_update.elapsed() >= self.update_interval {
            self.update_metrics();
            self.last_update = Instant::now();
        }
    }

    fn update_metrics(&mut self) {
        if self.frame_times.is_empty() {
            return;
        }

        let total_time: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total_time / self.frame_times.len() as u32;
        let avg_frame_time_ms = avg_frame_time.as_secs_f32() * 1000.0;

        self.current_metrics.frame_time_ms = avg_frame_time_ms;
        self.current_metrics.fps = if avg_frame_time_ms > 0.0 {
            1000.0 / avg_frame_time_ms
        } else {
            0.0
        };

        if let (Some(min_time), Some(max_time)) =
            (self.frame_times.iter().min(), self.frame_times.iter().max())
        {
            self.current_metrics.min_frame_time_ms = min_time.as_secs_f32() * 1000.0;
            self.current_metrics.max_frame_time_ms = max_time.as_secs_f32() * 1000.0;
        }
    }

    pub fn get_metrics(&self) -> &PerformanceMetrics {
        &self.current_metrics
    }

    /// Frame times in milliseconds, oldest first.
    pub fn get_frame_time_history(&self) -> Vec<f32> {
        self.frame_times
            .iter()
            .map(|duration| duration.as_secs_f32() * 1000.0)
            .collect()
    }

    pub fn frames_recorded(&self) -> u64 {
        self.frames_recorded
    }

    /// Reset all metrics and history
    pub fn reset(&mut self) {
        self.frame_times.clear();
        self.current_metrics = PerformanceMetrics::default();
        self.frame_start = None;
        self.last_update = Instant::now();
        self.frames_recorded = 0;
    }
}

impl Default for PerformanceMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStats for PerformanceMonitor {
    fn begin(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    fn end(&mut self) {
        if let Some(start) = self.frame_start.take() {
            self.record_frame(start.elapsed());
        }
    }

    fn record_draw_calls(&mut self, draw_calls: u32) {
        self.current_metrics.draw_calls = draw_calls;
    }
}

/// Draws a compact stats panel in the top-left corner.
pub fn render_overlay(ui: &imgui::Ui, metrics: &PerformanceMetrics) {
    ui.window("Stats")
        .size([120.0, 64.0], imgui::Condition::Always)
        .position([10.0, 10.0], imgui::Condition::Always)
        .no_decoration()
        .no_inputs()
        .bg_alpha(0.3)
        .build(|| {
            ui.text(format!("FPS: {:.0}", metrics.fps));
            ui.text(format!("{:.1}ms", metrics.frame_time_ms));
            ui.text(format!("draws: {}", metrics.draw_calls));
        });
}
