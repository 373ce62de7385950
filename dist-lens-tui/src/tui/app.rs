use crate::tui::session::Session;
use crate::tui::theme::Theme;
use dist_lens_common::Config;
use dist_lens_core::{
    compute_ticks, percentage_to_threshold, threshold_to_percentage, Distribution, DragController,
    FilterMode, LoadReport,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Chart,
    Points,
    Help,
    ThresholdInput,
}

pub struct App {
    pub input_path: String,
    pub dist: Distribution,
    pub reports: Vec<LoadReport>,
    pub controller: DragController,
    pub ticks_override: Option<usize>,
    pub view: View,
    pub threshold_input: String,
    pub points_scroll: usize,
    pub status_msg: String,
    pub should_quit: bool,
    pub config: Config,
    pub theme: Theme,
}

impl App {
    pub fn new(
        input_path: String,
        dist: Distribution,
        reports: Vec<LoadReport>,
        controller: DragController,
        ticks_override: Option<usize>,
        config: Config,
    ) -> Self {
        Self {
            input_path,
            dist,
            reports,
            controller,
            ticks_override,
            view: View::Chart,
            threshold_input: String::new(),
            points_scroll: 0,
            status_msg: String::from("Ready — q:quit ?:help"),
            should_quit: false,
            theme: Theme::from_name(&config.display.theme),
            config,
        }
    }

    pub fn matching_pct(&self) -> f64 {
        let n = self.dist.len();
        if n == 0 {
            return 0.0;
        }
        self.controller.state().count as f64 / n as f64 * 100.0
    }

    /// Tick values for the x axis, recomputed from the current chart width.
    pub fn x_ticks(&self, chart_width_cells: u16) -> Vec<f64> {
        let width_px = chart_width_cells as f64 * 8.0; // approx 8px per terminal cell
        compute_ticks(
            self.dist.min,
            self.dist.max,
            self.controller.log_scale(),
            width_px,
            self.ticks_override.or(self.config.chart.x_axis_ticks),
        )
    }

    pub fn cycle_mode(&mut self) {
        let mode = self.controller.state().mode.cycle();
        self.controller.set_mode(mode);
        self.status_msg = format!("mode: {}", mode.as_str());
    }

    pub fn toggle_log(&mut self) {
        if self.controller.log_scale() {
            self.controller.set_log_scale(false);
            self.status_msg = "linear scale".into();
        } else if self.dist.min <= 0.0 && !self.dist.is_empty() {
            // log axis needs a positive domain
            self.status_msg = format!("log scale unavailable (min = {})", self.dist.min);
        } else {
            self.controller.set_log_scale(true);
            self.status_msg = "log scale".into();
        }
    }

    /// Moves the threshold by `pct_step` percentage points along the axis.
    pub fn nudge_threshold(&mut self, pct_step: f64) {
        let (min, max) = self.controller.range();
        let log = self.controller.log_scale();
        let pct = threshold_to_percentage(min, max, self.controller.state().value, log);
        let value = percentage_to_threshold(min, max, (pct + pct_step).clamp(0.0, 100.0), log);
        self.controller.set_value(value);
    }

    pub fn apply_threshold_input(&mut self) {
        match self.threshold_input.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => {
                let (min, max) = self.controller.range();
                self.controller.set_value(v.clamp(min, max));
                self.status_msg = format!("threshold set to {}", self.controller.state().value);
            }
            _ => {
                self.status_msg = format!("not a number: '{}'", self.threshold_input.trim());
            }
        }
        self.threshold_input.clear();
        self.view = View::Chart;
    }

    pub fn points_down(&mut self) {
        if self.points_scroll + 1 < self.dist.points.len() {
            self.points_scroll += 1;
        }
    }

    pub fn points_up(&mut self) {
        self.points_scroll = self.points_scroll.saturating_sub(1);
    }

    pub fn to_session(&self) -> Session {
        let view = match self.view {
            View::Points => "points",
            _ => "chart",
        };
        Session {
            input_path: self.input_path.clone(),
            threshold: self.controller.state().value,
            mode: self.controller.state().mode.as_str().into(),
            log_scale: self.controller.log_scale(),
            view: view.into(),
        }
    }

    pub fn restore_from_session(&mut self, s: &Session) {
        if s.input_path != self.input_path {
            return;
        }
        let mode: FilterMode = s.mode.parse().unwrap_or_default();
        self.controller.set_mode(mode);
        if s.threshold.is_finite() {
            let (min, max) = self.controller.range();
            self.controller.set_value(s.threshold.clamp(min, max));
        }
        if s.log_scale && (self.dist.min > 0.0 || self.dist.is_empty()) {
            self.controller.set_log_scale(true);
        }
        if s.view == "points" {
            self.view = View::Points;
        }
    }
}
