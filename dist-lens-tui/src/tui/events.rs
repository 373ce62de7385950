use crate::tui::app::{App, View};
use crate::tui::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use dist_lens_core::{compute_ticks, export_json, PlotArea};
use ratatui::layout::Rect;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if app.view == View::ThresholdInput {
        match key.code {
            KeyCode::Esc => {
                app.threshold_input.clear();
                app.view = View::Chart;
            }
            KeyCode::Enter => app.apply_threshold_input(),
            KeyCode::Backspace => {
                app.threshold_input.pop();
            }
            KeyCode::Char(c) => app.threshold_input.push(c),
            _ => {}
        }
        return;
    }
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => {
            app.view = if app.view == View::Help { View::Chart } else { View::Help };
        }
        KeyCode::Char('m') => app.cycle_mode(),
        KeyCode::Char('L') => app.toggle_log(),
        KeyCode::Char('t') => {
            app.threshold_input.clear();
            app.view = View::ThresholdInput;
        }
        KeyCode::Char('p') => {
            app.view = if app.view == View::Points { View::Chart } else { View::Points };
        }
        KeyCode::Char('j') | KeyCode::Down if app.view == View::Points => app.points_down(),
        KeyCode::Char('k') | KeyCode::Up if app.view == View::Points => app.points_up(),
        KeyCode::Left => {
            let step = if key.modifiers.contains(KeyModifiers::SHIFT) { 10.0 } else { 1.0 };
            app.nudge_threshold(-step);
        }
        KeyCode::Right => {
            let step = if key.modifiers.contains(KeyModifiers::SHIFT) { 10.0 } else { 1.0 };
            app.nudge_threshold(step);
        }
        KeyCode::Char('E') => export_profile(app),
        KeyCode::Esc => app.view = View::Chart,
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent, frame_area: Rect) {
    let plot = ui::plot_rect(frame_area);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.view != View::Chart || app.dist.is_empty() {
                return;
            }
            let in_rows = mouse.row >= plot.y && mouse.row < plot.y + plot.height;
            let handle = ui::threshold_column(app, plot);
            let on_handle = mouse.column.abs_diff(handle) <= 1;
            if in_rows && on_handle {
                app.controller.start();
            }
        }
        // while dragging, every move is routed here regardless of position
        MouseEventKind::Drag(MouseButton::Left) => {
            if app.controller.is_dragging() {
                let area = PlotArea {
                    left: plot.x as f64,
                    width: plot.width.saturating_sub(1) as f64,
                };
                if let Some((value, count)) = app.controller.handle_move(mouse.column as f64, area) {
                    app.status_msg = format!("{} → {}", ui::fmt_value(value), count);
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => app.controller.stop(),
        _ => {}
    }
}

fn export_profile(app: &mut App) {
    let out_dir = std::path::Path::new(&app.config.export.output_dir);
    if let Err(e) = std::fs::create_dir_all(out_dir) {
        app.status_msg = format!("export dir error: {e}");
        return;
    }
    let out_path = out_dir.join("distribution.json");
    let ticks = compute_ticks(
        app.dist.min,
        app.dist.max,
        app.controller.log_scale(),
        640.0,
        app.ticks_override.or(app.config.chart.x_axis_ticks),
    );
    match export_json(
        &out_path,
        &app.dist,
        app.controller.state(),
        app.controller.log_scale(),
        &ticks,
        &app.reports,
    ) {
        Ok(_) => app.status_msg = format!("exported to {}", out_path.display()),
        Err(e) => app.status_msg = format!("export error: {e}"),
    }
}
