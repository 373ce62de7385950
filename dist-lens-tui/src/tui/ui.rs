use crate::tui::app::{App, View};
use crate::tui::theme::Theme;
use dist_lens_core::threshold_to_percentage;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Cell, Chart, Clear, Dataset, GraphType, Paragraph, Row, Table, Wrap},
    Frame,
};

// Space the chart widget reserves for y-axis labels and the x-label row;
// plot_rect must stay in sync with the label widths used in render_chart.
const Y_LABEL_WIDTH: u16 = 6;

pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    render_topbar(frame, app, chunks[0], theme);
    match app.view {
        View::Points => render_points(frame, app, chunks[1], theme),
        _ => render_chart(frame, app, chunks[1], theme),
    }
    render_bottombar(frame, app, chunks[2], theme);
    if app.view == View::Help {
        render_help(frame, area);
    }
    if app.view == View::ThresholdInput {
        render_threshold_input(frame, app, area);
    }
}

/// Inner plotting rectangle of the chart, in terminal cells. The mouse
/// handler maps pointer columns through this same rectangle, so the drag
/// math and the rendered threshold line agree.
pub fn plot_rect(frame_area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(frame_area);
    let main = chunks[1];
    let inner = Rect {
        x: main.x.saturating_add(1),
        y: main.y.saturating_add(1),
        width: main.width.saturating_sub(2),
        height: main.height.saturating_sub(2),
    };
    Rect {
        x: inner.x.saturating_add(Y_LABEL_WIDTH + 1),
        y: inner.y,
        width: inner.width.saturating_sub(Y_LABEL_WIDTH + 1),
        height: inner.height.saturating_sub(1), // x-label row
    }
}

/// Column of the threshold handle inside `plot`.
pub fn threshold_column(app: &App, plot: Rect) -> u16 {
    let (min, max) = app.controller.range();
    let pct = threshold_to_percentage(min, max, app.controller.state().value, app.controller.log_scale());
    let span = plot.width.saturating_sub(1) as f64;
    plot.x + (pct / 100.0 * span).round() as u16
}

fn render_topbar(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let badge = if app.controller.log_scale() {
        Span::styled("[LOG]", Style::default().fg(theme.warning))
    } else {
        Span::styled("[LIN]", Style::default().fg(theme.success))
    };
    let skipped: usize = app.reports.iter().map(|r| r.skipped).sum();
    let mut info = format!(
        " {} | {} values | range {}..{}",
        app.input_path,
        app.dist.len(),
        fmt_value(app.dist.min),
        fmt_value(app.dist.max),
    );
    if skipped > 0 {
        info.push_str(&format!(" | {skipped} skipped"));
    }
    let line = Line::from(vec![badge, Span::raw(info)]);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme.bg).fg(theme.fg)),
        area,
    );
}

fn render_chart(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    if app.dist.is_empty() {
        frame.render_widget(
            Paragraph::new("No values loaded.")
                .block(Block::default().borders(Borders::ALL).title("Cumulative Distribution")),
            area,
        );
        return;
    }
    let (min, max) = (app.dist.min, app.dist.max);
    let log = app.controller.log_scale();
    let n = app.dist.len() as f64;
    // positions in percent so linear and log regimes share one axis
    let curve: Vec<(f64, f64)> = app
        .dist
        .points
        .iter()
        .map(|p| {
            (
                threshold_to_percentage(min, max, p.value, log),
                p.cumulative_count as f64,
            )
        })
        .collect();
    let state = app.controller.state();
    let pct = threshold_to_percentage(min, max, state.value, log);
    let marker = [(pct, 0.0), (pct, n)];
    let datasets = vec![
        Dataset::default()
            .name("cumulative")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.curve))
            .data(&curve),
        Dataset::default()
            .name(format!("{} {}", state.mode.symbol(), fmt_value(state.value)))
            .marker(symbols::Marker::HalfBlock)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.threshold))
            .data(&marker),
    ];
    let ticks = app.x_ticks(area.width.saturating_sub(Y_LABEL_WIDTH + 3));
    let x_labels: Vec<Span> = ticks.iter().map(|t| Span::raw(fmt_value(*t))).collect();
    let y_labels: Vec<Span> = [0.0, n / 2.0, n]
        .iter()
        .map(|c| Span::raw(format!("{:>width$}", c.round() as u64, width = Y_LABEL_WIDTH as usize)))
        .collect();
    let title = format!(
        "Cumulative Distribution — drag handle, m:{}",
        state.mode.as_str()
    );
    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(title))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(theme.axis))
                .bounds([0.0, 100.0])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(theme.axis))
                .bounds([0.0, n])
                .labels(y_labels),
        );
    frame.render_widget(chart, area);
}

fn render_points(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    if app.dist.points.is_empty() {
        frame.render_widget(
            Paragraph::new("No values loaded.")
                .block(Block::default().borders(Borders::ALL).title("Series (p)")),
            area,
        );
        return;
    }
    let header = Row::new(
        ["value", "cumulative", "share"]
            .map(|h| Cell::from(h).style(Style::default().add_modifier(Modifier::BOLD))),
    );
    let n = app.dist.len() as f64;
    let visible = area.height.saturating_sub(4) as usize;
    let rows: Vec<Row> = app
        .dist
        .points
        .iter()
        .skip(app.points_scroll)
        .take(visible)
        .map(|p| {
            let share = p.cumulative_count as f64 / n * 100.0;
            let color = if share >= 100.0 { theme.success } else { theme.fg };
            Row::new([
                Cell::from(fmt_value(p.value)),
                Cell::from(p.cumulative_count.to_string()),
                Cell::from(format!("{share:.1}%")).style(Style::default().fg(color)),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [Constraint::Min(14), Constraint::Length(12), Constraint::Length(8)],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Series (p) — j/k scroll"));
    frame.render_widget(table, area);
}

fn render_threshold_input(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(50, 20, area);
    frame.render_widget(Clear, popup);
    let content = format!(
        "> {}_\n\nEnter a threshold value, Enter to apply, Esc to cancel",
        app.threshold_input
    );
    frame.render_widget(
        Paragraph::new(content)
            .block(Block::default().borders(Borders::ALL).title("Set Threshold (t)"))
            .wrap(Wrap { trim: false }),
        popup,
    );
}

fn render_help(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled("Keybindings", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("  q        Quit"),
        Line::from("  ?        Toggle help"),
        Line::from("  m        Cycle comparison mode (< <= > >=)"),
        Line::from("  L        Toggle log scale"),
        Line::from("  t        Type an exact threshold"),
        Line::from("  ←/→      Nudge threshold 1% (Shift: 10%)"),
        Line::from("  p        Toggle series table"),
        Line::from("  j/k      Scroll series table"),
        Line::from("  E        Export JSON profile"),
        Line::from("  Esc      Back to chart"),
        Line::from(""),
        Line::from("  Drag the vertical handle with the mouse to move"),
        Line::from("  the threshold; the count updates live."),
    ];
    let popup = centered_rect(50, 70, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Help (?)")),
        popup,
    );
}

fn render_bottombar(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let state = app.controller.state();
    let bar_text = format!(
        " {} | {} {} → {}/{} ({:.1}%) | q:quit ?:help m:mode L:log t:set E:export p:points",
        app.status_msg,
        state.mode.symbol(),
        fmt_value(state.value),
        state.count,
        app.dist.len(),
        app.matching_pct(),
    );
    frame.render_widget(
        Paragraph::new(bar_text).style(Style::default().bg(theme.bg).fg(theme.fg)),
        area,
    );
}

fn centered_rect(px: u16, py: u16, r: Rect) -> Rect {
    let v = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - py) / 2),
            Constraint::Percentage(py),
            Constraint::Percentage((100 - py) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - px) / 2),
            Constraint::Percentage(px),
            Constraint::Percentage((100 - px) / 2),
        ])
        .split(v[1])[1]
}

pub fn fmt_value(v: f64) -> String {
    if v == v.trunc() && v.abs() < 1e12 {
        format!("{}", v as i64)
    } else if v.abs() >= 100.0 {
        format!("{v:.1}")
    } else {
        format!("{v:.3}")
    }
}
