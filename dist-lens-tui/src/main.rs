mod tui;

use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dist_lens_common::Config;
use dist_lens_core::{
    build_distribution, compute_ticks, count_matching, export_csv, export_json, load_values,
    print_summary, resolve_paths, Distribution, DragController, FilterMode, LoadReport,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::{io, time::Duration};
use tui::app::App;
use tui::events::{handle_key, handle_mouse};
use tui::session::Session;
use tui::ui::render;

fn parse_mode(s: &str) -> Result<FilterMode, String> {
    // strict at the CLI; config values and session data stay lenient
    match s {
        "lt" | "lte" | "gt" | "gte" => Ok(s.parse().unwrap_or_default()),
        _ => Err(format!("unknown mode '{s}' (use lt, lte, gt or gte)")),
    }
}

#[derive(Parser)]
#[command(name = "dist-lens", version, about = "Interactive threshold explorer for numeric data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Explore the cumulative distribution interactively
    Explore {
        path: String,
        #[arg(long)]
        log: bool,
        #[arg(long, value_parser = parse_mode)]
        mode: Option<FilterMode>,
        #[arg(long)]
        threshold: Option<f64>,
        #[arg(long)]
        ticks: Option<usize>,
    },
    /// Count values passing a threshold
    Count {
        path: String,
        #[arg(long)]
        threshold: f64,
        #[arg(long, value_parser = parse_mode)]
        mode: Option<FilterMode>,
    },
    /// Print a headless summary
    Summary {
        path: String,
        #[arg(long)]
        save: bool,
        #[arg(long)]
        threshold: Option<f64>,
        #[arg(long, value_parser = parse_mode)]
        mode: Option<FilterMode>,
    },
    /// Write the distribution series to a file
    Export {
        path: String,
        #[arg(long, default_value = "json")]
        format: String,
        #[arg(long)]
        output: Option<String>,
        #[arg(long)]
        threshold: Option<f64>,
        #[arg(long, value_parser = parse_mode)]
        mode: Option<FilterMode>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load().unwrap_or_default();
    match cli.command {
        Commands::Explore { path, log, mode, threshold, ticks } => {
            run_tui(path, config, log, mode, threshold, ticks)
        }
        Commands::Count { path, threshold, mode } => run_count(path, threshold, mode, &config),
        Commands::Summary { path, save, threshold, mode } => {
            run_summary(path, save, threshold, mode, &config)
        }
        Commands::Export { path, format, output, threshold, mode } => {
            run_export(path, format, output, threshold, mode, &config)
        }
    }
}

fn load_input(path: &str) -> anyhow::Result<(Distribution, Vec<LoadReport>)> {
    let paths = resolve_paths(path)?;
    let (values, reports) = load_values(&paths)?;
    Ok((build_distribution(&values), reports))
}

fn resolve_mode(flag: Option<FilterMode>, config: &Config) -> FilterMode {
    flag.unwrap_or_else(|| config.chart.filter_mode.parse().unwrap_or_default())
}

fn run_tui(
    input_path: String,
    config: Config,
    log: bool,
    mode: Option<FilterMode>,
    threshold: Option<f64>,
    ticks: Option<usize>,
) -> anyhow::Result<()> {
    let (dist, reports) = load_input(&input_path)?;
    let resolved_mode = resolve_mode(mode, &config);
    let log_requested = log || config.chart.log_scale;
    let log_scale = log_requested && (dist.is_empty() || dist.min > 0.0);
    let controller = DragController::new(dist.sorted.clone(), log_scale, threshold, resolved_mode);
    let mut app = App::new(input_path, dist, reports, controller, ticks, config);
    if log_requested && !log_scale {
        app.status_msg = format!("log scale unavailable (min = {})", app.dist.min);
    }
    // explicit flags take precedence over the saved session
    if mode.is_none() && threshold.is_none() && !log {
        if let Some(s) = Session::load() {
            app.restore_from_session(&s);
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick = Duration::from_millis(66); // 15Hz
    loop {
        terminal.draw(|f| render(f, &app))?;
        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) => handle_key(&mut app, key),
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let frame_area = Rect::new(0, 0, size.width, size.height);
                    handle_mouse(&mut app, mouse, frame_area);
                }
                _ => {}
            }
        }
        if app.should_quit {
            break;
        }
    }
    let _ = app.to_session().save();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_count(
    input_path: String,
    threshold: f64,
    mode: Option<FilterMode>,
    config: &Config,
) -> anyhow::Result<()> {
    let (dist, _) = load_input(&input_path)?;
    let mode = resolve_mode(mode, config);
    let count = count_matching(&dist.sorted, mode, threshold);
    let pct = if dist.is_empty() {
        0.0
    } else {
        count as f64 / dist.len() as f64 * 100.0
    };
    println!("{:<12} {}", "values:", dist.len());
    println!("{:<12} {} {}", "predicate:", mode.symbol(), threshold);
    println!("{:<12} {}", "matching:", count);
    println!("{:<12} {:.2}%", "share:", pct);
    Ok(())
}

fn run_summary(
    input_path: String,
    save: bool,
    threshold: Option<f64>,
    mode: Option<FilterMode>,
    config: &Config,
) -> anyhow::Result<()> {
    let (dist, reports) = load_input(&input_path)?;
    let mode = resolve_mode(mode, config);
    let controller = DragController::new(dist.sorted.clone(), false, threshold, mode);
    print_summary(&dist, controller.state());
    if save {
        let out_dir = std::path::Path::new(&config.export.output_dir);
        std::fs::create_dir_all(out_dir)?;
        let out_path = out_dir.join("summary.json");
        let ticks = compute_ticks(dist.min, dist.max, false, 640.0, config.chart.x_axis_ticks);
        export_json(&out_path, &dist, controller.state(), false, &ticks, &reports)?;
        println!("Summary saved to {}", out_path.display());
    }
    Ok(())
}

fn run_export(
    input_path: String,
    format: String,
    output: Option<String>,
    threshold: Option<f64>,
    mode: Option<FilterMode>,
    config: &Config,
) -> anyhow::Result<()> {
    let (dist, reports) = load_input(&input_path)?;
    let mode = resolve_mode(mode, config);
    let log_scale = config.chart.log_scale && dist.min > 0.0;
    let controller = DragController::new(dist.sorted.clone(), log_scale, threshold, mode);
    let default_name = format!("distribution.{format}");
    let out_path: std::path::PathBuf = if let Some(ref o) = output {
        std::path::PathBuf::from(o)
    } else {
        std::path::Path::new(&config.export.output_dir).join(&default_name)
    };
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    match format.as_str() {
        "json" => {
            let ticks =
                compute_ticks(dist.min, dist.max, log_scale, 640.0, config.chart.x_axis_ticks);
            export_json(&out_path, &dist, controller.state(), log_scale, &ticks, &reports)?;
            println!("Exported to {}", out_path.display());
        }
        "csv" => {
            export_csv(&out_path, &dist)?;
            println!("Exported to {}", out_path.display());
        }
        _ => anyhow::bail!("Unknown format: {format} (use json or csv)"),
    }
    Ok(())
}
