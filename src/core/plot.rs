//! Parabola chart: sampling window, sampled points, ratatui chart and the
//! interactive terminal view.

use std::io;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame, Terminal,
};

use crate::core::report::fmt_number;
use crate::core::solver::{Coefficients, Roots, Solution};

const AXIS: Color = Color::Rgb(255, 165, 0);

/// X range to sample. Two real roots are padded by half their distance on
/// each side; otherwise the window is centered on the root (or the real
/// part of the complex pair) with half-width `2|m|`, at least 10.
pub fn plot_window(solution: &Solution) -> (f64, f64) {
    let (min, max) = match solution.roots {
        Roots::TwoReal { x1, x2 } => {
            let pad = ((x2 - x1) / 2.0).abs();
            (x1 - pad, x2 + pad)
        }
        Roots::OneReal { x: m } => centered(m),
        Roots::ComplexPair { x1, .. } => centered(x1.re),
    };
    if max > min && min.is_finite() && max.is_finite() {
        (min, max)
    } else {
        // roots too close together to give a usable range
        centered(solution.vertex.x)
    }
}

fn centered(m: f64) -> (f64, f64) {
    let half = if -5.0 < m && m < 5.0 { 10.0 } else { (m * 2.0).abs() };
    (m - half, m + half)
}

/// `n` evenly spaced points over `window`, endpoints included.
pub fn sample(coefficients: &Coefficients, window: (f64, f64), n: usize) -> Vec<(f64, f64)> {
    let (min, max) = window;
    match n {
        0 => Vec::new(),
        1 => vec![(min, coefficients.evaluate(min))],
        _ => {
            let step = (max - min) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    let x = if i == n - 1 { max } else { min + step * i as f64 };
                    (x, coefficients.evaluate(x))
                })
                .collect()
        }
    }
}

/// Owned chart data; `chart()` borrows from it.
pub struct PlotData {
    title: String,
    curve: Vec<(f64, f64)>,
    roots: Vec<(f64, f64)>,
    vertex: Vec<(f64, f64)>,
    x_axis: Vec<(f64, f64)>,
    y_axis: Vec<(f64, f64)>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    precision: u32,
}

impl PlotData {
    pub fn new(solution: &Solution, samples: usize, precision: u32) -> Self {
        let window = plot_window(solution);
        let curve = sample(&solution.coefficients, window, samples.max(2));
        let vertex = vec![(solution.vertex.x, solution.vertex.y)];

        let (mut y_min, mut y_max) = curve
            .iter()
            .chain(vertex.iter())
            .fold((0.0f64, 0.0f64), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));
        let pad = ((y_max - y_min) * 0.1).max(1.0);
        y_min -= pad;
        y_max += pad;

        crate::debug_log!("plot window x={:?} y=[{}, {}]", window, y_min, y_max);

        let (x_min, x_max) = window;
        let y_axis = if x_min <= 0.0 && 0.0 <= x_max {
            vec![(0.0, y_min), (0.0, y_max)]
        } else {
            Vec::new()
        };

        Self {
            title: format!(" {} ", solution.coefficients),
            curve,
            roots: solution.roots.real().into_iter().map(|x| (x, 0.0)).collect(),
            vertex,
            x_axis: vec![(x_min, 0.0), (x_max, 0.0)],
            y_axis,
            x_bounds: [x_min, x_max],
            y_bounds: [y_min, y_max],
            precision,
        }
    }

    pub fn curve(&self) -> &[(f64, f64)] {
        &self.curve
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        self.x_bounds
    }

    pub fn y_bounds(&self) -> [f64; 2] {
        self.y_bounds
    }

    fn labels(&self, [lo, hi]: [f64; 2]) -> Vec<Span<'static>> {
        [lo, (lo + hi) / 2.0, hi]
            .iter()
            .map(|&v| Span::raw(fmt_number(v, self.precision)))
            .collect()
    }

    pub fn chart(&self) -> Chart<'_> {
        let datasets = vec![
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(AXIS))
                .data(&self.x_axis),
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(AXIS))
                .data(&self.y_axis),
            Dataset::default()
                .name("f(x)")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::LightBlue))
                .data(&self.curve),
            Dataset::default()
                .name("roots")
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
                .data(&self.roots),
            Dataset::default()
                .name("vertex")
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
                .data(&self.vertex),
        ];

        Chart::new(datasets)
            .block(
                Block::default()
                    .title(self.title.as_str())
                    .borders(Borders::ALL),
            )
            .x_axis(
                Axis::default()
                    .title("x")
                    .style(Style::default().fg(Color::Gray))
                    .bounds(self.x_bounds)
                    .labels(self.labels(self.x_bounds)),
            )
            .y_axis(
                Axis::default()
                    .title("y")
                    .style(Style::default().fg(Color::Gray))
                    .bounds(self.y_bounds)
                    .labels(self.labels(self.y_bounds)),
            )
    }
}

pub fn ui(f: &mut Frame<'_>, data: &PlotData) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)].as_ref())
        .split(f.size());

    f.render_widget(data.chart(), rows[0]);
    let hint = Paragraph::new("press any key to close")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(hint, rows[1]);
}

/// Runs its closure on drop; armed right after raw mode is enabled so
/// every later exit path puts the terminal back.
struct Restore<F: FnMut()>(F);

impl<F: FnMut()> Drop for Restore<F> {
    fn drop(&mut self) {
        (self.0)()
    }
}

/// Show the chart full-screen until a key is pressed.
pub fn show(solution: &Solution, samples: usize, precision: u32) -> Result<()> {
    let data = PlotData::new(solution, samples, precision);

    terminal::enable_raw_mode().context("enabling raw mode")?;
    let _restore = Restore(|| {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    });

    execute!(io::stdout(), EnterAlternateScreen, SetTitle("quadratic"))
        .context("entering alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    run_view(&mut terminal, &data)
}

fn run_view<B: Backend>(terminal: &mut Terminal<B>, data: &PlotData) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, data))?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
