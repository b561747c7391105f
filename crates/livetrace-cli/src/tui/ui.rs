//! TUI rendering of one live plot frame.
//!
//! ┌ livetrace  Scope ──────────── #42  t=2.62s  16fps  0 overruns ┐
//! └───────────────────────────────────────────────────────────────┘
//! ┌───────────────────────────────────────────────────────────────┐
//! │ 1.05 ┤        ⢀⠤⠤⡀                ⢀⠤⠤⡀                        │
//! │      │ · · · ⡔· · ·⢣· · · · · · ⡔· · ·⢣· · ·                  │
//! │-1.05 ┤⠊            ⠑⠤⠤⠊            ┌───────────┐               │
//! │      └──────────────────────────── │U : voltage│ ──────────    │
//! │      0.0       Time in s      2.6  │I : current│               │
//! └───────────────────────────────────────────────────────────────┘
//!  q: close

use livetrace_core::{LegendCorner, SignalColor, Snapshot};
use ratatui::{prelude::*, widgets::*};

pub fn draw(f: &mut Frame, snapshot: &Snapshot<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Min(8),    // chart
            Constraint::Length(1), // keys
        ])
        .split(f.area());

    draw_title(f, rows[0], snapshot);
    draw_chart(f, rows[1], snapshot);
    draw_keys(f, rows[2]);
}

fn draw_title(f: &mut Frame, area: Rect, snapshot: &Snapshot<'_>) {
    let overrun_style = if snapshot.overruns > 0 {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Line::from(vec![
            Span::styled(" livetrace ", Style::default().bold().fg(Color::Cyan)),
            Span::styled(
                snapshot.decorations.title,
                Style::default().bold().fg(Color::Yellow),
            ),
            Span::styled(
                format!(
                    "  #{}  t={:.2}s  {}fps ",
                    snapshot.tick, snapshot.time, snapshot.fps
                ),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(format!(" {} overruns ", snapshot.overruns), overrun_style),
        ]));

    f.render_widget(block, area);
}

fn draw_chart(f: &mut Frame, area: Rect, snapshot: &Snapshot<'_>) {
    let deco = &snapshot.decorations;
    let (x_lo, x_hi) = snapshot.x_bounds;
    let (y_lo, y_hi) = y_bounds(snapshot.y_range());

    let grid = if deco.grid {
        grid_lines((x_lo, x_hi), (y_lo, y_hi))
    } else {
        Vec::new()
    };
    let series: Vec<Vec<(f64, f64)>> = snapshot
        .traces
        .iter()
        .map(|trace| trace.points(snapshot.x).collect())
        .collect();

    // Grid first so the traces draw over it.
    let mut datasets: Vec<Dataset> = grid
        .iter()
        .map(|line| {
            Dataset::default()
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(line)
        })
        .collect();
    datasets.extend(snapshot.traces.iter().zip(&series).map(|(trace, data)| {
        Dataset::default()
            .name(trace.label)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(term_color(trace.color)))
            .data(data)
    }));

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title(deco.xlabel)
                .style(Style::default().fg(Color::Gray))
                .bounds([x_lo, x_hi])
                .labels(axis_labels(x_lo, x_hi, 1)),
        )
        .y_axis(
            Axis::default()
                .title(deco.ylabel)
                .style(Style::default().fg(Color::Gray))
                .bounds([y_lo, y_hi])
                .labels(axis_labels(y_lo, y_hi, 2)),
        )
        .legend_position(Some(legend_position(deco.legend)))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    f.render_widget(chart, area);
}

fn draw_keys(f: &mut Frame, area: Rect) {
    let bar = Paragraph::new(" q: close")
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(bar, area);
}

pub fn term_color(color: SignalColor) -> Color {
    match color {
        SignalColor::Red => Color::Red,
        SignalColor::Green => Color::Green,
        SignalColor::Blue => Color::Blue,
        SignalColor::Cyan => Color::Cyan,
        SignalColor::Magenta => Color::Magenta,
        SignalColor::Yellow => Color::Yellow,
        SignalColor::Black => Color::Black,
        SignalColor::White => Color::White,
        SignalColor::Rgb(r, g, b) => Color::Rgb(r, g, b),
    }
}

fn legend_position(corner: LegendCorner) -> LegendPosition {
    match corner {
        LegendCorner::TopLeft => LegendPosition::TopLeft,
        LegendCorner::TopRight => LegendPosition::TopRight,
        LegendCorner::BottomLeft => LegendPosition::BottomLeft,
        LegendCorner::BottomRight => LegendPosition::BottomRight,
    }
}

/// Y range with 5% headroom. Flat or empty data gets a unit margin.
pub fn y_bounds(range: Option<(f64, f64)>) -> (f64, f64) {
    match range {
        Some((lo, hi)) if hi > lo => {
            let pad = (hi - lo) * 0.05;
            (lo - pad, hi + pad)
        }
        Some((v, _)) => (v - 1.0, v + 1.0),
        None => (-1.0, 1.0),
    }
}

/// Dotted lines at the quarter marks of both axes.
pub fn grid_lines((x_lo, x_hi): (f64, f64), (y_lo, y_hi): (f64, f64)) -> Vec<Vec<(f64, f64)>> {
    let quarters = [0.25, 0.5, 0.75];
    let vertical = quarters.iter().map(|q| {
        let x = x_lo + (x_hi - x_lo) * q;
        vec![(x, y_lo), (x, y_hi)]
    });
    let horizontal = quarters.iter().map(|q| {
        let y = y_lo + (y_hi - y_lo) * q;
        vec![(x_lo, y), (x_hi, y)]
    });
    vertical.chain(horizontal).collect()
}

fn axis_labels(lo: f64, hi: f64, precision: usize) -> Vec<Line<'static>> {
    [lo, (lo + hi) / 2.0, hi]
        .iter()
        .map(|v| Line::from(format!("{v:.precision$}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use livetrace_core::{FigureDescriptor, PlotConfig, Sampler, Signal};
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn y_bounds_pad_range() {
        let (lo, hi) = y_bounds(Some((-1.0, 1.0)));
        assert!((lo + 1.1).abs() < 1e-12);
        assert!((hi - 1.1).abs() < 1e-12);
    }

    #[test]
    fn y_bounds_flat_and_empty() {
        assert_eq!(y_bounds(Some((0.5, 0.5))), (-0.5, 1.5));
        assert_eq!(y_bounds(None), (-1.0, 1.0));
    }

    #[test]
    fn grid_has_three_lines_per_axis() {
        let lines = grid_lines((0.0, 4.0), (-1.0, 1.0));
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], vec![(1.0, -1.0), (1.0, 1.0)]);
        assert_eq!(lines[4], vec![(0.0, 0.0), (4.0, 0.0)]);
    }

    #[test]
    fn axis_labels_span_bounds() {
        let labels = axis_labels(0.0, 4.0, 1);
        let text: Vec<String> = labels.iter().map(|l| l.to_string()).collect();
        assert_eq!(text, ["0.0", "2.0", "4.0"]);
    }

    #[test]
    fn colors_map_to_terminal_palette() {
        assert_eq!(term_color(SignalColor::Red), Color::Red);
        assert_eq!(term_color(SignalColor::Rgb(1, 2, 3)), Color::Rgb(1, 2, 3));
    }

    #[test]
    fn frame_shows_title_labels_and_legend() {
        let config = PlotConfig::new(true, 4, 2).unwrap();
        let signals = vec![
            Signal::new("U : voltage", SignalColor::Red, |t: f64| t.sin()),
            Signal::new("I : current", SignalColor::Blue, |t: f64| t.cos()),
        ];
        let mut sampler = Sampler::new(signals, config);
        for _ in 0..5 {
            sampler.sample_tick().unwrap();
            sampler.advance();
        }
        sampler.sample_tick().unwrap();
        let figure = FigureDescriptor::new().title("Scope").ylabel("V");

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| draw(f, &sampler.snapshot(&figure, 0)))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("livetrace"));
        assert!(text.contains("Scope"));
        assert!(text.contains("#5"));
        assert!(text.contains("Time in s"));
        assert!(text.contains("U : voltage"));
        assert!(text.contains("I : current"));
        assert!(text.contains("q: close"));
    }
}
