use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::number::Report;
use crate::tui::model::AppState;

fn marker_span(marker: &'static str) -> Span<'static> {
    Span::styled(marker, Style::default().fg(Color::Magenta))
}

/// The report as shown in the interactive panel
#[must_use]
pub fn report_lines(report: &Report) -> Vec<Line<'static>> {
    let number_style = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(vec![
            marker_span("  "),
            Span::styled(report.value().to_string(), number_style),
            Span::raw(" "),
            Span::raw(report.value_hex()),
        ]),
        Line::from(vec![
            marker_span("R "),
            Span::styled(report.reversed().to_string(), number_style),
            Span::raw(" "),
            Span::raw(report.reversed_hex()),
        ]),
    ];

    lines.extend(report.rows().iter().map(|row| {
        Line::from(vec![
            marker_span(row.marker()),
            Span::styled(row.ordering.label(), Style::default().fg(Color::Blue)),
            Span::raw(" "),
            Span::raw(row.bytes.to_string()),
        ])
    }));

    lines
}

pub fn draw_ui(f: &mut ratatui::Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let version = crate::version::get_version_info().short_version();
    let title = Block::default()
        .title("───")
        .title(Line::from(format!(" hexhelp {version} ")).left_aligned())
        .borders(Borders::TOP);
    f.render_widget(title, chunks[0]);

    let report = Paragraph::new(report_lines(&app.report))
        .block(Block::default().title(" Bytes ").borders(Borders::ALL));
    f.render_widget(report, chunks[1]);

    let input_style = if app.invalid {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    let input = Paragraph::new(app.input.as_str()).style(input_style).block(
        Block::default()
            .title(" Number (decimal or 0x hex) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(input, chunks[2]);

    let cursor_offset = u16::try_from(app.input.chars().count()).unwrap_or(u16::MAX);
    f.set_cursor_position((
        chunks[2].x.saturating_add(1).saturating_add(cursor_offset),
        chunks[2].y + 1,
    ));

    let hints = Line::from(vec![
        Span::raw(" "),
        Span::styled("Ctrl-U", Style::default().fg(Color::Blue)),
        Span::raw(" to clear | "),
        Span::styled("Esc", Style::default().fg(Color::Blue)),
        Span::raw(" to quit"),
    ]);
    f.render_widget(Paragraph::new(hints), chunks[3]);
}
