//! UI components for the TUI: header, URL input, status panel and footer.

use crate::form::{FormView, StatusView};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Draw the whole form.
pub fn render(frame: &mut Frame, view: &FormView, tick: usize) {
    let [header, input, message, actions, status, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header);
    render_input(frame, input, view);
    render_message(frame, message, view);
    render_actions(frame, actions, view);
    render_status(frame, status, view, tick);
    render_footer(frame, footer);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::from(Span::styled(
            "URL Summarizer",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Turn any web article into a short, easy-to-read summary.",
            Style::default().fg(Color::Gray),
        )),
    ]);
    frame.render_widget(Paragraph::new(text).centered(), area);
}

fn render_input(frame: &mut Frame, area: Rect, view: &FormView) {
    let border = if view.error.is_some() {
        Color::Red
    } else if view.input_enabled {
        Color::Blue
    } else {
        Color::DarkGray
    };

    let mut spans = vec![Span::raw(view.input.as_str())];
    if view.input.is_empty() && view.input_enabled {
        spans = vec![Span::styled(
            "https://example.com/article",
            Style::default().fg(Color::DarkGray),
        )];
    }
    if view.input_valid {
        spans.push(Span::styled(" ✔", Style::default().fg(Color::Green)));
    }

    let block = Block::bordered()
        .title(" Article or web page URL ")
        .border_style(Style::default().fg(border));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);

    if view.input_enabled {
        let offset = u16::try_from(view.input.chars().count()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(offset);
        let max_x = area.right().saturating_sub(2);
        frame.set_cursor_position((x.min(max_x), area.y + 1));
    }
}

fn render_message(frame: &mut Frame, area: Rect, view: &FormView) {
    if let Some(error) = &view.error {
        let line = Line::from(vec![
            Span::styled("⚠ ", Style::default().fg(Color::Red)),
            Span::styled(error.as_str(), Style::default().fg(Color::Red)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn render_actions(frame: &mut Frame, area: Rect, view: &FormView) {
    let submit_style = if view.submit_enabled {
        Style::default().fg(Color::White).bg(Color::Blue)
    } else {
        Style::default().fg(Color::Black).bg(Color::DarkGray)
    };

    let mut spans = vec![Span::styled(
        format!(" [Enter] {} ", view.submit_label),
        submit_style,
    )];
    if view.show_reset {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            " [Ctrl+N] New ",
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled("  [Esc] Quit", Style::default().fg(Color::DarkGray)));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status(frame: &mut Frame, area: Rect, view: &FormView, tick: usize) {
    match &view.status {
        StatusView::Idle => {}
        StatusView::Loading => render_loading(frame, area, tick),
        StatusView::Result {
            title,
            summary,
            source,
        } => render_result(frame, area, title, summary, source),
    }
}

fn render_loading(frame: &mut Frame, area: Rect, tick: usize) {
    let spinner = SPINNER[tick % SPINNER.len()];
    let text = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!("{spinner} Analyzing content..."),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Extracting and processing the page content. This may take a moment.",
            Style::default().fg(Color::Gray),
        )),
    ]);
    frame.render_widget(
        Paragraph::new(text)
            .centered()
            .wrap(Wrap { trim: true })
            .block(Block::bordered()),
        area,
    );
}

fn render_result(frame: &mut Frame, area: Rect, title: &str, summary: &str, source: &str) {
    let mut lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    lines.extend(summary.lines().map(Line::raw));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("Source: ", Style::default().fg(Color::DarkGray)),
        Span::styled(source, Style::default().add_modifier(Modifier::ITALIC)),
    ]));

    let block = Block::bordered()
        .title(" ✔ Summary Generated ")
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(
        Paragraph::new(Text::from(lines))
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_footer(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Built with ratatui • Smart web content processing",
            Style::default().fg(Color::DarkGray),
        )))
        .centered(),
        area,
    );
}
