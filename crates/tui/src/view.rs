//! Widget rendering for the four screens.
//!
//! Everything here is presentation: which sections exist and what they
//! contain was already decided in [`crate::report`]. This module only turns
//! that display model into styled lines and lays out the frame.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use throbber_widgets_tui::{Throbber, ThrobberState};
use tui_textarea::TextArea;

use crate::components::StatusLine;
use crate::report::{
    ConnectivityDisplay, LocationSection, Report, ReportView, Section, TransportSection,
};

/// Render one frame: report area, address input, status line, plus the help
/// overlay when open.
#[allow(clippy::too_many_arguments)]
pub fn render_frame(
    frame: &mut Frame,
    view: &ReportView,
    address_input: &mut TextArea,
    input_focused: bool,
    report_scroll: u16,
    throbber_state: &mut ThrobberState,
    status_line: &StatusLine,
    show_help: bool,
) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Report area gets remaining space
            Constraint::Length(3), // Address input
            Constraint::Length(1), // Status line
        ])
        .split(area);

    render_report_area(frame, chunks[0], view, report_scroll, input_focused, throbber_state);
    render_address_input(frame, chunks[1], address_input, view, input_focused);
    status_line.render(frame, chunks[2]);

    if show_help {
        render_help_overlay(frame, area);
    }
}

fn render_report_area(
    frame: &mut Frame,
    area: Rect,
    view: &ReportView,
    report_scroll: u16,
    input_focused: bool,
    throbber_state: &mut ThrobberState,
) {
    let border_style = if input_focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Yellow)
    };

    match view {
        ReportView::Idle => {
            let hint = Paragraph::new(vec![
                Line::from(""),
                Line::from(" Type a Paris street address below and press Enter."),
                Line::from(""),
                Line::from(Span::styled(
                    " e.g. 10 Rue de Rivoli, 75001 Paris",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .block(Block::default().title(" Report ").borders(Borders::ALL).border_style(border_style));
            frame.render_widget(hint, area);
        }

        ReportView::Loading { address } => {
            let block = Block::default()
                .title(" Report ")
                .borders(Borders::ALL)
                .border_style(border_style);
            let inner = block.inner(area);
            frame.render_widget(block, area);

            let throbber = Throbber::default()
                .label(format!("Analyzing {} ...", address.trim()))
                .style(Style::default().fg(Color::Cyan));
            frame.render_stateful_widget(throbber, inner, throbber_state);
        }

        ReportView::Error { message } => {
            let banner = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!(" ✗ {}", message),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    " Press Esc to start over.",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Analysis Failed ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            );
            frame.render_widget(banner, area);
        }

        ReportView::Ready(report) => {
            let paragraph = Paragraph::new(report_lines(report))
                .wrap(Wrap { trim: false })
                .scroll((report_scroll, 0))
                .block(Block::default().title(" Report ").borders(Borders::ALL).border_style(border_style));
            frame.render_widget(paragraph, area);
        }
    }
}

fn render_address_input(
    frame: &mut Frame,
    area: Rect,
    address_input: &mut TextArea,
    view: &ReportView,
    input_focused: bool,
) {
    let pending = matches!(view, ReportView::Loading { .. });

    let (title, border_style) = if pending {
        (" Address (waiting for analysis) ", Style::default().fg(Color::DarkGray))
    } else if input_focused {
        (" Address ", Style::default().fg(Color::Yellow))
    } else {
        (" Address ", Style::default().fg(Color::White))
    };

    address_input.set_block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(&*address_input, area);
}

/// Flatten the report into styled lines, one section after another.
fn report_lines(report: &Report) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (index, section) in report.sections.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        lines.push(section_title(section.title()));

        match section {
            Section::Location(location) => location_lines(location, &mut lines),

            Section::Overview(overview) => {
                if let Some(summary) = &overview.three_word_summary {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", summary),
                        Style::default().add_modifier(Modifier::ITALIC),
                    )));
                }
                if let Some(description) = &overview.description {
                    lines.push(Line::from(format!("  {}", description)));
                }
            }

            Section::WordOfMouth(word_of_mouth) => {
                for (i, paragraph) in word_of_mouth.paragraphs.iter().enumerate() {
                    if i > 0 {
                        lines.push(Line::from(""));
                    }
                    lines.push(Line::from(format!("  {}", paragraph)));
                }
            }

            Section::Ratings(ratings) => {
                for entry in &ratings.entries {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("  {}", entry.glyph),
                            Style::default().fg(Color::Yellow),
                        ),
                        Span::raw(format!("  {}", category_label(&entry.category))),
                    ]));
                    if let Some(justification) = &entry.justification {
                        lines.push(Line::from(Span::styled(
                            format!("      {}", justification),
                            Style::default().fg(Color::DarkGray),
                        )));
                    }
                }
            }

            Section::Highlights(highlights) => {
                for item in &highlights.items {
                    lines.push(Line::from(format!("  • {}", item)));
                }
            }

            Section::Recommendations(recommendations) => {
                let groups = [
                    ("Cafés", &recommendations.cafes),
                    ("Restaurants", &recommendations.restaurants),
                    ("Activities", &recommendations.activities),
                ];
                for (label, items) in groups {
                    if items.is_empty() {
                        continue;
                    }
                    lines.push(Line::from(Span::styled(
                        format!("  {}", label),
                        Style::default().add_modifier(Modifier::UNDERLINED),
                    )));
                    for item in items {
                        lines.push(Line::from(format!("    • {}", item)));
                    }
                }
            }

            Section::Transport(transport) => transport_lines(transport, &mut lines),
        }
    }

    lines
}

fn location_lines(location: &LocationSection, lines: &mut Vec<Line<'static>>) {
    if let Some(number) = location.arrondissement {
        let label = arrondissement_label(number);
        let text = match location.emblem {
            Some(emblem) => format!("  {} {}", emblem, label),
            None => format!("  {}", label),
        };
        lines.push(Line::from(text));
    }
    if let Some(address) = &location.full_address {
        lines.push(Line::from(format!("  {}", address)));
    }
    for detail in &location.details {
        lines.push(Line::from(Span::styled(
            format!("  {}", detail),
            Style::default().fg(Color::DarkGray),
        )));
    }
}

fn transport_lines(transport: &TransportSection, lines: &mut Vec<Line<'static>>) {
    match &transport.connectivity {
        Some(ConnectivityDisplay::Stars(glyph)) => {
            lines.push(Line::from(vec![
                Span::raw("  Connectivity  "),
                Span::styled(glyph.to_string(), Style::default().fg(Color::Yellow)),
            ]));
        }
        Some(ConnectivityDisplay::Plain(score)) => {
            lines.push(Line::from(format!("  Connectivity  {}", score)));
        }
        None => {}
    }

    if let Some(late_night) = transport.late_night_service {
        let text = if late_night {
            "  Late-night metro service nearby"
        } else {
            "  No late-night metro service nearby"
        };
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(Color::DarkGray),
        )));
    }

    if !transport.landmarks.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Landmarks",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )));
        for row in &transport.landmarks {
            let text = match row.icon {
                Some(icon) => format!("    {} {} · {}", icon, row.landmark, row.time),
                None => format!("    {} · {}", row.landmark, row.time),
            };
            lines.push(Line::from(text));
        }
    }

    if !transport.stations.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Nearby stations",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )));
        for row in &transport.stations {
            let mut text = format!("    {}", row.name);
            if let Some(transport_type) = &row.transport_type {
                text.push_str(&format!(" ({})", transport_type));
            }
            if let Some(lines_label) = &row.lines_label {
                text.push_str(&format!(" · lines {}", lines_label));
            }
            if let Some(walk) = row.walk_time_minutes {
                text.push_str(&format!(" · {} min walk", walk));
            }
            lines.push(Line::from(text));
        }
    }
}

fn section_title(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn category_label(raw: &str) -> String {
    raw.replace('_', " ")
}

/// French ordinal label for a district number.
fn arrondissement_label(number: i64) -> String {
    if number == 1 {
        "1er arrondissement".to_string()
    } else {
        format!("{}e arrondissement", number)
    }
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_width = area.width.min(52);
    let popup_height = area.height.min(14);
    let popup_area = Rect {
        x: (area.width.saturating_sub(popup_width)) / 2,
        y: (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    };

    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            " Quartier Help ",
            Style::default().fg(Color::Green),
        )),
        Line::from(""),
        Line::from(" Enter: Analyze the typed address"),
        Line::from(" Esc: Reset and clear the report"),
        Line::from(" Tab: Switch focus input/report"),
        Line::from(" ↑/↓, PgUp/PgDn: Scroll the report"),
        Line::from(" F1: Toggle this help"),
        Line::from(" Ctrl+C: Quit"),
        Line::from(""),
        Line::from(" Press any key to close"),
    ];

    let help_widget = Paragraph::new(help_text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

    frame.render_widget(help_widget, popup_area);
}
