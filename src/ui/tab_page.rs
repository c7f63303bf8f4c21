//! Content card for the active tab.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::components::render_card;
use super::navigation_menu::label_for;
use super::summary_panel::PLACEHOLDER_USER_COUNT;
use super::theme::{Palette, COLOR_FLAGGED};
use crate::models::{GovernanceLog, LogEntry, LogKind, Tab, ViewState};

/// Log rows listed under "Recent activity"
pub const RECENT_ROWS: usize = 10;

/// Body lines for the active tab.
pub fn page_lines(view: &ViewState, log: &GovernanceLog, palette: &Palette) -> Vec<Line<'static>> {
    let muted = Style::default().fg(palette.muted);
    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<22}", label), muted),
            Span::raw(value),
        ])
    };

    match view.active_tab {
        Tab::Transactions => {
            let last = view.last_event_at.map_or_else(
                || "none yet".to_string(),
                |at| at.format("%H:%M:%S UTC").to_string(),
            );
            vec![
                field("Transactions received", view.event_count.to_string()),
                Line::from(vec![
                    Span::styled(format!("{:<22}", "Flagged"), muted),
                    Span::styled(
                        view.flagged_count.to_string(),
                        Style::default()
                            .fg(COLOR_FLAGGED)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                field("Last notification", last),
            ]
        }
        Tab::Bias => vec![
            field("Flag rate", flag_rate(view.flagged_count, view.event_count)),
            Line::styled("Rates are computed over this session only.", muted),
        ],
        Tab::Logs => {
            let mut lines = vec![
                field("Total decisions", view.event_count.to_string()),
                field("Flagged", view.flagged_count.to_string()),
                field("Flag rate", flag_rate(view.flagged_count, view.event_count)),
                Line::default(),
                Line::styled(
                    "Recent activity",
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ];
            if log.is_empty() {
                lines.push(Line::styled("No activity recorded yet.", muted));
            } else {
                lines.extend(log.recent().take(RECENT_ROWS).map(|entry| log_row(entry, palette)));
            }
            lines
        }
        Tab::Users => vec![field("Registered users", PLACEHOLDER_USER_COUNT.to_string())],
    }
}

fn log_row(entry: &LogEntry, palette: &Palette) -> Line<'static> {
    let time = Span::styled(
        format!("{}  ", entry.at.format("%H:%M:%S")),
        Style::default().fg(palette.muted),
    );
    match entry.kind {
        LogKind::Decision {
            transaction_id,
            flagged,
        } => {
            let id = transaction_id.simple().to_string();
            let outcome = if flagged {
                Span::styled("flagged", Style::default().fg(COLOR_FLAGGED))
            } else {
                Span::raw("clear")
            };
            Line::from(vec![
                time,
                Span::raw(format!("{:<10}{}  ", "decision", &id[..8])),
                outcome,
            ])
        }
        LogKind::Consent { granted } => Line::from(vec![
            time,
            Span::raw(format!(
                "{:<10}location permission {}",
                "consent",
                if granted { "granted" } else { "revoked" }
            )),
        ]),
    }
}

/// Percentage of flagged events, one decimal.
pub fn flag_rate(flagged: u64, total: u64) -> String {
    if total == 0 {
        return "n/a".to_string();
    }
    format!("{:.1}%", flagged as f64 * 100.0 / total as f64)
}

pub fn render_tab_page(frame: &mut Frame, area: Rect, view: &ViewState, log: &GovernanceLog) {
    let palette = Palette::for_mode(view.display_mode);
    let inner = render_card(frame, area, label_for(view.active_tab), &palette);
    if inner.height == 0 || inner.width < 2 {
        return;
    }

    let body = Rect {
        x: inner.x + 1,
        y: inner.y + 1,
        width: inner.width - 1,
        height: inner.height.saturating_sub(1),
    };
    let paragraph = Paragraph::new(page_lines(view, log, &palette))
        .style(Style::default().fg(palette.text).bg(palette.surface))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, body);
}
