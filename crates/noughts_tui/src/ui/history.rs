//! History panel: sort-order toggle, move counter, jump list.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::markup::styled_line;
use crate::app::{App, Focus};

/// Renders the history pane: sort indicator, pluralized move counter, and
/// one jump row per history step in display order.
pub fn render_history(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(app.history_title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let sort = Paragraph::new(app.sort_line()).style(Style::default().fg(Color::DarkGray));
    f.render_widget(sort, chunks[0]);

    let counter = Paragraph::new(styled_line(
        &app.moves_line(),
        Style::default().fg(Color::Gray),
    ));
    f.render_widget(counter, chunks[1]);

    let order = app.game().display_order();
    let items: Vec<ListItem> = order
        .iter()
        .map(|&step| {
            let mut style = Style::default();
            if step == app.game().current_step() {
                style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            ListItem::new(Line::styled(app.history_label(step), style))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if app.focus() == Focus::History {
        state.select(order.iter().position(|&step| step == app.selected_step()));
    }
    f.render_stateful_widget(list, chunks[3], &mut state);
}
