//! TUI rendering logic for the character browser.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use chardex_api::disney::SearchCriterion;

use super::state::{BrowserState, Focus, Outcome, SelectionList};

/// Draws the character browser UI.
#[allow(clippy::indexing_slicing)]
pub fn draw(frame: &mut Frame, state: &BrowserState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search bar
            Constraint::Min(5),    // main content
            Constraint::Length(3), // footer
        ])
        .split(frame.area());

    draw_search_bar(frame, chunks[0], state);
    draw_main(frame, chunks[1], state);
    draw_footer(frame, chunks[2], state);
}

/// Returns the border style for a pane.
fn border_style(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

/// Draws the query input and the criterion selector.
#[allow(clippy::indexing_slicing)]
fn draw_search_bar(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let bar_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let is_active = state.focus == Focus::Query;
    let input_style = if is_active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let input = Paragraph::new(state.query.as_str())
        .style(input_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(is_active))
                .title(" Search "),
        );
    frame.render_widget(input, bar_chunks[0]);

    let spans: Vec<Span> = SearchCriterion::ALL
        .iter()
        .flat_map(|&criterion| {
            let style = if criterion == state.criterion {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            [Span::styled(criterion.as_str(), style), Span::raw("  ")]
        })
        .collect();
    let criterion = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Criterion "),
    );
    frame.render_widget(criterion, bar_chunks[1]);
}

/// Draws the selection lists (left) and results (right).
#[allow(clippy::indexing_slicing)]
fn draw_main(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let pane_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let list_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(pane_chunks[0]);

    draw_selection_list(
        frame,
        list_chunks[0],
        &state.films,
        " Films ",
        state.focus == Focus::Films,
    );
    draw_selection_list(
        frame,
        list_chunks[1],
        &state.tv_shows,
        " TV Shows ",
        state.focus == Focus::TvShows,
    );
    draw_results(frame, pane_chunks[1], state);
}

/// Draws one selection list with its placeholder entry.
fn draw_selection_list(
    frame: &mut Frame,
    area: Rect,
    list: &SelectionList,
    title: &str,
    is_active: bool,
) {
    let items: Vec<ListItem> = list
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let style = if i == 0 {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(option.as_str(), style))
        })
        .collect();

    let highlight = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let widget = List::new(items)
        .highlight_symbol("\u{25b8} ")
        .highlight_style(highlight)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(is_active))
                .title(format!("{title}({}) ", list.options().len().saturating_sub(1))),
        );

    let mut list_state = ListState::default().with_selected(Some(list.cursor()));
    frame.render_stateful_widget(widget, area, &mut list_state);
}

/// Draws the result pane: cards, a message, or a hint.
fn draw_results(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let is_active = state.focus == Focus::Results;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_active))
        .title(" Results ");

    match &state.outcome {
        Outcome::Results(cards) => {
            let items: Vec<ListItem> = cards
                .iter()
                .map(|card| {
                    let mut lines = vec![Line::from(Span::styled(
                        card.name.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ))];
                    lines.extend(
                        card.lines()
                            .into_iter()
                            .skip(1)
                            .map(|line| Line::from(Span::raw(line))),
                    );
                    lines.push(Line::from(""));
                    ListItem::new(Text::from(lines))
                })
                .collect();

            let widget = List::new(items)
                .highlight_symbol("\u{25b8} ")
                .highlight_style(border_style(is_active).add_modifier(Modifier::BOLD))
                .block(block.title_bottom(format!(" {} characters ", cards.len())));
            let mut list_state = ListState::default().with_selected(Some(state.result_cursor()));
            frame.render_stateful_widget(widget, area, &mut list_state);
        }
        Outcome::Error(message) => {
            let widget = Paragraph::new(message.as_str())
                .style(
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                )
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(widget, area);
        }
        Outcome::Pending => {
            frame.render_widget(Paragraph::new("Searching...").block(block), area);
        }
        Outcome::Idle => {
            let widget = Paragraph::new("Type a query and press Enter, or pick a film / TV show.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(widget, area);
        }
    }
}

/// Draws the footer with key hints.
fn draw_footer(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let help_text = match state.focus {
        Focus::Query => "Type to edit  \u{2191}\u{2193}: criterion  Enter: search  Tab: next pane  Esc: quit",
        Focus::Films | Focus::TvShows => {
            "\u{2191}\u{2193}/j/k: move  Enter: search by selection  Tab: next pane  Esc/q: quit"
        }
        Focus::Results => "\u{2191}\u{2193}/j/k: move  o: open source page  Tab: next pane  Esc/q: quit",
    };

    let footer = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
