use inline_markup_engine::{
    MarkupKind,
    text::{line_start, offset_to_point},
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, markup_ranges};

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    // Editor panel
    let content = app.document.text();
    let (row, _) = offset_to_point(&content, app.head);
    let visible_rows = chunks[0].height.saturating_sub(2);
    let row = u16::try_from(row).unwrap_or(u16::MAX);
    if row < app.scroll {
        app.scroll = row;
    } else if visible_rows > 0 && row >= app.scroll + visible_rows {
        app.scroll = row - visible_rows + 1;
    }

    let title = format!(
        "{}{}",
        app.path.display(),
        if app.is_dirty() { " [+]" } else { "" }
    );
    let editor = Paragraph::new(styled_lines(&content, app))
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((app.scroll, 0));
    f.render_widget(editor, chunks[0]);

    let col = cursor_column(&content, app.head);
    f.set_cursor_position(Position::new(
        chunks[0].x.saturating_add(1).saturating_add(col),
        chunks[0].y + 1 + (row - app.scroll),
    ));

    // Formatting indicators, pressed when the cursor is inside a span
    let indicator = |label: &'static str, pressed: bool| {
        let style = if pressed {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(label, style)
    };
    let status = Line::from(vec![
        indicator(" B ", app.formatting.bold),
        Span::raw(" "),
        indicator(" H ", app.formatting.highlight),
        Span::raw("  "),
        Span::raw(app.status.clone()),
    ]);
    f.render_widget(Paragraph::new(status), chunks[1]);

    let help_text = Line::from(vec![
        Span::raw("Esc/^Q: Quit | "),
        Span::raw("^S: Save | "),
        Span::raw("^B: Bold | "),
        Span::raw("^G: Highlight | "),
        Span::raw("Shift+arrows: Select"),
    ]);
    f.render_widget(Paragraph::new(help_text), chunks[2]);
}

/// Terminal cells between the start of the cursor's line and the cursor.
fn cursor_column(content: &str, head: usize) -> u16 {
    let width = content
        .get(line_start(content, head)..head)
        .map_or(0, |prefix| Line::raw(prefix).width());
    u16::try_from(width).unwrap_or(u16::MAX)
}

/// Split the buffer into lines of styled runs: bold spans bold, highlight
/// spans on yellow, the selection reversed.
fn styled_lines(content: &str, app: &App) -> Vec<Line<'static>> {
    let bold = markup_ranges(content, MarkupKind::Bold);
    let highlight = markup_ranges(content, MarkupKind::Highlight);
    let selection = app.document.selection().range();

    let style_at = |offset: usize| {
        let mut style = Style::default();
        if bold.iter().any(|r| r.contains(&offset)) {
            style = style.add_modifier(Modifier::BOLD);
        }
        if highlight.iter().any(|r| r.contains(&offset)) {
            style = style.bg(Color::Yellow).fg(Color::Black);
        }
        if selection.contains(&offset) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    };

    let mut lines = Vec::new();
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_style = Style::default();

    for (offset, ch) in content.char_indices() {
        if ch == '\n' {
            if !run.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut run), run_style));
            }
            lines.push(Line::from(std::mem::take(&mut spans)));
            continue;
        }
        let style = style_at(offset);
        if style != run_style && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), run_style));
        }
        run_style = style;
        run.push(ch);
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, run_style));
    }
    lines.push(Line::from(spans));

    lines
}
