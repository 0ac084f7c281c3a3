//! Terminal drawing - renders a `RenderState` snapshot

use ratatui::{prelude::*, widgets::*};

use crate::constants::APP_NAME;
use crate::messages::ui_events::{FormField, InputMode, Panel};
use crate::messages::RenderState;

/// Label of the per-row delete control
pub const DELETE_CONTROL: &str = "[Delete]";

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Form
            Constraint::Min(3),    // Item list
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", APP_NAME),
        Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
    )));
    f.render_widget(title, chunks[0]);

    draw_form(f, state, chunks[1]);
    draw_item_list(f, state, chunks[2]);
    draw_status_bar(f, state, chunks[3]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_form(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Form;

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10),     // Id
            Constraint::Percentage(25), // Name
            Constraint::Min(10),        // Description
            Constraint::Length(12),     // Quantity
            Constraint::Length(12),     // Submit
        ])
        .split(area);

    for (i, field) in FormField::ALL.iter().enumerate() {
        let value = match field {
            FormField::Id => &state.form.id,
            FormField::Name => &state.form.name,
            FormField::Description => &state.form.description,
            FormField::Quantity => &state.form.quantity,
        };
        let is_active = is_focused && state.active_field == *field;
        draw_input(f, cells[i], field.placeholder(), value, is_active, state.input_mode);

        if is_active && state.input_mode == InputMode::Editing {
            let cell = cells[i];
            let max_x = cell.x.saturating_add(cell.width.saturating_sub(2));
            let typed = value[..state.cursor_position.min(value.len())].chars().count();
            let offset = u16::try_from(typed).unwrap_or(u16::MAX);
            let cursor_x = cell.x.saturating_add(offset).saturating_add(1).min(max_x);
            f.set_cursor_position(Position::new(cursor_x, cell.y.saturating_add(1)));
        }
    }

    let button = Paragraph::new("Add Item")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green).bold())
        .block(Block::default().borders(Borders::ALL).title(" s "));
    f.render_widget(button, cells[4]);
}

fn draw_input(f: &mut Frame, area: Rect, placeholder: &str, value: &str, is_active: bool, mode: InputMode) {
    let border_style = if is_active && mode == InputMode::Editing {
        Style::default().fg(Color::Yellow)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default().borders(Borders::ALL).border_style(border_style);

    let content = if value.is_empty() {
        Paragraph::new(Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray)))
    } else {
        Paragraph::new(value.to_string())
    };
    f.render_widget(content.block(block), area);
}

fn draw_item_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::List;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let rows: Vec<ListItem> = state
        .items
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::raw(item.display_line()),
                Span::raw("  "),
                Span::styled(DELETE_CONTROL, Style::default().fg(Color::Red)),
            ]))
        })
        .collect();

    let highlight_style = if is_focused {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default()
    };

    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" Items ({}) ", state.items.len())),
        )
        .highlight_style(highlight_style)
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if is_focused && !state.items.is_empty() {
        list_state.select(Some(state.selected));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.input_mode == InputMode::Editing {
        " ESC:stop editing | Tab:next field | Enter:add item "
    } else if state.active_panel == Panel::List {
        " Tab:form | ↑/↓:select | d:delete | ?:help | q:quit "
    } else {
        " Tab:list | ↑/↓:field | e:edit | s:add item | ?:help | q:quit "
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 KEYBOARD SHORTCUTS

 NAVIGATION
   Tab                Switch between form and list
   ↑ / ↓              Move between fields / rows

 FORM
   e / Enter          Edit current field
   Tab                Next field (while editing)
   Enter / s          Add item

 LIST
   d / Del            Delete selected item

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Item, NewItem};
    use ratatui::backend::TestBackend;

    fn render(state: &RenderState) -> Vec<String> {
        let backend = TestBackend::new(80, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, state)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    #[test]
    fn renders_one_row_per_item_with_delete_control() {
        let items: Vec<Item> = serde_json::from_str(
            r#"[{"id":1,"name":"Bolt","description":"M4","quantity":"10"}]"#,
        )
        .unwrap();
        let state = RenderState {
            items,
            ..Default::default()
        };

        let lines = render(&state);
        let rows: Vec<&String> = lines.iter().filter(|l| l.contains(DELETE_CONTROL)).collect();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].contains("1 - Bolt - M4 - 10"));
    }

    #[test]
    fn empty_collection_renders_no_rows() {
        let lines = render(&RenderState::default());
        assert!(lines.iter().all(|l| !l.contains(DELETE_CONTROL)));
        assert!(lines.iter().any(|l| l.contains("Items (0)")));
    }

    #[test]
    fn form_shows_placeholders_then_values() {
        let mut state = RenderState::default();
        let lines = render(&state);
        assert!(lines.iter().any(|l| l.contains("Quantity")));

        state.form.name = "Washer".into();
        let lines = render(&state);
        assert!(lines.iter().any(|l| l.contains("Washer")));
        assert!(!lines.iter().any(|l| l.contains("Name ")));
    }

    #[test]
    fn cursor_stays_inside_field_for_oversized_input() {
        let long = "x".repeat(70_000);
        let state = RenderState {
            form: NewItem {
                id: long.clone(),
                ..Default::default()
            },
            active_field: FormField::Id,
            cursor_position: long.len(),
            input_mode: InputMode::Editing,
            ..Default::default()
        };

        let backend = TestBackend::new(80, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &state)).unwrap();

        let cursor = terminal.get_cursor_position().unwrap();
        assert!(cursor.x < 80);
        assert!(cursor.y < 16);
    }
}
