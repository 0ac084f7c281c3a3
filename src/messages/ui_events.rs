//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Panel navigation
    NextPanel,

    // Form
    NextField,
    PrevField,
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,
    SubmitForm,

    // List
    SelectNext,
    SelectPrev,
    DeleteSelected,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Active panel in the UI (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Panel {
    #[default]
    Form,
    List,
}

impl Panel {
    pub fn next(&self) -> Panel {
        match self {
            Panel::Form => Panel::List,
            Panel::List => Panel::Form,
        }
    }
}

/// Form input fields, in display order
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FormField {
    #[default]
    Id,
    Name,
    Description,
    Quantity,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Id,
        FormField::Name,
        FormField::Description,
        FormField::Quantity,
    ];

    pub fn next(&self) -> FormField {
        match self {
            FormField::Id => FormField::Name,
            FormField::Name => FormField::Description,
            FormField::Description => FormField::Quantity,
            FormField::Quantity => FormField::Id,
        }
    }

    pub fn prev(&self) -> FormField {
        match self {
            FormField::Id => FormField::Quantity,
            FormField::Name => FormField::Id,
            FormField::Description => FormField::Name,
            FormField::Quantity => FormField::Description,
        }
    }

    /// Placeholder text shown when the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Id => "Id",
            FormField::Name => "Name",
            FormField::Description => "Description",
            FormField::Quantity => "Quantity",
        }
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_panel: Panel,
    input_mode: InputMode,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Tab | KeyCode::BackTab => Some(UiEvent::NextPanel),
            _ => match active_panel {
                Panel::Form => form_keys(key.code),
                Panel::List => list_keys(key.code),
            },
        },
        // Only the form has editable fields
        InputMode::Editing => match key.code {
            KeyCode::Esc => Some(UiEvent::StopEditing),
            KeyCode::Enter => Some(UiEvent::SubmitForm),
            KeyCode::Tab => Some(UiEvent::NextField),
            KeyCode::BackTab => Some(UiEvent::PrevField),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}

fn form_keys(code: KeyCode) -> Option<UiEvent> {
    match code {
        KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::StartEditing),
        KeyCode::Char('s') => Some(UiEvent::SubmitForm),
        KeyCode::Up | KeyCode::Left => Some(UiEvent::PrevField),
        KeyCode::Down | KeyCode::Right => Some(UiEvent::NextField),
        _ => None,
    }
}

fn list_keys(code: KeyCode) -> Option<UiEvent> {
    match code {
        KeyCode::Up => Some(UiEvent::SelectPrev),
        KeyCode::Down => Some(UiEvent::SelectNext),
        KeyCode::Char('d') | KeyCode::Delete => Some(UiEvent::DeleteSelected),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_quits_even_while_editing() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            key_to_ui_event(key, Panel::Form, InputMode::Editing, false),
            Some(UiEvent::Quit)
        );
    }

    #[test]
    fn letters_are_text_while_editing() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('q')), Panel::Form, InputMode::Editing, false),
            Some(UiEvent::CharInput('q'))
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('q')), Panel::Form, InputMode::Normal, false),
            Some(UiEvent::Quit)
        );
    }

    #[test]
    fn enter_submits_while_editing() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Enter), Panel::Form, InputMode::Editing, false),
            Some(UiEvent::SubmitForm)
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Enter), Panel::Form, InputMode::Normal, false),
            Some(UiEvent::StartEditing)
        );
    }

    #[test]
    fn delete_only_from_list() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('d')), Panel::List, InputMode::Normal, false),
            Some(UiEvent::DeleteSelected)
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('d')), Panel::Form, InputMode::Normal, false),
            None
        );
    }

    #[test]
    fn any_key_closes_help() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('d')), Panel::List, InputMode::Normal, true),
            Some(UiEvent::CloseHelp)
        );
    }

    #[test]
    fn releases_are_ignored() {
        let key = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(key_to_ui_event(key, Panel::Form, InputMode::Normal, false), None);
    }

    #[test]
    fn fields_cycle_both_ways() {
        for field in FormField::ALL {
            assert_eq!(field.next().prev(), field);
        }
        assert_eq!(FormField::Quantity.next(), FormField::Id);
    }
}
