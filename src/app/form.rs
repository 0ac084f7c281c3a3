//! Item creation form - four text fields with cursor editing

use crate::messages::ui_events::FormField;
use crate::models::NewItem;

/// Local state of the creation form. Values are sent to the store as typed.
#[derive(Clone, Debug, Default)]
pub struct ItemForm {
    pub values: NewItem,
    pub active_field: FormField,
    /// Byte offset into the active field
    pub cursor_position: usize,
}

impl ItemForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Id => &self.values.id,
            FormField::Name => &self.values.name,
            FormField::Description => &self.values.description,
            FormField::Quantity => &self.values.quantity,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Id => &mut self.values.id,
            FormField::Name => &mut self.values.name,
            FormField::Description => &mut self.values.description,
            FormField::Quantity => &mut self.values.quantity,
        }
    }

    pub fn current_input(&self) -> &str {
        self.value(self.active_field)
    }

    pub fn focus(&mut self, field: FormField) {
        self.active_field = field;
        self.cursor_position = self.current_input().len();
    }

    pub fn next_field(&mut self) {
        self.focus(self.active_field.next());
    }

    pub fn prev_field(&mut self) {
        self.focus(self.active_field.prev());
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        let input = self.value_mut(self.active_field);
        if cursor_pos <= input.len() {
            input.insert(cursor_pos, c);
            self.cursor_position = cursor_pos + c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let cursor_pos = self.cursor_position;
            let input = self.value_mut(self.active_field);
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    /// Snapshot of the four values for an insert; no validation
    pub fn record(&self) -> NewItem {
        self.values.clone()
    }

    /// Reset every field to empty
    pub fn clear(&mut self) {
        self.values = NewItem::default();
        self.cursor_position = 0;
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.value(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(form: &mut ItemForm, text: &str) {
        for c in text.chars() {
            form.enter_char(c);
        }
    }

    #[test]
    fn typing_fills_active_field() {
        let mut form = ItemForm::new();
        type_str(&mut form, "12");
        form.next_field();
        type_str(&mut form, "Washer");
        assert_eq!(form.value(FormField::Id), "12");
        assert_eq!(form.value(FormField::Name), "Washer");
        assert_eq!(form.cursor_position, 6);
    }

    #[test]
    fn edits_at_cursor_with_multibyte_chars() {
        let mut form = ItemForm::new();
        form.focus(FormField::Description);
        type_str(&mut form, "größe");
        form.move_cursor_left();
        form.move_cursor_left();
        form.delete_char();
        assert_eq!(form.value(FormField::Description), "grße");
        assert_eq!(form.cursor_position, 2);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut form = ItemForm::new();
        type_str(&mut form, "7");
        form.move_cursor_left();
        form.delete_char();
        assert_eq!(form.value(FormField::Id), "7");
    }

    #[test]
    fn focus_moves_cursor_to_end() {
        let mut form = ItemForm::new();
        form.focus(FormField::Quantity);
        type_str(&mut form, "100");
        form.focus(FormField::Id);
        assert_eq!(form.cursor_position, 0);
        form.focus(FormField::Quantity);
        assert_eq!(form.cursor_position, 3);
    }

    #[test]
    fn record_keeps_raw_values_and_clear_empties() {
        let mut form = ItemForm::new();
        type_str(&mut form, "x1");
        form.focus(FormField::Quantity);
        type_str(&mut form, "-3");

        let record = form.record();
        assert_eq!(record.id, "x1");
        assert_eq!(record.name, "");
        assert_eq!(record.quantity, "-3");

        form.clear();
        assert!(form.is_empty());
        assert_eq!(form.cursor_position, 0);
    }
}
