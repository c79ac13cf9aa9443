use crate::export::PayloadSink;
use crate::form::{AssemblyMode, FieldId, FormController, VoidField, WallField};
use crate::model::{FieldGroup, SELECTABLE_ELEMENT_TYPES};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{DefaultTerminal, Frame};

/// One focusable line of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    ElementType,
    Field(FieldId),
    Generate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub is_error: bool,
}

pub struct App<S> {
    pub controller: FormController<S>,
    pub focused: usize,
    pub status: Option<StatusLine>,
    /// Pretty JSON of the most recent payload.
    pub last_payload: Option<String>,
    pub should_quit: bool,
}

impl<S: PayloadSink> App<S> {
    #[must_use]
    pub fn new(controller: FormController<S>) -> Self {
        Self {
            controller,
            focused: 0,
            status: None,
            last_payload: None,
            should_quit: false,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        super::form_view::draw_form(frame, self);
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }
            self.handle_key(key);
        }
        Ok(())
    }

    /// Rows currently shown, in display order.
    #[must_use]
    pub fn rows(&self) -> Vec<FormRow> {
        let visibility = self.controller.visibility();
        let mut rows = vec![FormRow::ElementType];

        if visibility.is_shown(FieldGroup::Wall) {
            rows.extend(
                WallField::ALL
                    .into_iter()
                    .map(|f| FormRow::Field(FieldId::Wall(f))),
            );
            rows.push(FormRow::Field(FieldId::HasVoid));
        }

        if visibility.is_shown(FieldGroup::Void) {
            for index in 0..self.controller.state().voids().len() {
                rows.extend(
                    VoidField::ALL
                        .into_iter()
                        .map(|field| FormRow::Field(FieldId::Void { index, field })),
                );
            }
        }

        rows.push(FormRow::Generate);
        rows
    }

    #[must_use]
    pub fn focused_row(&self) -> FormRow {
        self.rows()
            .get(self.focused)
            .copied()
            .unwrap_or(FormRow::Generate)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::BackTab => self.focus_previous(),
            KeyCode::Down | KeyCode::Tab => self.focus_next(),
            KeyCode::F(2) => self.add_void(),
            KeyCode::F(3) => self.remove_void(),
            KeyCode::F(4) => self.toggle_mode(),
            KeyCode::F(5) => self.generate(),
            code => self.handle_row_key(code),
        }
    }

    fn handle_row_key(&mut self, code: KeyCode) {
        match (self.focused_row(), code) {
            (FormRow::ElementType, KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter) => {
                self.cycle_element_type(true);
            }
            (FormRow::ElementType, KeyCode::Left) => self.cycle_element_type(false),
            (FormRow::Field(FieldId::HasVoid), KeyCode::Char(' ') | KeyCode::Enter) => {
                let checked = !self.controller.state().has_void;
                self.controller.void_toggled(checked);
                self.clamp_focus();
            }
            (FormRow::Field(id), KeyCode::Char(c)) => {
                if let Some(text) = self.controller.field_mut(id) {
                    text.push(c);
                }
            }
            (FormRow::Field(id), KeyCode::Backspace) => {
                if let Some(text) = self.controller.field_mut(id) {
                    text.pop();
                }
            }
            (FormRow::Field(_), KeyCode::Enter) => self.focus_next(),
            (FormRow::Generate, KeyCode::Enter | KeyCode::Char(' ')) => self.generate(),
            _ => {}
        }
    }

    fn focus_previous(&mut self) {
        if self.focused > 0 {
            self.focused -= 1;
        }
    }

    fn focus_next(&mut self) {
        if self.focused < self.rows().len().saturating_sub(1) {
            self.focused += 1;
        }
    }

    fn clamp_focus(&mut self) {
        let max = self.rows().len().saturating_sub(1);
        if self.focused > max {
            self.focused = max;
        }
    }

    /// Steps through the selector options. Position 0 is "nothing selected".
    fn cycle_element_type(&mut self, forward: bool) {
        let count = SELECTABLE_ELEMENT_TYPES.len() + 1;
        let current = SELECTABLE_ELEMENT_TYPES
            .iter()
            .position(|t| *t == self.controller.state().element_type)
            .map_or(0, |i| i + 1);
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        let value = if next == 0 {
            ""
        } else {
            SELECTABLE_ELEMENT_TYPES[next - 1]
        };

        self.controller.element_type_changed(value);
        self.clamp_focus();
    }

    fn add_void(&mut self) {
        if !self.controller.visibility().void_fields {
            return;
        }
        self.controller.add_void();
        let count = self.controller.state().voids().len();
        self.set_status(format!("Added void {count}"), false);
    }

    /// Removes the focused void row, or the last one when focus is elsewhere.
    fn remove_void(&mut self) {
        if !self.controller.visibility().void_fields {
            return;
        }
        let index = match self.focused_row() {
            FormRow::Field(FieldId::Void { index, .. }) => index,
            _ => self.controller.state().voids().len() - 1,
        };
        if self.controller.remove_void(index) {
            self.set_status(format!("Removed void {}", index + 1), false);
            self.clamp_focus();
        } else {
            self.set_status("At least one void row is kept".to_string(), true);
        }
    }

    fn toggle_mode(&mut self) {
        let mode = match self.controller.mode() {
            AssemblyMode::Lenient => AssemblyMode::Strict,
            AssemblyMode::Strict => AssemblyMode::Lenient,
        };
        self.controller.set_mode(mode);
        self.set_status(format!("Mode: {}", mode_name(mode)), false);
    }

    fn generate(&mut self) {
        match self.controller.generate() {
            Ok(payload) => {
                self.last_payload = serde_json::to_string_pretty(&payload).ok();
                let message = format!(
                    "Generated wall data for '{}' with {} void(s)",
                    payload.element_data.wall_id,
                    payload.void_count()
                );
                self.set_status(message, false);
            }
            Err(e) => self.set_status(e.to_string(), true),
        }
    }

    fn set_status(&mut self, message: String, is_error: bool) {
        self.status = Some(StatusLine { message, is_error });
    }
}

#[must_use]
pub fn mode_name(mode: AssemblyMode) -> &'static str {
    match mode {
        AssemblyMode::Lenient => "lenient",
        AssemblyMode::Strict => "strict",
    }
}
