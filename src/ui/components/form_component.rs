use crate::constants::{TITLE_FORM_CREATE, TITLE_FORM_EDIT};
use crate::entities::movie::Movie;
use crate::form::{FormField, MovieForm};
use crate::icons::IconService;
use crate::ui::components::dialogs::common::{self, shortcuts};
use crate::ui::components::text_input;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    Frame,
};

/// Create/edit form for a single movie.
///
/// Submitting validates locally first: a form with blank required fields
/// raises an error dialog instead of a backend request.
pub struct FormComponent {
    pub form: MovieForm,
    pub focused_field: FormField,
    pub cursor_position: usize,
    pub focused: bool,
    pub icons: IconService,
}

impl Default for FormComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl FormComponent {
    pub fn new() -> Self {
        Self {
            form: MovieForm::new(),
            focused_field: FormField::Title,
            cursor_position: 0,
            focused: false,
            icons: IconService::default(),
        }
    }

    /// Enter edit mode for `movie`
    pub fn load(&mut self, movie: &Movie) {
        self.form.load(movie);
        self.focus_field(FormField::Title);
    }

    /// Empty the form and leave edit mode
    pub fn clear(&mut self) {
        self.form.clear();
        self.focus_field(FormField::Title);
    }

    fn focus_field(&mut self, field: FormField) {
        self.focused_field = field;
        self.cursor_position = self.form.field(field).chars().count();
    }

    fn submit(&self) -> Action {
        match self.form.to_payload() {
            Ok(payload) => match self.form.editing_id() {
                Some(id) => Action::UpdateMovie {
                    id: id.to_string(),
                    payload,
                },
                None => Action::CreateMovie(payload),
            },
            Err(e) => {
                log::warn!("Form rejected: {:?}", e);
                Action::ShowDialog(DialogType::Error(e.to_string()))
            }
        }
    }
}

impl Component for FormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.focused {
            return Action::None;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus_field(self.focused_field.next());
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_field(self.focused_field.previous());
                Action::None
            }
            KeyCode::Enter => Action::SubmitForm,
            KeyCode::Esc => Action::CancelForm,
            _ => {
                let field = self.form.field_mut(self.focused_field);
                text_input::handle_edit_key(field, &mut self.cursor_position, key);
                Action::None
            }
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NewMovie | Action::CancelForm => {
                self.clear();
                action
            }
            Action::SubmitForm => self.submit(),
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (title, icon, submit) = if self.form.is_editing() {
            (TITLE_FORM_EDIT, self.icons.edit(), shortcuts::ENTER_SAVE)
        } else {
            (TITLE_FORM_CREATE, self.icons.create(), shortcuts::ENTER_ADD)
        };
        let theme_color = if self.focused { Color::Cyan } else { Color::Gray };

        let block = common::create_dialog_block(format!(" {} {} ", icon, title), theme_color);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let mut constraints: Vec<Constraint> = FormField::ALL.iter().map(|_| Constraint::Length(3)).collect();
        constraints.push(Constraint::Length(1));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (field, area) in FormField::ALL.iter().zip(chunks.iter()) {
            let label = if field.is_required() {
                format!("{} *", field.label())
            } else {
                field.label().to_string()
            };
            let is_focused = self.focused && *field == self.focused_field;
            let input = common::create_input_paragraph(self.form.field(*field), &label, field.placeholder(), is_focused);
            f.render_widget(input, *area);

            if is_focused {
                let column = text_input::cursor_column(self.form.field(*field), self.cursor_position);
                let max_column = area.width.saturating_sub(3);
                f.set_cursor_position((area.x + 1 + column.min(max_column), area.y + 1));
            }
        }

        if let Some(instructions_area) = chunks.get(FormField::ALL.len()) {
            let instructions = common::create_instructions_paragraph(&[
                submit,
                shortcuts::SEPARATOR,
                shortcuts::TAB_NEXT,
                shortcuts::SEPARATOR,
                shortcuts::ESC_CANCEL,
            ]);
            f.render_widget(instructions, *instructions_area);
        }
    }
}
