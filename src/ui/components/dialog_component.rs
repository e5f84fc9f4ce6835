//! Modal dialog component.
//!
//! Hosts the delete confirmation, error and info alerts, and the help and
//! logs panels. While a dialog is visible it receives every key.

use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::dialogs::{system_dialogs, DialogScroll};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub icons: IconService,
    pub scroll: DialogScroll,
    logger: Logger,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            icons: IconService::default(),
            scroll: DialogScroll::new(),
            logger: Logger::global(),
        }
    }

    /// Read the logs dialog from `logger` instead of the global buffer
    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = logger;
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll.reset();
    }

    fn handle_confirmation_key(&mut self, key: KeyEvent, movie_id: String) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                self.clear_dialog();
                Action::DeleteMovie(movie_id)
            }
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('q') => Action::HideDialog,
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return Action::None;
        };

        match dialog_type {
            DialogType::DeleteConfirmation { movie_id, .. } => self.handle_confirmation_key(key, movie_id),
            DialogType::Info(_) | DialogType::Error(_) => {
                // Scroll keys scroll, anything else dismisses
                if self.scroll.handle_key(key) {
                    Action::None
                } else {
                    Action::HideDialog
                }
            }
            DialogType::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.scroll.handle_key(key);
                    Action::None
                }
            },
            DialogType::Logs => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.scroll.handle_key(key);
                    Action::None
                }
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.scroll.reset();
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::DeleteConfirmation { title, .. } => {
                system_dialogs::render_delete_confirmation_dialog(f, rect, &self.icons, &title);
            }
            DialogType::Info(message) => {
                system_dialogs::render_info_dialog(f, rect, &self.icons, &message, &mut self.scroll);
            }
            DialogType::Error(message) => {
                system_dialogs::render_error_dialog(f, rect, &self.icons, &message, &mut self.scroll);
            }
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, &mut self.scroll),
            DialogType::Logs => {
                let logs = self.logger.get_logs();
                system_dialogs::render_logs_dialog(f, rect, &logs, &mut self.scroll);
            }
        }
    }
}
