use crate::catalog::{visible_movies, Catalog, CatalogService, SortKey};
use crate::config::{Config, DisplayConfig};
use crate::constants::{EMPTY_CATALOG, EMPTY_NO_MATCH, ERROR_MOVIE_GONE, STATUS_LOADING};
use crate::entities::movie::Movie;
use crate::form::MovieForm;
use crate::icons::IconService;
use crate::ui::components::{
    movie_detail, status_bar, DialogComponent, FormComponent, MovieListComponent, SearchBarComponent, StatusInfo,
};
use crate::ui::core::{
    actions::{Action, DialogType, Focus, Operation},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info, warn};
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc;

/// Upper bound on follow-up actions produced while handling one input
const MAX_ACTION_CHAIN: usize = 8;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub catalog: Catalog,
    pub query: String,
    pub sort: SortKey,
    pub focus: Focus,
    pub loading: bool,
}

pub struct AppComponent {
    // Component composition
    search_bar: SearchBarComponent,
    movie_list: MovieListComponent,
    form: FormComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,

    // Services
    service: CatalogService,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    // Presentation settings
    icons: IconService,
    display: DisplayConfig,
    form_width: u16,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(service: CatalogService, config: &Config) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();

        let state = AppState {
            sort: config.ui.sort_key(),
            ..Default::default()
        };

        let mut app = Self {
            search_bar: SearchBarComponent::new(),
            movie_list: MovieListComponent::new(),
            form: FormComponent::new(),
            dialog: DialogComponent::new(),
            state,
            service,
            task_manager,
            background_action_rx,
            icons: IconService::new(config.ui.icon_theme),
            display: config.display.clone(),
            form_width: config.ui.form_width,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn form(&self) -> &MovieForm {
        &self.form.form
    }

    pub fn form_mut(&mut self) -> &mut MovieForm {
        &mut self.form.form
    }

    /// Currently open dialog, if any
    pub fn dialog(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    /// Movie under the list cursor
    pub fn selected_movie(&self) -> Option<&Movie> {
        self.movie_list.selected_movie()
    }

    /// Movies matching the current search, in the current sort order
    pub fn visible_movies(&self) -> Vec<&Movie> {
        visible_movies(self.state.catalog.movies(), &self.state.query, self.state.sort)
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Fetch the catalogue on startup
    pub fn start(&mut self) {
        info!("Loading movies from {}", self.service.endpoint());
        self.schedule_fetch();
        self.sync_component_data();
    }

    fn schedule_fetch(&mut self) {
        if self.task_manager.is_running(Operation::Fetch) {
            debug!("Fetch already in progress, ignoring");
            return;
        }
        self.state.loading = true;
        self.task_manager.spawn_fetch(self.service.clone());
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.state.focus != focus {
            debug!("Focus: {:?} -> {:?}", self.state.focus, focus);
            self.state.focus = focus;
        }
    }

    /// Push derived state into the components
    fn sync_component_data(&mut self) {
        let visible: Vec<Movie> = self.visible_movies().into_iter().cloned().collect();
        let empty_message = if self.state.loading && self.state.catalog.is_empty() {
            STATUS_LOADING
        } else if self.state.catalog.is_empty() {
            EMPTY_CATALOG
        } else {
            EMPTY_NO_MATCH
        };
        self.movie_list.update_data(visible, empty_message);

        self.search_bar.sort = self.state.sort;
        self.search_bar.focused = self.state.focus == Focus::Search;
        self.movie_list.focused = self.state.focus == Focus::List;
        self.form.focused = self.state.focus == Focus::Form;

        self.search_bar.icons = self.icons.clone();
        self.movie_list.icons = self.icons.clone();
        self.form.icons = self.icons.clone();
        self.dialog.icons = self.icons.clone();
    }

    fn status_info(&self) -> StatusInfo {
        StatusInfo {
            visible: self.movie_list.movies.len(),
            total: self.state.catalog.len(),
            sort: self.state.sort,
            query: self.state.query.clone(),
            focus: self.state.focus,
            editing: self.form.form.is_editing(),
            loading: self.state.loading,
            in_flight: self.task_manager.task_count(),
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('?') | KeyCode::Char('h') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('/') => Action::FocusSearch,
            KeyCode::Char('s') => Action::CycleSort,
            KeyCode::Char('r') => Action::FetchMovies,
            KeyCode::Char('a') | KeyCode::Char('n') => Action::NewMovie,
            KeyCode::Char('i') => Action::CycleIconTheme,
            KeyCode::Tab => Action::FocusForm,
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic.
    ///
    /// Returns a follow-up action for the component hierarchy, or
    /// `Action::None`.
    pub async fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                info!("Quitting");
                self.task_manager.cancel_all_tasks();
                self.should_quit = true;
                Action::None
            }
            Action::FocusList => {
                self.set_focus(Focus::List);
                Action::None
            }
            Action::FocusSearch => {
                self.set_focus(Focus::Search);
                Action::None
            }
            Action::FocusForm => {
                self.set_focus(Focus::Form);
                Action::None
            }
            Action::SearchChanged(query) => {
                self.state.query = query;
                Action::None
            }
            Action::ClearSearch => {
                self.state.query.clear();
                self.set_focus(Focus::List);
                Action::None
            }
            Action::CycleSort => {
                self.state.sort = self.state.sort.next();
                debug!("Sort: {}", self.state.sort);
                Action::None
            }
            Action::NewMovie => {
                self.set_focus(Focus::Form);
                Action::None
            }
            Action::EditMovie(id) => match self.state.catalog.get(&id).cloned() {
                Some(movie) => {
                    info!("Editing movie '{}' ({})", movie.title, movie.id);
                    self.form.load(&movie);
                    self.set_focus(Focus::Form);
                    Action::None
                }
                None => {
                    warn!("Edit requested for unknown movie {}", id);
                    Action::ShowDialog(DialogType::Error(ERROR_MOVIE_GONE.to_string()))
                }
            },
            Action::CancelForm => {
                self.set_focus(Focus::List);
                Action::None
            }
            Action::FetchMovies => {
                self.schedule_fetch();
                Action::None
            }
            Action::CreateMovie(payload) => {
                info!("Creating movie '{}'", payload.title);
                self.task_manager.spawn_create(self.service.clone(), payload);
                Action::None
            }
            Action::UpdateMovie { id, payload } => {
                info!("Saving movie {} ('{}')", id, payload.title);
                self.task_manager.spawn_update(self.service.clone(), id, payload);
                Action::None
            }
            Action::DeleteMovie(id) => {
                info!("Deleting movie {}", id);
                self.task_manager.spawn_delete(self.service.clone(), id);
                Action::None
            }
            Action::MoviesLoaded(movies) => {
                self.state.catalog.replace_all(movies);
                self.state.loading = false;
                Action::None
            }
            Action::MovieCreated(movie) => {
                self.state.catalog.insert(movie);
                self.finish_form();
                Action::None
            }
            Action::MovieUpdated { id, movie } => {
                if !self.state.catalog.replace(&id, movie) {
                    warn!("Updated movie {} is not in the list", id);
                }
                self.finish_form();
                Action::None
            }
            Action::MovieDeleted(id) => {
                self.state.catalog.remove(&id);
                if self.form.form.editing_id() == Some(id.as_str()) {
                    self.form.clear();
                    if self.state.focus == Focus::Form {
                        self.set_focus(Focus::List);
                    }
                }
                Action::None
            }
            Action::RequestFailed { operation, error } => {
                // Already logged by the service; the list stays as it was
                debug!("Request to {} failed: {}", operation, error);
                if operation == Operation::Fetch {
                    self.state.loading = false;
                }
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                info!("Icon theme: {:?}", self.icons.theme());
                Action::None
            }
            // Raised after the dialog saw this round; route it again
            Action::ShowDialog(dialog_type) => Action::ShowDialog(dialog_type),
            // Anything else was already handled by a component
            _ => Action::None,
        }
    }

    /// Reset the form after a successful create or save
    fn finish_form(&mut self) {
        self.form.clear();
        if self.state.focus == Focus::Form {
            self.set_focus(Focus::List);
        }
    }

    /// Run an action through the components and the app, following any
    /// follow-up actions they produce
    pub async fn dispatch(&mut self, action: Action) {
        let mut next = action;
        for _ in 0..MAX_ACTION_CHAIN {
            if matches!(next, Action::None) {
                break;
            }
            let routed = self.update(next);
            next = self.handle_app_action(routed).await;
        }
        self.sync_component_data();
    }

    /// Drain results sent by background requests
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            debug!("Background: received {:?}", action);
            actions.push(action);
        }

        let finished = self.task_manager.cleanup_finished_tasks();
        if !finished.is_empty() {
            debug!("Background: cleaned up {} finished tasks", finished.len());
        }

        actions
    }

    /// Apply every pending background result; returns whether anything changed
    pub async fn apply_background_actions(&mut self) -> bool {
        let actions = self.process_background_actions();
        let changed = !actions.is_empty();
        for action in actions {
            self.dispatch(action).await;
        }
        changed
    }

    /// Process an event through the component hierarchy
    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Mouse(mouse) => {
                if self.dialog.is_visible() {
                    Action::None
                } else {
                    self.movie_list.handle_mouse_events(mouse)
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.dispatch(action).await;
        Ok(())
    }

    /// Send a key to whoever owns it: an open dialog, the focused pane, then
    /// the global shortcuts
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        match self.state.focus {
            Focus::Search => self.search_bar.handle_key_events(key),
            Focus::Form => self.form.handle_key_events(key),
            Focus::List => {
                let list_action = self.movie_list.handle_key_events(key);
                if matches!(list_action, Action::None) {
                    self.handle_global_key(key)
                } else {
                    list_action
                }
            }
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);
        let action = self.search_bar.update(action);
        let action = self.movie_list.update(action);
        self.form.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);
        let body = LayoutManager::body_layout(chunks[1], self.form_width);

        self.search_bar.render(f, chunks[0]);
        self.movie_list.render(f, body[0]);

        if body[1].width > 0 {
            let side = LayoutManager::side_layout(body[1]);
            movie_detail::render_movie_detail(f, side[0], self.movie_list.selected_movie(), &self.icons, &self.display);
            self.form.render(f, side[1]);
        }

        status_bar::render_status_bar(f, chunks[2], &self.status_info(), &self.icons);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
