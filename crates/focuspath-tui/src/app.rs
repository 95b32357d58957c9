use crate::analysis::{AnalysisResult, PendingAnalysis};
use crate::board::{BoardCursor, BoardLayout};
use crate::components::Banner;
use crate::drag::DragState;
use crate::edit_dialog::EditDialogState;
use crate::events::{Event, EventHandler};
use crate::filter_dialog::FilterDialogState;
use crate::ui;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use focuspath_ai::{ClassifyError, TaskClassifier};
use focuspath_core::{FocusResult, TextBuffer};
use focuspath_domain::{BoardView, DropTarget, PlanStore, TaskId};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;

const BANNER_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    /// Typing the brain dump.
    Input,
    Board,
    EditTask,
    Filter,
    Search,
    Help(Box<AppMode>),
}

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub store: PlanStore,
    pub cursor: BoardCursor,
    pub drag: DragState,
    /// Task picked up with the keyboard.
    pub carrying: Option<TaskId>,
    pub edit_dialog: Option<EditDialogState>,
    pub filter_dialog: Option<FilterDialogState>,
    pub search_input: TextBuffer,
    pub banner: Option<Banner>,
    pub analysis: Option<PendingAnalysis>,
    pub layout: BoardLayout,
    classifier: Result<Arc<dyn TaskClassifier>, String>,
}

impl App {
    /// `classifier` may be unavailable (for example no API key); the app
    /// still starts and reports the problem when an analysis is requested.
    pub fn new(classifier: Result<Arc<dyn TaskClassifier>, ClassifyError>) -> Self {
        if let Err(e) = &classifier {
            tracing::warn!("Classifier unavailable: {}", e);
        }
        Self {
            should_quit: false,
            mode: AppMode::Input,
            store: PlanStore::new(),
            cursor: BoardCursor::default(),
            drag: DragState::default(),
            carrying: None,
            edit_dialog: None,
            filter_dialog: None,
            search_input: TextBuffer::new(),
            banner: None,
            analysis: None,
            layout: BoardLayout::default(),
            classifier: classifier.map_err(|e| e.to_string()),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn is_loading(&self) -> bool {
        self.analysis.is_some()
    }

    pub fn view(&self) -> BoardView {
        self.store.view()
    }

    pub fn selected_task(&self) -> Option<TaskId> {
        self.cursor.selected(&self.view())
    }

    /// Keep the cursor valid after the visible set changes.
    pub fn refresh_cursor(&mut self) {
        let view = self.view();
        self.cursor.clamp(&view);
    }

    /// Send the brain dump for classification.
    ///
    /// Ignored while a request is outstanding or when the input is blank.
    pub fn submit_analysis(&mut self) {
        if self.is_loading() {
            tracing::debug!("Analysis already running, ignoring submit");
            return;
        }
        if self.store.input().is_blank() {
            return;
        }

        match &self.classifier {
            Ok(classifier) => {
                let input = self.store.input().as_str().to_string();
                tracing::info!("Submitting {} bytes for analysis", input.len());
                self.analysis = Some(PendingAnalysis::start(Arc::clone(classifier), input));
                self.banner = None;
            }
            Err(message) => {
                self.banner = Some(Banner::error(message.clone()));
            }
        }
    }

    pub fn cancel_analysis(&mut self) {
        if let Some(pending) = &self.analysis {
            tracing::debug!("Cancelling analysis after {:?}", pending.elapsed());
            pending.cancel();
        }
    }

    /// Check the outstanding request, called on every tick.
    pub fn poll_analysis(&mut self) {
        let result = match self.analysis.as_mut() {
            Some(pending) => pending.poll(),
            None => return,
        };
        if let Some(result) = result {
            self.analysis = None;
            self.finish_analysis(result);
        }
    }

    /// Wait for the outstanding request and apply its result.
    pub async fn wait_for_analysis(&mut self) {
        if let Some(pending) = self.analysis.take() {
            let result = pending.wait().await;
            self.finish_analysis(result);
        }
    }

    fn finish_analysis(&mut self, result: AnalysisResult) {
        match result {
            Ok(plan) => {
                let count = plan.len();
                if let Err(e) = self.store.set_plan(plan) {
                    self.banner = Some(Banner::error(e.to_string()));
                    return;
                }
                self.carrying = None;
                self.drag.cancel();
                self.edit_dialog = None;
                self.filter_dialog = None;
                self.search_input.clear();
                self.cursor = BoardCursor::first_task(&self.view());
                self.mode = AppMode::Board;
                self.banner = Some(Banner::success(format!("Organized {} tasks", count)));
            }
            Err(ClassifyError::Cancelled) => {
                self.banner = Some(Banner::info("Analysis cancelled"));
            }
            Err(e) => {
                tracing::warn!("Analysis failed: {}", e);
                self.banner = Some(Banner::error(e.to_string()));
            }
        }
    }

    /// Clear the plan and the brain dump and return to the input.
    pub fn start_fresh(&mut self) {
        if self.is_loading() {
            return;
        }
        if let Err(e) = self.store.reset() {
            self.banner = Some(Banner::error(e.to_string()));
            return;
        }
        self.carrying = None;
        self.drag.cancel();
        self.edit_dialog = None;
        self.cursor = BoardCursor::default();
        self.mode = AppMode::Input;
    }

    pub fn open_editor(&mut self, id: TaskId) {
        match self.store.open_editor(id) {
            Ok(edit) => {
                self.edit_dialog = Some(EditDialogState::new(id, edit));
                self.mode = AppMode::EditTask;
            }
            Err(e) => self.banner = Some(Banner::error(e.to_string())),
        }
    }

    pub fn close_editor(&mut self) {
        self.store.close_editor();
        self.edit_dialog = None;
        self.mode = AppMode::Board;
    }

    pub fn save_editor(&mut self) {
        let Some(state) = self.edit_dialog.take() else {
            return;
        };
        if let Err(e) = self.store.commit_edit(state.to_edit()) {
            self.banner = Some(Banner::error(e.to_string()));
        }
        self.store.close_editor();
        self.mode = AppMode::Board;
        self.refresh_cursor();
    }

    /// Apply a drop from either gesture and keep the cursor on the task.
    pub fn apply_drop(&mut self, id: TaskId, target: DropTarget) {
        match self.store.drop_task(id, target) {
            Ok(true) => {
                let view = self.view();
                if !self.cursor.follow(&view, id) {
                    self.cursor.clamp(&view);
                }
            }
            Ok(false) => {}
            Err(e) => self.banner = Some(Banner::error(e.to_string())),
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Resize(_, _) => self.drag.cancel(),
            Event::Tick => {
                self.poll_analysis();
                if self.banner.as_ref().is_some_and(|b| b.is_expired(BANNER_TTL)) {
                    self.banner = None;
                }
            }
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            self.quit();
            return;
        }

        match self.mode.clone() {
            AppMode::Input => self.handle_input_key(key),
            AppMode::Board => self.handle_board_key(key),
            AppMode::EditTask => self.handle_edit_dialog_key(key),
            AppMode::Filter => self.handle_filter_dialog_key(key),
            AppMode::Search => self.handle_search_key(key),
            AppMode::Help(previous) => {
                if matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
                ) {
                    self.mode = *previous;
                }
            }
        }
    }

    pub async fn run(&mut self) -> FocusResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(event) => self.handle_event(event),
                None => break,
            }
        }

        events.stop();
        self.cancel_analysis();
        restore_terminal(&mut terminal)?;
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
