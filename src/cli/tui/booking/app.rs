use std::sync::Arc;
use std::time::{Duration, Instant};
use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    DefaultTerminal, Frame
};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time;
use tracing::{debug, info};
use tui_input::backend::crossterm::EventHandler;

use crate::Result;
use crate::booking::{
    BookingModal, BookingWizard, DateSource, Field, Package, SimulatedSubmitter, Step,
    SubmitBlocked, SubmitOutcome, Submitter,
};
use crate::config::SiteConfig;
use super::events::AppEvent;
use super::state::{cycle_option, FormView, HomeState};
use super::theme::Theme;

/// Main application struct: the home screen hosting the booking modal
pub struct App {
    config: SiteConfig,
    modal: BookingModal,
    home: HomeState,
    view: FormView,
    /// Theme for styling
    theme: Theme,
    /// Whether the app should quit
    should_quit: bool,
    submitter: Arc<dyn Submitter>,
    /// Event sender for input and background tasks
    event_tx: UnboundedSender<AppEvent>,
    event_rx: Option<UnboundedReceiver<AppEvent>>,
}

impl App {
    /// Create a new app instance
    pub fn new(config: SiteConfig) -> Self {
        let (event_tx, event_rx) = tokio::sync::mpsc::unbounded_channel();
        let modal = BookingModal::new(BookingWizard::new(), config.booking.reset_delay());
        let submitter = Arc::new(SimulatedSubmitter::new(config.booking.submit_delay()));
        Self {
            config,
            modal,
            home: HomeState::default(),
            view: FormView::default(),
            theme: Theme::default(),
            should_quit: false,
            submitter,
            event_tx,
            event_rx: Some(event_rx),
        }
    }

    pub fn with_submitter(mut self, submitter: Arc<dyn Submitter>) -> Self {
        self.submitter = submitter;
        self
    }

    /// Pin the date the wizard validates party dates against
    pub fn with_date_source(mut self, dates: DateSource) -> Self {
        let wizard = BookingWizard::new().with_date_source(dates);
        self.modal = BookingModal::new(wizard, self.config.booking.reset_delay());
        self
    }

    pub fn modal(&self) -> &BookingModal {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut BookingModal {
        &mut self.modal
    }

    pub fn view(&self) -> &FormView {
        &self.view
    }

    pub fn home(&self) -> &HomeState {
        &self.home
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Hand out the receiving end of the event channel, for driving the app without a terminal
    pub fn take_event_receiver(&mut self) -> Option<UnboundedReceiver<AppEvent>> {
        self.event_rx.take()
    }

    /// Run the application
    pub async fn run(mut self) -> Result<()> {
        let Some(mut event_rx) = self.event_rx.take() else {
            return Err(crate::JumpzoneError::Cli(
                "event receiver already taken".to_string(),
            ));
        };

        // Initialize terminal
        let mut terminal = ratatui::init();
        terminal.clear()?;
        info!("Booking wizard started");

        // Spawn input handler on a plain thread; it blocks in `event::read`
        let input_tx = self.event_tx.clone();
        std::thread::spawn(move || {
            loop {
                match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        if input_tx.send(AppEvent::Key(key)).is_err() {
                            break;
                        }
                    }
                    Ok(Event::Resize(width, height)) => {
                        if input_tx.send(AppEvent::Resize(width, height)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(_) => break,
                }
            }
        });

        // Main render loop
        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        // Cleanup
        ratatui::restore();
        info!("Booking wizard exited");
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            // Draw UI
            terminal.draw(|frame| self.render(frame))?;

            // Handle events with timeout for the spinner and delayed reset
            match time::timeout(Duration::from_millis(80), event_rx.recv()).await {
                Ok(Some(event)) => self.handle_event(event, Instant::now())?,
                Ok(None) => break, // Channel closed
                Err(_) => self.handle_event(AppEvent::Tick, Instant::now())?,
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Render the home screen and, when open, the booking modal on top
    fn render(&mut self, frame: &mut Frame) {
        super::screens::home::render(frame, &self.config, &self.home, &self.theme);

        if self.modal.is_open() {
            let wizard = self.modal.wizard();
            if wizard.is_success() {
                super::screens::success::render(frame, wizard, &self.config, &self.theme);
            } else {
                super::screens::wizard::render(frame, wizard, &self.view, &self.theme);
            }
        }
    }

    /// Handle an event
    pub fn handle_event(&mut self, event: AppEvent, now: Instant) -> Result<()> {
        match event {
            AppEvent::Key(key) => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    self.should_quit = true;
                    return Ok(());
                }
                if self.modal.is_open() {
                    self.handle_modal_key(key, now);
                } else {
                    self.handle_home_key(key);
                }
            }
            AppEvent::SubmissionFinished { generation, result } => {
                if generation != self.view.generation {
                    debug!(generation, current = self.view.generation, "Dropping stale submission result");
                    return Ok(());
                }
                match self.modal.wizard_mut().finish_submit(result) {
                    SubmitOutcome::Confirmed(confirmation) => {
                        info!(reference = %confirmation.reference, "Party booked");
                    }
                    SubmitOutcome::Failed(error) => {
                        debug!(error = %error, "Showing submission failure");
                    }
                    _ => {}
                }
            }
            AppEvent::Tick => {
                self.modal.tick(now);
                if self.modal.wizard().is_submitting() {
                    self.view.tick_spinner();
                }
            }
            AppEvent::Resize(..) => {}
        }
        Ok(())
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('h') => self.home.select_previous(),
            KeyCode::Right | KeyCode::Char('l') => self.home.select_next(),
            KeyCode::Char('b') | KeyCode::Char('B') => self.open_modal(None),
            KeyCode::Enter => self.open_modal(Some(self.home.package())),
            _ => {}
        }
    }

    /// Open the booking modal, optionally with a package already chosen
    pub fn open_modal(&mut self, package: Option<Package>) {
        self.modal.open();
        let wizard = self.modal.wizard_mut();
        if let Some(package) = package {
            if wizard.form().package.is_empty() {
                wizard.set_field(Field::Package, package.as_str());
            }
        }
        let step = wizard.step();
        self.view.enter_step(step, self.modal.wizard().form());
        debug!(step = ?step, "Booking modal opened");
    }

    fn handle_modal_key(&mut self, key: KeyEvent, now: Instant) {
        // The submission cannot be interrupted, not even by closing
        if self.modal.wizard().is_submitting() {
            return;
        }

        if key.code == KeyCode::Esc {
            self.modal.close(now);
            return;
        }

        if self.modal.wizard().is_success() {
            if key.code == KeyCode::Enter {
                self.modal.close(now);
            }
            return;
        }

        let step = self.modal.wizard().step();
        let field = self.view.focused_field(step);

        match key.code {
            KeyCode::Enter | KeyCode::PageDown => {
                if step.is_last() {
                    self.start_submission();
                } else {
                    self.advance();
                }
            }
            KeyCode::PageUp => {
                let wizard = self.modal.wizard_mut();
                wizard.retreat();
                let step = wizard.step();
                self.view.enter_step(step, self.modal.wizard().form());
            }
            KeyCode::Tab | KeyCode::Down => {
                self.view.focus_next(step, self.modal.wizard().form());
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.view.focus_previous(step, self.modal.wizard().form());
            }
            KeyCode::Left | KeyCode::Right if field.is_select() => {
                let forward = key.code == KeyCode::Right;
                let current = self.modal.wizard().form().get(field);
                if let Some(value) = cycle_option(field, current, forward) {
                    self.modal.wizard_mut().set_field(field, value);
                }
            }
            _ if !field.is_select() => {
                if self.view.input.handle_event(&Event::Key(key)).is_some() {
                    let value = self.view.input.value().to_string();
                    self.modal.wizard_mut().set_field(field, value);
                }
            }
            _ => {}
        }
    }

    fn advance(&mut self) {
        let wizard = self.modal.wizard_mut();
        if wizard.advance() {
            let step = wizard.step();
            self.view.enter_step(step, self.modal.wizard().form());
        } else {
            self.focus_first_error();
        }
    }

    fn start_submission(&mut self) {
        match self.modal.wizard_mut().begin_submit() {
            Ok(request) => {
                self.view.generation += 1;
                let generation = self.view.generation;
                let submitter = Arc::clone(&self.submitter);
                let tx = self.event_tx.clone();
                debug!(generation, submitter = submitter.name(), "Submitting booking");
                tokio::spawn(async move {
                    let result = submitter.submit(&request).await;
                    let _ = tx.send(AppEvent::SubmissionFinished { generation, result });
                });
            }
            Err(SubmitBlocked::Invalid) => self.focus_first_error(),
            Err(blocked) => debug!(?blocked, "Submission not started"),
        }
    }

    /// Move focus to the first field of the current step that has an error
    fn focus_first_error(&mut self) {
        let wizard = self.modal.wizard();
        let step: Step = wizard.step();
        if let Some(index) = step
            .fields()
            .iter()
            .position(|field| wizard.errors().contains(*field))
        {
            self.view.focus_on(step, index, wizard.form());
        }
    }
}
