use async_trait::async_trait;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};

use jumpzone::booking::{
    BookingConfirmation, BookingRequest, DateSource, Field, Package, Step, Submitter,
};
use jumpzone::cli::tui::booking::app::App;
use jumpzone::cli::tui::booking::events::AppEvent;
use jumpzone::config::SiteConfig;
use jumpzone::SubmissionError;

struct InstantSubmitter;

#[async_trait]
impl Submitter for InstantSubmitter {
    async fn submit(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingConfirmation, SubmissionError> {
        Ok(BookingConfirmation::new(request.clone()))
    }

    fn name(&self) -> &'static str {
        "instant"
    }
}

fn app() -> App {
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    App::new(SiteConfig::default())
        .with_date_source(DateSource::Fixed(today))
        .with_submitter(Arc::new(InstantSubmitter))
}

fn press(app: &mut App, code: KeyCode, now: Instant) {
    app.handle_event(AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)), now)
        .unwrap();
}

fn type_text(app: &mut App, text: &str, now: Instant) {
    for c in text.chars() {
        press(app, KeyCode::Char(c), now);
    }
}

/// Fill the contact and party steps from the keyboard, ending on the schedule step
fn fill_to_schedule(app: &mut App, now: Instant) {
    type_text(app, "Priya Sharma", now);
    press(app, KeyCode::Tab, now);
    type_text(app, "p@example.com", now);
    press(app, KeyCode::Tab, now);
    type_text(app, "98765 43210", now);
    press(app, KeyCode::Enter, now);
    assert_eq!(app.modal().wizard().step(), Step::Party);

    type_text(app, "Aarav", now);
    press(app, KeyCode::Tab, now);
    press(app, KeyCode::Right, now);
    press(app, KeyCode::Enter, now);
    assert_eq!(app.modal().wizard().step(), Step::Schedule);
}

fn fill_schedule(app: &mut App, now: Instant) {
    type_text(app, "2026-10-24", now);
    press(app, KeyCode::Tab, now);
    press(app, KeyCode::Right, now);
    press(app, KeyCode::Tab, now);
    press(app, KeyCode::Right, now);
}

#[test]
fn test_home_keys_open_modal_with_package() {
    let mut app = app();
    let now = Instant::now();
    assert!(!app.modal().is_open());

    press(&mut app, KeyCode::Right, now);
    press(&mut app, KeyCode::Right, now);
    assert_eq!(app.home().package(), Package::Mega);

    press(&mut app, KeyCode::Enter, now);
    assert!(app.modal().is_open());
    assert_eq!(app.modal().wizard().step(), Step::Contact);
    assert_eq!(app.modal().wizard().form().get(Field::Package), "mega");
    assert_eq!(app.view().focused_field(Step::Contact), Field::ParentName);
}

#[test]
fn test_plain_open_leaves_package_unselected() {
    let mut app = app();
    press(&mut app, KeyCode::Char('b'), Instant::now());
    assert!(app.modal().is_open());
    assert_eq!(app.modal().wizard().form().get(Field::Package), "");
}

#[test]
fn test_enter_on_incomplete_step_focuses_first_error() {
    let mut app = app();
    let now = Instant::now();
    press(&mut app, KeyCode::Char('b'), now);

    type_text(&mut app, "Priya", now);
    press(&mut app, KeyCode::Enter, now);

    let wizard = app.modal().wizard();
    assert_eq!(wizard.step(), Step::Contact);
    assert!(!wizard.errors().contains(Field::ParentName));
    assert!(wizard.errors().contains(Field::Email));
    assert!(wizard.errors().contains(Field::Phone));
    assert_eq!(app.view().focused_field(Step::Contact), Field::Email);

    // Typing into the flagged field clears only its error
    type_text(&mut app, "p", now);
    let errors = app.modal().wizard().errors();
    assert!(!errors.contains(Field::Email));
    assert!(errors.contains(Field::Phone));
}

#[test]
fn test_back_keeps_entered_values() {
    let mut app = app();
    let now = Instant::now();
    press(&mut app, KeyCode::Enter, now);
    fill_to_schedule(&mut app, now);

    press(&mut app, KeyCode::PageUp, now);
    assert_eq!(app.modal().wizard().step(), Step::Party);
    assert_eq!(app.view().input.value(), "Aarav");
    assert_eq!(app.modal().wizard().form().get(Field::ChildAge), "1");
}

#[test]
fn test_escape_closes_then_resets_after_delay() {
    let mut app = app();
    let start = Instant::now();
    press(&mut app, KeyCode::Enter, start);
    type_text(&mut app, "Priya", start);

    press(&mut app, KeyCode::Esc, start);
    assert!(!app.modal().is_open());
    assert!(app.modal().reset_pending());

    app.handle_event(AppEvent::Tick, start + Duration::from_millis(100))
        .unwrap();
    assert_eq!(app.modal().wizard().form().get(Field::ParentName), "Priya");

    app.handle_event(AppEvent::Tick, start + Duration::from_millis(400))
        .unwrap();
    assert!(!app.modal().reset_pending());
    assert_eq!(app.modal().wizard().form().get(Field::ParentName), "");
    assert!(!app.should_quit());
}

#[test]
fn test_quit_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('q'), Instant::now());
    assert!(app.should_quit());

    let mut app = self::app();
    press(&mut app, KeyCode::Char('b'), Instant::now());
    app.handle_event(
        AppEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Instant::now(),
    )
    .unwrap();
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_keyboard_booking_reaches_success() {
    let mut app = app();
    let mut events = app.take_event_receiver().unwrap();
    let now = Instant::now();

    press(&mut app, KeyCode::Enter, now);
    fill_to_schedule(&mut app, now);
    fill_schedule(&mut app, now);

    press(&mut app, KeyCode::Enter, now);
    assert!(app.modal().wizard().is_submitting());

    // Keys other than Esc are ignored while the request is out
    press(&mut app, KeyCode::PageUp, now);
    assert_eq!(app.modal().wizard().step(), Step::Schedule);

    let event = events.recv().await.unwrap();
    assert!(matches!(event, AppEvent::SubmissionFinished { .. }));
    app.handle_event(event, now).unwrap();

    let wizard = app.modal().wizard();
    assert!(wizard.is_success());
    let confirmation = wizard.confirmation().unwrap();
    assert_eq!(confirmation.request.package, Package::Mini);
    assert_eq!(confirmation.request.party_time, "10:00 AM");
    assert_eq!(confirmation.request.guest_count, "Up to 10");

    // Enter dismisses the success view and the wizard clears after the delay
    press(&mut app, KeyCode::Enter, now);
    assert!(!app.modal().is_open());
    app.handle_event(AppEvent::Tick, now + Duration::from_secs(1))
        .unwrap();
    assert!(!app.modal().wizard().is_success());
    assert_eq!(app.modal().wizard().step(), Step::Contact);
}

#[tokio::test]
async fn test_escape_is_ignored_while_submitting() {
    let mut app = app();
    let mut events = app.take_event_receiver().unwrap();
    let now = Instant::now();

    press(&mut app, KeyCode::Enter, now);
    fill_to_schedule(&mut app, now);
    fill_schedule(&mut app, now);
    press(&mut app, KeyCode::Enter, now);
    assert!(app.modal().wizard().is_submitting());

    press(&mut app, KeyCode::Esc, now);
    assert!(app.modal().is_open());
    assert!(!app.modal().reset_pending());
    app.handle_event(AppEvent::Tick, now + Duration::from_secs(1))
        .unwrap();

    let event = events.recv().await.unwrap();
    app.handle_event(event, now).unwrap();

    let wizard = app.modal().wizard();
    assert!(wizard.is_success());
    assert!(wizard
        .confirmation()
        .is_some_and(|confirmation| confirmation.reference.starts_with("JZ-")));

    // Once confirmed, Esc closes as usual
    press(&mut app, KeyCode::Esc, now);
    assert!(!app.modal().is_open());
}

#[tokio::test]
async fn test_submit_with_earlier_step_invalid_returns_there() {
    let mut app = app();
    let now = Instant::now();

    press(&mut app, KeyCode::Enter, now);
    fill_to_schedule(&mut app, now);
    fill_schedule(&mut app, now);
    app.modal_mut()
        .wizard_mut()
        .set_field(Field::Phone, "12345");

    press(&mut app, KeyCode::Enter, now);
    let wizard = app.modal().wizard();
    assert!(!wizard.is_submitting());
    assert_eq!(wizard.step(), Step::Contact);
    assert!(wizard.errors().contains(Field::Phone));
    assert_eq!(app.view().focused_field(Step::Contact), Field::Phone);
    assert_eq!(app.view().input.value(), "12345");
}

#[test]
fn test_stale_generation_is_ignored() {
    let mut app = app();
    let now = Instant::now();
    press(&mut app, KeyCode::Char('b'), now);

    let request = BookingRequest {
        parent_name: "Priya".into(),
        email: "p@example.com".into(),
        phone: "9876543210".into(),
        child_name: "Aarav".into(),
        child_age: 5,
        package: Package::Classic,
        party_date: NaiveDate::from_ymd_opt(2026, 10, 24).unwrap(),
        party_time: "2:00 PM".into(),
        guest_count: "10\u{2013}15".into(),
        message: None,
    };
    app.handle_event(
        AppEvent::SubmissionFinished {
            generation: 42,
            result: Ok(BookingConfirmation::new(request)),
        },
        now,
    )
    .unwrap();

    assert!(!app.modal().wizard().is_success());
}
