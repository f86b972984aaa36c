use chrono::NaiveDate;
use std::time::{Duration, Instant};

use jumpzone::booking::{
    BookingConfirmation, BookingForm, BookingModal, BookingWizard, DateSource, Field, Step,
    SubmitOutcome,
};

fn modal() -> BookingModal {
    let wizard = BookingWizard::new()
        .with_date_source(DateSource::Fixed(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()));
    BookingModal::new(wizard, Duration::from_millis(400))
}

fn dirty(modal: &mut BookingModal) {
    let wizard = modal.wizard_mut();
    wizard.set_field(Field::ParentName, "Priya Sharma");
    wizard.set_field(Field::Email, "p@example.com");
    wizard.set_field(Field::Phone, "9876543210");
    assert!(wizard.advance());
    assert!(!wizard.advance());
}

/// Fill every step and start a submission, returning the request's confirmation
fn start_submission(modal: &mut BookingModal) -> BookingConfirmation {
    let wizard = modal.wizard_mut();
    wizard.set_field(Field::ParentName, "Priya Sharma");
    wizard.set_field(Field::Email, "p@example.com");
    wizard.set_field(Field::Phone, "9876543210");
    assert!(wizard.advance());
    wizard.set_field(Field::ChildName, "Aarav");
    wizard.set_field(Field::ChildAge, "6");
    wizard.set_field(Field::Package, "mega");
    assert!(wizard.advance());
    wizard.set_field(Field::PartyDate, "2026-10-25");
    wizard.set_field(Field::PartyTime, "12:00 PM");
    wizard.set_field(Field::GuestCount, "25\u{2013}40");
    let request = wizard.begin_submit().unwrap();
    assert!(wizard.is_submitting());
    BookingConfirmation::new(request)
}

fn assert_initial(modal: &BookingModal) {
    let wizard = modal.wizard();
    assert_eq!(wizard.step(), Step::Contact);
    assert_eq!(wizard.form(), &BookingForm::new());
    assert!(wizard.errors().is_empty());
    assert!(!wizard.is_success());
}

#[test]
fn test_modal_starts_closed() {
    let modal = modal();
    assert!(!modal.is_open());
    assert!(!modal.reset_pending());
    assert_initial(&modal);
}

#[test]
fn test_wizard_survives_until_reset_delay_elapses() {
    let start = Instant::now();
    let mut modal = modal();
    modal.open();
    dirty(&mut modal);

    modal.close(start);
    assert!(!modal.is_open());
    assert!(modal.reset_pending());

    assert!(!modal.tick(start + Duration::from_millis(399)));
    assert_eq!(modal.wizard().step(), Step::Party);

    assert!(modal.tick(start + Duration::from_millis(400)));
    assert!(!modal.reset_pending());
    assert_initial(&modal);
}

#[test]
fn test_reopen_before_delay_still_starts_fresh() {
    let start = Instant::now();
    let mut modal = modal();
    modal.open();
    dirty(&mut modal);

    modal.close(start);
    modal.open();

    assert!(modal.is_open());
    assert!(!modal.reset_pending());
    assert_initial(&modal);

    // The stale reset must not fire while the modal is in use again
    modal.wizard_mut().set_field(Field::ParentName, "Rohan");
    assert!(!modal.tick(start + Duration::from_secs(5)));
    assert_eq!(modal.wizard().form().parent_name, "Rohan");
}

#[test]
fn test_close_and_reopen_is_idempotent() {
    let mut now = Instant::now();
    let mut modal = modal();

    for _ in 0..3 {
        modal.open();
        dirty(&mut modal);
        modal.close(now);
        now += Duration::from_millis(500);
        modal.tick(now);
        modal.open();
        assert_initial(&modal);
        modal.close(now);
    }
}

#[test]
fn test_close_when_closed_does_not_schedule_reset() {
    let mut modal = modal();
    modal.close(Instant::now());
    assert!(!modal.reset_pending());
}

#[test]
fn test_reset_keeps_pinned_date() {
    let start = Instant::now();
    let mut modal = modal();
    modal.open();
    modal.close(start);
    modal.tick(start + Duration::from_secs(1));
    assert_eq!(
        modal.wizard().today(),
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    );
}

#[test]
fn test_reset_waits_for_submission_to_finish() {
    let start = Instant::now();
    let mut modal = modal();
    modal.open();
    let confirmation = start_submission(&mut modal);

    modal.close(start);
    assert!(!modal.tick(start + Duration::from_millis(400)));
    assert!(!modal.tick(start + Duration::from_secs(10)));
    assert!(modal.wizard().is_submitting());
    assert!(modal.reset_pending());

    let reference = confirmation.reference.clone();
    let outcome = modal.wizard_mut().finish_submit(Ok(confirmation));
    assert!(matches!(outcome, SubmitOutcome::Confirmed(_)));
    assert_eq!(
        modal.wizard().confirmation().map(|c| c.reference.as_str()),
        Some(reference.as_str())
    );

    assert!(modal.tick(start + Duration::from_secs(10)));
    assert_initial(&modal);
}

#[test]
fn test_reopen_during_submission_keeps_booking() {
    let start = Instant::now();
    let mut modal = modal();
    modal.open();
    let confirmation = start_submission(&mut modal);

    modal.close(start);
    modal.open();
    assert!(!modal.reset_pending());
    assert!(modal.wizard().is_submitting());
    assert_eq!(modal.wizard().step(), Step::Schedule);

    modal.wizard_mut().finish_submit(Ok(confirmation));
    assert!(!modal.tick(start + Duration::from_secs(1)));
    assert!(modal.wizard().is_success());
}
