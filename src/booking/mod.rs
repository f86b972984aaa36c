//! Birthday-party booking: form model, validation, wizard and submission

pub mod catalog;
pub mod form;
pub mod modal;
pub mod request;
pub mod submit;
pub mod validation;
pub mod wizard;

pub use catalog::Package;
pub use form::{BookingForm, Field, Step};
pub use modal::BookingModal;
pub use request::{BookingConfirmation, BookingRequest};
pub use submit::{SimulatedSubmitter, Submitter, TimeoutSubmitter};
pub use validation::{validate_all, validate_step, ErrorMap};
pub use wizard::{BookingWizard, DateSource, SubmitBlocked, SubmitOutcome};
