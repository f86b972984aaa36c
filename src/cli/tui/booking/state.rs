use tui_input::Input;

use crate::booking::catalog::{self, Package};
use crate::booking::{BookingForm, Field, Step};

/// Braille spinner shown while a booking is being submitted
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// State of the home screen behind the modal
#[derive(Debug, Default)]
pub struct HomeState {
    /// Highlighted package card
    pub selected_package: usize,
}

impl HomeState {
    pub fn package(&self) -> Package {
        Package::ALL[self.selected_package.min(Package::ALL.len() - 1)]
    }

    pub fn select_next(&mut self) {
        self.selected_package = (self.selected_package + 1) % Package::ALL.len();
    }

    pub fn select_previous(&mut self) {
        self.selected_package =
            (self.selected_package + Package::ALL.len() - 1) % Package::ALL.len();
    }
}

/// Presentation state of the booking modal; the wizard itself owns the data
#[derive(Debug, Default)]
pub struct FormView {
    /// Index of the focused field within the current step
    pub focus: usize,
    /// Editor for the focused text field
    pub input: Input,
    pub spinner_frame: usize,
    /// Incremented for every submission so late answers can be recognised
    pub generation: u64,
}

impl FormView {
    pub fn focused_field(&self, step: Step) -> Field {
        let fields = step.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    /// Focus a field and load its current value into the editor
    pub fn focus_on(&mut self, step: Step, index: usize, form: &BookingForm) {
        let fields = step.fields();
        self.focus = index.min(fields.len() - 1);
        self.input = Input::new(form.get(fields[self.focus]).to_string());
    }

    pub fn focus_next(&mut self, step: Step, form: &BookingForm) {
        let len = step.fields().len();
        self.focus_on(step, (self.focus + 1) % len, form);
    }

    pub fn focus_previous(&mut self, step: Step, form: &BookingForm) {
        let len = step.fields().len();
        self.focus_on(step, (self.focus + len - 1) % len, form);
    }

    /// Back to the first field of a step
    pub fn enter_step(&mut self, step: Step, form: &BookingForm) {
        self.focus_on(step, 0, form);
    }

    pub fn tick_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }
}

/// Value after `current` in a select field's options, wrapping; the first
/// option when nothing is selected yet
pub fn cycle_option(field: Field, current: &str, forward: bool) -> Option<String> {
    let options = catalog::options_for(field)?;
    let position = options.iter().position(|option| option == current);
    let index = match (position, forward) {
        (None, true) => 0,
        (None, false) => options.len() - 1,
        (Some(i), true) => (i + 1) % options.len(),
        (Some(i), false) => (i + options.len() - 1) % options.len(),
    };
    options.get(index).cloned()
}
