/// Submission lifecycle of a form: `Idle ↔ Submitting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// Phase plus the error retained from the last failed submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    phase: FormPhase,
    error: Option<String>,
}

impl FormState {
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Enter `Submitting`, clearing the previous error. Returns `false`
    /// when a submit is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.error = None;
        self.phase = FormPhase::Submitting;
        true
    }

    pub fn succeed(&mut self) {
        self.phase = FormPhase::Idle;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = FormPhase::Idle;
        self.error = Some(message.into());
    }

    /// Label of the submit control, e.g. "Add User" or "Loading...".
    pub fn submit_label(&self, editing: bool, noun: &str) -> String {
        match (self.phase, editing) {
            (FormPhase::Submitting, _) => "Loading...".to_string(),
            (FormPhase::Idle, true) => format!("Update {noun}"),
            (FormPhase::Idle, false) => format!("Add {noun}"),
        }
    }
}

/// Result of driving a form submit to completion.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    /// The access layer accepted the record.
    Saved(T),
    /// The access layer rejected it; the form now shows this message.
    Failed(String),
    /// A submit was already in flight.
    Refused,
}

impl<T> SubmitOutcome<T> {
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved(_))
    }
}
