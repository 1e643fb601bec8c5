//! Application state management for the terminal portfolio.
//!
//! This module contains the section-selection and submission state machine
//! that drives the modal user interface.

use crate::domain::{
    AppointmentRecord, ContactRecord, ContactValidator, DomainError, DomainResult, Section,
    StoreError, registry,
};
use chrono::Utc;

/// Status message shown after a contact message is accepted by the store.
pub const CONTACT_SUCCESS_MESSAGE: &str = "Transmission received. We will connect soon.";
/// Status message shown after an appointment is accepted by the store.
pub const APPOINTMENT_SUCCESS_MESSAGE: &str = "Temporal slot secured.";

/// Lifecycle of a single submission attempt.
///
/// Phases only ever move `Idle -> InFlight -> (Succeeded | Failed)`. A terminal
/// phase returns to `Idle` when a section is opened or closed, or is replaced
/// atomically by `InFlight` when a fresh attempt begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// Current submission phase plus the user-facing status message.
///
/// The message is `Some` exactly in the terminal phases: a fixed confirmation
/// on `Succeeded`, the validation or collaborator error text on `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionState {
    pub phase: SubmissionPhase,
    pub message: Option<String>,
}

impl Default for SubmissionState {
    fn default() -> Self {
        Self {
            phase: SubmissionPhase::Idle,
            message: None,
        }
    }
}

/// In-progress appointment selection: service, date and time slot.
///
/// Values are pre-filtered by the presentation shell, which only offers ids
/// and slots from the content registry and parses the date before it gets
/// here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentDraft {
    pub service_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

impl AppointmentDraft {
    pub fn is_complete(&self) -> bool {
        self.service_id.is_some() && self.date.is_some() && self.time.is_some()
    }

    pub fn clear(&mut self) {
        self.service_id = None;
        self.date = None;
        self.time = None;
    }
}

/// Which appointment control currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentFocus {
    Service,
    Date,
    Time,
    Confirm,
}

/// Which contact form field currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// A validated submission that has entered `InFlight` and is waiting for the
/// record store to resolve it.
///
/// The generation tag distinguishes successive attempts so that a resolution
/// arriving after the section changed (or after a newer attempt started) can
/// be discarded instead of applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission<T> {
    pub generation: u64,
    pub record: T,
}

/// Main application state: the active section, the submission state machine,
/// the appointment draft and the transient input state the shell renders.
///
/// Invariants upheld by the operations below:
/// - no active section implies an `Idle` phase and a cleared draft
/// - a submission only enters `InFlight` from the Appointment or Contact
///   section, and never while another one is in flight
/// - every failure ends in `Failed` with a non-empty message
///
/// # Examples
///
/// ```
/// use folio::application::{App, SubmissionPhase};
/// use folio::domain::Section;
///
/// let mut app = App::default();
/// assert_eq!(app.active_section, None);
/// assert_eq!(app.submission.phase, SubmissionPhase::Idle);
///
/// app.select_section(Section::Contact);
/// assert_eq!(app.active_section, Some(Section::Contact));
/// ```
#[derive(Debug)]
pub struct App {
    /// Which content block is displayed; `None` means no modal is open
    pub active_section: Option<Section>,
    /// Submission phase and status message
    pub submission: SubmissionState,
    /// In-progress appointment selection
    pub draft: AppointmentDraft,
    /// Highlighted item in the home navigation
    pub nav_index: usize,
    /// Focused control inside the appointment section
    pub appointment_focus: AppointmentFocus,
    /// Highlighted service in the service picker
    pub service_cursor: usize,
    /// Highlighted slot in the time picker
    pub time_cursor: usize,
    /// Free-typed appointment date, `YYYY-MM-DD`
    pub date_input: String,
    /// Focused field inside the contact form
    pub contact_focus: ContactField,
    /// Contact form buffers
    pub name_input: String,
    pub email_input: String,
    pub message_input: String,
    /// Cursor position within the focused text buffer
    pub cursor_position: usize,
    /// Transient shell hint (e.g. a rejected date format), distinct from the
    /// submission status message
    pub status_message: Option<String>,
    /// Tag of the most recent submission attempt
    generation: u64,
}

impl Default for App {
    fn default() -> Self {
        Self {
            active_section: None,
            submission: SubmissionState::default(),
            draft: AppointmentDraft::default(),
            nav_index: 0,
            appointment_focus: AppointmentFocus::Service,
            service_cursor: 0,
            time_cursor: 0,
            date_input: String::new(),
            contact_focus: ContactField::Name,
            name_input: String::new(),
            email_input: String::new(),
            message_input: String::new(),
            cursor_position: 0,
            status_message: None,
            generation: 0,
        }
    }
}

impl App {
    /// Opens a section as the active modal.
    ///
    /// Resets the submission state to `Idle` and clears the appointment draft
    /// and all transient form state, whether or not a section was already
    /// open. A submission still in flight is abandoned; its eventual outcome
    /// will be discarded by [`App::apply_submission_result`].
    pub fn select_section(&mut self, section: Section) {
        self.active_section = Some(section);
        self.reset_transient_state();
    }

    /// Closes the active modal, if any.
    ///
    /// Idempotent: closing an already-closed modal leaves the state unchanged.
    pub fn close_section(&mut self) {
        self.active_section = None;
        self.reset_transient_state();
    }

    fn reset_transient_state(&mut self) {
        self.submission = SubmissionState::default();
        self.draft.clear();
        self.appointment_focus = AppointmentFocus::Service;
        self.service_cursor = 0;
        self.time_cursor = 0;
        self.date_input.clear();
        self.contact_focus = ContactField::Name;
        self.name_input.clear();
        self.email_input.clear();
        self.message_input.clear();
        self.cursor_position = 0;
        self.status_message = None;
    }

    /// Sets the service of the appointment draft.
    ///
    /// The shell only passes ids taken from the content registry.
    pub fn set_draft_service(&mut self, service_id: &str) {
        self.draft.service_id = Some(service_id.to_string());
    }

    /// Sets the date of the appointment draft (ISO calendar date).
    pub fn set_draft_date(&mut self, date: &str) {
        self.draft.date = Some(date.to_string());
    }

    /// Sets the time slot of the appointment draft.
    pub fn set_draft_time(&mut self, time: &str) {
        self.draft.time = Some(time.to_string());
    }

    /// Whether the appointment confirm action is currently enabled.
    ///
    /// True iff all three draft fields are set and no submission is in flight.
    pub fn can_submit_appointment(&self) -> bool {
        self.draft.is_complete() && self.submission.phase != SubmissionPhase::InFlight
    }

    /// Starts a contact submission.
    ///
    /// Fails fast without any collaborator call when a field is missing or the
    /// email is malformed; the attempt then ends in `Failed` with a message
    /// naming the offending field. On success the phase moves to `InFlight`
    /// and the built record is returned, tagged with a fresh generation, for
    /// the caller to hand to the record store. The outcome must come back
    /// through [`App::apply_submission_result`].
    ///
    /// A call while another submission is in flight is rejected and leaves the
    /// state untouched.
    pub fn begin_submit_contact(
        &mut self,
        name: &str,
        email: &str,
        message: &str,
    ) -> DomainResult<PendingSubmission<ContactRecord>> {
        self.ensure_form_open(Section::Contact)?;
        self.ensure_not_in_flight()?;

        if let Err(error) = ContactValidator::validate(name, email, message) {
            self.fail_attempt(&error);
            return Err(error);
        }

        let record = ContactRecord {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            created_at: Utc::now(),
        };
        Ok(self.take_off(record))
    }

    /// Starts an appointment submission.
    ///
    /// Fails fast to `Failed` when the draft is incomplete; otherwise resolves
    /// the service title through the content registry, moves to `InFlight` and
    /// returns the generation-tagged record. Symmetric with
    /// [`App::begin_submit_contact`]. On a later `Succeeded` the draft is left
    /// intact until the section is closed or reselected.
    pub fn begin_submit_appointment(&mut self) -> DomainResult<PendingSubmission<AppointmentRecord>> {
        self.ensure_form_open(Section::Appointment)?;
        self.ensure_not_in_flight()?;

        if !self.draft.is_complete() {
            let error = DomainError::IncompleteDraft;
            self.fail_attempt(&error);
            return Err(error);
        }

        // Draft ids come from the registry, so resolution only fails if a
        // caller bypassed the shell.
        let service_id = self.draft.service_id.as_deref().unwrap_or_default();
        let service_name = match registry::resolve_service_title(service_id) {
            Ok(title) => title.to_string(),
            Err(error) => {
                self.fail_attempt(&error);
                return Err(error);
            }
        };

        let record = AppointmentRecord {
            service_name,
            date: self.draft.date.clone().unwrap_or_default(),
            time: self.draft.time.clone().unwrap_or_default(),
            created_at: Utc::now(),
        };
        Ok(self.take_off(record))
    }

    /// Lands the outcome of a submission attempt.
    ///
    /// Outcomes whose generation does not match the current attempt, or that
    /// arrive when nothing is in flight (the section was closed or reselected
    /// meanwhile), are discarded. A matching `Ok` lands in `Succeeded` with
    /// the fixed confirmation for the active section; a matching `Err` lands
    /// in `Failed` with the collaborator's reported reason.
    pub fn apply_submission_result(&mut self, generation: u64, result: Result<(), StoreError>) {
        if generation != self.generation || self.submission.phase != SubmissionPhase::InFlight {
            tracing::debug!(
                generation,
                current = self.generation,
                phase = ?self.submission.phase,
                "discarding stale submission outcome"
            );
            return;
        }

        match result {
            Ok(()) => {
                let message = match self.active_section {
                    Some(Section::Appointment) => APPOINTMENT_SUCCESS_MESSAGE,
                    _ => CONTACT_SUCCESS_MESSAGE,
                };
                self.submission = SubmissionState {
                    phase: SubmissionPhase::Succeeded,
                    message: Some(message.to_string()),
                };
            }
            Err(error) => {
                let text = error.to_string();
                let message = if text.trim().is_empty() {
                    "submission failed".to_string()
                } else {
                    text
                };
                self.submission = SubmissionState {
                    phase: SubmissionPhase::Failed,
                    message: Some(message),
                };
            }
        }
    }

    fn ensure_form_open(&self, section: Section) -> DomainResult<()> {
        if self.active_section == Some(section) {
            Ok(())
        } else {
            tracing::warn!(expected = %section, "submission attempted without its form open");
            Err(DomainError::NoActiveForm)
        }
    }

    fn ensure_not_in_flight(&self) -> DomainResult<()> {
        if self.submission.phase == SubmissionPhase::InFlight {
            tracing::debug!("rejecting reentrant submission");
            Err(DomainError::SubmissionInFlight)
        } else {
            Ok(())
        }
    }

    fn fail_attempt(&mut self, error: &DomainError) {
        self.submission = SubmissionState {
            phase: SubmissionPhase::Failed,
            message: Some(error.to_string()),
        };
    }

    fn take_off<T>(&mut self, record: T) -> PendingSubmission<T> {
        self.generation += 1;
        self.submission = SubmissionState {
            phase: SubmissionPhase::InFlight,
            message: None,
        };
        PendingSubmission {
            generation: self.generation,
            record,
        }
    }
}
