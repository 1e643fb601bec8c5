use crate::application::{App, AppointmentFocus, ContactField};
use crate::domain::{Section, registry};
use crate::infrastructure::{SubmissionJob, SubmissionWorker};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyModifiers};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_HINT: &str = "Enter the date as YYYY-MM-DD";

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(
        app: &mut App,
        worker: &SubmissionWorker,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) {
        match app.active_section {
            None => Self::handle_home(app, key),
            Some(section) => {
                if key == KeyCode::Esc {
                    app.close_section();
                    return;
                }
                match section {
                    Section::Appointment => Self::handle_appointment(app, worker, key, modifiers),
                    Section::Contact => Self::handle_contact(app, worker, key, modifiers),
                    _ => {}
                }
            }
        }
    }

    fn handle_home(app: &mut App, key: KeyCode) {
        let count = registry::NAV_ITEMS.len();
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                app.nav_index = (app.nav_index + count - 1) % count;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.nav_index = (app.nav_index + 1) % count;
            }
            KeyCode::Enter => {
                let section = registry::NAV_ITEMS[app.nav_index].section;
                app.select_section(section);
            }
            _ => {}
        }
    }

    fn handle_appointment(
        app: &mut App,
        worker: &SubmissionWorker,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) {
        match key {
            KeyCode::Tab => {
                app.appointment_focus = match app.appointment_focus {
                    AppointmentFocus::Service => AppointmentFocus::Date,
                    AppointmentFocus::Date => AppointmentFocus::Time,
                    AppointmentFocus::Time => AppointmentFocus::Confirm,
                    AppointmentFocus::Confirm => AppointmentFocus::Service,
                };
                app.cursor_position = app.date_input.len();
                return;
            }
            KeyCode::BackTab => {
                app.appointment_focus = match app.appointment_focus {
                    AppointmentFocus::Service => AppointmentFocus::Confirm,
                    AppointmentFocus::Date => AppointmentFocus::Service,
                    AppointmentFocus::Time => AppointmentFocus::Date,
                    AppointmentFocus::Confirm => AppointmentFocus::Time,
                };
                app.cursor_position = app.date_input.len();
                return;
            }
            _ => {}
        }

        match app.appointment_focus {
            AppointmentFocus::Service => Self::handle_service_picker(app, key),
            AppointmentFocus::Date => Self::handle_date_field(app, key, modifiers),
            AppointmentFocus::Time => Self::handle_time_picker(app, key),
            AppointmentFocus::Confirm => {
                if key == KeyCode::Enter {
                    Self::submit_appointment(app, worker);
                }
            }
        }
    }

    fn handle_service_picker(app: &mut App, key: KeyCode) {
        let count = registry::SERVICES.len();
        match key {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                app.service_cursor = (app.service_cursor + count - 1) % count;
                app.set_draft_service(registry::SERVICES[app.service_cursor].id);
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                app.service_cursor = (app.service_cursor + 1) % count;
                app.set_draft_service(registry::SERVICES[app.service_cursor].id);
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let index = (c as usize).wrapping_sub('1' as usize);
                if let Some(service) = registry::SERVICES.get(index) {
                    app.service_cursor = index;
                    app.set_draft_service(service.id);
                }
            }
            KeyCode::Enter => {
                app.set_draft_service(registry::SERVICES[app.service_cursor].id);
                app.appointment_focus = AppointmentFocus::Date;
                app.cursor_position = app.date_input.len();
            }
            _ => {}
        }
    }

    fn handle_date_field(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Enter => {
                match NaiveDate::parse_from_str(&app.date_input, DATE_FORMAT) {
                    Ok(_) => {
                        let date = app.date_input.clone();
                        app.set_draft_date(&date);
                        app.status_message = None;
                        app.appointment_focus = AppointmentFocus::Time;
                    }
                    Err(_) => {
                        app.status_message = Some(DATE_HINT.to_string());
                    }
                }
                return;
            }
            KeyCode::Char(c) => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    return;
                }
                if !c.is_ascii_digit() && c != '-' {
                    return;
                }
            }
            _ => {}
        }

        let App {
            date_input,
            cursor_position,
            ..
        } = app;
        if edit_text(date_input, cursor_position, key) {
            // Edited text is unconfirmed until Enter re-validates it.
            app.draft.date = None;
            app.status_message = None;
        }
    }

    fn handle_time_picker(app: &mut App, key: KeyCode) {
        let count = registry::TIME_SLOTS.len();
        match key {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                app.time_cursor = (app.time_cursor + count - 1) % count;
                app.set_draft_time(registry::TIME_SLOTS[app.time_cursor]);
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                app.time_cursor = (app.time_cursor + 1) % count;
                app.set_draft_time(registry::TIME_SLOTS[app.time_cursor]);
            }
            KeyCode::Enter => {
                let slot = registry::TIME_SLOTS[app.time_cursor];
                debug_assert!(registry::is_valid_time_slot(slot));
                app.set_draft_time(slot);
                app.appointment_focus = AppointmentFocus::Confirm;
            }
            _ => {}
        }
    }

    fn submit_appointment(app: &mut App, worker: &SubmissionWorker) {
        if let Ok(pending) = app.begin_submit_appointment() {
            worker.dispatch(
                pending.generation,
                SubmissionJob::Appointment(pending.record),
            );
        }
        // Validation failures are already recorded in the submission state.
    }

    fn handle_contact(
        app: &mut App,
        worker: &SubmissionWorker,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) {
        match key {
            KeyCode::Tab => {
                app.contact_focus = match app.contact_focus {
                    ContactField::Name => ContactField::Email,
                    ContactField::Email => ContactField::Message,
                    ContactField::Message => ContactField::Name,
                };
                let len = contact_buffer(app).len();
                app.cursor_position = len;
                return;
            }
            KeyCode::BackTab => {
                app.contact_focus = match app.contact_focus {
                    ContactField::Name => ContactField::Message,
                    ContactField::Email => ContactField::Name,
                    ContactField::Message => ContactField::Email,
                };
                let len = contact_buffer(app).len();
                app.cursor_position = len;
                return;
            }
            KeyCode::Enter => {
                match app.contact_focus {
                    ContactField::Name => {
                        app.contact_focus = ContactField::Email;
                        app.cursor_position = app.email_input.len();
                    }
                    ContactField::Email => {
                        app.contact_focus = ContactField::Message;
                        app.cursor_position = app.message_input.len();
                    }
                    ContactField::Message => Self::submit_contact(app, worker),
                }
                return;
            }
            KeyCode::Char(_) if modifiers.contains(KeyModifiers::CONTROL) => return,
            _ => {}
        }

        let App {
            contact_focus,
            name_input,
            email_input,
            message_input,
            cursor_position,
            ..
        } = app;
        let buffer = match contact_focus {
            ContactField::Name => name_input,
            ContactField::Email => email_input,
            ContactField::Message => message_input,
        };
        edit_text(buffer, cursor_position, key);
    }

    fn submit_contact(app: &mut App, worker: &SubmissionWorker) {
        let (name, email, message) = (
            app.name_input.clone(),
            app.email_input.clone(),
            app.message_input.clone(),
        );
        if let Ok(pending) = app.begin_submit_contact(&name, &email, &message) {
            worker.dispatch(pending.generation, SubmissionJob::Contact(pending.record));
        }
    }
}

fn contact_buffer(app: &App) -> &String {
    match app.contact_focus {
        ContactField::Name => &app.name_input,
        ContactField::Email => &app.email_input,
        ContactField::Message => &app.message_input,
    }
}

/// Shared single-line text editing. Returns true when the buffer changed.
fn edit_text(buffer: &mut String, cursor: &mut usize, key: KeyCode) -> bool {
    match key {
        KeyCode::Backspace => {
            if *cursor > 0 {
                buffer.remove(*cursor - 1);
                *cursor -= 1;
                return true;
            }
        }
        KeyCode::Delete => {
            if *cursor < buffer.len() {
                buffer.remove(*cursor);
                return true;
            }
        }
        KeyCode::Left => {
            if *cursor > 0 {
                *cursor -= 1;
            }
        }
        KeyCode::Right => {
            if *cursor < buffer.len() {
                *cursor += 1;
            }
        }
        KeyCode::Home => {
            *cursor = 0;
        }
        KeyCode::End => {
            *cursor = buffer.len();
        }
        KeyCode::Char(c) => {
            buffer.insert(*cursor, c);
            *cursor += 1;
            return true;
        }
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::SubmissionPhase;
    use crate::domain::{AppointmentRecord, ContactRecord, RecordStore, Section, StoreError};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc::Receiver;
    use std::time::Duration;

    struct CountingStore {
        inserts: AtomicUsize,
    }

    impl RecordStore for CountingStore {
        fn insert_contact(&self, _record: &ContactRecord) -> Result<(), StoreError> {
            self.inserts.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn insert_appointment(&self, _record: &AppointmentRecord) -> Result<(), StoreError> {
            self.inserts.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn test_worker() -> (
        SubmissionWorker,
        Receiver<crate::infrastructure::SubmissionOutcome>,
        Arc<CountingStore>,
    ) {
        let store = Arc::new(CountingStore {
            inserts: AtomicUsize::new(0),
        });
        let (worker, outcomes) = SubmissionWorker::new(store.clone());
        (worker, outcomes, store)
    }

    fn press(app: &mut App, worker: &SubmissionWorker, key: KeyCode) {
        InputHandler::handle_key_event(app, worker, key, KeyModifiers::NONE);
    }

    fn type_text(app: &mut App, worker: &SubmissionWorker, text: &str) {
        for c in text.chars() {
            press(app, worker, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_home_navigation_and_open() {
        let (worker, _outcomes, _store) = test_worker();
        let mut app = App::default();

        press(&mut app, &worker, KeyCode::Down);
        press(&mut app, &worker, KeyCode::Down);
        press(&mut app, &worker, KeyCode::Down);
        assert_eq!(app.nav_index, 3);

        press(&mut app, &worker, KeyCode::Enter);
        assert_eq!(app.active_section, Some(Section::Appointment));
    }

    #[test]
    fn test_home_navigation_wraps() {
        let (worker, _outcomes, _store) = test_worker();
        let mut app = App::default();

        press(&mut app, &worker, KeyCode::Up);
        assert_eq!(app.nav_index, registry::NAV_ITEMS.len() - 1);
        press(&mut app, &worker, KeyCode::Down);
        assert_eq!(app.nav_index, 0);
    }

    #[test]
    fn test_esc_closes_section() {
        let (worker, _outcomes, _store) = test_worker();
        let mut app = App::default();
        app.select_section(Section::Portfolio);

        press(&mut app, &worker, KeyCode::Esc);
        assert_eq!(app.active_section, None);
    }

    #[test]
    fn test_digit_selects_service() {
        let (worker, _outcomes, _store) = test_worker();
        let mut app = App::default();
        app.select_section(Section::Appointment);

        press(&mut app, &worker, KeyCode::Char('3'));
        assert_eq!(app.draft.service_id.as_deref(), Some("3"));
        assert_eq!(app.service_cursor, 2);

        // Out-of-range digits are ignored.
        press(&mut app, &worker, KeyCode::Char('9'));
        assert_eq!(app.draft.service_id.as_deref(), Some("3"));
    }

    #[test]
    fn test_arrow_selection_cycles_services() {
        let (worker, _outcomes, _store) = test_worker();
        let mut app = App::default();
        app.select_section(Section::Appointment);

        press(&mut app, &worker, KeyCode::Right);
        assert_eq!(app.draft.service_id.as_deref(), Some("2"));
        press(&mut app, &worker, KeyCode::Left);
        press(&mut app, &worker, KeyCode::Left);
        assert_eq!(app.draft.service_id.as_deref(), Some("4"));
    }

    #[test]
    fn test_valid_date_confirms_draft() {
        let (worker, _outcomes, _store) = test_worker();
        let mut app = App::default();
        app.select_section(Section::Appointment);
        app.appointment_focus = AppointmentFocus::Date;

        type_text(&mut app, &worker, "2024-06-01");
        assert_eq!(app.draft.date, None);

        press(&mut app, &worker, KeyCode::Enter);
        assert_eq!(app.draft.date.as_deref(), Some("2024-06-01"));
        assert_eq!(app.appointment_focus, AppointmentFocus::Time);
    }

    #[test]
    fn test_invalid_date_rejected_by_shell() {
        let (worker, _outcomes, _store) = test_worker();
        let mut app = App::default();
        app.select_section(Section::Appointment);
        app.appointment_focus = AppointmentFocus::Date;

        type_text(&mut app, &worker, "2024-13-99");
        press(&mut app, &worker, KeyCode::Enter);

        assert_eq!(app.draft.date, None);
        assert!(app.status_message.is_some());
        assert_eq!(app.appointment_focus, AppointmentFocus::Date);
    }

    #[test]
    fn test_date_letters_are_filtered() {
        let (worker, _outcomes, _store) = test_worker();
        let mut app = App::default();
        app.select_section(Section::Appointment);
        app.appointment_focus = AppointmentFocus::Date;

        type_text(&mut app, &worker, "20x24");
        assert_eq!(app.date_input, "2024");
    }

    #[test]
    fn test_editing_date_invalidates_confirmed_value() {
        let (worker, _outcomes, _store) = test_worker();
        let mut app = App::default();
        app.select_section(Section::Appointment);
        app.appointment_focus = AppointmentFocus::Date;

        type_text(&mut app, &worker, "2024-06-01");
        press(&mut app, &worker, KeyCode::Enter);
        assert!(app.draft.date.is_some());

        app.appointment_focus = AppointmentFocus::Date;
        press(&mut app, &worker, KeyCode::Backspace);
        assert_eq!(app.draft.date, None);
    }

    #[test]
    fn test_incomplete_appointment_never_reaches_store() {
        let (worker, _outcomes, store) = test_worker();
        let mut app = App::default();
        app.select_section(Section::Appointment);
        app.appointment_focus = AppointmentFocus::Confirm;

        press(&mut app, &worker, KeyCode::Enter);
        assert_eq!(app.submission.phase, SubmissionPhase::Failed);
        assert_eq!(store.inserts.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_full_appointment_flow() {
        let (worker, outcomes, store) = test_worker();
        let mut app = App::default();
        app.select_section(Section::Appointment);

        press(&mut app, &worker, KeyCode::Enter); // pick highlighted service
        type_text(&mut app, &worker, "2024-06-01");
        press(&mut app, &worker, KeyCode::Enter); // confirm date
        press(&mut app, &worker, KeyCode::Enter); // pick highlighted slot
        assert_eq!(app.appointment_focus, AppointmentFocus::Confirm);
        assert!(app.can_submit_appointment());

        press(&mut app, &worker, KeyCode::Enter); // submit
        assert_eq!(app.submission.phase, SubmissionPhase::InFlight);

        let outcome = outcomes.recv_timeout(Duration::from_secs(5)).unwrap();
        app.apply_submission_result(outcome.generation, outcome.result);
        assert_eq!(app.submission.phase, SubmissionPhase::Succeeded);
        assert_eq!(store.inserts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_contact_typing_and_focus_cycle() {
        let (worker, _outcomes, _store) = test_worker();
        let mut app = App::default();
        app.select_section(Section::Contact);

        type_text(&mut app, &worker, "Ann");
        assert_eq!(app.name_input, "Ann");

        press(&mut app, &worker, KeyCode::Tab);
        assert_eq!(app.contact_focus, ContactField::Email);
        type_text(&mut app, &worker, "a@b.com");
        assert_eq!(app.email_input, "a@b.com");

        press(&mut app, &worker, KeyCode::Tab);
        press(&mut app, &worker, KeyCode::Tab);
        assert_eq!(app.contact_focus, ContactField::Name);
    }

    #[test]
    fn test_contact_backspace_edits_focused_buffer() {
        let (worker, _outcomes, _store) = test_worker();
        let mut app = App::default();
        app.select_section(Section::Contact);

        type_text(&mut app, &worker, "Anne");
        press(&mut app, &worker, KeyCode::Backspace);
        assert_eq!(app.name_input, "Ann");
        assert_eq!(app.cursor_position, 3);
    }

    #[test]
    fn test_contact_validation_failure_never_reaches_store() {
        let (worker, _outcomes, store) = test_worker();
        let mut app = App::default();
        app.select_section(Section::Contact);
        app.contact_focus = ContactField::Message;

        press(&mut app, &worker, KeyCode::Enter); // submit with all fields empty
        assert_eq!(app.submission.phase, SubmissionPhase::Failed);
        assert!(app.submission.message.as_ref().unwrap().contains("name"));
        assert_eq!(store.inserts.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_full_contact_flow() {
        let (worker, outcomes, store) = test_worker();
        let mut app = App::default();
        app.select_section(Section::Contact);

        type_text(&mut app, &worker, "Ann");
        press(&mut app, &worker, KeyCode::Enter);
        type_text(&mut app, &worker, "a@b.com");
        press(&mut app, &worker, KeyCode::Enter);
        type_text(&mut app, &worker, "hi");
        press(&mut app, &worker, KeyCode::Enter); // submit from message field

        assert_eq!(app.submission.phase, SubmissionPhase::InFlight);

        let outcome = outcomes.recv_timeout(Duration::from_secs(5)).unwrap();
        app.apply_submission_result(outcome.generation, outcome.result);
        assert_eq!(app.submission.phase, SubmissionPhase::Succeeded);
        assert_eq!(store.inserts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_submit_while_in_flight_is_ignored() {
        let (worker, outcomes, store) = test_worker();
        let mut app = App::default();
        app.select_section(Section::Contact);

        type_text(&mut app, &worker, "Ann");
        press(&mut app, &worker, KeyCode::Enter);
        type_text(&mut app, &worker, "a@b.com");
        press(&mut app, &worker, KeyCode::Enter);
        type_text(&mut app, &worker, "hi");
        press(&mut app, &worker, KeyCode::Enter);
        assert_eq!(app.submission.phase, SubmissionPhase::InFlight);

        // Mashing Enter does not start a second attempt.
        press(&mut app, &worker, KeyCode::Enter);
        press(&mut app, &worker, KeyCode::Enter);

        let outcome = outcomes.recv_timeout(Duration::from_secs(5)).unwrap();
        app.apply_submission_result(outcome.generation, outcome.result);
        assert_eq!(app.submission.phase, SubmissionPhase::Succeeded);

        // Only the first attempt reached the store; later deliveries, if any,
        // would be stale and discarded.
        assert_eq!(store.inserts.load(Ordering::SeqCst), 1);
        assert!(outcomes.try_recv().is_err());
    }

    #[test]
    fn test_read_only_sections_ignore_typing() {
        let (worker, _outcomes, _store) = test_worker();
        let mut app = App::default();
        app.select_section(Section::About);

        press(&mut app, &worker, KeyCode::Char('x'));
        press(&mut app, &worker, KeyCode::Enter);
        assert_eq!(app.active_section, Some(Section::About));
        assert_eq!(app.submission.phase, SubmissionPhase::Idle);
    }
}
