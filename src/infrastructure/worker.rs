use crate::domain::{AppointmentRecord, ContactRecord, RecordStore, StoreError};
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

/// A record ready to be inserted, produced by the state machine's begin
/// operations.
#[derive(Debug, Clone)]
pub enum SubmissionJob {
    Contact(ContactRecord),
    Appointment(AppointmentRecord),
}

/// Resolution of one submission attempt, tagged with the generation of the
/// attempt it belongs to. The state machine discards outcomes whose tag no
/// longer matches.
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub generation: u64,
    pub result: Result<(), StoreError>,
}

/// Runs record inserts off the UI thread.
///
/// Each dispatched job performs exactly one insert on its own thread and
/// delivers exactly one outcome over the channel. If the receiver is gone
/// because the application is shutting down, the outcome is dropped.
pub struct SubmissionWorker {
    store: Arc<dyn RecordStore + Send + Sync>,
    sender: mpsc::Sender<SubmissionOutcome>,
}

impl SubmissionWorker {
    pub fn new(
        store: Arc<dyn RecordStore + Send + Sync>,
    ) -> (Self, mpsc::Receiver<SubmissionOutcome>) {
        let (sender, receiver) = mpsc::channel();
        (Self { store, sender }, receiver)
    }

    pub fn dispatch(&self, generation: u64, job: SubmissionJob) {
        let store = Arc::clone(&self.store);
        let sender = self.sender.clone();
        thread::spawn(move || {
            tracing::info!(generation, "submitting record");
            let result = match &job {
                SubmissionJob::Contact(record) => store.insert_contact(record),
                SubmissionJob::Appointment(record) => store.insert_appointment(record),
            };
            match &result {
                Ok(()) => tracing::info!(generation, "submission accepted"),
                Err(error) => tracing::warn!(generation, %error, "submission failed"),
            }
            let _ = sender.send(SubmissionOutcome { generation, result });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;
    use std::time::Duration;

    struct ScriptedStore {
        outcome: Result<(), StoreError>,
        delay: Duration,
        contacts: Mutex<Vec<ContactRecord>>,
    }

    impl ScriptedStore {
        fn new(outcome: Result<(), StoreError>) -> Self {
            Self {
                outcome,
                delay: Duration::ZERO,
                contacts: Mutex::new(Vec::new()),
            }
        }
    }

    impl RecordStore for ScriptedStore {
        fn insert_contact(&self, record: &ContactRecord) -> Result<(), StoreError> {
            thread::sleep(self.delay);
            self.contacts.lock().unwrap().push(record.clone());
            self.outcome.clone()
        }

        fn insert_appointment(&self, _record: &AppointmentRecord) -> Result<(), StoreError> {
            thread::sleep(self.delay);
            self.outcome.clone()
        }
    }

    fn contact_record() -> ContactRecord {
        ContactRecord {
            name: "Ann".to_string(),
            email: "a@b.com".to_string(),
            message: "hi".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_dispatch_delivers_tagged_outcome() {
        let store = Arc::new(ScriptedStore::new(Ok(())));
        let (worker, outcomes) = SubmissionWorker::new(store.clone());

        worker.dispatch(7, SubmissionJob::Contact(contact_record()));

        let outcome = outcomes.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(outcome.generation, 7);
        assert_eq!(outcome.result, Ok(()));
        assert_eq!(store.contacts.lock().unwrap().len(), 1);
        assert_eq!(store.contacts.lock().unwrap()[0].name, "Ann");
    }

    #[test]
    fn test_dispatch_delivers_failure_reason() {
        let store = Arc::new(ScriptedStore::new(Err(StoreError::Rejected(
            "quota exceeded".to_string(),
        ))));
        let (worker, outcomes) = SubmissionWorker::new(store);

        worker.dispatch(
            3,
            SubmissionJob::Appointment(AppointmentRecord {
                service_name: "ADS CAMPAIGN SETUP".to_string(),
                date: "2024-06-01".to_string(),
                time: "12:00".to_string(),
                created_at: Utc::now(),
            }),
        );

        let outcome = outcomes.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(outcome.generation, 3);
        assert_eq!(
            outcome.result,
            Err(StoreError::Rejected("quota exceeded".to_string()))
        );
    }

    #[test]
    fn test_slow_resolution_is_discarded_by_state_machine() {
        use crate::application::{App, SubmissionPhase};
        use crate::domain::Section;

        let mut store = ScriptedStore::new(Ok(()));
        store.delay = Duration::from_millis(50);
        let (worker, outcomes) = SubmissionWorker::new(Arc::new(store));

        let mut app = App::default();
        app.select_section(Section::Contact);
        let pending = app.begin_submit_contact("Ann", "a@b.com", "hi").unwrap();
        worker.dispatch(pending.generation, SubmissionJob::Contact(pending.record));

        // The user closes the modal before the store resolves.
        app.close_section();

        let outcome = outcomes.recv_timeout(Duration::from_secs(5)).unwrap();
        app.apply_submission_result(outcome.generation, outcome.result);

        assert_eq!(app.active_section, None);
        assert_eq!(app.submission.phase, SubmissionPhase::Idle);
        assert!(app.submission.message.is_none());
    }
}
