use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    About,
    Working,
    Portfolio,
    Appointment,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Working,
        Section::Portfolio,
        Section::Appointment,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::About => "ABOUT",
            Section::Working => "WORKING",
            Section::Portfolio => "PORTFOLIO",
            Section::Appointment => "APPOINTMENT",
            Section::Contact => "CONTACT",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub section: Section,
    pub label: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub metric: &'static str,
    pub sub_metric: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub id: &'static str,
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub duration: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentRecord {
    pub service_name: String,
    pub date: String,
    pub time: String,
    pub created_at: DateTime<Utc>,
}

/// Write-only port to the hosted record store. Each call is a single insert
/// attempt; retries are the caller's decision.
pub trait RecordStore {
    fn insert_contact(&self, record: &ContactRecord) -> Result<(), StoreError>;
    fn insert_appointment(&self, record: &AppointmentRecord) -> Result<(), StoreError>;
}
