//! Static content registry for the portfolio.
//!
//! Pure data keyed by section: navigation metadata, portfolio projects,
//! work experience, bookable services and the fixed time-slot set. The only
//! behavior is lookup.

use super::errors::{DomainError, DomainResult};
use super::models::{ContactChannel, Experience, NavItem, Project, Section, Service};

pub const PROFILE_NAME: &str = "SHAMIM AHMED";
pub const PROFILE_TAGLINE: &str = "DIGITAL ARCHITECT";
pub const ABOUT_HEADING: &str = "FUELING BRANDS IN THE DIGITAL AGE";
pub const ABOUT_BODY: &str = "With over 7 years of experience in Digital Marketing, \
I specialize in ROI-driven strategies that scale businesses. My approach combines \
data analytics with creative storytelling to capture attention in a crowded marketplace.";
pub const ABOUT_STATS: [(&str, &str); 2] = [
    ("150+", "PROJECTS COMPLETED"),
    ("98%", "CLIENT SATISFACTION"),
];

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { section: Section::About, label: "ABOUT", accent: "blue" },
    NavItem { section: Section::Working, label: "WORKING", accent: "indigo" },
    NavItem { section: Section::Portfolio, label: "PORTFOLIO", accent: "cyan" },
    NavItem { section: Section::Appointment, label: "APPOINTMENT", accent: "rose" },
    NavItem { section: Section::Contact, label: "CONTACT", accent: "amber" },
];

pub const PROJECTS: [Project; 3] = [
    Project {
        id: "1",
        title: "E-COMMERCE CAMPAIGN",
        metric: "$120K Revenue",
        sub_metric: "6.5X ROAS",
    },
    Project {
        id: "2",
        title: "LEAD GEN SUCCESS",
        metric: "350% Growth",
        sub_metric: "HIGH INTENT LEADS",
    },
    Project {
        id: "3",
        title: "BRAND STRATEGY",
        metric: "Global Reach",
        sub_metric: "CAMPAIGN BOOST",
    },
];

pub const EXPERIENCES: [Experience; 3] = [
    Experience {
        id: "1",
        company: "PIXEL PERFECT AGENCY",
        role: "SENIOR MARKETING LEAD",
        period: "2021 - Present",
    },
    Experience {
        id: "2",
        company: "GROWTHX SYSTEMS",
        role: "DIGITAL STRATEGIST",
        period: "2019 - 2021",
    },
    Experience {
        id: "3",
        company: "CREATIVE ORBIT",
        role: "CONTENT COORDINATOR",
        period: "2017 - 2019",
    },
];

pub const SERVICES: [Service; 4] = [
    Service { id: "1", title: "DIGITAL STRATEGY AUDIT", duration: "45 MIN" },
    Service { id: "2", title: "ADS CAMPAIGN SETUP", duration: "60 MIN" },
    Service { id: "3", title: "SOCIAL MEDIA STRATEGY", duration: "30 MIN" },
    Service { id: "4", title: "CONVERSION OPTIMIZATION", duration: "60 MIN" },
];

pub const TIME_SLOTS: [&str; 6] = ["10:00", "12:00", "14:00", "16:00", "18:00", "20:00"];

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        label: "DIRECT CHANNEL",
        value: "hello@shamimahmed.com",
        detail: "E-mail Delivery",
    },
    ContactChannel {
        label: "PROFESSIONAL NODE",
        value: "LinkedIn Connection",
        detail: "Business Network",
    },
    ContactChannel {
        label: "INSTANT MATRIX",
        value: "WhatsApp Secure Chat",
        detail: "Fast Response",
    },
];

pub fn service(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

pub fn resolve_service_title(id: &str) -> DomainResult<&'static str> {
    service(id)
        .map(|s| s.title)
        .ok_or_else(|| DomainError::UnknownService(id.to_string()))
}

pub fn is_valid_time_slot(slot: &str) -> bool {
    TIME_SLOTS.contains(&slot)
}
