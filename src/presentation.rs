//! Lookups that turn stored keys into rendering choices.
//!
//! These stay at the presentation boundary; the storage layer only ever holds
//! the enum keys.

use crate::schema::{ExperienceIcon, ProjectStatus, PublicationBadge, CONTACT_TOPICS};

/// What a read-only section shows. There is no error state: a section that
/// has not received data keeps showing its loading skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionState<T> {
    Loading,
    Empty,
    Populated(Vec<T>),
}

impl<T> SectionState<T> {
    pub fn from_fetch(data: Option<Vec<T>>) -> Self {
        match data {
            None => SectionState::Loading,
            Some(items) if items.is_empty() => SectionState::Empty,
            Some(items) => SectionState::Populated(items),
        }
    }

    /// Number of skeleton cards to draw while loading.
    pub fn skeleton_count(&self, placeholders: usize) -> usize {
        match self {
            SectionState::Loading => placeholders,
            _ => 0,
        }
    }
}

pub fn status_label(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Current => "Current",
        ProjectStatus::Completed => "Completed",
        ProjectStatus::InProgress => "In Progress",
    }
}

pub fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Current => "bg-green-100 text-green-800",
        ProjectStatus::Completed => "bg-blue-100 text-blue-800",
        ProjectStatus::InProgress => "bg-yellow-100 text-yellow-800",
    }
}

pub fn badge_label(badge: Option<PublicationBadge>) -> &'static str {
    match badge {
        Some(PublicationBadge::Featured) => "Featured",
        Some(PublicationBadge::PeerReviewed) => "Peer Reviewed",
        Some(PublicationBadge::Collaboration) => "Collaboration",
        None => "",
    }
}

pub fn badge_class(badge: Option<PublicationBadge>) -> &'static str {
    match badge {
        Some(PublicationBadge::Featured) => "bg-green-100 text-green-800",
        Some(PublicationBadge::PeerReviewed) => "bg-blue-100 text-blue-800",
        Some(PublicationBadge::Collaboration) => "bg-purple-100 text-purple-800",
        None => "bg-gray-100 text-gray-800",
    }
}

/// Icon asset name for a timeline entry.
pub fn icon_asset(icon: ExperienceIcon) -> &'static str {
    match icon {
        ExperienceIcon::University => "university",
        ExperienceIcon::Flask => "flask-conical",
        ExperienceIcon::GraduationCap => "graduation-cap",
        ExperienceIcon::Medal => "award",
    }
}

const ICON_COLORS: [&str; 4] = ["bg-primary", "bg-blue-600", "bg-purple-600", "bg-indigo-600"];

/// Timeline icons cycle through a fixed palette by position.
pub fn icon_color(index: usize) -> &'static str {
    ICON_COLORS[index % ICON_COLORS.len()]
}

pub fn topic_label(value: &str) -> Option<&'static str> {
    CONTACT_TOPICS
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
}
