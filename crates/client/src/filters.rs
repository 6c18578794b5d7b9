//! List views derived from store contents: search, tabs and sort orders.

use shared_types::{
    common::compare_ids, matches_search, Appointment, ContactMessage, Feedback, Patient, Schedule,
    ScheduleStatus,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleFilter {
    pub status: Option<ScheduleStatus>,
    pub search: String,
}

impl ScheduleFilter {
    pub fn matches(&self, schedule: &Schedule) -> bool {
        let status_ok = self.status.map_or(true, |s| schedule.status == s);
        status_ok
            && matches_search(
                &self.search,
                &[
                    &schedule.id,
                    &schedule.date,
                    schedule.dentist_name.as_deref().unwrap_or_default(),
                    schedule.dentist_id.as_deref().unwrap_or_default(),
                    schedule.status.as_str(),
                ],
            )
    }
}

/// Schedules passing `filter`, ordered by date then start time.
pub fn filter_schedules(schedules: &[Schedule], filter: &ScheduleFilter) -> Vec<Schedule> {
    let mut out: Vec<Schedule> = schedules.iter().filter(|s| filter.matches(s)).cloned().collect();
    out.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.start_time.cmp(&b.start_time)));
    out
}

pub fn filter_patients(patients: &[Patient], term: &str) -> Vec<Patient> {
    patients.iter().filter(|p| p.matches(term)).cloned().collect()
}

pub fn filter_appointments(appointments: &[Appointment], term: &str) -> Vec<Appointment> {
    appointments.iter().filter(|a| a.matches(term)).cloned().collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactTab {
    #[default]
    All,
    New,
    Responded,
}

impl ContactTab {
    pub const ALL: [ContactTab; 3] = [ContactTab::All, ContactTab::New, ContactTab::Responded];

    pub fn label(&self) -> &'static str {
        match self {
            ContactTab::All => "All",
            ContactTab::New => "New",
            ContactTab::Responded => "Responded",
        }
    }

    fn admits(&self, message: &ContactMessage) -> bool {
        match self {
            ContactTab::All => true,
            ContactTab::New => !message.reply_sent,
            ContactTab::Responded => message.reply_sent,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactSort {
    #[default]
    Newest,
    Oldest,
    Alphabetical,
}

impl ContactSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactSort::Newest => "newest",
            ContactSort::Oldest => "oldest",
            ContactSort::Alphabetical => "alphabetical",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "newest" => Some(ContactSort::Newest),
            "oldest" => Some(ContactSort::Oldest),
            "alphabetical" => Some(ContactSort::Alphabetical),
            _ => None,
        }
    }
}

/// Contact messages matching `term` on the chosen tab, sorted.
///
/// Ids grow over time, so "newest" is descending id order.
pub fn filter_contacts(
    messages: &[ContactMessage],
    term: &str,
    tab: ContactTab,
    sort: ContactSort,
) -> Vec<ContactMessage> {
    let mut out: Vec<ContactMessage> = messages
        .iter()
        .filter(|m| tab.admits(m) && m.matches(term))
        .cloned()
        .collect();
    match sort {
        ContactSort::Newest => out.sort_by(|a, b| compare_ids(&b.id, &a.id)),
        ContactSort::Oldest => out.sort_by(|a, b| compare_ids(&a.id, &b.id)),
        ContactSort::Alphabetical => out.sort_by_key(|m| m.name.to_lowercase()),
    }
    out
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedbackTab {
    #[default]
    All,
    Visible,
    Hidden,
}

impl FeedbackTab {
    pub const ALL: [FeedbackTab; 3] = [FeedbackTab::All, FeedbackTab::Visible, FeedbackTab::Hidden];

    pub fn label(&self) -> &'static str {
        match self {
            FeedbackTab::All => "All",
            FeedbackTab::Visible => "Visible",
            FeedbackTab::Hidden => "Hidden",
        }
    }
}

/// Feedback matching `term` with at least `min_rating`, limited to `tab`.
/// Highest rated first.
pub fn filter_feedback(
    feedback: &[Feedback],
    term: &str,
    tab: FeedbackTab,
    min_rating: Option<u8>,
) -> Vec<Feedback> {
    let mut out: Vec<Feedback> = feedback
        .iter()
        .filter(|f| match tab {
            FeedbackTab::All => true,
            FeedbackTab::Visible => f.show_on_website,
            FeedbackTab::Hidden => !f.show_on_website,
        })
        .filter(|f| min_rating.map_or(true, |min| f.rating >= f32::from(min)))
        .filter(|f| f.matches(term))
        .cloned()
        .collect();
    out.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    out
}
