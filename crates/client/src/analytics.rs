//! Summary figures for the analytics panels.

use chrono::Weekday;
use shared_types::{Appointment, ContactMessage, Feedback, Schedule, ScheduleStatus};
use std::collections::BTreeMap;

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleAnalytics {
    pub total_bookings: u32,
    pub total_capacity: u32,
    /// Number of schedules in each status; statuses with none are absent.
    pub by_status: BTreeMap<ScheduleStatus, usize>,
    /// Bookings per weekday, Monday first. Entries with an unparseable date
    /// are left out.
    pub bookings_by_weekday: [u32; 7],
}

impl ScheduleAnalytics {
    pub fn from_schedules(schedules: &[Schedule]) -> Self {
        let mut out = Self::default();
        for schedule in schedules {
            out.total_bookings = out.total_bookings.saturating_add(schedule.number_of_bookings);
            out.total_capacity = out.total_capacity.saturating_add(schedule.capacity);
            *out.by_status.entry(schedule.status).or_default() += 1;
            if let Some(day) = schedule.weekday() {
                let slot = &mut out.bookings_by_weekday[day.num_days_from_monday() as usize];
                *slot = slot.saturating_add(schedule.number_of_bookings);
            }
        }
        out
    }

    /// Booked share of all capacity, in whole percent.
    pub fn utilization(&self) -> u32 {
        percent(self.total_bookings as usize, self.total_capacity as usize)
    }

    pub fn count(&self, status: ScheduleStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackAnalytics {
    pub count: usize,
    /// Mean rating rounded to one decimal; 0 with no feedback.
    pub average: f32,
    /// Count per star, index 0 is one star.
    pub distribution: [usize; 5],
    /// `distribution` as rounded percentages of `count`.
    pub percentages: [u32; 5],
    /// Ratings of 4 and above.
    pub positive: usize,
    /// Ratings of 2 and below.
    pub negative: usize,
    pub visible: usize,
}

impl FeedbackAnalytics {
    pub fn from_feedback(feedback: &[Feedback]) -> Self {
        let mut out = Self {
            count: feedback.len(),
            ..Self::default()
        };
        if feedback.is_empty() {
            return out;
        }
        let sum: f32 = feedback.iter().map(|f| f.rating).sum();
        out.average = (sum / feedback.len() as f32 * 10.0).round() / 10.0;
        for f in feedback {
            let star = (f.rating.floor() as i64).clamp(1, 5) as usize;
            out.distribution[star - 1] += 1;
            if f.rating >= 4.0 {
                out.positive += 1;
            }
            if f.rating <= 2.0 {
                out.negative += 1;
            }
            if f.show_on_website {
                out.visible += 1;
            }
        }
        for (pct, n) in out.percentages.iter_mut().zip(out.distribution) {
            *pct = percent(n, out.count);
        }
        out
    }

    pub fn positive_percent(&self) -> u32 {
        percent(self.positive, self.count)
    }
}

/// Bookings per schedule date, in date order.
pub fn appointments_per_date(appointments: &[Appointment]) -> BTreeMap<String, usize> {
    let mut out = BTreeMap::new();
    for a in appointments {
        *out.entry(a.date.clone()).or_default() += 1;
    }
    out
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactCounts {
    pub total: usize,
    pub new: usize,
    pub responded: usize,
}

pub fn contact_counts(messages: &[ContactMessage]) -> ContactCounts {
    let responded = messages.iter().filter(|m| m.reply_sent).count();
    ContactCounts {
        total: messages.len(),
        new: messages.len() - responded,
        responded,
    }
}

fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        0
    } else {
        ((part as f64 / whole as f64) * 100.0).round() as u32
    }
}
