//! Deadline Presentation
//!
//! Classifies a task deadline against the current wall clock and picks the
//! label and CSS class the row renders.

use chrono::{NaiveDate, NaiveDateTime};

/// How close a deadline is, by calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeadlineClass {
    Overdue,
    /// Due today and the time of day has already passed.
    DueTodayPassed,
    DueToday,
    Tomorrow,
    /// Due within the next week (2..=6 days out).
    WithinWeek(i64),
    Future,
}

impl DeadlineClass {
    /// CSS class on the deadline span.
    pub fn css_class(&self) -> &'static str {
        match self {
            DeadlineClass::Overdue => "deadline-expired",
            DeadlineClass::DueTodayPassed => "deadline-urgent",
            DeadlineClass::DueToday => "deadline-today",
            DeadlineClass::Tomorrow => "deadline-soon",
            DeadlineClass::WithinWeek(_) => "deadline-week",
            DeadlineClass::Future => "deadline-future",
        }
    }
}

/// Classify `deadline` relative to `now`. Day buckets compare calendar
/// dates, not 24h windows, so 23:59 tonight is still "today".
pub fn classify(deadline: NaiveDateTime, now: NaiveDateTime) -> DeadlineClass {
    let diff_days = (deadline.date() - now.date()).num_days();
    if diff_days < 0 {
        DeadlineClass::Overdue
    } else if diff_days == 0 {
        if deadline < now {
            DeadlineClass::DueTodayPassed
        } else {
            DeadlineClass::DueToday
        }
    } else if diff_days == 1 {
        DeadlineClass::Tomorrow
    } else if diff_days < 7 {
        DeadlineClass::WithinWeek(diff_days)
    } else {
        DeadlineClass::Future
    }
}

/// Human label for a classified deadline.
pub fn label(class: &DeadlineClass, deadline: NaiveDateTime) -> String {
    match class {
        DeadlineClass::Overdue => format!("Overdue since {}", deadline.format("%Y-%m-%d")),
        DeadlineClass::DueTodayPassed => "Due today (time passed)".to_string(),
        DeadlineClass::DueToday => "Today".to_string(),
        DeadlineClass::Tomorrow => "Tomorrow".to_string(),
        DeadlineClass::WithinWeek(days) => {
            format!("In {} days ({})", days, deadline.format("%A"))
        }
        DeadlineClass::Future => deadline.format("%Y-%m-%d").to_string(),
    }
}

/// Parse the backend's deadline strings. The API is not consistent about
/// the separator ("T" from isoformat, " " from str()) and sometimes sends a
/// bare date.
pub fn parse_deadline(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Classify and label in one step against the local clock; `None` when the
/// string is unparseable (the row just omits the deadline line).
pub fn deadline_badge(raw: &str) -> Option<(&'static str, String)> {
    let deadline = parse_deadline(raw)?;
    let now = now_local();
    let class = classify(deadline, now);
    let text = label(&class, deadline);
    Some((class.css_class(), text))
}

fn now_local() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    const NOW: &str = "2026-08-26 12:00:00";

    #[test]
    fn yesterday_is_overdue() {
        assert_eq!(
            classify(dt("2026-08-25 23:59:00"), dt(NOW)),
            DeadlineClass::Overdue
        );
    }

    #[test]
    fn today_splits_on_time_of_day() {
        assert_eq!(
            classify(dt("2026-08-26 09:00:00"), dt(NOW)),
            DeadlineClass::DueTodayPassed
        );
        assert_eq!(
            classify(dt("2026-08-26 23:00:00"), dt(NOW)),
            DeadlineClass::DueToday
        );
    }

    #[test]
    fn tomorrow_and_week_boundaries() {
        assert_eq!(
            classify(dt("2026-08-27 00:30:00"), dt(NOW)),
            DeadlineClass::Tomorrow
        );
        assert_eq!(
            classify(dt("2026-08-28 12:00:00"), dt(NOW)),
            DeadlineClass::WithinWeek(2)
        );
        // Six days out is still "this week", seven is not.
        assert_eq!(
            classify(dt("2026-09-01 12:00:00"), dt(NOW)),
            DeadlineClass::WithinWeek(6)
        );
        assert_eq!(
            classify(dt("2026-09-02 12:00:00"), dt(NOW)),
            DeadlineClass::Future
        );
    }

    #[test]
    fn labels_match_class() {
        let d = dt("2026-08-28 12:00:00");
        assert_eq!(label(&DeadlineClass::Tomorrow, d), "Tomorrow");
        assert_eq!(label(&DeadlineClass::WithinWeek(2), d), "In 2 days (Friday)");
        assert_eq!(
            label(&DeadlineClass::Overdue, dt("2026-08-20 08:00:00")),
            "Overdue since 2026-08-20"
        );
    }

    #[test]
    fn parses_all_backend_formats() {
        assert_eq!(
            parse_deadline("2026-08-27T09:00:00"),
            Some(dt("2026-08-27 09:00:00"))
        );
        assert_eq!(
            parse_deadline("2026-08-27 09:00:00"),
            Some(dt("2026-08-27 09:00:00"))
        );
        assert_eq!(
            parse_deadline("2026-08-27"),
            Some(dt("2026-08-27 00:00:00"))
        );
        assert_eq!(parse_deadline("soon"), None);
    }
}
