use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Days scanned backwards, inclusive of the reference day, when matching
/// weekly schedules. A 14-day window contains every weekday at least twice.
pub const WEEKLY_LOOKBACK_DAYS: u64 = 14;

/// Recurrence pattern of a member's expected contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentFrequency {
    Monthly,
    Biweekly,
    Weekly,
}

impl PaymentFrequency {
    /// Parse the frequency field of a member record. Accepts the English
    /// enumeration and the Spanish forms the registry stores
    /// (MENSUAL/QUINCENAL/SEMANAL), case-insensitively. Anything else is an
    /// unknown frequency and yields None.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "MONTHLY" | "MENSUAL" => Some(Self::Monthly),
            "BIWEEKLY" | "QUINCENAL" => Some(Self::Biweekly),
            "WEEKLY" | "SEMANAL" => Some(Self::Weekly),
            _ => None,
        }
    }
}

/// How often and when a member is expected to pay, as recorded in the
/// participant registry: a frequency enumeration plus a spec string whose
/// meaning depends on it.
///
/// - Monthly: a single day-of-month (1–31), e.g. `"15"`.
/// - Biweekly: comma-separated days of month, e.g. `"5, 20"`.
/// - Weekly: a weekday index, 0 = Sunday … 6 = Saturday, e.g. `"1"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSchedule {
    pub frequency: String,
    pub schedule_spec: String,
}

impl PaymentSchedule {
    pub fn new(frequency: impl Into<String>, schedule_spec: impl Into<String>) -> Self {
        Self {
            frequency: frequency.into(),
            schedule_spec: schedule_spec.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Most recent scheduled due date on or before `reference`, if any.
///
/// Candidates are generated for the reference month and the month before it
/// (monthly/biweekly), or from a backward scan over the last
/// [`WEEKLY_LOOKBACK_DAYS`] days (weekly), then the latest candidate not
/// after `reference` wins. The result is never a future date.
///
/// Malformed spec tokens are skipped rather than rejected; a spec with no
/// usable token, or an unknown frequency, projects no deadline at all and
/// returns None. Callers must treat None as "no penalty computable".
pub fn project_due_date(schedule: &PaymentSchedule, reference: NaiveDate) -> Option<NaiveDate> {
    let frequency = PaymentFrequency::parse(&schedule.frequency)?;

    let mut candidates = match frequency {
        PaymentFrequency::Monthly => {
            let day = parse_day_tokens(&schedule.schedule_spec).into_iter().next()?;
            month_window_candidates(reference, &[day])
        }
        PaymentFrequency::Biweekly => {
            let days = parse_day_tokens(&schedule.schedule_spec);
            if days.is_empty() {
                return None;
            }
            month_window_candidates(reference, &days)
        }
        PaymentFrequency::Weekly => {
            let weekday = parse_weekday_token(&schedule.schedule_spec)?;
            weekly_candidates(reference, weekday)
        }
    };

    // Most recent first, then take the first one not after the reference.
    candidates.sort_unstable_by(|a, b| b.cmp(a));
    candidates.into_iter().find(|c| *c <= reference)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Comma-separated day-of-month tokens. Non-numeric tokens and zeros are
/// dropped; days beyond a month's length are clamped later, per month.
fn parse_day_tokens(spec: &str) -> Vec<u32> {
    spec.split(',')
        .filter_map(|tok| tok.trim().parse::<u32>().ok())
        .filter(|d| *d >= 1)
        .collect()
}

/// A weekday index 0 = Sunday … 6 = Saturday. Anything else is malformed.
fn parse_weekday_token(spec: &str) -> Option<u32> {
    spec.trim().parse::<u32>().ok().filter(|d| *d <= 6)
}

/// One candidate per configured day for the reference month and the month
/// before it.
fn month_window_candidates(reference: NaiveDate, days: &[u32]) -> Vec<NaiveDate> {
    let mut candidates = Vec::with_capacity(days.len() * 2);

    let Some(current) = reference.with_day(1) else {
        return candidates;
    };
    let Some(prior) = current.checked_sub_months(Months::new(1)) else {
        return candidates;
    };

    for month_start in [prior, current] {
        for &day in days {
            if let Some(d) = place_in_month(month_start.year(), month_start.month(), day) {
                candidates.push(d);
            }
        }
    }

    candidates
}

/// Put `day` in the given month, clamping to the month's last day when the
/// month is too short (day 31 in February lands on the 28th/29th).
fn place_in_month(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| month_end(year, month))
}

fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next.and_then(|d| d.pred_opt())
}

/// Every date in the lookback window whose weekday matches. The scan always
/// covers the full window even after a match.
fn weekly_candidates(reference: NaiveDate, weekday: u32) -> Vec<NaiveDate> {
    (0..WEEKLY_LOOKBACK_DAYS)
        .filter_map(|offset| reference.checked_sub_days(Days::new(offset)))
        .filter(|d| d.weekday().num_days_from_sunday() == weekday)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_frequency_parse_accepts_both_languages() {
        assert_eq!(PaymentFrequency::parse("MONTHLY"), Some(PaymentFrequency::Monthly));
        assert_eq!(PaymentFrequency::parse("mensual"), Some(PaymentFrequency::Monthly));
        assert_eq!(PaymentFrequency::parse(" Quincenal "), Some(PaymentFrequency::Biweekly));
        assert_eq!(PaymentFrequency::parse("SEMANAL"), Some(PaymentFrequency::Weekly));
        assert_eq!(PaymentFrequency::parse("DAILY"), None);
        assert_eq!(PaymentFrequency::parse(""), None);
    }

    #[test]
    fn test_day_tokens_skip_malformed_entries() {
        assert_eq!(parse_day_tokens("5, 20"), vec![5, 20]);
        assert_eq!(parse_day_tokens("5, x, 20"), vec![5, 20]);
        assert_eq!(parse_day_tokens("0, 15"), vec![15]);
        assert!(parse_day_tokens("abc").is_empty());
        assert!(parse_day_tokens("").is_empty());
    }

    #[test]
    fn test_place_in_month_clamps_to_month_end() {
        assert_eq!(place_in_month(2024, 2, 31), Some(date(2024, 2, 29)));
        assert_eq!(place_in_month(2023, 2, 31), Some(date(2023, 2, 28)));
        assert_eq!(place_in_month(2024, 4, 31), Some(date(2024, 4, 30)));
        assert_eq!(place_in_month(2024, 1, 31), Some(date(2024, 1, 31)));
    }

    #[test]
    fn test_monthly_projects_same_month_day() {
        let schedule = PaymentSchedule::new("MONTHLY", "15");
        let due = project_due_date(&schedule, date(2024, 2, 20));
        assert_eq!(due, Some(date(2024, 2, 15)));
    }

    #[test]
    fn test_monthly_falls_back_to_prior_month() {
        // Day 15 hasn't arrived yet in March, so February's 15th applies.
        let schedule = PaymentSchedule::new("MONTHLY", "15");
        let due = project_due_date(&schedule, date(2024, 3, 10));
        assert_eq!(due, Some(date(2024, 2, 15)));
    }

    #[test]
    fn test_monthly_january_reaches_into_december() {
        let schedule = PaymentSchedule::new("MONTHLY", "20");
        let due = project_due_date(&schedule, date(2024, 1, 5));
        assert_eq!(due, Some(date(2023, 12, 20)));
    }

    #[test]
    fn test_biweekly_picks_nearest_past_day() {
        let schedule = PaymentSchedule::new("BIWEEKLY", "5, 20");
        let due = project_due_date(&schedule, date(2024, 3, 22));
        assert_eq!(due, Some(date(2024, 3, 20)));
    }

    #[test]
    fn test_weekly_matches_reference_day_itself() {
        // 2024-03-18 is a Monday; weekday index 1 = Monday.
        let schedule = PaymentSchedule::new("WEEKLY", "1");
        let due = project_due_date(&schedule, date(2024, 3, 18));
        assert_eq!(due, Some(date(2024, 3, 18)));
    }

    #[test]
    fn test_weekly_finds_latest_matching_weekday() {
        // From Friday 2024-03-22 the most recent Monday is the 18th.
        let schedule = PaymentSchedule::new("WEEKLY", "1");
        let due = project_due_date(&schedule, date(2024, 3, 22));
        assert_eq!(due, Some(date(2024, 3, 18)));
    }

    #[test]
    fn test_weekly_rejects_out_of_range_weekday() {
        let schedule = PaymentSchedule::new("WEEKLY", "7");
        assert_eq!(project_due_date(&schedule, date(2024, 3, 18)), None);
    }

    #[test]
    fn test_unknown_frequency_projects_nothing() {
        let schedule = PaymentSchedule::new("DAILY", "15");
        assert_eq!(project_due_date(&schedule, date(2024, 3, 18)), None);
    }

    #[test]
    fn test_unparseable_spec_projects_nothing() {
        let schedule = PaymentSchedule::new("MONTHLY", "abc");
        assert_eq!(project_due_date(&schedule, date(2024, 3, 18)), None);
    }

    #[test]
    fn test_projection_never_in_the_future() {
        let schedule = PaymentSchedule::new("BIWEEKLY", "5, 20");
        for day in 1..=30 {
            let reference = date(2024, 4, day);
            if let Some(due) = project_due_date(&schedule, reference) {
                assert!(due <= reference, "projected {due} after reference {reference}");
            }
        }
    }
}
