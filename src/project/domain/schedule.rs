//! Due-date scheduling.

use super::ProjectDomainError;
use crate::template::domain::StepDuration;
use chrono::{Days, NaiveDate};

/// Computes one due date per step, in step order.
///
/// Steps are assumed strictly sequential: step *i* is due `start` plus the
/// sum of the durations of steps 1..=i. Durations are at least one day, so
/// the result is strictly increasing and the last date is `start` plus the
/// total duration. Dates are computed once and never revised when work
/// finishes early or late.
///
/// # Errors
///
/// Returns [`ProjectDomainError::EmptySchedule`] for an empty input and
/// [`ProjectDomainError::ScheduleOverflow`] when a date leaves the
/// supported calendar range.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use fms::project::domain::schedule_due_dates;
/// use fms::template::domain::StepDuration;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
/// let durations = [StepDuration::from_days(2), StepDuration::from_days(1)]
///     .into_iter()
///     .collect::<Result<Vec<_>, _>>()
///     .expect("valid durations");
/// let due = schedule_due_dates(start, durations).expect("schedulable");
/// assert_eq!(due.last(), NaiveDate::from_ymd_opt(2024, 1, 4).as_ref());
/// ```
pub fn schedule_due_dates<I>(
    start: NaiveDate,
    durations: I,
) -> Result<Vec<NaiveDate>, ProjectDomainError>
where
    I: IntoIterator<Item = StepDuration>,
{
    let mut elapsed_days: u64 = 0;
    let mut due_dates = Vec::new();
    for duration in durations {
        elapsed_days = elapsed_days.saturating_add(u64::from(duration.days()));
        let due = start
            .checked_add_days(Days::new(elapsed_days))
            .ok_or(ProjectDomainError::ScheduleOverflow {
                start,
                days: elapsed_days,
            })?;
        due_dates.push(due);
    }
    if due_dates.is_empty() {
        return Err(ProjectDomainError::EmptySchedule);
    }
    Ok(due_dates)
}
