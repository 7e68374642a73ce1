//! Resolution of optional `startDate`/`endDate` request fields into a
//! concrete reporting window.

use chrono::{DateTime, Duration, FixedOffset, NaiveTime, TimeZone, Utc};
use serde::Serialize;

/// Width of the window used when the caller gives no dates.
pub const DEFAULT_WINDOW_DAYS: i64 = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn resolve(start: Option<DateTime<FixedOffset>>, end: Option<DateTime<FixedOffset>>) -> Self {
        Self::resolve_at(start, end, Utc::now())
    }

    /// Same as [`DateRange::resolve`] with an explicit "now".
    ///
    /// An inverted range (`start > end`) is returned as given.
    pub fn resolve_at(
        start: Option<DateTime<FixedOffset>>,
        end: Option<DateTime<FixedOffset>>,
        now: DateTime<Utc>,
    ) -> Self {
        let window = Duration::days(DEFAULT_WINDOW_DAYS);

        let range = match (start, end) {
            (None, None) => Self {
                start: now - window,
                end: now,
            },
            (Some(start), None) => Self {
                start: start_of_day(start).with_timezone(&Utc),
                end: end_of_day(start).with_timezone(&Utc),
            },
            (None, Some(end)) => {
                let end = end.with_timezone(&Utc);
                Self {
                    start: end - window,
                    end,
                }
            }
            (Some(start), Some(end)) => Self {
                start: start.with_timezone(&Utc),
                end: end.with_timezone(&Utc),
            },
        };

        if range.is_inverted() {
            tracing::warn!(start = %range.start, end = %range.end, "inverted date range");
        }

        range
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

fn start_of_day(date: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    at_local_time(date, NaiveTime::MIN)
}

fn end_of_day(date: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    // 23:59:59.999999999
    let last = NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or(NaiveTime::MIN);
    at_local_time(date, last)
}

fn at_local_time(date: DateTime<FixedOffset>, time: NaiveTime) -> DateTime<FixedOffset> {
    let offset = *date.offset();
    offset
        .from_local_datetime(&date.date_naive().and_time(time))
        .single()
        .unwrap_or(date)
}
