use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    model::entity::{EventFilter, LogFilter},
    utils::date_range::DateRange,
};

/// Dates are RFC 3339 timestamps; their offset decides where a single day
/// starts and ends.
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct WindowQuery {
    pub start_date: Option<DateTime<FixedOffset>>,
    pub end_date: Option<DateTime<FixedOffset>>,
}

impl WindowQuery {
    pub fn resolve(&self) -> DateRange {
        DateRange::resolve(self.start_date, self.end_date)
    }
}

#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct EventsQuery {
    /// Only events of this user
    pub user_id: Option<Uuid>,
}

impl EventsQuery {
    pub fn into_filter(self, window: DateRange) -> EventFilter {
        EventFilter {
            window,
            user_id: self.user_id,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogQuery {
    /// e.g. `error`, `warn`
    pub level: Option<String>,
}

impl LogQuery {
    pub fn into_filter(self, window: DateRange) -> LogFilter {
        LogFilter {
            window,
            level: self.level,
        }
    }
}
