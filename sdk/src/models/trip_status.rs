use chrono::{DateTime, Utc};
use std::fmt::Display;

/// Trip lifecycle status, derived from the rider assignment and the
/// departure and arrival timestamps. It is never stored, only recomputed
/// on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripStatus {
    WaitingForRider,
    WaitingForStart,
    WaitingForStop,
    Completed,
    Unknown,
}

impl TripStatus {
    /// Derives the status. Checks run in order, first match wins. A date
    /// counts as set only when it parses to a strictly positive timestamp;
    /// the backend's zero time lies far before the epoch.
    pub fn derive(
        rider_assigned: bool,
        departure: Option<DateTime<Utc>>,
        arrival: Option<DateTime<Utc>>,
    ) -> Self {
        let departure_set = date_set(departure);
        let arrival_set = date_set(arrival);
        if !rider_assigned && !departure_set && !arrival_set {
            return TripStatus::WaitingForRider;
        }
        if rider_assigned && !departure_set && !arrival_set {
            return TripStatus::WaitingForStart;
        }
        if rider_assigned && departure_set && !arrival_set {
            return TripStatus::WaitingForStop;
        }
        if rider_assigned && departure_set && arrival_set {
            return TripStatus::Completed;
        }
        TripStatus::Unknown
    }
}

impl Display for TripStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripStatus::WaitingForRider => write!(f, "Waiting for rider"),
            TripStatus::WaitingForStart => write!(f, "Waiting for driver to start the trip"),
            TripStatus::WaitingForStop => write!(f, "In transit"),
            TripStatus::Completed => write!(f, "Completed"),
            TripStatus::Unknown => write!(f, "Unknown status"),
        }
    }
}

fn date_set(date: Option<DateTime<Utc>>) -> bool {
    date.map(|date| date.timestamp_millis() > 0).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
        Some(Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap())
    }

    #[test]
    fn should_wait_for_rider_without_rider_and_dates() {
        assert_eq!(
            TripStatus::derive(false, None, None),
            TripStatus::WaitingForRider
        );
    }

    #[test]
    fn should_wait_for_start_with_rider_only() {
        assert_eq!(
            TripStatus::derive(true, None, None),
            TripStatus::WaitingForStart
        );
    }

    #[test]
    fn should_wait_for_stop_after_departure() {
        assert_eq!(
            TripStatus::derive(true, date(2024, 1, 1), None),
            TripStatus::WaitingForStop
        );
    }

    #[test]
    fn should_be_completed_after_arrival() {
        assert_eq!(
            TripStatus::derive(true, date(2024, 1, 1), date(2024, 1, 2)),
            TripStatus::Completed
        );
    }

    #[test]
    fn should_be_unknown_for_impossible_combinations() {
        assert_eq!(
            TripStatus::derive(false, date(2024, 1, 1), None),
            TripStatus::Unknown
        );
        assert_eq!(
            TripStatus::derive(true, None, date(2024, 1, 2)),
            TripStatus::Unknown
        );
    }

    #[test]
    fn should_treat_the_zero_time_as_unset() {
        // The backend serializes unset dates as 0001-01-01T00:00:00Z.
        assert_eq!(
            TripStatus::derive(true, date(1, 1, 1), None),
            TripStatus::WaitingForStart
        );
    }

    #[test]
    fn should_render_user_facing_labels() {
        assert_eq!(TripStatus::WaitingForStop.to_string(), "In transit");
        assert_eq!(TripStatus::Unknown.to_string(), "Unknown status");
    }
}
