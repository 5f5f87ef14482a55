//! Error types for the analemma crate.

/// Error type for the validating constructors of the analemma crate.
///
/// The numeric engine itself never fails on well-typed input; these errors
/// only surface from strict constructors and configuration validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalemmaError {
    /// Returned when a latitude lies outside [-90, 90] degrees.
    #[error("latitude must be within [-90, 90] degrees, got {latitude}")]
    LatitudeOutOfRange {
        /// The offending latitude.
        latitude: f64,
    },

    /// Returned when a longitude lies outside [-180, 180] degrees.
    #[error("longitude must be within [-180, 180] degrees, got {longitude}")]
    LongitudeOutOfRange {
        /// The offending longitude.
        longitude: f64,
    },

    /// Returned when a required input is NaN or infinite.
    #[error("non-finite value in {input}")]
    NonFiniteInput {
        /// Name of the input containing the non-finite value.
        input: &'static str,
    },

    /// Returned by the strict clock-time constructor.
    #[error("clock time {hour}:{minute} is outside 00:00..=23:59")]
    ClockTimeOutOfRange {
        /// Requested hour.
        hour: i32,
        /// Requested minute.
        minute: i32,
    },

    /// Returned when a year cannot be represented as a chrono date.
    #[error("year {year} is outside the supported calendar date range")]
    YearOutOfRange {
        /// The offending year.
        year: i32,
    },

    /// Returned when a month is outside 1..=12.
    #[error("month {month} is outside 1..=12")]
    MonthOutOfRange {
        /// The offending month.
        month: u32,
    },

    /// Returned when a day does not exist in the given month.
    #[error("day {day} is outside 1..={days_in_month} for {year}-{month:02}")]
    DayOfMonthOutOfRange {
        /// Calendar year.
        year: i32,
        /// Calendar month.
        month: u32,
        /// Requested day of month.
        day: u32,
        /// Number of days in that month.
        days_in_month: u32,
    },

    /// Returned when a day-of-year does not exist in the given year.
    #[error("day {day} is outside 1..={days_in_year} for year {year}")]
    DayOutOfRange {
        /// Calendar year.
        year: i32,
        /// Requested day-of-year.
        day: u32,
        /// Number of days in `year`.
        days_in_year: u32,
    },
}
