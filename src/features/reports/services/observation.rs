use chrono::NaiveDate;

/// Longest run of days a model went without a new report.
///
/// `dates` must be sorted ascending. With two or more dates this is the
/// largest gap between neighbours; with exactly one it is the age of that
/// report as of `today` (clamped at zero); with none there is no answer.
pub fn max_observation_period(dates: &[NaiveDate], today: NaiveDate) -> Option<i64> {
    debug_assert!(dates.windows(2).all(|w| w[0] <= w[1]));

    match dates {
        [] => None,
        [only] => Some((today - *only).num_days().max(0)),
        _ => dates
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).num_days())
            .max(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_no_reports() {
        assert_eq!(max_observation_period(&[], date(2024, 2, 1)), None);
    }

    #[test]
    fn test_single_report_counts_days_since() {
        let today = date(2024, 3, 1);
        assert_eq!(max_observation_period(&[date(2024, 2, 20)], today), Some(10));
        assert_eq!(max_observation_period(&[today], today), Some(0));
    }

    #[test]
    fn test_single_report_in_the_future_is_zero() {
        assert_eq!(
            max_observation_period(&[date(2024, 3, 2)], date(2024, 3, 1)),
            Some(0)
        );
    }

    #[test]
    fn test_largest_gap_wins() {
        let dates = [date(2024, 1, 1), date(2024, 1, 5), date(2024, 1, 20)];
        // today is irrelevant once there are two or more reports
        assert_eq!(max_observation_period(&dates, date(2030, 1, 1)), Some(15));
    }

    #[test]
    fn test_same_day_reports() {
        let dates = [date(2024, 1, 1), date(2024, 1, 1)];
        assert_eq!(max_observation_period(&dates, date(2024, 6, 1)), Some(0));
    }

    #[test]
    fn test_gap_across_leap_day() {
        let dates = [date(2024, 2, 28), date(2024, 3, 1), date(2024, 3, 2)];
        assert_eq!(max_observation_period(&dates, date(2024, 3, 2)), Some(2));
    }
}
