use chrono::NaiveDate;

const DATE_FORMAT: &str = "%d/%m/%Y";

/// Expand a printed range like "01/03/2024 a 07/03/2024" into every day it covers.
///
/// Both ends are inclusive. The separator is a lowercase `a` with optional
/// whitespace around it. Anything that does not read as exactly two dates
/// around one separator yields an empty list, as does a range whose end
/// precedes its start.
pub fn expand_period(period: &str) -> Vec<NaiveDate> {
    let Some((start, end)) = parse_bounds(period) else {
        return Vec::new();
    };

    start.iter_days().take_while(|day| *day <= end).collect()
}

fn parse_bounds(period: &str) -> Option<(NaiveDate, NaiveDate)> {
    let parts: Vec<&str> = period.split('a').map(str::trim).collect();
    let [start, end] = parts.as_slice() else {
        return None;
    };

    let start = NaiveDate::parse_from_str(start, DATE_FORMAT).ok()?;
    let end = NaiveDate::parse_from_str(end, DATE_FORMAT).ok()?;
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iso(period: &str) -> Vec<String> {
        expand_period(period)
            .into_iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect()
    }

    #[test]
    fn test_three_day_range() {
        assert_eq!(
            iso("01/01/2024 a 03/01/2024"),
            vec!["2024-01-01", "2024-01-02", "2024-01-03"]
        );
    }

    #[test]
    fn test_single_day() {
        assert_eq!(iso("15/06/2024 a 15/06/2024"), vec!["2024-06-15"]);
    }

    #[test]
    fn test_crosses_month_and_leap_day() {
        let days = expand_period("28/02/2024 a 01/03/2024");
        assert_eq!(days.len(), 3);
        assert_eq!(days[1], NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_length_matches_span() {
        let days = expand_period("25/12/2023 a 05/01/2024");
        assert_eq!(days.len(), 12);
        assert!(days.windows(2).all(|w| w[1] == w[0].succ_opt().unwrap()));
    }

    #[test]
    fn test_extra_whitespace_tolerated() {
        assert_eq!(expand_period("  01/03/2024   a  02/03/2024 ").len(), 2);
    }

    #[test]
    fn test_separator_without_spaces() {
        assert_eq!(iso("01/03/2024a02/03/2024"), vec!["2024-03-01", "2024-03-02"]);
        assert_eq!(expand_period("01/03/2024 a02/03/2024").len(), 2);
    }

    #[test]
    fn test_malformed_inputs_are_empty() {
        assert!(expand_period("foo").is_empty());
        assert!(expand_period("01/01/2024").is_empty());
        assert!(expand_period("01/13/2024 a 02/01/2024").is_empty());
        assert!(expand_period("01/01/2024 e 03/01/2024").is_empty());
        assert!(expand_period("01/01/2024 a 03/01/2024 a 05/01/2024").is_empty());
        assert!(expand_period("01/01/2024 A 03/01/2024").is_empty());
        assert!(expand_period("").is_empty());
    }

    #[test]
    fn test_reversed_range_is_empty() {
        assert!(expand_period("05/01/2024 a 01/01/2024").is_empty());
    }
}
