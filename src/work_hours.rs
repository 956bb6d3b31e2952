use chrono::{Datelike, NaiveDateTime, NaiveTime, Weekday};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkHoursError {
  #[error("Malformed work hours {0:?}")]
  Malformed(String),

  #[error("Unknown day token {0:?}")]
  UnknownDay(String),

  #[error("Bad time token {0:?}")]
  BadTime(String),
}

/// A recurring weekly availability window, parsed from the compact
/// `"<days> <start> - <end>"` grammar, e.g. `"M-F 09:00 - 18:00"` or
/// `"SAT 10:00 - 14:00"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkHours {
  days: Vec<Weekday>,
  start: NaiveTime,
  end: NaiveTime,
}

impl WorkHours {
  pub fn parse(spec: &str) -> Result<Self, WorkHoursError> {
    let parts: Vec<&str> = spec.split_whitespace().collect();
    if parts.len() < 4 {
      return Err(WorkHoursError::Malformed(spec.to_string()));
    }

    let days = parse_days(parts[0])?;
    let start = parse_time(parts[1])?;
    let end = parse_time(parts[3])?;

    Ok(Self { days, start, end })
  }

  /// Both time boundaries are inclusive. The day check short-circuits
  /// before any time comparison.
  pub fn contains(&self, now: NaiveDateTime) -> bool {
    if !self.days.contains(&now.weekday()) {
      return false;
    }
    let time = now.time();
    self.start <= time && time <= self.end
  }
}

/// Whether `now` falls inside the window described by `spec`. Every parse
/// failure evaluates to `false` (closed); nothing is propagated.
pub fn is_within_work_hours(spec: &str, now: NaiveDateTime) -> bool {
  WorkHours::parse(spec).map(|wh| wh.contains(now)).unwrap_or(false)
}

fn parse_days(token: &str) -> Result<Vec<Weekday>, WorkHoursError> {
  if let Some((from, to)) = token.split_once('-') {
    let from = parse_day(from)?;
    let to = parse_day(to)?;

    // Inclusive cyclic range, wrapping Sunday into Monday.
    let mut days = vec![from];
    let mut day = from;
    while day != to {
      day = day.succ();
      days.push(day);
    }
    Ok(days)
  } else {
    Ok(vec![parse_day(token)?])
  }
}

fn parse_day(token: &str) -> Result<Weekday, WorkHoursError> {
  match token.trim().to_uppercase().as_str() {
    "M" | "MON" | "MONDAY" => Ok(Weekday::Mon),
    "T" | "TUE" | "TUESDAY" => Ok(Weekday::Tue),
    "W" | "WED" | "WEDNESDAY" => Ok(Weekday::Wed),
    "R" | "TH" | "THU" | "THURSDAY" => Ok(Weekday::Thu),
    "F" | "FRI" | "FRIDAY" => Ok(Weekday::Fri),
    "SA" | "SAT" | "SATURDAY" => Ok(Weekday::Sat),
    "SU" | "SUN" | "SUNDAY" => Ok(Weekday::Sun),
    _ => Err(WorkHoursError::UnknownDay(token.to_string())),
  }
}

fn parse_time(token: &str) -> Result<NaiveTime, WorkHoursError> {
  // %H:%M accepts a missing leading zero ("9:00").
  NaiveTime::parse_from_str(token, "%H:%M").map_err(|_| WorkHoursError::BadTime(token.to_string()))
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use pretty_assertions::assert_eq;
  use proptest::prelude::*;
  use test_case::test_case;

  use super::*;

  // 2023-01-02 is a Monday.
  fn at(day: Weekday, hour: u32, minute: u32) -> NaiveDateTime {
    let date = NaiveDate::from_ymd_opt(2023, 1, 2 + day.num_days_from_monday()).unwrap();
    assert_eq!(date.weekday(), day);
    date.and_hms_opt(hour, minute, 0).unwrap()
  }

  #[test_case(Weekday::Wed, 10, 0, true; "wednesday mid morning")]
  #[test_case(Weekday::Tue, 7, 0, false; "tuesday before opening")]
  #[test_case(Weekday::Thu, 20, 0, false; "thursday after closing")]
  #[test_case(Weekday::Sat, 12, 0, false; "saturday outside weekday range")]
  #[test_case(Weekday::Fri, 15, 0, true; "friday afternoon")]
  #[test_case(Weekday::Mon, 9, 0, true; "opening minute is inclusive")]
  #[test_case(Weekday::Mon, 18, 0, true; "closing minute is inclusive")]
  #[test_case(Weekday::Mon, 18, 1, false; "one minute past closing")]
  fn weekday_window(day: Weekday, hour: u32, minute: u32, expected: bool) {
    assert_eq!(is_within_work_hours("M-F 09:00 - 18:00", at(day, hour, minute)), expected);
  }

  #[test_case("INVALID STRING"; "not a work hours spec")]
  #[test_case("M-F 09:00"; "too few tokens")]
  #[test_case(""; "empty spec")]
  #[test_case("X-Z 09:00 - 18:00"; "unknown day tokens")]
  #[test_case("M-F 9am - 6pm"; "unparseable times")]
  #[test_case("M-F 25:00 - 18:00"; "hour out of range")]
  fn malformed_defaults_to_closed(spec: &str) {
    assert!(!is_within_work_hours(spec, at(Weekday::Mon, 10, 0)));
  }

  #[test]
  fn single_day_spec() {
    assert!(is_within_work_hours("SAT 10:00 - 14:00", at(Weekday::Sat, 12, 0)));
    assert!(!is_within_work_hours("SAT 10:00 - 14:00", at(Weekday::Sun, 12, 0)));
  }

  #[test]
  fn day_tokens_are_case_insensitive() {
    assert!(is_within_work_hours("mon-fri 09:00 - 18:00", at(Weekday::Wed, 10, 0)));
    assert!(is_within_work_hours("sat 10:00 - 14:00", at(Weekday::Sat, 10, 0)));
  }

  #[test]
  fn times_tolerate_missing_leading_zero() {
    assert!(is_within_work_hours("M-F 9:00 - 18:00", at(Weekday::Mon, 9, 30)));
  }

  #[test]
  fn range_wraps_through_sunday() {
    // F-M covers Fri, Sat, Sun, Mon and nothing else.
    for day in [Weekday::Fri, Weekday::Sat, Weekday::Sun, Weekday::Mon] {
      assert!(is_within_work_hours("F-M 09:00 - 18:00", at(day, 12, 0)));
    }
    for day in [Weekday::Tue, Weekday::Wed, Weekday::Thu] {
      assert!(!is_within_work_hours("F-M 09:00 - 18:00", at(day, 12, 0)));
    }
  }

  #[test]
  fn parse_keeps_alternate_thursday_and_weekend_tokens() {
    assert_eq!(WorkHours::parse("R 09:00 - 17:00"), WorkHours::parse("TH 09:00 - 17:00"));
    assert_eq!(WorkHours::parse("SA 09:00 - 17:00"), WorkHours::parse("SAT 09:00 - 17:00"));
    assert_eq!(WorkHours::parse("SU 09:00 - 17:00"), WorkHours::parse("SUN 09:00 - 17:00"));
  }

  #[test]
  fn parse_reports_the_offending_token() {
    assert_eq!(
      WorkHours::parse("M-X 09:00 - 18:00"),
      Err(WorkHoursError::UnknownDay("X".to_string()))
    );
    assert_eq!(
      WorkHours::parse("M-F 09:xx - 18:00"),
      Err(WorkHoursError::BadTime("09:xx".to_string()))
    );
  }

  proptest! {
    #[test]
    fn never_panics_on_arbitrary_input(spec in ".{0,64}", hour in 0u32..24, minute in 0u32..60) {
      is_within_work_hours(&spec, at(Weekday::Wed, hour, minute));
    }

    #[test]
    fn day_outside_set_is_always_closed(hour in 0u32..24, minute in 0u32..60) {
      // Whatever the time, Sunday is not in M-F.
      prop_assert!(!is_within_work_hours("M-F 00:00 - 23:59", at(Weekday::Sun, hour, minute)));
    }

    #[test]
    fn full_day_window_contains_every_minute(hour in 0u32..24, minute in 0u32..60) {
      prop_assert!(is_within_work_hours("M 00:00 - 23:59", at(Weekday::Mon, hour, minute)));
    }
  }
}
