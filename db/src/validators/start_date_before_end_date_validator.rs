use chrono::NaiveDateTime;
use std::borrow::Cow;
use validator::ValidationError;
use validators::*;

pub fn start_date_valid(start_date: NaiveDateTime, end_date: NaiveDateTime) -> Result<(), ValidationError> {
    if start_date > end_date {
        let mut validation_error = create_validation_error(
            "start_date_must_be_before_end_date",
            "Start date must be before end date",
        );
        validation_error.add_param(Cow::from("start_date"), &start_date);
        validation_error.add_param(Cow::from("end_date"), &end_date);
        return Err(validation_error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn ordered_dates_pass() {
        let start = NaiveDate::from_ymd(2020, 1, 1).and_hms(12, 0, 0);
        let end = NaiveDate::from_ymd(2020, 1, 2).and_hms(12, 0, 0);
        assert!(start_date_valid(start, end).is_ok());
        assert!(start_date_valid(start, start).is_ok());
    }

    #[test]
    fn inverted_dates_fail() {
        let start = NaiveDate::from_ymd(2020, 1, 2).and_hms(12, 0, 0);
        let end = NaiveDate::from_ymd(2020, 1, 1).and_hms(12, 0, 0);
        let error = start_date_valid(start, end).unwrap_err();
        assert_eq!(error.code, "start_date_must_be_before_end_date");
    }
}
