//! Date, time and duration generators.

use adm_core::temporal::{self, days_in_month, MAX_YEAR, MIN_YEAR};
use adm_core::{Value, ValueError};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;

/// Random calendar date; the day is drawn from the days of the chosen month.
pub fn random_date<R: Rng>(rng: &mut R) -> Result<NaiveDate, ValueError> {
    let year = rng.random_range(MIN_YEAR..=MAX_YEAR);
    let month = rng.random_range(1..=12);
    let day = rng.random_range(1..=days_in_month(year, month));
    temporal::date(year, month, day)
}

pub fn random_time<R: Rng>(rng: &mut R) -> Result<NaiveTime, ValueError> {
    temporal::time(
        rng.random_range(0..=23),
        rng.random_range(0..=59),
        rng.random_range(0..=59),
    )
}

pub fn random_datetime<R: Rng>(rng: &mut R) -> Result<NaiveDateTime, ValueError> {
    let date = random_date(rng)?;
    Ok(date.and_time(random_time(rng)?))
}

pub fn generate_date<R: Rng>(rng: &mut R) -> Result<Value, ValueError> {
    random_date(rng).map(Value::Date)
}

pub fn generate_time<R: Rng>(rng: &mut R) -> Result<Value, ValueError> {
    random_time(rng).map(Value::Time)
}

pub fn generate_datetime<R: Rng>(rng: &mut R) -> Result<Value, ValueError> {
    random_datetime(rng).map(Value::DateTime)
}

/// Years and months in 1..=99, the remaining fields in 1..=9999.
pub fn generate_duration<R: Rng>(rng: &mut R) -> Value {
    Value::duration(
        rng.random_range(1..=99),
        rng.random_range(1..=99),
        rng.random_range(1..=9999),
        rng.random_range(1..=9999),
        rng.random_range(1..=9999),
        rng.random_range(1..=9999),
    )
}

pub fn generate_year_month_duration<R: Rng>(rng: &mut R) -> Value {
    Value::year_month_duration(rng.random_range(1..=99), rng.random_range(1..=99))
}

pub fn generate_day_time_duration<R: Rng>(rng: &mut R) -> Value {
    Value::day_time_duration(
        rng.random_range(1..=9999),
        rng.random_range(1..=9999),
        rng.random_range(1..=9999),
        rng.random_range(1..=9999),
    )
}

/// Interval between two independently drawn datetimes.
pub fn generate_interval<R: Rng>(rng: &mut R) -> Result<Value, ValueError> {
    let start = random_datetime(rng)?;
    let end = random_datetime(rng)?;
    Ok(Value::interval(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_dates_are_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let date = random_date(&mut rng).unwrap();
            assert!((MIN_YEAR..=MAX_YEAR).contains(&date.year()));
        }
    }

    #[test]
    fn test_random_time_fields() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let time = random_time(&mut rng).unwrap();
            assert!(time.hour() <= 23);
            assert!(time.minute() <= 59);
            assert!(time.second() <= 59);
        }
    }

    #[test]
    fn test_duration_ranges() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            if let Value::Duration(d) = generate_duration(&mut rng) {
                assert!((1..=99).contains(&d.years));
                assert!((1..=99).contains(&d.months));
                assert!((1..=9999).contains(&d.days));
                assert!((1..=9999).contains(&d.seconds));
            } else {
                panic!("Expected Duration value");
            }
        }
    }

    #[test]
    fn test_deterministic_interval() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            generate_interval(&mut rng1).unwrap(),
            generate_interval(&mut rng2).unwrap()
        );
    }
}
