//! Tests for forecast generation.

use chrono::{Days, NaiveDate};

use crate::forecast::{
    Clock, EntropySource, FORECAST_DAYS, FixedClock, MAX_TEMPERATURE_C, MIN_TEMPERATURE_C,
    SeededEntropy, Summary, ThreadEntropy, generate,
};

fn new_year() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

#[test]
fn generates_five_records() {
    let mut rng = ThreadEntropy.generator();
    let records = generate(new_year(), &mut rng);
    assert_eq!(records.len(), FORECAST_DAYS as usize);
}

#[test]
fn dates_start_tomorrow_and_step_one_day() {
    let mut rng = ThreadEntropy.generator();
    let records = generate(new_year(), &mut rng);

    assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    for pair in records.windows(2) {
        assert_eq!(pair[1].date, pair[0].date + Days::new(1));
    }
    assert_eq!(records[4].date, NaiveDate::from_ymd_opt(2024, 1, 6).unwrap());
}

#[test]
fn dates_roll_over_month_and_year_end() {
    let eve = NaiveDate::from_ymd_opt(2023, 12, 30).unwrap();
    let mut rng = SeededEntropy(1).generator();
    let dates: Vec<String> = generate(eve, &mut rng)
        .iter()
        .map(|r| r.date.to_string())
        .collect();
    assert_eq!(
        dates,
        vec![
            "2023-12-31",
            "2024-01-01",
            "2024-01-02",
            "2024-01-03",
            "2024-01-04"
        ]
    );
}

#[test]
fn leap_day_is_included() {
    let day = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
    let mut rng = SeededEntropy(1).generator();
    let records = generate(day, &mut rng);
    assert_eq!(records[1].date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    assert_eq!(records[2].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
}

#[test]
fn temperatures_and_summaries_stay_in_bounds() {
    let source = ThreadEntropy;
    for _ in 0..500 {
        let mut rng = source.generator();
        for record in generate(new_year(), &mut rng) {
            assert!(
                (MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C).contains(&record.temperature_c),
                "temperature {} out of range",
                record.temperature_c
            );
            assert!(Summary::ALL.contains(&record.summary));
        }
    }
}

#[test]
fn both_temperature_bounds_are_reachable() {
    let source = ThreadEntropy;
    let mut seen_min = false;
    let mut seen_max = false;
    for _ in 0..5_000 {
        let mut rng = source.generator();
        for record in generate(new_year(), &mut rng) {
            seen_min |= record.temperature_c == MIN_TEMPERATURE_C;
            seen_max |= record.temperature_c == MAX_TEMPERATURE_C;
        }
        if seen_min && seen_max {
            break;
        }
    }
    assert!(seen_min, "never drew {MIN_TEMPERATURE_C}");
    assert!(seen_max, "never drew {MAX_TEMPERATURE_C}");
}

#[test]
fn fixed_clock_and_seed_reproduce_output() {
    let clock = FixedClock(new_year());
    let source = SeededEntropy(42);

    let first = generate(clock.today(), &mut source.generator());
    let second = generate(clock.today(), &mut source.generator());

    assert_eq!(first, second);
}

#[test]
fn different_seeds_diverge() {
    let first = generate(new_year(), &mut SeededEntropy(1).generator());
    let second = generate(new_year(), &mut SeededEntropy(2).generator());
    let third = generate(new_year(), &mut SeededEntropy(3).generator());

    assert!(first != second || second != third);
}
