//! Scenario tests for the streak engine.
//!
//! Each test builds a habit the way the CLI would receive it (JSON document)
//! or through the model API, then checks classifications and windows against
//! a fixed today.

use chrono::{Duration, NaiveDate, Weekday};
use habitkeep_core::{
    DayClassification, Habit, HabitKind, HabitStats, MonthGrid, StreakDescriptor, StreakEngine,
    WeeklySchedule,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn habit_with(schedule: WeeklySchedule, logged: &[NaiveDate]) -> Habit {
    let mut habit = Habit::new("Practice", HabitKind::Custom, schedule);
    for day in logged {
        habit.record_session(*day, 15);
    }
    habit
}

#[test]
fn three_day_run_ending_today() {
    let json = r#"{
        "id": "read-1",
        "name": "Read",
        "kind": "reading",
        "target_minutes": 20,
        "schedule": ["sunday","monday","tuesday","wednesday","thursday","friday","saturday"],
        "progress": [
            {"day": "2024-01-03", "minutes": 30},
            {"day": "2024-01-01", "minutes": 20},
            {"day": "2024-01-02", "minutes": 25}
        ],
        "created_at": "2023-12-30T08:00:00Z"
    }"#;
    let habit = Habit::from_json(json).unwrap();
    let engine = StreakEngine::new(date(2024, 1, 3));

    assert_eq!(
        engine.classify_day(date(2024, 1, 3), &habit),
        DayClassification::TodayStreak
    );
    assert_eq!(
        engine.compute_streak(date(2024, 1, 1), &habit),
        StreakDescriptor {
            length: 3,
            start: Some(date(2024, 1, 1)),
            end: Some(date(2024, 1, 3)),
        }
    );
}

#[test]
fn empty_log_classifies_by_schedule_only() {
    let habit = habit_with(WeeklySchedule::weekdays(), &[]);
    let today = date(2024, 1, 10);
    let engine = StreakEngine::new(today);

    for offset in -14..=0 {
        let day = today + Duration::days(offset);
        assert_eq!(engine.compute_streak(day, &habit), StreakDescriptor::NONE);

        let expected = match (day == today, habit.schedule.is_scheduled(day)) {
            (true, true) => DayClassification::Today,
            (true, false) => DayClassification::TodayRest,
            (false, true) => DayClassification::Normal,
            (false, false) => DayClassification::Rest,
        };
        assert_eq!(engine.classify_day(day, &habit), expected, "day {day}");
    }
}

#[test]
fn rest_days_between_mon_wed_fri_sessions() {
    // 2024-01-01 and 2024-01-08 are Mondays
    let schedule = WeeklySchedule::from_days([Weekday::Mon, Weekday::Wed, Weekday::Fri]);
    let logged = [
        date(2024, 1, 1),
        date(2024, 1, 3),
        date(2024, 1, 5),
        date(2024, 1, 8),
    ];
    let habit = habit_with(schedule, &logged);

    let live = StreakEngine::new(date(2024, 1, 8)).compute_streak(date(2024, 1, 8), &habit);
    assert_eq!(live.length, 4);
    assert_eq!(live.start, Some(date(2024, 1, 1)));
    assert_eq!(live.end, Some(date(2024, 1, 8)));

    // two weeks later the run has ended on its last session
    let later = StreakEngine::new(date(2024, 1, 22));
    let broken = later.compute_streak(date(2024, 1, 8), &habit);
    assert_eq!(broken.length, 4);
    assert_eq!(broken.start, Some(date(2024, 1, 1)));
    assert_eq!(broken.end, Some(date(2024, 1, 8)));
    assert_eq!(
        later.classify_day(date(2024, 1, 1), &habit),
        DayClassification::InactiveStreakStart
    );
    assert_eq!(
        later.classify_day(date(2024, 1, 8), &habit),
        DayClassification::InactiveStreakEnd
    );
    assert_eq!(
        later.classify_day(date(2024, 1, 6), &habit),
        DayClassification::RestBetweenInactiveStreak
    );
}

#[test]
fn missed_tuesday_splits_runs() {
    let schedule = WeeklySchedule::from_days([Weekday::Mon, Weekday::Tue]);
    // Mon 1 logged, Tue 2 missed, Mon 8 and Tue 9 logged
    let habit = habit_with(
        schedule,
        &[date(2024, 1, 1), date(2024, 1, 8), date(2024, 1, 9)],
    );
    let engine = StreakEngine::new(date(2024, 1, 11));

    let tuesday = engine.classify_day(date(2024, 1, 2), &habit);
    assert!(!tuesday.is_active_streak());
    assert!(!tuesday.is_inactive_streak());

    for offset in 3..=11 {
        let window = engine.compute_streak(date(2024, 1, offset), &habit);
        assert!(!window.contains(date(2024, 1, 1)), "offset {offset}");
    }
}

#[test]
fn sunday_before_first_session_is_rest() {
    // Mon-Fri schedule, Mon 2024-01-08 and Tue 2024-01-09 logged, today Tue
    let habit = habit_with(
        WeeklySchedule::weekdays(),
        &[date(2024, 1, 8), date(2024, 1, 9)],
    );
    let engine = StreakEngine::new(date(2024, 1, 9));

    assert_eq!(
        engine.classify_day(date(2024, 1, 7), &habit),
        DayClassification::Rest
    );
    assert_eq!(
        engine.classify_day(date(2024, 1, 8), &habit),
        DayClassification::StreakStart
    );
    assert_eq!(
        engine.classify_day(date(2024, 1, 9), &habit),
        DayClassification::TodayStreak
    );
}

#[test]
fn weekend_rest_keeps_friday_streak_live() {
    let habit = habit_with(
        WeeklySchedule::weekdays(),
        &[date(2024, 1, 4), date(2024, 1, 5)],
    );
    // Sunday 2024-01-07
    let engine = StreakEngine::new(date(2024, 1, 7));

    assert_eq!(
        engine.classify_day(date(2024, 1, 7), &habit),
        DayClassification::TodayRestStreak
    );
    assert_eq!(
        engine.classify_day(date(2024, 1, 6), &habit),
        DayClassification::RestBetweenStreak
    );
    assert_eq!(
        engine.compute_streak(date(2024, 1, 6), &habit).end,
        Some(date(2024, 1, 7))
    );
}

#[test]
fn future_entries_never_open_a_window() {
    let habit = habit_with(
        WeeklySchedule::every_day(),
        &[date(2024, 2, 1), date(2024, 2, 2)],
    );
    let engine = StreakEngine::new(date(2024, 1, 15));
    assert_eq!(
        engine.compute_streak(date(2024, 2, 1), &habit),
        StreakDescriptor::NONE
    );
    assert!(engine.streaks(&habit).is_empty());
}

#[test]
fn calendar_and_stats_agree_with_engine() {
    let habit = habit_with(
        WeeklySchedule::every_day(),
        &[date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)],
    );
    let engine = StreakEngine::new(date(2024, 1, 3));

    let grid = MonthGrid::build(2024, 1, &habit, &engine, Weekday::Mon).unwrap();
    for cell in grid.cells().filter(|c| c.day <= engine.today()) {
        assert_eq!(
            cell.classification,
            Some(engine.classify_day(cell.day, &habit))
        );
    }

    let stats = HabitStats::compute(&habit, &engine);
    assert_eq!(stats.current_streak, engine.compute_streak(date(2024, 1, 1), &habit));
    assert_eq!(stats.longest_streak.length, 3);
}

#[test]
fn empty_sessions_are_not_practice() {
    let mut habit = habit_with(WeeklySchedule::every_day(), &[]);
    habit.record_session(date(2024, 1, 1), 0);
    habit.record_session(date(2024, 1, 2), 0);
    let engine = StreakEngine::new(date(2024, 1, 2));

    assert!(habit.progress.is_empty());
    assert_eq!(
        engine.compute_streak(date(2024, 1, 2), &habit),
        StreakDescriptor::NONE
    );
    assert_ne!(
        engine.classify_day(date(2024, 1, 2), &habit),
        DayClassification::TodayStreak
    );

    let json = r#"{
        "id": "read-0", "name": "Read", "target_minutes": 20,
        "schedule": ["monday"],
        "progress": [{"day": "2024-01-01", "minutes": 0}],
        "created_at": "2023-12-30T08:00:00Z"
    }"#;
    let err = Habit::from_json(json).unwrap_err();
    assert!(err.to_string().contains("no minutes"));
}
