use chrono::{Datelike, Local, TimeZone, Utc};
use workoutlog_core::models::{describe, MONTHS};
use workoutlog_core::{Activity, Coords, Workout, WorkoutKind};

#[test]
fn pace_is_duration_over_distance() {
    for (duration, distance) in [(60.0, 10.0), (23.0, 4.2), (1.0, 3.0), (95.5, 21.1)] {
        let w = Workout::running(Coords::new(0.0, 0.0), duration, distance, 170.0);
        assert_eq!(w.pace(), Some(duration / distance));
        assert_eq!(w.speed(), None);
    }
}

#[test]
fn speed_is_distance_over_hours() {
    for (duration, distance) in [(30.0, 30.0), (45.0, 20.0), (7.0, 2.3)] {
        let w = Workout::cycling(Coords::new(0.0, 0.0), duration, distance, 0.0);
        assert_eq!(w.speed(), Some(distance / (duration / 60.0)));
        assert_eq!(w.pace(), None);
    }
}

#[test]
fn running_scenario_from_map_click() {
    let w = Workout::running(Coords::new(10.0, 20.0), 60.0, 10.0, 150.0);
    let now = Local::now();
    assert_eq!(w.pace(), Some(6.0));
    assert_eq!(w.kind(), WorkoutKind::Running);
    assert_eq!(
        w.description(),
        format!("Running on {} {}", MONTHS[now.month0() as usize], now.day())
    );
    assert_eq!(w.coords(), Coords::new(10.0, 20.0));
    assert!(matches!(w.activity(), Activity::Running { cadence, .. } if *cadence == 150.0));
}

#[test]
fn description_is_fixed_at_construction() {
    let t = Local.with_ymd_and_hms(2023, 2, 28, 23, 0, 0).unwrap().with_timezone(&Utc);
    let w = Workout::cycling_at(Coords::new(1.0, 2.0), 30.0, 30.0, 400.0, t);
    assert_eq!(w.description(), "Cycling on February 28");
    assert_eq!(
        w.description(),
        describe(WorkoutKind::Cycling, &w.created_at().with_timezone(&Local))
    );
    assert_eq!(w.created_at(), t);
}
