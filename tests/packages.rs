//! End-to-end checks through the public API

use pretty_assertions::assert_eq;
use workout_stats::{read_package, SummaryEncoder, Workout, WorkoutError, WorkoutKind};

fn summary_line(code: &str, data: &[f64]) -> String {
    read_package(code, data)
        .unwrap()
        .show_training_info()
        .get_message()
}

#[test]
fn sample_packages_render_expected_lines() {
    assert_eq!(
        summary_line("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
         Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
    );
    assert_eq!(
        summary_line("RUN", &[15000.0, 1.0, 75.0]),
        "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
         Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
    );
    assert_eq!(
        summary_line("WLK", &[9000.0, 1.0, 75.0, 180.0]),
        "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
         Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500."
    );
}

#[test]
fn every_number_has_three_decimals() {
    let line = summary_line("RUN", &[12345.0, 1.25, 68.4]);

    for part in line.trim_end_matches('.').split("; ") {
        let number = part
            .split_whitespace()
            .find(|token| token.parse::<f64>().is_ok());
        if let Some(number) = number {
            let decimals = number.split('.').nth(1).map(str::len);
            assert_eq!(decimals, Some(3), "in {part:?}");
        }
    }
}

#[test]
fn unknown_code_is_rejected() {
    let err = read_package("BIKE", &[1000.0, 1.0, 70.0]).unwrap_err();
    assert!(matches!(err, WorkoutError::InvalidWorkoutType(_)));
}

#[test]
fn factory_returns_matching_variant() {
    for kind in WorkoutKind::ALL {
        let data = vec![1000.0; kind.arity()];
        let workout = read_package(kind.code(), &data).unwrap();

        assert_eq!(workout.kind(), kind);
        let expected_variant = match kind {
            WorkoutKind::Running => matches!(workout, Workout::Running(_)),
            WorkoutKind::SportsWalking => matches!(workout, Workout::SportsWalking(_)),
            WorkoutKind::Swimming => matches!(workout, Workout::Swimming(_)),
        };
        assert!(expected_variant);
    }
}

#[test]
fn encoder_and_message_agree() {
    let workout = read_package("WLK", &[30000.0, 1.0, 75.0, 180.0]).unwrap();
    let info = workout.show_training_info();
    let payload = SummaryEncoder::new().encode(&workout);

    assert_eq!(payload.summary.training_type, info.training_type);
    assert_eq!(format!("{:.3}", payload.summary.calories_kcal), format!("{:.3}", info.calories));
    assert_eq!(format!("{:.3}", payload.summary.speed_kmh), format!("{:.3}", info.speed));
}
