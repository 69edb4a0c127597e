use serde::Serialize;
use crate::domain::models::class::{GymClass, Signup};

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct Enrollment {
    pub filled: i64,
    pub capacity: i32,
    pub fill_rate: f64,
}

impl Enrollment {
    /// Fill rate is 0 when capacity is not positive; never NaN.
    pub fn from_parts(filled: i64, capacity: i32) -> Self {
        let fill_rate = if capacity > 0 {
            filled as f64 / capacity as f64
        } else {
            0.0
        };
        Self { filled, capacity, fill_rate }
    }
}

pub fn enrollment(class: &GymClass, signups: &[Signup]) -> Enrollment {
    let filled = signups.iter().filter(|s| s.class_id == class.id).count() as i64;
    Enrollment::from_parts(filled, class.capacity)
}

/// Fill rate across a set of classes: sum(filled) / sum(capacity), with
/// zero-capacity classes excluded from both sides rather than counted as 0%.
pub fn aggregate_fill_rate(enrollments: &[Enrollment]) -> f64 {
    let mut total_filled: i64 = 0;
    let mut total_capacity: i64 = 0;
    for e in enrollments {
        if e.capacity > 0 {
            total_filled += e.filled;
            total_capacity += e.capacity as i64;
        }
    }

    if total_capacity == 0 {
        return 0.0;
    }
    total_filled as f64 / total_capacity as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Utc};

    fn class(id: &str, capacity: i32) -> GymClass {
        GymClass {
            id: id.to_string(),
            gym_id: "g1".to_string(),
            title: "Yoga".to_string(),
            coach_id: None,
            date: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            capacity,
            created_at: Utc::now(),
        }
    }

    fn signups_for(class_id: &str, n: usize) -> Vec<Signup> {
        (0..n)
            .map(|i| Signup::new("g1".to_string(), class_id.to_string(), format!("client-{}", i)))
            .collect()
    }

    #[test]
    fn test_fill_rate() {
        let c = class("cl1", 20);
        let mut signups = signups_for("cl1", 15);
        // Signups for another class must not count.
        signups.extend(signups_for("other", 3));

        let e = enrollment(&c, &signups);
        assert_eq!(e.filled, 15);
        assert_eq!(e.capacity, 20);
        assert!((e.fill_rate - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_capacity_is_zero_rate() {
        let c = class("cl1", 0);
        let e = enrollment(&c, &signups_for("cl1", 5));
        assert_eq!(e.fill_rate, 0.0);
        assert!(!e.fill_rate.is_nan());
    }

    #[test]
    fn test_negative_capacity_is_zero_rate() {
        let e = Enrollment::from_parts(3, -5);
        assert_eq!(e.fill_rate, 0.0);
    }

    #[test]
    fn test_aggregate_excludes_zero_capacity() {
        let full = Enrollment::from_parts(15, 20);
        let empty_cap = Enrollment::from_parts(0, 0);
        // 15/20, not 15/20 diluted by a phantom 0/0 class.
        let rate = aggregate_fill_rate(&[full, empty_cap]);
        assert!((rate - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_aggregate_empty_is_zero() {
        assert_eq!(aggregate_fill_rate(&[]), 0.0);
        let only_zero = Enrollment::from_parts(0, 0);
        assert_eq!(aggregate_fill_rate(&[only_zero]), 0.0);
    }

    #[test]
    fn test_aggregate_sums_across_classes() {
        let a = Enrollment::from_parts(5, 10);
        let b = Enrollment::from_parts(10, 10);
        let rate = aggregate_fill_rate(&[a, b]);
        assert!((rate - 0.75).abs() < f64::EPSILON);
    }
}
