use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};

use crate::model::Appointment;

/// True when `moment` falls on `day`; the time of day is ignored.
pub fn same_day(moment: NaiveDateTime, day: NaiveDate) -> bool {
    moment.date() == day
}

/// Appointments bucketed under `day`, in catalog order.
pub fn appointments_on(appointments: &[Appointment], day: NaiveDate) -> Vec<&Appointment> {
    appointments
        .iter()
        .filter(|appointment| same_day(appointment.starts_at, day))
        .collect()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Every day of the month containing `date`.
pub fn month_days(date: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(date);
    first
        .iter_days()
        .take_while(|day| day.month() == first.month())
        .collect()
}

/// Move by whole months, clamping the day to the target month's length.
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let step = Months::new(months.unsigned_abs());
    let shifted = if months >= 0 {
        date.checked_add_months(step)
    } else {
        date.checked_sub_months(step)
    };
    shifted.unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AppointmentKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn appointment(id: &str, starts_at: NaiveDateTime) -> Appointment {
        Appointment {
            id: id.into(),
            title: format!("Appointment {}", id),
            description: String::new(),
            starts_at,
            duration_minutes: 60,
            location: String::new(),
            attendees: vec![],
            kind: AppointmentKind::Meeting,
        }
    }

    #[test]
    fn buckets_by_calendar_day() {
        let appointments = vec![
            appointment("1", date(2024, 3, 15).and_hms_opt(10, 0, 0).unwrap()),
            appointment("2", date(2024, 3, 15).and_hms_opt(23, 59, 0).unwrap()),
            appointment("3", date(2024, 3, 16).and_hms_opt(0, 0, 0).unwrap()),
            appointment("4", date(2023, 3, 15).and_hms_opt(10, 0, 0).unwrap()),
        ];

        let ids: Vec<_> = appointments_on(&appointments, date(2024, 3, 15))
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert!(appointments_on(&appointments, date(2024, 3, 17)).is_empty());
    }

    #[test]
    fn month_days_cover_the_month() {
        assert_eq!(month_days(date(2024, 2, 10)).len(), 29);
        assert_eq!(month_days(date(2023, 2, 10)).len(), 28);
        let days = month_days(date(2024, 3, 31));
        assert_eq!(days.first(), Some(&date(2024, 3, 1)));
        assert_eq!(days.last(), Some(&date(2024, 3, 31)));
    }

    #[test]
    fn shift_month_clamps() {
        assert_eq!(shift_month(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(shift_month(date(2024, 3, 15), -1), date(2024, 2, 15));
        assert_eq!(shift_month(date(2024, 12, 1), 1), date(2025, 1, 1));
    }
}
