use chrono::{Datelike, NaiveDate};

use crate::catalog::Catalog;
use crate::model::Appointment;
use crate::query::{appointments_on, first_of_month, month_days, shift_month};

/// One day of the month grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_selected: bool,
    pub is_today: bool,
    pub appointment_count: usize,
}

/// Month navigation and day selection over the catalog's appointments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarView {
    today: NaiveDate,
    cursor_month: NaiveDate,
    selected_date: NaiveDate,
}

impl CalendarView {
    /// Opens on the month of `today` with `today` selected.
    pub fn new(today: NaiveDate) -> Self {
        CalendarView {
            today,
            cursor_month: first_of_month(today),
            selected_date: today,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// First day of the month on screen.
    pub fn cursor_month(&self) -> NaiveDate {
        self.cursor_month
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// e.g. "March 2024".
    pub fn month_label(&self) -> String {
        self.cursor_month.format("%B %Y").to_string()
    }

    pub fn next_month(&mut self) {
        self.cursor_month = shift_month(self.cursor_month, 1);
    }

    pub fn prev_month(&mut self) {
        self.cursor_month = shift_month(self.cursor_month, -1);
    }

    /// Select a day. The cursor follows when the day is in another month.
    pub fn select(&mut self, date: NaiveDate) {
        self.selected_date = date;
        self.cursor_month = first_of_month(date);
    }

    /// Empty cells before the first day in a Sunday-first week.
    pub fn leading_blanks(&self) -> usize {
        self.cursor_month.weekday().num_days_from_sunday() as usize
    }

    pub fn month_grid(&self, catalog: &Catalog) -> Vec<DayCell> {
        month_days(self.cursor_month)
            .into_iter()
            .map(|date| DayCell {
                date,
                is_selected: date == self.selected_date,
                is_today: date == self.today,
                appointment_count: appointments_on(&catalog.appointments, date).len(),
            })
            .collect()
    }

    pub fn selected_appointments<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Appointment> {
        appointments_on(&catalog.appointments, self.selected_date)
    }

    /// The first `n` appointments in catalog order.
    pub fn upcoming<'a>(&self, catalog: &'a Catalog, n: usize) -> Vec<&'a Appointment> {
        catalog.appointments.iter().take(n).collect()
    }
}
