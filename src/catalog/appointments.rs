use crate::model::{Appointment, AppointmentKind};

use super::{at, day};

fn people(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

pub fn demo_appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "1".into(),
            title: "Client Consultation - Sarah Johnson".into(),
            description: "Contract review discussion".into(),
            starts_at: at(day(2024, 3, 15), 10, 0),
            duration_minutes: 60,
            location: "Conference Room A".into(),
            attendees: people(&["Sarah Johnson", "John Smith"]),
            kind: AppointmentKind::Consultation,
        },
        Appointment {
            id: "2".into(),
            title: "Court Hearing - TechCorp Case".into(),
            description: "Patent dispute hearing".into(),
            starts_at: at(day(2024, 3, 18), 14, 30),
            duration_minutes: 120,
            location: "Superior Court".into(),
            attendees: people(&["Michael Chen", "John Smith", "Sarah Wilson"]),
            kind: AppointmentKind::Hearing,
        },
        Appointment {
            id: "3".into(),
            title: "Deposition - Rodriguez Case".into(),
            description: "Witness deposition".into(),
            starts_at: at(day(2024, 3, 22), 9, 0),
            duration_minutes: 180,
            location: "Law Office".into(),
            attendees: people(&["Emily Rodriguez", "Michael Davis"]),
            kind: AppointmentKind::Deposition,
        },
    ]
}
