#[cfg(test)]
mod tests {
    use crate::logic::{available_slots, blocked_dates, DAILY_CAP, TIME_SLOTS};
    use chrono::Utc;
    use practice_common::models::{Appointment, AppointmentStatus};
    use proptest::prelude::*;
    use std::collections::HashMap;

    const DATES: [&str; 4] = ["2026-02-09", "2026-02-10", "2026-02-11", "2026-02-12"];

    fn status_strategy() -> impl Strategy<Value = AppointmentStatus> {
        prop_oneof![
            Just(AppointmentStatus::Scheduled),
            Just(AppointmentStatus::Postponed),
            Just(AppointmentStatus::Completed),
            Just(AppointmentStatus::NoShow),
        ]
    }

    // (date index, slot index, status)
    fn appointments_strategy() -> impl Strategy<Value = Vec<Appointment>> {
        prop::collection::vec(
            (0..DATES.len(), 0..TIME_SLOTS.len(), status_strategy()),
            0..30,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (date, slot, status))| Appointment {
                    id: i as i64 + 1,
                    name: format!("Client {}", i),
                    email: format!("client{}@example.com", i),
                    phone: "0790000000".to_string(),
                    id_number: None,
                    service: "Individual therapy".to_string(),
                    date: DATES[date].to_string(),
                    time: TIME_SLOTS[slot].to_string(),
                    status,
                    created_at: Utc::now(),
                })
                .collect()
        })
    }

    fn scheduled_per_date(appointments: &[Appointment]) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for a in appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Scheduled)
        {
            *counts.entry(a.date.clone()).or_insert(0) += 1;
        }
        counts
    }

    proptest! {
        // A date is blocked exactly when it holds at least DAILY_CAP scheduled appointments
        #[test]
        fn test_blocked_iff_cap_reached(appointments in appointments_strategy()) {
            let blocked = blocked_dates(&appointments);
            let counts = scheduled_per_date(&appointments);

            for date in DATES {
                let count = counts.get(date).copied().unwrap_or(0);
                prop_assert_eq!(blocked.contains(date), count >= DAILY_CAP);
            }
        }

        // Open slots are the slot list minus scheduled times, in slot order
        #[test]
        fn test_slots_are_ordered_complement(
            appointments in appointments_strategy(),
            date_index in 0..DATES.len(),
        ) {
            let date = DATES[date_index];
            let slots = available_slots(&appointments, date);

            let expected: Vec<String> = TIME_SLOTS
                .iter()
                .filter(|slot| {
                    !appointments.iter().any(|a| {
                        a.status == AppointmentStatus::Scheduled && a.date == date && a.time == **slot
                    })
                })
                .map(|slot| slot.to_string())
                .collect();
            prop_assert_eq!(slots, expected);
        }

        // Non-scheduled appointments never change availability
        #[test]
        fn test_inactive_appointments_ignored(appointments in appointments_strategy()) {
            let active: Vec<Appointment> = appointments
                .iter()
                .filter(|a| a.status == AppointmentStatus::Scheduled)
                .cloned()
                .collect();

            prop_assert_eq!(blocked_dates(&appointments), blocked_dates(&active));
            for date in DATES {
                prop_assert_eq!(
                    available_slots(&appointments, date),
                    available_slots(&active, date)
                );
            }
        }
    }
}
