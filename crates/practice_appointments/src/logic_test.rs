#[cfg(test)]
mod tests {
    use crate::logic::{available_slots, blocked_dates, is_slot, DAILY_CAP, TIME_SLOTS};
    use chrono::Utc;
    use practice_common::models::{Appointment, AppointmentStatus};

    fn appointment(id: i64, date: &str, time: &str, status: AppointmentStatus) -> Appointment {
        Appointment {
            id,
            name: format!("Client {}", id),
            email: format!("client{}@example.com", id),
            phone: "0790000000".to_string(),
            id_number: None,
            service: "Individual therapy".to_string(),
            date: date.to_string(),
            time: time.to_string(),
            status,
            created_at: Utc::now(),
        }
    }

    fn scheduled(id: i64, date: &str, time: &str) -> Appointment {
        appointment(id, date, time, AppointmentStatus::Scheduled)
    }

    #[test]
    fn test_no_appointments_nothing_blocked() {
        assert!(blocked_dates(&[]).is_empty());
        assert_eq!(available_slots(&[], "2026-02-11"), TIME_SLOTS.to_vec());
    }

    #[test]
    fn test_three_scheduled_block_the_date() {
        let appointments = vec![
            scheduled(1, "2026-02-11", "09:00"),
            scheduled(2, "2026-02-11", "10:00"),
            scheduled(3, "2026-02-11", "11:00"),
        ];

        let blocked = blocked_dates(&appointments);
        assert!(blocked.contains("2026-02-11"));

        let slots = available_slots(&appointments, "2026-02-11");
        for taken in ["09:00", "10:00", "11:00"] {
            assert!(!slots.iter().any(|s| s == taken), "{} still offered", taken);
        }
        assert_eq!(slots.len(), TIME_SLOTS.len() - 3);
    }

    #[test]
    fn test_two_scheduled_leave_date_open() {
        let appointments = vec![
            scheduled(1, "2026-02-11", "09:00"),
            scheduled(2, "2026-02-11", "10:00"),
        ];
        assert!(DAILY_CAP > appointments.len());
        assert!(blocked_dates(&appointments).is_empty());
    }

    #[test]
    fn test_only_scheduled_appointments_count() {
        let appointments = vec![
            scheduled(1, "2026-02-11", "09:00"),
            appointment(2, "2026-02-11", "10:00", AppointmentStatus::Postponed),
            appointment(3, "2026-02-11", "11:00", AppointmentStatus::Completed),
            appointment(4, "2026-02-11", "12:00", AppointmentStatus::NoShow),
        ];

        assert!(blocked_dates(&appointments).is_empty());
        assert_eq!(
            available_slots(&appointments, "2026-02-11"),
            vec!["10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00"]
        );
    }

    #[test]
    fn test_other_dates_do_not_affect_slots() {
        let appointments = vec![
            scheduled(1, "2026-02-10", "09:00"),
            scheduled(2, "2026-02-12", "09:00"),
        ];
        assert_eq!(available_slots(&appointments, "2026-02-11"), TIME_SLOTS.to_vec());
    }

    #[test]
    fn test_blocked_dates_are_sorted_and_unique() {
        let mut appointments = Vec::new();
        let mut id = 0;
        for date in ["2026-03-02", "2026-03-01"] {
            for time in ["09:00", "10:00", "11:00", "12:00"] {
                id += 1;
                appointments.push(scheduled(id, date, time));
            }
        }

        let blocked: Vec<String> = blocked_dates(&appointments).into_iter().collect();
        assert_eq!(blocked, vec!["2026-03-01", "2026-03-02"]);
    }

    #[test]
    fn test_is_slot() {
        assert!(is_slot("09:00"));
        assert!(is_slot("17:00"));
        assert!(!is_slot("08:00"));
        assert!(!is_slot("9:00"));
        assert!(!is_slot(""));
    }
}
