// --- File: crates/practice_appointments/src/pages.rs ---
//! Server-rendered pages: landing page, booking form and the admin list.

use crate::logic::TIME_SLOTS;
use chrono::Datelike;
use practice_common::models::Appointment;

/// Services offered on the booking form.
pub const SERVICES: [&str; 4] = [
    "Individual therapy",
    "Couples therapy",
    "Family therapy",
    "Initial consultation",
];

/// Escape text for use inside HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    let year = chrono::Utc::now().year();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<header><nav><a href="/">Home</a> | <a href="/booking">Book an appointment</a></nav></header>
<main>
{body}
</main>
<footer>&copy; {year} Therapy Practice</footer>
</body>
</html>"#,
        title = escape(title),
        body = body,
        year = year
    )
}

pub fn home(booked: bool) -> String {
    let banner = if booked {
        r#"<p class="flash">Appointment booked successfully! We will contact you soon.</p>"#
    } else {
        ""
    };
    layout(
        "Therapy Practice",
        &format!(
            r#"{banner}
<h1>Welcome</h1>
<p>Book a session online. Available times are shown for each day.</p>
<p><a class="button" href="/booking">Book an appointment</a></p>"#
        ),
    )
}

pub fn booking_form(error: Option<&str>) -> String {
    let error = error
        .map(|message| format!(r#"<p class="error">{}</p>"#, escape(message)))
        .unwrap_or_default();
    let services: String = SERVICES
        .iter()
        .map(|s| format!(r#"<option value="{0}">{0}</option>"#, escape(s)))
        .collect();
    let slots: String = TIME_SLOTS
        .iter()
        .map(|t| format!(r#"<option value="{0}">{0}</option>"#, t))
        .collect();

    layout(
        "Book an appointment",
        &format!(
            r#"<h1>Book an appointment</h1>
{error}
<form method="post" action="/booking">
<label>Name <input name="name" required></label>
<label>Email <input name="email" type="email" required></label>
<label>Phone <input name="phone" required></label>
<label>ID number (optional) <input name="id_number"></label>
<label>Service <select name="service" required>{services}</select></label>
<label>Date <input name="date" id="date" type="date" required></label>
<label>Time <select name="time" id="time" required>{slots}</select></label>
<button type="submit">Book</button>
</form>
<script>
document.getElementById('date').addEventListener('change', async (event) => {{
  const blocked = await (await fetch('/api/blocked-dates')).json();
  const select = document.getElementById('time');
  select.innerHTML = '';
  if (blocked.blocked_dates.includes(event.target.value)) {{
    select.add(new Option('Fully booked', ''));
    return;
  }}
  const open = await (await fetch('/api/available-slots?date=' + encodeURIComponent(event.target.value))).json();
  open.slots.forEach((slot) => select.add(new Option(slot, slot)));
}});
</script>"#
        ),
    )
}

pub fn admin(appointments: &[Appointment]) -> String {
    let rows: String = appointments
        .iter()
        .map(|a| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                a.id,
                escape(&a.name),
                escape(&a.email),
                escape(&a.phone),
                escape(a.id_number.as_deref().unwrap_or("-")),
                escape(&a.service),
                escape(&a.date),
                escape(&a.time),
                a.status,
                a.created_at.format("%Y-%m-%d %H:%M"),
            )
        })
        .collect();

    layout(
        "Appointments",
        &format!(
            r#"<h1>Appointments ({count})</h1>
<table>
<thead><tr><th>ID</th><th>Name</th><th>Email</th><th>Phone</th><th>ID number</th><th>Service</th><th>Date</th><th>Time</th><th>Status</th><th>Booked</th></tr></thead>
<tbody>
{rows}</tbody>
</table>"#,
            count = appointments.len(),
        ),
    )
}

pub fn access_denied() -> String {
    layout(
        "Access denied",
        "<h1>Access denied</h1>\n<p>A valid password is required to view appointments.</p>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use practice_common::models::AppointmentStatus;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_admin_escapes_client_input() {
        let appointment = Appointment {
            id: 1,
            name: "<script>alert(1)</script>".to_string(),
            email: "a@example.com".to_string(),
            phone: "1".to_string(),
            id_number: None,
            service: "Individual therapy".to_string(),
            date: "2026-02-11".to_string(),
            time: "09:00".to_string(),
            status: AppointmentStatus::NoShow,
            created_at: chrono::Utc::now(),
        };

        let html = admin(&[appointment]);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("no-show"));
    }

    #[test]
    fn test_booking_form_lists_every_slot() {
        let html = booking_form(Some("date is required"));
        for slot in TIME_SLOTS {
            assert!(html.contains(&format!(r#"value="{}""#, slot)));
        }
        assert!(html.contains("date is required"));
    }
}
