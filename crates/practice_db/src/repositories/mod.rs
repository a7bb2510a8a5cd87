pub mod appointment;
pub mod appointment_sql;

pub use appointment::AppointmentRepository;
pub use appointment_sql::SqlAppointmentRepository;
