pub mod students;

pub use students::configure_student_routes;
