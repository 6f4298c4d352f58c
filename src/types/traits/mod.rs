pub mod any_date;
pub mod dated;
pub mod types;
