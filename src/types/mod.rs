pub mod frames;
pub mod records;
pub mod season;
pub mod traits;
pub mod weather_situation;
pub mod year_index;
