pub mod date;
pub mod input;
pub mod path;
pub mod table;
pub mod time;
