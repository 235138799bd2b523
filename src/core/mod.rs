pub mod add;
pub mod backup;
pub mod del;
pub mod log;
pub mod mark;
pub mod search;
