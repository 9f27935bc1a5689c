pub mod check;
pub mod compare;
pub mod list;
pub mod round;
pub mod version;
