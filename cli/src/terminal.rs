pub mod colors;
pub mod logging;
pub mod messages;
pub mod print;
