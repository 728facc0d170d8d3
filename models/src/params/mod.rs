pub mod matches;
pub mod notification;
pub mod registration;
pub mod tournament;
pub mod user;
