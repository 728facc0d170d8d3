pub mod bracket;
pub mod broadcast;
pub mod conflict;
