mod bracket;
mod live;
mod registration;
mod user;
