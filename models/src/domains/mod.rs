//! `SeaORM` entities for the relational store.

pub mod matches;
pub mod notifications;
pub mod registrations;
pub mod sea_orm_active_enums;
pub mod tournaments;
pub mod users;
