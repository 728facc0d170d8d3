use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::TournamentStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tournaments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub sport_type: String,
    pub start_date: Date,
    pub end_date: Date,
    pub location: String,
    pub status: TournamentStatus,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub banner_url: String,
    pub fee: f64,
    pub max_participants: i32,
    pub registration_deadline: Option<Date>,
    pub contact_info: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::registrations::Entity")]
    Registrations,
    #[sea_orm(has_many = "super::matches::Entity")]
    Matches,
}

impl Related<super::registrations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registrations.def()
    }
}

impl Related<super::matches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Matches.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
