use models::domains::{matches, notifications, registrations, tournaments, users};
use sea_orm_migration::prelude::*;

const REGISTRATION_UNIQUE_INDEX: &str = "idx-registrations-user_id-tournament_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(users::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(users::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(users::Column::FullName).string().not_null())
                    .col(
                        ColumnDef::new(users::Column::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(users::Column::PasswordHash)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(users::Column::Role)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(users::Column::Phone).string().null())
                    .col(ColumnDef::new(users::Column::Avatar).string().null())
                    .col(
                        ColumnDef::new(users::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(tournaments::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(tournaments::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(tournaments::Column::Name).string().not_null())
                    .col(
                        ColumnDef::new(tournaments::Column::SportType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(tournaments::Column::StartDate).date().not_null())
                    .col(ColumnDef::new(tournaments::Column::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(tournaments::Column::Location)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(tournaments::Column::Status)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(tournaments::Column::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(tournaments::Column::BannerUrl)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(tournaments::Column::Fee)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(tournaments::Column::MaxParticipants)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(tournaments::Column::RegistrationDeadline)
                            .date()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(tournaments::Column::ContactInfo)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(registrations::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(registrations::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(registrations::Column::UserId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(registrations::Column::TournamentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(registrations::Column::Status)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(registrations::Column::TeamName)
                            .string()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-registrations-user_id")
                            .from(registrations::Entity, registrations::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-registrations-tournament_id")
                            .from(registrations::Entity, registrations::Column::TournamentId)
                            .to(tournaments::Entity, tournaments::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // One registration per (user, tournament); the application maps
        // violations of this index to a duplicate registration.
        manager
            .create_index(
                Index::create()
                    .name(REGISTRATION_UNIQUE_INDEX)
                    .table(registrations::Entity)
                    .col(registrations::Column::UserId)
                    .col(registrations::Column::TournamentId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(matches::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(matches::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(matches::Column::TournamentId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(matches::Column::Team1).string().not_null())
                    .col(ColumnDef::new(matches::Column::Team2).string().not_null())
                    .col(
                        ColumnDef::new(matches::Column::Score1)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(matches::Column::Score2)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(matches::Column::Round).string().not_null())
                    .col(ColumnDef::new(matches::Column::StartTime).date_time().null())
                    .col(ColumnDef::new(matches::Column::Venue).string().null())
                    .col(
                        ColumnDef::new(matches::Column::Status)
                            .string_len(16)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-matches-tournament_id")
                            .from(matches::Entity, matches::Column::TournamentId)
                            .to(tournaments::Entity, tournaments::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-matches-venue-start_time")
                    .table(matches::Entity)
                    .col(matches::Column::Venue)
                    .col(matches::Column::StartTime)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(notifications::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(notifications::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(notifications::Column::UserId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(notifications::Column::Title)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(notifications::Column::Message)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(notifications::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-notifications-user_id")
                            .from(notifications::Entity, notifications::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(notifications::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(matches::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(registrations::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(tournaments::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(users::Entity).to_owned())
            .await?;

        Ok(())
    }
}
