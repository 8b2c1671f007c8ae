use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UfcEvents::Table)
                    .if_not_exists()
                    .col(pk_auto(UfcEvents::Id))
                    .col(string(UfcEvents::EventName))
                    .col(timestamp(UfcEvents::EventDate))
                    .col(text_null(UfcEvents::EventUrl))
                    .col(text_null(UfcEvents::EventDescription))
                    .col(string_null(UfcEvents::EventLocation))
                    .col(
                        timestamp(UfcEvents::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(UfcEvents::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Events are upserted by name
        manager
            .create_index(
                Index::create()
                    .name("idx_ufc_events_event_name")
                    .table(UfcEvents::Table)
                    .col(UfcEvents::EventName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ufc_events_event_date")
                    .table(UfcEvents::Table)
                    .col(UfcEvents::EventDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_ufc_events_event_date")
                    .table(UfcEvents::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_ufc_events_event_name")
                    .table(UfcEvents::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UfcEvents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UfcEvents {
    Table,
    Id,
    EventName,
    EventDate,
    EventUrl,
    EventDescription,
    EventLocation,
    CreatedAt,
    UpdatedAt,
}
