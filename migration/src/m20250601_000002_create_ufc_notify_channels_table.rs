use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UfcNotifyChannels::Table)
                    .if_not_exists()
                    .col(pk_auto(UfcNotifyChannels::Id))
                    .col(string(UfcNotifyChannels::ChannelId))
                    .col(
                        timestamp(UfcNotifyChannels::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create unique index on channel_id
        manager
            .create_index(
                Index::create()
                    .name("idx_ufc_notify_channels_channel_id")
                    .table(UfcNotifyChannels::Table)
                    .col(UfcNotifyChannels::ChannelId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_ufc_notify_channels_channel_id")
                    .table(UfcNotifyChannels::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UfcNotifyChannels::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UfcNotifyChannels {
    Table,
    Id,
    ChannelId,
    CreatedAt,
}
