use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WallOfShame::Table)
                    .if_not_exists()
                    .col(pk_auto(WallOfShame::Id))
                    .col(string(WallOfShame::MessageId))
                    .col(string(WallOfShame::AuthorId))
                    .col(string(WallOfShame::Author))
                    .col(text_null(WallOfShame::AuthorUrl))
                    .col(text(WallOfShame::Content))
                    .col(string(WallOfShame::ChannelName))
                    .col(string(WallOfShame::ChannelId))
                    .col(timestamp(WallOfShame::CreatedAt))
                    .col(string(WallOfShame::GuildName))
                    .col(string(WallOfShame::GuildId))
                    .col(text(WallOfShame::AttachmentUrls))
                    .to_owned(),
            )
            .await?;

        // A message can only be archived once
        manager
            .create_index(
                Index::create()
                    .name("idx_wall_of_shame_message_id")
                    .table(WallOfShame::Table)
                    .col(WallOfShame::MessageId)
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
                    .name("idx_wall_of_shame_message_id")
                    .table(WallOfShame::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WallOfShame::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WallOfShame {
    Table,
    Id,
    MessageId,
    AuthorId,
    Author,
    AuthorUrl,
    Content,
    ChannelName,
    ChannelId,
    CreatedAt,
    GuildName,
    GuildId,
    AttachmentUrls,
}
