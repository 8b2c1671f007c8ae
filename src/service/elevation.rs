//! Automatic role elevation for the configured admin user.
//!
//! When the bot sees a guild it makes sure the configured user holds a role with the
//! ADMINISTRATOR permission, reusing an existing one where the bot is allowed to
//! assign it and creating an `Admin` role otherwise.

use std::collections::HashMap;

use serenity::{
    all::{EditRole, GuildId, Permissions, Role, RoleId, UserId},
    http::Http,
};

use crate::{
    error::AppError,
    util::permissions::{highest_role_position, member_permissions},
};

const ADMIN_ROLE_NAME: &str = "Admin";
const AUDIT_REASON: &str = "Elevate specified user";

/// What the guild's state calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevationPlan {
    /// The user already has ADMINISTRATOR.
    AlreadyAdmin,
    /// Give the user this existing administrator role.
    AssignExisting(RoleId),
    /// Create a new administrator role at this position, then give it to the user.
    CreateRole { position: u16 },
    /// No assignable role exists and the bot may not create one.
    MissingPermission,
}

/// Guild state needed to plan an elevation.
pub struct ElevationInput<'a> {
    pub guild_id: GuildId,
    pub owner_id: UserId,
    pub roles: &'a HashMap<RoleId, Role>,
    pub target_id: UserId,
    pub target_roles: &'a [RoleId],
    pub bot_id: UserId,
    pub bot_roles: &'a [RoleId],
}

/// Decides how to make the target an administrator.
///
/// Existing roles are only considered when they sit strictly below the bot's highest
/// role, since Discord refuses to assign anything else. The highest such role wins.
pub fn plan_elevation(input: &ElevationInput<'_>) -> ElevationPlan {
    let target_permissions = member_permissions(
        input.guild_id,
        input.owner_id,
        input.roles,
        input.target_id,
        input.target_roles,
    );
    if target_permissions.administrator() {
        return ElevationPlan::AlreadyAdmin;
    }

    let everyone = RoleId::new(input.guild_id.get());
    let bot_top = highest_role_position(input.roles, input.bot_roles);

    let existing = input
        .roles
        .values()
        .filter(|role| role.id != everyone && !role.managed)
        .filter(|role| role.permissions.administrator() && role.position < bot_top)
        .max_by_key(|role| (role.position, role.id));

    if let Some(role) = existing {
        return ElevationPlan::AssignExisting(role.id);
    }

    let bot_permissions = member_permissions(
        input.guild_id,
        input.owner_id,
        input.roles,
        input.bot_id,
        input.bot_roles,
    );
    if bot_permissions.manage_roles() || bot_permissions.administrator() {
        ElevationPlan::CreateRole {
            position: bot_top.saturating_sub(1),
        }
    } else {
        ElevationPlan::MissingPermission
    }
}

/// Result of an elevation attempt in one guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevationOutcome {
    NotMember,
    AlreadyAdmin,
    Assigned(RoleId),
    Created(RoleId),
    MissingPermission,
}

pub struct ElevationService<'a> {
    http: &'a Http,
}

impl<'a> ElevationService<'a> {
    pub fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Makes `user_id` an administrator of `guild_id` if it isn't one already.
    ///
    /// # Returns
    /// - `Ok(ElevationOutcome)` - What was done, including the cases where nothing was
    /// - `Err(AppError::DiscordErr)` - Fetching the guild or a Discord write failed
    pub async fn elevate(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        bot_id: UserId,
    ) -> Result<ElevationOutcome, AppError> {
        let target = match self.http.get_member(guild_id, user_id).await {
            Ok(member) => member,
            Err(e) => {
                tracing::info!(
                    "User {} is not a member of guild {}: {}",
                    user_id,
                    guild_id,
                    e
                );
                return Ok(ElevationOutcome::NotMember);
            }
        };

        let guild = self.http.get_guild(guild_id).await?;
        let bot = self.http.get_member(guild_id, bot_id).await?;

        let plan = plan_elevation(&ElevationInput {
            guild_id,
            owner_id: guild.owner_id,
            roles: &guild.roles,
            target_id: user_id,
            target_roles: &target.roles,
            bot_id,
            bot_roles: &bot.roles,
        });

        tracing::debug!("Elevation plan for guild {}: {:?}", guild_id, plan);

        let role_id = match plan {
            ElevationPlan::AlreadyAdmin => {
                tracing::info!("User {} is already admin in guild {}", user_id, guild_id);
                return Ok(ElevationOutcome::AlreadyAdmin);
            }
            ElevationPlan::MissingPermission => {
                tracing::warn!(
                    "Cannot elevate user {} in guild {}: no assignable admin role and no permission to create one",
                    user_id,
                    guild_id
                );
                return Ok(ElevationOutcome::MissingPermission);
            }
            ElevationPlan::AssignExisting(role_id) => role_id,
            ElevationPlan::CreateRole { position } => {
                let role = guild_id
                    .create_role(
                        self.http,
                        EditRole::new()
                            .name(ADMIN_ROLE_NAME)
                            .permissions(Permissions::all())
                            .position(position)
                            .audit_log_reason(AUDIT_REASON),
                    )
                    .await?;

                tracing::info!(
                    "Created role {} ({}) in guild {}",
                    role.name,
                    role.id,
                    guild_id
                );
                role.id
            }
        };

        self.http
            .add_member_role(guild_id, user_id, role_id, Some(AUDIT_REASON))
            .await?;

        tracing::info!(
            "Gave role {} to user {} in guild {}",
            role_id,
            user_id,
            guild_id
        );

        Ok(match plan {
            ElevationPlan::CreateRole { .. } => ElevationOutcome::Created(role_id),
            _ => ElevationOutcome::Assigned(role_id),
        })
    }
}
