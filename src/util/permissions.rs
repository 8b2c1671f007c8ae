//! Guild-level permission helpers.
//!
//! These work on plain role maps so they can be used with both cached `Guild`s and
//! `PartialGuild`s fetched over HTTP. Channel overwrites are not considered.

use std::collections::HashMap;

use serenity::all::{GuildId, Permissions, Role, RoleId, UserId};

/// Computes a member's guild-wide permissions.
///
/// The guild owner and members holding ADMINISTRATOR get every permission. Everyone
/// else gets the union of the @everyone role and their own roles.
///
/// # Arguments
/// - `guild_id` - Guild the member belongs to (also the @everyone role id)
/// - `owner_id` - Owner of the guild
/// - `roles` - All roles of the guild
/// - `user_id` - The member's user id
/// - `member_roles` - Roles assigned to the member
pub fn member_permissions(
    guild_id: GuildId,
    owner_id: UserId,
    roles: &HashMap<RoleId, Role>,
    user_id: UserId,
    member_roles: &[RoleId],
) -> Permissions {
    if user_id == owner_id {
        return Permissions::all();
    }

    let everyone = roles
        .get(&RoleId::new(guild_id.get()))
        .map(|role| role.permissions)
        .unwrap_or_else(Permissions::empty);

    let permissions = member_roles
        .iter()
        .filter_map(|id| roles.get(id))
        .fold(everyone, |acc, role| acc | role.permissions);

    if permissions.administrator() {
        Permissions::all()
    } else {
        permissions
    }
}

/// Returns the position of the highest role among `member_roles`, or 0 (@everyone).
pub fn highest_role_position(roles: &HashMap<RoleId, Role>, member_roles: &[RoleId]) -> u16 {
    member_roles
        .iter()
        .filter_map(|id| roles.get(id))
        .map(|role| role.position)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{create_test_role, create_test_role_with_permissions};

    const GUILD: u64 = 1000;
    const OWNER: u64 = 1;
    const MEMBER: u64 = 2;

    fn role_map(roles: Vec<Role>) -> HashMap<RoleId, Role> {
        roles.into_iter().map(|role| (role.id, role)).collect()
    }

    #[test]
    fn owner_has_all_permissions() {
        let roles = role_map(vec![]);

        let perms = member_permissions(
            GuildId::new(GUILD),
            UserId::new(OWNER),
            &roles,
            UserId::new(OWNER),
            &[],
        );

        assert!(perms.administrator());
    }

    #[test]
    fn administrator_role_grants_all_permissions() {
        let roles = role_map(vec![create_test_role_with_permissions(
            10,
            "Admin",
            5,
            Permissions::ADMINISTRATOR.bits(),
        )]);

        let perms = member_permissions(
            GuildId::new(GUILD),
            UserId::new(OWNER),
            &roles,
            UserId::new(MEMBER),
            &[RoleId::new(10)],
        );

        assert_eq!(perms, Permissions::all());
    }

    #[test]
    fn includes_everyone_role() {
        let roles = role_map(vec![
            create_test_role_with_permissions(
                GUILD,
                "@everyone",
                0,
                Permissions::SEND_MESSAGES.bits(),
            ),
            create_test_role_with_permissions(11, "Mods", 3, Permissions::MANAGE_ROLES.bits()),
        ]);

        let perms = member_permissions(
            GuildId::new(GUILD),
            UserId::new(OWNER),
            &roles,
            UserId::new(MEMBER),
            &[RoleId::new(11)],
        );

        assert!(perms.send_messages());
        assert!(perms.manage_roles());
        assert!(!perms.administrator());
    }

    #[test]
    fn ignores_unknown_roles() {
        let roles = role_map(vec![]);

        let perms = member_permissions(
            GuildId::new(GUILD),
            UserId::new(OWNER),
            &roles,
            UserId::new(MEMBER),
            &[RoleId::new(99)],
        );

        assert!(perms.is_empty());
    }

    #[test]
    fn finds_highest_role_position() {
        let roles = role_map(vec![
            create_test_role(20, "Low", 0, 2),
            create_test_role(21, "High", 0, 7),
        ]);

        assert_eq!(
            highest_role_position(&roles, &[RoleId::new(20), RoleId::new(21)]),
            7
        );
        assert_eq!(highest_role_position(&roles, &[]), 0);
    }
}
