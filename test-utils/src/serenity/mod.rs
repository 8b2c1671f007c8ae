//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_message, create_test_role, create_test_role_with_permissions, create_test_user};
//!
//! let member_role = create_test_role(222222222, "Member", 0x00FF00, 1);
//! let admin_role = create_test_role_with_permissions(111111111, "Admin", 10, 1 << 3);
//!
//! let author = create_test_user(333333333, "dumbass", None);
//! let message = create_test_message(444444444, 555555555, &author, "hello", &[]);
//! ```

pub mod message;
pub mod role;

pub use message::{create_test_message, create_test_user};
pub use role::{create_test_role, create_test_role_with_permissions};
