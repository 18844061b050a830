//! Well-known role names carried in access-token `role` claims.

pub const ROLE_ADMIN: &str = "admin";
