//! Per-resource lifecycle and access policy.

use std::env;

/// Knobs that differ between users, companies and positions.
///
/// The defaults reproduce the behaviour the service has always had;
/// each flag can be overridden with `{PREFIX}_REQUIRE_AUTH`,
/// `{PREFIX}_RESERVE_DELETED_KEYS` and `{PREFIX}_ALLOW_RESTORE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePolicy {
    /// Routes for this resource sit behind the bearer-token middleware.
    pub require_auth: bool,
    /// Soft-deleted rows keep their natural key reserved.
    pub reserve_deleted_keys: bool,
    /// Soft-deleted rows can be brought back.
    pub allow_restore: bool,
}

impl ResourcePolicy {
    /// Users: authenticated, deleted emails are reusable, no restore.
    pub const USERS: Self = Self {
        require_auth: true,
        reserve_deleted_keys: false,
        allow_restore: false,
    };

    /// Companies: open, deleted names stay reserved, restorable.
    pub const COMPANIES: Self = Self {
        require_auth: false,
        reserve_deleted_keys: true,
        allow_restore: true,
    };

    /// Positions: open, deleted names/codes stay reserved, no restore.
    pub const POSITIONS: Self = Self {
        require_auth: false,
        reserve_deleted_keys: true,
        allow_restore: false,
    };

    /// Apply environment overrides on top of `self`.
    pub fn with_env_overrides(self, prefix: &str) -> Self {
        Self {
            require_auth: env_flag(&format!("{prefix}_REQUIRE_AUTH")).unwrap_or(self.require_auth),
            reserve_deleted_keys: env_flag(&format!("{prefix}_RESERVE_DELETED_KEYS"))
                .unwrap_or(self.reserve_deleted_keys),
            allow_restore: env_flag(&format!("{prefix}_ALLOW_RESTORE"))
                .unwrap_or(self.allow_restore),
        }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    env::var(name).ok().and_then(|v| parse_flag(&v))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
