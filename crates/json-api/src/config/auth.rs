//! Auth Config

use clap::Args;
use tailor_app::domain::access::{principal::RevocationPolicy, secret::AdminSecret};

/// Minimum length salvo accepts for a session signing secret.
pub const MIN_SESSION_SECRET_BYTES: usize = 64;

/// Admin and session settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Shared admin password
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    pub admin_password: String,

    /// Secret used to sign session cookies (at least 64 bytes)
    #[arg(
        long,
        env = "SESSION_SECRET",
        hide_env_values = true,
        value_parser = parse_session_secret
    )]
    pub session_secret: String,

    /// What happens to live sessions when their license is revoked (immediate, lazy)
    #[arg(long, env = "REVOCATION_POLICY", default_value = "immediate")]
    pub revocation_policy: RevocationPolicy,

    /// Seed the demo license on startup
    #[arg(long, env = "SEED_DEMO_LICENSE", default_value_t = false)]
    pub seed_demo_license: bool,
}

impl AuthConfig {
    #[must_use]
    pub fn admin_secret(&self) -> AdminSecret {
        AdminSecret::new(self.admin_password.clone())
    }
}

fn parse_session_secret(value: &str) -> Result<String, String> {
    if value.len() < MIN_SESSION_SECRET_BYTES {
        return Err(format!(
            "session secret must be at least {MIN_SESSION_SECRET_BYTES} bytes"
        ));
    }

    Ok(value.to_string())
}
