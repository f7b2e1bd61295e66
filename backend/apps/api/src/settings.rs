//! Runtime Settings
//!
//! Everything the binary reads from the environment (after `.env`).

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use auth::application::BootstrapAdminInput;
use platform::crypto::from_base64;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

pub struct Settings {
    /// Without it accounts live in memory and vanish on restart
    pub database_url: Option<String>,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
    pub admin: Option<BootstrapAdminInput>,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr: SocketAddr = var("BIND_ADDR")
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let frontend_origins = var("FRONTEND_ORIGINS")
            .as_deref()
            .unwrap_or(DEFAULT_FRONTEND_ORIGINS)
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            database_url: var("DATABASE_URL"),
            bind_addr,
            frontend_origins,
            auth: auth_config()?,
            admin: admin_input(),
        })
    }
}

fn auth_config() -> anyhow::Result<AuthConfig> {
    let mut config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        AuthConfig::default()
    };

    match var("TOKEN_SECRET") {
        Some(secret_b64) => config.token_secret = decode_secret(&secret_b64)?,
        None if cfg!(debug_assertions) => {
            tracing::warn!("TOKEN_SECRET not set, using a random key; tokens will not survive a restart");
        }
        None => bail!("TOKEN_SECRET must be set in production"),
    }

    if let Some(ttl) = var("TOKEN_TTL_SECS") {
        let secs: u64 = ttl.parse().context("TOKEN_TTL_SECS must be a whole number of seconds")?;
        if secs == 0 {
            bail!("TOKEN_TTL_SECS must be greater than zero");
        }
        config.token_ttl = Duration::from_secs(secs);
    }

    config.password_pepper = var("PASSWORD_PEPPER").map(String::into_bytes);
    config.allow_admin_registration = flag("ALLOW_ADMIN_REGISTRATION")?;
    config.enforce_approval_per_request = flag("ENFORCE_APPROVAL_PER_REQUEST")?;

    Ok(config)
}

fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = from_base64(secret_b64.trim()).context("TOKEN_SECRET must be base64")?;

    <[u8; 32]>::try_from(bytes.as_slice())
        .map_err(|_| anyhow::anyhow!("TOKEN_SECRET must decode to 32 bytes, got {}", bytes.len()))
}

fn admin_input() -> Option<BootstrapAdminInput> {
    let (email, password, mobile) = match (var("ADMIN_EMAIL"), var("ADMIN_PASSWORD"), var("ADMIN_MOBILE")) {
        (Some(email), Some(password), Some(mobile)) => (email, password, mobile),
        (None, None, None) => return None,
        _ => {
            tracing::warn!("ADMIN_EMAIL, ADMIN_PASSWORD and ADMIN_MOBILE must all be set; skipping admin bootstrap");
            return None;
        }
    };

    Some(BootstrapAdminInput {
        name: var("ADMIN_NAME"),
        email,
        mobile,
        password,
    })
}

/// Non-empty environment variable
fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn flag(key: &str) -> anyhow::Result<bool> {
    match var(key).map(|value| value.trim().to_ascii_lowercase()).as_deref() {
        None | Some("0" | "false" | "no" | "off") => Ok(false),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some(other) => bail!("{key} must be a boolean, got {other:?}"),
    }
}
