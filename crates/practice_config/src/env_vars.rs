//! Environment variable handling for the practice booking service.
//!
//! Three naming schemes are understood:
//!
//! * `PRACTICE__SERVER__PORT` style variables, read by the `config` builder,
//! * `PRACTICE_SECRET_MAIL_PASSWORD` style variables for `"secret_from_env"` markers,
//! * the plain names hosting platforms set (`PORT`, `DATABASE_URL`, ...).

use std::env;
use tracing::warn;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "PRACTICE";

/// The prefix for secret environment variables
pub const SECRET_PREFIX: &str = "PRACTICE_SECRET";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// The separator for secret environment variables
pub const SECRET_SEPARATOR: &str = "_";

/// Marker value in config files meaning "read this from the environment".
pub const SECRET_MARKER: &str = "secret_from_env";

/// Plain environment variables and the config keys they override.
pub const PLATFORM_OVERRIDES: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("DATABASE_URL", "database.url"),
    ("SECRET_KEY", "security.secret_key"),
    ("ADMIN_PASSWORD", "admin.password"),
    ("MAIL_USERNAME", "mail.username"),
    ("MAIL_PASSWORD", "mail.password"),
];

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a secret path to an environment variable name
///
/// `"mail.password"` becomes `"PRACTICE_SECRET_MAIL_PASSWORD"`.
pub fn secret_path_to_env_var(path: &str) -> String {
    let path = path.replace('.', SECRET_SEPARATOR);
    format!("{}{}{}", SECRET_PREFIX, SECRET_SEPARATOR, path).to_uppercase()
}

/// Convert a secret path to its unprefixed environment variable name
///
/// `"mail.password"` becomes `"MAIL_PASSWORD"`.
pub fn legacy_secret_path_to_env_var(path: &str) -> String {
    path.replace('.', SECRET_SEPARATOR).to_uppercase()
}

/// Look up the value for a secret path, prefixed name first.
pub fn get_secret_env_var(path: &str) -> Option<String> {
    if let Ok(value) = env::var(secret_path_to_env_var(path)) {
        return Some(value);
    }
    env::var(legacy_secret_path_to_env_var(path)).ok()
}

/// Platform variables that are currently set, as `(config key, value)` pairs.
pub fn platform_overrides() -> Vec<(&'static str, String)> {
    PLATFORM_OVERRIDES
        .iter()
        .filter_map(|(var, key)| env::var(var).ok().map(|value| (*key, value)))
        .collect()
}

/// Inject environment variables into a JSON value
///
/// Walks the value and replaces every `"secret_from_env"` string with the
/// matching secret variable. Returns `true` if anything was replaced.
pub fn inject_env_vars(value: &mut serde_json::Value) -> bool {
    use serde_json::Value;

    fn walk(path: Vec<String>, obj: &mut Value) -> bool {
        let mut replaced = false;

        match obj {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    let mut new_path = path.clone();
                    new_path.push(k.to_string());
                    replaced |= walk(new_path, v);
                }
            }
            Value::String(s) if s == SECRET_MARKER => {
                let path_str = path.join(".");
                if let Some(env_val) = get_secret_env_var(&path_str) {
                    *s = env_val;
                    replaced = true;
                } else {
                    warn!("env var for {} not found", path_str);
                }
            }
            _ => {}
        }

        replaced
    }

    walk(vec![], value)
}
