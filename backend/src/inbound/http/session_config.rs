//! Cookie-session settings read from the environment.
//!
//! | Variable                  | Values                          | Debug default |
//! |---------------------------|---------------------------------|---------------|
//! | `SESSION_KEY_FILE`        | path                            | `/var/run/secrets/session_key` |
//! | `SESSION_COOKIE_SECURE`   | `1/0/true/false/yes/no/y/n`     | secure        |
//! | `SESSION_SAMESITE`        | `Strict/Lax/None`               | `Lax`         |
//! | `SESSION_ALLOW_EPHEMERAL` | `1/0/true/false/yes/no/y/n`     | disabled      |
//!
//! Debug builds log a warning and fall back to the default for a missing or
//! unparsable value, and to a temporary key when the key file is missing or
//! under 32 bytes. Release builds reject all of these.

use std::path::PathBuf;

use actix_web::cookie::{Key, SameSite};
use mockable::Env;
use tracing::warn;
use zeroize::Zeroize;

const SESSION_KEY_DEFAULT_PATH: &str = "/var/run/secrets/session_key";
const SESSION_KEY_MIN_LEN: usize = 64;
/// Shortest master key `Key::derive_from` accepts.
const KEY_DERIVE_MIN_LEN: usize = 32;
const KEY_FILE_ENV: &str = "SESSION_KEY_FILE";
const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";
const SAMESITE_ENV: &str = "SESSION_SAMESITE";
const ALLOW_EPHEMERAL_ENV: &str = "SESSION_ALLOW_EPHEMERAL";
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";
const SAMESITE_EXPECTED: &str = "Strict|Lax|None";

/// How strictly the environment is validated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Warn and use defaults.
    Debug,
    /// Every toggle must be present and valid.
    Release,
}

impl BuildMode {
    /// `Debug` when compiled with debug assertions, `Release` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kudos::inbound::http::session_config::BuildMode;
    ///
    /// let expected = if cfg!(debug_assertions) { BuildMode::Debug } else { BuildMode::Release };
    /// assert_eq!(BuildMode::from_debug_assertions(), expected);
    /// ```
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }
}

/// Validated cookie-session settings.
pub struct SessionSettings {
    /// Signing and encryption key.
    pub key: Key,
    /// Whether the cookie carries the `Secure` attribute.
    pub cookie_secure: bool,
    /// `SameSite` policy of the cookie.
    pub same_site: SameSite,
}

/// Errors raised while validating session configuration.
#[derive(thiserror::Error, Debug)]
pub enum SessionConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    /// Reading the session key file failed.
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The key file is shorter than a release build accepts.
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
    /// `SameSite=None` without a secure cookie.
    #[error("SESSION_SAMESITE=None requires SESSION_COOKIE_SECURE=1")]
    InsecureSameSiteNone,
    /// Ephemeral keys requested in a release build.
    #[error("SESSION_ALLOW_EPHEMERAL must be 0 in release builds")]
    EphemeralNotAllowed,
}

struct SessionEnv<'a, E> {
    env: &'a E,
    mode: BuildMode,
}

impl<E: Env> SessionEnv<'_, E> {
    /// Read and parse `name`, tolerating absence or garbage in debug builds.
    fn lenient<T: Copy>(
        &self,
        name: &'static str,
        expected: &'static str,
        debug_default: T,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, SessionConfigError> {
        let Some(value) = self.env.string(name) else {
            return match self.mode {
                BuildMode::Debug => {
                    warn!(variable = name, "not set; using default");
                    Ok(debug_default)
                }
                BuildMode::Release => Err(SessionConfigError::MissingEnv { name }),
            };
        };
        match (parse(&value), self.mode) {
            (Some(parsed), _) => Ok(parsed),
            (None, BuildMode::Debug) => {
                warn!(variable = name, %value, "invalid value; using default");
                Ok(debug_default)
            }
            (None, BuildMode::Release) => Err(SessionConfigError::InvalidEnv {
                name,
                value,
                expected,
            }),
        }
    }

    fn cookie_secure(&self) -> Result<bool, SessionConfigError> {
        self.lenient(COOKIE_SECURE_ENV, BOOL_EXPECTED, true, parse_bool)
    }

    fn same_site(&self, cookie_secure: bool) -> Result<SameSite, SessionConfigError> {
        let same_site = self.lenient(SAMESITE_ENV, SAMESITE_EXPECTED, SameSite::Lax, parse_same_site)?;
        if same_site == SameSite::None && !cookie_secure {
            match self.mode {
                BuildMode::Debug => {
                    warn!("SESSION_SAMESITE=None without a secure cookie; browsers may reject it");
                }
                BuildMode::Release => return Err(SessionConfigError::InsecureSameSiteNone),
            }
        }
        Ok(same_site)
    }

    fn allow_ephemeral(&self) -> Result<bool, SessionConfigError> {
        let allowed = self.lenient(ALLOW_EPHEMERAL_ENV, BOOL_EXPECTED, false, parse_bool)?;
        if allowed && self.mode == BuildMode::Release {
            return Err(SessionConfigError::EphemeralNotAllowed);
        }
        Ok(allowed)
    }

    fn key(&self, allow_ephemeral: bool) -> Result<Key, SessionConfigError> {
        let path = PathBuf::from(
            self.env
                .string(KEY_FILE_ENV)
                .unwrap_or_else(|| SESSION_KEY_DEFAULT_PATH.to_owned()),
        );
        let mut bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(source) if self.mode == BuildMode::Debug || allow_ephemeral => {
                warn!(path = %path.display(), error = %source, "using temporary session key (dev only)");
                return Ok(Key::generate());
            }
            Err(source) => return Err(SessionConfigError::KeyRead { path, source }),
        };

        let length = bytes.len();
        let result = match self.mode {
            BuildMode::Release if length < SESSION_KEY_MIN_LEN => {
                Err(SessionConfigError::KeyTooShort {
                    path,
                    length,
                    min_len: SESSION_KEY_MIN_LEN,
                })
            }
            BuildMode::Debug if length < KEY_DERIVE_MIN_LEN => {
                warn!(
                    path = %path.display(),
                    length,
                    "session key too short to derive from; using temporary session key (dev only)"
                );
                Ok(Key::generate())
            }
            _ => Ok(Key::derive_from(&bytes)),
        };
        bytes.zeroize();
        result
    }
}

/// Build session settings from the environment.
///
/// # Examples
///
/// ```rust
/// use kudos::inbound::http::session_config::{BuildMode, session_settings_from_env};
/// use mockable::MockEnv;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let key_path = std::env::temp_dir().join("kudos_session_key_example");
/// std::fs::write(&key_path, vec![b'k'; 64])?;
/// let key_path = key_path.to_string_lossy().into_owned();
///
/// let mut env = MockEnv::new();
/// env.expect_string().returning(move |name| match name {
///     "SESSION_KEY_FILE" => Some(key_path.clone()),
///     "SESSION_COOKIE_SECURE" => Some("1".to_owned()),
///     "SESSION_SAMESITE" => Some("Strict".to_owned()),
///     "SESSION_ALLOW_EPHEMERAL" => Some("0".to_owned()),
///     _ => None,
/// });
///
/// let settings = session_settings_from_env(&env, BuildMode::Release)?;
/// assert!(settings.cookie_secure);
/// # Ok(())
/// # }
/// ```
pub fn session_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<SessionSettings, SessionConfigError> {
    let reader = SessionEnv { env, mode };
    let cookie_secure = reader.cookie_secure()?;
    let same_site = reader.same_site(cookie_secure)?;
    let allow_ephemeral = reader.allow_ephemeral()?;
    let key = reader.key(allow_ephemeral)?;

    Ok(SessionSettings {
        key,
        cookie_secure,
        same_site,
    })
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

fn parse_same_site(value: &str) -> Option<SameSite> {
    match value.to_ascii_lowercase().as_str() {
        "strict" => Some(SameSite::Strict),
        "lax" => Some(SameSite::Lax),
        "none" => Some(SameSite::None),
        _ => None,
    }
}
