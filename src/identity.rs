// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process and user identity accessors.
//!
//! The composer never looks these values up itself; it asks an
//! [`IdentityProvider`]. That keeps platform branching in one place and
//! lets tests substitute fixed values to pin exact output.

use std::fmt::Debug;
use std::sync::OnceLock;

/// Ambient identity values a log line may carry.
///
/// Implementations return display-ready strings; a platform without a
/// concept (uid on non-unix) substitutes `"?"` rather than failing.
pub trait IdentityProvider: Debug + Send + Sync {
    /// The executable's file name, without its directory.
    fn executable(&self) -> String;
    /// The process id.
    fn pid(&self) -> String;
    /// The numeric user id.
    fn uid(&self) -> String;
    /// The login user name.
    fn user_name(&self) -> String;
}

/// The real thing: values from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdentity;

impl SystemIdentity {
    pub const fn new() -> Self {
        Self
    }
}

impl IdentityProvider for SystemIdentity {
    fn executable(&self) -> String {
        static EXECUTABLE: OnceLock<String> = OnceLock::new();
        EXECUTABLE
            .get_or_init(|| {
                std::env::current_exe()
                    .ok()
                    .and_then(|path| {
                        path.file_name()
                            .map(|name| name.to_string_lossy().into_owned())
                    })
                    .unwrap_or_else(|| "?".to_string())
            })
            .clone()
    }

    fn pid(&self) -> String {
        std::process::id().to_string()
    }

    fn uid(&self) -> String {
        #[cfg(unix)]
        {
            // getuid cannot fail.
            unsafe { libc::getuid() }.to_string()
        }
        #[cfg(not(unix))]
        {
            "?".to_string()
        }
    }

    fn user_name(&self) -> String {
        std::env::var("USER")
            .or_else(|_| std::env::var("LOGNAME"))
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "?".to_string())
    }
}

/// Canned identity values, for tests and for hosts that want to override
/// what the lines claim about the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedIdentity {
    pub executable: String,
    pub pid: String,
    pub uid: String,
    pub user_name: String,
}

impl FixedIdentity {
    /// All four values set to `value`.
    pub fn uniform(value: &str) -> Self {
        Self {
            executable: value.to_string(),
            pid: value.to_string(),
            uid: value.to_string(),
            user_name: value.to_string(),
        }
    }
}

impl IdentityProvider for FixedIdentity {
    fn executable(&self) -> String {
        self.executable.clone()
    }

    fn pid(&self) -> String {
        self.pid.clone()
    }

    fn uid(&self) -> String {
        self.uid.clone()
    }

    fn user_name(&self) -> String {
        self.user_name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_pid_matches_process() {
        assert_eq!(SystemIdentity::new().pid(), std::process::id().to_string());
    }

    #[test]
    fn system_values_are_nonempty() {
        let identity = SystemIdentity::new();
        assert!(!identity.executable().is_empty());
        assert!(!identity.uid().is_empty());
        assert!(!identity.user_name().is_empty());
    }

    #[test]
    fn fixed_identity_echoes_its_values() {
        let identity = FixedIdentity::uniform("x");
        assert_eq!(identity.executable(), "x");
        assert_eq!(identity.pid(), "x");
        assert_eq!(identity.uid(), "x");
        assert_eq!(identity.user_name(), "x");
    }
}
