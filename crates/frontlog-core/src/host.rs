//! Host environment details reported alongside page loads and exceptions.

use url::Url;

/// Where the logger is running and who it is running as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnvironment {
    /// Current location (page URL, or the working directory as a `file:` URL)
    pub location: String,
    /// Client identification string
    pub user_agent: String,
}

impl HostEnvironment {
    /// Create an environment with explicit values.
    pub fn new(location: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            user_agent: user_agent.into(),
        }
    }

    /// Detect the environment of the current process.
    ///
    /// The location is the working directory as a `file:` URL (or
    /// `about:blank` if it cannot be determined), and the user agent names the
    /// crate version, OS and architecture.
    pub fn detect() -> Self {
        let location = std::env::current_dir()
            .ok()
            .and_then(|dir| Url::from_directory_path(dir).ok())
            .map(String::from)
            .unwrap_or_else(|| "about:blank".to_string());

        Self {
            location,
            user_agent: default_user_agent(),
        }
    }

    /// Apply configured overrides.
    pub fn with_overrides(mut self, location: Option<&str>, user_agent: Option<&str>) -> Self {
        if let Some(location) = location {
            self.location = location.to_string();
        }
        if let Some(user_agent) = user_agent {
            self.user_agent = user_agent.to_string();
        }
        self
    }
}

impl Default for HostEnvironment {
    fn default() -> Self {
        Self::detect()
    }
}

/// `frontlog/<version> (<os>; <arch>)`
pub fn default_user_agent() -> String {
    format!(
        "{}/{} ({}; {})",
        crate::APP_NAME,
        crate::VERSION,
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        let host = HostEnvironment::detect();
        assert!(host.location.starts_with("file://") || host.location == "about:blank");
        assert!(host.user_agent.starts_with("frontlog/"));
        assert!(host.user_agent.contains(std::env::consts::OS));
    }

    #[test]
    fn test_overrides() {
        let host = HostEnvironment::new("https://shop.local/cart", "ua")
            .with_overrides(Some("https://shop.local/checkout"), None);
        assert_eq!(host.location, "https://shop.local/checkout");
        assert_eq!(host.user_agent, "ua");
    }
}
