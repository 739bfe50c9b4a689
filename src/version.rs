use std::fmt;

// Generated by build.rs
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub struct VersionInfo {
    pub version: &'static str,
    pub build_date: &'static str,
    pub commit_hash_short: Option<&'static str>,
    pub is_dirty: bool,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc_version: &'static str,
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionInfo {
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: built_info::PKG_VERSION,
            build_date: built_info::BUILT_TIME_UTC,
            commit_hash_short: built_info::GIT_COMMIT_HASH_SHORT,
            is_dirty: built_info::GIT_DIRTY.unwrap_or(false),
            target: built_info::TARGET,
            profile: built_info::PROFILE,
            rustc_version: built_info::RUSTC_VERSION,
        }
    }

    #[must_use]
    pub fn is_development_build(&self) -> bool {
        self.is_dirty || self.profile == "debug"
    }

    /// `v0.1.0`, or `v0.1.0-dev+<hash>` for development builds
    #[must_use]
    pub fn short_version(&self) -> String {
        if !self.is_development_build() {
            return format!("v{}", self.version);
        }
        match (self.commit_hash_short, self.is_dirty) {
            (Some(hash), true) => format!("v{}-dev+dirty.{hash}", self.version),
            (Some(hash), false) => format!("v{}-dev+{hash}", self.version),
            (None, true) => format!("v{}-dev+dirty", self.version),
            (None, false) => format!("v{}-dev", self.version),
        }
    }

    /// Usage text printed when run from a terminal without numbers
    #[must_use]
    pub fn banner(&self) -> String {
        format!(
            "hexhelp {} - {}\n\
             Run with '--gui' switch for the interactive interface\n\
             or with numbers to display in console\n\
             Enter hex-numbers with 0x prefix\n",
            self.short_version(),
            self.build_date
        )
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "hexhelp\n\nVersion: {}", self.short_version())?;
        writeln!(f, "Built: {}", self.build_date)?;

        if self.is_development_build() {
            if let Some(hash) = self.commit_hash_short {
                writeln!(f, "Commit: {hash}")?;
            }
            if self.is_dirty {
                writeln!(f, "Working directory: dirty")?;
            }
            writeln!(f, "Profile: {}", self.profile)?;
            writeln!(f, "Target: {}", self.target)?;
            writeln!(f, "Rust: {}", self.rustc_version)?;
        }

        Ok(())
    }
}

#[must_use]
pub fn get_version_info() -> VersionInfo {
    VersionInfo::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release() -> VersionInfo {
        VersionInfo {
            version: "1.2.3",
            build_date: "Sun, 18 Oct 2026 10:00:00 +0000",
            commit_hash_short: Some("abc1234"),
            is_dirty: false,
            target: "x86_64-unknown-linux-gnu",
            profile: "release",
            rustc_version: "rustc 1.88.0",
        }
    }

    #[test]
    fn test_release_short_version() {
        assert_eq!(release().short_version(), "v1.2.3");
    }

    #[test]
    fn test_dev_short_version() {
        let info = VersionInfo {
            profile: "debug",
            ..release()
        };
        assert_eq!(info.short_version(), "v1.2.3-dev+abc1234");

        let info = VersionInfo {
            is_dirty: true,
            commit_hash_short: None,
            ..release()
        };
        assert_eq!(info.short_version(), "v1.2.3-dev+dirty");
    }

    #[test]
    fn test_banner_has_version_and_date() {
        let banner = release().banner();
        let first = banner.lines().next().unwrap();
        assert_eq!(first, "hexhelp v1.2.3 - Sun, 18 Oct 2026 10:00:00 +0000");
        assert!(banner.contains("0x prefix"));
    }

    #[test]
    fn test_display_hides_details_for_release() {
        let text = release().to_string();
        assert!(text.contains("Version: v1.2.3"));
        assert!(!text.contains("Profile:"));
    }
}
