//! Platform detection: distro family, privilege level, user directories.

use std::path::{Path, PathBuf};

/// Recognized Linux distribution families.
///
/// The family picks the APT package tier and gates Kali-only tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistroFamily {
    Kali,
    Debian,
    Ubuntu,
    Unknown,
}

impl DistroFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            DistroFamily::Kali => "kali",
            DistroFamily::Debian => "debian",
            DistroFamily::Ubuntu => "ubuntu",
            DistroFamily::Unknown => "unknown",
        }
    }
}

/// The detected distribution: pretty name plus family.
#[derive(Debug, Clone)]
pub struct Distro {
    /// `PRETTY_NAME` from the OS release file, or "Unknown".
    pub name: String,
    pub family: DistroFamily,
}

/// Detect the running distribution from `/etc/os-release`.
pub fn detect_distro() -> Distro {
    match std::fs::read_to_string("/etc/os-release") {
        Ok(contents) => parse_os_release(&contents),
        Err(_) => Distro {
            name: "Unknown".to_string(),
            family: DistroFamily::Unknown,
        },
    }
}

/// Parse OS release contents into a [`Distro`].
///
/// Pure over the file contents so tests can feed fixtures.
pub fn parse_os_release(contents: &str) -> Distro {
    let name = contents
        .lines()
        .find_map(|line| line.strip_prefix("PRETTY_NAME="))
        .map(|v| v.trim_matches('"').to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    // Kali and Ubuntu both carry ID_LIKE=debian, so the plain debian
    // match has to come last.
    let lower = contents.to_lowercase();
    let family = if lower.contains("kali") {
        DistroFamily::Kali
    } else if lower.contains("ubuntu") {
        DistroFamily::Ubuntu
    } else if lower.contains("debian") {
        DistroFamily::Debian
    } else {
        DistroFamily::Unknown
    };

    Distro { name, family }
}

/// Check if running with elevated privileges.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(unix))]
    {
        false
    }
}

/// The invoking user's real home directory.
///
/// Under sudo, `$HOME` and `dirs::home_dir` point at root's home; downloads
/// and shell-profile appends must land in the original user's home instead,
/// resolved via `SUDO_USER`.
pub fn user_home() -> PathBuf {
    if is_elevated() {
        if let Ok(sudo_user) = std::env::var("SUDO_USER") {
            let candidate = PathBuf::from("/home").join(&sudo_user);
            if candidate.is_dir() {
                return candidate;
            }
        }
    }
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Shell startup files that receive alias appends, limited to those that
/// already exist (a file is never created just to hold an alias).
pub fn shell_startup_files(home: &Path) -> Vec<PathBuf> {
    [".zshrc", ".bashrc"]
        .iter()
        .map(|f| home.join(f))
        .filter(|p| p.exists())
        .collect()
}
