//! Static catalog of installable units, categories, and profiles.
//!
//! The catalog is pure data plus lookup: it exposes the ordered set of units
//! per category, a platform-aware filter, and named profiles resolving to
//! per-category selections. It never performs side effects; the
//! [`installer`](crate::installer) consumes it.

pub mod profiles;
pub mod tools;

pub use profiles::{Profile, ResolvedProfile, Selection};
pub use tools::{ClonedTool, DockerTool, Download, DownloadDest, GoTool};

use crate::platform::DistroFamily;

/// Installation mechanism. Every unit belongs to exactly one category.
///
/// A closed enum so that dispatch over categories is an exhaustive match;
/// adding a category is a compile-time change, not a runtime string compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// System packages installed in one batched `apt install`.
    Apt,
    /// Tools built from source via `go install`, one invocation per unit.
    Go,
    /// Repositories cloned under the opt root with ordered post-install steps.
    Opt,
    /// Packages installed in one batched `pip3 install`.
    Python,
    /// Container images pulled with `docker pull`, plus shell aliases.
    Docker,
    /// Flat file downloads into the scripts and wordlist directories.
    Downloads,
}

impl Category {
    /// All categories, in menu order.
    pub const ALL: [Category; 6] = [
        Category::Apt,
        Category::Go,
        Category::Opt,
        Category::Python,
        Category::Docker,
        Category::Downloads,
    ];

    /// Stable identifier used in profiles and logs.
    pub fn id(self) -> &'static str {
        match self {
            Category::Apt => "apt",
            Category::Go => "go",
            Category::Opt => "opt",
            Category::Python => "python",
            Category::Docker => "docker",
            Category::Downloads => "downloads",
        }
    }

    /// Human-readable title for menus.
    pub fn title(self) -> &'static str {
        match self {
            Category::Apt => "APT Tools",
            Category::Go => "Go Tools",
            Category::Opt => "/opt Tools",
            Category::Python => "Python Tools",
            Category::Docker => "Docker Tools",
            Category::Downloads => "Scripts & Wordlists",
        }
    }

    /// One-line description for menus.
    pub fn description(self) -> &'static str {
        match self {
            Category::Apt => "Tools installed via the apt package manager",
            Category::Go => "Security tools written in Go",
            Category::Opt => "Tools cloned to the /opt directory",
            Category::Python => "Tools installed via pip3",
            Category::Docker => "Containerized security tools",
            Category::Downloads => "Enumeration scripts and wordlists",
        }
    }
}

/// The built-in tool catalog.
///
/// Loaded once at process start (it is compiled in) and read-only for the
/// process lifetime.
#[derive(Debug, Default)]
pub struct Catalog(());

impl Catalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        Catalog(())
    }

    /// APT packages appropriate for the given distro family.
    pub fn apt_packages(&self, family: DistroFamily) -> &'static [&'static str] {
        match family {
            DistroFamily::Kali => tools::APT_TOOLS_KALI,
            DistroFamily::Debian | DistroFamily::Ubuntu => tools::APT_TOOLS_DEBIAN,
            DistroFamily::Unknown => tools::APT_TOOLS_MINIMAL,
        }
    }

    /// The maximal APT package list, used for probing what is installed
    /// and for validating profile references.
    pub fn apt_packages_all(&self) -> &'static [&'static str] {
        tools::APT_TOOLS_KALI
    }

    /// Cloned tools whose platform restriction is satisfied by `family`.
    pub fn cloned_tools(&self, family: DistroFamily) -> Vec<&'static ClonedTool> {
        tools::CLONED_TOOLS
            .iter()
            .filter(|t| !t.kali_only || family == DistroFamily::Kali)
            .collect()
    }

    /// All cloned tools, ignoring platform restrictions.
    pub fn cloned_tools_all(&self) -> &'static [ClonedTool] {
        tools::CLONED_TOOLS
    }

    /// Packages installed via pip3.
    pub fn python_packages(&self) -> &'static [&'static str] {
        tools::PYTHON_TOOLS
    }

    /// Tools installed via `go install`.
    pub fn go_tools(&self) -> &'static [GoTool] {
        tools::GO_TOOLS
    }

    /// Containerized tools.
    pub fn docker_tools(&self) -> &'static [DockerTool] {
        tools::DOCKER_TOOLS
    }

    /// Flat downloads.
    pub fn downloads(&self) -> &'static [Download] {
        tools::DOWNLOADS
    }
}

/// Normalize a declared APT package name to the command probed on PATH.
///
/// Package names and binary names diverge: `docker.io` installs `docker`,
/// and suffixed/hyphenated packages drop those in the binary. The probe must
/// use the invocable command, not the package name.
pub fn probe_name(package: &str) -> String {
    package.replace(".io", "").replace('-', "")
}
