//! Curated installation profiles.
//!
//! A profile is a named bundle selecting units across categories for one-shot
//! installation. Resolution validates every explicitly named unit against the
//! catalog (an unknown name is a configuration error) and intersects explicit
//! lists with what the current platform supports.

use crate::error::{ArmoryError, Result};
use crate::platform::DistroFamily;

use super::tools::{ClonedTool, DockerTool, Download, GoTool};
use super::Catalog;

/// Per-category selection inside a profile.
#[derive(Debug, Clone, Copy)]
pub enum Selection {
    /// Category not included in this profile.
    None,
    /// Every unit in the category (platform-filtered at resolution time).
    All,
    /// An explicit subset of unit names.
    Only(&'static [&'static str]),
}

/// A named installation profile.
#[derive(Debug)]
pub struct Profile {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub apt: Selection,
    pub go: Selection,
    pub opt: Selection,
    pub python: Selection,
    pub docker: Selection,
    pub downloads: Selection,
}

/// The built-in profiles, in menu order.
pub const PROFILES: &[Profile] = &[
    Profile {
        id: "bug-bounty",
        name: "Bug Bounty Hunter",
        description: "Tools for bug bounty hunting and web application testing",
        apt: Selection::Only(&["nmap", "masscan", "nikto", "sqlmap", "burpsuite", "git"]),
        go: Selection::Only(&[
            "nuclei",
            "httpx",
            "subfinder",
            "katana",
            "amass",
            "assetfinder",
            "httprobe",
        ]),
        opt: Selection::Only(&["Sublist3r", "wafw00f", "XSStrike"]),
        python: Selection::Only(&["wfuzz", "arjun", "requests"]),
        docker: Selection::None,
        downloads: Selection::All,
    },
    Profile {
        id: "ctf",
        name: "CTF Player",
        description: "Tools for Capture The Flag competitions",
        apt: Selection::Only(&["nmap", "burpsuite", "sqlmap", "git", "wireshark"]),
        go: Selection::None,
        opt: Selection::None,
        python: Selection::Only(&["wfuzz", "scrapy", "requests"]),
        docker: Selection::None,
        downloads: Selection::All,
    },
    Profile {
        id: "web-app",
        name: "Web Application Testing",
        description: "Focused on web application security testing",
        apt: Selection::Only(&["nmap", "nikto", "sqlmap", "burpsuite"]),
        go: Selection::Only(&["nuclei", "httpx", "katana"]),
        opt: Selection::Only(&["wafw00f", "XSStrike", "Striker"]),
        python: Selection::Only(&["wfuzz", "arjun", "scrapy"]),
        docker: Selection::None,
        downloads: Selection::None,
    },
    Profile {
        id: "network",
        name: "Network Pentesting",
        description: "Network reconnaissance and scanning tools",
        apt: Selection::Only(&["nmap", "masscan", "wireshark"]),
        go: Selection::Only(&["naabu", "amass", "assetfinder", "httprobe"]),
        opt: Selection::None,
        python: Selection::None,
        docker: Selection::Only(&["rustscan"]),
        downloads: Selection::None,
    },
    Profile {
        id: "full-pentest",
        name: "Full Pentesting Arsenal",
        description: "Complete toolset for comprehensive penetration testing",
        apt: Selection::All,
        go: Selection::All,
        opt: Selection::All,
        python: Selection::All,
        docker: Selection::All,
        downloads: Selection::All,
    },
];

/// A profile resolved against the catalog for a concrete platform.
///
/// Holds the exact unit sets each dispatcher operation will consider;
/// empty vectors mean the category is skipped.
#[derive(Debug, Default)]
pub struct ResolvedProfile {
    pub apt: Vec<&'static str>,
    pub go: Vec<&'static GoTool>,
    pub opt: Vec<&'static ClonedTool>,
    pub python: Vec<&'static str>,
    pub docker: Vec<&'static DockerTool>,
    pub downloads: Vec<&'static Download>,
}

impl Catalog {
    /// All built-in profiles, in menu order.
    pub fn profiles(&self) -> &'static [Profile] {
        PROFILES
    }

    /// Look up a profile by id.
    pub fn profile(&self, id: &str) -> Option<&'static Profile> {
        PROFILES.iter().find(|p| p.id == id)
    }

    /// Resolve a profile into concrete, platform-filtered unit sets.
    ///
    /// Fails with [`ArmoryError::UnknownProfile`] for an unknown id and with
    /// [`ArmoryError::UnknownTool`] when the profile names a unit the catalog
    /// does not have. No external invocation happens before resolution.
    pub fn resolve_profile(&self, id: &str, family: DistroFamily) -> Result<ResolvedProfile> {
        let profile = self.profile(id).ok_or_else(|| ArmoryError::UnknownProfile {
            name: id.to_string(),
        })?;

        let apt = resolve_names(
            profile.id,
            "apt",
            profile.apt,
            self.apt_packages_all(),
            self.apt_packages(family),
        )?;

        let go = resolve_units(
            profile.id,
            "go",
            profile.go,
            self.go_tools().iter().collect(),
            |t| t.name,
            false,
        )?;

        // A profile naming a Kali-only tool off Kali gets it filtered, not
        // rejected; names absent from the unfiltered category are still a
        // configuration error.
        if let Selection::Only(names) = profile.opt {
            for name in names {
                if !self.cloned_tools_all().iter().any(|t| t.name == *name) {
                    return Err(ArmoryError::UnknownTool {
                        profile: profile.id.to_string(),
                        category: "opt".to_string(),
                        name: name.to_string(),
                    });
                }
            }
        }
        let opt = resolve_units(
            profile.id,
            "opt",
            profile.opt,
            self.cloned_tools(family),
            |t| t.name,
            true,
        )?;

        let python = resolve_names(
            profile.id,
            "python",
            profile.python,
            self.python_packages(),
            self.python_packages(),
        )?;

        let docker = resolve_units(
            profile.id,
            "docker",
            profile.docker,
            self.docker_tools().iter().collect(),
            |t| t.name,
            false,
        )?;

        let downloads = match profile.downloads {
            Selection::None => Vec::new(),
            Selection::All => self.downloads().iter().collect(),
            Selection::Only(names) => {
                let mut out = Vec::new();
                for name in names {
                    let item = self
                        .downloads()
                        .iter()
                        .find(|d| d.filename == *name)
                        .ok_or_else(|| ArmoryError::UnknownTool {
                            profile: profile.id.to_string(),
                            category: "downloads".to_string(),
                            name: name.to_string(),
                        })?;
                    out.push(item);
                }
                out
            }
        };

        Ok(ResolvedProfile {
            apt,
            go,
            opt,
            python,
            docker,
            downloads,
        })
    }
}

/// Resolve a selection over a plain name list.
///
/// `all_names` is the maximal list (for validating references),
/// `supported` the platform-filtered one (for the actual result).
fn resolve_names(
    profile: &str,
    category: &str,
    selection: Selection,
    all_names: &'static [&'static str],
    supported: &'static [&'static str],
) -> Result<Vec<&'static str>> {
    match selection {
        Selection::None => Ok(Vec::new()),
        Selection::All => Ok(supported.to_vec()),
        Selection::Only(names) => {
            let mut out = Vec::new();
            for name in names {
                if !all_names.contains(name) {
                    return Err(ArmoryError::UnknownTool {
                        profile: profile.to_string(),
                        category: category.to_string(),
                        name: name.to_string(),
                    });
                }
                if let Some(canonical) = supported.iter().find(|n| *n == name) {
                    out.push(*canonical);
                }
            }
            Ok(out)
        }
    }
}

/// Resolve a selection over a structured unit list.
///
/// With `lenient_missing`, names absent from `supported` are dropped
/// (platform intersection, validated elsewhere); otherwise they are a
/// configuration error.
fn resolve_units<T>(
    profile: &str,
    category: &str,
    selection: Selection,
    supported: Vec<&'static T>,
    name_of: impl Fn(&T) -> &'static str,
    lenient_missing: bool,
) -> Result<Vec<&'static T>> {
    match selection {
        Selection::None => Ok(Vec::new()),
        Selection::All => Ok(supported),
        Selection::Only(names) => {
            let mut out = Vec::new();
            for name in names {
                match supported.iter().find(|u| name_of(u) == *name) {
                    Some(unit) => out.push(*unit),
                    None if lenient_missing => {}
                    None => {
                        return Err(ArmoryError::UnknownTool {
                            profile: profile.to_string(),
                            category: category.to_string(),
                            name: name.to_string(),
                        })
                    }
                }
            }
            Ok(out)
        }
    }
}
