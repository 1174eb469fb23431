//! Integration tests for the public catalog API.

use armory::catalog::{probe_name, Catalog, Category, Selection};
use armory::platform::DistroFamily;

#[test]
fn profile_ids_are_unique() {
    let catalog = Catalog::builtin();
    let mut ids: Vec<_> = catalog.profiles().iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), catalog.profiles().len());
}

#[test]
fn every_profile_has_name_and_description() {
    let catalog = Catalog::builtin();
    for profile in catalog.profiles() {
        assert!(!profile.name.is_empty(), "profile {} has no name", profile.id);
        assert!(
            !profile.description.is_empty(),
            "profile {} has no description",
            profile.id
        );
    }
}

#[test]
fn full_pentest_covers_every_category() {
    let catalog = Catalog::builtin();
    let resolved = catalog
        .resolve_profile("full-pentest", DistroFamily::Kali)
        .unwrap();
    assert!(!resolved.apt.is_empty());
    assert!(!resolved.go.is_empty());
    assert!(!resolved.opt.is_empty());
    assert!(!resolved.python.is_empty());
    assert!(!resolved.docker.is_empty());
    assert!(!resolved.downloads.is_empty());
}

#[test]
fn profile_resolution_is_deterministic() {
    let catalog = Catalog::builtin();
    let a = catalog
        .resolve_profile("bug-bounty", DistroFamily::Kali)
        .unwrap();
    let b = catalog
        .resolve_profile("bug-bounty", DistroFamily::Kali)
        .unwrap();
    assert_eq!(a.apt, b.apt);
    let a_go: Vec<_> = a.go.iter().map(|t| t.name).collect();
    let b_go: Vec<_> = b.go.iter().map(|t| t.name).collect();
    assert_eq!(a_go, b_go);
}

#[test]
fn probe_names_are_invocable_commands() {
    let catalog = Catalog::builtin();
    for package in catalog.apt_packages_all() {
        let probe = probe_name(package);
        assert!(!probe.is_empty());
        assert!(!probe.contains('-'), "probe for {} keeps a hyphen", package);
        assert!(!probe.contains(".io"), "probe for {} keeps .io", package);
    }
}

#[test]
fn go_modules_are_pinned_references() {
    let catalog = Catalog::builtin();
    for tool in catalog.go_tools() {
        assert!(
            tool.module.contains('@'),
            "module for {} is unpinned",
            tool.name
        );
    }
}

#[test]
fn download_urls_are_https() {
    let catalog = Catalog::builtin();
    for item in catalog.downloads() {
        assert!(
            item.url.starts_with("https://"),
            "{} is not fetched over https",
            item.filename
        );
    }
}

#[test]
fn explicit_profile_selections_name_real_units() {
    let catalog = Catalog::builtin();
    for profile in catalog.profiles() {
        if let Selection::Only(names) = profile.go {
            for name in names {
                assert!(
                    catalog.go_tools().iter().any(|t| t.name == *name),
                    "profile {} references unknown go tool {}",
                    profile.id,
                    name
                );
            }
        }
        if let Selection::Only(names) = profile.opt {
            for name in names {
                assert!(
                    catalog.cloned_tools_all().iter().any(|t| t.name == *name),
                    "profile {} references unknown opt tool {}",
                    profile.id,
                    name
                );
            }
        }
    }
}

#[test]
fn category_menu_order_is_stable() {
    assert_eq!(Category::ALL[0], Category::Apt);
    assert_eq!(Category::ALL.len(), 6);
    let mut ids: Vec<_> = Category::ALL.iter().map(|c| c.id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 6);
}
