//! End-to-end installer runs against recording hooks.
//!
//! These tests drive whole profiles through the public API with the
//! execution hooks replaced by recorders, so no external process runs
//! and every issued command line can be asserted on.

use std::sync::Mutex;

use armory::catalog::Catalog;
use armory::installer::{ExecHooks, InstallPaths, Installer};
use armory::journal::Journal;
use armory::platform::DistroFamily;
use armory::shell::Invocation;
use armory::ui::MockUI;
use tempfile::TempDir;

struct Recorder {
    calls: Mutex<Vec<String>>,
    present: Vec<&'static str>,
}

impl Recorder {
    fn new(present: &[&'static str]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            present: present.to_vec(),
        }
    }

    fn run(&self, invocation: &Invocation) -> bool {
        self.calls.lock().unwrap().push(invocation.command_line());
        true
    }

    fn exists(&self, name: &str) -> bool {
        self.present.contains(&name)
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

fn paths(temp: &TempDir) -> InstallPaths {
    InstallPaths {
        opt_root: temp.path().join("opt"),
        scripts_dir: temp.path().join("scripts"),
        wordlists_dir: temp.path().join("wordlists"),
        shell_startup_files: Vec::new(),
    }
}

#[test]
fn network_profile_issues_expected_commands() {
    let catalog = Catalog::builtin();
    let journal = Journal::disabled();
    let temp = TempDir::new().unwrap();
    let recorder = Recorder::new(&["go", "docker", "nmap"]);
    let hooks = ExecHooks {
        run: &|inv| recorder.run(inv),
        command_exists: &|name| recorder.exists(name),
    };
    let installer = Installer::new(&catalog, DistroFamily::Kali, paths(&temp), &journal, hooks);
    let mut ui = MockUI::new();

    let report = installer.install_profile(&mut ui, "network").unwrap();

    // apt: nmap probed present, masscan and wireshark batched.
    // go: four tools. docker: one image. No opt/python/downloads.
    assert_eq!(report.already_present, 1);
    assert_eq!(report.attempted, 2 + 4 + 1);
    assert_eq!(report.succeeded, 7);
    assert_eq!(report.failed, 0);
    assert!(report.fully_succeeded());

    let calls = recorder.calls();
    assert!(calls.contains(&"apt update".to_string()));
    assert!(calls.contains(&"apt install -y masscan wireshark".to_string()));
    assert_eq!(
        calls.iter().filter(|c| c.starts_with("go install -v ")).count(),
        4
    );
    assert!(calls.contains(&"docker pull rustscan/rustscan:2.0.1".to_string()));
    // No wget, git, or pip3 for this profile.
    assert!(!calls.iter().any(|c| c.starts_with("wget")
        || c.starts_with("git")
        || c.starts_with("pip3")));
}

#[test]
fn web_app_profile_clones_in_declared_order() {
    let catalog = Catalog::builtin();
    let journal = Journal::disabled();
    let temp = TempDir::new().unwrap();
    let recorder = Recorder::new(&["go"]);
    let hooks = ExecHooks {
        run: &|inv| recorder.run(inv),
        command_exists: &|name| recorder.exists(name),
    };
    let installer = Installer::new(&catalog, DistroFamily::Kali, paths(&temp), &journal, hooks);
    let mut ui = MockUI::new();

    installer.install_profile(&mut ui, "web-app").unwrap();

    let clones: Vec<String> = recorder
        .calls()
        .into_iter()
        .filter(|c| c.starts_with("git clone"))
        .collect();
    // Profile declares wafw00f, XSStrike, Striker in that order.
    assert_eq!(clones.len(), 3);
    assert!(clones[0].contains("wafw00f"));
    assert!(clones[1].contains("XSStrike"));
    assert!(clones[2].contains("Striker"));
}

#[test]
fn existing_download_counts_as_already_present() {
    let catalog = Catalog::builtin();
    let journal = Journal::disabled();
    let temp = TempDir::new().unwrap();
    let paths = paths(&temp);
    std::fs::create_dir_all(&paths.scripts_dir).unwrap();
    std::fs::write(paths.scripts_dir.join("linpeas.sh"), "#!/bin/sh\n").unwrap();

    let recorder = Recorder::new(&[]);
    let hooks = ExecHooks {
        run: &|inv| recorder.run(inv),
        command_exists: &|name| recorder.exists(name),
    };
    let installer = Installer::new(&catalog, DistroFamily::Kali, paths, &journal, hooks);
    let mut ui = MockUI::new();

    let subset = vec![
        "linpeas.sh".to_string(),
        "LinEnum.sh".to_string(),
        "rockyou.txt".to_string(),
    ];
    let report = installer.download_files(&mut ui, Some(&subset));

    assert_eq!(report.already_present, 1);
    assert_eq!(report.attempted, 2);
    assert_eq!(report.succeeded, 2);
    assert!(report.fully_succeeded());
    // The present file must not be fetched again.
    assert!(!recorder.calls().iter().any(|c| c.contains("linpeas.sh")));
}

#[test]
fn missing_go_toolchain_fails_profile_go_units_only() {
    let catalog = Catalog::builtin();
    let journal = Journal::disabled();
    let temp = TempDir::new().unwrap();
    let recorder = Recorder::new(&[]);
    let hooks = ExecHooks {
        run: &|inv| recorder.run(inv),
        command_exists: &|name| recorder.exists(name),
    };
    let installer = Installer::new(&catalog, DistroFamily::Kali, paths(&temp), &journal, hooks);
    let mut ui = MockUI::new();

    let report = installer.install_profile(&mut ui, "bug-bounty").unwrap();

    assert!(!report.fully_succeeded());
    // The seven go tools fail as units; apt, opt, python, downloads proceed.
    assert_eq!(report.failed, 7);
    assert!(report.succeeded > 0);
    assert!(!recorder.calls().iter().any(|c| c.starts_with("go install")));
    assert!(recorder.calls().iter().any(|c| c.starts_with("git clone")));
}

#[test]
fn unknown_profile_is_an_error_before_any_invocation() {
    let catalog = Catalog::builtin();
    let journal = Journal::disabled();
    let temp = TempDir::new().unwrap();
    let recorder = Recorder::new(&["go", "docker"]);
    let hooks = ExecHooks {
        run: &|inv| recorder.run(inv),
        command_exists: &|name| recorder.exists(name),
    };
    let installer = Installer::new(&catalog, DistroFamily::Kali, paths(&temp), &journal, hooks);
    let mut ui = MockUI::new();

    let err = installer.install_profile(&mut ui, "red-team").unwrap_err();
    assert!(err.to_string().contains("red-team"));
    assert!(recorder.calls().is_empty());
}

#[test]
fn session_journal_records_profile_run() {
    let catalog = Catalog::builtin();
    let temp = TempDir::new().unwrap();
    let log_path = temp.path().join("session.log");
    let journal = Journal::open(&log_path).unwrap();

    let recorder = Recorder::new(&["go", "docker"]);
    let hooks = ExecHooks {
        run: &|inv| recorder.run(inv),
        command_exists: &|name| recorder.exists(name),
    };
    let installer = Installer::new(&catalog, DistroFamily::Kali, paths(&temp), &journal, hooks);
    let mut ui = MockUI::new();

    installer.install_profile(&mut ui, "ctf").unwrap();

    let contents = std::fs::read_to_string(&log_path).unwrap();
    assert!(contents.contains("[INFO]"));
    assert!(contents.contains("Installing profile: ctf"));
    assert!(contents.contains("finished"));
}
