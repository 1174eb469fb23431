//! The installation dispatcher.
//!
//! Resolves a category or profile selection against the catalog, probes
//! each unit's presence, issues the external invocations, and tallies a
//! typed [`InstallReport`]. One public operation per category mechanism;
//! every operation emits per-unit status lines to the UI and the session
//! journal and keeps going past single-unit failures. Nothing is retried
//! and partial work is never rolled back.
//!
//! External execution goes through [`ExecHooks`], a pair of closures for
//! running an invocation and probing PATH. Production uses the live hooks;
//! tests substitute recorders so no external process ever runs.

pub mod aliases;
pub mod pool;
pub mod report;

pub use report::{InstallReport, UnitOutcome};

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::catalog::{probe_name, Catalog, Category};
use crate::error::Result;
use crate::journal::Journal;
use crate::platform::{self, DistroFamily};
use crate::shell::{self, Invocation};
use crate::ui::UserInterface;

/// Mockable execution dependencies for the dispatcher.
pub struct ExecHooks<'a> {
    /// Run an external invocation to completion, returning true on exit 0.
    pub run: &'a (dyn Fn(&Invocation) -> bool + Sync),
    /// Check whether a command is invocable from PATH.
    pub command_exists: &'a (dyn Fn(&str) -> bool + Sync),
}

impl ExecHooks<'static> {
    /// Hooks that really execute commands, with the sudo prefix applied
    /// for elevated invocations when the process is not already root.
    pub fn live() -> Self {
        Self {
            run: &|invocation| shell::run(invocation, platform::is_elevated()),
            command_exists: &|name| shell::command_exists(name),
        }
    }

    /// Hooks that print every invocation instead of executing it.
    /// Presence probes stay real so the preview matches a live run.
    pub fn dry_run() -> Self {
        Self {
            run: &|invocation| {
                println!("[dry-run] {}", invocation);
                true
            },
            command_exists: &|name| shell::command_exists(name),
        }
    }
}

/// Fixed filesystem targets for install actions.
///
/// Always fully qualified; the dispatcher never depends on the ambient
/// working directory.
#[derive(Debug, Clone)]
pub struct InstallPaths {
    /// Root for cloned tools (`/opt` in production).
    pub opt_root: PathBuf,
    /// Destination for downloaded scripts.
    pub scripts_dir: PathBuf,
    /// Destination for downloaded wordlists.
    pub wordlists_dir: PathBuf,
    /// Shell startup files that receive alias appends.
    pub shell_startup_files: Vec<PathBuf>,
}

impl InstallPaths {
    /// Production layout relative to the invoking user's real home.
    pub fn for_home(home: &Path) -> Self {
        Self {
            opt_root: PathBuf::from("/opt"),
            scripts_dir: home.join("scripts").join("payloads"),
            wordlists_dir: home.join("wordlists"),
            shell_startup_files: platform::shell_startup_files(home),
        }
    }
}

/// The catalog-driven installation dispatcher.
pub struct Installer<'a> {
    catalog: &'a Catalog,
    family: DistroFamily,
    paths: InstallPaths,
    journal: &'a Journal,
    hooks: ExecHooks<'a>,
    stop: Arc<AtomicBool>,
    dry_run: bool,
}

impl<'a> Installer<'a> {
    pub fn new(
        catalog: &'a Catalog,
        family: DistroFamily,
        paths: InstallPaths,
        journal: &'a Journal,
        hooks: ExecHooks<'a>,
    ) -> Self {
        Self {
            catalog,
            family,
            paths,
            journal,
            hooks,
            stop: Arc::new(AtomicBool::new(false)),
            dry_run: false,
        }
    }

    /// Share an interrupt flag (set from the Ctrl-C handler). Once set,
    /// no new invocations are issued; in-flight children finish.
    pub fn with_stop_flag(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = stop;
        self
    }

    /// Suppress direct filesystem side effects (directory creation and
    /// alias appends). Invocations are already previewed by the dry-run
    /// hooks; this covers the mutations the dispatcher performs itself.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Whether the interrupt flag has been raised. The menu loop consults
    /// this to end the session instead of prompting again.
    pub fn interrupted(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }

    fn note_interrupt(&self, ui: &mut dyn UserInterface) {
        ui.warning("Interrupted; no further commands will be issued");
        self.journal.warn("Installation interrupted by user");
    }

    fn ensure_dir(&self, dir: &Path) -> std::io::Result<()> {
        if self.dry_run {
            return Ok(());
        }
        std::fs::create_dir_all(dir)
    }

    /// Run one invocation through the hooks, echoing it in verbose mode.
    fn invoke(&self, ui: &mut dyn UserInterface, invocation: &Invocation) -> bool {
        if ui.output_mode().shows_commands() {
            ui.message(&format!("$ {}", invocation));
        }
        self.journal.debug(&format!("Running: {}", invocation));
        (self.hooks.run)(invocation)
    }

    /// Install APT packages in one batched invocation.
    ///
    /// Already-present packages (probed by their normalized command name)
    /// are excluded from the batch. A non-zero batch exit marks every
    /// batched package failed; which one broke the batch is not attributed.
    pub fn install_apt(&self, ui: &mut dyn UserInterface, subset: Option<&[String]>) -> InstallReport {
        let all = self.catalog.apt_packages(self.family);
        let tools: Vec<&'static str> = match subset {
            None => all.to_vec(),
            Some(names) => all
                .iter()
                .copied()
                .filter(|t| names.iter().any(|n| n.as_str() == *t))
                .collect(),
        };

        let mut report = InstallReport::new();
        if tools.is_empty() {
            ui.warning("No APT tools to install for this distribution");
            return report;
        }
        if self.interrupted() {
            self.note_interrupt(ui);
            return report;
        }

        ui.message(&format!("Installing {} APT tools...", tools.len()));
        self.journal
            .info(&format!("Installing APT tools: {}", tools.join(", ")));

        ui.message("Updating APT cache...");
        if !self.invoke(ui, &Invocation::elevated("apt", ["update"])) {
            ui.error("Failed to update APT cache");
            self.journal.error("APT update failed");
            for _ in &tools {
                report.record(&UnitOutcome::Failed("APT cache update failed".into()));
            }
            return report;
        }

        let mut to_install = Vec::new();
        for tool in &tools {
            if (self.hooks.command_exists)(&probe_name(tool)) {
                ui.success(&format!("{} already installed", tool));
                self.journal.debug(&format!("{} already installed", tool));
                report.record(&UnitOutcome::AlreadyPresent);
            } else {
                to_install.push(*tool);
            }
        }

        if to_install.is_empty() {
            ui.success("All APT tools already installed");
            return report;
        }
        if self.interrupted() {
            self.note_interrupt(ui);
            return report;
        }

        ui.message(&format!("Installing {} new tools...", to_install.len()));
        let mut args = vec!["install", "-y"];
        args.extend(to_install.iter().copied());

        if self.invoke(ui, &Invocation::elevated("apt", args)) {
            for tool in &to_install {
                report.record(&UnitOutcome::Installed);
                ui.success(&format!("{} installed", tool));
            }
            self.journal.info(&format!(
                "APT installation complete: {}",
                to_install.join(", ")
            ));
        } else {
            for _ in &to_install {
                report.record(&UnitOutcome::Failed("batch APT install failed".into()));
            }
            ui.error("Failed to install some APT tools");
            self.journal.error("APT installation failed");
        }

        report
    }

    /// Clone tools under the opt root and run their post-install steps.
    ///
    /// Each unit is independent: an existing target directory counts as
    /// already present, a failed clone or post-install step fails only
    /// that unit, and its remaining steps are skipped.
    pub fn install_cloned(
        &self,
        ui: &mut dyn UserInterface,
        subset: Option<&[String]>,
    ) -> InstallReport {
        let all = self.catalog.cloned_tools(self.family);
        let tools: Vec<_> = match subset {
            None => all,
            Some(names) => all
                .into_iter()
                .filter(|t| names.iter().any(|n| n.as_str() == t.name))
                .collect(),
        };

        let mut report = InstallReport::new();
        if tools.is_empty() {
            ui.warning("No /opt tools to install for this distribution");
            return report;
        }

        ui.message(&format!("Installing {} /opt tools...", tools.len()));

        for tool in tools {
            if self.interrupted() {
                self.note_interrupt(ui);
                break;
            }

            let target = self.paths.opt_root.join(tool.name);
            if target.is_dir() {
                ui.success(&format!("{} already installed", tool.name));
                self.journal
                    .debug(&format!("{} already installed at {}", tool.name, target.display()));
                report.record(&UnitOutcome::AlreadyPresent);
                continue;
            }

            ui.message(&format!("Installing {}...", tool.name));
            self.journal.info(&format!("Installing /opt tool: {}", tool.name));

            let target_str = target.display().to_string();
            let clone = Invocation::elevated("git", ["clone", tool.url, target_str.as_str()]);
            if !self.invoke(ui, &clone) {
                ui.error(&format!("Failed to install {}", tool.name));
                self.journal.error(&format!("Clone failed for {}", tool.name));
                report.record(&UnitOutcome::Failed("clone failed".into()));
                continue;
            }

            let mut outcome = UnitOutcome::Installed;
            for step in tool.post_install {
                if !self.invoke(ui, &Invocation::shell(step)) {
                    self.journal
                        .error(&format!("Post-install step failed for {}: {}", tool.name, step));
                    outcome = UnitOutcome::Failed(format!("post-install step failed: {}", step));
                    break;
                }
            }

            match &outcome {
                UnitOutcome::Installed => {
                    ui.success(&format!("{} installed", tool.name));
                    self.journal
                        .info(&format!("{} installation complete", tool.name));
                }
                UnitOutcome::Failed(reason) => {
                    ui.error(&format!("Failed to install {}: {}", tool.name, reason));
                }
                UnitOutcome::AlreadyPresent => unreachable!(),
            }
            report.record(&outcome);
        }

        report
    }

    /// Install Python packages in one batched pip3 invocation.
    pub fn install_python(
        &self,
        ui: &mut dyn UserInterface,
        subset: Option<&[String]>,
    ) -> InstallReport {
        let all = self.catalog.python_packages();
        let tools: Vec<&'static str> = match subset {
            None => all.to_vec(),
            Some(names) => all
                .iter()
                .copied()
                .filter(|t| names.iter().any(|n| n.as_str() == *t))
                .collect(),
        };

        let mut report = InstallReport::new();
        if tools.is_empty() {
            ui.warning("No Python tools to install");
            return report;
        }
        if self.interrupted() {
            self.note_interrupt(ui);
            return report;
        }

        ui.message(&format!("Installing {} Python tools...", tools.len()));
        self.journal
            .info(&format!("Installing Python tools: {}", tools.join(", ")));

        let mut args = vec!["install", "--upgrade"];
        args.extend(tools.iter().copied());

        if self.invoke(ui, &Invocation::new("pip3", args)) {
            for tool in &tools {
                report.record(&UnitOutcome::Installed);
                ui.success(&format!("{} installed", tool));
            }
            self.journal.info("Python tools installation complete");
        } else {
            for _ in &tools {
                report.record(&UnitOutcome::Failed("batch pip3 install failed".into()));
            }
            ui.error("Failed to install Python tools");
            self.journal.error("Python tools installation failed");
        }

        report
    }

    /// Install Go tools from source, each independently, through the
    /// bounded worker pool. Completion order is unspecified; the tally
    /// is accumulated as results arrive.
    pub fn install_go(&self, ui: &mut dyn UserInterface, subset: Option<&[String]>) -> InstallReport {
        let all = self.catalog.go_tools();
        let tools: Vec<_> = match subset {
            None => all.iter().collect(),
            Some(names) => all
                .iter()
                .filter(|t| names.iter().any(|n| n.as_str() == t.name))
                .collect(),
        };

        let mut report = InstallReport::new();
        if tools.is_empty() {
            ui.warning("No Go tools to install");
            return report;
        }

        if !(self.hooks.command_exists)("go") {
            ui.error("Go is not installed! Install golang-go first.");
            self.journal.error("Go toolchain not found; skipping Go tools");
            for _ in &tools {
                report.record(&UnitOutcome::Failed("go toolchain not found".into()));
            }
            return report;
        }
        if self.interrupted() {
            self.note_interrupt(ui);
            return report;
        }

        ui.message(&format!("Installing {} Go tools...", tools.len()));
        self.journal.info(&format!(
            "Installing Go tools: {}",
            tools.iter().map(|t| t.name).collect::<Vec<_>>().join(", ")
        ));

        let job = |tool: &&crate::catalog::GoTool| {
            let invocation = Invocation::new("go", ["install", "-v", tool.module]);
            self.journal.debug(&format!("Running: {}", invocation));
            (self.hooks.run)(&invocation)
        };

        pool::run_bounded(&tools, pool::DEFAULT_WORKERS, &self.stop, &job, |tool, ok| {
            if ok {
                ui.success(&format!("{} installed", tool.name));
                report.record(&UnitOutcome::Installed);
            } else {
                ui.error(&format!("{} failed", tool.name));
                self.journal.error(&format!("Failed to install {}", tool.name));
                report.record(&UnitOutcome::Failed("go install failed".into()));
            }
        });

        if self.interrupted() {
            self.note_interrupt(ui);
        }

        report
    }

    /// Pull container images and append their shell aliases.
    pub fn install_docker(
        &self,
        ui: &mut dyn UserInterface,
        subset: Option<&[String]>,
    ) -> InstallReport {
        let all = self.catalog.docker_tools();
        let tools: Vec<_> = match subset {
            None => all.iter().collect(),
            Some(names) => all
                .iter()
                .filter(|t| names.iter().any(|n| n.as_str() == t.name))
                .collect(),
        };

        let mut report = InstallReport::new();
        if tools.is_empty() {
            ui.warning("No Docker tools to install");
            return report;
        }

        if !(self.hooks.command_exists)("docker") {
            ui.error("Docker is not installed! Install docker.io first.");
            self.journal
                .error("Docker engine not found; skipping Docker tools");
            for _ in &tools {
                report.record(&UnitOutcome::Failed("docker engine not found".into()));
            }
            return report;
        }

        ui.message(&format!("Installing {} Docker tools...", tools.len()));

        for tool in tools {
            if self.interrupted() {
                self.note_interrupt(ui);
                break;
            }

            self.journal.info(&format!("Pulling image {}", tool.image));
            if !self.invoke(ui, &Invocation::new("docker", ["pull", tool.image])) {
                ui.error(&format!("Failed to install {}", tool.name));
                self.journal
                    .error(&format!("Image pull failed for {}", tool.name));
                report.record(&UnitOutcome::Failed("image pull failed".into()));
                continue;
            }

            if let Some(alias) = tool.alias {
                for file in &self.paths.shell_startup_files {
                    if self.dry_run {
                        ui.message(&format!(
                            "[dry-run] would add {} alias to {}",
                            tool.name,
                            file.display()
                        ));
                        continue;
                    }
                    match aliases::append_alias(file, tool.name, alias) {
                        Ok(true) => {
                            ui.message(&format!("Added {} alias to {}", tool.name, file.display()));
                            self.journal
                                .info(&format!("Added {} alias to {}", tool.name, file.display()));
                        }
                        Ok(false) => {}
                        Err(err) => {
                            ui.warning(&format!(
                                "Could not update {}: {}",
                                file.display(),
                                err
                            ));
                        }
                    }
                }
            }

            ui.success(&format!("{} installed", tool.name));
            report.record(&UnitOutcome::Installed);
        }

        report
    }

    /// Fetch flat downloads into the scripts and wordlist directories,
    /// skipping files that already exist.
    pub fn download_files(
        &self,
        ui: &mut dyn UserInterface,
        subset: Option<&[String]>,
    ) -> InstallReport {
        let all = self.catalog.downloads();
        let items: Vec<_> = match subset {
            None => all.iter().collect(),
            Some(names) => all
                .iter()
                .filter(|d| names.iter().any(|n| n.as_str() == d.filename))
                .collect(),
        };

        let mut report = InstallReport::new();
        if items.is_empty() {
            ui.warning("No downloads configured");
            return report;
        }

        ui.message(&format!("Downloading {} files...", items.len()));
        self.journal.info(&format!(
            "Downloading: {}",
            items.iter().map(|d| d.filename).collect::<Vec<_>>().join(", ")
        ));

        for item in items {
            if self.interrupted() {
                self.note_interrupt(ui);
                break;
            }

            let dir = match item.dest {
                crate::catalog::DownloadDest::Scripts => &self.paths.scripts_dir,
                crate::catalog::DownloadDest::Wordlists => &self.paths.wordlists_dir,
            };
            if let Err(err) = self.ensure_dir(dir) {
                ui.error(&format!("Cannot create {}: {}", dir.display(), err));
                report.record(&UnitOutcome::Failed(format!(
                    "cannot create {}",
                    dir.display()
                )));
                continue;
            }

            let target = dir.join(item.filename);
            if target.exists() {
                ui.success(&format!("{} already exists", item.filename));
                report.record(&UnitOutcome::AlreadyPresent);
                continue;
            }

            let target_str = target.display().to_string();
            let fetch = Invocation::new("wget", ["-O", target_str.as_str(), item.url]);
            if self.invoke(ui, &fetch) {
                ui.success(&format!("Downloaded {}", item.filename));
                self.journal.info(&format!("Downloaded {}", item.filename));
                report.record(&UnitOutcome::Installed);
            } else {
                ui.error(&format!("Failed to download {}", item.filename));
                self.journal
                    .error(&format!("Failed to download {}", item.filename));
                report.record(&UnitOutcome::Failed("download failed".into()));
            }
        }

        report
    }

    /// Dispatch one category. Adding a category extends this match at
    /// compile time.
    pub fn install_category(
        &self,
        ui: &mut dyn UserInterface,
        category: Category,
        subset: Option<&[String]>,
    ) -> InstallReport {
        match category {
            Category::Apt => self.install_apt(ui, subset),
            Category::Go => self.install_go(ui, subset),
            Category::Opt => self.install_cloned(ui, subset),
            Category::Python => self.install_python(ui, subset),
            Category::Docker => self.install_docker(ui, subset),
            Category::Downloads => self.download_files(ui, subset),
        }
    }

    /// Resolve and install a named profile.
    ///
    /// Resolution failures (unknown profile or tool) return before any
    /// external invocation.
    pub fn install_profile(&self, ui: &mut dyn UserInterface, id: &str) -> Result<InstallReport> {
        let resolved = self.catalog.resolve_profile(id, self.family)?;
        // resolve_profile succeeded, so the profile exists.
        let profile = self
            .catalog
            .profile(id)
            .ok_or_else(|| crate::error::ArmoryError::UnknownProfile { name: id.into() })?;

        ui.show_header(&format!("Installing Profile: {}", profile.name));
        ui.message(profile.description);
        self.journal.info(&format!("Installing profile: {}", profile.id));

        let mut report = InstallReport::new();

        if !resolved.apt.is_empty() {
            let names = to_owned_names(&resolved.apt);
            report.merge(&self.install_apt(ui, Some(&names)));
        }
        if !resolved.go.is_empty() {
            let names: Vec<String> = resolved.go.iter().map(|t| t.name.to_string()).collect();
            report.merge(&self.install_go(ui, Some(&names)));
        }
        if !resolved.opt.is_empty() {
            let names: Vec<String> = resolved.opt.iter().map(|t| t.name.to_string()).collect();
            report.merge(&self.install_cloned(ui, Some(&names)));
        }
        if !resolved.python.is_empty() {
            let names = to_owned_names(&resolved.python);
            report.merge(&self.install_python(ui, Some(&names)));
        }
        if !resolved.docker.is_empty() {
            let names: Vec<String> = resolved.docker.iter().map(|t| t.name.to_string()).collect();
            report.merge(&self.install_docker(ui, Some(&names)));
        }
        if !resolved.downloads.is_empty() {
            let names: Vec<String> = resolved
                .downloads
                .iter()
                .map(|d| d.filename.to_string())
                .collect();
            report.merge(&self.download_files(ui, Some(&names)));
        }

        self.journal.info(&format!(
            "Profile {} finished: {}",
            profile.id, report
        ));
        Ok(report)
    }

    /// Probe which catalog tools are currently present, per category.
    /// Only command-probeable categories are covered.
    pub fn installed_tools(&self) -> Vec<(Category, Vec<&'static str>)> {
        let apt = self
            .catalog
            .apt_packages_all()
            .iter()
            .copied()
            .filter(|t| (self.hooks.command_exists)(&probe_name(t)))
            .collect();
        let go = self
            .catalog
            .go_tools()
            .iter()
            .filter(|t| (self.hooks.command_exists)(t.name))
            .map(|t| t.name)
            .collect();
        let docker = self
            .catalog
            .docker_tools()
            .iter()
            .filter(|t| (self.hooks.command_exists)(t.name))
            .map(|t| t.name)
            .collect();

        vec![
            (Category::Apt, apt),
            (Category::Go, go),
            (Category::Docker, docker),
        ]
    }
}

fn to_owned_names(names: &[&'static str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}
