//! The interactive menu loop.
//!
//! Presents the top-level menu (categories, profiles, installed-tool view),
//! walks selections through confirmation gates, and hands confirmed work to
//! the [`Installer`]. The menu reads catalog data only; it never issues
//! external invocations itself.

use crate::catalog::{Catalog, Category};
use crate::error::Result;
use crate::installer::{InstallReport, Installer};
use crate::platform::DistroFamily;
use crate::ui::UserInterface;

/// Entries appended to the main menu after the categories.
const MENU_PROFILES: &str = "Install a profile";
const MENU_INSTALLED: &str = "View installed tools";
const MENU_EXIT: &str = "Exit";

/// The interactive session: loops over the main menu until the user exits
/// or cancels a prompt.
pub struct Menu<'a> {
    catalog: &'a Catalog,
    family: DistroFamily,
    installer: &'a Installer<'a>,
}

impl<'a> Menu<'a> {
    pub fn new(catalog: &'a Catalog, family: DistroFamily, installer: &'a Installer<'a>) -> Self {
        Self {
            catalog,
            family,
            installer,
        }
    }

    /// Run the main menu loop. Returns when the user picks Exit, cancels
    /// the menu prompt, or interrupts the session.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<()> {
        loop {
            if self.installer.interrupted() {
                return Ok(());
            }

            ui.show_header("Armory");

            let mut items: Vec<String> = Category::ALL
                .iter()
                .map(|c| format!("{} - {}", c.title(), c.description()))
                .collect();
            items.push(MENU_PROFILES.to_string());
            items.push(MENU_INSTALLED.to_string());
            items.push(MENU_EXIT.to_string());

            let choice = match ui.select("What would you like to install?", &items)? {
                Some(index) => index,
                None => return Ok(()),
            };

            match choice {
                i if i < Category::ALL.len() => {
                    self.category_menu(ui, Category::ALL[i])?;
                }
                i if i == Category::ALL.len() => self.profile_menu(ui)?,
                i if i == Category::ALL.len() + 1 => self.show_installed(ui),
                _ => return Ok(()),
            }

            // An interrupt raised during an install ends the session;
            // prompting again after Ctrl-C would undo the graceful stop.
            if self.installer.interrupted() {
                return Ok(());
            }

            // One shot per loop in non-interactive mode, otherwise the
            // degraded select would spin forever.
            if !ui.is_interactive() {
                return Ok(());
            }
        }
    }

    /// Browse one category: pick a subset (or everything), confirm, install.
    fn category_menu(&self, ui: &mut dyn UserInterface, category: Category) -> Result<()> {
        let names = self.unit_names(category);
        if names.is_empty() {
            ui.warning(&format!(
                "No {} available for this distribution",
                category.title()
            ));
            return Ok(());
        }

        ui.show_header(category.title());
        ui.message(category.description());

        let picked = ui.multi_select(
            "Select tools to install (space to toggle, enter to accept)",
            &names,
        )?;
        if picked.is_empty() {
            ui.message("Nothing selected");
            return Ok(());
        }

        let selection: Vec<String> = picked.iter().map(|&i| names[i].clone()).collect();
        let question = format!("Install {} {}?", selection.len(), category.title());
        if !ui.confirm(&question, true)? {
            ui.message("Cancelled");
            return Ok(());
        }

        let report = self
            .installer
            .install_category(ui, category, Some(&selection));
        summarize(ui, &report);
        Ok(())
    }

    /// Pick a named profile, confirm, and install it whole.
    fn profile_menu(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let profiles = self.catalog.profiles();
        let items: Vec<String> = profiles
            .iter()
            .map(|p| format!("{} - {}", p.name, p.description))
            .collect();

        let choice = match ui.select("Select a profile", &items)? {
            Some(index) => index,
            None => return Ok(()),
        };
        let profile = &profiles[choice];

        let resolved = self.catalog.resolve_profile(profile.id, self.family)?;
        let total = resolved.apt.len()
            + resolved.go.len()
            + resolved.opt.len()
            + resolved.python.len()
            + resolved.docker.len()
            + resolved.downloads.len();

        let question = format!("Install the {} profile ({} tools)?", profile.name, total);
        if !ui.confirm(&question, true)? {
            ui.message("Cancelled");
            return Ok(());
        }

        let report = self.installer.install_profile(ui, profile.id)?;
        summarize(ui, &report);
        Ok(())
    }

    /// Probe and list which catalog tools are currently present.
    fn show_installed(&self, ui: &mut dyn UserInterface) {
        ui.show_header("Installed Tools");
        let mut spinner = ui.start_spinner("Probing installed tools");
        let installed = self.installer.installed_tools();
        spinner.finish_clear();
        for (category, tools) in installed {
            if tools.is_empty() {
                ui.message(&format!("{}: none detected", category.title()));
                continue;
            }
            ui.message(&format!("{}:", category.title()));
            for tool in tools {
                ui.success(&format!("  {}", tool));
            }
        }
    }

    /// Unit names for a category, platform-filtered, in declared order.
    fn unit_names(&self, category: Category) -> Vec<String> {
        match category {
            Category::Apt => self
                .catalog
                .apt_packages(self.family)
                .iter()
                .map(|n| n.to_string())
                .collect(),
            Category::Go => self
                .catalog
                .go_tools()
                .iter()
                .map(|t| t.name.to_string())
                .collect(),
            Category::Opt => self
                .catalog
                .cloned_tools(self.family)
                .iter()
                .map(|t| t.name.to_string())
                .collect(),
            Category::Python => self
                .catalog
                .python_packages()
                .iter()
                .map(|n| n.to_string())
                .collect(),
            Category::Docker => self
                .catalog
                .docker_tools()
                .iter()
                .map(|t| t.name.to_string())
                .collect(),
            Category::Downloads => self
                .catalog
                .downloads()
                .iter()
                .map(|d| d.filename.to_string())
                .collect(),
        }
    }
}

/// Print the end-of-run tally in the UI's status style.
pub fn summarize(ui: &mut dyn UserInterface, report: &InstallReport) {
    if report.is_empty() {
        ui.message("Nothing to do");
        return;
    }
    let line = format!("Done: {}", report);
    if report.fully_succeeded() {
        ui.success(&line);
    } else {
        ui.warning(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::installer::{ExecHooks, InstallPaths, Installer};
    use crate::journal::Journal;
    use crate::shell::Invocation;
    use crate::ui::MockUI;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    fn paths(temp: &tempfile::TempDir) -> InstallPaths {
        InstallPaths {
            opt_root: temp.path().join("opt"),
            scripts_dir: temp.path().join("scripts"),
            wordlists_dir: temp.path().join("wordlists"),
            shell_startup_files: Vec::new(),
        }
    }

    #[test]
    fn exit_choice_leaves_the_loop() {
        let catalog = Catalog::builtin();
        let journal = Journal::disabled();
        let temp = tempfile::TempDir::new().unwrap();
        let hooks = ExecHooks {
            run: &|_| true,
            command_exists: &|_| false,
        };
        let installer = Installer::new(
            &catalog,
            DistroFamily::Kali,
            paths(&temp),
            &journal,
            hooks,
        );
        let menu = Menu::new(&catalog, DistroFamily::Kali, &installer);

        let mut ui = MockUI::new();
        // categories occupy 0..6; exit is the last entry
        ui.queue_select(Some(Category::ALL.len() + 2));
        menu.run(&mut ui).unwrap();
    }

    #[test]
    fn cancelled_prompt_leaves_the_loop() {
        let catalog = Catalog::builtin();
        let journal = Journal::disabled();
        let temp = tempfile::TempDir::new().unwrap();
        let hooks = ExecHooks {
            run: &|_| true,
            command_exists: &|_| false,
        };
        let installer = Installer::new(
            &catalog,
            DistroFamily::Kali,
            paths(&temp),
            &journal,
            hooks,
        );
        let menu = Menu::new(&catalog, DistroFamily::Kali, &installer);

        let mut ui = MockUI::new();
        ui.queue_select(None);
        menu.run(&mut ui).unwrap();
    }

    #[test]
    fn declined_confirmation_installs_nothing() {
        let catalog = Catalog::builtin();
        let journal = Journal::disabled();
        let temp = tempfile::TempDir::new().unwrap();
        let calls: Mutex<Vec<String>> = Mutex::new(Vec::new());
        let run = |inv: &Invocation| {
            calls.lock().unwrap().push(inv.command_line());
            true
        };
        let hooks = ExecHooks {
            run: &run,
            command_exists: &|_| false,
        };
        let installer = Installer::new(
            &catalog,
            DistroFamily::Kali,
            paths(&temp),
            &journal,
            hooks,
        );
        let menu = Menu::new(&catalog, DistroFamily::Kali, &installer);

        let mut ui = MockUI::new();
        ui.queue_select(Some(0)); // APT category
        ui.queue_multi_select(vec![0, 1]);
        ui.queue_confirm(false); // decline the install
        ui.queue_select(Some(Category::ALL.len() + 2)); // then exit

        menu.run(&mut ui).unwrap();
        assert!(calls.lock().unwrap().is_empty());
        assert!(ui.messages().iter().any(|m| m == "Cancelled"));
    }

    #[test]
    fn category_selection_installs_chosen_subset() {
        let catalog = Catalog::builtin();
        let journal = Journal::disabled();
        let temp = tempfile::TempDir::new().unwrap();
        let calls: Mutex<Vec<String>> = Mutex::new(Vec::new());
        let run = |inv: &Invocation| {
            calls.lock().unwrap().push(inv.command_line());
            true
        };
        let hooks = ExecHooks {
            run: &run,
            command_exists: &|_| false,
        };
        let installer = Installer::new(
            &catalog,
            DistroFamily::Kali,
            paths(&temp),
            &journal,
            hooks,
        );
        let menu = Menu::new(&catalog, DistroFamily::Kali, &installer);

        let mut ui = MockUI::new();
        ui.queue_select(Some(3)); // Python category
        ui.queue_multi_select(vec![0]); // first package only
        ui.queue_confirm(true);
        ui.queue_select(Some(Category::ALL.len() + 2));

        menu.run(&mut ui).unwrap();
        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], "pip3 install --upgrade wfuzz");
        assert!(ui.has_success("Done:"));
    }

    #[test]
    fn profile_menu_runs_selected_profile() {
        let catalog = Catalog::builtin();
        let journal = Journal::disabled();
        let temp = tempfile::TempDir::new().unwrap();
        let calls: Mutex<Vec<String>> = Mutex::new(Vec::new());
        let run = |inv: &Invocation| {
            calls.lock().unwrap().push(inv.command_line());
            true
        };
        let hooks = ExecHooks {
            run: &run,
            command_exists: &|name| name == "go" || name == "docker",
        };
        let installer = Installer::new(
            &catalog,
            DistroFamily::Kali,
            paths(&temp),
            &journal,
            hooks,
        );
        let menu = Menu::new(&catalog, DistroFamily::Kali, &installer);

        let mut ui = MockUI::new();
        ui.queue_select(Some(Category::ALL.len())); // profiles entry
        ui.queue_select(Some(0)); // first profile
        ui.queue_confirm(true);
        ui.queue_select(Some(Category::ALL.len() + 2));

        menu.run(&mut ui).unwrap();
        assert!(!calls.lock().unwrap().is_empty());
        assert!(!ui.headers().is_empty());
    }

    #[test]
    fn raised_interrupt_ends_the_session_without_prompting() {
        let catalog = Catalog::builtin();
        let journal = Journal::disabled();
        let temp = tempfile::TempDir::new().unwrap();
        let calls: Mutex<Vec<String>> = Mutex::new(Vec::new());
        let run = |inv: &Invocation| {
            calls.lock().unwrap().push(inv.command_line());
            true
        };
        let hooks = ExecHooks {
            run: &run,
            command_exists: &|_| false,
        };
        let installer = Installer::new(
            &catalog,
            DistroFamily::Kali,
            paths(&temp),
            &journal,
            hooks,
        )
        .with_stop_flag(Arc::new(AtomicBool::new(true)));
        let menu = Menu::new(&catalog, DistroFamily::Kali, &installer);

        let mut ui = MockUI::new();
        ui.queue_select(Some(0));

        menu.run(&mut ui).unwrap();
        assert!(ui.selects_asked().is_empty());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn interrupt_during_install_ends_the_session() {
        let catalog = Catalog::builtin();
        let journal = Journal::disabled();
        let temp = tempfile::TempDir::new().unwrap();
        let stop = Arc::new(AtomicBool::new(false));

        // The first invocation "receives" the interrupt mid-install.
        let seen = Arc::clone(&stop);
        let run = move |_: &Invocation| {
            seen.store(true, Ordering::SeqCst);
            true
        };
        let hooks = ExecHooks {
            run: &run,
            command_exists: &|_| false,
        };
        let installer = Installer::new(
            &catalog,
            DistroFamily::Kali,
            paths(&temp),
            &journal,
            hooks,
        )
        .with_stop_flag(Arc::clone(&stop));
        let menu = Menu::new(&catalog, DistroFamily::Kali, &installer);

        let mut ui = MockUI::new();
        ui.queue_select(Some(3)); // Python category
        ui.queue_multi_select(vec![0]);
        ui.queue_confirm(true);
        // Nothing further queued: a second main-menu prompt would cancel,
        // but the session must end before asking again.

        menu.run(&mut ui).unwrap();
        let main_menu_prompts = ui
            .selects_asked()
            .iter()
            .filter(|p| p.contains("What would you like"))
            .count();
        assert_eq!(main_menu_prompts, 1);
    }

    #[test]
    fn installed_view_lists_probed_tools() {
        let catalog = Catalog::builtin();
        let journal = Journal::disabled();
        let temp = tempfile::TempDir::new().unwrap();
        let hooks = ExecHooks {
            run: &|_| true,
            command_exists: &|name| name == "nmap",
        };
        let installer = Installer::new(
            &catalog,
            DistroFamily::Kali,
            paths(&temp),
            &journal,
            hooks,
        );
        let menu = Menu::new(&catalog, DistroFamily::Kali, &installer);

        let mut ui = MockUI::new();
        ui.queue_select(Some(Category::ALL.len() + 1)); // installed view
        ui.queue_select(Some(Category::ALL.len() + 2));

        menu.run(&mut ui).unwrap();
        assert!(ui.has_success("nmap"));
    }
}
