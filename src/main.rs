//! Armory CLI entry point.

use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use armory::catalog::Catalog;
use armory::cli::Cli;
use armory::installer::{ExecHooks, InstallPaths, Installer};
use armory::journal::{Journal, DEFAULT_FILENAME};
use armory::menu::{self, Menu};
use armory::platform;
use armory::shell;
use armory::ui::{create_ui, UserInterface};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("armory=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("armory=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Armory starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let catalog = Catalog::builtin();

    if cli.list_profiles {
        for profile in catalog.profiles() {
            println!("{:<16} {}", profile.id, profile.description);
        }
        return ExitCode::SUCCESS;
    }

    let is_interactive = console::user_attended() && cli.profile.is_none();
    let mut ui = create_ui(is_interactive, cli.output_mode(), cli.yes);

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = Arc::clone(&stop);
        if let Err(e) = ctrlc::set_handler(move || {
            stop.store(true, Ordering::SeqCst);
            eprintln!("\nInterrupt received; finishing the current command...");
        }) {
            ui.error(&format!("Cannot install interrupt handler: {}", e));
            return ExitCode::from(1);
        }
    }

    match run(&cli, &catalog, ui.as_mut(), &stop) {
        Ok(code) => code,
        // A prompt torn down by Ctrl-C surfaces as an error; an interrupt
        // is a clean exit, not a failure.
        Err(_) if stop.load(Ordering::SeqCst) => {
            ui.warning("Interrupted");
            ExitCode::SUCCESS
        }
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}

fn run(
    cli: &Cli,
    catalog: &Catalog,
    ui: &mut dyn UserInterface,
    stop: &Arc<AtomicBool>,
) -> armory::Result<ExitCode> {
    // apt is the one hard prerequisite; everything else degrades per
    // category at install time.
    if !cli.dry_run && !shell::command_exists("apt") {
        return Err(armory::ArmoryError::MissingPrerequisite {
            tool: "apt".into(),
            hint: "only Debian-family distributions are supported".into(),
        });
    }

    let elevated = platform::is_elevated();
    if !cli.dry_run && !elevated && !shell::command_exists("sudo") {
        return Err(armory::ArmoryError::MissingPrerequisite {
            tool: "sudo".into(),
            hint: "run as root or install sudo".into(),
        });
    }

    let distro = platform::detect_distro();
    ui.message(&format!("Detected distribution: {}", distro.name));
    if distro.family == platform::DistroFamily::Unknown {
        ui.warning("Unrecognized distribution; using a conservative tool list");
    }

    // Running the whole session as root litters root-owned files in the
    // user's home. Discourage, but allow.
    if elevated && std::env::var_os("SUDO_USER").is_none() {
        let proceed = ui.confirm(
            "Running directly as root is discouraged (installed files will be root-owned). Continue?",
            false,
        )?;
        if !proceed {
            return Ok(ExitCode::SUCCESS);
        }
    }

    let home = platform::user_home();

    let log_path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| home.join(DEFAULT_FILENAME));
    let journal = match Journal::open(&log_path) {
        Ok(journal) => {
            ui.message(&format!("Session log: {}", log_path.display()));
            journal
        }
        Err(e) => {
            ui.warning(&format!(
                "Cannot open session log {}: {}; continuing without one",
                log_path.display(),
                e
            ));
            Journal::disabled()
        }
    };

    let hooks = if cli.dry_run {
        ui.message("Dry run: commands will be printed, not executed");
        ExecHooks::dry_run()
    } else {
        ExecHooks::live()
    };

    let paths = InstallPaths::for_home(&home);
    let installer = Installer::new(catalog, distro.family, paths, &journal, hooks)
        .with_stop_flag(Arc::clone(stop))
        .with_dry_run(cli.dry_run);

    if let Some(profile_id) = &cli.profile {
        let report = installer.install_profile(ui, profile_id)?;
        menu::summarize(ui, &report);
        journal.info("Session finished");
        return Ok(ExitCode::SUCCESS);
    }

    let menu = Menu::new(catalog, distro.family, &installer);
    menu.run(ui)?;
    journal.info("Session finished");
    Ok(ExitCode::SUCCESS)
}
