//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the signal handler,
//! resolves the root and runs the flatten passes.

use anyhow::{Context, Result};
use std::sync::{Arc, Mutex};
use tracing::{debug, error};

use dir_flatten::config::{CONFIG_ENV_VAR, default_config_path, load_config_from_xml};
use dir_flatten::output as out;
use dir_flatten::{Config, FlattenError, resolve_root, shutdown};

use crate::cli::Args;
use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    if args.print_config {
        print_config_location();
        return Ok(());
    }

    // Defaults < XML file < CLI flags.
    let mut cfg = Config::default();
    if let Some(xml) = load_config_from_xml()? {
        cfg.apply_xml(xml);
    }
    args.apply_overrides(&mut cfg);

    let guard_opt = init_tracing(cfg.log_level, cfg.log_file.as_deref(), args.json)
        .context("Failed to initialize logging")?;

    // Guard is dropped on SIGINT as well so buffered file logs get flushed.
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            shutdown::request();
            out::print_error("Received interrupt; stopping after the current move...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
        })
        .context("failed to install signal handler")?;
    }

    debug!(?args, "Starting dir_flatten");

    let result = (|| -> Result<()> {
        cfg.root = resolve_root(&cfg.root)?;
        dir_flatten::run(&cfg)?;
        Ok(())
    })();

    if let Err(e) = &result {
        match e.downcast_ref::<FlattenError>() {
            Some(fe) => error!(code = fe.code(), kind = fe.kind(), error = %fe, "Flatten failed"),
            None => error!(error = %format!("{e:#}"), "Flatten failed"),
        }
    }

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}

fn print_config_location() {
    if let Some(p) = std::env::var_os(CONFIG_ENV_VAR) {
        out::print_user(&format!(
            "Using {CONFIG_ENV_VAR} (explicit):\n  {}",
            std::path::Path::new(&p).display()
        ));
        return;
    }
    match default_config_path() {
        Some(p) => {
            out::print_user(&format!("Default dir_flatten config path:\n  {}", p.display()));
            if p.exists() {
                out::print_user("A config file exists at that location.");
            } else {
                out::print_user("No config file exists there; built-in defaults are used.");
            }
        }
        None => out::print_error("Could not determine a default config path"),
    }
}
