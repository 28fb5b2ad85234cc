//! Packaging inspection: print the binary path the launcher would resolve.
//! Never spawns or modifies anything.

use anyhow::Result;
use aicommit_launcher::cli::{self, LocateArgs};
use aicommit_launcher::config::{self, Config};
use aicommit_launcher::logging::init_tracing;
use aicommit_launcher::output as out;
use aicommit_launcher::{guard, resolve};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = cli::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            out::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &LocateArgs) -> Result<()> {
    let mut cfg = config::load()?;
    args.apply_overrides(&mut cfg);
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref())?;

    if args.print_config {
        print_config(&cfg);
        return Ok(());
    }

    let desc = resolve(args.platform(), args.arch(), cfg.layout, &cfg.bin_dir, &cfg.product)?;
    if args.check {
        guard::ensure_present(&desc, cfg.list_dir_on_missing)?;
    }
    out::print_user(&desc.path.display().to_string());
    Ok(())
}

fn print_config(cfg: &Config) {
    match config::config_file_path() {
        Some(p) => out::print_user(&format!("config_file: {}", p.display())),
        None => out::print_user("config_file: (none)"),
    }
    out::print_user(&format!("bin_dir: {}", cfg.bin_dir.display()));
    out::print_user(&format!("product: {}", cfg.product));
    out::print_user(&format!("layout: {}", cfg.layout));
    out::print_user(&format!("log_level: {}", cfg.log_level));
    if let Some(f) = &cfg.log_file {
        out::print_user(&format!("log_file: {}", f.display()));
    }
    out::print_user(&format!("list_dir_on_missing: {}", cfg.list_dir_on_missing));
}
