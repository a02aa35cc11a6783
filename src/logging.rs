//! Terminal logging for the CLI.
//!
//! Build progress goes through the `log` macros; the binary calls
//! [`init_logging`] once at startup. `RUST_LOG` overrides the default `info`
//! filter, e.g. `RUST_LOG=folio=debug folio build`.

use colored::Colorize;
use env_logger::{Builder, Env};
use log::Level;
use std::io::Write;

pub fn init_logging() {
    let env = Env::default().filter_or("RUST_LOG", "info");
    Builder::from_env(env)
        .format(|buf, record| {
            let level = match record.level() {
                Level::Error => "error".red().bold(),
                Level::Warn => "warn".yellow().bold(),
                Level::Info => "info".green(),
                Level::Debug | Level::Trace => record.level().as_str().to_lowercase().dimmed(),
            };
            writeln!(
                buf,
                "{} {} {}",
                chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
                level,
                record.args()
            )
        })
        .init();
}
