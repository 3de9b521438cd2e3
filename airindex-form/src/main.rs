//! AirIndex calculator form
//!
//! ```text
//! airindex-form                              interactive form on stdin/stdout
//! airindex-form <POLLUTANT> <CONCENTRATION>  single calculation
//! ```
//!
//! Log output is controlled with `RUST_LOG` (e.g. `RUST_LOG=debug`).

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use log::info;

use airindex_core::Pollutant;
use airindex_form::{run_once, FormConfig, Session};

fn usage() -> String {
    let names: Vec<&str> = Pollutant::ALL.iter().map(Pollutant::name).collect();
    format!(
        "usage: airindex-form [<POLLUTANT> <CONCENTRATION>]\n  POLLUTANT: one of {}",
        names.join(", ")
    )
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    info!("airindex-form {}", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = FormConfig::default();

    match args.as_slice() {
        [] => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut session = Session::new(stdin.lock(), stdout.lock(), config);
            session.run().context("interactive session failed")?;
            Ok(ExitCode::SUCCESS)
        }
        [pollutant, concentration] => {
            let mut stdout = io::stdout().lock();
            let status = run_once(pollutant, concentration, &config, &mut stdout)
                .context("failed to write result")?;
            stdout.flush().context("failed to flush stdout")?;
            Ok(ExitCode::from(status.exit_code()))
        }
        _ => {
            eprintln!("{}", usage());
            Ok(ExitCode::from(2))
        }
    }
}
