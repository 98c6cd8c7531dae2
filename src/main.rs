use std::io::{self, BufWriter};
use std::process::ExitCode;

use tbvec::fixtures::{EmitConfig, Runner};
use tracing::error;

fn main() -> ExitCode {
    if let Err(e) = tbvec::logging::init_tracing() {
        eprintln!("tbvec: cannot initialize logging: {e}");
    }

    let config = EmitConfig::default();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match Runner::new(&config).and_then(|runner| runner.run(&mut out)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("fixture generation failed: {e}");
            ExitCode::FAILURE
        }
    }
}
