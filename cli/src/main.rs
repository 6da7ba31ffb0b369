//! lazy-methods-enabler: re-enable VM methods left disabled by backup software

use std::process::ExitCode;

use anyhow::Result;

use methods_enabler::infra::config::Settings;
use methods_enabler::infra::logging;
use methods_enabler::infra::vddk::VddkDiskLib;
use methods_enabler::output::OutputContext;

fn try_main() -> Result<u8> {
    let settings = Settings::from_env()?;
    let ctx = OutputContext::new(false);
    let lib = VddkDiskLib::new(settings);
    Ok(methods_enabler::app::run(std::env::args_os(), &lib, &ctx))
}

fn main() -> ExitCode {
    logging::init();
    match try_main() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
