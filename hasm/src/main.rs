use std::{env, process::ExitCode};

use hasm::{HasmParameters, ParameterError};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let params = match HasmParameters::from_args(env::args_os()) {
        Ok(params) => params,
        Err(ParameterError::Cli(e)) => e.exit(),
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = hasm::run(&params) {
        eprintln!("error: {:#}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
