mod cli;
mod exit_codes;
mod gates;
mod run;
mod run_error;

use clap::Parser;

fn main() {
    let cli = match cli::Cli::try_parse() {
        Ok(v) => v,
        Err(err) => {
            use clap::error::ErrorKind;
            let _ = err.print();
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    exit_codes::ExitCode::Success.as_i32()
                }
                _ => exit_codes::ExitCode::InvalidInput.as_i32(),
            };
            std::process::exit(code);
        }
    };

    let result = match cli.command {
        cli::Command::Text(args) => run::text(args),
        cli::Command::Junit(args) => run::junit(args),
    };

    let code = match result {
        Ok(code) => code.as_i32(),
        Err(err) => {
            eprintln!("{err}");
            err.exit_code().as_i32()
        }
    };

    std::process::exit(code);
}
