//! simplecalc binary entry point

use clap::Parser;
use simple_calculator::calculator::Calculator;
use simple_calculator::core::Calculation;
use simple_calculator::page::Page;
use simple_calculator_cli::{
    logging, Cli, CliConfig, CliError, CliResult, Commands, Repl, Reporter,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_reported() => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_cli(&cli);
    logging::init(config.verbosity)?;

    let reporter = Reporter::new(
        config.format,
        config.color.should_color(),
        config.verbosity.is_quiet(),
    );

    match cli.command {
        Commands::Basic(args) => calculate(&config, &reporter, args.calculation()),
        Commands::Sci(args) => calculate(&config, &reporter, args.calculation()),
        Commands::Power(args) => calculate(&config, &reporter, args.calculation()),
        Commands::Repl(args) => {
            if !args.no_banner && reporter.shows_prompt() {
                reporter.page(&Page::calculator())?;
                reporter.info("Type 'help' for examples, 'quit' to leave.")?;
            }
            let mut repl = Repl::new(&config, &reporter, args.prompt);
            let stdin = std::io::stdin();
            repl.run(stdin.lock(), &mut std::io::stdout())?;
            Ok(())
        }
        Commands::Page(args) => reporter.page(&Page::of_kind(args.page.into())),
        Commands::Features => reporter.features(),
    }
}

/// Runs a one-shot calculation; an error banner makes the process fail
fn calculate(config: &CliConfig, reporter: &Reporter, calculation: Calculation) -> CliResult<()> {
    let mut calculator = Calculator::with_guard(config.guard());
    let result = calculator.run(calculation);
    reporter.result(&result)?;
    result.map(|_| ()).map_err(CliError::from)
}
