/// quadratic — solve ax² + bx + c = 0 from arguments or prompts.
use std::io;

use clap::Parser; // trait import enables QuadraticCli::parse()
use colored::Colorize;

use quadratic::cli::QuadraticCli;
use quadratic::commands::solve::{self, SolveOptions};
use quadratic::config::{resolve_config_path, Config};
use quadratic::core::debug;
use quadratic::core::input::prompt_coefficients;
use quadratic::core::Coefficients;

fn run(args: QuadraticCli) -> anyhow::Result<()> {
    let cfg_path = resolve_config_path(&args.config);
    let cfg = Config::load(cfg_path.as_deref());

    let opts = SolveOptions {
        json: args.json,
        plot: args.plot,
        precision: args.precision.unwrap_or(cfg.precision),
        color: cfg.color && !args.no_color,
        samples: cfg.samples,
    };
    if !opts.color {
        colored::control::set_override(false);
    }

    let coefficients = match args.coefficients() {
        Some((a, b, c)) => Coefficients::parse(a, b, c)?,
        None => {
            let stdin = io::stdin();
            prompt_coefficients(&mut stdin.lock(), &mut io::stdout())?
        }
    };

    solve::main(coefficients, &opts)?;
    Ok(())
}

fn main() {
    let args = QuadraticCli::parse();
    if args.debug {
        debug::force_enable();
    }

    if let Err(e) = run(args) {
        eprintln!("{} {:#}", "error:".bright_red().bold(), e);
        std::process::exit(1);
    }
}
