mod args;

use std::process::ExitCode;

use backend::{System, SystemError, WindowConfig};

use args::{Args, USAGE};

fn run(args: &Args) -> Result<(), SystemError> {
    let cfg = match &args.config {
        Some(path) => WindowConfig::load(path)?,
        None => WindowConfig::default(),
    };
    let cfg = args.apply(cfg).validate()?;

    let mut system = System::new(&cfg)?;
    system.clear_screen(cfg.color)?;
    system.draw_to_screen();
    system.hold(cfg.hold());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };
    if args.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Initialization failure: {e}");
            ExitCode::FAILURE
        }
    }
}
