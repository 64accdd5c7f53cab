use colored::Colorize;
use std::error::Error;
use std::io;
use subnet_calc::config::{Config, OutputFormat};
use subnet_calc::input::read_inputs;
use subnet_calc::{calculate, render};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    if let Err(e) = log4rs::init_file(&config.log_config, Default::default()) {
        eprintln!(
            "Logging disabled, could not load {}: {e}",
            config.log_config.display()
        );
    }
    log::info!("#Start main() {:?}", config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let raw = read_inputs(&args, io::stdin().lock(), io::stdout())?;

    let calc = match calculate(&raw.address, &raw.mask) {
        Ok(calc) => calc,
        Err(e) => {
            log::error!("Calculation failed for {} {}: {e}", raw.address, raw.mask);
            let msg = e.to_string();
            if config.color {
                eprintln!("{}", msg.red());
            } else {
                eprintln!("{msg}");
            }
            std::process::exit(1);
        }
    };

    if config.output == OutputFormat::Text {
        subnet_calc::output::print_report(&calc, config.color);
    } else {
        println!("{}", render(&calc, &config)?);
    }

    log::info!("#End main()");
    Ok(())
}
