// labkit: systems-programming coursework exercises

use std::io::{self, Write};
use std::process;

use crossterm::tty::IsTty;

use labkit::cli::{self, Config};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("labkit");

    let config = match Config::from_args(args.get(1..).unwrap_or_default()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprint!("{}", cli::help_text(program_name));
            process::exit(1);
        }
    };

    if config.show_help {
        print!("{}", cli::help_text(program_name));
        return;
    }

    let stdin = io::stdin();
    let interactive = stdin.is_tty();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = cli::run(&config, &mut stdin.lock(), interactive, &mut out) {
        let _ = out.flush();
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}
