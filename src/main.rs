mod cli;
mod fnlen;
mod walk;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let Some(path) = cli.path else {
        println!("{}", cli::USAGE);
        std::process::exit(1);
    };

    match fnlen::run(&path, cli.json) {
        Ok(status) => std::process::exit(status.exit_code()),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
