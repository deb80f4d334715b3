use std::process;

use anyhow::Result;
use log::debug;

use peekr::cli::{self, USAGE};
use peekr::finder::Finder;

fn main() {
    // Silent unless RUST_LOG is set
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        eprintln!("{USAGE}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = cli::parse_args(&args)?;

    debug!("search config: {config:?}");

    let finder = Finder::new(config);

    // Emit matches as the walk encounters them; zero matches is success
    for path in finder.search()? {
        println!("{}", path.display());
    }

    Ok(())
}
