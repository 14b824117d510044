use std::env;
use std::io;
use std::process;

use diffc::{log, println_stderr};

// With no arguments, read a diff from stdin. Otherwise every argument,
// `--` included, goes to the diff command (`$DIFFC_DIFF`, default `diff`).
fn main() {
    diffc::signals::setup_sigint_handler();

    let diff_args: Vec<String> = env::args().skip(1).collect();
    let config = diffc::Config::from_env();
    log!("config: {:?}, args: {:?}", config, diff_args);

    let lines = match diffc::input::acquire(&config.diff_command, &diff_args) {
        Ok(x) => x,
        Err(e) => {
            println_stderr!("diffc: read input failed: {}", e);
            process::exit(1);
        }
    };

    let engine = diffc::MyersEngine::with_timeout(config.diff_timeout);
    let mut colorizer = diffc::Colorizer::with_engine(engine).detection(config.detection);
    let output = colorizer.color(&lines);
    log!("diffc: {} lines in, {} out, style {:?}", lines.len(), output.len(), colorizer.style());

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = diffc::tools::write_lines(&mut handle, &output) {
        println_stderr!("diffc: write output failed: {}", e);
        process::exit(1);
    }
}
