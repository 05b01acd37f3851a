use std::io;

fn main() {
    nines_cli::logging::init_logging();
    let code = nines_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
