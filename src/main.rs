use std::fs::File;
use std::io::{self, BufReader};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        let cmd = args.first().map_or("bilu-linial", String::as_str);
        usage_and_exit(cmd);
    }

    let file = File::open(&args[1]).unwrap_or_else(|e| fatal(format!("could not open file: {e}")));
    let reader = BufReader::new(file);

    let stderr = io::stderr();
    let mut diag = stderr.lock();
    match bilu_linial::driver::verify_stream(reader, &mut diag) {
        // A counterexample ends the run early, but finding one is the whole
        // point: both outcomes are a successful exit.
        Ok(_) => {}
        Err(e) => fatal(e),
    }
}

fn usage_and_exit(cmd: &str) -> ! {
    eprintln!(
        "{cmd}: verify the Bilu-Linial conjecture for graphs.\n\
         \n\
         {cmd} <infile>\n\
         \n\
         \x20 infile - a file containing graphs in graph6 format"
    );
    std::process::exit(1)
}

fn fatal(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(2)
}
