mod emitter;
mod program;

use program::{OUTPUT_PATH, PROGRAM};

fn main() {
    match emitter::emit(&PROGRAM, OUTPUT_PATH) {
        Ok(written) => println!("Wrote {} with {} bytes", OUTPUT_PATH, written),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
