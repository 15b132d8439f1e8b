//! # phone-extract CLI
//!
//! Command-line interface for the phone number extractor.
//!
//! ## Usage
//! ```bash
//! phone-extract extract capturas_numeros_grupos -o numeros_extraidos.txt
//! phone-extract extract ~/Screenshots --recursive --lang spa+eng --format json
//! ```

mod cli;

use phone_number_extractor::Result;

fn main() -> Result<()> {
    cli::run()
}
