pub mod cli;

use std::io::Write;

use cli::CliError;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_USAGE: i32 = 1;

// validates the parameters and writes either the two labeled lines or the
// error + usage lines, returning the process exit code
pub fn run<W: Write>(program: &str, params: &[String], out: &mut W) -> std::io::Result<i32> {
    match cli::parse(params) {
        Ok(params) => {
            writeln!(out, "Parámetro 1: {}", params.first)?;
            writeln!(out, "Parámetro 2: {}", params.second)?;

            Ok(EXIT_SUCCESS)
        }
        Err(CliError::WrongArgumentCount(received)) => {
            writeln!(
                out,
                "Error: Se esperaban {} parámetros, pero se recibieron {}",
                cli::EXPECTED_PARAMS,
                received
            )?;
            writeln!(out, "Uso: python {} <parametro1> <parametro2>", program)?;

            Ok(EXIT_USAGE)
        }
    }
}
