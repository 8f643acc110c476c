use crate::domain::error::OdlError;
use std::io::{self, BufRead, Write};

/// Print `label: ` and read one line, without its line ending.
///
/// End of input is an error; an empty line is a valid (empty) answer.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<String, OdlError> {
    write!(output, "{}: ", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(OdlError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("input closed while waiting for '{}'", label),
        )));
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
