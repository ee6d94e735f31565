use std::io::{BufRead, Write};

use anyhow::{anyhow, Context, Result};

/// Print a prompt without a trailing newline and read one line of input,
/// trimmed of its line ending. A closed input stream is a hard error: the
/// menu loop cannot make progress without a user, so we unwind instead of
/// spinning on empty reads.
pub(crate) fn read_line(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> Result<String> {
    write!(output, "{prompt}").context("failed to write prompt")?;
    output.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let bytes = input.read_line(&mut line).context("failed to read input")?;
    if bytes == 0 {
        return Err(anyhow!("input stream closed"));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Read a line and parse it as an integer, reporting `error_msg` and
/// re-prompting until parsing succeeds. Used where the original flows retry
/// on malformed numbers (add quantity, delete id).
pub(crate) fn read_i64_retrying(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
    error_msg: &str,
) -> Result<i64> {
    loop {
        match read_line(input, output, prompt)?.trim().parse::<i64>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "{error_msg}").context("failed to write error message")?,
        }
    }
}

/// Single-shot integer read: a parse failure comes back as `None` so the
/// caller can abandon the current operation, the way the update flow does.
pub(crate) fn read_i64_once(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> Result<Option<i64>> {
    Ok(read_line(input, output, prompt)?.trim().parse::<i64>().ok())
}
