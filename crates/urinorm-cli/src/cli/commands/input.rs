//! Input collection: command-line arguments, or stdin lines.

use anyhow::{Context, Result};
use std::io::BufRead;

/// Returns `args` when non-empty, otherwise every non-blank line of `stdin`
/// (trailing `\r` stripped).
pub fn read_inputs<R: BufRead>(args: Vec<String>, stdin: R) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }

    let mut inputs = Vec::new();
    for line in stdin.lines() {
        let line = line.context("read input from stdin")?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if !line.trim().is_empty() {
            inputs.push(line.to_string());
        }
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn args_win_over_stdin() {
        let inputs = read_inputs(vec!["/a".into()], Cursor::new("/ignored\n")).unwrap();
        assert_eq!(inputs, vec!["/a"]);
    }

    #[test]
    fn stdin_lines_skip_blank_and_keep_inner_spaces() {
        let inputs = read_inputs(Vec::new(), Cursor::new("/a b?c\r\n\n   \nhttp://x/y\n")).unwrap();
        assert_eq!(inputs, vec!["/a b?c", "http://x/y"]);
    }
}
