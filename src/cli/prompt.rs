// src/cli/prompt.rs
//! Interactive mode and path prompts.
//!
//! Generic over reader and writer so the loop can be driven from tests.

use crate::error::{Result, SiteLintError};
use crate::types::RunMode;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Asks for `1` or `2` until one is given. EOF aborts.
///
/// # Errors
/// Returns `InvalidInput` on end of input, or an I/O error.
pub fn prompt_mode<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<RunMode> {
    loop {
        writeln!(out, "Choose what to lint:")?;
        writeln!(out, "  1) a single website root")?;
        writeln!(out, "  2) a folder containing multiple website roots")?;
        write!(out, "> ")?;
        out.flush()?;

        let line = read_line(input)?;
        match line.trim() {
            "1" => return Ok(RunMode::Single),
            "2" => return Ok(RunMode::Bulk),
            other => writeln!(out, "Invalid choice '{other}', enter 1 or 2.")?,
        }
    }
}

/// Asks for the path matching `mode`.
///
/// # Errors
/// Returns `InvalidInput` when the answer is blank or input ended.
pub fn prompt_path<R: BufRead, W: Write>(input: &mut R, out: &mut W, mode: RunMode) -> Result<PathBuf> {
    let question = match mode {
        RunMode::Single => "Path to the website root",
        RunMode::Bulk => "Path to the folder of website roots",
    };
    write!(out, "{question}: ")?;
    out.flush()?;

    let line = read_line(input)?;
    let answer = unquote(line.trim());
    if answer.is_empty() {
        return Err(SiteLintError::InvalidInput("path is blank".to_string()));
    }
    Ok(PathBuf::from(answer))
}

/// Rejects paths that are not existing directories.
///
/// # Errors
/// Returns `InvalidInput` if `path` is blank or not a directory.
pub fn validate_path(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(SiteLintError::InvalidInput("path is blank".to_string()));
    }
    if !path.is_dir() {
        return Err(SiteLintError::InvalidInput(format!(
            "directory does not exist: {}",
            path.display()
        )));
    }
    Ok(path.to_path_buf())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(SiteLintError::InvalidInput("no input".to_string()));
    }
    Ok(line)
}

/// Pasted paths often arrive wrapped in quotes.
fn unquote(s: &str) -> &str {
    for q in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(q).and_then(|r| r.strip_suffix(q)) {
            return inner.trim();
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn mode_from(text: &str) -> (Result<RunMode>, String) {
        let mut input = Cursor::new(text.as_bytes().to_vec());
        let mut out = Vec::new();
        let res = prompt_mode(&mut input, &mut out);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn accepts_one_and_two() {
        assert_eq!(mode_from("1\n").0.unwrap(), RunMode::Single);
        assert_eq!(mode_from(" 2 \n").0.unwrap(), RunMode::Bulk);
    }

    #[test]
    fn reprompts_until_valid() {
        let (res, out) = mode_from("3\nabc\n\n2\n");
        assert_eq!(res.unwrap(), RunMode::Bulk);
        assert_eq!(out.matches("Invalid choice").count(), 3);
        assert_eq!(out.matches("> ").count(), 4);
    }

    #[test]
    fn eof_aborts_mode_prompt() {
        assert!(matches!(mode_from("9\n").0, Err(SiteLintError::InvalidInput(_))));
    }

    #[test]
    fn path_prompt_strips_quotes() {
        let mut input = Cursor::new(b"\"/srv/my sites\"\n".to_vec());
        let mut out = Vec::new();
        let p = prompt_path(&mut input, &mut out, RunMode::Bulk).unwrap();
        assert_eq!(p, PathBuf::from("/srv/my sites"));
        assert!(String::from_utf8(out).unwrap().contains("folder of website roots"));
    }

    #[test]
    fn blank_path_is_invalid_input() {
        let mut input = Cursor::new(b"   \n".to_vec());
        let mut out = Vec::new();
        assert!(matches!(
            prompt_path(&mut input, &mut out, RunMode::Single),
            Err(SiteLintError::InvalidInput(_))
        ));
    }

    #[test]
    fn validate_rejects_missing_dir() {
        assert!(validate_path(Path::new("/no/such/dir/xyz")).is_err());
        assert!(validate_path(Path::new("")).is_err());
        let d = tempfile::tempdir().unwrap();
        assert!(validate_path(d.path()).is_ok());
    }
}
