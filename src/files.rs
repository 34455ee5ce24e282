//! Reading the input text and writing the rewritten tokens.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Read `path` line by line, joining the lines with a trailing `\n` each.
pub fn read_text(path: &Path) -> Result<String> {
    let read = || -> io::Result<String> { read_lines(BufReader::new(File::open(path)?)) };
    read().map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Join every line of `reader` with a `\n` after it.
///
/// Line endings (`\n` or `\r\n`) are normalised to `\n`, and a final line
/// without a terminator gets one. Invalid UTF-8 decodes to U+FFFD, which the
/// tokenizer treats as a separator.
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<String> {
    let mut text = String::new();
    for line in reader.split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        text.push_str(&String::from_utf8_lossy(&line));
        text.push('\n');
    }
    Ok(text)
}

/// Create (or truncate) `path` and write `tokens` to it.
pub fn write_file(path: &Path, tokens: &[String]) -> Result<()> {
    let write = || -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        write_tokens(&mut writer, tokens)?;
        writer.flush()
    };
    write().map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write each token followed by a single space.
pub fn write_tokens<W: Write>(writer: &mut W, tokens: &[String]) -> io::Result<()> {
    for token in tokens {
        writer.write_all(token.as_bytes())?;
        writer.write_all(b" ")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn written(tokens: &[&str]) -> String {
        let tokens: Vec<String> = tokens.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        write_tokens(&mut out, &tokens).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn lines_get_newlines() {
        assert_eq!(read_lines(Cursor::new("a\nb")).unwrap(), "a\nb\n");
        assert_eq!(read_lines(Cursor::new("a\nb\n")).unwrap(), "a\nb\n");
        assert_eq!(read_lines(Cursor::new("a\r\nb\r\n")).unwrap(), "a\nb\n");
    }

    #[test]
    fn empty_reader() {
        assert_eq!(read_lines(Cursor::new("")).unwrap(), "");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(
            read_lines(Cursor::new(b"caf\xe9 FF\r\n".to_vec())).unwrap(),
            "caf\u{FFFD} FF\n"
        );
    }

    #[test]
    fn tokens_have_trailing_space() {
        assert_eq!(written(&["255"]), "255 ");
        assert_eq!(written(&["hello", "world"]), "hello world ");
        assert_eq!(written(&[]), "");
    }

    #[test]
    fn missing_input_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }), "got: {err:?}");
        assert!(err.to_string().contains("missing.txt"), "got: {err}");
    }

    #[test]
    fn unwritable_output_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");
        let err = write_file(&path, &["x".to_string()]).unwrap_err();
        assert!(matches!(err, Error::Write { .. }), "got: {err:?}");
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_file(&path, &["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a b ");
        assert_eq!(read_text(&path).unwrap(), "a b \n");
    }
}
