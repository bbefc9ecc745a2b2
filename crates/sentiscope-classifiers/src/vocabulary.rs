//! Feature vocabulary loading
//!
//! The vocabulary artifact is produced by an external training job. Its
//! first line is a literal list of 2-tuples of quoted strings, e.g.
//! `[('good', 'movie'), ('bad', 'film')]`. The parser here validates that
//! exact shape and nothing more; it is not a general literal evaluator.

use std::path::Path;

use sentiscope_core::{Bigram, Error, FeatureVocabulary, Result};
use tracing::{info, warn};

/// Load the feature vocabulary from the first line of `path`
pub fn load_vocabulary(path: &Path) -> Result<FeatureVocabulary> {
    if !path.exists() {
        return Err(Error::artifact(format!(
            "vocabulary file not found: {}",
            path.display()
        )));
    }
    let content = std::fs::read_to_string(path)?;
    let line = content.lines().next().ok_or_else(|| {
        Error::vocabulary(format!("vocabulary file is empty: {}", path.display()))
    })?;

    let vocabulary = FeatureVocabulary::new(parse_bigram_literal(line)?)?;
    if vocabulary.is_empty() {
        warn!(
            path = %path.display(),
            "vocabulary is empty, every feature vector will be zero-length"
        );
    } else {
        info!(bigrams = vocabulary.len(), path = %path.display(), "loaded feature vocabulary");
    }
    Ok(vocabulary)
}

/// Parse a literal list of 2-tuples of quoted strings.
///
/// Accepts single- or double-quoted strings with `\\`, `\'`, `\"`, `\n`,
/// `\t`, `\r` escapes, arbitrary whitespace between tokens, and optional
/// trailing commas. Anything else is rejected as malformed.
pub fn parse_bigram_literal(line: &str) -> Result<Vec<Bigram>> {
    let mut cursor = Cursor::new(line);
    cursor.skip_whitespace();
    cursor.expect(b'[')?;

    let mut bigrams = Vec::new();
    loop {
        cursor.skip_whitespace();
        match cursor.peek() {
            Some(b']') => {
                cursor.bump();
                break;
            }
            Some(b'(') => {
                bigrams.push(cursor.parse_pair()?);
                cursor.skip_whitespace();
                match cursor.peek() {
                    Some(b',') => {
                        cursor.bump();
                    }
                    Some(b']') => {
                        cursor.bump();
                        break;
                    }
                    _ => return Err(cursor.malformed("expected ',' or ']' after tuple")),
                }
            }
            _ => return Err(cursor.malformed("expected '(' or ']'")),
        }
    }

    cursor.skip_whitespace();
    if !cursor.at_end() {
        return Err(cursor.malformed("trailing content after list"));
    }
    Ok(bigrams)
}

/// Byte cursor over one vocabulary line
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, byte: u8) -> Result<()> {
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.malformed(&format!("expected '{}'", byte as char)))
        }
    }

    fn malformed(&self, msg: &str) -> Error {
        Error::vocabulary(format!("{msg} at byte {}", self.pos))
    }

    /// Parse `('first', 'second')` with an optional trailing comma
    fn parse_pair(&mut self) -> Result<Bigram> {
        self.expect(b'(')?;
        self.skip_whitespace();
        let first = self.parse_string()?;
        self.skip_whitespace();
        self.expect(b',')?;
        self.skip_whitespace();
        let second = self.parse_string()?;
        self.skip_whitespace();
        if self.peek() == Some(b',') {
            self.bump();
            self.skip_whitespace();
        }
        self.expect(b')')?;
        Ok(Bigram(first, second))
    }

    /// Parse one quoted string.
    ///
    /// Scanning is byte-wise; slices are only taken after ASCII bytes, so
    /// multi-byte characters pass through intact.
    fn parse_string(&mut self) -> Result<String> {
        let quote = match self.peek() {
            Some(q @ (b'\'' | b'"')) => {
                self.pos += 1;
                q
            }
            _ => return Err(self.malformed("expected quoted string")),
        };

        let mut out = String::new();
        let mut chunk_start = self.pos;
        loop {
            match self.peek() {
                None => return Err(self.malformed("unterminated string")),
                Some(b'\\') => {
                    out.push_str(&self.input[chunk_start..self.pos]);
                    self.pos += 1;
                    let escaped = self
                        .bump()
                        .ok_or_else(|| self.malformed("unterminated escape"))?;
                    out.push(match escaped {
                        b'\\' => '\\',
                        b'\'' => '\'',
                        b'"' => '"',
                        b'n' => '\n',
                        b't' => '\t',
                        b'r' => '\r',
                        other => {
                            return Err(self.malformed(&format!(
                                "unsupported escape '\\{}'",
                                other as char
                            )))
                        }
                    });
                    chunk_start = self.pos;
                }
                Some(b) if b == quote => {
                    out.push_str(&self.input[chunk_start..self.pos]);
                    self.pos += 1;
                    return Ok(out);
                }
                Some(_) => {
                    self.pos += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parses_basic_list() {
        let bigrams = parse_bigram_literal("[('good', 'movie'), ('bad', 'film')]").unwrap();
        assert_eq!(
            bigrams,
            vec![Bigram::new("good", "movie"), Bigram::new("bad", "film")]
        );
    }

    #[test]
    fn test_parses_empty_list() {
        assert!(parse_bigram_literal("[]").unwrap().is_empty());
        assert!(parse_bigram_literal("  [ ]  ").unwrap().is_empty());
    }

    #[test]
    fn test_tolerates_whitespace_and_trailing_commas() {
        let bigrams = parse_bigram_literal("[ ( 'a' , 'b' , ) , ]").unwrap();
        assert_eq!(bigrams, vec![Bigram::new("a", "b")]);
    }

    #[test]
    fn test_accepts_double_quotes() {
        let bigrams = parse_bigram_literal(r#"[("a", 'b')]"#).unwrap();
        assert_eq!(bigrams, vec![Bigram::new("a", "b")]);
    }

    #[test]
    fn test_decodes_escapes() {
        let bigrams = parse_bigram_literal(r"[('don\'t', 'a\\b')]").unwrap();
        assert_eq!(bigrams, vec![Bigram::new("don't", "a\\b")]);
    }

    #[test]
    fn test_rejects_non_string_elements() {
        assert!(parse_bigram_literal("[('a', 1)]").is_err());
        assert!(parse_bigram_literal("[(good, movie)]").is_err());
    }

    #[test]
    fn test_rejects_wrong_arity_tuples() {
        assert!(parse_bigram_literal("[('a',)]").is_err());
        assert!(parse_bigram_literal("[('a', 'b', 'c')]").is_err());
    }

    #[test]
    fn test_rejects_nesting_and_junk() {
        assert!(parse_bigram_literal("[[('a', 'b')]]").is_err());
        assert!(parse_bigram_literal("[('a', 'b')] extra").is_err());
        assert!(parse_bigram_literal("[('a', 'b')").is_err());
        assert!(parse_bigram_literal("[,]").is_err());
        assert!(parse_bigram_literal("").is_err());
    }

    #[test]
    fn test_rejects_unsupported_escape() {
        assert!(parse_bigram_literal(r"[('a\q', 'b')]").is_err());
    }

    #[test]
    fn test_load_reads_first_line_only() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[('good', 'movie')]").unwrap();
        writeln!(file, "this line is ignored").unwrap();
        let vocabulary = load_vocabulary(file.path()).unwrap();
        assert_eq!(vocabulary.len(), 1);
        assert_eq!(vocabulary.bigrams()[0], Bigram::new("good", "movie"));
    }

    #[test]
    fn test_load_rejects_duplicates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[('a', 'b'), ('a', 'b')]").unwrap();
        let err = load_vocabulary(file.path()).unwrap_err();
        assert!(matches!(err, Error::Vocabulary(_)));
    }

    #[test]
    fn test_load_missing_file_is_artifact_error() {
        let err = load_vocabulary(Path::new("/nonexistent/features.txt")).unwrap_err();
        assert!(matches!(err, Error::Artifact(_)));
    }

    #[test]
    fn test_load_empty_file_is_vocabulary_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = load_vocabulary(file.path()).unwrap_err();
        assert!(matches!(err, Error::Vocabulary(_)));
    }
}
