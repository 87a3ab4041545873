use crate::error::{RankError, RankResult};
use itertools::Itertools;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Longest line kept in memory; anything longer is skipped.
pub const MAX_LINE_BYTES: usize = 1 << 20;

/// Filtered candidate words for a single run, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    pub words: Vec<String>,
    /// Non-blank lines rejected for length, alphabet or encoding.
    pub skipped: usize,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Removes later duplicates, keeping the first occurrence of each word.
    pub fn dedupe(&mut self) {
        let before = self.words.len();
        self.words = std::mem::take(&mut self.words).into_iter().unique().collect();
        debug!(removed = before - self.words.len(), "deduplicated corpus");
    }
}

/// Opens `path` and loads every valid word of `length` letters.
///
/// Fails when the file cannot be read or when nothing survives filtering.
pub fn load_corpus(path: &Path, length: usize, lowercase: bool) -> RankResult<Corpus> {
    let input_error = |source: io::Error| RankError::InputAccess {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(input_error)?;
    let corpus = read_corpus(BufReader::new(file), length, lowercase).map_err(input_error)?;

    debug!(
        words = corpus.len(),
        skipped = corpus.skipped,
        path = %path.display(),
        "loaded word list"
    );

    if corpus.is_empty() {
        return Err(RankError::EmptyCorpus {
            length,
            path: path.to_path_buf(),
        });
    }
    Ok(corpus)
}

/// Reads a line-oriented word list, keeping lines that are purely ASCII
/// letters of exactly `length` characters after trimming. Lines over
/// [`MAX_LINE_BYTES`] are skipped without being buffered.
pub fn read_corpus<R: BufRead>(
    mut reader: R,
    length: usize,
    lowercase: bool,
) -> io::Result<Corpus> {
    let mut corpus = Corpus::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = (&mut reader)
            .take(MAX_LINE_BYTES as u64 + 1)
            .read_until(b'\n', &mut buf)?;
        if n == 0 {
            break;
        }
        if n > MAX_LINE_BYTES && buf.last() != Some(&b'\n') {
            skip_to_next_line(&mut reader)?;
            corpus.skipped += 1;
            continue;
        }

        // Lines that are not UTF-8 are malformed, not fatal
        let Ok(line) = std::str::from_utf8(&buf) else {
            corpus.skipped += 1;
            continue;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match normalize_word(line, length, lowercase) {
            Some(word) => corpus.words.push(word),
            None => corpus.skipped += 1,
        }
    }

    Ok(corpus)
}

/// Discards input up to and including the next newline.
fn skip_to_next_line<R: BufRead>(reader: &mut R) -> io::Result<()> {
    loop {
        let (used, done) = {
            let available = reader.fill_buf()?;
            if available.is_empty() {
                return Ok(());
            }
            match available.iter().position(|&b| b == b'\n') {
                Some(i) => (i + 1, true),
                None => (available.len(), false),
            }
        };
        reader.consume(used);
        if done {
            return Ok(());
        }
    }
}

fn normalize_word(line: &str, length: usize, lowercase: bool) -> Option<String> {
    let word = if lowercase {
        line.to_lowercase()
    } else {
        line.to_string()
    };
    if !is_alpha_ascii(&word) || word.len() != length {
        return None;
    }
    Some(word)
}

fn is_alpha_ascii(word: &str) -> bool {
    word.bytes().all(|b| b.is_ascii_alphabetic())
}
