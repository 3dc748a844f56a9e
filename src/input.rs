//! Count-prefixed input format
//!
//! ```text
//! N
//! <N forbidden domains, one per line>
//! M
//! <M query domains, one per line>
//! ```

use crate::blocking::Domain;
use crate::blocking::lookup::DomainNormalizer;
use crate::error::{CheckerError, Result};
use std::io::BufRead;
use tracing::debug;

/// Forbidden set and queries read from one input stream
#[derive(Debug, Clone, Default)]
pub struct CheckRequest {
    pub forbidden: Vec<Domain>,
    pub queries: Vec<Domain>,
}

/// Line-oriented reader that tracks its position for error messages
pub struct InputReader<R> {
    reader: R,
    line_no: usize,
    normalize: bool,
    buf: String,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(reader: R, normalize: bool) -> Self {
        Self {
            reader,
            line_no: 0,
            normalize,
            buf: String::new(),
        }
    }

    /// Next line without its terminator, or `None` at end of input
    fn next_line(&mut self) -> Result<Option<&str>> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;

        let line = self.buf.strip_suffix('\n').unwrap_or(&self.buf);
        Ok(Some(line.strip_suffix('\r').unwrap_or(line)))
    }

    fn make_domain(&self, line: &str) -> Domain {
        if self.normalize {
            Domain::new(DomainNormalizer::normalize(line).into_owned())
        } else {
            Domain::new(line)
        }
    }

    /// Read a line holding a single non-negative count
    pub fn read_count(&mut self) -> Result<usize> {
        let line = match self.next_line()? {
            Some(line) => line.trim().to_string(),
            None => {
                return Err(CheckerError::InvalidCount {
                    line: self.line_no + 1,
                    value: String::new(),
                });
            }
        };

        line.parse::<usize>()
            .map_err(|_| CheckerError::InvalidCount {
                line: self.line_no,
                value: line,
            })
    }

    /// Read exactly `count` domains, one per line. Lines are taken verbatim.
    pub fn read_domains(&mut self, count: usize) -> Result<Vec<Domain>> {
        let mut domains = Vec::with_capacity(count);

        while domains.len() < count {
            let found = domains.len();
            let domain = match self.next_line()? {
                Some(line) => line.to_string(),
                None => {
                    return Err(CheckerError::UnexpectedEof {
                        expected: count,
                        found,
                    });
                }
            };
            domains.push(self.make_domain(&domain));
        }

        Ok(domains)
    }

    /// Read the full count-prefixed request
    pub fn read_request(&mut self) -> Result<CheckRequest> {
        let forbidden_count = self.read_count()?;
        let forbidden = self.read_domains(forbidden_count)?;

        let query_count = self.read_count()?;
        let queries = self.read_domains(query_count)?;

        debug!(
            "Read {} forbidden domains and {} queries",
            forbidden.len(),
            queries.len()
        );

        Ok(CheckRequest { forbidden, queries })
    }

    /// Read every remaining non-blank line as a domain
    pub fn read_remaining(&mut self) -> Result<Vec<Domain>> {
        let mut domains = Vec::new();

        while let Some(line) = self.next_line()? {
            let line = line.trim().to_string();
            if !line.is_empty() {
                domains.push(self.make_domain(&line));
            }
        }

        Ok(domains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn names(domains: &[Domain]) -> Vec<&str> {
        domains.iter().map(Domain::name).collect()
    }

    #[test]
    fn test_read_request() {
        let input = "2\ngdz.ru\nmaps.me\n3\ngdz.ru\r\nm.maps.me\ngdz.ua\n";
        let request = InputReader::new(Cursor::new(input), false)
            .read_request()
            .unwrap();

        assert_eq!(names(&request.forbidden), vec!["gdz.ru", "maps.me"]);
        assert_eq!(names(&request.queries), vec!["gdz.ru", "m.maps.me", "gdz.ua"]);
    }

    #[test]
    fn test_zero_counts() {
        let request = InputReader::new(Cursor::new("0\n0\n"), false)
            .read_request()
            .unwrap();
        assert!(request.forbidden.is_empty());
        assert!(request.queries.is_empty());
    }

    #[test]
    fn test_invalid_count() {
        let err = InputReader::new(Cursor::new("two\n"), false)
            .read_request()
            .unwrap_err();
        assert!(matches!(
            err,
            CheckerError::InvalidCount { line: 1, ref value } if value == "two"
        ));
    }

    #[test]
    fn test_missing_query_count() {
        let err = InputReader::new(Cursor::new("1\ncom\n"), false)
            .read_request()
            .unwrap_err();
        assert!(matches!(err, CheckerError::InvalidCount { line: 3, .. }));
    }

    #[test]
    fn test_truncated_domains() {
        let err = InputReader::new(Cursor::new("3\na\nb\n"), false)
            .read_request()
            .unwrap_err();
        assert!(matches!(
            err,
            CheckerError::UnexpectedEof {
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_normalized_input() {
        let request = InputReader::new(Cursor::new("1\nGDZ.Ru.\n0\n"), true)
            .read_request()
            .unwrap();
        assert_eq!(names(&request.forbidden), vec!["gdz.ru"]);
    }

    #[test]
    fn test_read_remaining_skips_blank_lines() {
        let domains = InputReader::new(Cursor::new("a.com\n\n  b.com \n"), false)
            .read_remaining()
            .unwrap();
        assert_eq!(names(&domains), vec!["a.com", "b.com"]);
    }
}
