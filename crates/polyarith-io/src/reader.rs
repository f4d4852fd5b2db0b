//! Line-oriented term stream reader.
//!
//! The storage format is one term per line:
//!
//! ```text
//!  4 5
//! -2 3
//!  2 1
//!  3 0
//! ```
//!
//! i.e. `<coefficient> <degree>` separated by whitespace, with degrees in
//! strictly descending order. The example represents `4x^5 - 2x^3 + 2x + 3`.

use std::io::BufRead;

use polyarith_poly::{Coefficient, Polynomial, Term};
use tracing::{debug, trace};

use crate::error::ReadError;

/// Configuration for reading term streams.
#[derive(Clone, Debug)]
pub struct ReadConfig {
    /// Ignore lines containing only whitespace.
    pub skip_blank_lines: bool,
    /// Reject degrees that do not strictly descend.
    ///
    /// When disabled the ordering is trusted as-is.
    pub require_descending: bool,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            skip_blank_lines: true,
            require_descending: true,
        }
    }
}

/// Parses a single `<coefficient> <degree>` line.
///
/// # Errors
///
/// Returns an error if a token is missing, malformed, or followed by
/// extra input. Non-finite coefficients are rejected.
pub fn parse_term_line<F: Coefficient>(line: &str, line_no: usize) -> Result<Term<F>, ReadError> {
    let mut tokens = line.split_whitespace();

    let coeff_token = tokens.next().ok_or(ReadError::MissingToken {
        line: line_no,
        expected: "coefficient",
    })?;
    let coeff = coeff_token
        .parse::<F>()
        .ok()
        .filter(|c| c.is_finite())
        .ok_or_else(|| ReadError::InvalidCoefficient {
            line: line_no,
            token: coeff_token.to_string(),
        })?;

    let degree_token = tokens.next().ok_or(ReadError::MissingToken {
        line: line_no,
        expected: "degree",
    })?;
    let degree = degree_token
        .parse::<u32>()
        .map_err(|_| ReadError::InvalidDegree {
            line: line_no,
            token: degree_token.to_string(),
        })?;

    if let Some(extra) = tokens.next() {
        return Err(ReadError::TrailingToken {
            line: line_no,
            token: extra.to_string(),
        });
    }

    Ok(Term::new(coeff, degree))
}

/// Reads terms from a line-oriented stream.
///
/// Zero-coefficient lines are dropped so the result is canonical when the
/// input is ordered.
///
/// # Errors
///
/// Returns the first I/O or format error encountered.
pub fn read_terms<F: Coefficient, R: BufRead>(
    reader: R,
    config: &ReadConfig,
) -> Result<Vec<Term<F>>, ReadError> {
    let mut terms = Vec::new();
    let mut previous: Option<u32> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        if config.skip_blank_lines && line.trim().is_empty() {
            trace!(line = line_no, "skipping blank line");
            continue;
        }

        let term: Term<F> = parse_term_line(&line, line_no)?;

        if config.require_descending {
            if let Some(prev) = previous {
                if term.degree >= prev {
                    return Err(ReadError::OutOfOrder {
                        line: line_no,
                        degree: term.degree,
                        previous: prev,
                    });
                }
            }
        }
        previous = Some(term.degree);

        if term.is_zero() {
            debug!(line = line_no, degree = term.degree, "dropping zero-coefficient term");
            continue;
        }
        terms.push(term);
    }

    Ok(terms)
}

/// Reads a polynomial using the default configuration.
///
/// # Errors
///
/// See [`read_polynomial_with`].
pub fn read_polynomial<F: Coefficient, R: BufRead>(reader: R) -> Result<Polynomial<F>, ReadError> {
    read_polynomial_with(reader, &ReadConfig::default())
}

/// Reads a polynomial.
///
/// Nothing is returned unless the whole stream parses.
///
/// # Errors
///
/// Returns the first I/O or format error encountered.
pub fn read_polynomial_with<F: Coefficient, R: BufRead>(
    reader: R,
    config: &ReadConfig,
) -> Result<Polynomial<F>, ReadError> {
    let terms = read_terms(reader, config)?;
    debug!(terms = terms.len(), "read polynomial");
    Ok(Polynomial::from_terms(terms))
}

/// Parses a polynomial from an in-memory string.
///
/// # Errors
///
/// Returns the first format error encountered.
pub fn parse_polynomial<F: Coefficient>(input: &str) -> Result<Polynomial<F>, ReadError> {
    read_polynomial(input.as_bytes())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const P: &str = "4 5\n-2 3\n2 1\n3 0\n";

    #[test]
    fn test_read_example() {
        let p: Polynomial = read_polynomial(Cursor::new(P)).unwrap();
        assert_eq!(
            p.terms(),
            &[
                Term::new(4.0, 5),
                Term::new(-2.0, 3),
                Term::new(2.0, 1),
                Term::new(3.0, 0),
            ]
        );
        assert_eq!(p.to_string(), "4.0x^5 + -2.0x^3 + 2.0x + 3.0");
    }

    #[test]
    fn test_read_f32() {
        let p: Polynomial<f32> = parse_polynomial(" 1.5   2\n\t-0.25 0").unwrap();
        assert_eq!(p.terms(), &[Term::new(1.5f32, 2), Term::new(-0.25f32, 0)]);
    }

    #[test]
    fn test_empty_input_is_zero() {
        let p: Polynomial = parse_polynomial("").unwrap();
        assert!(p.is_zero());
        assert_eq!(p.to_string(), "0");
    }

    #[test]
    fn test_blank_lines() {
        let input = "\n1 2\n   \n1 0\n";
        let p: Polynomial = parse_polynomial(input).unwrap();
        assert_eq!(p.len(), 2);

        let strict = ReadConfig {
            skip_blank_lines: false,
            ..ReadConfig::default()
        };
        let err = read_polynomial_with::<f64, _>(input.as_bytes(), &strict).unwrap_err();
        assert!(matches!(
            err,
            ReadError::MissingToken {
                line: 1,
                expected: "coefficient"
            }
        ));
    }

    #[test]
    fn test_zero_coefficients_dropped() {
        let p: Polynomial = parse_polynomial("0 3\n2 1\n0.0 0").unwrap();
        assert_eq!(p.terms(), &[Term::new(2.0, 1)]);
        assert!(p.is_canonical());
    }

    #[test]
    fn test_missing_degree() {
        let err = parse_polynomial::<f64>("4 5\n-2\n").unwrap_err();
        assert!(matches!(
            err,
            ReadError::MissingToken {
                line: 2,
                expected: "degree"
            }
        ));
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_invalid_tokens() {
        let err = parse_polynomial::<f64>("four 5").unwrap_err();
        assert!(matches!(err, ReadError::InvalidCoefficient { line: 1, ref token } if token == "four"));

        let err = parse_polynomial::<f64>("1 -2").unwrap_err();
        assert!(matches!(err, ReadError::InvalidDegree { line: 1, ref token } if token == "-2"));

        let err = parse_polynomial::<f64>("1 2.5").unwrap_err();
        assert!(matches!(err, ReadError::InvalidDegree { .. }));

        let err = parse_polynomial::<f64>("NaN 2").unwrap_err();
        assert!(matches!(err, ReadError::InvalidCoefficient { .. }));

        let err = parse_polynomial::<f64>("1 2 3").unwrap_err();
        assert!(matches!(err, ReadError::TrailingToken { line: 1, ref token } if token == "3"));
    }

    #[test]
    fn test_out_of_order() {
        let err = parse_polynomial::<f64>("1 2\n1 2\n").unwrap_err();
        assert!(matches!(
            err,
            ReadError::OutOfOrder {
                line: 2,
                degree: 2,
                previous: 2
            }
        ));
        assert_eq!(err.to_string(), "line 2: degree 2 does not descend below 2");

        let trusting = ReadConfig {
            require_descending: false,
            ..ReadConfig::default()
        };
        let p: Polynomial = read_polynomial_with("1 0\n1 3\n".as_bytes(), &trusting).unwrap();
        assert_eq!(p.terms(), &[Term::new(1.0, 0), Term::new(1.0, 3)]);
        assert_eq!(p.to_string(), "1.0x^3 + 1.0");
    }

    #[test]
    fn test_io_error_propagates() {
        struct Failing;

        impl std::io::Read for Failing {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"))
            }
        }

        let err = read_polynomial::<f64, _>(std::io::BufReader::new(Failing)).unwrap_err();
        assert!(matches!(err, ReadError::Io(_)));
        assert_eq!(err.line(), None);
    }
}
