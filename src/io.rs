//! Text format for a pair of matrices.
//!
//! ```text
//! N
//! a00 a01 ... a0(N-1)
//! ...
//!
//! b00 b01 ... b0(N-1)
//! ...
//! ```
//!
//! Tokens are whitespace separated; line breaks are not significant when
//! reading.

use std::io::{Read, Write};

use crate::error::{MatmulError, Result};
use crate::matrix::{Elem, Matrix};

/// Read `N` followed by two `N`×`N` matrices, row-major.
///
/// ```
/// let input = "2\n1 2\n3 4\n\n5 6\n7 8\n";
/// let (a, b) = strassen::io::read_pair(input.as_bytes()).unwrap();
/// assert_eq!(a.get(1, 1), 4);
/// assert_eq!(b.get(0, 1), 6);
/// ```
pub fn read_pair<R: Read>(mut reader: R) -> Result<(Matrix, Matrix)> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    let token = tokens
        .next()
        .ok_or(MatmulError::UnexpectedEof { expected: 1, got: 0 })?;
    let side: usize = token.parse().map_err(|_| MatmulError::Parse {
        what: "matrix side",
        token: token.to_string(),
    })?;

    let left = read_matrix(&mut tokens, side)?;
    let right = read_matrix(&mut tokens, side)?;
    Ok((left, right))
}

fn read_matrix<'a, I>(tokens: &mut I, side: usize) -> Result<Matrix>
where
    I: Iterator<Item = &'a str>,
{
    let expected = side
        .checked_mul(side)
        .ok_or(MatmulError::UnsupportedSize {
            side,
            reason: "matrix too large",
        })?;

    // Cap the reservation; a bogus header must not allocate up front.
    let mut data: Vec<Elem> = Vec::with_capacity(expected.min(1 << 20));
    for token in tokens.by_ref().take(expected) {
        let value = token.parse().map_err(|_| MatmulError::Parse {
            what: "matrix element",
            token: token.to_string(),
        })?;
        data.push(value);
    }
    if data.len() < expected {
        return Err(MatmulError::UnexpectedEof {
            expected,
            got: data.len(),
        });
    }
    Matrix::from_vec(side, data)
}

/// One row per line, values separated by single spaces.
pub fn write_matrix<W: Write>(out: &mut W, m: &Matrix) -> Result<()> {
    for r in 0..m.side() {
        let mut first = true;
        for value in m.row(r) {
            if !first {
                out.write_all(b" ")?;
            }
            write!(out, "{value}")?;
            first = false;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Write a pair in the format [`read_pair`] accepts.
pub fn write_pair<W: Write>(out: &mut W, left: &Matrix, right: &Matrix) -> Result<()> {
    writeln!(out, "{}", left.side())?;
    write_matrix(out, left)?;
    writeln!(out)?;
    write_matrix(out, right)?;
    Ok(())
}
