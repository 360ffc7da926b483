use std::collections::HashMap;

use itertools::Itertools;
use thiserror::Error;

use anyhow::Result;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("line {line}: expected two integer columns, found {tokens} token(s)")]
    NotTwoColumns { line: usize, tokens: usize },
    #[error("line {line}: `{token}` is not a valid integer")]
    BadInteger {
        line: usize,
        token: String,
        source: std::num::ParseIntError,
    },
}

#[derive(Error, Debug)]
#[error("columns have different lengths: {left} left value(s) vs {right} right value(s)")]
pub struct ShapeError {
    pub left: usize,
    pub right: usize,
}

/// The two integer columns of the input, in input order.
#[derive(Debug)]
pub struct Columns {
    pub left: Vec<i64>,
    pub right: Vec<i64>,
}

pub fn parse_columns(
    input: impl Iterator<Item = impl Into<String>>,
) -> Result<Columns, ParseError> {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for (i, line) in input.enumerate() {
        let line: String = line.into();
        let tokens: Vec<&str> = line.split_whitespace().collect();

        // Only the first two tokens matter; anything past them is ignored.
        let (l, r) = match (tokens.first(), tokens.get(1)) {
            (Some(l), Some(r)) => (*l, *r),
            _ => {
                return Err(ParseError::NotTwoColumns {
                    line: i + 1,
                    tokens: tokens.len(),
                })
            }
        };

        left.push(parse_value(l, i + 1)?);
        right.push(parse_value(r, i + 1)?);
    }

    Ok(Columns { left, right })
}

fn parse_value(token: &str, line: usize) -> Result<i64, ParseError> {
    token.parse().map_err(|source| ParseError::BadInteger {
        line,
        token: token.to_string(),
        source,
    })
}

impl Columns {
    /// Sum of pairwise absolute differences between the ascending-sorted columns.
    pub fn total_distance(&self) -> Result<i64, ShapeError> {
        if self.left.len() != self.right.len() {
            return Err(ShapeError {
                left: self.left.len(),
                right: self.right.len(),
            });
        }

        let left = self.left.iter().sorted();
        let right = self.right.iter().sorted();

        Ok(left.zip(right).map(|(l, r)| (l - r).abs()).sum())
    }

    /// Sum over the left column of each value times its frequency in the right column.
    pub fn similarity_score(&self) -> i64 {
        let counts: HashMap<i64, usize> = self.right.iter().copied().counts();

        self.left
            .iter()
            .map(|l| l * counts.get(l).copied().unwrap_or(0) as i64)
            .sum()
    }
}

pub fn summarize(input: impl Iterator<Item = impl Into<String>>) -> Result<(i64, i64)> {
    let columns = parse_columns(input)?;

    Ok((columns.total_distance()?, columns.similarity_score()))
}
