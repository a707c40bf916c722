use crate::distance;
use crate::haversine::CoordinatePair;
use json::number::parse_double;
use json::token::TokenKind;
use json::tokenizer::Tokenizer;
use tracing::{debug, warn};

/// Running sum and count of distances.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aggregate {
    pub count: usize,
    pub sum: f64,
}

impl Aggregate {
    pub fn add(&mut self, distance: f64) {
        self.count += 1;
        self.sum += distance;
    }

    /// None if nothing was added, rather than a division by zero.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

/// Why the token stream ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    /// The lexer reached the end of the buffer. An unterminated string also
    /// ends up here.
    EndOfInput,
    /// The lexer produced an `Undefined` token at this byte offset.
    Malformed { offset: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// Every numeric literal in the document, in order.
    pub values: Vec<f64>,
    pub stop: Stop,
}

impl Extraction {
    /// Consecutive groups of four values. A trailing group of one to three
    /// values is not a pair, and is skipped.
    pub fn pairs(&self) -> impl Iterator<Item = CoordinatePair> + '_ {
        self.values
            .chunks_exact(4)
            .map(|c| CoordinatePair::of_values([c[0], c[1], c[2], c[3]]))
    }

    /// Values left over after the last complete group of four.
    pub fn leftover(&self) -> usize {
        self.values.len() % 4
    }
}

/// Lexes the whole buffer, collecting the value of every integer and double
/// token. Stops at the first `EndOfInput` or `Undefined` token; neither is an
/// error as far as this function is concerned, the caller gets told which one
/// it was.
pub fn extract_numbers(source: &[u8]) -> Extraction {
    let mut tokenizer = Tokenizer::new(source);
    let mut values = Vec::new();
    loop {
        let token = tokenizer.next_token();
        match token.kind {
            TokenKind::Integer | TokenKind::Double => values.push(parse_double(token.text)),
            TokenKind::EndOfInput => {
                return Extraction {
                    values,
                    stop: Stop::EndOfInput,
                }
            }
            TokenKind::Undefined => {
                warn!(offset = token.offset, text = ?token.as_str(), "stopped on malformed token");
                return Extraction {
                    values,
                    stop: Stop::Malformed {
                        offset: token.offset,
                    },
                };
            }
            _ => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub aggregate: Aggregate,
    /// Numeric values dropped because they didn't complete a group of four.
    pub leftover: usize,
    pub stop: Stop,
}

impl Summary {
    pub fn pairs(&self) -> usize {
        self.aggregate.count
    }

    pub fn mean(&self) -> Option<f64> {
        self.aggregate.mean()
    }
}

pub fn summarize_extraction(extraction: &Extraction, radius: f64) -> Summary {
    let mut aggregate = Aggregate::default();
    for pair in extraction.pairs() {
        aggregate.add(distance::naive(&pair, radius));
    }

    let leftover = extraction.leftover();
    if leftover != 0 {
        debug!(leftover, "dropped values that did not complete a pair");
    }

    Summary {
        aggregate,
        leftover,
        stop: extraction.stop,
    }
}

/// Recomputes the distance of every complete group of four numbers in the
/// buffer and accumulates them.
pub fn summarize(source: &[u8], radius: f64) -> Summary {
    summarize_extraction(&extract_numbers(source), radius)
}
