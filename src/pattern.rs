use nom::branch::alt;
use nom::character::complete::{char, satisfy};
use nom::combinator::{all_consuming, map, value};
use nom::multi::many1;
use nom::{Finish, IResult};

use crate::alphabet::{get_idx, WILDCARD};
use crate::error::PatternError;

/// A fixed-length template such as `c_t`, one element per position.
#[derive(Debug, PartialEq, Clone)]
pub struct Pattern {
    pub(crate) elements: Vec<Element>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Element {
    Literal(char),
    Wildcard,
}

impl Element {
    fn accepts(&self, c: char) -> bool {
        match self {
            Element::Literal(l) => *l == c,
            Element::Wildcard => get_idx(c).is_some(),
        }
    }
}

fn wildcard(input: &str) -> IResult<&str, Element> {
    value(Element::Wildcard, char(WILDCARD))(input)
}

fn literal(input: &str) -> IResult<&str, Element> {
    map(satisfy(|c| get_idx(c).is_some()), Element::Literal)(input)
}

fn element(input: &str) -> IResult<&str, Element> {
    alt((wildcard, literal))(input)
}

impl Pattern {
    pub fn parse(input: &str) -> Result<Pattern, PatternError> {
        if input.is_empty() {
            return Err(PatternError::Empty);
        }
        match all_consuming(many1(element))(input).finish() {
            Ok((_, elements)) => Ok(Pattern { elements }),
            Err(e) => {
                let position = input[..input.len() - e.input.len()].chars().count();
                // all_consuming only fails on a character neither parser accepts
                let found = e.input.chars().next().unwrap_or(WILDCARD);
                Err(PatternError::InvalidCharacter { found, position })
            }
        }
    }

    /// Literal characters before the first wildcard; the whole pattern if it has none.
    pub fn literal_prefix(&self) -> String {
        self.elements.iter()
            .map_while(|e| match e {
                Element::Literal(c) => Some(*c),
                Element::Wildcard => None,
            })
            .collect()
    }

    pub fn matches(&self, word: &str) -> bool {
        word.chars().count() == self.elements.len()
            && word.chars().zip(&self.elements).all(|(c, e)| e.accepts(c))
    }
}
