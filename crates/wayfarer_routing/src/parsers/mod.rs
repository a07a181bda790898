use std::{fs, path::Path};

use crate::error::ParseError;

pub mod graph_parser;
pub mod terrain_parser;

pub trait TextParser {
    type Output;

    fn parse_str(&self, input: &str) -> Result<Self::Output, ParseError>;

    fn parse<P: AsRef<Path>>(&self, file: P) -> Result<Self::Output, ParseError> {
        let input = fs::read_to_string(file)?;
        self.parse_str(&input)
    }
}
