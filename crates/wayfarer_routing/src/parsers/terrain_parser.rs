use crate::{error::ParseError, terrain::TerrainMap};

use super::TextParser;

/// Reads terrains drawn one row per line, `#` for a blocked cell and `.`
/// for an open one. Trailing whitespace and blank lines are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerrainParser;

impl TextParser for TerrainParser {
    type Output = TerrainMap;

    fn parse_str(&self, input: &str) -> Result<TerrainMap, ParseError> {
        let mut rows = Vec::new();

        for (index, line) in input.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }

            let row = line
                .chars()
                .enumerate()
                .map(|(column, c)| match c {
                    '#' => Ok(true),
                    '.' => Ok(false),
                    found => Err(ParseError::InvalidTerrain {
                        line: index + 1,
                        column: column + 1,
                        found,
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;

            rows.push(row);
        }

        Ok(TerrainMap::new(&rows)?)
    }
}
