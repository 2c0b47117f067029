use pest::{Parser, iterators::Pairs};
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "src/class.pest"]
pub struct ClassParser;

impl ClassParser {
    /// Split a class attribute into its class names, in order of appearance.
    ///
    /// Duplicates are kept; deduplication happens when names are inserted
    /// into a [`TokenList`](crate::TokenList).
    pub fn split(input: &str) -> Result<Vec<&str>, pest::error::Error<Rule>> {
        let mut pairs: Pairs<'_, Rule> = ClassParser::parse(Rule::attribute, input)?;
        let Some(attribute) = pairs.next() else {
            return Ok(Vec::new());
        };

        Ok(attribute
            .into_inner()
            .filter(|p| p.as_rule() == Rule::class_name)
            .map(|p| p.as_str())
            .collect())
    }
}
