use std::borrow::Cow;

use crate::error::TokenListError;
use crate::parser::ClassParser;
use crate::token_list::TokenList;

/// Every input shape accepted by the constructor, `add`, `remove` and `reset`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Names<'a> {
    /// No names at all
    #[default]
    Empty,
    /// A single whitespace-delimited class attribute: "foo bar"
    Text(Cow<'a, str>),
    /// An ordered sequence; each item is trimmed but not split
    Seq(Vec<Cow<'a, str>>),
    /// Another list, read by value
    List(&'a TokenList),
}

impl<'a> Names<'a> {
    /// Turn the input into an ordered sequence of trimmed, non-empty tokens.
    ///
    /// Duplicates survive normalization; the receiving list drops them on insert.
    pub fn normalize(self) -> Result<Vec<Cow<'a, str>>, TokenListError> {
        match self {
            Names::Empty => Ok(Vec::new()),
            Names::Text(Cow::Borrowed(text)) => Ok(ClassParser::split(text)?
                .into_iter()
                .map(Cow::Borrowed)
                .collect()),
            Names::Text(Cow::Owned(text)) => Ok(ClassParser::split(&text)?
                .into_iter()
                .map(|name| Cow::Owned(name.to_owned()))
                .collect()),
            Names::Seq(items) => Ok(items.into_iter().filter_map(trimmed).collect()),
            Names::List(list) => Ok(list.iter().map(Cow::Borrowed).collect()),
        }
    }
}

/// Trim a candidate token, dropping it if nothing is left.
pub(crate) fn trimmed(name: Cow<'_, str>) -> Option<Cow<'_, str>> {
    let name = match name {
        Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
        Cow::Owned(s) if s.trim().len() == s.len() => Cow::Owned(s),
        Cow::Owned(s) => Cow::Owned(s.trim().to_owned()),
    };
    (!name.is_empty()).then_some(name)
}

impl From<()> for Names<'_> {
    fn from((): ()) -> Self {
        Names::Empty
    }
}

impl<'a> From<&'a str> for Names<'a> {
    fn from(text: &'a str) -> Self {
        Names::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Names<'a> {
    fn from(text: &'a String) -> Self {
        Names::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for Names<'_> {
    fn from(text: String) -> Self {
        Names::Text(Cow::Owned(text))
    }
}

impl<'a> From<&'a TokenList> for Names<'a> {
    fn from(list: &'a TokenList) -> Self {
        Names::List(list)
    }
}

impl<'a, T: Into<Names<'a>>> From<Option<T>> for Names<'a> {
    fn from(names: Option<T>) -> Self {
        names.map_or(Names::Empty, Into::into)
    }
}

impl<'a, S: Into<Cow<'a, str>>> From<Vec<S>> for Names<'a> {
    fn from(items: Vec<S>) -> Self {
        Names::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<'a, S: AsRef<str>> From<&'a [S]> for Names<'a> {
    fn from(items: &'a [S]) -> Self {
        Names::Seq(items.iter().map(|s| Cow::Borrowed(s.as_ref())).collect())
    }
}

impl<'a, S: Into<Cow<'a, str>>, const N: usize> From<[S; N]> for Names<'a> {
    fn from(items: [S; N]) -> Self {
        Names::Seq(items.into_iter().map(Into::into).collect())
    }
}
