//! An ordered, de-duplicated list of class names, modelled on the DOM's
//! `DOMTokenList` as exposed through `element.classList`.
//!
//! ```
//! use classlist::TokenList;
//!
//! let mut classes = TokenList::from_values("foo bar")?;
//! classes.add("baz")?;
//! assert!(!classes.toggle("bar", None));
//! assert_eq!(classes.value(), "foo baz");
//! # Ok::<(), classlist::TokenListError>(())
//! ```

pub mod error;
pub mod names;
pub mod parser;
pub mod token_list;

pub use error::TokenListError;
pub use names::Names;
pub use token_list::TokenList;
