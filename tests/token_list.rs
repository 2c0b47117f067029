use classlist::{TokenList, TokenListError};
use rstest::rstest;

fn values(list: &TokenList) -> Vec<&str> {
    list.iter().collect()
}

#[test]
fn test_class_list_scenario() -> Result<(), TokenListError> {
    let mut list = TokenList::from_values("foo bar")?;

    list.add("baz")?;
    assert_eq!(values(&list), ["foo", "bar", "baz"]);

    assert!(!list.toggle("bar", None));
    assert_eq!(values(&list), ["foo", "baz"]);

    assert!(list.toggle("qux", None));
    assert_eq!(values(&list), ["foo", "baz", "qux"]);

    list.replace("qux", "bar")?;
    assert_eq!(values(&list), ["foo", "baz", "bar"]);

    assert_eq!(list.value(), "foo baz bar");
    Ok(())
}

#[rstest]
#[case("", &[])]
#[case("   ", &[])]
#[case("  a   b  a ", &["a", "b"])]
#[case("a\tb\nc", &["a", "b", "c"])]
#[case("b a b a", &["b", "a"])]
fn test_normalization(#[case] input: &str, #[case] expected: &[&str]) {
    let list = TokenList::from_values(input).unwrap();
    assert_eq!(values(&list), expected);
}

#[rstest]
#[case("a")]
#[case("foo bar baz")]
#[case("btn btn-primary col-md-6")]
fn test_round_trip(#[case] input: &str) {
    let list = TokenList::from_values(input).unwrap();
    assert_eq!(list.value(), input);
}

#[rstest]
#[case("x")]
#[case("x y")]
#[case("  y ")]
fn test_add_is_idempotent(#[case] names: &str) {
    let mut once = TokenList::from_values("a x").unwrap();
    once.add(names).unwrap();
    let mut twice = once.clone();
    twice.add(names).unwrap();
    assert_eq!(once, twice);
}

#[rstest]
#[case("a b", "a")]
#[case("a b", "c")]
#[case("", "c")]
fn test_toggle_twice_restores_membership(#[case] initial: &str, #[case] name: &str) {
    let mut list = TokenList::from_values(initial).unwrap();
    let was_present = list.contains(name);

    assert_eq!(list.toggle(name, None), !was_present);
    assert_eq!(list.toggle(name, None), was_present);
    assert_eq!(list.contains(name), was_present);
}

#[rstest]
#[case("", true)]
#[case("x", true)]
#[case("", false)]
#[case("x", false)]
fn test_toggle_force(#[case] initial: &str, #[case] force: bool) {
    let mut list = TokenList::from_values(initial).unwrap();
    assert_eq!(list.toggle("x", Some(force)), force);
    assert_eq!(list.contains("x"), force);
}

#[test]
fn test_replace_preserves_position() -> Result<(), TokenListError> {
    let mut list = TokenList::from_values(["a", "b", "c"])?;
    list.replace("b", "z")?;
    assert_eq!(values(&list), ["a", "z", "c"]);
    Ok(())
}

// Renaming onto an existing token would leave two entries with the same value,
// so it is refused and the list keeps its previous contents.
#[test]
fn test_replace_collision_is_rejected() {
    let mut list = TokenList::from_values("a b c").unwrap();
    let result = list.replace("a", "c");
    assert!(matches!(result, Err(TokenListError::Duplicate { .. })));
    assert_eq!(values(&list), ["a", "b", "c"]);
}

#[test]
fn test_remove_absent_is_noop() -> Result<(), TokenListError> {
    let mut list = TokenList::from_values("a b c")?;
    list.remove("nonexistent")?;
    assert_eq!(values(&list), ["a", "b", "c"]);
    Ok(())
}

#[rstest]
#[case(0, Some("a"))]
#[case(1, Some("b"))]
#[case(2, Some("c"))]
#[case(3, None)]
#[case(usize::MAX, None)]
fn test_item_bounds(#[case] index: usize, #[case] expected: Option<&str>) {
    let list = TokenList::from_values("a b c").unwrap();
    assert_eq!(list.item(index), expected);
}

#[test]
fn test_length_matches_values() -> Result<(), TokenListError> {
    let mut list = TokenList::new();
    assert_eq!(list.len(), list.values().len());

    list.add("a b c a")?;
    assert_eq!(list.len(), list.values().len());

    list.remove("b")?;
    list.toggle("d", None);
    assert_eq!(list.len(), list.values().len());
    assert_eq!(list.len(), 3);
    Ok(())
}

#[test]
fn test_add_and_remove_accept_other_list() -> Result<(), TokenListError> {
    let extra = TokenList::from_values("c d")?;
    let mut list = TokenList::from_values("a b c")?;

    list.add(&extra)?;
    assert_eq!(values(&list), ["a", "b", "c", "d"]);

    list.remove(&extra)?;
    assert_eq!(values(&list), ["a", "b"]);
    assert_eq!(values(&extra), ["c", "d"]);
    Ok(())
}

#[test]
fn test_reset_accepts_absent_input() -> Result<(), TokenListError> {
    let mut list = TokenList::from_values("a b")?;
    list.reset(None::<&str>)?;
    assert!(list.is_empty());
    list.reset(vec![" c ", "d"])?;
    assert_eq!(list.value(), "c d");
    Ok(())
}

#[test]
fn test_serde_uses_joined_string() {
    let list = TokenList::from_values("foo bar").unwrap();
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, r#""foo bar""#);

    let parsed: TokenList = serde_json::from_str(r#""  bar foo  bar ""#).unwrap();
    assert_eq!(values(&parsed), ["bar", "foo"]);
}

#[test]
fn test_owned_string_input() -> Result<(), TokenListError> {
    let classes = String::from("card  card-body");
    let mut list = TokenList::from_values(classes)?;

    list.add(String::from("active card"))?;
    assert_eq!(values(&list), ["card", "card-body", "active"]);

    list.remove(String::from(" card-body "))?;
    assert_eq!(list.value(), "card active");
    Ok(())
}
