use crate::Value;
use crate::operation::FieldSelection;
use crate::operation::Raw;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::SelectionSetBuildError;
use proptest::prelude::*;

type Result<T> = std::result::Result<T, SelectionSetBuildError>;

fn field_names(selection_set: &SelectionSet) -> Vec<&str> {
    selection_set.iter()
        .filter_map(Selection::as_field)
        .map(FieldSelection::name)
        .collect()
}

mod basics {
    use super::*;

    #[test]
    fn new_set_is_empty() {
        let set = SelectionSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.last().is_none());
        assert_eq!(set, SelectionSet::default());
    }

    #[test]
    fn fields_append_in_order() {
        let set = SelectionSet::new().field("foo").field("bar").field("baz");
        assert_eq!(set.len(), 3);
        assert_eq!(field_names(&set), vec!["foo", "bar", "baz"]);
        assert_eq!(set.last().and_then(Selection::as_field).map(FieldSelection::name), Some("baz"));
    }

    #[test]
    fn args_apply_to_last_field() -> Result<()> {
        let set = SelectionSet::new()
            .field("foo")
            .field("bar")
            .args([("x", Value::from(1)), ("y", Value::from("two"))])?;

        let fields: Vec<&FieldSelection> = set.iter().filter_map(Selection::as_field).collect();
        assert!(fields[0].arguments().is_empty());
        assert_eq!(
            fields[1].arguments().iter().collect::<Vec<_>>(),
            vec![
                (&"x".to_string(), &Value::Int(1)),
                (&"y".to_string(), &Value::String("two".to_string())),
            ],
        );

        Ok(())
    }

    #[test]
    fn repeated_arg_replaces_value_in_place() -> Result<()> {
        let set = SelectionSet::new()
            .field("dog")
            .arg("id", "1")?
            .arg("first", 5)?
            .arg("id", "2")?;

        let dog = set.last().and_then(Selection::as_field).expect("last is a field");
        assert_eq!(dog.arguments().keys().collect::<Vec<_>>(), vec!["id", "first"]);
        assert_eq!(dog.arguments()["id"], Value::from("2"));

        Ok(())
    }

    #[test]
    fn alias_applies_to_next_field_only() {
        let set = SelectionSet::new()
            .alias("goodBoy")
            .field("dog")
            .field("cat");

        let fields: Vec<&FieldSelection> = set.iter().filter_map(Selection::as_field).collect();
        assert_eq!(fields[0].alias(), Some("goodBoy"));
        assert_eq!(fields[0].selected_name(), "goodBoy");
        assert_eq!(fields[1].alias(), None);
        assert_eq!(fields[1].selected_name(), "cat");
    }

    #[test]
    fn nest_attaches_to_last_field() -> Result<()> {
        let set = SelectionSet::new()
            .field("dog")
            .nest(SelectionSet::new().field("name").field("barkVolume"))?;

        let dog = set.last().and_then(Selection::as_field).expect("last is a field");
        let sub = dog.selection_set().expect("dog has a sub-selection");
        assert_eq!(field_names(sub), vec!["name", "barkVolume"]);

        Ok(())
    }

    #[test]
    fn raw_selections_are_kept_verbatim() -> Result<()> {
        let set = SelectionSet::new()
            .field("dog")
            .nest(Raw::new("name\nnickname"))?
            .raw("... on Query { __typename }");

        assert_eq!(set.len(), 2);
        assert!(matches!(
            set.last(),
            Some(Selection::Raw(raw)) if raw.text() == "... on Query { __typename }",
        ));

        Ok(())
    }

    #[test]
    fn collects_from_selections() {
        let set: SelectionSet = vec![
            Selection::from(FieldSelection::new("a")),
            Selection::from(Raw::new("b")),
        ].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set, SelectionSet::new().field("a").raw("b"));
    }

    #[test]
    fn equality_is_structural() {
        let left = SelectionSet::new().field("a").field("b");
        let right = SelectionSet::new().field("a").field("b");
        assert_eq!(left, right);
        assert!(!left.shares_prefix_with(&right));
        assert_ne!(left, SelectionSet::new().field("a"));
        assert_ne!(left, SelectionSet::new().field("b").field("a"));
    }
}

mod sharing {
    use super::*;

    #[test]
    fn extending_a_base_leaves_it_unchanged() {
        let base = SelectionSet::new().field("a").field("b");
        let snapshot = base.clone();

        let with_c = base.field("c");
        let with_d = base.field("d");

        assert_eq!(base, snapshot);
        assert_eq!(field_names(&base), vec!["a", "b"]);
        assert_eq!(field_names(&with_c), vec!["a", "b", "c"]);
        assert_eq!(field_names(&with_d), vec!["a", "b", "d"]);
        assert!(with_c.shares_prefix_with(&base));
        assert!(with_d.shares_prefix_with(&base));
    }

    #[test]
    fn replacing_the_last_field_shares_everything_before_it() -> Result<()> {
        let prefix = SelectionSet::new().field("a");
        let base = prefix.field("b");

        let with_args = base.arg("x", 1)?;
        assert!(with_args.shares_prefix_with(&prefix));
        assert!(!with_args.shares_prefix_with(&base));
        assert!(base.last().and_then(Selection::as_field).is_some_and(|b| b.arguments().is_empty()));

        Ok(())
    }

    #[test]
    fn long_sets_drop_without_recursing() {
        let set = (0..100_000)
            .fold(SelectionSet::new(), |set, idx| set.field(format!("f{idx}")));
        let branch = set.field("last");
        assert_eq!(branch.len(), 100_001);

        drop(set);
        assert_eq!(branch.len(), 100_001);
        assert_eq!(branch.last().and_then(Selection::as_field).map(FieldSelection::name), Some("last"));
        drop(branch);
    }

    proptest! {
        #[test]
        fn branches_never_observe_each_other(
            base_names in prop::collection::vec("[a-z]{1,8}", 0..8),
            left_names in prop::collection::vec("[a-z]{1,8}", 1..4),
            right_names in prop::collection::vec("[a-z]{1,8}", 1..4),
        ) {
            let base = base_names.iter()
                .fold(SelectionSet::new(), |set, name| set.field(name.as_str()));
            let snapshot: Vec<String> = field_names(&base).into_iter().map(str::to_string).collect();

            let left = left_names.iter().fold(base.clone(), |set, name| set.field(name.as_str()));
            let right = right_names.iter().fold(base.clone(), |set, name| set.field(name.as_str()));

            prop_assert_eq!(field_names(&base), snapshot.iter().map(String::as_str).collect::<Vec<_>>());
            prop_assert_eq!(left.len(), base_names.len() + left_names.len());
            prop_assert_eq!(right.len(), base_names.len() + right_names.len());
            prop_assert!(left.shares_prefix_with(&base));
            prop_assert!(right.shares_prefix_with(&base));
        }
    }
}

mod errors {
    use super::*;

    #[test]
    fn args_on_empty_set() {
        assert_eq!(
            SelectionSet::new().arg("x", 1),
            Err(SelectionSetBuildError::EmptySelectionSet),
        );
    }

    #[test]
    fn nest_on_empty_set() {
        assert_eq!(
            SelectionSet::new().nest(SelectionSet::new().field("a")),
            Err(SelectionSetBuildError::EmptySelectionSet),
        );
    }

    #[test]
    fn nest_empty_set() {
        assert_eq!(
            SelectionSet::new().field("a").nest(SelectionSet::new()),
            Err(SelectionSetBuildError::EmptySubSelection),
        );
    }

    #[test]
    fn args_after_raw() {
        assert_eq!(
            SelectionSet::new().field("a").raw("b").arg("x", 1),
            Err(SelectionSetBuildError::LastSelectionNotAField),
        );
    }
}
