use crate::operation::InlineFragment;
use crate::operation::SelectionSet;
use crate::test;
use crate::validation;
use crate::validation::ValidationError;
use crate::validation::ValidationPathSegment;
use proptest::prelude::*;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

mod basics {
    use super::*;

    #[test]
    fn valid_set_is_returned_unchanged() -> Result<()> {
        let schema = test::dog_schema();
        let set = SelectionSet::new()
            .field("dog")
            .arg("id", "1")?
            .nest(
                SelectionSet::new()
                    .field("name")
                    .field("owner")
                    .nest(SelectionSet::new().field("name").field("__typename"))?,
            )?
            .field("me");

        let validated = validation::validate(&schema, schema.query_type(), &set)?;
        assert!(std::ptr::eq(validated, &set));

        Ok(())
    }

    #[test]
    fn raw_selections_are_not_validated() {
        let schema = test::dog_schema();
        let set = SelectionSet::new().field("me").raw("anything { at all }");
        assert!(validation::validate(&schema, schema.query_type(), &set).is_ok());
    }

    #[test]
    fn object_fields_without_sub_selection_are_allowed() {
        let schema = test::dog_schema();
        let set = SelectionSet::new().field("me");
        assert!(validation::validate(&schema, schema.query_type(), &set).is_ok());
    }

    #[test]
    fn union_accepts_typename_and_fragments() -> Result<()> {
        let schema = test::dog_schema();
        let set = SelectionSet::new()
            .field("search")
            .arg("term", "rex")?
            .nest(
                SelectionSet::new()
                    .field("__typename")
                    .push(InlineFragment::new(&schema, "Dog", SelectionSet::new().field("barkVolume"))?)
                    .push(InlineFragment::new(&schema, "Human", SelectionSet::new().field("name"))?),
            )?;
        assert!(validation::validate(&schema, schema.query_type(), &set).is_ok());

        Ok(())
    }

    #[test]
    fn interface_fields_and_fragments() -> Result<()> {
        let schema = test::dog_schema();
        let set = SelectionSet::new()
            .field("node")
            .arg("id", "1")?
            .nest(
                SelectionSet::new()
                    .field("id")
                    .push(InlineFragment::new(&schema, "Dog", SelectionSet::new().field("name"))?),
            )?;
        assert!(validation::validate(&schema, schema.query_type(), &set).is_ok());

        Ok(())
    }
}

mod errors {
    use super::*;

    #[test]
    fn no_such_field_reports_type_and_field() {
        let schema = test::dog_schema();
        let dog = schema.get_type("Dog").expect("Dog exists");
        let set = SelectionSet::new().field("name").field("foo");

        let err = validation::validate(&schema, dog, &set).unwrap_err();
        assert_eq!(err, ValidationError::Selection {
            on: "Dog".to_string(),
            field: "foo".to_string(),
            error: Box::new(ValidationError::NoSuchField),
        });
        assert_eq!(err.to_string(), "In `Dog.foo`: No such field");
    }

    #[test]
    fn nested_errors_carry_full_path() -> Result<()> {
        let schema = test::dog_schema();
        let set = SelectionSet::new()
            .field("dog")
            .arg("id", "1")?
            .nest(
                SelectionSet::new()
                    .field("owner")
                    .nest(SelectionSet::new().field("dogs").nest(SelectionSet::new().field("purr"))?)?,
            )?;

        let err = validation::validate(&schema, schema.query_type(), &set).unwrap_err();
        assert_eq!(err.path(), vec![
            ValidationPathSegment::Field { on: "Query", field: "dog" },
            ValidationPathSegment::Field { on: "Dog", field: "owner" },
            ValidationPathSegment::Field { on: "Human", field: "dogs" },
            ValidationPathSegment::Field { on: "Dog", field: "purr" },
        ]);
        assert_eq!(err.root_cause(), &ValidationError::NoSuchField);
        assert_eq!(
            err.path().iter().map(ToString::to_string).collect::<Vec<_>>().join(" > "),
            "Query.dog > Dog.owner > Human.dogs > Dog.purr",
        );

        Ok(())
    }

    #[test]
    fn selections_on_leaf_field() -> Result<()> {
        let schema = test::dog_schema();
        let set = SelectionSet::new()
            .field("me")
            .nest(SelectionSet::new().field("name").nest(SelectionSet::new().field("length"))?)?;

        let err = validation::validate(&schema, schema.query_type(), &set).unwrap_err();
        assert_eq!(err.root_cause(), &ValidationError::SelectionsNotSupported);
        assert_eq!(err.path(), vec![
            ValidationPathSegment::Field { on: "Query", field: "me" },
            ValidationPathSegment::Field { on: "Human", field: "name" },
        ]);

        Ok(())
    }

    #[test]
    fn validating_against_a_leaf_type() {
        let schema = test::dog_schema();
        let string_type = schema.get_type("String").expect("String exists");
        let set = SelectionSet::new().field("length");
        assert_eq!(
            validation::validate(&schema, string_type, &set),
            Err(ValidationError::SelectionsNotSupported),
        );
    }

    #[test]
    fn empty_root_selection() {
        let schema = test::dog_schema();
        assert_eq!(
            validation::validate(&schema, schema.query_type(), &SelectionSet::new()),
            Err(ValidationError::EmptySelectionSet),
        );
    }

    #[test]
    fn plain_field_on_union() -> Result<()> {
        let schema = test::dog_schema();
        let set = SelectionSet::new()
            .field("search")
            .arg("term", "rex")?
            .nest(SelectionSet::new().field("name"))?;

        let err = validation::validate(&schema, schema.query_type(), &set).unwrap_err();
        assert_eq!(err.root_cause(), &ValidationError::NoSuchField);
        assert_eq!(err.path().last(), Some(&ValidationPathSegment::Field {
            on: "SearchResult",
            field: "name",
        }));

        Ok(())
    }

    #[test]
    fn union_typename_takes_no_arguments() -> Result<()> {
        let schema = test::dog_schema();
        let set = SelectionSet::new()
            .field("search")
            .arg("term", "rex")?
            .nest(SelectionSet::new().field("__typename").arg("x", 1)?)?;

        let err = validation::validate(&schema, schema.query_type(), &set).unwrap_err();
        assert_eq!(err.root_cause(), &ValidationError::NoSuchArgument { name: "x".to_string() });

        Ok(())
    }

    #[test]
    fn inline_fragment_errors_are_wrapped() -> Result<()> {
        let schema = test::dog_schema();
        let fragment = InlineFragment::new(&schema, "Dog", SelectionSet::new().field("name"))?;
        // A fragment valid for `Dog` is re-validated where it is used.
        let set = SelectionSet::new()
            .field("node")
            .arg("id", "1")?
            .nest(SelectionSet::new().push(fragment).raw("id"))?;
        assert!(validation::validate(&schema, schema.query_type(), &set).is_ok());

        let schema_without_dog_name = test::schema_with_types(vec![
            test::object_type("Dog", &[], vec![
                test::field("id", test::scalar_ref("ID"), vec![]),
            ]),
            test::object_type("Query", &[], vec![
                test::field("dog", test::named("OBJECT", "Dog"), vec![]),
            ]),
        ]);
        let fragment = InlineFragment::new(&schema, "Dog", SelectionSet::new().field("name"))?;
        let set = SelectionSet::new().field("dog").nest(SelectionSet::new().push(fragment))?;
        let err = validation::validate(
            &schema_without_dog_name,
            schema_without_dog_name.query_type(),
            &set,
        ).unwrap_err();
        assert_eq!(err.path(), vec![
            ValidationPathSegment::Field { on: "Query", field: "dog" },
            ValidationPathSegment::InlineFragment { on: "Dog" },
            ValidationPathSegment::Field { on: "Dog", field: "name" },
        ]);
        assert_eq!(err.path()[1].to_string(), "... on Dog");

        Ok(())
    }

    proptest! {
        #[test]
        fn unknown_field_always_fails(name in "zz[a-z]{0,6}") {
            let schema = test::dog_schema();
            let dog = schema.get_type("Dog").expect("Dog exists");
            let set = SelectionSet::new().field("name").field(name.as_str());

            let err = validation::validate(&schema, dog, &set).unwrap_err();
            prop_assert_eq!(err.root_cause(), &ValidationError::NoSuchField);
            prop_assert_eq!(
                err.path(),
                vec![ValidationPathSegment::Field { on: "Dog", field: name.as_str() }],
            );
        }
    }
}
