mod introspection_schema_tests;
