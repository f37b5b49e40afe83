mod selection_set_validator_tests;
