mod traverser_tests;
