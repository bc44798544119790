mod keyword_tests;
