mod classify_tests;
mod test_utils;
