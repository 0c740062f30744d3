mod locale_tests;
mod session_tests;
