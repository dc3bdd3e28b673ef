//! Compile-fail tests to verify error messages
//!
//! These tests ensure that unsupported shapes and attribute combinations
//! produce clear errors pointing at the offending item.

#[test]
fn ui_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/*.rs");
}
