#[test]
fn phrases_macro_compiles() {
    let t = trybuild::TestCases::new();
    t.pass("tests/pass/*.rs");
}
