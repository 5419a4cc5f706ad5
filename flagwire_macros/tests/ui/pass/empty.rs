use flagwire::flag_names;

flagwire::flag_set! {
    /// No flag constants; the generated routines are inert.
    pub struct NoFlags(u8);
}

#[flag_names]
impl NoFlags {}

fn main() {
    assert_eq!(serde_json::to_string(&NoFlags::empty()).unwrap(), "[]");
    assert!(serde_json::from_str::<NoFlags>(r#"["anything"]"#).is_err());
}
