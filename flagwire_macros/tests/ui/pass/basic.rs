use flagwire::flag_names;

flagwire::flag_set! {
    /// Styles fixture.
    pub struct Styles(u32);
}

#[flag_names]
impl Styles {
    pub const BOLD: Styles = Styles(1 << 0);
    pub const ITALIC: Styles = Styles(1 << 1);
}

fn main() {
    let wire = serde_json::to_string(&(Styles::BOLD | Styles::ITALIC)).unwrap();
    assert_eq!(wire, r#"["BOLD","ITALIC"]"#);
}
