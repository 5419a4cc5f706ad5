use flagwire::flag_names;

flagwire::flag_set! {
    /// Permissions fixture with an aggregate constant.
    pub struct Permissions(u8);
}

#[flag_names]
impl Permissions {
    pub const READ: Permissions = Permissions(1 << 0);
    pub const WRITE: Permissions = Permissions(1 << 1);
    pub const ALL: Permissions = Permissions(0b11);
}

fn main() {
    let wire = serde_json::to_string(&(Permissions::READ | Permissions::WRITE)).unwrap();
    assert_eq!(wire, r#"["ALL"]"#);

    let restored: Permissions = serde_json::from_str(&wire).unwrap();
    assert_eq!(restored, Permissions::ALL);
}
