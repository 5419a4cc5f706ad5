use flagwire::flag_names;

flagwire::flag_set! {
    /// Fixture mixing recognized and unrecognized members.
    pub struct Permissions(u8);
}

#[flag_names]
impl Permissions {
    pub const READ: Permissions = Permissions(1 << 0);
    pub const WRITE: Self = Permissions(1 << 1);
    pub const READ_WRITE: Self = Self::READ.union(Self::WRITE);

    /// Not a flag; left alone by the expansion.
    pub fn is_writable(self) -> bool {
        self.contains(Self::WRITE)
    }
}

fn main() {
    // READ_WRITE fails both recognition tests and stays off the wire.
    let wire = serde_json::to_string(&Permissions::READ_WRITE).unwrap();
    assert_eq!(wire, r#"["READ","WRITE"]"#);
}
