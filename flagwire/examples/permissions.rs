//! Declare a flag type, push a value across the wire, read it back.

use flagwire::flag_names;

flagwire::flag_set! {
    /// What a session is allowed to do.
    pub struct Permissions(u8);
}

#[flag_names]
impl Permissions {
    pub const READ: Permissions = Permissions(1 << 0);
    pub const WRITE: Permissions = Permissions(1 << 1);
    pub const EXECUTE: Permissions = Permissions(1 << 2);
    pub const ALL: Permissions = Permissions(0b111);
}

fn main() -> Result<(), serde_json::Error> {
    let granted = Permissions::READ | Permissions::WRITE;
    let wire = serde_json::to_string(&granted)?;
    println!("granted  -> {wire}");

    let restored: Permissions = serde_json::from_str(&wire)?;
    println!("restored -> {restored:?}");
    assert_eq!(restored, granted);

    println!("all      -> {}", serde_json::to_string(&Permissions::ALL)?);
    Ok(())
}
