//! Storage key derivation.
//!
//! Per-account scoping in the key-value store is purely a key-naming
//! convention. These functions are the only place the convention lives;
//! no other code path may construct these keys.

/// Key holding an account's display name.
pub fn username_key(uid: &str) -> String {
    format!("user_{}_username", uid)
}

/// Key holding an account's saved-recipe collection blob.
pub fn saved_recipes_key(uid: &str) -> String {
    format!("user_{}_savedRecipes", uid)
}
