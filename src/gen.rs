// src/gen.rs - Random test data generators

use crate::model::{SELLER_ID_MIN, SELLER_ID_MAX};

/// Prefix applied to every generated item name.
pub const NAME_PREFIX: &str = "test-";

/// Length of the random suffix in generated item names.
pub const NAME_SUFFIX_LEN: usize = 12;

/// A random seller id within the range the service accepts.
pub fn seller_id() -> u64 {
    fastrand::u64(SELLER_ID_MIN..=SELLER_ID_MAX)
}

/// A random item name: the fixed prefix plus 12 lowercase ASCII letters.
/// No uniqueness guarantee beyond probabilistic collision avoidance.
pub fn item_name() -> String {
    let mut name = String::with_capacity(NAME_PREFIX.len() + NAME_SUFFIX_LEN);
    name.push_str(NAME_PREFIX);
    for _ in 0..NAME_SUFFIX_LEN {
        name.push(fastrand::lowercase());
    }
    name
}

/// An id that cannot belong to any stored item, salted with the current
/// timestamp so repeated runs do not collide with earlier fixtures.
pub fn nonexistent_item_id() -> String {
    let unix_secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("non-existent-{}", unix_secs)
}
