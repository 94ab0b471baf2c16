// tests/helpers/test_data.rs - Test payload builders

use serde_json::{json, Value};

use itemprobe::{gen, ItemDraft, SELLER_ID_MIN};

/// A valid creation payload for a random seller.
pub fn valid_draft() -> ItemDraft {
    ItemDraft::new(gen::seller_id(), gen::item_name(), 100)
}

/// A valid creation payload pinned to one seller.
pub fn draft_for_seller(seller_id: u64, price: i64) -> ItemDraft {
    ItemDraft::new(seller_id, gen::item_name(), price)
}

/// A payload whose seller id sits one below the valid floor.
pub fn draft_below_seller_floor() -> Value {
    json!({
        "sellerID": SELLER_ID_MIN - 1,
        "name": gen::item_name(),
        "price": 10,
        "likes": 0,
        "viewCount": 0,
        "contacts": 0
    })
}

/// A payload with a non-numeric price, inexpressible as a typed draft.
pub fn draft_with_string_price() -> Value {
    json!({
        "sellerID": gen::seller_id(),
        "name": gen::item_name(),
        "price": "free",
        "likes": 0,
        "viewCount": 0,
        "contacts": 0
    })
}

/// The fixed scenario payload: seller 555555, name "test-abc123xyz000".
pub fn concrete_scenario_draft() -> ItemDraft {
    ItemDraft::new(555555, "test-abc123xyz000", 100)
}
