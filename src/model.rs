// src/model.rs - Data types exchanged with the item service

use serde::{Deserialize, Serialize};

/// Smallest seller id the service accepts.
pub const SELLER_ID_MIN: u64 = 111_111;
/// Largest seller id the service accepts.
pub const SELLER_ID_MAX: u64 = 999_999;

/// An item listing as returned by the service. All fields are required in
/// every representation the service produces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: String,
    #[serde(rename = "sellerID")]
    pub seller_id: u64,
    pub name: String,
    pub price: i64,
    pub likes: i64,
    #[serde(rename = "viewCount")]
    pub view_count: i64,
    pub contacts: i64,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Payload submitted to the create-item endpoints. The service assigns
/// `id` and `createdAt`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemDraft {
    #[serde(rename = "sellerID")]
    pub seller_id: u64,
    pub name: String,
    pub price: i64,
    pub likes: i64,
    #[serde(rename = "viewCount")]
    pub view_count: i64,
    pub contacts: i64,
}

impl ItemDraft {
    /// A draft with zeroed engagement counters.
    pub fn new(seller_id: u64, name: impl Into<String>, price: i64) -> Self {
        Self {
            seller_id,
            name: name.into(),
            price,
            likes: 0,
            view_count: 0,
            contacts: 0,
        }
    }

    pub fn seller_id_in_range(&self) -> bool {
        (SELLER_ID_MIN..=SELLER_ID_MAX).contains(&self.seller_id)
    }
}

/// One snapshot of an item's engagement counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Statistic {
    pub likes: i64,
    #[serde(rename = "viewCount")]
    pub view_count: i64,
    pub contacts: i64,
}
