use crate::domain::a001_store::StoreId;
use crate::domain::a002_product::ProductId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Achievement event: "this store now carries this product".
///
/// Sales form an append-only log with no identity of their own; the coverage
/// engine only cares that at least one record exists for a (store, product)
/// pair. Quantity is informational. There is no uniqueness constraint at the
/// data level; duplicates are deduplicated at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    #[serde(rename = "storeId")]
    pub store_id: StoreId,

    #[serde(rename = "productId")]
    pub product_id: ProductId,

    pub quantity: i32,

    pub date: DateTime<Utc>,
}

impl Sale {
    pub fn log(store_id: StoreId, product_id: ProductId, quantity: i32) -> Self {
        Self {
            store_id,
            product_id,
            quantity,
            date: Utc::now(),
        }
    }

    pub fn matches_pair(&self, store_id: StoreId, product_id: ProductId) -> bool {
        self.store_id == store_id && self.product_id == product_id
    }
}

/// Remove every sale record for the given (store, product) pair.
///
/// The checklist model has no notion of partial quantities: unchecking a
/// product clears the whole pair.
pub fn delete_pair(sales: &mut Vec<Sale>, store_id: StoreId, product_id: ProductId) {
    sales.retain(|sale| !sale.matches_pair(store_id, product_id));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_pair_removes_all_duplicates() {
        let store = StoreId::new_v4();
        let other_store = StoreId::new_v4();
        let product = ProductId::new_v4();

        let mut sales = vec![
            Sale::log(store, product, 1),
            Sale::log(store, product, 3),
            Sale::log(other_store, product, 1),
        ];
        delete_pair(&mut sales, store, product);

        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].store_id, other_store);
    }
}
