//! A small in-memory stock ledger exposed through the four status forms.

use std::collections::HashMap;

use keystone_core::error::AppError;
use keystone_core::result::AppResult;
use keystone_core::shared::SharedState;
use keystone_core::traits::Service;

/// Item counts keyed by name.
#[derive(Debug, Default)]
pub struct Inventory {
    stock: SharedState<HashMap<String, u32>>,
}

impl Service for Inventory {
    fn name(&self) -> &'static str {
        "inventory"
    }
}

impl Inventory {
    /// Add `quantity` units of `item`. Returns the new count.
    pub fn restock(&self, item: String, quantity: u32) -> AppResult<u32> {
        if item.trim().is_empty() {
            return Err(AppError::validation("item name must not be empty"));
        }
        self.stock.write(|stock| {
            let count = stock.entry(item).or_insert(0);
            *count = count.saturating_add(quantity);
            *count
        })
    }

    /// Remove `quantity` units of `item`. Returns the remaining count.
    pub fn take(&self, item: String, quantity: u32) -> AppResult<u32> {
        self.stock.write(|stock| -> AppResult<u32> {
            let count = stock
                .get_mut(&item)
                .ok_or_else(|| AppError::not_found(format!("no stock of '{item}'")))?;
            if *count < quantity {
                return Err(AppError::conflict(format!(
                    "only {count} of '{item}' left, {quantity} requested"
                )));
            }
            *count -= quantity;
            Ok(*count)
        })?
    }

    /// Current count of `item`.
    pub fn count(&self, item: String) -> AppResult<u32> {
        self.stock
            .read(|stock| stock.get(&item).copied())?
            .ok_or_else(|| AppError::not_found(format!("no stock of '{item}'")))
    }
}

keystone_worker::status_forms! {
    impl Inventory {
        fn restock(&self, item: String, quantity: u32) -> u32 => {
            checked: restock_checked,
            into: restock_into,
            spawn: restock_spawn,
            spawn_with: restock_spawn_with,
        };
        fn take(&self, item: String, quantity: u32) -> u32 => {
            checked: take_checked,
            into: take_into,
            spawn: take_spawn,
            spawn_with: take_spawn_with,
        };
        fn count(&self, item: String) -> u32 => {
            checked: count_checked,
            into: count_into,
            spawn: count_spawn,
            spawn_with: count_spawn_with,
        };
    }
}
