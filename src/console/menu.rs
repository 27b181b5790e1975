use std::str::FromStr;

use crate::error::InventoryError;

pub const MENU: &str = "\
Welcome to Inventory Management System
1. Add Product
2. Add Perishable Product
3. Display Inventory
4. Place Order
5. Show Low Stock Products
6. Exit
";

pub const CHOICE_PROMPT: &str = "Enter choice: ";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    AddProduct,
    AddPerishable,
    ListInventory,
    PlaceOrder,
    LowStock,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: i64 = s
            .parse()
            .map_err(|_| InventoryError::invalid(format!("Expected a menu number, got {s:?}")))?;
        match number {
            1 => Ok(MenuChoice::AddProduct),
            2 => Ok(MenuChoice::AddPerishable),
            3 => Ok(MenuChoice::ListInventory),
            4 => Ok(MenuChoice::PlaceOrder),
            5 => Ok(MenuChoice::LowStock),
            6 => Ok(MenuChoice::Exit),
            other => Err(InventoryError::invalid(format!("Unknown menu option: {other}"))),
        }
    }
}
