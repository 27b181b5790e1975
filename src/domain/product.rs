use std::fmt;
use std::str::FromStr;

use crate::error::InventoryError;

/// Products with fewer units than this are reported as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub i32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Storage requirement of a perishable product.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StorageType {
    Cold,
    Dry,
}

impl FromStr for StorageType {
    type Err = InventoryError;

    /// Only the exact upper-case tokens are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COLD" => Ok(StorageType::Cold),
            "DRY" => Ok(StorageType::Dry),
            other => Err(InventoryError::UnknownStorageType(other.to_string())),
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StorageType::Cold => "COLD",
            StorageType::Dry => "DRY",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductKind {
    Basic,
    Perishable {
        expiry_date: String,
        storage: StorageType,
    },
}

/// Represents a product in the inventory.
///
/// Price and quantity are private: every write goes through a validating
/// setter, so a stored product never holds a negative value.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub kind: ProductKind,
    price: f64,
    quantity: u32,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> Result<Self, InventoryError> {
        Ok(Self {
            id,
            name: name.into(),
            kind: ProductKind::Basic,
            price: validate_price(price)?,
            quantity: validate_quantity(quantity)?,
        })
    }

    /// Creates a perishable product. The expiry date is kept as given.
    pub fn perishable(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        expiry_date: impl Into<String>,
        storage: StorageType,
    ) -> Result<Self, InventoryError> {
        let mut product = Self::new(id, name, price, quantity)?;
        product.kind = ProductKind::Perishable {
            expiry_date: expiry_date.into(),
            storage,
        };
        Ok(product)
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn set_price(&mut self, price: f64) -> Result<(), InventoryError> {
        self.price = validate_price(price)?;
        Ok(())
    }

    pub fn set_quantity(&mut self, quantity: i64) -> Result<(), InventoryError> {
        self.quantity = validate_quantity(quantity)?;
        Ok(())
    }

    /// Removes `quantity` units, returning what remains. Nothing changes when
    /// the stock cannot cover the request.
    pub fn withdraw(&mut self, quantity: u32) -> Result<u32, InventoryError> {
        let available = self.quantity;
        if quantity > available {
            return Err(InventoryError::InsufficientStock {
                requested: quantity,
                available,
            });
        }
        self.quantity = available - quantity;
        Ok(self.quantity)
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }
}

fn validate_price(price: f64) -> Result<f64, InventoryError> {
    if !price.is_finite() {
        return Err(InventoryError::invalid(format!("Price must be a finite number, got {price}")));
    }
    if price < 0.0 {
        return Err(InventoryError::invalid(format!("Price cannot be negative: {price:?}")));
    }
    Ok(price)
}

fn validate_quantity(quantity: i64) -> Result<u32, InventoryError> {
    if quantity < 0 {
        return Err(InventoryError::invalid(format!("Quantity cannot be negative: {quantity}")));
    }
    u32::try_from(quantity)
        .map_err(|_| InventoryError::invalid(format!("Quantity out of range: {quantity}")))
}

/// Plain decimal notation at any magnitude; whole prices keep a ".0".
fn write_price(f: &mut fmt::Formatter<'_>, price: f64) -> fmt::Result {
    if price.fract() == 0.0 {
        write!(f, "{price:.1}")
    } else {
        write!(f, "{price}")
    }
}

/// One line per product; perishables add a second line with expiry and storage.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Name: {}, Price: ", self.id, self.name)?;
        write_price(f, self.price)?;
        write!(f, ", Quantity: {}", self.quantity)?;
        if let ProductKind::Perishable { expiry_date, storage } = &self.kind {
            write!(f, "\nExpiry Date: {}, Storage: {}", expiry_date, storage)?;
        }
        Ok(())
    }
}
