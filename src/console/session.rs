use std::io;
use std::str::FromStr;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument, warn};

use crate::clients::{OrderClient, ProductClient};
use crate::console::{MenuChoice, TokenReader, CHOICE_PROMPT, MENU};
use crate::domain::{order_quantity, OrderId, Product, ProductId, StorageType};
use crate::error::InventoryError;

/// Why a menu action stopped before completing.
#[derive(Debug, Error)]
enum ActionError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    #[error("input ended")]
    EndOfInput,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// One operator session: prompts on `out`, reads answers from `reader`, and
/// runs each action to completion before prompting again.
pub struct Console<R, W> {
    tokens: TokenReader<R>,
    out: W,
    products: ProductClient,
    orders: OrderClient,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, out: W, products: ProductClient, orders: OrderClient) -> Self {
        Self {
            tokens: TokenReader::new(reader),
            out,
            products,
            orders,
        }
    }

    /// Runs until the operator exits or input ends. Only I/O failures on the
    /// terminal itself end the session with an error.
    #[instrument(name = "console", skip(self))]
    pub async fn run(mut self) -> io::Result<()> {
        info!("Session started");

        loop {
            self.write(&format!("\n{MENU}{CHOICE_PROMPT}")).await?;

            let choice = match self.read_choice().await {
                Ok(Some(choice)) => choice,
                Ok(None) | Err(ActionError::EndOfInput) => {
                    info!("Input ended");
                    break;
                }
                Err(ActionError::Inventory(e)) => {
                    self.tokens.discard_line();
                    self.report(&e).await?;
                    continue;
                }
                Err(ActionError::Io(e)) => return Err(e),
            };

            if choice == MenuChoice::Exit {
                self.write("Exiting...\n").await?;
                break;
            }

            match self.dispatch(choice).await {
                Ok(()) => {}
                Err(ActionError::Inventory(e)) => {
                    self.tokens.discard_line();
                    self.report(&e).await?;
                }
                Err(ActionError::EndOfInput) => {
                    info!("Input ended mid-action");
                    break;
                }
                Err(ActionError::Io(e)) => return Err(e),
            }
        }

        info!("Session finished");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn dispatch(&mut self, choice: MenuChoice) -> Result<(), ActionError> {
        debug!("Dispatching menu choice");
        match choice {
            MenuChoice::AddProduct => self.add_product().await,
            MenuChoice::AddPerishable => self.add_perishable().await,
            MenuChoice::ListInventory => self.list_inventory().await,
            MenuChoice::PlaceOrder => self.place_order().await,
            MenuChoice::LowStock => self.low_stock().await,
            MenuChoice::Exit => Ok(()),
        }
    }

    async fn add_product(&mut self) -> Result<(), ActionError> {
        self.write("ID Name Price Quantity: ").await?;
        let id = ProductId(self.field("a product ID").await?);
        let name: String = self.field("a name").await?;
        let price = self.field("a price").await?;
        let quantity = self.field("a quantity").await?;

        let product = Product::new(id, name, price, quantity)?;
        self.products.add_product(product).await?;
        self.write("Product added successfully.\n").await?;
        Ok(())
    }

    async fn add_perishable(&mut self) -> Result<(), ActionError> {
        self.write("ID Name Price Qty Expiry Storage(COLD/DRY): ").await?;
        let id = ProductId(self.field("a product ID").await?);
        let name: String = self.field("a name").await?;
        let price = self.field("a price").await?;
        let quantity = self.field("a quantity").await?;
        let expiry_date: String = self.field("an expiry date").await?;
        let storage = self.token().await?.parse::<StorageType>()?;

        let product = Product::perishable(id, name, price, quantity, expiry_date, storage)?;
        self.products.add_product(product).await?;
        self.write("Product added successfully.\n").await?;
        Ok(())
    }

    async fn list_inventory(&mut self) -> Result<(), ActionError> {
        let products = self.products.list_inventory().await?;
        if products.is_empty() {
            self.write("Inventory empty.\n").await?;
            return Ok(());
        }
        self.write_products(&products).await
    }

    async fn place_order(&mut self) -> Result<(), ActionError> {
        self.write("Order ID Product ID Quantity: ").await?;
        let order_id = OrderId(self.field("an order ID").await?);
        let product_id = ProductId(self.field("a product ID").await?);
        let quantity = order_quantity(self.field("a quantity").await?)?;

        let order = self.orders.place_order(order_id, product_id, quantity).await?;
        self.write(&format!("Order placed successfully!\nTotal Amount: {}\n", order.total))
            .await?;
        Ok(())
    }

    async fn low_stock(&mut self) -> Result<(), ActionError> {
        let products = self.products.low_stock().await?;
        if products.is_empty() {
            self.write("No low stock products.\n").await?;
            return Ok(());
        }
        self.write_products(&products).await
    }

    async fn write_products(&mut self, products: &[Product]) -> Result<(), ActionError> {
        for product in products {
            self.write(&format!("{product}\n")).await?;
        }
        Ok(())
    }

    async fn read_choice(&mut self) -> Result<Option<MenuChoice>, ActionError> {
        let Some(token) = self.next_token().await? else {
            return Ok(None);
        };
        Ok(Some(token.parse()?))
    }

    /// Undecodable input is an operator mistake, not a terminal failure.
    async fn next_token(&mut self) -> Result<Option<String>, ActionError> {
        self.tokens.next_token().await.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => {
                InventoryError::invalid("Input line is not valid UTF-8").into()
            }
            _ => ActionError::Io(e),
        })
    }

    async fn token(&mut self) -> Result<String, ActionError> {
        self.next_token().await?.ok_or(ActionError::EndOfInput)
    }

    /// Reads the next token and parses it, naming `expected` on failure.
    async fn field<T: FromStr>(&mut self, expected: &str) -> Result<T, ActionError> {
        let token = self.token().await?;
        token.parse().map_err(|_| {
            InventoryError::invalid(format!("Expected {expected}, got {token:?}")).into()
        })
    }

    /// Insufficient stock reads as-is; everything else gets an `Error:` prefix.
    async fn report(&mut self, error: &InventoryError) -> io::Result<()> {
        warn!(%error, "Action failed");
        match error {
            InventoryError::InsufficientStock { .. } => self.write(&format!("{error}\n")).await,
            _ => self.write(&format!("Error: {error}\n")).await,
        }
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await
    }
}
