//! # Menu Shell
//!
//! The interactive loop: show the menu, read a choice, run the action.
//!
//! ## Action Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  loop                                                                   │
//! │    clear screen ─► menu ─► read choice                                  │
//! │       │                                                                 │
//! │       ├── 1 Add     name ─► exists_by_name? ─► qty ─► price ─► create  │
//! │       ├── 2 List    list ─► one line per product                       │
//! │       ├── 3 Delete  id ─► exists_by_id? ─► delete                      │
//! │       ├── 4 Update  id ─► get_by_id ─► name ─► qty ─► price ─► update  │
//! │       ├── 0 Quit                                                        │
//! │       └── other     "Invalid choice."                                   │
//! │       │                                                                 │
//! │    DbError  ─► "Error: ..." and keep looping                            │
//! │    EOF      ─► leave the loop                                           │
//! │    pause                                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};
use tracing::{info, warn};

use crate::error::AppError;
use crate::input::InputReader;
use crate::terminal::Terminal;
use stock_core::{NewProduct, Product};
use stock_db::Store;

pub const MENU: &str = "\n=== Stock Manager ===\n\
1. Add a product\n\
2. List products\n\
3. Delete a product\n\
4. Update a product\n\
0. Quit\n\
Choice: ";

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Delete,
    Update,
    Quit,
    Invalid(i64),
}

impl From<i64> for MenuChoice {
    fn from(value: i64) -> Self {
        match value {
            1 => MenuChoice::Add,
            2 => MenuChoice::List,
            3 => MenuChoice::Delete,
            4 => MenuChoice::Update,
            0 => MenuChoice::Quit,
            other => MenuChoice::Invalid(other),
        }
    }
}

/// Renders one product the way the list action prints it.
pub fn format_product(product: &Product) -> String {
    format!(
        "ID: {} | Name: {} | Quantity: {} | Price: {:.2}",
        product.id, product.name, product.quantity, product.price
    )
}

/// Interactive shell over an open store.
pub struct Shell<'a, R, W> {
    store: &'a Store,
    console: InputReader<R, W>,
    terminal: Box<dyn Terminal>,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(store: &'a Store, console: InputReader<R, W>, terminal: Box<dyn Terminal>) -> Self {
        Shell {
            store,
            console,
            terminal,
        }
    }

    /// Hands back the console, e.g. to inspect what was written.
    pub fn into_console(self) -> InputReader<R, W> {
        self.console
    }

    /// Runs until the user quits or input ends.
    ///
    /// Database errors inside an action are reported and the loop goes on.
    /// Only I/O failures on the console end it with an error.
    pub async fn run(&mut self) -> Result<(), AppError> {
        loop {
            self.terminal.clear_screen(self.console.output())?;
            self.console.prompt(MENU)?;

            let choice = match self.console.read_non_negative_integer() {
                Ok(value) => MenuChoice::from(value),
                Err(err) => {
                    let err = AppError::from(err);
                    if err.is_end_of_input() {
                        info!("Input closed, leaving the menu");
                        return Ok(());
                    }
                    return Err(err);
                }
            };

            if choice == MenuChoice::Quit {
                self.terminal.clear_screen(self.console.output())?;
                writeln!(self.console.output(), "Goodbye!")?;
                return Ok(());
            }

            self.terminal.clear_screen(self.console.output())?;

            match self.dispatch(choice).await {
                Ok(()) => {}
                Err(err) if err.is_end_of_input() => {
                    info!("Input closed during an action, leaving the menu");
                    return Ok(());
                }
                Err(AppError::Db(err)) => {
                    warn!(error = %err, ?choice, "Menu action failed");
                    writeln!(self.console.output(), "Error: {err}")?;
                }
                Err(err) => return Err(err),
            }

            let (input, output) = self.console.parts();
            self.terminal.pause(input, output)?;
        }
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> Result<(), AppError> {
        match choice {
            MenuChoice::Add => self.add_product().await,
            MenuChoice::List => self.list_products().await,
            MenuChoice::Delete => self.delete_product().await,
            MenuChoice::Update => self.update_product().await,
            MenuChoice::Invalid(_) => {
                writeln!(self.console.output(), "Invalid choice.")?;
                Ok(())
            }
            MenuChoice::Quit => Ok(()),
        }
    }

    async fn add_product(&mut self) -> Result<(), AppError> {
        let products = self.store.products();

        self.console.prompt("Product name: ")?;
        let name = self.console.read_name()?;

        if products.exists_by_name(&name).await? {
            writeln!(
                self.console.output(),
                "A product named \"{name}\" already exists."
            )?;
            return Ok(());
        }

        self.console.prompt("Quantity: ")?;
        let quantity = self.console.read_non_negative_integer()?;

        self.console.prompt("Price: ")?;
        let price = self.console.read_non_negative_float()?;

        let id = products
            .create(&NewProduct::new(name, quantity, price))
            .await?;
        info!(id, "Product added");

        writeln!(self.console.output(), "Product added with ID {id}.")?;
        Ok(())
    }

    async fn list_products(&mut self) -> Result<(), AppError> {
        let products = self.store.products().list().await?;
        let out = self.console.output();

        writeln!(out, "Product list:")?;
        if products.is_empty() {
            writeln!(out, "No products found.")?;
        }
        for product in &products {
            writeln!(out, "{}", format_product(product))?;
        }
        Ok(())
    }

    async fn delete_product(&mut self) -> Result<(), AppError> {
        let products = self.store.products();

        self.console.prompt("ID of the product to delete: ")?;
        let id = self.console.read_non_negative_integer()?;

        if !products.exists_by_id(id).await? {
            writeln!(self.console.output(), "No product with ID {id}.")?;
            return Ok(());
        }

        products.delete(id).await?;
        info!(id, "Product deleted");

        writeln!(self.console.output(), "Product {id} deleted.")?;
        Ok(())
    }

    async fn update_product(&mut self) -> Result<(), AppError> {
        let products = self.store.products();

        self.console.prompt("ID of the product to update: ")?;
        let id = self.console.read_non_negative_integer()?;

        let Some(current) = products.get_by_id(id).await? else {
            writeln!(self.console.output(), "No product with ID {id}.")?;
            return Ok(());
        };

        writeln!(self.console.output(), "Current: {}", format_product(&current))?;

        self.console.prompt("New name: ")?;
        let name = self.console.read_name()?;

        if name != current.name && products.exists_by_name(&name).await? {
            writeln!(
                self.console.output(),
                "A product named \"{name}\" already exists."
            )?;
            return Ok(());
        }

        self.console.prompt("New quantity: ")?;
        let quantity = self.console.read_non_negative_integer()?;

        self.console.prompt("New price: ")?;
        let price = self.console.read_non_negative_float()?;

        products
            .update(&Product::new(id, name, quantity, price))
            .await?;
        info!(id, "Product updated");

        writeln!(self.console.output(), "Product {id} updated.")?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
