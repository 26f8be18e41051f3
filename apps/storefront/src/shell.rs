//! # Route Shell
//!
//! A line-oriented front end over the commands. Each route renders as
//! plain text; interactions are single-line commands.
//!
//! ```text
//! /                      food display (optionally: menu <category>)
//! /cart                  cart lines and totals
//! /PlaceOrder            delivery form and totals
//! add <id> | remove <id> | clear
//! set <field> <value>    fill a delivery form field
//! place                  place the order
//! config | help | quit
//! ```
//!
//! The navbar's basket dot is driven by a store subscription rather than
//! by polling the cart.

use std::fmt::Write as _;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use platter_core::{DeliveryInfo, Totals};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::commands;
use crate::error::ApiError;
use crate::state::{ConfigState, StoreState};

const HELP: &str = "\
routes:  /  /cart  /PlaceOrder
menu [category]      list dishes, optionally one category
add <id>             add one to the cart
remove <id>          remove one from the cart
clear                empty the cart
set <field> <value>  fill the delivery form (first_name, last_name, email,
                     street, city, state, zip_code, country, phone)
place                place the order
config               show configuration
quit                 leave";

/// Navbar state kept current by a store observer.
#[derive(Debug, Clone, Default)]
pub struct Navbar {
    dot: Arc<AtomicBool>,
}

impl Navbar {
    /// Subscribes to the store so the basket dot tracks the cart.
    pub fn attach(store: &StoreState) -> Result<Self, ApiError> {
        let navbar = Navbar::default();
        let dot = Arc::clone(&navbar.dot);

        store.with_store_mut(|s| {
            dot.store(!s.get_total_cart_amount().is_zero(), Ordering::SeqCst);
            s.subscribe(move |change| {
                dot.store(!change.totals.subtotal.is_zero(), Ordering::SeqCst);
            })
        })?;

        Ok(navbar)
    }

    /// Whether the basket icon shows its dot.
    pub fn has_dot(&self) -> bool {
        self.dot.load(Ordering::SeqCst)
    }
}

/// What the shell should do after a line.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The interactive session.
pub struct Shell {
    store: StoreState,
    config: ConfigState,
    navbar: Navbar,
    form: DeliveryInfo,
}

impl Shell {
    pub fn new(store: StoreState, config: ConfigState) -> Result<Self, ApiError> {
        let navbar = Navbar::attach(&store)?;
        Ok(Shell {
            store,
            config,
            navbar,
            form: DeliveryInfo::default(),
        })
    }

    /// Reads commands until EOF or `quit`, writing each view to `output`.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();

        output.write_all(self.render_home(None).as_bytes()).await?;
        output.flush().await?;

        while let Some(line) = lines.next_line().await? {
            let (flow, text) = self.handle(&line);
            output.write_all(text.as_bytes()).await?;
            output.flush().await?;

            if flow == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    fn handle(&mut self, line: &str) -> (Flow, String) {
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        debug!(command, "shell input");

        let text = match command {
            "" => String::new(),
            "/" => self.render_home(None),
            "menu" => self.render_home(Some(rest).filter(|r| !r.is_empty())),
            "/cart" | "cart" => self.render_cart(),
            "/PlaceOrder" | "order" => self.render_place_order(),
            "add" => self.mutate(rest, commands::cart::add_to_cart),
            "remove" => self.mutate(rest, commands::cart::remove_from_cart),
            "clear" => match commands::cart::clear_cart(&self.store) {
                Ok(_) => self.render_cart(),
                Err(e) => render_error(&e),
            },
            "set" => self.set_field(rest),
            "place" => self.place(),
            "config" => {
                let config = commands::config::get_config(&self.config);
                serde_json::to_string_pretty(&config).unwrap_or_default() + "\n"
            }
            "help" => format!("{}\n", HELP),
            "quit" | "exit" => return (Flow::Quit, String::new()),
            other => format!("unknown command '{}', try 'help'\n", other),
        };

        (Flow::Continue, text)
    }

    fn mutate<F>(&self, id: &str, command: F) -> String
    where
        F: FnOnce(&StoreState, &str) -> Result<commands::cart::CartResponse, ApiError>,
    {
        if id.is_empty() {
            return "usage: add <id> | remove <id>\n".to_string();
        }

        match command(&self.store, id) {
            Ok(cart) => {
                let qty = cart.items.get(id).copied().unwrap_or(0);
                format!(
                    "{} x{}  subtotal {}\n",
                    id,
                    qty,
                    self.config.format_money(cart.totals.subtotal)
                )
            }
            Err(e) => render_error(&e),
        }
    }

    fn set_field(&mut self, rest: &str) -> String {
        let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
        let value = value.trim().to_string();

        let slot = match field {
            "first_name" => &mut self.form.first_name,
            "last_name" => &mut self.form.last_name,
            "email" => &mut self.form.email,
            "street" => &mut self.form.street,
            "city" => &mut self.form.city,
            "state" => &mut self.form.state,
            "zip_code" => &mut self.form.zip_code,
            "country" => &mut self.form.country,
            "phone" => &mut self.form.phone,
            _ => return format!("unknown field '{}'\n", field),
        };
        *slot = value;
        format!("{} set\n", field)
    }

    fn place(&mut self) -> String {
        match commands::order::place_order(&self.store, self.form.clone()) {
            Ok(receipt) => {
                self.form = DeliveryInfo::default();
                format!(
                    "Order {} placed, total {}\n",
                    receipt.order_id,
                    self.config.format_money(receipt.totals.total)
                )
            }
            Err(e) => render_error(&e),
        }
    }

    // -------------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------------

    fn render_navbar(&self) -> String {
        format!(
            "== {} ==  [basket{}]\n",
            self.config.store_name,
            if self.navbar.has_dot() { " •" } else { "" }
        )
    }

    fn render_home(&self, category: Option<&str>) -> String {
        let mut out = self.render_navbar();

        match commands::catalog::get_food_list(&self.store, category) {
            Ok(list) => {
                let _ = writeln!(out, "Top dishes near you ({})", list.category);
                for entry in &list.items {
                    let _ = writeln!(
                        out,
                        "  [{}] {:<20} {:>8}  in cart: {}",
                        entry.item.id,
                        entry.item.name,
                        self.config.format_money(entry.item.price),
                        entry.quantity
                    );
                }
                let _ = writeln!(out, "categories: {}", list.categories.join(", "));
            }
            Err(e) => out.push_str(&render_error(&e)),
        }

        out
    }

    fn render_cart(&self) -> String {
        let mut out = self.render_navbar();

        match commands::cart::get_cart(&self.store) {
            Ok(cart) => {
                for line in &cart.lines {
                    let _ = writeln!(
                        out,
                        "  {:<20} {:>8} x{:<3} {:>8}",
                        line.name,
                        self.config.format_money(line.unit_price),
                        line.quantity,
                        self.config.format_money(line.line_total)
                    );
                }
                if cart.lines.is_empty() {
                    out.push_str("  (cart is empty)\n");
                }
                out.push_str(&self.render_totals(&cart.totals));
            }
            Err(e) => out.push_str(&render_error(&e)),
        }

        out
    }

    fn render_place_order(&self) -> String {
        let mut out = self.render_navbar();
        let form = &self.form;

        let _ = writeln!(out, "Delivery Information");
        for (label, value) in [
            ("first_name", &form.first_name),
            ("last_name", &form.last_name),
            ("email", &form.email),
            ("street", &form.street),
            ("city", &form.city),
            ("state", &form.state),
            ("zip_code", &form.zip_code),
            ("country", &form.country),
            ("phone", &form.phone),
        ] {
            let _ = writeln!(out, "  {:<10} {}", label, value);
        }

        match commands::order::get_order_summary(&self.store) {
            Ok(totals) => out.push_str(&self.render_totals(&totals)),
            Err(e) => out.push_str(&render_error(&e)),
        }

        out
    }

    fn render_totals(&self, totals: &Totals) -> String {
        format!(
            "Subtotal      {}\nDelivery Fee  {}\nTotal         {}\n",
            self.config.format_money(totals.subtotal),
            self.config.format_money(totals.delivery_fee),
            self.config.format_money(totals.total)
        )
    }
}

fn render_error(err: &ApiError) -> String {
    serde_json::to_string(err).unwrap_or_else(|_| err.to_string()) + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use platter_core::{Catalog, FoodItem, Money, StoreOptions};

    fn shell() -> Shell {
        let catalog = Catalog::from_items(vec![
            FoodItem::new("1", "Ten", Money::from_cents(1000)).with_category("Salad"),
            FoodItem::new("2", "Five", Money::from_cents(500)).with_category("Rolls"),
        ])
        .unwrap();
        let store = StoreState::new(catalog, StoreOptions::default());
        Shell::new(store, ConfigState::default()).unwrap()
    }

    #[test]
    fn test_navbar_dot_follows_cart() {
        let mut shell = shell();
        assert!(!shell.navbar.has_dot());

        shell.handle("add 1");
        assert!(shell.navbar.has_dot());

        shell.handle("remove 1");
        assert!(!shell.navbar.has_dot());
    }

    #[test]
    fn test_cart_view_totals() {
        let mut shell = shell();
        shell.handle("add 1");
        shell.handle("add 1");
        shell.handle("add 2");

        let (_, view) = shell.handle("/cart");
        assert!(view.contains("Subtotal      $25.00"));
        assert!(view.contains("Delivery Fee  $2.00"));
        assert!(view.contains("Total         $27.00"));
    }

    #[test]
    fn test_empty_place_order_view() {
        let mut shell = shell();
        let (_, view) = shell.handle("/PlaceOrder");
        assert!(view.contains("Delivery Fee  $0.00"));
        assert!(view.contains("Total         $0.00"));
    }

    #[test]
    fn test_place_order_from_form() {
        let mut shell = shell();
        shell.handle("add 2");
        for line in [
            "set first_name Ada",
            "set last_name Lovelace",
            "set email ada@example.com",
            "set street 12 St James's Square",
            "set city London",
            "set state London",
            "set zip_code SW1Y 4JH",
            "set country UK",
            "set phone 020 7946 0000",
        ] {
            shell.handle(line);
        }
        assert_eq!(shell.form.street, "12 St James's Square");

        let (_, text) = shell.handle("place");
        assert!(text.starts_with("Order "), "{}", text);
        assert!(text.contains("$7.00"));
        assert_eq!(shell.form, DeliveryInfo::default());
        assert!(!shell.navbar.has_dot());
    }

    #[test]
    fn test_errors_render_as_json() {
        let mut shell = shell();
        let (_, text) = shell.handle("place");
        assert!(text.contains("\"code\":\"VALIDATION_ERROR\""));
    }

    #[tokio::test]
    async fn test_run_until_quit() {
        let mut shell = shell();
        let input: &[u8] = b"menu Rolls\nadd 2\nquit\nadd 1\n";
        let mut output = Vec::new();

        shell.run(input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Top dishes near you (Rolls)"));
        assert!(text.contains("2 x1  subtotal $5.00"));
        assert_eq!(
            shell.store.with_store(|s| s.quantity("1")).unwrap(),
            0,
            "commands after quit must not run"
        );
    }
}
