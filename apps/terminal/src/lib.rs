//! # Isoko Terminal Library
//!
//! The interactive surface: a line-oriented terminal session with a
//! login screen and five role-gated views.
//!
//! ## Module Organization
//! ```text
//! isoko_terminal/
//! ├── lib.rs          ◄─── You are here (run loop & dispatch)
//! ├── config.rs       ◄─── Configuration (defaults + env overrides)
//! ├── seed.rs         ◄─── Demo catalog fixture
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState (store + cart + session + config)
//! │   └── session.rs  ◄─── Demo accounts, views, role gating
//! ├── commands/       ◄─── One module per concern
//! ├── ui.rs           ◄─── Prompt + table rendering
//! └── error.rs        ◄─── ApiError for the command layer
//! ```
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  start ──► login screen ──► view loop ──► logout ──► login screen   │
//! │                │                │                                   │
//! │           bad password     one command per line:                    │
//! │           → notice,        navigate / scan / qty / checkout /       │
//! │             retry          add / edit / del / reports / ...         │
//! │                                │                                    │
//! │                            rejected ops print a notice and          │
//! │                            change nothing                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod seed;
pub mod state;
pub mod ui;

use std::io;

use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use isoko_core::inventory::{InventoryFilter, InventorySort};
use isoko_core::reports::ReportWindow;
use isoko_core::{Money, NewProduct, ProductUpdate};
use isoko_store::Store;

use config::Config;
use error::ApiError;
use state::{AppState, View};

/// Runs the terminal application.
///
/// ## Startup Sequence
/// 1. Initialize logging (tracing-subscriber with env filter)
/// 2. Load configuration (`ISOKO_*` overrides)
/// 3. Seed the in-memory store with the demo catalog
/// 4. Loop: login screen until a session opens, then one command per
///    line until logout or quit
pub fn run() -> io::Result<()> {
    init_tracing();

    let config = Config::from_env();
    info!(store = %config.store_name, "Starting Isoko POS terminal");

    let mut store = Store::new();
    seed::seed_store(&mut store, Utc::now());

    let mut state = AppState::new(config, store);

    loop {
        if state.session.is_none() {
            ui::print_login_banner(&state.config);

            let Some(email) = ui::read_line("Email: ")? else {
                return Ok(());
            };
            if email == "quit" || email == "exit" {
                return Ok(());
            }
            let Some(password) = ui::read_line("Password: ")? else {
                return Ok(());
            };

            match commands::auth::login(&mut state, &email, &password) {
                Ok(user) => ui::print_welcome(&user),
                Err(err) => ui::print_error(&err),
            }
            continue;
        }

        let prompt = match &state.session {
            Some(session) => format!("[{}] > ", session.active_view.key()),
            None => continue,
        };
        let Some(line) = ui::read_line(&prompt)? else {
            return Ok(());
        };
        if line.is_empty() {
            continue;
        }

        match dispatch(&mut state, &line) {
            Outcome::Continue => {}
            Outcome::Quit => return Ok(()),
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Default level is `info`; override with `RUST_LOG` (e.g.
/// `RUST_LOG=isoko=debug`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

// =============================================================================
// Dispatch
// =============================================================================

enum Outcome {
    Continue,
    Quit,
}

/// Parses one input line and runs the matching command. Errors become
/// printed notices; only view switches and successful mutations change
/// state.
fn dispatch(state: &mut AppState, line: &str) -> Outcome {
    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or_default();
    let rest: Vec<&str> = parts.collect();

    let result = match verb {
        "help" => {
            if let Some(session) = &state.session {
                ui::print_help(session.user.role);
            }
            Ok(())
        }
        "quit" | "exit" => return Outcome::Quit,
        "logout" => {
            if let Some(user) = commands::auth::logout(state) {
                println!("Goodbye, {}", user.name);
            }
            Ok(())
        }

        // Navigation: each view command renders the view
        "dashboard" => commands::dashboard::get_dashboard(state).map(|view| {
            ui::print_dashboard(&view);
            switch_view(state, View::Dashboard);
        }),
        "pos" => commands::require_view(state, View::PointOfSale).map(|()| {
            ui::print_cart(&commands::cart::get_cart(state));
            println!("  (scan <barcode> to add items, 'checkout' to finish)");
            switch_view(state, View::PointOfSale);
        }),
        "products" => commands::product::list_products(state).map(|products| {
            ui::print_products(&products);
            switch_view(state, View::Products);
        }),
        "inventory" => parse_inventory_filter(&rest).and_then(|filter| {
            commands::inventory::get_inventory(state, &filter).map(|view| {
                ui::print_inventory(&view);
                switch_view(state, View::Inventory);
            })
        }),
        "reports" => parse_report_window(&rest).and_then(|window| {
            commands::report::get_report(state, window).map(|view| {
                ui::print_report(&view);
                switch_view(state, View::Reports);
            })
        }),

        // Point of sale
        "scan" => one_arg(&rest, "scan <barcode>")
            .and_then(|barcode| commands::cart::add_to_cart(state, barcode))
            .map(|view| ui::print_cart(&view)),
        "search" => {
            let query = rest.join(" ");
            commands::cart::search_products(state, &query)
                .map(|products| ui::print_search_results(&products))
        }
        "qty" => parse_qty(&rest)
            .and_then(|(barcode, qty)| commands::cart::set_quantity(state, barcode, qty))
            .map(|view| ui::print_cart(&view)),
        "rm" => one_arg(&rest, "rm <barcode>")
            .and_then(|barcode| commands::cart::remove_from_cart(state, barcode))
            .map(|view| ui::print_cart(&view)),
        "cart" => {
            ui::print_cart(&commands::cart::get_cart(state));
            Ok(())
        }
        "clear" => {
            ui::print_cart(&commands::cart::clear_cart(state));
            Ok(())
        }
        "checkout" => {
            commands::sale::process_sale(state).map(|receipt| ui::print_receipt(&receipt))
        }

        // Catalog management (admin)
        "add" => parse_new_product(line)
            .and_then(|new| commands::product::add_product(state, new))
            .map(|p| {
                println!("Added:");
                ui::print_product_detail(&p);
            }),
        "edit" => parse_product_update(&rest).and_then(|(id, update)| {
            commands::product::update_product(state, id, update).map(|p| {
                println!("Updated:");
                ui::print_product_detail(&p);
            })
        }),
        "del" => one_arg(&rest, "del <id>")
            .and_then(|id| commands::product::delete_product(state, id))
            .map(|()| println!("Product removed")),

        _ => Err(ApiError::validation(format!(
            "Unknown command '{}'. Type 'help' for the command list",
            verb
        ))),
    };

    if let Err(err) = result {
        ui::print_error(&err);
    }
    Outcome::Continue
}

fn switch_view(state: &mut AppState, view: View) {
    if let Some(session) = state.session.as_mut() {
        session.active_view = view;
    }
}

// =============================================================================
// Argument Parsing
// =============================================================================

fn one_arg<'a>(rest: &[&'a str], usage: &str) -> Result<&'a str, ApiError> {
    match rest {
        [arg] => Ok(*arg),
        _ => Err(ApiError::validation(format!("Usage: {}", usage))),
    }
}

fn parse_qty<'a>(rest: &[&'a str]) -> Result<(&'a str, i64), ApiError> {
    let [barcode, qty] = rest else {
        return Err(ApiError::validation("Usage: qty <barcode> <n>"));
    };
    let qty: i64 = qty
        .parse()
        .map_err(|_| ApiError::validation("Quantity must be a whole number"))?;
    Ok((*barcode, qty))
}

/// `add <name>|<barcode>|<price>|<stock>|<category>|<threshold>`
fn parse_new_product(line: &str) -> Result<NewProduct, ApiError> {
    const USAGE: &str = "Usage: add <name>|<barcode>|<price>|<stock>|<category>|<threshold>";

    let spec = line
        .split_once(' ')
        .map(|(_, spec)| spec)
        .ok_or_else(|| ApiError::validation(USAGE))?;

    let fields: Vec<&str> = spec.split('|').map(str::trim).collect();
    let [name, barcode, price, stock, category, threshold] = fields[..] else {
        return Err(ApiError::validation(USAGE));
    };

    Ok(NewProduct {
        name: name.to_string(),
        barcode: barcode.to_string(),
        price: Money::from_francs(parse_number(price, "price")?),
        stock: parse_number(stock, "stock")?,
        category: category.to_string(),
        low_stock_threshold: parse_number(threshold, "threshold")?,
    })
}

/// `edit <id> <field> <value...>` - one field per command so values may
/// contain spaces.
fn parse_product_update<'a>(rest: &[&'a str]) -> Result<(&'a str, ProductUpdate), ApiError> {
    const USAGE: &str = "Usage: edit <id> <field> <value>";

    let [id, field, value @ ..] = rest else {
        return Err(ApiError::validation(USAGE));
    };
    if value.is_empty() {
        return Err(ApiError::validation(USAGE));
    }
    let value = value.join(" ");

    let mut update = ProductUpdate::default();
    match *field {
        "name" => update.name = Some(value),
        "barcode" => update.barcode = Some(value),
        "category" => update.category = Some(value),
        "price" => update.price = Some(Money::from_francs(parse_number(&value, "price")?)),
        "stock" => update.stock = Some(parse_number(&value, "stock")?),
        "threshold" => update.low_stock_threshold = Some(parse_number(&value, "threshold")?),
        other => {
            return Err(ApiError::validation(format!(
                "Unknown field '{}'. Fields: name, barcode, price, stock, category, threshold",
                other
            )))
        }
    }

    Ok((*id, update))
}

/// `inventory [sort:<key>] [cat:<category>] [query words...]`
fn parse_inventory_filter(rest: &[&str]) -> Result<InventoryFilter, ApiError> {
    let mut filter = InventoryFilter::default();
    let mut query_words: Vec<&str> = Vec::new();

    for token in rest {
        if let Some(key) = token.strip_prefix("sort:") {
            filter.sort = match key {
                "name" => InventorySort::Name,
                "stock" => InventorySort::Stock,
                "price" => InventorySort::Price,
                "category" => InventorySort::Category,
                other => {
                    return Err(ApiError::validation(format!(
                        "Unknown sort '{}'. Use name, stock, price or category",
                        other
                    )))
                }
            };
        } else if let Some(category) = token.strip_prefix("cat:") {
            if category != "all" {
                filter.category = Some(category.to_string());
            }
        } else {
            query_words.push(token);
        }
    }

    filter.query = query_words.join(" ");
    Ok(filter)
}

/// `reports [today|week|month|all]` - defaults to today.
fn parse_report_window(rest: &[&str]) -> Result<ReportWindow, ApiError> {
    match rest {
        [] | ["today"] => Ok(ReportWindow::Today),
        ["week"] => Ok(ReportWindow::LastWeek),
        ["month"] => Ok(ReportWindow::LastMonth),
        ["all"] => Ok(ReportWindow::AllTime),
        _ => Err(ApiError::validation(
            "Usage: reports [today|week|month|all]",
        )),
    }
}

fn parse_number(value: &str, field: &str) -> Result<i64, ApiError> {
    value
        .trim()
        .parse()
        .map_err(|_| ApiError::validation(format!("{} must be a whole number", field)))
}

// =============================================================================
// Unit Tests
// =============================================================================
