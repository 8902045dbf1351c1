//! # Terminal Rendering
//!
//! Turns command DTOs into printed tables and notices. Pure
//! presentation: nothing in here touches state or makes decisions -
//! the command layer already did both.

use std::io::{self, BufRead, Write};

use isoko_core::{Role, User};

use crate::commands::cart::CartView;
use crate::commands::dashboard::DashboardView;
use crate::commands::inventory::InventoryView;
use crate::commands::product::ProductDto;
use crate::commands::report::ReportView;
use crate::commands::sale::ReceiptDto;
use crate::config::Config;
use crate::error::ApiError;
use crate::state::View;

// =============================================================================
// Prompting
// =============================================================================

/// Prints a prompt and reads one trimmed line. `None` on end of input.
pub fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None); // EOF
    }
    Ok(Some(line.trim().to_string()))
}

/// Prints a rejected operation as a notice. State was left untouched.
pub fn print_error(err: &ApiError) {
    println!("!! {}", err.message);
}

// =============================================================================
// Login & Navigation
// =============================================================================

/// The login card, demo account hint included.
pub fn print_login_banner(config: &Config) {
    println!();
    println!("=== {} - Rwanda ===", config.store_name);
    println!("Demo accounts:");
    println!("  Admin:    admin@supermarket.rw");
    println!("  Cashier:  cashier@supermarket.rw");
    println!("  Password: password");
    println!();
}

/// Greeting plus the views this role may open.
pub fn print_welcome(user: &User) {
    println!();
    println!("Logged in as {} ({})", user.name, user.role);
    let menu: Vec<&str> = View::menu_for(user.role).iter().map(|v| v.key()).collect();
    println!("Views: {}  (type a view name, 'help', 'logout' or 'quit')", menu.join(", "));
}

/// Command reference, filtered to what the role can actually do.
pub fn print_help(role: Role) {
    println!("Navigation:");
    for view in View::menu_for(role) {
        println!("  {:<26} open {}", view.key(), view.label());
    }
    println!("Point of sale:");
    println!("  scan <barcode>             add one unit to the cart");
    println!("  search <term>              find products by name or barcode");
    println!("  qty <barcode> <n>          set a line's quantity (0 removes)");
    println!("  rm <barcode>               remove a line");
    println!("  cart                       show the cart");
    println!("  clear                      empty the cart");
    println!("  checkout                   process the sale");
    if role == Role::Admin {
        println!("Products (admin):");
        println!("  add <name>|<barcode>|<price>|<stock>|<category>|<threshold>");
        println!("  edit <id> <field> <value>  fields: name, barcode, price,");
        println!("                             stock, category, threshold");
        println!("  del <id>                   remove a product");
        println!("Reports (admin):");
        println!("  reports [today|week|month|all]");
    }
    println!("Inventory:");
    println!("  inventory [sort:<name|stock|price|category>] [cat:<category>] [query]");
    println!("Session:");
    println!("  logout | quit");
}

// =============================================================================
// Views
// =============================================================================

pub fn print_dashboard(view: &DashboardView) {
    println!();
    println!("== Dashboard ==");
    println!("  Products:       {}", view.stats.total_products);
    println!("  Sales today:    {}", view.stats.todays_transactions);
    println!("  Revenue today:  {}", view.stats.todays_revenue);
    println!("  Low stock:      {}", view.stats.low_stock_count);

    if !view.low_stock.is_empty() {
        println!();
        println!("  Low Stock Alerts");
        for p in &view.low_stock {
            println!(
                "    {:<28} {:<10} {} left (threshold {})",
                p.name, p.category, p.stock, p.low_stock_threshold
            );
        }
    }

    println!();
    if view.recent_sales.is_empty() {
        println!("  No sales recorded yet");
    } else {
        println!("  Recent Sales");
        for s in &view.recent_sales {
            println!(
                "    {:<10} {:<16} {:>2} items  {}",
                short_id(&s.id),
                s.cashier,
                s.line_count,
                s.total
            );
        }
    }
}

pub fn print_products(products: &[ProductDto]) {
    println!();
    println!("== Products ==");
    if products.is_empty() {
        println!("  Catalog is empty");
        return;
    }
    println!(
        "  {:<10} {:<28} {:<14} {:>12} {:>6}  {}",
        "ID", "Name", "Barcode", "Price", "Stock", "Category"
    );
    for p in products {
        println!(
            "  {:<10} {:<28} {:<14} {:>12} {:>6}  {}",
            short_id(&p.id),
            p.name,
            p.barcode,
            p.price.to_string(),
            p.stock,
            p.category
        );
    }
    println!("  (edit/del take the full id; 'search <term>' shows it too)");
}

pub fn print_product_detail(p: &ProductDto) {
    println!(
        "  {} | {} | {} | stock {} | {} | threshold {} | {}",
        p.id, p.name, p.barcode, p.stock, p.price, p.low_stock_threshold, p.status
    );
}

pub fn print_search_results(products: &[ProductDto]) {
    if products.is_empty() {
        println!("  No products found matching your criteria.");
        return;
    }
    for p in products {
        println!(
            "  {:<28} {:<14} {:>12}  stock {:>3}  [{}]",
            p.name,
            p.barcode,
            p.price.to_string(),
            p.stock,
            p.id
        );
    }
}

pub fn print_cart(view: &CartView) {
    println!();
    println!("== Cart ==");
    if view.lines.is_empty() {
        println!("  Cart is empty");
        return;
    }
    for line in &view.lines {
        println!(
            "  {:<28} x{:<3} @ {:>12} = {}",
            line.name,
            line.quantity,
            line.unit_price.to_string(),
            line.line_total
        );
    }
    println!("  {:-<64}", "");
    println!("  Subtotal:  {}", view.totals.subtotal);
    println!("  VAT (18%): {}", view.totals.vat);
    println!("  Total:     {}", view.totals.total);
}

pub fn print_receipt(receipt: &ReceiptDto) {
    println!();
    println!("== Receipt - {} ==", receipt.store_name);
    println!("  Sale {}", short_id(&receipt.sale_id));
    println!("  {}", receipt.recorded_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!("  Cashier: {}", receipt.cashier);
    for item in &receipt.items {
        println!(
            "  {:<28} x{:<3} @ {:>12} = {}",
            item.name,
            item.quantity,
            item.unit_price.to_string(),
            item.line_total
        );
    }
    println!("  {:-<64}", "");
    println!("  Subtotal:  {}", receipt.subtotal);
    println!("  VAT (18%): {}", receipt.vat);
    println!("  Total:     {}", receipt.total);
    println!("  Murakoze! (Thank you!)");
}

pub fn print_inventory(view: &InventoryView) {
    println!();
    println!("== Inventory ==");
    println!("  Products:     {}", view.summary.total_products);
    println!("  Stock value:  {}", view.summary.total_value);
    println!("  Low stock:    {}", view.summary.low_stock);
    println!("  Out of stock: {}", view.summary.out_of_stock);
    if !view.low_stock.is_empty() {
        println!("  Restock: {}", view.low_stock.join(", "));
    }
    println!("  Categories: {}", view.categories.join(", "));

    println!();
    if view.rows.is_empty() {
        println!("  No products found matching your criteria.");
        return;
    }
    println!(
        "  {:<28} {:<10} {:<14} {:>12} {:>6} {:>14}  {}",
        "Name", "Category", "Barcode", "Price", "Stock", "Value", "Status"
    );
    for row in &view.rows {
        println!(
            "  {:<28} {:<10} {:<14} {:>12} {:>6} {:>14}  {}",
            row.name,
            row.category,
            row.barcode,
            row.price.to_string(),
            row.stock,
            row.value.to_string(),
            row.status
        );
    }
}

pub fn print_report(view: &ReportView) {
    println!();
    println!("== Sales Report - {} ==", view.window.label());
    println!("  Revenue:       {}", view.summary.revenue);
    println!("  Transactions:  {}", view.summary.transactions);
    println!("  Average sale:  {}", view.summary.average_transaction);
    println!("  VAT collected: {}", view.summary.vat_collected);

    println!();
    if view.top_products.is_empty() {
        println!("  No sales data available");
        return;
    }

    println!("  Top Products");
    for (i, p) in view.top_products.iter().enumerate() {
        println!(
            "    #{} {:<28} {:>4} sold  {}",
            i + 1,
            p.name,
            p.units,
            p.revenue
        );
    }

    println!();
    println!("  Cashier Performance");
    for c in &view.cashiers {
        println!(
            "    {:<20} {:>3} transactions  {}",
            c.name, c.transactions, c.revenue
        );
    }

    println!();
    println!("  Daily Revenue (last 7 sale dates)");
    for d in &view.daily {
        println!("    {}  {}", d.date.format("%Y-%m-%d"), d.revenue);
    }

    println!();
    println!("  Recent Transactions");
    for s in &view.transactions {
        println!(
            "    {:<10} {}  {:<16} {:>2} items  VAT {}  {}",
            short_id(&s.id),
            s.recorded_at.format("%Y-%m-%d %H:%M"),
            s.cashier,
            s.line_count,
            s.vat,
            s.total
        );
    }
}

/// First UUID segment - enough to tell rows apart in a table.
fn short_id(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}
