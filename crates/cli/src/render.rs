//! Plain-text rendering of cart snapshots.

use cartside_cart::types::CartItem;
use cartside_core::Price;

/// Print the cart as a table with line totals and a subtotal.
#[allow(clippy::print_stdout)]
pub fn cart_table(items: &[CartItem]) {
    if items.is_empty() {
        println!("Cart is empty");
        return;
    }

    println!(
        "{:>6}  {:<32}  {:>4}  {:>10}  {:>10}",
        "ID", "TITLE", "QTY", "UNIT", "TOTAL"
    );
    for item in items {
        println!(
            "{:>6}  {:<32}  {:>4}  {:>10}  {:>10}",
            item.id,
            item.title,
            item.quantity,
            item.price.to_string(),
            item.line_total().to_string()
        );
    }

    let subtotal: Price = items.iter().map(CartItem::line_total).sum();
    println!("{:>60}  {:>10}", "SUBTOTAL", subtotal.to_string());
}
