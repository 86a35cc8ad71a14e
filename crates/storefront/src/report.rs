//! Plain-text rendering of a session's lists for the inspector.

use std::fmt::Write;

use crate::storefront::Storefront;

/// Cart lines, order summary and compare list, one item per line.
pub fn render(shop: &Storefront) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, shop);
    out
}

fn write_report(out: &mut String, shop: &Storefront) -> core::fmt::Result {
    let cart = shop.cart();
    writeln!(out, "Cart ({} items)", cart.total_items())?;
    for line in cart.lines() {
        writeln!(
            out,
            "  #{:<6} {:<32} {:>3} x {:>14} = {:>14}",
            line.id.get(),
            line.name,
            line.quantity,
            line.price,
            line.line_total()
        )?;
    }

    let summary = cart.summary();
    writeln!(out, "  subtotal {}", summary.subtotal)?;
    if summary.is_free_shipping() {
        writeln!(out, "  shipping Free")?;
    } else {
        writeln!(out, "  shipping {}", summary.shipping)?;
    }
    writeln!(out, "  tax      {}", summary.tax)?;
    writeln!(out, "  total    {}", summary.total)?;

    let compare = shop.compare();
    writeln!(out, "Compare ({}/{})", compare.len(), compare.max_items())?;
    for product in compare.entries() {
        writeln!(out, "  #{:<6} {} ({})", product.id.get(), product.name, product.category)?;
    }
    Ok(())
}
