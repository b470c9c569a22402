//! Cart page.

use storefront_commerce::cart::{CartLine, CartView};

use super::{html_escape, Layout};

/// Render the cart page for a priced cart view.
pub fn render_cart_page(view: &CartView<'_>, store_name: &str) -> String {
    let main = if view.is_empty() {
        r#"<section class="cart">
    <h1 class="page-title">Your Cart</h1>
    <p class="empty-state">Your cart is empty.</p>
    <a href="/" class="button">Continue shopping</a>
</section>"#
            .to_string()
    } else {
        let rows: String = view.lines.iter().map(render_cart_line).collect();
        format!(
            r#"<section class="cart">
    <h1 class="page-title">Your Cart</h1>
    <table class="cart-table">
        <thead>
            <tr><th>Product</th><th>Price</th><th>Quantity</th><th>Subtotal</th><th></th></tr>
        </thead>
        <tbody>
{rows}
        </tbody>
    </table>
    <div class="cart-summary">
        <p>Items: <span class="cart-total-quantity">{quantity}</span></p>
        <p class="cart-total">Total: $<span class="cart-total-amount">{total}</span></p>
        <button class="clear-cart-btn">Clear Cart</button>
    </div>
</section>"#,
            quantity = view.total_quantity,
            total = view.total.display_amount(),
        )
    };

    Layout::new(store_name, "Your Cart")
        .with_cart_count(view.total_quantity)
        .render(&main)
}

fn render_cart_line(line: &CartLine<'_>) -> String {
    let id = line.product.id;
    format!(
        r#"            <tr class="cart-line" data-product-id="{id}">
                <td class="cart-product">{name}</td>
                <td class="cart-price">{price}</td>
                <td class="cart-quantity">
                    <button class="decrease-qty" data-product-id="{id}" aria-label="Decrease quantity">-</button>
                    <input class="qty-input" data-product-id="{id}" type="number" min="1" value="{quantity}" readonly>
                    <button class="increase-qty" data-product-id="{id}" aria-label="Increase quantity">+</button>
                </td>
                <td class="cart-subtotal">{subtotal}</td>
                <td><button class="remove-item-btn" data-product-id="{id}">Remove</button></td>
            </tr>
"#,
        name = html_escape(&line.product.name),
        price = line.product.price.display(),
        quantity = line.quantity,
        subtotal = line.subtotal.display(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::prelude::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![Product::new(
            ProductId::new(7),
            "Wireless Mouse",
            Money::from_decimal(19.99),
        )])
        .unwrap()
    }

    #[test]
    fn test_cart_page_lines_and_total() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, ProductId::new(7)).unwrap();
        cart.add(&catalog, ProductId::new(7)).unwrap();

        let view = cart.view(&catalog).unwrap();
        let html = render_cart_page(&view, "Tech Store");

        assert!(html.contains("Wireless Mouse"));
        assert!(html.contains(r#"value="2""#));
        assert!(html.contains(r#"<span class="cart-total-amount">39.98</span>"#));
        assert!(html.contains("$39.98"));
    }

    #[test]
    fn test_empty_cart_page() {
        let catalog = catalog();
        let view = Cart::new().view(&catalog).unwrap();
        let html = render_cart_page(&view, "Tech Store");
        assert!(html.contains("Your cart is empty."));
    }
}
