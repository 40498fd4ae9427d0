//! Cart context contract and accessor.

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::ContextError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One product line in the cart.
pub struct CartLine {
    /// Catalog identifier of the product.
    pub product_id: String,
    /// Display name at the time the line was added.
    pub name: String,
    /// Unit price in minor currency units.
    pub unit_price_cents: u64,
    /// Number of units.
    pub quantity: u32,
}

impl CartLine {
    /// Price of the whole line in minor currency units.
    pub fn total_cents(&self) -> u64 {
        self.unit_price_cents
            .saturating_mul(u64::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Payload for [`CartContext::update_quantity`].
pub struct QuantityUpdate {
    /// Line to update.
    pub product_id: String,
    /// New unit count.
    pub quantity: u32,
}

#[derive(Clone, Copy)]
/// State and actions published by the storefront's cart provider.
pub struct CartContext {
    /// Current cart lines.
    pub lines: RwSignal<Vec<CartLine>>,
    /// Adds a line (or merges it into an existing one, at the provider's discretion).
    pub add_line: Callback<CartLine>,
    /// Removes the line for a product id.
    pub remove_line: Callback<String>,
    /// Sets the unit count of a line.
    pub update_quantity: Callback<QuantityUpdate>,
    /// Empties the cart.
    pub clear: Callback<()>,
}

impl CartContext {
    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines
            .with(|lines| lines.iter().map(|line| line.quantity).sum())
    }

    /// Sum of all line totals in minor currency units.
    pub fn subtotal_cents(&self) -> u64 {
        self.lines
            .with(|lines| lines.iter().map(CartLine::total_cents).sum())
    }
}

/// Publishes `context` to descendant components.
pub fn provide_cart(context: CartContext) {
    provide_context(context);
}

/// Returns the current [`CartContext`], or [`ContextError::MissingProvider`] outside a provider.
pub fn try_use_cart() -> Result<CartContext, ContextError> {
    use_context::<CartContext>().ok_or(ContextError::MissingProvider {
        context: "CartContext",
    })
}

/// Returns the current [`CartContext`].
///
/// # Panics
///
/// Panics if called outside the cart provider.
pub fn use_cart() -> CartContext {
    try_use_cart().expect("CartContext not provided")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn line(product_id: &str, unit_price_cents: u64, quantity: u32) -> CartLine {
        CartLine {
            product_id: product_id.to_string(),
            name: product_id.to_uppercase(),
            unit_price_cents,
            quantity,
        }
    }

    fn in_memory_cart() -> CartContext {
        let lines = create_rw_signal(Vec::<CartLine>::new());
        CartContext {
            lines,
            add_line: Callback::new(move |line: CartLine| lines.update(|lines| lines.push(line))),
            remove_line: Callback::new(move |product_id: String| {
                lines.update(|lines| lines.retain(|line| line.product_id != product_id))
            }),
            update_quantity: Callback::new(move |update: QuantityUpdate| {
                lines.update(|lines| {
                    if let Some(line) = lines
                        .iter_mut()
                        .find(|line| line.product_id == update.product_id)
                    {
                        line.quantity = update.quantity;
                    }
                })
            }),
            clear: Callback::new(move |_: ()| lines.set(Vec::new())),
        }
    }

    #[test]
    fn missing_provider_is_reported() {
        let runtime = create_runtime();
        assert_eq!(
            try_use_cart().err(),
            Some(ContextError::MissingProvider {
                context: "CartContext"
            })
        );
        runtime.dispose();
    }

    #[test]
    fn use_cart_forwards_provider_state_and_actions() {
        let runtime = create_runtime();
        let provided = in_memory_cart();
        provide_cart(provided);

        let cart = use_cart();
        cart.add_line.call(line("mug", 1_250, 2));
        cart.add_line.call(line("tee", 2_000, 1));
        assert_eq!(provided.lines.get_untracked().len(), 2);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal_cents(), 4_500);

        cart.update_quantity.call(QuantityUpdate {
            product_id: "tee".to_string(),
            quantity: 3,
        });
        assert_eq!(cart.subtotal_cents(), 8_500);

        cart.remove_line.call("mug".to_string());
        assert_eq!(cart.item_count(), 3);

        cart.clear.call(());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.subtotal_cents(), 0);
        runtime.dispose();
    }

    #[test]
    fn cart_line_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(line("mug", 1_250, 2)).expect("serialize");
        assert_eq!(json["productId"], "mug");
        assert_eq!(json["unitPriceCents"], 1_250);
        assert_eq!(json["quantity"], 2);
    }

    #[test]
    fn line_total_saturates() {
        assert_eq!(line("bulk", u64::MAX, 2).total_cents(), u64::MAX);
    }
}
