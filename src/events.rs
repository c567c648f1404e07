/// The recommended GA4 ecommerce event names. Collaborators use this to
/// badge decoded hits; the decoder itself never validates against it.
pub const GA4_ECOMMERCE_EVENTS: &[&str] = &[
    "add_payment_info",
    "add_shipping_info",
    "add_to_cart",
    "add_to_wishlist",
    "begin_checkout",
    "purchase",
    "refund",
    "remove_from_cart",
    "select_item",
    "select_promotion",
    "view_cart",
    "view_item",
    "view_item_list",
    "view_promotion",
];

/// Whether `event_name` is one of the recommended ecommerce events.
pub fn is_ecommerce_event(event_name: &str) -> bool {
    GA4_ECOMMERCE_EVENTS.contains(&event_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_ecommerce_events() {
        assert!(is_ecommerce_event("purchase"));
        assert!(is_ecommerce_event("view_item"));
        assert!(!is_ecommerce_event("page_view"));
        assert!(!is_ecommerce_event(""));
        // Exact match only, no prefixing.
        assert!(!is_ecommerce_event("purchase_extra"));
    }
}
