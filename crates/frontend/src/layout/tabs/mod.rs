pub mod registry;
pub mod tab_labels;

pub use registry::render_tab_content;
pub use tab_labels::tab_label_for_key;

/// Home screen of the shell.
pub const DEFAULT_TAB: &str = "dashboard";

/// Tab keys in sidebar order.
pub const TAB_KEYS: [&str; 8] = [
    "dashboard",
    "a004_product",
    "a001_brand",
    "a002_category",
    "a003_subcategory",
    "a005_blog",
    "a006_order",
    "a007_warranty_claim",
];

pub fn is_known_tab(key: &str) -> bool {
    TAB_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tab_has_a_label() {
        for key in TAB_KEYS {
            assert_ne!(tab_label_for_key(key), key);
        }
        assert!(!is_known_tab("sys_users"));
    }
}
