/// Readable title for a tab key. Unknown keys are returned as-is.
pub fn tab_label_for_key(key: &str) -> &str {
    match key {
        "dashboard" => "Dashboard",
        "a001_brand" => "Brands",
        "a002_category" => "Categories",
        "a003_subcategory" => "Subcategories",
        "a004_product" => "Products",
        "a005_blog" => "Blog Posts",
        "a006_order" => "Orders",
        "a007_warranty_claim" => "Warranty Claims",
        other => other,
    }
}

pub fn tab_icon_for_key(key: &str) -> &'static str {
    match key {
        "dashboard" => "layout-dashboard",
        "a001_brand" => "tag",
        "a002_category" => "folder-closed",
        "a003_subcategory" => "layers",
        "a004_product" => "products",
        "a005_blog" => "file-text",
        "a006_order" => "orders",
        "a007_warranty_claim" => "shield",
        _ => "item",
    }
}
