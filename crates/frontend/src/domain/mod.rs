pub mod a001_brand;
pub mod a002_category;
pub mod a003_subcategory;
pub mod a004_product;
pub mod a005_blog;
pub mod a006_order;
pub mod a007_warranty_claim;
