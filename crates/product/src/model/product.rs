use serde_json::{Map, Value};

pub const PRODUCTS_TABLE: &str = "products";

/// One row of `products` as rendered by `row_to_json`: every physical column,
/// keyed by column name.
pub type ProductRow = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedProduct {
    pub name: &'static str,
    pub description: &'static str,
    pub price: f64,
    pub image_url: &'static str,
    pub stock_quantity: i32,
}

pub const SEED_PRODUCTS: [SeedProduct; 4] = [
    SeedProduct {
        name: "Smartphone X",
        description: "Latest smartphone with advanced features",
        price: 699.99,
        image_url: "https://via.placeholder.com/150",
        stock_quantity: 25,
    },
    SeedProduct {
        name: "Laptop Pro",
        description: "High-performance laptop for professionals",
        price: 1299.99,
        image_url: "https://via.placeholder.com/150",
        stock_quantity: 15,
    },
    SeedProduct {
        name: "T-shirt Basic",
        description: "Comfortable cotton t-shirt",
        price: 19.99,
        image_url: "https://via.placeholder.com/150",
        stock_quantity: 100,
    },
    SeedProduct {
        name: "Kitchen Mixer",
        description: "Powerful kitchen mixer for baking",
        price: 149.99,
        image_url: "https://via.placeholder.com/150",
        stock_quantity: 10,
    },
];
