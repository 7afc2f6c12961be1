//! Mock data the store is seeded with at application start.
//!
//! Stands in for a backend; ids are fixed slugs so the seeded records can
//! reference each other.

use rust_decimal::Decimal;

use crate::domain::aggregates::product::VariantAttribute;
use crate::domain::aggregates::{
    Address, AttributeDefinition, AttributeType, Category, Order, OrderItem, OrderStatus, Product,
    ProductStatus, ProductVariant,
};
use crate::domain::value_objects::{Money, Sku};
use crate::store::AppState;

pub fn initial_state() -> AppState {
    let categories = seed_categories();
    let products = seed_products(&categories);
    let orders = seed_orders(&products);
    AppState {
        products,
        orders,
        categories,
        attribute_definitions: seed_attribute_definitions(),
        dashboard_stats: None,
    }
}

fn seed_categories() -> Vec<Category> {
    let mut womens = Category::new("Women's Clothing");
    womens.id = "womens-clothing".into();
    let mut mens = Category::new("Men's Clothing");
    mens.id = "mens-clothing".into();
    let mut accessories = Category::new("Accessories");
    accessories.id = "accessories".into();
    vec![womens, mens, accessories]
}

fn seed_products(categories: &[Category]) -> Vec<Product> {
    let womens = categories[0].id.clone();

    let sweater_sku = Sku::new("KAZ-001").expect("seed sku");
    let mut sweater = Product::new(
        "Winter Sweater",
        sweater_sku.clone(),
        &womens,
        Money::usd(Decimal::new(29999, 2)),
    );
    sweater.description = "Soft wool-blend winter sweater".into();
    sweater.compare_at_price = Some(Money::usd(Decimal::new(39999, 2)));
    sweater.status = ProductStatus::Active;
    sweater.images = vec!["/images/winter-sweater.jpg".into()];
    sweater.tags = vec!["winter".into(), "sweater".into(), "wool".into()];
    sweater.variants = vec![
        ProductVariant::new(
            &sweater.id,
            &sweater_sku,
            vec![VariantAttribute::new("Color", "Black"), VariantAttribute::new("Size", "S")],
            15,
            5,
        ),
        ProductVariant::new(
            &sweater.id,
            &sweater_sku,
            vec![VariantAttribute::new("Color", "Black"), VariantAttribute::new("Size", "M")],
            3,
            5,
        ),
    ];

    let jeans_sku = Sku::new("DEN-001").expect("seed sku");
    let mut jeans = Product::new(
        "Denim Jeans",
        jeans_sku.clone(),
        &womens,
        Money::usd(Decimal::new(19999, 2)),
    );
    jeans.description = "Classic-cut denim jeans".into();
    jeans.status = ProductStatus::Active;
    jeans.images = vec!["/images/denim-jeans.jpg".into()];
    jeans.tags = vec!["denim".into(), "jeans".into(), "casual".into()];
    jeans.variants = vec![ProductVariant::new(
        &jeans.id,
        &jeans_sku,
        vec![VariantAttribute::new("Color", "Blue"), VariantAttribute::new("Size", "28")],
        12,
        3,
    )];

    vec![sweater, jeans]
}

fn seed_orders(products: &[Product]) -> Vec<Order> {
    let sweater = &products[0];
    let black_s = &sweater.variants[0];
    let address = Address {
        first_name: "Jane".into(),
        last_name: "Doe".into(),
        company: None,
        address1: "12 Garden Street".into(),
        address2: None,
        city: "Springfield".into(),
        province: "IL".into(),
        country: "US".into(),
        zip: "62701".into(),
        phone: None,
    };

    let item = OrderItem::snapshot(sweater, black_s, 1);
    let subtotal = item.total.clone();
    let mut order = Order::new(
        "ORD-001",
        "cust-1",
        "jane@example.com",
        "Jane Doe",
        vec![item],
        subtotal,
        Money::usd(Decimal::new(5400, 2)),
        Money::usd(Decimal::new(2500, 2)),
        address.clone(),
        address,
    );
    order.status = OrderStatus::Processing;
    vec![order]
}

fn seed_attribute_definitions() -> Vec<AttributeDefinition> {
    vec![
        AttributeDefinition {
            id: "color".into(),
            name: "Color".into(),
            kind: AttributeType::Color,
            values: vec!["Black", "White", "Blue", "Red", "Green", "Yellow"]
                .into_iter()
                .map(String::from)
                .collect(),
            required: true,
        },
        AttributeDefinition {
            id: "size".into(),
            name: "Size".into(),
            kind: AttributeType::Size,
            values: vec!["XS", "S", "M", "L", "XL", "XXL", "28", "30", "32", "34", "36"]
                .into_iter()
                .map(String::from)
                .collect(),
            required: true,
        },
    ]
}
