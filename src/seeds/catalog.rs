//! Starter catalog seeding
//!
//! Creates the four standard feed categories and a small set of starter
//! products, but only when the store holds no categories at all.

use anyhow::Result;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::models::category::Entity as Category;
use crate::repositories::category::{CategoryRepository, CreateCategoryRequest};
use crate::repositories::product::{CreateProductRequest, ProductRepository};

struct StarterProduct {
    name: &'static str,
    category: &'static str,
    protein_percent: &'static str,
    size: &'static str,
    price: f64,
}

const STARTER_CATEGORIES: &[(&str, i32)] = &[
    ("Floating Fish Feed", 1),
    ("Sinking Fish Feed", 2),
    ("Shrimp Feed", 3),
    ("Specialty Feed", 4),
];

const STARTER_PRODUCTS: &[StarterProduct] = &[
    StarterProduct {
        name: "Floating Starter 1mm",
        category: "Floating Fish Feed",
        protein_percent: "32%",
        size: "1mm",
        price: 58.0,
    },
    StarterProduct {
        name: "Floating Grower 2mm",
        category: "Floating Fish Feed",
        protein_percent: "28%",
        size: "2mm",
        price: 52.0,
    },
    StarterProduct {
        name: "Sinking Grower 3mm",
        category: "Sinking Fish Feed",
        protein_percent: "26%",
        size: "3mm",
        price: 46.0,
    },
    StarterProduct {
        name: "Shrimp Crumble",
        category: "Shrimp Feed",
        protein_percent: "38%",
        size: "0.8mm",
        price: 95.0,
    },
];

/// Seeds the starter catalog into an empty store
pub async fn seed_catalog(db: &DatabaseConnection) -> Result<()> {
    let existing = Category::find().count(db).await?;
    if existing > 0 {
        log::info!("Catalog already populated ({} categories), skipping", existing);
        return Ok(());
    }

    let categories = CategoryRepository::new(db);
    let mut ids = std::collections::HashMap::new();

    for (name, display_order) in STARTER_CATEGORIES {
        let created = categories
            .create(CreateCategoryRequest {
                name: (*name).to_string(),
                image_url: None,
                display_order: Some(*display_order),
            })
            .await?;
        log::info!("Created category: {}", created.name);
        ids.insert(*name, created.id);
    }

    let products = ProductRepository::new(db);
    for starter in STARTER_PRODUCTS {
        let category_id = ids[starter.category];
        products
            .create(CreateProductRequest {
                name: starter.name.to_string(),
                category_id,
                protein_percent: Some(starter.protein_percent.to_string()),
                size: Some(starter.size.to_string()),
                price: Some(starter.price),
                ..Default::default()
            })
            .await?;
        log::info!("Created product: {}", starter.name);
    }

    Ok(())
}
