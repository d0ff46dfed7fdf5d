// marketplace_api/src/repository/seed.rs

//! Default listings inserted when the catalog starts out empty.

use crate::models::Product;

/// The two starter listings. The chair is one millisecond newer than the
/// phone, so it leads the default (newest-first) listing.
pub fn seed_products(now_ms: i64) -> Vec<Product> {
  vec![
    Product {
      id: 1,
      title: "iPhone 13 Pro".to_string(),
      description: "Excellent condition, 256GB, Sierra Blue. Battery health 92%.".to_string(),
      price: 799.0,
      category: "Electronics".to_string(),
      subcategory: "Phones".to_string(),
      images: vec!["https://images.unsplash.com/photo-1632661674596-df8be070a5c5?w=800".to_string()],
      likes: 0,
      dislikes: 0,
      created_at: now_ms,
    },
    Product {
      id: 2,
      title: "Gaming Chair".to_string(),
      description: "Ergonomic gaming chair with lumbar support and adjustable armrests.".to_string(),
      price: 149.99,
      category: "Furniture".to_string(),
      subcategory: "Chairs".to_string(),
      images: vec!["https://images.unsplash.com/photo-1598550476439-6847785fcea6?w=800".to_string()],
      likes: 0,
      dislikes: 0,
      created_at: now_ms + 1,
    },
  ]
}
