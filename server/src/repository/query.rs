// marketplace_api/src/repository/query.rs

use std::cmp::Ordering;

use crate::models::Product;

/// Presentation order for a product listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
  /// Descending by `createdAt`.
  #[default]
  Newest,
  PriceAsc,
  PriceDesc,
}

impl SortOrder {
  /// Unrecognized values fall back to [`SortOrder::Newest`].
  pub fn parse(raw: Option<&str>) -> Self {
    match raw {
      Some("price-asc") => SortOrder::PriceAsc,
      Some("price-desc") => SortOrder::PriceDesc,
      _ => SortOrder::Newest,
    }
  }

  fn compare(self, a: &Product, b: &Product) -> Ordering {
    match self {
      SortOrder::Newest => b.created_at.cmp(&a.created_at),
      SortOrder::PriceAsc => a.price.total_cmp(&b.price),
      SortOrder::PriceDesc => b.price.total_cmp(&a.price),
    }
  }
}

/// Conjunctive listing filter. Empty strings behave as "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
  pub text: Option<String>,
  pub category: Option<String>,
  pub subcategory: Option<String>,
}

impl ProductFilter {
  pub fn new(text: Option<String>, category: Option<String>, subcategory: Option<String>) -> Self {
    let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
    Self {
      text: non_empty(text),
      category: non_empty(category),
      subcategory: non_empty(subcategory),
    }
  }

  pub fn with_category(mut self, category: impl Into<String>) -> Self {
    self.category = Some(category.into());
    self
  }

  pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
    self.subcategory = Some(subcategory.into());
    self
  }

  pub fn with_text(mut self, text: impl Into<String>) -> Self {
    self.text = Some(text.into());
    self
  }
}

/// Returns a filtered, sorted copy of `products`.
pub fn select(products: &[Product], filter: &ProductFilter, sort: SortOrder) -> Vec<Product> {
  let needle = filter.text.as_deref().map(str::to_lowercase);

  let mut items: Vec<Product> = products
    .iter()
    .filter(|p| filter.category.as_deref().map_or(true, |c| p.category == c))
    .filter(|p| filter.subcategory.as_deref().map_or(true, |s| p.subcategory == s))
    .filter(|p| {
      needle.as_deref().map_or(true, |n| {
        p.title.to_lowercase().contains(n) || p.description.to_lowercase().contains(n)
      })
    })
    .cloned()
    .collect();

  items.sort_by(|a, b| sort.compare(a, b));
  items
}

#[cfg(test)]
mod tests {
  use super::*;

  fn product(id: u64, title: &str, category: &str, price: f64, created_at: i64) -> Product {
    Product {
      id,
      title: title.to_string(),
      description: String::new(),
      price,
      category: category.to_string(),
      subcategory: String::new(),
      images: Vec::new(),
      likes: 0,
      dislikes: 0,
      created_at,
    }
  }

  fn ids(items: &[Product]) -> Vec<u64> {
    items.iter().map(|p| p.id).collect()
  }

  #[test]
  fn sort_parse_falls_back_to_newest() {
    assert_eq!(SortOrder::parse(Some("price-asc")), SortOrder::PriceAsc);
    assert_eq!(SortOrder::parse(Some("price-desc")), SortOrder::PriceDesc);
    assert_eq!(SortOrder::parse(Some("newest")), SortOrder::Newest);
    assert_eq!(SortOrder::parse(Some("cheapest")), SortOrder::Newest);
    assert_eq!(SortOrder::parse(None), SortOrder::Newest);
  }

  #[test]
  fn price_sorts_in_both_directions() {
    let products = vec![
      product(1, "A", "X", 150.0, 1),
      product(2, "B", "X", 50.0, 2),
      product(3, "C", "X", 800.0, 3),
    ];

    let asc = select(&products, &ProductFilter::default(), SortOrder::PriceAsc);
    let prices: Vec<f64> = asc.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![50.0, 150.0, 800.0]);

    let desc = select(&products, &ProductFilter::default(), SortOrder::PriceDesc);
    let prices: Vec<f64> = desc.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![800.0, 150.0, 50.0]);
  }

  #[test]
  fn default_sort_is_newest_first() {
    let products = vec![product(1, "A", "X", 1.0, 100), product(2, "B", "X", 1.0, 300), product(3, "C", "X", 1.0, 200)];
    assert_eq!(ids(&select(&products, &ProductFilter::default(), SortOrder::Newest)), vec![2, 3, 1]);
  }

  #[test]
  fn category_filter_is_exact_and_case_sensitive() {
    let products = vec![
      product(1, "Phone", "Electronics", 1.0, 1),
      product(2, "Radio", "electronics", 1.0, 2),
      product(3, "Chair", "Furniture", 1.0, 3),
    ];
    let filter = ProductFilter::default().with_category("Electronics");
    assert_eq!(ids(&select(&products, &filter, SortOrder::Newest)), vec![1]);
  }

  #[test]
  fn text_query_matches_title_or_description_case_insensitively() {
    let mut desk = product(2, "Standing Desk", "Furniture", 1.0, 2);
    desk.description = "Pairs well with any CHAIR".to_string();
    let products = vec![product(1, "Gaming Chair", "Furniture", 1.0, 1), desk, product(3, "Lamp", "Furniture", 1.0, 3)];

    let filter = ProductFilter::default().with_text("chair");
    assert_eq!(ids(&select(&products, &filter, SortOrder::Newest)), vec![2, 1]);
  }

  #[test]
  fn filters_compose_with_and() {
    let mut phone = product(1, "Pro Phone", "Electronics", 1.0, 1);
    phone.subcategory = "Phones".to_string();
    let mut laptop = product(2, "Pro Laptop", "Electronics", 1.0, 2);
    laptop.subcategory = "Laptops".to_string();
    let products = vec![phone, laptop, product(3, "Pro Chair", "Furniture", 1.0, 3)];

    let filter = ProductFilter::default()
      .with_text("pro")
      .with_category("Electronics")
      .with_subcategory("Laptops");
    assert_eq!(ids(&select(&products, &filter, SortOrder::Newest)), vec![2]);
  }

  #[test]
  fn empty_filter_values_are_ignored() {
    let products = vec![product(1, "A", "X", 1.0, 1), product(2, "B", "Y", 1.0, 2)];
    let filter = ProductFilter::new(Some(String::new()), Some(String::new()), None);
    assert_eq!(select(&products, &filter, SortOrder::Newest).len(), 2);
  }

  #[test]
  fn select_does_not_touch_the_source() {
    let products = vec![product(1, "A", "X", 9.0, 1), product(2, "B", "X", 1.0, 2)];
    let before = products.clone();
    let _ = select(&products, &ProductFilter::default(), SortOrder::PriceAsc);
    assert_eq!(products, before);
  }
}
