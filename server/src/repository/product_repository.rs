// marketplace_api/src/repository/product_repository.rs

use std::path::Path;

use docstore::{DocumentStore, JsonFile, Memory};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use super::ids::next_id;
use super::query::{self, ProductFilter, SortOrder};
use super::seed::seed_products;
use crate::errors::{AppError, Result};
use crate::models::{Catalog, CreateProductRequest, Product, ProductPatch};

/// Product operations over a [`DocumentStore<Catalog>`].
///
/// Each operation holds `op_lock` across its read (and modify-write), so two
/// requests in this process cannot interleave and lose an update.
pub struct ProductRepository {
  store: DocumentStore<Catalog>,
  op_lock: Mutex<()>,
}

impl ProductRepository {
  pub fn new(store: DocumentStore<Catalog>) -> Self {
    Self {
      store,
      op_lock: Mutex::new(()),
    }
  }

  pub fn json_file(path: impl AsRef<Path>) -> Self {
    Self::new(DocumentStore::new(JsonFile::new(path.as_ref())))
  }

  pub fn in_memory(memory: Memory) -> Self {
    Self::new(DocumentStore::new(memory))
  }

  pub fn location(&self) -> String {
    self.store.location()
  }

  #[instrument(name = "repository::list", skip(self), err(Display))]
  pub async fn list(&self, filter: &ProductFilter, sort: SortOrder) -> Result<Vec<Product>> {
    let _op = self.op_lock.lock().await;
    self.store.read().await?;

    let items = query::select(&self.store.data().products, filter, sort);
    debug!(count = items.len(), "Products selected.");
    Ok(items)
  }

  #[instrument(name = "repository::get", skip(self), err(Display))]
  pub async fn get(&self, id: u64) -> Result<Product> {
    let _op = self.op_lock.lock().await;
    self.store.read().await?;

    let found = self.store.data().products.iter().find(|p| p.id == id).cloned();
    found.ok_or_else(AppError::not_found)
  }

  /// Validates before touching the store, so a rejected request leaves the
  /// catalog untouched.
  #[instrument(name = "repository::create", skip(self, input), err(Display))]
  pub async fn create(&self, input: CreateProductRequest) -> Result<Product> {
    let new_product = input.validate()?;

    let _op = self.op_lock.lock().await;
    self.store.read().await?;

    let created_at = chrono::Utc::now().timestamp_millis();
    let product = self.store.update(|catalog| {
      let product = new_product.into_product(next_id(&catalog.products), created_at);
      catalog.products.push(product.clone());
      product
    });
    self.store.write().await?;

    info!(product_id = product.id, "Product created.");
    Ok(product)
  }

  #[instrument(name = "repository::update", skip(self, patch), err(Display))]
  pub async fn update(&self, id: u64, patch: ProductPatch) -> Result<Product> {
    let _op = self.op_lock.lock().await;
    self.store.read().await?;

    let updated = self.store.update(|catalog| {
      let product = catalog.products.iter_mut().find(|p| p.id == id)?;
      patch.apply_to(product);
      Some(product.clone())
    });
    let Some(product) = updated else {
      warn!(product_id = id, "Update target not found.");
      return Err(AppError::not_found());
    };
    self.store.write().await?;

    info!(product_id = id, "Product updated.");
    Ok(product)
  }

  #[instrument(name = "repository::delete", skip(self), err(Display))]
  pub async fn delete(&self, id: u64) -> Result<()> {
    let _op = self.op_lock.lock().await;
    self.store.read().await?;

    let removed = self.store.update(|catalog| {
      let index = catalog.products.iter().position(|p| p.id == id)?;
      Some(catalog.products.remove(index))
    });
    if removed.is_none() {
      warn!(product_id = id, "Delete target not found.");
      return Err(AppError::not_found());
    }
    self.store.write().await?;

    info!(product_id = id, "Product deleted.");
    Ok(())
  }

  /// Inserts the starter listings when the catalog has no products. Returns
  /// how many were inserted (0 or 2).
  #[instrument(name = "repository::seed_if_empty", skip(self), err(Display))]
  pub async fn seed_if_empty(&self) -> Result<usize> {
    let _op = self.op_lock.lock().await;
    self.store.read().await?;

    if !self.store.data().products.is_empty() {
      debug!("Catalog already populated; skipping seed.");
      return Ok(0);
    }

    let seeds = seed_products(chrono::Utc::now().timestamp_millis());
    let inserted = seeds.len();
    self.store.update(|catalog| catalog.products = seeds);
    self.store.write().await?;

    info!(inserted, "Seeded empty catalog.");
    Ok(inserted)
  }
}

impl std::fmt::Debug for ProductRepository {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ProductRepository")
      .field("store", &self.store)
      .finish_non_exhaustive()
  }
}
