//! Cart store: the single source of truth for cart contents.
//!
//! The store keeps an ordered line list in memory, holds at most one line
//! per product identifier, and writes the whole list through a
//! [`CartStorage`] slot on every mutation. The in-memory state stays
//! authoritative: a failed write is logged and the operation still
//! succeeds (best-effort durability).
//!
//! Rehydration happens once, at [`CartStore::load`]: an absent or empty
//! slot yields an empty cart, and an unreadable slot fails open to an
//! empty cart rather than surfacing a parse error.

mod storage;

pub use storage::{CartStorage, JsonFileStorage, MemoryStorage, StorageError};

use std::sync::{Arc, Mutex, PoisonError};

use bramble_core::{CartLine, Product, ProductId};
use tracing::warn;

/// Shared handle to the cart.
///
/// Cheaply cloneable; the composition root creates it once and hands out
/// handles to whichever views need it. All operations are synchronous and
/// complete before the lock is released, so readers never observe a
/// half-applied mutation.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<Mutex<CartInner>>,
}

struct CartInner {
    lines: Vec<CartLine>,
    storage: Arc<dyn CartStorage>,
}

impl CartStore {
    /// Create the cart, rehydrating once from the given slot.
    ///
    /// A missing or empty slot yields an empty cart. A present but
    /// unreadable value also yields an empty cart, with a warning - the
    /// persisted cart is never worth failing the session over.
    #[must_use]
    pub fn load(storage: Arc<dyn CartStorage>) -> Self {
        let lines = match storage.read() {
            Ok(Some(contents)) if !contents.trim().is_empty() => {
                match serde_json::from_str(&contents) {
                    Ok(lines) => lines,
                    Err(e) => {
                        warn!(error = %e, "Persisted cart is unreadable; starting empty");
                        Vec::new()
                    }
                }
            }
            Ok(_) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Could not read persisted cart; starting empty");
                Vec::new()
            }
        };

        Self {
            inner: Arc::new(Mutex::new(CartInner { lines, storage })),
        }
    }

    /// Add a product to the cart.
    ///
    /// An existing line for the same identifier gains one unit; otherwise a
    /// new line with quantity 1 is appended, copying all product fields.
    pub fn add_to_cart(&self, product: &Product) {
        self.mutate(|lines| {
            if let Some(line) = lines.iter_mut().find(|l| l.id() == product.id) {
                line.quantity += 1;
            } else {
                lines.push(CartLine::new(product.clone()));
            }
        });
    }

    /// Increment the quantity of the matching line. No-op if absent.
    pub fn increase_quantity(&self, id: ProductId) {
        self.mutate(|lines| {
            if let Some(line) = lines.iter_mut().find(|l| l.id() == id) {
                line.quantity += 1;
            }
        });
    }

    /// Decrement the quantity of the matching line. No-op if absent.
    ///
    /// A line at quantity 1 is removed: quantities never reach zero or go
    /// negative.
    pub fn decrease_quantity(&self, id: ProductId) {
        self.mutate(|lines| {
            lines.retain_mut(|line| {
                if line.id() != id {
                    return true;
                }
                if line.quantity > 1 {
                    line.quantity -= 1;
                    return true;
                }
                false
            });
        });
    }

    /// Delete the matching line, if present.
    pub fn remove_from_cart(&self, id: ProductId) {
        self.mutate(|lines| {
            lines.retain(|l| l.id() != id);
        });
    }

    /// Empty the cart.
    pub fn clear(&self) {
        self.mutate(Vec::clear);
    }

    /// Snapshot of the current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        self.lock().lines.clone()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().lines.is_empty()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lock().lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of price times quantity across all lines.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.lock().lines.iter().map(CartLine::line_total).sum()
    }

    /// Apply a mutation under the lock, then persist the whole list.
    fn mutate(&self, f: impl FnOnce(&mut Vec<CartLine>)) {
        let mut inner = self.lock();
        f(&mut inner.lines);
        persist(&inner.lines, inner.storage.as_ref());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CartInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Serialize the full line list into the slot.
///
/// Best-effort: a failure is logged and otherwise ignored, leaving the
/// in-memory cart authoritative for the session.
fn persist(lines: &[CartLine], storage: &dyn CartStorage) {
    match serde_json::to_string(lines) {
        Ok(json) => {
            if let Err(e) = storage.write(&json) {
                warn!(error = %e, "Failed to persist cart; keeping in-memory state");
            }
        }
        Err(e) => {
            warn!(error = %e, "Failed to serialize cart; keeping in-memory state");
        }
    }
}
