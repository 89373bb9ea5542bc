//! Storefront facade tying catalog, checkout, and the order sink together
use thiserror::Error;

use crate::catalog::{BouquetId, Catalog};
use crate::checkout::CheckoutWizard;
use crate::data::demo_catalog;
use crate::order::{Order, OrderSink};

/// Errors raised when opening a checkout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorefrontError {
    #[error("no bouquet with id {id} in the catalog")]
    UnknownBouquet { id: BouquetId },
    #[error("'{name}' is not available for ordering right now")]
    BouquetUnavailable { name: String },
}

/// The storefront: owns the catalog and forwards finished orders to a sink.
pub struct Storefront<S>
where
    S: OrderSink,
{
    catalog: Catalog,
    sink: S,
}

impl<S> Storefront<S>
where
    S: OrderSink,
{
    /// Create a storefront over the given catalog and order sink.
    pub const fn new(catalog: Catalog, sink: S) -> Self {
        Self { catalog, sink }
    }

    /// Create a storefront seeded with the compiled-in demo catalog.
    #[must_use]
    pub fn with_demo_catalog(sink: S) -> Self {
        Self::new(demo_catalog(), sink)
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Open a checkout wizard for one bouquet.
    ///
    /// # Errors
    ///
    /// Returns an error if the bouquet id is unknown or the bouquet is
    /// marked unavailable.
    pub fn begin_checkout(
        &self,
        bouquet_id: BouquetId,
        quantity: u32,
    ) -> Result<CheckoutWizard, StorefrontError> {
        let bouquet = self
            .catalog
            .find_bouquet(bouquet_id)
            .ok_or(StorefrontError::UnknownBouquet { id: bouquet_id })?;
        if !bouquet.available {
            return Err(StorefrontError::BouquetUnavailable {
                name: bouquet.name.clone(),
            });
        }
        Ok(CheckoutWizard::new(bouquet.clone(), quantity))
    }

    /// Hand a finalized order to the sink.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if the order cannot be accepted.
    pub fn place(&mut self, order: &Order) -> Result<(), S::Error> {
        self.sink.submit(order)
    }

    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }
}
