//! Presentation state for the product screen.
//!
//! [`ProductViewModel`] sits between the storage layer and whatever renders
//! the products. It owns the list currently shown, the product being created
//! or edited (the "operating" product) and the busy indicator. Each command
//! updates the in-memory list together with storage so the two stay in step.
//!
//! The busy indicator is published on a `tokio::sync::watch` channel: a front
//! end subscribes once and sees `is_busy` flip on while a command runs and
//! back off (with the idle text `Processing...`) when it finishes, whether
//! it succeeded or not.
//!
//! User-facing problems (validation failures, zero rows affected) are shown
//! through a [`Notifier`]. Storage errors are not caught here and come back
//! to the caller.

use crate::db::context::DatabaseContext;
use crate::libs::messages::Message;
use crate::libs::product::Product;
use crate::msg_error;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::watch;

/// Shows alerts to the user.
pub trait Notifier: Send + Sync {
    fn alert(&self, title: &str, message: &str);
}

/// Prints alerts on the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, title: &str, message: &str) {
        msg_error!(Message::Alert {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusyState {
    pub is_busy: bool,
    pub busy_text: String,
}

impl BusyState {
    pub fn idle() -> Self {
        BusyState {
            is_busy: false,
            busy_text: Message::Processing.to_string(),
        }
    }

    fn working(text: Message) -> Self {
        BusyState {
            is_busy: true,
            busy_text: text.to_string(),
        }
    }
}

pub struct ProductViewModel {
    context: DatabaseContext,
    notifier: Arc<dyn Notifier>,
    products: Vec<Product>,
    operating_product: Product,
    is_refreshing: bool,
    busy: watch::Sender<BusyState>,
}

impl ProductViewModel {
    pub fn new(context: DatabaseContext, notifier: Arc<dyn Notifier>) -> Self {
        let (busy, _) = watch::channel(BusyState::idle());

        ProductViewModel {
            context,
            notifier,
            products: Vec::new(),
            operating_product: Product::default(),
            is_refreshing: false,
            busy,
        }
    }

    pub fn context(&self) -> &DatabaseContext {
        &self.context
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn operating_product(&self) -> &Product {
        &self.operating_product
    }

    /// Lets the view edit the operating product's fields in place.
    pub fn operating_product_mut(&mut self) -> &mut Product {
        &mut self.operating_product
    }

    pub fn is_busy(&self) -> bool {
        self.busy.borrow().is_busy
    }

    pub fn busy_text(&self) -> String {
        self.busy.borrow().busy_text.clone()
    }

    pub fn is_refreshing(&self) -> bool {
        self.is_refreshing
    }

    /// Receiver for the busy indicator.
    pub fn subscribe(&self) -> watch::Receiver<BusyState> {
        self.busy.subscribe()
    }

    /// Fetches every product and appends it to the shown list.
    ///
    /// The list is not cleared first, so calling this twice shows every
    /// product twice. Use [`ProductViewModel::refresh`] to reload.
    pub async fn load_products(&mut self) -> Result<usize> {
        self.begin(Message::LoadingProducts);
        let result = self.context.get_all::<Product>().await;
        self.finish();

        let products = result?;
        let count = products.len();
        self.products.extend(products);
        Ok(count)
    }

    /// Replaces the shown list with a fresh copy of storage.
    pub async fn refresh(&mut self) -> Result<usize> {
        self.is_refreshing = true;
        self.begin(Message::RefreshingProducts);
        let result = self.context.get_all::<Product>().await;
        self.finish();
        self.is_refreshing = false;

        let products = result?;
        let count = products.len();
        self.products = products;
        Ok(count)
    }

    /// Starts editing `product`, or a blank new product when `None`.
    pub fn set_operating_product(&mut self, product: Option<Product>) {
        self.operating_product = product.unwrap_or_default();
    }

    /// Validates and persists the operating product.
    ///
    /// Returns `Ok(true)` when the product was stored and the operating
    /// product was reset to blank; `Ok(false)` when an alert was shown
    /// instead.
    pub async fn save_product(&mut self) -> Result<bool> {
        if let Err(e) = self.operating_product.validate() {
            self.notifier.alert(&Message::ValidationErrorTitle.to_string(), &e.to_string());
            return Ok(false);
        }

        let busy_text = if self.operating_product.is_new() {
            Message::CreatingProduct
        } else {
            Message::UpdatingProduct
        };

        self.begin(busy_text);
        let result = self.persist_operating_product().await;
        self.finish();
        result
    }

    async fn persist_operating_product(&mut self) -> Result<bool> {
        if self.operating_product.is_new() {
            let mut product = self.operating_product.clone();
            if !self.context.insert(&mut product).await? {
                self.alert_error(Message::ProductCreateFailed);
                return Ok(false);
            }
            self.products.push(product);
        } else {
            if !self.context.update(&self.operating_product).await? {
                self.alert_error(Message::ProductUpdateFailed);
                return Ok(false);
            }

            let copy = self.operating_product.clone();
            match self.products.iter().position(|p| p.id == copy.id) {
                Some(index) => self.products[index] = copy,
                None => self.products.push(copy),
            }
        }

        self.operating_product = Product::default();
        Ok(true)
    }

    /// Deletes the product with `id` from storage and from the shown list.
    pub async fn delete_product(&mut self, id: i64) -> Result<bool> {
        self.begin(Message::DeletingProduct);
        let result = self.context.delete_by_key::<Product>(id).await;
        self.finish();

        if !result? {
            self.alert_error(Message::ProductDeleteFailed);
            return Ok(false);
        }

        if let Some(index) = self.products.iter().position(|p| p.id == id) {
            self.products.remove(index);
        }
        Ok(true)
    }

    fn alert_error(&self, message: Message) {
        self.notifier.alert(&Message::ErrorTitle.to_string(), &message.to_string());
    }

    fn begin(&self, text: Message) {
        self.busy.send_replace(BusyState::working(text));
    }

    fn finish(&self) {
        self.busy.send_replace(BusyState::idle());
    }
}
