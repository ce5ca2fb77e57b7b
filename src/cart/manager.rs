//! Cart Manager
//!
//! Owns one shopper's cart, the selected menu category and the state of the
//! cart-review panel. All operations are synchronous and take `&mut self`;
//! the caller decides where the manager lives (one per session in the HTTP
//! layer, a plain local in tests).

use super::models::{Cart, CartView, ContactInfo};
use crate::catalog::{Catalog, CategoryFilter, MenuItem};
use crate::error::StorefrontError;
use crate::sinks::{Notification, NotificationSink, OrderReceipt, OrderSink, OrderSubmission};

/// Title of the toast shown after an item is added
pub const ADDED_TITLE: &str = "Добавлено в корзину";
/// Title of the toast shown after an order is placed
pub const ORDER_PLACED_TITLE: &str = "Заказ оформлен!";
/// Body of the toast shown after an order is placed
pub const ORDER_PLACED_DESCRIPTION: &str = "Скоро с вами свяжется оператор";

pub struct CartManager<N> {
    cart: Cart,
    category: CategoryFilter,
    is_open: bool,
    notifier: N,
}

impl<N: Default> Default for CartManager<N> {
    fn default() -> Self {
        Self::new(N::default())
    }
}

impl<N> CartManager<N> {
    /// Creates an empty cart showing the whole menu, with the panel closed
    pub fn new(notifier: N) -> Self {
        Self {
            cart: Cart::new(),
            category: CategoryFilter::All,
            is_open: false,
            notifier,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Derived total, recomputed from the current lines
    pub fn total(&self) -> u64 {
        self.cart.total()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    // -------------------------------------------------------------------------
    // Cart lines
    // -------------------------------------------------------------------------

    pub fn remove_item(&mut self, id: u32) {
        self.cart.remove(id);
    }

    /// Sets the quantity of an existing line.
    ///
    /// Zero or negative values remove the line. A positive value for an id
    /// that is not in the cart does nothing.
    pub fn set_quantity(&mut self, id: u32, quantity: i64) {
        let quantity = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);
        self.cart.set_quantity(id, quantity);
    }

    // -------------------------------------------------------------------------
    // Category filter
    // -------------------------------------------------------------------------

    pub fn selected_category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Selects `"all"` or one of the catalog's categories. Unknown
    /// categories are rejected and the previous selection is kept.
    pub fn select_category(&mut self, catalog: &Catalog, raw: &str) -> Result<(), StorefrontError> {
        self.category = catalog.resolve_filter(raw)?;
        Ok(())
    }

    /// Catalog items visible under the current selection
    pub fn visible_items<'a>(&self, catalog: &'a Catalog) -> Vec<&'a MenuItem> {
        catalog.filter(&self.category)
    }

    // -------------------------------------------------------------------------
    // Review panel
    // -------------------------------------------------------------------------

    pub fn open_cart(&mut self) {
        self.is_open = true;
    }

    pub fn close_cart(&mut self) {
        self.is_open = false;
    }

    pub fn toggle_cart(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Whether nothing distinguishes this manager from a fresh one, apart
    /// from its notifier
    pub fn is_pristine(&self) -> bool {
        self.cart.is_empty() && self.category == CategoryFilter::All && !self.is_open
    }

    pub fn view(&self) -> CartView {
        match (self.is_open, self.cart.is_empty()) {
            (false, _) => CartView::Closed,
            (true, true) => CartView::OpenEmpty,
            (true, false) => CartView::OpenWithItems,
        }
    }
}

impl<N: NotificationSink> CartManager<N> {
    /// Adds one unit of `item` and announces it
    pub fn add_item(&mut self, item: &MenuItem) {
        self.cart.add(item);
        self.notifier
            .notify(Notification::new(ADDED_TITLE, item.name.clone()));
    }

    /// Places the current cart as an order.
    ///
    /// Contact fields must be non-blank. The cart must also have lines: this
    /// is a deliberate extension beyond contact validation, since the order
    /// form is only offered for a non-empty cart and over HTTP the call can
    /// arrive anyway. Once the sink accepts, the cart is emptied and the
    /// panel closed. A sink rejection leaves the cart untouched.
    pub fn submit_order(
        &mut self,
        contact: ContactInfo,
        sink: &dyn OrderSink,
    ) -> Result<OrderReceipt, StorefrontError> {
        if let Some(field) = contact.missing_field() {
            return Err(StorefrontError::MissingContactField(field));
        }
        if self.cart.is_empty() {
            return Err(StorefrontError::EmptyCart);
        }

        let order = OrderSubmission {
            contact,
            lines: self.cart.lines().to_vec(),
            total: self.cart.total(),
        };
        let receipt = sink.accept(&order)?;

        self.cart.clear();
        self.is_open = false;
        self.notifier.notify(Notification::new(
            ORDER_PLACED_TITLE,
            ORDER_PLACED_DESCRIPTION,
        ));

        Ok(receipt)
    }
}
