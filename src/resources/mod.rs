//! Endpoint convenience methods.
//!
//! Every method here is sugar over [`ApiClient::request`](crate::ApiClient::request):
//! it fixes the endpoint path, the HTTP method and, for writes, the JSON
//! body. No method adds behavior of its own.
//!
//! | Area | Methods |
//! |------|---------|
//! | Catalog | `get_products`, `get_product`, `create_product`, `update_product`, `delete_product`, `get_inventory` |
//! | Orders | `get_orders`, `create_order`, `get_purchases`, `create_purchase` |
//! | Sales | `get_sales`, `create_sale`, `get_sales_report`, `get_stock_report` |
//! | Cart | `add_to_cart`, `add_one_to_cart`, `get_cart`, `checkout_cart` |
//! | Directory | `get_user_profile`, `get_suppliers`, `get_branches`, `get_users`, `get_subscriptions`, `get_my_subscription` |

mod cart;
mod catalog;
mod directory;
mod orders;
mod sales;

pub use cart::CartItem;
pub use sales::SalesReportFilter;

use serde::Serialize;
use serde_json::Value;

use crate::clients::ApiError;

/// Largest page size the backend accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// A page of a paginated list endpoint.
///
/// Converts from a bare page number, so `client.get_products(2_u32)` works.
///
/// # Example
///
/// ```rust
/// use temucosoft_api::resources::Page;
///
/// let page = Page::new(3).with_size(500);
/// assert_eq!(page.size(), Some(100));
/// assert_eq!(Page::from(1), Page::new(1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    number: u32,
    size: Option<u32>,
}

impl Page {
    /// Creates a page with the server's default size.
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self { number, size: None }
    }

    /// Requests `size` items per page, clamped to `1..=MAX_PAGE_SIZE`.
    #[must_use]
    pub fn with_size(self, size: u32) -> Self {
        Self {
            size: Some(size.clamp(1, MAX_PAGE_SIZE)),
            ..self
        }
    }

    /// Returns the page number.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Returns the requested page size, if any.
    #[must_use]
    pub const fn size(&self) -> Option<u32> {
        self.size
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(1)
    }
}

impl From<u32> for Page {
    fn from(number: u32) -> Self {
        Self::new(number)
    }
}

fn json_body(body: &impl Serialize) -> Result<Value, ApiError> {
    Ok(serde_json::to_value(body)?)
}
