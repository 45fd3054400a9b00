//! Sales and reports.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use super::json_body;
use crate::clients::{ApiClient, ApiError, ApiRequest, HttpMethod};

/// Filters accepted by `GET /reports/sales/`.
///
/// Dates are sent as `YYYY-MM-DD` and bound the sale's creation date
/// inclusively.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use temucosoft_api::resources::SalesReportFilter;
///
/// let filter = SalesReportFilter::new()
///     .branch(3)
///     .date_from(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// assert_eq!(filter.branch_id(), Some(3));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SalesReportFilter {
    branch: Option<u64>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
}

impl SalesReportFilter {
    /// Creates an empty filter (all visible sales).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the report to one branch.
    #[must_use]
    pub const fn branch(mut self, branch_id: u64) -> Self {
        self.branch = Some(branch_id);
        self
    }

    /// Excludes sales created before `date`.
    #[must_use]
    pub const fn date_from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    /// Excludes sales created after `date`.
    #[must_use]
    pub const fn date_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    /// Returns the branch filter, if any.
    #[must_use]
    pub const fn branch_id(&self) -> Option<u64> {
        self.branch
    }

    fn to_request(self) -> Result<ApiRequest, ApiError> {
        let format = |date: NaiveDate| date.format("%Y-%m-%d").to_string();
        Ok(ApiRequest::builder(HttpMethod::Get, "/reports/sales/")
            .query_param_opt("branch", self.branch)
            .query_param_opt("date_from", self.date_from.map(format))
            .query_param_opt("date_to", self.date_to.map(format))
            .build()?)
    }
}

impl ApiClient {
    /// Lists sales: `GET /sales/`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get_sales(&self) -> Result<Option<Value>, ApiError> {
        self.request(ApiRequest::get("/sales/")?).await
    }

    /// Records a sale: `POST /sales/`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn create_sale(&self, sale: &impl Serialize) -> Result<Option<Value>, ApiError> {
        let request = ApiRequest::builder(HttpMethod::Post, "/sales/")
            .body(json_body(sale)?)
            .build()?;
        self.request(request).await
    }

    /// Fetches the sales report: `GET /reports/sales/`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get_sales_report(
        &self,
        filter: SalesReportFilter,
    ) -> Result<Option<Value>, ApiError> {
        self.request(filter.to_request()?).await
    }

    /// Fetches the stock report: `GET /reports/stock/`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get_stock_report(&self) -> Result<Option<Value>, ApiError> {
        self.request(ApiRequest::get("/reports/stock/")?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_has_no_query() {
        let request = SalesReportFilter::new().to_request().unwrap();
        assert_eq!(request.endpoint, "/reports/sales/");
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_filter_formats_dates() {
        let request = SalesReportFilter::new()
            .branch(3)
            .date_from(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
            .date_to(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
            .to_request()
            .unwrap();

        assert_eq!(
            request.query,
            vec![
                ("branch".to_string(), "3".to_string()),
                ("date_from".to_string(), "2024-01-05".to_string()),
                ("date_to".to_string(), "2024-02-29".to_string()),
            ]
        );
    }
}
