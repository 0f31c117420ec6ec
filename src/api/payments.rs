//! Payment order endpoints

use uuid::Uuid;

use super::{ApiClient, ApiError};
use crate::types::PaymentOrder;

impl ApiClient {
    /// Fetch a payment order by its reference, as handed back by the
    /// payment provider's redirect.
    pub async fn fetch_order(&self, order_id: Uuid) -> Result<PaymentOrder, ApiError> {
        self.get(&format!("/orders/{}", order_id)).await
    }
}
