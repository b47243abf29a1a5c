//! Banking service: mock balance lookup.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Mock account balance reported by `/balance`.
pub const MOCK_BALANCE: Decimal = dec!(5000);

/// Render the balance sentence for an amount.
pub fn balance_message(balance: Decimal) -> String {
    format!("Your current balance is ${}.", balance)
}

/// Balance handler - always reports [`MOCK_BALANCE`].
#[utoipa::path(
    get,
    path = "/balance",
    tag = "banking",
    responses(
        (status = 200, description = "Current account balance", body = String, content_type = "text/plain")
    )
)]
pub async fn balance() -> String {
    balance_message(MOCK_BALANCE)
}
