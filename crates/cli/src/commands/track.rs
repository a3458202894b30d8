//! Order tracking command.

use panda_pantry_storefront::AppError;
use panda_pantry_storefront::controllers::{TrackOutcome, TrackingController};

use super::OpenError;

/// Errors that can occur during tracking commands.
#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    /// Application state could not be opened.
    #[error(transparent)]
    Open(#[from] OpenError),

    /// The lookup failed; the message is the one the view would show.
    #[error("{}", .0.user_message())]
    App(#[from] AppError),
}

/// Look up an order by tracking number against the remote bucket.
#[allow(clippy::print_stdout)]
pub async fn track(number: &str) -> Result<(), TrackError> {
    let app = super::open_app()?;
    let mut tracking = TrackingController::attach(&app);

    match tracking.track_order(number).await? {
        TrackOutcome::Found(order) => {
            println!("Order {}: {}", order.tracking_number, order.status);
            if let Some(customer) = &order.customer_name {
                println!("customer: {customer}");
            }
            if let Some(total) = order.total {
                println!("total:    {total}");
            }
        }
        TrackOutcome::NotFound => println!("No order found with number {number}"),
    }
    Ok(())
}
