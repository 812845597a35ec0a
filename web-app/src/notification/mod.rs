use lettre::{address::AddressError, transport::smtp};
use log::info;
use shared::data::Car;
use thiserror::Error;

pub use self::email::EmailNotifier;

pub mod email;
pub mod fairing;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("'{0}' is not a valid email address: {1}")]
    InvalidAddress(String, AddressError),
    #[error("Could not build the email: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("The mail server could not be reached or refused the email: {0}")]
    Transport(#[from] smtp::Error),
}

/// Tells someone about changes to the registry.
#[rocket::async_trait]
pub trait Notifier: Send + Sync {
    /// Called once for every car that was successfully created.
    async fn car_created(&self, car: &Car) -> Result<(), NotificationError>;
}

/// Used when email notifications are disabled. Only writes to the log.
pub struct LogNotifier {}

#[rocket::async_trait]
impl Notifier for LogNotifier {
    async fn car_created(&self, car: &Car) -> Result<(), NotificationError> {
        info!(
            "Car {} registered: {} {} ({})",
            car.id, car.brand, car.model, car.year
        );
        Ok(())
    }
}
