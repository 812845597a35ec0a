use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use log::info;
use shared::data::Car;

use crate::config::{NotificationConfig, LOCAL_SMTP_PORT};

use super::{NotificationError, Notifier};

pub struct EmailNotifier {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl EmailNotifier {
    pub fn new(config: &NotificationConfig) -> Result<Self, NotificationError> {
        let mailer = if config.smtp_port == LOCAL_SMTP_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            let credentials =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(credentials)
                .build()
        };

        info!(
            "Email notifications go to {} via {}:{}",
            config.to_address, config.smtp_host, config.smtp_port
        );

        Ok(Self {
            mailer,
            from: parse_mailbox(&config.from_address)?,
            to: parse_mailbox(&config.to_address)?,
        })
    }
}

#[rocket::async_trait]
impl Notifier for EmailNotifier {
    async fn car_created(&self, car: &Car) -> Result<(), NotificationError> {
        let message = car_created_message(self.from.clone(), self.to.clone(), car)?;
        self.mailer.send(message).await?;
        info!("Sent notification for car {} to {}", car.id, self.to);
        Ok(())
    }
}

pub fn car_created_message(
    from: Mailbox,
    to: Mailbox,
    car: &Car,
) -> Result<Message, NotificationError> {
    Ok(Message::builder()
        .from(from)
        .to(to)
        .subject(format!(
            "New car registered: {} {} ({})",
            car.brand, car.model, car.year
        ))
        .header(ContentType::TEXT_PLAIN)
        .body(format!(
            "A new car has been added to the registry.\n\n\
             Id: {}\nBrand: {}\nModel: {}\nYear: {}\n",
            car.id, car.brand, car.model, car.year
        ))?)
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotificationError> {
    address
        .parse()
        .map_err(|e| NotificationError::InvalidAddress(address.into(), e))
}
