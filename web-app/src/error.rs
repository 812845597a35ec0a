use std::io::Cursor;

use rocket::{
    http::{ContentType, Status},
    response::{self, Responder},
    Request, Response,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An error occured whilst trying to access the database: {0}")]
    DatabaseError(#[from] sqlx::Error),
    #[error("No car with {0} as it's id could be found.")]
    CarNotFound(i32),
    #[error("The submitted car is not valid: {0}")]
    InvalidCar(#[from] shared::data::Error),
    #[error("No car store has been set up.")]
    DatabaseNotFound,
    #[error("No notifier has been set up.")]
    NotifierNotFound,
}

pub enum CarResult {
    NoContent,
}

pub trait ErrorResponder {
    fn response(&self) -> (Status, String);
}

impl ErrorResponder for Error {
    fn response(&self) -> (Status, String) {
        (
            match self {
                Error::DatabaseError(_) | Error::DatabaseNotFound | Error::NotifierNotFound => {
                    Status::InternalServerError
                }
                Error::CarNotFound(_) => Status::NotFound,
                Error::InvalidCar(_) => Status::UnprocessableEntity,
            },
            self.to_string(),
        )
    }
}

impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let (status, body) = self.response();
        Response::build()
            .status(status)
            .header(ContentType::Plain)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

impl<'r> Responder<'r, 'static> for CarResult {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        match self {
            CarResult::NoContent => Response::build().status(Status::NoContent).ok(),
        }
    }
}
