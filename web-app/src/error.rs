use std::io::Cursor;

use rocket::{
    http::{ContentType, Status},
    response::{self, Responder},
    Request, Response,
};
use thiserror::Error;

use crate::templates::TemplateError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An error occurred whilst rendering: {0}")]
    TeraRendering(#[from] tera::Error),
    #[error("Could not load templates: {0}")]
    TemplateLoading(#[from] TemplateError),
    #[error("The template store is not available.")]
    TemplateNotFound,
}

pub trait ErrorResponder {
    fn response(&self) -> (Status, String);
}

impl ErrorResponder for Error {
    fn response(&self) -> (Status, String) {
        (
            match self {
                Error::TeraRendering(_) | Error::TemplateLoading(_) | Error::TemplateNotFound => {
                    Status::InternalServerError
                }
            },
            self.to_string(),
        )
    }
}

impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let (status, body) = self.response();
        error!("{body}");
        Response::build()
            .status(status)
            .header(ContentType::Plain)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}
