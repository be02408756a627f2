use crate::error::RegistrationError;
use crate::handlers::register::register;
use crate::models::submission::{Outcome, Submission};
use actix_web::{
    HttpResponse, Responder,
    http::header::{self, ContentType},
    web,
};

const INDEX_HTML: &str = include_str!("../../templates/index.html");

pub async fn form() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

// Field values stay out of the logs.
#[tracing::instrument(skip_all)]
pub async fn submit(form: web::Form<Submission>) -> Result<HttpResponse, RegistrationError> {
    let outcome = register(form.into_inner()).inspect_err(|e| tracing::warn!("{}", e))?;

    match &outcome {
        Outcome::Registered { .. } => tracing::debug!("Registration accepted"),
        Outcome::FieldsRequired => tracing::debug!("Registration rejected: empty field"),
    }

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(outcome.to_string()))
}

pub async fn method_not_allowed() -> impl Responder {
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, "GET, POST"))
        .finish()
}
