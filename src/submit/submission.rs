use super::error::SubmitError;
use super::error::TransportError;
use super::transport::Transport;
use crate::dto::ApiEquity;
use crate::dto::ApiFailure;
use crate::dto::Request;
use crate::form::Form;
use std::cell::RefCell;

/// Message shown when a failed reply carries no readable error body.
const FALLBACK: &str = "Calculation failed";

/// Run one submit against the equity service.
///
/// The form is borrowed only to begin and to settle, never across the
/// network await, so the page stays editable while the request is in
/// flight. Validation and build errors return before anything is sent.
pub async fn submit<T>(form: &RefCell<Form>, transport: &T) -> Result<(), SubmitError>
where
    T: Transport + ?Sized,
{
    let request = form.borrow_mut().begin()?;
    let result = dispatch(&request, transport).await;
    form.borrow_mut().settle(result.clone());
    result.map(|_| ()).map_err(SubmitError::from)
}

/// Send a built request and interpret the reply.
pub async fn dispatch<T>(request: &Request, transport: &T) -> Result<ApiEquity, TransportError>
where
    T: Transport + ?Sized,
{
    let body = request
        .body()
        .map_err(|e| TransportError::Decode(e.to_string()))?;
    let reply = transport.post(request.path(), body).await?;
    match reply.is_success() {
        true => {
            log::info!("{} answered {}", request.path(), reply.status);
            serde_json::from_str::<ApiEquity>(&reply.body).map_err(|e| TransportError::Decode(e.to_string()))
        }
        false => {
            let message = serde_json::from_str::<ApiFailure>(&reply.body)
                .ok()
                .and_then(|failure| failure.text().map(str::to_string))
                .unwrap_or_else(|| String::from(FALLBACK));
            log::warn!("{} answered {}: {}", request.path(), reply.status, message);
            Err(TransportError::Status {
                status: reply.status,
                message,
            })
        }
    }
}
