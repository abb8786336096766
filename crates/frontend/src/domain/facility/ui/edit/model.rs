use contracts::domain::facility::Facility;
use contracts::domain::reference::{Contact, Operator, PaymentMethod, Service};
use gloo_net::http::Request;
use serde::Deserialize;

const BASE_URL: &str = "/api/v1";

#[derive(Deserialize)]
struct Results<T> {
    results: Vec<T>,
}

#[derive(Deserialize)]
struct SaveResponse {
    id: i64,
}

pub async fn fetch_by_id(id: i64) -> Result<Facility, String> {
    Request::get(&format!("{}/facilities/{}", BASE_URL, id))
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

/// Create or update, returning the server-assigned id
pub async fn save(facility: &Facility) -> Result<i64, String> {
    let builder = match facility.id {
        Some(id) => Request::put(&format!("{}/facilities/{}", BASE_URL, id.value())),
        None => Request::post(&format!("{}/facilities", BASE_URL)),
    };
    let response: SaveResponse = builder
        .json(facility)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())?;
    Ok(response.id)
}

pub async fn fetch_services() -> Result<Vec<Service>, String> {
    let response: Results<Service> = Request::get(&format!("{}/services", BASE_URL))
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())?;
    Ok(response.results)
}

pub async fn fetch_payment_methods() -> Result<Vec<PaymentMethod>, String> {
    let response: Results<PaymentMethod> = Request::get(&format!("{}/payment-methods", BASE_URL))
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())?;
    Ok(response.results)
}

pub async fn fetch_contacts() -> Result<Vec<Contact>, String> {
    let response: Results<Contact> = Request::get(&format!("{}/contacts", BASE_URL))
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())?;
    Ok(response.results)
}

pub async fn fetch_operators() -> Result<Vec<Operator>, String> {
    let response: Results<Operator> = Request::get(&format!("{}/operators", BASE_URL))
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())?;
    Ok(response.results)
}
