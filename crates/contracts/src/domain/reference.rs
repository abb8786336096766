use crate::shared::MultilingualString;
use serde::{Deserialize, Serialize};

/// Additional service offered at a facility (lighting, surveillance, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub name: MultilingualString,
}

/// Accepted payment method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: i64,
    pub name: MultilingualString,
}

/// Contact the facility refers to for emergencies, operation or service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub name: MultilingualString,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Operator running one or more facilities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    pub id: i64,
    pub name: MultilingualString,
}
