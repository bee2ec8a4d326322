use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A vessel record as stored by the resource service.
///
/// Field names on the wire follow the service's Spanish schema
/// (`nombre`, `capacidad`, `descripcion`, `fecha`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vessel {
    /// Server-assigned identifier. Never produced client-side.
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "capacidad", with = "crate::utils::capacity")]
    pub capacity: f64,
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Only present for the dated record revision.
    #[serde(
        rename = "fecha",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::utils::datetime::option"
    )]
    pub scheduled_date: Option<NaiveDate>,
}

impl Vessel {
    /// The record without its identifier, as sent on create.
    #[must_use]
    pub fn to_new(&self) -> NewVessel {
        NewVessel {
            name: self.name.clone(),
            capacity: self.capacity,
            description: self.description.clone(),
            scheduled_date: self.scheduled_date,
        }
    }
}

/// Body of a create request: a vessel minus its `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewVessel {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "capacidad", with = "crate::utils::capacity")]
    pub capacity: f64,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(
        rename = "fecha",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::utils::datetime::option"
    )]
    pub scheduled_date: Option<NaiveDate>,
}

impl NewVessel {
    /// Attach a server-assigned id.
    #[must_use]
    pub fn with_id(self, id: i64) -> Vessel {
        Vessel {
            id,
            name: self.name,
            capacity: self.capacity,
            description: self.description,
            scheduled_date: self.scheduled_date,
        }
    }
}
