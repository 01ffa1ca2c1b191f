use serde::{Deserialize, Serialize};

/// Corporate officer record as supplied by the calling pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfficerRecord {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub middle_names: Vec<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub psc_holdings: Vec<Ownership>,
    #[serde(default)]
    pub address: Option<Address>,
    /// Explicit surname, only consulted for the company-name check
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
}

impl OfficerRecord {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Self::default()
        }
    }
}

/// Officer appointment at a company
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub company_number: String,
    #[serde(default)]
    pub role_type: String,
    #[serde(default)]
    pub appointed_on: Option<String>,
    #[serde(default)]
    pub resigned_on: Option<String>,
}

impl Role {
    pub fn new(company_number: impl Into<String>, role_type: impl Into<String>) -> Self {
        Self {
            company_number: company_number.into(),
            role_type: role_type.into(),
            appointed_on: None,
            resigned_on: None,
        }
    }

    pub fn appointed(mut self, date: impl Into<String>) -> Self {
        self.appointed_on = Some(date.into());
        self
    }

    pub fn resigned(mut self, date: impl Into<String>) -> Self {
        self.resigned_on = Some(date.into());
        self
    }
}

/// Person-with-significant-control holding. Only `company_number` feeds scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ownership {
    pub company_number: String,
    #[serde(default)]
    pub nature_of_control: Vec<String>,
    #[serde(default)]
    pub notified_on: Option<String>,
}

impl Ownership {
    pub fn new(company_number: impl Into<String>) -> Self {
        Self {
            company_number: company_number.into(),
            ..Self::default()
        }
    }
}

/// Registered or residential address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub full_address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Address {
    pub fn new(full_address: impl Into<String>) -> Self {
        Self {
            full_address: Some(full_address.into()),
            latitude: None,
            longitude: None,
        }
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Coordinates, only when both latitude and longitude are present
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates { latitude, longitude }),
            _ => None,
        }
    }
}

/// Point in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}
