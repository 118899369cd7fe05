use std::env;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::catalog::store::IdAssignment;
use crate::core::library::{LibraryError, LibraryResult};

pub const DEFAULT_PORT: u16 = 8443;
pub const DEFAULT_SOAP_PATH: &str = "/soap/bookservice";
pub const DEFAULT_SOAP_LOCATION: &str = "http://localhost:8080/soap/bookservice";
pub const BOOKS_API_PATH: &str = "/api/books";

// Configuration abstracts config options for the book service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub profile: String,
    pub port: u16,
    pub soap_path: String,
    pub soap_location: String,
    pub api_token: Option<String>,
    pub id_assignment: IdAssignment,
}

impl Configuration {
    pub fn new(profile: &str) -> Self {
        Configuration {
            profile: profile.to_string(),
            port: DEFAULT_PORT,
            soap_path: DEFAULT_SOAP_PATH.to_string(),
            soap_location: DEFAULT_SOAP_LOCATION.to_string(),
            api_token: None,
            id_assignment: IdAssignment::Monotonic,
        }
    }

    pub fn from_env(profile: &str) -> LibraryResult<Self> {
        Self::from_lookup(profile, |key| env::var(key).ok())
    }

    // builds config from any key lookup so that tests don't have to mutate the process env
    pub fn from_lookup<F>(profile: &str, lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let mut config = Configuration::new(profile);
        if let Some(port) = lookup("PORT") {
            config.port = port.trim().parse::<u16>().map_err(|err| LibraryError::validation(
                format!("invalid PORT {:?}: {}", port, err).as_str(), Some("PORT".to_string())))?;
        }
        if let Some(path) = lookup("SOAP_PATH") {
            if !path.starts_with('/') {
                return Err(LibraryError::validation(
                    format!("SOAP_PATH must start with '/' but was {:?}", path).as_str(), Some("SOAP_PATH".to_string())));
            }
            if path == BOOKS_API_PATH || path.starts_with(format!("{}/", BOOKS_API_PATH).as_str()) {
                return Err(LibraryError::validation(
                    format!("SOAP_PATH {:?} overlaps the {} routes", path, BOOKS_API_PATH).as_str(), Some("SOAP_PATH".to_string())));
            }
            config.soap_path = path;
        }
        if let Some(location) = lookup("SOAP_LOCATION") {
            config.soap_location = location;
        }
        config.api_token = lookup("API_TOKEN").filter(|token| !token.trim().is_empty());
        if let Some(assignment) = lookup("SOAP_ID_ASSIGNMENT") {
            config.id_assignment = IdAssignment::from_str(assignment.as_str())?;
        }
        Ok(config)
    }
}
