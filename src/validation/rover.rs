//! Mars rover photo query validation.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{GatewayError, Result};

// == Rover ==
/// Rovers the photo archive knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rover {
    Curiosity,
    Opportunity,
    Spirit,
    Perseverance,
}

impl Rover {
    pub const ALL: [Rover; 4] = [
        Rover::Curiosity,
        Rover::Opportunity,
        Rover::Spirit,
        Rover::Perseverance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rover::Curiosity => "curiosity",
            Rover::Opportunity => "opportunity",
            Rover::Spirit => "spirit",
            Rover::Perseverance => "perseverance",
        }
    }

    /// Camera identifiers this rover's archive can be filtered by.
    pub fn cameras(&self) -> &'static [&'static str] {
        match self {
            Rover::Curiosity => &["fhaz", "rhaz", "mast", "chemcam", "mahli", "mardi", "navcam"],
            Rover::Opportunity | Rover::Spirit => &["fhaz", "rhaz", "navcam", "pancam", "minites"],
            Rover::Perseverance => &[
                "edl_rnav", "edl_fcam", "edl_dcam", "rimfax", "moxie", "sherloc", "watson",
                "supercam", "navcam",
            ],
        }
    }

    pub fn has_camera(&self, camera: &str) -> bool {
        self.cameras().iter().any(|c| *c == camera)
    }
}

impl FromStr for Rover {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_ascii_lowercase();
        Rover::ALL
            .into_iter()
            .find(|rover| rover.as_str() == lowered)
            .ok_or_else(|| {
                let valid: Vec<&str> = Rover::ALL.iter().map(Rover::as_str).collect();
                GatewayError::Validation(format!(
                    "Invalid rover name. Valid rovers are: {}.",
                    valid.join(", ")
                ))
            })
    }
}

impl fmt::Display for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Rover Query ==
/// Normalized rover photo query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoverQuery {
    pub rover: Rover,
    pub sol: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<String>,
    pub page: u32,
}

impl RoverQuery {
    /// Query parameters sent to the provider. The rover travels in the path.
    pub fn upstream_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("sol", self.sol.to_string())];
        if let Some(camera) = &self.camera {
            params.push(("camera", camera.clone()));
        }
        params.push(("page", self.page.to_string()));
        params
    }
}

/// Validates and normalizes raw rover photo query values.
///
/// `sol` and `page` accept ASCII digits only. An empty `camera` counts as
/// not supplied, while an empty `page` is rejected.
pub fn validate_rover_query(
    rover: Option<&str>,
    sol: Option<&str>,
    camera: Option<&str>,
    page: Option<&str>,
) -> Result<RoverQuery> {
    let rover = match rover {
        Some(raw) if !raw.is_empty() => raw.parse::<Rover>()?,
        _ => return Err(GatewayError::Validation("Rover name is required.".to_string())),
    };

    let sol = match sol {
        Some(raw) if !raw.is_empty() => parse_strict_u32(raw).ok_or_else(|| {
            GatewayError::Validation("Sol must be a non-negative integer.".to_string())
        })?,
        _ => return Err(GatewayError::Validation("Sol is required.".to_string())),
    };

    let page = match page {
        None => 1,
        Some(raw) => match parse_strict_u32(raw) {
            Some(page) if page >= 1 => page,
            _ => {
                return Err(GatewayError::Validation(
                    "Page must be a positive integer.".to_string(),
                ))
            }
        },
    };

    let camera = match camera {
        None | Some("") => None,
        Some(raw) => {
            let lowered = raw.to_ascii_lowercase();
            if !rover.has_camera(&lowered) {
                return Err(GatewayError::Validation(format!(
                    "Invalid camera for {}. Valid cameras are: {}.",
                    rover,
                    rover.cameras().join(", ")
                )));
            }
            Some(lowered)
        }
    };

    Ok(RoverQuery {
        rover,
        sol,
        camera,
        page,
    })
}

fn parse_strict_u32(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
