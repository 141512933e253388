use serde::{Deserialize, Serialize};

/// User-service data as seen from this side of the wire.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserLocation {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub district: String,
    pub ward: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: String,
    pub locations: Vec<UserLocation>,
}

impl UserAccount {
    pub fn is_active(&self) -> bool {
        self.status == "ACTIVE"
    }

    pub fn owns_location(&self, location_id: i32) -> bool {
        self.locations.iter().any(|l| l.id == location_id)
    }
}
