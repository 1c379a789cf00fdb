use serde::{Deserialize, Serialize};

/// Status value meaning a vendor is booked; only these vendors appear in
/// the printed contact table.
pub const STATUS_BOOKED: &str = "booked";

/// A vendor contact as supplied by the surrounding product. The engine
/// renders this record verbatim and never validates or filters it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    STATUS_BOOKED.to_string()
}

impl Vendor {
    pub fn is_booked(&self) -> bool {
        self.status == STATUS_BOOKED
    }
}
