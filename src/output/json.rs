//! JSON output for subnet details.

use crate::processing::SubnetInfo;
use std::error::Error;

/// Serialize subnet details as pretty printed JSON.
pub fn render_json(info: &SubnetInfo) -> Result<String, Box<dyn Error>> {
    let json =
        serde_json::to_string_pretty(info).map_err(|e| format!("Error serializing JSON: {e}"))?;
    Ok(json)
}
