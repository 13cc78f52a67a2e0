use std::path::Path;

use crate::foundation::error::{CardError, CardResult};

/// Upper bound on roster length accepted from one config file.
pub const MAX_ROSTER_LEN: usize = 48;

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One member record from the roster.
///
/// Every field is optional in the source YAML; a missing key leaves the
/// zero value (empty string, grade 0, empty sequence). Unrecognized keys
/// are ignored.
pub struct Member {
    /// Unique member identifier. Doubles as the avatar asset key and the
    /// output filename stem.
    #[serde(default)]
    pub id: String,
    /// Display name rendered onto the card.
    #[serde(default)]
    pub name: String,
    /// Grade level; selects the badge asset by its decimal string form.
    #[serde(default)]
    pub grade: u32,
    /// Club icon keys, in vertical stacking order.
    #[serde(default)]
    pub club: Vec<String>,
    /// Special icon keys, in vertical stacking order.
    #[serde(default)]
    pub special: Vec<String>,
}

/// Load the full roster from a YAML file.
///
/// The file must contain a top-level sequence of member records with at
/// most [`MAX_ROSTER_LEN`] entries. Any read or parse failure is a
/// [`CardError::ConfigParse`]; there is no partial-success mode.
pub fn load_members(path: impl AsRef<Path>) -> CardResult<Vec<Member>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| CardError::config_parse(format!("read '{}': {e}", path.display())))?;
    parse_roster(&text)
        .map_err(|e| CardError::config_parse(format!("parse '{}': {e}", path.display())))
}

fn parse_roster(text: &str) -> Result<Vec<Member>, String> {
    let members: Vec<Member> = serde_yaml::from_str(text).map_err(|e| e.to_string())?;
    if members.len() > MAX_ROSTER_LEN {
        return Err(format!(
            "roster has {} entries, maximum is {MAX_ROSTER_LEN}",
            members.len()
        ));
    }
    Ok(members)
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
