//! Doctor Record Types
//!
//! Wire-level shape of the directory resource. Every field is optional on the wire:
//! missing, `null` or wrongly typed values fall back to neutral defaults, so one bad
//! field never drops the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single directory entry as fetched from the remote resource.
///
/// Records are immutable once fetched; the directory only reads them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Doctor {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    /// Full display name, e.g. `"Dr. Kshitija Pande"`.
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name_initials: String,
    /// Photo URL. The page swaps in a placeholder when it fails to load.
    #[serde(deserialize_with = "lenient_string")]
    pub photo: String,
    /// Free-text biography.
    #[serde(deserialize_with = "lenient_string")]
    pub doctor_introduction: String,
    /// Fields of practice; the first one is shown on the card.
    #[serde(deserialize_with = "lenient_list")]
    pub specialities: Vec<Specialty>,
    /// Free-form currency text, e.g. `"₹ 500"`.
    #[serde(deserialize_with = "lenient_text")]
    pub fees: Option<String>,
    /// Free-form text, e.g. `"13 Years of experience"`.
    #[serde(deserialize_with = "lenient_text")]
    pub experience: Option<String>,
    /// Spoken languages.
    #[serde(deserialize_with = "lenient_list")]
    pub languages: Vec<String>,
    #[serde(deserialize_with = "lenient_value")]
    pub clinic: Clinic,
    /// Offers remote (video) consultations.
    #[serde(deserialize_with = "lenient_bool")]
    pub video_consult: bool,
    /// Offers in-person consultations.
    #[serde(deserialize_with = "lenient_bool")]
    pub in_clinic: bool,
}

impl Doctor {
    /// Specialty names in record order, skipping blank entries.
    pub fn specialty_names(&self) -> impl Iterator<Item = &str> {
        self.specialities
            .iter()
            .map(|s| s.name.as_str())
            .filter(|name| !name.trim().is_empty())
    }

    /// The first listed specialty, shown on the card.
    pub fn primary_specialty(&self) -> Option<&str> {
        self.specialty_names().next()
    }
}

/// A named field of practice.
///
/// Accepts both `{ "name": "Dentist" }` and a bare `"Dentist"` on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Specialty {
    pub name: String,
}

impl Specialty {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl<'de> Deserialize<'de> for Specialty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bare(String),
            Named {
                #[serde(default, deserialize_with = "lenient_string")]
                name: String,
            },
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Bare(name) => Specialty { name },
            Raw::Named { name } => Specialty { name },
        })
    }
}

/// Practice location of a doctor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Clinic {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_value")]
    pub address: ClinicAddress,
}

/// Postal and map details of a clinic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicAddress {
    #[serde(deserialize_with = "lenient_string")]
    pub locality: String,
    #[serde(deserialize_with = "lenient_string")]
    pub city: String,
    #[serde(deserialize_with = "lenient_string")]
    pub address_line1: String,
    /// Coordinates as free text, e.g. `"18.5,73.8"`.
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(deserialize_with = "lenient_string")]
    pub logo_url: String,
}

/// Strings stay strings, numbers and booleans become their text, anything else is absent.
fn value_as_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(value_as_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(value_as_text(Value::deserialize(deserializer)?))
}

/// `true`/`false`, also as text; everything else is `false`.
fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// Arrays keep the elements that decode; a non-array is an empty list.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_value<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).unwrap_or_default())
}
