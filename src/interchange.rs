//! JSON and compact binary encodings of the decoded model.

use crate::error::MetarTafError;
use bincode::config::{Configuration, Fixint, LittleEndian};
use serde::de::DeserializeOwned;
use serde::Serialize;

const BINCODE_CONFIG: Configuration<LittleEndian, Fixint> =
    bincode::config::standard().with_fixed_int_encoding();

/// Lossless conversion of reports, forecast periods and their parts to JSON
/// and to bytes.
///
/// ```
/// use metar_taf::{parse_metar, Interchange, Metar};
///
/// let metar = parse_metar("EHAM 051825Z 02007KT 9999 FEW017 06/03 Q1042 NOSIG")?;
/// let json = metar.to_json()?;
/// assert_eq!(Metar::from_json(&json)?, metar);
/// # Ok::<(), metar_taf::MetarTafError>(())
/// ```
pub trait Interchange: Serialize + DeserializeOwned {
    fn to_json(&self) -> Result<String, MetarTafError> {
        Ok(serde_json::to_string(self)?)
    }

    fn to_json_pretty(&self) -> Result<String, MetarTafError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn from_json(text: &str) -> Result<Self, MetarTafError> {
        Ok(serde_json::from_str(text)?)
    }

    fn to_bytes(&self) -> Result<Vec<u8>, MetarTafError> {
        bincode::serde::encode_to_vec(self, BINCODE_CONFIG)
            .map_err(|e| MetarTafError::Encode(Box::new(e)))
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, MetarTafError> {
        let (value, _) = bincode::serde::decode_from_slice::<Self, _>(bytes, BINCODE_CONFIG)
            .map_err(|e| MetarTafError::Decode(Box::new(e)))?;
        Ok(value)
    }
}

impl<T: Serialize + DeserializeOwned> Interchange for T {}
