use std::fmt;
use std::time::SystemTime;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Error when decoding a change payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayloadError {
    pub message: String,
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "payload error: {}", self.message)
    }
}

impl std::error::Error for PayloadError {}

/// One committed store mutation.
///
/// `sequence` starts at 1 and grows by one per journaled change. The payload
/// is bitcode-encoded; in JSON it travels as base64.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ChangeRecord {
    pub name: String,
    #[serde(with = "payload_serde")]
    pub payload: Vec<u8>,
    pub sequence: u64,
    pub timestamp: SystemTime,
}

mod payload_serde {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(payload: &Vec<u8>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        STANDARD.encode(payload).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = String::deserialize(deserializer)?;
        STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}

impl ChangeRecord {
    /// Encode `payload` and stamp the record with the current time.
    pub fn encode<T: Serialize + ?Sized>(
        name: impl Into<String>,
        payload: &T,
        sequence: u64,
    ) -> Result<Self, PayloadError> {
        let payload = bitcode::serialize(payload).map_err(|e| PayloadError {
            message: e.to_string(),
        })?;
        Ok(ChangeRecord {
            name: name.into(),
            payload,
            sequence,
            timestamp: SystemTime::now(),
        })
    }

    /// Deserialize the payload into the specified type.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, PayloadError> {
        bitcode::deserialize(&self.payload).map_err(|e| PayloadError {
            message: e.to_string(),
        })
    }

    pub fn payload_bytes(&self) -> &[u8] {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CasePatch, CaseStatus, View};

    #[test]
    fn encode_and_decode_payload() {
        let patch = CasePatch::new().status(CaseStatus::Closed);
        let record =
            ChangeRecord::encode("CaseUpdated", &("1".to_string(), patch.clone()), 3).unwrap();
        assert_eq!(record.name, "CaseUpdated");
        assert_eq!(record.sequence, 3);

        let (id, decoded): (String, CasePatch) = record.decode().unwrap();
        assert_eq!(id, "1");
        assert_eq!(decoded, patch);
    }

    #[test]
    fn json_carries_base64_payload() {
        let record = ChangeRecord::encode("ViewChanged", &View::Cases, 1).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["payload"].is_string());

        let back: ChangeRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
        assert_eq!(back.decode::<View>().unwrap(), View::Cases);
    }

    #[test]
    fn decode_into_wrong_type_fails() {
        let record = ChangeRecord::encode("ViewChanged", &View::Cases, 1).unwrap();
        assert!(record.decode::<(String, String)>().is_err());
    }
}
