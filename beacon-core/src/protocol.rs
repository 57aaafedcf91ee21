//! JSON text-frame codec. Wire frames carry one event each, as
//! `{"op": "<event-name>", "d": {...}}`.

use thiserror::Error;

use crate::model::{ClientEvent, ServerEvent};

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

pub fn decode_client_event(text: &str) -> Result<ClientEvent, ProtocolError> {
    Ok(serde_json::from_str(text)?)
}

pub fn encode_server_event(event: &ServerEvent) -> Result<String, ProtocolError> {
    Ok(serde_json::to_string(event)?)
}
