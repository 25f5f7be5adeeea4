/// Status/log message reported by a node
///
/// Field order is part of the wire format: `id`, `type`, `code`, `message`,
/// `params`. `params` is always an empty array.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage<'a> {
    pub id: &'a str,
    #[serde(rename = "type")]
    pub kind: i32,
    pub code: &'a str,
    pub message: &'a str,
    params: [(); 0],
}

impl<'a> StatusMessage<'a> {
    pub fn new(id: &'a str, kind: i32, code: &'a str, message: &'a str) -> Self {
        Self {
            id,
            kind,
            code,
            message,
            params: [],
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("status message has only string and integer fields")
    }
}

/// Render a status message as single-line JSON
pub fn format_message(id: &str, kind: i32, code: &str, message: &str) -> String {
    StatusMessage::new(id, kind, code, message).to_json()
}
