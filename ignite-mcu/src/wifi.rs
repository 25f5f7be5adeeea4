//! WiFi credentials file format
//!
//! The credentials file holds the SSID on the first line and the PSK on the
//! second. Files may come from any editor, so the line separator can be
//! CR LF, LF or a lone CR.

use ignite_proto::files::LINE_END;

/// WiFi network credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiCredentials {
    pub ssid: String,
    pub pass: String,
}

impl WifiCredentials {
    pub fn new(ssid: impl Into<String>, pass: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            pass: pass.into(),
        }
    }

    /// File contents: SSID line then PSK line
    pub fn to_file_contents(&self) -> String {
        format!("{}{LINE_END}{}{LINE_END}", self.ssid, self.pass)
    }

    /// Parse credentials file contents
    ///
    /// Returns `None` when there is no second line.
    pub fn parse(content: &str) -> Option<Self> {
        let body = content.trim();
        let (pos, sep_len) = match find_line_end(body) {
            Some(found) => found,
            // Second line exists but is blank, so the outer trim ate it.
            None if !body.is_empty() && trailing(content, body).contains(['\r', '\n']) => {
                (body.len(), 0)
            }
            None => return None,
        };

        Some(Self::new(body[..pos].trim(), body[pos + sep_len..].trim()))
    }
}

/// First line separator in `s`: CR LF first, then LF, then CR.
/// Returns (position, separator length).
fn find_line_end(s: &str) -> Option<(usize, usize)> {
    if let Some(pos) = s.find("\r\n") {
        return Some((pos, 2));
    }
    s.find('\n').or_else(|| s.find('\r')).map(|pos| (pos, 1))
}

/// Whitespace after `body` in `content`, where `body == content.trim()`
fn trailing<'a>(content: &'a str, body: &str) -> &'a str {
    let start = content.trim_start();
    &start[body.len()..]
}
