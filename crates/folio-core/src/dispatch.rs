use crate::config::Config;
use crate::error::FolioError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// EmailPayload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailPayload {
    pub subject: String,
    pub body: String,
}

// ---------------------------------------------------------------------------
// DeliveryChannel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryChannel {
    #[serde(rename = "clipboard")]
    ClipboardCopy,
    #[serde(rename = "mailto")]
    NativeMailLink,
    #[serde(rename = "web")]
    WebComposeLink,
}

impl DeliveryChannel {
    pub fn all() -> &'static [DeliveryChannel] {
        &[
            DeliveryChannel::ClipboardCopy,
            DeliveryChannel::NativeMailLink,
            DeliveryChannel::WebComposeLink,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryChannel::ClipboardCopy => "clipboard",
            DeliveryChannel::NativeMailLink => "mailto",
            DeliveryChannel::WebComposeLink => "web",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DeliveryChannel::ClipboardCopy => "Copy Message",
            DeliveryChannel::NativeMailLink => "Open Mail App",
            DeliveryChannel::WebComposeLink => "Open in Gmail (Web)",
        }
    }

    /// Link channels are opened by the user; the clipboard one is written by us.
    pub fn is_link(self) -> bool {
        !matches!(self, DeliveryChannel::ClipboardCopy)
    }
}

impl fmt::Display for DeliveryChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryChannel {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clipboard" | "copy" => Ok(DeliveryChannel::ClipboardCopy),
            "mailto" | "native" | "mail" => Ok(DeliveryChannel::NativeMailLink),
            "web" | "gmail" => Ok(DeliveryChannel::WebComposeLink),
            _ => Err(FolioError::UnknownChannel(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ClipboardHeader
// ---------------------------------------------------------------------------

/// Header lines placed above the body in the clipboard copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipboardHeader {
    /// `Subject: ...` then a blank line.
    SubjectLine,
    /// `To: ...`, `Subject: ...`, then a blank line.
    RecipientAndSubject,
}

// ---------------------------------------------------------------------------
// Delivery
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delivery {
    pub channel: DeliveryChannel,
    pub label: &'static str,
    pub target: String,
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Turns an [`EmailPayload`] into what each delivery channel needs.
/// Subject and body are percent-encoded as UTF-8; the recipient is inserted
/// as configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatcher {
    recipient: String,
    web_compose_base: String,
}

impl Dispatcher {
    pub fn new(recipient: impl Into<String>, web_compose_base: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            web_compose_base: web_compose_base.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.site.recipient.clone(),
            config.delivery.web_compose_base.clone(),
        )
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn clipboard_text(&self, payload: &EmailPayload, header: ClipboardHeader) -> String {
        match header {
            ClipboardHeader::SubjectLine => {
                format!("Subject: {}\n\n{}", payload.subject, payload.body)
            }
            ClipboardHeader::RecipientAndSubject => format!(
                "To: {}\nSubject: {}\n\n{}",
                self.recipient, payload.subject, payload.body
            ),
        }
    }

    pub fn mailto_uri(&self, payload: &EmailPayload) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&payload.subject),
            urlencoding::encode(&payload.body)
        )
    }

    pub fn web_compose_uri(&self, payload: &EmailPayload) -> String {
        format!(
            "{}?view=cm&fs=1&to={}&su={}&body={}",
            self.web_compose_base,
            self.recipient,
            urlencoding::encode(&payload.subject),
            urlencoding::encode(&payload.body)
        )
    }

    pub fn render(
        &self,
        channel: DeliveryChannel,
        payload: &EmailPayload,
        header: ClipboardHeader,
    ) -> String {
        match channel {
            DeliveryChannel::ClipboardCopy => self.clipboard_text(payload, header),
            DeliveryChannel::NativeMailLink => self.mailto_uri(payload),
            DeliveryChannel::WebComposeLink => self.web_compose_uri(payload),
        }
    }

    pub fn deliveries(&self, payload: &EmailPayload, header: ClipboardHeader) -> Vec<Delivery> {
        DeliveryChannel::all()
            .iter()
            .map(|&channel| Delivery {
                channel,
                label: channel.label(),
                target: self.render(channel, payload, header),
            })
            .collect()
    }
}

/// Percent-decoded value of query parameter `key` in `uri`.
pub fn decode_query(uri: &str, key: &str) -> Option<String> {
    let (_, query) = uri.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .and_then(|(_, v)| urlencoding::decode(v).ok())
        .map(|v| v.into_owned())
}
