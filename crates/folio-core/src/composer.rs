//! Single-screen Contact composer: four free-text fields, a live preview
//! and the same three delivery channels as the wizard.

use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::dispatch::{ClipboardHeader, Delivery, DeliveryChannel, EmailPayload};
use crate::form::{ContactField, FormRecord};
use crate::formatter::MessageTemplate;
use crate::outbox::Outbox;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ComposerCommand {
    Update { field: ContactField, value: String },
    Clear,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComposerSnapshot {
    pub record: FormRecord<ContactField>,
    pub payload: EmailPayload,
    pub preview: String,
    pub recipient: String,
    pub deliveries: Vec<Delivery>,
    pub copied: bool,
}

#[derive(Debug)]
pub struct Composer {
    record: FormRecord<ContactField>,
    outbox: Outbox<ContactField>,
}

impl Composer {
    pub fn new(config: &Config) -> Self {
        Self::with_record(config, FormRecord::new())
    }

    pub fn with_record(config: &Config, record: FormRecord<ContactField>) -> Self {
        Self {
            record,
            outbox: Outbox::with_config(
                config,
                MessageTemplate::contact(&config.site.owner),
                ClipboardHeader::RecipientAndSubject,
            ),
        }
    }

    pub fn record(&self) -> &FormRecord<ContactField> {
        &self.record
    }

    pub fn update(&mut self, field: ContactField, value: impl Into<String>) {
        self.record.set(field, value);
    }

    pub fn clear(&mut self) {
        self.record.clear();
    }

    pub fn dispatch(&mut self, command: ComposerCommand) {
        match command {
            ComposerCommand::Update { field, value } => self.update(field, value),
            ComposerCommand::Clear => self.clear(),
        }
    }

    pub fn payload(&self) -> EmailPayload {
        self.outbox.payload(&self.record)
    }

    pub fn clipboard_text(&self) -> String {
        self.outbox.clipboard_text(&self.record)
    }

    pub fn render(&self, channel: DeliveryChannel) -> String {
        self.outbox.render(&self.record, channel)
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.outbox.deliveries(&self.record)
    }

    /// Copy the message with its `To:`/`Subject:` header. Always available;
    /// a refused write returns `false` and changes nothing.
    pub async fn copy_message<C: Clipboard>(&mut self, clipboard: &C) -> bool {
        self.outbox.copy(&self.record, clipboard).await
    }

    pub fn copied(&self) -> bool {
        self.outbox.copied()
    }

    pub fn snapshot(&self) -> ComposerSnapshot {
        ComposerSnapshot {
            record: self.record.clone(),
            payload: self.payload(),
            preview: self.clipboard_text(),
            recipient: self.outbox.recipient().to_string(),
            deliveries: self.deliveries(),
            copied: self.copied(),
        }
    }
}
