use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::dispatch::{ClipboardHeader, Delivery, DeliveryChannel, Dispatcher, EmailPayload};
use crate::feedback::{self, CopyFeedback};
use crate::form::{FormField, FormRecord};
use crate::formatter::MessageTemplate;

/// The message-producing half shared by both composers: the template,
/// the delivery links, the clipboard header style and the copy indicator.
#[derive(Debug)]
pub struct Outbox<F: FormField> {
    template: MessageTemplate<F>,
    dispatcher: Dispatcher,
    header: ClipboardHeader,
    feedback: CopyFeedback,
}

impl<F: FormField> Outbox<F> {
    pub fn new(
        template: MessageTemplate<F>,
        dispatcher: Dispatcher,
        header: ClipboardHeader,
        feedback: CopyFeedback,
    ) -> Self {
        Self {
            template,
            dispatcher,
            header,
            feedback,
        }
    }

    pub fn with_config(config: &Config, template: MessageTemplate<F>, header: ClipboardHeader) -> Self {
        Self::new(
            template,
            Dispatcher::from_config(config),
            header,
            CopyFeedback::new(config.feedback.window()),
        )
    }

    pub fn recipient(&self) -> &str {
        self.dispatcher.recipient()
    }

    pub fn payload(&self, record: &FormRecord<F>) -> EmailPayload {
        self.template.format(record)
    }

    pub fn clipboard_text(&self, record: &FormRecord<F>) -> String {
        self.dispatcher
            .clipboard_text(&self.payload(record), self.header)
    }

    pub fn render(&self, record: &FormRecord<F>, channel: DeliveryChannel) -> String {
        self.dispatcher
            .render(channel, &self.payload(record), self.header)
    }

    pub fn deliveries(&self, record: &FormRecord<F>) -> Vec<Delivery> {
        self.dispatcher.deliveries(&self.payload(record), self.header)
    }

    pub async fn copy<C: Clipboard>(&mut self, record: &FormRecord<F>, clipboard: &C) -> bool {
        let text = self.clipboard_text(record);
        feedback::copy_with_feedback(clipboard, &mut self.feedback, &text).await
    }

    pub fn copied(&self) -> bool {
        self.feedback.copied()
    }
}
