use crate::clipboard::SystemClipboard;
use crate::output::{print_json, print_message};
use anyhow::Result;
use clap::Args;
use folio_core::composer::{Composer, ComposerCommand};
use folio_core::dispatch::DeliveryChannel;
use folio_core::form::ContactField;
use std::path::Path;
use std::time::Duration;

#[derive(Args, Debug, Default)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub message: Option<String>,

    /// Copy the message (with To: and Subject: lines) to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// With --copy on Linux: keep serving the text for up to this many
    /// seconds unless a clipboard manager takes it first (0 waits until
    /// something else is copied)
    #[arg(long, value_name = "SECONDS", default_value_t = 10)]
    pub hold: u64,

    /// Open the message in a mail app (mailto) or webmail (web)
    #[arg(long, value_name = "CHANNEL", value_parser = super::parse_link_channel)]
    pub open: Option<DeliveryChannel>,

    /// Print the mailto and web links as well
    #[arg(long)]
    pub links: bool,
}

impl ContactArgs {
    fn commands(&self) -> Vec<ComposerCommand> {
        [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Subject, &self.subject),
            (ContactField::Message, &self.message),
        ]
        .into_iter()
        .filter_map(|(field, value)| {
            value.clone().map(|value| ComposerCommand::Update { field, value })
        })
        .collect()
    }
}

pub fn run(config_path: Option<&Path>, args: ContactArgs, json: bool) -> Result<()> {
    let config = crate::settings::load_valid(config_path)?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let mut composer = Composer::new(&config);
        for command in args.commands() {
            composer.dispatch(command);
        }

        if args.copy {
            let clipboard = SystemClipboard::new(Duration::from_secs(args.hold));
            let copied = composer.copy_message(&clipboard).await;
            super::report_copy(copied);
        }
        if let Some(channel) = args.open {
            super::open_link(channel, &composer.render(channel));
        }

        let snapshot = composer.snapshot();
        if json {
            print_json(&snapshot)?;
        } else {
            print_message(
                &snapshot.recipient,
                &snapshot.preview,
                &snapshot.deliveries,
                args.links,
            );
        }
        Ok::<(), anyhow::Error>(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_given_fields_become_updates() {
        let args = ContactArgs {
            name: Some("Sam".into()),
            message: Some("Hi".into()),
            ..Default::default()
        };
        assert_eq!(
            args.commands(),
            vec![
                ComposerCommand::Update {
                    field: ContactField::Name,
                    value: "Sam".into()
                },
                ComposerCommand::Update {
                    field: ContactField::Message,
                    value: "Hi".into()
                },
            ]
        );
    }
}
