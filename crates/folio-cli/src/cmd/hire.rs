use crate::clipboard::SystemClipboard;
use crate::output::{print_json, print_message};
use anyhow::Result;
use clap::Args;
use folio_core::catalog::{self, INTENT_OPTIONS, LOCATION_OPTIONS};
use folio_core::dispatch::DeliveryChannel;
use folio_core::form::HireField;
use folio_core::wizard::{Outcome, Wizard, WizardCommand, WizardStep};
use std::path::Path;
use std::time::Duration;

#[derive(Args, Debug, Default)]
pub struct HireArgs {
    /// internship, fulltime, freelance or collaboration
    #[arg(long)]
    pub intent: Option<String>,
    /// india, thailand or remote
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub timeline: Option<String>,
    #[arg(long)]
    pub message: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,

    /// Stop at this step (1-4 or intent, location, details, preview)
    #[arg(long, default_value = "preview")]
    pub step: WizardStep,

    /// Copy the message to the clipboard
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

    /// Press "Start Over" once the preview is reached
    #[arg(long)]
    pub start_over: bool,
}

impl HireArgs {
    fn details(&self) -> Vec<(HireField, &str)> {
        [
            (HireField::Name, &self.name),
            (HireField::Email, &self.email),
            (HireField::Company, &self.company),
            (HireField::Role, &self.role),
            (HireField::Timeline, &self.timeline),
            (HireField::Message, &self.message),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

/// Feed the arguments through the wizard one screen at a time, the way a
/// visitor would: fill the screen, press Continue, repeat until `--step`.
fn walk(wizard: &mut Wizard, args: &HireArgs) -> Result<()> {
    loop {
        let step = wizard.step();
        match step {
            WizardStep::Intent => {
                if let Some(value) = &args.intent {
                    wizard.dispatch(WizardCommand::SelectIntent {
                        value: value.clone(),
                    });
                }
            }
            WizardStep::Location => {
                if let Some(value) = &args.location {
                    wizard.dispatch(WizardCommand::SelectLocation {
                        value: value.clone(),
                    });
                }
            }
            WizardStep::Details => {
                for (field, value) in args.details() {
                    wizard.dispatch(WizardCommand::UpdateField {
                        field,
                        value: value.to_string(),
                    });
                }
            }
            WizardStep::Preview => {}
        }

        if step >= args.step {
            return Ok(());
        }
        if let Outcome::Ignored(reason) = wizard.dispatch(WizardCommand::Continue) {
            anyhow::bail!(
                "stopped at step {} ({}): {reason}",
                step.number(),
                step.label()
            );
        }
    }
}

pub fn run(config_path: Option<&Path>, args: HireArgs, json: bool) -> Result<()> {
    let config = crate::settings::load_valid(config_path)?;

    // Unknown keys would only be ignored by the wizard; say why up front.
    if let Some(intent) = &args.intent {
        catalog::parse_choice("intent", INTENT_OPTIONS, intent)?;
    }
    if let Some(location) = &args.location {
        catalog::parse_choice("location", LOCATION_OPTIONS, location)?;
    }

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let mut wizard = Wizard::new(&config);
        walk(&mut wizard, &args)?;

        let at_preview = wizard.step() == WizardStep::Preview;
        if (args.copy || args.open.is_some()) && !at_preview {
            anyhow::bail!("--copy and --open need the preview step");
        }

        if args.copy {
            let clipboard = SystemClipboard::new(Duration::from_secs(args.hold));
            let copied = wizard.copy_message(&clipboard).await;
            super::report_copy(copied);
        }
        if let Some(channel) = args.open {
            super::open_link(channel, &wizard.render(channel));
        }
        if args.start_over {
            if let Outcome::Ignored(reason) = wizard.dispatch(WizardCommand::StartOver) {
                anyhow::bail!("cannot start over: {reason}");
            }
        }

        if json {
            return print_json(&wizard.snapshot());
        }

        let step = wizard.step();
        if step == WizardStep::Preview {
            print_message(
                wizard.outbox().recipient(),
                &wizard.clipboard_text(),
                &wizard.deliveries(),
                args.links,
            );
        } else {
            println!(
                "Step {}/{}: {}",
                step.number(),
                WizardStep::TOTAL,
                step.label()
            );
            for (field, value) in wizard.record().iter().filter(|(_, v)| !v.is_empty()) {
                println!("  {field}: {value}");
            }
        }
        Ok::<(), anyhow::Error>(())
    })
}
