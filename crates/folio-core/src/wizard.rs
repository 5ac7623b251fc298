//! The four-step Hire Me flow.
//!
//! Intent -> Location -> Details -> Preview. `Continue` is gated on the
//! current step's required field, `Back` is always allowed except on the
//! first step, and the step indicator can jump back to any completed step.
//! Refused commands are not errors: they come back as
//! [`Outcome::Ignored`] and leave the wizard untouched.

use crate::catalog::{self, INTENT_OPTIONS, LOCATION_OPTIONS};
use crate::clipboard::Clipboard;
use crate::config::{Config, RestartPolicy};
use crate::dispatch::{ClipboardHeader, Delivery, DeliveryChannel, EmailPayload};
use crate::error::FolioError;
use crate::form::{FormRecord, HireField};
use crate::formatter::MessageTemplate;
use crate::outbox::Outbox;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// WizardStep
// ---------------------------------------------------------------------------

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Intent = 1,
    Location = 2,
    Details = 3,
    Preview = 4,
}

impl WizardStep {
    pub const TOTAL: u8 = 4;

    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::Intent,
            WizardStep::Location,
            WizardStep::Details,
            WizardStep::Preview,
        ]
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WizardStep::Intent => "intent",
            WizardStep::Location => "location",
            WizardStep::Details => "details",
            WizardStep::Preview => "preview",
        }
    }

    /// Text under the progress bar.
    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Intent => "Intent",
            WizardStep::Location => "Location",
            WizardStep::Details => "Details",
            WizardStep::Preview => "Send",
        }
    }

    pub fn next(self) -> Option<WizardStep> {
        WizardStep::try_from(self.number() + 1).ok()
    }

    pub fn prev(self) -> Option<WizardStep> {
        self.number()
            .checked_sub(1)
            .and_then(|n| WizardStep::try_from(n).ok())
    }

    /// The field that must be non-empty before leaving this step forward.
    pub fn required_field(self) -> Option<HireField> {
        match self {
            WizardStep::Intent => Some(HireField::Intent),
            WizardStep::Location => Some(HireField::Location),
            WizardStep::Details | WizardStep::Preview => None,
        }
    }
}

impl TryFrom<u8> for WizardStep {
    type Error = FolioError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(WizardStep::Intent),
            2 => Ok(WizardStep::Location),
            3 => Ok(WizardStep::Details),
            4 => Ok(WizardStep::Preview),
            _ => Err(FolioError::UnknownStep(n.to_string())),
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WizardStep {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(n) = s.parse::<u8>() {
            return WizardStep::try_from(n);
        }
        WizardStep::all()
            .iter()
            .copied()
            .find(|step| step.as_str() == s || (s == "send" && *step == WizardStep::Preview))
            .ok_or_else(|| FolioError::UnknownStep(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Commands and outcomes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardCommand {
    Continue,
    Back,
    SelectIntent { value: String },
    SelectLocation { value: String },
    UpdateField { field: HireField, value: String },
    JumpTo { step: WizardStep },
    StartOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// `Continue` while the step's required field is empty.
    MissingRequired(HireField),
    AtFirstStep,
    AtLastStep,
    /// A selection that is not one of the catalog keys.
    UnknownOption,
    /// The command belongs to a different screen.
    WrongStep,
    /// A jump forward to a step that has not been completed.
    NotReached,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::MissingRequired(field) => write!(f, "{field} is required"),
            IgnoreReason::AtFirstStep => f.write_str("already at the first step"),
            IgnoreReason::AtLastStep => f.write_str("already at the last step"),
            IgnoreReason::UnknownOption => f.write_str("not one of the offered options"),
            IgnoreReason::WrongStep => f.write_str("not available on this step"),
            IgnoreReason::NotReached => f.write_str("step not reached yet"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum Outcome {
    Applied,
    Ignored(IgnoreReason),
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorState {
    Done,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepIndicator {
    pub step: WizardStep,
    pub label: &'static str,
    pub state: IndicatorState,
}

/// Everything a view needs to draw the wizard, detached from it.
#[derive(Debug, Clone, Serialize)]
pub struct WizardSnapshot {
    pub step: WizardStep,
    pub step_number: u8,
    pub total_steps: u8,
    pub progress: f64,
    pub indicators: Vec<StepIndicator>,
    pub can_go_back: bool,
    pub can_continue: bool,
    pub can_start_over: bool,
    pub record: FormRecord<HireField>,
    pub payload: EmailPayload,
    pub preview: String,
    pub recipient: String,
    pub deliveries: Vec<Delivery>,
    pub copied: bool,
}

// ---------------------------------------------------------------------------
// Wizard
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct Wizard {
    step: WizardStep,
    record: FormRecord<HireField>,
    restart: RestartPolicy,
    outbox: Outbox<HireField>,
}

impl Wizard {
    pub fn new(config: &Config) -> Self {
        Self::with_record(config, FormRecord::new())
    }

    pub fn with_record(config: &Config, record: FormRecord<HireField>) -> Self {
        Self {
            step: WizardStep::Intent,
            record,
            restart: config.wizard.restart,
            outbox: Outbox::with_config(
                config,
                MessageTemplate::hire(&config.site.owner),
                ClipboardHeader::SubjectLine,
            ),
        }
    }

    /// Rebuild a wizard from a stored record and step. The step is honoured
    /// only as far as the record's required fields allow, so a restored
    /// wizard never sits past a gate it could not have passed.
    pub fn restore(config: &Config, record: FormRecord<HireField>, step: WizardStep) -> Self {
        let mut wizard = Self::with_record(config, record);
        while wizard.step < step && wizard.go_forward().is_applied() {}
        wizard
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn record(&self) -> &FormRecord<HireField> {
        &self.record
    }

    /// Percentage of the flow represented by the current step.
    pub fn progress(&self) -> f64 {
        f64::from(self.step.number()) / f64::from(WizardStep::TOTAL) * 100.0
    }

    pub fn can_go_back(&self) -> bool {
        self.step.prev().is_some()
    }

    pub fn can_continue(&self) -> bool {
        self.step.next().is_some() && self.blocked_by().is_none()
    }

    pub fn can_start_over(&self) -> bool {
        self.step == WizardStep::Preview
    }

    fn blocked_by(&self) -> Option<IgnoreReason> {
        self.step
            .required_field()
            .filter(|field| !self.record.is_filled(*field))
            .map(IgnoreReason::MissingRequired)
    }

    pub fn dispatch(&mut self, command: WizardCommand) -> Outcome {
        let before = self.step;
        let outcome = match command {
            WizardCommand::Continue => self.go_forward(),
            WizardCommand::Back => self.go_back(),
            WizardCommand::SelectIntent { value } => {
                self.select(HireField::Intent, INTENT_OPTIONS, value)
            }
            WizardCommand::SelectLocation { value } => {
                self.select(HireField::Location, LOCATION_OPTIONS, value)
            }
            WizardCommand::UpdateField { field, value } => self.update_field(field, value),
            WizardCommand::JumpTo { step } => self.jump_to(step),
            WizardCommand::StartOver => self.start_over(),
        };
        match outcome {
            Outcome::Applied if before != self.step => {
                tracing::trace!(from = %before, to = %self.step, "wizard step changed");
            }
            Outcome::Ignored(reason) => {
                tracing::trace!(step = %self.step, %reason, "wizard command ignored");
            }
            Outcome::Applied => {}
        }
        outcome
    }

    fn go_forward(&mut self) -> Outcome {
        let Some(next) = self.step.next() else {
            return Outcome::Ignored(IgnoreReason::AtLastStep);
        };
        if let Some(reason) = self.blocked_by() {
            return Outcome::Ignored(reason);
        }
        self.step = next;
        Outcome::Applied
    }

    fn go_back(&mut self) -> Outcome {
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                Outcome::Applied
            }
            None => Outcome::Ignored(IgnoreReason::AtFirstStep),
        }
    }

    fn select(
        &mut self,
        field: HireField,
        options: &'static [catalog::Choice],
        value: String,
    ) -> Outcome {
        if !catalog::is_known(options, &value) {
            return Outcome::Ignored(IgnoreReason::UnknownOption);
        }
        self.record.set(field, value);
        Outcome::Applied
    }

    fn update_field(&mut self, field: HireField, value: String) -> Outcome {
        if self.step != WizardStep::Details || !HireField::details().contains(&field) {
            return Outcome::Ignored(IgnoreReason::WrongStep);
        }
        self.record.set(field, value);
        Outcome::Applied
    }

    fn jump_to(&mut self, target: WizardStep) -> Outcome {
        if target > self.step {
            return Outcome::Ignored(IgnoreReason::NotReached);
        }
        self.step = target;
        Outcome::Applied
    }

    fn start_over(&mut self) -> Outcome {
        if !self.can_start_over() {
            return Outcome::Ignored(IgnoreReason::WrongStep);
        }
        self.step = WizardStep::Intent;
        if self.restart == RestartPolicy::ClearRecord {
            self.record.clear();
        }
        Outcome::Applied
    }

    // -----------------------------------------------------------------------
    // Message
    // -----------------------------------------------------------------------

    pub fn payload(&self) -> EmailPayload {
        self.outbox.payload(&self.record)
    }

    /// What the preview shows and the copy button writes.
    pub fn clipboard_text(&self) -> String {
        self.outbox.clipboard_text(&self.record)
    }

    pub fn render(&self, channel: DeliveryChannel) -> String {
        self.outbox.render(&self.record, channel)
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.outbox.deliveries(&self.record)
    }

    /// Copy the message. Only offered on the preview step; anywhere else,
    /// and whenever the clipboard refuses, nothing changes and `false` is
    /// returned.
    pub async fn copy_message<C: Clipboard>(&mut self, clipboard: &C) -> bool {
        if self.step != WizardStep::Preview {
            tracing::trace!(step = %self.step, "copy ignored before preview");
            return false;
        }
        self.outbox.copy(&self.record, clipboard).await
    }

    pub fn copied(&self) -> bool {
        self.outbox.copied()
    }

    pub fn outbox(&self) -> &Outbox<HireField> {
        &self.outbox
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        let indicators = WizardStep::all()
            .iter()
            .map(|&step| StepIndicator {
                step,
                label: step.label(),
                state: match step.cmp(&self.step) {
                    std::cmp::Ordering::Less => IndicatorState::Done,
                    std::cmp::Ordering::Equal => IndicatorState::Current,
                    std::cmp::Ordering::Greater => IndicatorState::Upcoming,
                },
            })
            .collect();

        WizardSnapshot {
            step: self.step,
            step_number: self.step.number(),
            total_steps: WizardStep::TOTAL,
            progress: self.progress(),
            indicators,
            can_go_back: self.can_go_back(),
            can_continue: self.can_continue(),
            can_start_over: self.can_start_over(),
            record: self.record.clone(),
            payload: self.payload(),
            preview: self.clipboard_text(),
            recipient: self.outbox.recipient().to_string(),
            deliveries: self.deliveries(),
            copied: self.copied(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
