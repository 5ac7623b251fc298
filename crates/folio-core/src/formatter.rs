use crate::catalog::{self, Choice, INTENT_OPTIONS, LOCATION_OPTIONS};
use crate::dispatch::EmailPayload;
use crate::form::{ContactField, FormField, FormRecord, HireField};
use crate::template::Template;

// ---------------------------------------------------------------------------
// Message texts
// ---------------------------------------------------------------------------

const HIRE_SUBJECT: &str = "{intent} Opportunity - {subject_role} at {subject_company}";

const HIRE_BODY: &str = "Hi {owner},

I'm {name} from {company}.

I came across your portfolio and was impressed by your work. We're looking for someone with your skills for a {intent_lower} opportunity.

Role: {role}
Location: {location}
Timeline: {timeline}

{message}

Looking forward to hearing from you!

Best regards,
{name}
{email}";

const CONTACT_SUBJECT: &str = "{subject}";

const CONTACT_BODY: &str = "Hi {owner},

{message}

Best regards,
{name}
{email}";

// ---------------------------------------------------------------------------
// Binding
// ---------------------------------------------------------------------------

/// Where a template slot takes its text from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding<F: FormField> {
    /// The field's value, or `placeholder` while it is empty.
    Field { field: F, placeholder: &'static str },
    /// The catalog label for the field's key. Unknown keys give `""`.
    Label {
        field: F,
        options: &'static [Choice],
        lowercase: bool,
    },
    Literal(String),
}

impl<F: FormField> Binding<F> {
    fn resolve(&self, record: &FormRecord<F>) -> String {
        match self {
            Binding::Field { field, placeholder } => {
                let value = record.get(*field);
                if value.is_empty() {
                    (*placeholder).to_string()
                } else {
                    value.to_string()
                }
            }
            Binding::Label {
                field,
                options,
                lowercase,
            } => {
                let label = catalog::resolve_label(options, record.get(*field));
                if *lowercase {
                    label.to_lowercase()
                } else {
                    label.to_string()
                }
            }
            Binding::Literal(text) => text.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// MessageTemplate
// ---------------------------------------------------------------------------

/// Subject and body templates plus the slot bindings that fill them.
/// `format` is a pure function of the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate<F: FormField> {
    subject: Template,
    body: Template,
    bindings: Vec<(&'static str, Binding<F>)>,
}

impl<F: FormField> MessageTemplate<F> {
    pub fn new(subject: &str, body: &str) -> Self {
        Self {
            subject: Template::parse(subject),
            body: Template::parse(body),
            bindings: Vec::new(),
        }
    }

    pub fn bind(mut self, slot: &'static str, binding: Binding<F>) -> Self {
        self.bindings.retain(|(s, _)| *s != slot);
        self.bindings.push((slot, binding));
        self
    }

    pub fn field(self, slot: &'static str, field: F, placeholder: &'static str) -> Self {
        self.bind(slot, Binding::Field { field, placeholder })
    }

    pub fn format(&self, record: &FormRecord<F>) -> EmailPayload {
        let lookup = |slot: &str| {
            self.bindings
                .iter()
                .find(|(s, _)| *s == slot)
                .map(|(_, b)| b.resolve(record))
        };
        EmailPayload {
            subject: self.subject.render(lookup),
            body: self.body.render(lookup),
        }
    }

    /// Slots used by either template that have no binding.
    pub fn unknown_slots(&self) -> Vec<String> {
        let mut missing: Vec<String> = Vec::new();
        for slot in self.subject.slots().chain(self.body.slots()) {
            let bound = self.bindings.iter().any(|(s, _)| *s == slot);
            if !bound && !missing.iter().any(|m| m == slot) {
                missing.push(slot.to_string());
            }
        }
        missing
    }
}

impl MessageTemplate<HireField> {
    /// The Hire Me message addressed to `owner`.
    pub fn hire(owner: &str) -> Self {
        Self::new(HIRE_SUBJECT, HIRE_BODY)
            .bind("owner", Binding::Literal(owner.to_string()))
            .bind(
                "intent",
                Binding::Label {
                    field: HireField::Intent,
                    options: INTENT_OPTIONS,
                    lowercase: false,
                },
            )
            .bind(
                "intent_lower",
                Binding::Label {
                    field: HireField::Intent,
                    options: INTENT_OPTIONS,
                    lowercase: true,
                },
            )
            .bind(
                "location",
                Binding::Label {
                    field: HireField::Location,
                    options: LOCATION_OPTIONS,
                    lowercase: false,
                },
            )
            .field("subject_role", HireField::Role, "Role")
            .field("subject_company", HireField::Company, "Company")
            .field("name", HireField::Name, "[Your Name]")
            .field("company", HireField::Company, "[Company]")
            .field("role", HireField::Role, "[Role Title]")
            .field("timeline", HireField::Timeline, "[Timeline]")
            .field(
                "message",
                HireField::Message,
                "I'd love to discuss this opportunity with you.",
            )
            .field("email", HireField::Email, "[Your Email]")
    }
}

impl MessageTemplate<ContactField> {
    /// The Contact page message addressed to `owner`.
    pub fn contact(owner: &str) -> Self {
        Self::new(CONTACT_SUBJECT, CONTACT_BODY)
            .bind("owner", Binding::Literal(owner.to_string()))
            .field("subject", ContactField::Subject, "Contact from Portfolio")
            .field("message", ContactField::Message, "[Your message here]")
            .field("name", ContactField::Name, "[Your Name]")
            .field("email", ContactField::Email, "[Your Email]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_a() -> FormRecord<HireField> {
        FormRecord::new()
            .with(HireField::Intent, "internship")
            .with(HireField::Location, "remote")
            .with(HireField::Company, "Acme")
            .with(HireField::Role, "SWE Intern")
            .with(HireField::Timeline, "Summer 2026")
            .with(HireField::Name, "Jane")
            .with(HireField::Email, "jane@x.com")
    }

    #[test]
    fn builtin_templates_bind_every_slot() {
        assert!(MessageTemplate::hire("Aditya").unknown_slots().is_empty());
        assert!(MessageTemplate::contact("Aditya").unknown_slots().is_empty());
    }

    #[test]
    fn hire_subject_from_complete_record() {
        let payload = MessageTemplate::hire("Aditya").format(&scenario_a());
        assert_eq!(payload.subject, "Internship Opportunity - SWE Intern at Acme");
    }

    #[test]
    fn hire_body_from_complete_record() {
        let payload = MessageTemplate::hire("Aditya").format(&scenario_a());
        let expected = "Hi Aditya,

I'm Jane from Acme.

I came across your portfolio and was impressed by your work. We're looking for someone with your skills for a internship opportunity.

Role: SWE Intern
Location: Remote
Timeline: Summer 2026

I'd love to discuss this opportunity with you.

Looking forward to hearing from you!

Best regards,
Jane
jane@x.com";
        assert_eq!(payload.body, expected);
    }

    #[test]
    fn hire_placeholders_when_only_intent_is_set() {
        let record = FormRecord::new().with(HireField::Intent, "fulltime");
        let payload = MessageTemplate::hire("Aditya").format(&record);

        assert_eq!(payload.subject, "Full-time Opportunity - Role at Company");
        for placeholder in [
            "[Company]",
            "[Role Title]",
            "[Timeline]",
            "I'd love to discuss this opportunity with you.",
            "[Your Name]",
            "[Your Email]",
        ] {
            assert!(payload.body.contains(placeholder), "missing {placeholder}");
        }
        assert!(payload.body.contains("for a full-time opportunity."));
        // Location has no placeholder: an empty key degrades to an empty label.
        assert!(payload.body.contains("\nLocation: \n"));
    }

    #[test]
    fn unknown_intent_key_degrades_to_empty_label() {
        let record = FormRecord::new().with(HireField::Intent, "contract");
        let payload = MessageTemplate::hire("Aditya").format(&record);
        assert_eq!(payload.subject, " Opportunity - Role at Company");
        assert!(payload.body.contains("for a  opportunity."));
    }

    #[test]
    fn contact_placeholders() {
        let payload = MessageTemplate::contact("Aditya").format(&FormRecord::new());
        assert_eq!(payload.subject, "Contact from Portfolio");
        assert!(payload.body.contains("[Your Name]"));
        assert!(payload.body.contains("[Your Email]"));
        assert!(payload.body.contains("[Your message here]"));
        assert!(!payload.body.contains("\n\n\n"));
    }

    #[test]
    fn contact_uses_supplied_values() {
        let record = FormRecord::new()
            .with(ContactField::Name, "Jane")
            .with(ContactField::Email, "jane@x.com")
            .with(ContactField::Subject, "Coffee?")
            .with(ContactField::Message, "Let's talk.");
        let payload = MessageTemplate::contact("Aditya").format(&record);
        assert_eq!(payload.subject, "Coffee?");
        assert_eq!(
            payload.body,
            "Hi Aditya,\n\nLet's talk.\n\nBest regards,\nJane\njane@x.com"
        );
    }

    #[test]
    fn formatting_is_repeatable() {
        let template = MessageTemplate::hire("Aditya");
        let record = scenario_a().with(HireField::Message, "Emoji 🎉 & symbols = fine");
        assert_eq!(template.format(&record), template.format(&record));
    }

    #[test]
    fn field_values_containing_braces_are_not_expanded() {
        let record = FormRecord::new().with(ContactField::Message, "{name} literally");
        let payload = MessageTemplate::contact("Aditya").format(&record);
        assert!(payload.body.contains("{name} literally"));
    }

    #[test]
    fn rebinding_a_slot_replaces_it() {
        let template = MessageTemplate::contact("Aditya")
            .bind("owner", Binding::Literal("Team".to_string()));
        let payload = template.format(&FormRecord::new());
        assert!(payload.body.starts_with("Hi Team,"));
    }

    #[test]
    fn unknown_slots_are_reported_once() {
        let template = MessageTemplate::<ContactField>::new("{a}", "{a} {b}");
        assert_eq!(template.unknown_slots(), vec!["a".to_string(), "b".to_string()]);
    }
}
