use std::fmt;

use serde::{Serialize, Serializer};

/// A closed set of select options with a stable wire value and a label.
pub trait Choice: Copy + Eq + 'static {
    const ALL: &'static [Self];

    fn value(self) -> &'static str;
    fn label(self) -> &'static str;

    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|choice| choice.value() == raw)
    }
}

macro_rules! choices {
    ($name:ident { $($variant:ident => $value:literal, $label:literal;)+ }) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl Choice for $name {
            const ALL: &'static [Self] = &[$(Self::$variant,)+];

            fn value(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.value())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

choices!(ProjectType {
    ResidentialRenovation => "residential-renovation", "Residential Renovation";
    CommercialConstruction => "commercial-construction", "Commercial Construction";
    PropertyRestoration => "property-restoration", "Property Restoration";
    LandDevelopment => "land-development", "Land Development";
    Other => "other", "Other";
});

choices!(Budget {
    Under50k => "under-50k", "Under $50,000";
    From50kTo100k => "50k-100k", "$50,000 - $100,000";
    From100kTo250k => "100k-250k", "$100,000 - $250,000";
    From250kTo500k => "250k-500k", "$250,000 - $500,000";
    Over500k => "over-500k", "Over $500,000";
});

choices!(Timeline {
    Asap => "asap", "ASAP";
    OneToThreeMonths => "1-3-months", "1-3 months";
    ThreeToSixMonths => "3-6-months", "3-6 months";
    SixToTwelveMonths => "6-12-months", "6-12 months";
    PlanningPhase => "planning-phase", "Still planning";
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    ProjectType,
    Budget,
    Timeline,
    Message,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::ProjectType,
        Field::Budget,
        Field::Timeline,
        Field::Message,
    ];

    pub fn is_required(self) -> bool {
        matches!(
            self,
            Field::Name | Field::Email | Field::ProjectType | Field::Message
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::ProjectType => "Project Type",
            Field::Budget => "Budget Range",
            Field::Timeline => "Timeline",
            Field::Message => "Project Details",
        }
    }

    /// Key used on the wire and in DOM ids.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::ProjectType => "projectType",
            Field::Budget => "budget",
            Field::Timeline => "timeline",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: Option<ProjectType>,
    pub budget: Option<Budget>,
    pub timeline: Option<Timeline>,
    pub message: String,
}

impl InquiryFields {
    /// Required fields that are empty or whitespace, in form order.
    pub fn missing_required(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| field.is_required() && !self.is_filled(*field))
            .collect()
    }

    pub fn is_filled(&self, field: Field) -> bool {
        match field {
            Field::Name => !self.name.trim().is_empty(),
            Field::Email => !self.email.trim().is_empty(),
            Field::Phone => !self.phone.trim().is_empty(),
            Field::ProjectType => self.project_type.is_some(),
            Field::Budget => self.budget.is_some(),
            Field::Timeline => self.timeline.is_some(),
            Field::Message => !self.message.trim().is_empty(),
        }
    }

    /// Current value as the string a form control displays.
    pub fn raw(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::ProjectType => self.project_type.map_or("", Choice::value),
            Field::Budget => self.budget.map_or("", Choice::value),
            Field::Timeline => self.timeline.map_or("", Choice::value),
            Field::Message => &self.message,
        }
    }
}

/// One field assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    Email(String),
    Phone(String),
    ProjectType(Option<ProjectType>),
    Budget(Option<Budget>),
    Timeline(Option<Timeline>),
    Message(String),
}

impl FieldUpdate {
    /// Builds an update from a raw control value. Unknown select values clear the field.
    pub fn from_raw(field: Field, raw: &str) -> Self {
        match field {
            Field::Name => FieldUpdate::Name(raw.to_string()),
            Field::Email => FieldUpdate::Email(raw.to_string()),
            Field::Phone => FieldUpdate::Phone(raw.to_string()),
            Field::ProjectType => FieldUpdate::ProjectType(ProjectType::parse(raw)),
            Field::Budget => FieldUpdate::Budget(Budget::parse(raw)),
            Field::Timeline => FieldUpdate::Timeline(Timeline::parse(raw)),
            Field::Message => FieldUpdate::Message(raw.to_string()),
        }
    }

    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::Name(_) => Field::Name,
            FieldUpdate::Email(_) => Field::Email,
            FieldUpdate::Phone(_) => Field::Phone,
            FieldUpdate::ProjectType(_) => Field::ProjectType,
            FieldUpdate::Budget(_) => Field::Budget,
            FieldUpdate::Timeline(_) => Field::Timeline,
            FieldUpdate::Message(_) => Field::Message,
        }
    }

    pub(crate) fn apply(self, fields: &mut InquiryFields) {
        match self {
            FieldUpdate::Name(v) => fields.name = v,
            FieldUpdate::Email(v) => fields.email = v,
            FieldUpdate::Phone(v) => fields.phone = v,
            FieldUpdate::ProjectType(v) => fields.project_type = v,
            FieldUpdate::Budget(v) => fields.budget = v,
            FieldUpdate::Timeline(v) => fields.timeline = v,
            FieldUpdate::Message(v) => fields.message = v,
        }
    }
}

/// Loose shape check: one `@`, a non-empty local part and a dotted domain.
pub fn looks_like_email(raw: &str) -> bool {
    let raw = raw.trim();
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = raw.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_values_parse_to_choices() {
        assert_eq!(
            ProjectType::parse("land-development"),
            Some(ProjectType::LandDevelopment)
        );
        assert_eq!(Budget::parse("100k-250k"), Some(Budget::From100kTo250k));
        assert_eq!(Timeline::parse("planning-phase"), Some(Timeline::PlanningPhase));
        assert_eq!(Timeline::parse("next-decade"), None);
    }

    #[test]
    fn unknown_select_value_clears_field() {
        assert_eq!(
            FieldUpdate::from_raw(Field::Budget, ""),
            FieldUpdate::Budget(None)
        );
        assert_eq!(
            FieldUpdate::from_raw(Field::ProjectType, "bridge"),
            FieldUpdate::ProjectType(None)
        );
    }

    #[test]
    fn wire_format_uses_camel_case_keys_and_choice_values() {
        let fields = InquiryFields {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            project_type: Some(ProjectType::ResidentialRenovation),
            budget: Some(Budget::From50kTo100k),
            message: "Kitchen remodel".into(),
            ..InquiryFields::default()
        };
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["projectType"], "residential-renovation");
        assert_eq!(json["budget"], "50k-100k");
        assert!(json["timeline"].is_null());
        assert_eq!(json["phone"], "");
    }

    #[test]
    fn whitespace_does_not_fill_required_fields() {
        let fields = InquiryFields {
            name: "   ".into(),
            email: "a@b.co".into(),
            message: "\n".into(),
            ..InquiryFields::default()
        };
        assert_eq!(
            fields.missing_required(),
            vec![Field::Name, Field::ProjectType, Field::Message]
        );
    }

    #[test]
    fn email_shape() {
        assert!(looks_like_email("jane@example.com"));
        assert!(looks_like_email(" jane.doe@mail.example.ca "));
        assert!(!looks_like_email("jane"));
        assert!(!looks_like_email("jane@localhost"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("jane@@example.com"));
        assert!(!looks_like_email("ja ne@example.com"));
    }
}
