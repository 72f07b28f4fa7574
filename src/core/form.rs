//! Contact form posting to a third-party relay

use crate::core::content::Renderable;
use crate::core::html::HtmlWriter;
use crate::core::style::StyleConfig;
use crate::domain::model::ContactSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
    pub required: bool,
}

static FIELDS: [FormField; 3] = [
    FormField {
        name: "name",
        kind: FieldKind::Text,
        placeholder: "Your Name",
        required: true,
    },
    FormField {
        name: "email",
        kind: FieldKind::Email,
        placeholder: "Your Email",
        required: true,
    },
    FormField {
        name: "message",
        kind: FieldKind::TextArea,
        placeholder: "Your Message here",
        required: false,
    },
];

/// What a visitor's browser posts to the relay.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    pub action: String,
    pub submit_label: String,
}

impl ContactForm {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            submit_label: "Send".to_string(),
        }
    }

    pub fn from_settings(settings: &ContactSettings) -> Self {
        let mut form = Self::new(settings.relay_endpoint.clone());
        if let Some(label) = &settings.submit_label {
            form.submit_label = label.clone();
        }
        form
    }

    pub fn method(&self) -> &'static str {
        "POST"
    }

    pub fn fields(&self) -> &'static [FormField] {
        &FIELDS
    }

    /// Field/value pairs in form order.
    pub fn pairs<'a>(&self, submission: &'a ContactSubmission) -> Vec<(&'static str, &'a str)> {
        self.fields()
            .iter()
            .map(|field| {
                let value = match field.name {
                    "name" => submission.name.as_str(),
                    "email" => submission.email.as_str(),
                    _ => submission.message.as_str(),
                };
                (field.name, value)
            })
            .collect()
    }

    /// `application/x-www-form-urlencoded` body the browser sends to the relay.
    pub fn encode(&self, submission: &ContactSubmission) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs(submission))
            .finish()
    }
}

impl Renderable for ContactForm {
    fn render(&self, out: &mut HtmlWriter, _style: &StyleConfig) {
        let class = out.class("form");
        out.open(
            "form",
            &[
                ("class", class.as_str()),
                ("action", self.action.as_str()),
                ("method", self.method()),
            ],
        );
        for field in self.fields() {
            let mut attrs = vec![("name", field.name), ("placeholder", field.placeholder)];
            if field.required {
                attrs.push(("required", ""));
            }
            match field.kind {
                FieldKind::Text | FieldKind::Email => {
                    let kind = if field.kind == FieldKind::Email {
                        "email"
                    } else {
                        "text"
                    };
                    attrs.insert(0, ("type", kind));
                    out.void("input", &attrs);
                }
                FieldKind::TextArea => out.text("textarea", &attrs, ""),
            }
        }
        let button = out.class("button");
        out.text(
            "button",
            &[("type", "submit"), ("class", button.as_str())],
            &self.submit_label,
        );
        out.close("form");
    }
}
