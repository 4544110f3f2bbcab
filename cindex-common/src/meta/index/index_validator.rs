use std::fmt;

use strum::{Display, IntoStaticStr};

use super::{index_definition::IndexDefinition, index_method::AVAILABLE_USING_METHODS};

/// Practical identifier limit for table and index names.
pub const MAX_IDENTIFIER_LENGTH: usize = 63;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, IntoStaticStr)]
pub enum IndexField {
    #[strum(serialize = "table_name")]
    TableName,
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "using")]
    Using,
    #[strum(serialize = "columns")]
    Columns,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Constraint {
    NotBlank,
    Length { min: usize, max: Option<usize> },
    Choice(&'static [&'static str]),
    Count { min: usize },
    /// Applies the inner constraints to every element of a list.
    All(Vec<Constraint>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldRule {
    pub field: IndexField,
    pub constraints: Vec<Constraint>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// Field path, e.g. `table_name` or `columns[1]`.
    pub field: String,
    pub constraint: Constraint,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msgs: Vec<String> = self
            .0
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect();
        write!(f, "{}", msgs.join("; "))
    }
}

#[derive(Clone, Copy)]
enum FieldValue<'a> {
    Text(Option<&'a str>),
    List(&'a [String]),
}

pub struct IndexValidator {}

impl IndexValidator {
    /// The declarative rule set, for hosts that run their own validation.
    pub fn rules() -> Vec<FieldRule> {
        let identifier_length = Constraint::Length {
            min: 1,
            max: Some(MAX_IDENTIFIER_LENGTH),
        };
        vec![
            FieldRule {
                field: IndexField::TableName,
                constraints: vec![Constraint::NotBlank, identifier_length.clone()],
            },
            FieldRule {
                field: IndexField::Name,
                constraints: vec![identifier_length],
            },
            FieldRule {
                field: IndexField::Using,
                constraints: vec![Constraint::Choice(AVAILABLE_USING_METHODS)],
            },
            FieldRule {
                field: IndexField::Columns,
                constraints: vec![
                    Constraint::Count { min: 1 },
                    Constraint::All(vec![
                        Constraint::NotBlank,
                        Constraint::Length { min: 1, max: None },
                    ]),
                ],
            },
        ]
    }

    /// Runs every rule and collects all violations; an empty result means valid.
    pub fn validate(definition: &IndexDefinition) -> ValidationErrors {
        let mut violations = Vec::new();
        for rule in Self::rules() {
            let value = match rule.field {
                IndexField::TableName => FieldValue::Text(Some(definition.table_name())),
                IndexField::Name => FieldValue::Text(Some(definition.name())),
                IndexField::Using => FieldValue::Text(definition.using()),
                IndexField::Columns => FieldValue::List(definition.columns()),
            };
            let field: &'static str = rule.field.into();
            Self::check(field, value, &rule.constraints, &mut violations);
        }
        ValidationErrors(violations)
    }

    fn check(
        field: &str,
        value: FieldValue,
        constraints: &[Constraint],
        violations: &mut Vec<Violation>,
    ) {
        for constraint in constraints {
            if let Some(message) = Self::check_one(field, value, constraint, violations) {
                violations.push(Violation {
                    field: field.to_string(),
                    constraint: constraint.clone(),
                    message,
                });
            }
        }
    }

    fn check_one(
        field: &str,
        value: FieldValue,
        constraint: &Constraint,
        violations: &mut Vec<Violation>,
    ) -> Option<String> {
        match (constraint, value) {
            (Constraint::NotBlank, FieldValue::Text(text)) => {
                if text.map_or(true, |t| t.trim().is_empty()) {
                    return Some("should not be blank".to_string());
                }
            }

            (Constraint::NotBlank, FieldValue::List(list)) => {
                if list.is_empty() {
                    return Some("should not be blank".to_string());
                }
            }

            // unset values are not length checked
            (Constraint::Length { min, max }, FieldValue::Text(Some(text))) => {
                let len = text.chars().count();
                if len < *min {
                    return Some(format!("is too short, at least {} characters", min));
                }
                if let Some(max) = max {
                    if len > *max {
                        return Some(format!("is too long, at most {} characters", max));
                    }
                }
            }

            (Constraint::Choice(choices), FieldValue::Text(Some(text))) => {
                if !choices.contains(&text) {
                    return Some(format!(
                        "{} is not one of [{}]",
                        text,
                        choices.join(", ")
                    ));
                }
            }

            (Constraint::Count { min }, FieldValue::List(list)) => {
                if list.len() < *min {
                    return Some(format!("should contain at least {} element(s)", min));
                }
            }

            (Constraint::All(inner), FieldValue::List(list)) => {
                for (i, item) in list.iter().enumerate() {
                    let item_field = format!("{}[{}]", field, i);
                    Self::check(
                        &item_field,
                        FieldValue::Text(Some(item.as_str())),
                        inner,
                        violations,
                    );
                }
            }

            _ => {}
        }
        None
    }
}
