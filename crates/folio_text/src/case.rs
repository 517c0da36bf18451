//! Case conversions for identifiers and display labels.

use convert_case::{Case, Casing};

pub fn camel(text: &str) -> String {
    text.to_case(Case::Camel)
}

pub fn kebab(text: &str) -> String {
    text.to_case(Case::Kebab)
}

pub fn snake(text: &str) -> String {
    text.to_case(Case::Snake)
}

pub fn title(text: &str) -> String {
    text.to_case(Case::Title)
}
