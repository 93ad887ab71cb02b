//! Schema rules for bootcamp payloads.
//!
//! Each field reports at most one violation, the first rule it breaks.
//! Violations are collected in field declaration order.

use std::sync::OnceLock;

use regex::Regex;

use super::{BootcampFields, BootcampInput, Career, DEFAULT_PHOTO};
use crate::domain::FieldViolation;

/// Maximum bootcamp name length, in characters.
pub const NAME_MAX: usize = 50;
/// Maximum description length, in characters.
pub const DESCRIPTION_MAX: usize = 500;
/// Maximum phone number length, in characters.
pub const PHONE_MAX: usize = 20;
/// Lowest accepted average rating.
pub const RATING_MIN: f64 = 1.0;
/// Highest accepted average rating.
pub const RATING_MAX: f64 = 10.0;

static WEBSITE_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn website_regex() -> &'static Regex {
    WEBSITE_RE.get_or_init(|| {
        let pattern = r"https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("website regex failed to compile: {error}"))
    })
}

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*@[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*(\.[A-Za-z0-9_]{2,3})+$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Whether the payload must carry an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// New records have nothing to geocode without an address.
    RequireAddress,
    /// Updates of records whose location is already resolved.
    AddressOptional,
}

/// Output of a successful validation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedBootcamp {
    pub fields: BootcampFields,
    /// Free-text address to geocode, if one was supplied.
    pub address: Option<String>,
}

impl BootcampInput {
    /// Apply the schema rules, returning every violation on failure.
    ///
    /// # Examples
    /// ```
    /// use devcamper::domain::{BootcampInput, ValidationMode};
    ///
    /// let violations = BootcampInput::default()
    ///     .validate(ValidationMode::RequireAddress)
    ///     .expect_err("empty payload is invalid");
    /// assert_eq!(violations[0].message(), "Please add a name");
    /// ```
    pub fn validate(self, mode: ValidationMode) -> Result<ValidatedBootcamp, Vec<FieldViolation>> {
        let name = self.name.as_deref().map(str::trim).unwrap_or_default();
        let careers = parse_careers(self.careers.as_deref());
        let violations: Vec<FieldViolation> = [
            check_name(name),
            check_description(self.description.as_deref()),
            check_website(self.website.as_deref()),
            check_phone(self.phone.as_deref()),
            check_email(self.email.as_deref()),
            check_address(self.address.as_deref(), mode),
            careers.as_ref().map(|_| ()).map_err(Clone::clone),
            check_rating(self.average_rating),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();
        if !violations.is_empty() {
            return Err(violations);
        }
        let careers = careers.map_err(|violation| vec![violation])?;

        let fields = BootcampFields {
            name: name.to_owned(),
            description: self.description.unwrap_or_default(),
            website: self.website,
            phone: self.phone,
            email: self.email,
            careers,
            average_rating: self.average_rating,
            average_cost: self.average_cost,
            photo: self.photo.unwrap_or_else(|| DEFAULT_PHOTO.to_owned()),
            housing: self.housing.unwrap_or(false),
            job_assistance: self.job_assistance.unwrap_or(false),
            job_guarantee: self.job_guarantee.unwrap_or(false),
            accept_gi: self.accept_gi.unwrap_or(false),
        };
        let address = self.address.filter(|address| !address.trim().is_empty());
        Ok(ValidatedBootcamp { fields, address })
    }
}

fn check_name(name: &str) -> Result<(), FieldViolation> {
    if name.is_empty() {
        return Err(FieldViolation::new("name", "Please add a name"));
    }
    if name.chars().count() > NAME_MAX {
        return Err(FieldViolation::new(
            "name",
            format!("Name cannot be more than {NAME_MAX} characters"),
        ));
    }
    Ok(())
}

fn check_description(description: Option<&str>) -> Result<(), FieldViolation> {
    let description = description.unwrap_or_default();
    if description.trim().is_empty() {
        return Err(FieldViolation::new("description", "Please add a description"));
    }
    if description.chars().count() > DESCRIPTION_MAX {
        return Err(FieldViolation::new(
            "description",
            format!("Description cannot be more than {DESCRIPTION_MAX} characters"),
        ));
    }
    Ok(())
}

fn check_website(website: Option<&str>) -> Result<(), FieldViolation> {
    match website {
        Some(url) if !url.is_empty() && !website_regex().is_match(url) => Err(FieldViolation::new(
            "website",
            "Please use a valid URL with HTTP or HTTPS",
        )),
        _ => Ok(()),
    }
}

fn check_phone(phone: Option<&str>) -> Result<(), FieldViolation> {
    match phone {
        Some(number) if number.chars().count() > PHONE_MAX => Err(FieldViolation::new(
            "phone",
            format!("Phone number cannot be more than {PHONE_MAX} characters"),
        )),
        _ => Ok(()),
    }
}

fn check_email(email: Option<&str>) -> Result<(), FieldViolation> {
    match email {
        Some(address) if !address.is_empty() && !email_regex().is_match(address) => {
            Err(FieldViolation::new("email", "Please add a valid email"))
        }
        _ => Ok(()),
    }
}

fn check_address(address: Option<&str>, mode: ValidationMode) -> Result<(), FieldViolation> {
    let missing = address.is_none_or(|text| text.trim().is_empty());
    if missing && mode == ValidationMode::RequireAddress {
        return Err(FieldViolation::new("address", "Please add an address"));
    }
    Ok(())
}

fn parse_careers(careers: Option<&[String]>) -> Result<Vec<Career>, FieldViolation> {
    let labels = careers.unwrap_or_default();
    if labels.is_empty() {
        return Err(FieldViolation::new(
            "careers",
            "Please add at least one career",
        ));
    }

    let mut parsed: Vec<Career> = Vec::with_capacity(labels.len());
    for label in labels {
        let career = label.parse::<Career>().map_err(|_| {
            FieldViolation::new("careers", format!("`{label}` is not a valid career"))
        })?;
        if !parsed.contains(&career) {
            parsed.push(career);
        }
    }
    Ok(parsed)
}

fn check_rating(rating: Option<f64>) -> Result<(), FieldViolation> {
    match rating {
        Some(value) if value < RATING_MIN => Err(FieldViolation::new(
            "averageRating",
            "Rating must be at least 1",
        )),
        Some(value) if value > RATING_MAX => Err(FieldViolation::new(
            "averageRating",
            "Rating cannot be more than 10",
        )),
        _ => Ok(()),
    }
}
