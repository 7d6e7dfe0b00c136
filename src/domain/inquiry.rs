// src/domain/inquiry.rs

use crate::errors::ServerError;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt::Write;

pub const MISSING_FIELDS: &str = "All fields are required.";

/// A contact-form submission, either general or about one listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub message: String,

    pub phone: Option<String>,
    pub subject: Option<String>,
    pub contact_method: Option<String>,
    pub timeframe: Option<String>,
    pub property_type: Option<String>,
    pub price_range: Option<String>,
    pub is_first_time_buyer: bool,

    pub listing_id: Option<String>,
    pub listing_address: Option<String>,
    pub listing_price: Option<String>,
}

impl Inquiry {
    /// Builds an inquiry from urlencoded form fields. The HTML form splits
    /// the name into `firstName` / `lastName`; a plain `name` wins if sent.
    pub fn from_form(fields: &HashMap<String, String>) -> Self {
        let text = |key: &str| fields.get(key).map(|v| v.trim().to_string());
        let optional = |key: &str| text(key).filter(|v| !v.is_empty());

        let name = optional("name").unwrap_or_else(|| {
            format!(
                "{} {}",
                text("firstName").unwrap_or_default(),
                text("lastName").unwrap_or_default()
            )
            .trim()
            .to_string()
        });

        let is_first_time_buyer = fields
            .get("isFirstTimeBuyer")
            .map(|v| matches!(v.as_str(), "on" | "true" | "1" | "yes"))
            .unwrap_or(false);

        Self {
            name,
            email: text("email").unwrap_or_default(),
            message: text("message").unwrap_or_default(),
            phone: optional("phone"),
            subject: optional("subject"),
            contact_method: optional("contactMethod"),
            timeframe: optional("timeframe"),
            property_type: optional("propertyType"),
            price_range: optional("priceRange"),
            is_first_time_buyer,
            listing_id: optional("listingId"),
            listing_address: optional("listingAddress"),
            listing_price: optional("listingPrice"),
        }
    }

    pub fn validate(&self) -> Result<(), ServerError> {
        let blank = |s: &str| s.trim().is_empty();
        if blank(&self.name) || blank(&self.email) || blank(&self.message) {
            return Err(ServerError::BadRequest(MISSING_FIELDS.into()));
        }
        Ok(())
    }

    pub fn email_subject(&self) -> String {
        match present(&self.subject) {
            Some(subject) => subject.to_string(),
            None => format!("New contact form submission from {}", self.name),
        }
    }

    /// Plain-text email body sent to the agent.
    pub fn email_text(&self) -> String {
        let mut out = format!("From: {} <{}>\n", self.name, self.email);

        if let Some(phone) = present(&self.phone) {
            let _ = writeln!(out, "Phone: {phone}");
        }
        if let Some(method) = present(&self.contact_method) {
            let _ = writeln!(out, "Preferred Contact: {method}");
        }

        if let Some(id) = present(&self.listing_id) {
            out.push_str("\n--- PROPERTY INQUIRY ---\n");
            let _ = writeln!(out, "Listing ID: {id}");
            let _ = writeln!(
                out,
                "Property: {}",
                present(&self.listing_address).unwrap_or("(no address)")
            );
            if let Some(price) = present(&self.listing_price) {
                let _ = writeln!(out, "Price: {price}");
            }
        }

        let timeframe = present(&self.timeframe);
        let property_type = present(&self.property_type);
        let price_range = present(&self.price_range);
        if timeframe.is_some() || property_type.is_some() || price_range.is_some() {
            out.push_str("\n--- BUYER PREFERENCES ---\n");
            if let Some(t) = timeframe {
                let _ = writeln!(out, "Timeframe: {t}");
            }
            if let Some(t) = property_type {
                let _ = writeln!(out, "Property Type: {t}");
            }
            if let Some(r) = price_range {
                let _ = writeln!(out, "Price Range: {r}");
            }
            if self.is_first_time_buyer {
                out.push_str("First-time buyer: Yes\n");
            }
        }

        let _ = write!(out, "\nMessage:\n{}", self.message);
        out
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
