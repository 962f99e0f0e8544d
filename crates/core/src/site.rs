//! The national site record.

use serde::{Deserialize, Serialize};

/// A national park service property.
///
/// Built once by the site resolver and never mutated afterwards. The serde
/// form is the value stored in the `site_detail` cache domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    category: String,
    name: String,
    address: String,
    zipcode: String,
    phone: String,
}

impl Site {
    /// Build a site from its parts.
    ///
    /// `address` is composed as `"<city>, <region>"`; the region and postal code
    /// are trimmed of surrounding whitespace.
    pub fn new(
        category: impl Into<String>, name: impl Into<String>, city: &str, region: &str, zipcode: &str,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            address: format!("{}, {}", city, region.trim()),
            zipcode: zipcode.trim().to_string(),
            phone: phone.into(),
        }
    }

    /// Designation such as "National Park". May be empty.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// City and region, e.g. "Houghton, MI".
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn zipcode(&self) -> &str {
        &self.zipcode
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// One-line summary used in catalog listings.
    pub fn info(&self) -> String {
        format!("{} ({}): {} {}", self.name, self.category, self.address, self.zipcode)
    }
}
