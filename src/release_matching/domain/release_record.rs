use chrono::NaiveDate;

/// ReleaseRecord value object - one row of the release-schedule export
///
/// Built once by the record store and never mutated. Two records with equal
/// fields are the same record; there is no other identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleaseRecord {
    product_suite: String,
    release_name: Option<String>,
    business_unit: String,
    ga_date: Option<NaiveDate>,
    ga_name: Option<String>,
    maintainer: Option<String>,
    link: Option<String>,
}

impl ReleaseRecord {
    pub fn new(product_suite: String, release_name: Option<String>, business_unit: String) -> Self {
        Self {
            product_suite,
            release_name,
            business_unit,
            ga_date: None,
            ga_name: None,
            maintainer: None,
            link: None,
        }
    }

    pub fn with_ga_date(mut self, ga_date: Option<NaiveDate>) -> Self {
        self.ga_date = ga_date;
        self
    }

    pub fn with_ga_name(mut self, ga_name: Option<String>) -> Self {
        self.ga_name = ga_name;
        self
    }

    pub fn with_maintainer(mut self, maintainer: Option<String>) -> Self {
        self.maintainer = maintainer;
        self
    }

    pub fn with_link(mut self, link: Option<String>) -> Self {
        self.link = link;
        self
    }

    pub fn product_suite(&self) -> &str {
        &self.product_suite
    }

    pub fn release_name(&self) -> Option<&str> {
        self.release_name.as_deref()
    }

    pub fn business_unit(&self) -> &str {
        &self.business_unit
    }

    pub fn ga_date(&self) -> Option<NaiveDate> {
        self.ga_date
    }

    pub fn ga_name(&self) -> Option<&str> {
        self.ga_name.as_deref()
    }

    pub fn maintainer(&self) -> Option<&str> {
        self.maintainer.as_deref()
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Product suite and release label joined with a space.
    ///
    /// Vendor exports embed the version inline in this text, so version
    /// constraints are evaluated against it.
    pub fn searchable_text(&self) -> String {
        match &self.release_name {
            Some(release) => format!("{} {}", self.product_suite, release),
            None => self.product_suite.clone(),
        }
    }

    /// True when the GA date is known and not before `today`.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.ga_date.is_some_and(|date| date >= today)
    }
}
