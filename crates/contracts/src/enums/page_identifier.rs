use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pages of the kos management application reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageIdentifier {
    #[default]
    Dashboard,
    Properties,
    Rooms,
    Tenants,
    Payments,
    Expenses,
    Laundry,
    Maintenance,
    AcCleaning,
    Reports,
    Settings,
}

impl PageIdentifier {
    /// Stable page key, also used as the serialized form
    pub fn code(&self) -> &'static str {
        match self {
            PageIdentifier::Dashboard => "dashboard",
            PageIdentifier::Properties => "properties",
            PageIdentifier::Rooms => "rooms",
            PageIdentifier::Tenants => "tenants",
            PageIdentifier::Payments => "payments",
            PageIdentifier::Expenses => "expenses",
            PageIdentifier::Laundry => "laundry",
            PageIdentifier::Maintenance => "maintenance",
            PageIdentifier::AcCleaning => "ac-cleaning",
            PageIdentifier::Reports => "reports",
            PageIdentifier::Settings => "settings",
        }
    }

    /// Page heading shown in the content area
    pub fn title(&self) -> &'static str {
        match self {
            PageIdentifier::Dashboard => "Dashboard",
            PageIdentifier::Properties => "Properti",
            PageIdentifier::Rooms => "Kamar",
            PageIdentifier::Tenants => "Penyewa",
            PageIdentifier::Payments => "Pembayaran",
            PageIdentifier::Expenses => "Pengeluaran",
            PageIdentifier::Laundry => "Laundry",
            PageIdentifier::Maintenance => "Perawatan",
            PageIdentifier::AcCleaning => "Cuci AC",
            PageIdentifier::Reports => "Laporan",
            PageIdentifier::Settings => "Pengaturan",
        }
    }

    pub fn all() -> [PageIdentifier; 11] {
        [
            PageIdentifier::Dashboard,
            PageIdentifier::Properties,
            PageIdentifier::Rooms,
            PageIdentifier::Tenants,
            PageIdentifier::Payments,
            PageIdentifier::Expenses,
            PageIdentifier::Laundry,
            PageIdentifier::Maintenance,
            PageIdentifier::AcCleaning,
            PageIdentifier::Reports,
            PageIdentifier::Settings,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|page| page.code() == code)
    }
}

impl fmt::Display for PageIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PageIdentifier {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s.trim()).ok_or_else(|| anyhow::anyhow!("unknown page identifier: '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_unique_and_parse_back() {
        let codes: HashSet<_> = PageIdentifier::all().iter().map(|p| p.code()).collect();
        assert_eq!(codes.len(), PageIdentifier::all().len());

        for page in PageIdentifier::all() {
            assert_eq!(PageIdentifier::from_code(page.code()), Some(page));
        }
    }

    #[test]
    fn test_serde_uses_page_code() {
        let json = serde_json::to_string(&PageIdentifier::AcCleaning).unwrap();
        assert_eq!(json, "\"ac-cleaning\"");

        let page: PageIdentifier = serde_json::from_str("\"rooms\"").unwrap();
        assert_eq!(page, PageIdentifier::Rooms);
    }

    #[test]
    fn test_from_str_rejects_unknown_code() {
        assert_eq!("tenants".parse::<PageIdentifier>().unwrap(), PageIdentifier::Tenants);

        let err = "kitchen".parse::<PageIdentifier>().unwrap_err();
        assert!(err.to_string().contains("kitchen"));
    }

    #[test]
    fn test_default_is_dashboard() {
        assert_eq!(PageIdentifier::default(), PageIdentifier::Dashboard);
        assert_eq!(PageIdentifier::Dashboard.to_string(), "dashboard");
    }
}
