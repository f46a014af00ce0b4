//! Navigation table for the sidebar: one row per application page.

use contracts::enums::page_identifier::PageIdentifier;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationEntry {
    pub id: PageIdentifier,
    pub label: &'static str,
    /// Key into `shared::icons`
    pub icon: &'static str,
}

impl NavigationEntry {
    pub const fn new(id: PageIdentifier, label: &'static str, icon: &'static str) -> Self {
        Self { id, label, icon }
    }
}

pub static NAVIGATION: &[NavigationEntry] = &[
    NavigationEntry::new(PageIdentifier::Dashboard, "Dashboard", "layout-dashboard"),
    NavigationEntry::new(PageIdentifier::Properties, "Properti", "building"),
    NavigationEntry::new(PageIdentifier::Rooms, "Kamar", "door-open"),
    NavigationEntry::new(PageIdentifier::Tenants, "Penyewa", "users"),
    NavigationEntry::new(PageIdentifier::Payments, "Pembayaran", "credit-card"),
    NavigationEntry::new(PageIdentifier::Expenses, "Pengeluaran", "receipt"),
    NavigationEntry::new(PageIdentifier::Laundry, "Laundry", "shirt"),
    NavigationEntry::new(PageIdentifier::Maintenance, "Perawatan", "wrench"),
    NavigationEntry::new(PageIdentifier::AcCleaning, "Cuci AC", "wind"),
    NavigationEntry::new(PageIdentifier::Reports, "Laporan", "file-text"),
    NavigationEntry::new(PageIdentifier::Settings, "Pengaturan", "settings"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::icons::is_known_icon;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = NAVIGATION.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), NAVIGATION.len());
    }

    #[test]
    fn test_every_page_has_an_entry() {
        for page in PageIdentifier::all() {
            assert!(
                NAVIGATION.iter().any(|e| e.id == page),
                "missing navigation entry for {}",
                page
            );
        }
    }

    #[test]
    fn test_icons_resolve() {
        for entry in NAVIGATION {
            assert!(is_known_icon(entry.icon), "unknown icon '{}'", entry.icon);
        }
    }

    #[test]
    fn test_labels_match_page_titles() {
        for entry in NAVIGATION {
            assert_eq!(entry.label, entry.id.title());
        }
    }
}
