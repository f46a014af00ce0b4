//! Pure render model of the navigation sidebar.
//!
//! The component in `sidebar.rs` draws exactly what these functions return,
//! so highlight, label visibility and click routing are decided here.

use super::navigation::NavigationEntry;
use crate::shared::class_names::class_names;
use contracts::enums::page_identifier::PageIdentifier;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarItemView {
    pub id: PageIdentifier,
    pub icon: &'static str,
    /// Visible text, `None` in the collapsed rail
    pub label: Option<&'static str>,
    /// Hover tooltip, only set in the collapsed rail
    pub tooltip: Option<&'static str>,
    pub active: bool,
}

impl SidebarItemView {
    pub fn class(&self) -> String {
        item_class(self.active)
    }
}

pub fn sidebar_items(
    entries: &[NavigationEntry],
    current_page: PageIdentifier,
    collapsed: bool,
) -> Vec<SidebarItemView> {
    entries
        .iter()
        .map(|entry| SidebarItemView {
            id: entry.id,
            icon: entry.icon,
            label: (!collapsed).then_some(entry.label),
            tooltip: collapsed.then_some(entry.label),
            active: entry.id == current_page,
        })
        .collect()
}

/// Direction the collapse toggle points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleIndicator {
    /// Rail is wide; clicking narrows it
    Collapse,
    /// Rail is narrow; clicking widens it
    Expand,
}

impl ToggleIndicator {
    pub fn for_state(collapsed: bool) -> Self {
        if collapsed {
            ToggleIndicator::Expand
        } else {
            ToggleIndicator::Collapse
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToggleIndicator::Collapse => "chevron-left",
            ToggleIndicator::Expand => "chevron-right",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ToggleIndicator::Collapse => "Ciutkan menu",
            ToggleIndicator::Expand => "Perluas menu",
        }
    }
}

pub fn item_class(active: bool) -> String {
    class_names(&[
        ("app-sidebar__item", true),
        ("app-sidebar__item--active", active),
    ])
}

pub fn rail_class(collapsed: bool) -> String {
    class_names(&[
        ("app-sidebar", true),
        ("app-sidebar--collapsed", collapsed),
        ("app-sidebar--expanded", !collapsed),
    ])
}

/// Everything a user can do in the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarAction {
    Navigate(PageIdentifier),
    ToggleCollapse,
    Logout,
}

/// Receiver of sidebar actions, implemented by whoever owns the view state.
pub trait SidebarHandler {
    fn page_change(&self, page: PageIdentifier);
    fn toggle_collapse(&self);
    fn logout(&self);
}

/// Routes one action to exactly one handler method.
pub fn dispatch(action: SidebarAction, handler: &impl SidebarHandler) {
    match action {
        SidebarAction::Navigate(page) => handler.page_change(page),
        SidebarAction::ToggleCollapse => handler.toggle_collapse(),
        SidebarAction::Logout => handler.logout(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::left::navigation::NAVIGATION;
    use std::cell::RefCell;

    const TWO_ENTRIES: &[NavigationEntry] = &[
        NavigationEntry::new(PageIdentifier::Dashboard, "Dashboard", "layout-dashboard"),
        NavigationEntry::new(PageIdentifier::Rooms, "Kamar", "door-open"),
    ];

    #[derive(Debug, PartialEq)]
    enum Call {
        PageChange(PageIdentifier),
        Toggle,
        Logout,
    }

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<Call>>,
    }

    impl SidebarHandler for Recorder {
        fn page_change(&self, page: PageIdentifier) {
            self.calls.borrow_mut().push(Call::PageChange(page));
        }
        fn toggle_collapse(&self) {
            self.calls.borrow_mut().push(Call::Toggle);
        }
        fn logout(&self) {
            self.calls.borrow_mut().push(Call::Logout);
        }
    }

    fn active_ids(items: &[SidebarItemView]) -> Vec<PageIdentifier> {
        items.iter().filter(|i| i.active).map(|i| i.id).collect()
    }

    #[test]
    fn test_exactly_one_active_for_every_configured_page() {
        for page in PageIdentifier::all() {
            for collapsed in [false, true] {
                let items = sidebar_items(NAVIGATION, page, collapsed);
                assert_eq!(active_ids(&items), vec![page]);
            }
        }
    }

    #[test]
    fn test_no_active_item_when_page_not_configured() {
        let items = sidebar_items(TWO_ENTRIES, PageIdentifier::Laundry, false);
        assert!(active_ids(&items).is_empty());
        assert!(items.iter().all(|i| i.class() == "app-sidebar__item"));
    }

    #[test]
    fn test_labels_hidden_when_collapsed() {
        let items = sidebar_items(NAVIGATION, PageIdentifier::Dashboard, true);
        assert!(items.iter().all(|i| i.label.is_none()));
        for (item, entry) in items.iter().zip(NAVIGATION) {
            assert_eq!(item.tooltip, Some(entry.label));
        }
    }

    #[test]
    fn test_each_label_once_when_expanded() {
        let items = sidebar_items(NAVIGATION, PageIdentifier::Dashboard, false);
        for entry in NAVIGATION {
            let count = items.iter().filter(|i| i.label == Some(entry.label)).count();
            assert_eq!(count, 1, "label '{}'", entry.label);
        }
        assert!(items.iter().all(|i| i.tooltip.is_none()));
    }

    #[test]
    fn test_expanded_rooms_scenario() {
        let items = sidebar_items(TWO_ENTRIES, PageIdentifier::Rooms, false);
        assert_eq!(items.len(), 2);

        assert_eq!(items[0].id, PageIdentifier::Dashboard);
        assert_eq!(items[0].label, Some("Dashboard"));
        assert!(!items[0].active);
        assert_eq!(items[0].class(), "app-sidebar__item");

        assert_eq!(items[1].id, PageIdentifier::Rooms);
        assert_eq!(items[1].label, Some("Kamar"));
        assert!(items[1].active);
        assert_eq!(items[1].class(), "app-sidebar__item app-sidebar__item--active");
    }

    #[test]
    fn test_collapsed_rooms_scenario() {
        let items = sidebar_items(TWO_ENTRIES, PageIdentifier::Rooms, true);
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.label.is_none()));
        assert_eq!(
            items.iter().map(|i| i.icon).collect::<Vec<_>>(),
            vec!["layout-dashboard", "door-open"]
        );
        assert_eq!(ToggleIndicator::for_state(true), ToggleIndicator::Expand);
        assert_eq!(ToggleIndicator::for_state(true).icon(), "chevron-right");
    }

    #[test]
    fn test_toggle_indicator_direction() {
        assert_eq!(ToggleIndicator::for_state(false), ToggleIndicator::Collapse);
        assert_eq!(ToggleIndicator::for_state(false).icon(), "chevron-left");
    }

    #[test]
    fn test_empty_configuration_renders_no_items() {
        assert!(sidebar_items(&[], PageIdentifier::Dashboard, false).is_empty());
    }

    #[test]
    fn test_navigate_fires_once_even_for_current_page() {
        let recorder = Recorder::default();
        dispatch(SidebarAction::Navigate(PageIdentifier::Rooms), &recorder);
        assert_eq!(*recorder.calls.borrow(), vec![Call::PageChange(PageIdentifier::Rooms)]);

        dispatch(SidebarAction::Navigate(PageIdentifier::Rooms), &recorder);
        assert_eq!(recorder.calls.borrow().len(), 2);
    }

    #[test]
    fn test_toggle_fires_once_without_page_change() {
        let recorder = Recorder::default();
        dispatch(SidebarAction::ToggleCollapse, &recorder);
        assert_eq!(*recorder.calls.borrow(), vec![Call::Toggle]);
    }

    #[test]
    fn test_logout_never_reaches_other_callbacks() {
        let recorder = Recorder::default();
        dispatch(SidebarAction::Logout, &recorder);
        assert_eq!(*recorder.calls.borrow(), vec![Call::Logout]);
    }

    #[test]
    fn test_rail_class() {
        assert_eq!(rail_class(true), "app-sidebar app-sidebar--collapsed");
        assert_eq!(rail_class(false), "app-sidebar app-sidebar--expanded");
    }
}
