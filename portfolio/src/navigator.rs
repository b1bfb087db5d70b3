//! Section navigation state for the single-page layout.
//!
//! The page is one scrollable document with five anchored regions. This
//! module owns the "which region is active" value behind the nav highlight
//! and the jump-to-region operation. Region lookup sits behind
//! [`PageRegions`] so the state holder can be exercised without a browser.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Scrollable regions of the page, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// All sections in the order they appear on the page and in the nav.
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// Anchor id of the region element carrying this section.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    /// Caption shown on the nav button.
    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    /// Validation boundary for untyped ids (e.g. `location.hash`).
    /// Anything outside the fixed set is rejected here.
    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|section| section.id() == id)
    }
}

/// Resolves section ids to scrollable page regions.
pub trait PageRegions {
    /// Handle to a mounted region.
    type Handle;

    /// Locate the region tagged with `id`. `None` when it is not mounted.
    fn resolve(&self, id: &str) -> Option<Self::Handle>;

    /// Ask the viewport to glide to `region`. Fire-and-forget; completion
    /// is never observed.
    fn scroll_smooth(&self, region: &Self::Handle);
}

/// Browser-backed region lookup over `document.getElementById`.
#[derive(Clone, Copy, Default)]
pub struct DomRegions;

impl PageRegions for DomRegions {
    type Handle = web_sys::Element;

    fn resolve(&self, id: &str) -> Option<web_sys::Element> {
        web_sys::window()?.document()?.get_element_by_id(id)
    }

    fn scroll_smooth(&self, region: &web_sys::Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        region.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Keeps the nav highlight synchronized with user-initiated jumps.
///
/// Starts on [`Section::Hero`] and lives for the page's lifetime. The
/// surrounding view reads [`active`](Self::active) after every update;
/// only [`activate`](Self::activate) writes.
pub struct SectionNavigator<R: PageRegions> {
    regions: R,
    active: Section,
}

impl<R: PageRegions> SectionNavigator<R> {
    pub fn new(regions: R) -> Self {
        Self {
            regions,
            active: Section::Hero,
        }
    }

    /// Section currently highlighted in the nav.
    pub fn active(&self) -> Section {
        self.active
    }

    /// Jump to `section`: request a smooth scroll toward its region and
    /// record it as active.
    ///
    /// A missing region (not yet mounted) skips the scroll; the active
    /// state still moves. Best-effort, no failure reporting.
    pub fn activate(&mut self, section: Section) {
        if let Some(region) = self.regions.resolve(section.id()) {
            self.regions.scroll_smooth(&region);
        }
        self.active = section;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records scroll requests instead of touching a viewport.
    struct FakeRegions {
        mounted: Vec<&'static str>,
        scrolled: Rc<RefCell<Vec<String>>>,
    }

    impl FakeRegions {
        fn with_mounted(mounted: &[&'static str]) -> (Self, Rc<RefCell<Vec<String>>>) {
            let scrolled = Rc::new(RefCell::new(Vec::new()));
            let regions = FakeRegions {
                mounted: mounted.to_vec(),
                scrolled: scrolled.clone(),
            };
            (regions, scrolled)
        }

        fn fully_mounted() -> (Self, Rc<RefCell<Vec<String>>>) {
            let ids: Vec<&'static str> = Section::ALL.into_iter().map(Section::id).collect();
            Self::with_mounted(&ids)
        }
    }

    impl PageRegions for FakeRegions {
        type Handle = String;

        fn resolve(&self, id: &str) -> Option<String> {
            self.mounted
                .iter()
                .any(|mounted| *mounted == id)
                .then(|| id.to_string())
        }

        fn scroll_smooth(&self, region: &String) {
            self.scrolled.borrow_mut().push(region.clone());
        }
    }

    #[test]
    fn starts_on_hero() {
        let (regions, _) = FakeRegions::fully_mounted();
        let navigator = SectionNavigator::new(regions);
        assert_eq!(navigator.active(), Section::Hero);
    }

    #[test]
    fn activate_scrolls_to_region_and_updates_state() {
        let (regions, scrolled) = FakeRegions::fully_mounted();
        let mut navigator = SectionNavigator::new(regions);

        navigator.activate(Section::Projects);

        assert_eq!(navigator.active(), Section::Projects);
        assert_eq!(*scrolled.borrow(), vec!["projects".to_string()]);
    }

    #[test]
    fn every_section_becomes_active_even_when_unmounted() {
        let (regions, _) = FakeRegions::with_mounted(&[]);
        let mut navigator = SectionNavigator::new(regions);

        for section in Section::ALL {
            navigator.activate(section);
            assert_eq!(navigator.active(), section);
        }
    }

    #[test]
    fn missing_region_skips_scroll_but_state_still_moves() {
        let (regions, scrolled) = FakeRegions::with_mounted(&["hero"]);
        let mut navigator = SectionNavigator::new(regions);

        navigator.activate(Section::Skills);

        assert_eq!(navigator.active(), Section::Skills);
        assert!(scrolled.borrow().is_empty());
    }

    #[test]
    fn reactivating_current_section_scrolls_again() {
        let (regions, scrolled) = FakeRegions::fully_mounted();
        let mut navigator = SectionNavigator::new(regions);

        navigator.activate(Section::Hero);
        navigator.activate(Section::Hero);

        assert_eq!(navigator.active(), Section::Hero);
        assert_eq!(
            *scrolled.borrow(),
            vec!["hero".to_string(), "hero".to_string()]
        );
    }

    #[test]
    fn last_activation_wins() {
        let (regions, scrolled) = FakeRegions::fully_mounted();
        let mut navigator = SectionNavigator::new(regions);

        navigator.activate(Section::Skills);
        navigator.activate(Section::Contact);

        assert_eq!(navigator.active(), Section::Contact);
        assert_eq!(
            *scrolled.borrow(),
            vec!["skills".to_string(), "contact".to_string()]
        );
    }

    #[test]
    fn unknown_ids_are_rejected_at_the_boundary() {
        assert_eq!(Section::from_id("missing-section"), None);
        assert_eq!(Section::from_id(""), None);
        assert_eq!(Section::from_id("Hero"), None);
    }

    #[test]
    fn section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
    }
}
