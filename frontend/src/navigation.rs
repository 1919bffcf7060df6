use log::{debug, info};
use web_sys::{window, Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Page sections reachable from the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Projects,
    About,
    Services,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Projects,
        Section::About,
        Section::Services,
        Section::Contact,
    ];

    /// DOM id of the section's anchor element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Projects => "proyectos",
            Section::About => "sobre",
            Section::Services => "servicios",
            Section::Contact => "contacto",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Projects => "Proyectos",
            Section::About => "Sobre mí",
            Section::Services => "Servicios",
            Section::Contact => "Contacto",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Section::ALL.into_iter().find(|section| section.id() == id)
    }
}

/// Something that can bring an anchored element into view.
pub trait SectionHost {
    /// Returns false when no element carries `id`.
    fn scroll_to(&self, id: &str) -> bool;
}

impl SectionHost for Document {
    fn scroll_to(&self, id: &str) -> bool {
        let Some(element) = self.get_element_by_id(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Scrolls `host` to the section with the given id. Unknown ids and
/// missing elements are ignored; returns whether a scroll was started.
pub fn jump_within<H: SectionHost>(host: &H, id: &str) -> bool {
    let Some(section) = Section::from_id(id) else {
        debug!("Ignoring jump to unknown section '{}'", id);
        return false;
    };

    if host.scroll_to(section.id()) {
        info!("Scrolling to section {}", section.id());
        true
    } else {
        debug!("Section '{}' is not rendered", section.id());
        false
    }
}

/// Smooth-scrolls the page's section with the given id to the top of the
/// viewport.
pub fn jump_to(id: &str) -> bool {
    if Section::from_id(id).is_none() {
        debug!("Ignoring jump to unknown section '{}'", id);
        return false;
    }
    match window().and_then(|w| w.document()) {
        Some(document) => jump_within(&document, id),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Page stand-in that records scroll requests.
    struct FakePage {
        anchors: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl FakePage {
        fn with_all_sections() -> Self {
            Self {
                anchors: Section::ALL.iter().map(|s| s.id()).collect(),
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl SectionHost for FakePage {
        fn scroll_to(&self, id: &str) -> bool {
            if !self.anchors.contains(&id) {
                return false;
            }
            self.scrolled.borrow_mut().push(id.to_string());
            true
        }
    }

    #[test]
    fn every_section_round_trips_through_its_id() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
    }

    #[test]
    fn contact_anchor_is_contacto() {
        assert_eq!(Section::from_id("contacto"), Some(Section::Contact));
    }

    #[test]
    fn unknown_ids_do_not_parse() {
        assert_eq!(Section::from_id("aviso"), None);
        assert_eq!(Section::from_id(""), None);
        assert_eq!(Section::from_id("Contacto"), None);
    }

    #[test]
    fn known_anchor_is_scrolled_into_view() {
        let page = FakePage::with_all_sections();
        assert!(jump_within(&page, "contacto"));
        assert_eq!(*page.scrolled.borrow(), vec!["contacto".to_string()]);
    }

    #[test]
    fn second_jump_retargets() {
        let page = FakePage::with_all_sections();
        assert!(jump_within(&page, "proyectos"));
        assert!(jump_within(&page, "servicios"));
        assert_eq!(
            *page.scrolled.borrow(),
            vec!["proyectos".to_string(), "servicios".to_string()]
        );
    }

    #[test]
    fn unknown_anchor_never_touches_the_page() {
        let page = FakePage::with_all_sections();
        assert!(!jump_within(&page, "aviso"));
        assert!(page.scrolled.borrow().is_empty());
    }

    #[test]
    fn missing_section_element_is_ignored() {
        let page = FakePage {
            anchors: vec!["proyectos"],
            scrolled: RefCell::new(Vec::new()),
        };
        assert!(!jump_within(&page, "sobre"));
        assert!(page.scrolled.borrow().is_empty());
    }

    #[test]
    fn jump_to_unknown_id_is_a_quiet_no_op() {
        assert!(!jump_to("no-such-section"));
    }
}
