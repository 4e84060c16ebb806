//! # Pages Module
//!
//! Identity of the five site pages and the widget mounts each one declares.
//! The binary shows exactly one page per run (picked with `--page`);
//! every component checks for its mount and silently no-ops when the
//! current page does not carry it.

pub mod copy;

/// The pages of the bakery site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Services,
    About,
    Order,
    Contact,
}

/// Widget mount points, the moral equivalent of the site's element ids.
/// A page declares which mounts it carries; components render into a
/// mount only when the current page declares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountId {
    /// Product card grid on the home page.
    CakeGrid,
    /// Product card grid on the services page.
    ServicesGallery,
    /// Customer quotes, home page only.
    Testimonials,
    /// Search box bound to the home grid.
    SearchInput,
    /// Promotional popover, home page only.
    OfferPopover,
    /// Accordion of service descriptions.
    ServicesAccordion,
    /// Tab group on the about page.
    AboutTabs,
    ContactForm,
    OrderForm,
    EnquiryForm,
}

/// The search box is bound to the home grid specifically, as an explicit
/// (input, cards) pair.
pub const SEARCH_BINDING: (MountId, MountId) = (MountId::SearchInput, MountId::CakeGrid);

impl MountId {
    pub const ALL: [MountId; 10] = [
        MountId::CakeGrid,
        MountId::ServicesGallery,
        MountId::Testimonials,
        MountId::SearchInput,
        MountId::OfferPopover,
        MountId::ServicesAccordion,
        MountId::AboutTabs,
        MountId::ContactForm,
        MountId::OrderForm,
        MountId::EnquiryForm,
    ];

    /// Mounts the catalog renderer may be pointed at.
    pub fn is_catalog_grid(self) -> bool {
        matches!(self, MountId::CakeGrid | MountId::ServicesGallery)
    }
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Services,
        Page::About,
        Page::Order,
        Page::Contact,
    ];

    /// Resolve a page from a URL-ish path: `services`, `about.html` and
    /// `/` all work. Matching runs on the final non-empty path segment,
    /// case folded, with any `.html` suffix dropped; a path of only
    /// slashes is the home page.
    pub fn from_path(path: &str) -> Option<Self> {
        let segment = path.rsplit('/').find(|s| !s.is_empty()).unwrap_or("");
        let segment = segment.trim().to_lowercase();
        let stem = segment.strip_suffix(".html").unwrap_or(&segment);
        match stem {
            "" | "index" | "home" => Some(Page::Home),
            "services" => Some(Page::Services),
            "about" => Some(Page::About),
            "order" => Some(Page::Order),
            "contact" => Some(Page::Contact),
            _ => None,
        }
    }

    /// Kebab name used on the command line and in the footer.
    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Services => "services",
            Page::About => "about",
            Page::Order => "order",
            Page::Contact => "contact",
        }
    }

    /// Heading shown in the header bar.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Services => "Services",
            Page::About => "About Us",
            Page::Order => "Place an Order",
            Page::Contact => "Contact",
        }
    }

    /// Widget mounts this page carries, in layout order.
    pub fn mounts(self) -> &'static [MountId] {
        match self {
            Page::Home => &[
                MountId::CakeGrid,
                MountId::SearchInput,
                MountId::Testimonials,
                MountId::OfferPopover,
            ],
            Page::Services => &[
                MountId::ServicesGallery,
                MountId::ServicesAccordion,
                MountId::EnquiryForm,
            ],
            Page::About => &[MountId::AboutTabs],
            Page::Order => &[MountId::OrderForm],
            Page::Contact => &[MountId::ContactForm],
        }
    }

    pub fn has_mount(self, mount: MountId) -> bool {
        self.mounts().contains(&mount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_url_like_paths() {
        assert_eq!(Page::from_path("home"), Some(Page::Home));
        assert_eq!(Page::from_path("/"), Some(Page::Home));
        assert_eq!(Page::from_path("index.html"), Some(Page::Home));
        assert_eq!(Page::from_path("/site/about.html"), Some(Page::About));
        assert_eq!(Page::from_path("SERVICES"), Some(Page::Services));
        assert_eq!(Page::from_path("order"), Some(Page::Order));
        assert_eq!(Page::from_path("checkout"), None);
    }

    #[test]
    fn trailing_slash_resolves_the_named_page() {
        assert_eq!(Page::from_path("about/"), Some(Page::About));
        assert_eq!(Page::from_path("services/"), Some(Page::Services));
        assert_eq!(Page::from_path("/site/order/"), Some(Page::Order));
        assert_eq!(Page::from_path("checkout/"), None);
        // only slashes still mean the home page
        assert_eq!(Page::from_path("//"), Some(Page::Home));
    }

    #[test]
    fn every_page_has_a_distinct_name() {
        let mut names: Vec<&str> = Page::ALL.iter().map(|p| p.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Page::ALL.len());
    }

    #[test]
    fn mounts_follow_the_site_structure() {
        assert!(Page::Home.has_mount(MountId::CakeGrid));
        assert!(Page::Home.has_mount(MountId::OfferPopover));
        assert!(!Page::Home.has_mount(MountId::EnquiryForm));
        assert!(Page::Services.has_mount(MountId::ServicesGallery));
        assert!(!Page::Services.has_mount(MountId::CakeGrid));
        assert!(Page::About.has_mount(MountId::AboutTabs));
        assert!(!Page::About.has_mount(MountId::SearchInput));
    }

    #[test]
    fn only_grids_accept_the_catalog_renderer() {
        assert!(MountId::CakeGrid.is_catalog_grid());
        assert!(MountId::ServicesGallery.is_catalog_grid());
        assert!(!MountId::Testimonials.is_catalog_grid());
        assert!(!MountId::ContactForm.is_catalog_grid());
    }
}
