//! Page copy and static records.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { name: "Home", href: "#" },
    NavLink { name: "Vision", href: "#vision" },
    NavLink { name: "Projects", href: "#projects" },
    NavLink { name: "Contact", href: "#contact" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub quote: &'static str,
    pub author: &'static str,
    pub title: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        id: 1,
        quote: "Dacosta transformed our vision into something beyond our imagination. Their attention to detail and commitment to excellence is unmatched.",
        author: "Alexandra Chen",
        title: "CEO, Meridian Capital",
    },
    Testimonial {
        id: 2,
        quote: "Working with Dacosta was an extraordinary experience. They understood our brand and delivered results that exceeded all expectations.",
        author: "James Whitmore",
        title: "Founder, Whitmore & Associates",
    },
    Testimonial {
        id: 3,
        quote: "The level of sophistication and professionalism Dacosta brings to every project is truly remarkable. A partnership we value deeply.",
        author: "Victoria Laurent",
        title: "Creative Director, Maison Laurent",
    },
];

pub const HERO_PHRASE: &str = "We make your vision reality";

pub const VISION_HEADING_FIRST: &str = "Where vision";
pub const VISION_HEADING_SECOND: &str = "becomes reality";
pub const VISION_BODY_FIRST: &str = "We transform ambitious ideas into extraordinary realities.";
pub const VISION_BODY_SECOND: &str = "Excellence in strategy, design, and execution.";

pub const TESTIMONIALS_HEADING: &str = "Client Voices";

pub const PROJECTS_HEADING: &str = "Our Projects";
pub const PROJECTS_TEASER: &str = "A curated selection of our most distinguished work, each project a reflection of our commitment to excellence and innovation.";

pub const CONTACT_HEADING: &str = "Contact Us";
pub const CONTACT_BLURB: &str = "Ready to transform your vision into reality? We'd love to hear from you. Reach out to discuss your next project.";

pub const GATE_TITLE: &str = "Under Development";
pub const GATE_BODY: &str = "This website is currently under development. We're crafting an exceptional experience for you.";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nav_links_are_in_page_order() {
        let hrefs: Vec<_> = NAV_LINKS.iter().map(|link| link.href).collect();
        assert_eq!(hrefs, vec!["#", "#vision", "#projects", "#contact"]);
    }

    #[test]
    fn nav_anchors_match_section_ids() {
        for link in NAV_LINKS.iter().skip(1) {
            let id = link.href.trim_start_matches('#');
            assert_eq!(id, link.name.to_lowercase());
        }
    }

    #[test]
    fn testimonial_ids_are_unique_and_ordered() {
        let ids: Vec<_> = TESTIMONIALS.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
