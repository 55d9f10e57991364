//! Static copy rendered by the pages.

use crate::inquiry::{Choice, ProjectType};

pub const COMPANY_NAME: &str = "Aboveground";
pub const LEGAL_NAME: &str = "Aboveground Renovation and Construction Corp";
pub const PHONE: &str = "(604) 123-4567";
pub const EMERGENCY_PHONE: &str = "(604) 911-HELP";
pub const EMAIL: &str = "u.anitherealtor@gmail.com";
pub const LOCATION: &str = "Vancouver, BC, Canada";
pub const BUSINESS_HOURS: &[&str] = &["Mon-Fri: 8AM-6PM", "Sat: 9AM-4PM"];

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const HOME_STATS: &[Stat] = &[
    Stat { number: "500+", label: "Projects Completed", description: "" },
    Stat { number: "50+", label: "Happy Clients", description: "" },
    Stat { number: "15+", label: "Years Experience", description: "" },
    Stat { number: "24/7", label: "Support Available", description: "" },
];

pub const PROJECT_STATS: &[Stat] = &[
    Stat { number: "500+", label: "Projects Completed", description: "Successfully delivered across all categories" },
    Stat { number: "98%", label: "Client Satisfaction", description: "Based on post-project surveys" },
    Stat { number: "15+", label: "Years Experience", description: "Building trust in the Vancouver area" },
    Stat { number: "$50M+", label: "Project Value", description: "Total value of completed projects" },
];

pub struct Service {
    pub kind: ProjectType,
    pub icon: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub image: &'static str,
}

impl Service {
    pub fn title(&self) -> &'static str {
        self.kind.label()
    }
}

pub const SERVICES: &[Service] = &[
    Service {
        kind: ProjectType::ResidentialRenovation,
        icon: "🏠",
        summary: "Transform your home with our expert renovation services that blend style with functionality.",
        description: "Transform your home into the space you've always dreamed of. From kitchen makeovers to complete home renovations, we bring your vision to life with quality craftsmanship and attention to detail.",
        features: &[
            "Kitchen & Bathroom Renovations",
            "Basement Finishing",
            "Home Additions",
            "Interior & Exterior Remodeling",
            "Custom Built-ins",
        ],
        image: "/images/interior-1.jpg",
    },
    Service {
        kind: ProjectType::CommercialConstruction,
        icon: "🏢",
        summary: "Build your business dreams with our comprehensive commercial construction solutions.",
        description: "Build your business dreams with our comprehensive commercial construction services. We understand the unique needs of businesses and deliver projects on time and within budget.",
        features: &[
            "Office Buildings",
            "Retail Spaces",
            "Restaurants & Hospitality",
            "Industrial Facilities",
            "Tenant Improvements",
        ],
        image: "/images/exterior-2.jpg",
    },
    Service {
        kind: ProjectType::PropertyRestoration,
        icon: "🔧",
        summary: "Restore and revitalize properties with preservation techniques and modern improvements.",
        description: "Restore and revitalize properties to their former glory and beyond. Our restoration services combine preservation techniques with modern improvements.",
        features: &[
            "Historic Building Restoration",
            "Damage Repair & Restoration",
            "Structural Improvements",
            "Heritage Preservation",
            "Emergency Restoration Services",
        ],
        image: "/images/exterior-1.jpg",
    },
    Service {
        kind: ProjectType::LandDevelopment,
        icon: "📍",
        summary: "Turn raw land into thriving communities with our strategic development expertise.",
        description: "Turn raw land into thriving communities with our strategic development expertise. From planning to completion, we manage every aspect of your development project.",
        features: &[
            "Site Planning & Design",
            "Infrastructure Development",
            "Residential Communities",
            "Commercial Developments",
            "Environmental Compliance",
        ],
        image: "/images/interior-2.jpg",
    },
];

/// Services featured on the home page.
pub fn featured_services() -> impl Iterator<Item = &'static Service> {
    SERVICES
        .iter()
        .filter(|s| s.kind != ProjectType::PropertyRestoration)
}

pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HOME_VALUES: &[Value] = &[
    Value { title: "Vision-Driven Innovation", description: "We reimagine potential and shape purposeful design for the future." },
    Value { title: "Integrity & Transparency", description: "Honest and open in every quote, every project, every interaction." },
    Value { title: "Quality Without Compromise", description: "Excellence delivered from start to finish, every single time." },
    Value { title: "Client-Centered Collaboration", description: "Your vision becomes our blueprint for success." },
];

pub const CORE_VALUES: &[Value] = &[
    Value { title: "Vision-Driven Innovation", description: "We reimagine potential and shape purposeful design that stands the test of time." },
    Value { title: "Integrity & Transparency", description: "Honest and open in every quote, every project, every conversation we have." },
    Value { title: "Quality Without Compromise", description: "Excellence delivered from start to finish, because your trust deserves nothing less." },
    Value { title: "Client-Centered Collaboration", description: "Your vision becomes our blueprint. Together, we build something extraordinary." },
    Value { title: "Aboveground Excellence", description: "We exceed industry standards through accountability, drive, and relentless pursuit of perfection." },
    Value { title: "Safety & Sustainability", description: "Building responsibly with care for people, communities, and our planet's future." },
];

/// Mission and vision cards on the about page.
pub struct Statement {
    pub icon: &'static str,
    pub title: &'static str,
    pub headline: &'static str,
    pub body: &'static str,
}

pub const MISSION_VISION: &[Statement] = &[
    Statement {
        icon: "🎯",
        title: "Our Mission",
        headline: "\"Aboveground: Where You See It. Trust It. And We Build It. Beyond the Surface.\"",
        body: "We exist to transform the construction industry through transparency, innovation, and uncompromising quality. Every project we undertake is a testament to our commitment to building not just structures, but lasting relationships and trust.",
    },
    Statement {
        icon: "👁",
        title: "Our Vision",
        headline: "To become a globally recognized construction brand operating across 2-3 continents within the next 50 years.",
        body: "We envision a future where Aboveground stands alongside industry giants, known for our legacy of trust, timeless builds, and innovative solutions that redefine modern construction for generations to come.",
    },
];

pub const LEADERSHIP_PHILOSOPHY: &str = "Our leadership team combines decades of construction expertise with a fresh vision for the industry's future. We believe in leading by example, fostering innovation, and building a culture where excellence is not just expected. It's inevitable.";

pub const FUTURE_VISION: &[&str] = &[
    "Our vision extends far beyond Vancouver. We're building toward a future where Aboveground operates across 2-3 continents, bringing our standards of excellence to communities worldwide.",
    "But growth doesn't mean losing our soul. Every expansion will carry our core values, our commitment to transparency, and our dedication to building not just structures, but lasting relationships with the communities we serve.",
    "We're inspired by global leaders like HGTV's storytelling approach, Bosa Construction's urban innovation, and Holmes on Homes' \"do it right\" philosophy. These influences shape our path forward as we build the construction company of tomorrow.",
];

pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS: &[ProcessStep] = &[
    ProcessStep { number: "01", title: "Consultation & Planning", description: "We start by understanding your vision, needs, and budget. Our team conducts a thorough assessment and creates a detailed plan." },
    ProcessStep { number: "02", title: "Design & Approval", description: "Our designers work with you to create detailed plans and 3D visualizations. We handle all permits and approvals needed." },
    ProcessStep { number: "03", title: "Construction & Updates", description: "Our skilled craftsmen bring your project to life while keeping you informed with regular updates and transparent communication." },
    ProcessStep { number: "04", title: "Quality Check & Handover", description: "We conduct thorough quality inspections and walk through the completed project with you to ensure everything meets our high standards." },
];

pub const BENEFITS: &[&str] = &[
    "Licensed & Insured Professionals",
    "Transparent Pricing & Communication",
    "Quality Materials & Craftsmanship",
    "On-Time Project Completion",
    "Comprehensive Warranty Coverage",
    "24/7 Customer Support",
];

pub const SERVICE_AREAS: &[&str] = &[
    "Vancouver",
    "Burnaby",
    "Richmond",
    "Surrey",
    "Coquitlam",
    "North Vancouver",
    "West Vancouver",
    "New Westminster",
];

pub struct AreaGroup {
    pub region: &'static str,
    pub places: &'static [&'static str],
}

pub const AREA_GROUPS: &[AreaGroup] = &[
    AreaGroup { region: "Vancouver Area", places: &["Vancouver", "North Vancouver", "West Vancouver", "Burnaby"] },
    AreaGroup { region: "Fraser Valley", places: &["Surrey", "Richmond", "Coquitlam", "New Westminster"] },
    AreaGroup { region: "Extended Areas", places: &["Langley", "Delta", "Port Moody", "Custom locations"] },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectCategory {
    Residential,
    Commercial,
    Restoration,
    Development,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::Residential,
        ProjectCategory::Commercial,
        ProjectCategory::Restoration,
        ProjectCategory::Development,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::Residential => "Residential",
            ProjectCategory::Commercial => "Commercial",
            ProjectCategory::Restoration => "Restoration",
            ProjectCategory::Development => "Development",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl ProjectFilter {
    pub fn options() -> impl Iterator<Item = ProjectFilter> {
        std::iter::once(ProjectFilter::All)
            .chain(ProjectCategory::ALL.into_iter().map(ProjectFilter::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All Projects",
            ProjectFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Only(category) => project.category == category,
        }
    }

    pub fn apply(self, projects: &'static [Project]) -> impl Iterator<Item = &'static Project> {
        projects.iter().filter(move |p| self.matches(p))
    }
}

pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: ProjectCategory,
    pub location: &'static str,
    pub duration: &'static str,
    pub budget: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub features: &'static [&'static str],
}

impl Project {
    /// Features shown on the card and how many are folded into "+N more".
    pub fn preview_features(&self, shown: usize) -> (&'static [&'static str], usize) {
        let shown = shown.min(self.features.len());
        (&self.features[..shown], self.features.len() - shown)
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Modern Family Home Renovation",
        category: ProjectCategory::Residential,
        location: "Vancouver, BC",
        duration: "4 months",
        budget: "$150K - $200K",
        description: "Complete transformation of a 1960s family home into a modern, energy-efficient living space with open-concept design and smart home features.",
        image: "/images/interior-1.jpg",
        features: &["Kitchen Renovation", "Bathroom Upgrades", "Smart Home Integration", "Energy Efficiency"],
    },
    Project {
        id: 2,
        title: "Downtown Office Complex",
        category: ProjectCategory::Commercial,
        location: "Vancouver, BC",
        duration: "8 months",
        budget: "$500K+",
        description: "Construction of a state-of-the-art office complex featuring sustainable materials, modern amenities, and flexible workspace solutions.",
        image: "/images/exterior-2.jpg",
        features: &["Sustainable Design", "Modern Amenities", "Flexible Workspaces", "LEED Certified"],
    },
    Project {
        id: 3,
        title: "Heritage Building Restoration",
        category: ProjectCategory::Restoration,
        location: "Gastown, Vancouver",
        duration: "6 months",
        budget: "$300K - $400K",
        description: "Careful restoration of a historic building while preserving its character and integrating modern safety and efficiency standards.",
        image: "/images/exterior-1.jpg",
        features: &["Heritage Preservation", "Modern Safety Standards", "Character Retention", "Code Compliance"],
    },
    Project {
        id: 4,
        title: "Luxury Condo Development",
        category: ProjectCategory::Development,
        location: "Richmond, BC",
        duration: "18 months",
        budget: "$2M+",
        description: "Development of a luxury condominium complex with premium finishes, amenities, and sustainable building practices.",
        image: "/images/hero-1.jpg",
        features: &["Luxury Finishes", "Premium Amenities", "Sustainable Practices", "Community Spaces"],
    },
    Project {
        id: 5,
        title: "Boutique Restaurant Build-Out",
        category: ProjectCategory::Commercial,
        location: "Yaletown, Vancouver",
        duration: "3 months",
        budget: "$200K - $300K",
        description: "Complete build-out of a boutique restaurant space featuring custom millwork, commercial kitchen, and atmospheric dining areas.",
        image: "/images/interior-2.jpg",
        features: &["Custom Millwork", "Commercial Kitchen", "Atmospheric Design", "Code Compliance"],
    },
    Project {
        id: 6,
        title: "Basement Suite Addition",
        category: ProjectCategory::Residential,
        location: "Burnaby, BC",
        duration: "2 months",
        budget: "$75K - $100K",
        description: "Creation of a legal basement suite with separate entrance, full kitchen, and bathroom for rental income generation.",
        image: "/images/hero-2.jpg",
        features: &["Legal Suite", "Separate Entrance", "Full Kitchen", "Rental Ready"],
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub project: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "Homeowner",
        project: "Kitchen Renovation",
        quote: "Aboveground transformed our outdated kitchen into a modern masterpiece. Their attention to detail and transparent communication made the entire process stress-free.",
        rating: 5,
    },
    Testimonial {
        name: "Michael Chen",
        role: "Business Owner",
        project: "Restaurant Build-Out",
        quote: "The team delivered our restaurant project on time and within budget. The quality of work exceeded our expectations, and we've received countless compliments from customers.",
        rating: 5,
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Property Manager",
        project: "Office Renovation",
        quote: "Professional, reliable, and skilled. Aboveground handled our office renovation with minimal disruption to our business operations. Highly recommended!",
        rating: 5,
    },
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How long does a typical renovation project take?",
        answer: "Project timelines vary based on scope and complexity. Kitchen renovations typically take 3-6 weeks, bathroom renovations 2-4 weeks, and whole home renovations 2-6 months. We provide detailed timelines during consultation.",
    },
    Faq {
        question: "Do you handle permits and inspections?",
        answer: "Yes, we handle all necessary permits and coordinate inspections as part of our comprehensive service. Our team is familiar with local building codes and requirements.",
    },
    Faq {
        question: "What's included in your free consultation?",
        answer: "Our free consultation includes site assessment, initial design discussion, preliminary cost estimates, timeline overview, and answers to all your questions about the project.",
    },
    Faq {
        question: "Do you offer financing options?",
        answer: "We work with several financing partners to help make your project affordable. We can discuss various payment plans and financing options during your consultation.",
    },
    Faq {
        question: "What warranty do you provide?",
        answer: "We provide comprehensive warranties on all our work - typically 1 year on labor and pass-through manufacturer warranties on materials. Specific warranty terms are outlined in your contract.",
    },
];

pub const CONTACT_REASONS: &[&str] = &[
    "Free consultations and detailed quotes",
    "Licensed and insured professionals",
    "Transparent pricing and communication",
    "Quality guarantee on all work",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_filter_keeps_only_its_category() {
        assert_eq!(ProjectFilter::All.apply(PROJECTS).count(), PROJECTS.len());

        let residential: Vec<u32> = ProjectFilter::Only(ProjectCategory::Residential)
            .apply(PROJECTS)
            .map(|p| p.id)
            .collect();
        assert_eq!(residential, vec![1, 6]);

        let total: usize = ProjectCategory::ALL
            .into_iter()
            .map(|c| ProjectFilter::Only(c).apply(PROJECTS).count())
            .sum();
        assert_eq!(total, PROJECTS.len());
    }

    #[test]
    fn filter_buttons_start_with_all() {
        let labels: Vec<_> = ProjectFilter::options().map(ProjectFilter::label).collect();
        assert_eq!(
            labels,
            vec!["All Projects", "Residential", "Commercial", "Restoration", "Development"]
        );
    }

    #[test]
    fn card_preview_folds_extra_features() {
        let (shown, more) = PROJECTS[0].preview_features(2);
        assert_eq!(shown, &["Kitchen Renovation", "Bathroom Upgrades"]);
        assert_eq!(more, 2);
        assert_eq!(PROJECTS[0].preview_features(10).1, 0);
    }

    #[test]
    fn project_ids_are_unique() {
        let mut ids: Vec<u32> = PROJECTS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        let numbers: Vec<_> = PROCESS.iter().map(|step| step.number).collect();
        assert_eq!(numbers, vec!["01", "02", "03", "04"]);
    }

    #[test]
    fn about_page_pairs_mission_with_vision() {
        let titles: Vec<_> = MISSION_VISION.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Our Mission", "Our Vision"]);
        assert!(FUTURE_VISION.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn every_listed_area_has_a_region() {
        for area in SERVICE_AREAS {
            assert!(
                AREA_GROUPS.iter().any(|g| g.places.contains(area)),
                "{area} is missing from the contact page regions"
            );
        }
    }

    #[test]
    fn home_features_three_services() {
        let titles: Vec<_> = featured_services().map(Service::title).collect();
        assert_eq!(
            titles,
            vec!["Residential Renovation", "Commercial Construction", "Land Development"]
        );
    }
}
