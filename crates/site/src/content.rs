//! Static marketing content rendered by the public pages.
//!
//! Everything here is compiled in; only blog posts come from the backend.

/// A pricing plan.
#[derive(Debug, Clone, Copy)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    /// Empty for plans without a fixed price.
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub not_included: &'static [&'static str],
    pub cta: &'static str,
    pub popular: bool,
}

/// A frequently asked question.
#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A customer testimonial.
#[derive(Debug, Clone, Copy)]
pub struct Review {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    /// Out of five.
    pub rating: u8,
    pub text: &'static str,
}

impl Review {
    /// Initials shown in place of an avatar.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }

    /// One star glyph per rating point.
    #[must_use]
    pub fn stars(&self) -> String {
        "★".repeat(usize::from(self.rating.min(5)))
    }
}

/// A titled feature blurb used by the home and services pages.
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        price: "$29",
        period: "per month",
        description: "Perfect for small businesses getting started",
        features: &[
            "Up to 2 users",
            "Basic reporting",
            "Inventory management",
            "Email support",
            "1 location",
        ],
        not_included: &["Advanced analytics", "API access", "Priority support"],
        cta: "Get Started",
        popular: false,
    },
    Plan {
        name: "Professional",
        price: "$79",
        period: "per month",
        description: "Ideal for growing businesses",
        features: &[
            "Up to 10 users",
            "Advanced reporting",
            "Inventory management",
            "API access",
            "Up to 3 locations",
            "Priority email support",
        ],
        not_included: &["Custom integrations", "Dedicated account manager"],
        cta: "Try Free for 14 Days",
        popular: true,
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        period: "",
        description: "For large organizations with complex needs",
        features: &[
            "Unlimited users",
            "Advanced analytics",
            "Custom integrations",
            "API access",
            "Unlimited locations",
            "24/7 phone support",
            "Dedicated account manager",
        ],
        not_included: &[],
        cta: "Contact Sales",
        popular: false,
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Can I change plans later?",
        answer: "Yes, you can upgrade or downgrade your plan at any time. Changes take effect immediately.",
    },
    Faq {
        question: "Is there a setup fee?",
        answer: "No, there are no setup fees for any of our plans.",
    },
    Faq {
        question: "What payment methods do you accept?",
        answer: "We accept all major credit cards and bank transfers.",
    },
    Faq {
        question: "Do you offer discounts for non-profits?",
        answer: "Yes, we offer special pricing for non-profit organizations. Contact our sales team for more information.",
    },
];

pub const REVIEWS: &[Review] = &[
    Review {
        name: "Sarah Chen",
        role: "Restaurant Owner",
        company: "Golden Dragon Bistro",
        rating: 5,
        text: "This POS system transformed our restaurant operations. Order processing is 3x faster, and the analytics helped us increase revenue by 25% in just 3 months.",
    },
    Review {
        name: "Marcus Johnson",
        role: "Retail Manager",
        company: "TechHub Electronics",
        rating: 5,
        text: "The inventory management features are phenomenal. We've eliminated stockouts and reduced ordering time by 80%. The customer support is exceptional too.",
    },
    Review {
        name: "Emily Rodriguez",
        role: "Cafe Owner",
        company: "Brew & Bean",
        rating: 5,
        text: "Switching to this POS was the best business decision we made. The intuitive interface means new staff can learn it in minutes, not hours.",
    },
];

pub const WHY_US: &[Feature] = &[
    Feature {
        title: "Continuous Innovation",
        description: "Cutting-edge AI and machine learning capabilities that evolve with your business needs.",
    },
    Feature {
        title: "Transparent Pricing",
        description: "No hidden fees, no surprises. Clear, competitive pricing that scales with your success.",
    },
    Feature {
        title: "Effortless UX",
        description: "Intuitive interface designed for speed and efficiency, reducing training time by 80%.",
    },
    Feature {
        title: "24/7 Support",
        description: "Round-the-clock expert assistance to ensure your business never skips a beat.",
    },
];

pub const SERVICES: &[Feature] = &[
    Feature {
        title: "Smart Sales Processing",
        description: "Lightning-fast checkout with AI-powered product recognition and dynamic pricing.",
    },
    Feature {
        title: "Advanced Analytics",
        description: "Real-time insights and predictive analytics to optimize your business performance.",
    },
    Feature {
        title: "Customer Management",
        description: "Build lasting relationships with comprehensive customer profiles and loyalty programs.",
    },
    Feature {
        title: "Seamless Payments",
        description: "Accept all payment methods with secure, PCI-compliant transaction processing.",
    },
    Feature {
        title: "Inventory Control",
        description: "Automated inventory tracking with low-stock alerts and purchase order generation.",
    },
    Feature {
        title: "Cloud Integration",
        description: "Access your data anywhere with secure cloud sync and multi-location support.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_popular_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
    }

    #[test]
    fn test_review_initials_and_stars() {
        let review = REVIEWS[1];
        assert_eq!(review.initials(), "MJ");
        assert_eq!(review.stars().chars().count(), 5);
    }
}
