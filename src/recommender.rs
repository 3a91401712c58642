//! Keyword recommender
//!
//! Maps free-text career interests onto one of a handful of static career
//! paths by case-insensitive substring match. Rules are tried in order; the
//! first rule with a matching keyword wins.

use serde::Serialize;

/// A static career path: a name and the ordered steps towards it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareerPlan {
    pub career: &'static str,
    pub steps: &'static [&'static str],
}

pub const SOFTWARE_ENGINEER: CareerPlan = CareerPlan {
    career: "Software Engineer",
    steps: &[
        "Learn a programming language such as Python or JavaScript",
        "Study data structures and algorithms",
        "Build small projects and publish them on GitHub",
        "Learn version control, testing and code review",
        "Contribute to open source or do an internship",
        "Apply for junior developer roles",
    ],
};

pub const DATA_SCIENTIST: CareerPlan = CareerPlan {
    career: "Data Scientist",
    steps: &[
        "Learn Python and SQL",
        "Study statistics and linear algebra",
        "Practice data cleaning and visualization",
        "Learn machine learning fundamentals",
        "Complete end-to-end projects on real datasets",
        "Apply for data analyst or junior data scientist roles",
    ],
};

pub const GRAPHIC_DESIGNER: CareerPlan = CareerPlan {
    career: "Graphic Designer",
    steps: &[
        "Learn design principles: typography, color and layout",
        "Master tools such as Figma, Illustrator or Photoshop",
        "Recreate existing designs to build technique",
        "Build a portfolio of original work",
        "Take freelance or agency projects",
    ],
};

pub const CIVIL_ENGINEER: CareerPlan = CareerPlan {
    career: "Civil Engineer",
    steps: &[
        "Strengthen mathematics and physics",
        "Earn a civil engineering degree",
        "Learn CAD and structural analysis software",
        "Complete site internships",
        "Obtain professional engineering certification",
    ],
};

/// Steps offered when no interest keyword matches
pub const GENERIC_STEPS: &[&str] = &[
    "Explore different fields",
    "Take online courses",
    "Talk to mentors",
    "Find your passion",
];

/// Keyword rules, tried in order
const RULES: &[(&[&str], CareerPlan)] = &[
    (&["code", "software"], SOFTWARE_ENGINEER),
    (&["data", "math"], DATA_SCIENTIST),
    (&["design", "art"], GRAPHIC_DESIGNER),
    (&["construction", "civil"], CIVIL_ENGINEER),
];

/// Every career the recommender knows about
pub fn known_careers() -> impl Iterator<Item = &'static CareerPlan> {
    RULES.iter().map(|(_, plan)| plan)
}

/// The outcome of matching a user's interests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Matched career, or `None` when the generic steps were returned
    pub career: Option<&'static str>,
    pub steps: &'static [&'static str],
}

impl Recommendation {
    pub fn is_generic(&self) -> bool {
        self.career.is_none()
    }
}

/// Recommend a career path from free-text interests
pub fn generate_career_path(interests: &str) -> Recommendation {
    let interests = interests.to_lowercase();

    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| interests.contains(k)))
        .map(|(_, plan)| Recommendation {
            career: Some(plan.career),
            steps: plan.steps,
        })
        .unwrap_or(Recommendation {
            career: None,
            steps: GENERIC_STEPS,
        })
}
