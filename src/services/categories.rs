// src/services/categories.rs

/// Topic a chat is scoped to. Picks the system instruction sent upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    General,
    MentalHealth,
    FirstAid,
    Covid,
    SexualHealth,
    MaternalHealth,
    Emergency,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::General,
        Category::MentalHealth,
        Category::FirstAid,
        Category::Covid,
        Category::SexualHealth,
        Category::MaternalHealth,
        Category::Emergency,
    ];

    /// Exact, case-sensitive lookup. Unknown labels fall back to `General`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "mental-health" => Category::MentalHealth,
            "first-aid" => Category::FirstAid,
            "covid" => Category::Covid,
            "sexual-health" => Category::SexualHealth,
            "maternal-health" => Category::MaternalHealth,
            "emergency" => Category::Emergency,
            _ => Category::General,
        }
    }

    pub fn resolve(label: Option<&str>) -> Self {
        label.map(Self::from_label).unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::General => "general",
            Category::MentalHealth => "mental-health",
            Category::FirstAid => "first-aid",
            Category::Covid => "covid",
            Category::SexualHealth => "sexual-health",
            Category::MaternalHealth => "maternal-health",
            Category::Emergency => "emergency",
        }
    }

    pub fn system_instruction(self) -> &'static str {
        match self {
            Category::General => {
                "You are a helpful AI health assistant. Provide accurate information but clarify you're not a replacement for professional medical advice."
            }
            Category::MentalHealth => {
                "You are a supportive AI focusing on mental health. Offer compassionate guidance while emphasizing the importance of professional therapy when needed."
            }
            Category::FirstAid => {
                "You are an AI first aid guide. Provide clear emergency response information, but always emphasize seeking professional medical help for serious situations."
            }
            Category::Covid => {
                "You are an AI COVID-19 information resource. Provide the latest guidance based on scientific consensus and emphasize consulting local health authorities."
            }
            Category::SexualHealth => {
                "You are an AI sexual health educator. Provide factual, non-judgmental information while recommending professional healthcare for personal concerns."
            }
            Category::MaternalHealth => {
                "You are an AI maternal health assistant. Provide supportive information for pregnancy and childcare while emphasizing regular prenatal/postnatal checkups."
            }
            Category::Emergency => {
                "You are an AI emergency response guide. Provide urgent care instructions while STRONGLY emphasizing immediately calling emergency services (911/999/112) for all true emergencies."
            }
        }
    }
}
