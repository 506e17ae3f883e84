#[derive(Debug, Clone, Default)]
pub struct HealthProfileInput {
    pub conditions: Vec<String>,
    pub allergies: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub age_range: Option<String>,
    pub activity_level: Option<String>,
    pub health_goals: Vec<String>,
}
