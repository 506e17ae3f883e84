#[derive(Debug, Clone, Default)]
pub struct GetIngredientsFilter {
    pub category: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateIngredientInput {
    pub name: String,
    pub category: String,
}
