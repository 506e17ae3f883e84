#[derive(Debug, Clone)]
pub struct AddPantryItemInput {
    pub ingredient_name: String,
    pub quantity: Option<String>,
    pub notes: Option<String>,
}
