use crate::domain::{
    common::entities::text_map::TextMap, medication::entities::MedicationRecord,
};

struct PredefinedMedication {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    avoid_foods: &'static [&'static str],
    recommended_foods: &'static [&'static str],
    vitamin_interactions: &'static [(&'static str, &'static str)],
}

impl PredefinedMedication {
    fn to_record(&self) -> MedicationRecord {
        MedicationRecord {
            id: self.id.to_string(),
            name: self.name.to_string(),
            category: self.category.to_string(),
            avoid_foods: self.avoid_foods.iter().map(|f| f.to_string()).collect(),
            recommended_foods: self.recommended_foods.iter().map(|f| f.to_string()).collect(),
            vitamin_interactions: self.vitamin_interactions.iter().copied().collect::<TextMap>(),
            is_custom: false,
        }
    }
}

const PREDEFINED_MEDICATIONS: &[PredefinedMedication] = &[
    PredefinedMedication {
        id: "warfarin",
        name: "Warfarin",
        category: "blood_thinner",
        avoid_foods: &[
            "kale",
            "spinach",
            "broccoli",
            "brussels sprouts",
            "grapefruit",
            "cranberry juice",
            "alcohol",
        ],
        recommended_foods: &["apples", "carrots", "rice", "chicken", "sweet potatoes"],
        vitamin_interactions: &[
            ("Vitamin K", "Keep intake consistent from day to day"),
            ("Vitamin E", "High-dose supplements may increase bleeding risk"),
        ],
    },
    PredefinedMedication {
        id: "metformin",
        name: "Metformin",
        category: "diabetes",
        avoid_foods: &["alcohol", "sugary drinks", "white bread"],
        recommended_foods: &["broccoli", "oats", "lentils", "salmon", "eggs", "quinoa"],
        vitamin_interactions: &[(
            "Vitamin B12",
            "Long-term use can lower B12; include eggs, dairy or fortified foods",
        )],
    },
    PredefinedMedication {
        id: "lisinopril",
        name: "Lisinopril",
        category: "hypertension",
        avoid_foods: &["salt substitutes", "bananas", "oranges", "alcohol"],
        recommended_foods: &["oats", "apples", "chicken", "cucumber", "brown rice"],
        vitamin_interactions: &[(
            "Potassium",
            "Can raise potassium levels; avoid potassium supplements",
        )],
    },
    PredefinedMedication {
        id: "atorvastatin",
        name: "Atorvastatin",
        category: "cholesterol",
        avoid_foods: &["grapefruit", "alcohol"],
        recommended_foods: &["oats", "salmon", "almonds", "avocado", "black beans"],
        vitamin_interactions: &[
            ("Coenzyme Q10", "Statins may lower CoQ10 levels; ask about supplementation"),
            ("Vitamin D", "Adequate levels may reduce statin muscle aches"),
        ],
    },
    PredefinedMedication {
        id: "simvastatin",
        name: "Simvastatin",
        category: "cholesterol",
        avoid_foods: &["grapefruit", "pomelo", "alcohol"],
        recommended_foods: &["oats", "walnuts", "salmon", "lentils"],
        vitamin_interactions: &[(
            "Coenzyme Q10",
            "Statins may lower CoQ10 levels; ask about supplementation",
        )],
    },
    PredefinedMedication {
        id: "levothyroxine",
        name: "Levothyroxine",
        category: "thyroid",
        avoid_foods: &["soy milk", "walnuts", "coffee", "high-fiber cereal"],
        recommended_foods: &["eggs", "chicken", "rice", "apples", "yogurt"],
        vitamin_interactions: &[
            ("Calcium", "Take supplements at least 4 hours apart from the dose"),
            ("Iron", "Take supplements at least 4 hours apart from the dose"),
        ],
    },
    PredefinedMedication {
        id: "amlodipine",
        name: "Amlodipine",
        category: "hypertension",
        avoid_foods: &["grapefruit", "alcohol"],
        recommended_foods: &["spinach", "oats", "salmon", "beets"],
        vitamin_interactions: &[(
            "Magnesium",
            "Magnesium-rich foods support blood pressure control",
        )],
    },
    PredefinedMedication {
        id: "omeprazole",
        name: "Omeprazole",
        category: "acid_reflux",
        avoid_foods: &["coffee", "tomatoes", "citrus fruits", "chocolate", "alcohol"],
        recommended_foods: &["oats", "bananas", "ginger", "chicken", "rice"],
        vitamin_interactions: &[
            ("Vitamin B12", "Long-term use can reduce absorption"),
            ("Magnesium", "Long-term use can lower magnesium levels"),
            ("Calcium", "Prefer calcium citrate, which does not need stomach acid"),
        ],
    },
    PredefinedMedication {
        id: "furosemide",
        name: "Furosemide",
        category: "hypertension",
        avoid_foods: &["licorice", "alcohol", "salty snacks"],
        recommended_foods: &["bananas", "potatoes", "spinach", "oranges", "yogurt"],
        vitamin_interactions: &[
            ("Potassium", "Loop diuretics deplete potassium; eat potassium-rich foods"),
            ("Magnesium", "Losses increase with long-term use"),
        ],
    },
    PredefinedMedication {
        id: "prednisone",
        name: "Prednisone",
        category: "other",
        avoid_foods: &["salty snacks", "sugary drinks", "alcohol"],
        recommended_foods: &["yogurt", "milk", "spinach", "salmon", "lean meats"],
        vitamin_interactions: &[
            ("Calcium", "Steroids reduce calcium absorption; keep intake high"),
            ("Vitamin D", "Supports bone health during long courses"),
        ],
    },
];

pub fn predefined_medications() -> Vec<MedicationRecord> {
    PREDEFINED_MEDICATIONS.iter().map(PredefinedMedication::to_record).collect()
}

pub fn find_predefined(medication_id: &str) -> Option<MedicationRecord> {
    PREDEFINED_MEDICATIONS
        .iter()
        .find(|m| m.id == medication_id)
        .map(PredefinedMedication::to_record)
}

pub fn find_predefined_by_name(name: &str) -> Option<MedicationRecord> {
    let name = name.trim();
    PREDEFINED_MEDICATIONS
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(name))
        .map(PredefinedMedication::to_record)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn predefined_ids_are_unique() {
        let records = predefined_medications();
        let ids: HashSet<_> = records.iter().map(|m| m.id.as_str()).collect();

        assert_eq!(ids.len(), records.len());
        assert!(records.iter().all(|m| !m.is_custom));
    }

    #[test]
    fn lookups_by_id_and_name() {
        assert_eq!(find_predefined("warfarin").unwrap().name, "Warfarin");
        assert_eq!(find_predefined_by_name(" METFORMIN ").unwrap().id, "metformin");
        assert!(find_predefined("aspirin").is_none());
    }
}
