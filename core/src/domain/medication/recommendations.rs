use crate::domain::medication::entities::{FoodRecommendation, MedicationRecord};

pub const NO_MEDICATIONS_ADVICE: &str = "No medications added. Add your medications to receive personalized food recommendations.";

/// Merges the food guidance of every linked medication.
///
/// Food lists are unions in first-seen order, compared case-insensitively.
pub fn aggregate_recommendations(medications: &[MedicationRecord]) -> FoodRecommendation {
    if medications.is_empty() {
        return FoodRecommendation {
            recommended_foods: Vec::new(),
            foods_to_avoid: Vec::new(),
            vitamin_recommendations: Vec::new(),
            general_advice: NO_MEDICATIONS_ADVICE.to_string(),
        };
    }

    let mut foods_to_avoid = Vec::new();
    let mut recommended_foods = Vec::new();
    let mut vitamin_recommendations = Vec::new();

    for medication in medications {
        push_unique(&mut recommended_foods, &medication.recommended_foods);
        push_unique(&mut foods_to_avoid, &medication.avoid_foods);

        for (nutrient, advice) in medication.vitamin_interactions.iter() {
            vitamin_recommendations.push(format!("{nutrient}: {advice} (for {})", medication.name));
        }
    }

    FoodRecommendation {
        recommended_foods,
        foods_to_avoid,
        vitamin_recommendations,
        general_advice: general_advice(medications),
    }
}

fn general_advice(medications: &[MedicationRecord]) -> String {
    let names: Vec<&str> = medications.iter().map(|m| m.name.as_str()).collect();
    format!(
        "Based on your medications ({}), favor the recommended foods and limit the foods to avoid. Check with your doctor or pharmacist before making major dietary changes.",
        names.join(", ")
    )
}

fn contains_food(foods: &[String], food: &str) -> bool {
    foods.iter().any(|f| f.eq_ignore_ascii_case(food.trim()))
}

fn push_unique(target: &mut Vec<String>, foods: &[String]) {
    for food in foods {
        let food = food.trim();
        if !food.is_empty() && !contains_food(target, food) {
            target.push(food.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::entities::text_map::TextMap, medication::catalog::find_predefined,
    };

    fn custom(name: &str, avoid: &[&str], recommended: &[&str]) -> MedicationRecord {
        MedicationRecord {
            id: name.to_lowercase(),
            name: name.to_string(),
            category: "other".to_string(),
            avoid_foods: avoid.iter().map(|f| f.to_string()).collect(),
            recommended_foods: recommended.iter().map(|f| f.to_string()).collect(),
            vitamin_interactions: TextMap::new(),
            is_custom: true,
        }
    }

    #[test]
    fn no_medications_gives_the_fixed_advice() {
        let result = aggregate_recommendations(&[]);

        assert!(result.recommended_foods.is_empty());
        assert!(result.foods_to_avoid.is_empty());
        assert!(result.vitamin_recommendations.is_empty());
        assert_eq!(
            result.general_advice,
            "No medications added. Add your medications to receive personalized food recommendations."
        );
    }

    #[test]
    fn overlapping_avoid_foods_appear_once() {
        let warfarin = find_predefined("warfarin").unwrap();
        let atorvastatin = find_predefined("atorvastatin").unwrap();

        let result = aggregate_recommendations(&[warfarin, atorvastatin]);

        for food in ["grapefruit", "alcohol"] {
            assert_eq!(result.foods_to_avoid.iter().filter(|f| *f == food).count(), 1);
        }
        assert_eq!(result.foods_to_avoid[0], "kale");
    }

    #[test]
    fn recommended_foods_are_the_union_across_medications() {
        let result = aggregate_recommendations(&[
            custom("A", &["spinach"], &["oats"]),
            custom("B", &[], &["spinach", "Oats", "rice"]),
        ]);

        assert_eq!(result.recommended_foods, vec!["oats", "spinach", "rice"]);
        assert_eq!(result.foods_to_avoid, vec!["spinach"]);
    }

    #[test]
    fn vitamin_notes_follow_medication_then_mapping_order() {
        let result = aggregate_recommendations(&[
            find_predefined("warfarin").unwrap(),
            find_predefined("metformin").unwrap(),
        ]);

        assert_eq!(
            result.vitamin_recommendations,
            vec![
                "Vitamin K: Keep intake consistent from day to day (for Warfarin)",
                "Vitamin E: High-dose supplements may increase bleeding risk (for Warfarin)",
                "Vitamin B12: Long-term use can lower B12; include eggs, dairy or fortified foods (for Metformin)",
            ]
        );
        assert!(result.general_advice.contains("Warfarin, Metformin"));
    }
}
