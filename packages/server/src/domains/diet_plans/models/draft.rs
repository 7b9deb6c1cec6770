//! The model's diet plan reply and its normalization.
//!
//! Models are inconsistent about meal slots (one object vs. a list) and
//! sometimes skip days, so the reply is kept loosely typed until reshaped.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use super::{DayMeals, WeeklyMeals};

pub const WEEK_DAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DietPlanDraft {
    pub weekly_plan: IndexMap<String, Value>,
    pub shopping_list: IndexMap<String, Value>,
    pub nutritional_summary: Option<Value>,
}

impl DietPlanDraft {
    /// Days present in the reply, in week order, each slot as a list.
    /// Unknown day keys and non-object days are dropped.
    pub fn weekly_meals(&self) -> WeeklyMeals {
        WEEK_DAYS
            .iter()
            .filter_map(|day| {
                let meals = self.weekly_plan.get(*day)?.as_object()?;
                Some((
                    day.to_string(),
                    DayMeals {
                        breakfast: as_list(meals.get("breakfast")),
                        lunch: as_list(meals.get("lunch")),
                        dinner: as_list(meals.get("dinner")),
                        snacks: as_list(meals.get("snacks")),
                    },
                ))
            })
            .collect()
    }

    /// Every shopping-list item, category by category in reply order
    pub fn grocery_list(&self) -> Vec<String> {
        self.shopping_list
            .values()
            .flat_map(|items| match items {
                Value::Array(items) => items.iter().filter_map(item_name).collect::<Vec<_>>(),
                other => item_name(other).into_iter().collect(),
            })
            .collect()
    }
}

fn as_list(slot: Option<&Value>) -> Vec<Value> {
    match slot {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.clone(),
        Some(single) => vec![single.clone()],
    }
}

/// Display text for one shopping-list entry.
///
/// Structured entries use their `name` (or `item`) field and fall back to
/// their JSON text, so no entry is lost. Nulls are skipped.
fn item_name(item: &Value) -> Option<String> {
    match item {
        Value::Null => None,
        Value::String(name) => Some(name.clone()),
        Value::Object(fields) => Some(
            fields
                .get("name")
                .or_else(|| fields.get("item"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| item.to_string()),
        ),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(reply: Value) -> DietPlanDraft {
        serde_json::from_value(reply).unwrap()
    }

    #[test]
    fn test_single_meal_becomes_list() {
        let plan = draft(json!({
            "weeklyPlan": {
                "monday": {
                    "breakfast": {"name": "Oatmeal", "calories": 300},
                    "lunch": [{"name": "Salad"}, {"name": "Soup"}],
                    "dinner": {"name": "Salmon"}
                }
            }
        }));

        let meals = plan.weekly_meals();
        let monday = &meals["monday"];

        assert_eq!(monday.breakfast, vec![json!({"name": "Oatmeal", "calories": 300})]);
        assert_eq!(monday.lunch.len(), 2);
        assert_eq!(monday.dinner.len(), 1);
        assert!(monday.snacks.is_empty());
    }

    #[test]
    fn test_days_in_week_order_and_missing_days_skipped() {
        let plan = draft(json!({
            "weeklyPlan": {
                "sunday": {"breakfast": []},
                "monday": {"breakfast": []},
                "funday": {"breakfast": []},
                "wednesday": "rest day"
            }
        }));

        let days: Vec<_> = plan.weekly_meals().keys().cloned().collect();
        assert_eq!(days, vec!["monday", "sunday"]);
    }

    #[test]
    fn test_grocery_list_flattens_in_category_order() {
        let plan = draft(json!({
            "shoppingList": {
                "proteins": ["Chicken", "Tofu"],
                "vegetables": ["Broccoli"],
                "fruits": [],
                "other": ["Olive oil"]
            }
        }));

        assert_eq!(
            plan.grocery_list(),
            vec!["Chicken", "Tofu", "Broccoli", "Olive oil"]
        );
    }

    #[test]
    fn test_structured_grocery_items_are_kept() {
        let plan = draft(json!({
            "shoppingList": {
                "proteins": [{"name": "Salmon", "quantity": "2 fillets"}, "Eggs"],
                "grains": [{"item": "Brown rice", "quantity": "1 bag"}],
                "other": [{"quantity": "1 jar"}, null],
                "spices": "Cumin"
            }
        }));

        assert_eq!(
            plan.grocery_list(),
            vec![
                "Salmon".to_string(),
                "Eggs".to_string(),
                "Brown rice".to_string(),
                r#"{"quantity":"1 jar"}"#.to_string(),
                "Cumin".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_reply() {
        let plan = draft(json!({}));
        assert!(plan.weekly_meals().is_empty());
        assert!(plan.grocery_list().is_empty());
        assert!(plan.nutritional_summary.is_none());
    }

    #[test]
    fn test_weekly_meals_serialize_in_day_order() {
        let plan = draft(json!({
            "weeklyPlan": {
                "friday": {"snacks": [{"name": "Nuts"}]},
                "tuesday": {}
            }
        }));

        let json = serde_json::to_string(&plan.weekly_meals()).unwrap();
        assert!(json.find("tuesday").unwrap() < json.find("friday").unwrap());
    }
}
