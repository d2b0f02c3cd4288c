//! Prompt construction and reply parsing for menu analysis.

use lazy_static::lazy_static;
use regex::Regex;

use super::data::MenuItem;
use super::models::{RecipeAttributes, RecipeMap};

lazy_static! {
    // "Grilled Chicken (Calories: 320)" / "calories:320 kcal"
    static ref CALORIES_REGEX: Regex = Regex::new(r"(?i)calories\s*:\s*(\d+)").unwrap();
}

/// Render recipes as `Item:` / `Description:` blocks.
pub fn render_menu(recipes: &RecipeMap) -> String {
    recipes
        .iter()
        .map(|(name, attributes)| {
            format!(
                "Item: {}\nDescription: {}\n",
                name,
                render_attributes(attributes)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_attributes(attributes: &RecipeAttributes) -> String {
    attributes
        .iter()
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Build the filtering prompt sent to the model.
pub fn build_analysis_prompt(
    recipes: &RecipeMap,
    dietary_restrictions: &[String],
    max_calories: Option<u32>,
) -> String {
    let calorie_instruction = match max_calories {
        Some(limit) if limit > 0 => format!(
            "\nMaximum calories allowed: {}\nPlease ensure the sum of the calories of the recommended items do not exceed this limit.",
            limit
        ),
        _ => String::new(),
    };

    format!(
        r#"Given the following menu items and dietary restrictions, analyze each item and list only the items that are safe to eat.
Consider both common dietary restrictions and any specific custom restrictions provided.

Menu Items:
{menu}

Dietary Restrictions:
{restrictions}
{calorie_instruction}

Please analyze each menu item considering:
1. Common dietary restrictions (vegetarian, vegan, gluten-free, etc.)
2. Allergens and ingredients
3. Any specific custom restrictions provided
4. Caloric content and limits

For each safe item, provide only the item name and its caloric content.
Format your response as:
Item Name (Calories: X)

Only include items that are safe to eat based on ALL the provided restrictions.
Before sending the response, make sure to check if the total calories of the recommended items do not exceed the maximum calories allowed.
If they do, construct a new response that contains all the important food nutrients that humans need and does NOT exceed the maximum calories allowed.
Return the response in the above format only; do not add any more text or comments."#,
        menu = render_menu(recipes),
        restrictions = dietary_restrictions.join(", "),
        calorie_instruction = calorie_instruction,
    )
}

/// One item per non-blank line of the reply, trimmed.
pub fn parse_menu_items(reply: &str) -> Vec<MenuItem> {
    reply
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| MenuItem {
            name: line.to_string(),
        })
        .collect()
}

/// Sum of the first `Calories: N` figure on each item. Items without one count as 0.
pub fn total_calories(items: &[MenuItem]) -> u32 {
    items
        .iter()
        .filter_map(|item| CALORIES_REGEX.captures(&item.name))
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .fold(0u32, |sum, calories| sum.saturating_add(calories))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipes() -> RecipeMap {
        let mut bowl = RecipeAttributes::new();
        bowl.insert("Calories".to_string(), "250".to_string());
        bowl.insert("Ingredients".to_string(), "rice, tofu".to_string());
        let mut recipes = RecipeMap::new();
        recipes.insert("Veggie Bowl".to_string(), bowl);
        recipes
    }

    #[test]
    fn test_render_menu() {
        assert_eq!(
            render_menu(&recipes()),
            "Item: Veggie Bowl\nDescription: Calories: 250; Ingredients: rice, tofu\n"
        );
    }

    #[test]
    fn test_prompt_lists_restrictions_and_items() {
        let prompt = build_analysis_prompt(
            &recipes(),
            &["Vegan".to_string(), "No Nuts".to_string()],
            None,
        );
        assert!(prompt.contains("Item: Veggie Bowl"));
        assert!(prompt.contains("Dietary Restrictions:\nVegan, No Nuts\n"));
        assert!(!prompt.contains("Maximum calories allowed"));
    }

    #[test]
    fn test_calorie_instruction_only_for_nonzero_limit() {
        let with_limit = build_analysis_prompt(&recipes(), &[], Some(800));
        assert!(with_limit.contains("Maximum calories allowed: 800"));

        let zero = build_analysis_prompt(&recipes(), &[], Some(0));
        assert!(!zero.contains("Maximum calories allowed"));
    }

    #[test]
    fn test_parse_menu_items_skips_blank_lines() {
        let items = parse_menu_items("  Veggie Bowl (Calories: 250)\n\n   \nFruit Cup (Calories: 80)  \n");
        assert_eq!(
            items,
            vec![
                MenuItem { name: "Veggie Bowl (Calories: 250)".to_string() },
                MenuItem { name: "Fruit Cup (Calories: 80)".to_string() },
            ]
        );
    }

    #[test]
    fn test_total_calories() {
        let items = parse_menu_items("Veggie Bowl (Calories: 250)\nFruit Cup (calories:80)\nWater");
        assert_eq!(total_calories(&items), 330);
        assert_eq!(total_calories(&[]), 0);
    }
}
