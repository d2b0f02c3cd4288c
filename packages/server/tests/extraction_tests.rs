mod common;

use common::{UNRELATED_HTML, WEEKLY_MENU_HTML};
use menu_core::domains::menu::extraction::{ExtractionError, MenuExtractor, MenuLayout};
use menu_core::domains::menu::models::{MealPeriod, MenuEntry};
use scraper::Html;

fn extract(html: &str) -> Result<Vec<MenuEntry>, ExtractionError> {
    MenuExtractor::new(MenuLayout::default())
        .expect("default layout compiles")
        .extract_html(html)
}

fn find<'a>(entries: &'a [MenuEntry], day: &str, period: MealPeriod) -> &'a MenuEntry {
    entries
        .iter()
        .find(|e| e.day == day && e.meal_period == period)
        .unwrap_or_else(|| panic!("no entry for {} {}", day, period))
}

// =============================================================================
// Tests: document-level structure
// =============================================================================

#[test]
fn test_missing_container_fails_without_output() {
    let err = extract(UNRELATED_HTML).unwrap_err();
    assert!(matches!(err, ExtractionError::MissingContainer(ref sel) if sel == "div#tabs"));
}

#[test]
fn test_weekly_page_yields_one_entry_per_nonempty_window() {
    let entries = extract(WEEKLY_MENU_HTML).unwrap();

    let keys: Vec<(&str, MealPeriod)> = entries
        .iter()
        .map(|e| (e.day.as_str(), e.meal_period))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("Monday, October 6", MealPeriod::Breakfast),
            ("Monday, October 6", MealPeriod::Lunch),
            ("Wednesday, October 8", MealPeriod::Dinner),
        ]
    );
}

#[test]
fn test_day_block_without_heading_is_skipped() {
    let entries = extract(WEEKLY_MENU_HTML).unwrap();
    assert!(entries
        .iter()
        .all(|e| !e.recipes.contains_key("Orphan Dish")));
    // Blocks after the malformed one still extract
    assert!(entries.iter().any(|e| e.day == "Wednesday, October 8"));
}

#[test]
fn test_extraction_is_lazy_and_single_pass() {
    let extractor = MenuExtractor::new(MenuLayout::default()).unwrap();
    let document = Html::parse_document(WEEKLY_MENU_HTML);

    let mut entries = extractor.extract(&document).unwrap();
    let first = entries.next().unwrap();
    assert_eq!(first.meal_period, MealPeriod::Breakfast);
    assert_eq!(entries.count(), 2);
}

// =============================================================================
// Tests: meal windows
// =============================================================================

#[test]
fn test_window_ends_at_unrecognized_h4() {
    let entries = extract(WEEKLY_MENU_HTML).unwrap();

    let breakfast = find(&entries, "Monday, October 6", MealPeriod::Breakfast);
    assert!(!breakfast.recipes.contains_key("Special Crepe"));

    let dinner = find(&entries, "Wednesday, October 8", MealPeriod::Dinner);
    assert!(!dinner.recipes.contains_key("Pizza Slice"));
    assert!(entries
        .iter()
        .all(|e| !e.recipes.contains_key("Special Crepe") && !e.recipes.contains_key("Pizza Slice")));
}

#[test]
fn test_meal_heading_is_case_insensitive() {
    let entries = extract(WEEKLY_MENU_HTML).unwrap();
    let dinner = find(&entries, "Wednesday, October 8", MealPeriod::Dinner);
    assert!(dinner.recipes.contains_key("Pasta"));
}

#[test]
fn test_window_ends_at_next_h3() {
    let html = r#"<html><body><div id="tabs">
      <div id="tab1content"><h3>Monday</h3><h4>Dinner</h4>
        <ul><li class="trigger"><span>Stew</span><h6>Calories:</h6><p>410</p></li></ul>
      </div>
      <div id="tab2content"><h3>Tuesday</h3>
        <ul><li class="trigger"><span>Curry</span><h6>Calories:</h6><p>520</p></li></ul>
      </div>
    </div></body></html>"#;

    let entries = extract(html).unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].recipes.contains_key("Stew"));
    assert!(!entries[0].recipes.contains_key("Curry"));
}

// =============================================================================
// Tests: recipe triggers
// =============================================================================

#[test]
fn test_multi_name_trigger_shares_attributes() {
    let entries = extract(WEEKLY_MENU_HTML).unwrap();
    let breakfast = find(&entries, "Monday, October 6", MealPeriod::Breakfast);

    let veggie = &breakfast.recipes["Veggie Bowl"];
    let garden = &breakfast.recipes["Garden Bowl"];
    assert_eq!(veggie, garden);
    assert_eq!(veggie["Calories"], "250");
}

#[test]
fn test_label_and_value_colons_are_stripped() {
    let entries = extract(WEEKLY_MENU_HTML).unwrap();
    let breakfast = find(&entries, "Monday, October 6", MealPeriod::Breakfast);

    let eggs = &breakfast.recipes["Scrambled Eggs"];
    assert_eq!(eggs.get("Calories").map(String::as_str), Some("180"));
    assert_eq!(eggs.get("Ingredients").map(String::as_str), Some("eggs, butter, salt"));
    assert_eq!(eggs.len(), 2);
}

#[test]
fn test_trigger_without_attributes_is_dropped() {
    let entries = extract(WEEKLY_MENU_HTML).unwrap();
    let breakfast = find(&entries, "Monday, October 6", MealPeriod::Breakfast);

    assert!(!breakfast.recipes.contains_key("Mystery Item"));
    assert_eq!(
        breakfast.recipes.keys().collect::<Vec<_>>(),
        vec!["Scrambled Eggs", "Veggie Bowl", "Garden Bowl"]
    );
}

#[test]
fn test_status_spans_never_name_a_recipe() {
    let entries = extract(WEEKLY_MENU_HTML).unwrap();
    let lunch = find(&entries, "Monday, October 6", MealPeriod::Lunch);

    assert!(lunch.recipes.contains_key("Grilled Cheese"));
    assert!(!lunch.recipes.contains_key("New"));
    assert!(!lunch.recipes.contains_key("Popular"));
}

#[test]
fn test_only_direct_child_spans_name_a_recipe() {
    let entries = extract(WEEKLY_MENU_HTML).unwrap();
    let lunch = find(&entries, "Monday, October 6", MealPeriod::Lunch);
    assert!(!lunch.recipes.contains_key("Nested Name"));
}

#[test]
fn test_later_duplicates_overwrite_earlier() {
    let entries = extract(WEEKLY_MENU_HTML).unwrap();

    // Repeated label within one trigger
    let lunch = find(&entries, "Monday, October 6", MealPeriod::Lunch);
    assert_eq!(lunch.recipes["Tomato Soup"]["Calories"], "95");

    // Repeated recipe name within one window
    let dinner = find(&entries, "Wednesday, October 8", MealPeriod::Dinner);
    assert_eq!(dinner.recipes.len(), 1);
    assert_eq!(dinner.recipes["Pasta"]["Calories"], "650");
}

#[test]
fn test_label_without_following_value_is_dropped() {
    let html = r#"<html><body><div id="tabs">
      <div id="tab1content"><h3>Friday</h3><h4>Lunch</h4>
        <ul>
          <li class="trigger"><span>Falafel Wrap</span><h6>Calories:</h6><p>: 480</p><h6>Allergens:</h6></li>
        </ul>
      </div>
    </div></body></html>"#;

    let entries = extract(html).unwrap();
    assert_eq!(entries.len(), 1);

    let wrap = &entries[0].recipes["Falafel Wrap"];
    assert_eq!(wrap.len(), 1);
    assert_eq!(wrap["Calories"], "480");
    assert!(!wrap.contains_key("Allergens"));
}

#[test]
fn test_trigger_with_only_dangling_label_is_dropped() {
    let html = r#"<html><body><div id="tabs">
      <div id="tab1content"><h3>Friday</h3><h4>Dinner</h4>
        <ul>
          <li class="trigger"><span>Chef Special</span><h6>Calories:</h6></li>
        </ul>
      </div>
    </div></body></html>"#;

    assert!(extract(html).unwrap().is_empty());
}

#[test]
fn test_custom_layout() {
    let html = r#"<html><body><section class="week">
      <div id="tabMONcontent"><h3>Mon</h3><h4>Lunch</h4>
        <ul><li class="item"><span>Tacos</span><h6>Calories</h6><p>700</p></li></ul>
      </div>
    </section></body></html>"#;

    let layout = MenuLayout {
        container: "section.week".to_string(),
        trigger_class: "item".to_string(),
        ..MenuLayout::default()
    };
    let entries = MenuExtractor::new(layout).unwrap().extract_html(html).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].recipes["Tacos"]["Calories"], "700");
}
