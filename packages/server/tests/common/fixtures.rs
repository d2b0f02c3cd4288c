//! Sample menu pages and records.

use menu_core::domains::menu::models::{MealPeriod, MenuEntry, RecipeAttributes, RecipeMap};

/// Three day blocks: a full Monday, a Tuesday block with no `h3`, and a
/// Wednesday with a duplicated recipe and a non-meal `h4`.
pub const WEEKLY_MENU_HTML: &str = r##"<!DOCTYPE html>
<html>
<head><title>Dining Hall Menu</title></head>
<body>
<div id="tabs">
  <ul class="tab-nav">
    <li><a href="#tab1content">Mon</a></li>
    <li><a href="#tab2content">Tue</a></li>
    <li><a href="#tab3content">Wed</a></li>
  </ul>

  <div id="tab1content">
    <h3>Monday, October 6</h3>

    <h4>Breakfast</h4>
    <ul>
      <li class="trigger">
        <span>Scrambled Eggs</span>
        <span class="collapsible-heading-status">Vegetarian</span>
        <div class="nutrition">
          <h6>Calories:</h6><p>: 180</p>
          <h6>Ingredients:</h6><p>: eggs, butter, salt</p>
        </div>
      </li>
      <li class="trigger">
        <span>Veggie Bowl || Garden Bowl</span>
        <div class="nutrition"><h6>Calories:</h6><p>: 250</p></div>
      </li>
      <li class="trigger"><span>Mystery Item</span></li>
    </ul>

    <h4>Specials</h4>
    <ul>
      <li class="trigger"><span>Special Crepe</span><h6>Calories:</h6><p>400</p></li>
    </ul>

    <h4>Lunch</h4>
    <ul>
      <li class="trigger"><span class="collapsible-heading-status">New</span><h6>Calories:</h6><p>1</p></li>
      <li class="trigger">
        <span class="collapsible-heading-status">Popular</span>
        <span>Grilled Cheese</span>
        <h6>Calories:</h6><p>: 350</p>
      </li>
      <li class="trigger"><div><span>Nested Name</span></div><h6>Calories:</h6><p>10</p></li>
      <li class="trigger">
        <span>Tomato Soup</span>
        <h6>Calories:</h6><p>: 90</p>
        <h6>Calories:</h6><p>: 95</p>
      </li>
    </ul>
  </div>

  <div id="tab2content">
    <p>Closed for maintenance</p>
    <h4>Dinner</h4>
    <ul>
      <li class="trigger"><span>Orphan Dish</span><h6>Calories:</h6><p>500</p></li>
    </ul>
  </div>

  <div id="tab3content">
    <h3>Wednesday, October 8</h3>
    <h4>DINNER</h4>
    <ul>
      <li class="trigger"><span>Pasta</span><h6>Calories:</h6><p>: 600</p></li>
      <li class="trigger"><span>Pasta</span><h6>Calories:</h6><p>: 650</p></li>
    </ul>
    <h4>Late Night</h4>
    <ul>
      <li class="trigger"><span>Pizza Slice</span><h6>Calories:</h6><p>300</p></li>
    </ul>
  </div>
</div>
</body>
</html>
"##;

/// A page from some other site: no `div#tabs`.
pub const UNRELATED_HTML: &str = r#"<html><body>
<div id="menu"><h3>Monday</h3><h4>Lunch</h4>
<ul><li class="trigger"><span>Soup</span><h6>Calories:</h6><p>90</p></li></ul></div>
</body></html>"#;

pub fn recipe(name: &str, attributes: &[(&str, &str)]) -> (String, RecipeAttributes) {
    let attributes = attributes
        .iter()
        .map(|(label, value)| (label.to_string(), value.to_string()))
        .collect();
    (name.to_string(), attributes)
}

pub fn entry(day: &str, meal_period: MealPeriod, recipes: Vec<(String, RecipeAttributes)>) -> MenuEntry {
    MenuEntry::new(day, meal_period, recipes.into_iter().collect::<RecipeMap>())
}

/// A small week used by the query-side tests.
pub fn sample_entries() -> Vec<MenuEntry> {
    vec![
        entry(
            "Tuesday, October 7",
            MealPeriod::Lunch,
            vec![
                recipe("Tomato Soup", &[("Calories", "90"), ("Ingredients", "tomato, cream")]),
                recipe("Grilled Cheese", &[("Calories", "350"), ("Allergens", "milk, wheat")]),
            ],
        ),
        entry(
            "Monday, October 6",
            MealPeriod::Breakfast,
            vec![recipe("Oatmeal", &[("Calories", "150")])],
        ),
        entry(
            "Monday, October 6",
            MealPeriod::Dinner,
            vec![recipe("Pasta", &[("Calories", "600")])],
        ),
    ]
}
