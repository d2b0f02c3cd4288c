use scraper::{ElementRef, Html};
use tracing::debug;

use super::document::{has_class, stripped_text, DocumentOrder};
use super::layout::{CompiledLayout, MenuLayout};
use super::ExtractionError;
use crate::domains::menu::models::{MealPeriod, MenuEntry, RecipeAttributes, RecipeMap};

/// Separator the page uses when one line lists several recipes.
const NAME_SEPARATOR: &str = "||";

/// Turns a weekly menu page into [`MenuEntry`] records.
#[derive(Debug)]
pub struct MenuExtractor {
    layout: CompiledLayout,
}

impl MenuExtractor {
    pub fn new(layout: MenuLayout) -> Result<Self, ExtractionError> {
        Ok(Self {
            layout: CompiledLayout::compile(&layout)?,
        })
    }

    /// Start extracting from `document`.
    ///
    /// Fails immediately if the day container is missing. Recipes are read
    /// lazily as the returned iterator is advanced.
    pub fn extract<'a>(&'a self, document: &'a Html) -> Result<MenuEntries<'a>, ExtractionError> {
        let container = document
            .select(&self.layout.container)
            .next()
            .ok_or_else(|| ExtractionError::MissingContainer(self.layout.container_source.clone()))?;

        let order = DocumentOrder::new(document);
        let windows = self.meal_windows(&order, container);

        Ok(MenuEntries {
            layout: &self.layout,
            order,
            windows: windows.into_iter(),
        })
    }

    /// Parse `html` and collect every entry.
    pub fn extract_html(&self, html: &str) -> Result<Vec<MenuEntry>, ExtractionError> {
        let document = Html::parse_document(html);
        let entries = self.extract(&document)?.collect();
        Ok(entries)
    }

    fn meal_windows<'a>(&self, order: &DocumentOrder<'a>, container: ElementRef<'a>) -> Vec<MealWindow> {
        let mut windows = Vec::new();
        let mut cursor = 0;

        for day_block in container.select(&self.layout.day_block) {
            let Some(heading) = day_block.select(&self.layout.h3).next() else {
                debug!("Skipping day block without h3 heading");
                continue;
            };
            let day = stripped_text(&heading, "");

            if let Some(position) = order.position(&day_block, cursor) {
                cursor = position;
            }

            for meal_heading in day_block.select(&self.layout.h4) {
                let label = stripped_text(&meal_heading, "");
                let Some(meal_period) = MealPeriod::parse_label(&label) else {
                    debug!(day = %day, heading = %label, "Ignoring non-meal h4");
                    continue;
                };
                let Some(start) = order.position(&meal_heading, cursor) else {
                    continue;
                };
                windows.push(MealWindow {
                    day: day.clone(),
                    meal_period,
                    start,
                });
            }
        }

        windows
    }
}

#[derive(Debug, Clone)]
struct MealWindow {
    day: String,
    meal_period: MealPeriod,
    start: usize,
}

/// Lazy sequence of entries, one per non-empty meal window.
pub struct MenuEntries<'a> {
    layout: &'a CompiledLayout,
    order: DocumentOrder<'a>,
    windows: std::vec::IntoIter<MealWindow>,
}

impl<'a> MenuEntries<'a> {
    fn read_window(&self, window: &MealWindow) -> RecipeMap {
        let mut recipes = RecipeMap::new();

        for (position, element) in self.order.window(window.start) {
            if element.value().name() != "li" || !has_class(&element, &self.layout.trigger_class) {
                continue;
            }

            let names = self.recipe_names(&element);
            if names.is_empty() {
                debug!(day = %window.day, meal = %window.meal_period, "Skipping unnamed trigger");
                continue;
            }

            let attributes = self.recipe_attributes(&element, position);
            if attributes.is_empty() {
                debug!(day = %window.day, recipes = ?names, "Skipping recipe without attributes");
                continue;
            }

            for name in names {
                recipes.insert(name, attributes.clone());
            }
        }

        recipes
    }

    /// Names from the trigger's first direct child span that is not a status badge.
    fn recipe_names(&self, trigger: &ElementRef<'a>) -> Vec<String> {
        let Some(title) = trigger
            .children()
            .filter_map(ElementRef::wrap)
            .find(|child| {
                child.value().name() == "span" && !has_class(child, &self.layout.status_class)
            })
        else {
            return Vec::new();
        };

        stripped_text(&title, " ")
            .split(NAME_SEPARATOR)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// `h6` label → text of the next `p` in document order.
    fn recipe_attributes(&self, trigger: &ElementRef<'a>, trigger_position: usize) -> RecipeAttributes {
        let mut attributes = RecipeAttributes::new();

        for label_element in trigger.select(&self.layout.h6) {
            let Some(position) = self.order.position(&label_element, trigger_position) else {
                continue;
            };
            let Some(value_element) = self.order.next_named(position, "p") else {
                continue;
            };

            let label = normalize_label(&stripped_text(&label_element, ""));
            let value = normalize_value(&stripped_text(&value_element, ""));
            attributes.insert(label, value);
        }

        attributes
    }
}

impl Iterator for MenuEntries<'_> {
    type Item = MenuEntry;

    fn next(&mut self) -> Option<MenuEntry> {
        while let Some(window) = self.windows.next() {
            let recipes = self.read_window(&window);
            if recipes.is_empty() {
                debug!(day = %window.day, meal = %window.meal_period, "Meal window has no recipes");
                continue;
            }
            return Some(MenuEntry::new(window.day, window.meal_period, recipes));
        }
        None
    }
}

/// "Calories:" → "Calories"
fn normalize_label(label: &str) -> String {
    label.trim().trim_end_matches(':').trim_end().to_string()
}

/// ": 250" → "250"
fn normalize_value(value: &str) -> String {
    let value = value.trim();
    value.strip_prefix(':').unwrap_or(value).trim().to_string()
}
