use super::{DayMarker, Store, SubscriptionId};
use crate::calendar::{DateWindow, Edge, OutOfTimeError};
use crate::config::PlannerConfig;
use std::collections::BTreeMap;
use thiserror::Error;
use time::Date;
use tracing::{debug, trace};

/// An entry on a day's shopping list
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ShopItem {
    pub id: u64,
    pub title: String,
    pub checked: bool,
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ShopError {
    #[error("item title is blank")]
    BlankTitle,
    #[error("no item with id {0} on the selected date")]
    NoSuchItem(u64),
}

/// State behind the shopping list screen: a horizontally scrolling window of
/// dates to pick from, the currently picked date, and each date's list of
/// items
#[derive(Debug)]
pub struct ShopPlanner {
    config: PlannerConfig,
    window: Store<DateWindow>,
    selected: Store<Date>,
    items: Store<BTreeMap<Date, Vec<ShopItem>>>,
    next_id: u64,
}

impl ShopPlanner {
    pub fn new(today: Date, config: PlannerConfig) -> Result<ShopPlanner, OutOfTimeError> {
        let window = DateWindow::initial(today, config.radius_days())?;
        Ok(ShopPlanner {
            config,
            window: Store::new(window),
            selected: Store::new(today),
            items: Store::new(BTreeMap::new()),
            next_id: 0,
        })
    }

    pub fn config(&self) -> PlannerConfig {
        self.config
    }

    /// The dates currently loaded into the date picker
    pub fn dates(&self) -> DateWindow {
        *self.window.get()
    }

    pub fn selected_date(&self) -> Date {
        *self.selected.get()
    }

    pub fn select_date(&mut self, date: Date) {
        trace!(%date, "Selecting date");
        self.selected.set(date);
    }

    /// Load one page of dates before the start of the window.
    ///
    /// Returns the number of positions by which every previously-loaded
    /// date has moved, so that the view can keep its scroll position.
    pub fn load_previous(&mut self) -> Result<usize, OutOfTimeError> {
        let page = self.config.page_size();
        let window = self.window.get().extend_backward(page.get())?;
        debug!(first = %window.first(), len = window.len(), "Loaded earlier dates");
        self.window.set(window);
        Ok(usize::try_from(page.get()).unwrap_or(usize::MAX))
    }

    /// Load one page of dates after the end of the window
    pub fn load_next(&mut self) -> Result<(), OutOfTimeError> {
        let window = self
            .window
            .get()
            .extend_forward(self.config.page_size().get())?;
        debug!(last = %window.last(), len = window.len(), "Loaded later dates");
        self.window.set(window);
        Ok(())
    }

    /// Tell the planner that the date at `index` in the window is visible.
    /// If it is within the configured edge threshold of either end of the
    /// window, a page is loaded on that side and the edge is returned.
    pub fn on_visible_index(&mut self, index: usize) -> Result<Option<Edge>, OutOfTimeError> {
        let edge = self
            .window
            .get()
            .edge_near(index, self.config.edge_threshold());
        match edge {
            Some(Edge::Start) => {
                self.load_previous()?;
            }
            Some(Edge::End) => self.load_next()?,
            None => (),
        }
        Ok(edge)
    }

    /// Add an item to the selected date's list and return its ID.
    ///
    /// Surrounding whitespace is stripped from the title and its first
    /// character is capitalized.
    pub fn add_item(&mut self, title: &str) -> Result<u64, ShopError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ShopError::BlankTitle);
        }
        let id = self.next_id;
        self.next_id += 1;
        let item = ShopItem {
            id,
            title: capitalize_first(title),
            checked: false,
        };
        let date = self.selected_date();
        debug!(%date, id, title = %item.title, "Adding item");
        self.items.update(|map| map.entry(date).or_default().push(item));
        Ok(id)
    }

    /// Flip the checked state of an item on the selected date and return
    /// its new state
    pub fn toggle_item(&mut self, id: u64) -> Result<bool, ShopError> {
        let date = self.selected_date();
        if !self.items().iter().any(|it| it.id == id) {
            return Err(ShopError::NoSuchItem(id));
        }
        let checked = self.items.update(|map| {
            let item = map.get_mut(&date)?.iter_mut().find(|it| it.id == id)?;
            item.checked = !item.checked;
            Some(item.checked)
        });
        debug!(%date, id, ?checked, "Toggled item");
        checked.ok_or(ShopError::NoSuchItem(id))
    }

    /// Mark every item on the selected date as checked and return how many
    /// items changed
    pub fn check_all(&mut self) -> usize {
        let date = self.selected_date();
        if self.active_items().next().is_none() {
            return 0;
        }
        let changed = self.items.update(|map| {
            let mut changed = 0;
            for it in map.get_mut(&date).into_iter().flatten() {
                if !it.checked {
                    it.checked = true;
                    changed += 1;
                }
            }
            changed
        });
        debug!(%date, changed, "Checked all items");
        changed
    }

    /// All items for the selected date, in the order they were added
    pub fn items(&self) -> &[ShopItem] {
        self.items_on(self.selected_date())
    }

    pub fn items_on(&self, date: Date) -> &[ShopItem] {
        self.items
            .get()
            .get(&date)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Unchecked items for the selected date
    pub fn active_items(&self) -> impl Iterator<Item = &ShopItem> + '_ {
        self.items().iter().filter(|it| !it.checked)
    }

    /// Checked items for the selected date
    pub fn checked_items(&self) -> impl Iterator<Item = &ShopItem> + '_ {
        self.items().iter().filter(|it| it.checked)
    }

    /// Dates that have at least one item, in chronological order
    pub fn days_with_items(&self) -> impl Iterator<Item = Date> + '_ {
        self.items
            .get()
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(&date, _)| date)
    }

    pub fn subscribe_dates<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&DateWindow) + 'static,
    {
        self.window.subscribe(callback)
    }

    pub fn subscribe_selected<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Date) + 'static,
    {
        self.selected.subscribe(callback)
    }

    pub fn subscribe_items<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&BTreeMap<Date, Vec<ShopItem>>) + 'static,
    {
        self.items.subscribe(callback)
    }
}

impl DayMarker for ShopPlanner {
    fn has_items(&self, date: Date) -> bool {
        !self.items_on(date).is_empty()
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
