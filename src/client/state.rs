use serde::Serialize;

use super::Coordinates;
use crate::data::{Category, Stakeholder};

/// Food Pantry, Food Bank, Soup Kitchen.
pub const DEFAULT_CATEGORY_IDS: [i32; 3] = [1, 8, 9];

pub const DEFAULT_DISTANCE_MILES: f64 = 5.0;

/// One request lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Slice<T> {
    pub is_loading: bool,
    pub data: T,
    pub error: Option<String>,
}

impl<T> Slice<T> {
    fn request(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    fn succeed(&mut self, data: T) {
        self.is_loading = false;
        self.data = data;
        self.error = None;
    }

    fn fail(&mut self, error: String) {
        self.is_loading = false;
        self.error = Some(error);
    }
}

/// Parameters of a search, kept as the last used ones once the search has run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Criteria {
    pub search_string: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub location_name: String,
    /// `None` until categories have loaded; a search without a selection does nothing.
    pub selected_categories: Option<Vec<Category>>,
    pub distance: f64,
}

impl Default for Criteria {
    fn default() -> Self {
        Criteria {
            search_string: String::new(),
            latitude: None,
            longitude: None,
            location_name: String::new(),
            selected_categories: None,
            distance: DEFAULT_DISTANCE_MILES,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchState {
    pub stakeholders: Slice<Vec<Stakeholder>>,
    pub categories: Slice<Vec<Category>>,
    pub location: Slice<Coordinates>,
    pub criteria: Criteria,
}

/// Edits a consumer may make to the state without running a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetSearchString(String),
    SetLocation {
        name: String,
        latitude: Option<f64>,
        longitude: Option<f64>,
    },
    SetSelectedCategories(Vec<Category>),
    SetSelectedDistance(f64),
    ClearResults,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
    StakeholdersRequest,
    StakeholdersSuccess(Vec<Stakeholder>),
    StakeholdersFailure,

    CategoriesRequest,
    CategoriesSuccess {
        categories: Vec<Category>,
        selected: Vec<Category>,
    },
    CategoriesFailure(String),

    LocationRequest,
    LocationSuccess(Coordinates),
    LocationFailure(String),

    UpdateCriteria(Criteria),

    Command(Command),
}

impl SearchState {
    pub(crate) fn reduce(&mut self, action: Action) {
        match action {
            Action::StakeholdersRequest => self.stakeholders.request(),
            Action::StakeholdersSuccess(stakeholders) => self.stakeholders.succeed(stakeholders),
            // details go to the log, not to the screen
            Action::StakeholdersFailure => self.stakeholders.fail("search failed".to_owned()),

            Action::CategoriesRequest => self.categories.request(),
            Action::CategoriesSuccess {
                categories,
                selected,
            } => {
                self.categories.succeed(categories);
                self.criteria.selected_categories = Some(selected);
            }
            Action::CategoriesFailure(error) => self.categories.fail(error),

            Action::LocationRequest => self.location.request(),
            Action::LocationSuccess(coordinates) => self.location.succeed(coordinates),
            Action::LocationFailure(error) => self.location.fail(error),

            Action::UpdateCriteria(criteria) => self.criteria = criteria,

            Action::Command(command) => self.apply(command),
        }
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::SetSearchString(search_string) => self.criteria.search_string = search_string,
            Command::SetLocation {
                name,
                latitude,
                longitude,
            } => {
                self.criteria.location_name = name;
                self.criteria.latitude = latitude;
                self.criteria.longitude = longitude;
            }
            Command::SetSelectedCategories(categories) => {
                self.criteria.selected_categories = Some(categories)
            }
            Command::SetSelectedDistance(distance) => self.criteria.distance = distance,
            Command::ClearResults => self.stakeholders = Slice::default(),
        }
    }
}

/// Active categories, and the default selection drawn from them, in source order.
pub fn partition_categories(all: Vec<Category>) -> (Vec<Category>, Vec<Category>) {
    let categories = all
        .into_iter()
        .filter(|category| !category.inactive)
        .collect::<Vec<Category>>();

    let selected = categories
        .iter()
        .filter(|category| DEFAULT_CATEGORY_IDS.contains(&category.id))
        .cloned()
        .collect();

    (categories, selected)
}
