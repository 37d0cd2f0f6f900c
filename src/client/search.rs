use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::watch;

use super::{
    Action, CategoryService, Command, Coordinates, Criteria, Geolocation, HttpApi, SearchState,
    StakeholderQuery, StakeholderService, partition_categories,
};

/// State container for a stakeholder search screen.
///
/// Categories, location and results are three independent request lifecycles held in one
/// [`SearchState`]. Requests are never cancelled: when two searches overlap, whichever
/// response arrives last is what the state shows.
pub struct StakeholderSearch {
    categories: Arc<dyn CategoryService>,
    stakeholders: Arc<dyn StakeholderService>,
    geolocation: Arc<dyn Geolocation>,
    state: watch::Sender<SearchState>,
    initialized: AtomicBool,
}

impl StakeholderSearch {
    pub fn new(
        categories: Arc<dyn CategoryService>,
        stakeholders: Arc<dyn StakeholderService>,
        geolocation: Arc<dyn Geolocation>,
    ) -> Self {
        let (state, _) = watch::channel(SearchState::default());

        Self {
            categories,
            stakeholders,
            geolocation,
            state,
            initialized: AtomicBool::new(false),
        }
    }

    pub fn with_api(api: HttpApi, geolocation: Arc<dyn Geolocation>) -> Self {
        let api = Arc::new(api);

        Self::new(api.clone(), api, geolocation)
    }

    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    pub fn command(&self, command: Command) {
        self.dispatch(Action::Command(command));
    }

    fn dispatch(&self, action: Action) {
        tracing::trace!(?action, "dispatch");
        self.state.send_modify(|state| state.reduce(action));
    }

    /// Loads categories and location concurrently. The first search runs as soon as
    /// categories are in, without waiting on the location prompt; once a position arrives
    /// the search runs again from it. Only the first call does anything, and it returns
    /// when the location lookup has settled.
    #[tracing::instrument(skip(self))]
    pub async fn initialize(&self) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            return;
        }

        let first_search = async {
            self.fetch_categories().await;

            let criteria = self.criteria_at_current_location();
            self.search(criteria.clone()).await;
            criteria
        };

        let (searched, ()) = tokio::join!(first_search, self.fetch_location());

        let criteria = self.criteria_at_current_location();
        if (criteria.latitude, criteria.longitude) != (searched.latitude, searched.longitude) {
            self.search(criteria).await;
        }
    }

    /// Last used criteria, moved to the resolved location when there is one.
    fn criteria_at_current_location(&self) -> Criteria {
        let state = self.state();
        let location = state.location.data;

        if location.latitude.is_none() || location.longitude.is_none() {
            return state.criteria;
        }

        Criteria {
            latitude: location.latitude,
            longitude: location.longitude,
            ..state.criteria
        }
    }

    /// Runs a search and records `criteria` as the last used, whether or not the search
    /// succeeded. Does nothing while no categories are selected.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, criteria: Criteria) {
        let Some(selected) = &criteria.selected_categories else {
            return;
        };

        self.dispatch(Action::StakeholdersRequest);

        let query = StakeholderQuery {
            name: criteria.search_string.clone(),
            category_ids: selected.iter().map(|category| category.id).collect(),
            latitude: criteria.latitude,
            longitude: criteria.longitude,
            distance: criteria.distance,
        };

        match self.stakeholders.search(&query).await {
            Ok(stakeholders) => self.dispatch(Action::StakeholdersSuccess(stakeholders)),
            Err(err) => {
                tracing::error!("stakeholder search failed: {err:#}");
                self.dispatch(Action::StakeholdersFailure);
            }
        }

        self.dispatch(Action::UpdateCriteria(criteria));
    }

    #[tracing::instrument(skip(self))]
    pub async fn fetch_categories(&self) {
        self.dispatch(Action::CategoriesRequest);

        match self.categories.get_all().await {
            Ok(all) => {
                let (categories, selected) = partition_categories(all);
                self.dispatch(Action::CategoriesSuccess {
                    categories,
                    selected,
                });
            }
            Err(err) => self.dispatch(Action::CategoriesFailure(err.to_string())),
        }
    }

    /// A host without location support is a successful lookup with no coordinates.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_location(&self) {
        self.dispatch(Action::LocationRequest);

        if !self.geolocation.is_available() {
            self.dispatch(Action::LocationSuccess(Coordinates::default()));
            return;
        }

        match self.geolocation.current_position().await {
            Ok(position) => self.dispatch(Action::LocationSuccess(position.into())),
            Err(err) => self.dispatch(Action::LocationFailure(err.to_string())),
        }
    }
}
