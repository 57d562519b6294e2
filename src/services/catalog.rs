//! Catalog orchestration.
//!
//! [`Catalog`] owns the catalog state and is the only place it changes. Every
//! mutator publishes a fresh immutable [`CatalogState`] snapshot. List
//! requests are numbered; when a newer one starts, the in-flight task is
//! aborted and any response that still arrives for an older number is
//! dropped, so the displayed page always belongs to the most recently
//! initiated request.

use std::sync::{Arc, Mutex, MutexGuard};

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::AbortHandle;

use crate::domain::filter::{FilterSet, Ordering};
use crate::domain::game::{GameSummary, fallback_hero};
use crate::encoder::{HERO_MAX_PAGE, encode, encode_hero};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::refiner::refine;
use crate::repository::GameReader;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    Idle,
    Loading,
    Ready,
    /// The request failed or returned nothing after refinement.
    Empty,
}

#[derive(Clone, Debug, Serialize)]
pub struct CatalogState {
    pub filters: FilterSet,
    pub page: usize,
    pub status: LoadStatus,
    pub games: Paginated<GameSummary>,
    pub hero: Option<GameSummary>,
    /// Number of the list request this snapshot belongs to.
    pub sequence: u64,
}

impl CatalogState {
    fn initial(filters: FilterSet, page: usize) -> Self {
        Self {
            filters,
            page: page.max(1),
            status: LoadStatus::Idle,
            games: Paginated::empty(),
            hero: None,
            sequence: 0,
        }
    }
}

/// The most recently started list request.
#[derive(Default)]
struct InFlight {
    sequence: u64,
    task: Option<AbortHandle>,
}

pub struct Catalog<R> {
    repo: Arc<R>,
    state: watch::Sender<Arc<CatalogState>>,
    in_flight: Mutex<InFlight>,
}

impl<R> Catalog<R>
where
    R: GameReader + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self::with_state(repo, FilterSet::default(), 1)
    }

    /// Starts from the given filters and page, e.g. restored from a URL.
    pub fn with_state(repo: Arc<R>, filters: FilterSet, page: usize) -> Self {
        let (state, _) = watch::channel(Arc::new(CatalogState::initial(filters, page)));

        Self {
            repo,
            state,
            in_flight: Mutex::new(InFlight::default()),
        }
    }

    pub fn snapshot(&self) -> Arc<CatalogState> {
        Arc::clone(&self.state.borrow())
    }

    /// Receives every snapshot published from now on.
    pub fn subscribe(&self) -> watch::Receiver<Arc<CatalogState>> {
        self.state.subscribe()
    }

    /// Initial load: the hero spotlight and the current page, concurrently.
    pub async fn mount(&self) -> Arc<CatalogState> {
        let current = self.snapshot();

        tokio::join!(
            self.load_hero(),
            self.load(current.filters.clone(), current.page)
        );

        self.snapshot()
    }

    /// Replaces the filters and goes back to the first page.
    pub async fn apply_filters(&self, filters: FilterSet) -> Option<Arc<CatalogState>> {
        self.load(filters, 1).await
    }

    pub async fn go_to_page(&self, page: usize) -> Option<Arc<CatalogState>> {
        let filters = self.snapshot().filters.clone();
        self.load(filters, page).await
    }

    /// Changes the sort key and goes back to the first page.
    pub async fn set_ordering(&self, ordering: Ordering) -> Option<Arc<CatalogState>> {
        let filters = self.snapshot().filters.with_ordering(ordering);
        self.load(filters, 1).await
    }

    /// Picks a new hero and publishes it. Never fails.
    pub async fn load_hero(&self) -> GameSummary {
        let hero = pick_hero(self.repo.as_ref()).await;

        self.state.send_modify(|state| {
            let mut next = CatalogState::clone(state);
            next.hero = Some(hero.clone());
            *state = Arc::new(next);
        });

        hero
    }

    /// Fetches and refines one page. Returns `None` when a newer request
    /// superseded this one before it settled.
    async fn load(&self, filters: FilterSet, page: usize) -> Option<Arc<CatalogState>> {
        let page = page.max(1);

        // The highest number always owns the live task.
        let (sequence, task) = {
            let mut in_flight = lock(&self.in_flight);
            let sequence = in_flight.sequence + 1;

            self.state.send_modify(|state| {
                *state = Arc::new(CatalogState {
                    filters: filters.clone(),
                    page,
                    status: LoadStatus::Loading,
                    games: state.games.clone(),
                    hero: state.hero.clone(),
                    sequence,
                });
            });

            let request = encode(&filters, page);
            let repo = Arc::clone(&self.repo);
            let task = tokio::spawn(async move { repo.list_games(&request).await });

            if let Some(previous) = in_flight.task.replace(task.abort_handle()) {
                previous.abort();
            }
            in_flight.sequence = sequence;

            (sequence, task)
        };

        let games = match task.await {
            Ok(Ok(raw)) => refine(raw, &filters, DEFAULT_ITEMS_PER_PAGE, page),
            Ok(Err(err)) => {
                log::error!("Failed to fetch games page {page}: {err}");
                Paginated::empty()
            }
            Err(err) if err.is_cancelled() => {
                log::debug!("Catalog request #{sequence} was superseded");
                return None;
            }
            Err(err) => {
                log::error!("Catalog request #{sequence} failed: {err}");
                Paginated::empty()
            }
        };

        let status = if games.is_empty() {
            LoadStatus::Empty
        } else {
            LoadStatus::Ready
        };

        let mut published = None;
        self.state.send_if_modified(|state| {
            if state.sequence != sequence {
                return false;
            }
            let next = Arc::new(CatalogState {
                filters,
                page: games.page,
                status,
                games,
                hero: state.hero.clone(),
                sequence,
            });
            published = Some(Arc::clone(&next));
            *state = next;
            true
        });

        if published.is_none() {
            log::debug!("Discarding stale response of catalog request #{sequence}");
        }

        published
    }
}

impl<R> Drop for Catalog<R> {
    fn drop(&mut self) {
        if let Some(task) = lock(&self.in_flight).task.take() {
            task.abort();
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

/// Draws a hero from a random early page of high-score games, falling back
/// to a fixed record when nothing usable comes back.
pub async fn pick_hero<R>(repo: &R) -> GameSummary
where
    R: GameReader + ?Sized,
{
    let page = rand::rng().random_range(1..=HERO_MAX_PAGE);

    let pool = match repo.list_games(&encode_hero(page)).await {
        Ok(pool) => pool,
        Err(err) => {
            log::error!("Failed to fetch hero pool: {err}");
            return fallback_hero();
        }
    };

    let picked = {
        let mut rng = rand::rng();
        pool.items.choose(&mut rng).cloned()
    };

    picked.unwrap_or_else(|| {
        log::warn!("Hero pool page {page} is empty, using the fallback hero");
        fallback_hero()
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::game::{GameDetail, ResultPage};
    use crate::domain::types::{GameId, Score};
    use crate::encoder::PageRequest;
    use crate::pagination::MAX_TOTAL_PAGES;
    use crate::repository::errors::{RepositoryError, RepositoryResult};

    fn game(id: u64, name: &str, score: u32) -> GameSummary {
        GameSummary {
            id: GameId::new(id).unwrap(),
            name: name.to_string(),
            score: Some(Score::new(score).unwrap()),
            image_url: None,
        }
    }

    #[derive(Default)]
    struct FakeRepo {
        delays: HashMap<usize, Duration>,
        total_count: usize,
        hero_pool: Vec<GameSummary>,
        fail_hero: bool,
        fail_list: bool,
        requests: Mutex<Vec<PageRequest>>,
    }

    impl FakeRepo {
        fn new() -> Self {
            Self {
                total_count: 42,
                ..Self::default()
            }
        }

        fn requests(&self) -> Vec<PageRequest> {
            self.requests.lock().unwrap().clone()
        }

        fn list_requests(&self) -> Vec<PageRequest> {
            self.requests()
                .into_iter()
                .filter(|r| r.param("metacritic").is_none())
                .collect()
        }
    }

    #[async_trait]
    impl GameReader for FakeRepo {
        async fn list_games(&self, request: &PageRequest) -> RepositoryResult<ResultPage> {
            self.requests.lock().unwrap().push(request.clone());

            if request.param("metacritic").is_some() {
                if self.fail_hero {
                    return Err(RepositoryError::Transport("connection reset".into()));
                }
                return Ok(ResultPage {
                    items: self.hero_pool.clone(),
                    total_count: self.hero_pool.len(),
                });
            }

            if let Some(delay) = self.delays.get(&request.page) {
                tokio::time::sleep(*delay).await;
            }
            if self.fail_list {
                return Err(RepositoryError::Status(502));
            }

            let page = request.page as u64;
            Ok(ResultPage {
                items: vec![
                    game(page * 10 + 1, &format!("Page {page} game"), 90),
                    game(page * 10 + 2, &format!("Page {page} other"), 70),
                ],
                total_count: self.total_count,
            })
        }

        async fn get_game(&self, _id: GameId) -> RepositoryResult<Option<GameDetail>> {
            Ok(None)
        }

        async fn list_screenshots(&self, _id: GameId) -> RepositoryResult<Vec<String>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn page_two_by_release_date_reports_three_pages() {
        let repo = Arc::new(FakeRepo::new());
        let filters = FilterSet {
            ordering: Ordering::MostRecent,
            ..FilterSet::default()
        };
        let catalog = Catalog::with_state(Arc::clone(&repo), filters, 2);

        let state = catalog.mount().await;

        assert_eq!(state.status, LoadStatus::Ready);
        assert_eq!(state.page, 2);
        assert_eq!(state.games.total_pages, 3);
        assert_eq!(state.games.pages, vec![Some(1), Some(2), Some(3)]);

        let requests = repo.list_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].query_pairs(),
            vec![
                ("ordering", "-released".to_string()),
                ("page_size", "15".to_string()),
                ("page", "2".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn newer_request_wins_over_slower_older_one() {
        let mut repo = FakeRepo::new();
        repo.delays.insert(2, Duration::from_millis(200));
        let catalog = Catalog::new(Arc::new(repo));

        let (older, newer) = tokio::join!(catalog.go_to_page(2), catalog.go_to_page(3));

        assert!(older.is_none());
        let newer = newer.expect("latest request is published");
        assert_eq!(newer.page, 3);

        let state = catalog.snapshot();
        assert_eq!(state.page, 3);
        assert_eq!(state.games.items[0].name, "Page 3 game");
        assert_eq!(state.sequence, 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_requests_publish_only_the_latest() {
        let mut repo = FakeRepo::new();
        repo.delays.insert(2, Duration::from_millis(5));
        repo.delays.insert(3, Duration::from_millis(5));
        let repo = Arc::new(repo);

        for _ in 0..200 {
            let catalog = Arc::new(Catalog::new(Arc::clone(&repo)));

            let first = tokio::spawn({
                let catalog = Arc::clone(&catalog);
                async move { catalog.go_to_page(2).await }
            });
            let second = tokio::spawn({
                let catalog = Arc::clone(&catalog);
                async move { catalog.go_to_page(3).await }
            });
            let results = [first.await.unwrap(), second.await.unwrap()];

            let published: Vec<_> = results.iter().flatten().collect();
            assert!(!published.is_empty(), "one request must be published");

            let state = catalog.snapshot();
            assert_eq!(state.status, LoadStatus::Ready);
            assert_eq!(state.sequence, 2);
            let latest = published
                .iter()
                .max_by_key(|state| state.sequence)
                .unwrap();
            assert_eq!(latest.sequence, 2);
            assert_eq!(state.page, latest.page);
            assert_eq!(
                state.games.items[0].name,
                format!("Page {} game", state.page)
            );
        }
    }

    #[tokio::test]
    async fn dropping_catalog_aborts_in_flight_request() {
        let mut repo = FakeRepo::new();
        repo.delays.insert(2, Duration::from_secs(30));
        let catalog = Catalog::new(Arc::new(repo));

        let load = catalog.go_to_page(2);
        let timed_out = tokio::time::timeout(Duration::from_millis(20), load).await;
        assert!(timed_out.is_err());

        let task = lock(&catalog.in_flight)
            .task
            .clone()
            .expect("request is in flight");
        assert!(!task.is_finished());

        drop(catalog);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(task.is_finished());
    }

    #[tokio::test]
    async fn apply_filters_resets_to_first_page() {
        let repo = Arc::new(FakeRepo::new());
        let catalog = Catalog::new(Arc::clone(&repo));
        catalog.go_to_page(3).await.unwrap();

        let filters = FilterSet {
            search_text: "page".to_string(),
            platform_label: "PS4".to_string(),
            ..FilterSet::default()
        };
        let state = catalog.apply_filters(filters.clone()).await.unwrap();

        assert_eq!(state.page, 1);
        assert_eq!(state.filters, filters);
        let last = repo.list_requests().pop().unwrap();
        assert_eq!(last.page, 1);
        assert_eq!(last.param("platforms"), Some("18"));
    }

    #[tokio::test]
    async fn set_ordering_keeps_filters_and_resets_page() {
        let repo = Arc::new(FakeRepo::new());
        let filters = FilterSet {
            tag_slug: "anime".to_string(),
            ..FilterSet::default()
        };
        let catalog = Catalog::with_state(Arc::clone(&repo), filters, 3);
        catalog.mount().await;

        let state = catalog.set_ordering(Ordering::Alphabetical).await.unwrap();

        assert_eq!(state.page, 1);
        assert_eq!(state.filters.tag_slug, "anime");
        assert_eq!(state.filters.ordering, Ordering::Alphabetical);
        let last = repo.list_requests().pop().unwrap();
        assert_eq!(last.ordering, Ordering::Alphabetical);
    }

    #[tokio::test]
    async fn local_filters_apply_to_fetched_page() {
        let repo = Arc::new(FakeRepo::new());
        let catalog = Catalog::new(repo);

        let filters = FilterSet {
            min_score: "80".to_string(),
            ..FilterSet::default()
        };
        let state = catalog.apply_filters(filters).await.unwrap();

        assert_eq!(state.games.items.len(), 1);
        assert_eq!(state.games.items[0].name, "Page 1 game");
    }

    #[tokio::test]
    async fn list_failure_is_shown_as_empty() {
        let repo = FakeRepo {
            fail_list: true,
            ..FakeRepo::new()
        };
        let catalog = Catalog::new(Arc::new(repo));

        let state = catalog.go_to_page(2).await.unwrap();

        assert_eq!(state.status, LoadStatus::Empty);
        assert!(state.games.items.is_empty());
        assert_eq!(state.games.total_pages, 0);
    }

    #[tokio::test]
    async fn total_pages_are_capped() {
        let repo = FakeRepo {
            total_count: 10_000_000,
            ..FakeRepo::new()
        };
        let catalog = Catalog::new(Arc::new(repo));

        let state = catalog.go_to_page(1).await.unwrap();

        assert_eq!(state.games.total_pages, MAX_TOTAL_PAGES);
    }

    #[tokio::test]
    async fn empty_hero_pool_uses_fallback() {
        let repo = Arc::new(FakeRepo::new());
        let catalog = Catalog::new(Arc::clone(&repo));

        let state = catalog.mount().await;

        assert_eq!(state.hero, Some(fallback_hero()));
        let hero_request = repo
            .requests()
            .into_iter()
            .find(|r| r.param("metacritic").is_some())
            .unwrap();
        assert!((1..=HERO_MAX_PAGE).contains(&hero_request.page));
    }

    #[tokio::test]
    async fn failed_hero_fetch_uses_fallback() {
        let repo = FakeRepo {
            fail_hero: true,
            ..FakeRepo::new()
        };

        assert_eq!(pick_hero(&repo).await, fallback_hero());
    }

    #[tokio::test]
    async fn hero_is_drawn_from_pool() {
        let pool = vec![game(7, "Portal 2", 95), game(8, "Half-Life 2", 96)];
        let repo = FakeRepo {
            hero_pool: pool.clone(),
            ..FakeRepo::new()
        };
        let catalog = Catalog::new(Arc::new(repo));

        let hero = catalog.load_hero().await;

        assert!(pool.contains(&hero));
        assert_eq!(catalog.snapshot().hero, Some(hero));
    }

    #[tokio::test]
    async fn subscribers_see_published_snapshots() {
        let catalog = Catalog::new(Arc::new(FakeRepo::new()));
        let mut receiver = catalog.subscribe();

        catalog.go_to_page(2).await.unwrap();

        assert!(receiver.has_changed().unwrap());
        let state = receiver.borrow_and_update().clone();
        assert_eq!(state.page, 2);
        assert_eq!(state.status, LoadStatus::Ready);
    }
}
