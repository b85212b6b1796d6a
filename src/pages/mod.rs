//! Pages
//!
//! One component per route. List pages share the [`LoadState`] lifecycle:
//! the initial fetch runs on mount and a failure replaces the page with an
//! [`ErrorPanel`](crate::components::ErrorPanel).

mod available_stages;
mod landing;
mod login;
mod not_found;
mod observations;
mod owned_stages;
mod project_form;
mod review_projects;
mod stats;

pub use available_stages::AvailableStagesPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use observations::ObservationsPage;
pub use owned_stages::OwnedStagesPage;
pub use project_form::ProjectFormPage;
pub use review_projects::ReviewProjectsPage;
pub use stats::StatsPage;

use crate::error::ApiError;

/// Lifecycle of a page's initial fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(ApiError),
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::Ready(data),
            Err(e) => Self::Failed(e),
        }
    }

    /// Loaded data, for local updates after a mutation
    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }
}

const LOADING_TEXT: &str = "Cargando...";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiErrorKind;

    #[test]
    fn test_from_result() {
        assert_eq!(LoadState::from_result(Ok(3)), LoadState::Ready(3));
        let failed: LoadState<u32> = LoadState::from_result(Err(ApiError::from_status(404, None, false)));
        assert!(matches!(failed, LoadState::Failed(ref e) if e.kind == ApiErrorKind::NotFound));
    }

    #[test]
    fn test_ready_mut_only_when_ready() {
        let mut state = LoadState::Ready(vec![1, 2]);
        if let Some(list) = state.ready_mut() {
            list.retain(|n| *n != 1);
        }
        assert_eq!(state, LoadState::Ready(vec![2]));

        let mut loading: LoadState<Vec<u32>> = LoadState::Loading;
        assert!(loading.ready_mut().is_none());
    }
}
