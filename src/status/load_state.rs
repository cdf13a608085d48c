use std::fmt::Display;

/// What a card should show about its data source, independent of the data itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Error(String),
    Ready,
}

/// Classify a fetch from its loading flag and optional error.
/// Loading wins over an error left behind by a previous attempt.
pub fn classify_load<E: Display>(loading: bool, error: Option<&E>) -> LoadStatus {
    if loading {
        return LoadStatus::Loading;
    }

    match error {
        Some(e) => LoadStatus::Error(e.to_string()),
        None => LoadStatus::Ready,
    }
}

/// State of one asynchronous fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Error(String),
    Ready(T),
}

impl<T: Clone> FetchState<T> {
    /// Build from the slot of a resource: `None` while the future is still pending
    pub fn from_result<E: Display>(slot: Option<&Result<T, E>>) -> Self {
        match slot {
            None => FetchState::Loading,
            Some(Err(e)) => FetchState::Error(e.to_string()),
            Some(Ok(data)) => FetchState::Ready(data.clone()),
        }
    }
}

impl<T> FetchState<T> {
    pub fn status(&self) -> LoadStatus {
        let error = match self {
            FetchState::Error(reason) => Some(reason),
            _ => None,
        };
        classify_load(matches!(self, FetchState::Loading), error)
    }

    /// The fetched data, absent while loading or after a failure
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> FetchState<Vec<T>> {
    pub fn items(&self) -> Option<&[T]> {
        self.data().map(Vec::as_slice)
    }
}
