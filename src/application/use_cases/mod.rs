/// Use cases module containing application business logic orchestration
mod search_releases;

pub use search_releases::SearchReleasesUseCase;
