pub mod chat_repo;
pub mod checklist_repo;
pub mod checkpoint_repo;
pub mod comment_repo;
pub mod diary_repo;
pub mod favorite_repo;
pub mod itinerary_repo;
pub mod notification_repo;
pub mod participant_repo;
pub mod place_repo;
pub mod review_repo;
pub mod tag_repo;
pub mod token_repo;
pub mod trip_repo;
pub mod user_repo;

pub use chat_repo::ChatRepo;
pub use checklist_repo::ChecklistRepo;
pub use checkpoint_repo::CheckpointRepo;
pub use comment_repo::CommentRepo;
pub use diary_repo::DiaryRepo;
pub use favorite_repo::FavoriteRepo;
pub use itinerary_repo::ItineraryRepo;
pub use notification_repo::NotificationRepo;
pub use participant_repo::ParticipantRepo;
pub use place_repo::PlaceRepo;
pub use review_repo::ReviewRepo;
pub use tag_repo::TagRepo;
pub use token_repo::AccessTokenRepo;
pub use trip_repo::TripRepo;
pub use user_repo::UserRepo;
