pub mod chat;
pub mod checklist;
pub mod checkpoint;
pub mod comment;
pub mod diary;
pub mod favorite;
pub mod itinerary;
pub mod notification;
pub mod participant;
pub mod place;
pub mod review;
pub mod tag;
pub mod token;
pub mod trip;
pub mod user;
