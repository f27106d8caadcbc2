// Services layer: maps API requests onto storage rows and back

pub mod event;

pub use event::EventService;
