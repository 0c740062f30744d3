mod home;
pub use home::Home;

mod portal;
pub use portal::Portal;
