mod home;
pub use home::Home;

mod settings;
pub use settings::Settings;
