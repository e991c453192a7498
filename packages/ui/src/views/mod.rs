mod home;
pub use home::HomeView;

mod settings;
pub use settings::SettingsView;
